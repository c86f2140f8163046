use clap::Parser;
use portfolio::{cli, config, error, render, source};
use cli::{Cli, Commands};
use config::Config;
use error::{PortfolioError, Result};
use portfolio_common::{Catalog, GalleryState, Project};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // check/export は設定を読まない
    match cli.command {
        Commands::List { filter, catalog, json } => {
            let config = Config::load()?;
            let catalog = source::resolve_catalog(catalog.as_deref(), &config)?;
            let mut gallery = GalleryState::new(&catalog);
            gallery.set_filter(filter.as_deref().unwrap_or(&config.default_filter));

            if json {
                let visible: Vec<&Project> = gallery.visible().collect();
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print!("{}", render::render_list(&gallery));
            }
        }

        Commands::Categories { catalog } => {
            let config = Config::load()?;
            let catalog = source::resolve_catalog(catalog.as_deref(), &config)?;
            let gallery = GalleryState::new(&catalog);
            print!(
                "{}",
                render::render_categories(&gallery.filter_options(), &config.default_filter)
            );
        }

        Commands::Show { id, catalog } => {
            let config = Config::load()?;
            let catalog = source::resolve_catalog(catalog.as_deref(), &config)?;
            let mut gallery = GalleryState::new(&catalog);
            gallery.select_project(Some(id));
            let project = gallery.selected().ok_or(PortfolioError::ProjectNotFound(id))?;
            print!("{}", render::render_detail(project));
        }

        Commands::Check { path } => {
            let catalog = source::check_catalog(&path)?;
            print!("{}", render::render_check_summary(&catalog));
        }

        Commands::Export { output } => {
            let json = Catalog::builtin().to_json_pretty()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ カタログを書き出しました: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Config { set_catalog, set_filter, show } => {
            let mut config = Config::load()?;
            let changed = set_catalog.is_some() || set_filter.is_some();

            if let Some(path) = set_catalog {
                config.catalog = Some(path);
            }
            if let Some(filter) = set_filter {
                config.default_filter = filter;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!(
                    "  カタログ: {}",
                    config
                        .catalog
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!("  既定フィルタ: {}", config.default_filter);
            }
        }
    }

    Ok(())
}
