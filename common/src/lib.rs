//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有される型とギャラリーのビューモデル

pub mod types;
pub mod error;
pub mod catalog;
pub mod filter_bus;
pub mod gallery;
pub mod skills;

pub use types::{Project, ProjectId, Filter, FilterOption, ALL_TOKEN};
pub use error::{Error, Result};
pub use catalog::Catalog;
pub use filter_bus::{FilterBus, Subscription};
pub use gallery::{GalleryState, compute_visible_projects, filter_options};
pub use skills::{Skill, builtin_skills, skill_filter};
