//! Portfolio CLI
//!
//! 組み込み/JSONカタログをギャラリーと同じビューモデルで絞り込み・表示する。

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod source;
