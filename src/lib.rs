pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::DispatchArgs;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::ScanConfig;
pub use crate::core::{
    dispatch::{classify, dispatch},
    notebook::{convert_notebook, Notebook},
    scanner::KeywordScanner,
};
pub use domain::model::{Classification, Finding, Keyword, KeywordRule, Match};
pub use utils::error::{DetectError, Result};
