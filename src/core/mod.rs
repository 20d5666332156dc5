pub mod dispatch;
pub mod notebook;
pub mod scanner;

pub use crate::domain::model::{Classification, Finding, Keyword, KeywordRule, Match};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
