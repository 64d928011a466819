pub mod convert;
pub mod error;
pub mod output;
pub mod parser;
pub mod paths;
pub mod translate;

pub use convert::{run, ConversionReport, DocumentKind, Outcome, RunOptions};
pub use error::{Result, SkipReason, TranslateError};
pub use paths::TranslatePaths;
