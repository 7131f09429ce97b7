use std::io;

use thiserror::Error;

/// Error type for configuration loading and demo-runner IO failures.
///
/// The composition and rewriting core never fails; malformed input degrades to
/// defined defaults instead of surfacing here.
#[derive(Debug, Error)]
pub enum HelpshellError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
