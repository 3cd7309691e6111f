use thiserror::Error;

/// Structural mismatch between the left and right documents.
///
/// `path` names the first offending location inside the left operand, using
/// dotted keys and bracketed indices (`a.b.[2].c`). The root is the empty
/// path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("LJSON.{path} not match RJSON.{path}")]
pub struct Mismatch {
    path: String,
}

impl Mismatch {
    pub fn at(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid compare options: {0}")]
    Invalid(#[from] serde_json::Error),
}
