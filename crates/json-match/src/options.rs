//! Comparison policy.

use serde::Deserialize;

use crate::error::OptionsError;

/// Policy applied by a [`Comparator`](crate::Comparator).
///
/// Only two options exist; configuration records naming anything else are
/// rejected when loaded through [`CompareOptions::from_json_str`] or
/// [`CompareOptions::from_json`].
///
/// ```
/// use json_match::CompareOptions;
///
/// let opts = CompareOptions::from_json_str(r#"{"ignore_array_order": true}"#).unwrap();
/// assert!(opts.ignore_array_order);
/// assert_eq!(opts.skip_depth_greater, 0);
///
/// assert!(CompareOptions::from_json_str(r#"{"tolerance": 0.1}"#).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    /// Compare arrays as multisets instead of sequences.
    pub ignore_array_order: bool,
    /// Treat every subtree deeper than this as equal. `0` disables the cutoff.
    /// The roots sit at depth 1.
    pub skip_depth_greater: usize,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_array_order(mut self, ignore: bool) -> Self {
        self.ignore_array_order = ignore;
        self
    }

    pub fn with_skip_depth_greater(mut self, depth: usize) -> Self {
        self.skip_depth_greater = depth;
        self
    }

    /// Loads options from a JSON object such as
    /// `{"ignore_array_order": true, "skip_depth_greater": 3}`.
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self, OptionsError> {
        Ok(Self::deserialize(value)?)
    }

    pub(crate) fn is_cut_off(&self, depth: usize) -> bool {
        self.skip_depth_greater > 0 && depth > self.skip_depth_greater
    }
}
