//! Comparison tracing.

use crate::error::Mismatch;
use crate::value::Tag;

/// Outcome recorded for one visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeResult {
    Equal,
    Mismatch,
    /// The node sits beyond `skip_depth_greater` and was not inspected.
    Skipped,
}

impl From<&Result<(), Mismatch>> for NodeResult {
    fn from(value: &Result<(), Mismatch>) -> Self {
        match value {
            Ok(()) => Self::Equal,
            Err(_) => Self::Mismatch,
        }
    }
}

/// Information handed to a [`TraceCallback`] for each node the comparator
/// visits, after the node has been decided.
#[derive(Debug, Clone)]
pub struct TraceContext<'a> {
    /// Dotted path of the node within the left document.
    pub path: &'a str,
    /// Nesting depth, 1 at the roots.
    pub depth: usize,
    /// Tag of the left operand.
    pub tag: Tag,
    pub result: NodeResult,
    /// `true` while an order-insensitive array is trying candidate pairs.
    /// Mismatches reported for a candidate are discarded by the matcher.
    pub candidate: bool,
}

/// Callback invoked for every decided node.
pub type TraceCallback<'a> = &'a mut dyn for<'t> FnMut(TraceContext<'t>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_maps_to_node_result() {
        assert_eq!(NodeResult::from(&Ok(())), NodeResult::Equal);
        assert_eq!(
            NodeResult::from(&Err(Mismatch::at("a"))),
            NodeResult::Mismatch
        );
    }
}
