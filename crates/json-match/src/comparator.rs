//! Top-level comparator.

use crate::array::compare_arrays;
use crate::error::Mismatch;
use crate::object::compare_objects;
use crate::options::CompareOptions;
use crate::trace::{NodeResult, TraceCallback, TraceContext};
use crate::value::Value;

/// Deepest nesting level the comparator descends into. Anything deeper is
/// reported as a [`Mismatch`] at the path where the limit was crossed, unless
/// `skip_depth_greater` already treats that level as equal.
pub const MAX_DEPTH: usize = 256;

/// Structural equality checker for decoded JSON values.
///
/// A comparator only holds its [`CompareOptions`]; it can be shared freely
/// between threads.
///
/// ```
/// use json_match::{CompareOptions, Comparator, Value};
/// use serde_json::json;
///
/// let cmp = Comparator::new(CompareOptions::new().with_ignore_array_order(true));
/// let left = Value::from(json!({"a": [3, 2, 1], "b": {"c": "x"}}));
/// let right = Value::from(json!({"b": {"c": "x"}, "a": [1, 2, 3]}));
/// assert!(cmp.compare(&left, &right).is_ok());
///
/// let right = Value::from(json!({"b": {"c": "y"}, "a": [1, 2, 3]}));
/// let err = cmp.compare(&left, &right).unwrap_err();
/// assert_eq!(err.to_string(), "LJSON.b.c not match RJSON.b.c");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparator {
    options: CompareOptions,
}

impl Comparator {
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compares two documents. `Ok(())` means equal under the configured
    /// policy; otherwise the error carries the path of the first mismatch
    /// found in `left`.
    pub fn compare(&self, left: &Value, right: &Value) -> Result<(), Mismatch> {
        Walk::new(self.options, None).cmp(left, right, "", 1)
    }

    pub fn equals(&self, left: &Value, right: &Value) -> bool {
        self.compare(left, right).is_ok()
    }

    /// Same as [`compare`](Self::compare), reporting every decided node to
    /// `trace`.
    pub fn compare_traced(
        &self,
        left: &Value,
        right: &Value,
        trace: TraceCallback<'_>,
    ) -> Result<(), Mismatch> {
        Walk::new(self.options, Some(trace)).cmp(left, right, "", 1)
    }
}

/// Compares `left` and `right` once with `options`.
pub fn compare(left: &Value, right: &Value, options: CompareOptions) -> Result<(), Mismatch> {
    Comparator::new(options).compare(left, right)
}

/// State of one comparison call.
pub(crate) struct Walk<'c> {
    options: CompareOptions,
    trace: Option<TraceCallback<'c>>,
    candidates: usize,
}

impl<'c> Walk<'c> {
    fn new(options: CompareOptions, trace: Option<TraceCallback<'c>>) -> Self {
        Self {
            options,
            trace,
            candidates: 0,
        }
    }

    pub(crate) fn options(&self) -> &CompareOptions {
        &self.options
    }

    pub(crate) fn cmp(
        &mut self,
        left: &Value,
        right: &Value,
        path: &str,
        depth: usize,
    ) -> Result<(), Mismatch> {
        if self.options.is_cut_off(depth) {
            self.emit(left, path, depth, NodeResult::Skipped);
            return Ok(());
        }
        if depth > MAX_DEPTH {
            self.emit(left, path, depth, NodeResult::Mismatch);
            return Err(Mismatch::at(path));
        }
        let result = self.dispatch(left, right, path, depth);
        self.emit(left, path, depth, NodeResult::from(&result));
        result
    }

    /// Runs `cmp` for a candidate pair whose failure is not reportable.
    pub(crate) fn try_match(
        &mut self,
        left: &Value,
        right: &Value,
        path: &str,
        depth: usize,
    ) -> bool {
        self.candidates += 1;
        let equal = self.cmp(left, right, path, depth).is_ok();
        self.candidates -= 1;
        equal
    }

    fn dispatch(
        &mut self,
        left: &Value,
        right: &Value,
        path: &str,
        depth: usize,
    ) -> Result<(), Mismatch> {
        let equal = match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Array(l), Value::Array(r)) => {
                return compare_arrays(self, l, r, path, depth);
            }
            (Value::Object(l), Value::Object(r)) => {
                return compare_objects(self, l, r, path, depth);
            }
            _ => false,
        };
        if equal {
            Ok(())
        } else {
            Err(Mismatch::at(path))
        }
    }

    fn emit(&mut self, left: &Value, path: &str, depth: usize, result: NodeResult) {
        let candidate = self.candidates > 0;
        if let Some(trace) = self.trace.as_mut() {
            trace(TraceContext {
                path,
                depth,
                tag: left.tag(),
                result,
                candidate,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn scalars_compare_by_value() {
        let cmp = Comparator::default();
        assert!(cmp.equals(&v(json!(null)), &v(json!(null))));
        assert!(cmp.equals(&v(json!(1)), &v(json!(1.0))));
        assert!(cmp.equals(&v(json!("1")), &v(json!("1"))));
        assert_eq!(
            cmp.compare(&v(json!(1)), &v(json!(2))),
            Err(Mismatch::at(""))
        );
    }

    #[test]
    fn different_tags_never_match() {
        let cmp = Comparator::default();
        assert!(!cmp.equals(&v(json!(1)), &v(json!("1"))));
        assert!(!cmp.equals(&v(json!(null)), &v(json!(false))));
        assert!(!cmp.equals(&v(json!([])), &v(json!({}))));
    }

    #[test]
    fn cutoff_applies_at_root() {
        let cmp = Comparator::new(CompareOptions::new().with_skip_depth_greater(1));
        assert!(cmp.equals(&v(json!({"a": 1})), &v(json!({"a": 2}))));
        assert!(!cmp.equals(&v(json!({"a": 1})), &v(json!({"b": 1}))));
    }

    #[test]
    fn trace_reports_nodes_and_candidates() {
        let cmp = Comparator::new(CompareOptions::new().with_ignore_array_order(true));
        let left = v(json!({"a": [{"x": 1}, {"x": 2}]}));
        let right = v(json!({"a": [{"x": 2}, {"x": 1}]}));

        let mut seen = Vec::new();
        let result = cmp.compare_traced(&left, &right, &mut |ctx| {
            seen.push((ctx.path.to_string(), ctx.depth, ctx.result, ctx.candidate));
        });
        assert_eq!(result, Ok(()));

        assert_eq!(
            seen.last(),
            Some(&(String::new(), 1, NodeResult::Equal, false))
        );
        assert!(seen.contains(&("a".to_string(), 2, NodeResult::Equal, false)));
        assert!(seen.contains(&("a.[0]".to_string(), 3, NodeResult::Mismatch, true)));
        assert!(seen.contains(&("a.[0]".to_string(), 3, NodeResult::Equal, true)));
        assert!(seen.contains(&("a.[1].x".to_string(), 4, NodeResult::Equal, true)));
    }

    #[test]
    fn trace_marks_skipped_nodes() {
        let cmp = Comparator::new(CompareOptions::new().with_skip_depth_greater(1));
        let mut seen = Vec::new();
        cmp.compare_traced(&v(json!({"a": 1})), &v(json!({"a": 2})), &mut |ctx| {
            seen.push((ctx.path.to_string(), ctx.result));
        })
        .unwrap();
        assert_eq!(
            seen,
            vec![
                ("a".to_string(), NodeResult::Skipped),
                (String::new(), NodeResult::Equal),
            ]
        );
    }

    #[test]
    fn nesting_past_the_limit_reports_where_it_was_crossed() {
        let mut left = v(json!({"k": null}));
        let mut right = v(json!({"k": null}));
        for _ in 1..MAX_DEPTH {
            left = Value::Object(crate::Map::from_iter([("k".to_string(), left)]));
            right = Value::Object(crate::Map::from_iter([("k".to_string(), right)]));
        }
        // `null` sits at depth MAX_DEPTH + 1.
        let err = Comparator::default().compare(&left, &right).unwrap_err();
        assert_eq!(err.path(), vec!["k"; MAX_DEPTH].join("."));

        let mut seen = Vec::new();
        let cutoff = Comparator::new(CompareOptions::new().with_skip_depth_greater(MAX_DEPTH));
        cutoff
            .compare_traced(&left, &right, &mut |ctx| {
                if ctx.depth > MAX_DEPTH {
                    seen.push(ctx.result);
                }
            })
            .unwrap();
        assert_eq!(seen, vec![NodeResult::Skipped]);
    }

    #[test]
    fn comparator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Comparator>();
    }
}
