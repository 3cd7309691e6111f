//! Arrays made only of primitives (Bool, Number, String).

use std::collections::HashMap;

use crate::error::Mismatch;
use crate::value::Value;

/// Hashable form of a primitive value.
///
/// Numbers compare by their IEEE-754 bits, with `-0.0` folded into `0.0` so
/// that key equality agrees with `==` on every non-NaN number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKey<'a> {
    Bool(bool),
    Number(u64),
    String(&'a str),
}

impl<'a> PrimitiveKey<'a> {
    pub fn number(n: f64) -> Self {
        let n = if n == 0.0 { 0.0 } else { n };
        Self::Number(n.to_bits())
    }

    /// Returns `None` for Null, Array and Object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => Some(Self::number(*n)),
            Value::String(s) => Some(Self::String(s)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Multiset view of a primitive array.
pub type CardinalityMap<'a> = HashMap<PrimitiveKey<'a>, usize>;

/// Whether every item is primitive. Null does not count as primitive.
pub fn primitive_only(items: &[Value]) -> bool {
    items.iter().all(Value::is_primitive)
}

/// Counts occurrences of each primitive. Non-primitive items are ignored.
pub fn cardinality_map(items: &[Value]) -> CardinalityMap<'_> {
    let mut map = CardinalityMap::with_capacity(items.len());
    for key in items.iter().filter_map(PrimitiveKey::from_value) {
        *map.entry(key).or_insert(0) += 1;
    }
    map
}

/// Element-wise comparison. A mismatch names the array, not the element.
pub fn compare_ordered(la: &[Value], ra: &[Value], path: &str) -> Result<(), Mismatch> {
    if la.len() != ra.len() || la.iter().zip(ra).any(|(l, r)| l != r) {
        return Err(Mismatch::at(path));
    }
    Ok(())
}

/// Multiset comparison through cardinality maps.
///
/// NaN never equals anything, itself included, so an array holding a NaN on
/// either side never matches.
pub fn compare_unordered(la: &[Value], ra: &[Value], path: &str) -> Result<(), Mismatch> {
    if has_nan(la) || has_nan(ra) {
        return Err(Mismatch::at(path));
    }

    let left = cardinality_map(la);
    let right = cardinality_map(ra);
    if left.len() != right.len() {
        return Err(Mismatch::at(path));
    }
    for (key, count) in &left {
        if right.get(key) != Some(count) {
            return Err(Mismatch::at(path));
        }
    }
    Ok(())
}

fn has_nan(items: &[Value]) -> bool {
    items
        .iter()
        .any(|v| matches!(v, Value::Number(n) if n.is_nan()))
}
