//! Array comparison.
//!
//! Arrays run at the depth of their own location; their elements are
//! compared one level deeper. Primitive-only arrays take the fast paths in
//! [`crate::primitive`], anything holding a Null, an Array or an Object is
//! compared recursively.

use crate::comparator::Walk;
use crate::error::Mismatch;
use crate::path::index_step;
use crate::primitive::{self, primitive_only};
use crate::value::Value;

pub(crate) fn compare_arrays(
    walk: &mut Walk<'_>,
    la: &[Value],
    ra: &[Value],
    path: &str,
    depth: usize,
) -> Result<(), Mismatch> {
    if la.len() != ra.len() {
        return Err(Mismatch::at(path));
    }
    if la.is_empty() {
        return Ok(());
    }

    let primitive = primitive_only(la);
    if primitive != primitive_only(ra) {
        return Err(Mismatch::at(path));
    }

    match (primitive, walk.options().ignore_array_order) {
        (true, false) => primitive::compare_ordered(la, ra, path),
        (true, true) => primitive::compare_unordered(la, ra, path),
        (false, false) => compare_ordered(walk, la, ra, path, depth),
        (false, true) => compare_unordered(walk, la, ra, path, depth),
    }
}

fn compare_ordered(
    walk: &mut Walk<'_>,
    la: &[Value],
    ra: &[Value],
    path: &str,
    depth: usize,
) -> Result<(), Mismatch> {
    for (i, (l, r)) in la.iter().zip(ra).enumerate() {
        let step = index_step(path, i);
        if l.tag() != r.tag() {
            return Err(Mismatch::at(step));
        }
        walk.cmp(l, r, &step, depth + 1)?;
    }
    Ok(())
}

/// First-fit one-to-one matching: each left element takes the lowest-index
/// unmatched right element it equals. No backtracking, so an earlier left
/// element can consume the only candidate a later one needed.
fn compare_unordered(
    walk: &mut Walk<'_>,
    la: &[Value],
    ra: &[Value],
    path: &str,
    depth: usize,
) -> Result<(), Mismatch> {
    let mut matched = vec![false; ra.len()];

    for (j, l) in la.iter().enumerate() {
        let step = index_step(path, j);
        let mut found = None;
        for (i, r) in ra.iter().enumerate() {
            if matched[i] || l.tag() != r.tag() {
                continue;
            }
            if walk.try_match(l, r, &step, depth + 1) {
                found = Some(i);
                break;
            }
        }
        match found {
            Some(i) => matched[i] = true,
            None => return Err(Mismatch::at(step)),
        }
    }
    Ok(())
}
