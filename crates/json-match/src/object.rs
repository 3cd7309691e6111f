use crate::comparator::Walk;
use crate::error::Mismatch;
use crate::path::append_step;
use crate::value::Map;

/// Key sets must be equal before any value is compared. With equal sizes,
/// checking that every left key exists on the right is enough to rule out
/// right-only keys.
pub(crate) fn compare_objects(
    walk: &mut Walk<'_>,
    lo: &Map,
    ro: &Map,
    path: &str,
    depth: usize,
) -> Result<(), Mismatch> {
    if lo.len() != ro.len() {
        return Err(Mismatch::at(path));
    }
    if let Some(missing) = lo.keys().find(|key| !ro.contains_key(key.as_str())) {
        return Err(Mismatch::at(append_step(path, missing)));
    }

    for (key, lv) in lo {
        let step = append_step(path, key);
        let Some(rv) = ro.get(key) else {
            return Err(Mismatch::at(step));
        };
        walk.cmp(lv, rv, &step, depth + 1)?;
    }
    Ok(())
}
