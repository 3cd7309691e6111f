//! Dotted mismatch paths.
//!
//! Object keys are appended verbatim and array elements as `[i]`, joined with
//! `.`. Keys containing `.` or `[` are not escaped.

/// Appends one step to `path`. The root path is empty.
pub fn append_step(path: &str, step: &str) -> String {
    if path.is_empty() {
        return step.to_string();
    }
    let mut out = String::with_capacity(path.len() + step.len() + 1);
    out.push_str(path);
    out.push('.');
    out.push_str(step);
    out
}

/// Appends the bracketed index step `[index]` to `path`.
pub fn index_step(path: &str, index: usize) -> String {
    append_step(path, &format!("[{index}]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_to_root_and_nested() {
        assert_eq!(append_step("", "a"), "a");
        assert_eq!(append_step("b", "a"), "b.a");
    }

    #[test]
    fn index_steps_are_bracketed() {
        assert_eq!(index_step("", 0), "[0]");
        assert_eq!(index_step("a.b", 12), "a.b.[12]");
    }

    #[test]
    fn keys_are_not_escaped() {
        assert_eq!(append_step("a", "b.c"), "a.b.c");
        assert_eq!(append_step("a", "[0]"), "a.[0]");
        assert_eq!(append_step("a", ""), "a.");
    }
}
