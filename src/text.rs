//! Text case transform.

/// Uppercase `input` unless `to_upper` is `Some(false)`, in which case lowercase it.
///
/// Lowercasing follows Unicode case mapping (`str::to_lowercase`), so final
/// sigma and similar context-sensitive mappings are handled.
pub fn format_text(input: &str, to_upper: Option<bool>) -> String {
    if to_upper.unwrap_or(true) {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}
