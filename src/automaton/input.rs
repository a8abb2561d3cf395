//! Input sanitizing

/// Longest input the automaton accepts
pub const MAX_LENGTH: usize = 7;

/// Lowercase `raw` and drop everything outside `a..=z`.
///
/// The result is not length-checked; callers decide whether an over-long
/// value is truncated or ignored.
pub fn filter_input(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Filter `raw` and return it only if it fits within [`MAX_LENGTH`]
pub fn sanitize_input(raw: &str) -> Option<String> {
    let value = filter_input(raw);
    (value.len() <= MAX_LENGTH).then_some(value)
}
