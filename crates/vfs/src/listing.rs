//! Column alignment and name ordering for `ls -al` style listings.

use std::cmp::Ordering;

/// Left-pad every value to the width of the widest one.
///
/// Width is counted in characters, not bytes.
pub fn left_pad_list<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let width = values
        .iter()
        .map(|v| v.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    values
        .iter()
        .map(|v| format!("{:>width$}", v.as_ref()))
        .collect()
}

/// Order names the way a browser's `localeCompare` does for plain ASCII
/// names under an English locale.
///
/// Case is ignored first, so `Blog` sorts next to `blog` instead of before
/// every lowercase name. On a case-insensitive tie the lowercase spelling
/// comes first; anything still equal falls back to code point order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| case_tiebreak(a, b))
        .then_with(|| a.cmp(b))
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
    }
    Ordering::Equal
}
