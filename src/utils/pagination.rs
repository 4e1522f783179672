//! Fixed-size, 1-based pagination over an already ordered result set.

use std::num::IntErrorKind;

pub const QUESTIONS_PER_PAGE: usize = 10;

pub const DEFAULT_PAGE: i64 = 1;

/// Reads a `page` query value. Anything that is not an integer falls back to
/// the first page; integers too large for `i64` saturate, so they still name
/// a page past the end.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(value) = raw else {
        return DEFAULT_PAGE;
    };
    match value.trim().parse::<i64>() {
        Ok(page) => page,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => DEFAULT_PAGE,
        },
    }
}

/// Returns the items of `page`, or nothing when the page lies outside the
/// sequence. Page numbers below 1 are outside every sequence.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));
    match start {
        Some(start) if start < items.len() => items
            .into_iter()
            .skip(start)
            .take(QUESTIONS_PER_PAGE)
            .collect(),
        _ => Vec::new(),
    }
}
