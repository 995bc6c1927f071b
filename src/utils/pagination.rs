// src/utils/pagination.rs

use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` query parameter. Kept as a raw string so that junk falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

/// Missing or non-integer pages mean page 1. Zero and negatives are passed through
/// so that `paginate` can report them as empty.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}

/// Returns the 1-indexed `page` of `items`.
/// An empty result means the page does not exist and callers answer 404.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(QUESTIONS_PER_PAGE);

    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}
