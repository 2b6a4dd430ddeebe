// src/utils/pagination.rs

use serde::Deserialize;

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` query parameter.
///
/// Kept as raw text so that a non-numeric value falls back to the first
/// page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// 1-based page number; absent or non-numeric values mean page 1.
    pub fn number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Returns the `page`-th slice of `items`, at most [`QUESTIONS_PER_PAGE`] long.
///
/// Out-of-range pages, including pages below 1, yield an empty vector.
pub fn paginate<T: Clone>(page: i64, items: &[T]) -> Vec<T> {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };

    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[rstest]
    #[case(1, 25, 0..10)]
    #[case(2, 25, 10..20)]
    #[case(3, 25, 20..25)]
    #[case(4, 25, 0..0)]
    #[case(1, 0, 0..0)]
    #[case(1, 7, 0..7)]
    #[case(0, 25, 0..0)]
    #[case(-3, 25, 0..0)]
    fn slices_the_requested_page(
        #[case] page: i64,
        #[case] len: usize,
        #[case] expected: std::ops::Range<usize>,
    ) {
        assert_eq!(paginate(page, &items(len)), expected.collect::<Vec<_>>());
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        assert!(paginate(i64::MAX, &items(30)).is_empty());
    }

    #[test]
    fn never_exceeds_page_size() {
        let all = items(137);
        for page in 1..=20 {
            let slice = paginate(page, &all);
            assert!(slice.len() <= QUESTIONS_PER_PAGE);
            let start = ((page - 1) as usize * QUESTIONS_PER_PAGE).min(all.len());
            let end = (start + QUESTIONS_PER_PAGE).min(all.len());
            assert_eq!(slice, all[start..end].to_vec());
        }
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some("2"), 2)]
    #[case(Some("abc"), 1)]
    #[case(Some(""), 1)]
    #[case(Some("-4"), -4)]
    fn page_number_defaults_to_one(#[case] raw: Option<&str>, #[case] expected: i64) {
        let params = PageParams {
            page: raw.map(str::to_string),
        };
        assert_eq!(params.number(), expected);
    }
}
