//! Page slicing for question listings
//!
//! Listings are served in fixed-size pages addressed by 1-based index.
//! Out-of-range pages yield an empty slice, never an error.

/// Fixed page size for every question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return the 1-based `page` of `items`, `page_size` entries per page
///
/// `start = (page - 1) * page_size`, `end = start + page_size`, both
/// clamped to the sequence length. Pure and borrow-only; the caller
/// passes a pre-ordered sequence (canonically ascending id) and ordering
/// is preserved.
///
/// Callers pass `page >= 1`; the HTTP boundary rejects zero and
/// non-integer page values before this function is reached.
pub fn paginate<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let start = (page as usize)
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
