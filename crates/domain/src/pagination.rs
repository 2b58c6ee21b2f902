//! Pagination translation.
//!
//! Page-selection widgets report zero-indexed selections while the remote
//! API numbers its pages from one. These functions convert between the two
//! and derive the page count from a total record count.

/// The first page served by the remote API.
pub const FIRST_PAGE: u32 = 1;

/// Converts a zero-indexed UI selection into the API's one-indexed page.
///
/// Saturates at `u32::MAX`.
#[must_use]
pub const fn to_api_page(ui_selection: u32) -> u32 {
    ui_selection.saturating_add(1)
}

/// Converts a one-indexed API page into the zero-indexed UI selection.
///
/// A page of 0 is outside the API's domain and maps to the first selection.
#[must_use]
pub const fn to_ui_selection(api_page: u32) -> u32 {
    api_page.saturating_sub(1)
}

/// Returns `ceil(total_count / page_size)`.
///
/// A zero page size yields zero pages.
#[must_use]
pub const fn page_count(total_count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size as u64)
}
