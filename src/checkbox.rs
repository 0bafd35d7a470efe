//! Bulk Checkbox Toggle
//!
//! A "select all" box that copies its checked state to every checkbox on the page.

use crate::page::{Page, PageElement};

/// Set every checkbox on the page to `checked`. Returns how many were set.
pub fn check_all<P: Page>(page: &P, checked: bool) -> usize {
    let mut count = 0;
    for input in page.inputs() {
        if input.input_type().as_deref() == Some("checkbox") {
            input.set_checked(checked);
            count += 1;
        }
    }
    log::debug!("set {} checkboxes to {}", count, checked);
    count
}

/// `checkAll(box)` entry: mirror the trigger box's own state
pub fn check_all_from<P: Page>(page: &P, trigger: &P::Element) -> usize {
    check_all(page, trigger.is_checked())
}
