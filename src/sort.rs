//! Column Sorting
//!
//! Clicking a column header writes the column and the flipped order into
//! the search form's hidden fields and submits it.

use crate::config::{SortConfig, SortMarkers};
use crate::error::{Result, UiError};
use crate::page::{Page, PageElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Order encoded by a server marker, `None` for anything unrecognised
    pub fn from_marker(value: &str, markers: &SortMarkers) -> Option<Self> {
        if value == markers.asc {
            Some(Self::Asc)
        } else if value == markers.desc {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn marker<'a>(&self, markers: &'a SortMarkers) -> &'a str {
        match self {
            Self::Asc => &markers.asc,
            Self::Desc => &markers.desc,
        }
    }

    /// Order to request after `current`; anything but ascending becomes ascending
    pub fn after(current: Option<SortOrder>) -> Self {
        match current {
            Some(Self::Asc) => Self::Desc,
            Some(Self::Desc) | None => Self::Asc,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SortToggler {
    config: SortConfig,
}

impl SortToggler {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    fn require<P: Page>(&self, page: &P, id: &str) -> Result<P::Element> {
        page.element_by_id(id).ok_or_else(|| UiError::missing(id))
    }

    /// Sort by `column`, flipping the current order, then submit the search form.
    ///
    /// All three elements are resolved before anything is written, so a
    /// missing one leaves the form untouched.
    pub fn sort_by<P: Page>(&self, page: &P, column: &str) -> Result<SortOrder> {
        let column_field = self.require(page, &self.config.column_field_id)?;
        let order_field = self.require(page, &self.config.order_field_id)?;
        let form = self.require(page, &self.config.form_id)?;

        let markers = &self.config.markers;
        let current = SortOrder::from_marker(&order_field.value()?, markers);
        let next = SortOrder::after(current);

        column_field.set_value(column)?;
        order_field.set_value(next.marker(markers))?;
        log::info!("sorting by {} {:?}", column, next);
        form.submit()?;
        Ok(next)
    }
}
