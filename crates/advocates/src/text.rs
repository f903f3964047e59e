//! User-facing text for the listing view

pub const TITLE: &str = "Solace Advocates";

pub const SEARCH_PLACEHOLDER: &str = "Search advocates...";
pub const CLEAR_BUTTON: &str = "Clear";
pub const LOCATION_PLACEHOLDER: &str = "All Locations";

pub const PREVIOUS: &str = "Previous";
pub const NEXT: &str = "Next";
pub const PAGE_OF: &str = "Page {current} of {total}";

pub const SPECIALTIES_TITLE: &str = "Specialties";
pub const YEARS_EXPERIENCE: &str = "{years} years exp.";

pub const RETRY_BUTTON: &str = "Retry";
pub const NO_RESULTS: &str = "No advocates match the current filters.";
pub const LOADING: &str = "Loading advocates...";

/// Message returned by the endpoint, and shown by the view, when a fetch fails
pub const FETCH_FAILED: &str = "Failed to fetch advocates";
