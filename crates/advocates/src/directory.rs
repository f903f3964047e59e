//! Search, location filtering and pagination over a fetched advocate list
//!
//! Everything here is a pure derivation of the in-memory collection plus the
//! current search term, location and page. Nothing is cached; the filtered
//! set and the page are recomputed on every read, in the collection's
//! original order.

use std::collections::BTreeSet;

use crate::model::Advocate;

/// Number of advocates shown per page
pub const PAGE_SIZE: usize = 10;

/// True if `term` is empty or is a case-insensitive substring of the
/// advocate's first name, last name, city, degree, any specialty, or years
/// of experience.
pub fn matches_search(advocate: &Advocate, term: &str) -> bool {
  if term.is_empty() {
    return true;
  }

  let needle = term.to_lowercase();
  let contains = |field: &str| field.to_lowercase().contains(&needle);

  contains(&advocate.first_name)
    || contains(&advocate.last_name)
    || contains(&advocate.city)
    || contains(&advocate.degree)
    || advocate.specialties.iter().any(|specialty| contains(specialty))
    || contains(&advocate.years_of_experience)
}

/// True if no location is selected or the advocate's city is exactly it
pub fn matches_location(advocate: &Advocate, location: Option<&str>) -> bool {
  location.map_or(true, |city| advocate.city == city)
}

/// Advocates satisfying both predicates, original order preserved
pub fn filter_advocates<'a>(
  advocates: &'a [Advocate],
  term: &str,
  location: Option<&str>,
) -> Vec<&'a Advocate> {
  advocates
    .iter()
    .filter(|advocate| matches_search(advocate, term) && matches_location(advocate, location))
    .collect()
}

/// Distinct cities across the collection, sorted ascending
pub fn unique_cities(advocates: &[Advocate]) -> Vec<String> {
  advocates.iter().map(|advocate| advocate.city.clone()).collect::<BTreeSet<_>>().into_iter().collect()
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: usize) -> usize {
  if page_size == 0 {
    return 0;
  }
  len.div_ceil(page_size)
}

/// The 1-based `page` of `items`; empty past the end
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
  let start = page.saturating_sub(1).saturating_mul(page_size);
  if start >= items.len() {
    return &[];
  }
  let end = start.saturating_add(page_size).min(items.len());
  &items[start..end]
}

/// Listing state: the full collection plus the user's current selections
#[derive(Debug, Clone)]
pub struct Directory {
  advocates: Vec<Advocate>,
  search_term: String,
  location: Option<String>,
  page: usize,
  page_size: usize,
}

impl Default for Directory {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl Directory {
  pub fn new(advocates: Vec<Advocate>) -> Self {
    Self::with_page_size(advocates, PAGE_SIZE)
  }

  pub fn with_page_size(advocates: Vec<Advocate>, page_size: usize) -> Self {
    Self { advocates, search_term: String::new(), location: None, page: 1, page_size: page_size.max(1) }
  }

  /// Swap in a freshly fetched collection. Search and location are kept;
  /// the page is pulled back onto the last page if the new result is shorter.
  pub fn replace_advocates(&mut self, advocates: Vec<Advocate>) {
    self.advocates = advocates;
    self.page = self.page.min(self.total_pages()).max(1);
  }

  pub fn advocates(&self) -> &[Advocate] {
    &self.advocates
  }

  pub fn search_term(&self) -> &str {
    &self.search_term
  }

  pub fn location(&self) -> Option<&str> {
    self.location.as_deref()
  }

  pub fn page(&self) -> usize {
    self.page
  }

  pub fn page_size(&self) -> usize {
    self.page_size
  }

  pub fn set_search_term(&mut self, term: impl Into<String>) {
    self.search_term = term.into();
    self.page = 1;
  }

  /// Select a city, or `None` for all locations. An empty name means none.
  pub fn set_location(&mut self, location: Option<String>) {
    self.location = location.filter(|city| !city.is_empty());
    self.page = 1;
  }

  pub fn clear_filters(&mut self) {
    self.search_term.clear();
    self.location = None;
    self.page = 1;
  }

  /// Jump to a page; page numbers start at 1
  pub fn set_page(&mut self, page: usize) {
    self.page = page.max(1);
  }

  pub fn unique_cities(&self) -> Vec<String> {
    unique_cities(&self.advocates)
  }

  pub fn filtered(&self) -> Vec<&Advocate> {
    filter_advocates(&self.advocates, &self.search_term, self.location())
  }

  pub fn total_pages(&self) -> usize {
    total_pages(self.filtered().len(), self.page_size)
  }

  /// Advocates on the current page
  pub fn current_page(&self) -> Vec<&Advocate> {
    paginate(&self.filtered(), self.page, self.page_size).to_vec()
  }

  pub fn has_previous(&self) -> bool {
    self.page > 1
  }

  pub fn has_next(&self) -> bool {
    self.page < self.total_pages()
  }

  /// Returns false when already on the first page
  pub fn previous_page(&mut self) -> bool {
    if !self.has_previous() {
      return false;
    }
    self.page -= 1;
    true
  }

  /// Returns false when already on the last page
  pub fn next_page(&mut self) -> bool {
    if !self.has_next() {
      return false;
    }
    self.page += 1;
    true
  }
}
