//! Form state and search session over the works of a journal.
//!
//! [`SearchParams`] holds the raw form fields, [`SearchSession`] couples them with the derived
//! result state (loading flag, error message, received works) and drives the search against the
//! works service. Presentation layers edit [`SearchSession::params`] directly and read the state
//! back through the accessors after each operation.

use log::trace;

use crate::api;

/// A single bibliographic work as returned by the works service.
///
/// The shape of a work is defined by the remote API so records are kept as raw JSON values and
/// interpreted by the presentation layer.
pub type Work = serde_json::Value;

/// One page of works returned by a search.
#[derive(Debug)]
pub struct WorksPage {
    /// The works actually received.
    pub items: Vec<Work>,
    /// The number of works matching the search as reported by the service, only present when
    /// [`SearchParams::count`] was set.
    pub matched: Option<u64>,
}

/// Default cap on the number of works returned by a search.
pub const DEFAULT_MAX_ITEMS: u32 = 20;

/// The form fields of a journal works search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// The ISSN identifying the journal, must be non-empty before a search is attempted.
    pub issn: String,
    /// Free text to search for within the works of the journal, sent as the `q` parameter.
    pub query: String,
    /// Restrict results to works with an online publication date from this year onwards.
    pub from_year: Option<u16>,
    /// Field to sort results by, e.g. "published".
    pub sort: String,
    /// Sort order, "asc" or "desc".
    pub order: String,
    /// Cap on the number of works to return, zero counts as unset.
    pub max_items: Option<u32>,
    /// Ask the service to also report the number of matching works.
    pub count: bool,
    /// Contact email forwarded to the upstream API for polite pool etiquette.
    pub mailto: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            issn: String::new(),
            query: String::new(),
            from_year: None,
            sort: String::new(),
            order: String::new(),
            max_items: Some(DEFAULT_MAX_ITEMS),
            count: false,
            mailto: String::new(),
        }
    }
}

impl SearchParams {
    // Only fields that are set make it into the query string, a year or cap of zero counts as
    // unset to match the upstream service.
    pub(crate) fn query_string(&self) -> String {
        let mut pairs = Vec::new();

        if !self.query.is_empty() {
            pairs.push(format!("q={}", self.query));
        }
        if let Some(year) = self.from_year.filter(|&year| year != 0) {
            pairs.push(format!("filter=from-online-pub-date:{year}"));
        }
        if !self.sort.is_empty() {
            pairs.push(format!("sort={}", self.sort));
        }
        if !self.order.is_empty() {
            pairs.push(format!("order={}", self.order));
        }
        if let Some(max) = self.max_items.filter(|&max| max != 0) {
            pairs.push(format!("max_items={max}"));
        }
        if self.count {
            pairs.push("count=true".to_owned());
        }
        if !self.mailto.is_empty() {
            pairs.push(format!("mailto={}", self.mailto));
        }

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Mutable form and result state for searching the works of a journal.
#[derive(Debug)]
pub struct SearchSession {
    base_url: String,
    /// The current form fields, edited directly by the presentation layer.
    pub params: SearchParams,
    loading: bool,
    error: String,
    total: Option<usize>,
    results: Vec<Work>,
}

impl SearchSession {
    /// Creates a session with a default form that searches the works service at `base_url`.
    #[must_use]
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            params: SearchParams::default(),
            loading: false,
            error: String::new(),
            total: None,
            results: Vec::new(),
        }
    }

    /// Runs the search described by the current form fields.
    ///
    /// A missing ISSN fails fast with an error before any request is made. All other failures
    /// surface through [`error`](Self::error) and leave the session usable for a retry.
    pub fn search(&mut self) {
        self.search_with::<crate::Client>();
    }

    pub(crate) fn search_with<C: api::Client>(&mut self) {
        if self.params.issn.is_empty() {
            self.error = "ISSN is required.".to_owned();
            return;
        }

        trace!("Searching works of journal '{}'", self.params.issn);

        self.loading = true;
        self.error.clear();
        self.results.clear();
        self.total = None;

        match api::works::get_journal_works::<C>(&self.base_url, &self.params) {
            Ok(page) => {
                self.total = Some(page.items.len());
                self.results = page.items;
            }
            Err(err) => self.error = err.message(),
        }

        self.loading = false;
    }

    /// Restores the form fields to their defaults and clears any results or error.
    pub fn reset(&mut self) {
        self.params = SearchParams::default();
        self.results.clear();
        self.total = None;
        self.error.clear();
    }

    /// Whether a search is currently running.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error message of the last search, empty when no error occurred.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// The number of works received by the last search, `None` until a search completes.
    ///
    /// This counts the works actually received, not the number of matching works held by the
    /// service, see [`WorksPage::matched`] for the latter.
    #[must_use]
    pub const fn total(&self) -> Option<usize> {
        self.total
    }

    /// The works received by the last search.
    #[must_use]
    pub fn results(&self) -> &[Work] {
        &self.results
    }
}
