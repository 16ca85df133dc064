use std::fmt;

/// Default TourAPI area code (Seoul).
pub const DEFAULT_AREA_CODE: u16 = 1;

/// Default number of rows requested per page.
pub const DEFAULT_ROWS: u16 = 50;

/// Parameters identifying one listing request.
///
/// The query doubles as a cache key, so two queries are equal exactly when
/// they would fetch the same page with the same credential. `Debug` output
/// redacts the service key.
///
/// # Examples
/// ```
/// use staypoint_core::ListingQuery;
///
/// let query = ListingQuery::new("secret").with_rows(20).with_page(2);
/// assert_eq!(query.area_code(), 1);
/// assert_eq!(query.rows(), 20);
/// assert!(!format!("{query:?}").contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ListingQuery {
    service_key: String,
    area_code: u16,
    rows: u16,
    page: u16,
}

impl ListingQuery {
    /// Query the first page of the default area with the given credential.
    #[must_use]
    pub fn new(service_key: impl Into<String>) -> Self {
        Self {
            service_key: service_key.into(),
            area_code: DEFAULT_AREA_CODE,
            rows: DEFAULT_ROWS,
            page: 1,
        }
    }

    /// Set the area code.
    #[must_use]
    pub const fn with_area_code(mut self, area_code: u16) -> Self {
        self.area_code = area_code;
        self
    }

    /// Set the number of rows per page.
    #[must_use]
    pub const fn with_rows(mut self, rows: u16) -> Self {
        self.rows = rows;
        self
    }

    /// Set the one-based page number.
    #[must_use]
    pub const fn with_page(mut self, page: u16) -> Self {
        self.page = page;
        self
    }

    /// API credential.
    #[must_use]
    pub fn service_key(&self) -> &str {
        &self.service_key
    }

    /// Area code.
    #[must_use]
    pub const fn area_code(&self) -> u16 {
        self.area_code
    }

    /// Rows per page.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u16 {
        self.page
    }
}

impl fmt::Debug for ListingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingQuery")
            .field("service_key", &"<redacted>")
            .field("area_code", &self.area_code)
            .field("rows", &self.rows)
            .field("page", &self.page)
            .finish()
    }
}
