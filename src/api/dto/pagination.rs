//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// `?pagina=&limite=` for `GET /api/minhas-urls`.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct MyLinksQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub pagina: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub limite: Option<i64>,
}

impl MyLinksQuery {
    /// Page number, defaulting to 1.
    pub fn page(&self) -> i64 {
        self.pagina.unwrap_or(DEFAULT_PAGE)
    }

    /// Page size, defaulting to 10.
    pub fn page_size(&self) -> i64 {
        self.limite.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
