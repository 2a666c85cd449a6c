use serde::Deserialize;

/// Query parameters for paginated listings.
#[derive(Deserialize)]
pub struct PaginationParam {
    /// Page number, zero-indexed.
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}
