//! URL construction for the stats backend
//!
//! All endpoints hang off a single configured base URL.

/// Endpoint URL builder
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Create a builder for the given base URL (trailing slashes are dropped)
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/players`
    pub fn players(&self) -> String {
        format!("{}/api/players", self.base_url)
    }

    /// `GET /api/players/search?name=...` with the trimmed, percent-encoded term
    pub fn search(&self, term: &str) -> String {
        format!(
            "{}/api/players/search?name={}",
            self.base_url,
            urlencoding::encode(term.trim())
        )
    }

    /// `GET /api/players/top-fantasy?limit=...`
    pub fn top_fantasy(&self, limit: u32) -> String {
        format!("{}/api/players/top-fantasy?limit={}", self.base_url, limit)
    }

    /// `GET /api/players/{id}`
    pub fn player(&self, id: i64) -> String {
        format!("{}/api/players/{}", self.base_url, id)
    }
}
