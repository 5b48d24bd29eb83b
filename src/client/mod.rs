//! Stats Backend Client
//!
//! The only I/O boundary of the dashboard: plain JSON-over-HTTP GETs.
//!
//! ## Endpoints
//!
//! - `GET {base}/api/players` - All player season lines
//! - `GET {base}/api/players/search?name=` - Name search
//! - `GET {base}/api/players/top-fantasy?limit=` - Fantasy leaderboard
//! - `GET {base}/api/players/{id}` - Single player

mod endpoints;
mod error;
mod http;

pub use endpoints::Endpoints;
pub use error::{FetchError, FetchErrorKind, FetchResult};
pub use http::{StatsApi, StatsClient};
