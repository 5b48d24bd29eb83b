//! Navigation chrome.

pub const BRAND: &str = "Fantasy Basketball";

/// Top-level dashboard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Players,
    Teams,
    DailyLeaders,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Players, Route::Teams, Route::DailyLeaders];

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Players => "Players",
            Route::Teams => "Teams",
            Route::DailyLeaders => "Daily Leaders",
        }
    }

    /// Subcommand that opens this page
    pub fn command(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Players => "players",
            Route::Teams => "teams",
            Route::DailyLeaders => "daily-leaders",
        }
    }

    /// One-line description used on the home page cards
    pub fn blurb(self) -> &'static str {
        match self {
            Route::Home => "Fantasy leaders at a glance",
            Route::Players => "Browse and search player statistics",
            Route::Teams => "View team rosters and performance",
            Route::DailyLeaders => "Top performers and trending stats",
        }
    }
}

/// Navigation bar with the active page in brackets
pub fn render_nav(active: Route) -> String {
    let links: Vec<String> = Route::ALL
        .iter()
        .map(|route| {
            if *route == active {
                format!("[{}]", route.title())
            } else {
                route.title().to_string()
            }
        })
        .collect();

    let line = format!("{}    {}", BRAND, links.join("  "));
    let rule = "=".repeat(line.chars().count());
    format!("{}\n{}\n", line, rule)
}
