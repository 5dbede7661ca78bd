//! Hash-based routing for the dashboard pages.

/// Dashboard pages, addressed as `#/{slug}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// KPIs and summaries: `#/` or empty hash.
    Overview,
    WinLoss,
    Competitors,
    Objections,
    Icp,
    Transcripts,
    Ask,
}

impl Route {
    /// Parse a URL hash. Unknown paths yield `None`.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "" => Some(Self::Overview),
            "win-loss" => Some(Self::WinLoss),
            "competitors" => Some(Self::Competitors),
            "objections" => Some(Self::Objections),
            "icp" => Some(Self::Icp),
            "transcripts" => Some(Self::Transcripts),
            "ask" => Some(Self::Ask),
            _ => None,
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(self) -> String {
        format!("#/{}", self.slug())
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Overview => "",
            Self::WinLoss => "win-loss",
            Self::Competitors => "competitors",
            Self::Objections => "objections",
            Self::Icp => "icp",
            Self::Transcripts => "transcripts",
            Self::Ask => "ask",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::WinLoss => "Win/Loss",
            Self::Competitors => "Competitors",
            Self::Objections => "Objections",
            Self::Icp => "ICP Builder",
            Self::Transcripts => "Transcripts",
            Self::Ask => "Ask AI",
        }
    }

    /// Get current route from browser URL, falling back to the overview.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash()).unwrap_or(Self::Overview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Some(Route::Overview));
        assert_eq!(Route::from_hash("#"), Some(Route::Overview));
        assert_eq!(Route::from_hash("#/"), Some(Route::Overview));
        assert_eq!(Route::from_hash("#/win-loss"), Some(Route::WinLoss));
        assert_eq!(Route::from_hash("#/icp/"), Some(Route::Icp));
        assert_eq!(Route::from_hash("transcripts"), Some(Route::Transcripts));
        assert_eq!(Route::from_hash("#/pipeline"), None);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Overview.to_hash(), "#/");
        assert_eq!(Route::WinLoss.to_hash(), "#/win-loss");
        assert_eq!(Route::Ask.to_hash(), "#/ask");
    }

    #[test]
    fn test_hash_round_trip_for_nav_items() {
        for route in crate::config::NAV_ITEMS {
            assert_eq!(Route::from_hash(&route.to_hash()), Some(*route));
        }
    }
}
