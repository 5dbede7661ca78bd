//! Application configuration.
//!
//! Centralizes the constants used by the views. Network and cache defaults
//! live in [`winloss_core::config`].

use crate::models::Route;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the sidebar.
pub const APP_NAME: &str = "Win/Loss Intelligence";

/// Subtitle displayed under the application name.
pub const APP_TAGLINE: &str = "CRM deal analytics";

// =============================================================================
// Navigation
// =============================================================================

/// Sidebar entries, in display order.
pub const NAV_ITEMS: &[Route] = &[
    Route::Overview,
    Route::WinLoss,
    Route::Icp,
    Route::Competitors,
    Route::Objections,
    Route::Transcripts,
    Route::Ask,
];

// =============================================================================
// Deals
// =============================================================================

/// Rows shown in the overview's recent deals table.
pub const RECENT_DEALS_LIMIT: u32 = 8;

/// Deals offered in the transcript deal selector.
pub const DEAL_SAMPLE_LIMIT: u32 = 50;

/// Rows shown in the win/loss deal explorer.
pub const DEAL_TABLE_LIMIT: usize = 50;

/// Loss reasons listed on the overview.
pub const TOP_LOSS_REASONS: usize = 6;

// =============================================================================
// Thresholds
// =============================================================================

/// Win rate (percent) above which the headline KPI trends up.
pub const WIN_RATE_TREND_THRESHOLD: f64 = 45.0;

/// Competitor threat bands by our win rate against them (percent).
pub mod threat {
    /// Below this, the competitor is a high threat.
    pub const HIGH_BELOW: f64 = 35.0;
    /// Below this, the competitor is a medium threat.
    pub const MEDIUM_BELOW: f64 = 50.0;
}

// =============================================================================
// Ask AI
// =============================================================================

/// Starter questions offered on an empty conversation.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What's our biggest weakness against ZetaFlow?",
    "Which industries should we stop pursuing?",
    "What's our ideal deal size and why?",
    "How can we improve our outbound win rate?",
    "What objections do we handle worst?",
    "Which buyer persona converts best?",
];

/// Placeholder for the question input.
pub const ASK_PLACEHOLDER: &str = "Ask about your deals, competitors, or strategy...";
