//! Classifications used to color metrics.

use crate::config::{WIN_RATE_TREND_THRESHOLD, threat};

/// Direction hint shown on a metric card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    /// Trend of an overall win rate (percent).
    pub fn of_win_rate(win_rate: f64) -> Self {
        if win_rate > WIN_RATE_TREND_THRESHOLD {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Neutral => "•",
        }
    }
}

/// How dangerous a competitor is, judged by our win rate against them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreatLevel {
    High,
    Medium,
    Low,
}

impl ThreatLevel {
    pub fn from_win_rate(win_rate: f64) -> Self {
        if win_rate < threat::HIGH_BELOW {
            Self::High
        } else if win_rate < threat::MEDIUM_BELOW {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_bands() {
        assert_eq!(ThreatLevel::from_win_rate(20.0), ThreatLevel::High);
        assert_eq!(ThreatLevel::from_win_rate(35.0), ThreatLevel::Medium);
        assert_eq!(ThreatLevel::from_win_rate(49.9), ThreatLevel::Medium);
        assert_eq!(ThreatLevel::from_win_rate(50.0), ThreatLevel::Low);
    }

    #[test]
    fn test_win_rate_trend() {
        assert_eq!(Trend::of_win_rate(52.0), Trend::Up);
        assert_eq!(Trend::of_win_rate(45.0), Trend::Down);
    }
}
