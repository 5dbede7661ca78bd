//! CRM deal records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub employee_count: u32,
    #[serde(default)]
    pub annual_revenue: Option<f64>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub seniority: String,
    pub company_id: String,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Closed pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealStage {
    #[serde(rename = "closedwon")]
    ClosedWon,
    #[serde(rename = "closedlost")]
    ClosedLost,
}

impl DealStage {
    /// Value used by the API in the `stage` filter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClosedWon => "closedwon",
            Self::ClosedLost => "closedlost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub name: String,
    pub stage: DealStage,
    pub amount: f64,
    pub close_date: String,
    pub create_date: String,
    pub pipeline: String,
    pub deal_source: String,
    #[serde(default)]
    pub loss_reason: Option<String>,
    #[serde(default)]
    pub competitor: Option<String>,
    pub company_id: String,
    pub contact_id: String,
    pub cycle_days: u32,
    #[serde(default)]
    pub objections: Vec<String>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub contact: Option<Contact>,
}

impl Deal {
    pub fn is_won(&self) -> bool {
        self.stage == DealStage::ClosedWon
    }
}

/// Filters accepted by `GET /deals`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealFilter {
    pub stage: Option<DealStage>,
    pub industry: Option<String>,
    pub source: Option<String>,
}

/// A loss reason and how many lost deals cited it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonCount {
    pub reason: String,
    pub count: usize,
}

/// Most frequent loss reasons among lost deals, highest count first.
///
/// Ties are broken by reason name so the order is stable.
pub fn top_loss_reasons(deals: &[Deal], limit: usize) -> Vec<ReasonCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for deal in deals.iter().filter(|d| !d.is_won()) {
        if let Some(reason) = deal.loss_reason.as_deref().filter(|r| !r.is_empty()) {
            *counts.entry(reason).or_default() += 1;
        }
    }

    let mut reasons: Vec<ReasonCount> = counts
        .into_iter()
        .map(|(reason, count)| ReasonCount {
            reason: reason.to_string(),
            count,
        })
        .collect();
    reasons.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.reason.cmp(&b.reason)));
    reasons.truncate(limit);
    reasons
}
