use serde::{Deserialize, Serialize};

/// Nights in the custody year. Leap years are not modelled.
pub const NIGHTS_PER_YEAR: u16 = 365;

/// Household snapshot consumed by the estimator. Values are expected to be
/// validated by the intake layer before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateInput {
    pub income_a: f64,
    pub income_b: f64,
    pub num_children: u32,
    pub overnights_a: u16,
    pub extra_expenses: f64,
}

impl EstimateInput {
    pub fn combined_income(&self) -> f64 {
        self.income_a + self.income_b
    }

    /// Parent B's overnights are always derived from Parent A's.
    pub fn overnights_b(&self) -> u16 {
        NIGHTS_PER_YEAR.saturating_sub(self.overnights_a)
    }
}

/// The parent expected to make the monthly transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayingParent {
    #[serde(rename = "Parent A")]
    ParentA,
    #[serde(rename = "Parent B")]
    ParentB,
}

impl PayingParent {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ParentA => "Parent A",
            Self::ParentB => "Parent B",
        }
    }
}

impl std::fmt::Display for PayingParent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportRange {
    pub min: i64,
    pub max: i64,
}

/// Income shares rendered with two decimals for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSplit {
    pub a_share: String,
    pub b_share: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodySplit {
    pub a_custody_pct: String,
    pub b_custody_pct: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDetails {
    pub base_support: i64,
    pub income_split: IncomeSplit,
    pub custody_split: CustodySplit,
}

/// Monthly support estimate returned to the result view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub support_range: SupportRange,
    pub median: i64,
    pub paying_parent: PayingParent,
    pub factors: Vec<String>,
    pub details: EstimateDetails,
}
