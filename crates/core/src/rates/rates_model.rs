//! Rate table domain models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of fee rule, one per rate-sheet tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Referral,
    Closing,
    Weight,
    Other,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::Referral => "referral",
            RuleKind::Closing => "closing",
            RuleKind::Weight => "weight",
            RuleKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Percentage commission for one product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRule {
    pub category: String,
    pub referral_fee_percentage: Option<String>,
}

/// Fixed fee for a price band, one column per shipping mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosingRule {
    pub price_range: String,
    pub fba_normal: Option<String>,
    pub easy_ship: Option<String>,
    pub self_ship: Option<String>,
    pub seller_flex: Option<String>,
}

/// Weight-handling fee row. `weight_range` is a free-text descriptor such as
/// `"FBA - Standard Size - First 500 grams"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightRule {
    pub weight_range: String,
    pub local: Option<String>,
    pub regional: Option<String>,
    pub national: Option<String>,
    pub special_regions: Option<String>,
}

/// Row from the "Other Fees" tab (pick & pack, storage, removal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherRule {
    pub fee_type: String,
    pub applicable_on: String,
    pub value: Option<String>,
}

/// One row of the rate table, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sheetType", rename_all = "camelCase")]
pub enum Rule {
    Referral(ReferralRule),
    Closing(ClosingRule),
    Weight(WeightRule),
    Other(OtherRule),
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Referral(_) => RuleKind::Referral,
            Rule::Closing(_) => RuleKind::Closing,
            Rule::Weight(_) => RuleKind::Weight,
            Rule::Other(_) => RuleKind::Other,
        }
    }
}

/// Immutable, ordered snapshot of the rate table.
///
/// A calculation holds an `Arc<RuleSet>` for its whole duration; refreshing the
/// rate table produces a new snapshot instead of mutating this one.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    loaded_at: DateTime<Utc>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            loaded_at: Utc::now(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn referral_rules(&self) -> impl Iterator<Item = &ReferralRule> {
        self.rules.iter().filter_map(|r| match r {
            Rule::Referral(rule) => Some(rule),
            _ => None,
        })
    }

    pub fn closing_rules(&self) -> impl Iterator<Item = &ClosingRule> {
        self.rules.iter().filter_map(|r| match r {
            Rule::Closing(rule) => Some(rule),
            _ => None,
        })
    }

    pub fn weight_rules(&self) -> impl Iterator<Item = &WeightRule> {
        self.rules.iter().filter_map(|r| match r {
            Rule::Weight(rule) => Some(rule),
            _ => None,
        })
    }

    pub fn other_rules(&self) -> impl Iterator<Item = &OtherRule> {
        self.rules.iter().filter_map(|r| match r {
            Rule::Other(rule) => Some(rule),
            _ => None,
        })
    }

    pub fn summary(&self) -> RuleSetSummary {
        let count = |kind: RuleKind| self.rules.iter().filter(|r| r.kind() == kind).count();
        RuleSetSummary {
            referral: count(RuleKind::Referral),
            closing: count(RuleKind::Closing),
            weight: count(RuleKind::Weight),
            other: count(RuleKind::Other),
            total: self.rules.len(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Rule counts per kind for the currently loaded snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSetSummary {
    pub referral: usize,
    pub closing: usize,
    pub weight: usize,
    pub other: usize,
    pub total: usize,
    pub loaded_at: DateTime<Utc>,
}

/// One tab of the rate sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateSheet {
    Referral,
    Closing,
    WeightHandling,
    Other,
}

impl RateSheet {
    /// Tabs in the order their rows are concatenated into a [`RuleSet`].
    pub const ALL: [RateSheet; 4] = [
        RateSheet::Referral,
        RateSheet::Closing,
        RateSheet::WeightHandling,
        RateSheet::Other,
    ];

    /// Tab title in the published spreadsheet.
    pub fn title(&self) -> &'static str {
        match self {
            RateSheet::Referral => "Referral fees",
            RateSheet::Closing => "Closing fees",
            RateSheet::WeightHandling => "Weight handling fees",
            RateSheet::Other => "Other Fees",
        }
    }

    /// File name used by the CSV directory provider.
    pub fn file_name(&self) -> &'static str {
        match self {
            RateSheet::Referral => "referral_fees.csv",
            RateSheet::Closing => "closing_fees.csv",
            RateSheet::WeightHandling => "weight_handling_fees.csv",
            RateSheet::Other => "other_fees.csv",
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            RateSheet::Referral => RuleKind::Referral,
            RateSheet::Closing => RuleKind::Closing,
            RateSheet::WeightHandling => RuleKind::Weight,
            RateSheet::Other => RuleKind::Other,
        }
    }
}

impl fmt::Display for RateSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
