//! Converts rate-sheet tabs (CSV text) into typed [`Rule`]s.
//!
//! Columns are read by position. The first row of every tab is a header row.
//! Rows with a blank key cell (first column) are skipped.

use csv::{ReaderBuilder, StringRecord, Trim};

use super::rates_errors::RateTableError;
use super::rates_model::{ClosingRule, OtherRule, RateSheet, ReferralRule, Rule, WeightRule};

fn cell(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn row_to_rule(sheet: RateSheet, record: &StringRecord) -> Option<Rule> {
    let key = cell(record, 0)?;
    let rule = match sheet {
        RateSheet::Referral => Rule::Referral(ReferralRule {
            category: key,
            referral_fee_percentage: cell(record, 1),
        }),
        RateSheet::Closing => Rule::Closing(ClosingRule {
            price_range: key,
            fba_normal: cell(record, 1),
            easy_ship: cell(record, 2),
            self_ship: cell(record, 3),
            seller_flex: cell(record, 4),
        }),
        RateSheet::WeightHandling => Rule::Weight(WeightRule {
            weight_range: key,
            local: cell(record, 1),
            regional: cell(record, 2),
            national: cell(record, 3),
            special_regions: cell(record, 4),
        }),
        RateSheet::Other => Rule::Other(OtherRule {
            fee_type: key,
            applicable_on: cell(record, 1).unwrap_or_default(),
            value: cell(record, 2),
        }),
    };
    Some(rule)
}

/// Parses one tab of the rate sheet, preserving row order.
pub fn parse_sheet(sheet: RateSheet, csv_text: &str) -> Result<Vec<Rule>, RateTableError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(csv_text.as_bytes());

    let mut rules = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| RateTableError::Csv { sheet, source })?;
        match row_to_rule(sheet, &record) {
            Some(rule) => rules.push(rule),
            None => log::debug!("Skipping blank row {} in {} sheet", index + 2, sheet),
        }
    }

    log::debug!("Parsed {} rules from {} sheet", rules.len(), sheet);
    Ok(rules)
}
