//! Structural validation of a payment batch.
//!
//! Validation is a pure scan: it never fails and never stops early, it
//! returns every problem it finds. Callers block on `error`-severity issues
//! and treat `warning` issues as informational. The encoder deliberately
//! performs none of these checks; the two operations compose as
//! "validate, then build".

use crate::amount::Amount;
use crate::batch::{Entry, PaymentBatch};
use crate::routing::is_valid_routing_number;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks submission; the batch must not be encoded.
    Error,

    /// Informational only, e.g. an unusually large batch total.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// One problem found in a batch.
///
/// `field` is a path into the batch, such as `originator_name` or
/// `entries[2].amount`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Path of the offending field.
    pub field: String,

    /// Human-readable description of the problem.
    pub message: String,

    /// Whether this issue blocks submission.
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates a blocking issue.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates an informational issue.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.field, self.message)
    }
}

/// Returns `true` when any issue in the list blocks submission.
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

/// Largest amount a single entry may carry: the 10-digit cents field caps
/// out at 99,999,999.99 dollars.
fn max_entry_amount() -> Amount {
    Amount::new(Decimal::new(9_999_999_999, 2))
}

/// Batch totals above this are flagged for human confirmation.
fn review_threshold() -> Amount {
    Amount::new(Decimal::new(1_000_000, 0))
}

/// Checks a batch and returns the complete list of issues found.
///
/// Every check is independent: a batch with five problems yields five
/// issues. An empty list means the batch is clean. This function never
/// panics and never stops at the first problem.
pub fn validate_batch(batch: &PaymentBatch) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    require(&mut issues, "originator_name", &batch.originator_name);
    limit(&mut issues, "originator_name", &batch.originator_name, 23);
    require(&mut issues, "company_id", &batch.company_id);
    limit(&mut issues, "batch_description", &batch.batch_description, 10);

    // chrono accepts unpadded numerals ("2025-1-15"); the wire date is the
    // last six digits of this field, so only the zero-padded form is valid.
    let parsed = NaiveDate::parse_from_str(&batch.effective_date, "%Y-%m-%d");
    if !parsed.is_ok_and(|date| date.format("%Y-%m-%d").to_string() == batch.effective_date) {
        issues.push(ValidationIssue::error(
            "effective_date",
            "must be a calendar date in YYYY-MM-DD form",
        ));
    }

    require_routing(&mut issues, "originator_routing", &batch.originator_routing);
    require_routing(
        &mut issues,
        "destination_routing",
        &batch.destination_routing,
    );

    if batch.entries.is_empty() {
        issues.push(ValidationIssue::error("entries", "batch contains no entries"));
    }

    for (index, entry) in batch.entries.iter().enumerate() {
        validate_entry(&mut issues, index, entry);
    }

    let total = batch
        .entries
        .iter()
        .fold(Amount::ZERO, |acc, entry| acc + entry.amount);
    if total > review_threshold() {
        issues.push(ValidationIssue::warning(
            "entries",
            format!("batch total {total} exceeds 1000000.00; confirm before submitting"),
        ));
    }

    debug!(
        "validated batch of {} entr(y/ies): {} issue(s)",
        batch.entries.len(),
        issues.len()
    );

    issues
}

/// Checks one entry; issue paths are rooted at `entries[index]`.
fn validate_entry(issues: &mut Vec<ValidationIssue>, index: usize, entry: &Entry) {
    let path = |field: &str| format!("entries[{index}].{field}");

    require(issues, path("receiver_name"), &entry.receiver_name);
    limit(issues, path("receiver_name"), &entry.receiver_name, 22);
    require_routing(issues, path("receiver_routing"), &entry.receiver_routing);
    require(issues, path("receiver_account"), &entry.receiver_account);
    limit(issues, path("receiver_account"), &entry.receiver_account, 17);

    if entry.amount <= Amount::ZERO {
        issues.push(ValidationIssue::error(
            path("amount"),
            "must be greater than zero",
        ));
    } else if entry.amount > max_entry_amount() {
        issues.push(ValidationIssue::error(
            path("amount"),
            "exceeds the single-entry maximum of 99999999.99",
        ));
    }

    limit(issues, path("individual_id"), &entry.individual_id, 15);

    if let Some(text) = &entry.addenda {
        limit(issues, path("addenda"), text, 80);
    }
}

/// Flags an empty value.
fn require(issues: &mut Vec<ValidationIssue>, field: impl Into<String>, value: &str) {
    if value.is_empty() {
        issues.push(ValidationIssue::error(field, "is required"));
    }
}

/// Flags a value longer than `max` characters.
fn limit(issues: &mut Vec<ValidationIssue>, field: impl Into<String>, value: &str, max: usize) {
    if value.chars().count() > max {
        issues.push(ValidationIssue::error(
            field,
            format!("must be {max} characters or fewer"),
        ));
    }
}

/// Flags a value that is not a checksum-valid ABA routing number.
fn require_routing(issues: &mut Vec<ValidationIssue>, field: impl Into<String>, value: &str) {
    if !is_valid_routing_number(value) {
        issues.push(ValidationIssue::error(
            field,
            "must be a valid 9-digit ABA routing number",
        ));
    }
}
