//! NACHA file encoding.
//!
//! Builds the fixed-width text file for a batch in a single pass: file
//! header, batch header, one entry detail per instruction (plus an addenda
//! record where present), batch control, file control, then all-`'9'` filler
//! lines up to the blocking factor. Running totals (entry hash, debit and
//! credit cents, record count) are locals threaded through the entry loop,
//! never shared state.
//!
//! # Preconditions
//!
//! The encoder assumes the batch has already been checked with
//! [`crate::validate_batch`] and performs no validation of its own. Feeding
//! it an invalid batch produces a structurally well-formed but semantically
//! wrong file; it never panics. This garbage-in/garbage-out split is
//! deliberate: validation reports data, encoding transforms it, and the two
//! are never merged into one throw-on-error operation.

use crate::batch::{Entry, PaymentBatch};
use crate::field::{alphameric, numeric};
use crate::routing::{check_digit, dfi_identifier, dfi_identifier_value};
use chrono::{Local, NaiveDateTime};
use log::debug;

/// Length of every record, filler included.
pub const RECORD_LENGTH: usize = 94;

/// The blocking factor: files are padded to a multiple of this many lines.
const LINES_PER_BLOCK: usize = 10;

const PRIORITY_CODE: &str = "01";
const FILE_ID_MODIFIER: char = 'A';
const RECORD_SIZE: &str = "094";
const BLOCKING_FACTOR: &str = "10";
const FORMAT_CODE: char = '1';

/// Service class 200: the batch may mix debits and credits.
const SERVICE_CLASS_MIXED: &str = "200";
const ORIGINATOR_STATUS: char = '1';

/// Addenda type 05: payment-related information.
const ADDENDA_TYPE_CODE: &str = "05";

/// Single batch per file: the batch number and the file's batch count are
/// both the constant 1.
const BATCH_NUMBER: &str = "1";

/// Entry hash fields are 10 digits; the running sum wraps past this on
/// purpose, matching the wire format.
const ENTRY_HASH_MODULUS: u64 = 10_000_000_000;

/// Running totals accumulated while walking the entries of one encode call.
#[derive(Debug, Default)]
struct BatchTotals {
    /// Entry and addenda records emitted (headers and controls excluded).
    records: usize,

    /// Sum of receiving DFI identifiers, truncated to its low 10 digits.
    entry_hash: u64,

    /// Total debit cents. Wide enough that even out-of-contract amounts
    /// cannot overflow it.
    debit_cents: i128,

    /// Total credit cents.
    credit_cents: i128,
}

/// Encodes a batch into NACHA text, stamping the file header with the
/// current local time.
///
/// See [`encode_at`] for the deterministic variant.
pub fn encode(batch: &PaymentBatch) -> String {
    encode_at(batch, Local::now().naive_local())
}

/// Encodes a batch into NACHA text with an explicit creation instant.
///
/// The output is a newline-joined sequence of 94-character lines whose
/// count is a multiple of 10. Byte-identical inputs and instants produce
/// byte-identical output.
pub fn encode_at(batch: &PaymentBatch, created: NaiveDateTime) -> String {
    let odfi = dfi_identifier(&batch.originator_routing);

    let mut lines = Vec::with_capacity(batch.entries.len() + 4);
    lines.push(file_header(batch, created));
    lines.push(batch_header(batch, &odfi));

    let mut totals = BatchTotals::default();
    for (index, entry) in batch.entries.iter().enumerate() {
        let sequence = numeric(&(index + 1).to_string(), 7);
        let trace = format!("{odfi}{sequence}");

        lines.push(entry_detail(entry, &trace));
        totals.records += 1;
        totals.entry_hash = (totals.entry_hash + dfi_identifier_value(&entry.receiver_routing))
            % ENTRY_HASH_MODULUS;

        let cents = i128::from(entry.amount.to_cents());
        if entry.transaction_code.is_debit() {
            totals.debit_cents += cents;
        } else {
            totals.credit_cents += cents;
        }

        if let Some(text) = &entry.addenda {
            lines.push(addenda_record(text, &sequence));
            totals.records += 1;
        }
    }

    lines.push(batch_control(batch, &totals, &odfi));

    // The four file/batch header and control records ride on top of the
    // entry/addenda count; padding rounds up to the same multiple of 10, so
    // this formula always matches the padded line count divided by 10.
    let blocks = (totals.records + 4).div_ceil(LINES_PER_BLOCK);
    lines.push(file_control(&totals, blocks));

    while lines.len() % LINES_PER_BLOCK != 0 {
        lines.push("9".repeat(RECORD_LENGTH));
    }

    debug!(
        "encoded {} entr(y/ies): {} record(s), {} line(s), {} block(s)",
        batch.entries.len(),
        totals.records + 4,
        lines.len(),
        blocks
    );

    lines.join("\n")
}

/// File header, record type 1.
fn file_header(batch: &PaymentBatch, created: NaiveDateTime) -> String {
    let mut record = String::with_capacity(RECORD_LENGTH);
    record.push('1');
    record.push_str(PRIORITY_CODE);
    record.push_str(&alphameric(&format!(" {}", batch.destination_routing), 10));
    record.push_str(&alphameric(&batch.company_id, 10));
    record.push_str(&created.format("%y%m%d").to_string());
    record.push_str(&created.format("%H%M").to_string());
    record.push(FILE_ID_MODIFIER);
    record.push_str(RECORD_SIZE);
    record.push_str(BLOCKING_FACTOR);
    record.push(FORMAT_CODE);
    record.push_str(&alphameric(&batch.destination_bank_name, 23));
    record.push_str(&alphameric(&batch.originator_name, 23));
    record.push_str(&alphameric("", 8));
    debug_assert_eq!(record.chars().count(), RECORD_LENGTH);
    record
}

/// Batch header, record type 5.
fn batch_header(batch: &PaymentBatch, odfi: &str) -> String {
    let mut record = String::with_capacity(RECORD_LENGTH);
    record.push('5');
    record.push_str(SERVICE_CLASS_MIXED);
    record.push_str(&alphameric(&batch.originator_name, 16));
    record.push_str(&alphameric("", 20));
    record.push_str(&alphameric(&batch.company_id, 10));
    record.push_str(batch.entry_class.as_str());
    record.push_str(&alphameric(&batch.batch_description, 10));
    record.push_str(&alphameric("", 6));
    record.push_str(&effective_entry_date(&batch.effective_date));
    record.push_str(&alphameric("", 3));
    record.push(ORIGINATOR_STATUS);
    record.push_str(odfi);
    record.push_str(&numeric(BATCH_NUMBER, 7));
    debug_assert_eq!(record.chars().count(), RECORD_LENGTH);
    record
}

/// Reduces a calendar date to the wire's YYMMDD form: digits only, last six.
fn effective_entry_date(date: &str) -> String {
    let digits: String = date.chars().filter(char::is_ascii_digit).collect();
    numeric(&digits, 6)
}

/// Entry detail, record type 6.
fn entry_detail(entry: &Entry, trace: &str) -> String {
    let mut record = String::with_capacity(RECORD_LENGTH);
    record.push('6');
    record.push_str(entry.transaction_code.code());
    record.push_str(&dfi_identifier(&entry.receiver_routing));
    record.push(check_digit(&entry.receiver_routing));
    record.push_str(&alphameric(&entry.receiver_account, 17));
    record.push_str(&numeric(&entry.amount.to_cents().to_string(), 10));
    record.push_str(&alphameric(&entry.individual_id, 15));
    record.push_str(&alphameric(&entry.receiver_name, 22));
    record.push_str(&alphameric("", 2));
    record.push(if entry.addenda.is_some() { '1' } else { '0' });
    record.push_str(trace);
    debug_assert_eq!(record.chars().count(), RECORD_LENGTH);
    record
}

/// Addenda record, record type 7. Emitted directly after its entry; the
/// trailing field references the entry's 7-digit trace sequence.
fn addenda_record(text: &str, entry_sequence: &str) -> String {
    let mut record = String::with_capacity(RECORD_LENGTH);
    record.push('7');
    record.push_str(ADDENDA_TYPE_CODE);
    record.push_str(&alphameric(text, 80));
    record.push_str(&numeric("1", 4));
    record.push_str(entry_sequence);
    debug_assert_eq!(record.chars().count(), RECORD_LENGTH);
    record
}

/// Batch control, record type 8.
///
/// The blank run after the company id is the 19-character message
/// authentication code followed by 6 reserved characters; both stay blank.
fn batch_control(batch: &PaymentBatch, totals: &BatchTotals, odfi: &str) -> String {
    let mut record = String::with_capacity(RECORD_LENGTH);
    record.push('8');
    record.push_str(SERVICE_CLASS_MIXED);
    record.push_str(&numeric(&totals.records.to_string(), 6));
    record.push_str(&numeric(&totals.entry_hash.to_string(), 10));
    record.push_str(&numeric(&totals.debit_cents.to_string(), 12));
    record.push_str(&numeric(&totals.credit_cents.to_string(), 12));
    record.push_str(&alphameric(&batch.company_id, 10));
    record.push_str(&alphameric("", 19));
    record.push_str(&alphameric("", 6));
    record.push_str(odfi);
    record.push_str(&numeric(BATCH_NUMBER, 7));
    debug_assert_eq!(record.chars().count(), RECORD_LENGTH);
    record
}

/// File control, record type 9.
fn file_control(totals: &BatchTotals, blocks: usize) -> String {
    let mut record = String::with_capacity(RECORD_LENGTH);
    record.push('9');
    record.push_str(&numeric(BATCH_NUMBER, 6));
    record.push_str(&numeric(&blocks.to_string(), 6));
    record.push_str(&numeric(&totals.records.to_string(), 8));
    record.push_str(&numeric(&totals.entry_hash.to_string(), 10));
    record.push_str(&numeric(&totals.debit_cents.to_string(), 12));
    record.push_str(&numeric(&totals.credit_cents.to_string(), 12));
    record.push_str(&alphameric("", 39));
    debug_assert_eq!(record.chars().count(), RECORD_LENGTH);
    record
}
