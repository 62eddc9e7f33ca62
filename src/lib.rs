//! # ACH File Builder
//!
//! Validates payment batches and encodes them into the NACHA fixed-width
//! text format used to submit ACH debits and credits to the US banking
//! network.
//!
//! ## Design Principles
//!
//! - **Validate, then build**: validation returns a complete issue list and
//!   never fails; the encoder never validates. The caller blocks on
//!   error-severity issues and composes the two operations.
//! - **Fixed-width fields**: every emitted field passes through one of two
//!   primitives (space-padded text, zero-filled numerics), guaranteeing
//!   94-character records.
//! - **Integer cents**: amounts use 2-decimal fixed-point via `rust_decimal`
//!   and convert exactly to the wire's cent fields.
//! - **Deterministic output**: [`encode_at`] takes an explicit creation
//!   instant; byte-identical input produces byte-identical output.
//!
//! ## Example
//!
//! ```
//! use ach_file_builder::{encode_at, validate_batch, Entry, PaymentBatch};
//! use chrono::NaiveDate;
//!
//! let batch = PaymentBatch {
//!     originator_name: "Acme Inc".to_string(),
//!     originator_routing: "021000021".to_string(),
//!     company_id: "1234567890".to_string(),
//!     destination_routing: "021000021".to_string(),
//!     destination_bank_name: "Test Bank".to_string(),
//!     effective_date: "2025-01-15".to_string(),
//!     batch_description: "PAYROLL".to_string(),
//!     entry_class: Default::default(),
//!     entries: vec![Entry::new(
//!         "John Doe",
//!         "021000021",
//!         "123456789",
//!         "100.00".parse().unwrap(),
//!         "EMP001",
//!     )],
//! };
//!
//! assert!(validate_batch(&batch).is_empty());
//!
//! let created = NaiveDate::from_ymd_opt(2025, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let file = encode_at(&batch, created);
//! assert_eq!(file.lines().count(), 10);
//! assert!(file.lines().all(|line| line.len() == 94));
//! ```

pub mod amount;
pub mod batch;
pub mod encoder;
pub mod error;
pub mod field;
pub mod routing;
pub mod validate;

pub use amount::Amount;
pub use batch::{Entry, EntryClassCode, PaymentBatch, TransactionCode};
pub use encoder::{encode, encode_at, RECORD_LENGTH};
pub use error::{BuildError, Result};
pub use routing::is_valid_routing_number;
pub use validate::{has_errors, validate_batch, Severity, ValidationIssue};
