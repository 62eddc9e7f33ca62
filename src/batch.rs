//! Payment batch models: the input to validation and encoding.

use crate::amount::Amount;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One batch of payment instructions, the unit a NACHA file is built from.
///
/// A batch is a short-lived, caller-constructed value: it is validated with
/// [`crate::validate_batch`] and, if clean, encoded once with
/// [`crate::encode`]. There is no persistence and no mutation after
/// construction.
///
/// Batch files deserialize from JSON with these exact field names; see the
/// crate-level example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBatch {
    /// Company originating the payments. Appears in the file and batch
    /// headers; at most 23 characters.
    pub originator_name: String,

    /// The originator's 9-digit ABA routing number. Its first 8 digits
    /// identify the originating bank in every trace number.
    pub originator_routing: String,

    /// Company identification assigned by the originating bank.
    pub company_id: String,

    /// Routing number of the bank the file is delivered to.
    pub destination_routing: String,

    /// Name of the destination bank (truncated to 23 characters on encode).
    pub destination_bank_name: String,

    /// Requested settlement date, `YYYY-MM-DD`.
    pub effective_date: String,

    /// Description shown on receiver statements; at most 10 characters.
    pub batch_description: String,

    /// Standard entry class for every entry in the batch.
    #[serde(default)]
    pub entry_class: EntryClassCode,

    /// The payment instructions, in the order they will be encoded.
    pub entries: Vec<Entry>,
}

/// A single payment instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Name of the account holder being debited or credited; at most 22
    /// characters.
    pub receiver_name: String,

    /// The receiver's 9-digit ABA routing number.
    pub receiver_routing: String,

    /// The receiver's bank account number; at most 17 characters.
    pub receiver_account: String,

    /// Dollar amount, positive and at most 99,999,999.99.
    pub amount: Amount,

    /// Free-form reference shown to the receiver; at most 15 characters.
    #[serde(default)]
    pub individual_id: String,

    /// What kind of account is touched and in which direction.
    #[serde(default)]
    pub transaction_code: TransactionCode,

    /// Optional payment-related free text carried in an addenda record; at
    /// most 80 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addenda: Option<String>,
}

impl Entry {
    /// Creates an entry with the default transaction code (checking debit)
    /// and no addenda.
    pub fn new(
        receiver_name: impl Into<String>,
        receiver_routing: impl Into<String>,
        receiver_account: impl Into<String>,
        amount: Amount,
        individual_id: impl Into<String>,
    ) -> Self {
        Entry {
            receiver_name: receiver_name.into(),
            receiver_routing: receiver_routing.into(),
            receiver_account: receiver_account.into(),
            amount,
            individual_id: individual_id.into(),
            transaction_code: TransactionCode::default(),
            addenda: None,
        }
    }

    /// Replaces the transaction code.
    pub fn with_transaction_code(mut self, code: TransactionCode) -> Self {
        self.transaction_code = code;
        self
    }

    /// Attaches addenda text.
    pub fn with_addenda(mut self, text: impl Into<String>) -> Self {
        self.addenda = Some(text.into());
        self
    }
}

/// NACHA transaction code: account type plus direction.
///
/// Only the four live codes are representable. Prenotification codes are
/// deliberately absent: the validator requires a positive amount, so
/// zero-dollar prenote entries cannot occur in a valid batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionCode {
    /// 22: credit to a checking account.
    CheckingCredit,

    /// 27: debit from a checking account. The default, matching the common
    /// collect-from-payer flow.
    #[default]
    CheckingDebit,

    /// 32: credit to a savings account.
    SavingsCredit,

    /// 37: debit from a savings account.
    SavingsDebit,
}

impl TransactionCode {
    /// The two-digit wire code.
    pub fn code(&self) -> &'static str {
        match self {
            TransactionCode::CheckingCredit => "22",
            TransactionCode::CheckingDebit => "27",
            TransactionCode::SavingsCredit => "32",
            TransactionCode::SavingsDebit => "37",
        }
    }

    /// Whether this code moves money out of the receiver's account.
    ///
    /// Drives the debit/credit split in the control records.
    pub fn is_debit(&self) -> bool {
        matches!(
            self,
            TransactionCode::CheckingDebit | TransactionCode::SavingsDebit
        )
    }
}

/// Unknown two-digit transaction code.
#[derive(Debug, Error)]
#[error("unrecognized transaction code '{0}'")]
pub struct ParseTransactionCodeError(String);

impl FromStr for TransactionCode {
    type Err = ParseTransactionCodeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "22" => Ok(TransactionCode::CheckingCredit),
            "27" => Ok(TransactionCode::CheckingDebit),
            "32" => Ok(TransactionCode::SavingsCredit),
            "37" => Ok(TransactionCode::SavingsDebit),
            other => Err(ParseTransactionCodeError(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for TransactionCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for TransactionCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TransactionCode::from_str(&s).map_err(de::Error::custom)
    }
}

/// Standard entry class code: what kind of entries the batch carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryClassCode {
    /// CCD: corporate (business-to-business) entries. The default.
    #[default]
    Ccd,

    /// PPD: consumer entries authorized in writing.
    Ppd,

    /// WEB: consumer entries authorized over the internet.
    Web,

    /// TEL: consumer entries authorized by phone.
    Tel,
}

impl EntryClassCode {
    /// The three-letter wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryClassCode::Ccd => "CCD",
            EntryClassCode::Ppd => "PPD",
            EntryClassCode::Web => "WEB",
            EntryClassCode::Tel => "TEL",
        }
    }
}

/// Unknown standard entry class code.
#[derive(Debug, Error)]
#[error("unrecognized entry class code '{0}'")]
pub struct ParseEntryClassError(String);

impl FromStr for EntryClassCode {
    type Err = ParseEntryClassError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CCD" => Ok(EntryClassCode::Ccd),
            "PPD" => Ok(EntryClassCode::Ppd),
            "WEB" => Ok(EntryClassCode::Web),
            "TEL" => Ok(EntryClassCode::Tel),
            other => Err(ParseEntryClassError(other.to_string())),
        }
    }
}

impl fmt::Display for EntryClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntryClassCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryClassCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EntryClassCode::from_str(&s).map_err(de::Error::custom)
    }
}
