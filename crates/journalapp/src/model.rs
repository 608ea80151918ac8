use crate::error::{JournalError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// One column of the journal table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Date,
    Account,
    Description,
    Debit,
    Credit,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Date,
        Field::Account,
        Field::Description,
        Field::Debit,
        Field::Credit,
    ];

    /// Column header used by every renderer and exporter.
    pub fn label(self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Account => "Account",
            Field::Description => "Description",
            Field::Debit => "Debit",
            Field::Credit => "Credit",
        }
    }

    pub fn is_amount(self) -> bool {
        matches!(self, Field::Debit | Field::Credit)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown field: {0} (expected date, account, description, debit or credit)")]
pub struct ParseFieldError(pub String);

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

/// A debit or credit amount: finite and never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Option<Self> {
        // Adding 0.0 folds -0.0 into 0.0.
        (value.is_finite() && value >= 0.0).then_some(Self(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Parses user input for an amount column. Blank input means "no amount".
    pub fn parse_optional(field: Field, text: &str) -> Result<Option<Self>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Amount::new)
            .map(Some)
            .ok_or_else(|| JournalError::InvalidAmount {
                field,
                value: text.to_string(),
            })
    }

    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Amount {
    type Error = String;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Amount::new(value).ok_or_else(|| format!("amount must be finite and >= 0, got {value}"))
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0 < 1e15 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One ledger line.
///
/// At most one of `debit`/`credit` is expected to be populated, but nothing enforces
/// it; see [`JournalEntry::is_double_sided`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: String,
    pub account: String,
    pub description: String,
    pub debit: Option<Amount>,
    pub credit: Option<Amount>,
}

impl JournalEntry {
    pub fn new(
        date: impl Into<String>,
        account: impl Into<String>,
        description: impl Into<String>,
        debit: Option<Amount>,
        credit: Option<Amount>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: date.into(),
            account: account.into(),
            description: description.into(),
            debit,
            credit,
        }
    }

    /// The value of `field` as it is shown on screen; absent amounts are empty.
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::Date => self.date.clone(),
            Field::Account => self.account.clone(),
            Field::Description => self.description.clone(),
            Field::Debit => self.debit.map(|a| a.to_string()).unwrap_or_default(),
            Field::Credit => self.credit.map(|a| a.to_string()).unwrap_or_default(),
        }
    }

    pub fn amount(&self, field: Field) -> Option<Amount> {
        match field {
            Field::Debit => self.debit,
            Field::Credit => self.credit,
            _ => None,
        }
    }

    pub fn is_double_sided(&self) -> bool {
        self.debit.is_some() && self.credit.is_some()
    }
}
