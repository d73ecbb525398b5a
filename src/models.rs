// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingKind);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(ValidationError::UnknownKind(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Sign used when rendering amounts.
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open, string-backed category. Any non-empty slug is accepted; curated
/// slugs get a curated display label, everything else renders capitalized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn slug(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> String {
        match self.0.as_str() {
            "salary" => "Salary".to_string(),
            "freelance" => "Freelance".to_string(),
            "food" => "Food".to_string(),
            "transport" => "Transport".to_string(),
            "entertainment" => "Entertainment".to_string(),
            "utilities" => "Utilities".to_string(),
            "shopping" => "Shopping".to_string(),
            "education" => "Education".to_string(),
            "other" => "Other".to_string(),
            raw => capitalize(raw),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// A recorded income or expense. Immutable once created; owned by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    /// Human-readable creation date, e.g. "Jan 5, 2026".
    pub date: String,
    /// Creation instant in Unix milliseconds; used only for recency ordering.
    pub timestamp: i64,
}

/// Raw, unvalidated candidate fields for a new transaction.
///
/// `amount` stays textual so that "parses as a number" is a ledger-side check
/// rather than something each caller re-implements.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind: kind.into(),
            category: category.into(),
        }
    }
}
