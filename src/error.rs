// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections produced while checking a candidate transaction.
///
/// A failed check leaves the ledger untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description cannot be empty")]
    EmptyDescription,

    /// The amount field did not parse as a decimal number.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    /// Amounts are always positive; the transaction type carries the sign.
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("transaction type cannot be empty")]
    MissingKind,

    #[error("unknown transaction type '{0}', expected 'income' or 'expense'")]
    UnknownKind(String),

    #[error("category cannot be empty")]
    MissingCategory,
}

/// Errors surfaced by ledger operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Export was requested while the ledger holds no transactions.
    #[error("no transactions to export")]
    EmptyLedger,
}
