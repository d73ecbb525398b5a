// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::Local;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{LedgerError, ValidationError};
use crate::models::{Category, Transaction, TransactionDraft, TransactionKind};
use crate::store::KvStore;

/// Store key holding the serialized transaction collection.
pub const TRANSACTIONS_KEY: &str = "financeTrackerTransactions";
/// Store key holding the next id to assign.
pub const NEXT_ID_KEY: &str = "financeTrackerNextId";

const FIRST_ID: i64 = 1;
const DATE_FORMAT: &str = "%b %-d, %Y";
const CSV_HEADER: &str = "Date,Description,Category,Type,Amount";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent first.
    Recency,
    /// The order transactions were recorded in.
    Insertion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    /// Income minus expenses; negative when spending exceeds earnings.
    pub balance: Decimal,
}

/// The transaction collection, its id counter, and the store they persist to.
///
/// The ledger is the sole owner and sole mutator of its transactions. Every
/// successful mutation is followed by a save; save failures are logged and
/// swallowed so the in-memory state stays authoritative for the session.
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: i64,
    store: Box<dyn KvStore>,
}

impl Ledger {
    /// Rebuild a ledger from whatever the store holds.
    ///
    /// A missing or unparseable saved state degrades to an empty ledger with
    /// the id counter reset to 1; startup never fails on bad data.
    pub fn restore(store: Box<dyn KvStore>) -> Self {
        let (transactions, next_id) = load_state(store.as_ref());
        if !transactions.is_empty() {
            debug!(count = transactions.len(), "restored saved transactions");
        }
        Self {
            transactions,
            next_id,
            store,
        }
    }

    /// Validate a draft and record it. On success the transaction gets the
    /// next id, a creation date and timestamp, and the state is saved. On
    /// failure nothing changes.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<Transaction, LedgerError> {
        let (description, amount, kind, category) = validate(&draft)?;
        let now = Local::now();
        let transaction = Transaction {
            id: self.next_id,
            description,
            amount,
            kind,
            category,
            date: now.format(DATE_FORMAT).to_string(),
            timestamp: now.timestamp_millis(),
        };
        self.next_id += 1;
        self.transactions.push(transaction.clone());
        self.persist();
        Ok(transaction)
    }

    /// Delete by id. Returns whether anything was removed; removing an
    /// unknown id is a no-op and does not touch the store. The id counter
    /// never moves backwards.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Non-destructive view of the collection.
    pub fn list(&self, order: SortOrder) -> Vec<&Transaction> {
        let mut view: Vec<&Transaction> = self.transactions.iter().collect();
        if order == SortOrder::Recency {
            // Ties on timestamp (same-millisecond adds) break toward the
            // higher id, which is the later insertion.
            view.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        }
        view
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn totals(&self) -> Totals {
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for t in &self.transactions {
            match t.kind {
                TransactionKind::Income => income += t.amount,
                TransactionKind::Expense => expenses += t.amount,
            }
        }
        Totals {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    /// Summed expense amounts per category. Categories with no expense
    /// transactions are absent rather than present with zero.
    pub fn spending_by_category(&self) -> BTreeMap<Category, Decimal> {
        let mut spend = BTreeMap::new();
        for t in &self.transactions {
            if t.kind == TransactionKind::Expense {
                *spend.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
            }
        }
        spend
    }

    /// Render the collection as CSV text, one row per transaction in
    /// insertion order. Descriptions are wrapped in double quotes; embedded
    /// quotes are passed through unescaped.
    pub fn export_csv(&self) -> Result<String, LedgerError> {
        if self.transactions.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        let mut lines = Vec::with_capacity(self.transactions.len() + 1);
        lines.push(CSV_HEADER.to_string());
        for t in &self.transactions {
            lines.push(format!(
                "{},\"{}\",{},{},{}",
                t.date,
                t.description,
                t.category.slug(),
                t.kind,
                t.amount
            ));
        }
        Ok(lines.join("\n"))
    }

    /// Record five representative sample transactions through the normal
    /// `add` path, so they validate, number, and save like user input.
    pub fn seed_sample_data(&mut self) -> Result<Vec<Transaction>, LedgerError> {
        const SAMPLES: [(&str, &str, &str, &str); 5] = [
            ("Salary Payment", "3000", "income", "salary"),
            ("Grocery Shopping", "150", "expense", "food"),
            ("Gas Bill", "80", "expense", "utilities"),
            ("Freelance Project", "500", "income", "freelance"),
            ("Movie Night", "25", "expense", "entertainment"),
        ];
        let mut created = Vec::with_capacity(SAMPLES.len());
        for (description, amount, kind, category) in SAMPLES {
            created.push(self.add(TransactionDraft::new(description, amount, kind, category))?);
        }
        Ok(created)
    }

    fn persist(&self) {
        let payload = match serde_json::to_vec(&self.transactions) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(%err, "could not serialize ledger, skipping save");
                return;
            }
        };
        if let Err(err) = self.store.save(TRANSACTIONS_KEY, &payload) {
            warn!(%err, "could not save transactions");
            return;
        }
        if let Err(err) = self
            .store
            .save(NEXT_ID_KEY, self.next_id.to_string().as_bytes())
        {
            warn!(%err, "could not save id counter");
            return;
        }
        debug!(transactions = self.transactions.len(), "ledger state saved");
    }
}

fn validate(
    draft: &TransactionDraft,
) -> Result<(String, Decimal, TransactionKind, Category), ValidationError> {
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    let amount: Decimal = draft
        .amount
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(draft.amount.clone()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    let kind = TransactionKind::parse(&draft.kind)?;
    let category = draft.category.trim();
    if category.is_empty() {
        return Err(ValidationError::MissingCategory);
    }
    Ok((
        description.to_string(),
        amount,
        kind,
        Category::new(category),
    ))
}

fn load_state(store: &dyn KvStore) -> (Vec<Transaction>, i64) {
    let empty = (Vec::new(), FIRST_ID);
    let raw_transactions = match store.load(TRANSACTIONS_KEY) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(%err, "could not read saved transactions, starting empty");
            return empty;
        }
    };
    let raw_next_id = match store.load(NEXT_ID_KEY) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(%err, "could not read saved id counter, starting empty");
            return empty;
        }
    };
    // The two keys are written together; a lone key counts as corrupt state
    // and is discarded whole, no partial recovery.
    let (raw_transactions, raw_next_id) = match (raw_transactions, raw_next_id) {
        (None, None) => return empty,
        (Some(t), Some(n)) => (t, n),
        _ => {
            warn!("partial saved state found, discarding");
            return empty;
        }
    };
    let transactions: Vec<Transaction> = match serde_json::from_slice(&raw_transactions) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(%err, "discarding malformed saved transactions");
            return empty;
        }
    };
    let next_id = match std::str::from_utf8(&raw_next_id)
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
    {
        Some(n) => n,
        None => {
            warn!("discarding saved state with malformed id counter");
            return empty;
        }
    };
    (transactions, next_id)
}
