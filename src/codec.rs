//! Persisted cart layout: a JSON array of `{name, price, quantity}` records.
//!
//! Decoding checks the shape of every record instead of trusting whatever
//! was parsed, so a hand-edited or stale payload is rejected as a whole.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::LineItem;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed cart JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {index}: name must not be empty")]
    EmptyName { index: usize },

    #[error("line {index}: price {price} must be a finite, non-negative number")]
    InvalidPrice { index: usize, price: f64 },

    #[error("line {index}: quantity {quantity} must be a positive 32-bit integer")]
    InvalidQuantity { index: usize, quantity: i64 },

    #[error("line {index}: duplicate item name {name:?}")]
    DuplicateName { index: usize, name: String },
}

#[derive(Serialize)]
struct StoredLineRef<'a> {
    name: &'a str,
    price: f64,
    quantity: u32,
}

#[derive(Deserialize)]
struct StoredLine {
    name: String,
    price: f64,
    quantity: i64,
}

pub fn encode(items: &[LineItem]) -> Result<String, serde_json::Error> {
    let records: Vec<StoredLineRef<'_>> = items
        .iter()
        .map(|item| StoredLineRef {
            name: &item.name,
            price: item.price,
            quantity: item.quantity,
        })
        .collect();

    serde_json::to_string(&records)
}

pub fn decode(raw: &str) -> Result<Vec<LineItem>, DecodeError> {
    let records: Vec<StoredLine> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut items = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(DecodeError::EmptyName { index });
        }
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(DecodeError::InvalidPrice {
                index,
                price: record.price,
            });
        }
        let quantity = u32::try_from(record.quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(DecodeError::InvalidQuantity {
                index,
                quantity: record.quantity,
            })?;
        if !seen.insert(record.name.clone()) {
            return Err(DecodeError::DuplicateName {
                index,
                name: record.name,
            });
        }

        items.push(LineItem {
            name: record.name,
            price: record.price,
            quantity,
        });
    }

    Ok(items)
}
