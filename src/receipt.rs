use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{LineItem, OrderType};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderDetails {
    Delivery { address: String },
    DineIn {
        packs: u32,
        time: NaiveTime,
        /// Time as the customer entered it, trimmed
        time_input: String,
    },
}

impl OrderDetails {
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderDetails::Delivery { .. } => OrderType::Delivery,
            OrderDetails::DineIn { .. } => OrderType::DineIn,
        }
    }
}

/// Frozen copy of a confirmed order. Built before the cart is cleared and never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total: f64,
    pub details: OrderDetails,
    pub issued_at: String,
}

impl Receipt {
    pub fn new(items: &[LineItem], total: f64, details: OrderDetails) -> Self {
        let lines = items
            .iter()
            .map(|item| ReceiptLine {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.price,
                subtotal: item.subtotal(),
            })
            .collect();

        Receipt {
            lines,
            total,
            details,
            issued_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn order_type(&self) -> OrderType {
        self.details.order_type()
    }

    pub fn render(&self, currency: &str) -> String {
        let mut out = String::from("Receipt\n");

        for line in &self.lines {
            out.push_str(&format!(
                "  {} x {} - {}\n",
                line.name,
                line.quantity,
                format_amount(currency, line.subtotal)
            ));
        }

        out.push_str(&format!("Total: {}\n", format_amount(currency, self.total)));
        out.push_str(&format!("Order Type: {}\n", self.order_type()));

        match &self.details {
            OrderDetails::Delivery { address } => {
                out.push_str(&format!("Delivery Address: {}\n", address));
            }
            OrderDetails::DineIn {
                packs, time_input, ..
            } => {
                out.push_str(&format!("Packs: {}\n", packs));
                out.push_str(&format!("Time: {}\n", time_input));
            }
        }

        out
    }
}

pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}
