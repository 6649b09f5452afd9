use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        LineItem {
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Delivery,
    #[serde(rename = "Dine-in", alias = "DineIn")]
    DineIn,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Delivery => write!(f, "Delivery"),
            OrderType::DineIn => write!(f, "Dine-in"),
        }
    }
}

/// Raw form input captured at the moment the order is confirmed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderRequest {
    pub order_type: OrderType,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub pack_count: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl OrderRequest {
    pub fn delivery(address: impl Into<String>) -> Self {
        OrderRequest {
            order_type: OrderType::Delivery,
            address: Some(address.into()),
            pack_count: None,
            time: None,
        }
    }

    pub fn dine_in(pack_count: impl Into<String>, time: impl Into<String>) -> Self {
        OrderRequest {
            order_type: OrderType::DineIn,
            address: None,
            pack_count: Some(pack_count.into()),
            time: Some(time.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Confirmed,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LineView {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

impl From<&LineItem> for LineView {
    fn from(item: &LineItem) -> Self {
        LineView {
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            subtotal: item.subtotal(),
        }
    }
}

/// What the list view redraws after every state change.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartView {
    pub items: Vec<LineView>,
    pub total: f64,
    pub item_count: u64,
    pub order_confirmed: bool,
}
