use thiserror::Error;

/// Reasons an order cannot be confirmed. Messages are shown to the customer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Your cart is empty. Add items before confirming your order.")]
    EmptyCart,

    #[error("Please enter your delivery address.")]
    MissingAddress,

    #[error("Please enter a valid number of packs.")]
    InvalidPackCount,

    #[error("Please select a time between {open}:00 and {close}:00.")]
    OutOfHours { open: u32, close: u32 },
}

/// Caller passed something the cart cannot hold.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("No cart line at index {index} (cart has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Quantity of {name} is already at the maximum")]
    QuantityOverflow { name: String },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid serving window {open}..{close}: opening hour must precede closing hour, closing hour at most 24")]
    InvalidWindow { open: u32, close: u32 },
}
