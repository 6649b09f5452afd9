use chrono::{NaiveTime, Timelike};

use crate::config::ServingWindow;
use crate::error::OrderError;
use crate::models::{OrderRequest, OrderType};
use crate::receipt::OrderDetails;

/// Number of packs for a dine-in booking. Must be a whole number above zero.
pub fn parse_pack_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|packs| *packs > 0)
}

/// Accepts `HH:MM`, `HH:MM:SS`, or a bare hour.
pub fn parse_dine_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
        .or_else(|| {
            raw.parse::<u32>()
                .ok()
                .and_then(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        })
}

/// Checks the order-type specific input and extracts what goes on the receipt.
///
/// Cart emptiness is checked by the caller first; this covers rules 2-4.
pub(crate) fn validate_request(
    request: &OrderRequest,
    window: &ServingWindow,
) -> Result<OrderDetails, OrderError> {
    match request.order_type {
        OrderType::Delivery => {
            let address = request.address.as_deref().unwrap_or("").trim();
            if address.is_empty() {
                return Err(OrderError::MissingAddress);
            }
            Ok(OrderDetails::Delivery {
                address: address.to_string(),
            })
        }
        OrderType::DineIn => {
            let packs = request
                .pack_count
                .as_deref()
                .and_then(parse_pack_count)
                .ok_or(OrderError::InvalidPackCount)?;

            let out_of_hours = OrderError::OutOfHours {
                open: window.open_hour,
                close: window.close_hour,
            };
            let time = request
                .time
                .as_deref()
                .and_then(parse_dine_time)
                .ok_or_else(|| out_of_hours.clone())?;
            if !window.contains_hour(time.hour()) {
                return Err(out_of_hours);
            }

            Ok(OrderDetails::DineIn {
                packs,
                time,
                time_input: request.time.as_deref().unwrap_or("").trim().to_string(),
            })
        }
    }
}
