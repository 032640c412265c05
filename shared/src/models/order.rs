//! Order Model
//!
//! The order is the only entity with a lifecycle. The status flow is
//! advisory: it is enforced by what the clients offer as the next action,
//! never by the server, which accepts any enum value from any prior state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status (订单状态)
///
/// `"new"` is accepted on input as a legacy synonym of `placed` and is never
/// emitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    #[serde(alias = "new")]
    Placed,
    Confirmed,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Placed,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// No further transitions are intended once served or cancelled.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Served | OrderStatus::Cancelled)
    }

    /// The intended forward step (admin "advance" button).
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Served),
            OrderStatus::Served | OrderStatus::Cancelled => None,
        }
    }

    /// Every transition the clients offer from the given state: the forward
    /// step plus cancellation while non-terminal.
    pub fn allowed_next(self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Placed => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Preparing, OrderStatus::Cancelled],
            OrderStatus::Preparing => &[OrderStatus::Ready, OrderStatus::Cancelled],
            OrderStatus::Ready => &[OrderStatus::Served, OrderStatus::Cancelled],
            OrderStatus::Served | OrderStatus::Cancelled => &[],
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item
///
/// Name and price are snapshots taken from the cart at checkout, not live
/// references into the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: i32,
    /// Unit price in currency unit
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Order entity (订单)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    pub table_number: i32,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    /// Client-computed total; the server stores it verbatim.
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order payload (customer checkout)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub restaurant_id: String,
    pub table_number: i32,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update order payload (typically a status change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_chain_reaches_served() {
        let mut status = OrderStatus::Placed;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                OrderStatus::Placed,
                OrderStatus::Confirmed,
                OrderStatus::Preparing,
                OrderStatus::Ready,
                OrderStatus::Served,
            ]
        );
    }

    #[test]
    fn terminal_states_offer_nothing() {
        assert!(OrderStatus::Served.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert_eq!(OrderStatus::Served.next(), None);
        assert_eq!(OrderStatus::Cancelled.next(), None);
        assert!(OrderStatus::Served.allowed_next().is_empty());
        assert!(OrderStatus::Cancelled.allowed_next().is_empty());
    }

    #[test]
    fn cancel_allowed_from_every_non_terminal_state() {
        for status in OrderStatus::ALL {
            if status.is_terminal() {
                continue;
            }
            assert!(
                status.allowed_next().contains(&OrderStatus::Cancelled),
                "{status} should allow cancellation"
            );
        }
    }

    #[test]
    fn allowed_next_agrees_with_next() {
        for status in OrderStatus::ALL {
            if let Some(next) = status.next() {
                assert!(status.allowed_next().contains(&next));
            }
        }
    }

    #[test]
    fn new_is_an_input_alias_of_placed() {
        let parsed: OrderStatus = serde_json::from_str("\"new\"").unwrap();
        assert_eq!(parsed, OrderStatus::Placed);
        // Never emitted back.
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"placed\"");
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<OrderStatus>("\"finished\"").is_err());
    }

    #[test]
    fn default_status_is_placed() {
        assert_eq!(OrderStatus::default(), OrderStatus::Placed);
    }

    #[test]
    fn order_wire_fields_are_camel_case() {
        let order = Order {
            id: "o1".into(),
            restaurant_id: "r1".into(),
            table_number: 4,
            items: vec![OrderItem {
                menu_item_id: "m1".into(),
                name: "Tea".into(),
                quantity: 2,
                price: 49.0,
                note: None,
            }],
            status: OrderStatus::Placed,
            total_amount: 98.0,
            notes: None,
            rejection_reason: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["restaurantId"], "r1");
        assert_eq!(json["tableNumber"], 4);
        assert_eq!(json["totalAmount"], 98.0);
        assert_eq!(json["status"], "placed");
        assert_eq!(json["items"][0]["menuItemId"], "m1");
        assert!(json.get("rejectionReason").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
