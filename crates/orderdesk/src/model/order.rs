//! # Order Records
//!
//! The persisted order entity and its creation draft, serialized exactly as
//! the remote store expects them: camelCase field names, the category under
//! the legacy name `type`, the status under `orderStatus`, and the quantity
//! as the string the form captured.

use remote_store::Resource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the store when an order is created.
///
/// Serialized transparently as the bare number, and displayed the same way
/// so it can be spliced into request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u32);

impl From<u32> for OrderId {
    fn from(raw: u32) -> Self {
        OrderId(raw)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a persisted order.
///
/// `Cancelled` is never a resting state: committing it on the board deletes
/// the record instead of persisting the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Received,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Received => write!(f, "Received"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A persisted purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub product_name: String,
    /// Wire name is `type`, a reserved word here.
    #[serde(rename = "type")]
    pub category: String,
    /// Quantity as entered on the form; the store keeps it as a string.
    pub quantity: String,
    #[serde(rename = "orderStatus")]
    pub status: OrderStatus,
}

/// Creation payload; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub product_name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub quantity: String,
    #[serde(rename = "orderStatus")]
    pub status: OrderStatus,
}

impl Resource for Order {
    type Id = OrderId;
    type Draft = OrderDraft;

    const COLLECTION: &'static str = "orders";

    fn id(&self) -> OrderId {
        self.id
    }

    fn from_draft(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            product_name: draft.product_name,
            category: draft.category,
            quantity: draft.quantity,
            status: draft.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_serializes_with_legacy_wire_names() {
        let order = Order {
            id: OrderId::from(1),
            product_name: "Hammer".to_string(),
            category: "Category".to_string(),
            quantity: "10".to_string(),
            status: OrderStatus::Pending,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "productName": "Hammer",
                "type": "Category",
                "quantity": "10",
                "orderStatus": "Pending"
            })
        );
    }

    #[test]
    fn order_round_trips_through_wire_json() {
        let raw = r#"{"id":3,"productName":"Socket Set","type":"Category","quantity":"2","orderStatus":"Received"}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.id, OrderId::from(3));
        assert_eq!(order.product_name, "Socket Set");
        assert_eq!(order.quantity, "2");
        assert_eq!(order.status, OrderStatus::Received);

        let back: Order = serde_json::from_str(&serde_json::to_string(&order).unwrap()).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn draft_carries_no_id() {
        let draft = OrderDraft {
            product_name: "Hammer".to_string(),
            category: "Category".to_string(),
            quantity: "10".to_string(),
            status: OrderStatus::Pending,
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["orderStatus"], "Pending");
    }

    #[test]
    fn status_displays_as_wire_value() {
        assert_eq!(OrderStatus::Pending.to_string(), "Pending");
        assert_eq!(OrderStatus::Received.to_string(), "Received");
        assert_eq!(OrderStatus::Cancelled.to_string(), "Cancelled");
    }
}
