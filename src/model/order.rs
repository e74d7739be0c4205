use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::account::Account;
use crate::model::customer::Customer;
use crate::model::product::Product;

/// Order lifecycle status, as wire integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum OrderStatus {
    Quote = 0,
    InProgress = 1,
    Completed = 2,
    Refused = 3,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Quote => "Quote",
            OrderStatus::InProgress => "InProgress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Refused => "Refused",
        }
    }

    /// Workflow gate: which transitions the UI may offer. The backend
    /// re-enforces these rules; this is a usability guard, not integrity.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        match self {
            OrderStatus::Quote => true,
            OrderStatus::InProgress => {
                matches!(next, OrderStatus::Completed | OrderStatus::Refused)
            }
            OrderStatus::Completed => false,
            OrderStatus::Refused => next == OrderStatus::Quote,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Quote
    }
}

impl From<OrderStatus> for i32 {
    fn from(status: OrderStatus) -> Self {
        status as i32
    }
}

impl TryFrom<i32> for OrderStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OrderStatus::Quote),
            1 => Ok(OrderStatus::InProgress),
            2 => Ok(OrderStatus::Completed),
            3 => Ok(OrderStatus::Refused),
            other => Err(format!("unknown order status code: {other}")),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quote" => Ok(OrderStatus::Quote),
            "in-progress" | "in_progress" | "inprogress" => Ok(OrderStatus::InProgress),
            "completed" => Ok(OrderStatus::Completed),
            "refused" => Ok(OrderStatus::Refused),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: f64,
    /// Price per unit; the wire calls this `total`.
    #[serde(rename = "total")]
    pub unit_total: f64,
    #[serde(default, skip_serializing)]
    pub product: Option<Product>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub customer_id: i64,
    pub account_id: i64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub order_number: i64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(default)]
    pub freight: f64,
    #[serde(default)]
    pub fob: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing)]
    pub account: Option<Account>,
    #[serde(default, skip_serializing)]
    pub customer: Option<Customer>,
}

impl Order {
    /// Advisory total shown while editing; the server recomputes on save.
    pub fn computed_total(&self) -> f64 {
        let items: f64 = self
            .items
            .iter()
            .map(|item| item.quantity * item.unit_total)
            .sum();
        items + self.freight - self.discount
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn item(quantity: f64, unit_total: f64) -> OrderItem {
        OrderItem {
            product_id: 1,
            quantity,
            unit_total,
            ..Default::default()
        }
    }

    #[test]
    fn test_computed_total_includes_freight_and_discount() {
        let order = Order {
            customer_id: 1,
            account_id: 1,
            freight: 50.0,
            discount: 10.0,
            items: vec![item(100.0, 1.5), item(2.0, 25.0)],
            ..Default::default()
        };
        assert_relative_eq!(order.computed_total(), 100.0 * 1.5 + 50.0 + 50.0 - 10.0);
    }

    #[test]
    fn test_quote_may_go_anywhere() {
        for next in [
            OrderStatus::Quote,
            OrderStatus::InProgress,
            OrderStatus::Completed,
            OrderStatus::Refused,
        ] {
            assert!(OrderStatus::Quote.can_transition_to(next));
        }
    }

    #[test]
    fn test_in_progress_only_finishes_or_refuses() {
        assert!(OrderStatus::InProgress.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::InProgress.can_transition_to(OrderStatus::Refused));
        assert!(!OrderStatus::InProgress.can_transition_to(OrderStatus::Quote));
    }

    #[test]
    fn test_completed_is_terminal() {
        for next in [
            OrderStatus::Quote,
            OrderStatus::InProgress,
            OrderStatus::Completed,
            OrderStatus::Refused,
        ] {
            assert!(!OrderStatus::Completed.can_transition_to(next));
        }
    }

    #[test]
    fn test_refused_only_returns_to_quote() {
        assert!(OrderStatus::Refused.can_transition_to(OrderStatus::Quote));
        assert!(!OrderStatus::Refused.can_transition_to(OrderStatus::InProgress));
        assert!(!OrderStatus::Refused.can_transition_to(OrderStatus::Completed));
    }

    #[test]
    fn test_status_round_trips_as_integer() {
        let order: Order =
            serde_json::from_str(r#"{"customerId":1,"accountId":2,"status":3}"#).unwrap();
        assert_eq!(order.status, OrderStatus::Refused);
        let raw = serde_json::to_string(&order).unwrap();
        assert!(raw.contains(r#""status":3"#));
    }

    #[test]
    fn test_relations_never_serialize_back() {
        let order = Order {
            customer_id: 1,
            account_id: 2,
            customer: Some(Customer {
                id: 1,
                corporate_name: Some("Acme".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let raw = serde_json::to_string(&order).unwrap();
        assert!(!raw.contains("Acme"));
        assert!(!raw.contains("null"));
    }
}
