use serde::{Deserialize, Serialize};

use crate::model::customer::Customer;
use crate::model::order::Order;
use crate::model::product::Product;

/// Production ticket status, as wire integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ServiceOrderStatus {
    Pending = 0,
    Running = 1,
    Completed = 2,
}

impl ServiceOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceOrderStatus::Pending => "Pending",
            ServiceOrderStatus::Running => "Running",
            ServiceOrderStatus::Completed => "Completed",
        }
    }
}

impl Default for ServiceOrderStatus {
    fn default() -> Self {
        ServiceOrderStatus::Pending
    }
}

impl From<ServiceOrderStatus> for i32 {
    fn from(status: ServiceOrderStatus) -> Self {
        status as i32
    }
}

impl TryFrom<i32> for ServiceOrderStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ServiceOrderStatus::Pending),
            1 => Ok(ServiceOrderStatus::Running),
            2 => Ok(ServiceOrderStatus::Completed),
            other => Err(format!("unknown service order status code: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSetup {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order_service_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InkMix {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order_service_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ink_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ink_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anilox {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order_service_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anilox_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rewinding {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order_service_id: i64,
    pub product_id: i64,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    #[serde(default, skip_serializing)]
    pub product: Option<Product>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traceability {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order_service_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_material_ink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
    #[serde(default)]
    pub quantity: f64,
}

/// Production ticket. Sub-collections are replaced wholesale on update,
/// never patched item-wise, so they always serialize (an empty list means
/// "clear"). Wire names keep the backend's irregular plurals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub order_id: i64,
    pub customer_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_quantity_kg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_quantity_meters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default)]
    pub status: ServiceOrderStatus,
    #[serde(default)]
    pub label_orientation: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine: Option<MachineSetup>,
    #[serde(rename = "inkMixs", default)]
    pub ink_mixes: Vec<InkMix>,
    #[serde(default)]
    pub rewindings: Vec<Rewinding>,
    #[serde(rename = "traceabilitys", default)]
    pub traceabilities: Vec<Traceability>,
    #[serde(rename = "aniloxs", default)]
    pub aniloxes: Vec<Anilox>,
    #[serde(default, skip_serializing)]
    pub order: Option<Order>,
    #[serde(default, skip_serializing)]
    pub customer: Option<Customer>,
}
