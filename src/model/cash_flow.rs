use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum CashFlowType {
    Input = 0,
    Output = 1,
}

impl Default for CashFlowType {
    fn default() -> Self {
        CashFlowType::Input
    }
}

impl From<CashFlowType> for i32 {
    fn from(t: CashFlowType) -> Self {
        t as i32
    }
}

impl TryFrom<i32> for CashFlowType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CashFlowType::Input),
            1 => Ok(CashFlowType::Output),
            other => Err(format!("unknown cash flow type code: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum CashFlowCategory {
    Sales = 0,
    Services = 1,
    Rent = 2,
    Salaries = 3,
    Marketing = 4,
    Others = 5,
}

impl Default for CashFlowCategory {
    fn default() -> Self {
        CashFlowCategory::Others
    }
}

impl From<CashFlowCategory> for i32 {
    fn from(c: CashFlowCategory) -> Self {
        c as i32
    }
}

impl TryFrom<i32> for CashFlowCategory {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CashFlowCategory::Sales),
            1 => Ok(CashFlowCategory::Services),
            2 => Ok(CashFlowCategory::Rent),
            3 => Ok(CashFlowCategory::Salaries),
            4 => Ok(CashFlowCategory::Marketing),
            5 => Ok(CashFlowCategory::Others),
            other => Err(format!("unknown cash flow category code: {other}")),
        }
    }
}

/// Ledger entry, optionally tied to an order installment. The wire names
/// for the expected/actual pairs come from the backend contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub flow_type: CashFlowType,
    #[serde(default)]
    pub category: CashFlowCategory,
    #[serde(rename = "expectedDateReceive")]
    pub expected_date: String,
    #[serde(rename = "expectedValueReceive")]
    pub expected_value: f64,
    #[serde(rename = "dateReceive", default, skip_serializing_if = "Option::is_none")]
    pub actual_date: Option<String>,
    #[serde(rename = "valueReceive", default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<f64>,
}

impl CashFlow {
    /// An entry is realized once the money actually moved.
    pub fn realized(&self) -> bool {
        self.actual_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realized_follows_actual_date() {
        let mut entry = CashFlow {
            expected_date: "2024-05-01".into(),
            expected_value: 1200.0,
            ..Default::default()
        };
        assert!(!entry.realized());
        entry.actual_date = Some("2024-05-03".into());
        entry.actual_value = Some(1180.0);
        assert!(entry.realized());
    }

    #[test]
    fn test_wire_names_for_expected_and_actual() {
        let entry = CashFlow {
            flow_type: CashFlowType::Output,
            category: CashFlowCategory::Rent,
            expected_date: "2024-05-01".into(),
            expected_value: 900.0,
            ..Default::default()
        };
        let raw = serde_json::to_string(&entry).unwrap();
        assert!(raw.contains(r#""type":1"#));
        assert!(raw.contains(r#""category":2"#));
        assert!(raw.contains(r#""expectedDateReceive":"2024-05-01""#));
        assert!(raw.contains(r#""expectedValueReceive":900.0"#));
        assert!(!raw.contains("dateReceive\":null"));
        assert!(!raw.contains("null"));
    }
}
