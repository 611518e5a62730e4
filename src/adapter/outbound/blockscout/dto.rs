//! Blockscout v2 response shapes.
//!
//! Blockscout encodes most numbers as strings and leaves many fields null,
//! so everything here is optional and numeric fields go through [`Value`].

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct AddressResponse {
    #[serde(default)]
    pub coin_balance: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct TokenBalanceItem {
    pub token: TokenInfo,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, alias = "address_hash")]
    pub address: Option<String>,
    #[serde(default)]
    pub decimals: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionItem {
    pub hash: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub total_blocks: Option<Value>,
    #[serde(default)]
    pub total_transactions: Option<Value>,
    #[serde(default)]
    pub transactions_per_second: Option<Value>,
    #[serde(default)]
    pub network_utilization_percentage: Option<Value>,
    #[serde(default)]
    pub average_block_time: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    #[serde(default = "Vec::new")]
    pub chart_data: Vec<ChartPoint>,
}

#[derive(Debug, Deserialize)]
pub struct ChartPoint {
    #[serde(default)]
    pub date: String,
    pub value: Value,
}

/// Read a JSON number or numeric string as `u64`.
pub fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a JSON number or numeric string as `f64`.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_may_be_strings() {
        assert_eq!(as_u64(&json!("18756432")), Some(18_756_432));
        assert_eq!(as_u64(&json!(42)), Some(42));
        assert_eq!(as_f64(&json!("12.5")), Some(12.5));
        assert_eq!(as_f64(&Value::Null), None);
    }

    #[test]
    fn token_page_decodes_with_missing_fields() {
        let raw = r#"{
            "items": [
                {"token": {"symbol": "USDC", "decimals": "6", "address_hash": "0xa0b8"}, "value": "2500000"},
                {"token": {"symbol": null, "decimals": null}, "value": null}
            ],
            "next_page_params": null
        }"#;
        let page: Page<TokenBalanceItem> = serde_json::from_str(raw).unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].token.address.as_deref(), Some("0xa0b8"));
        assert!(page.items[1].value.is_none());
    }
}
