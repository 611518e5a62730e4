//! 1inch aggregation API (v5.0) response shapes.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub to_token_amount: String,
    #[serde(default)]
    pub estimated_gas: Option<Value>,
    #[serde(default)]
    pub protocols: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SwapResponse {
    pub tx: Value,
    #[serde(default)]
    pub protocols: Option<Value>,
}

/// Gas figures arrive as numbers or decimal strings depending on endpoint.
pub fn gas_units(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quote_decodes_numeric_gas() {
        let raw = r#"{"toTokenAmount":"2847320000","estimatedGas":180000,"protocols":[]}"#;
        let quote: QuoteResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(quote.to_token_amount, "2847320000");
        assert_eq!(gas_units(quote.estimated_gas.as_ref()), 180_000);
    }

    #[test]
    fn gas_accepts_strings_and_defaults_to_zero() {
        assert_eq!(gas_units(Some(&json!("21000"))), 21_000);
        assert_eq!(gas_units(Some(&json!(null))), 0);
        assert_eq!(gas_units(None), 0);
    }
}
