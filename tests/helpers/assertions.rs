// Assertion helpers for JSON responses.
//
// Decimals serialize as strings, so amounts are compared numerically
// rather than textually ("4500" and "4500.00" are the same amount).

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Read a decimal field that may be a JSON string or number
pub fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).unwrap(),
        other => panic!("Expected a decimal, got {}", other),
    }
}

/// Assert a JSON field holds the expected amount
pub fn assert_amount(value: &Value, expected: Decimal) {
    assert_eq!(decimal(value), expected, "amount mismatch in {}", value);
}

/// Assert the standard error envelope with the given status code
pub fn assert_error_envelope(body: &Value, code: u16) {
    let error = body.get("error").expect("missing error object");
    assert_eq!(error["code"].as_u64(), Some(u64::from(code)));
    assert!(error["message"].is_string());
}
