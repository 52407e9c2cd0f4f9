use serde_json::Value;

/// Copies `data` into `ohlcv` when an OHLCV response object has the former
/// but not the latter. Every other shape is returned unchanged.
pub fn alias_ohlcv(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        if !map.contains_key("ohlcv") {
            if let Some(data) = map.get("data").cloned() {
                map.insert("ohlcv".to_string(), data);
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::alias_ohlcv;

    #[test]
    fn data_is_aliased_when_ohlcv_missing() {
        let candles = json!([{"time_open": "2024-01-01T00:00:00Z", "open": 1.0, "close": 1.1}]);
        let out = alias_ohlcv(json!({ "data": candles.clone() }));
        assert_eq!(out, json!({ "data": candles.clone(), "ohlcv": candles }));
    }

    #[test]
    fn existing_ohlcv_is_kept() {
        let input = json!({ "data": [1], "ohlcv": [2] });
        assert_eq!(alias_ohlcv(input.clone()), input);
    }

    #[test]
    fn other_shapes_pass_through() {
        let array = json!([{"open": 1.0}]);
        assert_eq!(alias_ohlcv(array.clone()), array);

        let no_data = json!({ "candles": [] });
        assert_eq!(alias_ohlcv(no_data.clone()), no_data);
    }
}
