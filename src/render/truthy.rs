use serde_json::Value;

/// Return true if the given [`Value`] is truthy.
///
/// An absent value, `null`, `false`, zero and the empty string are falsy.
/// Everything else is truthy, including empty arrays and objects.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(bo)) => *bo,
        Some(Value::Number(nu)) => nu.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(st)) => !st.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}
