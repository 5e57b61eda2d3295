mod ser;

use serde_json::{Map, Number, Value};

use crate::arena::{Node, Ref};

/// Convert a tree into a `serde_json::Value`, keeping member order.
/// Non-finite doubles become `Value::Null`, as in text output.
pub(crate) fn to_json_value(value: Ref<'_>) -> Value {
    match value.node() {
        Node::Null => Value::Null,
        Node::Bool(v) => Value::Bool(*v),
        Node::Int32(v) => Value::from(*v),
        Node::UInt32(v) => Value::from(*v),
        Node::Int64(v) => Value::from(*v),
        Node::UInt64(v) => Value::from(*v),
        Node::Double(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
        Node::String(v) => Value::String(v.clone()),
        Node::Array(_) => Value::Array(value.elements().map(to_json_value).collect()),
        Node::Object(_) => Value::Object(
            value
                .members()
                .map(|(key, child)| (key.to_owned(), to_json_value(child)))
                .collect::<Map<String, Value>>(),
        ),
    }
}
