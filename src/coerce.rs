use crate::error::DocError;
use crate::node::Node;
use crate::reference::{self, Reference};
use crate::schema::Schema;
use crate::setting::Shape;
use crate::value::{Child, Value};
use indexmap::IndexMap;
use serde_json::Value as Raw;
use std::sync::Arc;
use tracing::{debug, trace};

pub fn coerce(
    schema: &Arc<Schema>,
    setting: &str,
    shape: &Shape,
    raw: &Raw,
) -> Result<Value, DocError> {
    trace!(setting, %shape, "coercing raw value");
    match shape {
        Shape::MapOf(ty) => {
            let entries = raw
                .as_object()
                .ok_or_else(|| DocError::malformed(setting, "object", raw))?;
            let mut map = IndexMap::with_capacity(entries.len());
            for (key, item) in entries {
                map.insert(key.clone(), coerce_child(schema, setting, ty, item)?);
            }
            Ok(Value::Map(map))
        }
        Shape::ListOf(ty) => {
            let items = raw
                .as_array()
                .ok_or_else(|| DocError::malformed(setting, "array", raw))?;
            let list = items
                .iter()
                .map(|item| coerce_child(schema, setting, ty, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(list))
        }
        Shape::Node(ty) => Ok(Value::Child(Box::new(coerce_child(
            schema, setting, ty, raw,
        )?))),
        Shape::Scalar => Ok(Value::Scalar(raw.clone())),
    }
}

// A `$ref` marker becomes a reference whatever node type the slot declares.
pub fn coerce_child(
    schema: &Arc<Schema>,
    setting: &str,
    ty: &str,
    raw: &Raw,
) -> Result<Child, DocError> {
    if schema.node_type(ty).is_none() {
        return Err(DocError::UnknownCoercionShape(ty.to_string()));
    }
    if reference::is_marker(raw) {
        debug!(setting, node_type = ty, "reference substituted for node");
        return Ok(Child::Ref(Reference::from_marker(setting, raw)?));
    }
    Ok(Child::Node(Node::construct(schema, ty, raw)?))
}

pub fn coerce_value(
    schema: &Arc<Schema>,
    setting: &str,
    shape: &Shape,
    value: Value,
) -> Result<Value, DocError> {
    let mismatch = || DocError::ShapeMismatch {
        setting: setting.to_string(),
        expected: shape.to_string(),
    };

    match (shape, value) {
        (Shape::Scalar, value @ Value::Scalar(_)) => Ok(value),
        (_, Value::Scalar(raw)) => coerce(schema, setting, shape, &raw),
        (Shape::Node(ty), Value::Child(child)) if child.fits(ty) => Ok(Value::Child(child)),
        (Shape::ListOf(ty), Value::List(items)) if items.iter().all(|c| c.fits(ty)) => {
            Ok(Value::List(items))
        }
        (Shape::MapOf(ty), Value::Map(map)) if map.values().all(|c| c.fits(ty)) => {
            Ok(Value::Map(map))
        }
        _ => Err(mismatch()),
    }
}
