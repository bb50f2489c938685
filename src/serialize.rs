use crate::error::DocError;
use crate::node::Node;
use crate::value::{Child, Value};
use serde_json::{Map, Value as Raw};
use std::borrow::Cow;

impl Node {
    /// Walks the tree back into plain JSON, in setting declaration order.
    ///
    /// Unset settings are omitted. Hidden child nodes are dropped, and a
    /// list or map of nodes that ends up empty is omitted as well. Reading
    /// each setting applies defaults and may fail on a missing required
    /// setting anywhere in the tree. Nodes materialized from a default are
    /// written from their stored settings only, so a type whose default
    /// refers back to itself terminates.
    pub fn to_json(&self) -> Result<Raw, DocError> {
        self.write_json(true)
    }

    fn write_json(&self, with_defaults: bool) -> Result<Raw, DocError> {
        let mut out = Map::new();
        for name in self.all_names() {
            let value = if with_defaults {
                self.get(name)?
            } else {
                self.stored(name).map(Cow::Borrowed)
            };
            let Some(value) = value else {
                continue;
            };
            let nested_defaults = with_defaults && matches!(value, Cow::Borrowed(_));
            if let Some(json) = value_to_json(&value, nested_defaults)? {
                out.insert(name.to_string(), json);
            }
        }
        Ok(Raw::Object(out))
    }
}

fn child_to_json(child: &Child, with_defaults: bool) -> Result<Raw, DocError> {
    match child {
        Child::Node(node) => node.write_json(with_defaults),
        Child::Ref(reference) => Ok(reference.to_json()),
    }
}

fn value_to_json(value: &Value, with_defaults: bool) -> Result<Option<Raw>, DocError> {
    match value {
        Value::Scalar(raw) => Ok(Some(raw.clone())),
        Value::Child(child) if child.is_hidden() => Ok(None),
        Value::Child(child) => child_to_json(child, with_defaults).map(Some),
        Value::List(items) => {
            let items = items
                .iter()
                .filter(|child| !child.is_hidden())
                .map(|child| child_to_json(child, with_defaults))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((!items.is_empty()).then_some(Raw::Array(items)))
        }
        Value::Map(entries) => {
            let mut map = Map::new();
            for (key, child) in entries.iter().filter(|(_, child)| !child.is_hidden()) {
                map.insert(key.clone(), child_to_json(child, with_defaults)?);
            }
            Ok((!map.is_empty()).then_some(Raw::Object(map)))
        }
    }
}
