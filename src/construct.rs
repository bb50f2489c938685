use crate::coerce;
use crate::error::DocError;
use crate::node::{HIDE_KEY, Node};
use crate::schema::Schema;
use serde_json::Value as Raw;
use std::sync::Arc;
use tracing::debug;

impl Node {
    // Raw input must be a tree; cycles are not detected.
    pub fn construct(schema: &Arc<Schema>, ty: &str, raw: &Raw) -> Result<Node, DocError> {
        let mut node = Node::new(schema, ty)?;
        node.populate(raw)?;
        Ok(node)
    }

    /// Applies a raw mapping on top of this node's current settings.
    ///
    /// Unknown keys are ignored and `null` values are skipped. Settings are
    /// stored as they are read, so an error leaves earlier keys in place.
    pub fn populate(&mut self, raw: &Raw) -> Result<(), DocError> {
        let entries = match raw {
            Raw::Null => return Ok(()),
            Raw::Object(entries) => entries,
            other => return Err(DocError::malformed(self.type_name(), "object", other)),
        };

        for (key, value) in entries {
            if key == HIDE_KEY {
                if value.is_null() {
                    continue;
                }
                self.hide = value
                    .as_bool()
                    .ok_or_else(|| DocError::malformed(HIDE_KEY, "boolean", value))?;
            } else if let Some(setting) = self.declaration(key) {
                if value.is_null() {
                    continue;
                }
                let converted = coerce::coerce(self.schema(), key, &setting.shape, value)?;
                if self.is_instance_setting(key) {
                    self.merge(key, converted)?;
                } else {
                    self.set(key, converted)?;
                }
            } else {
                debug!(node_type = self.type_name(), key = key.as_str(), "ignoring unknown key");
            }
        }
        Ok(())
    }
}
