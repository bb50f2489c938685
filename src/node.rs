use crate::coerce;
use crate::error::DocError;
use crate::schema::Schema;
use crate::setting::Setting;
use crate::value::{Child, Value};
use indexmap::IndexMap;
use serde_json::Value as Raw;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const HIDE_KEY: &str = "hide";

#[derive(Clone)]
pub struct Node {
    schema: Arc<Schema>,
    ty: String,
    pub hide: bool,
    instance_settings: IndexMap<String, Setting>,
    settings: HashMap<String, Value>,
}

impl Node {
    pub fn new(schema: &Arc<Schema>, ty: &str) -> Result<Self, DocError> {
        if schema.node_type(ty).is_none() {
            return Err(DocError::UnknownNodeType(ty.to_string()));
        }
        Ok(Self {
            schema: Arc::clone(schema),
            ty: ty.to_string(),
            hide: false,
            instance_settings: IndexMap::new(),
            settings: HashMap::new(),
        })
    }

    pub fn type_name(&self) -> &str {
        &self.ty
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn declaration(&self, name: &str) -> Option<&Setting> {
        self.instance_settings.get(name).or_else(|| {
            self.schema
                .node_type(&self.ty)
                .and_then(|node_type| node_type.setting(name))
        })
    }

    pub fn exists(&self, name: &str) -> bool {
        self.declaration(name).is_some()
    }

    pub fn all_names(&self) -> Vec<&str> {
        let type_level = self
            .schema
            .node_type(&self.ty)
            .into_iter()
            .flat_map(|node_type| node_type.settings.keys());
        type_level
            .chain(self.instance_settings.keys())
            .map(String::as_str)
            .collect()
    }

    pub fn declare_instance(
        &mut self,
        name: &str,
        setting: Setting,
        initial: Option<Raw>,
    ) -> Result<(), DocError> {
        if self.exists(name) {
            return Err(DocError::DuplicateInstanceDeclaration(name.to_string()));
        }
        let initial = match initial {
            Some(raw) if !raw.is_null() => {
                Some(coerce::coerce(&self.schema, name, &setting.shape, &raw)?)
            }
            _ => None,
        };
        self.instance_settings.insert(name.to_string(), setting);
        if let Some(value) = initial {
            self.settings.insert(name.to_string(), value);
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.settings.contains_key(name)
    }

    pub fn stored(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }

    pub fn stored_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.settings.get_mut(name)
    }

    /// Reads a setting: the stored value, else the default coerced through
    /// the setting's shape, else `MissingRequiredSetting` when required,
    /// else `None`.
    pub fn get(&self, name: &str) -> Result<Option<Cow<'_, Value>>, DocError> {
        let setting = self.declaration(name).ok_or_else(|| DocError::UnknownSetting {
            node_type: self.ty.clone(),
            setting: name.to_string(),
        })?;

        if let Some(value) = self.settings.get(name) {
            return Ok(Some(Cow::Borrowed(value)));
        }

        if let Some(default) = &setting.default {
            let raw = default.resolve(self);
            if !raw.is_null() {
                let value = coerce::coerce(&self.schema, name, &setting.shape, &raw)?;
                return Ok(Some(Cow::Owned(value)));
            }
        }

        if setting.required {
            return Err(DocError::MissingRequiredSetting {
                node_type: self.ty.clone(),
                setting: name.to_string(),
            });
        }
        Ok(None)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), DocError> {
        let value = self.prepare(name, value.into())?;
        self.settings.insert(name.to_string(), value);
        Ok(())
    }

    pub fn assign_if_unset(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<bool, DocError> {
        if self.is_set(name) {
            return Ok(false);
        }
        self.set(name, value)?;
        Ok(true)
    }

    // Maps are merged entry by entry; anything else replaces.
    pub fn merge(&mut self, name: &str, value: impl Into<Value>) -> Result<(), DocError> {
        let incoming = self.prepare(name, value.into())?;
        match self.settings.get_mut(name) {
            Some(existing) => merge_values(existing, incoming),
            None => {
                self.settings.insert(name.to_string(), incoming);
            }
        }
        Ok(())
    }

    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.settings.remove(name)
    }

    pub(crate) fn is_instance_setting(&self, name: &str) -> bool {
        self.instance_settings.contains_key(name)
    }

    fn prepare(&self, name: &str, value: Value) -> Result<Value, DocError> {
        let setting = self.declaration(name).ok_or_else(|| DocError::UnknownSetting {
            node_type: self.ty.clone(),
            setting: name.to_string(),
        })?;
        coerce::coerce_value(&self.schema, name, &setting.shape, value)
    }

    fn overlay(&mut self, other: Node) {
        self.hide = self.hide || other.hide;
        for (name, setting) in other.instance_settings {
            self.instance_settings.entry(name).or_insert(setting);
        }
        self.settings.extend(other.settings);
    }
}

fn merge_values(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Map(current), Value::Map(entries)) => {
            for (key, child) in entries {
                if let Child::Node(other) = child {
                    if let Some(Child::Node(node)) = current.get_mut(&key) {
                        node.overlay(other);
                        continue;
                    }
                    current.insert(key, Child::Node(other));
                } else {
                    current.insert(key, child);
                }
            }
        }
        (Value::Scalar(Raw::Object(current)), Value::Scalar(Raw::Object(entries))) => {
            for (key, raw) in entries {
                if let Raw::Object(fields) = raw {
                    if let Some(Raw::Object(inner)) = current.get_mut(&key) {
                        inner.extend(fields);
                        continue;
                    }
                    current.insert(key, Raw::Object(fields));
                } else {
                    current.insert(key, raw);
                }
            }
        }
        (existing, incoming) => *existing = incoming,
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.hide == other.hide && self.settings == other.settings
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("ty", &self.ty)
            .field("hide", &self.hide)
            .field("instance_settings", &self.instance_settings.keys())
            .field("settings", &self.settings)
            .finish()
    }
}
