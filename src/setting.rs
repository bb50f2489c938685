use crate::error::DocError;
use crate::node::Node;
use serde::Deserialize;
use serde_json::Value as Raw;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Node(String),
    ListOf(String),
    MapOf(String),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Node(ty) => write!(f, "{}", ty),
            Shape::ListOf(ty) => write!(f, "[{}]", ty),
            Shape::MapOf(ty) => write!(f, "{{String => {}}}", ty),
        }
    }
}

pub type ComputeFn = dyn Fn(&Node) -> Raw + Send + Sync;

/// Both kinds produce a raw value which is coerced through the setting's
/// shape on every read. Computed defaults are never cached.
#[derive(Clone)]
pub enum DefaultValue {
    Static(Raw),
    Computed(Arc<ComputeFn>),
}

impl DefaultValue {
    pub fn resolve(&self, node: &Node) -> Raw {
        match self {
            DefaultValue::Static(raw) => raw.clone(),
            DefaultValue::Computed(f) => (**f)(node),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Static(raw) => f.debug_tuple("Static").field(raw).finish(),
            DefaultValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Setting {
    pub shape: Shape,
    pub default: Option<DefaultValue>,
    pub required: bool,
}

impl Setting {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            default: None,
            required: false,
        }
    }

    pub fn scalar() -> Self {
        Self::new(Shape::Scalar)
    }

    pub fn node(ty: &str) -> Self {
        Self::new(Shape::Node(ty.to_string()))
    }

    pub fn list_of(ty: &str) -> Self {
        Self::new(Shape::ListOf(ty.to_string()))
    }

    pub fn map_of(ty: &str) -> Self {
        Self::new(Shape::MapOf(ty.to_string()))
    }

    pub fn with_default(mut self, raw: impl Into<Raw>) -> Self {
        let raw = raw.into();
        self.default = if raw.is_null() {
            None
        } else {
            Some(DefaultValue::Static(raw))
        };
        self
    }

    pub fn with_computed_default<F>(mut self, f: F) -> Self
    where
        F: Fn(&Node) -> Raw + Send + Sync + 'static,
    {
        self.default = Some(DefaultValue::Computed(Arc::new(f)));
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingSpec {
    #[serde(default)]
    pub node: Option<String>,
    #[serde(default)]
    pub list_of: Option<String>,
    #[serde(default)]
    pub map_of: Option<String>,
    #[serde(default)]
    pub default: Option<Raw>,
    #[serde(default)]
    pub required: bool,
}

impl SettingSpec {
    pub fn into_setting(self, name: &str) -> Result<Setting, DocError> {
        let shape = match (self.node, self.list_of, self.map_of) {
            (None, None, None) => Shape::Scalar,
            (Some(ty), None, None) => Shape::Node(ty),
            (None, Some(ty), None) => Shape::ListOf(ty),
            (None, None, Some(ty)) => Shape::MapOf(ty),
            _ => {
                return Err(DocError::InvalidDeclaration(format!(
                    "'{}' names more than one of node, list_of, map_of",
                    name
                )));
            }
        };

        let mut setting = Setting::new(shape);
        if let Some(raw) = self.default {
            setting = setting.with_default(raw);
        }
        setting.required = self.required;
        Ok(setting)
    }
}
