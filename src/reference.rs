use crate::error::DocError;
use serde_json::{Map, Value as Raw};

pub const REF_KEY: &str = "$ref";

// Only the target is kept. Resolution is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub target: String,
}

impl Reference {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn from_marker(setting: &str, raw: &Raw) -> Result<Self, DocError> {
        match raw.get(REF_KEY) {
            Some(Raw::String(target)) => Ok(Self::new(target.clone())),
            Some(other) => Err(DocError::malformed(setting, "string $ref target", other)),
            None => Err(DocError::malformed(setting, "$ref marker", raw)),
        }
    }

    pub fn to_json(&self) -> Raw {
        let mut map = Map::new();
        map.insert(REF_KEY.to_string(), Raw::String(self.target.clone()));
        Raw::Object(map)
    }
}

pub fn is_marker(raw: &Raw) -> bool {
    raw.as_object().is_some_and(|map| map.contains_key(REF_KEY))
}
