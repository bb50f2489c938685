use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("Format error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("setting: {setting} required in {node_type}")]
    MissingRequiredSetting { node_type: String, setting: String },

    #[error("Unknown setting '{setting}' on {node_type}")]
    UnknownSetting { node_type: String, setting: String },

    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("Cannot coerce into undeclared node type: {0}")]
    UnknownCoercionShape(String),

    #[error("Setting already declared: {0}")]
    DuplicateInstanceDeclaration(String),

    #[error("Malformed input for '{setting}': expected {expected}, found {found}")]
    MalformedInput {
        setting: String,
        expected: &'static str,
        found: String,
    },

    #[error("Shape mismatch for '{setting}': expected {expected}")]
    ShapeMismatch { setting: String, expected: String },

    #[error("Invalid declaration: {0}")]
    InvalidDeclaration(String),
}

impl DocError {
    pub(crate) fn malformed(
        setting: &str,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        let found = match found {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        DocError::MalformedInput {
            setting: setting.to_string(),
            expected,
            found: found.to_string(),
        }
    }
}
