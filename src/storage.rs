use crate::config::HidePolicy;
use crate::schema::{DeclarationTable, Schema};
use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Number, Value as Raw};
use std::fs;
use std::path::Path;

pub fn load_raw(path: &str) -> Result<Raw> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;

    if is_yaml(path) {
        let yaml: serde_yaml::Value = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse YAML: {}", path))?;
        yaml_to_json(yaml).with_context(|| format!("Unsupported YAML in {}", path))
    } else {
        serde_json::from_str(&data).with_context(|| format!("Failed to parse JSON: {}", path))
    }
}

pub fn load_schema(path: &str) -> Result<Schema> {
    let table: DeclarationTable = serde_json::from_value(load_raw(path)?)
        .with_context(|| format!("Invalid declaration table: {}", path))?;
    Ok(Schema::from_table(table)?)
}

pub fn load_hide_policy(path: &str) -> Result<HidePolicy> {
    serde_json::from_value(load_raw(path)?)
        .with_context(|| format!("Invalid hide policy: {}", path))
}

pub fn save_json(path: &str, value: &Raw) -> Result<()> {
    let data = serde_json::to_string_pretty(value)?;
    fs::write(path, data).with_context(|| format!("Failed to write to file: {}", path))?;
    Ok(())
}

fn is_yaml(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}

// Non-string YAML keys such as `200:` become strings.
fn yaml_to_json(yaml: serde_yaml::Value) -> Result<Raw> {
    Ok(match yaml {
        serde_yaml::Value::Null => Raw::Null,
        serde_yaml::Value::Bool(b) => Raw::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Raw::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Raw::Number(u.into())
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                Raw::Number(
                    Number::from_f64(f).ok_or_else(|| anyhow!("non-finite number {}", f))?,
                )
            }
        }
        serde_yaml::Value::String(s) => Raw::String(s),
        serde_yaml::Value::Sequence(items) => Raw::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(anyhow!("unsupported mapping key {:?}", other)),
                };
                map.insert(key, yaml_to_json(value)?);
            }
            Raw::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}
