use crate::error::DocError;
use crate::setting::{Setting, SettingSpec};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default)]
pub struct NodeType {
    pub name: String,
    pub settings: IndexMap<String, Setting>,
}

impl NodeType {
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.settings.get(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: IndexMap<String, NodeType>,
}

pub type DeclarationTable = IndexMap<String, IndexMap<String, SettingSpec>>;

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, ty: &str) -> &mut NodeType {
        self.types
            .entry(ty.to_string())
            .or_insert_with(|| NodeType {
                name: ty.to_string(),
                settings: IndexMap::new(),
            })
    }

    // Redeclaring keeps the original position in the setting order.
    pub fn declare(&mut self, ty: &str, name: &str, setting: Setting) -> &mut Self {
        self.define(ty).settings.insert(name.to_string(), setting);
        self
    }

    pub fn node_type(&self, ty: &str) -> Option<&NodeType> {
        self.types.get(ty)
    }

    pub fn types(&self) -> impl Iterator<Item = &NodeType> {
        self.types.values()
    }

    pub fn from_table(table: DeclarationTable) -> Result<Self, DocError> {
        let mut schema = Self::new();
        for (ty, settings) in table {
            schema.define(&ty);
            for (name, spec) in settings {
                let setting = spec.into_setting(&name)?;
                schema.declare(&ty, &name, setting);
            }
        }
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::Shape;
    use serde_json::json;

    #[test]
    fn redeclare_keeps_position_and_last_write_wins() {
        let mut schema = Schema::new();
        schema
            .declare("Info", "title", Setting::scalar())
            .declare("Info", "version", Setting::scalar())
            .declare("Info", "title", Setting::scalar().required());

        let info = schema.node_type("Info").expect("Info declared");
        let names: Vec<&String> = info.settings.keys().collect();
        assert_eq!(names, ["title", "version"]);
        assert!(info.settings["title"].required);
    }

    #[test]
    fn table_keeps_declaration_order() -> Result<(), Box<dyn std::error::Error>> {
        let table: DeclarationTable = serde_json::from_value(json!({
            "Root": {
                "swagger": {"default": "2.0"},
                "info": {"node": "Info"},
                "paths": {"map_of": "PathItem"},
                "tags": {"list_of": "Tag"}
            },
            "Empty": {}
        }))?;
        let schema = Schema::from_table(table)?;

        let root = schema.node_type("Root").ok_or("missing Root")?;
        let names: Vec<&String> = root.settings.keys().collect();
        assert_eq!(names, ["swagger", "info", "paths", "tags"]);
        assert_eq!(root.settings["paths"].shape, Shape::MapOf("PathItem".into()));
        assert!(schema.node_type("Empty").is_some());
        Ok(())
    }
}
