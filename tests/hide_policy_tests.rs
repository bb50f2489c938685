mod common;

use docnode::{HidePolicy, Node};
use serde_json::json;

fn path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

#[test]
fn policy_hides_map_entries_list_items_and_nested_nodes() -> Result<(), Box<dyn std::error::Error>> {
    let schema = common::open_api_schema();
    let mut root = Node::construct(&schema, "Root", &common::orders_document())?;

    let policy = HidePolicy::new(vec![
        path(&["paths", "/orders", "post"]),
        path(&["tags", "0"]),
        path(&["definitions", "Order", "properties", "amount"]),
    ]);
    assert_eq!(policy.apply(&mut root), 3);

    let json = root.to_json()?;
    assert!(json["paths"]["/orders"].get("post").is_none());
    assert!(json["paths"]["/orders"].get("get").is_some());
    assert!(json.get("tags").is_none());
    assert_eq!(
        json["definitions"]["Order"]["properties"],
        json!({"name": {"type": "string"}})
    );
    Ok(())
}

#[test]
fn unresolved_paths_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let schema = common::open_api_schema();
    let mut root = Node::construct(&schema, "Root", &common::orders_document())?;
    let before = root.to_json()?;

    let policy = HidePolicy::new(vec![
        path(&["paths", "/missing"]),
        path(&["tags", "9"]),
        path(&["tags", "first"]),
        path(&["host"]),
        path(&["paths"]),
        path(&[]),
        // A reference cannot carry a hide flag.
        path(&["paths", "/orders", "get", "responses", "200", "schema", "items"]),
    ]);
    assert_eq!(policy.apply(&mut root), 0);
    assert_eq!(root.to_json()?, before);
    Ok(())
}

#[test]
fn policy_deserializes_from_yaml() -> Result<(), Box<dyn std::error::Error>> {
    let policy: HidePolicy = serde_yaml::from_str("hide:\n  - [paths, /admin]\n  - [tags, '0']\n")?;
    assert_eq!(policy.hide, vec![path(&["paths", "/admin"]), path(&["tags", "0"])]);

    let empty: HidePolicy = serde_yaml::from_str("{}")?;
    assert!(empty.hide.is_empty());
    Ok(())
}
