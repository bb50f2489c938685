use crate::node::Node;
use crate::value::{Child, Value};
use serde::Deserialize;
use tracing::{debug, warn};

/// Which parts of a constructed document to hide from serialized output.
///
/// Each path starts with a setting of the root node. Further segments
/// name a list index or map key inside a collection setting, or a setting
/// of the child node reached so far:
///
/// ```yaml
/// hide:
///   - [paths, /admin]
///   - [paths, /orders, post]
///   - [tags, 0]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HidePolicy {
    #[serde(default)]
    pub hide: Vec<Vec<String>>,
}

impl HidePolicy {
    pub fn new(paths: Vec<Vec<String>>) -> Self {
        Self { hide: paths }
    }

    // Returns the number of nodes hidden.
    pub fn apply(&self, root: &mut Node) -> usize {
        let mut hidden = 0;
        for path in &self.hide {
            let Some(child) = locate(root, path) else {
                warn!(path = %path.join(" > "), "hide path does not resolve to a node");
                continue;
            };
            if child.set_hidden(true) {
                debug!(path = %path.join(" > "), "hid node");
                hidden += 1;
            } else {
                warn!(path = %path.join(" > "), "cannot hide a reference");
            }
        }
        hidden
    }
}

fn locate<'a>(node: &'a mut Node, path: &[String]) -> Option<&'a mut Child> {
    let (name, rest) = path.split_first()?;
    match node.stored_mut(name)? {
        Value::Child(child) => descend(child, rest),
        Value::List(items) => {
            let (index, rest) = rest.split_first()?;
            let child = items.get_mut(index.parse::<usize>().ok()?)?;
            descend(child, rest)
        }
        Value::Map(entries) => {
            let (key, rest) = rest.split_first()?;
            descend(entries.get_mut(key.as_str())?, rest)
        }
        Value::Scalar(_) => None,
    }
}

fn descend<'a>(child: &'a mut Child, rest: &[String]) -> Option<&'a mut Child> {
    if rest.is_empty() {
        return Some(child);
    }
    locate(child.as_node_mut()?, rest)
}
