use crate::node::Node;
use crate::reference::Reference;
use indexmap::IndexMap;
use serde_json::Value as Raw;

#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Ref(Reference),
}

impl Child {
    pub fn is_hidden(&self) -> bool {
        match self {
            Child::Node(node) => node.hide,
            Child::Ref(_) => false,
        }
    }

    pub fn set_hidden(&mut self, hide: bool) -> bool {
        match self {
            Child::Node(node) => {
                node.hide = hide;
                true
            }
            Child::Ref(_) => false,
        }
    }

    // A reference fits any node slot.
    pub fn fits(&self, ty: &str) -> bool {
        match self {
            Child::Node(node) => node.type_name() == ty,
            Child::Ref(_) => true,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            Child::Ref(_) => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Child::Node(node) => Some(node),
            Child::Ref(_) => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Child::Ref(reference) => Some(reference),
            Child::Node(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Raw),
    Child(Box<Child>),
    List(Vec<Child>),
    Map(IndexMap<String, Child>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&Raw> {
        match self {
            Value::Scalar(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Raw::as_str)
    }

    pub fn as_child(&self) -> Option<&Child> {
        match self {
            Value::Child(child) => Some(child),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        self.as_child().and_then(Child::as_node)
    }

    pub fn as_list(&self) -> Option<&[Child]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Child>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<Raw> for Value {
    fn from(raw: Raw) -> Self {
        Value::Scalar(raw)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Raw::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Raw::String(s))
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Child(Box::new(Child::Node(node)))
    }
}

impl From<Reference> for Value {
    fn from(reference: Reference) -> Self {
        Value::Child(Box::new(Child::Ref(reference)))
    }
}
