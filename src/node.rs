//! Generic node tree handed over by the markup tokenizer

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Untyped element: a tag name, its attributes and ordered children.
///
/// Text children are expected to be whitespace-normalized already
/// (runs collapsed to one space, trimmed at both ends).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub tag: String,
    #[serde(default)]
    pub attrs: IndexMap<String, String>,
    #[serde(default)]
    pub children: Vec<Content>,
}

/// Child of a generic node
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Node(Node),
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(Content::Node(child));
        self
    }

    pub fn add_child(&mut self, child: impl Into<Content>) {
        self.children.push(child.into());
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
