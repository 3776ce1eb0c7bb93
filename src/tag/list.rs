//! `<ul>` and `<li>`

use crate::config::BuildContext;
use crate::error::{Error, ErrorKind, Result};
use crate::node::Node;
use crate::tag::attrs::ListItemAttrs;
use crate::tag::inline::Anchor;
use crate::tag::rules::{check_children, child_type_error};
use crate::tag::{convert_children, Child, Tag, TagKind, TagVariant};

/// Content of a list item: a link or plain text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListItemContent {
    Anchor(Anchor),
    Text(String),
}

/// `<li>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    attrs: ListItemAttrs,
    content: ListItemContent,
}

impl ListItem {
    pub fn new(attrs: ListItemAttrs, children: Vec<Child>) -> Result<Self> {
        check_children(TagKind::ListItem, &children)?;
        let content = match children.into_iter().next() {
            Some(Child::Text(text)) => ListItemContent::Text(text),
            Some(Child::Tag(Tag::Anchor(anchor))) => ListItemContent::Anchor(anchor),
            Some(child) => return Err(child_type_error(child.kind(), TagKind::ListItem)),
            None => {
                return Err(Error::new(ErrorKind::ChildCount {
                    tag: TagKind::ListItem.name().to_string(),
                    min: 1,
                    max: Some(1),
                    found: 0,
                }))
            }
        };
        Ok(Self { attrs, content })
    }

    pub fn attrs(&self) -> &ListItemAttrs {
        &self.attrs
    }

    pub fn content(&self) -> &ListItemContent {
        &self.content
    }

    /// Visible text, the anchor's text for links
    pub fn text(&self) -> &str {
        match &self.content {
            ListItemContent::Anchor(anchor) => anchor.text(),
            ListItemContent::Text(text) => text,
        }
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        match &self.content {
            ListItemContent::Anchor(anchor) => Some(anchor),
            ListItemContent::Text(_) => None,
        }
    }

    pub fn href(&self) -> Option<&str> {
        self.anchor().map(Anchor::href)
    }

    pub fn value(&self) -> Option<&str> {
        self.attrs.value.as_deref()
    }
}

impl TagVariant for ListItem {
    const KIND: TagKind = TagKind::ListItem;

    fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self> {
        Self::check_tag(node)?;
        let attrs = ListItemAttrs::from_node(node);
        Self::new(attrs, convert_children(node, ctx)?)
    }

    fn render(&self) -> String {
        match &self.content {
            ListItemContent::Anchor(anchor) => format!("{}\n", anchor.render()),
            ListItemContent::Text(text) => format!("{text}\n"),
        }
    }
}

/// `<ul>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List {
    items: Vec<ListItem>,
}

impl List {
    pub fn new(children: Vec<Child>) -> Result<Self> {
        check_children(TagKind::List, &children)?;
        let items = children
            .into_iter()
            .map(|child| match child {
                Child::Tag(Tag::ListItem(item)) => Ok(item),
                other => Err(child_type_error(other.kind(), TagKind::List)),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }
}

impl TagVariant for List {
    const KIND: TagKind = TagKind::List;

    fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self> {
        Self::check_tag(node)?;
        Self::new(convert_children(node, ctx)?)
    }

    fn render(&self) -> String {
        self.items.iter().map(ListItem::render).collect()
    }
}
