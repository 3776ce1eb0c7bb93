//! Typed, validated tag tree
//!
//! Every variant checks its children (count, allowed types and, for
//! `<section>`, header/footer placement) when it is constructed, so a [`Tag`]
//! value is always structurally valid. Trees are immutable once built.

pub mod attrs;
pub mod form;
pub mod inline;
pub mod list;
pub mod rules;
pub mod section;

pub use attrs::{AnchorAttrs, FormAttrs, InputAttrs, ListItemAttrs, ResponseKind, SectionAttrs};
pub use form::Form;
pub use inline::{Anchor, Break, Footer, Header, Input, Paragraph};
pub use list::{List, ListItem, ListItemContent};
pub use rules::ChildRule;
pub use section::Section;

use tracing::trace;

use crate::config::{BuildContext, Config};
use crate::error::{Error, Result};
use crate::node::{Content, Node};
use crate::registry;

/// Discriminant of the closed set of tag variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    Header,
    Footer,
    Paragraph,
    Break,
    Input,
    Anchor,
    ListItem,
    List,
    Section,
    Form,
}

impl TagKind {
    pub const ALL: [Self; 10] = [
        Self::Header,
        Self::Footer,
        Self::Paragraph,
        Self::Break,
        Self::Input,
        Self::Anchor,
        Self::ListItem,
        Self::List,
        Self::Section,
        Self::Form,
    ];

    /// Markup tag name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Paragraph => "p",
            Self::Break => "br",
            Self::Input => "input",
            Self::Anchor => "a",
            Self::ListItem => "li",
            Self::List => "ul",
            Self::Section => "section",
            Self::Form => "form",
        }
    }

    /// Only `<section>` and `<form>` may be a document root
    pub const fn can_be_root(self) -> bool {
        matches!(self, Self::Section | Self::Form)
    }
}

/// Type of a child as seen by the parent's rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildKind {
    Text,
    Tag(TagKind),
}

impl ChildKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Tag(kind) => kind.name(),
        }
    }
}

/// Child of a tag: either a nested tag or raw text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    Tag(Tag),
    Text(String),
}

impl Child {
    pub fn kind(&self) -> ChildKind {
        match self {
            Self::Tag(tag) => ChildKind::Tag(tag.kind()),
            Self::Text(_) => ChildKind::Text,
        }
    }

    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Tag(_) => None,
        }
    }

    /// Text passes through verbatim, tags render themselves
    pub fn render(&self) -> String {
        match self {
            Self::Tag(tag) => tag.render(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<Tag> for Child {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A validated tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    Header(Header),
    Footer(Footer),
    Paragraph(Paragraph),
    Break(Break),
    Input(Input),
    Anchor(Anchor),
    ListItem(ListItem),
    List(List),
    Section(Section),
    Form(Form),
}

macro_rules! impl_variant_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Tag {
                fn from(tag: $variant) -> Self {
                    Self::$variant(tag)
                }
            }

            impl From<$variant> for Child {
                fn from(tag: $variant) -> Self {
                    Self::Tag(Tag::$variant(tag))
                }
            }
        )*
    };
}

impl_variant_conversions!(Header, Footer, Paragraph, Break, Input, Anchor, ListItem, List, Section, Form);

impl Tag {
    /// Convert a generic node into a typed tag, resolving its variant by name
    pub fn from_node(node: &Node) -> Result<Self> {
        Self::from_node_with_config(node, Config::default())
    }

    pub fn from_node_with_config(node: &Node, config: Config) -> Result<Self> {
        Self::build(node, &mut BuildContext::new(config))
    }

    pub(crate) fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self> {
        registry::lookup(&node.tag)?.build(node, ctx)
    }

    pub fn kind(&self) -> TagKind {
        match self {
            Self::Header(_) => TagKind::Header,
            Self::Footer(_) => TagKind::Footer,
            Self::Paragraph(_) => TagKind::Paragraph,
            Self::Break(_) => TagKind::Break,
            Self::Input(_) => TagKind::Input,
            Self::Anchor(_) => TagKind::Anchor,
            Self::ListItem(_) => TagKind::ListItem,
            Self::List(_) => TagKind::List,
            Self::Section(_) => TagKind::Section,
            Self::Form(_) => TagKind::Form,
        }
    }

    pub fn tag_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn can_be_root(&self) -> bool {
        self.kind().can_be_root()
    }

    /// Plain-text rendering used for item descriptions
    pub fn render(&self) -> String {
        match self {
            Self::Header(tag) => tag.render(),
            Self::Footer(tag) => tag.render(),
            Self::Paragraph(tag) => tag.render(),
            Self::Break(tag) => tag.render(),
            Self::Input(tag) => tag.render(),
            Self::Anchor(tag) => tag.render(),
            Self::ListItem(tag) => tag.render(),
            Self::List(tag) => tag.render(),
            Self::Section(tag) => tag.render(),
            Self::Form(tag) => tag.render(),
        }
    }

    /// Number of direct children, text included
    pub fn child_count(&self) -> usize {
        match self {
            Self::Break(_) | Self::Input(_) => 0,
            Self::Header(_)
            | Self::Footer(_)
            | Self::Paragraph(_)
            | Self::Anchor(_)
            | Self::ListItem(_) => 1,
            Self::List(list) => list.items().len(),
            Self::Section(section) => section.children().len(),
            Self::Form(form) => form.sections().len(),
        }
    }
}

/// Behaviour shared by every concrete tag variant
pub trait TagVariant: Sized + Into<Tag> {
    const KIND: TagKind;

    /// Build from a generic node, tracking depth in `ctx`
    fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self>;

    fn render(&self) -> String;

    fn from_node(node: &Node) -> Result<Self> {
        Self::from_node_with_config(node, Config::default())
    }

    fn from_node_with_config(node: &Node, config: Config) -> Result<Self> {
        Self::build(node, &mut BuildContext::new(config))
    }

    /// Reject nodes whose tag name belongs to another variant
    fn check_tag(node: &Node) -> Result<()> {
        if node.tag == Self::KIND.name() {
            Ok(())
        } else {
            Err(Error::tag_mismatch(Self::KIND.name(), &node.tag))
        }
    }
}

/// Convert a node's children: text is kept, nodes are resolved through the registry
pub(crate) fn convert_children(node: &Node, ctx: &mut BuildContext) -> Result<Vec<Child>> {
    ctx.enter_nested()?;
    trace!(tag = %node.tag, depth = ctx.depth(), "converting children");

    let mut children = Vec::with_capacity(node.children.len());
    for content in &node.children {
        let child = match content {
            Content::Text(text) => Child::Text(text.clone()),
            Content::Node(child) => Child::Tag(Tag::build(child, ctx)?),
        };
        children.push(child);
    }

    ctx.exit_nested();
    Ok(children)
}
