//! Tag name to constructor lookup
//!
//! The table is a fixed list written out below; there is no way to register
//! additional tags at runtime, so concurrent readers need no synchronization.

use std::fmt;

use tracing::trace;

use crate::config::{BuildContext, Config};
use crate::error::{Error, ErrorKind, Result};
use crate::node::Node;
use crate::tag::{
    Anchor, Break, Footer, Form, Header, Input, List, ListItem, Paragraph, Section, Tag, TagKind,
    TagVariant,
};

type BuildFn = fn(&Node, &mut BuildContext) -> Result<Tag>;

/// Constructor of one tag variant
#[derive(Clone, Copy)]
pub struct TagConstructor {
    kind: TagKind,
    build: BuildFn,
}

impl fmt::Debug for TagConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagConstructor")
            .field("kind", &self.kind)
            .finish()
    }
}

impl TagConstructor {
    const fn of<T: TagVariant>() -> Self {
        Self {
            kind: T::KIND,
            build: build_as::<T>,
        }
    }

    pub const fn kind(&self) -> TagKind {
        self.kind
    }

    pub const fn tag_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn from_node(&self, node: &Node) -> Result<Tag> {
        self.from_node_with_config(node, Config::default())
    }

    pub fn from_node_with_config(&self, node: &Node, config: Config) -> Result<Tag> {
        self.build(node, &mut BuildContext::new(config))
    }

    pub(crate) fn build(&self, node: &Node, ctx: &mut BuildContext) -> Result<Tag> {
        (self.build)(node, ctx)
    }
}

fn build_as<T: TagVariant>(node: &Node, ctx: &mut BuildContext) -> Result<Tag> {
    T::build(node, ctx).map(Into::into)
}

static REGISTRY: [TagConstructor; 10] = [
    TagConstructor::of::<Header>(),
    TagConstructor::of::<Footer>(),
    TagConstructor::of::<Paragraph>(),
    TagConstructor::of::<Break>(),
    TagConstructor::of::<Input>(),
    TagConstructor::of::<Anchor>(),
    TagConstructor::of::<ListItem>(),
    TagConstructor::of::<List>(),
    TagConstructor::of::<Section>(),
    TagConstructor::of::<Form>(),
];

/// Find the constructor registered for `tag_name`
pub fn lookup(tag_name: &str) -> Result<TagConstructor> {
    trace!(tag = tag_name, "registry lookup");
    REGISTRY
        .iter()
        .find(|constructor| constructor.tag_name() == tag_name)
        .copied()
        .ok_or_else(|| {
            Error::new(ErrorKind::UnsupportedTag {
                tag: tag_name.to_string(),
            })
        })
}

/// Every supported tag name, in registry order
pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(TagConstructor::tag_name)
}
