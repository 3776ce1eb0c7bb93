//! Leaf variants: text-only tags, `<br>`, `<input>` and `<a>`

use crate::config::BuildContext;
use crate::error::Result;
use crate::node::Node;
use crate::tag::attrs::{AnchorAttrs, InputAttrs};
use crate::tag::rules::{check_children, take_text};
use crate::tag::{convert_children, Child, TagKind, TagVariant};

macro_rules! text_tag {
    ($(#[$meta:meta])* $name:ident, $kind:expr, |$text:ident| $render:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            text: String,
        }

        impl $name {
            pub fn new(children: Vec<Child>) -> Result<Self> {
                let text = take_text($kind, children)?;
                Ok(Self { text })
            }

            pub fn text(&self) -> &str {
                &self.text
            }
        }

        impl TagVariant for $name {
            const KIND: TagKind = $kind;

            fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self> {
                Self::check_tag(node)?;
                Self::new(convert_children(node, ctx)?)
            }

            fn render(&self) -> String {
                let $text = &self.text;
                $render
            }
        }
    };
}

text_tag!(
    /// `<header>`: rendered with a trailing line break
    Header,
    TagKind::Header,
    |text| format!("{text}\n")
);

text_tag!(
    /// `<footer>`: rendered as-is, it closes the screen
    Footer,
    TagKind::Footer,
    |text| text.clone()
);

text_tag!(
    /// `<p>`
    Paragraph,
    TagKind::Paragraph,
    |text| format!("{text}\n")
);

/// `<br>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Break;

impl Break {
    pub fn new(children: Vec<Child>) -> Result<Self> {
        check_children(TagKind::Break, &children)?;
        Ok(Self)
    }
}

impl TagVariant for Break {
    const KIND: TagKind = TagKind::Break;

    fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self> {
        Self::check_tag(node)?;
        Self::new(convert_children(node, ctx)?)
    }

    fn render(&self) -> String {
        "\n".to_string()
    }
}

/// `<input>`: carries attributes only and renders to nothing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    attrs: InputAttrs,
}

impl Input {
    pub fn new(attrs: InputAttrs, children: Vec<Child>) -> Result<Self> {
        check_children(TagKind::Input, &children)?;
        Ok(Self { attrs })
    }

    pub fn attrs(&self) -> &InputAttrs {
        &self.attrs
    }

    pub fn name(&self) -> &str {
        &self.attrs.name
    }

    pub fn input_type(&self) -> &str {
        &self.attrs.input_type
    }
}

impl TagVariant for Input {
    const KIND: TagKind = TagKind::Input;

    fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self> {
        Self::check_tag(node)?;
        let attrs = InputAttrs::from_node(node)?;
        Self::new(attrs, convert_children(node, ctx)?)
    }

    fn render(&self) -> String {
        String::new()
    }
}

/// `<a>`: only the link text is rendered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    attrs: AnchorAttrs,
    text: String,
}

impl Anchor {
    pub fn new(attrs: AnchorAttrs, children: Vec<Child>) -> Result<Self> {
        let text = take_text(TagKind::Anchor, children)?;
        Ok(Self { attrs, text })
    }

    pub fn attrs(&self) -> &AnchorAttrs {
        &self.attrs
    }

    pub fn href(&self) -> &str {
        &self.attrs.href
    }

    pub fn method(&self) -> Option<&str> {
        self.attrs.method.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TagVariant for Anchor {
    const KIND: TagKind = TagKind::Anchor;

    fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self> {
        Self::check_tag(node)?;
        let attrs = AnchorAttrs::from_node(node)?;
        Self::new(attrs, convert_children(node, ctx)?)
    }

    fn render(&self) -> String {
        self.text.clone()
    }
}
