//! `<section>`: one screen of the conversation

use crate::config::BuildContext;
use crate::error::{Error, Result};
use crate::node::{Content, Node};
use crate::tag::attrs::{ResponseKind, SectionAttrs};
use crate::tag::inline::{Footer, Header, Input};
use crate::tag::list::List;
use crate::tag::rules::check_children;
use crate::tag::{convert_children, Child, Tag, TagKind, TagVariant};

const NESTED_SECTION: &str = "<section> cannot be child for <section>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    attrs: SectionAttrs,
    children: Vec<Child>,
}

impl Section {
    pub fn new(attrs: SectionAttrs, children: Vec<Child>) -> Result<Self> {
        if children
            .iter()
            .any(|child| matches!(child, Child::Tag(Tag::Section(_))))
        {
            return Err(Error::structural(TagKind::Section.name(), NESTED_SECTION));
        }

        check_children(TagKind::Section, &children)?;
        check_order(&children)?;

        Ok(Self { attrs, children })
    }

    pub fn attrs(&self) -> &SectionAttrs {
        &self.attrs
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn header(&self) -> Option<&Header> {
        match self.children.first() {
            Some(Child::Tag(Tag::Header(header))) => Some(header),
            _ => None,
        }
    }

    pub fn footer(&self) -> Option<&Footer> {
        match self.children.last() {
            Some(Child::Tag(Tag::Footer(footer))) => Some(footer),
            _ => None,
        }
    }

    /// Header child text, falling back to the `header` attribute
    pub fn header_text(&self) -> Option<&str> {
        self.header()
            .map(Header::text)
            .or(self.attrs.header.as_deref())
    }

    /// Footer child text, falling back to the `footer` attribute
    pub fn footer_text(&self) -> Option<&str> {
        self.footer()
            .map(Footer::text)
            .or(self.attrs.footer.as_deref())
    }

    /// Children other than the header and footer
    pub fn body(&self) -> impl Iterator<Item = &Child> {
        self.children.iter().filter(|child| !is_frame(child))
    }

    pub fn lists(&self) -> impl Iterator<Item = &List> {
        self.children.iter().filter_map(|child| match child {
            Child::Tag(Tag::List(list)) => Some(list),
            _ => None,
        })
    }

    pub fn has_list(&self) -> bool {
        self.lists().next().is_some()
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Input> {
        self.children.iter().filter_map(|child| match child {
            Child::Tag(Tag::Input(input)) => Some(input),
            _ => None,
        })
    }

    /// Key of this section when used as a form step
    pub fn step_name(&self) -> Option<&str> {
        self.attrs
            .name
            .as_deref()
            .or_else(|| self.inputs().next().map(Input::name))
    }

    pub fn expected_response(&self) -> Option<ResponseKind> {
        self.attrs.expected_response
    }
}

impl TagVariant for Section {
    const KIND: TagKind = TagKind::Section;

    fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self> {
        Self::check_tag(node)?;

        // reject before converting, whatever the inner section holds
        if node
            .children
            .iter()
            .any(|child| matches!(child, Content::Node(inner) if inner.tag == TagKind::Section.name()))
        {
            return Err(Error::structural(TagKind::Section.name(), NESTED_SECTION));
        }

        let attrs = SectionAttrs::from_node(node)?;
        Self::new(attrs, convert_children(node, ctx)?)
    }

    fn render(&self) -> String {
        self.children.iter().map(Child::render).collect()
    }
}

fn is_frame(child: &Child) -> bool {
    matches!(
        child,
        Child::Tag(Tag::Header(_)) | Child::Tag(Tag::Footer(_))
    )
}

fn check_order(children: &[Child]) -> Result<()> {
    let section = TagKind::Section.name();

    let headers: Vec<usize> = positions(children, |tag| matches!(tag, Tag::Header(_)));
    if headers.len() > 1 {
        return Err(Error::structural(section, "1 <header> per <section> permitted"));
    }
    if headers.first().is_some_and(|&pos| pos != 0) {
        return Err(Error::structural(section, "<header> must be first in a <section>"));
    }

    let footers: Vec<usize> = positions(children, |tag| matches!(tag, Tag::Footer(_)));
    if footers.len() > 1 {
        return Err(Error::structural(section, "1 <footer> per <section> permitted"));
    }
    let last = children.len().saturating_sub(1);
    if footers.first().is_some_and(|&pos| pos != last) {
        return Err(Error::structural(section, "<footer> must be last in a <section>"));
    }

    if children.len() - headers.len() - footers.len() < 1 {
        return Err(Error::structural(section, "<section> must contain a body"));
    }

    Ok(())
}

fn positions(children: &[Child], pred: impl Fn(&Tag) -> bool) -> Vec<usize> {
    children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.as_tag().is_some_and(&pred))
        .map(|(pos, _)| pos)
        .collect()
}
