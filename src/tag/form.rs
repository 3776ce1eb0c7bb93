//! `<form>`: an ordered sequence of sections forming a multi-step wizard

use crate::config::BuildContext;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::tag::attrs::FormAttrs;
use crate::tag::rules::{check_children, child_type_error};
use crate::tag::section::Section;
use crate::tag::{convert_children, Child, Tag, TagKind, TagVariant};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Form {
    attrs: FormAttrs,
    sections: Vec<Section>,
}

impl Form {
    /// Every section must be nameable so its answer can be keyed
    pub fn new(attrs: FormAttrs, children: Vec<Child>) -> Result<Self> {
        check_children(TagKind::Form, &children)?;

        let mut sections = Vec::with_capacity(children.len());
        for child in children {
            match child {
                Child::Tag(Tag::Section(section)) => {
                    if section.step_name().is_none() {
                        return Err(Error::missing_attribute(TagKind::Section.name(), "name"));
                    }
                    sections.push(section);
                }
                other => return Err(child_type_error(other.kind(), TagKind::Form)),
            }
        }

        Ok(Self { attrs, sections })
    }

    pub fn attrs(&self) -> &FormAttrs {
        &self.attrs
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

impl TagVariant for Form {
    const KIND: TagKind = TagKind::Form;

    fn build(node: &Node, ctx: &mut BuildContext) -> Result<Self> {
        Self::check_tag(node)?;
        let attrs = FormAttrs::from_node(node)?;
        Self::new(attrs, convert_children(node, ctx)?)
    }

    fn render(&self) -> String {
        self.sections
            .iter()
            .map(Section::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
