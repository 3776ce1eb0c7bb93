//! Attribute records of the attribute-bearing variants

use crate::error::{Error, Result};
use crate::node::Node;

/// Expected kind of answer for a form step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    Text,
    Date,
    Datetime,
    Option,
    Any,
}

impl ResponseKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "date" => Some(Self::Date),
            "datetime" => Some(Self::Datetime),
            "option" => Some(Self::Option),
            "any" => Some(Self::Any),
            _ => None,
        }
    }
}

/// `<input name=".." type="..">`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputAttrs {
    pub name: String,
    pub input_type: String,
}

impl InputAttrs {
    pub fn new(name: impl Into<String>, input_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
        }
    }

    pub(crate) fn from_node(node: &Node) -> Result<Self> {
        Ok(Self {
            name: required(node, "name")?,
            input_type: required(node, "type")?,
        })
    }
}

/// `<a href=".." method="..">`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorAttrs {
    pub href: String,
    pub method: Option<String>,
}

impl AnchorAttrs {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub(crate) fn from_node(node: &Node) -> Result<Self> {
        Ok(Self {
            href: required(node, "href")?,
            method: optional(node, "method"),
        })
    }
}

/// `<li value="..">`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListItemAttrs {
    pub value: Option<String>,
}

impl ListItemAttrs {
    pub(crate) fn from_node(node: &Node) -> Self {
        Self {
            value: optional(node, "value"),
        }
    }
}

/// `<section header=".." footer=".." name=".." expected-response="..">`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionAttrs {
    pub header: Option<String>,
    pub footer: Option<String>,
    pub name: Option<String>,
    pub expected_response: Option<ResponseKind>,
}

impl SectionAttrs {
    pub(crate) fn from_node(node: &Node) -> Result<Self> {
        Ok(Self {
            header: optional(node, "header"),
            footer: optional(node, "footer"),
            name: optional(node, "name"),
            expected_response: response_kind(node, "expected-response")?,
        })
    }
}

/// Attributes of `<form>`.
///
/// `data-route` (or `action`) is required; the completion and confirmation
/// flags default to `true` when absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormAttrs {
    pub route: String,
    pub method: Option<String>,
    pub data_type: Option<ResponseKind>,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub completion_status_show: bool,
    pub completion_status_in_header: bool,
    pub confirmation_needed: bool,
}

impl FormAttrs {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            method: None,
            data_type: None,
            header: None,
            footer: None,
            completion_status_show: true,
            completion_status_in_header: true,
            confirmation_needed: true,
        }
    }

    pub(crate) fn from_node(node: &Node) -> Result<Self> {
        let route = optional(node, "data-route")
            .or_else(|| optional(node, "action"))
            .ok_or_else(|| Error::missing_attribute(&node.tag, "data-route"))?;

        Ok(Self {
            route,
            method: optional(node, "data-method").or_else(|| optional(node, "method")),
            data_type: response_kind(node, "data-type")?,
            header: optional(node, "header"),
            footer: optional(node, "footer"),
            completion_status_show: flag(node, "completion-status-show")?.unwrap_or(true),
            completion_status_in_header: flag(node, "completion-status-in-header")?
                .unwrap_or(true),
            confirmation_needed: flag(node, "confirmation-needed")?.unwrap_or(true),
        })
    }
}

fn required(node: &Node, key: &str) -> Result<String> {
    optional(node, key).ok_or_else(|| Error::missing_attribute(&node.tag, key))
}

fn optional(node: &Node, key: &str) -> Option<String> {
    node.attr(key).map(str::to_string)
}

fn response_kind(node: &Node, key: &str) -> Result<Option<ResponseKind>> {
    match node.attr(key) {
        None => Ok(None),
        Some(value) => ResponseKind::parse(value)
            .map(Some)
            .ok_or_else(|| Error::malformed_attribute(&node.tag, key, value)),
    }
}

/// Boolean-ish attribute; a valueless attribute counts as `true`
fn flag(node: &Node, key: &str) -> Result<Option<bool>> {
    let Some(value) = node.attr(key) else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "yes" | "on" | "1" => Ok(Some(true)),
        "false" | "no" | "off" | "0" => Ok(Some(false)),
        _ => Err(Error::malformed_attribute(&node.tag, key, value)),
    }
}
