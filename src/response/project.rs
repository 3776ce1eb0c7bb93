//! Projection of a validated tag tree onto the wire model

use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::response::model::{
    Form, FormItem, FormItemContent, FormItemContentType, FormItemMenu, FormItemMenuItem,
    FormMenuTag, FormMeta, FormTag, Menu, MenuItem, Response,
};
use crate::tag::{self, Child, ListItem, ResponseKind, Section, Tag, TagKind};

const DEFAULT_LINK_METHOD: &str = "GET";
const DEFAULT_FORM_METHOD: &str = "POST";

/// Build the response for a root tag: a `<section>` becomes a menu, a `<form>` a form
#[instrument(skip_all, fields(root = root.tag_name()))]
pub fn project(root: &Tag) -> Result<Response> {
    match root {
        Tag::Section(section) => Ok(Response::Menu(Menu::from_section(section))),
        Tag::Form(form) => Form::from_tag(form).map(Response::Form),
        other => Err(Error::new(ErrorKind::InvalidRoot {
            tag: other.tag_name().to_string(),
        })),
    }
}

impl Menu {
    pub fn from_section(section: &Section) -> Self {
        let body = section.body().flat_map(menu_items).collect();
        Self::new(
            section.header_text().map(str::to_string),
            section.footer_text().map(str::to_string),
            body,
        )
    }
}

impl MenuItem {
    /// Option when the item links somewhere, content otherwise
    pub fn from_list_item(item: &ListItem) -> Self {
        match item.anchor() {
            Some(anchor) if !anchor.href().is_empty() => Self::option(
                item.text(),
                anchor.method().unwrap_or(DEFAULT_LINK_METHOD),
                anchor.href(),
            ),
            _ => Self::content(item.text()),
        }
    }
}

fn menu_items(child: &Child) -> Vec<MenuItem> {
    match child {
        Child::Text(text) => vec![MenuItem::content(text.as_str())],
        Child::Tag(Tag::List(list)) => list.items().iter().map(MenuItem::from_list_item).collect(),
        Child::Tag(Tag::Input(_) | Tag::Header(_) | Tag::Footer(_)) => Vec::new(),
        Child::Tag(tag) => vec![MenuItem::content(line(tag.render()))],
    }
}

impl FormItemContent {
    pub fn from_section(section: &Section, default: Option<ResponseKind>) -> Result<Self> {
        let description: String = section.body().map(Child::render).collect();
        Ok(Self {
            content_type: content_type(section, default),
            name: step_name(section)?,
            description: description.trim_end_matches('\n').to_string(),
            header: section.header_text().map(str::to_string),
            footer: section.footer_text().map(str::to_string),
        })
    }
}

impl FormItemMenuItem {
    /// Option when the item carries a value, content otherwise
    pub fn from_list_item(item: &ListItem) -> Self {
        match item.value() {
            Some(value) if !value.is_empty() => Self::option(value, item.text()),
            _ => Self::content(item.text()),
        }
    }
}

impl FormItemMenu {
    pub fn from_section(section: &Section) -> Result<Self> {
        let body = section.body().flat_map(form_menu_items).collect();
        Ok(Self {
            tag: FormMenuTag::FormMenu,
            name: step_name(section)?,
            header: section.header_text().map(str::to_string),
            footer: section.footer_text().map(str::to_string),
            body,
        })
    }
}

fn form_menu_items(child: &Child) -> Vec<FormItemMenuItem> {
    match child {
        Child::Text(text) => vec![FormItemMenuItem::content(text.as_str())],
        Child::Tag(Tag::List(list)) => list
            .items()
            .iter()
            .map(FormItemMenuItem::from_list_item)
            .collect(),
        Child::Tag(Tag::Input(_) | Tag::Header(_) | Tag::Footer(_)) => Vec::new(),
        Child::Tag(tag) => vec![FormItemMenuItem::content(line(tag.render()))],
    }
}

impl From<&tag::FormAttrs> for FormMeta {
    fn from(attrs: &tag::FormAttrs) -> Self {
        Self {
            completion_status_show: attrs.completion_status_show,
            completion_status_in_header: attrs.completion_status_in_header,
            confirmation_needed: attrs.confirmation_needed,
        }
    }
}

impl Form {
    /// Sections holding a list become form menus, the rest free-text steps
    pub fn from_tag(form: &tag::Form) -> Result<Self> {
        let attrs = form.attrs();

        let body = form
            .sections()
            .iter()
            .map(|section| {
                if section.has_list() {
                    FormItemMenu::from_section(section).map(FormItem::Menu)
                } else {
                    FormItemContent::from_section(section, attrs.data_type).map(FormItem::Content)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        if body.len() != form.sections().len() {
            return Err(Error::new(ErrorKind::ProjectionConsistency {
                expected: form.sections().len(),
                found: body.len(),
            }));
        }
        debug!(steps = body.len(), route = %attrs.route, "projected form");

        Ok(Self {
            tag: FormTag::Form,
            header: attrs.header.clone(),
            footer: attrs.footer.clone(),
            method: attrs
                .method
                .clone()
                .unwrap_or_else(|| DEFAULT_FORM_METHOD.to_string()),
            path: attrs.route.clone(),
            meta: FormMeta::from(attrs),
            body,
        })
    }
}

fn step_name(section: &Section) -> Result<String> {
    section
        .step_name()
        .map(str::to_string)
        .ok_or_else(|| Error::missing_attribute(TagKind::Section.name(), "name"))
}

/// Answer type of a free-text step: the first input's type wins, then the
/// section's expected response, then the form default
fn content_type(section: &Section, default: Option<ResponseKind>) -> FormItemContentType {
    if let Some(input) = section.inputs().next() {
        return match input.input_type().to_ascii_lowercase().as_str() {
            "date" => FormItemContentType::Date,
            "datetime" | "datetime-local" => FormItemContentType::Datetime,
            _ => FormItemContentType::String,
        };
    }
    match section.expected_response().or(default) {
        Some(ResponseKind::Date) => FormItemContentType::Date,
        Some(ResponseKind::Datetime) => FormItemContentType::Datetime,
        _ => FormItemContentType::String,
    }
}

/// One handset line: the rendering minus its terminating line break
fn line(mut rendered: String) -> String {
    if rendered.ends_with('\n') {
        rendered.pop();
    }
    rendered
}
