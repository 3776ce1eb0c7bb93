//! Wire model of the gateway response
//!
//! Field names are the wire contract. Optional fields serialize as `null`
//! rather than being omitted.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// `"type": "menu"`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuTag {
    #[default]
    #[serde(rename = "menu")]
    Menu,
}

/// `"type": "form-menu"`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMenuTag {
    #[default]
    #[serde(rename = "form-menu")]
    FormMenu,
}

/// `"type": "form"`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormTag {
    #[default]
    #[serde(rename = "form")]
    Form,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemType {
    /// Navigable entry
    Option,
    /// Informational line
    Content,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "type")]
    pub item_type: MenuItemType,
    pub description: String,
    pub method: Option<String>,
    pub path: Option<String>,
}

impl MenuItem {
    pub fn option(
        description: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            item_type: MenuItemType::Option,
            description: description.into(),
            method: Some(method.into()),
            path: Some(path.into()),
        }
    }

    pub fn content(description: impl Into<String>) -> Self {
        Self {
            item_type: MenuItemType::Content,
            description: description.into(),
            method: None,
            path: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(rename = "type")]
    pub tag: MenuTag,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub body: Vec<MenuItem>,
}

impl Menu {
    pub fn new(header: Option<String>, footer: Option<String>, body: Vec<MenuItem>) -> Self {
        Self {
            tag: MenuTag::Menu,
            header,
            footer,
            body,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormItemContentType {
    String,
    Date,
    Datetime,
}

/// Free-text form step
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormItemContent {
    #[serde(rename = "type")]
    pub content_type: FormItemContentType,
    pub name: String,
    pub description: String,
    pub header: Option<String>,
    pub footer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormItemMenuItem {
    #[serde(rename = "type")]
    pub item_type: MenuItemType,
    pub value: Option<String>,
    pub description: String,
}

impl FormItemMenuItem {
    pub fn option(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            item_type: MenuItemType::Option,
            value: Some(value.into()),
            description: description.into(),
        }
    }

    pub fn content(description: impl Into<String>) -> Self {
        Self {
            item_type: MenuItemType::Content,
            value: None,
            description: description.into(),
        }
    }
}

/// Multiple-choice form step
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormItemMenu {
    #[serde(rename = "type")]
    pub tag: FormMenuTag,
    pub name: String,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub body: Vec<FormItemMenuItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormItem {
    Content(FormItemContent),
    Menu(FormItemMenu),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMeta {
    pub completion_status_show: bool,
    pub completion_status_in_header: bool,
    pub confirmation_needed: bool,
}

impl Default for FormMeta {
    fn default() -> Self {
        Self {
            completion_status_show: true,
            completion_status_in_header: true,
            confirmation_needed: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(rename = "type")]
    pub tag: FormTag,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub method: String,
    pub path: String,
    pub meta: FormMeta,
    pub body: Vec<FormItem>,
}

/// Either payload, distinguished on the wire by its `type` field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Menu(Menu),
    Form(Form),
}

impl Response {
    pub fn content_type(&self) -> &'static str {
        self.kind().name()
    }

    pub fn kind(&self) -> ContentType {
        match self {
            Self::Menu(_) => ContentType::Menu,
            Self::Form(_) => ContentType::Form,
        }
    }

    /// Bare payload, without the envelope
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope::from(self.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Menu,
    Form,
}

impl ContentType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Form => "form",
        }
    }
}

/// What the gateway receives: `{"content_type": .., "content": {..}}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub content_type: ContentType,
    pub content: Response,
}

impl From<Response> for ResponseEnvelope {
    fn from(content: Response) -> Self {
        Self {
            content_type: content.kind(),
            content,
        }
    }
}

impl ResponseEnvelope {
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
