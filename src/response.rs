//! Provider-facing JSON responses built from a validated root tag

pub mod model;
pub mod project;

pub use model::{
    ContentType, Form, FormItem, FormItemContent, FormItemContentType, FormItemMenu,
    FormItemMenuItem, FormMeta, Menu, MenuItem, MenuItemType, Response, ResponseEnvelope,
};
pub use project::project;
