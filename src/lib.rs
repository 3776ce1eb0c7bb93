//! onemsdk: typed tag model for the ONEm feature-phone markup
//!
//! A handset screen is described with a small HTML-like vocabulary
//! (`<section>`, `<form>`, `<ul>`, `<li>`, `<a>`, `<p>`, ...). This crate:
//! - converts a generic [`Node`] tree into validated [`Tag`] values
//! - enforces per-tag child rules and header/footer placement
//! - renders tags to plain text
//! - projects a root tag into the JSON [`Response`] sent to the gateway
//!
//! # Examples
//! ```
//! use onemsdk::{create_response, Node};
//!
//! let root = Node::new("section")
//!     .with_child(Node::new("header").with_text("Menu"))
//!     .with_child(
//!         Node::new("ul").with_child(
//!             Node::new("li")
//!                 .with_child(Node::new("a").with_attr("href", "/next").with_text("Next")),
//!         ),
//!     );
//! let response = create_response(&root)?;
//! assert_eq!(response.content_type(), "menu");
//! assert_eq!(response.to_envelope().to_json()?["content_type"], "menu");
//! # Ok::<(), onemsdk::Error>(())
//! ```

use tracing::{debug, info, instrument};

pub mod config;
pub mod error;
pub mod node;
pub mod registry;
pub mod response;
pub mod tag;

// Re-exports
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use node::{Content, Node};
pub use registry::{lookup, supported_tags, TagConstructor};
pub use response::{project, Response, ResponseEnvelope};
pub use tag::{
    Anchor, Break, Child, ChildKind, Footer, Form, Header, Input, List, ListItem, Paragraph,
    Section, Tag, TagKind, TagVariant,
};

/// Build the root tag of a document; only `<section>` and `<form>` qualify
#[instrument(skip_all, fields(root = %node.tag))]
pub fn load_root(node: &Node) -> Result<Tag> {
    load_root_with_config(node, Config::default())
}

pub fn load_root_with_config(node: &Node, config: Config) -> Result<Tag> {
    let constructor = lookup(&node.tag)?;
    if !constructor.kind().can_be_root() {
        return Err(Error::new(ErrorKind::InvalidRoot {
            tag: node.tag.clone(),
        }));
    }

    let tag = constructor.from_node_with_config(node, config)?;
    debug!(children = tag.child_count(), "root loaded");
    Ok(tag)
}

/// Load a root node and project it into its response in one step
#[instrument(skip_all, fields(root = %node.tag))]
pub fn create_response(node: &Node) -> Result<Response> {
    let root = load_root(node)?;
    let response = project(&root)?;
    info!(content_type = response.content_type(), "response created");
    Ok(response)
}
