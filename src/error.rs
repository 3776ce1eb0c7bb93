//! Error types for onemsdk

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A generic node was handed to the wrong variant's converter
    TagMismatch { expected: String, found: String },
    /// The tag name has no entry in the registry
    UnsupportedTag { tag: String },
    /// Children fall outside the variant's permitted range (`max: None` is unbounded)
    ChildCount {
        tag: String,
        min: usize,
        max: Option<usize>,
        found: usize,
    },
    /// A child's type is not permitted under its parent
    ChildType { child: String, parent: String },
    /// Header/footer placement or section nesting violation
    StructuralOrder { tag: String, reason: String },
    /// A required attribute is absent or its value is malformed
    MissingAttribute { tag: String, attribute: String },
    /// The document root is neither `<section>` nor `<form>`
    InvalidRoot { tag: String },
    MaxDepthExceeded { max: u16 },
    /// Projection produced a body that does not line up with its sections
    ProjectionConsistency { expected: usize, found: usize },
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TagMismatch { expected, found } => {
                write!(f, "Expected tag <{expected}>, received <{found}>")
            }
            Self::UnsupportedTag { tag } => write!(f, "Tag <{tag}> is not supported"),
            Self::ChildCount {
                tag,
                min,
                max,
                found,
            } => match max {
                Some(max) if max == min => {
                    write!(f, "<{tag}> must have {min} children. Children: {found}")
                }
                Some(max) => write!(
                    f,
                    "<{tag}> must have between {min} and {max} children. Children: {found}"
                ),
                None => write!(f, "<{tag}> must have min {min} children. Children: {found}"),
            },
            Self::ChildType { child, parent } => {
                write!(f, "<{child}> cannot be child for <{parent}>")
            }
            Self::StructuralOrder { reason, .. } => write!(f, "{reason}"),
            Self::MissingAttribute { tag, attribute } => {
                write!(f, "<{tag}> requires attribute \"{attribute}\"")
            }
            Self::InvalidRoot { tag } => write!(f, "Invalid root node <{tag}>"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::ProjectionConsistency { expected, found } => write!(
                f,
                "projection produced {found} form items for {expected} sections"
            ),
            Self::Serialization => write!(f, "failed to serialize response"),
        }
    }
}

/// Main error type for onemsdk
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn tag_mismatch(expected: &str, found: &str) -> Self {
        Self::new(ErrorKind::TagMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        })
    }

    pub(crate) fn structural(tag: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::new(ErrorKind::StructuralOrder {
            tag: tag.to_string(),
            reason,
        })
    }

    pub(crate) fn missing_attribute(tag: &str, attribute: &str) -> Self {
        Self::new(ErrorKind::MissingAttribute {
            tag: tag.to_string(),
            attribute: attribute.to_string(),
        })
    }

    pub(crate) fn malformed_attribute(tag: &str, attribute: &str, value: &str) -> Self {
        Self::with_message(
            ErrorKind::MissingAttribute {
                tag: tag.to_string(),
                attribute: attribute.to_string(),
            },
            format!("<{tag}> attribute \"{attribute}\" has malformed value \"{value}\""),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::with_message(
            ErrorKind::Serialization,
            format!("failed to serialize response: {err}"),
        )
    }
}

/// Result type alias for onemsdk
pub type Result<T> = std::result::Result<T, Error>;
