//! Per-variant child rules

use crate::error::{Error, ErrorKind, Result};
use crate::tag::{Child, ChildKind, TagKind};

/// Allowed child types and inclusive count range of a variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildRule {
    pub allowed: &'static [ChildKind],
    pub min: usize,
    /// `None` means unbounded
    pub max: Option<usize>,
}

const TEXT_ONLY: &[ChildKind] = &[ChildKind::Text];
const NOTHING: &[ChildKind] = &[];
const LIST_ITEM_CHILDREN: &[ChildKind] = &[ChildKind::Tag(TagKind::Anchor), ChildKind::Text];
const LIST_CHILDREN: &[ChildKind] = &[ChildKind::Tag(TagKind::ListItem)];
const SECTION_CHILDREN: &[ChildKind] = &[
    ChildKind::Tag(TagKind::Header),
    ChildKind::Tag(TagKind::Footer),
    ChildKind::Tag(TagKind::List),
    ChildKind::Tag(TagKind::Paragraph),
    ChildKind::Tag(TagKind::Input),
    ChildKind::Tag(TagKind::Break),
    ChildKind::Text,
];
const FORM_CHILDREN: &[ChildKind] = &[ChildKind::Tag(TagKind::Section)];

impl ChildRule {
    const fn exactly_one(allowed: &'static [ChildKind]) -> Self {
        Self {
            allowed,
            min: 1,
            max: Some(1),
        }
    }

    const fn at_least_one(allowed: &'static [ChildKind]) -> Self {
        Self {
            allowed,
            min: 1,
            max: None,
        }
    }

    const fn empty() -> Self {
        Self {
            allowed: NOTHING,
            min: 0,
            max: Some(0),
        }
    }

    pub fn allows(&self, kind: ChildKind) -> bool {
        self.allowed.contains(&kind)
    }

    pub fn count_fits(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl TagKind {
    pub const fn rule(self) -> ChildRule {
        match self {
            Self::Header | Self::Footer | Self::Paragraph | Self::Anchor => {
                ChildRule::exactly_one(TEXT_ONLY)
            }
            Self::Break | Self::Input => ChildRule::empty(),
            Self::ListItem => ChildRule::exactly_one(LIST_ITEM_CHILDREN),
            Self::List => ChildRule::at_least_one(LIST_CHILDREN),
            Self::Section => ChildRule::at_least_one(SECTION_CHILDREN),
            Self::Form => ChildRule::at_least_one(FORM_CHILDREN),
        }
    }
}

/// Check count first, then the type of every child
pub(crate) fn check_children(kind: TagKind, children: &[Child]) -> Result<()> {
    let rule = kind.rule();

    if !rule.count_fits(children.len()) {
        return Err(Error::new(ErrorKind::ChildCount {
            tag: kind.name().to_string(),
            min: rule.min,
            max: rule.max,
            found: children.len(),
        }));
    }

    for child in children {
        let child_kind = child.kind();
        if !rule.allows(child_kind) {
            return Err(child_type_error(child_kind, kind));
        }
    }

    Ok(())
}

pub(crate) fn child_type_error(child: ChildKind, parent: TagKind) -> Error {
    Error::new(ErrorKind::ChildType {
        child: child.name().to_string(),
        parent: parent.name().to_string(),
    })
}

/// Validate a text-only variant and hand back its single text child
pub(crate) fn take_text(kind: TagKind, children: Vec<Child>) -> Result<String> {
    check_children(kind, &children)?;
    match children.into_iter().next() {
        Some(Child::Text(text)) => Ok(text),
        Some(child) => Err(child_type_error(child.kind(), kind)),
        None => Err(Error::new(ErrorKind::ChildCount {
            tag: kind.name().to_string(),
            min: 1,
            max: Some(1),
            found: 0,
        })),
    }
}
