#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use onemsdk::tag::{AnchorAttrs, FormAttrs, InputAttrs, ListItemAttrs, SectionAttrs};
use onemsdk::{
    load_root, Anchor, Break, Child, Config, ErrorKind, Footer, Form, Header, Input, List,
    ListItem, Node, Paragraph, Result, Section, Tag, TagKind, TagVariant,
};

fn kind_of<T>(result: Result<T>) -> Option<ErrorKind> {
    result.err().map(|e| e.kind().clone())
}

fn link(text: &str, href: &str) -> Node {
    Node::new("li").with_child(Node::new("a").with_attr("href", href).with_text(text))
}

#[test]
fn test_section_with_every_body_child() -> Result<()> {
    let node = Node::new("section")
        .with_child(Node::new("header").with_text("Header"))
        .with_child(Node::new("p").with_text("Intro"))
        .with_child(Node::new("br"))
        .with_text("raw line")
        .with_child(
            Node::new("ul")
                .with_child(link("One", "/one"))
                .with_child(Node::new("li").with_text("Two")),
        )
        .with_child(Node::new("input").with_attr("name", "n").with_attr("type", "text"))
        .with_child(Node::new("footer").with_text("Footer"));

    let tag = Tag::from_node(&node)?;
    assert_eq!(tag.kind(), TagKind::Section);
    assert_eq!(tag.child_count(), 7);
    assert_eq!(tag.render(), "Header\nIntro\n\nraw lineOne\nTwo\nFooter");
    Ok(())
}

#[test]
fn test_render_is_deterministic() -> Result<()> {
    let node = Node::new("form")
        .with_attr("data-route", "/r")
        .with_child(
            Node::new("section")
                .with_attr("name", "a")
                .with_child(Node::new("p").with_text("First")),
        )
        .with_child(
            Node::new("section")
                .with_attr("name", "b")
                .with_child(Node::new("ul").with_child(link("Pick", "/p"))),
        );
    let tag = Tag::from_node(&node)?;
    assert_eq!(tag.render(), tag.render());
    assert_eq!(tag.render(), "First\n\nPick\n");
    Ok(())
}

#[test]
fn test_section_in_section_is_structural_error() {
    let node = Node::new("section").with_child(
        Node::new("section").with_child(Node::new("p").with_text("inner")),
    );
    assert_eq!(
        kind_of(Tag::from_node(&node)),
        Some(ErrorKind::StructuralOrder {
            tag: "section".to_string(),
            reason: "<section> cannot be child for <section>".to_string(),
        })
    );
}

#[test]
fn test_unsupported_child_tag() {
    let node = Node::new("section").with_child(Node::new("h1").with_text("Big"));
    let err = Tag::from_node(&node).err().unwrap();
    assert_eq!(err.to_string(), "Tag <h1> is not supported");
}

#[test]
fn test_disallowed_child_names_both_tags() {
    let node = Node::new("section").with_child(Node::new("a").with_attr("href", "/").with_text("x"));
    let err = Tag::from_node(&node).err().unwrap();
    assert_eq!(err.to_string(), "<a> cannot be child for <section>");
}

#[test]
fn test_disallowed_child_for_every_parent() {
    let p = || Node::new("p").with_text("x");
    let cases = [
        (Node::new("header").with_child(p()), "p", "header"),
        (Node::new("footer").with_child(Node::new("br")), "br", "footer"),
        (Node::new("p").with_child(Node::new("br")), "br", "p"),
        (Node::new("a").with_attr("href", "/").with_child(Node::new("br")), "br", "a"),
        (Node::new("li").with_child(p()), "p", "li"),
        (Node::new("ul").with_text("raw"), "text", "ul"),
        (Node::new("section").with_child(Node::new("li").with_text("x")), "li", "section"),
        (Node::new("form").with_attr("data-route", "/r").with_child(p()), "p", "form"),
    ];
    for (node, child, parent) in cases {
        let err = Tag::from_node(&node).err().unwrap();
        assert_eq!(
            err.kind(),
            &ErrorKind::ChildType {
                child: child.to_string(),
                parent: parent.to_string(),
            }
        );
        assert_eq!(err.to_string(), format!("<{child}> cannot be child for <{parent}>"));
    }
}

#[test]
fn test_form_cannot_nest_in_section() {
    let node = Node::new("section").with_child(
        Node::new("form").with_attr("data-route", "/r").with_child(
            Node::new("section")
                .with_attr("name", "s")
                .with_child(Node::new("p").with_text("x")),
        ),
    );
    assert_eq!(
        kind_of(Tag::from_node(&node)),
        Some(ErrorKind::ChildType {
            child: "form".to_string(),
            parent: "section".to_string(),
        })
    );
}

#[test]
fn test_variant_from_node_checks_tag_name() {
    assert_eq!(
        kind_of(Paragraph::from_node(&Node::new("br"))),
        Some(ErrorKind::TagMismatch {
            expected: "p".to_string(),
            found: "br".to_string(),
        })
    );
    assert!(kind_of(Section::from_node(&Node::new("form"))).is_some());
}

#[test]
fn test_missing_attributes() {
    let cases = [
        (Node::new("input").with_attr("name", "x"), "input", "type"),
        (Node::new("input").with_attr("type", "text"), "input", "name"),
        (Node::new("a").with_text("x"), "a", "href"),
    ];
    for (node, tag, attribute) in cases {
        assert_eq!(
            kind_of(Tag::from_node(&node)),
            Some(ErrorKind::MissingAttribute {
                tag: tag.to_string(),
                attribute: attribute.to_string(),
            })
        );
    }
}

#[test]
fn test_constructors_accept_exact_bounds() -> Result<()> {
    Header::new(vec!["h".into()])?;
    Footer::new(vec!["f".into()])?;
    Paragraph::new(vec!["p".into()])?;
    Break::new(vec![])?;
    Input::new(InputAttrs::new("n", "text"), vec![])?;
    let anchor = Anchor::new(AnchorAttrs::new("/x").with_method("POST"), vec!["a".into()])?;
    assert_eq!(anchor.method(), Some("POST"));
    let item = ListItem::new(ListItemAttrs::default(), vec![anchor.into()])?;
    let list = List::new(vec![item.into()])?;
    let section = Section::new(SectionAttrs::default(), vec![list.into()])?;
    let form = Form::new(
        FormAttrs::new("/r"),
        vec![Section::new(
            SectionAttrs::default(),
            vec![Input::new(InputAttrs::new("age", "text"), vec![])?.into()],
        )?
        .into()],
    )?;
    assert!(Tag::from(section).can_be_root());
    assert_eq!(form.sections()[0].step_name(), Some("age"));
    Ok(())
}

#[test]
fn test_constructors_reject_out_of_bounds() {
    assert!(matches!(
        kind_of(Paragraph::new(vec![])),
        Some(ErrorKind::ChildCount { min: 1, .. })
    ));
    assert!(matches!(
        kind_of(Input::new(InputAttrs::new("n", "t"), vec![Child::from("x")])),
        Some(ErrorKind::ChildCount { max: Some(0), .. })
    ));
    assert!(matches!(
        kind_of(Section::new(SectionAttrs::default(), vec![])),
        Some(ErrorKind::ChildCount { found: 0, .. })
    ));
    assert!(matches!(
        kind_of(Form::new(FormAttrs::new("/r"), vec![])),
        Some(ErrorKind::ChildCount { found: 0, .. })
    ));
}

#[test]
fn test_load_root_rejects_leaf_roots() {
    for node in [
        Node::new("p").with_text("x"),
        Node::new("br"),
        Node::new("ul").with_child(Node::new("li").with_text("x")),
    ] {
        let tag = node.tag.clone();
        assert_eq!(
            kind_of(load_root(&node)),
            Some(ErrorKind::InvalidRoot { tag })
        );
    }
}

#[test]
fn test_load_root_unknown_tag() {
    assert_eq!(
        kind_of(load_root(&Node::new("html"))),
        Some(ErrorKind::UnsupportedTag {
            tag: "html".to_string()
        })
    );
}

#[test]
fn test_depth_limit_from_config() {
    let node = Node::new("form").with_attr("data-route", "/r").with_child(
        Node::new("section")
            .with_attr("name", "s")
            .with_child(Node::new("ul").with_child(link("x", "/x"))),
    );
    assert!(Tag::from_node_with_config(&node, Config::default()).is_ok());
    assert!(Tag::from_node_with_config(&node, Config::unlimited()).is_ok());
    assert_eq!(
        kind_of(Tag::from_node_with_config(&node, Config::new(3))),
        Some(ErrorKind::MaxDepthExceeded { max: 3 })
    );
}
