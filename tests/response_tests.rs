#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use onemsdk::response::{FormItem, FormItemContentType, MenuItemType};
use onemsdk::{
    create_response, load_root, project, ErrorKind, Node, Response, ResponseEnvelope, Result,
};
use serde_json::json;

fn menu_section() -> Node {
    Node::new("section")
        .with_child(Node::new("header").with_text("H"))
        .with_child(
            Node::new("ul").with_child(
                Node::new("li").with_child(
                    Node::new("a")
                        .with_attr("href", "/r")
                        .with_attr("method", "GET")
                        .with_text("X"),
                ),
            ),
        )
        .with_child(Node::new("footer").with_text("F"))
}

fn wizard() -> Node {
    Node::new("form")
        .with_attr("data-route", "/register")
        .with_attr("header", "REGISTER")
        .with_child(
            Node::new("section")
                .with_attr("name", "plan")
                .with_child(Node::new("header").with_text("Choose a plan"))
                .with_child(
                    Node::new("ul")
                        .with_child(
                            Node::new("li")
                                .with_attr("value", "basic")
                                .with_text("Basic"),
                        )
                        .with_child(
                            Node::new("li")
                                .with_attr("value", "pro")
                                .with_text("Pro"),
                        ),
                ),
        )
        .with_child(
            Node::new("section")
                .with_attr("name", "nickname")
                .with_child(Node::new("p").with_text("Pick a nickname")),
        )
}

#[test]
fn test_menu_round_trip() -> Result<()> {
    let response = create_response(&menu_section())?;
    assert_eq!(response.content_type(), "menu");
    assert_eq!(
        response.to_json()?,
        json!({
            "type": "menu",
            "header": "H",
            "footer": "F",
            "body": [
                {"type": "option", "description": "X", "method": "GET", "path": "/r"}
            ]
        })
    );
    Ok(())
}

#[test]
fn test_form_round_trip() -> Result<()> {
    let response = create_response(&wizard())?;
    let Response::Form(form) = response else {
        panic!("expected a form response");
    };
    assert_eq!(form.body.len(), 2);

    let FormItem::Menu(plan) = &form.body[0] else {
        panic!("first step should be a form menu");
    };
    assert_eq!(plan.name, "plan");
    assert_eq!(plan.header.as_deref(), Some("Choose a plan"));
    assert_eq!(plan.body.len(), 2);
    assert_eq!(plan.body[1].item_type, MenuItemType::Option);
    assert_eq!(plan.body[1].value.as_deref(), Some("pro"));

    let FormItem::Content(nickname) = &form.body[1] else {
        panic!("second step should be free text");
    };
    assert_eq!(nickname.content_type, FormItemContentType::String);
    assert_eq!(nickname.description, "Pick a nickname");
    Ok(())
}

#[test]
fn test_form_wire_shape() -> Result<()> {
    let value = create_response(&wizard())?.to_json()?;
    assert_eq!(
        value,
        json!({
            "type": "form",
            "header": "REGISTER",
            "footer": null,
            "method": "POST",
            "path": "/register",
            "meta": {
                "completion_status_show": true,
                "completion_status_in_header": true,
                "confirmation_needed": true
            },
            "body": [
                {
                    "type": "form-menu",
                    "name": "plan",
                    "header": "Choose a plan",
                    "footer": null,
                    "body": [
                        {"type": "option", "value": "basic", "description": "Basic"},
                        {"type": "option", "value": "pro", "description": "Pro"}
                    ]
                },
                {
                    "type": "string",
                    "name": "nickname",
                    "description": "Pick a nickname",
                    "header": null,
                    "footer": null
                }
            ]
        })
    );
    Ok(())
}

#[test]
fn test_form_method_and_meta_from_attributes() -> Result<()> {
    let node = wizard()
        .with_attr("data-method", "PUT")
        .with_attr("confirmation-needed", "false")
        .with_attr("completion-status-in-header", "off");
    let Response::Form(form) = create_response(&node)? else {
        panic!("expected a form response");
    };
    assert_eq!(form.method, "PUT");
    assert!(form.meta.completion_status_show);
    assert!(!form.meta.completion_status_in_header);
    assert!(!form.meta.confirmation_needed);
    Ok(())
}

#[test]
fn test_form_step_types() -> Result<()> {
    let node = Node::new("form")
        .with_attr("action", "/book")
        .with_attr("data-type", "date")
        .with_child(
            Node::new("section")
                .with_child(Node::new("p").with_text("Arrival?"))
                .with_child(
                    Node::new("input")
                        .with_attr("name", "arrival")
                        .with_attr("type", "datetime-local"),
                ),
        )
        .with_child(
            Node::new("section")
                .with_attr("name", "departure")
                .with_child(Node::new("p").with_text("Departure?")),
        )
        .with_child(
            Node::new("section")
                .with_attr("name", "guest")
                .with_attr("expected-response", "text")
                .with_child(Node::new("p").with_text("Guest name?")),
        );
    let Response::Form(form) = create_response(&node)? else {
        panic!("expected a form response");
    };
    let types: Vec<_> = form
        .body
        .iter()
        .map(|item| match item {
            FormItem::Content(content) => Some(content.content_type),
            FormItem::Menu(_) => None,
        })
        .collect();
    assert_eq!(
        types,
        vec![
            Some(FormItemContentType::Datetime),
            Some(FormItemContentType::Date),
            Some(FormItemContentType::String),
        ]
    );
    assert_eq!(form.path, "/book");
    Ok(())
}

#[test]
fn test_menu_mixes_content_and_options() -> Result<()> {
    let node = Node::new("section")
        .with_attr("footer", "Reply with a number")
        .with_child(Node::new("p").with_text("Welcome"))
        .with_child(
            Node::new("ul")
                .with_child(Node::new("li").with_text("Just text"))
                .with_child(
                    Node::new("li").with_child(
                        Node::new("a")
                            .with_attr("href", "/buy")
                            .with_attr("method", "POST")
                            .with_text("Buy"),
                    ),
                ),
        );
    let Response::Menu(menu) = create_response(&node)? else {
        panic!("expected a menu response");
    };
    assert_eq!(menu.header, None);
    assert_eq!(menu.footer.as_deref(), Some("Reply with a number"));
    let kinds: Vec<_> = menu.body.iter().map(|item| item.item_type).collect();
    assert_eq!(
        kinds,
        vec![
            MenuItemType::Content,
            MenuItemType::Content,
            MenuItemType::Option
        ]
    );
    assert_eq!(menu.body[0].description, "Welcome");
    assert_eq!(menu.body[2].method.as_deref(), Some("POST"));
    Ok(())
}

#[test]
fn test_project_accepts_loaded_root() -> Result<()> {
    let root = load_root(&menu_section())?;
    let direct = project(&root)?;
    assert_eq!(direct, create_response(&menu_section())?);
    Ok(())
}

#[test]
fn test_json_string_is_compact() -> Result<()> {
    let text = create_response(&menu_section())?.to_json_string()?;
    assert!(text.starts_with(r#"{"type":"menu","header":"H""#));
    let parsed: Response = serde_json::from_str(&text)?;
    assert_eq!(parsed.content_type(), "menu");
    Ok(())
}

#[test]
fn test_menu_envelope() -> Result<()> {
    let envelope = create_response(&menu_section())?.to_envelope();
    assert_eq!(
        envelope.to_json()?,
        json!({
            "content_type": "menu",
            "content": {
                "type": "menu",
                "header": "H",
                "footer": "F",
                "body": [
                    {"type": "option", "description": "X", "method": "GET", "path": "/r"}
                ]
            }
        })
    );
    Ok(())
}

#[test]
fn test_form_envelope() -> Result<()> {
    let response = create_response(&wizard())?;
    let value = ResponseEnvelope::from(response.clone()).to_json()?;
    assert_eq!(value["content_type"], json!("form"));
    assert_eq!(value["content"], response.to_json()?);
    assert_eq!(value["content"]["body"][0]["type"], json!("form-menu"));

    let text = response.to_envelope().to_json_string()?;
    assert!(text.starts_with(r#"{"content_type":"form","content":{"type":"form""#));
    Ok(())
}

#[test]
fn test_create_response_rejects_invalid_root() {
    let err = create_response(&Node::new("p").with_text("x")).err().unwrap();
    assert_eq!(
        err.kind(),
        &ErrorKind::InvalidRoot {
            tag: "p".to_string()
        }
    );
    assert_eq!(err.to_string(), "Invalid root node <p>");
}
