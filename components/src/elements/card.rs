// Card family
// Bordered content container with header, body, and footer sections

use crate::core::{Element, Node, Tag};

pub fn card(class: &str, children: Vec<Node>) -> Node {
    Element::new(Tag::Block)
        .class("rounded-lg border bg-card text-card-foreground")
        .class(class)
        .children(children)
        .build()
}

pub fn card_header(class: &str, children: Vec<Node>) -> Node {
    Element::new(Tag::Block)
        .class("flex flex-col space-y-1 p-2")
        .class(class)
        .children(children)
        .build()
}

pub fn card_title(class: &str, text: impl Into<String>) -> Node {
    Element::new(Tag::Heading)
        .class("font-semibold tracking-tight")
        .class(class)
        .text(text)
        .build()
}

pub fn card_description(class: &str, text: impl Into<String>) -> Node {
    Element::new(Tag::Paragraph)
        .class("text-sm text-muted-foreground")
        .class(class)
        .text(text)
        .build()
}

pub fn card_content(class: &str, children: Vec<Node>) -> Node {
    Element::new(Tag::Block)
        .class("p-2 pt-0")
        .class(class)
        .children(children)
        .build()
}

pub fn card_footer(class: &str, children: Vec<Node>) -> Node {
    Element::new(Tag::Block)
        .class("flex items-center flex-row gap-2 p-2 pt-0")
        .class(class)
        .children(children)
        .build()
}
