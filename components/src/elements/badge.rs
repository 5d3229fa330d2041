// Badge element
// Small inline label with variant styling

use crate::core::{Element, Node, Tag};

/// Visual variants for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => {
                "inline-flex items-center rounded-md bg-foreground text-background font-semibold"
            }
            BadgeVariant::Secondary => {
                "inline-flex items-center rounded-md bg-secondary text-secondary-foreground font-semibold"
            }
            BadgeVariant::Outline => "inline-flex items-center rounded-md border font-semibold",
        }
    }
}

/// Build a badge node
pub fn badge(variant: BadgeVariant, class: &str, children: Vec<Node>) -> Node {
    Element::new(Tag::Inline)
        .class(variant.class())
        .class(class)
        .children(children)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::has_class;

    #[test]
    fn test_badge_is_inline_with_variant_classes() {
        let node = badge(BadgeVariant::Secondary, "rounded-full", vec![Node::text("Python")]);
        let element = node.as_element().unwrap();
        assert_eq!(element.tag, Tag::Inline);
        assert!(has_class(&element.classes, "bg-secondary"));
        assert!(has_class(&element.classes, "rounded-full"));
    }

    #[test]
    fn test_outline_badge_has_border() {
        let node = badge(BadgeVariant::Outline, "", vec![]);
        assert!(has_class(&node.as_element().unwrap().classes, "border"));
    }
}
