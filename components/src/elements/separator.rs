// Separator element
// Thin rule between content regions

use crate::core::{AttrValue, Element, Node, Tag};

/// Separator orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Build a separator node. Decorative separators carry no semantic role.
pub fn separator(orientation: Orientation, decorative: bool, class: &str) -> Node {
    let role = if decorative { "none" } else { "separator" };
    let orientation_class = match orientation {
        Orientation::Horizontal => "h-px w-full",
        Orientation::Vertical => "h-full w-px",
    };

    Element::new(Tag::Block)
        .attr("role", AttrValue::str(role))
        .class("bg-border")
        .class(orientation_class)
        .class(class)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::has_class;

    #[test]
    fn test_decorative_separator_has_no_semantic_role() {
        let node = separator(Orientation::Horizontal, true, "my-4");
        let element = node.as_element().unwrap();
        assert_eq!(element.attrs.get("role"), Some(&AttrValue::str("none")));
        assert!(has_class(&element.classes, "h-px"));
        assert!(has_class(&element.classes, "my-4"));
    }

    #[test]
    fn test_semantic_separator_keeps_role() {
        let node = separator(Orientation::Vertical, false, "");
        let element = node.as_element().unwrap();
        assert_eq!(element.attrs.get("role"), Some(&AttrValue::str("separator")));
        assert!(has_class(&element.classes, "w-px"));
    }
}
