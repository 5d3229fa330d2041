// Button element
// Variant-styled activatable node; delegates onto its child when as_child

use crate::core::{AttrValue, Element, EventContext, EventKind, Handler, Node, Tag};
use crate::elements::slot::{slot, SlotProps};

/// Visual variants for buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => {
                "inline-flex items-center justify-center rounded-md bg-foreground text-background font-medium"
            }
            ButtonVariant::Secondary => {
                "inline-flex items-center justify-center rounded-md bg-secondary text-secondary-foreground font-medium"
            }
            ButtonVariant::Ghost => {
                "inline-flex items-center justify-center rounded-md font-medium"
            }
        }
    }
}

/// Size presets for buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "px-4 py-2",
            ButtonSize::Sm => "px-3",
            ButtonSize::Lg => "px-8",
            ButtonSize::Icon => "px-1",
        }
    }
}

/// Button builder
#[derive(Default)]
pub struct Button {
    variant: ButtonVariant,
    size: ButtonSize,
    class: Vec<String>,
    as_child: bool,
    binding: Option<String>,
    handler: Option<Handler>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Append a class fragment
    pub fn class(mut self, fragment: impl Into<String>) -> Self {
        self.class.push(fragment.into());
        self
    }

    /// Delegate rendering onto the single child instead of producing a
    /// button element
    pub fn as_child(mut self) -> Self {
        self.as_child = true;
        self
    }

    /// Set the identity binding
    pub fn bind(mut self, name: impl Into<String>) -> Self {
        self.binding = Some(name.into());
        self
    }

    /// Install the activation handler
    pub fn on_click(mut self, f: impl Fn(&mut EventContext) + 'static) -> Self {
        self.handler = Some(crate::core::handler(f));
        self
    }

    /// Build the node. In as_child mode a misused child set yields None,
    /// matching the slot's soft-failure policy.
    pub fn build(self, children: Vec<Node>) -> Option<Node> {
        let variant_class = self.variant.class();
        let size_class = self.size.class();

        if self.as_child {
            let mut props = SlotProps::new().class(variant_class).class(size_class);
            for fragment in self.class {
                props = props.class(fragment);
            }
            if let Some(binding) = self.binding {
                props = props.bind(binding);
            }
            if let Some(handler) = self.handler {
                props = props.on(EventKind::Click, handler);
            }
            return slot(props, children);
        }

        let mut element = Element::new(Tag::Button)
            .attr("type", AttrValue::str("button"))
            .class(variant_class)
            .class(size_class)
            .classes(self.class);
        if let Some(binding) = self.binding {
            element = element.bind(binding);
        }
        if let Some(handler) = self.handler {
            element = element.on(EventKind::Click, handler);
        }
        Some(element.children(children).build())
    }
}
