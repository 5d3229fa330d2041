// Not-found page

use tui_primitives::{
    card, card_content, card_description, card_header, card_title, AttrValue, Button, Element,
    Node, Tag,
};

use crate::core::{App, Route};

pub fn page(app: &App) -> Node {
    let pending = app.route_setter();
    let home_link = Element::new(Tag::Link)
        .attr("href", AttrValue::str(Route::About.path()))
        .text("Go Home")
        .build();
    let home_button = Button::new()
        .bind("notfound:home")
        .on_click(move |_| pending.set(Some(Route::from_path(Route::About.path()))))
        .as_child()
        .build(vec![home_link]);

    card(
        "",
        vec![
            card_header(
                "",
                vec![
                    card_title("", "404"),
                    card_description("", "Page not found."),
                ],
            ),
            card_content("", home_button.into_iter().collect()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppEvent;
    use crate::pages::test_app;
    use tui_primitives::EventContext;

    #[test]
    fn test_go_home_navigates_to_about() {
        let mut app = test_app();
        app.navigate(Route::NotFound);

        let tree = crate::pages::build_tree(&app).unwrap();
        let mut ctx = EventContext::click();
        assert!(tree.emit_click("notfound:home", &mut ctx));

        app.handle_event(AppEvent::None);
        assert_eq!(app.route, Route::About);
    }
}
