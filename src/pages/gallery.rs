// Gallery page
// Owned tabs over the curated set and the b-sides

use tui_primitives::{
    card, card_description, card_header, card_title, tabs, tabs_content, tabs_list, tabs_trigger,
    ComponentError, Element, Node, Scope, Tag,
};

use crate::content::{gallery_bsides, gallery_portfolio, GalleryItem};
use crate::core::{App, Route};
use crate::pages::page_header;

pub fn page(app: &App, scope: &Scope) -> Result<Node, ComponentError> {
    let tabs_node = tabs(scope, &app.gallery_tabs, "", |tabs_scope| {
        Ok(vec![
            tabs_list(
                "",
                vec![
                    tabs_trigger(
                        tabs_scope,
                        "portfolio",
                        "",
                        false,
                        vec![Node::text("Portfolio")],
                    )?,
                    tabs_trigger(
                        tabs_scope,
                        "bsides",
                        "",
                        false,
                        vec![Node::text("B-Sides / Outtakes")],
                    )?,
                ],
            ),
            tabs_content(
                tabs_scope,
                "portfolio",
                "mt-2",
                gallery_portfolio().iter().map(gallery_card).collect(),
            )?,
            tabs_content(
                tabs_scope,
                "bsides",
                "mt-2",
                gallery_bsides().iter().map(gallery_card).collect(),
            )?,
        ])
    })?;

    Ok(Element::new(Tag::Block)
        .child(page_header(Route::Gallery))
        .child(tabs_node)
        .build())
}

fn gallery_card(item: &GalleryItem) -> Node {
    card(
        "mb-1",
        vec![card_header(
            "",
            vec![
                card_title("text-base", item.title.clone()),
                card_description("", item.caption.clone()),
            ],
        )],
    )
}
