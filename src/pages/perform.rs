// Perform page

use tui_primitives::{
    card, card_content, card_description, card_header, card_title, ButtonVariant, Element, Node,
    Tag,
};

use crate::content::{CREDITS, FESTIVAL, REEL};
use crate::core::Route;
use crate::pages::{link_button, page_header, pill};

pub fn page() -> Node {
    let reel = card(
        "mb-1",
        vec![
            card_header(
                "",
                vec![
                    card_title("", "Reel"),
                    card_description("", "30-90s selection; keep fresh each semester"),
                ],
            ),
            card_content(
                "",
                link_button(
                    &format!("Watch Reel ({})", REEL.length),
                    REEL.href,
                    ButtonVariant::Default,
                    "perform:reel".to_string(),
                )
                .into_iter()
                .collect(),
            ),
        ],
    );

    let mut credit_entries = Vec::new();
    for credit in &CREDITS {
        credit_entries.push(
            Element::new(Tag::Block)
                .class("border mb-1")
                .child(
                    Element::new(Tag::Paragraph)
                        .class("font-medium")
                        .text(format!(
                            "{} - {}   {}",
                            credit.role, credit.production, credit.dates
                        ))
                        .build(),
                )
                .child(
                    Element::new(Tag::Paragraph)
                        .class("text-muted-foreground")
                        .text(credit.note)
                        .build(),
                )
                .build(),
        );
    }
    let credits = card(
        "mb-1",
        vec![
            card_header(
                "",
                vec![card_title("", "Credits"), card_description("", "Selected roles")],
            ),
            card_content("text-sm", credit_entries),
        ],
    );

    let festival = card(
        "",
        vec![
            card_header(
                "",
                vec![
                    card_title("", "Microfilm Festival"),
                    card_description("", "Director & Chief Organizer"),
                ],
            ),
            card_content(
                "text-sm",
                vec![
                    Element::new(Tag::Block)
                        .class("flex-row gap-1 mb-1")
                        .child(pill(format!("Submissions: {}", FESTIVAL.submissions)))
                        .child(pill(format!("Attendees: {}+", FESTIVAL.attendees)))
                        .child(pill(format!("Sponsors: {}", FESTIVAL.sponsors)))
                        .build(),
                    Element::new(Tag::Paragraph)
                        .class("text-muted-foreground mb-1")
                        .text(FESTIVAL.highlights)
                        .build(),
                    Element::new(Tag::Block)
                        .class("flex-row")
                        .children(
                            link_button(
                                "Festival Highlights",
                                FESTIVAL.video,
                                ButtonVariant::Secondary,
                                "perform:festival".to_string(),
                            )
                            .into_iter()
                            .collect(),
                        )
                        .build(),
                ],
            ),
        ],
    );

    Element::new(Tag::Block)
        .child(page_header(Route::Perform))
        .child(reel)
        .child(credits)
        .child(festival)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perform_page_has_reel_and_festival_links() {
        let node = page();
        assert!(node.find_by_binding("perform:reel").is_some());
        assert!(node.find_by_binding("perform:festival").is_some());
    }
}
