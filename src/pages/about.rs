// About page

use tui_primitives::{
    card, card_content, card_description, card_footer, card_header, card_title, ButtonVariant,
    Element, Node, Tag,
};

use crate::core::Route;
use crate::pages::{page_header, social_buttons};

pub fn page() -> Node {
    let intro = card(
        "mb-4",
        vec![
            card_header(
                "",
                vec![
                    card_title("", "Hi, I'm Kira"),
                    card_description(
                        "",
                        "A stats-minded developer who also lives on stage and behind the camera. \
                         I build neat tools, mentor peers, and produce shows.",
                    ),
                ],
            ),
            card_content(
                "text-sm",
                vec![
                    paragraph(
                        "I'm studying Computer Science and Statistical & Data Sciences. \
                         Comfortable with Python, Java, C, and front-end (HTML/CSS/JS). \
                         I've built websites for clients and ML prototypes that prioritize \
                         outcomes over buzzwords.",
                    ),
                    paragraph(
                        "On the arts side, I perform in musical theatre, direct films, and run \
                         a microfilm festival. I also shoot photography, both portfolios and \
                         B-sides to show the learning curve.",
                    ),
                    paragraph(
                        "On campus, I organize events (e.g., with the Chinese Student \
                         Association) and tutor peers in CS/SDS.",
                    ),
                ],
            ),
            card_footer("flex-row gap-2", social_buttons(ButtonVariant::Secondary, "about-social")),
        ],
    );

    let now = card(
        "",
        vec![
            card_header(
                "",
                vec![card_title("", "Now"), card_description("", "本学期在做什么")],
            ),
            card_content(
                "text-sm",
                vec![
                    now_entry("Building", "Personal website, ML poster refinement"),
                    now_entry("Performing", "Rehearsal for spring musical (reel update)"),
                    now_entry("Learning", "Data viz & interaction design"),
                ],
            ),
        ],
    );

    Element::new(Tag::Block)
        .child(page_header(Route::About))
        .child(intro)
        .child(now)
        .build()
}

fn paragraph(text: &str) -> Node {
    Element::new(Tag::Paragraph).class("mb-1").text(text).build()
}

fn now_entry(label: &str, detail: &str) -> Node {
    Element::new(Tag::Block)
        .child(
            Element::new(Tag::Paragraph)
                .class("font-medium")
                .text(format!("• {label}"))
                .build(),
        )
        .child(
            Element::new(Tag::Paragraph)
                .class("text-muted-foreground mb-1")
                .text(detail)
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_page_lists_social_links() {
        let node = page();
        for label in ["GitHub", "LinkedIn", "Résumé"] {
            assert!(
                node.find_by_binding(&format!("about-social:{label}")).is_some(),
                "missing social link {label}"
            );
        }
    }
}
