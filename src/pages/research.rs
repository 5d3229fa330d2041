// Research page
// Owned tabs over the two research tracks

use tui_primitives::{
    card, card_content, card_description, card_footer, card_header, card_title, tabs, tabs_content,
    tabs_list, tabs_trigger, ButtonVariant, ComponentError, Element, Node, Scope, Tag,
};

use crate::content::{ResearchEntry, RESEARCH_DATA, RESEARCH_FILM};
use crate::core::{App, Route};
use crate::pages::{link_button, page_header};

pub fn page(app: &App, scope: &Scope) -> Result<Node, ComponentError> {
    let tabs_node = tabs(scope, &app.research_tabs, "", |tabs_scope| {
        Ok(vec![
            tabs_list(
                "",
                vec![
                    tabs_trigger(
                        tabs_scope,
                        "data",
                        "",
                        false,
                        vec![Node::text("Math/Stats & Data")],
                    )?,
                    tabs_trigger(
                        tabs_scope,
                        "film",
                        "",
                        false,
                        vec![Node::text("Film Studies")],
                    )?,
                ],
            ),
            tabs_content(
                tabs_scope,
                "data",
                "mt-2",
                RESEARCH_DATA.iter().map(research_card).collect(),
            )?,
            tabs_content(
                tabs_scope,
                "film",
                "mt-2",
                RESEARCH_FILM.iter().map(research_card).collect(),
            )?,
        ])
    })?;

    Ok(Element::new(Tag::Block)
        .child(page_header(Route::Research))
        .child(tabs_node)
        .build())
}

fn research_card(entry: &ResearchEntry) -> Node {
    card(
        "mb-1",
        vec![
            card_header(
                "",
                vec![
                    card_title("text-base", entry.title),
                    card_description("", format!("Advisor: {}", entry.advisor)),
                ],
            ),
            card_content(
                "text-sm",
                vec![
                    labeled("Question", entry.question, ""),
                    labeled("Method", entry.method, ""),
                    labeled("Your contribution", entry.contribution, ""),
                    labeled("Finding", entry.finding, "text-emerald"),
                ],
            ),
            card_footer(
                "",
                link_button(
                    entry.artifact_label,
                    entry.artifact_href,
                    ButtonVariant::Default,
                    format!("research:{}", entry.id),
                )
                .into_iter()
                .collect(),
            ),
        ],
    )
}

fn labeled(label: &str, value: &str, class: &str) -> Node {
    Element::new(Tag::Paragraph)
        .class(class)
        .text(format!("{label}: {value}"))
        .build()
}
