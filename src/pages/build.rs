// Build page
// Category tabs plus text filtering over the project list

use tui_primitives::{
    card, card_content, card_description, card_footer, card_header, card_title, tabs, tabs_list,
    tabs_trigger, AttrValue, ButtonVariant, ComponentError, Element, Node, Scope, Tag,
};

use crate::content::{Project, PROJECTS, PROJECT_CATEGORIES};
use crate::core::{App, Route};
use crate::pages::{link_button, page_header, pill};

/// Case-insensitive filter over category and free text.
/// The query matches against title, teaser, and tags.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    category: &str,
    query: &str,
) -> Vec<&'a Project> {
    let query = query.trim().to_lowercase();
    projects
        .iter()
        .filter(|project| category == "All" || project.category == category)
        .filter(|project| {
            if query.is_empty() {
                return true;
            }
            let haystack = format!(
                "{} {} {}",
                project.title,
                project.teaser,
                project.tags.join(" ")
            )
            .to_lowercase();
            haystack.contains(&query)
        })
        .collect()
}

pub fn page(app: &App, scope: &Scope) -> Result<Node, ComponentError> {
    // Controlled category tabs: the app owns the filter value and the
    // controller writes back through it
    let filter_tabs = tabs(scope, &app.build_tabs, "", |tabs_scope| {
        let mut triggers = Vec::new();
        for category in PROJECT_CATEGORIES {
            triggers.push(tabs_trigger(
                tabs_scope,
                category,
                "",
                false,
                vec![Node::text(category)],
            )?);
        }
        Ok(vec![tabs_list("", triggers)])
    })?;

    let toolbar = Element::new(Tag::Block)
        .class("mb-1")
        .child(filter_tabs)
        .child(search_input(app))
        .build();

    let filtered = filter_projects(&PROJECTS, &app.build_category(), &app.search_query);
    let mut children = vec![page_header(Route::Build), toolbar];
    if filtered.is_empty() {
        children.push(
            Element::new(Tag::Paragraph)
                .class("text-muted-foreground mt-2")
                .text("No projects match the current filter.")
                .build(),
        );
    }
    for project in filtered {
        children.push(project_card(project));
    }

    Ok(Element::new(Tag::Block).children(children).build())
}

fn search_input(app: &App) -> Node {
    let focus = app.search_focus_setter();
    Element::new(Tag::Input)
        .attr("placeholder", AttrValue::str("Search projects..."))
        .attr("value", AttrValue::str(app.search_query.clone()))
        .class(if app.search_active { "ring" } else { "" })
        .bind("search:input")
        .on_click(move |_| focus.set(true))
        .build()
}

fn project_card(project: &Project) -> Node {
    let mut tags = Vec::new();
    for stack in project.stack {
        tags.push(pill(*stack));
    }
    for tag in project.tags {
        tags.push(pill(format!("#{tag}")));
    }

    let mut footer: Vec<Node> = Vec::new();
    if let Some(code) = project.links.code {
        footer.extend(link_button(
            "View Code",
            code,
            ButtonVariant::Default,
            format!("project:{}:code", project.id),
        ));
    }
    if let Some(demo) = project.links.demo {
        footer.extend(link_button(
            "Live Demo",
            demo,
            ButtonVariant::Secondary,
            format!("project:{}:demo", project.id),
        ));
    }
    if let Some(poster) = project.links.poster {
        footer.extend(link_button(
            "Poster",
            poster,
            ButtonVariant::Ghost,
            format!("project:{}:poster", project.id),
        ));
    }

    card(
        "mb-1",
        vec![
            card_header(
                "",
                vec![
                    card_title("text-base", project.title),
                    card_description("", project.teaser),
                ],
            ),
            card_content(
                "text-sm",
                vec![
                    Element::new(Tag::Paragraph)
                        .class("text-emerald font-medium")
                        .text(format!("Result: {}", project.result))
                        .build(),
                    Element::new(Tag::Block)
                        .class("flex-row gap-1")
                        .children(tags)
                        .build(),
                ],
            ),
            card_footer("", footer),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_category_passes_everything() {
        assert_eq!(filter_projects(&PROJECTS, "All", "").len(), PROJECTS.len());
    }

    #[test]
    fn test_category_filter_narrows() {
        let filtered = filter_projects(&PROJECTS, "Web", "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "proj-web-1");
    }

    #[test]
    fn test_query_matches_tags_case_insensitively() {
        let filtered = filter_projects(&PROJECTS, "All", "CLASSIFICATION");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "proj-ml-1");
    }

    #[test]
    fn test_query_and_category_combine() {
        assert!(filter_projects(&PROJECTS, "Web", "classification").is_empty());
        assert_eq!(filter_projects(&PROJECTS, "Data/ML", "classification").len(), 1);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        assert_eq!(filter_projects(&PROJECTS, "All", "   ").len(), PROJECTS.len());
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_projects(&PROJECTS, "All", "kubernetes").is_empty());
    }
}
