//! Issue table pages.

use boardkit::prelude::*;
use htmldom::Element;
use serde_json::Value;

use crate::nav::nav;
use crate::shell::page;

use super::{filter_group, heading, search_box};

const REPO: &str = "moltbot/moltbot";
const SCORE_COLUMN: usize = 2;

fn labels_cell(row: &Row) -> Element {
    let mut cell = Element::span().class("labels");
    if let Some(Value::Array(labels)) = row.get("labels") {
        for label in labels.iter().filter_map(Value::as_str) {
            cell = cell.child(badge(BadgeKind::Label, label));
        }
    }
    cell
}

fn issue_columns() -> Vec<Column> {
    vec![
        Column::new("#")
            .render(|row| {
                issue_link(row.get_i64("number").unwrap_or(0), row.get_str("url"), REPO)
            })
            .sort_value(|row| row.display("number"))
            .numeric(),
        Column::new("Title").key("title").class("title-cell"),
        Column::new("Score")
            .key("score")
            .numeric()
            .class("num-cell"),
        Column::new("Votes")
            .key("votes")
            .numeric()
            .class("num-cell"),
        Column::new("Labels").render(labels_cell),
        Column::new("Updated")
            .render(|row| Element::text(time_ago(row.get_str("updated_at"))))
            .sort_value(|row| row.display("updated_at")),
    ]
}

/// Trending issues, highest score first, filterable by status.
pub fn trending(issues: &[Row], generated: Option<&str>) -> String {
    let mut body = Element::new("body")
        .child(nav("issues/trending.html", "..", generated))
        .child(
            Element::new("main")
                .child(heading("Trending issues", "Ranked by vote score"))
                .child(
                    Element::div()
                        .class("controls")
                        .child(search_box("issue-search"))
                        .child(filter_group("status", &["open", "closed"])),
                )
                .child(Element::div().id("issues")),
        );

    let mut engine = Engine::new();
    let options = TableOptions::new()
        .empty_message("No trending issues.")
        .row_attrs(|row| vec![("data-status".to_string(), row.display("status"))]);
    engine.render_table(&mut body, "issues", issues, &issue_columns(), &options);
    engine.setup_search(&body, "issue-search", "issues-table");
    engine.setup_filters(&body, "filter-btn", "issues-table");

    // Highest score first.
    for _ in 0..2 {
        engine.dispatch(
            &mut body,
            Event::SortColumn {
                table: "issues-table".to_string(),
                column: SCORE_COLUMN,
                sort_type: SortType::Num,
            },
        );
    }

    page("Trending issues", "..", body)
}
