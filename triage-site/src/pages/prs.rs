//! Pull request table pages.

use boardkit::prelude::*;
use htmldom::Element;

use crate::nav::nav;
use crate::shell::page;

use super::{filter_group, heading, search_box};

pub(crate) fn is_draft(row: &Row) -> bool {
    row.display("status") == "draft"
}

pub(crate) fn is_ready(row: &Row) -> bool {
    row.display("ci") == "passing" && !is_draft(row)
}

pub(crate) fn is_failing(row: &Row) -> bool {
    row.display("ci") == "failing"
}

pub(crate) fn is_huge(row: &Row) -> bool {
    matches!(row.display("size").as_str(), "large" | "huge")
}

const UPDATED_COLUMN: usize = 6;

fn pr_columns() -> Vec<Column> {
    vec![
        Column::new("#")
            .render(pr_link)
            .sort_value(|row| row.display("number"))
            .numeric(),
        Column::new("Title").key("title").class("title-cell"),
        Column::new("Author").key("author"),
        Column::new("Size").render(|row| badge(BadgeKind::Size, &row.display("size"))),
        Column::new("CI").render(|row| badge(BadgeKind::Ci, &row.display("ci"))),
        Column::new("Changes")
            .render(|row| {
                Element::span().class("changes").child(Element::text(format!(
                    "+{} \u{2212}{}",
                    row.display("additions"),
                    row.display("deletions")
                )))
            })
            .sort_value(|row| {
                let total = row.get_i64("additions").unwrap_or(0)
                    + row.get_i64("deletions").unwrap_or(0);
                total.to_string()
            })
            .numeric(),
        Column::new("Updated")
            .render(|row| Element::text(time_ago(row.get_str("updated_at"))))
            .sort_value(|row| row.display("updated_at")),
    ]
}

fn pr_row_attrs(row: &Row) -> Vec<(String, String)> {
    vec![
        ("data-status".to_string(), row.display("status")),
        ("data-size".to_string(), row.display("size")),
    ]
}

/// Build one PR table page. Filter groups are only present on the "all"
/// view; every view gets a search box. Tables start sorted by most
/// recently updated.
fn pr_page(
    current: &str,
    title: &str,
    subtitle: &str,
    rows: &[Row],
    empty_message: &str,
    with_filters: bool,
    generated: Option<&str>,
) -> String {
    let mut controls = Element::div().class("controls").child(search_box("pr-search"));
    if with_filters {
        controls = controls
            .child(filter_group("status", &["open", "draft"]))
            .child(filter_group("size", &["tiny", "small", "medium", "large", "huge"]));
    }

    let mut body = Element::new("body")
        .child(nav(current, "..", generated))
        .child(
            Element::new("main")
                .child(heading(title, subtitle))
                .child(controls)
                .child(Element::div().id("prs")),
        );

    let mut engine = Engine::new();
    let options = TableOptions::new()
        .empty_message(empty_message)
        .row_attrs(pr_row_attrs);
    engine.render_table(&mut body, "prs", rows, &pr_columns(), &options);
    engine.setup_search(&body, "pr-search", "prs-table");
    if with_filters {
        engine.setup_filters(&body, "filter-btn", "prs-table");
    }

    // Newest first: two dispatches toggle the updated column to descending.
    for _ in 0..2 {
        engine.dispatch(
            &mut body,
            Event::SortColumn {
                table: "prs-table".to_string(),
                column: UPDATED_COLUMN,
                sort_type: SortType::Str,
            },
        );
    }

    page(title, "..", body)
}

pub fn ready(prs: &[Row], generated: Option<&str>) -> String {
    let rows: Vec<Row> = prs.iter().filter(|r| is_ready(r)).cloned().collect();
    pr_page(
        "prs/ready.html",
        "Ready to merge",
        "Open PRs with passing CI",
        &rows,
        "Nothing is ready to merge.",
        false,
        generated,
    )
}

pub fn failing(prs: &[Row], generated: Option<&str>) -> String {
    let rows: Vec<Row> = prs.iter().filter(|r| is_failing(r)).cloned().collect();
    pr_page(
        "prs/failing.html",
        "CI failing",
        "PRs blocked on a red build",
        &rows,
        "No failing builds.",
        false,
        generated,
    )
}

pub fn huge(prs: &[Row], generated: Option<&str>) -> String {
    let rows: Vec<Row> = prs.iter().filter(|r| is_huge(r)).cloned().collect();
    pr_page(
        "prs/huge.html",
        "Huge PRs",
        "Large and huge PRs that need splitting or focused review",
        &rows,
        "No huge PRs. Keep it that way.",
        false,
        generated,
    )
}

pub fn all(prs: &[Row], generated: Option<&str>) -> String {
    pr_page(
        "prs/all.html",
        "All PRs",
        "Every open pull request",
        prs,
        "No open PRs.",
        true,
        generated,
    )
}
