//! Overview and health pages: stat cards and bar charts.

use std::collections::BTreeMap;

use boardkit::prelude::*;
use htmldom::Element;

use crate::nav::nav;
use crate::shell::page;

use super::heading;
use super::prs::{is_failing, is_ready};

const SIZE_ORDER: &[&str] = &["tiny", "small", "medium", "large", "huge"];
const TOP_LABELS: usize = 8;

fn count_by(rows: &[Row], key: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        let value = row.display(key);
        if !value.is_empty() {
            *counts.entry(value).or_insert(0) += 1;
        }
    }
    counts
}

fn size_entries(prs: &[Row]) -> Vec<BarEntry> {
    let counts = count_by(prs, "size");
    SIZE_ORDER
        .iter()
        .map(|size| BarEntry::new(*size, counts.get(*size).copied().unwrap_or(0) as f64))
        .collect()
}

fn label_entries(issues: &[Row]) -> Vec<BarEntry> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in issues {
        if let Some(labels) = row.get("labels").and_then(|v| v.as_array()) {
            for label in labels.iter().filter_map(|v| v.as_str()) {
                *counts.entry(label.to_string()).or_insert(0) += 1;
            }
        }
    }
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
        .into_iter()
        .take(TOP_LABELS)
        .map(|(label, count)| BarEntry::new(label, count as f64))
        .collect()
}

/// Bucket PRs by age of last update.
fn age_entries(prs: &[Row]) -> Vec<BarEntry> {
    let mut fresh = 0usize;
    let mut active = 0usize;
    let mut stale = 0usize;
    let mut abandoned = 0usize;
    for row in prs {
        match days_ago(row.get_str("updated_at")) {
            d if d < 2 => fresh += 1,
            d if d < 7 => active += 1,
            d if d < 30 => stale += 1,
            _ => abandoned += 1,
        }
    }
    vec![
        BarEntry::new("< 2 days", fresh as f64).color("#34d399"),
        BarEntry::new("< 7 days", active as f64).color("#818cf8"),
        BarEntry::new("< 30 days", stale as f64).color("#fbbf24"),
        BarEntry::new("older", abandoned as f64).color("#f87171"),
    ]
}

fn ci_entries(prs: &[Row]) -> Vec<BarEntry> {
    let counts = count_by(prs, "ci");
    let color = |ci: &str| match ci {
        "passing" => "#34d399",
        "failing" => "#f87171",
        _ => "#9ca3af",
    };
    ["passing", "failing", "unknown"]
        .iter()
        .map(|ci| {
            BarEntry::new(*ci, counts.get(*ci).copied().unwrap_or(0) as f64).color(color(ci))
        })
        .collect()
}

pub fn overview(prs: &[Row], issues: &[Row], generated: Option<&str>) -> String {
    let open_issues = issues.iter().filter(|r| r.display("status") == "open").count();
    let ready = prs.iter().filter(|r| is_ready(r)).count();
    let failing = prs.iter().filter(|r| is_failing(r)).count();

    let cards = Element::div()
        .class("stat-grid")
        .child(stat_card("Open PRs", &prs.len().to_string(), None))
        .child(stat_card("Ready to merge", &ready.to_string(), Some("passing CI, not draft")))
        .child(stat_card("CI failing", &failing.to_string(), None))
        .child(stat_card("Open issues", &open_issues.to_string(), None));

    let mut body = Element::new("body")
        .child(nav("index.html", ".", generated))
        .child(
            Element::new("main")
                .child(heading("Overview", "Repository triage at a glance"))
                .child(cards)
                .child(chart_section("PRs by size", "pr-sizes"))
                .child(chart_section("Top issue labels", "issue-labels")),
        );

    render_bar_chart(&mut body, "pr-sizes", &size_entries(prs), &BarChartOptions::default());
    render_bar_chart(
        &mut body,
        "issue-labels",
        &label_entries(issues),
        &BarChartOptions::default(),
    );

    page("Overview", ".", body)
}

pub fn health(prs: &[Row], generated: Option<&str>) -> String {
    let stale = prs
        .iter()
        .filter(|r| days_ago(r.get_str("updated_at")) >= 7)
        .count();
    let oldest = prs
        .iter()
        .map(|r| days_ago(r.get_str("updated_at")))
        .max()
        .unwrap_or(0);

    let cards = Element::div()
        .class("stat-grid")
        .child(stat_card("Stale PRs", &stale.to_string(), Some("no update in 7 days")))
        .child(stat_card("Oldest PR", &format!("{oldest}d"), Some("since last update")));

    let mut body = Element::new("body")
        .child(nav("health.html", ".", generated))
        .child(
            Element::new("main")
                .child(heading("Health", "Review pipeline freshness"))
                .child(cards)
                .child(chart_section("PR age", "pr-age"))
                .child(chart_section("CI status", "ci-status")),
        );

    render_bar_chart(&mut body, "pr-age", &age_entries(prs), &BarChartOptions::default());
    render_bar_chart(&mut body, "ci-status", &ci_entries(prs), &BarChartOptions::default());

    page("Health", ".", body)
}

fn chart_section(title: &str, container_id: &str) -> Element {
    Element::new("section")
        .class("chart-section")
        .child(Element::new("h2").child(Element::text(title)))
        .child(Element::div().id(container_id))
}
