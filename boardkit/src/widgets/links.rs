//! Anchor helpers for PR and issue numbers.

use htmldom::Element;

use crate::row::Row;

/// `#<number>` linking to the PR's `url` field, opened in a new tab.
pub fn pr_link(row: &Row) -> Element {
    let number = row.display("number");
    Element::anchor()
        .attr("href", row.display("url"))
        .attr("target", "_blank")
        .child(Element::text(format!("#{number}")))
}

/// `#<number>` linking to the issue, with a fallback URL derived from the
/// issue number when the data carries none.
pub fn issue_link(number: i64, url: Option<&str>, repo: &str) -> Element {
    let href = match url {
        Some(url) => url.to_string(),
        None => format!("https://github.com/{repo}/issues/{number}"),
    };
    Element::anchor()
        .attr("href", href)
        .attr("target", "_blank")
        .child(Element::text(format!("#{number}")))
}
