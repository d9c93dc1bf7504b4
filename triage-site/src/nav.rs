//! Shared navigation bar.

use boardkit::format::time_ago;
use htmldom::Element;

/// (href relative to the site root, label).
const PAGES: &[(&str, &str)] = &[
    ("index.html", "Overview"),
    ("prs/ready.html", "Ready"),
    ("prs/failing.html", "CI Failing"),
    ("prs/huge.html", "Huge PRs"),
    ("prs/all.html", "All PRs"),
    ("issues/trending.html", "Trending"),
    ("health.html", "Health"),
];

/// Build the nav for one page. `current` is the page's site-root-relative
/// path (used to mark the active link) and `base` is the prefix back to the
/// site root (`.` at the root, `..` inside prs/ or issues/).
pub fn nav(current: &str, base: &str, generated: Option<&str>) -> Element {
    let mut inner = Element::div().class("nav-inner").child(
        Element::anchor()
            .class("nav-brand")
            .attr("href", format!("{base}/index.html"))
            .child(Element::text("\u{1f52e} Moltbot Triage")),
    );

    for (href, label) in PAGES {
        let mut link = Element::anchor()
            .class("nav-link")
            .attr("href", format!("{base}/{href}"))
            .child(Element::text(*label));
        if *href == current {
            link.add_class("active");
        }
        inner = inner.child(link);
    }

    if let Some(generated) = generated {
        inner = inner.child(
            Element::span()
                .class("nav-meta")
                .id("nav-generated")
                .child(Element::text(format!("Updated {}", time_ago(Some(generated))))),
        );
    }

    Element::new("nav")
        .class("top-nav")
        .attr("role", "navigation")
        .child(inner)
}
