//! Page assembly: each function returns a complete HTML document.

pub mod issues;
pub mod overview;
pub mod prs;

use htmldom::Element;

pub(crate) fn heading(title: &str, subtitle: &str) -> Element {
    Element::div()
        .class("page-head")
        .child(Element::new("h1").child(Element::text(title)))
        .child(Element::new("p").class("subtitle").child(Element::text(subtitle)))
}

pub(crate) fn search_box(id: &str) -> Element {
    Element::input()
        .id(id)
        .class("search-box")
        .attr("type", "search")
        .attr("placeholder", "Search\u{2026}")
}

pub(crate) fn filter_button(id: &str, group: &str, value: &str, label: &str, active: bool) -> Element {
    let mut button = Element::button()
        .id(id)
        .class("filter-btn")
        .data("group", group)
        .data("value", value)
        .child(Element::text(label));
    if active {
        button.add_class("active");
    }
    button
}

/// A filter group as a row of buttons with "All" pre-selected.
pub(crate) fn filter_group(group: &str, values: &[&str]) -> Element {
    let mut bar = Element::div().class("filter-group").child(filter_button(
        &format!("filter-{group}-all"),
        group,
        "all",
        "All",
        true,
    ));
    for value in values {
        bar = bar.child(filter_button(
            &format!("filter-{group}-{value}"),
            group,
            value,
            value,
            false,
        ));
    }
    bar
}
