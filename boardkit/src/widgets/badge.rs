//! Badge markup for PR sizes, CI status dots, and labels.

use htmldom::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    /// PR size bucket: `badge badge-<value>`.
    Size,
    /// CI status dot: `ci-dot ci-<value>`, value shown as a tooltip.
    Ci,
    /// Plain label badge.
    Label,
    /// Generic badge with no variant class.
    Plain,
}

pub fn badge(kind: BadgeKind, value: &str) -> Element {
    let variant = if value.is_empty() { "unknown" } else { value };
    match kind {
        BadgeKind::Size => Element::span()
            .class("badge")
            .class(format!("badge-{variant}"))
            .child(Element::text(value)),
        BadgeKind::Ci => Element::span()
            .class("ci-dot")
            .class(format!("ci-{variant}"))
            .attr("title", value),
        BadgeKind::Label => Element::span()
            .class("badge")
            .class("badge-label")
            .child(Element::text(value)),
        BadgeKind::Plain => Element::span().class("badge").child(Element::text(value)),
    }
}
