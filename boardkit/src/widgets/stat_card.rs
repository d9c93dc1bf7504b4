use htmldom::Element;

/// A stat card: big value, label underneath, optional subtext.
pub fn stat_card(label: &str, value: &str, subtext: Option<&str>) -> Element {
    let mut card = Element::div()
        .class("stat-card")
        .child(Element::div().class("stat-value").child(Element::text(value)))
        .child(Element::div().class("stat-label").child(Element::text(label)));
    if let Some(subtext) = subtext {
        card = card.child(
            Element::div()
                .class("stat-subtext")
                .child(Element::text(subtext)),
        );
    }
    card
}
