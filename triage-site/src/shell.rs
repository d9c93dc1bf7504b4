//! Full-page HTML shell around a rendered body.

use htmldom::Element;

/// Wrap a body element into a complete HTML document. `base` is the
/// prefix back to the site root for the stylesheet link.
pub fn page(title: &str, base: &str, body: Element) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").child(Element::text(title)))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", format!("{base}/assets/style.css")),
        );

    let html = Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(body);

    format!("<!DOCTYPE html>{}", html.to_html())
}
