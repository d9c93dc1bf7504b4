use boardkit::prelude::*;

fn doc_with_container(id: &str) -> Element {
    Element::new("body").child(Element::div().id(id))
}

fn rows() -> Vec<Row> {
    vec![
        Row::new().set("number", 12).set("title", "Fix lexer"),
        Row::new().set("number", 7).set("title", "Add parser"),
        Row::new().set("number", 30).set("title", "Docs pass"),
    ]
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("#").key("number").numeric(),
        Column::new("Title").key("title"),
    ]
}

fn body_rows<'a>(doc: &'a Element, table_id: &str) -> &'a [Element] {
    doc.find(table_id)
        .and_then(|table| table.child_nodes().iter().find(|el| el.tag == "tbody"))
        .map(|tbody| tbody.child_nodes())
        .unwrap_or_default()
}

#[test]
fn renders_one_body_row_per_input_row_in_order() {
    let mut doc = doc_with_container("prs");
    render_table(&mut doc, "prs", &rows(), &columns(), &TableOptions::new());

    let body = body_rows(&doc, "prs-table");
    assert_eq!(body.len(), 3);
    let titles: Vec<String> = body
        .iter()
        .map(|tr| tr.child_nodes()[1].text_content())
        .collect();
    assert_eq!(titles, ["Fix lexer", "Add parser", "Docs pass"]);
}

#[test]
fn empty_rows_render_placeholder_and_no_table() {
    let mut doc = doc_with_container("prs");
    render_table(&mut doc, "prs", &[], &columns(), &TableOptions::new());

    let html = doc.find("prs").unwrap().to_html();
    assert!(html.contains("No data found."));
    assert!(!html.contains("<table"));
    assert!(!html.contains("sort-arrow"));
}

#[test]
fn empty_rows_use_configured_message() {
    let mut doc = doc_with_container("prs");
    let options = TableOptions::new().empty_message("No ready PRs \u{1f389}");
    render_table(&mut doc, "prs", &[], &columns(), &options);
    assert!(doc.to_html().contains("No ready PRs"));
}

#[test]
fn rendering_twice_is_idempotent() {
    let mut once = doc_with_container("prs");
    render_table(&mut once, "prs", &rows(), &columns(), &TableOptions::new());
    let first = once.to_html();

    render_table(&mut once, "prs", &rows(), &columns(), &TableOptions::new());
    assert_eq!(once.to_html(), first);
}

#[test]
fn missing_container_is_a_silent_noop() {
    let mut doc = doc_with_container("prs");
    let before = doc.to_html();
    render_table(&mut doc, "nope", &rows(), &columns(), &TableOptions::new());
    assert_eq!(doc.to_html(), before);
}

#[test]
fn missing_field_yields_empty_cell() {
    let mut doc = doc_with_container("prs");
    let cols = vec![Column::new("Author").key("author")];
    render_table(&mut doc, "prs", &rows(), &cols, &TableOptions::new());

    let body = body_rows(&doc, "prs-table");
    assert_eq!(body[0].child_nodes()[0].text_content(), "");
}

#[test]
fn row_attrs_are_stamped_on_row_elements() {
    let mut doc = doc_with_container("prs");
    let options = TableOptions::new().row_attrs(|row| {
        vec![("data-status".to_string(), row.display("status"))]
    });
    let data = vec![Row::new().set("title", "x").set("status", "open")];
    render_table(&mut doc, "prs", &data, &columns(), &options);

    let body = body_rows(&doc, "prs-table");
    assert_eq!(body[0].get_data("status"), Some("open"));
}

#[test]
fn explicit_sort_value_lands_on_the_cell() {
    let mut doc = doc_with_container("prs");
    let cols = vec![Column::new("Updated")
        .render(|_| Element::text("3h ago"))
        .sort_value(|row| row.display("updated_at"))];
    let data = vec![Row::new().set("updated_at", "2026-08-20T10:00:00Z")];
    render_table(&mut doc, "prs", &data, &cols, &TableOptions::new());

    let body = body_rows(&doc, "prs-table");
    let cell = &body[0].child_nodes()[0];
    assert_eq!(cell.get_attr("data-sort"), Some("2026-08-20T10:00:00Z"));
    assert_eq!(cell.text_content(), "3h ago");
}

#[test]
fn custom_renderer_wins_over_field_key() {
    let mut doc = doc_with_container("prs");
    let cols = vec![Column::new("#")
        .key("number")
        .render(|row| Element::span().child(Element::text(format!("PR {}", row.display("number")))))];
    render_table(&mut doc, "prs", &rows(), &cols, &TableOptions::new());

    let body = body_rows(&doc, "prs-table");
    assert_eq!(body[0].child_nodes()[0].text_content(), "PR 12");
}

#[test]
fn table_id_defaults_from_container_and_can_be_overridden() {
    let mut doc = doc_with_container("prs");
    render_table(&mut doc, "prs", &rows(), &columns(), &TableOptions::new());
    assert!(doc.find("prs-table").is_some());

    let mut doc = doc_with_container("prs");
    let options = TableOptions::new().table_id("custom");
    render_table(&mut doc, "prs", &rows(), &columns(), &options);
    assert!(doc.find("custom").is_some());
    assert!(doc.find("prs-table").is_none());
}

#[test]
fn header_cells_carry_sort_dispatch_data() {
    let mut doc = doc_with_container("prs");
    render_table(&mut doc, "prs", &rows(), &columns(), &TableOptions::new());

    let table = doc.find("prs-table").unwrap();
    let thead = table
        .child_nodes()
        .iter()
        .find(|el| el.tag == "thead")
        .unwrap();
    let headers = thead.child_nodes()[0].child_nodes();
    assert_eq!(headers.len(), 2);
    assert_eq!(headers[0].get_data("col"), Some("0"));
    assert_eq!(headers[0].get_data("sort-type"), Some("num"));
    assert_eq!(headers[1].get_data("sort-type"), Some("str"));
}
