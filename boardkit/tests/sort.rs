use boardkit::prelude::*;

fn fixture(values: &[(&str, &str)]) -> (Engine, Element) {
    // Two columns: numeric "Count" and string "Name".
    let rows: Vec<Row> = values
        .iter()
        .map(|(count, name)| Row::new().set("count", *count).set("name", *name))
        .collect();
    let columns = vec![
        Column::new("Count").key("count").numeric(),
        Column::new("Name").key("name"),
    ];
    let mut doc = Element::new("body").child(Element::div().id("list"));
    let mut engine = Engine::new();
    engine.render_table(&mut doc, "list", &rows, &columns, &TableOptions::new());
    (engine, doc)
}

fn column_texts(doc: &Element, table_id: &str, column: usize) -> Vec<String> {
    let tbody = doc
        .find(table_id)
        .and_then(|t| t.child_nodes().iter().find(|el| el.tag == "tbody"))
        .unwrap();
    tbody
        .child_nodes()
        .iter()
        .map(|tr| tr.child_nodes()[column].text_content().trim().to_string())
        .collect()
}

fn arrow_texts(doc: &Element, table_id: &str) -> Vec<String> {
    let thead = doc
        .find(table_id)
        .and_then(|t| t.child_nodes().iter().find(|el| el.tag == "thead"))
        .unwrap();
    thead.child_nodes()[0]
        .child_nodes()
        .iter()
        .map(|th| {
            th.find_by(&|el| el.has_class("sort-arrow"))
                .map(|el| el.text_content())
                .unwrap_or_default()
        })
        .collect()
}

fn sort(engine: &mut Engine, doc: &mut Element, column: usize, sort_type: SortType) {
    engine.dispatch(
        doc,
        Event::SortColumn {
            table: "list-table".to_string(),
            column,
            sort_type,
        },
    );
}

#[test]
fn first_click_ascends_second_descends() {
    let (mut engine, mut doc) = fixture(&[("3", "c"), ("1", "a"), ("2", "b")]);

    sort(&mut engine, &mut doc, 0, SortType::Num);
    assert_eq!(column_texts(&doc, "list-table", 0), ["1", "2", "3"]);
    assert_eq!(arrow_texts(&doc, "list-table"), ["\u{25b2}", ""]);

    sort(&mut engine, &mut doc, 0, SortType::Num);
    assert_eq!(column_texts(&doc, "list-table", 0), ["3", "2", "1"]);
    assert_eq!(arrow_texts(&doc, "list-table"), ["\u{25bc}", ""]);
}

#[test]
fn a_different_column_starts_ascending() {
    let (mut engine, mut doc) = fixture(&[("3", "c"), ("1", "a"), ("2", "b")]);

    sort(&mut engine, &mut doc, 0, SortType::Num);
    sort(&mut engine, &mut doc, 0, SortType::Num); // count now descending

    sort(&mut engine, &mut doc, 1, SortType::Str);
    assert_eq!(column_texts(&doc, "list-table", 1), ["a", "b", "c"]);
    assert_eq!(arrow_texts(&doc, "list-table"), ["", "\u{25b2}"]);
}

#[test]
fn column_direction_survives_sorting_another_column() {
    let (mut engine, mut doc) = fixture(&[("3", "c"), ("1", "a"), ("2", "b")]);

    sort(&mut engine, &mut doc, 0, SortType::Num); // count ascending
    sort(&mut engine, &mut doc, 1, SortType::Str); // name ascending
    sort(&mut engine, &mut doc, 0, SortType::Num); // count remembers asc, toggles
    assert_eq!(column_texts(&doc, "list-table", 0), ["3", "2", "1"]);
}

#[test]
fn numeric_sort_strips_currency_and_defaults_to_zero() {
    let (mut engine, mut doc) = fixture(&[("$1,234", "a"), ("n/a", "b"), ("99", "c")]);

    sort(&mut engine, &mut doc, 0, SortType::Num);
    assert_eq!(column_texts(&doc, "list-table", 0), ["n/a", "99", "$1,234"]);
}

#[test]
fn partial_numeric_keys_sort_by_leading_prefix() {
    let (mut engine, mut doc) = fixture(&[("2026-08-20", "a"), ("99", "b"), ("1.2.3", "c")]);

    sort(&mut engine, &mut doc, 0, SortType::Num);
    assert_eq!(
        column_texts(&doc, "list-table", 0),
        ["1.2.3", "99", "2026-08-20"]
    );
}

#[test]
fn string_sort_uses_case_folded_order() {
    let (mut engine, mut doc) = fixture(&[("1", "Bob"), ("2", "alice"), ("3", "\u{c5}se")]);

    sort(&mut engine, &mut doc, 1, SortType::Str);
    assert_eq!(
        column_texts(&doc, "list-table", 1),
        ["alice", "Bob", "\u{c5}se"]
    );
}

#[test]
fn tied_keys_keep_prior_relative_order() {
    let (mut engine, mut doc) = fixture(&[("2", "x"), ("1", "y"), ("2", "z"), ("1", "w")]);

    sort(&mut engine, &mut doc, 0, SortType::Num);
    assert_eq!(column_texts(&doc, "list-table", 1), ["y", "w", "x", "z"]);
}

#[test]
fn explicit_sort_value_beats_displayed_text() {
    let rows = vec![
        Row::new().set("shown", "3h ago").set("ts", "2026-08-23T07:00:00Z"),
        Row::new().set("shown", "just now").set("ts", "2026-08-23T10:00:00Z"),
        Row::new().set("shown", "2 days ago").set("ts", "2026-08-21T09:00:00Z"),
    ];
    let columns = vec![Column::new("Updated")
        .key("shown")
        .sort_value(|row| row.display("ts"))];
    let mut doc = Element::new("body").child(Element::div().id("list"));
    let mut engine = Engine::new();
    engine.render_table(&mut doc, "list", &rows, &columns, &TableOptions::new());

    sort(&mut engine, &mut doc, 0, SortType::Str);
    assert_eq!(
        column_texts(&doc, "list-table", 0),
        ["2 days ago", "3h ago", "just now"]
    );
}

#[test]
fn sorting_a_missing_table_is_a_noop() {
    let (mut engine, mut doc) = fixture(&[("2", "b"), ("1", "a")]);
    let before = doc.to_html();
    engine.dispatch(
        &mut doc,
        Event::SortColumn {
            table: "ghost".to_string(),
            column: 0,
            sort_type: SortType::Num,
        },
    );
    assert_eq!(doc.to_html(), before);
}

#[test]
fn rebuild_with_same_id_resets_direction() {
    let (mut engine, mut doc) = fixture(&[("3", "c"), ("1", "a"), ("2", "b")]);

    sort(&mut engine, &mut doc, 0, SortType::Num); // ascending
    sort(&mut engine, &mut doc, 0, SortType::Num); // descending

    // Re-render the same table id with fresh data.
    let rows: Vec<Row> = [("5", "e"), ("4", "d"), ("6", "f")]
        .iter()
        .map(|(count, name)| Row::new().set("count", *count).set("name", *name))
        .collect();
    let columns = vec![
        Column::new("Count").key("count").numeric(),
        Column::new("Name").key("name"),
    ];
    engine.render_table(&mut doc, "list", &rows, &columns, &TableOptions::new());

    // First click after the rebuild starts ascending again.
    sort(&mut engine, &mut doc, 0, SortType::Num);
    assert_eq!(column_texts(&doc, "list-table", 0), ["4", "5", "6"]);
}

#[test]
fn sorting_does_not_touch_hidden_state_or_cell_content() {
    let (mut engine, mut doc) = fixture(&[("2", "b"), ("1", "a")]);
    // Mark the first row hidden out of band.
    if let Some(tbody) = doc
        .find_mut("list-table")
        .and_then(|t| t.child_nodes_mut().iter_mut().find(|el| el.tag == "tbody"))
    {
        tbody.child_nodes_mut()[0].add_class("hidden");
    }

    sort(&mut engine, &mut doc, 0, SortType::Num);

    // The hidden row sorted to the bottom but kept its hidden class.
    let tbody = doc
        .find("list-table")
        .and_then(|t| t.child_nodes().iter().find(|el| el.tag == "tbody"))
        .unwrap();
    let hidden: Vec<bool> = tbody
        .child_nodes()
        .iter()
        .map(|tr| tr.has_class("hidden"))
        .collect();
    assert_eq!(hidden, [false, true]);
    assert_eq!(column_texts(&doc, "list-table", 1), ["a", "b"]);
}
