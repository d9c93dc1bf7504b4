//! Filter button handling and combined filter/search visibility.
//!
//! Filter buttons live in the element tree and carry their group and value
//! as `data-group` / `data-value`; the `active` class on a button is the
//! single source of truth for the group's current selection. Visibility is
//! recomputed from scratch for every row on each trigger — no incremental
//! bookkeeping, which is fine at the hundreds-of-rows scale this targets.

use std::collections::BTreeMap;

use htmldom::Element;

/// Activate a filter button, deactivating every other button of the same
/// class and group (radio semantics). Returns false if the button does not
/// exist or carries no `data-group`.
pub fn handle_filter_click(doc: &mut Element, button_class: &str, button_id: &str) -> bool {
    let Some(group) = doc
        .find(button_id)
        .filter(|el| el.has_class(button_class))
        .and_then(|el| el.get_data("group"))
        .map(str::to_string)
    else {
        log::debug!("filter: no button '{button_id}' with class '{button_class}'");
        return false;
    };

    doc.walk_mut(&mut |el| {
        if el.has_class(button_class) && el.get_data("group") == Some(group.as_str()) {
            el.remove_class("active");
        }
    });
    if let Some(button) = doc.find_mut(button_id) {
        button.add_class("active");
    }
    true
}

/// The active value per filter group: the `data-value` of the one button
/// per `data-group` carrying the `active` class.
pub fn active_filters(doc: &Element, button_class: &str) -> BTreeMap<String, String> {
    let mut filters = BTreeMap::new();
    doc.walk(&mut |el| {
        if el.has_class(button_class) && el.has_class("active") {
            if let (Some(group), Some(value)) = (el.get_data("group"), el.get_data("value")) {
                filters.insert(group.to_string(), value.to_string());
            }
        }
    });
    filters
}

/// Current lower-cased text of the search input, empty if the input does
/// not exist or is blank.
pub fn search_query(doc: &Element, input_id: &str) -> String {
    doc.find(input_id)
        .and_then(|el| el.get_attr("value"))
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Store the search box's current text on the input element. Returns false
/// if the input does not exist.
pub fn set_search_value(doc: &mut Element, input_id: &str, text: &str) -> bool {
    match doc.find_mut(input_id) {
        Some(input) => {
            input.set_attr("value", text);
            true
        }
        None => {
            log::debug!("search: no input '{input_id}', skipping");
            false
        }
    }
}

/// Recompute visibility for every body row of the table.
///
/// A row is visible iff every active non-"all" filter group matches the
/// row's `data-<group>` attribute, AND the search query is empty or a
/// substring of the row's lower-cased full text. The `hidden` class is
/// toggled accordingly; rows are never removed and their order is never
/// changed. A missing table is a no-op.
pub fn apply_all_filters(
    doc: &mut Element,
    table_id: &str,
    button_class: Option<&str>,
    search_input: Option<&str>,
) {
    let filters = button_class
        .map(|class| active_filters(doc, class))
        .unwrap_or_default();
    let query = search_input
        .map(|input| search_query(doc, input))
        .unwrap_or_default();

    let Some(table) = doc.find_mut(table_id) else {
        log::debug!("filter: no table '{table_id}', skipping");
        return;
    };
    let Some(tbody) = table
        .child_nodes_mut()
        .iter_mut()
        .find(|el| el.tag == "tbody")
    else {
        return;
    };

    for row in tbody.child_nodes_mut() {
        let mut show = filters
            .iter()
            .filter(|(_, value)| value.as_str() != "all")
            .all(|(group, value)| row.get_data(group) == Some(value.as_str()));
        if show && !query.is_empty() {
            show = row.text_content().to_lowercase().contains(&query);
        }
        row.set_class("hidden", !show);
    }
}
