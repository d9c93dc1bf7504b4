//! The table engine: rendering plus sort/filter/search state.
//!
//! One `Engine` instance owns the state for one logical page: the per-table
//! sort directions and the filter/search wiring. All work is synchronous;
//! each `dispatch` call completes before the next can start.

use htmldom::Element;

use crate::events::{Event, Wiring};
use crate::row::Row;
use crate::widgets::table::{filter, sort, Column, SortState, SortType, TableOptions};

#[derive(Debug, Default)]
pub struct Engine {
    sort: SortState,
    wiring: Wiring,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build (or rebuild) a table into the container.
    ///
    /// Rebuilding drops the table's recorded sort directions: a fresh
    /// render is visually unsorted, so the first header click afterwards
    /// sorts ascending again.
    pub fn render_table(
        &mut self,
        doc: &mut Element,
        container_id: &str,
        rows: &[Row],
        columns: &[Column],
        options: &TableOptions,
    ) {
        self.sort.clear_table(&options.resolve_table_id(container_id));
        crate::widgets::table::render_table(doc, container_id, rows, columns, options);
    }

    /// Wire a search input to a table. No-op if the input is not in the
    /// tree, mirroring pages that omit the search box.
    pub fn setup_search(&mut self, doc: &Element, input_id: &str, table_id: &str) {
        if doc.find(input_id).is_none() {
            log::debug!("setup_search: no input '{input_id}', skipping");
            return;
        }
        self.wiring.add_search(input_id, table_id);
    }

    /// Wire every filter button of the given class to a table. No-op if the
    /// tree has no such button.
    pub fn setup_filters(&mut self, doc: &Element, button_class: &str, table_id: &str) {
        let exists = doc
            .find_by(&|el| el.has_class(button_class))
            .is_some();
        if !exists {
            log::debug!("setup_filters: no '{button_class}' buttons, skipping");
            return;
        }
        self.wiring.add_filter(button_class, table_id);
    }

    /// Apply one interaction event to the tree.
    pub fn dispatch(&mut self, doc: &mut Element, event: Event) {
        match event {
            Event::SortColumn {
                table,
                column,
                sort_type,
            } => self.sort_table_by_col(doc, &table, column, sort_type),
            Event::FilterClick { button } => self.on_filter_click(doc, &button),
            Event::SearchInput { input, text } => self.on_search_input(doc, &input, &text),
        }
    }

    /// Re-sort a table's rows in place, toggling the column's direction.
    pub fn sort_table_by_col(
        &mut self,
        doc: &mut Element,
        table_id: &str,
        column: usize,
        sort_type: SortType,
    ) {
        sort::sort_table_by_col(doc, &mut self.sort, table_id, column, sort_type);
    }

    fn on_filter_click(&mut self, doc: &mut Element, button_id: &str) {
        let Some(classes) = doc.find(button_id).map(|el| el.classes.clone()) else {
            log::debug!("dispatch: no filter button '{button_id}'");
            return;
        };
        let Some((button_class, table_id)) = self
            .wiring
            .filter_for_button(&classes)
            .map(|b| (b.button_class.clone(), b.table_id.clone()))
        else {
            log::debug!("dispatch: filter button '{button_id}' has no wiring");
            return;
        };
        if filter::handle_filter_click(doc, &button_class, button_id) {
            self.apply_all_filters(doc, &table_id);
        }
    }

    fn on_search_input(&mut self, doc: &mut Element, input_id: &str, text: &str) {
        let Some(table_id) = self
            .wiring
            .search_for_input(input_id)
            .map(|b| b.table_id.clone())
        else {
            log::debug!("dispatch: search input '{input_id}' has no wiring");
            return;
        };
        if filter::set_search_value(doc, input_id, text) {
            self.apply_all_filters(doc, &table_id);
        }
    }

    /// Recompute visibility for every row of the table from the current
    /// filter button and search box state.
    pub fn apply_all_filters(&self, doc: &mut Element, table_id: &str) {
        let button_class = self.wiring.filter_class_for_table(table_id);
        let search_input = self.wiring.search_input_for_table(table_id);
        filter::apply_all_filters(doc, table_id, button_class, search_input);
    }
}
