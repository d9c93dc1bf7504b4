//! Interaction events and the wiring that routes them to tables.
//!
//! `setup_search` / `setup_filters` record bindings here; `Engine::dispatch`
//! consults them to find which table an event targets. Events with no
//! binding (or targets missing from the tree) are ignored.

use crate::widgets::table::SortType;

/// One user interaction, dispatched synchronously to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click on a column header: re-sort the table's rows in place.
    SortColumn {
        table: String,
        column: usize,
        sort_type: SortType,
    },
    /// Click on a filter button, identified by element id.
    FilterClick { button: String },
    /// A keystroke in a search box: the input's new full text.
    SearchInput { input: String, text: String },
}

#[derive(Debug, Clone)]
pub(crate) struct FilterBinding {
    pub button_class: String,
    pub table_id: String,
}

#[derive(Debug, Clone)]
pub(crate) struct SearchBinding {
    pub input_id: String,
    pub table_id: String,
}

/// Registered filter and search bindings.
#[derive(Debug, Clone, Default)]
pub struct Wiring {
    pub(crate) filters: Vec<FilterBinding>,
    pub(crate) searches: Vec<SearchBinding>,
}

impl Wiring {
    pub(crate) fn add_filter(&mut self, button_class: &str, table_id: &str) {
        self.filters.push(FilterBinding {
            button_class: button_class.to_string(),
            table_id: table_id.to_string(),
        });
    }

    pub(crate) fn add_search(&mut self, input_id: &str, table_id: &str) {
        self.searches.push(SearchBinding {
            input_id: input_id.to_string(),
            table_id: table_id.to_string(),
        });
    }

    /// Filter binding whose button class the clicked button carries.
    pub(crate) fn filter_for_button(&self, classes: &[String]) -> Option<&FilterBinding> {
        self.filters
            .iter()
            .find(|binding| classes.iter().any(|c| *c == binding.button_class))
    }

    pub(crate) fn search_for_input(&self, input_id: &str) -> Option<&SearchBinding> {
        self.searches
            .iter()
            .find(|binding| binding.input_id == input_id)
    }

    pub(crate) fn filter_class_for_table(&self, table_id: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|binding| binding.table_id == table_id)
            .map(|binding| binding.button_class.as_str())
    }

    pub(crate) fn search_input_for_table(&self, table_id: &str) -> Option<&str> {
        self.searches
            .iter()
            .find(|binding| binding.table_id == table_id)
            .map(|binding| binding.input_id.as_str())
    }
}
