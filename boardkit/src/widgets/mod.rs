//! Markup widgets for the dashboard pages.
//!
//! Each widget is a builder or free function producing `htmldom` elements.
//! The table widget is the interactive one: its markup carries the ids,
//! classes, and `data-*` attributes the engine later uses to sort rows in
//! place and to recompute filter/search visibility.

pub mod badge;
pub mod bar_chart;
pub mod links;
pub mod stat_card;
pub mod table;

pub use table::{render_table, Column, SortType, TableOptions};
