pub mod data;
pub mod engine;
pub mod events;
pub mod format;
pub mod row;
pub mod widgets;

pub use engine::Engine;

pub mod prelude {
    pub use crate::data::{load_json, load_rows, DataError};
    pub use crate::engine::Engine;
    pub use crate::events::Event;
    pub use crate::format::{days_ago, time_ago};
    pub use crate::row::Row;
    pub use crate::widgets::badge::{badge, BadgeKind};
    pub use crate::widgets::bar_chart::{render_bar_chart, BarChartOptions, BarEntry};
    pub use crate::widgets::links::{issue_link, pr_link};
    pub use crate::widgets::stat_card::stat_card;
    pub use crate::widgets::table::{render_table, Column, SortType, TableOptions};
    pub use htmldom::Element;
}
