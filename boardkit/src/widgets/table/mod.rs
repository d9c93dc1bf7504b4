//! Table widget: rows + column specs -> table markup.
//!
//! Rendering happens once per data set. Afterwards the engine mutates the
//! produced tree in place: [`sort`] reorders body rows, [`filter`] toggles
//! the `hidden` class on them. Cell content is never touched again.

pub mod filter;
pub mod sort;

use htmldom::Element;

use crate::row::Row;

pub use sort::{Direction, SortState};

/// How a column's cells compare when sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortType {
    /// Case-folded string comparison.
    #[default]
    Str,
    /// Numeric comparison after stripping non-numeric characters.
    Num,
}

impl SortType {
    pub fn as_str(self) -> &'static str {
        match self {
            SortType::Str => "str",
            SortType::Num => "num",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "num" => SortType::Num,
            _ => SortType::Str,
        }
    }
}

type CellRender = Box<dyn Fn(&Row) -> Element>;
type SortValue = Box<dyn Fn(&Row) -> String>;
type RowAttrs = Box<dyn Fn(&Row) -> Vec<(String, String)>>;

/// Configuration for one table column.
///
/// A column needs either a field `key` or a custom `render` function. When
/// both are present the render function wins. An optional `sort_value`
/// extractor attaches an invisible `data-sort` attribute to each cell so
/// sorting can use a different value than the display (raw timestamp vs
/// "3h ago").
pub struct Column {
    pub header: String,
    key: Option<String>,
    render: Option<CellRender>,
    sort_value: Option<SortValue>,
    class: Option<String>,
    sort_type: SortType,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: None,
            render: None,
            sort_value: None,
            class: None,
            sort_type: SortType::Str,
        }
    }

    /// Render the row's value at this field key, HTML-escaped.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Custom cell markup. Takes precedence over `key`.
    pub fn render(mut self, render: impl Fn(&Row) -> Element + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Explicit sort key, attached to the cell as `data-sort`.
    pub fn sort_value(mut self, extract: impl Fn(&Row) -> String + 'static) -> Self {
        self.sort_value = Some(Box::new(extract));
        self
    }

    /// CSS class applied to every cell of this column.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = sort_type;
        self
    }

    /// Shorthand for `sort_type(SortType::Num)`.
    pub fn numeric(self) -> Self {
        self.sort_type(SortType::Num)
    }
}

/// Optional per-render configuration.
#[derive(Default)]
pub struct TableOptions {
    table_id: Option<String>,
    empty_message: Option<String>,
    row_attrs: Option<RowAttrs>,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_id(mut self, id: impl Into<String>) -> Self {
        self.table_id = Some(id.into());
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Derive attributes stamped onto each body row element. Attribute
    /// names are used verbatim; filter groups match against `data-<group>`.
    pub fn row_attrs(mut self, derive: impl Fn(&Row) -> Vec<(String, String)> + 'static) -> Self {
        self.row_attrs = Some(Box::new(derive));
        self
    }

    /// The table id this render will use: the configured one, or
    /// `<container_id>-table`.
    pub fn resolve_table_id(&self, container_id: &str) -> String {
        self.table_id
            .clone()
            .unwrap_or_else(|| format!("{container_id}-table"))
    }
}

const DEFAULT_EMPTY_MESSAGE: &str = "No data found.";

/// Build a table into the container with the given id.
///
/// Replaces the container's content with a `div.table-wrapper` holding the
/// table: one header cell per column (header text plus an empty
/// `span.sort-arrow`, stamped with `data-col` and `data-sort-type` for sort
/// dispatch), one body row per input row in input order. A missing
/// container is a silent no-op; an empty row sequence renders a
/// `div.empty-state` placeholder and no table at all.
pub fn render_table(
    doc: &mut Element,
    container_id: &str,
    rows: &[Row],
    columns: &[Column],
    options: &TableOptions,
) {
    let Some(container) = doc.find_mut(container_id) else {
        log::debug!("render_table: no container '{container_id}', skipping");
        return;
    };

    if rows.is_empty() {
        let message = options
            .empty_message
            .as_deref()
            .unwrap_or(DEFAULT_EMPTY_MESSAGE);
        container.set_children(vec![Element::div()
            .class("empty-state")
            .child(Element::text(message))]);
        return;
    }

    let table_id = options.resolve_table_id(container_id);

    let mut header = Element::tr();
    for (i, col) in columns.iter().enumerate() {
        header = header.child(
            Element::th()
                .data("col", i.to_string())
                .data("sort-type", col.sort_type.as_str())
                .child(Element::text(format!("{} ", col.header)))
                .child(Element::span().class("sort-arrow")),
        );
    }

    let mut body = Element::tbody();
    for row in rows {
        let mut tr = Element::tr();
        if let Some(derive) = &options.row_attrs {
            for (name, value) in derive(row) {
                tr = tr.attr(name, value);
            }
        }
        for col in columns {
            let mut td = Element::td();
            if let Some(class) = &col.class {
                td = td.class(class.clone());
            }
            if let Some(extract) = &col.sort_value {
                td = td.attr("data-sort", extract(row));
            }
            td = match (&col.render, &col.key) {
                (Some(render), _) => td.child(render(row)),
                (None, Some(key)) => td.child(Element::text(row.display(key))),
                (None, None) => td,
            };
            tr = tr.child(td);
        }
        body = body.child(tr);
    }

    let table = Element::table()
        .id(table_id)
        .child(Element::thead().child(header))
        .child(body);

    container.set_children(vec![Element::div().class("table-wrapper").child(table)]);
}
