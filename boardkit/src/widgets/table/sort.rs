//! In-place row sorting with per-column direction toggling.

use std::collections::HashMap;

use htmldom::Element;

use super::SortType;

const ARROW_UP: &str = "\u{25b2}";
const ARROW_DOWN: &str = "\u{25bc}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Last applied direction per (table id, column index).
///
/// Owned by the [`Engine`](crate::engine::Engine) instance rather than
/// stored process-wide, so two engines never share direction bookkeeping.
/// A column's direction toggles on repeated sorts and is not reset by
/// sorting a different column of the same table.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    last: HashMap<(String, usize), Direction>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction for the next sort of this column: ascending unless the
    /// last sort of the same column was already ascending.
    pub fn toggle(&mut self, table_id: &str, column: usize) -> Direction {
        let key = (table_id.to_string(), column);
        let next = match self.last.get(&key) {
            Some(Direction::Ascending) => Direction::Descending,
            _ => Direction::Ascending,
        };
        self.last.insert(key, next);
        next
    }

    /// Forget every recorded direction for a table. Called when the table
    /// is rebuilt, so a fresh render starts unsorted.
    pub fn clear_table(&mut self, table_id: &str) {
        self.last.retain(|(table, _), _| table != table_id);
    }
}

/// Reorder the table's body rows by the given column.
///
/// The sort key for each row is the cell's `data-sort` attribute if
/// present, else its displayed text trimmed. Rows are reordered in place
/// with a stable sort (tied keys keep their prior relative order); header
/// and cell contents are untouched, as is filter/search visibility. All
/// sort-arrow glyphs are cleared and the sorted column's arrow is set.
/// A missing table is a silent no-op and records no direction.
pub fn sort_table_by_col(
    doc: &mut Element,
    state: &mut SortState,
    table_id: &str,
    column: usize,
    sort_type: SortType,
) {
    let Some(table) = doc.find_mut(table_id) else {
        log::debug!("sort: no table '{table_id}', skipping");
        return;
    };
    let direction = state.toggle(table_id, column);

    if let Some(tbody) = table
        .child_nodes_mut()
        .iter_mut()
        .find(|el| el.tag == "tbody")
    {
        let rows = std::mem::take(tbody.child_nodes_mut());
        let mut keyed: Vec<(String, Element)> = rows
            .into_iter()
            .map(|row| (cell_sort_key(&row, column), row))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| {
            let ordering = compare_keys(a, b, sort_type);
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });
        *tbody.child_nodes_mut() = keyed.into_iter().map(|(_, row)| row).collect();
    }

    set_arrows(table, column, direction);
}

/// Extract the sort key from a row's cell at the column index. A missing
/// cell yields an empty key (zero under numeric comparison).
fn cell_sort_key(row: &Element, column: usize) -> String {
    match row.child_nodes().get(column) {
        Some(cell) => match cell.get_attr("data-sort") {
            Some(explicit) => explicit.to_string(),
            None => cell.text_content().trim().to_string(),
        },
        None => String::new(),
    }
}

fn compare_keys(a: &str, b: &str, sort_type: SortType) -> std::cmp::Ordering {
    match sort_type {
        SortType::Num => numeric_key(a).total_cmp(&numeric_key(b)),
        SortType::Str => collate(a, b),
    }
}

/// Numeric coercion: keep digits, `.` and `-`, then parse the longest
/// numeric prefix, default zero. `"$1,234"` becomes 1234.0, `"1.2.3"`
/// becomes 1.2, and `"n/a"` becomes 0.0.
pub fn numeric_key(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    // All-ASCII, so byte positions are char boundaries.
    (1..=cleaned.len())
        .rev()
        .find_map(|end| cleaned[..end].parse().ok())
        .unwrap_or(0.0)
}

/// Case-insensitive comparison on Unicode scalar values. Accented letters
/// keep their scalar-value position, so `Å` collates after `Z`
/// (Danish/Norwegian-style rather than English interleaving). Keys equal
/// under case folding compare equal, so the stable sort preserves their
/// prior relative order.
fn collate(a: &str, b: &str) -> std::cmp::Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Clear every sort-arrow glyph in the table, then mark the sorted column.
fn set_arrows(table: &mut Element, column: usize, direction: Direction) {
    table.walk_mut(&mut |el| {
        if el.has_class("sort-arrow") {
            el.set_text("");
        }
    });

    let glyph = match direction {
        Direction::Ascending => ARROW_UP,
        Direction::Descending => ARROW_DOWN,
    };
    let header_cell = table
        .child_nodes_mut()
        .iter_mut()
        .find(|el| el.tag == "thead")
        .and_then(|thead| thead.child_nodes_mut().first_mut())
        .and_then(|tr| tr.child_nodes_mut().get_mut(column));
    if let Some(cell) = header_cell {
        cell.walk_mut(&mut |el| {
            if el.has_class("sort-arrow") {
                el.set_text(glyph);
            }
        });
    }
}
