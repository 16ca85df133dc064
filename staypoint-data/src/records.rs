//! Record extraction from the JSON layouts tabular exporters produce.
//!
//! Two orientations are understood: an array of row objects, and an object
//! of columns whose values are arrays or index-keyed objects. Either way the
//! result is a list of rows borrowing from the input, in file order.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// One raw row: column name to cell value.
pub(crate) type Row<'a> = BTreeMap<&'a str, &'a Value>;

/// Rows read from one collection.
#[derive(Debug)]
pub(crate) struct Records<'a> {
    /// Rows in input order.
    pub(crate) rows: Vec<Row<'a>>,
    /// Array entries that were not objects and so yielded no row.
    pub(crate) skipped: usize,
}

impl Records<'_> {
    /// Every entry seen, including the skipped ones.
    pub(crate) const fn total(&self) -> usize {
        self.rows.len() + self.skipped
    }
}

/// Strip the optional container object.
///
/// When `wrapper_key` is set and `raw` is an object holding that key, its
/// value is returned; otherwise `raw` itself is.
pub(crate) fn unwrap_container<'a>(raw: &'a Value, wrapper_key: Option<&str>) -> &'a Value {
    wrapper_key
        .and_then(|key| raw.as_object()?.get(key))
        .unwrap_or(raw)
}

/// Rows in input order, or `None` when the layout is not recognised.
pub(crate) fn rows(collection: &Value) -> Option<Records<'_>> {
    match collection {
        Value::Array(items) => {
            let rows: Vec<Row<'_>> = items
                .iter()
                .filter_map(Value::as_object)
                .map(row_from_object)
                .collect();
            Some(Records {
                skipped: items.len() - rows.len(),
                rows,
            })
        }
        Value::Object(columns) if is_columnar(columns) => Some(Records {
            rows: rows_from_columns(columns),
            skipped: 0,
        }),
        _ => None,
    }
}

/// Union of column names across `rows`, in first-seen order.
pub(crate) fn column_union<'a>(rows: &[Row<'a>]) -> Vec<&'a str> {
    let mut columns: Vec<&str> = Vec::new();
    for column in rows.iter().flat_map(BTreeMap::keys) {
        if !columns.contains(column) {
            columns.push(*column);
        }
    }
    columns
}

fn row_from_object(object: &Map<String, Value>) -> Row<'_> {
    object
        .iter()
        .map(|(key, value)| (key.as_str(), value))
        .collect()
}

fn is_columnar(columns: &Map<String, Value>) -> bool {
    !columns.is_empty()
        && columns
            .values()
            .all(|column| matches!(column, Value::Array(_) | Value::Object(_)))
}

/// Zip columns into rows, ordered by the first appearance of each row key.
fn rows_from_columns(columns: &Map<String, Value>) -> Vec<Row<'_>> {
    let mut table = RowTable::default();
    for (name, column) in columns {
        match column {
            Value::Array(cells) => {
                for (position, cell) in cells.iter().enumerate() {
                    table.insert(RowKey::Position(position), name, cell);
                }
            }
            Value::Object(cells) => {
                for (index, cell) in cells {
                    table.insert(RowKey::parse(index), name, cell);
                }
            }
            _ => {}
        }
    }
    table.rows
}

/// Rows under construction, keyed by row identity.
#[derive(Default)]
struct RowTable<'a> {
    slots: HashMap<RowKey<'a>, usize>,
    rows: Vec<Row<'a>>,
}

impl<'a> RowTable<'a> {
    fn insert(&mut self, key: RowKey<'a>, column: &'a str, cell: &'a Value) {
        let next = self.rows.len();
        let slot = *self.slots.entry(key).or_insert(next);
        if slot == next {
            self.rows.push(Row::new());
        }
        if let Some(row) = self.rows.get_mut(slot) {
            row.insert(column, cell);
        }
    }
}

/// Row identity in a columnar layout.
///
/// Only canonical decimal labels (`"7"`, not `"07"` or `"+7"`) address the
/// same row as array position 7; any other label is its own row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RowKey<'a> {
    Position(usize),
    Label(&'a str),
}

impl<'a> RowKey<'a> {
    fn parse(index: &'a str) -> Self {
        match index.parse::<usize>() {
            Ok(position) if position.to_string() == index => Self::Position(position),
            _ => Self::Label(index),
        }
    }
}
