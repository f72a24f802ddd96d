//! Raw spreadsheet cells and rows.

use serde::Serialize;
use serde_json::Value;

/// A single cell as returned by the submission store.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Shared empty cell for reads that fall outside a row.
    pub fn empty() -> &'static CellValue {
        &EMPTY_CELL
    }

    /// The string content when this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Display form of a cell that carries a value.
    ///
    /// Empty text, zero, `false` and empty cells count as absent.
    pub fn display_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) if !s.is_empty() => Some(s.clone()),
            CellValue::Number(n) if *n != 0.0 && n.is_finite() => Some(format_number(*n)),
            CellValue::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    /// True only for the literal text `Yes`.
    pub fn is_yes(&self) -> bool {
        self.as_text() == Some("Yes")
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or_default(),
            Value::String(s) => CellValue::Text(s),
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(CellValue::from)
    }
}

/// One row of the store, in column order.
///
/// Rows may be ragged: the store drops trailing empty cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SheetRow(Vec<CellValue>);

impl SheetRow {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self(cells)
    }

    /// Builds a row of text cells. Empty strings become empty cells.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            texts
                .into_iter()
                .map(|s| match s.as_ref() {
                    "" => CellValue::Empty,
                    text => CellValue::text(text),
                })
                .collect(),
        )
    }

    /// Cell at `index`, or an empty cell past the end of the row.
    pub fn get(&self, index: usize) -> &CellValue {
        self.0.get(index).unwrap_or(CellValue::empty())
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<CellValue>> for SheetRow {
    fn from(cells: Vec<CellValue>) -> Self {
        Self(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_mixed_json_cells() {
        let row: SheetRow = serde_json::from_value(json!(["Acme", 12345, true, null, ""])).unwrap();

        assert_eq!(row.get(0), &CellValue::text("Acme"));
        assert_eq!(row.get(1), &CellValue::Number(12345.0));
        assert_eq!(row.get(2), &CellValue::Bool(true));
        assert!(row.get(3).is_empty());
        assert_eq!(row.get(4), &CellValue::text(""));
    }

    #[test]
    fn get_past_end_is_empty() {
        let row = SheetRow::from_texts(["a"]);
        assert!(row.get(5).is_empty());
    }

    #[test]
    fn display_text_treats_falsy_values_as_absent() {
        assert_eq!(CellValue::text("").display_text(), None);
        assert_eq!(CellValue::Number(0.0).display_text(), None);
        assert_eq!(CellValue::Bool(false).display_text(), None);
        assert_eq!(CellValue::Empty.display_text(), None);
    }

    #[test]
    fn display_text_formats_numbers_without_trailing_fraction() {
        assert_eq!(CellValue::Number(12345.0).display_text().as_deref(), Some("12345"));
        assert_eq!(CellValue::Number(1.5).display_text().as_deref(), Some("1.5"));
    }

    #[test]
    fn is_yes_is_exact() {
        assert!(CellValue::text("Yes").is_yes());
        assert!(!CellValue::text("yes").is_yes());
        assert!(!CellValue::text("Yes ").is_yes());
        assert!(!CellValue::Bool(true).is_yes());
    }

    #[test]
    fn from_texts_maps_blank_to_empty() {
        let row = SheetRow::from_texts(["x", ""]);
        assert_eq!(row.len(), 2);
        assert!(row.get(1).is_empty());
    }
}
