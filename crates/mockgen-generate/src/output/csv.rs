use crate::errors::GenerationError;
use crate::generators::{GeneratedRecord, GeneratedValue};

/// One flattened record: dotted column keys to cell text, in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRow {
    cells: Vec<(String, String)>,
}

impl FlatRow {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, cell)| cell.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn push(&mut self, key: String, cell: String) -> Result<(), GenerationError> {
        if self.get(&key).is_some() {
            return Err(GenerationError::DuplicateColumn(key));
        }
        self.cells.push((key, cell));
        Ok(())
    }
}

/// Flatten a record into dotted keys.
///
/// Non-empty objects recurse; empty objects become `{}`; arrays stay in a
/// single cell. Two paths that land on the same dotted key (a field named
/// `a.b` next to object `a` with field `b`) fail with `DuplicateColumn`.
pub fn flatten(record: &GeneratedRecord, prefix: &str) -> Result<FlatRow, GenerationError> {
    let mut row = FlatRow::default();
    flatten_into(&mut row, record, prefix)?;
    Ok(row)
}

fn flatten_into(
    row: &mut FlatRow,
    record: &GeneratedRecord,
    prefix: &str,
) -> Result<(), GenerationError> {
    for (key, value) in record.iter() {
        let full_key = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            GeneratedValue::Object(nested) if !nested.is_empty() => {
                flatten_into(row, nested, &full_key)?
            }
            GeneratedValue::Object(_) => row.push(full_key, "{}".to_string())?,
            other => row.push(full_key, other.to_csv())?,
        }
    }
    Ok(())
}

/// Render records as CSV with a header row.
///
/// Columns are the union of flattened keys in first-seen order; a row missing
/// a column gets an empty cell.
pub fn records_to_csv(records: &[GeneratedRecord]) -> Result<String, GenerationError> {
    let rows = records
        .iter()
        .map(|record| flatten(record, ""))
        .collect::<Result<Vec<_>, _>>()?;

    let mut columns: Vec<&str> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !columns.contains(&key) {
                columns.push(key);
            }
        }
    }
    // Records with no fields at all (every optional dropped) have no header
    // to write, so they render as empty output rather than blank lines.
    if columns.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(&columns)?;
    for row in &rows {
        writer.write_record(columns.iter().map(|column| row.get(column).unwrap_or_default()))?;
    }
    writer.flush().map_err(csv::Error::from)?;

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
