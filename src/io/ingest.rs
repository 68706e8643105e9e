//! JSON ingest for item lists.
//!
//! Files hold a JSON array of objects (`[{"title": "...", "rating": 4.5}]` or
//! `[{"name": "...", "price": 9.99}]`). The path `-` reads standard input.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{PricedItem, RatedItem};
use crate::error::AppError;

/// Read rated items from `path` (or stdin for `-`).
pub fn read_rated_items(path: &Path) -> Result<Vec<RatedItem>, AppError> {
    read_json_list(path)
}

/// Read priced items from `path` (or stdin for `-`).
pub fn read_priced_items(path: &Path) -> Result<Vec<PricedItem>, AppError> {
    read_json_list(path)
}

fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let items: Vec<T> = if path == Path::new("-") {
        parse_json_list(std::io::stdin().lock(), "<stdin>")?
    } else {
        let file = File::open(path)
            .map_err(|e| AppError::new(2, format!("Failed to open '{}': {e}", path.display())))?;
        parse_json_list(BufReader::new(file), &path.display().to_string())?
    };
    debug!(source = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

fn parse_json_list<T: DeserializeOwned>(reader: impl Read, source: &str) -> Result<Vec<T>, AppError> {
    serde_json::from_reader(reader).map_err(|e| AppError::new(2, format!("Invalid JSON in {source}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_rated_items() {
        let file = write_temp(r#"[{"title":"a","rating":5},{"title":"b","rating":3.5}]"#);
        let items = read_rated_items(file.path()).unwrap();
        assert_eq!(items, vec![RatedItem::new("a", 5.0), RatedItem::new("b", 3.5)]);
    }

    #[test]
    fn reads_priced_items() {
        let file = write_temp(r#"[{"name":"lamp","price":12.5}]"#);
        let items = read_priced_items(file.path()).unwrap();
        assert_eq!(items, vec![PricedItem::new("lamp", 12.5)]);
    }

    #[test]
    fn empty_array_is_fine() {
        let file = write_temp("[]");
        assert!(read_priced_items(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_field_is_an_input_error() {
        let file = write_temp(r#"[{"name":"lamp"}]"#);
        let err = read_priced_items(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rated_items(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Failed to open"));
    }
}
