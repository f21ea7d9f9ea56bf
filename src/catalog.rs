//! Loading the stock catalog that seeds the stock store at startup.
//!
//! The catalog is a JSON array of records:
//!
//! ```json
//! [{ "sku": 1002, "total_count": 120, "reserved": 10 }]
//! ```

use crate::model::Stock;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads and parses the catalog at `path`.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Stock>, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let stocks = parse_catalog(&raw)?;
    info!(path = %path.display(), records = stocks.len(), "Catalog loaded");
    Ok(stocks)
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Stock>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sku;

    #[test]
    fn test_parse_catalog() {
        let stocks = parse_catalog(
            r#"[{"sku": 1, "total_count": 5, "reserved": 0},
                {"sku": 773297411, "total_count": 150, "reserved": 5}]"#,
        )
        .unwrap();
        assert_eq!(stocks, vec![Stock::new(1, 5, 0), Stock::new(773297411, 150, 5)]);
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = parse_catalog(r#"[{"sku": 1, "total_count": 5}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_shipped_catalog_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/stock_data.json");
        let stocks = load_catalog(path).unwrap();
        assert!(stocks.iter().any(|s| s.sku == Sku(773297411)));
        assert!(stocks.iter().any(|s| s.sku == Sku(1002)));
        assert!(stocks.iter().all(|s| s.reserved <= s.total_count));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = load_catalog("does/not/exist.json").unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert_eq!(path, PathBuf::from("does/not/exist.json")),
            other => panic!("expected an io error, got {other:?}"),
        }
    }
}
