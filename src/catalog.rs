//! Catalog loading.
//!
//! With `[catalog].path` unset, the built-in sample catalog is used.
//! Otherwise the JSON file is read and validated; any failure aborts the
//! command with the file path in the error chain.

use anyhow::{Context, Result};
use healthsathi_core::Catalog;

use crate::config::Config;

pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let catalog = match &config.catalog.path {
        None => {
            tracing::debug!("using built-in sample catalog");
            Catalog::sample()
        }
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
            let catalog = Catalog::from_json(&text)
                .with_context(|| format!("Invalid catalog file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded catalog");
            catalog
        }
    };

    for (collection, count) in catalog.counts() {
        tracing::debug!(collection, count, "catalog collection");
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn unset_path_gives_sample() {
        let catalog = load_catalog(&Config::minimal()).unwrap();
        assert_eq!(catalog, Catalog::sample());
    }

    #[test]
    fn reads_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"symptoms":[{"id":"a","name":"Fever","category":"General"}]}"#,
        )
        .unwrap();
        let mut config = Config::minimal();
        config.catalog.path = Some(path);
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.symptoms.len(), 1);
        assert!(catalog.doctors.is_empty());
    }

    #[test]
    fn invalid_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"symptoms":[{"id":"a","name":""}]}"#).unwrap();
        let mut config = Config::minimal();
        config.catalog.path = Some(path);
        let err = load_catalog(&config).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("broken.json"), "{}", chain);
        assert!(chain.contains("empty name"), "{}", chain);
    }
}
