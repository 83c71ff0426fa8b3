//! Manifest loader.

use super::ManifestRecord;
use crate::bundler::{Error, ErrorExt, Result};
use serde_json::Value;
use std::path::Path;

/// Reads and parses the YAML manifest at `path`.
///
/// The file is read once. A malformed document fails the run with the parser
/// diagnostic; there is no partial or empty fallback record.
///
/// # Errors
///
/// - [`Error::Fs`] if the file cannot be read
/// - [`Error::ManifestParse`] if the YAML is malformed
/// - [`Error::InvalidManifest`] if the document is not a mapping or holds
///   keys that have no JSON representation
pub async fn load_manifest(path: &Path) -> Result<ManifestRecord> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading manifest", path)?;

    let parse_error = |source| Error::ManifestParse {
        path: path.to_path_buf(),
        source,
    };
    let mut document: serde_yaml::Value = serde_yaml::from_str(&contents).map_err(parse_error)?;
    // `<<: *anchor` stays a literal key until merged.
    document.apply_merge().map_err(parse_error)?;

    if !document.is_mapping() {
        return Err(Error::InvalidManifest {
            path: path.to_path_buf(),
            reason: "top-level document must be a mapping".into(),
        });
    }

    let record = match serde_json::to_value(&document) {
        Ok(Value::Object(map)) => ManifestRecord::new(map),
        Ok(_) => {
            return Err(Error::InvalidManifest {
                path: path.to_path_buf(),
                reason: "top-level document must be a mapping".into(),
            });
        }
        Err(e) => {
            return Err(Error::InvalidManifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    log::debug!("done reading {}", path.display());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn load_str(yaml: &str) -> Result<ManifestRecord> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.yaml");
        std::fs::write(&path, yaml).unwrap();
        load_manifest(&path).await
    }

    #[tokio::test]
    async fn preserves_key_order() {
        let manifest = load_str(
            "zeta: 1\nalpha:\n  inner_b: x\n  inner_a: y\nCESA_list:\n  - CESA: CESA-2020:0001\n",
        )
        .await
        .unwrap();

        let keys: Vec<_> = manifest.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "CESA_list"]);

        let inner: Vec<_> = manifest.get("alpha").unwrap().as_object().unwrap().keys().collect();
        assert_eq!(inner, ["inner_b", "inner_a"]);
    }

    #[tokio::test]
    async fn merge_keys_are_resolved() {
        let manifest = load_str("base: &b {arch: x86_64}\nrelease: {<<: *b, version: 7.7}\n")
            .await
            .unwrap();

        assert_eq!(
            manifest.get("release"),
            Some(&serde_json::json!({"arch": "x86_64", "version": 7.7}))
        );
        let keys: Vec<_> = manifest.get("release").unwrap().as_object().unwrap().keys().collect();
        assert!(!keys.iter().any(|k| *k == "<<"));
    }

    #[tokio::test]
    async fn merged_fix_entry_yields_its_identifier() {
        let manifest = load_str(
            "shared: &fix\n  CESA: CESA-2020:0001\n  severity: Important\n\
             CESA_list:\n  - <<: *fix\n    packages: [kernel]\n  - CESA: CESA-2020:0002\n",
        )
        .await
        .unwrap();

        assert_eq!(
            manifest.fix_ids("CESA_list", "CESA").unwrap(),
            ["CESA-2020:0001", "CESA-2020:0002"]
        );
    }

    #[tokio::test]
    async fn scalars_resolve_as_yaml_1_2() {
        let manifest = load_str("enabled: yes\nmode: 0755\nflag: true\n").await.unwrap();

        assert_eq!(manifest.get("enabled").and_then(Value::as_str), Some("yes"));
        assert_ne!(manifest.get("mode"), Some(&serde_json::json!(493)));
        assert_eq!(manifest.get("flag").and_then(Value::as_bool), Some(true));
    }

    #[tokio::test]
    async fn malformed_yaml_surfaces_parse_error() {
        let err = load_str("CESA_list: [unterminated\n").await.unwrap_err();
        assert!(matches!(err, Error::ManifestParse { .. }));
    }

    #[tokio::test]
    async fn scalar_document_is_rejected() {
        let err = load_str("just a string\n").await.unwrap_err();
        assert!(matches!(err, Error::InvalidManifest { .. }));
    }

    #[tokio::test]
    async fn empty_document_is_rejected() {
        let err = load_str("").await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidManifest { .. } | Error::ManifestParse { .. }
        ));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manifest(&dir.path().join("absent.yaml"))
            .await
            .unwrap_err();
        match err {
            Error::Fs { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }
}
