// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! R3DM-Lite Import
//!
//! Drives the geometry codec against a host document: converts every
//! source object, names and adds the resulting features, and groups them
//! into their layers. The host side is a pair of traits ([`Document`],
//! [`DocumentStore`]); no process-wide document state exists — the store
//! handle is threaded through every entry point explicitly.
//!
//! File-level entry points mirror the host's open/insert hooks and act
//! only on `.3dm` paths (case-insensitive); anything else is a no-op.

pub mod document;
pub mod error;
pub mod pipeline;

use std::path::Path;

use log::info;
use r3dm_lite_model::SourceReader;

pub use document::{Document, DocumentStore, FeatureId, FeatureKind};
pub use error::{Error, Result};
pub use pipeline::{process_model, process_model_with, FailureRecord, ImportOptions, ImportReport, SkipRecord};

/// True when the path carries the `.3dm` extension, case-insensitive.
fn is_3dm(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("3dm"))
}

/// Document name derived from the file stem, as the host names new
/// documents after opened files.
fn document_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("3dm import")
        .to_string()
}

/// Open a file into a fresh document.
///
/// Returns the report and the created document's name, or `None` when the
/// extension is not `.3dm`. Reader failure is fatal: no document is
/// created and no partial result exists.
pub fn open<R, S>(reader: &R, store: &mut S, path: &Path) -> Result<Option<(String, ImportReport)>>
where
    R: SourceReader,
    S: DocumentStore,
{
    if !is_3dm(path) {
        return Ok(None);
    }

    let model = reader.read(path)?;
    let name = document_name(path);
    info!("importing {} into new document {name}", path.display());

    let document = store.create(&name);
    let report = process_model(document, &model);
    Ok(Some((name, report)))
}

/// Insert a file into an existing document, creating it when the name is
/// not present yet. Returns `None` for non-`.3dm` paths.
pub fn insert<R, S>(
    reader: &R,
    store: &mut S,
    path: &Path,
    document_name: &str,
) -> Result<Option<ImportReport>>
where
    R: SourceReader,
    S: DocumentStore,
{
    if !is_3dm(path) {
        return Ok(None);
    }

    let model = reader.read(path)?;
    info!("inserting {} into document {document_name}", path.display());

    let document = store.get_or_create(document_name);
    Ok(Some(process_model(document, &model)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_gate() {
        assert!(is_3dm(Path::new("model.3dm")));
        assert!(is_3dm(Path::new("MODEL.3DM")));
        assert!(is_3dm(Path::new("dir.v2/model.3Dm")));
        assert!(!is_3dm(Path::new("model.step")));
        assert!(!is_3dm(Path::new("model3dm")));
        assert!(!is_3dm(Path::new("model")));
    }

    #[test]
    fn test_document_name_from_stem() {
        assert_eq!(document_name(Path::new("/tmp/widget.3dm")), "widget");
    }
}
