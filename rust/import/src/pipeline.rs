// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model-to-document pipeline.
//!
//! Converts every source object through the geometry router, adds the
//! results as named features, and groups them into their layers. Skips
//! and per-object failures are recorded in the report and logged; neither
//! stops the run.

use log::{debug, info, warn};
use r3dm_lite_geometry::{
    ConvertedGeometry, Error as GeometryError, GeometryRouter, ImportOutcome,
};
use r3dm_lite_model::{Geometry, Model};
use rustc_hash::FxHashMap;

use crate::document::{Document, FeatureKind};

/// Pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Convert objects on the rayon pool instead of sequentially. The
    /// result order is identical either way.
    pub parallel: bool,
}

/// A recognized-but-unconverted object.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipRecord {
    pub index: usize,
    pub variant: String,
}

/// An object that failed to rebuild.
#[derive(Debug, Clone)]
pub struct FailureRecord {
    pub index: usize,
    pub error: GeometryError,
}

/// What one import run did, kept for later inspection.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub converted: usize,
    pub skipped: Vec<SkipRecord>,
    pub failed: Vec<FailureRecord>,
}

/// Default feature name for an unnamed object, by source variant. Matches
/// the names the host shows for each feature kind.
fn default_feature_name(geometry: &Geometry) -> &'static str {
    match geometry {
        Geometry::Brep(_) => "Faces",
        Geometry::LineCurve(_) => "Line",
        Geometry::ArcCurve(_) => "Arc",
        Geometry::BezierCurve(_) => "Bezier",
        Geometry::PolylineCurve(_) => "Polyline",
        Geometry::PolyCurve(_) => "PolyCurve",
        Geometry::Mesh(_) => "Mesh",
        Geometry::NurbsSurface(_) => "NurbsSurface",
        Geometry::Extrusion(_) => "Extruded Cylinder",
        Geometry::NurbsCurve(_) | Geometry::Curve(_) => "NurbsCurve",
        _ => "Geometry",
    }
}

/// Run the pipeline with default options.
pub fn process_model<D: Document>(document: &mut D, model: &Model) -> ImportReport {
    process_model_with(document, model, &ImportOptions::default())
}

/// Run the pipeline.
pub fn process_model_with<D: Document>(
    document: &mut D,
    model: &Model,
    options: &ImportOptions,
) -> ImportReport {
    info!("importing 3dm model: {} objects", model.objects.len());

    document.add_part("Part");

    let router = GeometryRouter::new();
    let outcomes = if options.parallel {
        router.convert_objects_parallel(&model.objects)
    } else {
        router.convert_objects(&model.objects)
    };

    let layer_names: FxHashMap<i32, &str> = model
        .layers
        .iter()
        .map(|layer| (layer.index, layer.name.as_str()))
        .collect();

    let mut report = ImportReport::default();
    for outcome in outcomes {
        match outcome {
            ImportOutcome::Converted { index, geometry } => {
                let object = &model.objects[index];
                let name = if object.attributes.name.is_empty() {
                    default_feature_name(&object.geometry)
                } else {
                    object.attributes.name.as_str()
                };

                let feature = match geometry {
                    ConvertedGeometry::Mesh(mesh) => document.add_mesh_feature(name, mesh),
                    geometry => {
                        let kind = FeatureKind::for_geometry(&geometry);
                        document.add_feature(kind, name, geometry)
                    }
                };

                match layer_names.get(&object.attributes.layer_index) {
                    Some(layer) => document.group_into(layer, feature),
                    None => debug!(
                        "object {index}: layer index {} not in layer table, leaving ungrouped",
                        object.attributes.layer_index
                    ),
                }

                report.converted += 1;
            }
            ImportOutcome::Skipped { index, variant } => {
                debug!("object {index}: skipped {variant}");
                report.skipped.push(SkipRecord { index, variant });
            }
            ImportOutcome::Failed { index, error } => {
                warn!("object {index}: {error}");
                report.failed.push(FailureRecord { index, error });
            }
        }
    }

    info!(
        "3dm import done: {} converted, {} skipped, {} failed",
        report.converted,
        report.skipped.len(),
        report.failed.len()
    );
    report
}
