// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The host document boundary.
//!
//! The receiving application implements these traits; the pipeline only
//! calls through them. Documents live in a store that is passed around
//! explicitly — there is no ambient "current document".

use r3dm_lite_geometry::{ConvertedGeometry, Mesh};

/// Handle to a feature created in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureId(pub usize);

/// What kind of feature a converted entity becomes on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Line,
    Arc,
    Polygon,
    Shape,
    Cylinder,
}

impl FeatureKind {
    /// Host feature kind for a converted entity. Meshes do not pass
    /// through here; they use the dedicated mesh channel.
    pub fn for_geometry(geometry: &ConvertedGeometry) -> Self {
        match geometry {
            ConvertedGeometry::Line { .. } => FeatureKind::Line,
            ConvertedGeometry::Arc { .. } => FeatureKind::Arc,
            ConvertedGeometry::Polyline(_) => FeatureKind::Polygon,
            ConvertedGeometry::Cylinder { .. } => FeatureKind::Cylinder,
            ConvertedGeometry::Curve(_)
            | ConvertedGeometry::Surface(_)
            | ConvertedGeometry::Compound(_)
            | ConvertedGeometry::Mesh(_) => FeatureKind::Shape,
        }
    }
}

/// One host document under construction.
pub trait Document {
    /// Add the container part that owns the imported features.
    fn add_part(&mut self, name: &str) -> FeatureId;

    /// Add one converted entity as a named feature.
    fn add_feature(&mut self, kind: FeatureKind, name: &str, geometry: ConvertedGeometry)
        -> FeatureId;

    /// Add a triangle mesh through the host's dedicated mesh channel.
    fn add_mesh_feature(&mut self, name: &str, mesh: Mesh) -> FeatureId;

    /// Group an existing feature under a named layer.
    fn group_into(&mut self, layer: &str, feature: FeatureId);
}

/// Owns document lifecycle for the entry points.
pub trait DocumentStore {
    type Document: Document;

    /// Create a fresh document under the given name.
    fn create(&mut self, name: &str) -> &mut Self::Document;

    /// Fetch an existing document, creating it when absent.
    fn get_or_create(&mut self, name: &str) -> &mut Self::Document;
}
