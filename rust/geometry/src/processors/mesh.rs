// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh processor - quad normalization and facet flattening.

use r3dm_lite_model::Geometry;

use crate::mesh::triangulate;
use crate::output::ConvertedGeometry;
use crate::router::{Conversion, GeometryProcessor};
use crate::Result;

/// Flattens indexed quad/triangle meshes into explicit triangular facets.
pub struct MeshProcessor;

impl MeshProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProcessor for MeshProcessor {
    fn supports(&self, geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::Mesh(_))
    }

    fn process(&self, geometry: &Geometry) -> Result<Conversion> {
        let Geometry::Mesh(data) = geometry else {
            unreachable!("router dispatched a non-mesh variant");
        };
        let mesh = triangulate(data)?;
        Ok(Conversion::Converted(ConvertedGeometry::Mesh(mesh)))
    }
}

impl Default for MeshProcessor {
    fn default() -> Self {
        Self::new()
    }
}
