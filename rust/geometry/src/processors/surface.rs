// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Standalone NURBS surface processor.

use r3dm_lite_model::Geometry;

use crate::nurbs::NurbsSurface;
use crate::output::ConvertedGeometry;
use crate::router::{Conversion, GeometryProcessor};
use crate::Result;

/// Rebuilds a standalone tensor-product surface. The bare generic
/// `Surface` variant carries no flat form and stays unclaimed (skip).
pub struct NurbsSurfaceProcessor;

impl NurbsSurfaceProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProcessor for NurbsSurfaceProcessor {
    fn supports(&self, geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::NurbsSurface(_))
    }

    fn process(&self, geometry: &Geometry) -> Result<Conversion> {
        let Geometry::NurbsSurface(data) = geometry else {
            unreachable!("router dispatched a non-surface variant");
        };
        let surface = NurbsSurface::from_flat(data)?;
        Ok(Conversion::Converted(ConvertedGeometry::Surface(surface)))
    }
}

impl Default for NurbsSurfaceProcessor {
    fn default() -> Self {
        Self::new()
    }
}
