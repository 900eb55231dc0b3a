// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! B-rep processor - per-face surface assembly.
//!
//! Walks the solid's faces, rebuilds each face's surface, and collects the
//! results into one compound. Trimming loops are not carried: every face
//! comes out as its full untrimmed surface.

use log::warn;
use r3dm_lite_model::Geometry;

use crate::error::Error;
use crate::nurbs::NurbsSurface;
use crate::output::ConvertedGeometry;
use crate::router::{Conversion, GeometryProcessor};
use crate::Result;

/// Assembles a compound of face surfaces from a B-rep solid.
///
/// A face that fails to rebuild (degenerate weight, malformed knots) is
/// dropped from the compound without aborting the solid; only a solid
/// whose faces all fail is reported as a failure itself.
pub struct BrepProcessor;

impl BrepProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProcessor for BrepProcessor {
    fn supports(&self, geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::Brep(_))
    }

    fn process(&self, geometry: &Geometry) -> Result<Conversion> {
        let Geometry::Brep(brep) = geometry else {
            unreachable!("router dispatched a non-brep variant");
        };

        if brep.faces.is_empty() {
            return Err(Error::EmptyGeometry("brep has no faces".to_string()));
        }

        let mut surfaces = Vec::with_capacity(brep.faces.len());
        let mut first_error: Option<Error> = None;
        for (face_index, face) in brep.faces.iter().enumerate() {
            match NurbsSurface::from_flat(&face.surface) {
                Ok(surface) => surfaces.push(surface),
                Err(error) => {
                    warn!("dropping brep face {face_index}: {error}");
                    first_error.get_or_insert(error);
                }
            }
        }

        if surfaces.is_empty() {
            // All faces failed; surface the first cause
            return Err(first_error.unwrap_or_else(|| {
                Error::EmptyGeometry("brep produced no faces".to_string())
            }));
        }

        Ok(Conversion::Converted(ConvertedGeometry::Compound(surfaces)))
    }
}

impl Default for BrepProcessor {
    fn default() -> Self {
        Self::new()
    }
}
