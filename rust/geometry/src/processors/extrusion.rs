// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion processor - circular-profile sweeps become cylinders.

use log::warn;
use nalgebra::{Point3, Vector3};
use r3dm_lite_model::{Geometry, ProfileData};

use crate::output::ConvertedGeometry;
use crate::router::{Conversion, GeometryProcessor};
use crate::Result;

/// Recovers a canonical cylinder from a linear sweep of a circular
/// profile. Any other profile is a deliberate skip carrying the profile
/// kind, recorded for later inspection.
pub struct ExtrusionProcessor;

impl ExtrusionProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProcessor for ExtrusionProcessor {
    fn supports(&self, geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::Extrusion(_))
    }

    fn process(&self, geometry: &Geometry) -> Result<Conversion> {
        let Geometry::Extrusion(extrusion) = geometry else {
            unreachable!("router dispatched a non-extrusion variant");
        };

        let ProfileData::Circle { radius } = extrusion.profile else {
            warn!(
                "extrusion not yet handled: {} profile",
                extrusion.profile.kind_name()
            );
            return Ok(Conversion::Skipped(format!(
                "Extrusion({})",
                extrusion.profile.kind_name()
            )));
        };

        let start = &extrusion.path_start;
        let end = &extrusion.path_end;
        let height = (start.z - end.z).abs();

        // Base sits at the lower path end, axis follows the path upward
        let (base, tip) = if start.z <= end.z { (start, end) } else { (end, start) };
        let direction = Vector3::new(tip.x - base.x, tip.y - base.y, tip.z - base.z);
        let axis = if direction.norm() == 0.0 {
            Vector3::z()
        } else {
            direction.normalize()
        };

        Ok(Conversion::Converted(ConvertedGeometry::Cylinder {
            base: Point3::new(base.x, base.y, base.z),
            axis,
            radius,
            height,
        }))
    }
}

impl Default for ExtrusionProcessor {
    fn default() -> Self {
        Self::new()
    }
}
