// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical entities handed to the receiving document.

use nalgebra::{Point3, Vector3};

use crate::mesh::Mesh;
use crate::nurbs::{NurbsCurve, NurbsSurface};

/// One converted entity, ready for the document sink. Constructed once,
/// read-only afterwards, owned by the import result until handed over.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertedGeometry {
    Line {
        from: Point3<f64>,
        to: Point3<f64>,
    },
    Polyline(Vec<Point3<f64>>),
    /// Circular arc; angles in radians, end = start + sweep.
    Arc {
        center: Point3<f64>,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Curve(NurbsCurve),
    Surface(NurbsSurface),
    /// Aggregate of independent face surfaces from one B-rep solid.
    Compound(Vec<NurbsSurface>),
    Mesh(Mesh),
    /// Canonical cylinder recovered from a circular-profile linear sweep.
    Cylinder {
        base: Point3<f64>,
        axis: Vector3<f64>,
        radius: f64,
        height: f64,
    },
}

impl ConvertedGeometry {
    /// Stable name of the output kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConvertedGeometry::Line { .. } => "Line",
            ConvertedGeometry::Polyline(_) => "Polyline",
            ConvertedGeometry::Arc { .. } => "Arc",
            ConvertedGeometry::Curve(_) => "Curve",
            ConvertedGeometry::Surface(_) => "Surface",
            ConvertedGeometry::Compound(_) => "Compound",
            ConvertedGeometry::Mesh(_) => "Mesh",
            ConvertedGeometry::Cylinder { .. } => "Cylinder",
        }
    }
}
