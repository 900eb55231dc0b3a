// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curve processors.
//!
//! The specialized variants (line, arc, polyline) convert without touching
//! the NURBS machinery. Everything NURBS-shaped — including the general
//! curve fallback — goes through the curve builder. Dispatch order between
//! them is owned by the router.

use nalgebra::Point3;
use r3dm_lite_model::{Geometry, Point3d};

use crate::error::{Error, Result};
use crate::nurbs::NurbsCurve;
use crate::output::ConvertedGeometry;
use crate::router::{Conversion, GeometryProcessor};

#[inline]
fn to_point(p: &Point3d) -> Point3<f64> {
    Point3::new(p.x, p.y, p.z)
}

/// Straight line segments. Registered ahead of every NURBS-capable curve
/// processor.
pub struct LineCurveProcessor;

impl LineCurveProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProcessor for LineCurveProcessor {
    fn supports(&self, geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::LineCurve(_))
    }

    fn process(&self, geometry: &Geometry) -> Result<Conversion> {
        let Geometry::LineCurve(line) = geometry else {
            unreachable!("router dispatched a non-line variant");
        };
        Ok(Conversion::Converted(ConvertedGeometry::Line {
            from: to_point(&line.from),
            to: to_point(&line.to),
        }))
    }
}

impl Default for LineCurveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Circular arcs: placement from center and start point, sweep from the
/// stored angle.
pub struct ArcCurveProcessor;

impl ArcCurveProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProcessor for ArcCurveProcessor {
    fn supports(&self, geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::ArcCurve(_))
    }

    fn process(&self, geometry: &Geometry) -> Result<Conversion> {
        let Geometry::ArcCurve(arc) = geometry else {
            unreachable!("router dispatched a non-arc variant");
        };
        let start_angle = (arc.point_at_start.y - arc.center.y)
            .atan2(arc.point_at_start.x - arc.center.x);
        let end_angle = start_angle + arc.angle_degrees.to_radians();
        Ok(Conversion::Converted(ConvertedGeometry::Arc {
            center: to_point(&arc.center),
            radius: arc.radius,
            start_angle,
            end_angle,
        }))
    }
}

impl Default for ArcCurveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Polylines become explicit node lists; no knot machinery involved.
pub struct PolylineCurveProcessor;

impl PolylineCurveProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProcessor for PolylineCurveProcessor {
    fn supports(&self, geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::PolylineCurve(_))
    }

    fn process(&self, geometry: &Geometry) -> Result<Conversion> {
        let Geometry::PolylineCurve(polyline) = geometry else {
            unreachable!("router dispatched a non-polyline variant");
        };
        if polyline.points.len() < 2 {
            return Err(Error::EmptyGeometry(
                "polyline needs at least 2 points".to_string(),
            ));
        }
        Ok(Conversion::Converted(ConvertedGeometry::Polyline(
            polyline.points.iter().map(to_point).collect(),
        )))
    }
}

impl Default for PolylineCurveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure NURBS curves and the variants the reader already delivers in NURBS
/// form (Bezier spans, polycurve joins).
pub struct NurbsCurveProcessor;

impl NurbsCurveProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProcessor for NurbsCurveProcessor {
    fn supports(&self, geometry: &Geometry) -> bool {
        matches!(
            geometry,
            Geometry::NurbsCurve(_) | Geometry::BezierCurve(_) | Geometry::PolyCurve(_)
        )
    }

    fn process(&self, geometry: &Geometry) -> Result<Conversion> {
        let data = match geometry {
            Geometry::NurbsCurve(data)
            | Geometry::BezierCurve(data)
            | Geometry::PolyCurve(data) => data,
            _ => unreachable!("router dispatched a non-NURBS variant"),
        };
        let curve = NurbsCurve::from_flat(data)?;
        Ok(Conversion::Converted(ConvertedGeometry::Curve(curve)))
    }
}

impl Default for NurbsCurveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// General curve case. Always registered last among the curve processors
/// so every specialization gets claimed first.
pub struct GenericCurveProcessor;

impl GenericCurveProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProcessor for GenericCurveProcessor {
    fn supports(&self, geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::Curve(_))
    }

    fn process(&self, geometry: &Geometry) -> Result<Conversion> {
        let Geometry::Curve(data) = geometry else {
            unreachable!("router dispatched a non-curve variant");
        };
        let curve = NurbsCurve::from_flat(data)?;
        Ok(Conversion::Converted(ConvertedGeometry::Curve(curve)))
    }
}

impl Default for GenericCurveProcessor {
    fn default() -> Self {
        Self::new()
    }
}
