// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Source geometry variants in their flat NURBS form.
//!
//! Everything curve- or surface-shaped carries per-point weights and an
//! uncompressed knot sequence exactly as the container stores them. The
//! geometry crate turns these into canonical entities; nothing here is
//! interpreted beyond field access.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plain 3D point as stored in the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A homogeneous control point: 3 coordinates scaled by a rational weight.
///
/// The stored coordinates are weighted; dehomogenization divides them out.
/// Weight is expected > 0 for well-formed geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl WeightedPoint {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Unweighted control point, weight 1.
    #[inline]
    pub fn unweighted(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }
}

/// A rational curve in flat form: N control points, N weights folded into
/// the points, and a flat knot sequence of length N + degree + 1.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NurbsCurveData {
    pub degree: u32,
    pub control_points: Vec<WeightedPoint>,
    pub knots: Vec<f64>,
}

/// A rational tensor-product surface in flat form.
///
/// Control points are stored row-major over U: index `u * count_v + v`.
/// Each parametric direction carries its own flat knot sequence of length
/// `count + degree + 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NurbsSurfaceData {
    pub degree_u: u32,
    pub degree_v: u32,
    pub count_u: usize,
    pub count_v: usize,
    pub control_points: Vec<WeightedPoint>,
    pub knots_u: Vec<f64>,
    pub knots_v: Vec<f64>,
}

/// One face of a B-rep solid. The underlying surface has already been
/// brought to canonical parametric form by the reader; trimming loops are
/// not carried (untrimmed import).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrepFaceData {
    pub surface: NurbsSurfaceData,
}

/// A boundary-representation solid: an ordered set of faces.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrepData {
    pub faces: Vec<BrepFaceData>,
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineCurveData {
    pub from: Point3d,
    pub to: Point3d,
}

/// A circular arc: center, radius, the start point on the circle, and the
/// swept angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcCurveData {
    pub center: Point3d,
    pub radius: f64,
    pub point_at_start: Point3d,
    pub angle_degrees: f64,
}

/// An open or closed polyline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolylineCurveData {
    pub points: Vec<Point3d>,
}

/// One mesh face. The container always stores 4 vertex indices; a true
/// triangle repeats the third index in the fourth slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshFace {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl MeshFace {
    #[inline]
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c, d: c }
    }

    #[inline]
    pub fn quad(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// True when the fourth slot repeats the third.
    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.c == self.d
    }
}

/// An indexed triangle/quad mesh.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshData {
    pub vertices: Vec<Point3d>,
    pub faces: Vec<MeshFace>,
}

/// Cross-section profile of a swept extrusion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProfileData {
    Circle { radius: f64 },
    Arc { radius: f64, angle_degrees: f64 },
    Ellipse { radius_major: f64, radius_minor: f64 },
    Polyline { points: Vec<Point3d> },
}

impl ProfileData {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ProfileData::Circle { .. } => "Circle",
            ProfileData::Arc { .. } => "Arc",
            ProfileData::Ellipse { .. } => "Ellipse",
            ProfileData::Polyline { .. } => "Polyline",
        }
    }
}

/// A profile swept along a linear path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtrusionData {
    pub path_start: Point3d,
    pub path_end: Point3d,
    pub profile: ProfileData,
}

/// An unstructured point set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCloudData {
    pub points: Vec<Point3d>,
}

/// The closed union of geometry variants a model object can carry.
///
/// `Curve` is the general parametric-curve case: any curve the reader could
/// not classify more precisely, delivered in its flat NURBS form. Variants
/// that are specializations (a straight line, a pure NURBS curve) must be
/// dispatched ahead of it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    Brep(BrepData),
    LineCurve(LineCurveData),
    NurbsCurve(NurbsCurveData),
    ArcCurve(ArcCurveData),
    BezierCurve(NurbsCurveData),
    PolylineCurve(PolylineCurveData),
    PolyCurve(NurbsCurveData),
    Ellipse,
    Mesh(MeshData),
    NurbsSurface(NurbsSurfaceData),
    PointCloud(PointCloudData),
    Extrusion(ExtrusionData),
    /// General parametric curve, already in canonical NURBS form.
    Curve(NurbsCurveData),
    /// General parametric surface with no flat form available.
    Surface,
    Box,
    Circle,
    Cone,
    Cylinder,
    Bitmap,
    /// A geometry kind outside the recognized set.
    Unknown(String),
}

impl Geometry {
    /// Variant name as recorded in skip diagnostics.
    pub fn variant_name(&self) -> &str {
        match self {
            Geometry::Brep(_) => "Brep",
            Geometry::LineCurve(_) => "LineCurve",
            Geometry::NurbsCurve(_) => "NurbsCurve",
            Geometry::ArcCurve(_) => "ArcCurve",
            Geometry::BezierCurve(_) => "BezierCurve",
            Geometry::PolylineCurve(_) => "PolylineCurve",
            Geometry::PolyCurve(_) => "PolyCurve",
            Geometry::Ellipse => "Ellipse",
            Geometry::Mesh(_) => "Mesh",
            Geometry::NurbsSurface(_) => "NurbsSurface",
            Geometry::PointCloud(_) => "PointCloud",
            Geometry::Extrusion(_) => "Extrusion",
            Geometry::Curve(_) => "Curve",
            Geometry::Surface => "Surface",
            Geometry::Box => "Box",
            Geometry::Circle => "Circle",
            Geometry::Cone => "Cone",
            Geometry::Cylinder => "Cylinder",
            Geometry::Bitmap => "Bitmap",
            Geometry::Unknown(name) => name,
        }
    }
}
