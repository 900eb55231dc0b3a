// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical NURBS entities and their builders.
//!
//! The builders consume the flat source payloads: dehomogenize every
//! control point, compress each knot direction, and assemble an entity that
//! is parametrically equivalent to the source definition. A zero weight
//! anywhere aborts the object being built — never the batch.

use nalgebra::Point3;
use r3dm_lite_model::{NurbsCurveData, NurbsSurfaceData, WeightedPoint};

use crate::error::{Error, Result};
use crate::knots::KnotVector;

/// Split a homogeneous control point into a Euclidean point and its weight.
///
/// `index` identifies the point inside its object for the diagnostic. A
/// zero weight yields [`Error::DegenerateWeight`] with no partial result.
#[inline]
pub fn dehomogenize(point: &WeightedPoint, index: usize) -> Result<(Point3<f64>, f64)> {
    if point.w == 0.0 {
        return Err(Error::DegenerateWeight { index });
    }
    Ok((
        Point3::new(point.x / point.w, point.y / point.w, point.z / point.w),
        point.w,
    ))
}

/// A rational curve in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsCurve {
    control_points: Vec<Point3<f64>>,
    weights: Vec<f64>,
    knots: KnotVector,
    degree: u32,
}

impl NurbsCurve {
    /// Build from the flat source payload.
    pub fn from_flat(data: &NurbsCurveData) -> Result<Self> {
        if data.control_points.is_empty() {
            return Err(Error::EmptyGeometry("curve has no control points".to_string()));
        }

        let mut control_points = Vec::with_capacity(data.control_points.len());
        let mut weights = Vec::with_capacity(data.control_points.len());
        for (index, point) in data.control_points.iter().enumerate() {
            let (p, w) = dehomogenize(point, index)?;
            control_points.push(p);
            weights.push(w);
        }

        let knots = KnotVector::from_flat(&data.knots, data.degree, control_points.len())?;

        Ok(Self {
            control_points,
            weights,
            knots,
            degree: data.degree,
        })
    }

    #[inline]
    pub fn control_points(&self) -> &[Point3<f64>] {
        &self.control_points
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[inline]
    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    #[inline]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Seam-continuity flag: a periodic curve wraps with C(degree-1)
    /// continuity at the parametric boundary. Derived from the knot vector;
    /// there is no separate caller-supplied flag.
    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.knots.is_periodic()
    }
}

/// A rational tensor-product surface in canonical form.
///
/// The control net is indexed `[u][v]`: the outer vector has `count_u`
/// rows, every row has `count_v` entries, and the weight grid is parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsSurface {
    control_points: Vec<Vec<Point3<f64>>>,
    weights: Vec<Vec<f64>>,
    knots_u: KnotVector,
    knots_v: KnotVector,
    degree_u: u32,
    degree_v: u32,
}

impl NurbsSurface {
    /// Build from the flat source payload.
    ///
    /// Any degenerate weight anywhere in the grid aborts the whole surface;
    /// the two parametric directions compress independently, each with its
    /// own periodicity.
    pub fn from_flat(data: &NurbsSurfaceData) -> Result<Self> {
        if data.count_u == 0 || data.count_v == 0 {
            return Err(Error::EmptyGeometry("surface has an empty control grid".to_string()));
        }
        let expected = data.count_u * data.count_v;
        if data.control_points.len() != expected {
            return Err(Error::ControlGridMismatch {
                expected,
                actual: data.control_points.len(),
            });
        }

        let mut control_points = Vec::with_capacity(data.count_u);
        let mut weights = Vec::with_capacity(data.count_u);
        for u in 0..data.count_u {
            let mut row = Vec::with_capacity(data.count_v);
            let mut weight_row = Vec::with_capacity(data.count_v);
            for v in 0..data.count_v {
                let index = u * data.count_v + v;
                let (p, w) = dehomogenize(&data.control_points[index], index)?;
                row.push(p);
                weight_row.push(w);
            }
            control_points.push(row);
            weights.push(weight_row);
        }

        let knots_u = KnotVector::from_flat(&data.knots_u, data.degree_u, data.count_u)?;
        let knots_v = KnotVector::from_flat(&data.knots_v, data.degree_v, data.count_v)?;

        Ok(Self {
            control_points,
            weights,
            knots_u,
            knots_v,
            degree_u: data.degree_u,
            degree_v: data.degree_v,
        })
    }

    #[inline]
    pub fn control_points(&self) -> &[Vec<Point3<f64>>] {
        &self.control_points
    }

    #[inline]
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    #[inline]
    pub fn count_u(&self) -> usize {
        self.control_points.len()
    }

    #[inline]
    pub fn count_v(&self) -> usize {
        self.control_points.first().map_or(0, |row| row.len())
    }

    #[inline]
    pub fn knots_u(&self) -> &KnotVector {
        &self.knots_u
    }

    #[inline]
    pub fn knots_v(&self) -> &KnotVector {
        &self.knots_v
    }

    #[inline]
    pub fn degree_u(&self) -> u32 {
        self.degree_u
    }

    #[inline]
    pub fn degree_v(&self) -> u32 {
        self.degree_v
    }

    #[inline]
    pub fn is_periodic_u(&self) -> bool {
        self.knots_u.is_periodic()
    }

    #[inline]
    pub fn is_periodic_v(&self) -> bool {
        self.knots_v.is_periodic()
    }
}
