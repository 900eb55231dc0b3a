// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Knot-vector compression and periodicity inference.
//!
//! The container stores knots flat: one entry per repetition. The receiving
//! kernel wants the compressed pairing of unique values and multiplicities,
//! with the first and last multiplicity raised by one (clamped-end
//! convention). Periodicity falls out of the raw end multiplicity and is
//! decided here, once, for every builder.

use crate::error::{Error, Result};

/// A compressed knot vector: strictly increasing unique values paired with
/// boundary-adjusted multiplicities, plus the inferred periodicity.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector {
    unique_knots: Vec<f64>,
    multiplicities: Vec<u32>,
    degree: u32,
    periodic: bool,
}

impl KnotVector {
    /// Compress a flat non-decreasing knot sequence.
    ///
    /// `flat.len()` must equal `control_count + degree + 1`. The adjusted
    /// multiplicities carry +1 on each end; [`raw_multiplicities`] recovers
    /// the stored counts. A sequence spanning a single distinct value is
    /// rejected — the two end adjustments would collide on one slot and no
    /// basis interval survives.
    ///
    /// [`raw_multiplicities`]: KnotVector::raw_multiplicities
    pub fn from_flat(flat: &[f64], degree: u32, control_count: usize) -> Result<Self> {
        if degree == 0 {
            return Err(Error::MalformedKnotVector("degree must be at least 1".to_string()));
        }

        let expected = control_count + degree as usize + 1;
        if flat.len() != expected {
            return Err(Error::MalformedKnotVector(format!(
                "expected {} knots for {} control points of degree {}, got {}",
                expected,
                control_count,
                degree,
                flat.len()
            )));
        }

        if flat.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(Error::MalformedKnotVector(
                "knot sequence is not non-decreasing".to_string(),
            ));
        }

        // Run-length encode. The input is sorted, so runs of equal values
        // are contiguous and this matches distinct-then-count semantics.
        let mut unique_knots: Vec<f64> = Vec::new();
        let mut multiplicities: Vec<u32> = Vec::new();
        for &knot in flat {
            if unique_knots.last().copied() == Some(knot) {
                let end = multiplicities.len() - 1;
                multiplicities[end] += 1;
            } else {
                unique_knots.push(knot);
                multiplicities.push(1);
            }
        }

        if unique_knots.len() < 2 {
            return Err(Error::MalformedKnotVector(
                "knot sequence spans a single distinct value".to_string(),
            ));
        }

        // A fully clamped vector repeats the first knot degree+1 times;
        // anything less means the parametrization wraps at the seam.
        let periodic = multiplicities[0] < degree + 1;

        multiplicities[0] += 1;
        let end = multiplicities.len() - 1;
        multiplicities[end] += 1;

        Ok(Self {
            unique_knots,
            multiplicities,
            degree,
            periodic,
        })
    }

    /// Strictly increasing unique knot values.
    #[inline]
    pub fn unique_knots(&self) -> &[f64] {
        &self.unique_knots
    }

    /// Boundary-adjusted multiplicities, parallel to [`unique_knots`].
    ///
    /// [`unique_knots`]: KnotVector::unique_knots
    #[inline]
    pub fn multiplicities(&self) -> &[u32] {
        &self.multiplicities
    }

    #[inline]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.periodic
    }

    /// Multiplicities as stored in the container, before the clamped-end
    /// adjustment. Expanding these reproduces the source flat sequence.
    pub fn raw_multiplicities(&self) -> Vec<u32> {
        let mut raw = self.multiplicities.clone();
        raw[0] -= 1;
        let end = raw.len() - 1;
        raw[end] -= 1;
        raw
    }

    /// Expand back to the flat form the container stored.
    pub fn expand_raw(&self) -> Vec<f64> {
        let raw = self.raw_multiplicities();
        let mut flat = Vec::with_capacity(raw.iter().map(|&m| m as usize).sum());
        for (&knot, &mult) in self.unique_knots.iter().zip(raw.iter()) {
            for _ in 0..mult {
                flat.push(knot);
            }
        }
        flat
    }
}
