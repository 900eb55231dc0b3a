// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! R3DM-Lite Geometry Reconstruction
//!
//! Turns the flat NURBS form of the source graph (per-point weights,
//! uncompressed knot sequences) into canonical entities: compressed
//! knot/multiplicity pairs, dehomogenized control points, explicit
//! periodicity flags. Uses nalgebra for the canonical point types.

pub mod error;
pub mod knots;
pub mod mesh;
pub mod nurbs;
pub mod output;
pub mod processors;
pub mod router;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use error::{Error, Result};
pub use knots::KnotVector;
pub use mesh::{Facet, Mesh};
pub use nurbs::{dehomogenize, NurbsCurve, NurbsSurface};
pub use output::ConvertedGeometry;
pub use router::{Conversion, GeometryProcessor, GeometryRouter, ImportOutcome, ImportResult};
