// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry Processors
//!
//! Each sub-module rebuilds one category of source variants:
//!
//! - `curve`: line, arc, polyline, NURBS-form curves, generic curve fallback
//! - `surface`: standalone NURBS surfaces
//! - `brep`: B-rep solids (per-face surface assembly into a compound)
//! - `mesh`: indexed quad/triangle meshes
//! - `extrusion`: circular-profile linear sweeps (canonical cylinders)

mod brep;
mod curve;
mod extrusion;
mod mesh;
mod surface;

#[cfg(test)]
mod tests;

// Re-export all processor types
pub use brep::BrepProcessor;
pub use curve::{
    ArcCurveProcessor, GenericCurveProcessor, LineCurveProcessor, NurbsCurveProcessor,
    PolylineCurveProcessor,
};
pub use extrusion::ExtrusionProcessor;
pub use mesh::MeshProcessor;
pub use surface::NurbsSurfaceProcessor;
