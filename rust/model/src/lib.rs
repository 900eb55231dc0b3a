// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # R3DM-Lite Model
//!
//! The in-memory object graph produced by an external `.3dm` reader and
//! consumed by the import pipeline. This crate defines only data: the
//! tagged geometry union in its flat NURBS form (per-point weights,
//! uncompressed knot sequences), object attributes, layers and groups,
//! plus the [`SourceReader`] trait the reader library implements.
//!
//! Reading the proprietary binary container itself is out of scope here;
//! a reader hands over an already-materialized [`Model`].
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for the object graph

pub mod error;
pub mod geometry;
pub mod model;
pub mod reader;

pub use error::{ReadError, Result};
pub use geometry::{
    ArcCurveData, BrepData, BrepFaceData, ExtrusionData, Geometry, LineCurveData, MeshData,
    MeshFace, NurbsCurveData, NurbsSurfaceData, Point3d, PointCloudData, PolylineCurveData,
    ProfileData, WeightedPoint,
};
pub use model::{Group, Layer, Model, ModelObject, ObjectAttributes};
pub use reader::SourceReader;
