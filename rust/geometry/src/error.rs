// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rebuilding one object.
///
/// Every variant is object-local: the conversion loop records it as a
/// diagnostic for the failing object and moves on. Nothing here aborts a
/// batch.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("degenerate control point weight at index {index}")]
    DegenerateWeight { index: usize },

    #[error("malformed knot vector: {0}")]
    MalformedKnotVector(String),

    #[error("control grid holds {actual} points, expected {expected}")]
    ControlGridMismatch { expected: usize, actual: usize },

    #[error("mesh face references vertex {index} but only {vertex_count} exist")]
    FaceIndexOutOfBounds { index: u32, vertex_count: usize },

    #[error("empty geometry: {0}")]
    EmptyGeometry(String),
}
