// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh normalization: quad splitting and facet denormalization.
//!
//! The receiving facet format has no vertex-sharing structure, so indexed
//! faces are flattened into explicit coordinate triples. Quads are split
//! before emission; the pipeline never emits a quad facet.

use nalgebra::Point3;
use r3dm_lite_model::MeshData;
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// One triangular facet with explicit vertex coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub vertices: [Point3<f64>; 3],
}

impl Facet {
    #[inline]
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { vertices: [a, b, c] }
    }
}

/// A triangle mesh in the denormalized target form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    facets: Vec<Facet>,
}

impl Mesh {
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    pub fn with_capacity(facet_count: usize) -> Self {
        Self {
            facets: Vec::with_capacity(facet_count),
        }
    }

    #[inline]
    pub fn add_facet(&mut self, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) {
        self.facets.push(Facet::new(a, b, c));
    }

    #[inline]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    #[inline]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}

/// Flatten an indexed quad/triangle mesh into explicit triangular facets.
///
/// Each source face carries 4 indices; a repeated fourth index marks a true
/// triangle. Quads split along the a-c diagonal into exactly 2 triangles.
/// An index past the vertex list fails the whole mesh object.
pub fn triangulate(data: &MeshData) -> Result<Mesh> {
    let vertex = |index: u32| -> Result<Point3<f64>> {
        data.vertices
            .get(index as usize)
            .map(|p| Point3::new(p.x, p.y, p.z))
            .ok_or(Error::FaceIndexOutOfBounds {
                index,
                vertex_count: data.vertices.len(),
            })
    };

    let mut mesh = Mesh::with_capacity(data.faces.len());
    for face in &data.faces {
        let corners: SmallVec<[Point3<f64>; 4]> = if face.is_triangle() {
            SmallVec::from_iter([vertex(face.a)?, vertex(face.b)?, vertex(face.c)?])
        } else {
            SmallVec::from_iter([
                vertex(face.a)?,
                vertex(face.b)?,
                vertex(face.c)?,
                vertex(face.d)?,
            ])
        };

        mesh.add_facet(corners[0], corners[1], corners[2]);
        if corners.len() == 4 {
            mesh.add_facet(corners[0], corners[2], corners[3]);
        }
    }

    Ok(mesh)
}
