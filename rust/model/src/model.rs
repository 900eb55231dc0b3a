// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The materialized object graph: objects, layers, groups.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// Per-object attributes the import pipeline reads.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectAttributes {
    /// User-assigned object name; empty when unnamed.
    pub name: String,
    /// Index into [`Model::layers`].
    pub layer_index: i32,
}

/// One object of the source model: a geometry variant plus attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelObject {
    pub geometry: Geometry,
    pub attributes: ObjectAttributes,
}

impl ModelObject {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            attributes: ObjectAttributes::default(),
        }
    }

    pub fn named(geometry: Geometry, name: &str, layer_index: i32) -> Self {
        Self {
            geometry,
            attributes: ObjectAttributes {
                name: name.to_string(),
                layer_index,
            },
        }
    }
}

/// A layer of the source model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layer {
    pub index: i32,
    pub name: String,
}

/// A named object group. Carried through from the reader; the pipeline
/// only reads layer membership today.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    pub name: String,
}

/// The whole source graph handed over by the reader. Immutable after
/// construction; the pipeline only traverses it.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Model {
    pub objects: Vec<ModelObject>,
    pub layers: Vec<Layer>,
    pub groups: Vec<Group>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a layer by its index attribute.
    pub fn layer(&self, index: i32) -> Option<&Layer> {
        self.layers.iter().find(|l| l.index == index)
    }
}
