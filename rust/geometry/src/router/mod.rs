// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry Router - ordered dispatch to geometry processors
//!
//! Routes source geometry variants to the processor that rebuilds them.
//! The dispatch table is an ordered list, not a map: registration order is
//! specificity order, first match wins. A straight line or a pure NURBS
//! curve must be claimed before the general curve case gets a look — that
//! ordering is a correctness invariant of the conversion, not a tuning
//! knob.

#[cfg(test)]
mod tests;

use log::{debug, warn};
use r3dm_lite_model::{Geometry, ModelObject};
use rayon::prelude::*;

use crate::error::Error;
use crate::output::ConvertedGeometry;
use crate::processors::{
    ArcCurveProcessor, BrepProcessor, ExtrusionProcessor, GenericCurveProcessor,
    LineCurveProcessor, MeshProcessor, NurbsCurveProcessor, NurbsSurfaceProcessor,
    PolylineCurveProcessor,
};
use crate::Result;

/// What one processor produced for one object.
///
/// A skip is an expected, non-exceptional outcome: the variant was
/// recognized but has no conversion yet. It carries the variant's name (and
/// attributes, where the variant has interesting ones) for later
/// inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Converted(ConvertedGeometry),
    Skipped(String),
}

/// Geometry processor trait
/// Each processor rebuilds one family of source variants
pub trait GeometryProcessor: Send + Sync {
    /// True when this processor claims the variant. The router asks in
    /// registration order and stops at the first claim.
    fn supports(&self, geometry: &Geometry) -> bool;

    /// Rebuild the object, or report a deliberate skip. Errors are
    /// object-local and never abort the batch.
    fn process(&self, geometry: &Geometry) -> Result<Conversion>;
}

/// Outcome of converting one source object, keyed by its source index.
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    Converted {
        index: usize,
        geometry: ConvertedGeometry,
    },
    Skipped {
        index: usize,
        variant: String,
    },
    Failed {
        index: usize,
        error: Error,
    },
}

impl ImportOutcome {
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            ImportOutcome::Converted { index, .. }
            | ImportOutcome::Skipped { index, .. }
            | ImportOutcome::Failed { index, .. } => *index,
        }
    }
}

/// Ordered collection of outcomes, one per source object, in source order.
pub type ImportResult = Vec<ImportOutcome>;

/// Geometry router - routes variants to processors
pub struct GeometryRouter {
    processors: Vec<Box<dyn GeometryProcessor>>,
}

impl GeometryRouter {
    /// Create new router with the default processors in specificity order.
    pub fn new() -> Self {
        let mut router = Self {
            processors: Vec::new(),
        };

        // Specialized curve variants ahead of the generic curve fallback;
        // the fallback is registered last.
        router.register(Box::new(BrepProcessor::new()));
        router.register(Box::new(LineCurveProcessor::new()));
        router.register(Box::new(NurbsCurveProcessor::new()));
        router.register(Box::new(ArcCurveProcessor::new()));
        router.register(Box::new(PolylineCurveProcessor::new()));
        router.register(Box::new(MeshProcessor::new()));
        router.register(Box::new(NurbsSurfaceProcessor::new()));
        router.register(Box::new(ExtrusionProcessor::new()));
        router.register(Box::new(GenericCurveProcessor::new()));

        router
    }

    /// Append a processor to the dispatch table. Position matters: earlier
    /// processors shadow later ones for any variant both would claim.
    pub fn register(&mut self, processor: Box<dyn GeometryProcessor>) {
        self.processors.push(processor);
    }

    /// Convert a single geometry variant. `None` means no registered
    /// processor claims it — the caller records a skip.
    pub fn convert_geometry(&self, geometry: &Geometry) -> Option<Result<Conversion>> {
        self.processors
            .iter()
            .find(|p| p.supports(geometry))
            .map(|p| p.process(geometry))
    }

    /// Convert one object into its outcome.
    pub fn convert_object(&self, index: usize, object: &ModelObject) -> ImportOutcome {
        match self.convert_geometry(&object.geometry) {
            Some(Ok(Conversion::Converted(geometry))) => {
                ImportOutcome::Converted { index, geometry }
            }
            Some(Ok(Conversion::Skipped(variant))) => {
                debug!("object {index}: skipped {variant}");
                ImportOutcome::Skipped { index, variant }
            }
            Some(Err(error)) => {
                warn!("object {index}: {error}");
                ImportOutcome::Failed { index, error }
            }
            None => {
                let variant = object.geometry.variant_name().to_string();
                debug!("object {index}: no processor for {variant}");
                ImportOutcome::Skipped { index, variant }
            }
        }
    }

    /// Convert a whole object list sequentially, in source order.
    pub fn convert_objects(&self, objects: &[ModelObject]) -> ImportResult {
        objects
            .iter()
            .enumerate()
            .map(|(index, object)| self.convert_object(index, object))
            .collect()
    }

    /// Convert a whole object list in parallel.
    ///
    /// Every builder is a pure function of its object, so objects convert
    /// independently; the indexed map re-merges deterministically into
    /// source order.
    pub fn convert_objects_parallel(&self, objects: &[ModelObject]) -> ImportResult {
        objects
            .par_iter()
            .enumerate()
            .map(|(index, object)| self.convert_object(index, object))
            .collect()
    }
}

impl Default for GeometryRouter {
    fn default() -> Self {
        Self::new()
    }
}
