// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The external reader boundary.

use std::path::Path;

use crate::error::Result;
use crate::model::Model;

/// Implemented by the external container reader.
///
/// The pipeline never touches the binary format; it asks a reader for the
/// materialized graph and treats any failure as fatal
/// ([`ReadError::SourceUnreadable`](crate::ReadError::SourceUnreadable)) —
/// no partial import is produced.
pub trait SourceReader {
    fn read(&self, path: &Path) -> Result<Model>;
}
