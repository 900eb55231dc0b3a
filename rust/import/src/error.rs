// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for import entry points
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the import entry points can raise.
#[derive(Error, Debug)]
pub enum Error {
    /// The external reader could not produce the object graph. Fatal: no
    /// partial import exists.
    #[error(transparent)]
    Read(#[from] r3dm_lite_model::ReadError),
}
