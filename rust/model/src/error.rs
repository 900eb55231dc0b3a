// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors a source reader can raise.
///
/// Failing to obtain the object graph is the only fatal condition in the
/// whole pipeline; everything downstream degrades per object.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("source unreadable: {0}")]
    SourceUnreadable(String),
}
