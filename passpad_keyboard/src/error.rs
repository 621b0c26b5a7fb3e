// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while reading keyboard configuration.

use alloc::string::String;
use core::num::ParseIntError;

use thiserror::Error;

/// A key-code token that could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// The token was empty after trimming.
    #[error("empty key code token")]
    Empty,
    /// The token is not a decimal integer.
    #[error("malformed key code `{token}`")]
    Malformed {
        /// The offending token, trimmed.
        token: String,
        /// Why it failed to parse.
        #[source]
        source: ParseIntError,
    },
}
