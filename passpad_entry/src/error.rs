// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by the entry widgets.

use thiserror::Error;

/// A rejected field setting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A passcode needs at least one digit.
    #[error("invalid passcode length {0}; must be at least 1")]
    InvalidTargetLength(usize),
}
