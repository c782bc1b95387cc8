// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The common error type for sweep rendering.
//!
//! Sampling and rasterizing never fail on their own; every error here
//! originates in the surface being drawn to.

use std::fmt;

/// An error that can occur while drawing a sweep onto a surface.
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// `restore` was called without a matching `save`.
    StackUnbalance,
    /// An error reported by the piet backend.
    Piet(piet::Error),
    /// An error from any other kind of surface.
    BackendError(Box<dyn std::error::Error>),
}

/// Create a new error of the given kind.
pub fn new_error(kind: ErrorKind) -> Error {
    Error(Box::new(kind))
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::StackUnbalance => write!(f, "Stack unbalanced"),
            ErrorKind::Piet(ref e) => write!(f, "Piet error: {}", e),
            ErrorKind::BackendError(ref e) => {
                write!(f, "Backend error: ")?;
                e.fmt(f)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<piet::Error> for Error {
    fn from(e: piet::Error) -> Error {
        new_error(ErrorKind::Piet(e))
    }
}

impl From<Box<dyn std::error::Error>> for Error {
    fn from(e: Box<dyn std::error::Error>) -> Error {
        new_error(ErrorKind::BackendError(e))
    }
}
