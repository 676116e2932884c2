// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error reported by the checked array operations.
#[derive(Clone, Debug)]
pub struct ArrayError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ArrayError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error reported by a checked array operation.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// the requested rank exceeds `MAX_RANK`
    DimensionOverflow,
    /// operand element counts differ
    ShapeMismatch,
    /// access through a null array
    NullAccess,
    /// index out of bounds
    OutOfBounds,
    /// the element count of a shape overflows `isize`
    Overflow,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError {
    ArrayError { repr: k }
}

impl PartialEq for ArrayError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::DimensionOverflow => "rank exceeds the maximum rank",
            ErrorKind::ShapeMismatch => "operand element counts differ",
            ErrorKind::NullAccess => "access through a null array",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::Overflow => "arithmetic overflow",
        };
        write!(f, "ArrayError/{:?}: {}", self.kind(), description)
    }
}
