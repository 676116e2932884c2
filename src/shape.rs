// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{Ix, MAX_RANK};

/// Shape metadata of an array: rank, extents, column-major strides and
/// total element count.
///
/// The representation has a fixed capacity of [`MAX_RANK`] dimensions so
/// that reshaping never allocates.
///
/// Extents beyond the rank read as `1`. The stored strides are extended the
/// same way, so `strides[j]` for `j >= rank - 1` equals the size, and index
/// components beyond the rank contribute nothing as long as they are zero.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rank: usize,
    extents: [Ix; MAX_RANK],
    // Omits the first stride which is always 1.
    strides: [Ix; MAX_RANK - 1],
    size: Ix,
}

impl Shape {
    /// The shape of a null array: rank 0 and size 0.
    pub const fn null() -> Self {
        Shape {
            rank: 0,
            extents: [1; MAX_RANK],
            strides: [0; MAX_RANK - 1],
            size: 0,
        }
    }

    /// Create a shape from its extents.
    ///
    /// An empty `extents` describes a scalar container with size 1.
    ///
    /// **Panics** if `extents` has more than [`MAX_RANK`] elements, or if
    /// the product of the non-zero extents overflows `isize`.
    pub fn from_extents(extents: &[Ix]) -> Self {
        assert!(
            extents.len() <= MAX_RANK,
            "rank {} exceeds the maximum rank {}",
            extents.len(),
            MAX_RANK
        );
        if size_of_extents_checked(extents).is_none() {
            panic!("Shape too large, product of non-zero extents overflows isize");
        }
        Self::from_extents_unchecked(extents)
    }

    /// Create a shape from its extents.
    ///
    /// **Errors** with `DimensionOverflow` when there are more than
    /// [`MAX_RANK`] extents and with `Overflow` when the product of the
    /// non-zero extents does not fit in `isize`.
    pub fn try_from_extents(extents: &[Ix]) -> Result<Self, ArrayError> {
        if extents.len() > MAX_RANK {
            return Err(from_kind(ErrorKind::DimensionOverflow));
        }
        if size_of_extents_checked(extents).is_none() {
            return Err(from_kind(ErrorKind::Overflow));
        }
        Ok(Self::from_extents_unchecked(extents))
    }

    /// The extents must have passed `size_of_extents_checked`, which bounds
    /// every partial product of the strides as well.
    fn from_extents_unchecked(dims: &[Ix]) -> Self {
        let mut extents = [1; MAX_RANK];
        extents[..dims.len()].copy_from_slice(dims);
        let mut strides = [0; MAX_RANK - 1];
        let mut acc = 1;
        for (stride, &extent) in strides.iter_mut().zip(&extents) {
            acc *= extent;
            *stride = acc;
        }
        Shape {
            rank: dims.len(),
            extents,
            strides,
            size: acc * extents[MAX_RANK - 1],
        }
    }

    /// Return the number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Return the total number of elements.
    #[inline]
    pub fn size(&self) -> Ix {
        self.size
    }

    /// Return the extent of dimension `i`, or `1` if `i` is not below the rank.
    #[inline]
    pub fn extent(&self, i: usize) -> Ix {
        if i < self.rank {
            self.extents[i]
        } else {
            1
        }
    }

    /// Return the extents, one per dimension.
    #[inline]
    pub fn extents(&self) -> &[Ix] {
        &self.extents[..self.rank]
    }

    /// Return the strides of dimensions `1..rank`.
    ///
    /// The stride of dimension 0 is always 1 and is not included, so the
    /// slice has `rank - 1` elements (none for rank 0 and 1).
    #[inline]
    pub fn strides(&self) -> &[Ix] {
        &self.strides[..self.rank.saturating_sub(1)]
    }

    /// All stored strides, including the ones extended beyond the rank.
    #[inline]
    pub(crate) fn raw_strides(&self) -> &[Ix; MAX_RANK - 1] {
        &self.strides
    }
}

/// Return the number of elements described by `extents`, or `None` if the
/// product of the non-zero extents overflows `isize`.
///
/// Zero extents are skipped in the overflow check, so a shape like
/// `[0, usize::MAX, usize::MAX]` is rejected even though it has no elements.
pub(crate) fn size_of_extents_checked(extents: &[Ix]) -> Option<Ix> {
    let size_nonzero = extents
        .iter()
        .filter(|&&e| e != 0)
        .try_fold(1usize, |acc, &e| acc.checked_mul(e))?;
    if size_nonzero > isize::MAX as usize {
        None
    } else {
        Some(extents.iter().product())
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::null()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("extents", &self.extents())
            .field("strides", &self.strides())
            .field("size", &self.size)
            .finish()
    }
}

/// Argument conversion into a [`Shape`].
///
/// Implemented for `()` (rank 0), a single `Ix` (rank 1), tuples of two to
/// six `Ix`, arrays `[Ix; N]` with `N <= 6`, slices `&[Ix]` and `Shape`.
///
/// ```
/// use colarray::IntoShape;
///
/// let s = (3usize, 4usize).into_shape();
/// assert_eq!(s.extents(), &[3, 4]);
/// assert_eq!(s.strides(), &[3]);
/// assert_eq!(s.size(), 12);
/// ```
pub trait IntoShape {
    /// **Panics** if the rank exceeds [`MAX_RANK`].
    fn into_shape(self) -> Shape;
}

impl IntoShape for Shape {
    #[inline(always)]
    fn into_shape(self) -> Shape {
        self
    }
}

impl<'a> IntoShape for &'a Shape {
    #[inline(always)]
    fn into_shape(self) -> Shape {
        *self
    }
}

impl IntoShape for () {
    #[inline]
    fn into_shape(self) -> Shape {
        Shape::from_extents(&[])
    }
}

impl IntoShape for Ix {
    #[inline]
    fn into_shape(self) -> Shape {
        Shape::from_extents(&[self])
    }
}

impl<'a> IntoShape for &'a [Ix] {
    #[inline]
    fn into_shape(self) -> Shape {
        Shape::from_extents(self)
    }
}

impl<'a> IntoShape for &'a Vec<Ix> {
    #[inline]
    fn into_shape(self) -> Shape {
        Shape::from_extents(self)
    }
}

impl<const N: usize> IntoShape for [Ix; N] {
    #[inline]
    fn into_shape(self) -> Shape {
        Shape::from_extents(&self)
    }
}

macro_rules! tuple_into_shape {
    ($($name:ident),+) => {
        impl IntoShape for ($(tuple_into_shape!(@ix $name),)+) {
            #[inline]
            #[allow(non_snake_case)]
            fn into_shape(self) -> Shape {
                let ($($name,)+) = self;
                Shape::from_extents(&[$($name),+])
            }
        }
    };
    (@ix $name:ident) => { Ix };
}

tuple_into_shape!(s0, s1);
tuple_into_shape!(s0, s1, s2);
tuple_into_shape!(s0, s1, s2, s3);
tuple_into_shape!(s0, s1, s2, s3, s4);
tuple_into_shape!(s0, s1, s2, s3, s4, s5);
