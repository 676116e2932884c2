// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Ix, Shape, MAX_RANK};

/// Tuple or fixed size arrays that can be used to index an array.
///
/// A single `Ix` is a linear offset into the buffer (which is also the
/// rank 1 multi-index). Tuples `(i0, i1, …)` and arrays `[i0, i1, …]` of up
/// to six components use column-major addressing:
/// `i0 + strides[0]·i1 + strides[1]·i2 + …`.
///
/// ```
/// use colarray::ArrayView;
///
/// let mut a = ArrayView::<f64>::zeros((2, 3));
/// a[[1, 2]] = 5.;
/// assert_eq!(a[(1, 2)], 5.);
/// assert_eq!(a[5], 5.);
/// ```
///
/// # Safety
///
/// `index_checked` must return `Some` only for offsets below the shape's size.
pub unsafe trait NdIndex {
    #[doc(hidden)]
    fn index_checked(&self, shape: &Shape) -> Option<Ix>;
    #[doc(hidden)]
    fn index_unchecked(&self, shape: &Shape) -> Ix;
}

unsafe impl NdIndex for Ix {
    #[inline]
    fn index_checked(&self, shape: &Shape) -> Option<Ix> {
        if *self < shape.size() {
            Some(*self)
        } else {
            None
        }
    }
    #[inline(always)]
    fn index_unchecked(&self, _shape: &Shape) -> Ix {
        *self
    }
}

#[inline]
fn offset_of(index: &[Ix], shape: &Shape) -> Ix {
    debug_assert!(index.len() <= MAX_RANK);
    let strides = shape.raw_strides();
    let mut offset = index[0];
    for (i, stride) in index[1..].iter().zip(strides) {
        offset += i * stride;
    }
    offset
}

#[inline]
fn checked_offset_of(index: &[Ix], shape: &Shape) -> Option<Ix> {
    for (dim, &i) in index.iter().enumerate() {
        if i >= shape.extent(dim) {
            return None;
        }
    }
    // every component in range, so the offset is below the size
    if shape.size() == 0 {
        return None;
    }
    Some(offset_of(index, shape))
}

unsafe impl<const N: usize> NdIndex for [Ix; N] {
    #[inline]
    fn index_checked(&self, shape: &Shape) -> Option<Ix> {
        if N == 0 {
            return if shape.size() > 0 { Some(0) } else { None };
        }
        if N > MAX_RANK {
            return None;
        }
        checked_offset_of(self, shape)
    }
    #[inline]
    fn index_unchecked(&self, shape: &Shape) -> Ix {
        if N == 0 {
            return 0;
        }
        offset_of(self, shape)
    }
}

unsafe impl NdIndex for () {
    #[inline]
    fn index_checked(&self, shape: &Shape) -> Option<Ix> {
        <[Ix; 0]>::index_checked(&[], shape)
    }
    #[inline(always)]
    fn index_unchecked(&self, _shape: &Shape) -> Ix {
        0
    }
}

macro_rules! tuple_ndindex {
    ($($name:ident),+) => {
        unsafe impl NdIndex for ($(tuple_ndindex!(@ix $name),)+) {
            #[inline]
            fn index_checked(&self, shape: &Shape) -> Option<Ix> {
                let ($($name,)+) = *self;
                [$($name),+].index_checked(shape)
            }
            #[inline]
            fn index_unchecked(&self, shape: &Shape) -> Ix {
                let ($($name,)+) = *self;
                offset_of(&[$($name),+], shape)
            }
        }
    };
    (@ix $name:ident) => { Ix };
}

tuple_ndindex!(i0, i1);
tuple_ndindex!(i0, i1, i2);
tuple_ndindex!(i0, i1, i2, i3);
tuple_ndindex!(i0, i1, i2, i3, i4);
tuple_ndindex!(i0, i1, i2, i3, i4, i5);
