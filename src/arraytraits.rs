// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Index, IndexMut};
use std::slice;

use num_complex::Complex;

use crate::{ArrayView, NdIndex, Shape};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> ! {
    panic!("ArrayView: index out of bounds");
}

/// Access the element at **index**.
///
/// **Panics** if the index is out of bounds or the array is null; use
/// [`uget`](ArrayView::uget) for unchecked access.
impl<A, I> Index<I> for ArrayView<A>
where
    I: NdIndex,
{
    type Output = A;
    #[inline]
    fn index(&self, index: I) -> &A {
        match self.get(index) {
            Ok(elem) => elem,
            Err(_) => array_out_of_bounds(),
        }
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** as [`Index`] does.
impl<A, I> IndexMut<I> for ArrayView<A>
where
    I: NdIndex,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut A {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(_) => array_out_of_bounds(),
        }
    }
}

/// Return `true` if the array extents and elements of `self` and `rhs` are
/// equal. The null array is equal only to other null arrays.
impl<A, B> PartialEq<ArrayView<B>> for ArrayView<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, rhs: &ArrayView<B>) -> bool {
        self.is_null() == rhs.is_null()
            && self.extents() == rhs.extents()
            && self.as_slice() == rhs.as_slice()
    }
}

impl<A: Eq> Eq for ArrayView<A> {}

impl<'a, A> IntoIterator for &'a ArrayView<A> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A> IntoIterator for &'a mut ArrayView<A> {
    type Item = &'a mut A;
    type IntoIter = slice::IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Create a one-dimensional owning array from a vector (no copying needed).
impl<A> From<Vec<A>> for ArrayView<A> {
    fn from(v: Vec<A>) -> Self {
        let shape = Shape::from_extents(&[v.len()]);
        unsafe { Self::from_shape_vec_unchecked(shape, v) }
    }
}

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// compound assignment like `a += 1.0` and `a *= 2.` is allowed.
///
/// This trait ***does not*** limit which elements can be stored in an array
/// in general. Non-`ScalarOperand` types can still participate in
/// array-array and array-slice compound assignment.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for i128 {}
impl ScalarOperand for u128 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}
impl ScalarOperand for Complex<f32> {}
impl ScalarOperand for Complex<f64> {}
