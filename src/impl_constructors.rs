// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for colarray
//!
use std::ptr;

use num_traits::Zero;

use crate::data_repr::{OwnedRepr, Storage};
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{ArrayView, IntoShape, Ix, Shape};

/// # Constructor Methods for Owned Arrays
impl<A> ArrayView<A> {
    /// Create an array with zeros, shape `shape`. The array owns its
    /// storage.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let a = ArrayView::<i32>::zeros((3, 4));
    /// assert_eq!(a.extent(0), 3);
    /// assert_eq!(a.extent(1), 4);
    /// assert_eq!(a.size(), 12);
    /// assert!(a.owns_data());
    /// assert!(a.iter().all(|&x| x == 0));
    /// ```
    ///
    /// **Panics** if the rank exceeds `MAX_RANK`.
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        A: Clone + Zero,
        Sh: IntoShape,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Panics** if the rank exceeds `MAX_RANK`.
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Self
    where
        A: Clone,
        Sh: IntoShape,
    {
        let shape = shape.into_shape();
        let v = vec![elem; shape.size()];
        unsafe { Self::from_shape_vec_unchecked(shape, v) }
    }

    /// Create an array with zeros from a slice of extents, reporting
    /// `DimensionOverflow` instead of panicking when there are too many.
    pub fn try_zeros(extents: &[Ix]) -> Result<Self, ArrayError>
    where
        A: Clone + Zero,
    {
        let shape = Shape::try_from_extents(extents)?;
        Ok(Self::zeros(shape))
    }

    /// Create an array of shape `shape` that takes ownership of `v`
    /// (no copying). The elements are used in column-major order.
    ///
    /// **Errors** with `ShapeMismatch` if `v` does not hold exactly as many
    /// elements as the shape.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let a = ArrayView::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a[(1, 0)], 2.);
    /// assert_eq!(a[(0, 1)], 3.);
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
    {
        let shape = shape.into_shape();
        if shape.size() != v.len() {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        unsafe { Ok(Self::from_shape_vec_unchecked(shape, v)) }
    }

    /// Create an owning array without checking that `v` matches the shape.
    ///
    /// # Safety
    ///
    /// `v` must hold at least `shape.size()` elements.
    pub(crate) unsafe fn from_shape_vec_unchecked(shape: Shape, v: Vec<A>) -> Self {
        let repr = OwnedRepr::from(v);
        debug_assert!(repr.len() >= shape.size());
        ArrayView {
            ptr: repr.as_ptr_mut(),
            data: Storage::Owned(repr),
            shape,
        }
    }
}

/// # Constructor Methods for Views
impl<A> ArrayView<A> {
    /// Create the null array: no data, rank 0, size 0, not owning.
    ///
    /// ```
    /// use colarray::{ArrayState, ArrayView};
    ///
    /// let e = ArrayView::<f64>::null();
    /// assert!(e.is_null());
    /// assert_eq!(e.size(), 0);
    /// assert_eq!(e.state(), ArrayState::Null);
    /// ```
    pub const fn null() -> Self {
        ArrayView {
            data: Storage::Borrowed,
            ptr: ptr::null_mut(),
            shape: Shape::null(),
        }
    }

    /// Create a view of shape `shape` over memory owned elsewhere.
    ///
    /// Nothing is allocated, and the view never releases `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `shape.size()` elements
    /// for as long as the view (or any index into it) is used, and must be
    /// properly aligned. No such check is performed.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let mut a = ArrayView::<i32>::zeros((3, 4));
    /// // a view of the third column of `a`
    /// let mut c = unsafe { ArrayView::from_shape_ptr(3, &mut a[(0, 2)] as *mut i32) };
    /// c[1] = -2;
    /// assert_eq!(a[(1, 2)], -2);
    /// ```
    pub unsafe fn from_shape_ptr<Sh>(shape: Sh, ptr: *mut A) -> Self
    where
        Sh: IntoShape,
    {
        ArrayView {
            data: Storage::Borrowed,
            ptr,
            shape: shape.into_shape(),
        }
    }

    /// Create a view of shape `shape` over the slice `data`.
    ///
    /// **Errors** with `ShapeMismatch` if `data` is shorter than the shape's
    /// size.
    ///
    /// # Safety
    ///
    /// The view does not borrow `data`: it must stay alive and in place for
    /// as long as the view is used.
    pub unsafe fn from_slice_mut<Sh>(shape: Sh, data: &mut [A]) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
    {
        let shape = shape.into_shape();
        if data.len() < shape.size() {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        Ok(Self::from_shape_ptr(shape, data.as_mut_ptr()))
    }

    /// Create a new view of the same data as `self`, with its own copy of
    /// the shape metadata.
    ///
    /// Writes through either array are visible through the other. Reshaping
    /// one leaves the other's shape untouched.
    ///
    /// # Safety
    ///
    /// The alias does not keep the data alive. It must not be used after
    /// the owner of the data has been dropped, reallocated or rebound.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let a = ArrayView::<i32>::zeros((3, 4));
    /// let mut b = unsafe { a.alias() };
    /// b[0] = -1;
    /// assert_eq!(a[0], -1);
    /// assert!(!b.owns_data());
    /// ```
    pub unsafe fn alias(&self) -> Self {
        ArrayView {
            data: Storage::Borrowed,
            ptr: self.ptr,
            shape: self.shape,
        }
    }
}

impl<A> Default for ArrayView<A> {
    /// The null array.
    fn default() -> Self {
        Self::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayState, MAX_RANK};

    #[test]
    fn zeros_owns_zeroed_storage() {
        let a = ArrayView::<f32>::zeros((2, 3, 4));
        assert_eq!(a.state(), ArrayState::Owner);
        assert_eq!(a.size(), 24);
        assert_eq!(a.as_slice(), &[0.; 24][..]);
    }

    #[test]
    fn zeros_rank_zero() {
        let a = ArrayView::<u8>::zeros(());
        assert_eq!(a.rank(), 0);
        assert_eq!(a.size(), 1);
        assert_eq!(a[()], 0);
    }

    #[test]
    fn try_zeros_overflow() {
        let err = ArrayView::<f64>::try_zeros(&[1; MAX_RANK + 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionOverflow);
        let a = ArrayView::<f64>::try_zeros(&[1, 2, 1, 2, 1, 2]).unwrap();
        assert_eq!(a.size(), 8);
    }

    #[test]
    fn from_shape_vec_checks_count() {
        assert_eq!(
            ArrayView::from_shape_vec((2, 2), vec![1, 2, 3]).unwrap_err().kind(),
            ErrorKind::ShapeMismatch
        );
        let v = vec![1, 2, 3, 4, 5, 6];
        let ptr = v.as_ptr();
        let a = ArrayView::from_shape_vec((3, 2), v).unwrap();
        assert_eq!(a.as_ptr(), ptr);
        assert_eq!(a[(2, 1)], 6);
    }

    #[test]
    fn from_slice_mut_checks_length() {
        let mut data = [0.; 5];
        unsafe {
            assert!(ArrayView::from_slice_mut((2, 3), &mut data).is_err());
            let v = ArrayView::from_slice_mut((2, 2), &mut data).unwrap();
            assert_eq!(v.state(), ArrayState::View);
            assert_eq!(v.as_ptr(), data.as_ptr());
        }
    }

    #[test]
    fn default_is_null() {
        let a = ArrayView::<i64>::default();
        assert!(a.is_null());
        assert_eq!(a.rank(), 0);
        assert_eq!(a.size(), 0);
        assert!(!a.owns_data());
    }
}
