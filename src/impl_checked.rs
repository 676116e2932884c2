// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Checked counterparts of the unchecked array operations.
//!
//! Each method validates its operands first and otherwise behaves exactly
//! like the unchecked operation it mirrors.
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{ArrayView, Ix, NdIndex, Shape};

/// # Checked Methods
impl<A> ArrayView<A> {
    #[inline]
    fn ensure_not_null(&self) -> Result<(), ArrayError> {
        if self.is_null() {
            Err(from_kind(ErrorKind::NullAccess))
        } else {
            Ok(())
        }
    }

    #[inline]
    fn ensure_same_size(&self, len: usize) -> Result<(), ArrayError> {
        self.ensure_not_null()?;
        if self.size() != len {
            Err(from_kind(ErrorKind::ShapeMismatch))
        } else {
            Ok(())
        }
    }

    /// Return a reference to the element at `index`.
    ///
    /// **Errors** with `NullAccess` for the null array and with
    /// `OutOfBounds` if any index component is outside its extent.
    ///
    /// ```
    /// use colarray::{ArrayView, ErrorKind};
    ///
    /// let a = ArrayView::<f32>::zeros((3, 4));
    /// assert_eq!(a.get((2, 3)), Ok(&0.));
    /// assert_eq!(a.get((3, 0)).unwrap_err().kind(), ErrorKind::OutOfBounds);
    /// assert_eq!(ArrayView::<f32>::null().get(0).unwrap_err().kind(),
    ///            ErrorKind::NullAccess);
    /// ```
    pub fn get<I>(&self, index: I) -> Result<&A, ArrayError>
    where
        I: NdIndex,
    {
        self.ensure_not_null()?;
        match index.index_checked(&self.shape) {
            Some(offset) => unsafe { Ok(&*self.ptr.add(offset)) },
            None => Err(from_kind(ErrorKind::OutOfBounds)),
        }
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// **Errors** as [`get`](ArrayView::get).
    pub fn get_mut<I>(&mut self, index: I) -> Result<&mut A, ArrayError>
    where
        I: NdIndex,
    {
        self.ensure_not_null()?;
        match index.index_checked(&self.shape) {
            Some(offset) => unsafe { Ok(&mut *self.ptr.add(offset)) },
            None => Err(from_kind(ErrorKind::OutOfBounds)),
        }
    }

    /// Change the shape metadata to `extents`.
    ///
    /// **Errors** with `DimensionOverflow` if there are more extents than
    /// `MAX_RANK`, with `Overflow` if their product overflows `isize`, and
    /// with `ShapeMismatch` if the new size differs from the current one. A
    /// null array keeps size zero, so only empty shapes fit it. The array is
    /// unchanged on error.
    pub fn try_reshape(&mut self, extents: &[Ix]) -> Result<(), ArrayError> {
        let shape = Shape::try_from_extents(extents)?;
        if shape.size() != self.size() {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        unsafe { self.reshape(shape) };
        Ok(())
    }

    /// Reallocate the array with shape `extents`.
    ///
    /// **Errors** with `DimensionOverflow` if there are more extents than
    /// `MAX_RANK`; the array is unchanged on error.
    pub fn try_reallocate(&mut self, extents: &[Ix]) -> Result<(), ArrayError>
    where
        A: Clone + Zero,
    {
        let shape = Shape::try_from_extents(extents)?;
        self.reallocate(shape);
        Ok(())
    }

    /// Copy the elements of `rhs` into `self`.
    ///
    /// **Errors** with `NullAccess` if either array is null and with
    /// `ShapeMismatch` if the element counts differ.
    pub fn try_assign(&mut self, rhs: &ArrayView<A>) -> Result<(), ArrayError>
    where
        A: Clone,
    {
        rhs.ensure_not_null()?;
        self.ensure_same_size(rhs.size())?;
        self.assign(rhs);
        Ok(())
    }

    /// Copy the elements of the slice `rhs` into `self`.
    ///
    /// **Errors** with `NullAccess` if `self` is null and with
    /// `ShapeMismatch` if the element counts differ.
    pub fn try_assign_slice(&mut self, rhs: &[A]) -> Result<(), ArrayError>
    where
        A: Clone,
    {
        self.ensure_same_size(rhs.len())?;
        self.assign_slice(rhs);
        Ok(())
    }

    /// Apply `f` elementwise with `rhs`, `x = f(x, y)`.
    ///
    /// **Errors** with `NullAccess` if either array is null and with
    /// `ShapeMismatch` if the element counts differ. Nothing is modified on
    /// error.
    pub fn try_zip_mut_with<F>(&mut self, rhs: &ArrayView<A>, f: F) -> Result<(), ArrayError>
    where
        A: Clone,
        F: FnMut(A, A) -> A,
    {
        rhs.ensure_not_null()?;
        self.ensure_same_size(rhs.size())?;
        self.zip_mut_with(rhs, f);
        Ok(())
    }

    /// Apply `f` elementwise with the slice `rhs`, `x = f(x, y)`.
    ///
    /// **Errors** as [`try_assign_slice`](ArrayView::try_assign_slice).
    pub fn try_zip_mut_with_slice<F>(&mut self, rhs: &[A], f: F) -> Result<(), ArrayError>
    where
        A: Clone,
        F: FnMut(A, A) -> A,
    {
        self.ensure_same_size(rhs.len())?;
        self.zip_mut_with_slice(rhs, f);
        Ok(())
    }
}

macro_rules! impl_try_assign_op {
    ($method:ident, $op_trt:ident, $operator:tt, $doc:expr) => {
        /// Perform elementwise
        #[doc=$doc]
        /// between `self` and `rhs`, *in place*.
        ///
        /// **Errors** with `NullAccess` if either array is null and with
        /// `ShapeMismatch` if the element counts differ.
        pub fn $method(&mut self, rhs: &ArrayView<A>) -> Result<(), ArrayError>
        where
            A: Clone + $op_trt<A, Output = A>,
        {
            self.try_zip_mut_with(rhs, |a, b| a $operator b)
        }
    };
}

impl<A> ArrayView<A> {
    impl_try_assign_op!(try_add_assign, Add, +, "addition");
    impl_try_assign_op!(try_sub_assign, Sub, -, "subtraction");
    impl_try_assign_op!(try_mul_assign, Mul, *, "multiplication");
    impl_try_assign_op!(try_div_assign, Div, /, "division");
}
