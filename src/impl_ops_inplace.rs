// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rawpointer::PointerExt;

use crate::{ArrayView, ScalarOperand};

/// # Elementwise In-place Operations
impl<A> ArrayView<A> {
    /// Apply `f` to every element with the matching element of the raw
    /// buffer `rhs`, for the first `n` elements: `x = f(x, y)`.
    ///
    /// All compound assignment operators route through this kernel.
    /// Elements are read and written through raw pointers only, so `rhs`
    /// may alias `self`.
    ///
    /// # Safety
    ///
    /// `rhs` must be valid for reads of `n` elements and `n` must not
    /// exceed `self.size()`.
    #[inline]
    pub(crate) unsafe fn zip_mut_with_ptr<F>(&mut self, mut rhs: *const A, n: usize, mut f: F)
    where
        A: Clone,
        F: FnMut(A, A) -> A,
    {
        debug_assert!(n <= self.size());
        let mut lhs = self.ptr;
        for _ in 0..n {
            let y = (*rhs.post_inc()).clone();
            let x = lhs.post_inc();
            *x = f((*x).clone(), y);
        }
    }

    /// Apply `f` elementwise with `rhs`: `x = f(x, y)` for matching
    /// elements in column-major order.
    ///
    /// Shapes are not compared; only the common prefix of the two arrays
    /// is visited. See [`try_zip_mut_with`](ArrayView::try_zip_mut_with) for
    /// the checked variant.
    pub fn zip_mut_with<F>(&mut self, rhs: &ArrayView<A>, f: F)
    where
        A: Clone,
        F: FnMut(A, A) -> A,
    {
        debug_assert_eq!(self.size(), rhs.size());
        let n = cmp::min(self.as_slice().len(), rhs.as_slice().len());
        unsafe { self.zip_mut_with_ptr(rhs.ptr, n, f) }
    }

    /// Apply `f` elementwise with the slice `rhs`, over the common prefix.
    pub fn zip_mut_with_slice<F>(&mut self, rhs: &[A], f: F)
    where
        A: Clone,
        F: FnMut(A, A) -> A,
    {
        debug_assert_eq!(self.size(), rhs.len());
        let n = cmp::min(self.as_slice().len(), rhs.len());
        unsafe { self.zip_mut_with_ptr(rhs.as_ptr(), n, f) }
    }

    /// Apply `f` with the scalar `x` to every element: `elt = f(elt, x)`.
    pub fn zip_mut_with_scalar<F>(&mut self, x: &A, mut f: F)
    where
        A: Clone,
        F: FnMut(A, A) -> A,
    {
        self.map_inplace(move |elt| f(elt, x.clone()));
    }

    /// Replace every element `x` with `f(x)`.
    pub fn map_inplace<F>(&mut self, mut f: F)
    where
        A: Clone,
        F: FnMut(A) -> A,
    {
        for elt in self.iter_mut() {
            *elt = f(elt.clone());
        }
    }

    /// Perform an elementwise negation of `self`, *in place*.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let mut a = ArrayView::from(vec![1., -2., 3.]);
    /// a.negate();
    /// assert_eq!(a.as_slice(), &[-1., 2., -3.]);
    /// ```
    pub fn negate(&mut self)
    where
        A: Clone + Neg<Output = A>,
    {
        self.map_inplace(|x| -x);
    }
}

macro_rules! impl_assign_op {
    ($trt:ident, $method:ident, $op_trt:ident, $operator:tt, $doc:expr) => {
        /// Perform elementwise
        #[doc=$doc]
        /// between `self` and the scalar `x`,
        /// *in place*.
        impl<A> $trt<A> for ArrayView<A>
        where
            A: ScalarOperand + $op_trt<A, Output = A>,
        {
            fn $method(&mut self, x: A) {
                self.zip_mut_with_scalar(&x, |a, b| a $operator b);
            }
        }

        /// Perform elementwise
        #[doc=$doc]
        /// between `self` and `rhs`,
        /// *in place*.
        ///
        /// Shapes are not compared; only the common prefix of the element
        /// sequences is combined.
        impl<'a, A> $trt<&'a ArrayView<A>> for ArrayView<A>
        where
            A: Clone + $op_trt<A, Output = A>,
        {
            fn $method(&mut self, rhs: &ArrayView<A>) {
                self.zip_mut_with(rhs, |a, b| a $operator b);
            }
        }

        /// Perform elementwise
        #[doc=$doc]
        /// between `self` and the buffer `rhs`,
        /// *in place*.
        impl<'a, A> $trt<&'a [A]> for ArrayView<A>
        where
            A: Clone + $op_trt<A, Output = A>,
        {
            fn $method(&mut self, rhs: &[A]) {
                self.zip_mut_with_slice(rhs, |a, b| a $operator b);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, Add, +, "addition");
impl_assign_op!(SubAssign, sub_assign, Sub, -, "subtraction");
impl_assign_op!(MulAssign, mul_assign, Mul, *, "multiplication");
impl_assign_op!(DivAssign, div_assign, Div, /, "division");
