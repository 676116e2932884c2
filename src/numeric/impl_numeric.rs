// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Add, Div, Mul};

#[cfg(feature = "std")]
use num_traits::Float;
use num_traits::{FromPrimitive, One, Signed, Zero};

use super::MaybeNan;
use crate::ArrayView;

/// # Numerical Methods for Arrays
impl<A> ArrayView<A> {
    /// Return the sum of all elements in the array.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let a = ArrayView::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a.sum(), 10.);
    /// ```
    pub fn sum(&self) -> A
    where
        A: Clone + Add<Output = A> + Zero,
    {
        super::sum(self)
    }

    /// Return the product of all elements in the array.
    pub fn product(&self) -> A
    where
        A: Clone + Mul<Output = A> + One,
    {
        super::product(self)
    }

    /// Return the mean of all elements, or `None` if the array is empty.
    pub fn mean(&self) -> Option<A>
    where
        A: Clone + Add<Output = A> + Div<Output = A> + Zero + FromPrimitive,
    {
        super::mean(self)
    }

    /// Return the first minimal element, or `None` if the array is empty.
    pub fn min(&self) -> Option<A>
    where
        A: Clone + PartialOrd,
    {
        super::min(self)
    }

    /// Return the first maximal element, or `None` if the array is empty.
    pub fn max(&self) -> Option<A>
    where
        A: Clone + PartialOrd,
    {
        super::max(self)
    }

    /// Return the Euclidean norm of the elements.
    ///
    /// **Requires crate feature `"std"`**
    #[cfg(feature = "std")]
    pub fn norm(&self) -> A
    where
        A: Float,
    {
        super::norm(self)
    }

    /// Return the largest absolute value of the elements.
    pub fn infnorm(&self) -> A
    where
        A: Signed + PartialOrd,
    {
        super::infnorm(self)
    }

    /// Return `true` if any element is NaN.
    pub fn anynan(&self) -> bool
    where
        A: MaybeNan,
    {
        super::anynan(self)
    }

    /// Sort the elements in place, ascending.
    ///
    /// The shape is unchanged; elements are placed in column-major order.
    pub fn sort(&mut self)
    where
        A: PartialOrd,
    {
        super::sort(self)
    }
}
