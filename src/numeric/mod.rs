// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reductions and utilities over an array's elements.
//!
//! These functions see an array only as its `size` elements in column-major
//! order; they neither know nor care whether the array owns its data.
//! The same operations are available as methods on
//! [`ArrayView`](crate::ArrayView).
//!
//! ```
//! use colarray::{numeric, ArrayView};
//!
//! let mut a = ArrayView::from(vec![3., -4., 1.]);
//! assert_eq!(numeric::sum(&a), 0.);
//! assert_eq!(numeric::infnorm(&a), 4.);
//! numeric::sort(&mut a);
//! assert_eq!(a.as_slice(), &[-4., 1., 3.]);
//! ```

mod impl_numeric;

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul};

use num_complex::Complex;
#[cfg(feature = "std")]
use num_traits::Float;
use num_traits::{FromPrimitive, One, Signed, Zero};

use crate::ArrayView;

/// Sort the elements in place, ascending, by their natural order.
///
/// Incomparable pairs (NaN) compare as equal.
pub fn sort<A>(a: &mut ArrayView<A>)
where
    A: PartialOrd,
{
    a.as_slice_mut()
        .sort_unstable_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
}

/// Return the first minimal element, or `None` if the array is empty.
pub fn min<A>(a: &ArrayView<A>) -> Option<A>
where
    A: Clone + PartialOrd,
{
    let mut it = a.iter();
    let mut best = it.next()?;
    for x in it {
        if x < best {
            best = x;
        }
    }
    Some(best.clone())
}

/// Return the first maximal element, or `None` if the array is empty.
pub fn max<A>(a: &ArrayView<A>) -> Option<A>
where
    A: Clone + PartialOrd,
{
    let mut it = a.iter();
    let mut best = it.next()?;
    for x in it {
        if best < x {
            best = x;
        }
    }
    Some(best.clone())
}

/// Return the sum of all elements; zero for an empty array.
pub fn sum<A>(a: &ArrayView<A>) -> A
where
    A: Clone + Add<Output = A> + Zero,
{
    a.iter().fold(A::zero(), |acc, x| acc + x.clone())
}

/// Return the product of all elements; one for an empty array.
pub fn product<A>(a: &ArrayView<A>) -> A
where
    A: Clone + Mul<Output = A> + One,
{
    a.iter().fold(A::one(), |acc, x| acc * x.clone())
}

/// Return the arithmetic mean, or `None` if the array is empty.
pub fn mean<A>(a: &ArrayView<A>) -> Option<A>
where
    A: Clone + Add<Output = A> + Div<Output = A> + Zero + FromPrimitive,
{
    if a.is_empty() {
        return None;
    }
    let n = A::from_usize(a.size())?;
    Some(sum(a) / n)
}

/// Return the Euclidean norm, the square root of the sum of squares.
///
/// **Requires crate feature `"std"`**
#[cfg(feature = "std")]
pub fn norm<A>(a: &ArrayView<A>) -> A
where
    A: Float,
{
    a.iter().fold(A::zero(), |acc, &x| acc + x * x).sqrt()
}

/// Return the largest absolute value; zero for an empty array.
///
/// The scan uses a strict comparison, so the first maximal element wins.
pub fn infnorm<A>(a: &ArrayView<A>) -> A
where
    A: Signed + PartialOrd,
{
    let mut nrm = A::zero();
    for x in a {
        let absx = x.abs();
        if absx > nrm {
            nrm = absx;
        }
    }
    nrm
}

/// Return `true` if any element is NaN.
pub fn anynan<A>(a: &ArrayView<A>) -> bool
where
    A: MaybeNan,
{
    a.iter().any(MaybeNan::is_nan)
}

/// Element types that may hold a NaN value.
///
/// Integer and boolean elements never do.
pub trait MaybeNan {
    /// Return `true` if the value is NaN.
    fn is_nan(&self) -> bool;
}

macro_rules! impl_never_nan {
    ($($t:ty),*) => {
        $(
        impl MaybeNan for $t {
            #[inline(always)]
            fn is_nan(&self) -> bool {
                false
            }
        }
        )*
    };
}

impl_never_nan!(bool, i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

impl MaybeNan for f32 {
    #[inline]
    fn is_nan(&self) -> bool {
        f32::is_nan(*self)
    }
}

impl MaybeNan for f64 {
    #[inline]
    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }
}

impl<T> MaybeNan for Complex<T>
where
    T: MaybeNan,
{
    #[inline]
    fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_first_extremal() {
        let a = ArrayView::from(vec![3, 1, 4, 1, 5, 9, 2, 6, 5]);
        assert_eq!(min(&a), Some(1));
        assert_eq!(max(&a), Some(9));
        let e = ArrayView::<i32>::null();
        assert_eq!(min(&e), None);
        assert_eq!(max(&e), None);
    }

    #[test]
    fn folds() {
        let a = ArrayView::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
        assert_eq!(sum(&a), 10);
        assert_eq!(product(&a), 24);
        assert_eq!(mean(&ArrayView::from(vec![1., 2., 6.])), Some(3.));
        assert_eq!(mean(&ArrayView::<f64>::null()), None);
        assert_eq!(product(&ArrayView::<i32>::null()), 1);
    }

    #[test]
    fn norms() {
        let a = ArrayView::from(vec![3., -4.]);
        #[cfg(feature = "std")]
        assert_eq!(norm(&a), 5.);
        assert_eq!(infnorm(&a), 4.);
        assert_eq!(infnorm(&ArrayView::from(vec![-2, 2, 1])), 2);
    }

    #[test]
    fn nan_detection() {
        assert!(!anynan(&ArrayView::from(vec![1., 2.])));
        assert!(anynan(&ArrayView::from(vec![1., f64::NAN])));
        assert!(!anynan(&ArrayView::from(vec![1u8, 2])));
        assert!(anynan(&ArrayView::from(vec![Complex::new(0f32, f32::NAN)])));
    }

    #[test]
    fn sort_ascending() {
        let mut a = ArrayView::from_shape_vec((2, 3), vec![5, 3, 0, 4, 1, 2]).unwrap();
        sort(&mut a);
        assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(a.extents(), &[2, 3]);
    }
}
