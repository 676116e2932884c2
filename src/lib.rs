// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "colarray"]
#![doc(html_root_url = "https://docs.rs/colarray/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::len_without_is_empty
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `colarray` crate provides [`ArrayView`], a dense multi-dimensional
//! array stored in column-major (Fortran) order, of rank zero through
//! [`MAX_RANK`].
//!
//! One type covers two ownership regimes:
//!
//! - **Owner**: the array allocated its own zero-filled buffer (see
//!   [`ArrayView::zeros`], [`ArrayView::reallocate`]) and releases it when it
//!   is dropped or reallocated.
//! - **View**: the array points into memory owned elsewhere (see
//!   [`ArrayView::from_shape_ptr`], [`ArrayView::alias`]) and never releases it.
//!
//! Both regimes share the same shape metadata, indexing and arithmetic.
//! Each instance keeps its own private copy of the shape, so reshaping one
//! alias leaves every other alias of the same buffer untouched.
//!
//! ## Addressing
//!
//! The leading dimension varies fastest. For indices `(i0, i1, …, ik)` the
//! linear offset is `i0 + strides[0]·i1 + … + strides[k-1]·ik`, where
//! `strides[j]` is the product of the extents `0..=j`.
//!
//! ```
//! use colarray::ArrayView;
//!
//! let mut a = ArrayView::<i32>::zeros((3, 4));
//! assert_eq!(a.size(), 12);
//! a[5] = 1;
//! assert_eq!(a[(2, 1)], 1);
//! ```
//!
//! ## Unchecked and checked operations
//!
//! Assignment and compound arithmetic do not validate their operands: a
//! mismatched element count is a contract violation, caught only by debug
//! assertions, and release builds process the common prefix. Indexing panics
//! when out of bounds; the unchecked [`uget`](ArrayView::uget) and
//! [`reshape`](ArrayView::reshape) are `unsafe`. Every such operation has a
//! checked counterpart (`get`, `try_assign`, `try_add_assign`, `try_reshape`
//! …) that reports an [`ArrayError`] instead.
//!
//! ## Crate Feature Flags
//!
//! - `std`: Rust standard library-using functionality (enabled by default),
//!   needed for [`numeric::norm`].
//! - `serde`: Enables serialization support for serde 1.x.
//! - `approx`: Implementations of traits from the [`approx`] crate.
//!
//! [`approx`]: https://docs.rs/approx

#[cfg(feature = "serde")]
mod array_serde;
#[cfg(feature = "approx")]
mod array_approx;
mod arrayformat;
mod arraytraits;
mod data_repr;
mod error;
mod foreign;
mod impl_checked;
mod impl_constructors;
mod impl_methods;
mod impl_ops_inplace;
mod ndindex;
pub mod numeric;
pub mod prelude;
mod shape;

pub use crate::arraytraits::ScalarOperand;
pub use crate::data_repr::ArrayState;
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::foreign::{Element, ElementKind, ForeignBuffer, ImportError};
pub use crate::ndindex::NdIndex;
pub use crate::shape::{IntoShape, Shape};

use crate::data_repr::Storage;

/// Array index type
pub type Ix = usize;

/// The largest rank an array can have.
pub const MAX_RANK: usize = 6;

/// A dense column-major array that either owns its buffer or views memory
/// owned elsewhere.
///
/// An `ArrayView` is in one of three states, see [`ArrayState`]:
///
/// - `Null`: no buffer; the state of [`ArrayView::null`] and `Default`.
/// - `View`: data is borrowed; dropping the array releases nothing.
/// - `Owner`: the array allocated its data and releases it exactly once,
///   either when dropped or right before its data is replaced by
///   [`.rebind()`](ArrayView::rebind) or
///   [`.reallocate()`](ArrayView::reallocate).
///
/// Many arrays may alias one buffer. Only the owner decides its lifetime;
/// aliases are never notified when it goes away, so keeping a view past the
/// owner's release is a caller error.
///
/// The array is not `Clone`: the equivalent of copying is either
/// [`.alias()`](ArrayView::alias), producing a view, or
/// [`.duplicate()`](ArrayView::duplicate), producing an independent owner.
pub struct ArrayView<A> {
    /// Ownership of the buffer, if any.
    data: Storage<A>,
    /// Address of the first element; null only in the `Null` state.
    ptr: *mut A,
    /// Private shape metadata of this instance.
    shape: Shape,
}
