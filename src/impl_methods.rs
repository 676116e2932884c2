// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp;
use std::slice;

use num_traits::Zero;
use rawpointer::PointerExt;

use crate::data_repr::Storage;
use crate::{ArrayState, ArrayView, IntoShape, Ix, NdIndex, Shape};

/// # Methods For All Arrays
impl<A> ArrayView<A> {
    /// Return the total number of elements in the array.
    #[inline]
    pub fn size(&self) -> Ix {
        self.shape.size()
    }

    /// Return whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Return the extent of dimension `i`; `1` for any `i` not below the rank.
    #[inline]
    pub fn extent(&self, i: usize) -> Ix {
        self.shape.extent(i)
    }

    /// Return the number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Return the extents of the array, one per dimension.
    #[inline]
    pub fn extents(&self) -> &[Ix] {
        self.shape.extents()
    }

    /// Return the strides of dimensions `1..rank`, in elements.
    ///
    /// The stride of dimension 0 is always 1 and is omitted.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let a = ArrayView::<f32>::zeros((3, 4, 5));
    /// assert_eq!(a.strides(), &[3, 12]);
    /// ```
    #[inline]
    pub fn strides(&self) -> &[Ix] {
        self.shape.strides()
    }

    /// Return the shape metadata of this array.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Return `true` if this array allocated its data and will release it.
    #[inline]
    pub fn owns_data(&self) -> bool {
        self.data.is_owned()
    }

    /// Return `true` if the array has no data pointer.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Return the lifecycle state of the array.
    pub fn state(&self) -> ArrayState {
        if self.data.is_owned() {
            ArrayState::Owner
        } else if self.ptr.is_null() {
            ArrayState::Null
        } else {
            ArrayState::View
        }
    }

    /// Return a pointer to the first element.
    ///
    /// The pointer borrows the data: it is invalidated when the owner of the
    /// data is dropped, reallocated or rebound.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const A {
        self.ptr
    }

    /// Return a mutable pointer to the first element.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut A {
        self.ptr
    }

    /// Borrow the array's `size` elements as a slice, in column-major order.
    ///
    /// The null array gives an empty slice.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let a = ArrayView::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        if self.ptr.is_null() {
            return &[];
        }
        unsafe { slice::from_raw_parts(self.ptr, self.size()) }
    }

    /// Borrow the array's `size` elements as a mutable slice, in column-major
    /// order.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [A] {
        if self.ptr.is_null() {
            return &mut [];
        }
        unsafe { slice::from_raw_parts_mut(self.ptr, self.size()) }
    }

    /// Return an iterator of references to the elements, in column-major
    /// order.
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.as_slice().iter()
    }

    /// Return an iterator of mutable references to the elements, in
    /// column-major order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, A> {
        self.as_slice_mut().iter_mut()
    }

    /// Perform *unchecked* array indexing.
    ///
    /// Return a reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget<I>(&self, index: I) -> &A
    where
        I: NdIndex,
    {
        debug_assert!(index.index_checked(&self.shape).is_some());
        &*self.ptr.add(index.index_unchecked(&self.shape))
    }

    /// Perform *unchecked* array indexing.
    ///
    /// Return a mutable reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget_mut<I>(&mut self, index: I) -> &mut A
    where
        I: NdIndex,
    {
        debug_assert!(index.index_checked(&self.shape).is_some());
        &mut *self.ptr.add(index.index_unchecked(&self.shape))
    }

    /// Change the shape metadata in place.
    ///
    /// The data pointer and ownership are untouched, and the new size is not
    /// compared with the old one. [`try_reshape`](ArrayView::try_reshape) is
    /// the safe, size-preserving variant.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let mut a = ArrayView::<i32>::zeros((100, 200));
    /// let ptr = a.as_ptr();
    /// unsafe { a.reshape((200, 100)) };
    /// assert_eq!(a.as_ptr(), ptr);
    /// assert_eq!(a.size(), 20000);
    /// ```
    ///
    /// **Panics** if the rank exceeds `MAX_RANK`.
    ///
    /// # Safety
    ///
    /// Unless the array is null, the new size must not exceed the number of
    /// elements the underlying buffer holds.
    pub unsafe fn reshape<Sh>(&mut self, shape: Sh)
    where
        Sh: IntoShape,
    {
        self.shape = shape.into_shape();
    }

    /// Release the owned buffer, if any; the array becomes `Null`.
    fn release(&mut self) {
        self.data = Storage::Borrowed;
        self.ptr = std::ptr::null_mut();
    }

    /// Point the array at `ptr`, keeping its shape. The array becomes a view.
    ///
    /// A buffer owned by the array is released first.
    ///
    /// # Safety
    ///
    /// As for [`from_shape_ptr`](ArrayView::from_shape_ptr): `ptr` must be
    /// valid for the current size for as long as the array is used.
    pub unsafe fn rebind(&mut self, ptr: *mut A) {
        self.release();
        self.ptr = ptr;
    }

    /// Point the array at `ptr` with shape `shape`. The array becomes a view.
    ///
    /// A buffer owned by the array is released first.
    ///
    /// # Safety
    ///
    /// As for [`from_shape_ptr`](ArrayView::from_shape_ptr).
    pub unsafe fn rebind_with_shape<Sh>(&mut self, shape: Sh, ptr: *mut A)
    where
        Sh: IntoShape,
    {
        self.release();
        self.ptr = ptr;
        self.shape = shape.into_shape();
    }

    /// Make the array an alias of `other`: same data, a copy of its shape.
    ///
    /// A buffer owned by the array is released first.
    ///
    /// # Safety
    ///
    /// As for [`alias`](ArrayView::alias).
    pub unsafe fn rebind_to(&mut self, other: &ArrayView<A>) {
        self.rebind_with_shape(other.shape, other.ptr);
    }

    /// Replace the data with a fresh zero-filled buffer of shape `shape`,
    /// owned by the array.
    ///
    /// A buffer owned by the array is released first; prior contents are
    /// discarded either way. Aliases of the released buffer are left
    /// dangling.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let mut a = ArrayView::from_elem(4, 7u8);
    /// a.reallocate((2, 3));
    /// assert_eq!(a.as_slice(), &[0; 6]);
    /// assert!(a.owns_data());
    /// ```
    ///
    /// **Panics** if the rank exceeds `MAX_RANK`.
    pub fn reallocate<Sh>(&mut self, shape: Sh)
    where
        A: Clone + Zero,
        Sh: IntoShape,
    {
        self.release();
        *self = Self::zeros(shape);
    }

    /// Make the array an independent owning copy of `other`: same shape,
    /// equal elements, fresh storage.
    ///
    /// ```
    /// use colarray::ArrayView;
    ///
    /// let a = ArrayView::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    /// let mut b = ArrayView::null();
    /// b.duplicate(&a);
    /// b[0] = 10;
    /// assert_eq!(a[0], 1);
    /// assert_eq!(b.extents(), a.extents());
    /// ```
    pub fn duplicate(&mut self, other: &ArrayView<A>)
    where
        A: Clone,
    {
        // copy before releasing: `other` may alias our own buffer
        let v = other.as_slice().to_vec();
        let shape = other.shape;
        self.release();
        *self = if other.is_null() {
            Self::null()
        } else {
            unsafe { Self::from_shape_vec_unchecked(shape, v) }
        };
    }

    /// Return an independent owning copy of the array.
    pub fn to_owned(&self) -> ArrayView<A>
    where
        A: Clone,
    {
        let mut copy = ArrayView::null();
        copy.duplicate(self);
        copy
    }

    /// Consume an owning array and return its buffer, or `None` for views
    /// and null arrays.
    pub fn into_vec(self) -> Option<Vec<A>> {
        match self.data {
            Storage::Owned(repr) => Some(repr.into_vec()),
            Storage::Borrowed => None,
        }
    }

    /// Set every element to `x`.
    pub fn fill(&mut self, x: A)
    where
        A: Clone,
    {
        for elt in self.iter_mut() {
            *elt = x.clone();
        }
    }

    /// Copy the elements of `rhs`, in column-major order, into `self`.
    ///
    /// Only element counts matter; the shapes are not compared. The
    /// elements are copied front to back, so `rhs` may overlap `self`.
    /// Only the common prefix of the two arrays is copied;
    /// [`try_assign`](ArrayView::try_assign) reports differing counts.
    pub fn assign(&mut self, rhs: &ArrayView<A>)
    where
        A: Clone,
    {
        debug_assert_eq!(self.size(), rhs.size());
        let n = cmp::min(self.as_slice().len(), rhs.as_slice().len());
        unsafe { self.assign_ptr_n(rhs.ptr, n) }
    }

    /// Copy `size` elements from the raw buffer `src` into `self`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `self.size()` elements.
    pub unsafe fn assign_ptr(&mut self, src: *const A)
    where
        A: Clone,
    {
        self.assign_ptr_n(src, self.size())
    }

    unsafe fn assign_ptr_n(&mut self, mut src: *const A, n: usize)
    where
        A: Clone,
    {
        let mut dst = self.ptr;
        for _ in 0..n {
            *dst.post_inc() = (*src.post_inc()).clone();
        }
    }

    /// Copy the elements of `rhs` into `self`, in column-major order.
    ///
    /// Only the common prefix is copied; see
    /// [`try_assign_slice`](ArrayView::try_assign_slice) for the checked
    /// variant.
    pub fn assign_slice(&mut self, rhs: &[A])
    where
        A: Clone,
    {
        debug_assert_eq!(self.size(), rhs.len());
        for (x, y) in self.iter_mut().zip(rhs) {
            *x = y.clone();
        }
    }
}
