// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::mem::{self, ManuallyDrop};
use std::ptr::NonNull;

/// A heap buffer released exactly once, when the representation is dropped.
///
/// Like a `Vec`, but without a way to grow it: the element pointer handed
/// out by `as_ptr_mut` stays valid for the whole life of the representation.
#[derive(Debug)]
pub(crate) struct OwnedRepr<A> {
    ptr: NonNull<A>,
    len: usize,
    capacity: usize,
}

impl<A> OwnedRepr<A> {
    pub(crate) fn from(v: Vec<A>) -> Self {
        let mut v = ManuallyDrop::new(v);
        let len = v.len();
        let capacity = v.capacity();
        // this pointer is guaranteed to be non-null, dangling when empty
        let ptr = unsafe { NonNull::new_unchecked(v.as_mut_ptr()) };
        Self { ptr, len, capacity }
    }

    pub(crate) fn into_vec(self) -> Vec<A> {
        ManuallyDrop::new(self).take_as_vec()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn as_ptr_mut(&self) -> *mut A {
        self.ptr.as_ptr()
    }

    fn take_as_vec(&mut self) -> Vec<A> {
        let capacity = self.capacity;
        let len = self.len;
        self.len = 0;
        self.capacity = 0;
        unsafe { Vec::from_raw_parts(self.ptr.as_ptr(), len, capacity) }
    }
}

impl<A> Drop for OwnedRepr<A> {
    fn drop(&mut self) {
        if self.capacity > 0 {
            // Elements without drop glue need no per-element pass, only the
            // allocation itself is returned.
            if !mem::needs_drop::<A>() {
                self.len = 0;
            }
            // drop as a Vec.
            self.take_as_vec();
        }
    }
}

/// Who is responsible for releasing an array's buffer.
#[derive(Debug)]
pub(crate) enum Storage<A> {
    /// The buffer (if any) belongs to someone else.
    Borrowed,
    /// The buffer was allocated by this array.
    Owned(OwnedRepr<A>),
}

impl<A> Storage<A> {
    #[inline]
    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Storage::Owned(_))
    }
}

/// The lifecycle state of an [`ArrayView`](crate::ArrayView).
///
/// | from           | operation                                   | to      |
/// |----------------|---------------------------------------------|---------|
/// | `Null`         | `zeros`, `reallocate`                       | `Owner` |
/// | `Null`         | `from_shape_ptr`, `alias`                   | `View`  |
/// | `Owner`        | `reallocate`                                | `Owner` |
/// | `Owner`/`View` | `rebind`, `rebind_with_shape`               | `View`  |
///
/// Dropping an array releases its buffer only in the `Owner` state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrayState {
    /// No buffer at all.
    Null,
    /// The buffer is borrowed from elsewhere.
    View,
    /// The buffer is owned and released by this array.
    Owner,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn drops_elements_once() {
        let drops = Rc::new(Cell::new(0));
        let v: Vec<_> = (0..4).map(|_| Counted(drops.clone())).collect();
        let repr = OwnedRepr::from(v);
        assert_eq!(repr.len(), 4);
        drop(repr);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn into_vec_keeps_elements() {
        let repr = OwnedRepr::from(vec![1, 2, 3]);
        let ptr = repr.as_ptr_mut();
        let v = repr.into_vec();
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.as_ptr(), ptr as *const i32);
    }

    #[test]
    fn empty_buffer_is_not_null() {
        let repr = OwnedRepr::<f64>::from(Vec::new());
        assert!(!repr.as_ptr_mut().is_null());
        assert_eq!(repr.len(), 0);
    }
}
