// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exchange of array buffers with foreign code.
//!
//! A [`ForeignBuffer`] describes memory managed outside Rust (by another
//! language runtime, a C library …): data pointer, element kind, extents and
//! optional byte strides. Importing validates the description and reports
//! problems as [`ImportError`] values, since the description comes from code
//! we cannot trust.
use std::error::Error;
use std::ffi::c_void;
use std::fmt;
use std::mem::{align_of, size_of};

use crate::{ArrayView, Ix, Shape, MAX_RANK};

/// The element kind tag of a foreign buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Bool,
    F32,
    F64,
    I32,
    I64,
    U64,
}

impl ElementKind {
    /// Return the size of one element in bytes.
    pub fn size(self) -> usize {
        match self {
            ElementKind::Bool => size_of::<bool>(),
            ElementKind::F32 => size_of::<f32>(),
            ElementKind::F64 => size_of::<f64>(),
            ElementKind::I32 => size_of::<i32>(),
            ElementKind::I64 => size_of::<i64>(),
            ElementKind::U64 => size_of::<u64>(),
        }
    }
}

/// Element types that can cross the foreign buffer boundary.
///
/// # Safety
///
/// `KIND` must describe the in-memory representation of `Self` exactly.
pub unsafe trait Element: Sized {
    const KIND: ElementKind;
}

unsafe impl Element for bool {
    const KIND: ElementKind = ElementKind::Bool;
}
unsafe impl Element for f32 {
    const KIND: ElementKind = ElementKind::F32;
}
unsafe impl Element for f64 {
    const KIND: ElementKind = ElementKind::F64;
}
unsafe impl Element for i32 {
    const KIND: ElementKind = ElementKind::I32;
}
unsafe impl Element for i64 {
    const KIND: ElementKind = ElementKind::I64;
}
unsafe impl Element for u64 {
    const KIND: ElementKind = ElementKind::U64;
}

/// Description of an array buffer owned by foreign code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForeignBuffer {
    /// Address of the first element; null stands for "no array".
    pub data: *mut c_void,
    /// The element kind stored at `data`.
    pub kind: ElementKind,
    /// One extent per dimension.
    pub extents: Vec<isize>,
    /// Byte strides, one per dimension; `None` means contiguous in
    /// column-major order.
    pub strides: Option<Vec<isize>>,
}

/// An error importing a [`ForeignBuffer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportError {
    /// the buffer's element kind is not the requested one
    ElementKindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
    /// the buffer has more dimensions than `MAX_RANK`
    RankTooLarge(usize),
    /// an extent is negative
    NegativeExtent(Box<[isize]>),
    /// the element count or the byte size of the buffer overflows `isize`
    SizeOverflow(Box<[isize]>),
    /// the data pointer is not aligned for the element type
    Misaligned { addr: usize, align: usize },
    /// the strides do not describe a contiguous column-major layout
    NotContiguous {
        extents: Box<[isize]>,
        strides: Box<[isize]>,
    },
}

impl Error for ImportError {}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ImportError::ElementKindMismatch { expected, found } => {
                write!(f, "element kind mismatch: expected {:?}, found {:?}", expected, found)
            }
            ImportError::RankTooLarge(rank) => {
                write!(f, "rank {} exceeds the maximum rank {}", rank, MAX_RANK)
            }
            ImportError::NegativeExtent(ref extents) => {
                write!(f, "negative extent in shape {:?}", extents)
            }
            ImportError::SizeOverflow(ref extents) => {
                write!(f, "buffer size overflows isize for shape {:?}", extents)
            }
            ImportError::Misaligned { addr, align } => {
                write!(f, "data address {:#x} is not aligned to {} bytes", addr, align)
            }
            ImportError::NotContiguous { ref extents, ref strides } => {
                write!(
                    f,
                    "buffer is not contiguous in column-major order: extents {:?}, strides {:?}",
                    extents, strides
                )
            }
        }
    }
}

/// Return the column-major byte strides of a contiguous buffer.
fn fortran_byte_strides(extents: &[Ix], elem_size: usize) -> Vec<isize> {
    let mut stride = elem_size;
    extents
        .iter()
        .map(|&extent| {
            let s = stride as isize;
            stride *= extent;
            s
        })
        .collect()
}

impl ForeignBuffer {
    fn check_contiguous(&self, shape: &Shape) -> Result<(), ImportError> {
        let strides = match self.strides {
            None => return Ok(()),
            Some(ref strides) => strides,
        };
        // an empty buffer is contiguous whatever its strides say
        if shape.size() == 0 {
            return Ok(());
        }
        let extents = shape.extents();
        let expected = fortran_byte_strides(extents, self.kind.size());
        let contiguous = strides.len() == extents.len()
            && strides
                .iter()
                .zip(&expected)
                .zip(extents)
                // the stride of a dimension of extent 1 is never used
                .all(|((&s, &e), &extent)| extent <= 1 || s == e);
        if contiguous {
            Ok(())
        } else {
            Err(ImportError::NotContiguous {
                extents: self.extents.clone().into_boxed_slice(),
                strides: strides.clone().into_boxed_slice(),
            })
        }
    }

    /// Validate the description against element type `A`, returning the
    /// shape to import it with.
    fn validate<A: Element>(&self) -> Result<Shape, ImportError> {
        if self.kind != A::KIND {
            return Err(ImportError::ElementKindMismatch {
                expected: A::KIND,
                found: self.kind,
            });
        }
        if self.extents.len() > MAX_RANK {
            return Err(ImportError::RankTooLarge(self.extents.len()));
        }
        if self.extents.iter().any(|&e| e < 0) {
            return Err(ImportError::NegativeExtent(self.extents.clone().into_boxed_slice()));
        }
        let extents: Vec<Ix> = self.extents.iter().map(|&e| e as Ix).collect();
        let size_overflow = || ImportError::SizeOverflow(self.extents.clone().into_boxed_slice());
        let shape = Shape::try_from_extents(&extents).map_err(|_| size_overflow())?;
        match shape.size().checked_mul(size_of::<A>()) {
            Some(bytes) if bytes <= isize::MAX as usize => {}
            _ => return Err(size_overflow()),
        }
        let addr = self.data as usize;
        if addr % align_of::<A>() != 0 {
            return Err(ImportError::Misaligned {
                addr,
                align: align_of::<A>(),
            });
        }
        self.check_contiguous(&shape)?;
        Ok(shape)
    }
}

/// # Foreign Buffer Exchange
impl<A> ArrayView<A>
where
    A: Element,
{
    /// Create a view of a foreign buffer.
    ///
    /// A null data pointer imports as the null array, whatever the rest of
    /// the description says.
    ///
    /// **Errors** if the element kind is not `A`'s, the rank exceeds
    /// `MAX_RANK`, an extent is negative, the size overflows `isize`, the
    /// data pointer is misaligned for `A`, or the strides are not those of a
    /// contiguous column-major buffer. Empty buffers are contiguous.
    ///
    /// # Safety
    ///
    /// `buffer.data` must be valid for reads and writes of every element
    /// the description covers, for as long as the view is used.
    ///
    /// ```
    /// use colarray::{ArrayView, ElementKind, ForeignBuffer};
    ///
    /// let mut data = [1., 2., 3., 4., 5., 6.];
    /// let buffer = ForeignBuffer {
    ///     data: data.as_mut_ptr().cast(),
    ///     kind: ElementKind::F64,
    ///     extents: vec![3, 2],
    ///     strides: Some(vec![8, 24]),
    /// };
    /// let a = unsafe { ArrayView::<f64>::from_foreign(&buffer).unwrap() };
    /// assert_eq!(a[(1, 1)], 5.);
    /// assert!(!a.owns_data());
    /// ```
    pub unsafe fn from_foreign(buffer: &ForeignBuffer) -> Result<Self, ImportError> {
        if buffer.data.is_null() {
            return Ok(Self::null());
        }
        let shape = buffer.validate::<A>()?;
        Ok(Self::from_shape_ptr(shape, buffer.data.cast::<A>()))
    }

    /// Describe this array for foreign code: data pointer, element kind,
    /// extents and column-major byte strides.
    ///
    /// The description borrows the data; it is invalidated with the array's
    /// buffer.
    pub fn to_foreign(&self) -> ForeignBuffer {
        ForeignBuffer {
            data: self.ptr.cast::<c_void>(),
            kind: A::KIND,
            extents: self.extents().iter().map(|&e| e as isize).collect(),
            strides: Some(fortran_byte_strides(self.extents(), size_of::<A>())),
        }
    }
}
