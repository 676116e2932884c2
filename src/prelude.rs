// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! colarray prelude.
//!
//! This module contains the most used types and traits that you can import
//! easily as a group.
//!
//! ```
//! use colarray::prelude::*;
//!
//! # let _ = ArrayView::<f64>::zeros((2, 2));
//! ```

#[doc(no_inline)]
pub use crate::ArrayView;

#[doc(no_inline)]
pub use crate::{ArrayState, Ix, Shape, MAX_RANK};

#[doc(no_inline)]
pub use crate::{ArrayError, ErrorKind};

#[doc(no_inline)]
pub use crate::{IntoShape, NdIndex, ScalarOperand};

#[doc(no_inline)]
pub use crate::numeric::MaybeNan;
