// Copyright 2024 colarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::ArrayView;

/// Write the elements of dimensions `0..=dim` starting at `offset`, nested
/// so that the innermost brackets hold a run along dimension 0.
fn format_dim<A, F>(
    view: &ArrayView<A>,
    dim: usize,
    offset: usize,
    f: &mut fmt::Formatter<'_>,
    format: &mut F,
) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let stride = if dim == 0 { 1 } else { view.strides()[dim - 1] };
    f.write_str("[")?;
    for i in 0..view.extent(dim) {
        if i > 0 {
            f.write_str(", ")?;
        }
        let elt_offset = offset + i * stride;
        if dim == 0 {
            format(&view.as_slice()[elt_offset], f)?;
        } else {
            format_dim(view, dim - 1, elt_offset, f, format)?;
        }
    }
    f.write_str("]")
}

fn format_array<A, F>(view: &ArrayView<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    if view.is_null() {
        return f.write_str("null");
    }
    match view.rank() {
        0 => format(&view.as_slice()[0], f),
        rank => format_dim(view, rank - 1, 0, f, &mut format),
    }
}

/// Format the array using `Display` and apply the formatting parameters
/// used to each element.
///
/// Brackets nest from the last dimension outward, so each innermost list
/// is one contiguous run along dimension 0 (a column of a matrix).
///
/// ```
/// use colarray::ArrayView;
///
/// let a = ArrayView::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(a.to_string(), "[[1, 2], [3, 4], [5, 6]]");
/// ```
impl<A: fmt::Display> fmt::Display for ArrayView<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element, followed by the shape, strides and ownership state.
impl<A: fmt::Debug> fmt::Debug for ArrayView<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)?;
        write!(
            f,
            ", shape={:?}, strides={:?}, state={:?}",
            self.extents(),
            self.strides(),
            self.state()
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::ArrayView;

    #[test]
    fn display_ranks() {
        assert_eq!(ArrayView::from_elem((), 2.5).to_string(), "2.5");
        assert_eq!(ArrayView::from(vec![1, 2]).to_string(), "[1, 2]");
        let a = ArrayView::from_shape_vec((2, 1, 2), vec![1, 2, 3, 4]).unwrap();
        assert_eq!(a.to_string(), "[[[1, 2]], [[3, 4]]]");
        assert_eq!(ArrayView::<u8>::null().to_string(), "null");
        assert_eq!(ArrayView::<u8>::zeros((0, 2)).to_string(), "[[], []]");
    }

    #[test]
    fn element_format_parameters() {
        let a = ArrayView::from(vec![1.0, 0.25]);
        assert_eq!(format!("{:.2}", a), "[1.00, 0.25]");
    }

    #[test]
    fn debug_shows_metadata() {
        let a = ArrayView::<i32>::zeros((2, 2));
        assert_eq!(
            format!("{:?}", a),
            "[[0, 0], [0, 0]], shape=[2, 2], strides=[2], state=Owner"
        );
    }
}
