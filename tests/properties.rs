use colarray::{ArrayView, Ix};
use itertools::Itertools;
use quickcheck::quickcheck;

/// Map arbitrary bytes to a small shape of rank at most six.
fn small_extents(dims: Vec<u8>) -> Vec<Ix> {
    dims.into_iter().take(6).map(|d| (d % 5) as Ix).collect()
}

quickcheck! {
    fn size_is_product_of_extents(dims: Vec<u8>) -> bool {
        let extents = small_extents(dims);
        let a = ArrayView::<f32>::try_zeros(&extents).unwrap();
        a.size() == extents.iter().product::<Ix>()
            && a.extents() == &extents[..]
            && a.iter().all(|&x| x == 0.)
    }

    fn strides_are_running_products(dims: Vec<u8>) -> bool {
        let extents = small_extents(dims);
        let a = ArrayView::<u8>::try_zeros(&extents).unwrap();
        let expected = extents
            .iter()
            .scan(1, |acc, &e| {
                *acc *= e;
                Some(*acc)
            })
            .take(extents.len().saturating_sub(1))
            .collect_vec();
        a.strides() == &expected[..]
    }

    fn linear_and_multi_index_agree(i: u8, j: u8, k: u8) -> bool {
        let a = ArrayView::from_shape_vec((4, 3, 2), (0..24).collect_vec()).unwrap();
        let (i, j, k) = ((i % 4) as Ix, (j % 3) as Ix, (k % 2) as Ix);
        a[(i, j, k)] == a[i + 4 * j + 12 * k]
    }

    fn reallocate_zero_fills(values: Vec<i64>, dims: Vec<u8>) -> bool {
        let mut a = ArrayView::from(values);
        let extents = small_extents(dims);
        a.try_reallocate(&extents).unwrap();
        a.owns_data() && a.iter().all(|&x| x == 0)
    }

    fn reshape_keeps_data(values: Vec<i32>) -> bool {
        let n = values.len();
        let mut a = ArrayView::from(values.clone());
        let ptr = a.as_ptr();
        unsafe { a.reshape((1, n, 1)) };
        a.as_ptr() == ptr && a.size() == n && a.as_slice() == &values[..]
    }

    fn duplicate_is_independent(values: Vec<i32>) -> bool {
        let a = ArrayView::from(values.clone());
        let mut b = ArrayView::null();
        b.duplicate(&a);
        b.map_inplace(|x| x.wrapping_add(1));
        a.as_slice() == &values[..] && b.extents() == a.extents()
    }

    fn sorted_is_ordered_permutation(values: Vec<i16>) -> bool {
        let mut a = ArrayView::from(values.clone());
        a.sort();
        a.iter().tuple_windows().all(|(x, y)| x <= y)
            && a.iter().copied().sorted().eq(values.into_iter().sorted())
    }

    fn min_max_bound_every_element(values: Vec<i32>) -> bool {
        let a = ArrayView::from(values);
        match (a.min(), a.max()) {
            (Some(lo), Some(hi)) => a.iter().all(|&x| lo <= x && x <= hi),
            (None, None) => a.is_empty(),
            _ => false,
        }
    }
}
