#![allow(clippy::float_cmp)]

use colarray::prelude::*;
use defmac::defmac;

#[test]
fn zeros_3x4() {
    let a = ArrayView::<f64>::zeros((3, 4));
    assert_eq!(a.extent(0), 3);
    assert_eq!(a.extent(1), 4);
    assert_eq!(a.extent(2), 1);
    assert_eq!(a.rank(), 2);
    assert_eq!(a.size(), 12);
    assert_eq!(a.strides(), &[3]);
    assert!(a.iter().all(|&x| x == 0.));
    assert_eq!(a.state(), ArrayState::Owner);
}

#[test]
fn multi_and_linear_index() {
    let mut a = ArrayView::<f64>::zeros((3, 4));
    a[(2, 3)] = 10.;
    assert_eq!(a[(2, 3)], 10.);
    assert_eq!(a[11], 10.);

    a[5] = 1.;
    assert_eq!(a[(2, 1)], 1.);
    assert_eq!(a[[2, 1]], 1.);
}

#[test]
fn alias_shares_elements() {
    let mut a = ArrayView::<f64>::zeros((3, 4));
    let mut b = unsafe { a.alias() };
    assert_eq!(b.state(), ArrayState::View);
    assert_eq!(b.extents(), a.extents());
    b[0] = -1.;
    assert_eq!(a[0], -1.);
    a[(1, 1)] = 4.;
    assert_eq!(b[(1, 1)], 4.);
}

#[test]
fn view_over_column() {
    let mut a = ArrayView::<f64>::zeros((3, 4));
    let mut c = unsafe { ArrayView::from_shape_ptr(3, &mut a[(0, 2)] as *mut f64) };
    c[1] = -2.;
    assert_eq!(a[(1, 2)], -2.);
    assert!(!c.owns_data());
}

#[test]
fn reallocate_then_reshape() {
    let mut a = ArrayView::<f32>::null();
    a.reallocate((100, 200));
    assert_eq!(a.size(), 20000);
    let ptr = a.as_ptr();
    unsafe { a.reshape((200, 100)) };
    assert_eq!(a.as_ptr(), ptr);
    assert_eq!(a.size(), 20000);
    assert_eq!(a.extents(), &[200, 100]);
    assert_eq!(a.strides(), &[200]);
}

#[test]
fn null_array() {
    let e = ArrayView::<f64>::null();
    assert!(e.is_null());
    assert!(e.is_empty());
    assert_eq!(e.rank(), 0);
    assert_eq!(e.state(), ArrayState::Null);
    assert!(!e.owns_data());
    assert_eq!(e, ArrayView::<f64>::default());
    assert_ne!(e, ArrayView::<f64>::zeros(()));
}

#[test]
fn rank_zero_is_scalar() {
    let mut s = ArrayView::from_elem((), 2.5);
    assert_eq!(s.rank(), 0);
    assert_eq!(s.size(), 1);
    assert!(s.strides().is_empty());
    assert_eq!(s[()], 2.5);
    s[0] = 3.;
    assert_eq!(s.as_slice(), &[3.]);
}

#[test]
fn extents_of_every_rank() {
    defmac!(check shape, extents, size => {
        let a = ArrayView::<u8>::zeros(shape);
        assert_eq!(a.extents(), &extents[..]);
        assert_eq!(a.size(), size);
        assert_eq!(a.as_slice().len(), size);
    });
    check!(4, [4], 4);
    check!((4, 2), [4, 2], 8);
    check!((4, 2, 3), [4, 2, 3], 24);
    check!((1, 2, 3, 4), [1, 2, 3, 4], 24);
    check!((2, 1, 2, 1, 2), [2, 1, 2, 1, 2], 8);
    check!((2, 2, 2, 2, 2, 2), [2; 6], 64);
    check!([3, 0, 2], [3, 0, 2], 0);
}

#[test]
fn strides_are_column_major() {
    let a = ArrayView::<i8>::zeros((2, 3, 4, 5));
    assert_eq!(a.strides(), &[2, 6, 24]);
    let b = ArrayView::from_shape_vec((2, 3, 4), (0..24).collect()).unwrap();
    for k in 0..4 {
        for j in 0..3 {
            for i in 0..2 {
                assert_eq!(b[(i, j, k)], i + 2 * j + 6 * k);
            }
        }
    }
}

#[test]
#[should_panic]
fn index_out_of_bounds_panics() {
    let a = ArrayView::<f64>::zeros((2, 3));
    let _ = a[6];
}

#[test]
#[should_panic]
fn multi_index_out_of_bounds_panics() {
    let mut a = ArrayView::<f64>::zeros((2, 3));
    a[(2, 0)] = 1.;
}

#[test]
#[should_panic]
fn index_null_panics() {
    let a = ArrayView::<i32>::null();
    let _ = a[()];
}

#[test]
#[should_panic]
fn rank_seven_panics() {
    let _ = ArrayView::<u8>::zeros(&[1, 1, 1, 1, 1, 1, 1][..]);
}

#[test]
fn from_vec_is_rank_one() {
    let a = ArrayView::from(vec![1, 2, 3]);
    assert_eq!(a.extents(), &[3]);
    assert!(a.owns_data());
    assert_eq!(a.into_vec(), Some(vec![1, 2, 3]));
}

#[test]
fn wrap_slice() {
    let mut data = [1., 2., 3., 4., 5., 6.];
    {
        let mut v = unsafe { ArrayView::from_slice_mut((2, 3), &mut data).unwrap() };
        assert_eq!(v[(1, 2)], 6.);
        v[(0, 1)] = 0.;
    }
    assert_eq!(data[2], 0.);
}

#[test]
fn to_owned_is_independent() {
    let a = ArrayView::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    let mut b = a.to_owned();
    assert_eq!(a, b);
    assert_ne!(a.as_ptr(), b.as_ptr());
    b[(1, 1)] = 0;
    assert_eq!(a[(1, 1)], 4);
}

#[test]
fn iterate_column_major() {
    let a = ArrayView::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    let v: Vec<i32> = (&a).into_iter().copied().collect();
    assert_eq!(v, [1, 2, 3, 4]);
    let mut b = a.to_owned();
    for x in &mut b {
        *x *= 10;
    }
    assert_eq!(b.as_slice(), &[10, 20, 30, 40]);
}

#[test]
fn format() {
    let a = ArrayView::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(format!("{}", a), "[[1, 2], [3, 4]]");
    assert!(format!("{:?}", a).ends_with("state=Owner"));
}
