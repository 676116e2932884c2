#![allow(clippy::float_cmp)]

use colarray::{ArrayView, Ix};

fn test_oper(op: &str, a: &[f32], b: &[f32], c: &[f32]) {
    test_oper_arr(op, a, b, c, [4]);
    test_oper_arr(op, a, b, c, [2, 2]);
    test_oper_arr(op, a, b, c, [1, 2, 1, 2]);
}

fn test_oper_arr<const N: usize>(op: &str, a: &[f32], b: &[f32], c: &[f32], shape: [Ix; N]) {
    let mut aa = ArrayView::from_shape_vec(shape, a.to_vec()).unwrap();
    let bb = ArrayView::from_shape_vec(shape, b.to_vec()).unwrap();
    let cc = ArrayView::from_shape_vec(shape, c.to_vec()).unwrap();
    let mut ss = aa.to_owned();
    match op {
        "+" => {
            aa += &bb;
            ss += b;
        }
        "-" => {
            aa -= &bb;
            ss -= b;
        }
        "*" => {
            aa *= &bb;
            ss *= b;
        }
        "/" => {
            aa /= &bb;
            ss /= b;
        }
        _ => panic!(),
    }
    assert_eq!(aa, cc);
    assert_eq!(ss, cc);
}

#[test]
fn operations() {
    test_oper("+", &[1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]);
    test_oper("-", &[1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 2.0, 3.0], &[1.0, 1.0, 1.0, 1.0]);
    test_oper("*", &[1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 6.0, 12.0]);
    test_oper("/", &[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 1.5, 4.0 / 3.0]);
}

fn column() -> ArrayView<i32> {
    ArrayView::from_shape_vec((3, 1), vec![2, 4, 6]).unwrap()
}

#[test]
fn scalar_operand() {
    let mut a = column();
    a += 1;
    assert_eq!(a.as_slice(), &[3, 5, 7]);
    let mut a = column();
    a -= 1;
    assert_eq!(a.as_slice(), &[1, 3, 5]);
    let mut a = column();
    a *= 3;
    assert_eq!(a.as_slice(), &[6, 12, 18]);
    let mut a = column();
    a /= 2;
    assert_eq!(a.as_slice(), &[1, 2, 3]);
}

#[test]
fn compound_op_applies_once_per_element() {
    let mut a = ArrayView::from_elem((4, 5), 1u64);
    a *= 2;
    a += 1;
    assert!(a.iter().all(|&x| x == 3));

    let mut calls = 0;
    let b = ArrayView::from_elem((4, 5), 1u64);
    a.zip_mut_with(&b, |x, y| {
        calls += 1;
        x - y
    });
    assert_eq!(calls, 20);
    assert!(a.iter().all(|&x| x == 2));
}

#[test]
fn shapes_are_ignored() {
    // only the element sequence matters on the unchecked path
    let mut a = ArrayView::from_shape_vec((2, 3), vec![1; 6]).unwrap();
    let b = ArrayView::from_shape_vec((3, 2), vec![1, 2, 3, 4, 5, 6]).unwrap();
    a += &b;
    assert_eq!(a.as_slice(), &[2, 3, 4, 5, 6, 7]);
}

#[test]
fn self_operand() {
    let mut a = ArrayView::from(vec![1.5f64, -2.0, 4.0]);
    let b = unsafe { a.alias() };
    a -= &b;
    assert!(a.iter().all(|&x| x == 0.));

    let mut c = ArrayView::from(vec![3, 4]);
    let d = unsafe { c.alias() };
    c *= &d;
    assert_eq!(c.as_slice(), &[9, 16]);
}

#[test]
fn assign_copies_elements() {
    let mut a = ArrayView::<f64>::zeros((2, 2));
    let b = ArrayView::from_shape_vec(4, vec![1., 2., 3., 4.]).unwrap();
    a.assign(&b);
    assert_eq!(a[(1, 1)], 4.);
    assert_eq!(a.extents(), &[2, 2]);
    a.assign_slice(&[5., 6., 7., 8.]);
    assert_eq!(a[(0, 1)], 7.);
    let src = [0.5; 4];
    unsafe { a.assign_ptr(src.as_ptr()) };
    assert_eq!(a.as_slice(), &src);
}

#[test]
fn negate() {
    let mut a = ArrayView::from_shape_vec((1, 3), vec![1, -2, 0]).unwrap();
    a.negate();
    assert_eq!(a.as_slice(), &[-1, 2, 0]);
}
