use colarray::{ArrayView, ElementKind, ForeignBuffer, ImportError};

#[test]
fn import_writes_through() {
    let mut data = vec![0f32; 12];
    let buffer = ForeignBuffer {
        data: data.as_mut_ptr().cast(),
        kind: ElementKind::F32,
        extents: vec![3, 4],
        strides: None,
    };
    {
        let mut a = unsafe { ArrayView::<f32>::from_foreign(&buffer).unwrap() };
        assert_eq!(a.extents(), &[3, 4]);
        assert!(!a.owns_data());
        a[(2, 3)] = 10.;
    }
    assert_eq!(data[11], 10.);
}

#[test]
fn export_describes_layout() {
    let a = ArrayView::<f64>::zeros((2, 1, 3));
    let buffer = a.to_foreign();
    assert_eq!(buffer.kind, ElementKind::F64);
    assert_eq!(buffer.extents, vec![2, 1, 3]);
    assert_eq!(buffer.strides, Some(vec![8, 16, 16]));
    assert_eq!(buffer.data as *const f64, a.as_ptr());
}

#[test]
fn reject_mismatch() {
    let a = ArrayView::<i64>::zeros(4);
    let buffer = a.to_foreign();
    let err = unsafe { ArrayView::<u64>::from_foreign(&buffer) }.unwrap_err();
    assert_eq!(
        err,
        ImportError::ElementKindMismatch {
            expected: ElementKind::U64,
            found: ElementKind::I64,
        }
    );
}
