use crate::{Session, ffi::*};

#[test]
fn round_trip() {
    let outer = [0, 0, 4, 0, 4, 4, 0, 4];
    let hole = [1, 1, 1, 3, 3, 3, 3, 1];

    let mut session = Session::new();
    session.add_ring(&outer).unwrap();
    session.add_ring(&hole).unwrap();
    session.triangulate().unwrap();

    unsafe {
        let ptr = earcut_new();
        assert!(!ptr.is_null());
        assert!(earcut_ring(ptr, outer.as_ptr(), outer.len()));
        assert!(earcut_ring(ptr, hole.as_ptr(), hole.len()));
        assert!(earcut_tesselate(ptr));

        let size = earcut_size(ptr);
        let data = std::slice::from_raw_parts(earcut_data(ptr), size);
        assert_eq!(data, session.indices());

        // Already triangulated
        assert!(!earcut_tesselate(ptr));
        assert!(!earcut_ring(ptr, outer.as_ptr(), outer.len()));

        earcut_delete(ptr);
    }
}

#[test]
fn invalid_arguments() {
    let coords = [0, 0, 1];
    unsafe {
        assert!(!earcut_ring(std::ptr::null_mut(), coords.as_ptr(), 2));
        assert!(!earcut_tesselate(std::ptr::null_mut()));
        assert!(earcut_data(std::ptr::null()).is_null());
        assert_eq!(earcut_size(std::ptr::null()), 0);
        earcut_delete(std::ptr::null_mut());

        let ptr = earcut_new();
        assert!(!earcut_ring(ptr, std::ptr::null(), 0));
        assert!(!earcut_ring(ptr, coords.as_ptr(), coords.len()));
        assert!(earcut_tesselate(ptr));
        assert_eq!(earcut_size(ptr), 0);
        earcut_delete(ptr);
    }
}
