//! C ABI over [Session](crate::Session).
//!
//! Every function accepts a null session pointer and reports failure instead of
//! dereferencing it. Coordinate buffers passed to [earcut_ring] are borrowed until the
//! session is deleted.

use std::{ptr, slice};

use crate::Session;

/// Opaque handle passed to C.
pub struct EarcutSession {
    session: Session<'static>,
}

/// Creates an empty session. Release it with [earcut_delete].
#[no_mangle]
pub extern "C" fn earcut_new() -> *mut EarcutSession {
    Box::into_raw(Box::new(EarcutSession { session: Session::new() }))
}

/// Releases a session created by [earcut_new]. Null is ignored.
///
/// # Safety
/// `session` must be null or a pointer returned by [earcut_new] which has not been deleted yet.
#[no_mangle]
pub unsafe extern "C" fn earcut_delete(session: *mut EarcutSession) {
    if session.is_null() {
        return;
    }
    let session = Box::from_raw(session);
    session.session.close();
}

/// Adds a ring of `count` `i32` values (`x0, y0, x1, y1, ...`). Returns `false` for a null
/// pointer, an odd `count` or a session which was already triangulated.
///
/// # Safety
/// `session` must be null or a live pointer from [earcut_new]. `coords` must point to `count`
/// readable `i32` values which stay valid and unchanged until the session is deleted.
#[no_mangle]
pub unsafe extern "C" fn earcut_ring(session: *mut EarcutSession, coords: *const i32, count: usize) -> bool {
    let session = match session.as_mut() {
        Some(session) => session,
        None => return false,
    };
    if coords.is_null() {
        return false;
    }

    let coords: &'static [i32] = slice::from_raw_parts(coords, count);
    match session.session.add_ring(coords) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("earcut_ring: {}", err);
            false
        }
    }
}

/// Triangulates the session's rings. Returns `false` for a null pointer or a session which
/// was already triangulated.
///
/// # Safety
/// `session` must be null or a live pointer from [earcut_new], and every ring buffer added to
/// it must still be valid.
#[no_mangle]
pub unsafe extern "C" fn earcut_tesselate(session: *mut EarcutSession) -> bool {
    let session = match session.as_mut() {
        Some(session) => session,
        None => return false,
    };

    match session.session.triangulate() {
        Ok(()) => true,
        Err(err) => {
            log::warn!("earcut_tesselate: {}", err);
            false
        }
    }
}

/// The index buffer, valid until the session is deleted. Null for a null session.
///
/// # Safety
/// `session` must be null or a live pointer from [earcut_new].
#[no_mangle]
pub unsafe extern "C" fn earcut_data(session: *const EarcutSession) -> *const u32 {
    match session.as_ref() {
        Some(session) => session.session.indices().as_ptr(),
        None => ptr::null(),
    }
}

/// The number of indices in the buffer returned by [earcut_data]; `0` for a null session.
///
/// # Safety
/// `session` must be null or a live pointer from [earcut_new].
#[no_mangle]
pub unsafe extern "C" fn earcut_size(session: *const EarcutSession) -> usize {
    match session.as_ref() {
        Some(session) => session.session.index_count(),
        None => 0,
    }
}
