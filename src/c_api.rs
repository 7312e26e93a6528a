// File: src/c_api.rs
// C entry points for host firmware. Each call takes an opaque handle from
// `chronocode_watchface_new` and is wrapped in catch_unwind so a panic never
// crosses the FFI boundary.
use crate::core::engine::{BuiltinPacks, WatchFace};
use crate::core::types::LanguageId;
use crate::settings::Settings;
use std::ffi::{c_char, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

/// One resolved time, laid out for C.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChronoFrame {
    /// Bit `n` set means word `n` is lit.
    pub active_mask: u64,
    pub display_hour: u8,
    pub minute_offset: u8,
}

/// Creates a watchface for `language` with the given settings flag byte.
/// Unknown languages fall back to en_US. Returns null only if creation panicked.
#[no_mangle]
pub extern "C" fn chronocode_watchface_new(language: u8, flags: u8) -> *mut WatchFace {
    let result = catch_unwind(|| {
        let language = LanguageId::from_u8(language).unwrap_or_default();
        let face = WatchFace::new(Settings::from_flags(flags, language), &BuiltinPacks);
        Box::into_raw(Box::new(face))
    });
    result.unwrap_or_else(|_| {
        tracing::error!("panic while creating watchface");
        ptr::null_mut()
    })
}

/// # Safety
/// `face` must come from `chronocode_watchface_new` and not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn chronocode_watchface_free(face: *mut WatchFace) {
    if !face.is_null() {
        drop(Box::from_raw(face));
    }
}

/// Switches language. Returns 0 on success, -1 if the language was rejected
/// (the face then shows en_US), -2 on a bad handle or panic.
///
/// # Safety
/// `face` must be null or a live handle from `chronocode_watchface_new`.
#[no_mangle]
pub unsafe extern "C" fn chronocode_watchface_set_language(face: *mut WatchFace, language: u8) -> i32 {
    let Some(face) = face.as_mut() else {
        return -2;
    };
    let result = catch_unwind(AssertUnwindSafe(|| match LanguageId::from_u8(language) {
        Ok(id) => face.set_language(id, &BuiltinPacks).map_or(-1, |_| 0),
        Err(_) => {
            let _ = face.set_language(LanguageId::default(), &BuiltinPacks);
            -1
        }
    }));
    result.unwrap_or(-2)
}

/// Resolves `hour`:`minute` into `out`. Returns false on a bad pointer or panic.
///
/// # Safety
/// `face` must be null or a live handle; `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn chronocode_watchface_resolve(
    face: *const WatchFace,
    hour: u8,
    minute: u8,
    out: *mut ChronoFrame,
) -> bool {
    let (Some(face), Some(out)) = (face.as_ref(), out.as_mut()) else {
        return false;
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let resolved = face.resolve(hour, minute);
        ChronoFrame {
            active_mask: resolved.active.bits(),
            display_hour: resolved.display_hour,
            minute_offset: resolved.minute_offset,
        }
    }));
    match result {
        Ok(frame) => {
            *out = frame;
            true
        }
        Err(_) => false,
    }
}

/// Resolves to a JSON object (`active`, `display_hour`, `minute_offset`,
/// `bucket`). Free the result with `chronocode_free_string`. Returns null on
/// a bad handle or panic.
///
/// # Safety
/// `face` must be null or a live handle from `chronocode_watchface_new`.
#[no_mangle]
pub unsafe extern "C" fn chronocode_watchface_resolve_json(
    face: *const WatchFace,
    hour: u8,
    minute: u8,
) -> *mut c_char {
    let Some(face) = face.as_ref() else {
        return ptr::null_mut();
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let resolved = face.resolve(hour, minute);
        serde_json::to_string(&resolved).unwrap_or_else(|_| "{}".to_string())
    }));
    match result.ok().and_then(|json| CString::new(json).ok()) {
        Some(json) => json.into_raw(),
        None => ptr::null_mut(),
    }
}

/// # Safety
/// `s` must be null or a string returned by this library.
#[no_mangle]
pub unsafe extern "C" fn chronocode_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ALL_CAPS;
    use std::ffi::CStr;

    #[test]
    fn handle_lifecycle() {
        let face = chronocode_watchface_new(LanguageId::EnUs as u8, ALL_CAPS);
        assert!(!face.is_null());
        unsafe {
            let mut frame = ChronoFrame::default();
            assert!(chronocode_watchface_resolve(face, 15, 3, &mut frame));
            assert_eq!(frame.display_hour, 3);
            assert_eq!(frame.minute_offset, 3);
            // IT IS THREE OCLOCK
            assert_eq!(frame.active_mask, (1 << 13) | (1 << 14) | (1 << 3) | (1 << 23));

            assert_eq!(chronocode_watchface_set_language(face, LanguageId::DeDe as u8), 0);
            assert_eq!(chronocode_watchface_set_language(face, 77), -1);
            assert!(chronocode_watchface_resolve(face, 15, 3, &mut frame));
            assert_ne!(frame.active_mask & (1 << 23), 0);

            chronocode_watchface_free(face);
        }
    }

    #[test]
    fn json_frame() {
        let face = chronocode_watchface_new(LanguageId::EnUs as u8, 0);
        unsafe {
            let json = chronocode_watchface_resolve_json(face, 14, 47);
            assert!(!json.is_null());
            let text = CStr::from_ptr(json).to_str().unwrap().to_owned();
            chronocode_free_string(json);
            chronocode_watchface_free(face);

            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(value["display_hour"], 3);
            assert_eq!(value["bucket"], 10);
            assert_eq!(value["active"], serde_json::json!([3, 13, 14, 15, 18, 22]));
        }
    }

    #[test]
    fn null_handles_are_rejected() {
        unsafe {
            let mut frame = ChronoFrame::default();
            assert!(!chronocode_watchface_resolve(ptr::null(), 1, 2, &mut frame));
            assert!(chronocode_watchface_resolve_json(ptr::null(), 1, 2).is_null());
            assert_eq!(chronocode_watchface_set_language(ptr::null_mut(), 0), -2);
            chronocode_watchface_free(ptr::null_mut());
            chronocode_free_string(ptr::null_mut());
        }
    }
}
