use fltk::text::TextBuffer;

/// Copy the full contents of an FLTK `TextBuffer` into a `String`.
///
/// `TextBuffer::text()` leaves the `malloc()`'d copy returned by
/// `Fl_Text_Buffer_text()` behind. The statistics pane reads the whole buffer
/// after every keystroke, so that leak would grow with each edit. This goes
/// through the C API directly and frees the copy afterwards.
pub fn buffer_contents(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live Fl_Text_Buffer owned by `buf`.
    // Fl_Text_Buffer_text returns either null or a NUL-terminated malloc'd
    // string, which is copied before being released with the matching free().
    unsafe {
        let raw = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if raw.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(raw).to_string_lossy().into_owned();
        free(raw as *mut std::ffi::c_void);
        text
    }
}
