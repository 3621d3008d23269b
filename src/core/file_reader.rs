//! Best-effort text reading
//!
//! One unreadable file must not abort aggregation of the remaining files, so
//! reading never fails upward: UTF-8 first, lossy conversion for invalid byte
//! sequences, and a diagnostic placeholder for any other I/O failure.

use std::fs;
use std::path::Path;

/// Read a file's content as text.
///
/// Always returns a string: valid UTF-8 verbatim, lossy-converted text when
/// the bytes are not valid UTF-8, or an error placeholder when the file
/// cannot be opened at all.
pub fn read_content(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        },
        Err(err) => format!("Error reading file: {}", err),
    }
}
