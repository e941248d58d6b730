//! Table-driven extraction of integer fields.

use crate::{model::NOT_SUPPORTED, scan};

/// One destination field on a record of type `R`.
pub trait FieldSetter<R> {
    fn set(&self, record: &mut R, value: i32);
}

/// Scan `key` and parse it as an integer.
///
/// Missing keys and tokens starting with `u` (the kernel writes "unknown")
/// yield [`NOT_SUPPORTED`].
pub fn scan_int(buf: &str, key: &str) -> i32 {
    match scan::scan_value(buf, key) {
        Some(token) if !token.starts_with('u') => scan::parse_int(&token),
        _ => NOT_SUPPORTED,
    }
}

/// Fill every field in `table` from `buf`.
pub fn extract_fields<R, F: FieldSetter<R>>(buf: &str, table: &[(&str, F)], record: &mut R) {
    for (key, field) in table {
        let value = scan_int(buf, key);
        if value == NOT_SUPPORTED {
            tracing::trace!(key, "field not supported");
        }
        field.set(record, value);
    }
}
