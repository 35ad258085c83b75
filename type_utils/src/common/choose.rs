// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Return `true_value` if `condition` holds, otherwise `false_value`. Both branches are
/// evaluated eagerly.
///
/// ```
/// use r3bl_type_utils::if_else;
///
/// assert_eq!(if_else(true, "yes", "no"), "yes");
/// assert_eq!(if_else(false, 1_i64, 0), 0);
/// ```
#[must_use]
pub fn if_else<T>(condition: bool, true_value: T, false_value: T) -> T {
    if condition { true_value } else { false_value }
}
