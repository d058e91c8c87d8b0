// SPDX-License-Identifier: MIT

// Mutates the process environment, so it lives in its own test binary.

use service_scaffold::{AppError, Config};

#[cfg(unix)]
#[test]
fn non_utf8_port_fails_startup_instead_of_using_default() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    // SAFETY: this is the only test in this binary, nothing reads the environment concurrently
    unsafe {
        std::env::set_var("PORT", OsString::from_vec(vec![0x38, 0xff, 0x30]));
    }

    let result = Config::from_env();
    assert!(
        matches!(result, Err(AppError::Config(ref msg)) if msg.contains("PORT")),
        "expected a PORT configuration error, got {result:?}"
    );
}
