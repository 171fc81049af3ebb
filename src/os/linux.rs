//! Linux entropy via the `getrandom` system call.

use libc::{EINTR, c_void, getrandom};

/// Fills `buf` with random bytes from the kernel entropy pool.
///
/// Partial reads and `EINTR` are retried until the buffer is full.
///
/// # Panics
/// Panics on any other `getrandom` failure. Without entropy no nonce can
/// be drawn safely, so there is nothing sensible to fall back to.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let rest = &mut buf[filled..];
        let ret = unsafe { getrandom(rest.as_mut_ptr() as *mut c_void, rest.len(), 0) };

        if ret < 0 {
            let err = std::io::Error::last_os_error();
            if err.raw_os_error() == Some(EINTR) {
                continue;
            }

            panic!("getrandom() failed: {err}");
        }

        filled += ret as usize;
    }
}
