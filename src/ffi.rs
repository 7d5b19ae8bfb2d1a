#[cfg(not(feature = "libc"))]
mod imp {
    use core::ffi::{c_char, c_int, c_void};

    #[allow(non_camel_case_types)]
    type size_t = usize;

    extern "C" {
        pub fn strlen(c: *const c_char) -> size_t;
        pub fn strcmp(s1: *const c_char, s2: *const c_char) -> c_int;
        pub fn memchr(s: *const c_void, c: c_int, n: size_t) -> *mut c_void;
    }
}

#[cfg(feature = "libc")]
mod imp {
    pub use libc::{memchr, strcmp, strlen};
}

pub use imp::*;
