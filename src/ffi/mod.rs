#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux_syscall;

pub use perf_event_open_sys::bindings;

// Fails with `Unsupported` outside Linux.
macro_rules! syscall {
    ($syscall:ident, $($arg:expr),* $(,)?) => {{
        #[cfg(any(target_os = "linux", target_os = "android"))]
        let val = $crate::ffi::linux_syscall::$syscall($($arg),*);
        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        let val = {
            $(let _ = $arg;)*
            Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
        };
        val
    }};
}
pub(crate) use syscall;

pub type Attr = bindings::perf_event_attr;
