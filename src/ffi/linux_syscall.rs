use std::fs::File;
use std::io::{Error, Result};
use std::os::fd::{AsRawFd, FromRawFd};

use perf_event_open_sys::ioctls;

use super::Attr;

fn check(ret: i32) -> Result<i32> {
    if ret < 0 {
        Err(Error::last_os_error())
    } else {
        Ok(ret)
    }
}

// The kernel writes its own attr size back on `E2BIG`, hence `&mut`.
pub fn perf_event_open(
    attr: &mut Attr,
    pid: i32,
    cpu: i32,
    group_fd: i32,
    flags: u64,
) -> Result<File> {
    let fd = unsafe { perf_event_open_sys::perf_event_open(attr, pid, cpu, group_fd, flags as _) };
    let fd = check(fd)?;
    Ok(unsafe { File::from_raw_fd(fd) })
}

pub fn query_id(file: &File) -> Result<u64> {
    let mut id = 0_u64;
    check(unsafe { ioctls::ID(file.as_raw_fd(), &mut id) })?;
    Ok(id)
}

pub fn enable(file: &File, flags: u32) -> Result<i32> {
    check(unsafe { ioctls::ENABLE(file.as_raw_fd(), flags) })
}

pub fn disable(file: &File, flags: u32) -> Result<i32> {
    check(unsafe { ioctls::DISABLE(file.as_raw_fd(), flags) })
}

pub fn reset(file: &File, flags: u32) -> Result<i32> {
    check(unsafe { ioctls::RESET(file.as_raw_fd(), flags) })
}

pub fn read(file: &File, buf: &mut [u8]) -> Result<usize> {
    let fd = file.as_raw_fd();
    let count = buf.len();
    let bytes = unsafe { libc::read(fd, buf.as_mut_ptr() as _, count) };
    if bytes < 0 {
        Err(Error::last_os_error())
    } else {
        Ok(bytes as _)
    }
}
