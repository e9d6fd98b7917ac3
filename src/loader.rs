//! libepoxy loading via dlopen
//!
//! libepoxy exports each GL function as a global function-pointer variable named
//! `epoxy_<name>` (for example `epoxy_glClear`). The variable initially points at
//! a resolver stub that picks the right driver function on first call, so
//! resolving a GL symbol means reading that variable.

use crate::{Error, Result};
use std::ffi::{c_char, c_int, c_void, CStr, CString};
use tracing::{debug, info};

const EPOXY_LIBRARIES: &[&CStr] = &[c"libepoxy.so.0", c"libepoxy.so"];

type EpoxyGlVersionFn = unsafe extern "C" fn() -> c_int;
type EpoxyIsDesktopGlFn = unsafe extern "C" fn() -> bool;
type EpoxyHasGlExtensionFn = unsafe extern "C" fn(*const c_char) -> bool;

/// An open handle to libepoxy.
///
/// The library is never closed: resolved entry points point into it.
pub struct EpoxyLibrary {
    handle: *mut c_void,
}

impl EpoxyLibrary {
    /// Open the system libepoxy
    pub fn open() -> Result<Self> {
        for name in EPOXY_LIBRARIES {
            let handle = unsafe { libc::dlopen(name.as_ptr(), libc::RTLD_NOW | libc::RTLD_GLOBAL) };
            if !handle.is_null() {
                info!("Opened {}", name.to_string_lossy());
                return Ok(Self { handle });
            }
            debug!("dlopen({}) failed: {}", name.to_string_lossy(), last_dl_error());
        }
        Err(Error::Loader(format!(
            "libepoxy not found ({})",
            last_dl_error()
        )))
    }

    fn symbol(&self, name: &CStr) -> *mut c_void {
        unsafe { libc::dlsym(self.handle, name.as_ptr()) }
    }

    /// Address of the GL function `name` (`glClear`, ...), or null
    pub fn resolve(&self, name: &CStr) -> *const c_void {
        let Ok(epoxy_name) = CString::new([&b"epoxy_"[..], name.to_bytes()].concat()) else {
            return std::ptr::null();
        };
        let slot = self.symbol(&epoxy_name);
        if slot.is_null() {
            return std::ptr::null();
        }
        // SAFETY: `epoxy_*` GL symbols are function-pointer variables.
        unsafe { *slot.cast::<*const c_void>() }
    }

    /// Context GL version times ten (`45` for GL 4.5), as libepoxy reports it
    pub fn gl_version(&self) -> i32 {
        match unsafe { self.load::<EpoxyGlVersionFn>(c"epoxy_gl_version") } {
            Some(f) => unsafe { f() },
            None => 0,
        }
    }

    pub fn is_desktop_gl(&self) -> bool {
        match unsafe { self.load::<EpoxyIsDesktopGlFn>(c"epoxy_is_desktop_gl") } {
            Some(f) => unsafe { f() },
            None => false,
        }
    }

    /// libepoxy's own extension check, for comparison with [`crate::Gl::has_extension`]
    pub fn has_gl_extension(&self, name: &str) -> bool {
        let Ok(name) = CString::new(name) else {
            return false;
        };
        match unsafe { self.load::<EpoxyHasGlExtensionFn>(c"epoxy_has_gl_extension") } {
            Some(f) => unsafe { f(name.as_ptr()) },
            None => false,
        }
    }

    unsafe fn load<T>(&self, name: &CStr) -> Option<T> {
        let ptr = self.symbol(name);
        if ptr.is_null() {
            None
        } else {
            Some(std::mem::transmute_copy(&ptr))
        }
    }
}

fn last_dl_error() -> String {
    let message = unsafe { libc::dlerror() };
    if message.is_null() {
        "unknown error".to_string()
    } else {
        unsafe { CStr::from_ptr(message) }.to_string_lossy().into_owned()
    }
}
