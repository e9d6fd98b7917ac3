//! The loaded GL entry points plus the policy that governs them

use crate::check;
use crate::config::{ErrorPolicy, GlConfig};
use crate::debug as messages;
use crate::error::GlError;
use crate::ffi::{EntryPoints, GLsizei, GLsizeiptr};
use crate::loader::EpoxyLibrary;
use crate::Result;
use std::any::Any;
use std::cell::RefCell;
use std::ffi::{c_void, CStr};
use std::marker::PhantomData;
use tracing::{debug, info};

/// Typed access to one GL context's entry points.
///
/// Every wrapper is a direct call into the driver followed by the configured
/// error check. A `Gl` is tied to the thread whose context was current when it
/// was loaded, so it is neither `Send` nor `Sync`.
pub struct Gl {
    pub(crate) fns: EntryPoints,
    policy: ErrorPolicy,
    /// Keeps a context debug handler alive while the driver holds its pointer
    pub(crate) debug_slot: RefCell<Option<Box<dyn Any>>>,
    /// Handlers replaced while one of them was still running
    pub(crate) debug_retired: RefCell<Vec<Box<dyn Any>>>,
    _not_send: PhantomData<*const ()>,
}

impl Gl {
    /// Load every available entry point through `resolve`.
    ///
    /// This must happen once, with the target context current, before any
    /// other wrapper is used.
    ///
    /// # Safety
    ///
    /// Every non-null pointer returned by `resolve` must be the GL function of
    /// that name. The context must stay current on this thread for as long as
    /// the returned `Gl` is used.
    pub unsafe fn load_with<F>(config: &GlConfig, resolve: F) -> Self
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        let fns = EntryPoints::load_with(resolve);
        info!(
            "Loaded {}/{} GL entry points (error policy: {})",
            fns.loaded_count(),
            EntryPoints::SYMBOLS.len(),
            config.error_policy
        );

        Self {
            fns,
            policy: config.error_policy,
            debug_slot: RefCell::new(None),
            debug_retired: RefCell::new(Vec::new()),
            _not_send: PhantomData,
        }
    }

    /// Like [`Gl::load_with`], handing `context` to a plain resolver function.
    ///
    /// # Safety
    ///
    /// Same contract as [`Gl::load_with`].
    pub unsafe fn load_with_context<C: ?Sized>(
        config: &GlConfig,
        context: &C,
        resolve: fn(&C, &CStr) -> *const c_void,
    ) -> Self {
        Self::load_with(config, |name| resolve(context, name))
    }

    /// Load through libepoxy, which must already see a current context.
    ///
    /// # Safety
    ///
    /// Same contract as [`Gl::load_with`].
    pub unsafe fn load_epoxy(config: &GlConfig) -> Result<Self> {
        let epoxy = EpoxyLibrary::open()?;
        debug!(
            "libepoxy reports GL {} ({})",
            epoxy.gl_version(),
            if epoxy.is_desktop_gl() { "desktop" } else { "ES" }
        );
        Ok(Self::load_with(config, |name| epoxy.resolve(name)))
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn is_loaded(&self, symbol: &str) -> bool {
        self.fns.is_loaded(symbol)
    }

    /// Fetch one pending error, wrapping `glGetError`
    pub fn get_error(&self) -> Option<GlError> {
        GlError::from_raw(unsafe { self.fns.get_error() })
    }

    /// Run the configured error check after a call to `call`
    pub(crate) fn check(&self, call: &'static str) -> Vec<GlError> {
        check::check(self.policy, call, || unsafe { self.fns.get_error() })
    }
}

impl Gl {
    /// Swap the held debug context for `next`.
    ///
    /// The previous context is freed right away unless a handler is running on
    /// this thread, in which case it waits for the next swap outside delivery.
    pub(crate) fn replace_debug_slot(&self, next: Option<Box<dyn Any>>) {
        let previous = self.debug_slot.replace(next);
        if messages::delivering() {
            self.debug_retired.borrow_mut().extend(previous);
            return;
        }
        let retired = std::mem::take(&mut *self.debug_retired.borrow_mut());
        drop(retired);
        drop(previous);
    }
}

impl Drop for Gl {
    fn drop(&mut self) {
        if self.debug_slot.get_mut().is_some() && self.fns.is_loaded("glDebugMessageCallback") {
            unsafe { self.fns.debug_message_callback(None, std::ptr::null()) };
            debug!("Unregistered GL debug handler on drop");
        }
        if messages::delivering() {
            // A handler up the stack still borrows one of these.
            if let Some(slot) = self.debug_slot.get_mut().take() {
                std::mem::forget(slot);
            }
            std::mem::forget(std::mem::take(self.debug_retired.get_mut()));
        }
    }
}

/// Narrow an element count to `GLsizei`
pub(crate) fn sizei(len: usize, call: &'static str) -> GLsizei {
    GLsizei::try_from(len).unwrap_or_else(|_| panic!("{call}: count {len} does not fit in GLsizei"))
}

/// Narrow a byte size or offset to `GLsizeiptr`
pub(crate) fn sizeiptr(len: usize, call: &'static str) -> GLsizeiptr {
    GLsizeiptr::try_from(len).unwrap_or_else(|_| panic!("{call}: size {len} does not fit in GLsizeiptr"))
}

pub(crate) fn gl_bool(value: bool) -> crate::ffi::GLboolean {
    if value {
        crate::ffi::TRUE
    } else {
        crate::ffi::FALSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi;
    use crate::testing::{self, FakeDriver};

    #[test]
    fn test_get_error_pops_one_code() {
        let gl = testing::fake_gl(ErrorPolicy::None);
        FakeDriver::push_errors(&[ffi::INVALID_VALUE, ffi::INVALID_ENUM]);
        assert_eq!(gl.get_error(), Some(GlError::InvalidValue));
        assert_eq!(gl.get_error(), Some(GlError::InvalidEnum));
        assert_eq!(gl.get_error(), None);
    }

    #[test]
    fn test_none_policy_is_a_no_op() {
        let gl = testing::fake_gl(ErrorPolicy::None);
        FakeDriver::push_errors(&[ffi::INVALID_OPERATION]);
        assert!(gl.check("glClear").is_empty());
        assert_eq!(FakeDriver::get_error_calls(), 0);
        assert_eq!(FakeDriver::pending_errors(), 1);
    }

    #[test]
    fn test_log_policy_drains_driver_queue() {
        let gl = testing::fake_gl(ErrorPolicy::Log);
        FakeDriver::push_errors(&[ffi::INVALID_OPERATION, ffi::OUT_OF_MEMORY]);
        let errors = gl.check("glBufferData");
        assert_eq!(errors, vec![GlError::InvalidOperation, GlError::OutOfMemory]);
        assert_eq!(FakeDriver::pending_errors(), 0);
        assert_eq!(FakeDriver::get_error_calls(), 3);
    }

    #[test]
    fn test_load_with_context() {
        fn resolve(driver: &str, name: &CStr) -> *const c_void {
            assert_eq!(driver, "fake");
            testing::resolve(name)
        }
        let config = GlConfig::new(ErrorPolicy::Log);
        let gl = unsafe { Gl::load_with_context(&config, "fake", resolve) };
        assert!(gl.is_loaded("glGetError"));
        assert_eq!(gl.error_policy(), ErrorPolicy::Log);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_sizei_overflow_panics() {
        sizei(usize::MAX, "glDrawArrays");
    }

    #[test]
    fn test_coercions() {
        assert_eq!(sizei(12, "glDrawArrays"), 12);
        assert_eq!(sizeiptr(4096, "glBufferData"), 4096);
        assert_eq!(gl_bool(true), ffi::TRUE);
        assert_eq!(gl_bool(false), ffi::FALSE);
    }
}
