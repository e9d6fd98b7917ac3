//! Debug output (`KHR_debug`) message translation
//!
//! The driver calls back with raw source/type/severity codes and a
//! length-prefixed byte buffer. The trampolines here turn that into a
//! [`DebugMessage`] and hand it to the registered handler.

use crate::ffi::{self, GLchar, GLenum, GLsizei, GLuint};
use std::borrow::Cow;
use std::cell::Cell;
use std::ffi::{c_void, CStr};
use tracing::{debug, error, info, warn};

thread_local! {
    /// Context handlers currently running on this thread
    static DELIVERING: Cell<u32> = const { Cell::new(0) };
}

/// Whether a context handler is running further up this thread's stack
pub(crate) fn delivering() -> bool {
    DELIVERING.with(|depth| depth.get() > 0)
}

/// Marks one context handler call in progress until dropped
struct Delivery;

impl Delivery {
    fn enter() -> Self {
        DELIVERING.with(|depth| depth.set(depth.get() + 1));
        Delivery
    }
}

impl Drop for Delivery {
    fn drop(&mut self) {
        DELIVERING.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Where a debug message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugSource {
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other,
}

impl DebugSource {
    /// Unrecognized codes are reported as [`DebugSource::Other`].
    pub fn from_raw(raw: GLenum) -> Self {
        match raw {
            ffi::DEBUG_SOURCE_API => DebugSource::Api,
            ffi::DEBUG_SOURCE_WINDOW_SYSTEM => DebugSource::WindowSystem,
            ffi::DEBUG_SOURCE_SHADER_COMPILER => DebugSource::ShaderCompiler,
            ffi::DEBUG_SOURCE_THIRD_PARTY => DebugSource::ThirdParty,
            ffi::DEBUG_SOURCE_APPLICATION => DebugSource::Application,
            _ => DebugSource::Other,
        }
    }

    pub fn to_raw(self) -> GLenum {
        match self {
            DebugSource::Api => ffi::DEBUG_SOURCE_API,
            DebugSource::WindowSystem => ffi::DEBUG_SOURCE_WINDOW_SYSTEM,
            DebugSource::ShaderCompiler => ffi::DEBUG_SOURCE_SHADER_COMPILER,
            DebugSource::ThirdParty => ffi::DEBUG_SOURCE_THIRD_PARTY,
            DebugSource::Application => ffi::DEBUG_SOURCE_APPLICATION,
            DebugSource::Other => ffi::DEBUG_SOURCE_OTHER,
        }
    }
}

/// What kind of event a debug message describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugType {
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    PushGroup,
    PopGroup,
    Other,
}

impl DebugType {
    /// Unrecognized codes are reported as [`DebugType::Other`].
    pub fn from_raw(raw: GLenum) -> Self {
        match raw {
            ffi::DEBUG_TYPE_ERROR => DebugType::Error,
            ffi::DEBUG_TYPE_DEPRECATED_BEHAVIOR => DebugType::DeprecatedBehavior,
            ffi::DEBUG_TYPE_UNDEFINED_BEHAVIOR => DebugType::UndefinedBehavior,
            ffi::DEBUG_TYPE_PORTABILITY => DebugType::Portability,
            ffi::DEBUG_TYPE_PERFORMANCE => DebugType::Performance,
            ffi::DEBUG_TYPE_MARKER => DebugType::Marker,
            ffi::DEBUG_TYPE_PUSH_GROUP => DebugType::PushGroup,
            ffi::DEBUG_TYPE_POP_GROUP => DebugType::PopGroup,
            _ => DebugType::Other,
        }
    }

    pub fn to_raw(self) -> GLenum {
        match self {
            DebugType::Error => ffi::DEBUG_TYPE_ERROR,
            DebugType::DeprecatedBehavior => ffi::DEBUG_TYPE_DEPRECATED_BEHAVIOR,
            DebugType::UndefinedBehavior => ffi::DEBUG_TYPE_UNDEFINED_BEHAVIOR,
            DebugType::Portability => ffi::DEBUG_TYPE_PORTABILITY,
            DebugType::Performance => ffi::DEBUG_TYPE_PERFORMANCE,
            DebugType::Marker => ffi::DEBUG_TYPE_MARKER,
            DebugType::PushGroup => ffi::DEBUG_TYPE_PUSH_GROUP,
            DebugType::PopGroup => ffi::DEBUG_TYPE_POP_GROUP,
            DebugType::Other => ffi::DEBUG_TYPE_OTHER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DebugSeverity {
    Notification,
    Low,
    Medium,
    High,
}

impl DebugSeverity {
    /// Unrecognized codes are reported as [`DebugSeverity::High`] so they are
    /// not filtered away.
    pub fn from_raw(raw: GLenum) -> Self {
        match raw {
            ffi::DEBUG_SEVERITY_NOTIFICATION => DebugSeverity::Notification,
            ffi::DEBUG_SEVERITY_LOW => DebugSeverity::Low,
            ffi::DEBUG_SEVERITY_MEDIUM => DebugSeverity::Medium,
            _ => DebugSeverity::High,
        }
    }

    pub fn to_raw(self) -> GLenum {
        match self {
            DebugSeverity::Notification => ffi::DEBUG_SEVERITY_NOTIFICATION,
            DebugSeverity::Low => ffi::DEBUG_SEVERITY_LOW,
            DebugSeverity::Medium => ffi::DEBUG_SEVERITY_MEDIUM,
            DebugSeverity::High => ffi::DEBUG_SEVERITY_HIGH,
        }
    }
}

/// One message from the driver's debug output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugMessage<'a> {
    pub source: DebugSource,
    pub kind: DebugType,
    pub id: GLuint,
    pub severity: DebugSeverity,
    /// Message bytes without any trailing NUL
    pub text: &'a [u8],
}

impl DebugMessage<'_> {
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.text)
    }
}

/// Build a [`DebugMessage`] from the raw callback arguments.
///
/// A negative `length` means `message` is NUL-terminated.
///
/// # Safety
///
/// `message` must be null, or valid for `length` bytes (or up to its NUL when
/// `length` is negative) for the lifetime `'a`.
pub unsafe fn translate<'a>(
    source: GLenum,
    kind: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
) -> DebugMessage<'a> {
    let text: &'a [u8] = if message.is_null() {
        &[]
    } else if let Ok(len) = usize::try_from(length) {
        let bytes = std::slice::from_raw_parts(message.cast::<u8>(), len);
        bytes.strip_suffix(&[0]).unwrap_or(bytes)
    } else {
        CStr::from_ptr(message).to_bytes()
    };

    DebugMessage {
        source: DebugSource::from_raw(source),
        kind: DebugType::from_raw(kind),
        id,
        severity: DebugSeverity::from_raw(severity),
        text,
    }
}

/// Handler shape for callbacks registered without a context
pub type DebugHandler = fn(&DebugMessage<'_>);

/// Handler plus its context, owned by [`Gl`](crate::Gl) while registered.
/// The raw callback receives a pointer to this as its user data.
pub(crate) struct ContextHandler<C> {
    pub(crate) handler: fn(&mut C, &DebugMessage<'_>),
    pub(crate) context: C,
}

/// Trampoline for bare handlers: the user data slot carries the fn pointer.
pub(crate) extern "system" fn bare_trampoline(
    source: GLenum,
    kind: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    user_param: *mut c_void,
) {
    if user_param.is_null() {
        return;
    }
    // SAFETY: registered by `Gl::debug_message_callback` from a `DebugHandler`.
    // Plain fn pointers may be called from any thread, and registration turns on
    // synchronous output so delivery stays on the registering thread.
    let handler: DebugHandler = unsafe { std::mem::transmute::<*mut c_void, DebugHandler>(user_param) };
    let message = unsafe { translate(source, kind, id, severity, length, message) };
    handler(&message);
}

/// Trampoline for context handlers: the user data slot carries a
/// `ContextHandler<C>` owned by the `Gl` that registered it.
///
/// Messages raised while a context handler is already running on this thread
/// are dropped, so the handler never sees its context borrowed twice.
pub(crate) extern "system" fn context_trampoline<C>(
    source: GLenum,
    kind: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    user_param: *mut c_void,
) {
    if user_param.is_null() {
        return;
    }
    if delivering() {
        debug!("Dropping GL debug message {} raised inside a debug handler", id);
        return;
    }
    let _delivery = Delivery::enter();
    // SAFETY: the box stays alive while registered and is only retired, never
    // freed, while a delivery is in progress. `GL_DEBUG_OUTPUT_SYNCHRONOUS` is
    // held on for as long as a context handler is registered, so the driver
    // calls back on the registering thread, the only one that may touch `C`.
    let slot = unsafe { &mut *user_param.cast::<ContextHandler<C>>() };
    let message = unsafe { translate(source, kind, id, severity, length, message) };
    (slot.handler)(&mut slot.context, &message);
}

/// Ready-made handler that forwards debug output to `tracing`
pub fn log_debug_message(message: &DebugMessage<'_>) {
    let text = message.text_lossy();
    match message.severity {
        DebugSeverity::High => error!(source = ?message.source, kind = ?message.kind, id = message.id, "GL: {}", text),
        DebugSeverity::Medium => warn!(source = ?message.source, kind = ?message.kind, id = message.id, "GL: {}", text),
        DebugSeverity::Low => info!(source = ?message.source, kind = ?message.kind, id = message.id, "GL: {}", text),
        DebugSeverity::Notification => debug!(source = ?message.source, kind = ?message.kind, id = message.id, "GL: {}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_known_sources() {
        let cases = [
            (ffi::DEBUG_SOURCE_API, DebugSource::Api),
            (ffi::DEBUG_SOURCE_WINDOW_SYSTEM, DebugSource::WindowSystem),
            (ffi::DEBUG_SOURCE_SHADER_COMPILER, DebugSource::ShaderCompiler),
            (ffi::DEBUG_SOURCE_THIRD_PARTY, DebugSource::ThirdParty),
            (ffi::DEBUG_SOURCE_APPLICATION, DebugSource::Application),
            (ffi::DEBUG_SOURCE_OTHER, DebugSource::Other),
        ];
        for (raw, source) in cases {
            assert_eq!(DebugSource::from_raw(raw), source);
            assert_eq!(source.to_raw(), raw);
        }
    }

    #[test]
    fn test_known_types() {
        let cases = [
            (ffi::DEBUG_TYPE_ERROR, DebugType::Error),
            (ffi::DEBUG_TYPE_DEPRECATED_BEHAVIOR, DebugType::DeprecatedBehavior),
            (ffi::DEBUG_TYPE_UNDEFINED_BEHAVIOR, DebugType::UndefinedBehavior),
            (ffi::DEBUG_TYPE_PORTABILITY, DebugType::Portability),
            (ffi::DEBUG_TYPE_PERFORMANCE, DebugType::Performance),
            (ffi::DEBUG_TYPE_MARKER, DebugType::Marker),
            (ffi::DEBUG_TYPE_PUSH_GROUP, DebugType::PushGroup),
            (ffi::DEBUG_TYPE_POP_GROUP, DebugType::PopGroup),
            (ffi::DEBUG_TYPE_OTHER, DebugType::Other),
        ];
        for (raw, kind) in cases {
            assert_eq!(DebugType::from_raw(raw), kind);
            assert_eq!(kind.to_raw(), raw);
        }
    }

    #[test]
    fn test_known_severities() {
        let cases = [
            (ffi::DEBUG_SEVERITY_NOTIFICATION, DebugSeverity::Notification),
            (ffi::DEBUG_SEVERITY_LOW, DebugSeverity::Low),
            (ffi::DEBUG_SEVERITY_MEDIUM, DebugSeverity::Medium),
            (ffi::DEBUG_SEVERITY_HIGH, DebugSeverity::High),
        ];
        for (raw, severity) in cases {
            assert_eq!(DebugSeverity::from_raw(raw), severity);
            assert_eq!(severity.to_raw(), raw);
        }
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        assert_eq!(DebugSource::from_raw(0xBEEF), DebugSource::Other);
        assert_eq!(DebugType::from_raw(0xBEEF), DebugType::Other);
        assert_eq!(DebugSeverity::from_raw(0xBEEF), DebugSeverity::High);
    }

    #[test]
    fn test_translate_bounded_text() {
        let bytes = b"buffer 3 moved to VRAM\0trailing junk";
        let message = unsafe {
            translate(
                ffi::DEBUG_SOURCE_API,
                ffi::DEBUG_TYPE_PERFORMANCE,
                42,
                ffi::DEBUG_SEVERITY_LOW,
                23,
                bytes.as_ptr().cast(),
            )
        };
        assert_eq!(message.text, b"buffer 3 moved to VRAM");
        assert_eq!(message.id, 42);
        assert_eq!(message.kind, DebugType::Performance);
        assert_eq!(message.text_lossy(), "buffer 3 moved to VRAM");
    }

    #[test]
    fn test_translate_negative_length_reads_to_nul() {
        let text = c"shader recompiled";
        let message = unsafe { translate(0, 0, 0, 0, -1, text.as_ptr()) };
        assert_eq!(message.text, b"shader recompiled");
        assert_eq!(message.severity, DebugSeverity::High);
    }

    #[test]
    fn test_translate_null_message() {
        let message = unsafe { translate(0, 0, 0, 0, 5, std::ptr::null()) };
        assert!(message.text.is_empty());
    }

    thread_local! {
        static BARE_SEEN: RefCell<Vec<(DebugSource, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn record_bare(message: &DebugMessage<'_>) {
        BARE_SEEN.with(|seen| {
            seen.borrow_mut()
                .push((message.source, message.text_lossy().into_owned()))
        });
    }

    #[test]
    fn test_bare_trampoline_calls_handler() {
        let text = b"hello";
        let handler: DebugHandler = record_bare;
        bare_trampoline(
            ffi::DEBUG_SOURCE_APPLICATION,
            ffi::DEBUG_TYPE_MARKER,
            1,
            ffi::DEBUG_SEVERITY_NOTIFICATION,
            5,
            text.as_ptr().cast(),
            handler as *mut c_void,
        );
        let seen = BARE_SEEN.with(|seen| seen.borrow().clone());
        assert_eq!(seen, vec![(DebugSource::Application, "hello".to_string())]);
    }

    #[test]
    fn test_context_trampoline_passes_context() {
        let mut slot = Box::new(ContextHandler {
            handler: |count: &mut Vec<DebugSeverity>, message: &DebugMessage<'_>| {
                count.push(message.severity)
            },
            context: Vec::new(),
        });
        let user_param = (&mut *slot as *mut ContextHandler<Vec<DebugSeverity>>).cast::<c_void>();
        for severity in [ffi::DEBUG_SEVERITY_MEDIUM, 0x1234] {
            context_trampoline::<Vec<DebugSeverity>>(0, 0, 0, severity, 0, c"".as_ptr(), user_param);
        }
        assert_eq!(slot.context, vec![DebugSeverity::Medium, DebugSeverity::High]);
        assert!(!delivering());
    }

    fn deliver_nested(depth: &mut Vec<bool>, _message: &DebugMessage<'_>) {
        depth.push(delivering());
    }

    #[test]
    fn test_nested_delivery_is_dropped() {
        let mut slot = Box::new(ContextHandler {
            handler: deliver_nested,
            context: Vec::new(),
        });
        let user_param = (&mut *slot as *mut ContextHandler<Vec<bool>>).cast::<c_void>();
        {
            let _outer = Delivery::enter();
            context_trampoline::<Vec<bool>>(0, 0, 0, 0, 0, c"".as_ptr(), user_param);
        }
        assert!(slot.context.is_empty());
        context_trampoline::<Vec<bool>>(0, 0, 0, 0, 0, c"".as_ptr(), user_param);
        assert_eq!(slot.context, vec![true]);
        assert!(!delivering());
    }
}
