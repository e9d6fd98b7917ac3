//! Debug output registration, filtering and annotation

use crate::context::{gl_bool, sizei};
use crate::debug::{self as messages, ContextHandler, DebugHandler, DebugMessage, DebugSeverity, DebugSource, DebugType};
use crate::enums::Capability;
use crate::ffi::{self, GLenum, GLuint};
use crate::handle::{Buffer, Framebuffer, Program, ProgramPipeline, Renderbuffer, Shader, Texture, VertexArray};
use crate::Gl;
use std::any::Any;
use std::ffi::c_void;
use tracing::debug;

/// Objects that `glObjectLabel` can name
pub trait LabelTarget: Copy {
    const IDENTIFIER: GLenum;

    fn label_name(self) -> GLuint;
}

macro_rules! label_target {
    ($($handle:ident => $identifier:path),+ $(,)?) => {
        $(
            impl LabelTarget for $handle {
                const IDENTIFIER: GLenum = $identifier;

                fn label_name(self) -> GLuint {
                    self.raw()
                }
            }
        )+
    };
}

label_target! {
    Buffer => ffi::BUFFER,
    Shader => ffi::SHADER,
    Program => ffi::PROGRAM,
    VertexArray => ffi::VERTEX_ARRAY,
    ProgramPipeline => ffi::PROGRAM_PIPELINE,
    Texture => ffi::TEXTURE,
    Renderbuffer => ffi::RENDERBUFFER,
    Framebuffer => ffi::FRAMEBUFFER,
}

impl Gl {
    /// Route driver debug output to `handler`, replacing any earlier handler.
    ///
    /// Turns on [`Capability::DebugOutputSynchronous`] so the handler runs on
    /// this thread, inside the GL call that raised the message.
    pub fn debug_message_callback(&self, handler: DebugHandler) {
        self.enable(Capability::DebugOutputSynchronous);
        unsafe {
            self.fns
                .debug_message_callback(Some(messages::bare_trampoline), handler as *const c_void)
        };
        self.check("glDebugMessageCallback");
        self.replace_debug_slot(None);
        debug!("Registered GL debug handler");
    }

    /// Route driver debug output to `handler`, which also receives `context`.
    ///
    /// `context` lives inside this `Gl` until the handler is replaced, cleared,
    /// or the `Gl` is dropped. Synchronous output is turned on and kept on while
    /// the handler is registered, so `context` is only touched from this thread.
    /// Re-registering from inside a handler is allowed: the running handler's
    /// context is kept until the next registration made outside delivery.
    pub fn debug_message_callback_with<C: 'static>(&self, context: C, handler: fn(&mut C, &DebugMessage<'_>)) {
        self.enable(Capability::DebugOutputSynchronous);
        let mut slot = Box::new(ContextHandler { handler, context });
        let user_param = (&mut *slot as *mut ContextHandler<C>).cast::<c_void>();
        unsafe {
            self.fns
                .debug_message_callback(Some(messages::context_trampoline::<C>), user_param)
        };
        self.check("glDebugMessageCallback");
        // The driver no longer points at the old box.
        self.replace_debug_slot(Some(slot as Box<dyn Any>));
        debug!("Registered GL debug handler with context");
    }

    /// Stop delivering debug output and drop any held context
    pub fn clear_debug_message_callback(&self) {
        unsafe { self.fns.debug_message_callback(None, std::ptr::null()) };
        self.check("glDebugMessageCallback");
        self.replace_debug_slot(None);
    }

    /// Enable or disable delivery of matching messages; `None` matches anything.
    ///
    /// `ids` narrows the match further and may only be non-empty when source
    /// and kind are both given.
    pub fn debug_message_control(
        &self,
        source: Option<DebugSource>,
        kind: Option<DebugType>,
        severity: Option<DebugSeverity>,
        ids: &[GLuint],
        enabled: bool,
    ) {
        const CALL: &str = "glDebugMessageControl";
        unsafe {
            self.fns.debug_message_control(
                source.map_or(ffi::DONT_CARE, DebugSource::to_raw),
                kind.map_or(ffi::DONT_CARE, DebugType::to_raw),
                severity.map_or(ffi::DONT_CARE, DebugSeverity::to_raw),
                sizei(ids.len(), CALL),
                ids.as_ptr(),
                gl_bool(enabled),
            )
        };
        self.check(CALL);
    }

    /// Inject a message into the debug stream
    pub fn debug_message_insert(
        &self,
        source: DebugSource,
        kind: DebugType,
        id: GLuint,
        severity: DebugSeverity,
        text: &str,
    ) {
        const CALL: &str = "glDebugMessageInsert";
        unsafe {
            self.fns.debug_message_insert(
                source.to_raw(),
                kind.to_raw(),
                id,
                severity.to_raw(),
                sizei(text.len(), CALL),
                text.as_ptr().cast(),
            )
        };
        self.check(CALL);
    }

    pub fn push_debug_group(&self, source: DebugSource, id: GLuint, text: &str) {
        const CALL: &str = "glPushDebugGroup";
        unsafe {
            self.fns
                .push_debug_group(source.to_raw(), id, sizei(text.len(), CALL), text.as_ptr().cast())
        };
        self.check(CALL);
    }

    pub fn pop_debug_group(&self) {
        unsafe { self.fns.pop_debug_group() };
        self.check("glPopDebugGroup");
    }

    /// Attach a human-readable label to `object` for debuggers and messages
    pub fn object_label<T: LabelTarget>(&self, object: T, label: &str) {
        const CALL: &str = "glObjectLabel";
        unsafe {
            self.fns.object_label(
                T::IDENTIFIER,
                object.label_name(),
                sizei(label.len(), CALL),
                label.as_ptr().cast(),
            )
        };
        self.check(CALL);
    }
}
