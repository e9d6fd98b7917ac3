//! Error types for flick-gl
//!
//! Two unrelated things live here: [`GlError`], the closed set of codes the driver
//! reports through `glGetError`, and [`Error`], which only the setup path
//! (configuration, library loading) ever returns.

use crate::ffi::{self, GLenum};
use thiserror::Error;

/// Error codes reported by `glGetError`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlError {
    #[error("GL_INVALID_ENUM")]
    InvalidEnum,

    #[error("GL_INVALID_VALUE")]
    InvalidValue,

    #[error("GL_INVALID_OPERATION")]
    InvalidOperation,

    #[error("GL_STACK_OVERFLOW")]
    StackOverflow,

    #[error("GL_STACK_UNDERFLOW")]
    StackUnderflow,

    #[error("GL_OUT_OF_MEMORY")]
    OutOfMemory,

    #[error("GL_INVALID_FRAMEBUFFER_OPERATION")]
    InvalidFramebufferOperation,

    #[error("GL_CONTEXT_LOST")]
    ContextLost,

    #[error("unknown GL error 0x{0:04X}")]
    Unknown(GLenum),
}

impl GlError {
    /// Classify a raw `glGetError` code. `GL_NO_ERROR` maps to `None`.
    pub fn from_raw(code: GLenum) -> Option<Self> {
        let error = match code {
            ffi::NO_ERROR => return None,
            ffi::INVALID_ENUM => Self::InvalidEnum,
            ffi::INVALID_VALUE => Self::InvalidValue,
            ffi::INVALID_OPERATION => Self::InvalidOperation,
            ffi::STACK_OVERFLOW => Self::StackOverflow,
            ffi::STACK_UNDERFLOW => Self::StackUnderflow,
            ffi::OUT_OF_MEMORY => Self::OutOfMemory,
            ffi::INVALID_FRAMEBUFFER_OPERATION => Self::InvalidFramebufferOperation,
            ffi::CONTEXT_LOST => Self::ContextLost,
            other => Self::Unknown(other),
        };
        Some(error)
    }

    pub fn to_raw(self) -> GLenum {
        match self {
            Self::InvalidEnum => ffi::INVALID_ENUM,
            Self::InvalidValue => ffi::INVALID_VALUE,
            Self::InvalidOperation => ffi::INVALID_OPERATION,
            Self::StackOverflow => ffi::STACK_OVERFLOW,
            Self::StackUnderflow => ffi::STACK_UNDERFLOW,
            Self::OutOfMemory => ffi::OUT_OF_MEMORY,
            Self::InvalidFramebufferOperation => ffi::INVALID_FRAMEBUFFER_OPERATION,
            Self::ContextLost => ffi::CONTEXT_LOST,
            Self::Unknown(code) => code,
        }
    }

    /// The GL symbol for this code, or `"GL_UNKNOWN_ERROR"`
    pub fn name(self) -> &'static str {
        match self {
            Self::InvalidEnum => "GL_INVALID_ENUM",
            Self::InvalidValue => "GL_INVALID_VALUE",
            Self::InvalidOperation => "GL_INVALID_OPERATION",
            Self::StackOverflow => "GL_STACK_OVERFLOW",
            Self::StackUnderflow => "GL_STACK_UNDERFLOW",
            Self::OutOfMemory => "GL_OUT_OF_MEMORY",
            Self::InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            Self::ContextLost => "GL_CONTEXT_LOST",
            Self::Unknown(_) => "GL_UNKNOWN_ERROR",
        }
    }
}

/// Errors from setting up the binding layer
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load GL library: {0}")]
    Loader(String),

    #[error("unknown GL error policy {0:?} (expected log, assert or none)")]
    InvalidPolicy(String),

    #[error("invalid GL config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
