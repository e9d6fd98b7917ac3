//! Type-safe OpenGL bindings over libepoxy
//!
//! This library wraps the raw OpenGL entry points that libepoxy (or any other
//! resolver) hands out in typed Rust calls: symbolic enums instead of bare
//! `GLenum`s, newtype handles instead of bare `GLuint`s, slices instead of
//! pointer and count pairs. After every call an injected error policy decides
//! whether to poll `glGetError`, log what it finds, or abort.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Renderer (Flick compositor, tools)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                      typed `Gl` methods
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         flick-gl                            │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐ │
//! │  │ enums and   │  │ api         │  │ check (error        │ │
//! │  │ handles     │  │ wrappers    │  │ policy), debug      │ │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘ │
//! │                   ffi entry-point table                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                libepoxy (or eglGetProcAddress)
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │              GL driver (Mesa, vendor blobs)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use flick_gl::{BufferTarget, BufferUsage, Gl, GlConfig};
//!
//! // With a context current on this thread
//! let config = GlConfig::resolve(None)?;
//! let gl = unsafe { Gl::load_epoxy(&config)? };
//!
//! let vbo = gl.create_buffer();
//! gl.bind_buffer(BufferTarget::Array, vbo);
//! gl.buffer_data(BufferTarget::Array, &[0.0f32, 0.5, -0.5], BufferUsage::StaticDraw);
//! ```

pub mod api;
pub mod check;
pub mod config;
pub mod context;
pub mod debug;
pub mod enums;
pub mod error;
pub mod ffi;
pub mod handle;
pub mod loader;
pub mod tex_param;

#[cfg(test)]
mod testing;

pub use api::{contains_extension, LabelTarget, ProgramBuildError};
pub use config::{ErrorPolicy, GlConfig};
pub use context::Gl;
pub use debug::{log_debug_message, DebugHandler, DebugMessage, DebugSeverity, DebugSource, DebugType};
pub use enums::*;
pub use error::{Error, GlError};
pub use handle::{
    AttribLocation, Buffer, Framebuffer, Handle, Program, ProgramPipeline, Renderbuffer, Shader, Sync, Texture,
    UniformLocation, VertexArray,
};
pub use loader::EpoxyLibrary;
pub use tex_param::TextureParameter;

/// Result type for this crate
pub type Result<T> = std::result::Result<T, Error>;
