//! Typed wrappers, one per GL entry point
//!
//! Each submodule adds an `impl Gl` block for one area of the API. Wrappers
//! take the semantic types from [`crate::enums`] and [`crate::handle`], coerce
//! them to the raw representation, call the driver and run the error check.

mod buffer;
mod debug;
mod draw;
mod framebuffer;
mod query;
mod shader;
mod state;
mod sync;
mod texture;
mod vertex_array;

pub use debug::LabelTarget;
pub use query::contains_extension;
pub use shader::ProgramBuildError;

use crate::handle::Handle;

/// Panic if the driver handed back the invalid name for any object.
///
/// Creation entry points either succeed or fail loudly under correct use, so a
/// zero name here is a broken contract rather than a reportable error.
pub(crate) fn expect_created<H: Handle>(handles: &[H], call: &'static str) {
    if let Some(index) = handles.iter().position(|handle| !handle.is_valid()) {
        panic!("{call} returned the invalid object name at index {index}");
    }
}

/// Bulk `glGen*`/`glCreate*` wrappers plus their singular bulk-of-one forms.
macro_rules! bulk_creation {
    ($( $bulk:ident / $single:ident => $handle:ident, $raw:ident, $sym:literal; )+) => {
        impl $crate::Gl {
            $(
                #[doc = concat!("Fill `out` with new names from `", $sym, "`")]
                pub fn $bulk(&self, out: &mut [$crate::handle::$handle]) {
                    out.fill($crate::handle::$handle::INVALID);
                    let n = $crate::context::sizei(out.len(), $sym);
                    // Handles are repr(transparent) over GLuint.
                    unsafe { self.fns.$raw(n, out.as_mut_ptr().cast()) };
                    self.check($sym);
                    $crate::api::expect_created(out, $sym);
                }

                #[doc = concat!("One new name from `", $sym, "`")]
                pub fn $single(&self) -> $crate::handle::$handle {
                    let mut scratch = [$crate::handle::$handle::INVALID; 1];
                    self.$bulk(&mut scratch);
                    scratch[0]
                }
            )+
        }
    };
}

/// `glDelete*` wrappers over a slice, plus singular forms.
macro_rules! bulk_deletion {
    ($( $bulk:ident / $single:ident => $handle:ident, $raw:ident, $sym:literal; )+) => {
        impl $crate::Gl {
            $(
                pub fn $bulk(&self, handles: &[$crate::handle::$handle]) {
                    let n = $crate::context::sizei(handles.len(), $sym);
                    unsafe { self.fns.$raw(n, handles.as_ptr().cast()) };
                    self.check($sym);
                }

                pub fn $single(&self, handle: $crate::handle::$handle) {
                    self.$bulk(std::slice::from_ref(&handle));
                }
            )+
        }
    };
}

bulk_creation! {
    gen_buffers / gen_buffer => Buffer, gen_buffers, "glGenBuffers";
    create_buffers / create_buffer => Buffer, create_buffers, "glCreateBuffers";
    gen_vertex_arrays / gen_vertex_array => VertexArray, gen_vertex_arrays, "glGenVertexArrays";
    create_vertex_arrays / create_vertex_array => VertexArray, create_vertex_arrays, "glCreateVertexArrays";
    gen_textures / gen_texture => Texture, gen_textures, "glGenTextures";
    gen_framebuffers / gen_framebuffer => Framebuffer, gen_framebuffers, "glGenFramebuffers";
    create_framebuffers / create_framebuffer => Framebuffer, create_framebuffers, "glCreateFramebuffers";
    gen_renderbuffers / gen_renderbuffer => Renderbuffer, gen_renderbuffers, "glGenRenderbuffers";
    create_renderbuffers / create_renderbuffer => Renderbuffer, create_renderbuffers, "glCreateRenderbuffers";
    gen_program_pipelines / gen_program_pipeline => ProgramPipeline, gen_program_pipelines, "glGenProgramPipelines";
    create_program_pipelines / create_program_pipeline => ProgramPipeline, create_program_pipelines, "glCreateProgramPipelines";
}

bulk_deletion! {
    delete_buffers / delete_buffer => Buffer, delete_buffers, "glDeleteBuffers";
    delete_vertex_arrays / delete_vertex_array => VertexArray, delete_vertex_arrays, "glDeleteVertexArrays";
    delete_textures / delete_texture => Texture, delete_textures, "glDeleteTextures";
    delete_framebuffers / delete_framebuffer => Framebuffer, delete_framebuffers, "glDeleteFramebuffers";
    delete_renderbuffers / delete_renderbuffer => Renderbuffer, delete_renderbuffers, "glDeleteRenderbuffers";
    delete_program_pipelines / delete_program_pipeline => ProgramPipeline, delete_program_pipelines, "glDeleteProgramPipelines";
}
