//! Raw OpenGL types, constants and the entry-point table
//!
//! These are the C-level names the driver speaks. Nothing in here is type-safe;
//! the rest of the crate wraps it.

#![allow(missing_docs)]

use std::ffi::{c_char, c_void, CStr};

pub type GLenum = u32;
pub type GLboolean = u8;
pub type GLbitfield = u32;
pub type GLbyte = i8;
pub type GLubyte = u8;
pub type GLshort = i16;
pub type GLushort = u16;
pub type GLint = i32;
pub type GLuint = u32;
pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLsizei = i32;
pub type GLfloat = f32;
pub type GLdouble = f64;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLchar = c_char;

/// Opaque sync object (`struct __GLsync *`)
#[repr(C)]
pub struct GLsyncObject {
    _data: [u8; 0],
}
pub type GLsync = *const GLsyncObject;

/// Debug output callback as the driver invokes it
pub type GLDEBUGPROC = Option<
    extern "system" fn(
        source: GLenum,
        kind: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        user_param: *mut c_void,
    ),
>;

// Booleans
pub const FALSE: GLboolean = 0;
pub const TRUE: GLboolean = 1;

// Errors
pub const NO_ERROR: GLenum = 0;
pub const INVALID_ENUM: GLenum = 0x0500;
pub const INVALID_VALUE: GLenum = 0x0501;
pub const INVALID_OPERATION: GLenum = 0x0502;
pub const STACK_OVERFLOW: GLenum = 0x0503;
pub const STACK_UNDERFLOW: GLenum = 0x0504;
pub const OUT_OF_MEMORY: GLenum = 0x0505;
pub const INVALID_FRAMEBUFFER_OPERATION: GLenum = 0x0506;
pub const CONTEXT_LOST: GLenum = 0x0507;

// Buffer targets
pub const ARRAY_BUFFER: GLenum = 0x8892;
pub const ELEMENT_ARRAY_BUFFER: GLenum = 0x8893;
pub const PIXEL_PACK_BUFFER: GLenum = 0x88EB;
pub const PIXEL_UNPACK_BUFFER: GLenum = 0x88EC;
pub const UNIFORM_BUFFER: GLenum = 0x8A11;
pub const TEXTURE_BUFFER: GLenum = 0x8C2A;
pub const TRANSFORM_FEEDBACK_BUFFER: GLenum = 0x8C8E;
pub const COPY_READ_BUFFER: GLenum = 0x8F36;
pub const COPY_WRITE_BUFFER: GLenum = 0x8F37;
pub const DRAW_INDIRECT_BUFFER: GLenum = 0x8F3F;
pub const SHADER_STORAGE_BUFFER: GLenum = 0x90D2;
pub const DISPATCH_INDIRECT_BUFFER: GLenum = 0x90EE;
pub const QUERY_BUFFER: GLenum = 0x9192;
pub const ATOMIC_COUNTER_BUFFER: GLenum = 0x92C0;

// Buffer usage
pub const STREAM_DRAW: GLenum = 0x88E0;
pub const STREAM_READ: GLenum = 0x88E1;
pub const STREAM_COPY: GLenum = 0x88E2;
pub const STATIC_DRAW: GLenum = 0x88E4;
pub const STATIC_READ: GLenum = 0x88E5;
pub const STATIC_COPY: GLenum = 0x88E6;
pub const DYNAMIC_DRAW: GLenum = 0x88E8;
pub const DYNAMIC_READ: GLenum = 0x88E9;
pub const DYNAMIC_COPY: GLenum = 0x88EA;

// Buffer parameters
pub const BUFFER_SIZE: GLenum = 0x8764;
pub const BUFFER_USAGE: GLenum = 0x8765;
pub const BUFFER_ACCESS_FLAGS: GLenum = 0x911F;
pub const BUFFER_MAPPED: GLenum = 0x88BC;
pub const BUFFER_MAP_LENGTH: GLenum = 0x9120;
pub const BUFFER_MAP_OFFSET: GLenum = 0x9121;
pub const BUFFER_IMMUTABLE_STORAGE: GLenum = 0x821F;
pub const BUFFER_STORAGE_FLAGS: GLenum = 0x8220;

// Map access and storage bits
pub const MAP_READ_BIT: GLbitfield = 0x0001;
pub const MAP_WRITE_BIT: GLbitfield = 0x0002;
pub const MAP_INVALIDATE_RANGE_BIT: GLbitfield = 0x0004;
pub const MAP_INVALIDATE_BUFFER_BIT: GLbitfield = 0x0008;
pub const MAP_FLUSH_EXPLICIT_BIT: GLbitfield = 0x0010;
pub const MAP_UNSYNCHRONIZED_BIT: GLbitfield = 0x0020;
pub const MAP_PERSISTENT_BIT: GLbitfield = 0x0040;
pub const MAP_COHERENT_BIT: GLbitfield = 0x0080;
pub const DYNAMIC_STORAGE_BIT: GLbitfield = 0x0100;
pub const CLIENT_STORAGE_BIT: GLbitfield = 0x0200;

// Primitives
pub const POINTS: GLenum = 0x0000;
pub const LINES: GLenum = 0x0001;
pub const LINE_LOOP: GLenum = 0x0002;
pub const LINE_STRIP: GLenum = 0x0003;
pub const TRIANGLES: GLenum = 0x0004;
pub const TRIANGLE_STRIP: GLenum = 0x0005;
pub const TRIANGLE_FAN: GLenum = 0x0006;
pub const LINES_ADJACENCY: GLenum = 0x000A;
pub const LINE_STRIP_ADJACENCY: GLenum = 0x000B;
pub const TRIANGLES_ADJACENCY: GLenum = 0x000C;
pub const TRIANGLE_STRIP_ADJACENCY: GLenum = 0x000D;
pub const PATCHES: GLenum = 0x000E;

// Data types
pub const BYTE: GLenum = 0x1400;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const SHORT: GLenum = 0x1402;
pub const UNSIGNED_SHORT: GLenum = 0x1403;
pub const INT: GLenum = 0x1404;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const FLOAT: GLenum = 0x1406;
pub const DOUBLE: GLenum = 0x140A;
pub const HALF_FLOAT: GLenum = 0x140B;
pub const FIXED: GLenum = 0x140C;
pub const UNSIGNED_SHORT_4_4_4_4: GLenum = 0x8033;
pub const UNSIGNED_SHORT_5_5_5_1: GLenum = 0x8034;
pub const UNSIGNED_INT_8_8_8_8: GLenum = 0x8035;
pub const UNSIGNED_SHORT_5_6_5: GLenum = 0x8363;
pub const UNSIGNED_INT_8_8_8_8_REV: GLenum = 0x8367;
pub const UNSIGNED_INT_2_10_10_10_REV: GLenum = 0x8368;
pub const UNSIGNED_INT_24_8: GLenum = 0x84FA;
pub const UNSIGNED_INT_10F_11F_11F_REV: GLenum = 0x8C3B;
pub const FLOAT_32_UNSIGNED_INT_24_8_REV: GLenum = 0x8DAD;
pub const INT_2_10_10_10_REV: GLenum = 0x8D9F;

// Shaders and programs
pub const FRAGMENT_SHADER: GLenum = 0x8B30;
pub const VERTEX_SHADER: GLenum = 0x8B31;
pub const GEOMETRY_SHADER: GLenum = 0x8DD9;
pub const TESS_EVALUATION_SHADER: GLenum = 0x8E87;
pub const TESS_CONTROL_SHADER: GLenum = 0x8E88;
pub const COMPUTE_SHADER: GLenum = 0x91B9;
pub const SHADER_TYPE: GLenum = 0x8B4F;
pub const DELETE_STATUS: GLenum = 0x8B80;
pub const COMPILE_STATUS: GLenum = 0x8B81;
pub const LINK_STATUS: GLenum = 0x8B82;
pub const VALIDATE_STATUS: GLenum = 0x8B83;
pub const INFO_LOG_LENGTH: GLenum = 0x8B84;
pub const ATTACHED_SHADERS: GLenum = 0x8B85;
pub const ACTIVE_UNIFORMS: GLenum = 0x8B86;
pub const ACTIVE_UNIFORM_MAX_LENGTH: GLenum = 0x8B87;
pub const SHADER_SOURCE_LENGTH: GLenum = 0x8B88;
pub const ACTIVE_ATTRIBUTES: GLenum = 0x8B89;
pub const ACTIVE_ATTRIBUTE_MAX_LENGTH: GLenum = 0x8B8A;
pub const ACTIVE_UNIFORM_BLOCKS: GLenum = 0x8A36;
pub const PROGRAM_SEPARABLE: GLenum = 0x8258;
pub const INVALID_INDEX: GLuint = 0xFFFF_FFFF;

// Program pipeline stages
pub const VERTEX_SHADER_BIT: GLbitfield = 0x0001;
pub const FRAGMENT_SHADER_BIT: GLbitfield = 0x0002;
pub const GEOMETRY_SHADER_BIT: GLbitfield = 0x0004;
pub const TESS_CONTROL_SHADER_BIT: GLbitfield = 0x0008;
pub const TESS_EVALUATION_SHADER_BIT: GLbitfield = 0x0010;
pub const COMPUTE_SHADER_BIT: GLbitfield = 0x0020;

// Memory barriers
pub const VERTEX_ATTRIB_ARRAY_BARRIER_BIT: GLbitfield = 0x0001;
pub const ELEMENT_ARRAY_BARRIER_BIT: GLbitfield = 0x0002;
pub const UNIFORM_BARRIER_BIT: GLbitfield = 0x0004;
pub const TEXTURE_FETCH_BARRIER_BIT: GLbitfield = 0x0008;
pub const SHADER_IMAGE_ACCESS_BARRIER_BIT: GLbitfield = 0x0020;
pub const COMMAND_BARRIER_BIT: GLbitfield = 0x0040;
pub const PIXEL_BUFFER_BARRIER_BIT: GLbitfield = 0x0080;
pub const TEXTURE_UPDATE_BARRIER_BIT: GLbitfield = 0x0100;
pub const BUFFER_UPDATE_BARRIER_BIT: GLbitfield = 0x0200;
pub const FRAMEBUFFER_BARRIER_BIT: GLbitfield = 0x0400;
pub const TRANSFORM_FEEDBACK_BARRIER_BIT: GLbitfield = 0x0800;
pub const ATOMIC_COUNTER_BARRIER_BIT: GLbitfield = 0x1000;
pub const SHADER_STORAGE_BARRIER_BIT: GLbitfield = 0x2000;

// Textures
pub const TEXTURE_1D: GLenum = 0x0DE0;
pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE_3D: GLenum = 0x806F;
pub const TEXTURE_RECTANGLE: GLenum = 0x84F5;
pub const TEXTURE_CUBE_MAP: GLenum = 0x8513;
pub const TEXTURE_CUBE_MAP_POSITIVE_X: GLenum = 0x8515;
pub const TEXTURE_CUBE_MAP_NEGATIVE_X: GLenum = 0x8516;
pub const TEXTURE_CUBE_MAP_POSITIVE_Y: GLenum = 0x8517;
pub const TEXTURE_CUBE_MAP_NEGATIVE_Y: GLenum = 0x8518;
pub const TEXTURE_CUBE_MAP_POSITIVE_Z: GLenum = 0x8519;
pub const TEXTURE_CUBE_MAP_NEGATIVE_Z: GLenum = 0x851A;
pub const TEXTURE_1D_ARRAY: GLenum = 0x8C18;
pub const TEXTURE_2D_ARRAY: GLenum = 0x8C1A;
pub const TEXTURE_CUBE_MAP_ARRAY: GLenum = 0x9009;
pub const TEXTURE_2D_MULTISAMPLE: GLenum = 0x9100;
pub const TEXTURE_2D_MULTISAMPLE_ARRAY: GLenum = 0x9102;
pub const TEXTURE0: GLenum = 0x84C0;

// Texture parameters
pub const TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const TEXTURE_WRAP_S: GLenum = 0x2802;
pub const TEXTURE_WRAP_T: GLenum = 0x2803;
pub const TEXTURE_WRAP_R: GLenum = 0x8072;
pub const TEXTURE_MIN_LOD: GLenum = 0x813A;
pub const TEXTURE_MAX_LOD: GLenum = 0x813B;
pub const TEXTURE_BASE_LEVEL: GLenum = 0x813C;
pub const TEXTURE_MAX_LEVEL: GLenum = 0x813D;
pub const TEXTURE_MAX_ANISOTROPY: GLenum = 0x84FE;
pub const TEXTURE_LOD_BIAS: GLenum = 0x8501;
pub const TEXTURE_COMPARE_MODE: GLenum = 0x884C;
pub const TEXTURE_COMPARE_FUNC: GLenum = 0x884D;

// Texture parameter values
pub const NEAREST: GLenum = 0x2600;
pub const LINEAR: GLenum = 0x2601;
pub const NEAREST_MIPMAP_NEAREST: GLenum = 0x2700;
pub const LINEAR_MIPMAP_NEAREST: GLenum = 0x2701;
pub const NEAREST_MIPMAP_LINEAR: GLenum = 0x2702;
pub const LINEAR_MIPMAP_LINEAR: GLenum = 0x2703;
pub const REPEAT: GLenum = 0x2901;
pub const CLAMP_TO_BORDER: GLenum = 0x812D;
pub const CLAMP_TO_EDGE: GLenum = 0x812F;
pub const MIRRORED_REPEAT: GLenum = 0x8370;
pub const MIRROR_CLAMP_TO_EDGE: GLenum = 0x8743;
pub const NONE: GLenum = 0;
pub const COMPARE_REF_TO_TEXTURE: GLenum = 0x884E;

// Comparison functions
pub const NEVER: GLenum = 0x0200;
pub const LESS: GLenum = 0x0201;
pub const EQUAL: GLenum = 0x0202;
pub const LEQUAL: GLenum = 0x0203;
pub const GREATER: GLenum = 0x0204;
pub const NOTEQUAL: GLenum = 0x0205;
pub const GEQUAL: GLenum = 0x0206;
pub const ALWAYS: GLenum = 0x0207;

// Pixel formats
pub const STENCIL_INDEX: GLenum = 0x1901;
pub const DEPTH_COMPONENT: GLenum = 0x1902;
pub const RED: GLenum = 0x1903;
pub const RGB: GLenum = 0x1907;
pub const RGBA: GLenum = 0x1908;
pub const BGR: GLenum = 0x80E0;
pub const BGRA: GLenum = 0x80E1;
pub const RG: GLenum = 0x8227;
pub const RG_INTEGER: GLenum = 0x8228;
pub const DEPTH_STENCIL: GLenum = 0x84F9;
pub const RED_INTEGER: GLenum = 0x8D94;
pub const RGB_INTEGER: GLenum = 0x8D98;
pub const RGBA_INTEGER: GLenum = 0x8D99;

// Sized internal formats
pub const RGB8: GLenum = 0x8051;
pub const RGBA8: GLenum = 0x8058;
pub const RGB10_A2: GLenum = 0x8059;
pub const DEPTH_COMPONENT16: GLenum = 0x81A5;
pub const DEPTH_COMPONENT24: GLenum = 0x81A6;
pub const R8: GLenum = 0x8229;
pub const R16: GLenum = 0x822A;
pub const RG8: GLenum = 0x822B;
pub const R16F: GLenum = 0x822D;
pub const R32F: GLenum = 0x822E;
pub const RG16F: GLenum = 0x822F;
pub const RG32F: GLenum = 0x8230;
pub const R8UI: GLenum = 0x8232;
pub const R32I: GLenum = 0x8235;
pub const R32UI: GLenum = 0x8236;
pub const RGBA32F: GLenum = 0x8814;
pub const RGB32F: GLenum = 0x8815;
pub const RGBA16F: GLenum = 0x881A;
pub const RGB16F: GLenum = 0x881B;
pub const DEPTH24_STENCIL8: GLenum = 0x88F0;
pub const R11F_G11F_B10F: GLenum = 0x8C3A;
pub const SRGB8: GLenum = 0x8C41;
pub const SRGB8_ALPHA8: GLenum = 0x8C43;
pub const DEPTH_COMPONENT32F: GLenum = 0x8CAC;
pub const DEPTH32F_STENCIL8: GLenum = 0x8CAD;
pub const STENCIL_INDEX8: GLenum = 0x8D48;
pub const RGBA8UI: GLenum = 0x8D7C;

// Blending
pub const ZERO: GLenum = 0;
pub const ONE: GLenum = 1;
pub const SRC_COLOR: GLenum = 0x0300;
pub const ONE_MINUS_SRC_COLOR: GLenum = 0x0301;
pub const SRC_ALPHA: GLenum = 0x0302;
pub const ONE_MINUS_SRC_ALPHA: GLenum = 0x0303;
pub const DST_ALPHA: GLenum = 0x0304;
pub const ONE_MINUS_DST_ALPHA: GLenum = 0x0305;
pub const DST_COLOR: GLenum = 0x0306;
pub const ONE_MINUS_DST_COLOR: GLenum = 0x0307;
pub const SRC_ALPHA_SATURATE: GLenum = 0x0308;
pub const CONSTANT_COLOR: GLenum = 0x8001;
pub const ONE_MINUS_CONSTANT_COLOR: GLenum = 0x8002;
pub const CONSTANT_ALPHA: GLenum = 0x8003;
pub const ONE_MINUS_CONSTANT_ALPHA: GLenum = 0x8004;
pub const FUNC_ADD: GLenum = 0x8006;
pub const MIN: GLenum = 0x8007;
pub const MAX: GLenum = 0x8008;
pub const FUNC_SUBTRACT: GLenum = 0x800A;
pub const FUNC_REVERSE_SUBTRACT: GLenum = 0x800B;

// Capabilities
pub const CULL_FACE: GLenum = 0x0B44;
pub const DEPTH_TEST: GLenum = 0x0B71;
pub const STENCIL_TEST: GLenum = 0x0B90;
pub const DITHER: GLenum = 0x0BD0;
pub const BLEND: GLenum = 0x0BE2;
pub const SCISSOR_TEST: GLenum = 0x0C11;
pub const POLYGON_OFFSET_FILL: GLenum = 0x8037;
pub const MULTISAMPLE: GLenum = 0x809D;
pub const SAMPLE_ALPHA_TO_COVERAGE: GLenum = 0x809E;
pub const DEBUG_OUTPUT_SYNCHRONOUS: GLenum = 0x8242;
pub const PROGRAM_POINT_SIZE: GLenum = 0x8642;
pub const DEPTH_CLAMP: GLenum = 0x864F;
pub const TEXTURE_CUBE_MAP_SEAMLESS: GLenum = 0x884F;
pub const RASTERIZER_DISCARD: GLenum = 0x8C89;
pub const PRIMITIVE_RESTART_FIXED_INDEX: GLenum = 0x8D69;
pub const FRAMEBUFFER_SRGB: GLenum = 0x8DB9;
pub const PRIMITIVE_RESTART: GLenum = 0x8F9D;
pub const DEBUG_OUTPUT: GLenum = 0x92E0;

// Faces and polygon modes
pub const FRONT: GLenum = 0x0404;
pub const BACK: GLenum = 0x0405;
pub const FRONT_AND_BACK: GLenum = 0x0408;
pub const CW: GLenum = 0x0900;
pub const CCW: GLenum = 0x0901;
pub const POINT: GLenum = 0x1B00;
pub const LINE: GLenum = 0x1B01;
pub const FILL: GLenum = 0x1B02;

// Stencil operations
pub const INVERT: GLenum = 0x150A;
pub const KEEP: GLenum = 0x1E00;
pub const REPLACE: GLenum = 0x1E01;
pub const INCR: GLenum = 0x1E02;
pub const DECR: GLenum = 0x1E03;
pub const INCR_WRAP: GLenum = 0x8507;
pub const DECR_WRAP: GLenum = 0x8508;

// Clear bits
pub const DEPTH_BUFFER_BIT: GLbitfield = 0x0100;
pub const STENCIL_BUFFER_BIT: GLbitfield = 0x0400;
pub const COLOR_BUFFER_BIT: GLbitfield = 0x4000;

// Framebuffers and renderbuffers
pub const FRAMEBUFFER_UNDEFINED: GLenum = 0x8219;
pub const DEPTH_STENCIL_ATTACHMENT: GLenum = 0x821A;
pub const READ_FRAMEBUFFER: GLenum = 0x8CA8;
pub const DRAW_FRAMEBUFFER: GLenum = 0x8CA9;
pub const FRAMEBUFFER_COMPLETE: GLenum = 0x8CD5;
pub const FRAMEBUFFER_INCOMPLETE_ATTACHMENT: GLenum = 0x8CD6;
pub const FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT: GLenum = 0x8CD7;
pub const FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER: GLenum = 0x8CDB;
pub const FRAMEBUFFER_INCOMPLETE_READ_BUFFER: GLenum = 0x8CDC;
pub const FRAMEBUFFER_UNSUPPORTED: GLenum = 0x8CDD;
pub const MAX_COLOR_ATTACHMENTS: GLenum = 0x8CDF;
pub const COLOR_ATTACHMENT0: GLenum = 0x8CE0;
pub const DEPTH_ATTACHMENT: GLenum = 0x8D00;
pub const STENCIL_ATTACHMENT: GLenum = 0x8D20;
pub const FRAMEBUFFER: GLenum = 0x8D40;
pub const RENDERBUFFER: GLenum = 0x8D41;
pub const FRAMEBUFFER_INCOMPLETE_MULTISAMPLE: GLenum = 0x8D56;
pub const MAX_SAMPLES: GLenum = 0x8D57;
pub const FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS: GLenum = 0x8DA8;

// Strings and integer state
pub const VENDOR: GLenum = 0x1F00;
pub const RENDERER: GLenum = 0x1F01;
pub const VERSION: GLenum = 0x1F02;
pub const EXTENSIONS: GLenum = 0x1F03;
pub const SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;
pub const LINE_WIDTH: GLenum = 0x0B21;
pub const VIEWPORT: GLenum = 0x0BA2;
pub const SCISSOR_BOX: GLenum = 0x0C10;
pub const MAX_VIEWPORT_DIMS: GLenum = 0x0D3A;
pub const ALIASED_LINE_WIDTH_RANGE: GLenum = 0x846E;
pub const MAX_TEXTURE_LOD_BIAS: GLenum = 0x84FD;
pub const MAX_TEXTURE_MAX_ANISOTROPY: GLenum = 0x84FF;
pub const MAX_TEXTURE_SIZE: GLenum = 0x0D33;
pub const MAJOR_VERSION: GLenum = 0x821B;
pub const MINOR_VERSION: GLenum = 0x821C;
pub const NUM_EXTENSIONS: GLenum = 0x821D;
pub const CONTEXT_FLAGS: GLenum = 0x821E;
pub const MAX_DRAW_BUFFERS: GLenum = 0x8824;
pub const MAX_VERTEX_ATTRIBS: GLenum = 0x8869;
pub const MAX_TEXTURE_IMAGE_UNITS: GLenum = 0x8872;
pub const MAX_UNIFORM_BUFFER_BINDINGS: GLenum = 0x8A2F;
pub const MAX_COMBINED_TEXTURE_IMAGE_UNITS: GLenum = 0x8B4D;
pub const MAX_RENDERBUFFER_SIZE: GLenum = 0x84E8;

// Pixel store
pub const UNPACK_ROW_LENGTH: GLenum = 0x0CF2;
pub const UNPACK_ALIGNMENT: GLenum = 0x0CF5;
pub const PACK_ROW_LENGTH: GLenum = 0x0D02;
pub const PACK_ALIGNMENT: GLenum = 0x0D05;

// Sync objects
pub const SYNC_FLUSH_COMMANDS_BIT: GLbitfield = 0x0001;
pub const SYNC_GPU_COMMANDS_COMPLETE: GLenum = 0x9117;
pub const ALREADY_SIGNALED: GLenum = 0x911A;
pub const TIMEOUT_EXPIRED: GLenum = 0x911B;
pub const CONDITION_SATISFIED: GLenum = 0x911C;
pub const WAIT_FAILED: GLenum = 0x911D;
pub const TIMEOUT_IGNORED: GLuint64 = 0xFFFF_FFFF_FFFF_FFFF;

// Debug output
pub const DEBUG_SOURCE_API: GLenum = 0x8246;
pub const DEBUG_SOURCE_WINDOW_SYSTEM: GLenum = 0x8247;
pub const DEBUG_SOURCE_SHADER_COMPILER: GLenum = 0x8248;
pub const DEBUG_SOURCE_THIRD_PARTY: GLenum = 0x8249;
pub const DEBUG_SOURCE_APPLICATION: GLenum = 0x824A;
pub const DEBUG_SOURCE_OTHER: GLenum = 0x824B;
pub const DEBUG_TYPE_ERROR: GLenum = 0x824C;
pub const DEBUG_TYPE_DEPRECATED_BEHAVIOR: GLenum = 0x824D;
pub const DEBUG_TYPE_UNDEFINED_BEHAVIOR: GLenum = 0x824E;
pub const DEBUG_TYPE_PORTABILITY: GLenum = 0x824F;
pub const DEBUG_TYPE_PERFORMANCE: GLenum = 0x8250;
pub const DEBUG_TYPE_OTHER: GLenum = 0x8251;
pub const DEBUG_TYPE_MARKER: GLenum = 0x8268;
pub const DEBUG_TYPE_PUSH_GROUP: GLenum = 0x8269;
pub const DEBUG_TYPE_POP_GROUP: GLenum = 0x826A;
pub const DEBUG_SEVERITY_NOTIFICATION: GLenum = 0x826B;
pub const DEBUG_SEVERITY_HIGH: GLenum = 0x9146;
pub const DEBUG_SEVERITY_MEDIUM: GLenum = 0x9147;
pub const DEBUG_SEVERITY_LOW: GLenum = 0x9148;
pub const DONT_CARE: GLenum = 0x1100;

// Object label identifiers
pub const BUFFER: GLenum = 0x82E0;
pub const SHADER: GLenum = 0x82E1;
pub const PROGRAM: GLenum = 0x82E2;
pub const VERTEX_ARRAY: GLenum = 0x8074;
pub const PROGRAM_PIPELINE: GLenum = 0x82E4;
pub const TEXTURE: GLenum = 0x1702;

/// Resolve one symbol, leaving the slot empty when the resolver has nothing.
unsafe fn load_fn<T>(resolve: &mut impl FnMut(&CStr) -> *const c_void, name: &CStr) -> Option<T> {
    let ptr = resolve(name);
    if ptr.is_null() {
        None
    } else {
        Some(std::mem::transmute_copy(&ptr))
    }
}

#[cold]
#[inline(never)]
fn not_loaded(symbol: &CStr) -> ! {
    panic!(
        "GL entry point {} was called but never loaded",
        symbol.to_string_lossy()
    )
}

macro_rules! gl_entry_points {
    ($( $field:ident => $sym:literal : fn($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?; )*) => {
        /// Resolved GL entry points, one optional slot per wrapped function.
        pub struct EntryPoints {
            $( $field: Option<unsafe extern "system" fn($($ty),*) $(-> $ret)?>, )*
        }

        impl EntryPoints {
            /// Every symbol this table knows how to load.
            pub const SYMBOLS: &'static [&'static CStr] = &[$($sym),*];

            /// Resolve every entry point through `resolve`.
            ///
            /// # Safety
            ///
            /// Every non-null pointer `resolve` returns must be the driver function
            /// of that name, with the C signature GL defines for it.
            pub unsafe fn load_with<F>(mut resolve: F) -> Self
            where
                F: FnMut(&CStr) -> *const c_void,
            {
                Self {
                    $( $field: load_fn(&mut resolve, $sym), )*
                }
            }

            pub fn is_loaded(&self, symbol: &str) -> bool {
                $(
                    if $sym.to_bytes() == symbol.as_bytes() {
                        return self.$field.is_some();
                    }
                )*
                false
            }

            pub fn loaded_count(&self) -> usize {
                0 $( + usize::from(self.$field.is_some()) )*
            }

            $(
                #[inline]
                pub unsafe fn $field(&self, $($arg: $ty),*) $(-> $ret)? {
                    match self.$field {
                        Some(f) => f($($arg),*),
                        None => not_loaded($sym),
                    }
                }
            )*
        }
    };
}

gl_entry_points! {
    // Errors and queries
    get_error => c"glGetError": fn() -> GLenum;
    get_string => c"glGetString": fn(name: GLenum) -> *const GLubyte;
    get_string_i => c"glGetStringi": fn(name: GLenum, index: GLuint) -> *const GLubyte;
    get_integerv => c"glGetIntegerv": fn(pname: GLenum, data: *mut GLint);
    get_floatv => c"glGetFloatv": fn(pname: GLenum, data: *mut GLfloat);
    is_enabled => c"glIsEnabled": fn(cap: GLenum) -> GLboolean;

    // Fixed-function state
    enable => c"glEnable": fn(cap: GLenum);
    disable => c"glDisable": fn(cap: GLenum);
    viewport => c"glViewport": fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    scissor => c"glScissor": fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    clear_color => c"glClearColor": fn(r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat);
    clear_depth => c"glClearDepth": fn(depth: GLdouble);
    clear_stencil => c"glClearStencil": fn(s: GLint);
    clear => c"glClear": fn(mask: GLbitfield);
    blend_func => c"glBlendFunc": fn(sfactor: GLenum, dfactor: GLenum);
    blend_func_separate => c"glBlendFuncSeparate":
        fn(src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum, dst_alpha: GLenum);
    blend_equation => c"glBlendEquation": fn(mode: GLenum);
    blend_equation_separate => c"glBlendEquationSeparate": fn(rgb: GLenum, alpha: GLenum);
    blend_color => c"glBlendColor": fn(r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat);
    depth_func => c"glDepthFunc": fn(func: GLenum);
    depth_mask => c"glDepthMask": fn(flag: GLboolean);
    color_mask => c"glColorMask": fn(r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean);
    stencil_func => c"glStencilFunc": fn(func: GLenum, reference: GLint, mask: GLuint);
    stencil_op => c"glStencilOp": fn(sfail: GLenum, dpfail: GLenum, dppass: GLenum);
    stencil_mask => c"glStencilMask": fn(mask: GLuint);
    cull_face => c"glCullFace": fn(mode: GLenum);
    front_face => c"glFrontFace": fn(mode: GLenum);
    polygon_mode => c"glPolygonMode": fn(face: GLenum, mode: GLenum);
    polygon_offset => c"glPolygonOffset": fn(factor: GLfloat, units: GLfloat);
    line_width => c"glLineWidth": fn(width: GLfloat);
    pixel_storei => c"glPixelStorei": fn(pname: GLenum, param: GLint);
    flush => c"glFlush": fn();
    finish => c"glFinish": fn();

    // Buffers
    gen_buffers => c"glGenBuffers": fn(n: GLsizei, buffers: *mut GLuint);
    create_buffers => c"glCreateBuffers": fn(n: GLsizei, buffers: *mut GLuint);
    delete_buffers => c"glDeleteBuffers": fn(n: GLsizei, buffers: *const GLuint);
    bind_buffer => c"glBindBuffer": fn(target: GLenum, buffer: GLuint);
    bind_buffer_base => c"glBindBufferBase": fn(target: GLenum, index: GLuint, buffer: GLuint);
    bind_buffer_range => c"glBindBufferRange":
        fn(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
    buffer_data => c"glBufferData":
        fn(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    buffer_sub_data => c"glBufferSubData":
        fn(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    buffer_storage => c"glBufferStorage":
        fn(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
    named_buffer_data => c"glNamedBufferData":
        fn(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    named_buffer_sub_data => c"glNamedBufferSubData":
        fn(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    named_buffer_storage => c"glNamedBufferStorage":
        fn(buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
    map_buffer_range => c"glMapBufferRange":
        fn(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
    map_named_buffer_range => c"glMapNamedBufferRange":
        fn(buffer: GLuint, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
    flush_mapped_buffer_range => c"glFlushMappedBufferRange":
        fn(target: GLenum, offset: GLintptr, length: GLsizeiptr);
    unmap_buffer => c"glUnmapBuffer": fn(target: GLenum) -> GLboolean;
    unmap_named_buffer => c"glUnmapNamedBuffer": fn(buffer: GLuint) -> GLboolean;
    copy_buffer_sub_data => c"glCopyBufferSubData":
        fn(read: GLenum, write: GLenum, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr);
    get_buffer_parameteriv => c"glGetBufferParameteriv":
        fn(target: GLenum, pname: GLenum, params: *mut GLint);

    // Vertex arrays
    gen_vertex_arrays => c"glGenVertexArrays": fn(n: GLsizei, arrays: *mut GLuint);
    create_vertex_arrays => c"glCreateVertexArrays": fn(n: GLsizei, arrays: *mut GLuint);
    delete_vertex_arrays => c"glDeleteVertexArrays": fn(n: GLsizei, arrays: *const GLuint);
    bind_vertex_array => c"glBindVertexArray": fn(array: GLuint);
    enable_vertex_attrib_array => c"glEnableVertexAttribArray": fn(index: GLuint);
    disable_vertex_attrib_array => c"glDisableVertexAttribArray": fn(index: GLuint);
    vertex_attrib_pointer => c"glVertexAttribPointer":
        fn(index: GLuint, size: GLint, kind: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void);
    vertex_attrib_i_pointer => c"glVertexAttribIPointer":
        fn(index: GLuint, size: GLint, kind: GLenum, stride: GLsizei, pointer: *const c_void);
    vertex_attrib_divisor => c"glVertexAttribDivisor": fn(index: GLuint, divisor: GLuint);
    enable_vertex_array_attrib => c"glEnableVertexArrayAttrib": fn(vaobj: GLuint, index: GLuint);
    disable_vertex_array_attrib => c"glDisableVertexArrayAttrib": fn(vaobj: GLuint, index: GLuint);
    vertex_array_vertex_buffer => c"glVertexArrayVertexBuffer":
        fn(vaobj: GLuint, binding: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
    vertex_array_element_buffer => c"glVertexArrayElementBuffer": fn(vaobj: GLuint, buffer: GLuint);
    vertex_array_attrib_format => c"glVertexArrayAttribFormat":
        fn(vaobj: GLuint, attrib: GLuint, size: GLint, kind: GLenum, normalized: GLboolean, relative_offset: GLuint);
    vertex_array_attrib_binding => c"glVertexArrayAttribBinding":
        fn(vaobj: GLuint, attrib: GLuint, binding: GLuint);

    // Draws and compute
    draw_arrays => c"glDrawArrays": fn(mode: GLenum, first: GLint, count: GLsizei);
    draw_elements => c"glDrawElements":
        fn(mode: GLenum, count: GLsizei, kind: GLenum, indices: *const c_void);
    draw_arrays_instanced => c"glDrawArraysInstanced":
        fn(mode: GLenum, first: GLint, count: GLsizei, instances: GLsizei);
    draw_elements_instanced => c"glDrawElementsInstanced":
        fn(mode: GLenum, count: GLsizei, kind: GLenum, indices: *const c_void, instances: GLsizei);
    draw_elements_base_vertex => c"glDrawElementsBaseVertex":
        fn(mode: GLenum, count: GLsizei, kind: GLenum, indices: *const c_void, base_vertex: GLint);
    dispatch_compute => c"glDispatchCompute": fn(x: GLuint, y: GLuint, z: GLuint);
    memory_barrier => c"glMemoryBarrier": fn(barriers: GLbitfield);

    // Shaders and programs
    create_shader => c"glCreateShader": fn(kind: GLenum) -> GLuint;
    delete_shader => c"glDeleteShader": fn(shader: GLuint);
    shader_source => c"glShaderSource":
        fn(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
    compile_shader => c"glCompileShader": fn(shader: GLuint);
    get_shaderiv => c"glGetShaderiv": fn(shader: GLuint, pname: GLenum, params: *mut GLint);
    get_shader_info_log => c"glGetShaderInfoLog":
        fn(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, log: *mut GLchar);
    create_program => c"glCreateProgram": fn() -> GLuint;
    delete_program => c"glDeleteProgram": fn(program: GLuint);
    attach_shader => c"glAttachShader": fn(program: GLuint, shader: GLuint);
    detach_shader => c"glDetachShader": fn(program: GLuint, shader: GLuint);
    link_program => c"glLinkProgram": fn(program: GLuint);
    validate_program => c"glValidateProgram": fn(program: GLuint);
    use_program => c"glUseProgram": fn(program: GLuint);
    get_programiv => c"glGetProgramiv": fn(program: GLuint, pname: GLenum, params: *mut GLint);
    get_program_info_log => c"glGetProgramInfoLog":
        fn(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, log: *mut GLchar);
    program_parameteri => c"glProgramParameteri": fn(program: GLuint, pname: GLenum, value: GLint);
    get_uniform_location => c"glGetUniformLocation": fn(program: GLuint, name: *const GLchar) -> GLint;
    get_attrib_location => c"glGetAttribLocation": fn(program: GLuint, name: *const GLchar) -> GLint;
    bind_attrib_location => c"glBindAttribLocation":
        fn(program: GLuint, index: GLuint, name: *const GLchar);
    get_uniform_block_index => c"glGetUniformBlockIndex":
        fn(program: GLuint, name: *const GLchar) -> GLuint;
    uniform_block_binding => c"glUniformBlockBinding":
        fn(program: GLuint, block: GLuint, binding: GLuint);
    uniform_1i => c"glUniform1i": fn(location: GLint, v0: GLint);
    uniform_1ui => c"glUniform1ui": fn(location: GLint, v0: GLuint);
    uniform_1f => c"glUniform1f": fn(location: GLint, v0: GLfloat);
    uniform_2f => c"glUniform2f": fn(location: GLint, v0: GLfloat, v1: GLfloat);
    uniform_3f => c"glUniform3f": fn(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    uniform_4f => c"glUniform4f":
        fn(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    uniform_matrix_3fv => c"glUniformMatrix3fv":
        fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    uniform_matrix_4fv => c"glUniformMatrix4fv":
        fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);

    // Program pipelines
    gen_program_pipelines => c"glGenProgramPipelines": fn(n: GLsizei, pipelines: *mut GLuint);
    create_program_pipelines => c"glCreateProgramPipelines": fn(n: GLsizei, pipelines: *mut GLuint);
    delete_program_pipelines => c"glDeleteProgramPipelines": fn(n: GLsizei, pipelines: *const GLuint);
    bind_program_pipeline => c"glBindProgramPipeline": fn(pipeline: GLuint);
    use_program_stages => c"glUseProgramStages":
        fn(pipeline: GLuint, stages: GLbitfield, program: GLuint);

    // Textures
    gen_textures => c"glGenTextures": fn(n: GLsizei, textures: *mut GLuint);
    create_textures => c"glCreateTextures": fn(target: GLenum, n: GLsizei, textures: *mut GLuint);
    delete_textures => c"glDeleteTextures": fn(n: GLsizei, textures: *const GLuint);
    bind_texture => c"glBindTexture": fn(target: GLenum, texture: GLuint);
    active_texture => c"glActiveTexture": fn(texture: GLenum);
    bind_texture_unit => c"glBindTextureUnit": fn(unit: GLuint, texture: GLuint);
    tex_image_2d => c"glTexImage2D":
        fn(target: GLenum, level: GLint, internal_format: GLint, width: GLsizei, height: GLsizei,
           border: GLint, format: GLenum, kind: GLenum, pixels: *const c_void);
    tex_sub_image_2d => c"glTexSubImage2D":
        fn(target: GLenum, level: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei,
           format: GLenum, kind: GLenum, pixels: *const c_void);
    tex_storage_2d => c"glTexStorage2D":
        fn(target: GLenum, levels: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei);
    texture_storage_2d => c"glTextureStorage2D":
        fn(texture: GLuint, levels: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei);
    texture_sub_image_2d => c"glTextureSubImage2D":
        fn(texture: GLuint, level: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei,
           format: GLenum, kind: GLenum, pixels: *const c_void);
    tex_parameteri => c"glTexParameteri": fn(target: GLenum, pname: GLenum, param: GLint);
    tex_parameterf => c"glTexParameterf": fn(target: GLenum, pname: GLenum, param: GLfloat);
    texture_parameteri => c"glTextureParameteri": fn(texture: GLuint, pname: GLenum, param: GLint);
    texture_parameterf => c"glTextureParameterf": fn(texture: GLuint, pname: GLenum, param: GLfloat);
    generate_mipmap => c"glGenerateMipmap": fn(target: GLenum);
    generate_texture_mipmap => c"glGenerateTextureMipmap": fn(texture: GLuint);

    // Framebuffers
    gen_framebuffers => c"glGenFramebuffers": fn(n: GLsizei, framebuffers: *mut GLuint);
    create_framebuffers => c"glCreateFramebuffers": fn(n: GLsizei, framebuffers: *mut GLuint);
    delete_framebuffers => c"glDeleteFramebuffers": fn(n: GLsizei, framebuffers: *const GLuint);
    bind_framebuffer => c"glBindFramebuffer": fn(target: GLenum, framebuffer: GLuint);
    framebuffer_texture_2d => c"glFramebufferTexture2D":
        fn(target: GLenum, attachment: GLenum, tex_target: GLenum, texture: GLuint, level: GLint);
    framebuffer_renderbuffer => c"glFramebufferRenderbuffer":
        fn(target: GLenum, attachment: GLenum, rb_target: GLenum, renderbuffer: GLuint);
    named_framebuffer_texture => c"glNamedFramebufferTexture":
        fn(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint);
    named_framebuffer_renderbuffer => c"glNamedFramebufferRenderbuffer":
        fn(framebuffer: GLuint, attachment: GLenum, rb_target: GLenum, renderbuffer: GLuint);
    check_framebuffer_status => c"glCheckFramebufferStatus": fn(target: GLenum) -> GLenum;
    check_named_framebuffer_status => c"glCheckNamedFramebufferStatus":
        fn(framebuffer: GLuint, target: GLenum) -> GLenum;
    draw_buffers => c"glDrawBuffers": fn(n: GLsizei, bufs: *const GLenum);
    read_buffer => c"glReadBuffer": fn(mode: GLenum);
    blit_framebuffer => c"glBlitFramebuffer":
        fn(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint,
           dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint,
           mask: GLbitfield, filter: GLenum);
    read_pixels => c"glReadPixels":
        fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, kind: GLenum, pixels: *mut c_void);

    // Renderbuffers
    gen_renderbuffers => c"glGenRenderbuffers": fn(n: GLsizei, renderbuffers: *mut GLuint);
    create_renderbuffers => c"glCreateRenderbuffers": fn(n: GLsizei, renderbuffers: *mut GLuint);
    delete_renderbuffers => c"glDeleteRenderbuffers": fn(n: GLsizei, renderbuffers: *const GLuint);
    bind_renderbuffer => c"glBindRenderbuffer": fn(target: GLenum, renderbuffer: GLuint);
    renderbuffer_storage => c"glRenderbufferStorage":
        fn(target: GLenum, internal_format: GLenum, width: GLsizei, height: GLsizei);
    renderbuffer_storage_multisample => c"glRenderbufferStorageMultisample":
        fn(target: GLenum, samples: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei);
    named_renderbuffer_storage => c"glNamedRenderbufferStorage":
        fn(renderbuffer: GLuint, internal_format: GLenum, width: GLsizei, height: GLsizei);

    // Sync objects
    fence_sync => c"glFenceSync": fn(condition: GLenum, flags: GLbitfield) -> GLsync;
    delete_sync => c"glDeleteSync": fn(sync: GLsync);
    client_wait_sync => c"glClientWaitSync":
        fn(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
    wait_sync => c"glWaitSync": fn(sync: GLsync, flags: GLbitfield, timeout: GLuint64);

    // Debug output
    debug_message_callback => c"glDebugMessageCallback":
        fn(callback: GLDEBUGPROC, user_param: *const c_void);
    debug_message_control => c"glDebugMessageControl":
        fn(source: GLenum, kind: GLenum, severity: GLenum, count: GLsizei, ids: *const GLuint, enabled: GLboolean);
    debug_message_insert => c"glDebugMessageInsert":
        fn(source: GLenum, kind: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar);
    push_debug_group => c"glPushDebugGroup":
        fn(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
    pop_debug_group => c"glPopDebugGroup": fn();
    object_label => c"glObjectLabel":
        fn(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    extern "system" fn fake_clear(_mask: GLbitfield) {}

    #[test]
    fn test_missing_symbols_stay_empty() {
        let fns = unsafe { EntryPoints::load_with(|_| ptr::null()) };
        assert_eq!(fns.loaded_count(), 0);
        assert!(!fns.is_loaded("glClear"));
    }

    #[test]
    fn test_resolver_sees_every_symbol() {
        let mut seen = Vec::new();
        let fns = unsafe {
            EntryPoints::load_with(|name| {
                seen.push(name.to_owned());
                if name == c"glClear" {
                    fake_clear as *const c_void
                } else {
                    ptr::null()
                }
            })
        };
        assert_eq!(seen.len(), EntryPoints::SYMBOLS.len());
        assert_eq!(fns.loaded_count(), 1);
        assert!(fns.is_loaded("glClear"));
        assert!(!fns.is_loaded("glNotARealFunction"));
        unsafe { fns.clear(COLOR_BUFFER_BIT) };
    }

    #[test]
    #[should_panic(expected = "glFlush")]
    fn test_unloaded_entry_point_panics() {
        let fns = unsafe { EntryPoints::load_with(|_| ptr::null()) };
        unsafe { fns.flush() };
    }
}
