//! In-process fake GL driver for unit tests
//!
//! Each fake is an `extern "system"` function over thread-local state, handed
//! to [`Gl::load_with`] through [`resolve`]. Tests run one per thread, so every
//! test sees its own driver. Calls are recorded with their integer arguments so
//! tests can assert exactly what reached the driver.

use crate::config::{ErrorPolicy, GlConfig};
use crate::ffi::{self, GLbitfield, GLboolean, GLchar, GLenum, GLfloat, GLint, GLintptr, GLsizei, GLsizeiptr, GLsync, GLuint, GLuint64, GLubyte, GLDEBUGPROC};
use crate::Gl;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::{c_void, CStr, CString};
use std::ptr;

struct State {
    errors: VecDeque<GLenum>,
    get_error_calls: usize,
    next_name: GLuint,
    fail_creation: bool,
    extensions: Vec<CString>,
    info_log: Option<CString>,
    compile_status: bool,
    link_status: bool,
    enabled: Vec<GLenum>,
    unmap_result: GLboolean,
    wait_result: GLenum,
    framebuffer_status: GLenum,
    debug_callback: GLDEBUGPROC,
    debug_user_param: usize,
    calls: Vec<(&'static str, Vec<u64>)>,
}

impl State {
    fn new() -> Self {
        Self {
            errors: VecDeque::new(),
            get_error_calls: 0,
            next_name: 1,
            fail_creation: false,
            extensions: Vec::new(),
            info_log: None,
            compile_status: true,
            link_status: true,
            enabled: Vec::new(),
            unmap_result: ffi::TRUE,
            wait_result: ffi::ALREADY_SIGNALED,
            framebuffer_status: ffi::FRAMEBUFFER_COMPLETE,
            debug_callback: None,
            debug_user_param: 0,
            calls: Vec::new(),
        }
    }

    fn allocate_name(&mut self) -> GLuint {
        if self.fail_creation {
            return 0;
        }
        let name = self.next_name;
        self.next_name += 1;
        name
    }
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::new());
}

fn with<R>(f: impl FnOnce(&mut State) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Integer form of a recorded argument
trait Arg {
    fn arg(self) -> u64;
}

impl Arg for u32 {
    fn arg(self) -> u64 {
        u64::from(self)
    }
}

impl Arg for u8 {
    fn arg(self) -> u64 {
        u64::from(self)
    }
}

impl Arg for u64 {
    fn arg(self) -> u64 {
        self
    }
}

impl Arg for i32 {
    fn arg(self) -> u64 {
        self as i64 as u64
    }
}

impl Arg for isize {
    fn arg(self) -> u64 {
        self as i64 as u64
    }
}

impl Arg for f32 {
    fn arg(self) -> u64 {
        u64::from(self.to_bits())
    }
}

macro_rules! record {
    ($name:literal $(, $arg:expr)* $(,)?) => {
        record($name, vec![$(Arg::arg($arg)),*])
    };
}

fn record(name: &'static str, args: Vec<u64>) {
    with(|state| state.calls.push((name, args)));
}

/// Read `n` values from a driver input array
unsafe fn input<T: Copy>(n: GLsizei, values: *const T) -> Vec<T> {
    let len = usize::try_from(n).unwrap_or(0);
    if len == 0 || values.is_null() {
        return Vec::new();
    }
    std::slice::from_raw_parts(values, len).to_vec()
}

/// Control and inspection of the calling thread's fake driver
pub(crate) struct FakeDriver;

impl FakeDriver {
    pub(crate) fn reset() {
        with(|state| *state = State::new());
    }

    /// Queue error codes for `glGetError` to report, oldest first
    pub(crate) fn push_errors(codes: &[GLenum]) {
        with(|state| state.errors.extend(codes.iter().copied()));
    }

    pub(crate) fn pending_errors() -> usize {
        with(|state| state.errors.len())
    }

    pub(crate) fn get_error_calls() -> usize {
        with(|state| state.get_error_calls)
    }

    /// Make every creation entry point return the invalid name
    pub(crate) fn set_fail_creation(fail: bool) {
        with(|state| state.fail_creation = fail);
    }

    pub(crate) fn set_extensions(names: &[&str]) {
        let names = names
            .iter()
            .map(|name| CString::new(*name).expect("extension name without NUL"))
            .collect();
        with(|state| state.extensions = names);
    }

    /// Info log reported for every shader and program
    pub(crate) fn set_info_log(log: &str) {
        let log = CString::new(log).expect("info log without NUL");
        with(|state| state.info_log = Some(log));
    }

    pub(crate) fn set_compile_status(ok: bool) {
        with(|state| state.compile_status = ok);
    }

    pub(crate) fn set_link_status(ok: bool) {
        with(|state| state.link_status = ok);
    }

    pub(crate) fn set_unmap_result(result: GLboolean) {
        with(|state| state.unmap_result = result);
    }

    pub(crate) fn set_wait_result(result: GLenum) {
        with(|state| state.wait_result = result);
    }

    pub(crate) fn set_framebuffer_status(status: GLenum) {
        with(|state| state.framebuffer_status = status);
    }

    pub(crate) fn has_debug_callback() -> bool {
        with(|state| state.debug_callback.is_some())
    }

    /// Arguments of every recorded call to `name`, in call order
    pub(crate) fn calls_named(name: &str) -> Vec<Vec<u64>> {
        with(|state| {
            state
                .calls
                .iter()
                .filter(|(call, _)| *call == name)
                .map(|(_, args)| args.clone())
                .collect()
        })
    }

    /// Deliver a message through the registered debug callback, if any
    pub(crate) fn emit_debug_message(source: GLenum, kind: GLenum, id: GLuint, severity: GLenum, text: &str) {
        let (callback, user_param) = with(|state| (state.debug_callback, state.debug_user_param));
        if let Some(callback) = callback {
            let length = GLsizei::try_from(text.len()).expect("debug text length");
            callback(
                source,
                kind,
                id,
                severity,
                length,
                text.as_ptr().cast(),
                user_param as *mut c_void,
            );
        }
    }
}

/// A `Gl` loaded against a freshly reset fake driver
pub(crate) fn fake_gl(policy: ErrorPolicy) -> Gl {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    FakeDriver::reset();
    unsafe { Gl::load_with(&GlConfig::new(policy), resolve) }
}

// -----------------------------------------------------------------------------
// Errors and queries
// -----------------------------------------------------------------------------

extern "system" fn get_error() -> GLenum {
    with(|state| {
        state.get_error_calls += 1;
        state.errors.pop_front().unwrap_or(ffi::NO_ERROR)
    })
}

extern "system" fn get_string(name: GLenum) -> *const GLubyte {
    let text: &'static CStr = match name {
        ffi::VENDOR => c"flick-gl fake driver",
        ffi::RENDERER => c"fake",
        ffi::VERSION => c"4.6 fake",
        ffi::SHADING_LANGUAGE_VERSION => c"4.60",
        _ => {
            FakeDriver::push_errors(&[ffi::INVALID_ENUM]);
            return ptr::null();
        }
    };
    text.as_ptr().cast()
}

extern "system" fn get_string_i(name: GLenum, index: GLuint) -> *const GLubyte {
    record!("glGetStringi", name, index);
    with(|state| {
        let entry = usize::try_from(index).ok().and_then(|index| state.extensions.get(index));
        match (name, entry) {
            // Heap storage of the CString stays put until the table is replaced.
            (ffi::EXTENSIONS, Some(entry)) => entry.as_ptr().cast(),
            _ => {
                state.errors.push_back(ffi::INVALID_VALUE);
                ptr::null()
            }
        }
    })
}

extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
    let values: Vec<GLint> = match pname {
        ffi::NUM_EXTENSIONS => vec![with(|state| state.extensions.len() as GLint)],
        ffi::MAJOR_VERSION => vec![4],
        ffi::MINOR_VERSION => vec![6],
        ffi::VIEWPORT | ffi::SCISSOR_BOX => vec![0, 0, 800, 600],
        ffi::MAX_VIEWPORT_DIMS => vec![16384, 16384],
        _ => vec![0],
    };
    unsafe { ptr::copy_nonoverlapping(values.as_ptr(), data, values.len()) };
}

extern "system" fn get_floatv(pname: GLenum, data: *mut GLfloat) {
    let value = match pname {
        ffi::LINE_WIDTH => 1.0,
        _ => 0.0,
    };
    unsafe { *data = value };
}

extern "system" fn is_enabled(cap: GLenum) -> GLboolean {
    if with(|state| state.enabled.contains(&cap)) {
        ffi::TRUE
    } else {
        ffi::FALSE
    }
}

// -----------------------------------------------------------------------------
// State
// -----------------------------------------------------------------------------

extern "system" fn enable(cap: GLenum) {
    record!("glEnable", cap);
    with(|state| {
        if !state.enabled.contains(&cap) {
            state.enabled.push(cap);
        }
    });
}

extern "system" fn disable(cap: GLenum) {
    record!("glDisable", cap);
    with(|state| state.enabled.retain(|enabled| *enabled != cap));
}

extern "system" fn clear(mask: GLbitfield) {
    record!("glClear", mask);
}

extern "system" fn stencil_func(func: GLenum, reference: GLint, mask: GLuint) {
    record!("glStencilFunc", func, reference, mask);
}

// -----------------------------------------------------------------------------
// Object creation
// -----------------------------------------------------------------------------

macro_rules! fake_gen {
    ($($fake:ident => $name:literal),+ $(,)?) => {
        $(
            extern "system" fn $fake(n: GLsizei, out: *mut GLuint) {
                record!($name, n);
                let len = usize::try_from(n).unwrap_or(0);
                for index in 0..len {
                    let name = with(State::allocate_name);
                    unsafe { *out.add(index) = name };
                }
            }
        )+
    };
}

fake_gen! {
    gen_buffers => "glGenBuffers",
    create_buffers => "glCreateBuffers",
    gen_vertex_arrays => "glGenVertexArrays",
    create_vertex_arrays => "glCreateVertexArrays",
    gen_textures => "glGenTextures",
    gen_framebuffers => "glGenFramebuffers",
    create_framebuffers => "glCreateFramebuffers",
    gen_renderbuffers => "glGenRenderbuffers",
    create_renderbuffers => "glCreateRenderbuffers",
    gen_program_pipelines => "glGenProgramPipelines",
    create_program_pipelines => "glCreateProgramPipelines",
}

extern "system" fn create_textures(target: GLenum, n: GLsizei, out: *mut GLuint) {
    record!("glCreateTextures", target, n);
    let len = usize::try_from(n).unwrap_or(0);
    for index in 0..len {
        let name = with(State::allocate_name);
        unsafe { *out.add(index) = name };
    }
}

extern "system" fn delete_buffers(n: GLsizei, names: *const GLuint) {
    let mut args = vec![n.arg()];
    args.extend(unsafe { input(n, names) }.into_iter().map(Arg::arg));
    record("glDeleteBuffers", args);
}

extern "system" fn create_shader(kind: GLenum) -> GLuint {
    record!("glCreateShader", kind);
    with(State::allocate_name)
}

extern "system" fn create_program() -> GLuint {
    record!("glCreateProgram");
    with(State::allocate_name)
}

// -----------------------------------------------------------------------------
// Buffers, vertex arrays and draws
// -----------------------------------------------------------------------------

extern "system" fn bind_buffer(target: GLenum, buffer: GLuint) {
    record!("glBindBuffer", target, buffer);
}

extern "system" fn buffer_data(target: GLenum, size: GLsizeiptr, _data: *const c_void, usage: GLenum) {
    record!("glBufferData", target, size, usage);
}

extern "system" fn map_buffer_range(
    target: GLenum,
    offset: GLintptr,
    length: GLsizeiptr,
    access: GLbitfield,
) -> *mut c_void {
    record!("glMapBufferRange", target, offset, length, access);
    ptr::null_mut()
}

extern "system" fn unmap_buffer(_target: GLenum) -> GLboolean {
    with(|state| state.unmap_result)
}

extern "system" fn get_buffer_parameteriv(_target: GLenum, _pname: GLenum, params: *mut GLint) {
    unsafe { *params = 0 };
}

extern "system" fn vertex_array_attrib_format(
    vaobj: GLuint,
    attrib: GLuint,
    size: GLint,
    kind: GLenum,
    normalized: GLboolean,
    relative_offset: GLuint,
) {
    record!("glVertexArrayAttribFormat", vaobj, attrib, size, kind, normalized, relative_offset);
}

extern "system" fn draw_arrays(mode: GLenum, first: GLint, count: GLsizei) {
    record!("glDrawArrays", mode, first, count);
}

extern "system" fn draw_elements(mode: GLenum, count: GLsizei, kind: GLenum, indices: *const c_void) {
    record!("glDrawElements", mode, count, kind, indices as usize as u64);
}

extern "system" fn memory_barrier(barriers: GLbitfield) {
    record!("glMemoryBarrier", barriers);
}

// -----------------------------------------------------------------------------
// Shaders and programs
// -----------------------------------------------------------------------------

extern "system" fn shader_source(
    shader: GLuint,
    count: GLsizei,
    _strings: *const *const GLchar,
    lengths: *const GLint,
) {
    let mut args = vec![shader.arg(), count.arg()];
    args.extend(unsafe { input(count, lengths) }.into_iter().map(Arg::arg));
    record("glShaderSource", args);
}

extern "system" fn compile_shader(shader: GLuint) {
    record!("glCompileShader", shader);
}

extern "system" fn delete_shader(shader: GLuint) {
    record!("glDeleteShader", shader);
}

extern "system" fn delete_program(program: GLuint) {
    record!("glDeleteProgram", program);
}

extern "system" fn attach_shader(program: GLuint, shader: GLuint) {
    record!("glAttachShader", program, shader);
}

extern "system" fn detach_shader(program: GLuint, shader: GLuint) {
    record!("glDetachShader", program, shader);
}

extern "system" fn link_program(program: GLuint) {
    record!("glLinkProgram", program);
}

/// `GL_INFO_LOG_LENGTH`: the log length including its terminator, or 0
fn info_log_length() -> GLint {
    with(|state| {
        state
            .info_log
            .as_ref()
            .map_or(0, |log| log.as_bytes_with_nul().len() as GLint)
    })
}

fn status(ok: bool) -> GLint {
    GLint::from(if ok { ffi::TRUE } else { ffi::FALSE })
}

extern "system" fn get_shaderiv(_shader: GLuint, pname: GLenum, params: *mut GLint) {
    let value = match pname {
        ffi::INFO_LOG_LENGTH => info_log_length(),
        ffi::COMPILE_STATUS => status(with(|state| state.compile_status)),
        _ => 0,
    };
    unsafe { *params = value };
}

extern "system" fn get_programiv(_program: GLuint, pname: GLenum, params: *mut GLint) {
    let value = match pname {
        ffi::INFO_LOG_LENGTH => info_log_length(),
        ffi::LINK_STATUS => status(with(|state| state.link_status)),
        _ => 0,
    };
    unsafe { *params = value };
}

/// Copy the info log into a caller buffer the way drivers do
fn write_info_log(buf_size: GLsizei, length: *mut GLsizei, log: *mut GLchar) {
    let bytes = with(|state| {
        state
            .info_log
            .as_ref()
            .map(|log| log.as_bytes().to_vec())
            .unwrap_or_default()
    });
    let capacity = usize::try_from(buf_size).unwrap_or(0);
    if capacity == 0 || log.is_null() {
        return;
    }
    let copied = bytes.len().min(capacity - 1);
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), log.cast::<u8>(), copied);
        *log.add(copied) = 0;
        if !length.is_null() {
            *length = copied as GLsizei;
        }
    }
}

extern "system" fn get_shader_info_log(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, log: *mut GLchar) {
    record!("glGetShaderInfoLog", shader, buf_size);
    write_info_log(buf_size, length, log);
}

extern "system" fn get_program_info_log(
    program: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    log: *mut GLchar,
) {
    record!("glGetProgramInfoLog", program, buf_size);
    write_info_log(buf_size, length, log);
}

extern "system" fn get_uniform_location(program: GLuint, name: *const GLchar) -> GLint {
    record!("glGetUniformLocation", program);
    let name = unsafe { CStr::from_ptr(name) };
    if name.to_bytes().starts_with(b"u_") {
        0
    } else {
        -1
    }
}

// -----------------------------------------------------------------------------
// Textures and framebuffers
// -----------------------------------------------------------------------------

extern "system" fn tex_parameteri(target: GLenum, pname: GLenum, param: GLint) {
    record!("glTexParameteri", target, pname, param);
}

extern "system" fn tex_parameterf(target: GLenum, pname: GLenum, param: GLfloat) {
    record!("glTexParameterf", target, pname, param);
}

extern "system" fn texture_parameteri(texture: GLuint, pname: GLenum, param: GLint) {
    record!("glTextureParameteri", texture, pname, param);
}

extern "system" fn active_texture(texture: GLenum) {
    record!("glActiveTexture", texture);
}

extern "system" fn check_framebuffer_status(_target: GLenum) -> GLenum {
    with(|state| state.framebuffer_status)
}

extern "system" fn check_named_framebuffer_status(_framebuffer: GLuint, _target: GLenum) -> GLenum {
    with(|state| state.framebuffer_status)
}

extern "system" fn draw_buffers(n: GLsizei, bufs: *const GLenum) {
    let mut args = vec![n.arg()];
    args.extend(unsafe { input(n, bufs) }.into_iter().map(Arg::arg));
    record("glDrawBuffers", args);
}

extern "system" fn named_framebuffer_renderbuffer(
    framebuffer: GLuint,
    attachment: GLenum,
    rb_target: GLenum,
    renderbuffer: GLuint,
) {
    record!("glNamedFramebufferRenderbuffer", framebuffer, attachment, rb_target, renderbuffer);
}

// -----------------------------------------------------------------------------
// Sync objects
// -----------------------------------------------------------------------------

static FENCE: u8 = 0;

extern "system" fn fence_sync(condition: GLenum, flags: GLbitfield) -> GLsync {
    record!("glFenceSync", condition, flags);
    if with(|state| state.fail_creation) {
        return ptr::null();
    }
    ptr::addr_of!(FENCE).cast()
}

extern "system" fn delete_sync(_sync: GLsync) {
    record!("glDeleteSync");
}

extern "system" fn client_wait_sync(_sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum {
    record!("glClientWaitSync", flags, timeout);
    with(|state| state.wait_result)
}

// -----------------------------------------------------------------------------
// Debug output
// -----------------------------------------------------------------------------

extern "system" fn debug_message_callback(callback: GLDEBUGPROC, user_param: *const c_void) {
    with(|state| {
        state.debug_callback = callback;
        state.debug_user_param = user_param as usize;
    });
}

extern "system" fn debug_message_control(
    source: GLenum,
    kind: GLenum,
    severity: GLenum,
    count: GLsizei,
    _ids: *const GLuint,
    enabled: GLboolean,
) {
    record!("glDebugMessageControl", source, kind, severity, count, enabled);
}

extern "system" fn debug_message_insert(
    source: GLenum,
    kind: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    buf: *const GLchar,
) {
    let bytes = unsafe { input(length, buf.cast::<u8>()) };
    let text = String::from_utf8_lossy(&bytes).into_owned();
    FakeDriver::emit_debug_message(source, kind, id, severity, &text);
}

extern "system" fn object_label(identifier: GLenum, name: GLuint, length: GLsizei, _label: *const GLchar) {
    record!("glObjectLabel", identifier, name, length);
}

/// Resolver over the fake entry points; anything unlisted stays unloaded
pub(crate) fn resolve(name: &CStr) -> *const c_void {
    match name.to_bytes() {
        b"glGetError" => get_error as *const c_void,
        b"glGetString" => get_string as *const c_void,
        b"glGetStringi" => get_string_i as *const c_void,
        b"glGetIntegerv" => get_integerv as *const c_void,
        b"glGetFloatv" => get_floatv as *const c_void,
        b"glIsEnabled" => is_enabled as *const c_void,
        b"glEnable" => enable as *const c_void,
        b"glDisable" => disable as *const c_void,
        b"glClear" => clear as *const c_void,
        b"glStencilFunc" => stencil_func as *const c_void,
        b"glGenBuffers" => gen_buffers as *const c_void,
        b"glCreateBuffers" => create_buffers as *const c_void,
        b"glDeleteBuffers" => delete_buffers as *const c_void,
        b"glGenVertexArrays" => gen_vertex_arrays as *const c_void,
        b"glCreateVertexArrays" => create_vertex_arrays as *const c_void,
        b"glGenTextures" => gen_textures as *const c_void,
        b"glCreateTextures" => create_textures as *const c_void,
        b"glGenFramebuffers" => gen_framebuffers as *const c_void,
        b"glCreateFramebuffers" => create_framebuffers as *const c_void,
        b"glGenRenderbuffers" => gen_renderbuffers as *const c_void,
        b"glCreateRenderbuffers" => create_renderbuffers as *const c_void,
        b"glGenProgramPipelines" => gen_program_pipelines as *const c_void,
        b"glCreateProgramPipelines" => create_program_pipelines as *const c_void,
        b"glCreateShader" => create_shader as *const c_void,
        b"glCreateProgram" => create_program as *const c_void,
        b"glBindBuffer" => bind_buffer as *const c_void,
        b"glBufferData" => buffer_data as *const c_void,
        b"glMapBufferRange" => map_buffer_range as *const c_void,
        b"glUnmapBuffer" => unmap_buffer as *const c_void,
        b"glGetBufferParameteriv" => get_buffer_parameteriv as *const c_void,
        b"glVertexArrayAttribFormat" => vertex_array_attrib_format as *const c_void,
        b"glDrawArrays" => draw_arrays as *const c_void,
        b"glDrawElements" => draw_elements as *const c_void,
        b"glMemoryBarrier" => memory_barrier as *const c_void,
        b"glShaderSource" => shader_source as *const c_void,
        b"glCompileShader" => compile_shader as *const c_void,
        b"glDeleteShader" => delete_shader as *const c_void,
        b"glDeleteProgram" => delete_program as *const c_void,
        b"glAttachShader" => attach_shader as *const c_void,
        b"glDetachShader" => detach_shader as *const c_void,
        b"glLinkProgram" => link_program as *const c_void,
        b"glGetShaderiv" => get_shaderiv as *const c_void,
        b"glGetProgramiv" => get_programiv as *const c_void,
        b"glGetShaderInfoLog" => get_shader_info_log as *const c_void,
        b"glGetProgramInfoLog" => get_program_info_log as *const c_void,
        b"glGetUniformLocation" => get_uniform_location as *const c_void,
        b"glTexParameteri" => tex_parameteri as *const c_void,
        b"glTexParameterf" => tex_parameterf as *const c_void,
        b"glTextureParameteri" => texture_parameteri as *const c_void,
        b"glActiveTexture" => active_texture as *const c_void,
        b"glCheckFramebufferStatus" => check_framebuffer_status as *const c_void,
        b"glCheckNamedFramebufferStatus" => check_named_framebuffer_status as *const c_void,
        b"glDrawBuffers" => draw_buffers as *const c_void,
        b"glNamedFramebufferRenderbuffer" => named_framebuffer_renderbuffer as *const c_void,
        b"glFenceSync" => fence_sync as *const c_void,
        b"glDeleteSync" => delete_sync as *const c_void,
        b"glClientWaitSync" => client_wait_sync as *const c_void,
        b"glDebugMessageCallback" => debug_message_callback as *const c_void,
        b"glDebugMessageControl" => debug_message_control as *const c_void,
        b"glDebugMessageInsert" => debug_message_insert as *const c_void,
        b"glObjectLabel" => object_label as *const c_void,
        _ => ptr::null(),
    }
}
