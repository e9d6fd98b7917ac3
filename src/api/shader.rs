//! Shaders, programs, uniforms and program pipelines

use crate::context::{gl_bool, sizei};
use crate::enums::{ProgramParameter, ShaderParameter, ShaderStages, ShaderType};
use crate::ffi::{self, GLchar, GLint, GLsizei};
use crate::handle::{AttribLocation, Program, ProgramPipeline, Shader, UniformLocation};
use crate::Gl;
use std::ffi::CString;
use tracing::warn;

/// Read an info log given its reported length, which counts the terminator.
///
/// `fetch` receives the buffer capacity, a slot for the written length and
/// the buffer itself.
fn read_info_log(reported: GLint, fetch: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar)) -> String {
    let capacity = match usize::try_from(reported) {
        Ok(0) | Err(_) => return String::new(),
        Ok(len) => len,
    };
    let mut buf = vec![0u8; capacity];
    let mut written: GLsizei = 0;
    fetch(sizei(capacity, "info log"), &mut written, buf.as_mut_ptr().cast());
    let len = usize::try_from(written).unwrap_or(0).min(capacity);
    buf.truncate(len);
    // Some drivers count the terminator in `written`.
    while buf.last() == Some(&0) {
        buf.pop();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// A name GL can look up, or `None` when it contains an interior NUL
fn lookup_name(name: &str, call: &'static str) -> Option<CString> {
    match CString::new(name) {
        Ok(name) => Some(name),
        Err(_) => {
            warn!("{}: name {:?} contains a NUL byte", call, name);
            None
        }
    }
}

impl Gl {
    pub fn create_shader(&self, kind: ShaderType) -> Shader {
        let shader = Shader::from_raw(unsafe { self.fns.create_shader(kind.to_raw()) });
        self.check("glCreateShader");
        super::expect_created(&[shader], "glCreateShader");
        shader
    }

    pub fn delete_shader(&self, shader: Shader) {
        unsafe { self.fns.delete_shader(shader.raw()) };
        self.check("glDeleteShader");
    }

    /// Replace the source of `shader` with `source`
    pub fn shader_source(&self, shader: Shader, source: &str) {
        self.shader_source_parts(shader, &[source]);
    }

    /// Replace the source of `shader` with the concatenation of `parts`
    pub fn shader_source_parts(&self, shader: Shader, parts: &[&str]) {
        const CALL: &str = "glShaderSource";
        let strings: Vec<*const GLchar> = parts.iter().map(|part| part.as_ptr().cast()).collect();
        let lengths: Vec<GLint> = parts.iter().map(|part| sizei(part.len(), CALL)).collect();
        unsafe {
            self.fns
                .shader_source(shader.raw(), sizei(parts.len(), CALL), strings.as_ptr(), lengths.as_ptr())
        };
        self.check(CALL);
    }

    pub fn compile_shader(&self, shader: Shader) {
        unsafe { self.fns.compile_shader(shader.raw()) };
        self.check("glCompileShader");
    }

    pub fn get_shader_parameter(&self, shader: Shader, pname: ShaderParameter) -> GLint {
        let mut value = 0;
        unsafe { self.fns.get_shaderiv(shader.raw(), pname.to_raw(), &mut value) };
        self.check("glGetShaderiv");
        value
    }

    pub fn compile_status(&self, shader: Shader) -> bool {
        self.get_shader_parameter(shader, ShaderParameter::CompileStatus) != GLint::from(ffi::FALSE)
    }

    /// The shader's info log, empty when the driver has nothing to say
    pub fn get_shader_info_log(&self, shader: Shader) -> String {
        let reported = self.get_shader_parameter(shader, ShaderParameter::InfoLogLength);
        let log = read_info_log(reported, |capacity, written, buf| unsafe {
            self.fns.get_shader_info_log(shader.raw(), capacity, written, buf)
        });
        self.check("glGetShaderInfoLog");
        log
    }

    pub fn create_program(&self) -> Program {
        let program = Program::from_raw(unsafe { self.fns.create_program() });
        self.check("glCreateProgram");
        super::expect_created(&[program], "glCreateProgram");
        program
    }

    pub fn delete_program(&self, program: Program) {
        unsafe { self.fns.delete_program(program.raw()) };
        self.check("glDeleteProgram");
    }

    pub fn attach_shader(&self, program: Program, shader: Shader) {
        unsafe { self.fns.attach_shader(program.raw(), shader.raw()) };
        self.check("glAttachShader");
    }

    pub fn detach_shader(&self, program: Program, shader: Shader) {
        unsafe { self.fns.detach_shader(program.raw(), shader.raw()) };
        self.check("glDetachShader");
    }

    pub fn link_program(&self, program: Program) {
        unsafe { self.fns.link_program(program.raw()) };
        self.check("glLinkProgram");
    }

    pub fn validate_program(&self, program: Program) {
        unsafe { self.fns.validate_program(program.raw()) };
        self.check("glValidateProgram");
    }

    /// Make `program` current; [`Program::INVALID`] unbinds
    pub fn use_program(&self, program: Program) {
        unsafe { self.fns.use_program(program.raw()) };
        self.check("glUseProgram");
    }

    pub fn get_program_parameter(&self, program: Program, pname: ProgramParameter) -> GLint {
        let mut value = 0;
        unsafe { self.fns.get_programiv(program.raw(), pname.to_raw(), &mut value) };
        self.check("glGetProgramiv");
        value
    }

    pub fn link_status(&self, program: Program) -> bool {
        self.get_program_parameter(program, ProgramParameter::LinkStatus) != GLint::from(ffi::FALSE)
    }

    pub fn get_program_info_log(&self, program: Program) -> String {
        let reported = self.get_program_parameter(program, ProgramParameter::InfoLogLength);
        let log = read_info_log(reported, |capacity, written, buf| unsafe {
            self.fns.get_program_info_log(program.raw(), capacity, written, buf)
        });
        self.check("glGetProgramInfoLog");
        log
    }

    /// Mark `program` usable in a program pipeline; takes effect at the next link
    pub fn program_separable(&self, program: Program, separable: bool) {
        unsafe {
            self.fns.program_parameteri(
                program.raw(),
                ffi::PROGRAM_SEPARABLE,
                GLint::from(gl_bool(separable)),
            )
        };
        self.check("glProgramParameteri");
    }

    pub fn get_uniform_location(&self, program: Program, name: &str) -> UniformLocation {
        let Some(name) = lookup_name(name, "glGetUniformLocation") else {
            return UniformLocation::NOT_FOUND;
        };
        let location = unsafe { self.fns.get_uniform_location(program.raw(), name.as_ptr()) };
        self.check("glGetUniformLocation");
        UniformLocation::from_raw(location)
    }

    pub fn get_attrib_location(&self, program: Program, name: &str) -> AttribLocation {
        let Some(name) = lookup_name(name, "glGetAttribLocation") else {
            return AttribLocation::NOT_FOUND;
        };
        let location = unsafe { self.fns.get_attrib_location(program.raw(), name.as_ptr()) };
        self.check("glGetAttribLocation");
        AttribLocation::from_raw(location)
    }

    pub fn bind_attrib_location(&self, program: Program, index: u32, name: &str) {
        let Some(name) = lookup_name(name, "glBindAttribLocation") else {
            return;
        };
        unsafe { self.fns.bind_attrib_location(program.raw(), index, name.as_ptr()) };
        self.check("glBindAttribLocation");
    }

    /// Index of the named uniform block, `None` when there is no such block
    pub fn get_uniform_block_index(&self, program: Program, name: &str) -> Option<u32> {
        let name = lookup_name(name, "glGetUniformBlockIndex")?;
        let index = unsafe { self.fns.get_uniform_block_index(program.raw(), name.as_ptr()) };
        self.check("glGetUniformBlockIndex");
        (index != ffi::INVALID_INDEX).then_some(index)
    }

    pub fn uniform_block_binding(&self, program: Program, block: u32, binding: u32) {
        unsafe { self.fns.uniform_block_binding(program.raw(), block, binding) };
        self.check("glUniformBlockBinding");
    }

    pub fn uniform_1i(&self, location: UniformLocation, value: i32) {
        unsafe { self.fns.uniform_1i(location.raw(), value) };
        self.check("glUniform1i");
    }

    pub fn uniform_1ui(&self, location: UniformLocation, value: u32) {
        unsafe { self.fns.uniform_1ui(location.raw(), value) };
        self.check("glUniform1ui");
    }

    pub fn uniform_1f(&self, location: UniformLocation, value: f32) {
        unsafe { self.fns.uniform_1f(location.raw(), value) };
        self.check("glUniform1f");
    }

    pub fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32) {
        unsafe { self.fns.uniform_2f(location.raw(), x, y) };
        self.check("glUniform2f");
    }

    pub fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32) {
        unsafe { self.fns.uniform_3f(location.raw(), x, y, z) };
        self.check("glUniform3f");
    }

    pub fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32) {
        unsafe { self.fns.uniform_4f(location.raw(), x, y, z, w) };
        self.check("glUniform4f");
    }

    /// Upload column-major 3x3 matrices, unless `transpose` says row-major
    pub fn uniform_matrix_3fv(&self, location: UniformLocation, transpose: bool, matrices: &[[f32; 9]]) {
        const CALL: &str = "glUniformMatrix3fv";
        unsafe {
            self.fns.uniform_matrix_3fv(
                location.raw(),
                sizei(matrices.len(), CALL),
                gl_bool(transpose),
                matrices.as_ptr().cast(),
            )
        };
        self.check(CALL);
    }

    pub fn uniform_matrix_4fv(&self, location: UniformLocation, transpose: bool, matrices: &[[f32; 16]]) {
        const CALL: &str = "glUniformMatrix4fv";
        unsafe {
            self.fns.uniform_matrix_4fv(
                location.raw(),
                sizei(matrices.len(), CALL),
                gl_bool(transpose),
                matrices.as_ptr().cast(),
            )
        };
        self.check(CALL);
    }

    pub fn bind_program_pipeline(&self, pipeline: ProgramPipeline) {
        unsafe { self.fns.bind_program_pipeline(pipeline.raw()) };
        self.check("glBindProgramPipeline");
    }

    pub fn use_program_stages(&self, pipeline: ProgramPipeline, stages: ShaderStages, program: Program) {
        unsafe { self.fns.use_program_stages(pipeline.raw(), stages.bits(), program.raw()) };
        self.check("glUseProgramStages");
    }
}

/// Raised by [`Gl::build_program`] when a stage fails to compile or the
/// program fails to link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgramBuildError {
    #[error("{kind:?} shader failed to compile: {log}")]
    Compile { kind: ShaderType, log: String },
    #[error("program failed to link: {log}")]
    Link { log: String },
}

impl Gl {
    /// Compile each `(kind, source)` stage and link them into a program.
    ///
    /// Intermediate shaders are always deleted; on failure the program is too.
    pub fn build_program(&self, stages: &[(ShaderType, &str)]) -> Result<Program, ProgramBuildError> {
        let mut shaders = Vec::with_capacity(stages.len());
        let mut failure = None;
        for &(kind, source) in stages {
            let shader = self.create_shader(kind);
            self.shader_source(shader, source);
            self.compile_shader(shader);
            shaders.push(shader);
            if !self.compile_status(shader) {
                failure = Some(ProgramBuildError::Compile {
                    kind,
                    log: self.get_shader_info_log(shader),
                });
                break;
            }
        }

        let program = match failure {
            Some(error) => Err(error),
            None => {
                let program = self.create_program();
                for &shader in &shaders {
                    self.attach_shader(program, shader);
                }
                self.link_program(program);
                for &shader in &shaders {
                    self.detach_shader(program, shader);
                }
                if self.link_status(program) {
                    Ok(program)
                } else {
                    let log = self.get_program_info_log(program);
                    self.delete_program(program);
                    Err(ProgramBuildError::Link { log })
                }
            }
        };

        for shader in shaders {
            self.delete_shader(shader);
        }
        program
    }
}
