//! Vertex array objects and attribute layout

use crate::context::{gl_bool, sizei, sizeiptr};
use crate::enums::VertexAttribType;
use crate::ffi::GLint;
use crate::handle::{Buffer, VertexArray};
use crate::Gl;

/// Components per attribute; GL accepts 1 to 4
fn components(size: u8, call: &'static str) -> GLint {
    assert!((1..=4).contains(&size), "{call}: {size} components per attribute");
    GLint::from(size)
}

impl Gl {
    pub fn bind_vertex_array(&self, array: VertexArray) {
        unsafe { self.fns.bind_vertex_array(array.raw()) };
        self.check("glBindVertexArray");
    }

    pub fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.fns.enable_vertex_attrib_array(index) };
        self.check("glEnableVertexAttribArray");
    }

    pub fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.fns.disable_vertex_attrib_array(index) };
        self.check("glDisableVertexAttribArray");
    }

    /// Describe attribute `index` as `size` components of `kind`, read from the
    /// bound `GL_ARRAY_BUFFER` at byte `offset`.
    ///
    /// # Safety
    ///
    /// A buffer must be bound to `GL_ARRAY_BUFFER`. Without one a compatibility
    /// context treats `offset` as a client pointer and later draws read from it.
    pub unsafe fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: u8,
        kind: VertexAttribType,
        normalized: bool,
        stride: usize,
        offset: usize,
    ) {
        const CALL: &str = "glVertexAttribPointer";
        self.fns.vertex_attrib_pointer(
            index,
            components(size, CALL),
            kind.to_raw(),
            gl_bool(normalized),
            sizei(stride, CALL),
            offset as *const _,
        );
        self.check(CALL);
    }

    /// Integer variant of [`Gl::vertex_attrib_pointer`]
    ///
    /// # Safety
    ///
    /// Same contract as [`Gl::vertex_attrib_pointer`].
    pub unsafe fn vertex_attrib_i_pointer(
        &self,
        index: u32,
        size: u8,
        kind: VertexAttribType,
        stride: usize,
        offset: usize,
    ) {
        const CALL: &str = "glVertexAttribIPointer";
        self.fns.vertex_attrib_i_pointer(
            index,
            components(size, CALL),
            kind.to_raw(),
            sizei(stride, CALL),
            offset as *const _,
        );
        self.check(CALL);
    }

    pub fn vertex_attrib_divisor(&self, index: u32, divisor: u32) {
        unsafe { self.fns.vertex_attrib_divisor(index, divisor) };
        self.check("glVertexAttribDivisor");
    }

    pub fn enable_vertex_array_attrib(&self, array: VertexArray, index: u32) {
        unsafe { self.fns.enable_vertex_array_attrib(array.raw(), index) };
        self.check("glEnableVertexArrayAttrib");
    }

    pub fn disable_vertex_array_attrib(&self, array: VertexArray, index: u32) {
        unsafe { self.fns.disable_vertex_array_attrib(array.raw(), index) };
        self.check("glDisableVertexArrayAttrib");
    }

    pub fn vertex_array_vertex_buffer(
        &self,
        array: VertexArray,
        binding: u32,
        buffer: Buffer,
        offset: usize,
        stride: usize,
    ) {
        const CALL: &str = "glVertexArrayVertexBuffer";
        unsafe {
            self.fns.vertex_array_vertex_buffer(
                array.raw(),
                binding,
                buffer.raw(),
                sizeiptr(offset, CALL),
                sizei(stride, CALL),
            )
        };
        self.check(CALL);
    }

    pub fn vertex_array_element_buffer(&self, array: VertexArray, buffer: Buffer) {
        unsafe { self.fns.vertex_array_element_buffer(array.raw(), buffer.raw()) };
        self.check("glVertexArrayElementBuffer");
    }

    pub fn vertex_array_attrib_format(
        &self,
        array: VertexArray,
        attrib: u32,
        size: u8,
        kind: VertexAttribType,
        normalized: bool,
        relative_offset: u32,
    ) {
        const CALL: &str = "glVertexArrayAttribFormat";
        unsafe {
            self.fns.vertex_array_attrib_format(
                array.raw(),
                attrib,
                components(size, CALL),
                kind.to_raw(),
                gl_bool(normalized),
                relative_offset,
            )
        };
        self.check(CALL);
    }

    pub fn vertex_array_attrib_binding(&self, array: VertexArray, attrib: u32, binding: u32) {
        unsafe { self.fns.vertex_array_attrib_binding(array.raw(), attrib, binding) };
        self.check("glVertexArrayAttribBinding");
    }
}
