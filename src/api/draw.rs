//! Draw calls and compute dispatch

use crate::context::sizei;
use crate::enums::{IndexType, MemoryBarrier, PrimitiveMode};
use crate::ffi::GLint;
use crate::Gl;

impl Gl {
    pub fn draw_arrays(&self, mode: PrimitiveMode, first: GLint, count: usize) {
        unsafe { self.fns.draw_arrays(mode.to_raw(), first, sizei(count, "glDrawArrays")) };
        self.check("glDrawArrays");
    }

    pub fn draw_arrays_instanced(&self, mode: PrimitiveMode, first: GLint, count: usize, instances: usize) {
        const CALL: &str = "glDrawArraysInstanced";
        unsafe {
            self.fns
                .draw_arrays_instanced(mode.to_raw(), first, sizei(count, CALL), sizei(instances, CALL))
        };
        self.check(CALL);
    }

    /// Draw `count` indices of `kind`, starting `offset` bytes into the bound
    /// element buffer.
    ///
    /// # Safety
    ///
    /// A buffer must be bound to `GL_ELEMENT_ARRAY_BUFFER` and hold that many
    /// indices past `offset`.
    pub unsafe fn draw_elements(&self, mode: PrimitiveMode, count: usize, kind: IndexType, offset: usize) {
        const CALL: &str = "glDrawElements";
        self.fns
            .draw_elements(mode.to_raw(), sizei(count, CALL), kind.to_raw(), offset as *const _);
        self.check(CALL);
    }

    /// # Safety
    ///
    /// Same contract as [`Gl::draw_elements`].
    pub unsafe fn draw_elements_instanced(
        &self,
        mode: PrimitiveMode,
        count: usize,
        kind: IndexType,
        offset: usize,
        instances: usize,
    ) {
        const CALL: &str = "glDrawElementsInstanced";
        self.fns.draw_elements_instanced(
            mode.to_raw(),
            sizei(count, CALL),
            kind.to_raw(),
            offset as *const _,
            sizei(instances, CALL),
        );
        self.check(CALL);
    }

    /// # Safety
    ///
    /// Same contract as [`Gl::draw_elements`].
    pub unsafe fn draw_elements_base_vertex(
        &self,
        mode: PrimitiveMode,
        count: usize,
        kind: IndexType,
        offset: usize,
        base_vertex: GLint,
    ) {
        const CALL: &str = "glDrawElementsBaseVertex";
        self.fns.draw_elements_base_vertex(
            mode.to_raw(),
            sizei(count, CALL),
            kind.to_raw(),
            offset as *const _,
            base_vertex,
        );
        self.check(CALL);
    }

    pub fn dispatch_compute(&self, x: u32, y: u32, z: u32) {
        unsafe { self.fns.dispatch_compute(x, y, z) };
        self.check("glDispatchCompute");
    }

    pub fn memory_barrier(&self, barriers: MemoryBarrier) {
        unsafe { self.fns.memory_barrier(barriers.bits()) };
        self.check("glMemoryBarrier");
    }
}
