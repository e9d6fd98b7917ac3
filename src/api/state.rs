//! Fixed-function pipeline state

use crate::context::{gl_bool, sizei};
use crate::enums::{
    BlendEquation, BlendFactor, Capability, ClearMask, CompareFunc, Face, FrontFace, PixelStoreParameter,
    PolygonMode, StencilOp,
};
use crate::ffi::{self, GLint};
use crate::Gl;
use tracing::warn;

impl Gl {
    pub fn enable(&self, capability: Capability) {
        unsafe { self.fns.enable(capability.to_raw()) };
        self.check("glEnable");
    }

    /// Disable `capability`.
    ///
    /// [`Capability::DebugOutputSynchronous`] stays on while a context debug
    /// handler is registered.
    pub fn disable(&self, capability: Capability) {
        if capability == Capability::DebugOutputSynchronous && self.debug_slot.borrow().is_some() {
            warn!("Keeping GL_DEBUG_OUTPUT_SYNCHRONOUS on while a context debug handler is registered");
            return;
        }
        unsafe { self.fns.disable(capability.to_raw()) };
        self.check("glDisable");
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        let enabled = unsafe { self.fns.is_enabled(capability.to_raw()) };
        self.check("glIsEnabled");
        enabled != ffi::FALSE
    }

    pub fn viewport(&self, x: GLint, y: GLint, width: usize, height: usize) {
        unsafe { self.fns.viewport(x, y, sizei(width, "glViewport"), sizei(height, "glViewport")) };
        self.check("glViewport");
    }

    pub fn scissor(&self, x: GLint, y: GLint, width: usize, height: usize) {
        unsafe { self.fns.scissor(x, y, sizei(width, "glScissor"), sizei(height, "glScissor")) };
        self.check("glScissor");
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { self.fns.clear_color(r, g, b, a) };
        self.check("glClearColor");
    }

    pub fn clear_depth(&self, depth: f64) {
        unsafe { self.fns.clear_depth(depth) };
        self.check("glClearDepth");
    }

    pub fn clear_stencil(&self, value: GLint) {
        unsafe { self.fns.clear_stencil(value) };
        self.check("glClearStencil");
    }

    pub fn clear(&self, mask: ClearMask) {
        unsafe { self.fns.clear(mask.bits()) };
        self.check("glClear");
    }

    pub fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        unsafe { self.fns.blend_func(src.to_raw(), dst.to_raw()) };
        self.check("glBlendFunc");
    }

    pub fn blend_func_separate(
        &self,
        src_rgb: BlendFactor,
        dst_rgb: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    ) {
        unsafe {
            self.fns.blend_func_separate(
                src_rgb.to_raw(),
                dst_rgb.to_raw(),
                src_alpha.to_raw(),
                dst_alpha.to_raw(),
            )
        };
        self.check("glBlendFuncSeparate");
    }

    pub fn blend_equation(&self, mode: BlendEquation) {
        unsafe { self.fns.blend_equation(mode.to_raw()) };
        self.check("glBlendEquation");
    }

    pub fn blend_equation_separate(&self, rgb: BlendEquation, alpha: BlendEquation) {
        unsafe { self.fns.blend_equation_separate(rgb.to_raw(), alpha.to_raw()) };
        self.check("glBlendEquationSeparate");
    }

    pub fn blend_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { self.fns.blend_color(r, g, b, a) };
        self.check("glBlendColor");
    }

    pub fn depth_func(&self, func: CompareFunc) {
        unsafe { self.fns.depth_func(func.to_raw()) };
        self.check("glDepthFunc");
    }

    pub fn depth_mask(&self, write: bool) {
        unsafe { self.fns.depth_mask(gl_bool(write)) };
        self.check("glDepthMask");
    }

    pub fn color_mask(&self, r: bool, g: bool, b: bool, a: bool) {
        unsafe { self.fns.color_mask(gl_bool(r), gl_bool(g), gl_bool(b), gl_bool(a)) };
        self.check("glColorMask");
    }

    pub fn stencil_func(&self, func: CompareFunc, reference: GLint, mask: u32) {
        unsafe { self.fns.stencil_func(func.to_raw(), reference, mask) };
        self.check("glStencilFunc");
    }

    pub fn stencil_op(&self, stencil_fail: StencilOp, depth_fail: StencilOp, pass: StencilOp) {
        unsafe { self.fns.stencil_op(stencil_fail.to_raw(), depth_fail.to_raw(), pass.to_raw()) };
        self.check("glStencilOp");
    }

    pub fn stencil_mask(&self, mask: u32) {
        unsafe { self.fns.stencil_mask(mask) };
        self.check("glStencilMask");
    }

    pub fn cull_face(&self, face: Face) {
        unsafe { self.fns.cull_face(face.to_raw()) };
        self.check("glCullFace");
    }

    pub fn front_face(&self, winding: FrontFace) {
        unsafe { self.fns.front_face(winding.to_raw()) };
        self.check("glFrontFace");
    }

    pub fn polygon_mode(&self, face: Face, mode: PolygonMode) {
        unsafe { self.fns.polygon_mode(face.to_raw(), mode.to_raw()) };
        self.check("glPolygonMode");
    }

    pub fn polygon_offset(&self, factor: f32, units: f32) {
        unsafe { self.fns.polygon_offset(factor, units) };
        self.check("glPolygonOffset");
    }

    pub fn line_width(&self, width: f32) {
        unsafe { self.fns.line_width(width) };
        self.check("glLineWidth");
    }

    pub fn pixel_store(&self, pname: PixelStoreParameter, value: GLint) {
        unsafe { self.fns.pixel_storei(pname.to_raw(), value) };
        self.check("glPixelStorei");
    }

    pub fn flush(&self) {
        unsafe { self.fns.flush() };
        self.check("glFlush");
    }

    pub fn finish(&self) {
        unsafe { self.fns.finish() };
        self.check("glFinish");
    }
}
