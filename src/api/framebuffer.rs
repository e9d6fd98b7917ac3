//! Framebuffers and renderbuffers

use crate::context::sizei;
use crate::enums::{
    Attachment, BlitFilter, ClearMask, DrawBuffer, FramebufferStatus, FramebufferTarget, InternalFormat,
    PixelFormat, PixelType, RenderbufferTarget, TexImageTarget,
};
use crate::ffi::{self, GLenum, GLint};
use crate::handle::{Framebuffer, Renderbuffer, Texture};
use crate::Gl;
use tracing::warn;

/// A rectangle as the blit corners `[x0, y0, x1, y1]`
pub type BlitRect = [GLint; 4];

fn status(raw: GLenum, call: &'static str) -> Option<FramebufferStatus> {
    if raw == 0 {
        return None;
    }
    let status = FramebufferStatus::from_raw(raw);
    if status.is_none() {
        warn!("{}: unrecognised framebuffer status 0x{:04X}", call, raw);
    }
    status
}

impl Gl {
    pub fn bind_framebuffer(&self, target: FramebufferTarget, framebuffer: Framebuffer) {
        unsafe { self.fns.bind_framebuffer(target.to_raw(), framebuffer.raw()) };
        self.check("glBindFramebuffer");
    }

    pub fn framebuffer_texture_2d(
        &self,
        target: FramebufferTarget,
        attachment: Attachment,
        tex_target: TexImageTarget,
        texture: Texture,
        level: GLint,
    ) {
        unsafe {
            self.fns.framebuffer_texture_2d(
                target.to_raw(),
                attachment.to_raw(),
                tex_target.to_raw(),
                texture.raw(),
                level,
            )
        };
        self.check("glFramebufferTexture2D");
    }

    pub fn framebuffer_renderbuffer(
        &self,
        target: FramebufferTarget,
        attachment: Attachment,
        renderbuffer: Renderbuffer,
    ) {
        unsafe {
            self.fns.framebuffer_renderbuffer(
                target.to_raw(),
                attachment.to_raw(),
                RenderbufferTarget::Renderbuffer.to_raw(),
                renderbuffer.raw(),
            )
        };
        self.check("glFramebufferRenderbuffer");
    }

    pub fn named_framebuffer_texture(
        &self,
        framebuffer: Framebuffer,
        attachment: Attachment,
        texture: Texture,
        level: GLint,
    ) {
        unsafe {
            self.fns
                .named_framebuffer_texture(framebuffer.raw(), attachment.to_raw(), texture.raw(), level)
        };
        self.check("glNamedFramebufferTexture");
    }

    pub fn named_framebuffer_renderbuffer(
        &self,
        framebuffer: Framebuffer,
        attachment: Attachment,
        renderbuffer: Renderbuffer,
    ) {
        unsafe {
            self.fns.named_framebuffer_renderbuffer(
                framebuffer.raw(),
                attachment.to_raw(),
                RenderbufferTarget::Renderbuffer.to_raw(),
                renderbuffer.raw(),
            )
        };
        self.check("glNamedFramebufferRenderbuffer");
    }

    /// Completeness of the framebuffer bound to `target`.
    ///
    /// `None` when the driver returned 0, which it does after raising an error.
    pub fn check_framebuffer_status(&self, target: FramebufferTarget) -> Option<FramebufferStatus> {
        const CALL: &str = "glCheckFramebufferStatus";
        let raw = unsafe { self.fns.check_framebuffer_status(target.to_raw()) };
        self.check(CALL);
        status(raw, CALL)
    }

    pub fn check_named_framebuffer_status(
        &self,
        framebuffer: Framebuffer,
        target: FramebufferTarget,
    ) -> Option<FramebufferStatus> {
        const CALL: &str = "glCheckNamedFramebufferStatus";
        let raw = unsafe { self.fns.check_named_framebuffer_status(framebuffer.raw(), target.to_raw()) };
        self.check(CALL);
        status(raw, CALL)
    }

    pub fn draw_buffers(&self, buffers: &[DrawBuffer]) {
        const CALL: &str = "glDrawBuffers";
        let raw: Vec<GLenum> = buffers.iter().map(|buffer| buffer.to_raw()).collect();
        unsafe { self.fns.draw_buffers(sizei(raw.len(), CALL), raw.as_ptr()) };
        self.check(CALL);
    }

    pub fn read_buffer(&self, buffer: DrawBuffer) {
        unsafe { self.fns.read_buffer(buffer.to_raw()) };
        self.check("glReadBuffer");
    }

    /// Copy `src` of the read framebuffer into `dst` of the draw framebuffer
    pub fn blit_framebuffer(&self, src: BlitRect, dst: BlitRect, mask: ClearMask, filter: BlitFilter) {
        let [sx0, sy0, sx1, sy1] = src;
        let [dx0, dy0, dx1, dy1] = dst;
        unsafe {
            self.fns
                .blit_framebuffer(sx0, sy0, sx1, sy1, dx0, dy0, dx1, dy1, mask.bits(), filter.to_raw())
        };
        self.check("glBlitFramebuffer");
    }

    /// Read a `width` by `height` block of the read framebuffer into `out`.
    ///
    /// # Safety
    ///
    /// With no buffer bound to `GL_PIXEL_PACK_BUFFER`, `out` must be large enough
    /// for the block as laid out by `format`, `kind` and the current pack state.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: usize,
        height: usize,
        format: PixelFormat,
        kind: PixelType,
        out: &mut [u8],
    ) {
        const CALL: &str = "glReadPixels";
        self.fns.read_pixels(
            x,
            y,
            sizei(width, CALL),
            sizei(height, CALL),
            format.to_raw(),
            kind.to_raw(),
            out.as_mut_ptr().cast(),
        );
        self.check(CALL);
    }

    pub fn bind_renderbuffer(&self, renderbuffer: Renderbuffer) {
        unsafe { self.fns.bind_renderbuffer(ffi::RENDERBUFFER, renderbuffer.raw()) };
        self.check("glBindRenderbuffer");
    }

    pub fn renderbuffer_storage(&self, internal_format: InternalFormat, width: usize, height: usize) {
        const CALL: &str = "glRenderbufferStorage";
        unsafe {
            self.fns.renderbuffer_storage(
                ffi::RENDERBUFFER,
                internal_format.to_raw(),
                sizei(width, CALL),
                sizei(height, CALL),
            )
        };
        self.check(CALL);
    }

    pub fn renderbuffer_storage_multisample(
        &self,
        samples: usize,
        internal_format: InternalFormat,
        width: usize,
        height: usize,
    ) {
        const CALL: &str = "glRenderbufferStorageMultisample";
        unsafe {
            self.fns.renderbuffer_storage_multisample(
                ffi::RENDERBUFFER,
                sizei(samples, CALL),
                internal_format.to_raw(),
                sizei(width, CALL),
                sizei(height, CALL),
            )
        };
        self.check(CALL);
    }

    pub fn named_renderbuffer_storage(
        &self,
        renderbuffer: Renderbuffer,
        internal_format: InternalFormat,
        width: usize,
        height: usize,
    ) {
        const CALL: &str = "glNamedRenderbufferStorage";
        unsafe {
            self.fns.named_renderbuffer_storage(
                renderbuffer.raw(),
                internal_format.to_raw(),
                sizei(width, CALL),
                sizei(height, CALL),
            )
        };
        self.check(CALL);
    }
}
