//! Textures

use crate::context::sizei;
use crate::enums::{InternalFormat, PixelFormat, PixelType, TexImageTarget, TextureTarget};
use crate::ffi::{self, GLint};
use crate::handle::Texture;
use crate::tex_param::{RawParam, TextureParameter};
use crate::Gl;
use std::ffi::c_void;
use std::ptr;

fn pixels_ptr(pixels: Option<&[u8]>) -> *const c_void {
    pixels.map_or(ptr::null(), |pixels| pixels.as_ptr().cast())
}

impl Gl {
    /// Fill `out` with new texture names for `target` (`glCreateTextures`)
    pub fn create_textures(&self, target: TextureTarget, out: &mut [Texture]) {
        const CALL: &str = "glCreateTextures";
        out.fill(Texture::INVALID);
        unsafe {
            self.fns
                .create_textures(target.to_raw(), sizei(out.len(), CALL), out.as_mut_ptr().cast())
        };
        self.check(CALL);
        super::expect_created(out, CALL);
    }

    pub fn create_texture(&self, target: TextureTarget) -> Texture {
        let mut scratch = [Texture::INVALID; 1];
        self.create_textures(target, &mut scratch);
        scratch[0]
    }

    pub fn bind_texture(&self, target: TextureTarget, texture: Texture) {
        unsafe { self.fns.bind_texture(target.to_raw(), texture.raw()) };
        self.check("glBindTexture");
    }

    /// Select texture unit `unit` (`GL_TEXTURE0 + unit`)
    pub fn active_texture(&self, unit: u32) {
        let Some(raw) = ffi::TEXTURE0.checked_add(unit) else {
            panic!("glActiveTexture: texture unit {unit} out of range");
        };
        unsafe { self.fns.active_texture(raw) };
        self.check("glActiveTexture");
    }

    pub fn bind_texture_unit(&self, unit: u32, texture: Texture) {
        unsafe { self.fns.bind_texture_unit(unit, texture.raw()) };
        self.check("glBindTextureUnit");
    }

    /// Define a 2D image; `pixels: None` allocates without uploading.
    ///
    /// # Safety
    ///
    /// With no buffer bound to `GL_PIXEL_UNPACK_BUFFER`, `pixels` must hold the
    /// whole `width` by `height` image as laid out by `format`, `kind` and the
    /// current unpack state. With one bound, `pixels` is ignored in favour of the
    /// buffer and must be `None`.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn tex_image_2d(
        &self,
        target: TexImageTarget,
        level: GLint,
        internal_format: InternalFormat,
        width: usize,
        height: usize,
        format: PixelFormat,
        kind: PixelType,
        pixels: Option<&[u8]>,
    ) {
        const CALL: &str = "glTexImage2D";
        self.fns.tex_image_2d(
            target.to_raw(),
            level,
            internal_format.to_raw() as GLint,
            sizei(width, CALL),
            sizei(height, CALL),
            0,
            format.to_raw(),
            kind.to_raw(),
            pixels_ptr(pixels),
        );
        self.check(CALL);
    }

    /// # Safety
    ///
    /// `pixels` must hold the whole `width` by `height` region as laid out by
    /// `format`, `kind` and the current unpack state.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn tex_sub_image_2d(
        &self,
        target: TexImageTarget,
        level: GLint,
        x: GLint,
        y: GLint,
        width: usize,
        height: usize,
        format: PixelFormat,
        kind: PixelType,
        pixels: &[u8],
    ) {
        const CALL: &str = "glTexSubImage2D";
        self.fns.tex_sub_image_2d(
            target.to_raw(),
            level,
            x,
            y,
            sizei(width, CALL),
            sizei(height, CALL),
            format.to_raw(),
            kind.to_raw(),
            pixels_ptr(Some(pixels)),
        );
        self.check(CALL);
    }

    /// # Safety
    ///
    /// Same contract as [`Gl::tex_sub_image_2d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn texture_sub_image_2d(
        &self,
        texture: Texture,
        level: GLint,
        x: GLint,
        y: GLint,
        width: usize,
        height: usize,
        format: PixelFormat,
        kind: PixelType,
        pixels: &[u8],
    ) {
        const CALL: &str = "glTextureSubImage2D";
        self.fns.texture_sub_image_2d(
            texture.raw(),
            level,
            x,
            y,
            sizei(width, CALL),
            sizei(height, CALL),
            format.to_raw(),
            kind.to_raw(),
            pixels_ptr(Some(pixels)),
        );
        self.check(CALL);
    }

    pub fn tex_storage_2d(
        &self,
        target: TextureTarget,
        levels: usize,
        internal_format: InternalFormat,
        width: usize,
        height: usize,
    ) {
        const CALL: &str = "glTexStorage2D";
        unsafe {
            self.fns.tex_storage_2d(
                target.to_raw(),
                sizei(levels, CALL),
                internal_format.to_raw(),
                sizei(width, CALL),
                sizei(height, CALL),
            )
        };
        self.check(CALL);
    }

    pub fn texture_storage_2d(
        &self,
        texture: Texture,
        levels: usize,
        internal_format: InternalFormat,
        width: usize,
        height: usize,
    ) {
        const CALL: &str = "glTextureStorage2D";
        unsafe {
            self.fns.texture_storage_2d(
                texture.raw(),
                sizei(levels, CALL),
                internal_format.to_raw(),
                sizei(width, CALL),
                sizei(height, CALL),
            )
        };
        self.check(CALL);
    }

    /// Set parameter `P` on the texture bound to `target`.
    ///
    /// ```ignore
    /// gl.tex_parameter::<WrapS>(TextureTarget::Texture2D, TextureWrap::ClampToEdge);
    /// ```
    pub fn tex_parameter<P: TextureParameter>(&self, target: TextureTarget, value: P::Value) {
        match P::encode(value) {
            RawParam::Int(raw) => {
                unsafe { self.fns.tex_parameteri(target.to_raw(), P::PNAME, raw) };
                self.check("glTexParameteri");
            }
            RawParam::Float(raw) => {
                unsafe { self.fns.tex_parameterf(target.to_raw(), P::PNAME, raw) };
                self.check("glTexParameterf");
            }
        }
    }

    /// Set parameter `P` on `texture` directly
    pub fn texture_parameter<P: TextureParameter>(&self, texture: Texture, value: P::Value) {
        match P::encode(value) {
            RawParam::Int(raw) => {
                unsafe { self.fns.texture_parameteri(texture.raw(), P::PNAME, raw) };
                self.check("glTextureParameteri");
            }
            RawParam::Float(raw) => {
                unsafe { self.fns.texture_parameterf(texture.raw(), P::PNAME, raw) };
                self.check("glTextureParameterf");
            }
        }
    }

    pub fn generate_mipmap(&self, target: TextureTarget) {
        unsafe { self.fns.generate_mipmap(target.to_raw()) };
        self.check("glGenerateMipmap");
    }

    pub fn generate_texture_mipmap(&self, texture: Texture) {
        unsafe { self.fns.generate_texture_mipmap(texture.raw()) };
        self.check("glGenerateTextureMipmap");
    }
}
