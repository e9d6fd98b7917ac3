//! Texture parameters whose legal values depend on the parameter
//!
//! `glTexParameteri(target, GL_TEXTURE_WRAP_S, GL_LINEAR)` is accepted by the C
//! API and rejected by the driver at runtime. Here each parameter is a marker type
//! that names its own value type, so the same mistake fails to compile:
//!
//! ```compile_fail
//! # use flick_gl::{tex_param::WrapS, TextureMinFilter, TextureParameter};
//! let _ = <WrapS as TextureParameter>::encode(TextureMinFilter::Linear);
//! ```

use crate::enums::{CompareFunc, TextureCompareMode, TextureMagFilter, TextureMinFilter, TextureWrap};
use crate::ffi::{self, GLenum, GLfloat, GLint};

/// A parameter value as the driver receives it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawParam {
    Int(GLint),
    Float(GLfloat),
}

/// Values that can be passed for some texture parameter
pub trait ParamValue: Copy {
    fn to_raw_param(self) -> RawParam;
}

macro_rules! enum_param_value {
    ($($ty:ty),+) => {
        $(
            impl ParamValue for $ty {
                fn to_raw_param(self) -> RawParam {
                    // GL takes enum-valued parameters through the signed entry point.
                    RawParam::Int(self.to_raw() as GLint)
                }
            }
        )+
    };
}

enum_param_value!(TextureMinFilter, TextureMagFilter, TextureWrap, TextureCompareMode, CompareFunc);

impl ParamValue for GLint {
    fn to_raw_param(self) -> RawParam {
        RawParam::Int(self)
    }
}

impl ParamValue for GLfloat {
    fn to_raw_param(self) -> RawParam {
        RawParam::Float(self)
    }
}

/// A texture parameter and the only value type it accepts
pub trait TextureParameter {
    const PNAME: GLenum;
    type Value: ParamValue;

    fn encode(value: Self::Value) -> RawParam {
        value.to_raw_param()
    }
}

macro_rules! texture_parameter {
    ($( $(#[$meta:meta])* $marker:ident => $pname:path, $value:ty; )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $marker;

            impl TextureParameter for $marker {
                const PNAME: GLenum = $pname;
                type Value = $value;
            }
        )+
    };
}

texture_parameter! {
    /// `GL_TEXTURE_MIN_FILTER`
    MinFilter => ffi::TEXTURE_MIN_FILTER, TextureMinFilter;
    /// `GL_TEXTURE_MAG_FILTER`
    MagFilter => ffi::TEXTURE_MAG_FILTER, TextureMagFilter;
    WrapS => ffi::TEXTURE_WRAP_S, TextureWrap;
    WrapT => ffi::TEXTURE_WRAP_T, TextureWrap;
    WrapR => ffi::TEXTURE_WRAP_R, TextureWrap;
    CompareMode => ffi::TEXTURE_COMPARE_MODE, TextureCompareMode;
    CompareFunction => ffi::TEXTURE_COMPARE_FUNC, CompareFunc;
    BaseLevel => ffi::TEXTURE_BASE_LEVEL, GLint;
    MaxLevel => ffi::TEXTURE_MAX_LEVEL, GLint;
    MinLod => ffi::TEXTURE_MIN_LOD, GLfloat;
    MaxLod => ffi::TEXTURE_MAX_LOD, GLfloat;
    LodBias => ffi::TEXTURE_LOD_BIAS, GLfloat;
    /// `GL_TEXTURE_MAX_ANISOTROPY` (GL 4.6 or `EXT_texture_filter_anisotropic`)
    MaxAnisotropy => ffi::TEXTURE_MAX_ANISOTROPY, GLfloat;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_values_are_passed_as_int() {
        assert_eq!(
            MinFilter::encode(TextureMinFilter::LinearMipmapLinear),
            RawParam::Int(ffi::LINEAR_MIPMAP_LINEAR as GLint)
        );
        assert_eq!(
            WrapT::encode(TextureWrap::ClampToEdge),
            RawParam::Int(ffi::CLAMP_TO_EDGE as GLint)
        );
        assert_eq!(
            CompareMode::encode(TextureCompareMode::None),
            RawParam::Int(0)
        );
    }

    #[test]
    fn test_numeric_values_keep_their_kind() {
        assert_eq!(MaxLevel::encode(4), RawParam::Int(4));
        assert_eq!(LodBias::encode(-0.5), RawParam::Float(-0.5));
    }

    #[test]
    fn test_pnames() {
        assert_eq!(MagFilter::PNAME, 0x2800);
        assert_eq!(WrapR::PNAME, 0x8072);
        assert_eq!(MaxAnisotropy::PNAME, 0x84FE);
    }
}
