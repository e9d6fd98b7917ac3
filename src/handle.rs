//! Typed GL object names
//!
//! A handle is just the integer the driver handed out. There is no ownership or
//! release on drop: the caller creates, uses and deletes explicitly, exactly as
//! with raw GL. A handle is meaningless once deleted or once its context is gone.

use crate::ffi::{GLint, GLsync, GLuint};

/// Common surface of the integer-named handle types
pub trait Handle: Copy + Eq + std::fmt::Debug {
    /// Reserved name that no successful creation ever returns
    const INVALID: Self;

    fn from_raw(raw: GLuint) -> Self;

    fn raw(self) -> GLuint;

    fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

macro_rules! gl_handle {
    ($( $(#[$meta:meta])* $name:ident ),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #[repr(transparent)]
            pub struct $name(GLuint);

            impl $name {
                pub const INVALID: Self = Self(0);

                pub const fn from_raw(raw: GLuint) -> Self {
                    Self(raw)
                }

                pub const fn raw(self) -> GLuint {
                    self.0
                }

                pub const fn is_valid(self) -> bool {
                    self.0 != 0
                }
            }

            impl Handle for $name {
                const INVALID: Self = Self(0);

                fn from_raw(raw: GLuint) -> Self {
                    Self(raw)
                }

                fn raw(self) -> GLuint {
                    self.0
                }
            }

            impl From<$name> for GLuint {
                fn from(handle: $name) -> Self {
                    handle.0
                }
            }
        )+
    };
}

gl_handle! {
    /// Vertex array object
    VertexArray,
    /// Buffer object
    Buffer,
    /// Shader object
    Shader,
    /// Program object
    Program,
    /// Program pipeline object
    ProgramPipeline,
    /// Texture object
    Texture,
    /// Renderbuffer object
    Renderbuffer,
    /// Framebuffer object
    Framebuffer,
}

/// Fence sync object. Unlike the other handles this is a driver pointer; null is
/// the invalid value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Sync(GLsync);

impl Sync {
    pub const INVALID: Self = Self(std::ptr::null());

    /// # Safety
    ///
    /// `raw` must be null or a sync object returned by `glFenceSync`.
    pub const unsafe fn from_raw(raw: GLsync) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> GLsync {
        self.0
    }

    pub fn is_valid(self) -> bool {
        !self.0.is_null()
    }
}

impl Default for Sync {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Uniform location; `-1` means the name is not an active uniform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct UniformLocation(GLint);

impl UniformLocation {
    pub const NOT_FOUND: Self = Self(-1);

    pub const fn from_raw(raw: GLint) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> GLint {
        self.0
    }

    /// The location as an `Option`, `None` when the uniform does not exist
    pub fn found(self) -> Option<Self> {
        (self.0 >= 0).then_some(self)
    }
}

/// Vertex attribute location; `-1` means the name is not an active attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct AttribLocation(GLint);

impl AttribLocation {
    pub const NOT_FOUND: Self = Self(-1);

    pub const fn from_raw(raw: GLint) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> GLint {
        self.0
    }

    /// The attribute index, `None` when the attribute does not exist
    pub fn index(self) -> Option<GLuint> {
        GLuint::try_from(self.0).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_is_zero() {
        assert_eq!(Buffer::INVALID.raw(), 0);
        assert!(!Texture::default().is_valid());
        assert!(Program::from_raw(7).is_valid());
        assert!(!Sync::INVALID.is_valid());
        assert_eq!(Sync::default(), Sync::INVALID);
    }

    #[test]
    fn test_trait_matches_inherent() {
        fn via_trait<H: Handle>(raw: GLuint) -> (GLuint, bool) {
            let handle = H::from_raw(raw);
            (handle.raw(), handle.is_valid())
        }
        assert_eq!(via_trait::<Framebuffer>(0), (0, false));
        assert_eq!(via_trait::<Renderbuffer>(3), (3, true));
        assert_eq!(<VertexArray as Handle>::INVALID, VertexArray::INVALID);
    }

    #[test]
    fn test_locations() {
        assert_eq!(UniformLocation::NOT_FOUND.found(), None);
        assert_eq!(UniformLocation::from_raw(2).found(), Some(UniformLocation::from_raw(2)));
        assert_eq!(AttribLocation::NOT_FOUND.index(), None);
        assert_eq!(AttribLocation::from_raw(4).index(), Some(4));
    }
}
