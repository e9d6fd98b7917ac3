//! State queries and the extension table

use crate::enums::{FloatName, IntegerName, IntegerVecName, StringName};
use crate::ffi::{GLint, GLubyte};
use crate::Gl;
use std::ffi::CStr;

/// Exact, case-sensitive scan of an extension list for `wanted`
pub fn contains_extension<I, S>(names: I, wanted: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().any(|name| name.as_ref() == wanted)
}

fn owned_string(raw: *const GLubyte) -> Option<String> {
    if raw.is_null() {
        return None;
    }
    // SAFETY: GL strings are static and NUL-terminated.
    let text = unsafe { CStr::from_ptr(raw.cast()) };
    Some(text.to_string_lossy().into_owned())
}

impl Gl {
    /// One of the driver's identification strings; `None` on error
    pub fn get_string(&self, name: StringName) -> Option<String> {
        let raw = unsafe { self.fns.get_string(name.to_raw()) };
        self.check("glGetString");
        owned_string(raw)
    }

    /// Entry `index` of an indexed string table; `None` when out of range
    pub fn get_string_i(&self, name: StringName, index: u32) -> Option<String> {
        let raw = unsafe { self.fns.get_string_i(name.to_raw(), index) };
        self.check("glGetStringi");
        owned_string(raw)
    }

    pub fn get_integer(&self, name: IntegerName) -> GLint {
        let mut value = 0;
        unsafe { self.fns.get_integerv(name.to_raw(), &mut value) };
        self.check("glGetIntegerv");
        value
    }

    pub fn get_integer_v(&self, name: IntegerVecName) -> Vec<GLint> {
        let mut values = vec![0; name.count()];
        unsafe { self.fns.get_integerv(name.to_raw(), values.as_mut_ptr()) };
        self.check("glGetIntegerv");
        values
    }

    pub fn get_float(&self, name: FloatName) -> f32 {
        let mut value = 0.0;
        unsafe { self.fns.get_floatv(name.to_raw(), &mut value) };
        self.check("glGetFloatv");
        value
    }

    /// Context version as `(major, minor)`
    pub fn version(&self) -> (GLint, GLint) {
        (
            self.get_integer(IntegerName::MajorVersion),
            self.get_integer(IntegerName::MinorVersion),
        )
    }

    pub fn num_extensions(&self) -> u32 {
        u32::try_from(self.get_integer(IntegerName::NumExtensions)).unwrap_or(0)
    }

    /// Every extension the context advertises, in driver order
    pub fn extensions(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.num_extensions()).filter_map(move |index| self.get_string_i(StringName::Extensions, index))
    }

    /// Whether the context advertises `name` (exact match)
    pub fn has_extension(&self, name: &str) -> bool {
        contains_extension(self.extensions(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorPolicy;
    use crate::testing::{self, FakeDriver};

    #[test]
    fn test_contains_extension_is_exact() {
        let names = ["GL_ARB_debug_output", "GL_KHR_debug"];
        assert!(contains_extension(names, "GL_KHR_debug"));
        assert!(!contains_extension(names, "GL_KHR"));
        assert!(!contains_extension(names, "gl_khr_debug"));
        assert!(!contains_extension(Vec::<String>::new(), "GL_KHR_debug"));
    }

    #[test]
    fn test_has_extension_scans_driver_table() {
        let gl = testing::fake_gl(ErrorPolicy::Log);
        FakeDriver::set_extensions(&["GL_ARB_buffer_storage", "GL_KHR_debug"]);
        assert_eq!(gl.num_extensions(), 2);
        assert!(gl.has_extension("GL_KHR_debug"));
        assert!(!gl.has_extension("GL_KHR_debug_"));
        assert_eq!(
            gl.extensions().collect::<Vec<_>>(),
            vec!["GL_ARB_buffer_storage".to_string(), "GL_KHR_debug".to_string()]
        );
    }

    #[test]
    fn test_empty_extension_table() {
        let gl = testing::fake_gl(ErrorPolicy::Log);
        assert_eq!(gl.num_extensions(), 0);
        assert!(!gl.has_extension("GL_KHR_debug"));
        assert!(FakeDriver::calls_named("glGetStringi").is_empty());
    }

    #[test]
    fn test_string_and_integer_queries() {
        let gl = testing::fake_gl(ErrorPolicy::Log);
        assert_eq!(gl.get_string(StringName::Vendor).as_deref(), Some("flick-gl fake driver"));
        assert_eq!(gl.version(), (4, 6));
        assert_eq!(gl.get_integer_v(IntegerVecName::Viewport), vec![0, 0, 800, 600]);
        assert_eq!(gl.get_float(FloatName::LineWidth), 1.0);
    }
}
