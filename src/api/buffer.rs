//! Buffer objects

use crate::context::sizeiptr;
use crate::enums::{BufferParameter, BufferStorageFlags, BufferTarget, BufferUsage, IndexedBufferTarget, MapAccess};
use crate::ffi::{GLint, GLintptr};
use crate::handle::Buffer;
use crate::Gl;
use bytemuck::Pod;
use std::ffi::c_void;
use std::ptr::{self, NonNull};

fn offset(value: usize, call: &'static str) -> GLintptr {
    sizeiptr(value, call)
}

fn data_ptr(bytes: Option<&[u8]>) -> *const c_void {
    bytes.map_or(ptr::null(), |bytes| bytes.as_ptr().cast())
}

impl Gl {
    pub fn bind_buffer(&self, target: BufferTarget, buffer: Buffer) {
        unsafe { self.fns.bind_buffer(target.to_raw(), buffer.raw()) };
        self.check("glBindBuffer");
    }

    pub fn bind_buffer_base(&self, target: IndexedBufferTarget, index: u32, buffer: Buffer) {
        unsafe { self.fns.bind_buffer_base(target.to_raw(), index, buffer.raw()) };
        self.check("glBindBufferBase");
    }

    pub fn bind_buffer_range(
        &self,
        target: IndexedBufferTarget,
        index: u32,
        buffer: Buffer,
        start: usize,
        size: usize,
    ) {
        const CALL: &str = "glBindBufferRange";
        unsafe {
            self.fns.bind_buffer_range(
                target.to_raw(),
                index,
                buffer.raw(),
                offset(start, CALL),
                sizeiptr(size, CALL),
            )
        };
        self.check(CALL);
    }

    /// Replace the store of the buffer bound to `target` with a copy of `data`
    pub fn buffer_data<T: Pod>(&self, target: BufferTarget, data: &[T], usage: BufferUsage) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            self.fns.buffer_data(
                target.to_raw(),
                sizeiptr(bytes.len(), "glBufferData"),
                data_ptr(Some(bytes)),
                usage.to_raw(),
            )
        };
        self.check("glBufferData");
    }

    /// Allocate `size` bytes of uninitialized store for the buffer bound to `target`
    pub fn buffer_data_uninit(&self, target: BufferTarget, size: usize, usage: BufferUsage) {
        unsafe {
            self.fns
                .buffer_data(target.to_raw(), sizeiptr(size, "glBufferData"), ptr::null(), usage.to_raw())
        };
        self.check("glBufferData");
    }

    pub fn buffer_sub_data<T: Pod>(&self, target: BufferTarget, start: usize, data: &[T]) {
        const CALL: &str = "glBufferSubData";
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            self.fns.buffer_sub_data(
                target.to_raw(),
                offset(start, CALL),
                sizeiptr(bytes.len(), CALL),
                data_ptr(Some(bytes)),
            )
        };
        self.check(CALL);
    }

    /// Immutable storage of `size` bytes, optionally initialized from `data`.
    ///
    /// When `data` is given it must be exactly `size` bytes long.
    pub fn buffer_storage(
        &self,
        target: BufferTarget,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferStorageFlags,
    ) {
        if let Some(bytes) = data {
            assert_eq!(bytes.len(), size, "glBufferStorage: data length does not match size");
        }
        unsafe {
            self.fns.buffer_storage(
                target.to_raw(),
                sizeiptr(size, "glBufferStorage"),
                data_ptr(data),
                flags.bits(),
            )
        };
        self.check("glBufferStorage");
    }

    pub fn named_buffer_data<T: Pod>(&self, buffer: Buffer, data: &[T], usage: BufferUsage) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            self.fns.named_buffer_data(
                buffer.raw(),
                sizeiptr(bytes.len(), "glNamedBufferData"),
                data_ptr(Some(bytes)),
                usage.to_raw(),
            )
        };
        self.check("glNamedBufferData");
    }

    pub fn named_buffer_sub_data<T: Pod>(&self, buffer: Buffer, start: usize, data: &[T]) {
        const CALL: &str = "glNamedBufferSubData";
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            self.fns.named_buffer_sub_data(
                buffer.raw(),
                offset(start, CALL),
                sizeiptr(bytes.len(), CALL),
                data_ptr(Some(bytes)),
            )
        };
        self.check(CALL);
    }

    pub fn named_buffer_storage(
        &self,
        buffer: Buffer,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferStorageFlags,
    ) {
        if let Some(bytes) = data {
            assert_eq!(bytes.len(), size, "glNamedBufferStorage: data length does not match size");
        }
        unsafe {
            self.fns.named_buffer_storage(
                buffer.raw(),
                sizeiptr(size, "glNamedBufferStorage"),
                data_ptr(data),
                flags.bits(),
            )
        };
        self.check("glNamedBufferStorage");
    }

    /// Map a range of the buffer bound to `target`; `None` when the driver refuses.
    ///
    /// The pointer is valid for `length` bytes until the buffer is unmapped.
    pub fn map_buffer_range(
        &self,
        target: BufferTarget,
        start: usize,
        length: usize,
        access: MapAccess,
    ) -> Option<NonNull<u8>> {
        const CALL: &str = "glMapBufferRange";
        let mapped = unsafe {
            self.fns.map_buffer_range(
                target.to_raw(),
                offset(start, CALL),
                sizeiptr(length, CALL),
                access.bits(),
            )
        };
        self.check(CALL);
        NonNull::new(mapped.cast())
    }

    pub fn map_named_buffer_range(
        &self,
        buffer: Buffer,
        start: usize,
        length: usize,
        access: MapAccess,
    ) -> Option<NonNull<u8>> {
        const CALL: &str = "glMapNamedBufferRange";
        let mapped = unsafe {
            self.fns.map_named_buffer_range(
                buffer.raw(),
                offset(start, CALL),
                sizeiptr(length, CALL),
                access.bits(),
            )
        };
        self.check(CALL);
        NonNull::new(mapped.cast())
    }

    pub fn flush_mapped_buffer_range(&self, target: BufferTarget, start: usize, length: usize) {
        const CALL: &str = "glFlushMappedBufferRange";
        unsafe {
            self.fns
                .flush_mapped_buffer_range(target.to_raw(), offset(start, CALL), sizeiptr(length, CALL))
        };
        self.check(CALL);
    }

    /// Unmap the buffer bound to `target`.
    ///
    /// Returns false when the store was corrupted while mapped and its
    /// contents are undefined.
    pub fn unmap_buffer(&self, target: BufferTarget) -> bool {
        let intact = unsafe { self.fns.unmap_buffer(target.to_raw()) };
        self.check("glUnmapBuffer");
        intact != crate::ffi::FALSE
    }

    pub fn unmap_named_buffer(&self, buffer: Buffer) -> bool {
        let intact = unsafe { self.fns.unmap_named_buffer(buffer.raw()) };
        self.check("glUnmapNamedBuffer");
        intact != crate::ffi::FALSE
    }

    pub fn copy_buffer_sub_data(
        &self,
        read: BufferTarget,
        write: BufferTarget,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        const CALL: &str = "glCopyBufferSubData";
        unsafe {
            self.fns.copy_buffer_sub_data(
                read.to_raw(),
                write.to_raw(),
                offset(read_offset, CALL),
                offset(write_offset, CALL),
                sizeiptr(size, CALL),
            )
        };
        self.check(CALL);
    }

    pub fn get_buffer_parameter(&self, target: BufferTarget, pname: BufferParameter) -> GLint {
        let mut value = 0;
        unsafe { self.fns.get_buffer_parameteriv(target.to_raw(), pname.to_raw(), &mut value) };
        self.check("glGetBufferParameteriv");
        value
    }
}
