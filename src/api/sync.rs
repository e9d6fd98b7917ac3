//! Fence sync objects

use crate::enums::{SyncCondition, SyncFlags, WaitResult};
use crate::ffi;
use crate::handle::Sync;
use crate::Gl;
use std::time::Duration;
use tracing::warn;

impl Gl {
    /// Insert a fence that signals once all prior commands complete
    pub fn fence_sync(&self) -> Sync {
        let raw = unsafe {
            self.fns
                .fence_sync(SyncCondition::GpuCommandsComplete.to_raw(), 0)
        };
        self.check("glFenceSync");
        // SAFETY: the pointer came straight from glFenceSync.
        let sync = unsafe { Sync::from_raw(raw) };
        assert!(sync.is_valid(), "glFenceSync returned a null sync object");
        sync
    }

    pub fn delete_sync(&self, sync: Sync) {
        unsafe { self.fns.delete_sync(sync.raw()) };
        self.check("glDeleteSync");
    }

    /// Block until `sync` signals or `timeout` passes.
    ///
    /// Timeouts beyond `u64::MAX` nanoseconds saturate.
    pub fn client_wait_sync(&self, sync: Sync, flags: SyncFlags, timeout: Duration) -> WaitResult {
        let nanos = u64::try_from(timeout.as_nanos()).unwrap_or(u64::MAX);
        let raw = unsafe { self.fns.client_wait_sync(sync.raw(), flags.bits(), nanos) };
        self.check("glClientWaitSync");
        WaitResult::from_raw(raw).unwrap_or_else(|| {
            warn!("glClientWaitSync returned unknown status 0x{:04X}", raw);
            WaitResult::WaitFailed
        })
    }

    /// Make the server wait for `sync` before running later commands
    pub fn wait_sync(&self, sync: Sync) {
        unsafe { self.fns.wait_sync(sync.raw(), 0, ffi::TIMEOUT_IGNORED) };
        self.check("glWaitSync");
    }
}
