// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Kernel Context** - *Per-call execution configuration*
//!
//! The `ctx` argument threaded into every kernel entry point. It holds no state
//! between calls, only the knobs that decide how a call is executed.

use crate::config::{PARALLEL_CHUNK_LEN, PARALLEL_THRESHOLD};

/// Execution configuration for a kernel call.
///
/// Cheap to copy. `Default` takes its values from [`crate::config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelContext {
    parallel: bool,
    parallel_threshold: usize,
    chunk_len: usize,
}

impl Default for KernelContext {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            parallel_threshold: PARALLEL_THRESHOLD,
            chunk_len: PARALLEL_CHUNK_LEN,
        }
    }
}

impl KernelContext {
    /// Context that always runs on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Enables or disables partitioning. Has no effect without the `parallel` feature.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the minimum length at which a call is partitioned.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the number of positions per worker chunk, rounded up to a whole
    /// number of 64-bit words.
    pub fn with_chunk_len(mut self, chunk_len: usize) -> Self {
        self.chunk_len = chunk_len.max(1).div_ceil(64) * 64;
        self
    }

    /// Positions per worker chunk. Always a non-zero multiple of 64.
    #[inline]
    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// Minimum length at which a call is partitioned.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Whether a call over `len` positions should be split across workers.
    #[inline]
    pub fn should_partition(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && len >= self.parallel_threshold && len > self.chunk_len
    }
}
