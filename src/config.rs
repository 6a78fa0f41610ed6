// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Compile-time defaults for [`KernelContext`](crate::context::KernelContext).
//! Callers override them per call through the context rather than editing these.

/// Minimum number of output positions before a comparison is partitioned across
/// worker threads. Below this the scheduling overhead outweighs the work.
///
/// Only consulted when the `parallel` feature is enabled.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Number of output positions handed to each worker when partitioning.
///
/// Must be a multiple of 64 so each chunk covers whole output words and
/// workers never share a word.
pub const PARALLEL_CHUNK_LEN: usize = 1 << 14;

const _: () = assert!(PARALLEL_CHUNK_LEN % 64 == 0 && PARALLEL_CHUNK_LEN > 0);
