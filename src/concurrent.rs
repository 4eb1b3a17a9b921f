//! Concurrent fan-out/fan-in map over a bounded worker pool.
//!
//! [`concurrent_map`] has the same contract as
//! [`map`](crate::sequence::map): length-preserving, all-or-nothing nil
//! propagation. It evaluates the per-element function on a pool of
//! scoped worker threads sized to the available hardware concurrency.
//!
//! # Concurrency model
//!
//! The input is split into contiguous chunks, one per worker; each worker
//! exclusively owns the matching chunk of the output, so result assembly
//! needs no locking. The only synchronization point is the join barrier
//! at the end of the thread scope: the call is synchronous and blocking
//! from the caller's perspective, with no partial-result or streaming
//! mode, no cancellation, and no timeout. A never-returning function
//! blocks the call indefinitely.
//!
//! Evaluation order across elements is unspecified and varies from run
//! to run; the output order always matches the input order. The caller
//! is responsible for supplying a referentially transparent function with
//! no ordering dependency between elements.
//!
//! When a worker's function produces no image, the remaining workers are
//! not interrupted: every dispatched element is still evaluated, the
//! barrier is still waited on, and only then is the failure reported.

use crate::error::TransformError;

/// Maps a function over a sequence concurrently.
///
/// Worker count is the available hardware concurrency, clamped to the
/// input length. Same contract as [`map`](crate::sequence::map): the
/// output sequence is indexed identically to the input, and the call
/// fails as a whole if any element's image is absent.
///
/// # Errors
///
/// [`TransformError::MissingImage`] with the smallest failing index,
/// reported only after every worker has finished.
///
/// # Examples
///
/// ```rust
/// use imago::concurrent::concurrent_map;
///
/// let image = concurrent_map(|x: &i32| Some(x * 2), &[1, 2, 3]);
/// assert_eq!(image, Ok(vec![2, 4, 6]));
/// ```
pub fn concurrent_map<T, U, F>(function: F, preimage: &[T]) -> Result<Vec<U>, TransformError>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Option<U> + Sync,
{
    concurrent_map_with_workers(function, preimage, num_cpus::get())
}

/// [`concurrent_map`] with an explicit worker-pool bound.
///
/// `workers` is clamped to at least 1 and at most the input length; a
/// single worker degenerates to a sequential map on a spawned thread.
///
/// # Errors
///
/// [`TransformError::MissingImage`] with the smallest failing index.
pub fn concurrent_map_with_workers<T, U, F>(
    function: F,
    preimage: &[T],
    workers: usize,
) -> Result<Vec<U>, TransformError>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Option<U> + Sync,
{
    if preimage.is_empty() {
        return Ok(Vec::new());
    }

    let workers = workers.clamp(1, preimage.len());
    let chunk_len = preimage.len().div_ceil(workers);
    let mut slots: Vec<Option<U>> = (0..preimage.len()).map(|_| None).collect();
    let function = &function;

    std::thread::scope(|scope| {
        for (input, output) in preimage.chunks(chunk_len).zip(slots.chunks_mut(chunk_len)) {
            scope.spawn(move || {
                for (slot, element) in output.iter_mut().zip(input) {
                    *slot = function(element);
                }
            });
        }
    });

    // Every slot was evaluated (workers do not short-circuit each other),
    // so the first empty slot is the smallest genuinely failing index.
    let mut image = Vec::with_capacity(slots.len());
    for (index, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(value) => image.push(value),
            None => return Err(TransformError::MissingImage { index }),
        }
    }
    Ok(image)
}

// =============================================================================
// Tests
// =============================================================================
