use std::future::Future;

/// Upper bound on compare-and-swap attempts for a single document write.
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Re-runs `attempt` while it fails with a version conflict.
///
/// Only conflicts are retried: a conflicting compare-and-swap never applied
/// its write, so re-reading and re-applying cannot duplicate an effect.
/// Every other outcome, success or failure, is returned as-is.
pub async fn retry_on_version_conflict<T, E, F, Fut>(
    mut attempt: F,
    is_conflict: fn(&E) -> bool,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut tries = 1;

    loop {
        match attempt().await {
            Err(e) if is_conflict(&e) && tries < MAX_WRITE_ATTEMPTS => {
                tracing::debug!(tries, "Version conflict, re-reading document");
                tries += 1;
            }
            other => return other,
        }
    }
}
