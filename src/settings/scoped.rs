//! Scoped setting override
//!
//! Sets a value for the duration of an async body and puts the previous
//! value back afterwards, whether the body succeeded or not. Two overrides
//! of the same key running concurrently can interleave their restores;
//! callers serialise them.

use super::SettingsStore;
use crate::error::{Error, Result};
use crate::models::SettingSnapshot;
use std::future::Future;
use tracing::{debug, error};

/// Run `body` with `(key, scope)` temporarily set to `value`.
///
/// `value = None` unsets the entry for the duration of the body. The
/// original value is written back on every exit path. A body error is
/// returned unchanged when the restore succeeds; a restore error is
/// returned when the body succeeded. If both fail the result is
/// [`Error::SettingRestoreFailed`] carrying both messages.
pub async fn with_setting<S, F, Fut, T>(
    store: &S,
    key: &str,
    value: Option<&str>,
    scope: Option<&str>,
    body: F,
) -> Result<T>
where
    S: SettingsStore + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let snapshot = SettingSnapshot::capture(store, key, scope).await?;
    debug!(
        "Overriding setting {} (was {:?}) with {:?}",
        snapshot.full_key(),
        snapshot.value,
        value
    );

    let outcome = match store.set(key, value, scope).await {
        Ok(()) => body().await,
        Err(e) => Err(e),
    };

    let restored = snapshot.restore(store).await;

    match (outcome, restored) {
        (Ok(result), Ok(())) => Ok(result),
        (Ok(_), Err(restore_err)) => Err(restore_err),
        (Err(body_err), Ok(())) => Err(body_err),
        (Err(body_err), Err(restore_err)) => {
            error!(
                "Failed to restore setting {} after body failure: {}",
                snapshot.full_key(),
                restore_err
            );
            Err(Error::SettingRestoreFailed {
                key: snapshot.full_key(),
                reason: restore_err.to_string(),
                body_error: body_err.to_string(),
            })
        }
    }
}
