//! Async field watcher - classifies every edit of a password input.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::field::{FieldUpdate, PasswordField};

/// Feeds every edit received on `edits` through `field` and sends the
/// resulting [`FieldUpdate`] on `updates`.
///
/// The watcher stops when `token` is cancelled, when the edit channel is
/// closed, or when nobody listens for updates anymore. The field is
/// returned with the state of the last applied edit.
pub async fn watch_password_field(
    mut field: PasswordField,
    mut edits: mpsc::Receiver<String>,
    updates: mpsc::Sender<FieldUpdate>,
    token: CancellationToken,
) -> PasswordField {
    #[cfg(feature = "tracing")]
    tracing::info!("password field watcher started");

    loop {
        let raw = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            edit = edits.recv() => match edit {
                Some(raw) => raw,
                None => break,
            },
        };

        let update = field.set_value(&raw);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "password edit classified: strength={} trimmed={}",
            update.strength,
            update.trimmed
        );

        if let Err(_e) = updates.send(update).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password field update: {}", _e);
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("password field watcher stopped");

    field
}
