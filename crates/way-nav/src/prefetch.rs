//! Fire-and-forget warm-up of the step after the cursor.

use std::sync::Arc;

use way_assets::AssetStore;
use way_core::Step;

/// Start loading `step` in the background.
///
/// Never blocks and never reports failure to the caller. Skipped when no
/// tokio runtime is running on the current thread.
pub(crate) fn spawn<S: AssetStore>(store: &Arc<S>, step: Step) {
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        tracing::debug!(index = step.index, "no async runtime, skipping prefetch");
        return;
    };
    let store = Arc::clone(store);
    handle.spawn(async move {
        match store.fetch(&step.locator).await {
            Ok(bytes) => tracing::trace!(index = step.index, bytes, "prefetched step"),
            Err(error) => tracing::debug!(index = step.index, %error, "prefetch failed"),
        }
    });
}
