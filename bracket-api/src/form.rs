//! Submit sequencing for the stage item dialogs.

use futures::Future;

use crate::Result;

/// Drives the submit flow of the rename dialog.
///
/// `rename` is awaited first. Only when it succeeds is `refresh` invoked and
/// awaited, so dependent state is never refreshed from a failed update.
/// Returns `true` when the dialog should be dismissed; a failed rename
/// leaves it open. The rename error has already been routed through the
/// client's error reporter, so it is not surfaced again here.
pub async fn submit_rename<R, RFut, F, FFut>(rename: R, refresh: F) -> bool
where
    R: FnOnce() -> RFut,
    RFut: Future<Output = Result<()>>,
    F: FnOnce() -> FFut,
    FFut: Future<Output = ()>,
{
    if rename().await.is_err() {
        return false;
    }

    refresh().await;

    true
}
