use std::path::PathBuf;
use std::sync::mpsc::Sender;

use crate::error::LoadError;
use crate::store::ImageBytes;

/// Completion of one background file-reference resolution. The token is the
/// request counter issued at drop time; the app discards completions whose
/// token is no longer the latest, so a slow read can never overwrite a
/// newer drop.
pub struct ResolvedDrop {
    pub token: u64,
    pub result: Result<ImageBytes, LoadError>,
}

/// Spawns a background thread that reads the dropped file and reports the
/// bytes back on `tx`. Fire-and-forget: exactly one completion message, no
/// retries, no cancellation. Decoding stays on the UI thread.
pub fn resolve_in_background(token: u64, path: PathBuf, tx: Sender<ResolvedDrop>) {
    std::thread::spawn(move || {
        let result = std::fs::read(&path)
            .map(ImageBytes::sniff)
            .map_err(|source| LoadError::Resolution { path, source });
        // The receiver is gone only during shutdown.
        let _ = tx.send(ResolvedDrop { token, result });
    });
}
