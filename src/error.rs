use std::path::PathBuf;

/// Everything that can go wrong between an OS drop/paste event and a
/// displayed bitmap. None of these are fatal: the app logs the failure and
/// keeps showing whatever was on screen before.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The dropped or pasted payload does not declare a type we accept.
    #[error("payload type not accepted")]
    UnsupportedPayload,

    /// A dropped file reference could not be resolved to readable bytes.
    #[error("could not read {}: {source}", .path.display())]
    Resolution {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Bytes were resolved but do not decode into a valid bitmap.
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    /// A pre-decoded bitmap whose pixel buffer does not match its declared
    /// dimensions (e.g. a lying pasteboard payload).
    #[error("bitmap dimensions do not match pixel data")]
    MalformedBitmap,
}
