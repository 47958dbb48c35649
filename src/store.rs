use image::ImageFormat;

use crate::error::LoadError;

/// An undecoded image payload: raw container bytes plus the format sniffed
/// from their magic number. Immutable once constructed.
pub struct ImageBytes {
    bytes: Vec<u8>,
    format: Option<ImageFormat>,
}

impl ImageBytes {
    /// Wraps raw bytes, sniffing the container format from the leading magic
    /// number. An unrecognized prefix leaves the tag empty; `update` will
    /// still attempt a decode and report the failure there.
    pub fn sniff(bytes: Vec<u8>) -> Self {
        let format = image::guess_format(&bytes).ok();
        Self { bytes, format }
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

/// A decoded bitmap ready for display: RGBA8, row-major, tightly packed.
#[derive(Debug)]
pub struct DisplayImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl DisplayImage {
    /// Builds a bitmap from pre-decoded RGBA pixels, rejecting buffers whose
    /// length disagrees with the declared dimensions.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, LoadError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(LoadError::MalformedBitmap);
        }
        Ok(Self { width, height, rgba })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

/// Single-slot holder of the currently displayed image.
///
/// The slot is replaced wholesale or not at all; a failed decode leaves both
/// the slot and the version counter untouched. The version counter is the
/// change notification: the preview pane re-uploads its texture whenever the
/// version it last saw differs from the store's.
pub struct ImageStore {
    current: Option<DisplayImage>,
    version: u64,
}

impl ImageStore {
    pub fn new() -> Self {
        Self { current: None, version: 0 }
    }

    pub fn current(&self) -> Option<&DisplayImage> {
        self.current.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Decodes `bytes` and, on success, replaces the current image.
    pub fn update(&mut self, bytes: ImageBytes) -> Result<&DisplayImage, LoadError> {
        let decoded = image::load_from_memory(bytes.as_slice())?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        self.version += 1;
        Ok(self.current.insert(DisplayImage {
            width,
            height,
            rgba: rgba.into_raw(),
        }))
    }

    /// Replaces the current image with an already-decoded bitmap (the paste
    /// path, where the host hands over raw pixels).
    pub fn replace(&mut self, image: DisplayImage) {
        self.current = Some(image);
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{encoded_png, solid_rgba};

    #[test]
    fn starts_empty() {
        let store = ImageStore::new();
        assert!(store.current().is_none());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn decode_preserves_intrinsic_dimensions() {
        let mut store = ImageStore::new();
        let bytes = ImageBytes::sniff(encoded_png(400, 300));
        assert_eq!(bytes.format(), Some(ImageFormat::Png));

        let shown = store.update(bytes).unwrap();
        assert_eq!((shown.width(), shown.height()), (400, 300));
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn second_load_replaces_first() {
        let mut store = ImageStore::new();
        store.update(ImageBytes::sniff(encoded_png(8, 8))).unwrap();
        store.update(ImageBytes::sniff(encoded_png(5, 7))).unwrap();

        let shown = store.current().unwrap();
        assert_eq!((shown.width(), shown.height()), (5, 7));
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn failed_decode_leaves_prior_image() {
        let mut store = ImageStore::new();
        store.update(ImageBytes::sniff(encoded_png(4, 3))).unwrap();

        // Valid PNG magic, truncated body: sniffs fine, decodes not.
        let mut truncated = encoded_png(4, 3);
        truncated.truncate(12);
        let err = store.update(ImageBytes::sniff(truncated)).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));

        let shown = store.current().unwrap();
        assert_eq!((shown.width(), shown.height()), (4, 3));
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn from_rgba_rejects_length_mismatch() {
        assert!(matches!(
            DisplayImage::from_rgba(2, 2, vec![0u8; 15]),
            Err(LoadError::MalformedBitmap)
        ));
        assert!(matches!(
            DisplayImage::from_rgba(0, 4, Vec::new()),
            Err(LoadError::MalformedBitmap)
        ));
        assert!(DisplayImage::from_rgba(2, 2, solid_rgba(2, 2)).is_ok());
    }

    #[test]
    fn sniff_leaves_unknown_bytes_untagged() {
        let bytes = ImageBytes::sniff(b"not an image".to_vec());
        assert!(bytes.format().is_none());
    }
}
