use image::ImageFormat;

use crate::error::LoadError;
use crate::store::{DisplayImage, ImageBytes};

/// Encoded formats the receptor is willing to accept from the pasteboard.
const ACCEPTED_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Tiff,
    ImageFormat::Bmp,
];

/// Abstract pasteboard contents, as handed over by the host clipboard API.
pub enum PastePayload {
    /// The host already decoded the payload into raw RGBA pixels (the usual
    /// case for a device-captured photo delivered via the pasteboard).
    Bitmap {
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    },
    /// Raw container bytes (PNG/JPEG/TIFF/BMP file contents).
    Encoded(Vec<u8>),
    /// Nothing image-typed on the pasteboard.
    Empty,
}

/// What `receive` forwards to the image store: either an already-decoded
/// bitmap, or sniff-approved bytes for the store to decode.
pub enum ReceivedImage {
    Decoded(DisplayImage),
    Bytes(ImageBytes),
}

/// Validates pasted contents and converts them for the store.
///
/// Anything that is not image-typed is rejected with `UnsupportedPayload`
/// and causes no state change; the caller treats `Err` as "paste declined".
pub fn receive(payload: PastePayload) -> Result<ReceivedImage, LoadError> {
    match payload {
        PastePayload::Bitmap { width, height, rgba } => {
            let image = DisplayImage::from_rgba(width, height, rgba)?;
            Ok(ReceivedImage::Decoded(image))
        }
        PastePayload::Encoded(bytes) => {
            let bytes = ImageBytes::sniff(bytes);
            match bytes.format() {
                Some(format) if ACCEPTED_FORMATS.contains(&format) => {
                    Ok(ReceivedImage::Bytes(bytes))
                }
                _ => Err(LoadError::UnsupportedPayload),
            }
        }
        PastePayload::Empty => Err(LoadError::UnsupportedPayload),
    }
}
