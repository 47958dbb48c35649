use crate::receptor::PastePayload;

/// Pasteboard types the CLI fallbacks are asked for, in preference order.
const ENCODED_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/tiff", "image/bmp"];

/// Platform-aware pasteboard reader for the capture receptor.
///
/// Tries arboard first (which hands over a decoded RGBA bitmap, the form a
/// device capture arrives in), then falls back to CLI tools that return the
/// encoded container bytes:
/// - Wayland: `wl-paste`
/// - X11:     `xclip`
///
/// Returns `Empty` when nothing image-typed is available; the receptor
/// rejects that without touching the display.
pub fn read_image(clipboard: &mut Option<arboard::Clipboard>) -> PastePayload {
    // 1. Try arboard
    if let Some(cb) = clipboard {
        if let Ok(img) = cb.get_image() {
            return PastePayload::Bitmap {
                width: img.width as u32,
                height: img.height as u32,
                rgba: img.bytes.into_owned(),
            };
        }
    }

    // 2. Wayland: wl-paste
    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        for ty in ENCODED_TYPES {
            if let Ok(bytes) = run_cmd("wl-paste", &["--no-newline", "--type", ty]) {
                if !bytes.is_empty() {
                    return PastePayload::Encoded(bytes);
                }
            }
        }
    }

    // 3. X11: xclip
    if std::env::var("DISPLAY").is_ok() {
        for ty in ENCODED_TYPES {
            if let Ok(bytes) = run_cmd("xclip", &["-selection", "clipboard", "-target", ty, "-out"]) {
                if !bytes.is_empty() {
                    return PastePayload::Encoded(bytes);
                }
            }
        }
    }

    PastePayload::Empty
}

fn run_cmd(program: &str, args: &[&str]) -> Result<Vec<u8>, String> {
    let out = std::process::Command::new(program)
        .args(args)
        .output()
        .map_err(|e| e.to_string())?;
    if out.status.success() {
        Ok(out.stdout)
    } else {
        Err(String::from_utf8_lossy(&out.stderr).to_string())
    }
}
