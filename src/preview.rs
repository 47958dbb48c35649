use egui::load::SizedTexture;
use egui::{ColorImage, TextureHandle, TextureOptions, Ui, Vec2};

use crate::store::ImageStore;

/// Renders the store's current image scaled to fit the pane, or nothing
/// when the store is empty. Holds no state beyond the uploaded texture and
/// the store version it came from.
pub struct PreviewPane {
    texture: Option<TextureHandle>,
    shown_version: u64,
}

impl PreviewPane {
    pub fn new() -> Self {
        Self {
            texture: None,
            shown_version: 0,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, store: &ImageStore) {
        if store.version() != self.shown_version {
            self.texture = store.current().map(|image| {
                let size = [image.width() as usize, image.height() as usize];
                let pixels = ColorImage::from_rgba_unmultiplied(size, image.rgba());
                ui.ctx()
                    .load_texture("preview", pixels, TextureOptions::LINEAR)
            });
            self.shown_version = store.version();
        }

        let Some(texture) = &self.texture else {
            return; // empty pane
        };

        let size = fit_size(texture.size_vec2(), ui.available_size());
        ui.centered_and_justified(|ui| {
            ui.add(
                egui::Image::from_texture(SizedTexture::new(texture.id(), texture.size_vec2()))
                    .fit_to_exact_size(size),
            );
        });
    }
}

/// Largest size with `image`'s aspect ratio that fits inside `avail`.
/// Upscales small images as well, like an aspect-fit view does.
pub fn fit_size(image: Vec2, avail: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 || avail.x <= 0.0 || avail.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (avail.x / image.x).min(avail.y / image.y);
    image * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_image_fits_square_pane() {
        let size = fit_size(Vec2::new(400.0, 300.0), Vec2::new(200.0, 200.0));
        assert_eq!(size, Vec2::new(200.0, 150.0));
    }

    #[test]
    fn small_image_is_scaled_up() {
        let size = fit_size(Vec2::new(10.0, 20.0), Vec2::new(100.0, 100.0));
        assert_eq!(size, Vec2::new(50.0, 100.0));
    }

    #[test]
    fn degenerate_sizes_collapse_to_zero() {
        assert_eq!(fit_size(Vec2::ZERO, Vec2::new(100.0, 100.0)), Vec2::ZERO);
        assert_eq!(fit_size(Vec2::new(4.0, 3.0), Vec2::ZERO), Vec2::ZERO);
    }
}
