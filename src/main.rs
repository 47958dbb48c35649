mod app;
mod error;
mod loader;
mod pasteboard;
mod payload;
mod preview;
mod receptor;
mod store;
#[cfg(test)]
mod test_fixtures;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Photo Drop")
            .with_inner_size([640.0, 640.0])
            .with_min_inner_size([500.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Photo Drop",
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    )
}
