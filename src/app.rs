use std::sync::mpsc::{self, Receiver, Sender};

use egui::{Color32, Key, Modifiers, RichText, Rounding, Stroke, Ui};

use crate::loader::{self, ResolvedDrop};
use crate::pasteboard;
use crate::payload::{self, DragItem, DragSession};
use crate::preview::PreviewPane;
use crate::receptor::{self, ReceivedImage};
use crate::store::ImageStore;

pub struct App {
    store: ImageStore,
    preview: PreviewPane,
    session: DragSession,
    tx: Sender<ResolvedDrop>,
    rx: Receiver<ResolvedDrop>,
    /// Token of the most recent drop; completions carrying an older token
    /// are discarded in `apply_resolved`.
    issued_token: u64,
    clipboard: Option<arboard::Clipboard>,
    status_message: String,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext) -> Self {
        let (tx, rx) = mpsc::channel();
        let clipboard = arboard::Clipboard::new().ok();

        Self {
            store: ImageStore::new(),
            preview: PreviewPane::new(),
            session: DragSession::new(),
            tx,
            rx,
            issued_token: 0,
            clipboard,
            status_message: format!(
                "Drop an image file, or paste a captured photo with {}.",
                paste_shortcut_display()
            ),
        }
    }

    fn drain_resolved_drops(&mut self) {
        while let Ok(resolved) = self.rx.try_recv() {
            if let Some(status) = apply_resolved(&mut self.store, self.issued_token, resolved) {
                self.status_message = status;
            }
        }
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let hovered: Vec<DragItem> =
            ctx.input(|i| i.raw.hovered_files.iter().map(DragItem::from).collect());
        self.session.set_items(&hovered);

        let dropped: Vec<DragItem> =
            ctx.input(|i| i.raw.dropped_files.iter().map(DragItem::from).collect());
        if !dropped.is_empty() {
            self.on_drop(&dropped);
        }
    }

    /// Starts resolving the first file reference among the dropped items.
    /// Returns false when the payload carries none (drop rejected, display
    /// unchanged).
    fn on_drop(&mut self, items: &[DragItem]) -> bool {
        let Some(path) = payload::first_file_reference(items) else {
            let declared: Vec<&str> = items.iter().map(|item| item.mime.as_str()).collect();
            log::info!("drop rejected: no file reference (declared types: {declared:?})");
            self.status_message = "Drop rejected: not a file.".to_string();
            return false;
        };
        if items.len() > 1 {
            log::debug!("ignoring {} extra dropped item(s)", items.len() - 1);
        }

        self.issued_token += 1;
        self.status_message = format!("Loading {}…", path.display());
        loader::resolve_in_background(self.issued_token, path.to_path_buf(), self.tx.clone());
        true
    }

    fn handle_paste(&mut self, ctx: &egui::Context) {
        // The window backend turns Cmd/Ctrl+V into a Paste event when the
        // clipboard holds text; an image-only pasteboard leaves the key
        // press visible instead. Accept either trigger.
        let via_key = ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::V));
        let via_event =
            ctx.input(|i| i.events.iter().any(|e| matches!(e, egui::Event::Paste(_))));
        if via_key || via_event {
            self.receive_pasteboard();
        }
    }

    /// Routes the pasteboard's contents into the image store. Returns false
    /// when the contents are not image-typed (paste declined, no change).
    fn receive_pasteboard(&mut self) -> bool {
        match receptor::receive(pasteboard::read_image(&mut self.clipboard)) {
            Ok(ReceivedImage::Decoded(image)) => {
                self.status_message =
                    format!("Pasted a {}×{} capture.", image.width(), image.height());
                self.store.replace(image);
                true
            }
            Ok(ReceivedImage::Bytes(bytes)) => match self.store.update(bytes) {
                Ok(image) => {
                    self.status_message =
                        format!("Pasted a {}×{} image.", image.width(), image.height());
                    true
                }
                Err(e) => {
                    log::warn!("pasted bytes did not decode: {e}");
                    self.status_message = "Pasted data is not a readable image.".to_string();
                    false
                }
            },
            Err(e) => {
                log::info!("paste rejected: {e}");
                self.status_message = "Nothing image-typed to paste.".to_string();
                false
            }
        }
    }

    fn draw_input_row(&mut self, ui: &mut Ui) {
        let hovering = self.session.hovering();

        let paste_clicked = ui
            .horizontal(|ui| {
                // Drop region: border thickens while an acceptable payload
                // hovers the window.
                region_frame(if hovering { 3.0 } else { 1.0 }).show(ui, |ui| {
                    ui.label("Drag an image file here");
                });

                // Capture receptor: a passive surface that only consumes the
                // paste action. Clicking it reads the pasteboard directly.
                let clicked = region_frame(1.0)
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(format!(
                                "Paste a capture here ({})",
                                paste_shortcut_display()
                            ))
                            .sense(egui::Sense::click()),
                        )
                        .clicked()
                    })
                    .inner;

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&self.status_message)
                            .color(Color32::from_rgb(180, 180, 180))
                            .italics(),
                    );
                });

                clicked
            })
            .inner;

        if paste_clicked {
            self.receive_pasteboard();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_resolved_drops();
        self.handle_drag_and_drop(ctx);
        self.handle_paste(ctx);

        egui::TopBottomPanel::top("inputs").show(ctx, |ui| {
            ui.add_space(4.0);
            self.draw_input_row(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.preview.ui(ui, &self.store);
        });

        // Keep draining loader completions even without input events.
        ctx.request_repaint_after(std::time::Duration::from_millis(50));
    }
}

fn region_frame(stroke_width: f32) -> egui::Frame {
    egui::Frame::none()
        .stroke(Stroke::new(stroke_width, Color32::GRAY))
        .rounding(Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
}

fn paste_shortcut_display() -> &'static str {
    if cfg!(target_os = "macos") {
        "⌘V"
    } else {
        "Ctrl+V"
    }
}

/// Applies one loader completion on the UI thread. Completions from a drop
/// that has since been superseded are discarded; every failure leaves the
/// previous display untouched. Returns the status notice to show, if any.
fn apply_resolved(
    store: &mut ImageStore,
    latest_token: u64,
    resolved: ResolvedDrop,
) -> Option<String> {
    if resolved.token != latest_token {
        log::debug!(
            "discarding stale resolution (token {}, latest {})",
            resolved.token,
            latest_token
        );
        return None;
    }

    match resolved.result {
        Ok(bytes) => match store.update(bytes) {
            Ok(image) => Some(format!(
                "Loaded a {}×{} image.",
                image.width(),
                image.height()
            )),
            Err(e) => {
                log::warn!("dropped file did not decode: {e}");
                Some("Dropped file is not a readable image.".to_string())
            }
        },
        Err(e) => {
            log::warn!("{e}");
            Some("Could not read the dropped file.".to_string())
        }
    }
}
