use std::path::{Path, PathBuf};

/// One item offered by an OS drag session, reduced to what the drop contract
/// cares about: whether it is a file reference, and its declared type.
pub struct DragItem {
    pub path: Option<PathBuf>,
    pub mime: String,
}

impl From<&egui::DroppedFile> for DragItem {
    fn from(file: &egui::DroppedFile) -> Self {
        Self {
            path: file.path.clone(),
            mime: file.mime.clone(),
        }
    }
}

impl From<&egui::HoveredFile> for DragItem {
    fn from(file: &egui::HoveredFile) -> Self {
        Self {
            path: file.path.clone(),
            mime: file.mime.clone(),
        }
    }
}

/// Whether a hovering payload would be accepted if dropped. Drives the
/// drop-region border emphasis and nothing else.
pub fn is_acceptable(items: &[DragItem]) -> bool {
    items.iter().any(|item| item.path.is_some())
}

/// The first file reference among the offered items. Everything after it is
/// ignored; a payload with no file reference is rejected outright.
pub fn first_file_reference(items: &[DragItem]) -> Option<&Path> {
    items
        .iter()
        .find_map(|item| item.path.as_deref())
}

/// Transient hover state for one drag gesture over the drop region.
pub struct DragSession {
    hovering: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self { hovering: false }
    }

    /// Updates the hover flag from the drag session's current item list.
    /// An empty list means the gesture left the window (or ended).
    pub fn set_items(&mut self, items: &[DragItem]) {
        self.hovering = is_acceptable(items);
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_item(path: &str) -> DragItem {
        DragItem {
            path: Some(PathBuf::from(path)),
            mime: String::new(),
        }
    }

    fn text_item() -> DragItem {
        DragItem {
            path: None,
            mime: "text/plain".to_string(),
        }
    }

    #[test]
    fn rejects_payload_without_file_reference() {
        let items = vec![text_item(), text_item()];
        assert!(!is_acceptable(&items));
        assert!(first_file_reference(&items).is_none());
    }

    #[test]
    fn uses_first_file_reference_only() {
        let items = vec![text_item(), file_item("/tmp/a.png"), file_item("/tmp/b.png")];
        assert_eq!(
            first_file_reference(&items),
            Some(Path::new("/tmp/a.png"))
        );
    }

    #[test]
    fn hover_tracks_acceptability() {
        let mut session = DragSession::new();
        assert!(!session.hovering());

        session.set_items(&[text_item()]);
        assert!(!session.hovering());

        session.set_items(&[file_item("/tmp/a.png")]);
        assert!(session.hovering());

        session.set_items(&[]);
        assert!(!session.hovering());
    }
}
