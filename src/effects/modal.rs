// src/effects/modal.rs  -  Escape closes the SmartScreen help modal
use crate::dom::Document;

pub const MODAL_ID:     &str = "smartscreen-modal";
pub const ACTIVE_CLASS: &str = "active";
pub const ESCAPE:       &str = "Escape";

pub fn is_open(doc: &Document) -> bool {
    doc.get_by_id(MODAL_ID).is_some_and(|m| doc.has_class(m, ACTIVE_CLASS))
}

pub fn open(doc: &mut Document) {
    if let Some(m) = doc.get_by_id(MODAL_ID) {
        doc.add_class(m, ACTIVE_CLASS);
    }
}

/// Keydown handler; returns true if a modal was open and got closed
pub fn on_key(doc: &mut Document, key: &str) -> bool {
    if key != ESCAPE {
        return false;
    }
    let was_open = is_open(doc);
    if let Some(m) = doc.get_by_id(MODAL_ID) {
        doc.remove_class(m, ACTIVE_CLASS);
    }
    was_open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Tag;

    #[test]
    fn escape_closes_modal() {
        let mut doc = Document::new();
        let root = doc.root();
        let m = doc.add(root, Tag::Div);
        doc.get_mut(m).id = Some(MODAL_ID.into());
        open(&mut doc);
        assert!(is_open(&doc));
        assert!(!on_key(&mut doc, "Enter"));
        assert!(is_open(&doc));
        assert!(on_key(&mut doc, ESCAPE));
        assert!(!is_open(&doc));
        assert!(!on_key(&mut doc, ESCAPE));
    }

    #[test]
    fn missing_modal_tolerated() {
        let mut doc = Document::new();
        assert!(!on_key(&mut doc, ESCAPE));
    }
}
