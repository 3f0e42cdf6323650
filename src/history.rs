use crate::drawable::Drawable;
use crate::stroke::Stroke;

/// The committed scene plus its redo buffer.
///
/// The undo stack *is* the scene: it is drawn oldest first, so undo and redo
/// only ever remove or restore its tail.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    /// Committed elements, oldest first
    undo_stack: Vec<Drawable>,
    /// Undone elements, most recently undone last
    redo_stack: Vec<Drawable>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the scene. A new action invalidates forward history.
    pub fn commit(&mut self, drawable: impl Into<Drawable>) {
        let drawable = drawable.into();
        log::debug!("Committing {} ({} on stack)", drawable.kind(), self.undo_stack.len() + 1);
        self.undo_stack.push(drawable);
        self.redo_stack.clear();
    }

    /// Move the newest element onto the redo stack.
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(drawable) => {
                self.redo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Put the most recently undone element back.
    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(drawable) => {
                self.undo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Committed elements in drawing order
    pub fn drawables(&self) -> &[Drawable] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// The newest committed element, if it is a stroke.
    /// Only the controller uses this, to extend the stroke under an active drag.
    pub(crate) fn tail_stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self.undo_stack.last_mut() {
            Some(Drawable::Stroke(stroke)) => Some(stroke),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sticker::{PlacedSticker, Rotation};
    use egui::{Color32, pos2};

    fn sample_stroke(offset: f32) -> Drawable {
        Stroke::new(pos2(offset, offset), 2.0, Color32::BLACK).into()
    }

    #[test]
    fn test_new_commit_clears_redo_stack() {
        let mut history = History::new();
        history.commit(sample_stroke(0.0));
        assert!(history.undo());
        assert_eq!(history.redo_stack().len(), 1);

        history.commit(sample_stroke(1.0));
        assert!(history.redo_stack().is_empty());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_undo_and_redo_on_empty_are_noops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut history = History::new();
        history.commit(sample_stroke(0.0));
        history.commit(sample_stroke(1.0));
        history.undo();

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_tail_stroke_mut_skips_stickers() {
        let mut history = History::new();
        history.commit(sample_stroke(0.0));
        assert!(history.tail_stroke_mut().is_some());

        history.commit(PlacedSticker::new("😀", pos2(1.0, 1.0), Rotation::default()));
        assert!(history.tail_stroke_mut().is_none());
    }
}
