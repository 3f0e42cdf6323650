use crate::sticker::PlacedSticker;

/// What the pointer is doing right now
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A stroke is being dragged out. It is already the newest committed element.
    Drawing,
    /// The pointer is down with a sticker tool armed. The sticker is not
    /// committed until the pointer is released.
    PlacingSticker { sticker: PlacedSticker },
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing => "Drawing",
            Self::PlacingSticker { .. } => "PlacingSticker",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The sticker following the pointer, if one is being placed
    pub fn live_sticker(&self) -> Option<&PlacedSticker> {
        match self {
            Self::PlacingSticker { sticker } => Some(sticker),
            _ => None,
        }
    }
}
