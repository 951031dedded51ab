//! Ephemeral selection state for the list-style renderers.

/// Number of party slots beside the picker's lead item.
pub const PARTY_SLOTS: usize = 5;

/// Highlighted item of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(usize),
}

impl Selection {
    /// Initial state for a freshly supplied list: the first item when there is one.
    #[must_use]
    pub const fn for_len(len: usize) -> Self {
        if len == 0 { Self::None } else { Self::Selected(0) }
    }

    /// Move to `index`; out-of-range requests leave the state untouched.
    #[must_use]
    pub const fn select(self, index: usize, len: usize) -> Self {
        if index < len { Self::Selected(index) } else { self }
    }

    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Selected(index) => Some(index),
        }
    }

    #[must_use]
    pub const fn is_selected(self, index: usize) -> bool {
        matches!(self, Self::Selected(current) if current == index)
    }
}

/// Picker state: a selection plus whether its detail panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerState {
    pub selection: Selection,
    pub detail_open: bool,
}

impl PickerState {
    #[must_use]
    pub const fn for_len(len: usize) -> Self {
        Self {
            selection: Selection::for_len(len),
            detail_open: false,
        }
    }

    /// Select `index` and reveal its details. Out of range is a no-op.
    #[must_use]
    pub const fn select(self, index: usize, len: usize) -> Self {
        if index < len {
            Self {
                selection: Selection::Selected(index),
                detail_open: true,
            }
        } else {
            self
        }
    }

    #[must_use]
    pub const fn dismiss(self) -> Self {
        Self {
            selection: self.selection,
            detail_open: false,
        }
    }

    /// Index whose detail panel is visible, if any.
    #[must_use]
    pub const fn detail_index(self) -> Option<usize> {
        if self.detail_open {
            self.selection.index()
        } else {
            None
        }
    }
}

/// Items `1..=5`, padded with `None` for empty slots. Item 0 is the lead.
#[must_use]
pub fn party_slots<T>(items: &[T]) -> [Option<&T>; PARTY_SLOTS] {
    std::array::from_fn(|slot| items.get(slot + 1))
}
