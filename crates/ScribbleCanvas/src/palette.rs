//! # Palette
//!
//! The fixed, ordered set of colors the user can draw with, and the current
//! selection.

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, Result};

/// One entry of the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteColor {
    Black,
    Blue,
    Green,
    Yellow,
    Red,
    LightGray,
}

impl PaletteColor {
    /// Every palette entry, in display order.
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Black,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Red,
        PaletteColor::LightGray,
    ];

    /// RGBA value of the color, opaque.
    pub fn rgba(self) -> Vec4 {
        match self {
            PaletteColor::Black => Vec4::new(0.0, 0.0, 0.0, 1.0),
            PaletteColor::Blue => Vec4::new(0.0, 0.0, 1.0, 1.0),
            PaletteColor::Green => Vec4::new(0.0, 1.0, 0.0, 1.0),
            PaletteColor::Yellow => Vec4::new(1.0, 1.0, 0.0, 1.0),
            PaletteColor::Red => Vec4::new(1.0, 0.0, 0.0, 1.0),
            // 0xFFCCCCCC
            PaletteColor::LightGray => Vec4::new(0.8, 0.8, 0.8, 1.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::Blue => "blue",
            PaletteColor::Green => "green",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Red => "red",
            PaletteColor::LightGray => "light-gray",
        }
    }
}

/// The palette selector state.
///
/// Holds the current selection as an index into `PaletteColor::ALL`, so the
/// selection is always one of the entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    selected: usize,
}

impl Palette {
    /// Creates a palette with the first entry selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The palette entries in display order.
    pub fn entries(&self) -> &'static [PaletteColor] {
        &PaletteColor::ALL
    }

    pub fn len(&self) -> usize {
        PaletteColor::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The currently selected color.
    pub fn selected(&self) -> PaletteColor {
        PaletteColor::ALL[self.selected]
    }

    /// Position of the selected color in `entries()`.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Selects `color`.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, color: PaletteColor) -> bool {
        let index = PaletteColor::ALL
            .iter()
            .position(|&c| c == color)
            .unwrap_or(self.selected);
        let changed = index != self.selected;
        self.selected = index;
        changed
    }

    /// Selects the entry at `index`. The selection is left untouched on error.
    pub fn select_index(&mut self, index: usize) -> Result<PaletteColor> {
        let color = *PaletteColor::ALL
            .get(index)
            .ok_or(CanvasError::PaletteIndexOutOfRange {
                index,
                len: self.len(),
            })?;
        self.select(color);
        Ok(color)
    }
}
