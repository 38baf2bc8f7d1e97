//! Row-wrapping layout for hand/tray contexts.
//!
//! Unlike the chain engine this is stateless and fully recomputed per
//! call: the tray is replaced wholesale each render rather than grown
//! incrementally, so there is nothing to cache.

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Configuration for the tray layout.
pub struct RowWrapParams {
    /// Tile width in pixels at tray scale.
    pub tile_width: f64,
    /// Horizontal container inset in pixels.
    pub padding: f64,
    /// Width reserved on each side for the tray's end controls.
    pub end_control_width: f64,
    /// Width reserved for the turning tile at the end of each row.
    pub corner_reserve: f64,
    /// Never wrap tighter than this many tiles per row.
    pub min_tiles_per_row: usize,
}

impl Default for RowWrapParams {
    fn default() -> Self {
        Self {
            tile_width: 64.0,
            padding: 16.0,
            end_control_width: 40.0,
            corner_reserve: 32.0,
            min_tiles_per_row: 3,
        }
    }
}

impl RowWrapParams {
    /// Tiles that fit on one row of the given container.
    pub fn tiles_per_row(&self, container_width: f64) -> usize {
        let avail = container_width - 2.0 * self.padding - 2.0 * self.end_control_width;
        let fit = (avail - self.corner_reserve) / self.tile_width;
        let fit = if fit.is_finite() && fit > 0.0 {
            fit.floor() as usize
        } else {
            0
        };
        fit.max(self.min_tiles_per_row).max(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Grid slot assigned to one tray tile.
pub struct TraySlot {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index within the row, in scan order.
    pub column: usize,
    /// True when this row renders in reverse scan order.
    pub reversed: bool,
    /// True for the last tile of a non-final row.
    pub corner: bool,
    /// ±90° for corner tiles, alternating by row parity; 0 otherwise.
    pub rotation_deg: f64,
}

/// Assign `tile_count` tiles to rows greedily.
///
/// Alternating rows are meant to be rendered in reverse scan order so the
/// tray reads as one continuous ribbon; the last tile of every non-final
/// row is marked a corner with alternating rotation.
pub fn wrap_tray(tile_count: usize, container_width: f64, params: &RowWrapParams) -> Vec<TraySlot> {
    if tile_count == 0 {
        return Vec::new();
    }
    let per_row = params.tiles_per_row(container_width);
    let last_row = (tile_count - 1) / per_row;

    let mut slots = Vec::with_capacity(tile_count);
    for index in 0..tile_count {
        let row = index / per_row;
        let column = index % per_row;
        let corner = column == per_row - 1 && row < last_row;
        let rotation_deg = if corner {
            if row % 2 == 0 { 90.0 } else { -90.0 }
        } else {
            0.0
        };
        slots.push(TraySlot {
            row,
            column,
            reversed: row % 2 == 1,
            corner,
            rotation_deg,
        });
    }
    slots
}

#[cfg(test)]
#[path = "../../tests/unit/layout/row.rs"]
mod tests;
