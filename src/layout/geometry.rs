use crate::foundation::core::Viewport;
use crate::foundation::error::{SerpentileError, SerpentileResult};

/// Hard upper bound on the uniform scale factor; prevents absurdly large
/// tiles on very wide viewports.
pub const MAX_SCALE: f64 = 1.5;

/// Lower clamp keeping the scale strictly positive on degenerate widths.
pub const MIN_SCALE: f64 = 0.1;

/// Scale drift at or below this tolerance does not invalidate the cache.
pub const SCALE_TOLERANCE: f64 = 0.01;

const MIN_GAP: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tile geometry and turn-limit configuration for the chain layout.
pub struct LayoutParams {
    /// Unscaled tile long-edge length in pixels.
    pub base_tile_width: f64,
    /// Unscaled tile short-edge length in pixels.
    pub base_tile_height: f64,
    /// Canvas inset in pixels; not affected by scaling.
    pub padding: f64,
    /// Tiles allowed in an east/west run before the arm turns.
    pub tiles_per_row: u32,
    /// Tiles allowed in a north/south run before the arm turns; lower than
    /// the row limit because tile short-edges are the turn pivot and
    /// vertical space is typically scarcer.
    pub tiles_per_column: u32,
    /// Unscaled gap between adjacent tiles in pixels.
    pub base_gap: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            base_tile_width: 64.0,
            base_tile_height: 32.0,
            padding: 16.0,
            tiles_per_row: 5,
            tiles_per_column: 3,
            base_gap: 4.0,
        }
    }
}

impl LayoutParams {
    /// Reject non-positive tile dimensions, zero turn limits, and negative
    /// insets.
    pub fn validate(&self) -> SerpentileResult<()> {
        if !(self.base_tile_width > 0.0) || !(self.base_tile_height > 0.0) {
            return Err(SerpentileError::validation(
                "base tile dimensions must be positive",
            ));
        }
        if self.tiles_per_row == 0 || self.tiles_per_column == 0 {
            return Err(SerpentileError::validation("turn limits must be >= 1"));
        }
        if self.padding < 0.0 || self.base_gap < 0.0 {
            return Err(SerpentileError::validation(
                "padding and gap must be non-negative",
            ));
        }
        Ok(())
    }

    /// Resolve the uniform scale and derived tile metrics for a viewport.
    ///
    /// The denominator reserves room for one full row plus one extra
    /// (turning) tile; rendered dimensions are floored for pixel-crisp
    /// output and the gap never drops below 2 px.
    pub(crate) fn resolve(&self, viewport: Viewport) -> ResolvedGeometry {
        let reserved = f64::from(self.tiles_per_row) * self.base_tile_width + self.base_tile_width;
        let scale = (viewport.width / reserved).clamp(MIN_SCALE, MAX_SCALE);
        ResolvedGeometry {
            scale,
            tile_long: (self.base_tile_width * scale).floor(),
            tile_short: (self.base_tile_height * scale).floor(),
            gap: (self.base_gap * scale).floor().max(MIN_GAP),
            padding: self.padding,
            container_width: viewport.width,
            container_height: viewport.height,
            tiles_per_row: self.tiles_per_row,
            tiles_per_column: self.tiles_per_column,
        }
    }
}

/// Scale-resolved metrics shared by the arm machine and chain assembly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResolvedGeometry {
    pub(crate) scale: f64,
    pub(crate) tile_long: f64,
    pub(crate) tile_short: f64,
    pub(crate) gap: f64,
    pub(crate) padding: f64,
    pub(crate) container_width: f64,
    pub(crate) container_height: f64,
    pub(crate) tiles_per_row: u32,
    pub(crate) tiles_per_column: u32,
}

impl ResolvedGeometry {
    /// Rendered `(width, height)` for a tile in the given orientation.
    pub(crate) fn oriented(&self, horizontal: bool) -> (f64, f64) {
        if horizontal {
            (self.tile_long, self.tile_short)
        } else {
            (self.tile_short, self.tile_long)
        }
    }

    pub(crate) fn fingerprint(&self) -> GeometryFingerprint {
        GeometryFingerprint {
            container_width: self.container_width,
            container_height: self.container_height,
            scale: self.scale,
        }
    }
}

/// The geometry under which cached placements were computed. Any material
/// change invalidates the whole cache.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GeometryFingerprint {
    pub(crate) container_width: f64,
    pub(crate) container_height: f64,
    pub(crate) scale: f64,
}

impl GeometryFingerprint {
    /// True when `other` is close enough to keep the cache alive: both
    /// container dimensions identical and scale within tolerance.
    pub(crate) fn matches(&self, other: &GeometryFingerprint) -> bool {
        self.container_width == other.container_width
            && self.container_height == other.container_height
            && (self.scale - other.scale).abs() <= SCALE_TOLERANCE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
