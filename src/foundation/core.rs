pub use kurbo::{Point, Rect, Vec2};

/// Compass direction a chain arm is currently traveling in.
///
/// Horizontal runs turn into [`Direction::South`] when they hit the
/// per-row tile limit; vertical runs turn back east or west depending on
/// the arm's horizontal bias. The chain never snakes back upward past its
/// first turn, but the transition table stays total over all four states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Upward (negative y).
    North,
    /// Downward (positive y).
    South,
    /// Rightward (positive x).
    East,
    /// Leftward (negative x).
    West,
}

impl Direction {
    /// True for east/west travel.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// True for north/south travel.
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}

/// Current canvas size in pixels, as reported by the host's viewport
/// observer. The engine never measures the DOM itself.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Container width in pixels.
    pub width: f64,
    /// Container height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport from raw pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A zero-area viewport yields the empty layout rather than a crash.
    pub fn is_degenerate(self) -> bool {
        !(self.width > 0.0) || !(self.height > 0.0)
    }
}

/// Immutable pixel placement of one played tile.
///
/// Once a placement is handed out for a tile it is returned byte-identical
/// on every later recomputation until the geometry fingerprint changes;
/// renderers and animation layers rely on this to avoid visual jitter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Top-left corner in post-scale pixels.
    pub origin: Point,
    /// Rendered width after scaling (integral pixels).
    pub width: f64,
    /// Rendered height after scaling (integral pixels).
    pub height: f64,
    /// True when the tile's long edge runs east-west.
    pub horizontal: bool,
    /// True for the tile placed exactly at a run's turn.
    pub corner: bool,
    /// True for a tile with equal pip faces.
    pub double: bool,
    /// True when the renderer must rotate the tile art 180° so the pip
    /// half facing the rest of the chain is correct on a reverse-traveling
    /// run. Position and size are unaffected.
    pub flipped: bool,
}

impl Placement {
    /// Pixel center of the tile.
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// Bounding rectangle of the tile.
    pub fn rect(self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
