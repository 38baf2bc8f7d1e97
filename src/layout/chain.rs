use std::collections::HashMap;

use crate::board::model::{Board, Domino, PlacedDomino};
use crate::foundation::core::{Direction, Placement, Point, Rect, Viewport};
use crate::foundation::error::SerpentileResult;
use crate::layout::arm::ArmState;
use crate::layout::geometry::{GeometryFingerprint, LayoutParams, ResolvedGeometry};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One playable end of the laid-out chain, exposed to the play-target UI.
pub struct ChainEnd {
    /// Attach point for the next tile on this end.
    pub position: Point,
    /// Direction the arm is currently traveling.
    pub growth_direction: Direction,
    /// Open pip value, `None` for an empty board.
    pub pip_value: Option<u8>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Snapshot view returned by one recomputation.
pub struct LayoutSnapshot {
    /// Placements aligned index-for-index with the board sequence.
    pub placements: Vec<Placement>,
    /// The left-growing end of the chain.
    pub left_end: ChainEnd,
    /// The right-growing end of the chain.
    pub right_end: ChainEnd,
    /// Always the full canvas; there is no dynamic bounding box.
    pub bounds: Rect,
    /// Resolved uniform scale factor applied to tiles and gaps.
    pub scale: f64,
}

impl LayoutSnapshot {
    fn empty() -> Self {
        Self {
            placements: Vec::new(),
            left_end: ChainEnd {
                position: Point::ZERO,
                growth_direction: Direction::West,
                pip_value: None,
            },
            right_end: ChainEnd {
                position: Point::ZERO,
                growth_direction: Direction::East,
                pip_value: None,
            },
            bounds: Rect::ZERO,
            scale: 1.0,
        }
    }
}

/// Incremental layout engine for one active chain.
///
/// The host owns one engine per round and calls
/// [`ChainLayoutEngine::recompute`] every time the board or the viewport
/// changes. The internal cache memoizes every placement so appends cost
/// O(1) amortized and previously placed tiles never move; the cache is
/// rebuilt only when the geometry fingerprint changes materially or the
/// board shrinks back to a single tile (a new round).
#[derive(Debug)]
pub struct ChainLayoutEngine {
    params: LayoutParams,
    cache: Option<LayoutCache>,
}

impl ChainLayoutEngine {
    /// Build an engine after validating the layout parameters.
    pub fn new(params: LayoutParams) -> SerpentileResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            cache: None,
        })
    }

    /// The parameters this engine was built with.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Recompute placements for the current board and viewport.
    ///
    /// Total over its input domain: an empty board or a zero-size viewport
    /// yields the explicit empty snapshot, never an error.
    #[tracing::instrument(skip(self, board))]
    pub fn recompute(&mut self, board: &Board, viewport: Viewport) -> LayoutSnapshot {
        let Some(first) = board.first() else {
            self.cache = None;
            return LayoutSnapshot::empty();
        };
        if viewport.is_degenerate() {
            self.cache = None;
            return LayoutSnapshot::empty();
        }

        let geom = self.params.resolve(viewport);
        let fingerprint = geom.fingerprint();

        let needs_reset = match self.cache.as_ref() {
            None => true,
            Some(cache) => {
                !cache.fingerprint.matches(&fingerprint)
                    || (board.len() == 1 && !cache.is_sole_entry(first.domino))
            }
        };

        if needs_reset {
            tracing::debug!(tiles = board.len(), scale = geom.scale, "layout cache reset");
            self.cache = Some(LayoutCache::rebuild(board, &geom));
        } else if let Some(cache) = self.cache.as_mut() {
            cache.absorb_new_endpoints(board, &geom);
        }

        let Some(cache) = self.cache.as_ref() else {
            return LayoutSnapshot::empty();
        };
        cache.snapshot(board, &geom)
    }
}

/// Memoized placements plus the two arm machines and the geometry they
/// were computed under.
#[derive(Debug)]
struct LayoutCache {
    placements: HashMap<(u8, u8), Placement>,
    left: ArmState,
    right: ArmState,
    fingerprint: GeometryFingerprint,
}

impl LayoutCache {
    /// Seed the cache with the leftmost tile centered in the container and
    /// replay any remaining tiles through the right arm so every tile has
    /// an entry again after a reset.
    fn rebuild(board: &Board, geom: &ResolvedGeometry) -> Self {
        let tiles = board.tiles();
        let (seed_placement, left, right) = match tiles.first() {
            Some(first) => seed_center(first.domino, geom),
            // recompute() never calls rebuild on an empty board; the seed
            // below keeps the function total anyway.
            None => seed_center(Domino { left: 0, right: 0 }, geom),
        };

        let mut cache = Self {
            placements: HashMap::new(),
            left,
            right,
            fingerprint: geom.fingerprint(),
        };
        if let Some(first) = tiles.first() {
            cache.placements.insert(first.domino.key(), seed_placement);
        }
        for tile in tiles.iter().skip(1) {
            let placement = cache.right.advance(tile.domino, geom);
            cache.placements.insert(tile.domino.key(), placement);
        }
        cache
    }

    fn is_sole_entry(&self, domino: Domino) -> bool {
        self.placements.len() == 1 && self.placements.contains_key(&domino.key())
    }

    /// Advance one arm for each endpoint tile not yet in the cache. The
    /// tiles in between are untouched; that is the stability contract.
    fn absorb_new_endpoints(&mut self, board: &Board, geom: &ResolvedGeometry) {
        if let Some(first) = board.first() {
            if !self.placements.contains_key(&first.domino.key()) {
                let placement = self.left.advance(first.domino, geom);
                self.placements.insert(first.domino.key(), placement);
            }
        }
        if let Some(last) = board.last() {
            if !self.placements.contains_key(&last.domino.key()) {
                let placement = self.right.advance(last.domino, geom);
                self.placements.insert(last.domino.key(), placement);
            }
        }
    }

    fn snapshot(&self, board: &Board, geom: &ResolvedGeometry) -> LayoutSnapshot {
        let placements = board
            .tiles()
            .iter()
            .enumerate()
            .map(|(index, tile)| self.placement_for(index, tile, geom))
            .collect();

        LayoutSnapshot {
            placements,
            left_end: ChainEnd {
                position: self.left.connection(),
                growth_direction: self.left.direction(),
                pip_value: board.first().map(|t| t.domino.left),
            },
            right_end: ChainEnd {
                position: self.right.connection(),
                growth_direction: self.right.direction(),
                pip_value: board.last().map(|t| t.domino.right),
            },
            bounds: Rect::new(0.0, 0.0, geom.container_width, geom.container_height),
            scale: geom.scale,
        }
    }

    fn placement_for(
        &self,
        index: usize,
        tile: &PlacedDomino,
        geom: &ResolvedGeometry,
    ) -> Placement {
        match self.placements.get(&tile.domino.key()) {
            Some(placement) => *placement,
            // Reachable only when the caller skipped a recomputation step;
            // a naive slot keeps the frame renderable.
            None => {
                tracing::warn!(index, tile = %tile.domino, "placement missing from cache, using fallback");
                fallback_placement(index, tile.domino, geom)
            }
        }
    }
}

/// Center the first tile in the container and anchor both arms on its
/// west and east edge centers.
fn seed_center(domino: Domino, geom: &ResolvedGeometry) -> (Placement, ArmState, ArmState) {
    let horizontal = !domino.is_double();
    let (w, h) = geom.oriented(horizontal);
    let origin = Point::new(
        (geom.container_width - w) / 2.0,
        (geom.container_height - h) / 2.0,
    );
    let placement = Placement {
        origin,
        width: w,
        height: h,
        horizontal,
        corner: false,
        double: domino.is_double(),
        flipped: false,
    };
    let west = Point::new(origin.x, origin.y + h / 2.0);
    let east = Point::new(origin.x + w, origin.y + h / 2.0);
    let left = ArmState::seeded(west, Direction::West, false, &placement);
    let right = ArmState::seeded(east, Direction::East, true, &placement);
    (placement, left, right)
}

fn fallback_placement(index: usize, domino: Domino, geom: &ResolvedGeometry) -> Placement {
    let x = geom.padding + index as f64 * (geom.tile_long + geom.gap);
    Placement {
        origin: Point::new(x, geom.padding),
        width: geom.tile_long,
        height: geom.tile_short,
        horizontal: true,
        corner: false,
        double: domino.is_double(),
        flipped: false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/chain.rs"]
mod tests;
