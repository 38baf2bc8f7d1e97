use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::foundation::error::{SerpentileError, SerpentileResult};

/// Largest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// A single domino tile.
///
/// Identity is the unordered pip pair: `6-4` and `4-6` are the same
/// physical tile, so equality and hashing go through [`Domino::key`]. The
/// `left`/`right` fields carry the tile's current chain orientation.
pub struct Domino {
    /// Pip count on the left (or upper) face.
    pub left: u8,
    /// Pip count on the right (or lower) face.
    pub right: u8,
}

impl Domino {
    /// Build a tile, rejecting pip values outside `0..=6`.
    pub fn new(left: u8, right: u8) -> SerpentileResult<Self> {
        if left > MAX_PIP || right > MAX_PIP {
            return Err(SerpentileError::validation(format!(
                "pip values must be <= {MAX_PIP}, got {left}-{right}"
            )));
        }
        Ok(Self { left, right })
    }

    /// Normalized `(low, high)` pip pair used as cache identity.
    pub fn key(self) -> (u8, u8) {
        (self.left.min(self.right), self.left.max(self.right))
    }

    /// True when both faces carry the same pip count.
    pub fn is_double(self) -> bool {
        self.left == self.right
    }

    /// Sum of both faces.
    pub fn total(self) -> u8 {
        self.left + self.right
    }

    /// The same tile with its faces swapped.
    pub fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// True when either face matches `value`.
    pub fn has(self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    /// The face opposite to `value`, or a validation error when the tile
    /// does not carry `value` at all.
    pub fn other_value(self, value: u8) -> SerpentileResult<u8> {
        if self.left == value {
            return Ok(self.right);
        }
        if self.right == value {
            return Ok(self.left);
        }
        Err(SerpentileError::validation(format!(
            "tile {}-{} does not contain {value}",
            self.left, self.right
        )))
    }
}

impl PartialEq for Domino {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Domino {}

impl Hash for Domino {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Domino {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.left, self.right)
    }
}

/// Full double-six set of 28 tiles in canonical `(i, j), j >= i` order.
pub fn domino_set() -> Vec<Domino> {
    let mut tiles = Vec::with_capacity(28);
    for i in 0..=MAX_PIP {
        for j in i..=MAX_PIP {
            tiles.push(Domino { left: i, right: j });
        }
    }
    tiles
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A domino that has been played on the board.
pub struct PlacedDomino {
    /// The tile, oriented so the chain reads left-to-right.
    pub domino: Domino,
    /// Index in the spatial sequence; 0 is the leftmost tile.
    pub position: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The currently playable pip values at both chain ends.
pub struct BoardEnds {
    /// Open pip on the leftmost tile, `None` for an empty board.
    pub left: Option<u8>,
    /// Open pip on the rightmost tile, `None` for an empty board.
    pub right: Option<u8>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// The ordered chain of played dominoes.
///
/// The chain invariant is the one the game server maintains: tiles are
/// stored in left-to-right spatial order and every tile's `right` face
/// equals its right neighbor's `left` face. [`Board::play_left`] and
/// [`Board::play_right`] flip incoming tiles as needed to keep it.
///
/// The layout engine itself never checks adjacency; it trusts the board it
/// is handed. `Board` is the collaborator-side model used by hosts, the
/// CLI, and tests.
pub struct Board {
    tiles: Vec<PlacedDomino>,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Build a board by playing `tiles` onto the right end in order.
    ///
    /// Tiles may arrive in either orientation; each is flipped as needed,
    /// and a tile that matches neither way is a validation error.
    pub fn from_tiles(tiles: Vec<Domino>) -> SerpentileResult<Self> {
        let mut board = Self::new();
        for domino in tiles {
            board.play_right(domino)?;
        }
        Ok(board)
    }

    /// Play a tile on the left end, flipping it so its `right` face
    /// touches the current leftmost tile.
    pub fn play_left(&mut self, domino: Domino) -> SerpentileResult<()> {
        let oriented = match self.tiles.first() {
            None => domino,
            Some(first) => {
                let end = first.domino.left;
                if domino.right == end {
                    domino
                } else if domino.left == end {
                    domino.flipped()
                } else {
                    return Err(SerpentileError::validation(format!(
                        "tile {domino} does not match left end ({end})"
                    )));
                }
            }
        };
        self.tiles.insert(
            0,
            PlacedDomino {
                domino: oriented,
                position: 0,
            },
        );
        self.reindex();
        Ok(())
    }

    /// Play a tile on the right end, flipping it so its `left` face
    /// touches the current rightmost tile.
    pub fn play_right(&mut self, domino: Domino) -> SerpentileResult<()> {
        let oriented = match self.tiles.last() {
            None => domino,
            Some(last) => {
                let end = last.domino.right;
                if domino.left == end {
                    domino
                } else if domino.right == end {
                    domino.flipped()
                } else {
                    return Err(SerpentileError::validation(format!(
                        "tile {domino} does not match right end ({end})"
                    )));
                }
            }
        };
        let position = self.tiles.len();
        self.tiles.push(PlacedDomino {
            domino: oriented,
            position,
        });
        Ok(())
    }

    /// The open pip values at both ends.
    pub fn ends(&self) -> BoardEnds {
        BoardEnds {
            left: self.tiles.first().map(|t| t.domino.left),
            right: self.tiles.last().map(|t| t.domino.right),
        }
    }

    /// Number of played tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when no tile has been played yet.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The leftmost tile, if any.
    pub fn first(&self) -> Option<&PlacedDomino> {
        self.tiles.first()
    }

    /// The rightmost tile, if any.
    pub fn last(&self) -> Option<&PlacedDomino> {
        self.tiles.last()
    }

    /// The chain in left-to-right order.
    pub fn tiles(&self) -> &[PlacedDomino] {
        &self.tiles
    }

    /// Check pip ranges, chain adjacency, position indexing, and that no
    /// tile appears twice (one physical double-six set).
    pub fn validate(&self) -> SerpentileResult<()> {
        let mut seen = HashSet::new();
        for (index, tile) in self.tiles.iter().enumerate() {
            let d = tile.domino;
            if d.left > MAX_PIP || d.right > MAX_PIP {
                return Err(SerpentileError::validation(format!(
                    "tile {d} has a pip above {MAX_PIP}"
                )));
            }
            if tile.position != index {
                return Err(SerpentileError::validation(format!(
                    "tile {d} carries position {} at index {index}",
                    tile.position
                )));
            }
            if !seen.insert(d.key()) {
                return Err(SerpentileError::validation(format!(
                    "tile {d} appears more than once"
                )));
            }
        }
        for pair in self.tiles.windows(2) {
            if pair[0].domino.right != pair[1].domino.left {
                return Err(SerpentileError::validation(format!(
                    "tiles {} and {} do not chain",
                    pair[0].domino, pair[1].domino
                )));
            }
        }
        Ok(())
    }

    fn reindex(&mut self) {
        for (index, tile) in self.tiles.iter_mut().enumerate() {
            tile.position = index;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/model.rs"]
mod tests;
