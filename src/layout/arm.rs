use crate::board::model::Domino;
use crate::foundation::core::{Direction, Placement, Point};
use crate::layout::geometry::ResolvedGeometry;

/// Per-arm growth state: where the next tile attaches and how the arm is
/// currently traveling.
///
/// The two arms of a chain are fully independent; exactly one advances per
/// newly observed endpoint tile. All transitions are total: no input
/// reachable through [`ArmState::advance`] can produce an illegal state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ArmState {
    /// Pixel center of the outgoing edge of the last placed tile.
    connection: Point,
    direction: Direction,
    /// Tiles placed since the last turn.
    run_length: u32,
    /// Horizontal bias: true means the next horizontal run travels east.
    /// Flipped on every horizontal-to-south turn so successive rows snake
    /// back and forth inside the reserved row width.
    going_positive: bool,
    last_width: f64,
    last_height: f64,
    last_double: bool,
}

impl ArmState {
    /// Arm anchored at an edge of the freshly seeded center tile.
    pub(crate) fn seeded(
        connection: Point,
        direction: Direction,
        going_positive: bool,
        seed: &Placement,
    ) -> Self {
        Self {
            connection,
            direction,
            run_length: 0,
            going_positive,
            last_width: seed.width,
            last_height: seed.height,
            last_double: seed.double,
        }
    }

    pub(crate) fn connection(&self) -> Point {
        self.connection
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Place the next tile appended to this arm and update the arm state.
    ///
    /// Turns when the run has reached the direction's tile limit; the tile
    /// placed at the turn is the corner tile and lands in the new
    /// direction.
    pub(crate) fn advance(&mut self, domino: Domino, geom: &ResolvedGeometry) -> Placement {
        let mut corner = false;
        if self.run_length >= self.turn_limit(geom) {
            self.turn();
            corner = true;
        }

        // A regular tile's long edge follows travel and a double lies
        // across the run, except a corner double, which must line up with
        // the post-turn direction to bridge the two segments.
        let horizontal = if domino.is_double() && !corner {
            !self.direction.is_horizontal()
        } else {
            self.direction.is_horizontal()
        };
        let (w, h) = geom.oriented(horizontal);
        let gap = geom.gap;
        let cp = self.connection;

        let (origin, next) = match self.direction {
            Direction::East => (
                Point::new(cp.x + gap, cp.y - h / 2.0),
                Point::new(cp.x + gap + w, cp.y),
            ),
            Direction::West => (
                Point::new(cp.x - w - gap, cp.y - h / 2.0),
                Point::new(cp.x - w - gap, cp.y),
            ),
            Direction::South => (
                Point::new(cp.x - w / 2.0, cp.y + gap),
                Point::new(cp.x, cp.y + gap + h),
            ),
            Direction::North => (
                Point::new(cp.x - w / 2.0, cp.y - h - gap),
                Point::new(cp.x, cp.y - h - gap),
            ),
        };

        let flipped = !horizontal && !self.going_positive;

        self.connection = next;
        self.run_length += 1;
        self.last_width = w;
        self.last_height = h;
        self.last_double = domino.is_double();

        Placement {
            origin,
            width: w,
            height: h,
            horizontal,
            corner,
            double: domino.is_double(),
            flipped,
        }
    }

    fn turn_limit(&self, geom: &ResolvedGeometry) -> u32 {
        match self.direction {
            Direction::East | Direction::West => geom.tiles_per_row,
            Direction::North | Direction::South => geom.tiles_per_column,
        }
    }

    /// Reset the run and move the connection point from the outgoing half
    /// of the last tile's far edge to the far edge of the new direction.
    ///
    /// The outgoing half sits a quarter of the tile's extent in from the
    /// far edge; a double is symmetric, so its offset uses the full-center
    /// fraction (1/2) instead. This bridging fraction is a domain rule:
    /// it is what makes the corner line up with real domino art.
    fn turn(&mut self) {
        self.run_length = 0;
        let frac = if self.last_double { 0.5 } else { 0.25 };
        let cp = self.connection;
        match self.direction {
            Direction::East => {
                self.connection = Point::new(
                    cp.x - self.last_width * frac,
                    cp.y + self.last_height / 2.0,
                );
                self.direction = Direction::South;
                self.going_positive = false;
            }
            Direction::West => {
                self.connection = Point::new(
                    cp.x + self.last_width * frac,
                    cp.y + self.last_height / 2.0,
                );
                self.direction = Direction::South;
                self.going_positive = true;
            }
            Direction::South => {
                let half = self.last_width / 2.0;
                let dx = if self.going_positive { half } else { -half };
                self.connection = Point::new(cp.x + dx, cp.y - self.last_height * frac);
                self.direction = if self.going_positive {
                    Direction::East
                } else {
                    Direction::West
                };
            }
            Direction::North => {
                let half = self.last_width / 2.0;
                let dx = if self.going_positive { half } else { -half };
                self.connection = Point::new(cp.x + dx, cp.y + self.last_height * frac);
                self.direction = if self.going_positive {
                    Direction::East
                } else {
                    Direction::West
                };
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arm.rs"]
mod tests;
