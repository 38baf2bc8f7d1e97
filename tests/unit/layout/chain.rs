use super::*;
use crate::layout::geometry::MAX_SCALE;

fn d(left: u8, right: u8) -> Domino {
    Domino::new(left, right).unwrap()
}

fn engine() -> ChainLayoutEngine {
    ChainLayoutEngine::new(LayoutParams::default()).unwrap()
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

#[test]
fn single_tile_is_centered() {
    // 800x600 caps the scale at 1.5: tile renders 96x48.
    let board = Board::from_tiles(vec![d(6, 4)]).unwrap();
    let snap = engine().recompute(&board, viewport());
    assert_eq!(snap.scale, 1.5);
    assert_eq!(snap.placements.len(), 1);
    assert_eq!(snap.placements[0].origin, Point::new(352.0, 276.0));
    assert_eq!(snap.placements[0].center(), Point::new(400.0, 300.0));
    assert!(snap.placements[0].horizontal);
    assert_eq!(snap.bounds, Rect::new(0.0, 0.0, 800.0, 600.0));
}

#[test]
fn single_double_is_centered_upright() {
    let board = Board::from_tiles(vec![d(6, 6)]).unwrap();
    let snap = engine().recompute(&board, viewport());
    let p = snap.placements[0];
    assert!(!p.horizontal);
    assert_eq!((p.width, p.height), (48.0, 96.0));
    assert_eq!(p.center(), Point::new(400.0, 300.0));
}

#[test]
fn single_tile_exposes_both_faces_as_ends() {
    let board = Board::from_tiles(vec![d(6, 4)]).unwrap();
    let snap = engine().recompute(&board, viewport());
    assert_eq!(snap.left_end.pip_value, Some(6));
    assert_eq!(snap.right_end.pip_value, Some(4));
    assert_eq!(snap.left_end.growth_direction, Direction::West);
    assert_eq!(snap.right_end.growth_direction, Direction::East);
    assert_eq!(snap.left_end.position, Point::new(352.0, 300.0));
    assert_eq!(snap.right_end.position, Point::new(448.0, 300.0));
}

#[test]
fn endpoint_pips_track_the_open_faces() {
    let board = Board::from_tiles(vec![d(6, 4), d(4, 2)]).unwrap();
    let snap = engine().recompute(&board, viewport());
    assert_eq!(snap.left_end.pip_value, Some(6));
    assert_eq!(snap.right_end.pip_value, Some(2));
}

#[test]
fn recompute_is_idempotent() {
    let board = Board::from_tiles(vec![d(6, 4), d(4, 2), d(2, 0)]).unwrap();
    let mut engine = engine();
    let first = engine.recompute(&board, viewport());
    let second = engine.recompute(&board, viewport());
    assert_eq!(first.placements, second.placements);
    assert_eq!(first.left_end, second.left_end);
    assert_eq!(first.right_end, second.right_end);
}

#[test]
fn appends_never_move_existing_tiles() {
    let mut engine = engine();
    let mut board = Board::from_tiles(vec![d(6, 4)]).unwrap();
    let mut previous = engine.recompute(&board, viewport());

    let right_plays = [d(4, 2), d(2, 0), d(0, 5), d(5, 3), d(3, 1), d(1, 6)];
    for tile in right_plays {
        board.play_right(tile).unwrap();
        let snap = engine.recompute(&board, viewport());
        // Everything but the fresh rightmost tile is byte-identical.
        assert_eq!(
            &snap.placements[..snap.placements.len() - 1],
            &previous.placements[..]
        );
        previous = snap;
    }
}

#[test]
fn left_appends_advance_only_the_left_arm() {
    let mut engine = engine();
    let mut board = Board::from_tiles(vec![d(6, 4)]).unwrap();
    let seed_snap = engine.recompute(&board, viewport());
    let seed = seed_snap.placements[0];
    let right_before = seed_snap.right_end;

    board.play_left(d(6, 6)).unwrap();
    let snap = engine.recompute(&board, viewport());
    assert_eq!(snap.placements[1], seed);
    assert_eq!(snap.right_end, right_before);

    // The double lies across the west run, hanging off the seed's west
    // edge, and renders upside down on the reverse-traveling arm.
    let p = snap.placements[0];
    assert!(p.double && !p.horizontal && p.flipped);
    assert_eq!(p.origin, Point::new(298.0, 252.0));
    assert_eq!(snap.left_end.position, Point::new(298.0, 300.0));
    assert_eq!(snap.left_end.pip_value, Some(6));
}

#[test]
fn sixth_append_on_one_arm_turns_the_run() {
    let mut engine = engine();
    let mut board = Board::from_tiles(vec![d(0, 1)]).unwrap();
    engine.recompute(&board, viewport());

    let plays = [d(1, 2), d(2, 3), d(3, 4), d(4, 5), d(5, 6), d(6, 0)];
    let mut last = None;
    for tile in plays {
        board.play_right(tile).unwrap();
        last = Some(engine.recompute(&board, viewport()));
    }
    let snap = last.unwrap();
    for p in &snap.placements[..6] {
        assert!(!p.corner);
        assert!(p.horizontal || p.double);
    }
    let corner = snap.placements[6];
    assert!(corner.corner);
    assert!(!corner.horizontal);
    assert_eq!(snap.right_end.growth_direction, Direction::South);
}

#[test]
fn empty_board_yields_the_empty_snapshot() {
    let snap = engine().recompute(&Board::new(), viewport());
    assert!(snap.placements.is_empty());
    assert_eq!(snap.scale, 1.0);
    assert_eq!(snap.left_end.pip_value, None);
    assert_eq!(snap.right_end.pip_value, None);
    assert_eq!(snap.bounds, Rect::ZERO);
}

#[test]
fn zero_size_viewport_yields_the_empty_snapshot() {
    let board = Board::from_tiles(vec![d(6, 4), d(4, 2)]).unwrap();
    let snap = engine().recompute(&board, Viewport::new(0.0, 600.0));
    assert!(snap.placements.is_empty());
    assert_eq!(snap.scale, 1.0);
}

#[test]
fn scale_stays_within_bounds_across_widths() {
    for width in [1.0, 50.0, 200.0, 384.0, 800.0, 4000.0] {
        let board = Board::from_tiles(vec![d(6, 4)]).unwrap();
        let snap = engine().recompute(&board, Viewport::new(width, 600.0));
        assert!(snap.scale > 0.0);
        assert!(snap.scale <= MAX_SCALE);
    }
}

#[test]
fn resize_rebuilds_every_placement() {
    let mut engine = engine();
    let mut board = Board::from_tiles(vec![d(6, 4)]).unwrap();
    engine.recompute(&board, viewport());
    for tile in [d(4, 2), d(2, 0)] {
        board.play_right(tile).unwrap();
        engine.recompute(&board, viewport());
    }

    // 500 / 384 = 1.302..: tile renders 83x41; the seed is re-centered in
    // the new container and the rest of the chain is replayed.
    let snap = engine.recompute(&board, Viewport::new(500.0, 600.0));
    assert_eq!(snap.placements.len(), 3);
    assert_eq!(snap.placements[0].center(), Point::new(250.0, 300.0));
    assert_eq!((snap.placements[0].width, snap.placements[0].height), (83.0, 41.0));

    // Stable again under the new fingerprint.
    let again = engine.recompute(&board, Viewport::new(500.0, 600.0));
    assert_eq!(snap.placements, again.placements);
}

#[test]
fn shrinking_to_one_tile_starts_a_new_round() {
    let mut engine = engine();
    let mut board = Board::from_tiles(vec![d(6, 4)]).unwrap();
    engine.recompute(&board, viewport());
    board.play_right(d(4, 2)).unwrap();
    engine.recompute(&board, viewport());

    let fresh = Board::from_tiles(vec![d(5, 3)]).unwrap();
    let snap = engine.recompute(&fresh, viewport());
    assert_eq!(snap.placements.len(), 1);
    assert_eq!(snap.placements[0].center(), Point::new(400.0, 300.0));
    assert_eq!(snap.left_end.pip_value, Some(5));
    assert_eq!(snap.right_end.pip_value, Some(3));
}

#[test]
fn skipped_recompute_falls_back_instead_of_crashing() {
    let mut engine = engine();
    let board = Board::from_tiles(vec![d(0, 1)]).unwrap();
    engine.recompute(&board, viewport());

    // Two right plays arrive in one recomputation: the middle tile was
    // never seen as an endpoint, so it gets the naive fallback slot.
    let jumped = Board::from_tiles(vec![d(0, 1), d(1, 2), d(2, 3)]).unwrap();
    let snap = engine.recompute(&jumped, viewport());
    assert_eq!(snap.placements.len(), 3);
    let fallback = snap.placements[1];
    assert_eq!(fallback.origin, Point::new(118.0, 16.0));
    assert!(fallback.horizontal && !fallback.corner && !fallback.flipped);
    // The endpoints themselves are still laid out by the arms.
    assert_eq!(snap.placements[0].origin, Point::new(352.0, 276.0));
    assert_eq!(snap.placements[2].origin, Point::new(454.0, 276.0));
}
