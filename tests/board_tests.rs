use rand::rngs::SmallRng;
use rand::SeedableRng;
use submarines::{
    BoardGrid, Coordinate, Dimensions, FleetCatalog, GameError, Level, Signal, Vessel, VesselKind,
};

fn default_board(seed: u64) -> BoardGrid {
    let mut rng = SmallRng::seed_from_u64(seed);
    BoardGrid::populate(Dimensions::default(), &FleetCatalog::default(), &mut rng).unwrap()
}

fn empty_cell(board: &BoardGrid) -> Coordinate {
    let dims = board.dimensions();
    for row in 0..dims.rows {
        for column in 0..dims.columns {
            for level in 0..dims.levels {
                let c = Coordinate::new(row, column, level);
                if board.vessel_at(c).is_none() {
                    return c;
                }
            }
        }
    }
    panic!("board has no empty cell");
}

#[test]
fn test_default_board() {
    let board = default_board(42);
    assert_eq!(board.dimensions(), Dimensions::default());
    assert_eq!(board.remaining(), 4);
    assert_eq!(board.occupied_cells(), FleetCatalog::default().total_cells());
}

#[test]
fn test_levels_must_be_three() {
    let dims = Dimensions { rows: 4, columns: 4, levels: 2 };
    assert_eq!(BoardGrid::new(dims).unwrap_err(), GameError::InvalidLevels(2));
    assert_eq!(Dimensions::new(5, 5, 4).unwrap_err(), GameError::InvalidLevels(4));
}

#[test]
fn test_board_small() {
    let dims = Dimensions { rows: 3, columns: 3, levels: 3 };
    assert_eq!(
        BoardGrid::new(dims).unwrap_err(),
        GameError::BoardTooSmall { rows: 3, columns: 3 }
    );
    assert!(Dimensions::new(4, 3, 3).is_err());
    assert!(Dimensions::new(6, 4, 3).is_ok());
}

#[test]
fn test_too_many_vessels() {
    // two jets never fit on one 4x4 level
    let fleet = FleetCatalog::new([(VesselKind::Jet, 2), (VesselKind::General, 1)]).unwrap();
    let mut rng = SmallRng::seed_from_u64(9);
    let err = BoardGrid::populate(Dimensions::default(), &fleet, &mut rng).unwrap_err();
    assert_eq!(err, GameError::Overcrowded(Level::Air));
    assert!(err.to_string().starts_with("Air seems to be too crowded"));
}

#[test]
fn test_larger_board_holds_bigger_fleet() {
    let fleet: FleetCatalog = "submarine=3,destroyer=2,jet=2,general=1".parse().unwrap();
    let dims = Dimensions::new(8, 8, 3).unwrap();
    let mut rng = SmallRng::seed_from_u64(17);
    let board = BoardGrid::populate(dims, &fleet, &mut rng).unwrap();
    assert_eq!(board.remaining(), 8);
    assert_eq!(board.occupied_cells(), fleet.total_cells());
}

#[test]
fn test_vessels_stay_on_their_level() {
    let board = default_board(4);
    for (id, vessel) in board.vessels() {
        let footprint = board.footprint(id);
        assert_eq!(footprint.len(), vessel.shape().cell_count());
        assert!(footprint.iter().all(|c| c.level == vessel.level().index()));
    }
}

#[test]
fn test_manual_place_and_destroyer_kill() {
    let mut board = BoardGrid::new(Dimensions::default()).unwrap();
    let destroyer = Vessel::with_level(VesselKind::Destroyer, 1, Level::SeaLevel);
    let id = board.place_at(destroyer, 2, 0).unwrap();
    assert_eq!(board.occupied_cells(), 4);

    let target = Coordinate::on(2, 1, Level::SeaLevel);
    for _ in 0..3 {
        let shot = board.fire(target).unwrap();
        assert_eq!(shot.signal, Signal::Hit);
        assert!(!shot.game_over);
    }
    assert_eq!(board.vessel(id).unwrap().hits(), 3);
    assert!(!board.vessel(id).unwrap().is_destroyed());

    let shot = board.fire(Coordinate::on(2, 3, Level::SeaLevel)).unwrap();
    assert_eq!(shot.signal, Signal::Kill);
    // last vessel gone, the board is empty
    assert!(shot.game_over);
    assert_eq!(board.occupied_cells(), 0);
    assert!(board.vessel(id).is_none());
    assert!(board.footprint(id).is_empty());
}

#[test]
fn test_kill_clears_only_that_vessel() {
    let mut board = BoardGrid::new(Dimensions::default()).unwrap();
    let sub = board
        .place_at(Vessel::with_level(VesselKind::Submarine, 1, Level::Deep), 0, 0)
        .unwrap();
    board
        .place_at(Vessel::with_level(VesselKind::Submarine, 2, Level::Deep), 1, 0)
        .unwrap();

    let shot = board.fire(Coordinate::on(0, 2, Level::Deep)).unwrap();
    assert_eq!(shot.signal, Signal::Kill);
    assert!(!shot.game_over);
    assert!(board.vessel(sub).is_none());
    assert_eq!(board.occupied_cells(), 3);
    assert_eq!(board.remaining(), 1);

    // the cleared cells are open water now
    let shot = board.fire(Coordinate::on(0, 0, Level::Deep)).unwrap();
    assert_eq!(shot.signal, Signal::Miss);
}

#[test]
fn test_place_at_rejects_bad_spots() {
    let mut board = BoardGrid::new(Dimensions::default()).unwrap();
    let destroyer = || Vessel::with_level(VesselKind::Destroyer, 1, Level::SeaLevel);
    assert_eq!(board.place_at(destroyer(), 0, 1).unwrap_err(), GameError::OutOfBounds);
    board.place_at(destroyer(), 0, 0).unwrap();
    assert_eq!(board.place_at(destroyer(), 0, 0).unwrap_err(), GameError::Overlap);

    // same rows on another level are free
    let sub = Vessel::with_level(VesselKind::Submarine, 1, Level::Deep);
    assert!(board.place_at(sub, 0, 0).is_ok());
}

#[test]
fn test_general_fire_ends_game() {
    let mut board = default_board(8);
    let target = board.locate(VesselKind::General).unwrap();
    let shot = board.fire(target).unwrap();
    assert_eq!(shot.signal, Signal::End);
    assert!(shot.game_over);
    assert!(board.occupied_cells() > 0);
    assert!(board.locate(VesselKind::General).is_none());
}

#[test]
fn test_empty_fire() {
    let mut board = default_board(12);
    let target = empty_cell(&board);
    let before = board.to_string();
    let shot = board.fire(target).unwrap();
    assert_eq!(shot.signal, Signal::Miss);
    assert!(!shot.game_over);
    assert_eq!(board.to_string(), before);
}

#[test]
fn test_out_of_range_fire() {
    let mut board = default_board(13);
    let before = board.to_string();
    for target in [(4, 0, 0), (0, 4, 0), (0, 0, 3), (3, 3, 3)] {
        assert_eq!(
            board.fire(Coordinate::from(target)).unwrap_err(),
            GameError::InvalidCoordinates
        );
    }
    assert_eq!(board.to_string(), before);
}

#[test]
fn test_valid_target() {
    let board = default_board(14);
    assert_eq!(board.parse_target("(0,0,0)").unwrap(), Coordinate::new(0, 0, 0));
    assert_eq!(board.parse_target("0,0,0").unwrap(), Coordinate::new(0, 0, 0));
    assert_eq!(board.parse_target(" ( 3, 2 ,1 ) ").unwrap(), Coordinate::new(3, 2, 1));
}

#[test]
fn test_invalid_targets() {
    let board = default_board(15);
    for raw in ["(3,3,3)", "4,2,2", "1,1", "a", "", "1,1,1,1", "-1,0,0", "(1,1,1", "1;1;1", "1.0,1,1"] {
        assert_eq!(
            board.parse_target(raw).unwrap_err(),
            GameError::InvalidCoordinates,
            "{:?} should be rejected",
            raw
        );
    }
}

#[test]
fn test_display_lists_every_level() {
    let mut board = BoardGrid::new(Dimensions::default()).unwrap();
    board
        .place_at(Vessel::with_level(VesselKind::General, 1, Level::Air), 1, 1)
        .unwrap();
    let text = board.to_string();
    assert!(text.contains("Deep:"));
    assert!(text.contains("Sea_level:"));
    assert!(text.contains("Air:"));
    assert_eq!(text.matches("general").count(), 1);
}

#[test]
fn test_same_seed_same_board() {
    assert_eq!(default_board(99).to_string(), default_board(99).to_string());
}

#[test]
fn test_place_at_far_anchor_is_out_of_bounds() {
    let mut board = BoardGrid::new(Dimensions::default()).unwrap();
    let sub = || Vessel::with_level(VesselKind::Submarine, 1, Level::Deep);
    assert_eq!(board.place_at(sub(), usize::MAX, 0).unwrap_err(), GameError::OutOfBounds);
    assert_eq!(board.place_at(sub(), 0, usize::MAX).unwrap_err(), GameError::OutOfBounds);
    assert_eq!(board.occupied_cells(), 0);
}

#[test]
fn test_sunk_vessel_leaves_no_cells_behind() {
    let mut board = default_board(31);
    let sub = board.locate(VesselKind::Submarine).unwrap();
    assert_eq!(board.fire(sub).unwrap().signal, Signal::Kill);
    // every cell of the sunk vessel is open water again
    for (id, vessel) in board.vessels() {
        assert_ne!(vessel.kind(), VesselKind::Submarine);
        assert_eq!(board.footprint(id).len(), vessel.shape().cell_count());
    }
    assert_eq!(board.fire(sub).unwrap().signal, Signal::Miss);
}
