mod common;

use game_core::{CommandOutcome, GameEnd, GameStatus, LocationId, ScriptedPlayer};
use runtime::{RuntimeConfig, RuntimeError, Session};

#[test]
fn session_plays_through_to_a_win() {
    let dir = tempfile::tempdir().unwrap();
    common::write_data_dir(dir.path(), None);
    let mut session = Session::open(&RuntimeConfig::new(dir.path())).unwrap();
    let mut player = ScriptedPlayer::default();

    assert_eq!(
        session.describe().unwrap(),
        "Your dorm room. Your lucky mug sits on the desk."
    );
    assert!(session.options().contains(&"go east".to_string()));
    assert!(session.options().contains(&"look".to_string()));

    for line in ["take lucky mug", "go east", "take T-Card", "go east"] {
        let outcome = session.handle(line, &mut player).unwrap();
        assert_eq!(outcome.end(), None, "{line}");
    }
    assert_eq!(
        session.handle("drop lucky mug", &mut player).unwrap().to_string(),
        "You dropped: lucky mug"
    );
    let outcome = session.handle("drop t-card", &mut player).unwrap();
    assert_eq!(outcome.end(), Some(GameEnd::Won));
    assert!(session.is_over());

    let state = session.engine().state();
    assert_eq!(state.status, GameStatus::Won);
    assert_eq!(state.score, 2 + 5 + 3);
    assert_eq!(state.current_location, LocationId(3));
}

#[test]
fn config_file_and_overrides_apply() {
    let dir = tempfile::tempdir().unwrap();
    common::write_data_dir(dir.path(), Some("max_moves = 10\ntake_reward = 4\n"));

    let config = RuntimeConfig::new(dir.path()).with_max_moves(2);
    let mut session = Session::open(&config).unwrap();
    let mut player = ScriptedPlayer::default();

    assert_eq!(session.engine().config().take_reward, 4);
    session.handle("take lucky mug", &mut player).unwrap();
    assert_eq!(session.engine().state().score, 4);

    let outcome = session.handle("go east", &mut player).unwrap();
    assert!(matches!(outcome, CommandOutcome::Moved { end: Some(GameEnd::Lost { .. }), .. }));
    assert!(session.handle("go west", &mut player).is_err());
    assert_eq!(session.handle("undo", &mut player).unwrap(), CommandOutcome::Undone);
    assert!(!session.is_over());
}

#[test]
fn missing_world_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let err = Session::open(&RuntimeConfig::new(dir.path())).err().expect("error");
    assert!(matches!(err, RuntimeError::Content(_)));
}

#[test]
fn bad_start_location_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    common::write_data_dir(dir.path(), Some("start_location = 42\n"));
    let err = Session::open(&RuntimeConfig::new(dir.path())).err().expect("error");
    assert!(matches!(err, RuntimeError::World(_)));
}

#[test]
fn bundled_data_directory_loads() {
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let mut session = Session::open(&RuntimeConfig::new(data_dir)).unwrap();

    assert_eq!(session.engine().world().item_count(), 3);
    assert_eq!(session.engine().config().gates.len(), 1);

    // The guardian blocks the mug until the arena is won.
    let mut quitter = ScriptedPlayer::new(["quit"]);
    session.handle("go east", &mut quitter).unwrap();
    session.handle("go north", &mut quitter).unwrap();
    let outcome = session.handle("take lucky mug", &mut quitter).unwrap();
    assert!(matches!(outcome, CommandOutcome::TakeAborted { .. }));
    assert_eq!(session.engine().state().moves_used, 2);
}
