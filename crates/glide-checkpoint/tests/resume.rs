//! Interrupting a search through a checkpoint file must not change its
//! result.

use std::fs;

use glide_board::{parse_layout, EdgeBehavior, Preset};
use glide_checkpoint::{
    CheckpointConfig, CheckpointError, CheckpointStore, Checkpointer, KeepAll, Retention,
};
use glide_search::{Search, SearchConfig, SearchOutcome, SearchStatus};
use glide_test_utils::{unique_temp_dir, RandomBoard};

#[test]
fn resumed_random_boards_match_uninterrupted_runs() {
    let dir = unique_temp_dir("resume_random");
    let params = RandomBoard::small_torus(3);
    for seed in 0..20 {
        let p = params.generate(seed);

        let mut whole = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        let expected = whole.run(&mut ());
        let expected_state = whole.into_state();

        let mut first = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        for _ in 0..expected.rounds() / 2 {
            assert_eq!(first.step(&mut ()), SearchStatus::Running, "seed {seed}");
        }
        let mut store = CheckpointStore::new(dir.clone(), Box::new(KeepAll));
        let path = store.save(&p.board, &p.catalog, first.state()).unwrap();
        drop(first);

        let loaded = CheckpointStore::load(&path, &p.board, &p.catalog).unwrap();
        let mut second =
            Search::resume(&p.board, &p.catalog, SearchConfig::default(), loaded).unwrap();
        assert_eq!(second.run(&mut ()), expected, "seed {seed}");
        assert_eq!(second.into_state(), expected_state, "seed {seed}");
        fs::remove_file(&path).unwrap();
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn christmas_checkpoint_continues_identically() {
    let dir = unique_temp_dir("resume_christmas");
    let p = Preset::Christmas.load().unwrap();
    let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
    for _ in 0..3_000 {
        search.step(&mut ());
    }
    let mut store = CheckpointStore::new(dir.clone(), Box::new(KeepAll));
    let path = store.save(&p.board, &p.catalog, search.state()).unwrap();

    let loaded = CheckpointStore::load(&path, &p.board, &p.catalog).unwrap();
    assert_eq!(&loaded, search.state());
    let mut resumed =
        Search::resume(&p.board, &p.catalog, SearchConfig::default(), loaded).unwrap();
    for _ in 0..1_000 {
        assert_eq!(search.step(&mut ()), resumed.step(&mut ()));
    }
    assert_eq!(search.state(), resumed.state());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn checkpointer_keeps_only_the_latest_file() {
    let dir = unique_temp_dir("resume_keep_latest");
    // Reaches the target twice.
    let p = parse_layout(&["#####", "#P X#", "#$  #", "#####"], &[], EdgeBehavior::Absorb)
        .unwrap();
    let config = CheckpointConfig {
        directory: dir.clone(),
        every: 1,
        retention: Retention::KeepLatest(1),
        enabled: true,
    };
    let mut checkpointer = Checkpointer::new(&config).unwrap();
    let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
    search.run(&mut checkpointer);

    assert_eq!(checkpointer.saves(), 2);
    let files: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files, ["state_2_4_5_0_1.lz4.bin"]);
    assert_eq!(checkpointer.store().history().len(), 1);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn resuming_from_the_solving_checkpoint_stays_solved() {
    let dir = unique_temp_dir("resume_solving_checkpoint");
    let p = parse_layout(
        &["#######", "#P X  #", "#$    #", "#     #", "#######"],
        &[],
        EdgeBehavior::Absorb,
    )
    .unwrap();
    let config = CheckpointConfig {
        directory: dir.clone(),
        retention: Retention::KeepLatest(1),
        ..CheckpointConfig::default()
    };
    let mut checkpointer = Checkpointer::new(&config).unwrap();
    let mut whole = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
    let expected = whole.run(&mut checkpointer);
    assert!(matches!(expected, SearchOutcome::Solved { .. }));

    let last = checkpointer.store().history().last().unwrap().clone();
    let loaded = CheckpointStore::load(&last, &p.board, &p.catalog).unwrap();
    let mut resumed =
        Search::resume(&p.board, &p.catalog, SearchConfig::default(), loaded).unwrap();
    assert_eq!(resumed.run(&mut ()), expected);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupted_file_is_rejected() {
    let dir = unique_temp_dir("resume_corrupt");
    let p = Preset::Christmas.load().unwrap();
    let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
    for _ in 0..500 {
        search.step(&mut ());
    }
    let mut store = CheckpointStore::new(dir.clone(), Box::new(KeepAll));
    let path = store.save(&p.board, &p.catalog, search.state()).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0x5a;
    fs::write(&path, &bytes).unwrap();

    let err = CheckpointStore::load(&path, &p.board, &p.catalog).unwrap_err();
    assert!(!err.is_missing(), "{err}");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn checkpoint_for_another_board_is_rejected() {
    let dir = unique_temp_dir("resume_other_board");
    let classic = Preset::Classic.load().unwrap();
    let christmas = Preset::Christmas.load().unwrap();
    let mut store = CheckpointStore::new(dir.clone(), Box::new(KeepAll));
    let state = Search::new(&classic.board, &classic.catalog, SearchConfig::default())
        .unwrap()
        .into_state();
    let path = store.save(&classic.board, &classic.catalog, &state).unwrap();

    let err = CheckpointStore::load(&path, &christmas.board, &christmas.catalog).unwrap_err();
    assert!(matches!(err, CheckpointError::BoardMismatch { .. }), "{err}");
    let _ = fs::remove_dir_all(&dir);
}
