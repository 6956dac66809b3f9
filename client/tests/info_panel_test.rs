use client::reconcile;
use common::{
    Board, Clue, ClueCount, Consensus, Difficulty, Game, Mode, PlayerTeam, Role, Snapshot, Team,
    Tile, TileKind,
};

fn board() -> Board {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| Tile {
            word: format!("W{i}{j}"),
            kind: TileKind::Neutral,
            flipped: false,
        })
    })
}

fn snapshot() -> Snapshot {
    Snapshot {
        game: Game {
            board: board(),
            turn: Team::Red,
            over: false,
            winner: None,
            red: 8,
            blue: 7,
            clue: None,
            timer_amount: 301,
            log: Vec::new(),
            base: true,
            duet: false,
            undercover: false,
            custom: true,
            nsfw: false,
            words: 400,
        },
        players: Vec::new(),
        mode: Mode::Casual,
        consensus: Consensus::Single,
        difficulty: Difficulty::Normal,
    }
}

#[test]
fn guesser_on_the_active_team_may_end_the_turn() {
    let panel = reconcile(&snapshot(), PlayerTeam::Red, Role::Guesser);

    assert!(panel.end_turn_enabled);
    assert!(!panel.clue_entry_visible);
    assert_eq!(panel.score_red, 8);
    assert_eq!(panel.score_blue, 7);
    assert_eq!(panel.turn_text, "red's turn");
    assert_eq!(panel.turn_color, Team::Red);
    assert_eq!(panel.clue_text, "___");
}

#[test]
fn spymaster_on_the_active_team_gets_the_clue_entry_instead() {
    let panel = reconcile(&snapshot(), PlayerTeam::Red, Role::Spymaster);

    assert!(!panel.end_turn_enabled);
    assert!(panel.clue_entry_visible);
}

#[test]
fn opposing_team_and_spectators_cannot_end_the_turn() {
    assert!(!reconcile(&snapshot(), PlayerTeam::Blue, Role::Guesser).end_turn_enabled);
    assert!(!reconcile(&snapshot(), PlayerTeam::Undecided, Role::Guesser).end_turn_enabled);
}

#[test]
fn unlimited_clues_display_the_infinity_glyph() {
    let mut snapshot = snapshot();
    snapshot.game.clue = Some(Clue {
        word: "OCEAN".to_string(),
        count: ClueCount::Unlimited,
    });

    let panel = reconcile(&snapshot, PlayerTeam::Red, Role::Guesser);
    assert_eq!(panel.clue_text, "OCEAN (∞)");

    // An active clue also hides the entry form for the declaring spymaster.
    let panel = reconcile(&snapshot, PlayerTeam::Red, Role::Spymaster);
    assert!(!panel.clue_entry_visible);
}

#[test]
fn numbered_clues_display_their_count() {
    let mut snapshot = snapshot();
    snapshot.game.clue = Some(Clue {
        word: "RIVER".to_string(),
        count: ClueCount::Limited(3),
    });

    let panel = reconcile(&snapshot, PlayerTeam::Blue, Role::Guesser);
    assert_eq!(panel.clue_text, "RIVER (3)");
}

#[test]
fn a_finished_game_shows_the_winner_and_blanks_the_clue() {
    let mut snapshot = snapshot();
    snapshot.game.over = true;
    snapshot.game.winner = Some(Team::Blue);
    snapshot.game.clue = Some(Clue {
        word: "RIVER".to_string(),
        count: ClueCount::Limited(2),
    });

    let panel = reconcile(&snapshot, PlayerTeam::Red, Role::Guesser);
    assert_eq!(panel.turn_text, "blue wins!");
    assert_eq!(panel.turn_color, Team::Blue);
    assert_eq!(panel.clue_text, "___");
    assert!(!panel.end_turn_enabled);
}

#[test]
fn timer_slider_appears_only_in_timed_mode() {
    let casual = reconcile(&snapshot(), PlayerTeam::Red, Role::Guesser);
    assert!(casual.timer_slider.is_none());

    let mut timed = snapshot();
    timed.mode = Mode::Timed;
    let panel = reconcile(&timed, PlayerTeam::Red, Role::Guesser);
    let slider = panel.timer_slider.expect("slider in timed mode");
    assert_eq!(slider.minutes, 5);
    assert_eq!(slider.label(), "Timer Length : 5min");
}

#[test]
fn pack_panel_mirrors_the_snapshot_flags() {
    let panel = reconcile(&snapshot(), PlayerTeam::Red, Role::Guesser);

    assert!(panel.packs.base);
    assert!(panel.packs.custom);
    assert!(!panel.packs.duet);
    assert!(!panel.packs.undercover);
    assert!(!panel.packs.nsfw);
    assert_eq!(panel.packs.word_pool_text(), "Word Pool: 400");
}
