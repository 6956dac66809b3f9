use client::{DisplayType, Effect, Notice, Phase, Session};
use common::{
    Board, ClientCommand, Consensus, Difficulty, Game, GameStateUpdate, Mode, Player, PlayerTeam,
    Role, ServerEvent, Team, Tile, TileKind,
};

fn board() -> Board {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| Tile {
            word: format!("W{i}{j}"),
            kind: if (i, j) == (0, 0) {
                TileKind::Death
            } else {
                TileKind::Neutral
            },
            flipped: false,
        })
    })
}

fn game_state(difficulty: Difficulty) -> ServerEvent {
    ServerEvent::GameState(GameStateUpdate {
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
            custom: false,
            nsfw: false,
            words: 400,
        },
        team: PlayerTeam::Red,
        mode: Mode::Casual,
        consensus: Consensus::Single,
        difficulty,
        players: vec![Player {
            nickname: "ada".to_string(),
            team: PlayerTeam::Red,
            role: Role::Guesser,
            guess_proposal: None,
        }],
    })
}

#[test]
fn a_confirmed_join_enters_the_room_and_publishes_the_fragment() {
    let mut session = Session::new();
    let command = session.join_intent("ada", "den", "pw");
    assert!(matches!(command, ClientCommand::JoinRoom { .. }));
    assert_eq!(session.fragment(), None);

    let effect = session.handle_event(ServerEvent::JoinResponse {
        success: true,
        msg: None,
    });

    assert_eq!(effect, Effect::EnterRoom);
    assert_eq!(session.phase(), Phase::InRoom);
    assert_eq!(session.fragment().as_deref(), Some("room=den&password=pw"));
}

#[test]
fn a_rejected_join_surfaces_the_message_and_changes_nothing_else() {
    let mut session = Session::new();
    session.join_intent("ada", "den", "wrong");

    let effect = session.handle_event(ServerEvent::JoinResponse {
        success: false,
        msg: Some("incorrect password".to_string()),
    });

    assert_eq!(effect, Effect::Redraw);
    assert_eq!(session.phase(), Phase::SignedOut);
    assert_eq!(session.error(), Some("incorrect password"));
}

#[test]
fn a_confirmed_leave_wipes_the_session() {
    let mut session = Session::new();
    session.join_intent("ada", "den", "pw");
    session.handle_event(ServerEvent::JoinResponse {
        success: true,
        msg: None,
    });
    session.handle_event(game_state(Difficulty::Normal));
    assert!(session.snapshot().is_some());

    let effect = session.handle_event(ServerEvent::LeaveResponse { success: true });

    assert_eq!(effect, Effect::LeaveRoom);
    assert_eq!(session.phase(), Phase::SignedOut);
    assert!(session.snapshot().is_none());
    assert_eq!(session.fragment(), None);
}

#[test]
fn snapshots_fully_replace_their_predecessor() {
    let mut session = Session::new();
    session.handle_event(game_state(Difficulty::Normal));

    let mut flipped = match game_state(Difficulty::Normal) {
        ServerEvent::GameState(update) => update,
        _ => unreachable!(),
    };
    flipped.game.board[0][0].flipped = true;
    flipped.game.red = 7;
    session.handle_event(ServerEvent::GameState(flipped));

    let snapshot = session.snapshot().unwrap();
    assert!(snapshot.game.board[0][0].flipped);
    assert_eq!(snapshot.game.red, 7);
}

#[test]
fn a_difficulty_change_forces_a_full_reset() {
    let mut session = Session::new();
    assert_eq!(session.handle_event(game_state(Difficulty::Normal)), Effect::Redraw);
    assert_eq!(session.handle_event(game_state(Difficulty::Normal)), Effect::Redraw);
    assert_eq!(session.handle_event(game_state(Difficulty::Hard)), Effect::FullReset);
    assert_eq!(session.prefs().difficulty, Difficulty::Hard);
}

#[test]
fn a_confirmed_role_switch_resets_and_reveals() {
    let mut session = Session::new();
    session.handle_event(game_state(Difficulty::Normal));

    let plan = session.render_plan().unwrap();
    assert_eq!(plan.board[0][0].attrs, vec![]);

    let effect = session.handle_event(ServerEvent::SwitchRoleResponse {
        success: true,
        role: Role::Spymaster,
    });
    assert_eq!(effect, Effect::FullReset);
    assert_eq!(session.prefs().role, Role::Spymaster);

    let plan = session.render_plan().unwrap();
    assert!(matches!(
        plan.board[0][0].attrs.first(),
        Some(client::TileAttr::Color(TileKind::Death))
    ));
}

#[test]
fn a_failed_role_switch_changes_nothing() {
    let mut session = Session::new();
    session.handle_event(game_state(Difficulty::Normal));

    let effect = session.handle_event(ServerEvent::SwitchRoleResponse {
        success: false,
        role: Role::Spymaster,
    });

    assert_eq!(effect, Effect::None);
    assert_eq!(session.prefs().role, Role::Guesser);
}

#[test]
fn repeating_the_confirmed_role_does_not_reset() {
    let mut session = Session::new();
    session.handle_event(game_state(Difficulty::Normal));

    let effect = session.handle_event(ServerEvent::SwitchRoleResponse {
        success: true,
        role: Role::Guesser,
    });

    assert_eq!(effect, Effect::Redraw);
}

#[test]
fn afk_warning_clears_only_through_activity_confirmation() {
    let mut session = Session::new();
    session.handle_event(ServerEvent::AfkWarning);
    assert_eq!(session.notice(), Some(&Notice::AfkWarning));

    // Plain acknowledgment is not enough for a warning.
    session.acknowledge_notice();
    assert_eq!(session.notice(), Some(&Notice::AfkWarning));

    let command = session.confirm_active();
    assert_eq!(command, Some(ClientCommand::Active));
    assert_eq!(session.notice(), None);

    // No warning pending, nothing to confirm.
    assert_eq!(session.confirm_active(), None);
}

#[test]
fn kick_and_server_messages_block_until_acknowledged() {
    let mut session = Session::new();

    session.handle_event(ServerEvent::AfkKicked);
    assert_eq!(session.notice().unwrap().text(), "You were kicked for being AFK");
    session.acknowledge_notice();
    assert_eq!(session.notice(), None);

    session.handle_event(ServerEvent::ServerMessage {
        msg: "maintenance at noon".to_string(),
    });
    assert_eq!(session.notice().unwrap().text(), "maintenance at noon");
    session.acknowledge_notice();
    assert_eq!(session.notice(), None);
}

#[test]
fn stats_and_timer_updates_touch_only_presentation_state() {
    let mut session = Session::new();

    assert_eq!(
        session.handle_event(ServerEvent::ServerStats {
            players: 12,
            rooms: 3,
        }),
        Effect::Redraw
    );
    let stats = session.stats().unwrap();
    assert_eq!((stats.players, stats.rooms), (12, 3));

    assert_eq!(
        session.handle_event(ServerEvent::TimerUpdate { timer: 57.0 }),
        Effect::Redraw
    );
    assert_eq!(session.timer(), Some(57.0));
    assert_eq!(session.phase(), Phase::SignedOut);
}

#[test]
fn a_new_game_confirmation_forces_a_full_reset() {
    let mut session = Session::new();
    assert_eq!(
        session.handle_event(ServerEvent::NewGameResponse { success: true }),
        Effect::FullReset
    );
    assert_eq!(
        session.handle_event(ServerEvent::NewGameResponse { success: false }),
        Effect::None
    );
}

#[test]
fn render_plan_exists_only_once_a_snapshot_arrived() {
    let mut session = Session::new();
    assert!(session.render_plan().is_none());

    session.handle_event(game_state(Difficulty::Normal));
    let plan = session.render_plan().unwrap();

    assert_eq!(plan.info.turn_text, "red's turn");
    assert!(plan.info.end_turn_enabled);
    assert_eq!(plan.roster.red.len(), 1);
    assert!(plan.log.is_empty());
    for row in &plan.board {
        for tile in row {
            assert!(tile.attrs.is_empty());
        }
    }
    // Same state, same plan.
    assert_eq!(session.render_plan().unwrap(), plan);
}

#[test]
fn projection_hides_unflipped_tiles_from_guessers() {
    let mut session = Session::new();
    session.handle_event(game_state(Difficulty::Normal));
    let snapshot = session.snapshot().unwrap();

    let visible = client::project(&snapshot.game.board, Role::Guesser, false);
    for row in &visible {
        for tile in row {
            assert_eq!(tile.display, DisplayType::Unknown);
        }
    }
}
