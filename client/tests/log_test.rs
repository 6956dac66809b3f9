use client::render_log;
use common::{Clue, ClueCount, LogEntry, Team, TileKind};

#[test]
fn log_renders_newest_first() {
    let log = vec![
        LogEntry::DeclareClue {
            team: Team::Red,
            clue: Clue {
                word: "OCEAN".to_string(),
                count: ClueCount::Limited(2),
            },
        },
        LogEntry::FlipTile {
            team: Team::Red,
            word: "WAVE".to_string(),
            kind: TileKind::Red,
            ended_turn: false,
        },
        LogEntry::EndTurn { team: Team::Red },
    ];

    let lines = render_log(&log);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].text, "red team ended their turn");
    assert_eq!(lines[1].text, "red team flipped WAVE (red)");
    assert_eq!(lines[2].text, "red team was given the clue \"OCEAN\" (2)");
}

#[test]
fn an_end_turn_entry_lands_ahead_of_prior_lines() {
    let log = vec![
        LogEntry::SwitchTurn { team: Team::Blue },
        LogEntry::EndTurn { team: Team::Blue },
    ];

    let lines = render_log(&log);
    assert_eq!(lines[0].text, "blue team ended their turn");
    assert_eq!(lines[1].text, "Switched to blue team's turn");
}

#[test]
fn flip_lines_carry_their_outcome_suffix() {
    let log = vec![
        LogEntry::FlipTile {
            team: Team::Blue,
            word: "CAT".to_string(),
            kind: TileKind::Death,
            ended_turn: false,
        },
        LogEntry::FlipTile {
            team: Team::Blue,
            word: "DOG".to_string(),
            kind: TileKind::Neutral,
            ended_turn: true,
        },
        LogEntry::FlipTile {
            team: Team::Blue,
            word: "OWL".to_string(),
            kind: TileKind::Blue,
            ended_turn: false,
        },
    ];

    let lines = render_log(&log);
    assert_eq!(lines[2].text, "blue team flipped CAT (death) ending the game");
    assert_eq!(lines[1].text, "blue team flipped DOG (neutral) ending their turn");
    assert_eq!(lines[0].text, "blue team flipped OWL (blue)");
}

#[test]
fn unlimited_clues_log_the_infinity_glyph() {
    let log = vec![LogEntry::DeclareClue {
        team: Team::Blue,
        clue: Clue {
            word: "OCEAN".to_string(),
            count: ClueCount::Unlimited,
        },
    }];

    let lines = render_log(&log);
    assert_eq!(lines[0].text, "blue team was given the clue \"OCEAN\" (∞)");
}

#[test]
fn lines_keep_the_entry_tag_and_team_for_styling() {
    let log = vec![LogEntry::SwitchTurn { team: Team::Red }];
    let lines = render_log(&log);
    assert_eq!(lines[0].event, "switchTurn");
    assert_eq!(lines[0].team, Team::Red);
}

#[test]
fn rendering_is_idempotent_for_a_given_log() {
    let log = vec![
        LogEntry::EndTurn { team: Team::Red },
        LogEntry::SwitchTurn { team: Team::Blue },
    ];
    assert_eq!(render_log(&log), render_log(&log));
}
