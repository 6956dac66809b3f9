use common::{Consensus, Difficulty, Mode, PlayerTeam, Role, Snapshot, Team};

/// Derived info-panel state: scores, turn message, clue display, and which
/// affordances the viewer currently has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub score_red: u8,
    pub score_blue: u8,
    pub turn_text: String,
    pub turn_color: Team,
    pub end_turn_enabled: bool,
    pub clue_entry_visible: bool,
    pub clue_text: String,
    pub timer_slider: Option<TimerSlider>,
    pub packs: PackPanel,
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub consensus: Consensus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSlider {
    pub minutes: u32,
}

impl TimerSlider {
    pub fn label(&self) -> String {
        format!("Timer Length : {}min", self.minutes)
    }
}

/// Pack toggle highlighting mirrors the snapshot flags directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackPanel {
    pub base: bool,
    pub duet: bool,
    pub undercover: bool,
    pub custom: bool,
    pub nsfw: bool,
    pub word_pool: u32,
}

impl PackPanel {
    pub fn word_pool_text(&self) -> String {
        format!("Word Pool: {}", self.word_pool)
    }
}

/// Whether the toggle button for `option` is pressable. The currently active
/// value is the disabled one, so exactly one button per pair is enabled.
pub fn toggle_enabled<T: PartialEq>(active: &T, option: &T) -> bool {
    active != option
}

pub fn reconcile(snapshot: &Snapshot, viewer_team: PlayerTeam, viewer_role: Role) -> InfoPanel {
    let game = &snapshot.game;

    let (turn_text, turn_color) = match (game.over, game.winner) {
        (true, Some(winner)) => (format!("{winner} wins!"), winner),
        _ => (format!("{}'s turn", game.turn), game.turn),
    };

    let end_turn_enabled =
        !game.over && viewer_team == game.turn && viewer_role != Role::Spymaster;

    let clue_entry_visible =
        viewer_role == Role::Spymaster && game.clue.is_none() && viewer_team == game.turn;

    let clue_text = match &game.clue {
        Some(clue) if !game.over => format!("{} ({})", clue.word, clue.count),
        _ => "___".to_string(),
    };

    let timer_slider = (snapshot.mode == Mode::Timed).then(|| TimerSlider {
        minutes: game.timer_amount.saturating_sub(1) / 60,
    });

    InfoPanel {
        score_red: game.red,
        score_blue: game.blue,
        turn_text,
        turn_color,
        end_turn_enabled,
        clue_entry_visible,
        clue_text,
        timer_slider,
        packs: PackPanel {
            base: game.base,
            duet: game.duet,
            undercover: game.undercover,
            custom: game.custom,
            nsfw: game.nsfw,
            word_pool: game.words,
        },
        mode: snapshot.mode,
        difficulty: snapshot.difficulty,
        consensus: snapshot.consensus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_pairs_disable_exactly_the_active_value() {
        assert!(!toggle_enabled(&Mode::Casual, &Mode::Casual));
        assert!(toggle_enabled(&Mode::Casual, &Mode::Timed));
        assert!(!toggle_enabled(&Difficulty::Hard, &Difficulty::Hard));
        assert!(toggle_enabled(&Difficulty::Hard, &Difficulty::Normal));
    }

    #[test]
    fn timer_slider_converts_seconds_to_minutes() {
        let slider = TimerSlider { minutes: (301u32.saturating_sub(1)) / 60 };
        assert_eq!(slider.minutes, 5);
        assert_eq!(slider.label(), "Timer Length : 5min");
    }
}
