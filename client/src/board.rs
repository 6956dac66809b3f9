use std::collections::HashSet;

use common::{BOARD_SIZE, Difficulty, Player, Role, TileKind};

use crate::visibility::{DisplayType, VisibleBoard};

/// One display attribute on a rendered tile. Within a descriptor the order is
/// fixed: color, then flipped, proposed, revealed, hard. Each appears at most
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAttr {
    Color(TileKind),
    Flipped,
    Proposed,
    Revealed,
    Hard,
}

/// Everything the front-end needs to draw one tile. Descriptors carry no UI
/// state of their own; drawing the same descriptor twice draws the same tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDescriptor<'a> {
    pub word: &'a str,
    pub attrs: Vec<TileAttr>,
}

pub type BoardPlan<'a> = [[TileDescriptor<'a>; BOARD_SIZE]; BOARD_SIZE];

/// The set of words currently proposed for flipping, derived fresh from the
/// roster on every render rather than maintained incrementally.
pub fn proposals(players: &[Player]) -> HashSet<&str> {
    players
        .iter()
        .filter_map(|p| p.guess_proposal.as_deref())
        .collect()
}

/// Builds the full board plan from the projected view. Always total: there is
/// no diffing against a previous plan, so a re-render after any
/// visibility-affecting change (role switch, difficulty switch, new game) is
/// correct by construction.
pub fn render<'a>(
    board: &VisibleBoard<'a>,
    proposals: &HashSet<&str>,
    difficulty: Difficulty,
    viewer_role: Role,
    game_over: bool,
) -> BoardPlan<'a> {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            let tile = board[i][j];
            let mut attrs = Vec::with_capacity(4);
            if let DisplayType::Known(kind) = tile.display {
                attrs.push(TileAttr::Color(kind));
            }
            if tile.flipped {
                attrs.push(TileAttr::Flipped);
            }
            if proposals.contains(tile.word) {
                attrs.push(TileAttr::Proposed);
            }
            if viewer_role == Role::Spymaster || game_over {
                attrs.push(TileAttr::Revealed);
            }
            if difficulty == Difficulty::Hard {
                attrs.push(TileAttr::Hard);
            }
            TileDescriptor {
                word: tile.word,
                attrs,
            }
        })
    })
}
