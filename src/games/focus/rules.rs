//! Focus rules: validation, stacking, overflow and victory.

use smallvec::smallvec;
use tracing::{debug, info, trace};

use crate::core::{
    Action, ActionRecord, Color, Coord, FocusError, GameConfig, GameState, GameStatus,
    MoveRejection, Pieces, PlayerId,
};
use crate::rules::{MoveOutcome, RulesEngine};

const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Pieces removed from the bottom of a stack by one overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Overflow {
    /// Mover's own pieces, returned to their reserve.
    reserved: u32,
    /// Opponent pieces, captured by the mover.
    captured: u32,
}

/// The rules of Focus.
#[derive(Clone, Debug, Default)]
pub struct FocusRules {
    config: GameConfig,
}

impl FocusRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    fn game_over(state: &GameState) -> Option<FocusError> {
        state.winner().map(|winner| FocusError::GameOver {
            winner: state.player(winner).name().to_string(),
        })
    }

    fn validate_move(
        state: &GameState,
        player: PlayerId,
        from: Coord,
        to: Coord,
        count: usize,
    ) -> Result<(), MoveRejection> {
        if state.current_turn != player {
            return Err(MoveRejection::NotYourTurn);
        }

        let (Some(stack), true) = (state.board.get(from), to.in_bounds()) else {
            return Err(MoveRejection::OutOfBounds);
        };

        if stack.top() != Some(state.player(player).color()) {
            return Err(MoveRejection::NotStackOwner);
        }

        if count == 0 || count > stack.height() {
            return Err(MoveRejection::BadPieceCount {
                requested: count,
                available: stack.height(),
            });
        }

        if from.straight_distance(to) != Some(count) {
            return Err(MoveRejection::BadDistance);
        }

        Ok(())
    }

    fn validate_reserve(state: &GameState, player: PlayerId, to: Coord) -> Result<(), FocusError> {
        if state.current_turn != player {
            return Err(MoveRejection::NotYourTurn.into());
        }

        if !to.in_bounds() {
            return Err(FocusError::OutOfBounds(to));
        }

        let record = state.player(player);
        if record.reserve() == 0 {
            return Err(FocusError::EmptyReserve(record.name().to_string()));
        }

        Ok(())
    }

    /// Drop pieces onto a cell and resolve any overflow in the mover's favour.
    ///
    /// The caller has already validated `at`.
    fn land(&self, state: &mut GameState, player: PlayerId, at: Coord, pieces: &[Color]) -> Overflow {
        let mover_color = state.player(player).color();
        let max_height = self.config.max_stack_height;
        let mut overflow = Overflow::default();

        let GameState { board, players, .. } = state;
        let Some(stack) = board.get_mut(at) else {
            return overflow;
        };

        stack.place(pieces);

        while stack.height() > max_height {
            let Some(bottom) = stack.pop_bottom() else {
                break;
            };
            if bottom == mover_color {
                players[player].add_reserve();
                overflow.reserved += 1;
            } else {
                players[player].add_captured();
                overflow.captured += 1;
            }
        }

        if overflow != Overflow::default() {
            trace!(
                %at,
                reserved = overflow.reserved,
                captured = overflow.captured,
                "overflow resolved"
            );
        }

        overflow
    }

    fn pick_up(state: &mut GameState, player: PlayerId, action: &Action) -> Result<Pieces, FocusError> {
        match *action {
            Action::Move { from, count, .. } => state
                .board
                .get_mut(from)
                .map(|stack| stack.take_top(count))
                .ok_or(FocusError::OutOfBounds(from)),
            Action::Reserve { .. } => {
                let record = state.player_mut(player);
                record.remove_reserve();
                Ok(smallvec![record.color()])
            }
        }
    }
}

impl RulesEngine for FocusRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn validate(&self, state: &GameState, player: PlayerId, action: &Action) -> Result<(), FocusError> {
        if let Some(err) = Self::game_over(state) {
            return Err(err);
        }

        match *action {
            Action::Move { from, to, count } => {
                Self::validate_move(state, player, from, to, count).map_err(FocusError::from)
            }
            Action::Reserve { to } => Self::validate_reserve(state, player, to),
        }
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<MoveOutcome, FocusError> {
        if let Err(err) = self.validate(state, player, action) {
            debug!(%player, %action, error = %err, "action rejected");
            return Err(err);
        }

        let pieces = Self::pick_up(state, player, action)?;
        let overflow = self.land(state, player, action.destination(), &pieces);

        let ply = state.ply() + 1;
        state.record_action(ActionRecord {
            player,
            action: *action,
            ply,
            reserved: overflow.reserved,
            captured: overflow.captured,
        });
        trace!(%player, %action, ply, pieces = action.pieces_moved(), "action applied");

        if state.player(player).captured() >= self.config.captures_to_win {
            state.status = GameStatus::Won { winner: player };
            info!(winner = state.player(player).name(), ply, "game won");
            return Ok(MoveOutcome::Won { winner: player });
        }

        state.switch_turn();
        Ok(MoveOutcome::Moved)
    }

    fn candidate_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if state.is_over() || state.current_turn != player {
            return vec![];
        }

        let color = state.player(player).color();
        let mut actions = Vec::new();

        for (from, stack) in state.board.iter() {
            if stack.top() != Some(color) {
                continue;
            }
            for count in 1..=stack.height() {
                for (d_row, d_col) in DIRECTIONS {
                    let step = count as i32;
                    let to = Coord::new(from.row + d_row * step, from.col + d_col * step);
                    if to.in_bounds() {
                        actions.push(Action::Move { from, to, count });
                    }
                }
            }
        }

        if state.player(player).reserve() > 0 {
            actions.extend(Coord::all().map(|to| Action::Reserve { to }));
        }

        actions
    }

    fn is_terminal(&self, state: &GameState) -> Option<PlayerId> {
        state.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, PlayerRecord, Stack};

    const R: Color = Color('R');
    const G: Color = Color('G');

    fn opening() -> GameState {
        GameState::new(PlayerRecord::new("A", R), PlayerRecord::new("B", G))
    }

    fn custom(cells: &[((i32, i32), &[Color])]) -> GameState {
        let mut board = Board::empty();
        for &(at, colors) in cells {
            board.set(at.into(), Stack::from_colors(colors.iter().copied()));
        }
        GameState::with_board(board, PlayerRecord::new("A", R), PlayerRecord::new("B", G))
    }

    #[test]
    fn test_validate_order() {
        let rules = FocusRules::default();
        let state = opening();

        // Wrong player beats every other failure.
        let err = rules
            .validate(&state, PlayerId::SECOND, &Action::move_stack((9, 9), (9, 9), 0))
            .unwrap_err();
        assert_eq!(err, FocusError::InvalidMove(MoveRejection::NotYourTurn));

        let err = rules
            .validate(&state, PlayerId::FIRST, &Action::move_stack((0, 0), (-1, 0), 1))
            .unwrap_err();
        assert_eq!(err, FocusError::InvalidMove(MoveRejection::OutOfBounds));

        // (0, 2) is topped by G.
        let err = rules
            .validate(&state, PlayerId::FIRST, &Action::move_stack((0, 2), (1, 2), 1))
            .unwrap_err();
        assert_eq!(err, FocusError::InvalidMove(MoveRejection::NotStackOwner));

        let err = rules
            .validate(&state, PlayerId::FIRST, &Action::move_stack((0, 0), (2, 0), 2))
            .unwrap_err();
        assert_eq!(
            err,
            FocusError::InvalidMove(MoveRejection::BadPieceCount { requested: 2, available: 1 })
        );

        let err = rules
            .validate(&state, PlayerId::FIRST, &Action::move_stack((0, 0), (1, 1), 1))
            .unwrap_err();
        assert_eq!(err, FocusError::InvalidMove(MoveRejection::BadDistance));

        assert!(rules
            .validate(&state, PlayerId::FIRST, &Action::move_stack((0, 0), (0, 1), 1))
            .is_ok());
    }

    #[test]
    fn test_zero_count_rejected() {
        let rules = FocusRules::default();
        let state = opening();

        let err = rules
            .validate(&state, PlayerId::FIRST, &Action::move_stack((0, 0), (0, 0), 0))
            .unwrap_err();
        assert_eq!(
            err,
            FocusError::InvalidMove(MoveRejection::BadPieceCount { requested: 0, available: 1 })
        );
    }

    #[test]
    fn test_empty_start_is_not_owned() {
        let rules = FocusRules::default();
        let state = custom(&[((3, 3), &[R])]);

        let err = rules
            .validate(&state, PlayerId::FIRST, &Action::move_stack((0, 0), (0, 1), 1))
            .unwrap_err();
        assert_eq!(err, FocusError::InvalidMove(MoveRejection::NotStackOwner));
    }

    #[test]
    fn test_land_resolves_overflow_for_mover() {
        let rules = FocusRules::default();
        let mut state = custom(&[((0, 0), &[G, R, G, R])]);

        let overflow = rules.land(&mut state, PlayerId::FIRST, Coord::new(0, 0), &[R, R, R]);

        assert_eq!(overflow, Overflow { reserved: 1, captured: 1 });
        assert_eq!(state.board.get(Coord::new(0, 0)).unwrap().as_slice(), &[G, R, R, R, R]);
        assert_eq!(state.player(PlayerId::FIRST).reserve(), 1);
        assert_eq!(state.player(PlayerId::FIRST).captured(), 1);
        assert_eq!(state.player(PlayerId::SECOND).captured(), 0);
    }

    #[test]
    fn test_apply_rejected_leaves_state() {
        let rules = FocusRules::default();
        let mut state = opening();
        let before = state.clone();

        let result = rules.apply_action(&mut state, PlayerId::FIRST, &Action::reserve((0, 0)));

        assert_eq!(result, Err(FocusError::EmptyReserve("A".to_string())));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_records_history() {
        let rules = FocusRules::default();
        let mut state = opening();

        let action = Action::move_stack((0, 0), (1, 0), 1);
        assert_eq!(rules.apply_action(&mut state, PlayerId::FIRST, &action), Ok(MoveOutcome::Moved));

        assert_eq!(state.ply(), 1);
        let record = state.history.back().unwrap();
        assert_eq!(record.player, PlayerId::FIRST);
        assert_eq!(record.action, action);
        assert_eq!(record.ply, 1);
        assert_eq!(state.current_turn, PlayerId::SECOND);
    }

    #[test]
    fn test_candidate_actions_opening() {
        let rules = FocusRules::default();
        let state = opening();

        let legal = rules.legal_actions(&state, PlayerId::FIRST);
        let candidates = rules.candidate_actions(&state, PlayerId::FIRST);

        // 18 single pieces; corner cells have 2 exits, edges 3, interior 4.
        assert_eq!(legal.len(), 60);
        assert_eq!(legal.len(), candidates.len());
        assert!(legal.iter().all(|a| matches!(a, Action::Move { count: 1, .. })));
        assert!(legal.contains(&Action::move_stack((0, 0), (1, 0), 1)));
        assert!(!legal.contains(&Action::move_stack((0, 2), (1, 2), 1)));

        assert!(rules.legal_actions(&state, PlayerId::SECOND).is_empty());
    }

    #[test]
    fn test_candidate_actions_include_reserve() {
        let rules = FocusRules::default();
        let mut state = custom(&[]);
        state.player_mut(PlayerId::FIRST).add_reserve();

        let legal = rules.legal_actions(&state, PlayerId::FIRST);
        assert_eq!(legal.len(), 36);
        assert!(legal.iter().all(|a| matches!(a, Action::Reserve { .. })));
    }

    #[test]
    fn test_no_actions_after_win() {
        let rules = FocusRules::default();
        let mut state = opening();
        state.status = GameStatus::Won { winner: PlayerId::FIRST };

        assert!(rules.legal_actions(&state, PlayerId::FIRST).is_empty());
        assert_eq!(rules.is_terminal(&state), Some(PlayerId::FIRST));

        let err = rules
            .validate(&state, PlayerId::FIRST, &Action::move_stack((0, 0), (1, 0), 1))
            .unwrap_err();
        assert_eq!(err, FocusError::GameOver { winner: "A".to_string() });
    }
}
