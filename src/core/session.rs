//! Raffle session as an explicit state machine.
//!
//! Every user event is a [`RaffleAction`]; [`reduce`] maps the current state
//! and one action to the next state without touching the input. A failed
//! transition returns the error and the caller keeps the state it already had.

use crate::core::intake::push_participant;
use crate::core::selector::{select_winners, ShuffleStrategy, DEFAULT_WINNER_COUNT};
use crate::core::{ParticipantPool, RandomSource, Result, WinnerList};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaffleAction {
    AddParticipant(String),
    Draw,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No participants yet.
    Empty,
    /// Participants present, nothing drawn.
    Collecting,
    Drawn,
}

/// Draw policy applied by [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSettings {
    pub winner_count: usize,
    pub strategy: ShuffleStrategy,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            winner_count: DEFAULT_WINNER_COUNT,
            strategy: ShuffleStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaffleState {
    pool: ParticipantPool,
    winners: Option<WinnerList>,
}

impl RaffleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self) -> &ParticipantPool {
        &self.pool
    }

    /// Winners of the latest draw, drawn from the current pool.
    pub fn winners(&self) -> Option<&WinnerList> {
        self.winners.as_ref()
    }

    pub fn into_winners(self) -> Option<WinnerList> {
        self.winners
    }

    pub fn phase(&self) -> Phase {
        match (&self.winners, self.pool.is_empty()) {
            (Some(_), _) => Phase::Drawn,
            (None, true) => Phase::Empty,
            (None, false) => Phase::Collecting,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RaffleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pool.is_empty() {
            return write!(f, "No participants yet");
        }

        writeln!(f, "Participants ({}):", self.pool.len())?;
        for participant in &self.pool {
            writeln!(f, "  - {}", participant)?;
        }

        match &self.winners {
            Some(winners) => write!(f, "Winners:\n{}", winners),
            None => write!(f, "No draw yet"),
        }
    }
}

/// Applies `action` to `state` and returns the resulting state.
///
/// Adding a participant discards winners from an earlier draw, since they no
/// longer describe the current pool. Blank names leave the state unchanged.
pub fn reduce<R>(
    state: &RaffleState,
    action: RaffleAction,
    settings: DrawSettings,
    rng: &mut R,
) -> Result<RaffleState>
where
    R: RandomSource + ?Sized,
{
    match action {
        RaffleAction::AddParticipant(raw) => {
            let mut pool = state.pool.clone();
            if push_participant(&mut pool, &raw).is_none() {
                return Ok(state.clone());
            }
            Ok(RaffleState {
                pool,
                winners: None,
            })
        }
        RaffleAction::Draw => {
            let winners =
                select_winners(&state.pool, settings.winner_count, settings.strategy, rng)?;
            Ok(RaffleState {
                pool: state.pool.clone(),
                winners: Some(winners),
            })
        }
        RaffleAction::Reset => Ok(RaffleState::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rng::RngSource;
    use crate::utils::error::RaffleError;

    fn apply_all(actions: Vec<RaffleAction>) -> RaffleState {
        let mut rng = RngSource::seeded(7);
        actions.into_iter().fold(RaffleState::new(), |state, action| {
            reduce(&state, action, DrawSettings::default(), &mut rng).unwrap()
        })
    }

    fn add(name: &str) -> RaffleAction {
        RaffleAction::AddParticipant(name.to_string())
    }

    #[test]
    fn test_phases() {
        let state = RaffleState::new();
        assert_eq!(state.phase(), Phase::Empty);
        assert_eq!(state.render(), "No participants yet");

        let state = apply_all(vec![add("Ana")]);
        assert_eq!(state.phase(), Phase::Collecting);
        assert!(state.render().ends_with("No draw yet"));

        let state = apply_all(vec![
            add("Ana"),
            add("Luis"),
            add("Marta"),
            add("Jon"),
            add("Eli"),
            RaffleAction::Draw,
        ]);
        assert_eq!(state.phase(), Phase::Drawn);
        assert!(state.render().contains("Winners:\n1. "));
        assert!(state.render().contains("\n5. "));
    }

    #[test]
    fn test_failed_draw_leaves_state_untouched() {
        let state = apply_all(vec![add("Ana"), add("Luis"), add("Marta"), add("Jon")]);
        let before = state.clone();
        let mut rng = RngSource::seeded(1);

        let err = reduce(&state, RaffleAction::Draw, DrawSettings::default(), &mut rng)
            .unwrap_err();

        assert!(matches!(err, RaffleError::InsufficientParticipants { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_adding_after_draw_clears_winners() {
        let state = apply_all(vec![
            add("Ana"),
            add("Luis"),
            add("Marta"),
            add("Jon"),
            add("Eli"),
            RaffleAction::Draw,
            add("Sol"),
        ]);
        assert_eq!(state.phase(), Phase::Collecting);
        assert_eq!(state.pool().len(), 6);
    }

    #[test]
    fn test_blank_input_keeps_winners() {
        let state = apply_all(vec![
            add("Ana"),
            add("Luis"),
            add("Marta"),
            add("Jon"),
            add("Eli"),
            RaffleAction::Draw,
            add("   "),
        ]);
        assert_eq!(state.phase(), Phase::Drawn);
    }

    #[test]
    fn test_reset() {
        let state = apply_all(vec![add("Ana"), RaffleAction::Reset]);
        assert_eq!(state, RaffleState::new());
    }
}
