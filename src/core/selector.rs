//! Random winner selection.
//!
//! Both strategies shuffle a working copy of the pool's indices with
//! Fisher–Yates and take the first `k` of them, so every ordered selection of
//! `k` distinct pool positions is equally likely under a uniform source. The
//! pool itself is only borrowed and is never reordered.

use crate::core::{ParticipantPool, RandomSource, Result, Winner, WinnerList};
use crate::utils::error::RaffleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of winners drawn per raffle unless configured otherwise.
pub const DEFAULT_WINNER_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleStrategy {
    /// Shuffle the whole pool, consuming `N - 1` draws.
    #[default]
    Full,
    /// Shuffle only the first `k` positions, consuming `min(k, N - 1)` draws.
    Partial,
}

impl fmt::Display for ShuffleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuffleStrategy::Full => f.write_str("full"),
            ShuffleStrategy::Partial => f.write_str("partial"),
        }
    }
}

impl FromStr for ShuffleStrategy {
    type Err = RaffleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(ShuffleStrategy::Full),
            "partial" => Ok(ShuffleStrategy::Partial),
            other => Err(RaffleError::InvalidConfigValueError {
                field: "raffle.strategy".to_string(),
                value: other.to_string(),
                reason: "Valid strategies: full, partial".to_string(),
            }),
        }
    }
}

/// Draws `k` distinct pool entries in shuffled order.
///
/// Fails with [`RaffleError::InsufficientParticipants`] when the pool holds
/// fewer than `k` entries, and with [`RaffleError::InvalidWinnerCount`] when
/// `k` is zero. Both checks run before any randomness is consumed.
pub fn select_winners<R>(
    pool: &ParticipantPool,
    k: usize,
    strategy: ShuffleStrategy,
    rng: &mut R,
) -> Result<WinnerList>
where
    R: RandomSource + ?Sized,
{
    if k == 0 {
        return Err(RaffleError::InvalidWinnerCount);
    }

    if pool.len() < k {
        tracing::warn!(
            "Draw rejected: {} participants, {} winners required",
            pool.len(),
            k
        );
        return Err(RaffleError::InsufficientParticipants {
            required: k,
            available: pool.len(),
        });
    }

    let mut order: Vec<usize> = (0..pool.len()).collect();
    match strategy {
        ShuffleStrategy::Full => shuffle(&mut order, rng),
        ShuffleStrategy::Partial => partial_shuffle(&mut order, k, rng),
    }

    let winners = order
        .into_iter()
        .take(k)
        .map(|pool_index| Winner {
            pool_index,
            participant: pool[pool_index].clone(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        "Drew {} of {} participants ({} shuffle)",
        winners.len(),
        pool.len(),
        strategy
    );

    Ok(WinnerList::new(winners))
}

/// Fisher–Yates: for `i` from `len - 1` down to 1, swap `i` with a uniform `j` in `[0, i]`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.index_below(i + 1);
        items.swap(i, j);
    }
}

/// Fisher–Yates restricted to the first `k` positions: for each `i < k`,
/// swap `i` with a uniform `j` in `[i, len)`. The last position is never drawn for.
pub fn partial_shuffle<T, R>(items: &mut [T], k: usize, rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    let len = items.len();
    let rounds = k.min(len.saturating_sub(1));
    for i in 0..rounds {
        let j = i + rng.index_below(len - i);
        items.swap(i, j);
    }
}
