//! A raffle session owned by a single tokio task.
//!
//! The task holds the only copy of [`RaffleState`]; callers talk to it through
//! a cloneable [`SessionHandle`]. Commands are applied one at a time, so no
//! lock is held while the shuffle consumes randomness.

use crate::core::session::{reduce, DrawSettings, RaffleAction, RaffleState};
use crate::core::{RandomSource, Result, WinnerList};
use crate::utils::error::RaffleError;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

const COMMAND_BUFFER: usize = 32;

enum Command {
    Apply {
        action: RaffleAction,
        reply: oneshot::Sender<Result<RaffleState>>,
    },
    Snapshot {
        reply: oneshot::Sender<RaffleState>,
    },
}

#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<Command>,
}

/// Spawns the session task on the current tokio runtime.
///
/// The task stops once every [`SessionHandle`] has been dropped.
pub fn spawn_session<R>(
    settings: DrawSettings,
    rng: R,
) -> (SessionHandle, JoinHandle<RaffleState>)
where
    R: RandomSource + Send + 'static,
{
    let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
    let task = tokio::spawn(run_session(receiver, settings, rng));
    (SessionHandle { sender }, task)
}

async fn run_session<R>(
    mut receiver: mpsc::Receiver<Command>,
    settings: DrawSettings,
    mut rng: R,
) -> RaffleState
where
    R: RandomSource,
{
    let mut state = RaffleState::new();

    while let Some(command) = receiver.recv().await {
        match command {
            Command::Apply { action, reply } => {
                let outcome = reduce(&state, action, settings, &mut rng);
                if let Ok(next) = &outcome {
                    state = next.clone();
                }
                // The caller may have given up waiting.
                let _ = reply.send(outcome);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(state.clone());
            }
        }
    }

    tracing::debug!("Session closed with {} participants", state.pool().len());
    state
}

impl SessionHandle {
    pub async fn add_participant(&self, raw_input: impl Into<String>) -> Result<RaffleState> {
        self.apply(RaffleAction::AddParticipant(raw_input.into())).await
    }

    pub async fn draw(&self) -> Result<WinnerList> {
        let state = self.apply(RaffleAction::Draw).await?;
        state.into_winners().ok_or_else(|| RaffleError::SessionError {
            message: "draw finished without winners".to_string(),
        })
    }

    pub async fn reset(&self) -> Result<RaffleState> {
        self.apply(RaffleAction::Reset).await
    }

    pub async fn snapshot(&self) -> Result<RaffleState> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Snapshot { reply }).await?;
        response.await.map_err(closed)
    }

    pub async fn apply(&self, action: RaffleAction) -> Result<RaffleState> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Apply { action, reply }).await?;
        response.await.map_err(closed)?
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.sender.send(command).await.map_err(closed)
    }
}

fn closed<E: std::fmt::Display>(e: E) -> RaffleError {
    RaffleError::SessionError {
        message: e.to_string(),
    }
}
