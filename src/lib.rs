pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    rng::RngSource,
    storage::{FileStore, MemoryStore},
};
pub use config::toml_config::RaffleConfig;
pub use crate::core::{
    actor::{spawn_session, SessionHandle},
    intake::add_participant,
    ledger::{WinnerLedger, WINNERS_KEY},
    selector::{select_winners, ShuffleStrategy, DEFAULT_WINNER_COUNT},
    session::{reduce, DrawSettings, Phase, RaffleAction, RaffleState},
};
pub use domain::model::{Participant, ParticipantPool, Winner, WinnerList, WinnerRecord};
pub use domain::ports::{ConfigProvider, KeyValueStore, RandomSource};
pub use utils::error::{RaffleError, Result};
