pub mod actor;
pub mod intake;
pub mod ledger;
pub mod selector;
pub mod session;

pub use crate::domain::model::{Participant, ParticipantPool, Winner, WinnerList, WinnerRecord};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, RandomSource};
pub use crate::utils::error::Result;
