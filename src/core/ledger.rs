use crate::core::{KeyValueStore, Result, WinnerList, WinnerRecord};
use chrono::{DateTime, Utc};

/// Default storage key of the winner history.
pub const WINNERS_KEY: &str = "examWinners";

/// Winner history kept as a JSON array under a single key.
pub struct WinnerLedger<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WinnerLedger<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, WINNERS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All recorded winners, oldest first. A missing key is an empty history.
    pub fn history(&self) -> Result<Vec<WinnerRecord>> {
        match self.store.get(&self.key)? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(Vec::new()),
        }
    }

    /// Appends one record per winner, in draw order, all stamped with `at`.
    pub fn record_draw(
        &self,
        winners: &WinnerList,
        at: DateTime<Utc>,
    ) -> Result<Vec<WinnerRecord>> {
        let timestamp = at.timestamp_millis();
        let mut history = self.history()?;
        let recorded: Vec<WinnerRecord> = winners
            .iter()
            .map(|winner| WinnerRecord {
                name: winner.participant.as_str().to_string(),
                completed_tasks: 0,
                timestamp,
            })
            .collect();

        history.extend(recorded.iter().cloned());
        self.store.set(&self.key, &serde_json::to_string(&history)?)?;

        tracing::info!(
            "Recorded {} winners under '{}' ({} total)",
            recorded.len(),
            self.key,
            history.len()
        );
        Ok(recorded)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.set(&self.key, "[]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rng::RngSource;
    use crate::adapters::storage::MemoryStore;
    use crate::core::intake::add_participant;
    use crate::core::selector::{select_winners, ShuffleStrategy};
    use crate::core::ParticipantPool;
    use crate::utils::error::RaffleError;
    use chrono::TimeZone;

    fn draw(names: &[&str], k: usize) -> WinnerList {
        let pool = names
            .iter()
            .fold(ParticipantPool::new(), |pool, name| add_participant(pool, name));
        select_winners(&pool, k, ShuffleStrategy::Full, &mut RngSource::seeded(3)).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let ledger = WinnerLedger::new(MemoryStore::new());
        assert!(ledger.history().unwrap().is_empty());
        assert_eq!(ledger.key(), "examWinners");
    }

    #[test]
    fn test_record_draw_appends_in_order() {
        let ledger = WinnerLedger::new(MemoryStore::new());
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let first = draw(&["Ana", "Luis"], 2);
        let second = draw(&["Marta"], 1);
        ledger.record_draw(&first, at).unwrap();
        ledger.record_draw(&second, at).unwrap();

        let history = ledger.history().unwrap();
        let names: Vec<&str> = history.iter().map(|r| r.name.as_str()).collect();
        let mut expected = first.names();
        expected.push("Marta");
        assert_eq!(names, expected);
        assert!(history.iter().all(|r| r.timestamp == at.timestamp_millis()));
    }

    #[test]
    fn test_malformed_history_is_an_error() {
        let store = MemoryStore::new();
        store.set(WINNERS_KEY, "not json").unwrap();
        let ledger = WinnerLedger::new(store);

        assert!(matches!(
            ledger.history().unwrap_err(),
            RaffleError::SerializationError(_)
        ));
    }

    #[test]
    fn test_clear() {
        let ledger = WinnerLedger::with_key(MemoryStore::new(), "raffle");
        ledger.record_draw(&draw(&["Ana"], 1), Utc::now()).unwrap();
        ledger.clear().unwrap();
        assert!(ledger.history().unwrap().is_empty());
    }
}
