use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A participant name, always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Participant(String);

impl Participant {
    /// Trims `raw`; blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Participant {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| "participant name cannot be blank".to_string())
    }
}

impl From<Participant> for String {
    fn from(participant: Participant) -> Self {
        participant.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Participants in insertion order. Duplicate names are separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantPool {
    entries: Vec<Participant>,
}

impl ParticipantPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, participant: Participant) {
        self.entries.push(participant);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(Participant::as_str).collect()
    }
}

impl Index<usize> for ParticipantPool {
    type Output = Participant;

    fn index(&self, index: usize) -> &Participant {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a ParticipantPool {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A drawn participant together with its position in the pool at draw time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub pool_index: usize,
    pub participant: Participant,
}

/// Winners in the order the shuffle produced them. The order is not a ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerList {
    winners: Vec<Winner>,
}

impl WinnerList {
    pub(crate) fn new(winners: Vec<Winner>) -> Self {
        Self { winners }
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Winner> {
        self.winners.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.winners
            .iter()
            .map(|winner| winner.participant.as_str())
            .collect()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.winners.iter().map(|winner| winner.pool_index).collect()
    }
}

impl fmt::Display for WinnerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, winner) in self.winners.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", position + 1, winner.participant)?;
        }
        Ok(())
    }
}

/// One entry of the persisted winner history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerRecord {
    pub name: String,
    /// Tasks the winner had completed when drawn; zero when not tracked.
    #[serde(default)]
    pub completed_tasks: u32,
    /// Unix time in milliseconds.
    pub timestamp: i64,
}
