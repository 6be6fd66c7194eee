#![allow(dead_code)]

use raffle_picker::{add_participant, ParticipantPool, RandomSource};

/// Replays scripted indices and records the bounds it was asked for.
pub struct ScriptedSource {
    values: Vec<usize>,
    pub bounds: Vec<usize>,
}

impl ScriptedSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            bounds: Vec::new(),
        }
    }

    pub fn draws(&self) -> usize {
        self.bounds.len()
    }
}

impl RandomSource for ScriptedSource {
    fn index_below(&mut self, bound: usize) -> usize {
        let value = self.values.get(self.bounds.len()).copied().unwrap_or(0);
        assert!(value < bound, "scripted index {} not below {}", value, bound);
        self.bounds.push(bound);
        value
    }
}

pub fn pool_of(names: &[&str]) -> ParticipantPool {
    names
        .iter()
        .fold(ParticipantPool::new(), |pool, name| add_participant(pool, name))
}

pub fn numbered_pool(size: usize) -> ParticipantPool {
    (0..size).fold(ParticipantPool::new(), |pool, i| {
        add_participant(pool, &format!("Participant {}", i))
    })
}
