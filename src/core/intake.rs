use crate::core::{Participant, ParticipantPool};

/// Appends the trimmed `raw_input` to `pool`. Blank input leaves the pool as it was.
pub fn add_participant(mut pool: ParticipantPool, raw_input: &str) -> ParticipantPool {
    push_participant(&mut pool, raw_input);
    pool
}

/// In-place form of [`add_participant`]. Returns the stored entry, or `None` for blank input.
pub fn push_participant<'a>(
    pool: &'a mut ParticipantPool,
    raw_input: &str,
) -> Option<&'a Participant> {
    let Some(participant) = Participant::parse(raw_input) else {
        tracing::debug!("Ignoring blank participant input");
        return None;
    };

    tracing::debug!("Adding participant #{}: {}", pool.len() + 1, participant);
    pool.push(participant);
    pool.get(pool.len() - 1)
}
