use doubling_rota::sequence::Allocation;

/// Participants of the worked example
#[allow(dead_code)]
pub const ABC: [&str; 3] = ["A", "B", "C"];

/// Names `P0`, `P1`, ... for `num_participants` participants
#[allow(dead_code)]
pub fn participant_names(num_participants: usize) -> Vec<String> {
    (0..num_participants).map(|i| format!("P{i}")).collect()
}

/// Owner of `position` by walking the sequence layout
#[allow(dead_code)]
pub fn layout_owner(position: u64, num_participants: usize) -> usize {
    Allocation::new(num_participants)
        .find(|slot| slot.position == position)
        .map(|slot| slot.participant)
        .unwrap()
}
