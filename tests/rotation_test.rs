use doubling_rota::{
    rotation::{ErrorKind, RotationError, Strategy, round_boundary, rounds, turns},
    who_is_next, who_is_next_with,
};

use crate::common::{ABC, layout_owner, participant_names};

mod common;

#[test]
fn test_worked_example() {
    let expected = [
        "A", "B", "C", // round 0
        "A", "A", "B", "B", "C", "C", // round 1
        "A", "A", "A", "A", "B", "B", "B", "B", "C", "C", "C", "C", // round 2
    ];
    for strategy in Strategy::ALL {
        for (idx, &name) in expected.iter().enumerate() {
            let n = i64::try_from(idx + 1).unwrap();
            assert_eq!(
                who_is_next_with(strategy, n, &ABC),
                Ok(&name),
                "{} at {n}",
                strategy.name()
            );
        }
    }
}

#[test]
fn test_worked_example_lookups() {
    assert_eq!(who_is_next(1, &ABC), Ok(&"A"));
    assert_eq!(who_is_next(5, &ABC), Ok(&"A"));
    assert_eq!(who_is_next(7, &ABC), Ok(&"B"));
    assert_eq!(who_is_next(20, &ABC), Ok(&"C"));
}

#[test]
fn test_first_round_is_direct_index() {
    for len in 1..=20 {
        let names = participant_names(len);
        for n in 1..=len {
            let pos = i64::try_from(n).unwrap();
            for strategy in Strategy::ALL {
                assert_eq!(who_is_next_with(strategy, pos, &names), Ok(&names[n - 1]));
            }
        }
    }
}

#[test]
fn test_single_participant_gets_everything() {
    let names = ["only"];
    for n in (1..2000).chain([1 << 40, i64::MAX]) {
        for strategy in Strategy::ALL {
            assert_eq!(who_is_next_with(strategy, n, &names), Ok(&"only"));
        }
    }
}

#[test]
fn test_round_boundaries() {
    for len in 1..=9 {
        for round in 0..20 {
            let boundary = round_boundary(round, len).unwrap();
            for strategy in Strategy::ALL {
                assert_eq!(strategy.owner_index(boundary, len), Ok(len - 1));
                assert_eq!(strategy.owner_index(boundary + 1, len), Ok(0));
            }
        }
    }
}

#[test]
fn test_round_boundary_values() {
    assert_eq!(round_boundary(0, 3), Some(3));
    assert_eq!(round_boundary(1, 3), Some(9));
    assert_eq!(round_boundary(2, 3), Some(21));
    assert_eq!(round_boundary(63, 1), Some(u64::MAX));
    assert_eq!(round_boundary(63, 2), None);
    assert_eq!(round_boundary(64, 1), None);
    assert_eq!(round_boundary(0, 0), None);
}

#[test]
fn test_strategies_match_layout() {
    for len in 1..=6 {
        for position in 1..=500 {
            let owner = layout_owner(position, len);
            assert_eq!(rounds::owner_index(position, len), Ok(owner));
            assert_eq!(turns::owner_index(position, len), Ok(owner));
        }
    }
}

#[test]
fn test_invalid_position() {
    for n in [0, -1, i64::MIN] {
        let err = who_is_next(n, &ABC).unwrap_err();
        assert_eq!(err, RotationError::InvalidPosition(n));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
    for strategy in Strategy::ALL {
        assert_eq!(
            strategy.owner_index(0, 3),
            Err(RotationError::InvalidPosition(0))
        );
    }
}

#[test]
fn test_no_participants() {
    let empty: [&str; 0] = [];
    for strategy in Strategy::ALL {
        let err = who_is_next_with(strategy, 4, &empty).unwrap_err();
        assert_eq!(err, RotationError::NoParticipants);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_top_of_range() {
    // Round 62 splits into batches of 2^62; the last position lands in B's
    for strategy in Strategy::ALL {
        assert_eq!(strategy.owner_index(u64::MAX, 3), Ok(1));
        assert_eq!(strategy.owner_index(u64::MAX, 1), Ok(0));
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_rounds_resolves_round_longer_than_u64() {
    // The last round's total length exceeds u64, its batches do not
    let cases = [
        ((1usize << 63) + 1, ((1usize << 63) - 3) / 2),
        (1usize << 32, 0),
        (1usize << 33, 3),
    ];
    for (participants, owner) in cases {
        assert_eq!(rounds::owner_index(u64::MAX, participants), Ok(owner));
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_turns_with_huge_participant_count() {
    let participants = 1usize << 40;
    assert_eq!(Strategy::Turns.owner_index(1, participants), Ok(0));
    assert_eq!(Strategy::Turns.owner_index(5, participants), Ok(4));

    let unit_names = vec![(); participants];
    assert_eq!(who_is_next(3, &unit_names), Ok(&()));
}

#[test]
fn test_overflow_kind() {
    let err = RotationError::Overflow {
        position: u64::MAX,
        participants: 2,
    };
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
fn test_canonical_strategy() {
    assert_eq!(Strategy::CANONICAL, Strategy::Turns);
    assert_eq!(Strategy::ALL, [Strategy::Rounds, Strategy::Turns]);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RotationError::InvalidPosition(0).to_string(),
        "position must be at least 1, got 0"
    );
    assert_eq!(
        RotationError::NoParticipants.to_string(),
        "at least one participant is required"
    );
}
