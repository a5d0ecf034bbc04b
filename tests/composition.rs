//! Integration tests for roster composition rules.

use fantasy_cricket_web::logic::{can_add_role, composition_of};
use fantasy_cricket_web::{validate_composition, CompositionViolation, PlayerRecord, PlayerStats, Role};

fn players(role: Role, n: usize) -> Vec<PlayerRecord> {
    (0..n)
        .map(|i| PlayerRecord::new(format!("{role} {i}"), "Test University", role, PlayerStats::default()))
        .collect()
}

fn squad(batsmen: usize, bowlers: usize, all_rounders: usize, keepers: usize) -> Vec<PlayerRecord> {
    let mut all = players(Role::Batsman, batsmen);
    all.extend(players(Role::Bowler, bowlers));
    all.extend(players(Role::AllRounder, all_rounders));
    all.extend(players(Role::WicketKeeper, keepers));
    all
}

#[test]
fn full_legal_squad_is_valid() {
    let team = squad(5, 4, 1, 1);
    let composition = validate_composition(&team).unwrap();
    assert_eq!(composition.total, 11);
    assert_eq!(composition.batsmen, 5);
    assert_eq!(composition.wicket_keepers, 1);
}

#[test]
fn quotas_are_maxima_not_exact_counts() {
    assert!(validate_composition(&squad(3, 2, 0, 0)).is_ok());
    assert!(validate_composition(&squad(4, 4, 2, 1)).is_ok());
    assert!(validate_composition(&Vec::<PlayerRecord>::new()).is_ok());
}

#[test]
fn sixth_batsman_is_rejected() {
    let err = validate_composition(&squad(6, 0, 0, 0)).unwrap_err();
    assert_eq!(
        err,
        CompositionViolation::RoleQuota {
            role: Role::Batsman,
            count: 6,
            limit: 5
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("6th Batsman"), "{msg}");
    assert!(msg.contains("limit 5"), "{msg}");
}

#[test]
fn size_is_checked_before_roles() {
    // 12 members and 6 batsmen: size rule wins.
    let err = validate_composition(&squad(6, 4, 1, 1)).unwrap_err();
    assert_eq!(err, CompositionViolation::TooManyMembers { count: 12, limit: 11 });
}

#[test]
fn roles_are_checked_in_fixed_order() {
    let err = validate_composition(&squad(0, 5, 0, 2)).unwrap_err();
    assert!(matches!(err, CompositionViolation::RoleQuota { role: Role::Bowler, count: 5, limit: 4 }));

    let err = validate_composition(&squad(0, 0, 3, 2)).unwrap_err();
    assert!(matches!(err, CompositionViolation::RoleQuota { role: Role::AllRounder, .. }));

    let err = validate_composition(&squad(1, 1, 1, 2)).unwrap_err();
    assert!(matches!(err, CompositionViolation::RoleQuota { role: Role::WicketKeeper, count: 2, limit: 1 }));
}

#[test]
fn preview_reports_open_slots() {
    let team = squad(5, 2, 0, 1);
    let composition = composition_of(&team);
    assert_eq!(composition.remaining(Role::Batsman), 0);
    assert_eq!(composition.remaining(Role::Bowler), 2);
    assert_eq!(composition.remaining(Role::AllRounder), 2);
    assert!(!can_add_role(&composition, Role::Batsman));
    assert!(!can_add_role(&composition, Role::WicketKeeper));
    assert!(can_add_role(&composition, Role::AllRounder));
}
