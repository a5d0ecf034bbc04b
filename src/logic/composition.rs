//! Roster composition rules: size limit and per-role quotas (maxima, not exact counts).

use crate::models::{Composition, CompositionViolation, PlayerRecord, Role, ROSTER_SIZE};

/// Count members per role.
pub fn composition_of<'a>(members: impl IntoIterator<Item = &'a PlayerRecord>) -> Composition {
    let mut composition = Composition::default();
    for player in members {
        composition.add(player.role);
    }
    composition
}

/// Check a candidate member set. Rules are checked in a fixed order (size, batsmen, bowlers,
/// all-rounders, wicket-keepers) and the first one broken is returned.
pub fn validate_composition<'a>(
    members: impl IntoIterator<Item = &'a PlayerRecord>,
) -> Result<Composition, CompositionViolation> {
    let composition = composition_of(members);
    check_composition(&composition)?;
    Ok(composition)
}

/// Same rules as [`validate_composition`], on counts already tallied.
pub fn check_composition(composition: &Composition) -> Result<(), CompositionViolation> {
    if composition.total > ROSTER_SIZE {
        return Err(CompositionViolation::TooManyMembers {
            count: composition.total,
            limit: ROSTER_SIZE,
        });
    }
    for role in Role::ALL {
        let count = composition.count(role);
        let limit = role.quota();
        if count > limit {
            return Err(CompositionViolation::RoleQuota { role, count, limit });
        }
    }
    Ok(())
}

/// Whether one more player of `role` would still satisfy every rule (for UI previews).
pub fn can_add_role(composition: &Composition, role: Role) -> bool {
    let mut next = *composition;
    next.add(role);
    check_composition(&next).is_ok()
}
