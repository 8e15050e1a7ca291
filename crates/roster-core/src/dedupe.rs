//! Duplicate-identity checking against the loaded roster.
//!
//! Advisory-before-write only: the scan runs over a roster snapshot and a
//! concurrent writer can still slip a duplicate in between the check and
//! the write. Nothing here is a storage-level uniqueness constraint.

use roster_model::CollisionField;

use crate::loader::Roster;

/// Which keys participate in the collision scan.
///
/// `Both` is the default; `IdentifierOnly` is an explicit deployment
/// opt-out for hospitals where distinct patients legitimately share names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UniquenessPolicy {
    #[default]
    Both,
    IdentifierOnly,
}

/// Scan the roster for an identity collision.
///
/// Names compare case-insensitively after trimming; identifiers compare
/// trimmed-exact. `exclude` skips one filtered index so an edit-in-place
/// does not collide with the record's own row.
pub fn check(
    candidate_name: &str,
    candidate_id: &str,
    roster: &Roster,
    exclude: Option<usize>,
    policy: UniquenessPolicy,
) -> Option<CollisionField> {
    let wanted_name = candidate_name.trim();
    let wanted_id = candidate_id.trim();
    let mut name_hit = false;
    let mut id_hit = false;
    for index in 0..roster.len() {
        if exclude == Some(index) {
            continue;
        }
        if let Some(name) = roster.name_at(index) {
            if name.eq_ignore_ascii_case(wanted_name) {
                name_hit = true;
            }
        }
        if let Some(id) = roster.identifier_at(index) {
            if !id.is_empty() && id == wanted_id {
                id_hit = true;
            }
        }
    }
    if policy == UniquenessPolicy::IdentifierOnly {
        name_hit = false;
    }
    match (name_hit, id_hit) {
        (true, true) => Some(CollisionField::Both),
        (true, false) => Some(CollisionField::Name),
        (false, true) => Some(CollisionField::Identifier),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;
    use roster_store::MemoryStore;

    fn roster() -> Roster {
        let store = MemoryStore::with_rows(vec![
            vec!["Name".to_string(), "IC Number".to_string()],
            vec!["AHMAD BIN ALI".to_string(), "900101-01-1234".to_string()],
            vec!["SITI AMINAH".to_string(), "880505-05-5678".to_string()],
        ]);
        load(&store).expect("load")
    }

    #[test]
    fn name_matches_case_insensitively() {
        let hit = check("ahmad bin ali", "999999", &roster(), None, UniquenessPolicy::Both);
        assert_eq!(hit, Some(CollisionField::Name));
    }

    #[test]
    fn identifier_matches_after_trimming() {
        let hit = check("NEW PATIENT", "  880505-05-5678 ", &roster(), None, UniquenessPolicy::Both);
        assert_eq!(hit, Some(CollisionField::Identifier));
    }

    #[test]
    fn both_fields_colliding_is_reported_once() {
        let hit = check("Siti Aminah", "880505-05-5678", &roster(), None, UniquenessPolicy::Both);
        assert_eq!(hit, Some(CollisionField::Both));
    }

    #[test]
    fn disjoint_candidate_passes() {
        let hit = check("LIM WEI", "700707-07-7777", &roster(), None, UniquenessPolicy::Both);
        assert_eq!(hit, None);
    }

    #[test]
    fn exclude_skips_own_row_for_edits() {
        let hit = check(
            "AHMAD BIN ALI",
            "900101-01-1234",
            &roster(),
            Some(0),
            UniquenessPolicy::Both,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn identifier_only_policy_ignores_name_hits() {
        let hit = check(
            "AHMAD BIN ALI",
            "111111-11-1111",
            &roster(),
            None,
            UniquenessPolicy::IdentifierOnly,
        );
        assert_eq!(hit, None);
    }
}
