use crate::platform::{Capability, PermissionGrant};

/// WHAT: A grant of all three capabilities passes the gate
/// WHY: The gate is a conjunction of exactly camera, microphone and storage
#[test]
fn given_all_three_granted_when_checking_then_all_granted() {
    // Given: Every capability granted
    let grant = PermissionGrant::uniform(true);

    // When/Then: The gate opens
    assert!(grant.all_granted());
    assert!(grant.missing().is_empty());
}

/// WHAT: Any single denial closes the gate
/// WHY: Partial grants must never start capture
#[test]
fn given_single_denial_when_checking_then_gate_closed_for_each_capability() {
    for denied in Capability::REQUIRED {
        // Given: One capability denied
        let grant = PermissionGrant::new(
            Capability::REQUIRED
                .into_iter()
                .map(|c| (c, c != denied)),
        );

        // When/Then: Gate closed and the denial reported
        assert!(!grant.all_granted());
        assert_eq!(grant.missing(), vec![denied]);
    }
}

/// WHAT: An empty or partial answer counts as a denial
/// WHY: A cancelled dialog returns no results at all
#[test]
fn given_unanswered_capabilities_when_checking_then_treated_as_missing() {
    // Given: An empty answer and one missing the storage entry
    let empty = PermissionGrant::default();
    let partial = PermissionGrant::new([(Capability::Camera, true), (Capability::Microphone, true)]);

    // When/Then: Both are denials
    assert_eq!(empty.missing(), Capability::REQUIRED.to_vec());
    assert_eq!(partial.missing(), vec![Capability::StorageWrite]);
}
