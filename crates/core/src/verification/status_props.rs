//! Property-based tests for the request status state machine.

use proptest::prelude::*;

use auditra_shared::types::{CompanyId, RequestId, UserId};
use chrono::Utc;
use uuid::Uuid;

use crate::error::AuditError;
use crate::verification::types::{RequestKind, RequestStatus, VerificationRequest};

/// Strategy for generating random RequestStatus values.
fn arb_status() -> impl Strategy<Value = RequestStatus> {
    prop_oneof![
        Just(RequestStatus::Waiting),
        Just(RequestStatus::Accepted),
        Just(RequestStatus::Rejected),
    ]
}

/// Strategy for generating terminal statuses.
fn arb_terminal_status() -> impl Strategy<Value = RequestStatus> {
    prop_oneof![Just(RequestStatus::Accepted), Just(RequestStatus::Rejected)]
}

/// Strategy for generating random request kinds.
fn arb_kind() -> impl Strategy<Value = RequestKind> {
    prop_oneof![
        Just(RequestKind::Auditor),
        "[a-zA-Z ]{1,40}".prop_map(|division_name| RequestKind::Division { division_name }),
    ]
}

fn request_with_status(kind: RequestKind, status: RequestStatus) -> VerificationRequest {
    let mut request = VerificationRequest::new(
        RequestId::from_uuid(Uuid::new_v4()),
        UserId::from_uuid(Uuid::new_v4()),
        CompanyId::from_uuid(Uuid::new_v4()),
        kind,
        Utc::now(),
    );
    request.status = status;
    request
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// as_str and parse round-trip for every status.
    #[test]
    fn prop_status_string_roundtrip(status in arb_status()) {
        prop_assert_eq!(RequestStatus::parse(status.as_str()), Some(status));
    }

    /// A waiting request accepts exactly once.
    #[test]
    fn prop_waiting_accepts(kind in arb_kind()) {
        let mut request = request_with_status(kind, RequestStatus::Waiting);
        prop_assert!(request.accept().is_ok());
        prop_assert_eq!(request.status, RequestStatus::Accepted);
    }

    /// Resolution from any terminal status always fails and never moves
    /// the status.
    #[test]
    fn prop_terminal_is_sticky(kind in arb_kind(), terminal in arb_terminal_status()) {
        let mut request = request_with_status(kind, terminal);

        let accept = request.accept();
        prop_assert!(matches!(accept, Err(AuditError::AlreadyResolved { .. })));
        prop_assert_eq!(request.status, terminal);

        let reject = request.reject();
        prop_assert!(matches!(reject, Err(AuditError::AlreadyResolved { .. })));
        prop_assert_eq!(request.status, terminal);
    }

    /// The granted role always matches the request kind.
    #[test]
    fn prop_granted_role_matches_kind(kind in arb_kind()) {
        let role = kind.granted_role();
        match kind {
            RequestKind::Division { .. } => {
                prop_assert_eq!(role, crate::identity::UserRole::DivisionManager);
            }
            RequestKind::Auditor => {
                prop_assert_eq!(role, crate::identity::UserRole::Auditor);
            }
        }
    }
}
