// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApplicationState, DomainError, STAGE_POLICY, Stage};
use std::str::FromStr;

#[test]
fn test_policy_table_is_in_pipeline_order() {
    for (index, definition) in STAGE_POLICY.iter().enumerate() {
        assert_eq!(definition.stage.index(), index);
        assert_eq!(Stage::from_index(index).unwrap(), definition.stage);
    }
    assert!(matches!(
        Stage::from_index(7),
        Err(DomainError::UnknownStage(_))
    ));
}

#[test]
fn test_block_office_uses_approve_literal() {
    assert_eq!(Stage::BlockOffice.definition().success_literal, "approve");
    for stage in Stage::ALL.into_iter().skip(1) {
        assert_eq!(stage.definition().success_literal, "approved");
    }
}

#[test]
fn test_success_literal_is_case_insensitive() {
    let definition = Stage::ComputerSession.definition();
    assert!(definition.is_success("approved"));
    assert!(definition.is_success("APPROVED"));
    assert!(!definition.is_success("approve"));
    assert!(!definition.is_success("rejected"));
}

#[test]
fn test_previous_and_next_link_the_chain() {
    assert_eq!(Stage::BlockOffice.previous(), None);
    assert_eq!(Stage::Verification.next(), None);
    for pair in Stage::ALL.windows(2) {
        assert_eq!(pair[1].previous(), Some(pair[0]));
        assert_eq!(pair[0].next(), Some(pair[1]));
    }
    assert!(Stage::Verification.is_final());
    assert!(!Stage::PostSession.is_final());
}

#[test]
fn test_stage_slug_round_trip() {
    for stage in Stage::ALL {
        assert_eq!(Stage::from_str(stage.slug()).unwrap(), stage);
    }
    assert!(matches!(
        Stage::from_str("Block Office"),
        Err(DomainError::UnknownStage(_))
    ));
}

#[test]
fn test_reblock_definition() {
    let definition = Stage::Reblock.definition();
    assert_eq!(definition.display_name, "Re-Block Queue");
    assert_eq!(definition.completed_label, "Completed");
    assert_eq!(definition.status_field, "reblock_status");
    assert_eq!(definition.timestamp_field, "reblock_time");
}

#[test]
fn test_application_state_chain() {
    let mut state: ApplicationState = ApplicationState::Submitted;
    let mut visited: Vec<Stage> = Vec::new();
    while let Some(stage) = state.next_stage() {
        visited.push(stage);
        state = ApplicationState::after(stage);
    }
    assert_eq!(visited, Stage::ALL.to_vec());
    assert!(state.is_terminal());
    assert_eq!(state.as_str(), "Verified");
}
