use startlabx_db_schema::enums::CommunityRole;
use startlabx_utils::error::{StartlabxErrorType, StartlabxResult};

/// What a toggle request should do, given the current association state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Toggle {
  Set,
  Unset,
}

impl Toggle {
  /// The state reported back to the caller once the action is done.
  pub(crate) fn state(self) -> bool {
    self == Toggle::Set
  }
}

pub(crate) fn flip(present: bool) -> Toggle {
  if present {
    Toggle::Unset
  } else {
    Toggle::Set
  }
}

/// Membership has one extra rule: the owner's row can never be toggled off.
pub(crate) fn flip_membership(role: Option<CommunityRole>) -> StartlabxResult<Toggle> {
  match role {
    Some(CommunityRole::Owner) => Err(StartlabxErrorType::OwnerCannotLeave.into()),
    Some(_) => Ok(Toggle::Unset),
    None => Ok(Toggle::Set),
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::{flip, flip_membership, Toggle};
  use pretty_assertions::assert_eq;
  use startlabx_db_schema::enums::CommunityRole;
  use startlabx_utils::error::StartlabxErrorType;

  #[test]
  fn test_two_flips_return_to_original_state() {
    for initial in [false, true] {
      let after_first = flip(initial).state();
      let after_second = flip(after_first).state();
      assert_eq!(initial, after_second);
      assert_ne!(initial, after_first);
    }
  }

  #[test]
  fn test_two_membership_flips_return_to_original_state() {
    // Not a member: first call joins, second call leaves.
    let first = flip_membership(None).unwrap();
    assert_eq!(Toggle::Set, first);
    let second = flip_membership(Some(CommunityRole::Member)).unwrap();
    assert_eq!(Toggle::Unset, second);
  }

  #[test]
  fn test_owner_cannot_toggle_off_membership() {
    let err = flip_membership(Some(CommunityRole::Owner)).unwrap_err();
    assert_eq!(StartlabxErrorType::OwnerCannotLeave, err.error_type);
  }
}
