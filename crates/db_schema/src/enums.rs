use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Site-wide role of a user, checked against a static allow-list on every
/// privileged request.
#[derive(
  DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[ExistingTypePath = "crate::schema::sql_types::UserRoleEnum"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
  #[default]
  Founder,
  Talent,
  Admin,
}

/// Role of a user within one community membership row.
#[derive(
  DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Default,
)]
#[ExistingTypePath = "crate::schema::sql_types::CommunityRoleEnum"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CommunityRole {
  Owner,
  #[default]
  Member,
}

/// Named subscription tier. The feature limits for each tier live in
/// `startlabx_api_common::plans`, not in the database.
#[derive(
  DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[ExistingTypePath = "crate::schema::sql_types::PlanTierEnum"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlanTier {
  #[default]
  Free,
  Pro,
  Enterprise,
}

#[derive(
  DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Default,
)]
#[ExistingTypePath = "crate::schema::sql_types::SubscriptionStatusEnum"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubscriptionStatus {
  Active,
  #[default]
  Pending,
  Canceled,
}

#[derive(
  DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Default,
)]
#[ExistingTypePath = "crate::schema::sql_types::NotificationKindEnum"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
  Like,
  Comment,
  Message,
  #[default]
  System,
}

/// The ai flows a generation can be recorded against, for quota counting.
#[derive(
  DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Default,
)]
#[ExistingTypePath = "crate::schema::sql_types::AiFlowKindEnum"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AiFlowKind {
  #[default]
  PitchDeck,
  LegalDoc,
  MarketAnalysis,
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::*;
  use pretty_assertions::assert_eq;
  use std::str::FromStr;

  #[test]
  fn test_role_round_trip() {
    assert_eq!("admin", UserRole::Admin.to_string());
    assert_eq!(UserRole::Talent, UserRole::from_str("talent").unwrap());
    assert!(UserRole::from_str("superuser").is_err());
  }

  #[test]
  fn test_default_tier_is_free() {
    assert_eq!(PlanTier::Free, PlanTier::default());
  }
}
