use chrono::{DateTime, Datelike, TimeZone, Utc};
use startlabx_db_schema::enums::PlanTier;

/// Static plan table. Lives in code, not the database; the billing provider
/// only ever hears tier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
  /// AI generations per calendar month, `None` means unlimited.
  pub ai_generations_per_month: Option<i64>,
  /// How many startups one account may own, `None` means unlimited.
  pub max_startups: Option<i64>,
}

pub fn plan_limits(tier: PlanTier) -> PlanLimits {
  match tier {
    PlanTier::Free => PlanLimits {
      ai_generations_per_month: Some(5),
      max_startups: Some(1),
    },
    PlanTier::Pro => PlanLimits {
      ai_generations_per_month: Some(100),
      max_startups: Some(5),
    },
    PlanTier::Enterprise => PlanLimits {
      ai_generations_per_month: None,
      max_startups: None,
    },
  }
}

/// Start of the current calendar month, the window AI quota is counted over.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
    .single()
    .unwrap_or(now)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::{month_start, plan_limits};
  use chrono::{TimeZone, Utc};
  use pretty_assertions::assert_eq;
  use startlabx_db_schema::enums::PlanTier;

  #[test]
  fn test_plan_table() {
    assert_eq!(
      Some(5),
      plan_limits(PlanTier::Free).ai_generations_per_month
    );
    assert_eq!(Some(1), plan_limits(PlanTier::Free).max_startups);
    assert_eq!(
      Some(100),
      plan_limits(PlanTier::Pro).ai_generations_per_month
    );
    assert_eq!(None, plan_limits(PlanTier::Enterprise).max_startups);
  }

  #[test]
  fn test_month_start() {
    let now = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
    let start = month_start(now);
    assert_eq!(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(), start);
  }
}
