use crate::{context::StartlabxContext, plans::plan_limits, request::emit_realtime_event};
use chrono::Utc;
use startlabx_db_schema::{
  enums::PlanTier,
  source::{
    notification::{Notification, NotificationInsertForm},
    subscription::Subscription,
    user::User,
  },
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::{StartlabxErrorType, StartlabxResult};

pub fn is_admin(user_view: &UserView) -> StartlabxResult<()> {
  if !user_view.is_admin() {
    Err(StartlabxErrorType::NotAnAdmin.into())
  } else {
    Ok(())
  }
}

pub fn is_founder_or_admin(user_view: &UserView) -> StartlabxResult<()> {
  if !user_view.is_founder() && !user_view.is_admin() {
    Err(StartlabxErrorType::NotAFounder.into())
  } else {
    Ok(())
  }
}

/// The tier a user is on. No subscription row, or anything but an active
/// one, reads as free.
pub async fn current_tier(
  context: &StartlabxContext,
  user: &User,
) -> StartlabxResult<PlanTier> {
  let subscription = Subscription::read_for_user(&mut context.pool(), user.id).await?;
  Ok(match subscription {
    Some(s) if s.status == startlabx_db_schema::enums::SubscriptionStatus::Active => s.tier,
    _ => PlanTier::Free,
  })
}

/// 403 when the user has used up this month's AI generations.
pub async fn check_ai_quota(context: &StartlabxContext, user: &User) -> StartlabxResult<()> {
  use startlabx_db_schema::source::ai_generation::AiGeneration;
  let tier = current_tier(context, user).await?;
  if let Some(limit) = plan_limits(tier).ai_generations_per_month {
    let since = crate::plans::month_start(Utc::now());
    let used = AiGeneration::count_for_user_since(&mut context.pool(), user.id, since).await?;
    if used >= limit {
      return Err(StartlabxErrorType::QuotaExceeded.into());
    }
  }
  Ok(())
}

/// Writes the notification row, then tells the realtime transport about it
/// without waiting. Delivery failures are logged and dropped.
pub async fn notify(
  context: &StartlabxContext,
  form: NotificationInsertForm,
) -> StartlabxResult<Notification> {
  let notification = Notification::create(&mut context.pool(), &form).await?;
  emit_realtime_event(context, &notification);
  Ok(notification)
}
