use crate::{
  enums::SubscriptionStatus,
  newtypes::UserId,
  schema::subscription,
  source::subscription::{Subscription, SubscriptionInsertForm, SubscriptionUpdateForm},
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Subscription {
  pub async fn read_for_user(
    pool: &mut DbPool<'_>,
    user_id: UserId,
  ) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    subscription::table
      .filter(subscription::user_id.eq(user_id))
      .first::<Self>(conn)
      .await
      .optional()
  }

  /// One row per user: updates in place when a subscription already exists.
  pub async fn upsert(pool: &mut DbPool<'_>, form: &SubscriptionInsertForm) -> Result<Self, Error> {
    let existing = Self::read_for_user(pool, form.user_id).await?;
    let conn = &mut get_conn(pool).await?;
    match existing {
      Some(subscription) => {
        let update_form = SubscriptionUpdateForm {
          tier: Some(form.tier),
          status: Some(form.status),
          external_session_id: Some(form.external_session_id.clone()),
          external_customer_id: Some(form.external_customer_id.clone()),
          current_period_end: Some(form.current_period_end),
          updated: Some(Some(chrono::Utc::now())),
        };
        diesel::update(subscription::table.find(subscription.id))
          .set(update_form)
          .get_result::<Self>(conn)
          .await
      }
      None => {
        insert_into(subscription::table)
          .values(form)
          .get_result::<Self>(conn)
          .await
      }
    }
  }

  pub async fn update_status(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    status: SubscriptionStatus,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(subscription::table.filter(subscription::user_id.eq(user_id)))
      .set((
        subscription::status.eq(status),
        subscription::updated.eq(Some(chrono::Utc::now())),
      ))
      .get_result::<Self>(conn)
      .await
  }

  /// Flips active subscriptions whose period has ended to canceled. Run on a
  /// schedule.
  pub async fn cancel_expired(pool: &mut DbPool<'_>) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      subscription::table
        .filter(subscription::status.eq(SubscriptionStatus::Active))
        .filter(subscription::current_period_end.lt(chrono::Utc::now())),
    )
    .set(subscription::status.eq(SubscriptionStatus::Canceled))
    .execute(conn)
    .await
  }
}
