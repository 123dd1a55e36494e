use diesel::{
  result::Error,
  ExpressionMethods,
  PgTextExpressionMethods,
  QueryDsl,
  SelectableHelper,
};
use diesel_async::RunQueryDsl;
use startlabx_db_schema::{
  enums::UserRole,
  schema::user_,
  source::user::User,
  utils::{get_conn, limit_and_offset, DbPool},
};

/// Browse users with the talent role, optionally filtered by a skill
/// substring.
#[derive(Debug, Default)]
pub struct TalentQuery {
  pub skill: Option<String>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

impl TalentQuery {
  pub async fn list(self, pool: &mut DbPool<'_>) -> Result<Vec<User>, Error> {
    let (limit, offset) = limit_and_offset(self.page, self.limit)?;
    let conn = &mut get_conn(pool).await?;
    let mut query = user_::table
      .filter(user_::role.eq(UserRole::Talent))
      .into_boxed();
    if let Some(skill) = self.skill {
      query = query.filter(user_::skills.ilike(format!("%{skill}%")));
    }
    query
      .order_by(user_::published.desc())
      .limit(limit)
      .offset(offset)
      .select(User::as_select())
      .load::<User>(conn)
      .await
  }
}
