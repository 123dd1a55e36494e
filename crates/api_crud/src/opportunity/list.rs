use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  context::StartlabxContext,
  opportunity::{ListOpportunities, ListOpportunitiesResponse},
};
use startlabx_db_schema::source::opportunity::Opportunity;
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

/// Open roles only, except admins also see closed ones.
pub async fn list_opportunities(
  data: Query<ListOpportunities>,
  context: Data<StartlabxContext>,
  user_view: Option<UserView>,
) -> StartlabxResult<Json<ListOpportunitiesResponse>> {
  let opportunities = Opportunity::list(
    &mut context.pool(),
    include_closed(user_view.as_ref()),
    data.page,
    data.limit,
  )
  .await?;
  Ok(Json(ListOpportunitiesResponse { opportunities }))
}

fn include_closed(viewer: Option<&UserView>) -> bool {
  viewer.is_some_and(UserView::is_admin)
}

#[cfg(test)]
mod tests {
  use super::include_closed;
  use chrono::Utc;
  use pretty_assertions::assert_eq;
  use startlabx_db_schema::{
    enums::UserRole,
    newtypes::UserId,
    source::user::User,
  };
  use startlabx_db_views::structs::UserView;

  fn viewer(role: UserRole) -> UserView {
    UserView::new(User {
      id: UserId(1),
      name: "casey".to_string(),
      display_name: None,
      email: "casey@example.com".to_string(),
      password_encrypted: String::new(),
      role,
      bio: None,
      skills: None,
      avatar: None,
      verified: false,
      published: Utc::now(),
      updated: None,
    })
  }

  #[test]
  fn test_closed_roles_visible_to_admins_only() {
    assert_eq!(false, include_closed(None));
    assert_eq!(false, include_closed(Some(&viewer(UserRole::Talent))));
    assert_eq!(false, include_closed(Some(&viewer(UserRole::Founder))));
    assert_eq!(true, include_closed(Some(&viewer(UserRole::Admin))));
  }
}
