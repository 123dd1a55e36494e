use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  opportunity::{CreateOpportunity, OpportunityResponse},
  utils::is_founder_or_admin,
};
use startlabx_db_schema::{
  source::{
    opportunity::{Opportunity, OpportunityInsertForm},
    startup::Startup,
  },
  traits::Crud,
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::{
  error::{StartlabxErrorType, StartlabxResult},
  utils::validation::{is_valid_body_field, is_valid_title},
};

#[tracing::instrument(skip_all)]
pub async fn create_opportunity(
  data: Json<CreateOpportunity>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<OpportunityResponse>> {
  is_founder_or_admin(&user_view)?;
  is_valid_title(&data.title)?;
  is_valid_body_field(&data.description, false)?;

  if let Some(startup_id) = data.startup_id {
    let startup = Startup::read(&mut context.pool(), startup_id).await?;
    if startup.owner_id != user_view.user.id && !user_view.is_admin() {
      return Err(StartlabxErrorType::NoStartupEditAllowed.into());
    }
  }

  let form = OpportunityInsertForm {
    creator_id: user_view.user.id,
    startup_id: data.startup_id,
    title: data.title.clone(),
    description: data.description.clone(),
    role_sought: data.role_sought.clone(),
  };
  let opportunity = Opportunity::create(&mut context.pool(), &form).await?;
  Ok(Json(OpportunityResponse { opportunity }))
}
