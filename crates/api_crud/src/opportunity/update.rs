use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  opportunity::{EditOpportunity, OpportunityResponse},
};
use startlabx_db_schema::{
  source::opportunity::{Opportunity, OpportunityUpdateForm},
  traits::Crud,
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::{StartlabxErrorType, StartlabxResult};

#[tracing::instrument(skip_all)]
pub async fn update_opportunity(
  data: Json<EditOpportunity>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<OpportunityResponse>> {
  let opportunity = Opportunity::read(&mut context.pool(), data.opportunity_id).await?;
  if opportunity.creator_id != user_view.user.id && !user_view.is_admin() {
    return Err(StartlabxErrorType::NoStartupEditAllowed.into());
  }

  let form = OpportunityUpdateForm {
    title: data.title.clone(),
    description: data.description.clone(),
    role_sought: data.role_sought.clone(),
    open: data.open,
    updated: Some(Some(chrono::Utc::now())),
  };
  let opportunity = Opportunity::update(&mut context.pool(), opportunity.id, &form).await?;
  Ok(Json(OpportunityResponse { opportunity }))
}
