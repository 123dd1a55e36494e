use crate::ai::parse_slides;
use actix_web::web::{Data, Json};
use startlabx_api_common::{
  ai::{GeneratePitchDeck, PitchDeckResponse},
  context::StartlabxContext,
  request::ai_generate,
  utils::check_ai_quota,
};
use startlabx_db_schema::{
  enums::AiFlowKind,
  source::ai_generation::{AiGeneration, AiGenerationInsertForm},
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::{
  error::StartlabxResult,
  utils::validation::{is_valid_body_field, is_valid_title},
};

#[tracing::instrument(skip_all)]
pub async fn generate_pitch_deck(
  data: Json<GeneratePitchDeck>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<PitchDeckResponse>> {
  is_valid_title(&data.startup_name)?;
  is_valid_body_field(&data.description, false)?;
  check_ai_quota(&context, &user_view.user).await?;

  let audience = data.audience.as_deref().unwrap_or("investors");
  let prompt = format!(
    "Write a startup pitch deck for \"{}\", aimed at {audience}. \
     Startup description: {}\n\
     Return one markdown heading per slide.",
    data.startup_name, data.description,
  );
  let output = ai_generate(&context, AiFlowKind::PitchDeck, &prompt).await?;

  let form = AiGenerationInsertForm {
    user_id: user_view.user.id,
    flow: AiFlowKind::PitchDeck,
    input: prompt,
    output: output.clone(),
  };
  let generation = AiGeneration::create(&mut context.pool(), &form).await?;

  Ok(Json(PitchDeckResponse {
    generation_id: generation.id,
    slides: parse_slides(&output),
  }))
}
