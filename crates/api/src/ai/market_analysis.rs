use crate::ai::parse_market_sections;
use actix_web::web::{Data, Json};
use startlabx_api_common::{
  ai::{GenerateMarketAnalysis, MarketAnalysisResponse},
  context::StartlabxContext,
  request::ai_generate,
  utils::check_ai_quota,
};
use startlabx_db_schema::{
  enums::AiFlowKind,
  source::ai_generation::{AiGeneration, AiGenerationInsertForm},
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::{error::StartlabxResult, utils::validation::is_valid_title};

#[tracing::instrument(skip_all)]
pub async fn generate_market_analysis(
  data: Json<GenerateMarketAnalysis>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<MarketAnalysisResponse>> {
  is_valid_title(&data.industry)?;
  is_valid_title(&data.region)?;
  check_ai_quota(&context, &user_view.user).await?;

  let prompt = format!(
    "Write a market analysis for the {} industry in {}. \
     Start with a short summary, then a \"Trends:\" bullet list, then a \
     \"Competitors:\" bullet list.",
    data.industry, data.region,
  );
  let output = ai_generate(&context, AiFlowKind::MarketAnalysis, &prompt).await?;

  let form = AiGenerationInsertForm {
    user_id: user_view.user.id,
    flow: AiFlowKind::MarketAnalysis,
    input: prompt,
    output: output.clone(),
  };
  let generation = AiGeneration::create(&mut context.pool(), &form).await?;

  let (summary, trends, competitors) = parse_market_sections(&output);
  Ok(Json(MarketAnalysisResponse {
    generation_id: generation.id,
    summary,
    trends,
    competitors,
  }))
}
