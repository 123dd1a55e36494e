use actix_web::web::{Data, Json};
use startlabx_api_common::{
  ai::{GenerateLegalDoc, LegalDocKind, LegalDocResponse},
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

fn doc_kind_name(kind: LegalDocKind) -> &'static str {
  match kind {
    LegalDocKind::Nda => "mutual non-disclosure agreement",
    LegalDocKind::FoundersAgreement => "founders' agreement",
    LegalDocKind::PrivacyPolicy => "privacy policy",
    LegalDocKind::TermsOfService => "terms of service",
  }
}

#[tracing::instrument(skip_all)]
pub async fn generate_legal_doc(
  data: Json<GenerateLegalDoc>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<LegalDocResponse>> {
  is_valid_title(&data.party_a)?;
  is_valid_title(&data.party_b)?;
  check_ai_quota(&context, &user_view.user).await?;

  let jurisdiction = data.jurisdiction.as_deref().unwrap_or("Delaware, USA");
  let prompt = format!(
    "Draft a {} between {} and {}, governed by the laws of {jurisdiction}. \
     Output the full document text.",
    doc_kind_name(data.kind),
    data.party_a,
    data.party_b,
  );
  let output = ai_generate(&context, AiFlowKind::LegalDoc, &prompt).await?;

  let form = AiGenerationInsertForm {
    user_id: user_view.user.id,
    flow: AiFlowKind::LegalDoc,
    input: prompt,
    output: output.clone(),
  };
  let generation = AiGeneration::create(&mut context.pool(), &form).await?;

  Ok(Json(LegalDocResponse {
    generation_id: generation.id,
    document: output,
  }))
}
