use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use startlabx_db_schema::{newtypes::AiGenerationId, source::ai_generation::AiGeneration};

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratePitchDeck {
  pub startup_name: String,
  pub description: String,
  pub audience: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Slide {
  pub title: String,
  pub body: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PitchDeckResponse {
  pub generation_id: AiGenerationId,
  pub slides: Vec<Slide>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LegalDocKind {
  Nda,
  FoundersAgreement,
  PrivacyPolicy,
  TermsOfService,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateLegalDoc {
  pub kind: LegalDocKind,
  pub party_a: String,
  pub party_b: String,
  pub jurisdiction: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LegalDocResponse {
  pub generation_id: AiGenerationId,
  pub document: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateMarketAnalysis {
  pub industry: String,
  pub region: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarketAnalysisResponse {
  pub generation_id: AiGenerationId,
  pub summary: String,
  pub trends: Vec<String>,
  pub competitors: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListGenerations {
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListGenerationsResponse {
  pub generations: Vec<AiGeneration>,
}
