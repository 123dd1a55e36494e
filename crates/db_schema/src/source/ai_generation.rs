use crate::{
  enums::AiFlowKind,
  newtypes::{AiGenerationId, UserId},
  schema::ai_generation,
};
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = ai_generation)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// One completed generation. Rows are counted per calendar month to enforce
/// the plan quota.
pub struct AiGeneration {
  pub id: AiGenerationId,
  pub user_id: UserId,
  pub flow: AiFlowKind,
  pub input: String,
  pub output: String,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ai_generation)]
pub struct AiGenerationInsertForm {
  pub user_id: UserId,
  pub flow: AiFlowKind,
  pub input: String,
  pub output: String,
}
