use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use startlabx_db_schema::{
  newtypes::{OpportunityId, StartupId},
  source::opportunity::Opportunity,
};

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
/// Founders and admins only.
pub struct CreateOpportunity {
  pub startup_id: Option<StartupId>,
  pub title: String,
  pub description: String,
  pub role_sought: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditOpportunity {
  pub opportunity_id: OpportunityId,
  pub title: Option<String>,
  pub description: Option<String>,
  pub role_sought: Option<String>,
  /// Close or reopen the role.
  pub open: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListOpportunities {
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OpportunityResponse {
  pub opportunity: Opportunity,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListOpportunitiesResponse {
  pub opportunities: Vec<Opportunity>,
}
