use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use startlabx_db_schema::{newtypes::StartupId, source::startup::Startup};

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateStartup {
  pub name: String,
  pub pitch: Option<String>,
  pub stage: Option<String>,
  pub website: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetStartup {
  pub id: StartupId,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListStartups {
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
/// Owner-gated.
pub struct EditStartup {
  pub startup_id: StartupId,
  pub name: Option<String>,
  pub pitch: Option<String>,
  pub stage: Option<String>,
  pub website: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StartupResponse {
  pub startup: Startup,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListStartupsResponse {
  pub startups: Vec<Startup>,
}
