use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Required file extension for uploaded 3D assets.
pub const MODEL_FILE_SUFFIX: &str = ".glb";

/// A 3D anatomy asset published by a teacher.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnatomyModel {
    pub id: String,
    pub name: String,
    pub system: String,
    #[serde(default)]
    pub description: String,
    pub model_url: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AnatomyModel {
    pub fn new(name: &str, system: &str, description: &str, model_url: &str, owner_id: &str) -> Self {
        let now = Utc::now();
        AnatomyModel {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            system: system.to_string(),
            description: description.to_string(),
            model_url: model_url.to_string(),
            owner_id: owner_id.to_string(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}
