use std::{collections::HashMap, sync::Arc};

use crate::{
    errors::AppResult,
    models::dto::response::OwnerSummary,
    repositories::UserRepository,
};

/// Resolves owner ids to public summaries with one batched user lookup.
pub struct OwnerDirectory {
    users: Arc<dyn UserRepository>,
}

impl OwnerDirectory {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn resolve<'a, I>(&self, owner_ids: I) -> AppResult<HashMap<String, OwnerSummary>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ids: Vec<String> = owner_ids.into_iter().map(str::to_string).collect();
        ids.sort();
        ids.dedup();

        let owners = self
            .users
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|user| (user.id.clone(), OwnerSummary::from(user)))
            .collect();
        Ok(owners)
    }
}
