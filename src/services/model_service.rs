use std::sync::Arc;

use crate::{
    auth::RequestContext,
    errors::{AppError, AppResult},
    models::{
        domain::AnatomyModel,
        dto::{request::CreateModelRequest, response::ModelView},
    },
    repositories::{ModelRepository, UserRepository},
    services::owner_directory::OwnerDirectory,
};

pub struct ModelService {
    repository: Arc<dyn ModelRepository>,
    owners: OwnerDirectory,
}

impl ModelService {
    pub fn new(repository: Arc<dyn ModelRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            owners: OwnerDirectory::new(users),
        }
    }

    /// All models, each with its owner's public details.
    pub async fn list_models(&self) -> AppResult<Vec<ModelView>> {
        let models = self.repository.list_models().await?;
        let owners = self
            .owners
            .resolve(models.iter().map(|m| m.owner_id.as_str()))
            .await?;

        Ok(models
            .into_iter()
            .map(|model| ModelView {
                owner: owners.get(&model.owner_id).cloned(),
                model,
            })
            .collect())
    }

    pub async fn get_model_view(&self, id: &str) -> AppResult<ModelView> {
        let model = self.get_model(id).await?;
        let mut owners = self.owners.resolve([model.owner_id.as_str()]).await?;

        Ok(ModelView {
            owner: owners.remove(&model.owner_id),
            model,
        })
    }

    pub async fn list_owned_models(&self, ctx: &RequestContext) -> AppResult<Vec<AnatomyModel>> {
        self.repository.list_models_by_owner(ctx.user_id()).await
    }

    pub async fn get_model(&self, id: &str) -> AppResult<AnatomyModel> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Model not found".to_string()))
    }

    pub async fn create_model(
        &self,
        ctx: &RequestContext,
        request: CreateModelRequest,
    ) -> AppResult<AnatomyModel> {
        let model = request.into_model(ctx.user_id())?;
        let model = self.repository.create(model).await?;

        log::info!("Teacher {} uploaded model {}", ctx.user_id(), model.id);
        Ok(model)
    }

    pub async fn delete_model(&self, ctx: &RequestContext, id: &str) -> AppResult<()> {
        let model = self.get_model(id).await?;

        if !model.is_owned_by(ctx.user_id()) {
            return Err(AppError::Forbidden(
                "You can only delete your own models".to_string(),
            ));
        }

        self.repository.delete(&model.id).await?;
        log::info!("Teacher {} deleted model {}", ctx.user_id(), model.id);
        Ok(())
    }
}
