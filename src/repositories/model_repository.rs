use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::AnatomyModel,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<AnatomyModel>>;
    async fn list_models(&self) -> AppResult<Vec<AnatomyModel>>;
    /// Newest first.
    async fn list_models_by_owner(&self, owner_id: &str) -> AppResult<Vec<AnatomyModel>>;
    async fn create(&self, model: AnatomyModel) -> AppResult<AnatomyModel>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoModelRepository {
    collection: Collection<AnatomyModel>,
}

impl MongoModelRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection("models");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for models collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for models collection");
        Ok(())
    }
}

#[async_trait]
impl ModelRepository for MongoModelRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<AnatomyModel>> {
        let model = self.collection.find_one(doc! { "id": id }).await?;
        Ok(model)
    }

    async fn list_models(&self) -> AppResult<Vec<AnatomyModel>> {
        let models = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(models)
    }

    async fn list_models_by_owner(&self, owner_id: &str) -> AppResult<Vec<AnatomyModel>> {
        let mut models: Vec<AnatomyModel> = self
            .collection
            .find(doc! { "ownerId": owner_id })
            .await?
            .try_collect()
            .await?;

        models.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(models)
    }

    async fn create(&self, model: AnatomyModel) -> AppResult<AnatomyModel> {
        self.collection.insert_one(&model).await?;
        Ok(model)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("Model not found".to_string()));
        }

        Ok(())
    }
}
