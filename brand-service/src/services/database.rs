//! MongoDB-backed store for projects and their assets.

use crate::models::{BrandProject, GeneratedAsset, ProjectStatus};
use crate::services::store::BrandStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

fn db_error(context: &str, e: mongodb::error::Error) -> AppError {
    tracing::error!("{}: {}", context, e);
    AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
}

#[derive(Clone)]
pub struct BrandDb {
    client: MongoClient,
    db: Database,
}

impl BrandDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri)
            .await
            .map_err(|e| db_error("Failed to connect to MongoDB", e))?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for brand-service");

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_idx".to_string())
                    .build(),
            )
            .build();

        self.projects()
            .create_index(created_at_index, None)
            .await
            .map_err(|e| db_error("Failed to create created_at index", e))?;

        let project_assets_index = IndexModel::builder()
            .keys(doc! { "project_id": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("project_assets_idx".to_string())
                    .build(),
            )
            .build();

        self.assets()
            .create_index(project_assets_index, None)
            .await
            .map_err(|e| db_error("Failed to create project_assets index", e))?;

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    // Collection accessors

    pub fn projects(&self) -> Collection<BrandProject> {
        self.db.collection("projects")
    }

    pub fn assets(&self) -> Collection<GeneratedAsset> {
        self.db.collection("assets")
    }

    async fn find_assets(&self, filter: Document) -> Result<Vec<GeneratedAsset>, AppError> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let cursor = self
            .assets()
            .find(filter, options)
            .await
            .map_err(|e| db_error("Failed to query assets", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| db_error("Failed to collect assets", e))
    }
}

#[async_trait]
impl BrandStore for BrandDb {
    async fn insert_project(&self, project: &BrandProject) -> Result<(), AppError> {
        self.projects()
            .insert_one(project, None)
            .await
            .map_err(|e| db_error("Failed to insert project", e))?;
        Ok(())
    }

    async fn find_project(&self, id: &str) -> Result<Option<BrandProject>, AppError> {
        self.projects()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| db_error("Failed to fetch project", e))
    }

    async fn list_projects(&self, limit: i64) -> Result<Vec<BrandProject>, AppError> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .build();

        let cursor = self
            .projects()
            .find(None, options)
            .await
            .map_err(|e| db_error("Failed to query projects", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| db_error("Failed to collect projects", e))
    }

    async fn update_project(
        &self,
        project: &BrandProject,
        expected: ProjectStatus,
    ) -> Result<(), AppError> {
        let result = self
            .projects()
            .replace_one(
                doc! { "_id": &project.id, "status": expected.as_str() },
                project,
                None,
            )
            .await
            .map_err(|e| db_error("Failed to update project", e))?;

        if result.matched_count == 0 {
            return match self.find_project(&project.id).await? {
                Some(stored) => Err(AppError::Conflict(anyhow::anyhow!(
                    "Project {} is now '{}', expected '{}'",
                    project.id,
                    stored.status,
                    expected
                ))),
                None => Err(AppError::NotFound(anyhow::anyhow!(
                    "Project {} not found",
                    project.id
                ))),
            };
        }
        Ok(())
    }

    async fn insert_asset(&self, asset: &GeneratedAsset) -> Result<(), AppError> {
        self.assets()
            .insert_one(asset, None)
            .await
            .map_err(|e| db_error("Failed to insert asset", e))?;
        Ok(())
    }

    async fn list_assets(&self, project_id: &str) -> Result<Vec<GeneratedAsset>, AppError> {
        self.find_assets(doc! { "project_id": project_id }).await
    }

    async fn assets_for_projects(
        &self,
        project_ids: &[String],
    ) -> Result<Vec<GeneratedAsset>, AppError> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_assets(doc! { "project_id": { "$in": project_ids } })
            .await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| db_error("MongoDB health check failed", e))?;
        Ok(())
    }

    async fn close(&self) {
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}
