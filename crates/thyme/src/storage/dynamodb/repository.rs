//! DynamoDB repository implementation.
//!
//! Implements `RecipeRepository` from `thyme_core::storage` using DynamoDB.
//! All writes are unconditional puts and deletes; no condition expressions
//! are used.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use thyme_core::recipe::{new_recipe_id, Recipe};
use thyme_core::storage::{RecipeRepository, RepositoryError, Result};

use crate::config::Config;

use super::conversions::{item_to_recipe, recipe_to_item};
use super::error::{
    is_table_already_exists, map_create_table_error, map_delete_item_error, map_get_item_error,
    map_list_tables_error, map_put_item_error, map_scan_error,
};
use super::schema::{recipe_key, ID_ATTRIBUTE, READ_CAPACITY_UNITS, WRITE_CAPACITY_UNITS};

/// DynamoDB-based repository implementation.
///
/// The SDK client is cheap to clone and safe to share between requests.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region
    /// and endpoint.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .endpoint_url(&config.aws_endpoint)
            .load()
            .await;

        tracing::info!(
            region = %config.aws_region,
            endpoint = %config.aws_endpoint,
            table = %config.table_name,
            "Connecting to DynamoDB"
        );

        Self::new(Client::new(&sdk_config), &config.table_name)
    }

    async fn put_recipe(&self, recipe: &Recipe) -> Result<()> {
        let item = recipe_to_item(recipe)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}

fn invalid_table_definition(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::QueryFailed(format!("Invalid table definition: {}", err))
}

#[async_trait]
impl RecipeRepository for DynamoDbRepository {
    async fn ensure_table(&self) -> Result<()> {
        let attribute = AttributeDefinition::builder()
            .attribute_name(ID_ATTRIBUTE)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(invalid_table_definition)?;

        let key = KeySchemaElement::builder()
            .attribute_name(ID_ATTRIBUTE)
            .key_type(KeyType::Hash)
            .build()
            .map_err(invalid_table_definition)?;

        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(READ_CAPACITY_UNITS)
            .write_capacity_units(WRITE_CAPACITY_UNITS)
            .build()
            .map_err(invalid_table_definition)?;

        let result = self
            .client
            .create_table()
            .table_name(&self.table_name)
            .attribute_definitions(attribute)
            .key_schema(key)
            .provisioned_throughput(throughput)
            .send()
            .await;

        match result {
            Ok(_) => {
                tracing::info!(table = %self.table_name, "Created recipe table");
                Ok(())
            }
            // Already provisioned
            Err(err) if is_table_already_exists(&err) => {
                tracing::info!(table = %self.table_name, "Recipe table already exists");
                Ok(())
            }
            Err(err) => Err(map_create_table_error(err)),
        }
    }

    async fn save_recipe(&self, mut recipe: Recipe) -> Result<Recipe> {
        recipe.id = new_recipe_id();
        self.put_recipe(&recipe).await?;

        Ok(recipe)
    }

    async fn update_recipe(&self, mut recipe: Recipe, id: &str) -> Result<()> {
        recipe.id = id.to_string();
        self.put_recipe(&recipe).await
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, recipe_key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => item_to_recipe(&item),
            None => Err(RepositoryError::recipe_not_found(id)),
        }
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let mut recipes = Vec::new();
        let mut start_key = None;

        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in page.items.unwrap_or_default() {
                recipes.push(item_to_recipe(&item)?);
            }

            start_key = page.last_evaluated_key;
            if start_key.is_none() {
                break;
            }
        }

        Ok(recipes)
    }

    async fn delete_recipe(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, recipe_key(id))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let mut tables = Vec::new();
        let mut start_table = None;

        loop {
            let page = self
                .client
                .list_tables()
                .set_exclusive_start_table_name(start_table)
                .send()
                .await
                .map_err(map_list_tables_error)?;

            tables.extend(page.table_names.unwrap_or_default());

            start_table = page.last_evaluated_table_name;
            if start_table.is_none() {
                break;
            }
        }

        Ok(tables)
    }
}
