//! Document-store connectivity probe for the print order collection.
//!
//! Nothing in the kiosk flow calls this; operators reach it through the tools
//! binary to check that the order store configured for the kiosk is alive.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection, Database,
};

use crate::{config::KioskSettings, error::StoreError};

#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    type Handles: Send;

    async fn probe(&self) -> Result<Self::Handles, StoreError>;
}

/// Handles obtained from a successful probe.
#[derive(Debug, Clone)]
pub struct StoreHandles {
    pub client: Client,
    pub database: Database,
    pub collection: Collection<Document>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoProbe {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub selection_timeout: Duration,
}

impl MongoProbe {
    pub fn new(
        uri: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            collection: collection.into(),
            selection_timeout: Duration::from_secs(5),
        }
    }

    pub fn from_settings(settings: &KioskSettings) -> Self {
        Self {
            uri: settings.store_uri.clone(),
            database: settings.store_database.clone(),
            collection: settings.store_collection.clone(),
            selection_timeout: Duration::from_millis(settings.store_selection_timeout_ms),
        }
    }

    pub fn with_selection_timeout(mut self, timeout: Duration) -> Self {
        self.selection_timeout = timeout;
        self
    }

    async fn connect(&self) -> Result<StoreHandles, StoreError> {
        let unreachable = |source: mongodb::error::Error| StoreError::Unreachable {
            uri: self.uri.clone(),
            source,
        };

        let mut options = ClientOptions::parse(self.uri.as_str()).await.map_err(unreachable)?;
        options.server_selection_timeout = Some(self.selection_timeout);
        options.app_name = Some("print-server-kiosk".to_string());
        let client = Client::with_options(options).map_err(unreachable)?;

        let database = client.database(&self.database);
        let collection = database.collection::<Document>(&self.collection);
        collection
            .find_one(doc! {})
            .await
            .map_err(|source| StoreError::Probe {
                database: self.database.clone(),
                collection: self.collection.clone(),
                source,
            })?;

        Ok(StoreHandles {
            client,
            database,
            collection,
        })
    }
}

#[async_trait]
impl ConnectivityProbe for MongoProbe {
    type Handles = StoreHandles;

    async fn probe(&self) -> Result<StoreHandles, StoreError> {
        match self.connect().await {
            Ok(handles) => {
                tracing::info!(
                    database = %self.database,
                    collection = %self.collection,
                    "document store reachable"
                );
                Ok(handles)
            }
            Err(err) => {
                tracing::warn!("connection failed: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
