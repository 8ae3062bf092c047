//! In-memory template storage for testing and development

use std::collections::HashMap;
use std::sync::Mutex;

use appcreator::{Template, TemplateId, Templates};
use async_trait::async_trait;

use super::TemplateStore;
use crate::error::{Result, StoreError};

/// In-memory storage implementation for testing
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: Mutex<HashMap<TemplateId, Template>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        if let Ok(mut data) = self.data.lock() {
            data.clear();
        }
    }

    /// Get number of stored templates
    pub fn len(&self) -> usize {
        self.data.lock().map(|data| data.len()).unwrap_or(0)
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TemplateStore for MemoryStorage {
    async fn get_all(&self) -> Result<Templates> {
        let storage = self
            .data
            .lock()
            .map_err(|_| StoreError::Backend("Lock poisoned".into()))?;

        Ok(storage.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &TemplateId) -> Result<Template> {
        let storage = self
            .data
            .lock()
            .map_err(|_| StoreError::Backend("Lock poisoned".into()))?;

        storage
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn put(&self, template: &Template) -> Result<TemplateId> {
        let mut storage = self
            .data
            .lock()
            .map_err(|_| StoreError::Backend("Lock poisoned".into()))?;

        storage.insert(template.id.clone(), template.clone());
        Ok(template.id.clone())
    }
}
