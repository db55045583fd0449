//! Flat JSON-file persistence.
//!
//! Each record kind lives in its own file holding a JSON array. Every write
//! reads the whole list, replaces or appends one record, and writes the list
//! back. A per-store async mutex serializes those sequences so concurrent
//! requests in this process cannot lose updates.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::errors::WorkbenchError;
use crate::models::records::{Dataset, EvalJob, Evaluator, PromptTemplate, Tool, Workflow};

pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Human-readable name used in error details, e.g. "Tool not found".
    const KIND: &'static str;
    const KEY_FIELD: &'static str;
    const FILE_NAME: &'static str;

    fn key(&self) -> &str;

    /// Validates the record and fills in a generated key where the kind allows it.
    fn prepare(&mut self) -> Result<(), WorkbenchError>;
}

pub struct JsonStore<R: Record> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> JsonStore<R> {
    /// Opens the store under `dir`, creating the directory and an empty file if needed.
    pub fn open(dir: &Path) -> Result<Self, WorkbenchError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(R::FILE_NAME);
        if !path.exists() {
            std::fs::write(&path, "[]")?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn list(&self) -> Result<Vec<R>, WorkbenchError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    pub async fn get(&self, key: &str) -> Result<Option<R>, WorkbenchError> {
        let _guard = self.lock.lock().await;
        let items = self.load().await?;
        Ok(items.into_iter().find(|item| item.key() == key))
    }

    /// Replaces the record with the same key in place, or appends it.
    pub async fn upsert(&self, mut record: R) -> Result<R, WorkbenchError> {
        record.prepare()?;

        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        match items.iter().position(|item| item.key() == record.key()) {
            Some(idx) => items[idx] = record.clone(),
            None => items.push(record.clone()),
        }
        self.save(&items).await?;

        log::debug!("{} {:?} saved to {:?}", R::KIND, record.key(), self.path);
        Ok(record)
    }

    /// Returns `false` when no record had the key.
    pub async fn delete(&self, key: &str) -> Result<bool, WorkbenchError> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let initial_len = items.len();
        items.retain(|item| item.key() != key);

        if items.len() == initial_len {
            return Ok(false);
        }
        self.save(&items).await?;
        Ok(true)
    }

    async fn load(&self) -> Result<Vec<R>, WorkbenchError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| {
            WorkbenchError::StorageError(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, items: &[R]) -> Result<(), WorkbenchError> {
        let content = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

/// All record stores of one process, opened once at startup.
#[derive(Clone)]
pub struct Stores {
    pub templates: Arc<JsonStore<PromptTemplate>>,
    pub tools: Arc<JsonStore<Tool>>,
    pub workflows: Arc<JsonStore<Workflow>>,
    pub datasets: Arc<JsonStore<Dataset>>,
    pub evaluators: Arc<JsonStore<Evaluator>>,
    pub eval_jobs: Arc<JsonStore<EvalJob>>,
}

impl Stores {
    pub fn open(dir: &Path) -> Result<Self, WorkbenchError> {
        Ok(Self {
            templates: Arc::new(JsonStore::open(dir)?),
            tools: Arc::new(JsonStore::open(dir)?),
            workflows: Arc::new(JsonStore::open(dir)?),
            datasets: Arc::new(JsonStore::open(dir)?),
            evaluators: Arc::new(JsonStore::open(dir)?),
            eval_jobs: Arc::new(JsonStore::open(dir)?),
        })
    }
}
