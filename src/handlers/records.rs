use actix_web::HttpResponse;
use actix_web::web::{Data, Json, Path};
use serde_json::json;

use crate::errors::WorkbenchError;
use crate::evaluators;
use crate::models::records::Evaluator;
use crate::store::{JsonStore, Record};

fn not_found<R: Record>() -> WorkbenchError {
    WorkbenchError::NotFound(format!("{} not found", R::KIND))
}

pub async fn list<R: Record>(store: Data<JsonStore<R>>) -> Result<HttpResponse, WorkbenchError> {
    Ok(HttpResponse::Ok().json(store.list().await?))
}

pub async fn create<R: Record>(
    store: Data<JsonStore<R>>,
    record: Json<R>,
) -> Result<HttpResponse, WorkbenchError> {
    Ok(HttpResponse::Ok().json(store.upsert(record.into_inner()).await?))
}

pub async fn get<R: Record>(
    store: Data<JsonStore<R>>,
    key: Path<String>,
) -> Result<HttpResponse, WorkbenchError> {
    match store.get(&key).await? {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(not_found::<R>()),
    }
}

/// The key in the path must match the key in the body.
pub async fn update<R: Record>(
    store: Data<JsonStore<R>>,
    key: Path<String>,
    record: Json<R>,
) -> Result<HttpResponse, WorkbenchError> {
    let record = record.into_inner();
    if record.key() != key.as_str() {
        return Err(WorkbenchError::ValidationError(format!(
            "{} {} mismatch",
            R::KIND,
            R::KEY_FIELD
        )));
    }
    Ok(HttpResponse::Ok().json(store.upsert(record).await?))
}

pub async fn delete<R: Record>(
    store: Data<JsonStore<R>>,
    key: Path<String>,
) -> Result<HttpResponse, WorkbenchError> {
    if !store.delete(&key).await? {
        return Err(not_found::<R>());
    }
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

pub async fn list_evaluators(
    store: Data<JsonStore<Evaluator>>,
) -> Result<HttpResponse, WorkbenchError> {
    let builtin: Vec<_> = evaluators::builtin_names()
        .into_iter()
        .map(|name| json!({ "name": name, "type": "builtin" }))
        .collect();
    let custom = store.list().await?;

    Ok(HttpResponse::Ok().json(json!({ "builtin": builtin, "custom": custom })))
}
