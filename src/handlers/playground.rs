use actix_web::http::header;
use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, mime};

use crate::errors::WorkbenchError;
use crate::gateway::Gateway;
use crate::models::ab_test::{AbTestReport, AbTestRequest, AbTestResult};
use crate::models::model_list::ModelList;
use crate::models::request::{ChatCompletionCreate, ChatMessage, ChatRequest, UpstreamCall};
use crate::relay::{self, FrameSource};

pub async fn models(gateway: Data<Gateway>) -> HttpResponse {
    let data = gateway.list_models().await;
    HttpResponse::Ok().json(ModelList { data })
}

pub async fn health(gateway: Data<Gateway>) -> HttpResponse {
    HttpResponse::Ok().json(gateway.check_health().await)
}

pub async fn chat(
    gateway: Data<Gateway>,
    request: Json<ChatRequest>,
) -> Result<HttpResponse, WorkbenchError> {
    log::debug!("chat request: {:?}", request.0);

    let result = match request.0.into_upstream_call()? {
        UpstreamCall::Responses(payload) if payload.stream => gateway
            .create_response_stream(payload)
            .await
            .map(event_stream_response),
        UpstreamCall::Responses(payload) => gateway
            .create_response(payload)
            .await
            .map(|body| HttpResponse::Ok().json(body)),
        UpstreamCall::Completions(payload) if payload.stream => gateway
            .chat_completion_stream(payload)
            .await
            .map(event_stream_response),
        UpstreamCall::Completions(payload) => gateway
            .chat_completion(payload)
            .await
            .map(|completion| HttpResponse::Ok().json(completion)),
    };

    result.inspect_err(|e| log::error!("chat error: {:?}", e))
}

fn event_stream_response<S: FrameSource + 'static>(source: S) -> HttpResponse {
    let (sender, body) = relay::frame_channel();
    actix_web::rt::spawn(async move {
        if let Err(e) = relay::relay(source, sender).await {
            log::error!("stream relay error: {:?}", e);
        }
    });

    HttpResponse::Ok()
        .content_type(mime::TEXT_EVENT_STREAM)
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(body)
}

async fn call_model(gateway: &Gateway, model: String, prompt: &str, temperature: f64) -> AbTestResult {
    let request = ChatCompletionCreate::new(
        vec![ChatMessage::user(prompt)],
        model.clone(),
        temperature,
        crate::consts::UNBOUNDED_MAX_TOKENS,
        false,
    );

    match gateway.chat_completion(request).await {
        Ok(completion) => AbTestResult::Success {
            response: completion.first_content().map(str::to_string),
            model,
        },
        Err(e) => {
            log::warn!("ab-test call to {} failed: {}", model, e);
            AbTestResult::Error {
                model,
                error: e.to_string(),
            }
        }
    }
}

/// Runs the prompt against every model concurrently. Results keep the request order.
pub async fn ab_test(gateway: Data<Gateway>, request: Json<AbTestRequest>) -> HttpResponse {
    let AbTestRequest {
        prompt,
        models,
        temperature,
    } = request.into_inner();

    let handles: Vec<_> = models
        .into_iter()
        .map(|model| {
            let gateway = gateway.get_ref().clone();
            let prompt = prompt.clone();
            let task_model = model.clone();
            let handle = tokio::spawn(async move {
                call_model(&gateway, task_model, &prompt, temperature).await
            });
            (model, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (model, handle) in handles {
        results.push(handle.await.unwrap_or_else(|e| AbTestResult::Error {
            model,
            error: e.to_string(),
        }));
    }

    HttpResponse::Ok().json(AbTestReport { results })
}
