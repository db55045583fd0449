use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::errors::WorkbenchError;
use crate::gateway::Gateway;
use crate::handlers::{playground, records};
use crate::models::records::{Dataset, EvalJob, Evaluator, PromptTemplate, Tool, Workflow};
use crate::store::Stores;

pub fn create_app(
    gateway: Arc<Gateway>,
    stores: Stores,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(
            web::JsonConfig::default()
                .error_handler(|err, _req| WorkbenchError::from(err).into()),
        )
        .app_data(Data::from(gateway))
        .app_data(Data::from(stores.templates))
        .app_data(Data::from(stores.tools))
        .app_data(Data::from(stores.workflows))
        .app_data(Data::from(stores.datasets))
        .app_data(Data::from(stores.evaluators))
        .app_data(Data::from(stores.eval_jobs))
        .service(
            web::scope("/api")
                .route("/models", web::get().to(playground::models))
                .route("/health", web::get().to(playground::health))
                .route("/chat", web::post().to(playground::chat))
                .route("/ab-test", web::post().to(playground::ab_test))
                .route(
                    "/prompt-templates",
                    web::get().to(records::list::<PromptTemplate>),
                )
                .route(
                    "/prompt-templates",
                    web::post().to(records::create::<PromptTemplate>),
                )
                .route(
                    "/prompt-templates/{id}",
                    web::delete().to(records::delete::<PromptTemplate>),
                )
                .route("/tools", web::get().to(records::list::<Tool>))
                .route("/tools", web::post().to(records::create::<Tool>))
                .route("/tools/{name}", web::put().to(records::update::<Tool>))
                .route("/tools/{name}", web::delete().to(records::delete::<Tool>))
                .route("/workflows", web::get().to(records::list::<Workflow>))
                .route("/workflows", web::post().to(records::create::<Workflow>))
                .route("/workflows/{id}", web::get().to(records::get::<Workflow>))
                .route("/workflows/{id}", web::put().to(records::update::<Workflow>))
                .route(
                    "/workflows/{id}",
                    web::delete().to(records::delete::<Workflow>),
                )
                .route("/datasets", web::get().to(records::list::<Dataset>))
                .route("/datasets", web::post().to(records::create::<Dataset>))
                .route("/evaluators", web::get().to(records::list_evaluators))
                .route(
                    "/evaluators/custom",
                    web::post().to(records::create::<Evaluator>),
                )
                .route("/eval-jobs", web::get().to(records::list::<EvalJob>))
                .route("/eval-jobs", web::post().to(records::create::<EvalJob>)),
        )
}
