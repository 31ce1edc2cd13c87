pub mod modules;
pub use modules::auth;
pub use modules::faq;
pub mod api;
pub mod health;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::faq::adapter::outgoing::{FaqQueryPostgres, FaqRepositoryPostgres};
use crate::faq::application::faq_use_cases::FaqUseCases;
use crate::faq::application::services::{
    DeleteTopicDetailService, DeleteTopicService, ListTopicDetailsService, ListTopicsService,
    SaveTopicDetailService, SaveTopicService,
};
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub faq: FaqUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_dotenv();
    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    let server_url = config.server_url();
    info!(%server_url, "Server run on");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(config.db_sqlx_logging);

    let conn = Database::connect(opt).await?;
    let db_arc = Arc::new(conn);

    // Repositories and use cases
    let faq_repo = FaqRepositoryPostgres::new(Arc::clone(&db_arc));
    let faq_query = FaqQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        faq: FaqUseCases {
            list_topics: Arc::new(ListTopicsService::new(faq_query.clone())),
            save_topic: Arc::new(SaveTopicService::new(faq_repo.clone())),
            delete_topic: Arc::new(DeleteTopicService::new(faq_repo.clone())),
            list_details: Arc::new(ListTopicDetailsService::new(faq_query)),
            save_detail: Arc::new(SaveTopicDetailService::new(faq_repo.clone())),
            delete_detail: Arc::new(DeleteTopicDetailService::new(faq_repo)),
        },
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::faq::adapter::incoming::web::routes::list_topics_handler);
    cfg.service(crate::faq::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::faq::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::faq::adapter::incoming::web::routes::delete_topic_handler);
    // Topic details
    cfg.service(crate::faq::adapter::incoming::web::routes::list_topic_details_handler);
    cfg.service(crate::faq::adapter::incoming::web::routes::create_topic_detail_handler);
    cfg.service(crate::faq::adapter::incoming::web::routes::update_topic_detail_handler);
    cfg.service(crate::faq::adapter::incoming::web::routes::delete_topic_detail_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
