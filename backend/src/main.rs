//! Service entry-point: wires the HTTP adapter to a persistence gateway.
//!
//! Configuration comes from the environment: `BIND_ADDR` (default
//! `0.0.0.0:8080`), `DATABASE_URL` (PostgreSQL; when unset the service
//! keeps records in process memory and says so in the logs), and
//! `RUST_LOG` for filtering.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use userinfo::ApiDoc;
use userinfo::domain::UserService;
use userinfo::domain::ports::{InMemoryUserRepository, UserRecords, UserRepository};
use userinfo::inbound::http::health::HealthState;
use userinfo::inbound::http::{self, HttpState};
use userinfo::middleware::RequestTrace;
use userinfo::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let repository = make_repository().await.map_err(std::io::Error::other)?;
    let records: Arc<dyn UserRecords> = Arc::new(UserService::new(repository));
    let state = HttpState::new(records);

    let health = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flip below is observed.
    let server_health = health.clone();

    #[cfg(feature = "metrics")]
    let prometheus = make_metrics();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(server_health.clone())
            .wrap(RequestTrace)
            .configure(http::configure);

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .bind(bind_addr)?;

    health.mark_ready();
    server.run().await
}

/// Choose the persistence gateway from the environment.
async fn make_repository() -> Result<Arc<dyn UserRepository>, String> {
    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|e| format!("database pool setup failed: {e}"))?;
            Ok(Arc::new(DieselUserRepository::new(pool)))
        }
        Err(_) => {
            warn!("DATABASE_URL is not set; keeping user records in process memory");
            Ok(Arc::new(InMemoryUserRepository::default()))
        }
    }
}

#[cfg(feature = "metrics")]
fn make_metrics() -> actix_web_prom::PrometheusMetrics {
    PrometheusMetricsBuilder::new("userinfo")
        .endpoint("/metrics")
        .build()
        .expect("configure Prometheus metrics")
}
