mod config;

mod app;
mod auth;
mod ctx;
mod errors;
mod notes;
mod password;
mod state;
mod store;
mod token;

use std::net::SocketAddr;

pub use config::config;
pub use errors::{Error, Result};
pub use store::Db;

use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{self, TraceLayer},
};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> errors::Result<()> {
    let config = config();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false),
        )
        .try_init()
        .ok();

    let app = app::create_app(Db::default());

    let app = app.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(trace::DefaultMakeSpan::new().include_headers(false))
                    .on_request(trace::DefaultOnRequest::new())
                    .on_response(trace::DefaultOnResponse::new().include_headers(false))
                    .on_failure(trace::DefaultOnFailure::new()),
            ),
    );

    let port = config.port;
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await.unwrap();

    tracing::info!("listening on http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .unwrap();

    Ok(())
}
