use axum::Router;
use axum::routing::get;
use std::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::configuration::Settings;
use crate::routes::status;

pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        // Required by `tokio::net::TcpListener::from_std`
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();

        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        tracing::info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, router()).await
    }
}

/// Unknown paths and methods fall through to axum's own 404 and 405 answers.
pub fn router() -> Router {
    Router::new()
        .route("/", get(status))
        .layer(TraceLayer::new_for_http())
}
