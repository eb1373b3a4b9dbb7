//! Server setup and lifecycle management

use crate::adapters::http::{build_router, AppState};
use crate::config::ServiceConfig;
use crate::core::directory::ActivityDirectory;
use crate::domain::ports::ActivityStore;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct Server {
    config: ServiceConfig,
    directory: ActivityDirectory,
}

impl Server {
    /// Validate the config and build the directory from its seed
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;

        let directory =
            ActivityDirectory::from_seed(config.activities.clone(), config.enforce_capacity())?;

        Ok(Self { config, directory })
    }

    pub fn router(&self) -> Router {
        build_router(AppState::new(Arc::new(self.directory.clone())))
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM
    pub async fn run(self) -> Result<()> {
        let addr = self.config.listen_addr()?;
        let listener = TcpListener::bind(addr).await?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();

        tracing::info!("Activity signup API listening on {}", listener.local_addr()?);
        tracing::info!(
            activities = self.directory.len(),
            enforce_capacity = self.directory.enforces_capacity(),
            "Directory seeded"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Activity signup API shutting down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
