//! Discount gRPC Server

use std::{future, net::SocketAddr, process};

use tonic::transport::Server;
use tracing::{error, info};

use discount_app::{context::AppContext, logging, shutdown};

use crate::{
    config::ServerConfig, discount::DiscountService,
    proto::discount_proto_service_server::DiscountProtoServiceServer,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod discount;
mod errors;
mod proto;

/// Discount gRPC Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(e) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {e}");
        }

        process::exit(1);
    }

    let addr: SocketAddr = match config.socket_addr().parse() {
        Ok(addr) => addr,
        Err(parse_error) => {
            error!("invalid listen address {}: {parse_error}", config.socket_addr());

            process::exit(1);
        }
    };

    let app = match AppContext::from_database_config(&config.database).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    info!("Starting gRPC server on {addr}");

    let shutdown_signal = async {
        if let Err(error) = shutdown::listen().await {
            error!("failed to listen for shutdown signal: {error}");

            future::pending::<()>().await;
        }
    };

    let result = Server::builder()
        .add_service(DiscountProtoServiceServer::new(DiscountService::new(
            app.coupons,
        )))
        .serve_with_shutdown(addr, shutdown_signal)
        .await;

    if let Err(serve_error) = result {
        error!("gRPC server failed: {serve_error}");

        process::exit(1);
    }
}
