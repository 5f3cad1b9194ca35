//! Calcd Server - dual-protocol entrypoint
//!
//! Serves the JSON API and the gRPC surface concurrently from one
//! composed dependency graph, and tears both down on ctrl-c.

use calcd_adapters::config::AppConfig;
use calcd_proto::CalculatorServiceServer;
use calcd_server::api_router::create_api_router;
use calcd_server::bootstrap::{
    init_tracing, initialize_server, log_config_summary, shutdown_server,
};
use calcd_server::grpc::CalculatorGrpcService;
use std::net::SocketAddr;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    info!("🚀 Starting calcd server");

    let components = initialize_server(config).await.map_err(|e| {
        error!("❌ Failed to initialize server: {}", e);
        e
    })?;
    log_config_summary(&components.config);

    let host = components.config.server.host.clone();
    let http_addr = format!("{}:{}", host, components.config.server.http_port);
    let grpc_addr: SocketAddr = format!("{}:{}", host, components.config.server.grpc_port).parse()?;

    let app = create_api_router(&components);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    info!("✅ HTTP server listening on http://{}", http_addr);

    let grpc_service = CalculatorGrpcService::new(components.usecase.clone());
    let grpc_server = tonic::transport::Server::builder()
        .add_service(CalculatorServiceServer::new(grpc_service))
        .serve(grpc_addr);
    info!("✅ gRPC server listening on {}", grpc_addr);

    // Both listeners run until one fails or the process is signalled.
    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                error!("❌ HTTP server error: {}", e);
            }
        }
        result = grpc_server => {
            if let Err(e) = result {
                error!("❌ gRPC server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("🛑 Received ctrl-c, initiating graceful shutdown");
        }
    }

    shutdown_server(components).await;
    info!("✅ Server shutdown complete");
    Ok(())
}
