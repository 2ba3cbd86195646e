//! Student Cafe service launcher
//!
//! One binary, two services. Pick one with a mode flag:
//!
//! ```text
//! student_cafe --catalog [--env dev] [--port 8080]
//! student_cafe --order   [--env dev] [--port 8081]
//! ```
//!
//! ```text
//! catalog :8080 ──register──▶ registry ◀──register── order :8081
//!                                 ▲                        │
//!                                 └───────resolve──────────┘
//! ```

use anyhow::{Context, bail};

use student_cafe::config::AppConfig;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn use_catalog_mode() -> bool {
    std::env::args().any(|a| a == "--catalog")
}

fn use_order_mode() -> bool {
    std::env::args().any(|a| a == "--order")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let catalog_mode = use_catalog_mode();
    let order_mode = use_order_mode();
    if catalog_mode == order_mode {
        bail!("exactly one of --catalog or --order is required");
    }

    let env = get_env();
    let app_config = AppConfig::load(&env).context("Failed to load configuration")?;

    let mut service = if catalog_mode {
        app_config.catalog.clone()
    } else {
        app_config.order.clone()
    };
    if let Some(port) = get_port_override() {
        service.port = port;
    }

    let _log_guard = student_cafe::logging::init_logging(&app_config, &service.name);
    tracing::info!(
        service = %service.name,
        version = env!("CARGO_PKG_VERSION"),
        git = env!("GIT_HASH"),
        "Starting in {} mode",
        env
    );

    if catalog_mode {
        student_cafe::catalog::run_server(&app_config, &service).await
    } else {
        student_cafe::order::run_server(&app_config, &service).await
    }
}
