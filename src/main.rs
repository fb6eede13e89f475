use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod utils;

use api::mindicador::MindicadorClient;
use commands::LoopAction;
use services::conversion_service::ConversionController;

const DEFAULT_CHART_FILE: &str = "grafico_cambio.png";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("cambio_clp=info".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("💱 Iniciando conversor CLP...");

    let api = match std::env::var("MINDICADOR_API_URL") {
        Ok(url) => {
            info!("Usando API en {}", url);
            MindicadorClient::with_base_url(url)
        }
        Err(_) => MindicadorClient::new(),
    };

    let chart_file = std::env::var("CAMBIO_CHART_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CHART_FILE));
    info!("Gráficos en {}", chart_file.display());

    let mut controller = ConversionController::new(api, chart_file);

    println!("Conversor de pesos chilenos (CLP). Escriba `help` para ver los comandos.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        if std::io::stdout().flush().is_err() {
            break;
        }

        match lines.next_line().await {
            Ok(Some(line)) => match commands::handle_line(&mut controller, &line).await {
                LoopAction::Continue => {}
                LoopAction::Quit => break,
            },
            Ok(None) => break,
            Err(e) => {
                error!("Error leyendo la entrada: {}", e);
                break;
            }
        }
    }

    info!("Conversor finalizado");
}
