pub mod convert;
pub mod currencies;
pub mod help;

use tracing::error;

use crate::services::conversion_service::ConversionController;

/// Outcome of one input line: keep prompting or exit
pub enum LoopAction {
    Continue,
    Quit,
}

/// Dispatch one stdin line.
///
/// A bare line whose first token parses as a number is forwarded to the
/// convert handler, the same way the original UI forwarded Enter on the
/// amount field to the submit control.
pub async fn handle_line(controller: &mut ConversionController, line: &str) -> LoopAction {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return LoopAction::Continue;
    }

    let command = parts[0];
    let args = &parts[1..];

    let result = match command {
        "convert" | "convertir" | "c" => convert::execute(controller, args).await,
        "currencies" | "monedas" => {
            currencies::execute();
            Ok(())
        }
        "help" | "ayuda" | "?" => {
            help::execute();
            Ok(())
        }
        "quit" | "exit" | "salir" => return LoopAction::Quit,
        _ if command.parse::<f64>().is_ok() => convert::execute(controller, &parts).await,
        _ => {
            println!(
                "Comando desconocido: '{}'. Escriba `help` para ver los comandos.",
                command
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        if e.is_preflight() {
            // Friendly validation message, shown as-is
            println!("{}", e);
        } else {
            error!("Error en la conversión: {}", e);
            println!("Ocurrió un error: {}", e);
        }
    }

    LoopAction::Continue
}
