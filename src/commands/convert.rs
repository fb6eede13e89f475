use tracing::debug;

use crate::services::conversion_service::ConversionController;
use crate::utils::errors::ConversionError;
use crate::utils::format;

/// `convert <monto> <moneda>` — one full submission
pub async fn execute(
    controller: &mut ConversionController,
    args: &[&str],
) -> Result<(), ConversionError> {
    let raw_amount = args.first().copied().unwrap_or("");
    let raw_currency = args.get(1).copied().unwrap_or("");

    match controller.submit(raw_amount, raw_currency).await? {
        Some(outcome) => {
            println!("Resultado: {}", outcome.result.formatted);
            println!(
                "Tasa actual ({}): 1 {} = {} CLP",
                outcome.request.currency.name,
                outcome.result.display_code,
                format::format_es_cl(outcome.rate, 2)
            );
            match &outcome.chart_path {
                Some(path) => println!("Gráfico histórico guardado en: {}", path.display()),
                None => println!("Sin datos suficientes para el gráfico."),
            }
        }
        None => debug!("Conversión reemplazada por un envío más reciente"),
    }

    Ok(())
}
