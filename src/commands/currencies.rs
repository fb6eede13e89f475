use crate::models::currency::supported_currencies;
use crate::utils::Table;

/// `currencies` — list the supported target currencies
pub fn execute() {
    let mut table = Table::new(vec!["Código", "Moneda", "ISO", "Locale"]);
    for spec in supported_currencies() {
        table.add_row(vec![spec.api_code, spec.name, spec.display_code, spec.locale]);
    }

    println!("Monedas disponibles (monto base siempre en CLP):");
    print!("{}", table.render());
}
