/// `help` — print command usage
pub fn execute() {
    println!("Comandos disponibles:");
    println!("  convert <monto> <moneda>   Convierte un monto en CLP (ej: convert 10000 dolar)");
    println!("  <monto> <moneda>           Atajo: una línea que empieza con un número se convierte");
    println!("  currencies                 Lista las monedas disponibles");
    println!("  help                       Muestra esta ayuda");
    println!("  quit                       Sale del programa");
    println!();
    println!("El resultado incluye un gráfico PNG con los últimos 10 días del indicador.");
}
