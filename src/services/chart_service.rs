use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::mindicador::IndicatorObservation;
use crate::models::RatePoint;
use crate::utils::format::format_date;

/// How many of the newest observations get charted
pub const HISTORY_DAYS: usize = 10;

const CHART_WIDTH: u32 = 1024;
const CHART_HEIGHT: u32 = 768;

/// Line color matching the original palette
const LINE_COLOR: RGBColor = RGBColor(75, 192, 192);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("No se pudo dibujar el gráfico: {0}")]
    Draw(String),

    #[error("No se pudo escribir el archivo del gráfico: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to the single live chart file.
///
/// At most one exists per controller. Disposing it removes the file so a
/// re-render never leaves a stale chart behind.
#[derive(Debug)]
pub struct ChartHandle {
    path: PathBuf,
}

impl ChartHandle {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the rendered file. A missing file is fine since the handle may
    /// outlive a file the user already deleted.
    pub fn dispose(self) {
        match fs::remove_file(&self.path) {
            Ok(_) => debug!("Gráfico anterior eliminado: {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("No se pudo eliminar {}: {}", self.path.display(), e),
        }
    }
}

/// Take the newest `max` observations and put them in chronological order
pub fn prepare_history(serie: &[IndicatorObservation], max: usize) -> Vec<RatePoint> {
    let mut points: Vec<RatePoint> = serie
        .iter()
        .take(max)
        .map(|obs| RatePoint {
            date: obs.fecha.date_naive(),
            value: obs.valor,
        })
        .collect();
    points.reverse();
    points
}

/// Render the exchange-rate history as a single-series line chart PNG.
///
/// The x axis carries the observation dates ("Fecha"), the y axis the rate in
/// CLP ("Valor en CLP"), with the series legend drawn at the top. Needs at
/// least two points; the caller skips the chart for shorter series.
pub fn render_history(
    points: &[RatePoint],
    display_code: &str,
    path: &Path,
) -> Result<ChartHandle, ChartError> {
    if points.len() < 2 {
        return Err(ChartError::Draw(format!(
            "se requieren al menos 2 puntos, hay {}",
            points.len()
        )));
    }

    let min_value = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max_value = points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);

    // Pad the value range so a flat series still gets a visible axis
    let value_range = (max_value - min_value).max(1e-8);
    let padding = value_range * 0.1;
    let y_min = (min_value - padding).max(0.0);
    let y_max = max_value + padding;

    let x_min = points[0].date;
    let x_max = points[points.len() - 1].date;

    {
        let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Draw(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| ChartError::Draw(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("Fecha")
            .y_desc("Valor en CLP")
            .x_labels(points.len())
            .x_label_formatter(&|d| format_date(*d))
            .draw()
            .map_err(|e| ChartError::Draw(e.to_string()))?;

        let series_label = format!("Valor {} (Últimos {} días)", display_code, points.len());
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.date, p.value)),
                &LINE_COLOR,
            ))
            .map_err(|e| ChartError::Draw(e.to_string()))?
            .label(series_label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperMiddle)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| ChartError::Draw(e.to_string()))?;

        root.present()
            .map_err(|e| ChartError::Draw(e.to_string()))?;
    }

    debug!("Gráfico renderizado en {}", path.display());
    Ok(ChartHandle::new(path.to_path_buf()))
}
