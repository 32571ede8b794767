use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use plotly::common::{DashType, Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use crate::sweep::{Algorithm, CellResult};
use crate::Result;

/// Run-averaged convergence of DE (solid purple) and GA (dashed red)
pub fn convergence_plot(cell: &CellResult) -> Plot {
    let de = cell.mean_curve(Algorithm::De);
    let ga = cell.mean_curve(Algorithm::Ga);

    let de_trace = Scatter::new(de.nfc_axis(cell.np), de.into_vec())
        .mode(Mode::Lines)
        .name("DE")
        .line(Line::new().color("purple").width(2.0));
    let ga_trace = Scatter::new(ga.nfc_axis(cell.np), ga.into_vec())
        .mode(Mode::Lines)
        .name("GA")
        .line(Line::new().color("red").width(2.0).dash(DashType::Dash));

    let layout = Layout::new()
        .title(Title::with_text(&format!("{} , Dimension => {}", cell.function, cell.dim)))
        .x_axis(Axis::new().title(Title::with_text("NFCs")))
        .y_axis(Axis::new().title(Title::with_text("Best Fitness Error So Far")));

    let mut plot = Plot::new();
    plot.add_trace(de_trace);
    plot.add_trace(ga_trace);
    plot.set_layout(layout);
    plot
}

/// Write `convergence_{function}_{D}.html`
pub fn write_convergence_plot(cell: &CellResult, output_dir: &Path) -> Result<PathBuf> {
    create_dir_all(output_dir)?;
    let path = output_dir.join(format!("convergence_{}_{}.html", cell.function, cell.dim));
    convergence_plot(cell).write_html(&path);
    Ok(path)
}
