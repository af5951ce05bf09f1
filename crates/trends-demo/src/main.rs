// File: crates/trends-demo/src/main.rs
// Summary: Demo loads settings, fetches the figure data once, and writes a PNG and a JSON bundle.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trends_core::{
    theme, ChartBundle, Loader, LineFigure, RenderGate, RenderOptions, Settings, SourceFetcher,
};

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive("info".parse().expect("invalid filter"))
                .from_env_lossy(),
        )
        .try_init();

    // Optional settings path from CLI; otherwise ./trends.toml if present, then TRENDS_* env.
    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref())
        .with_context(|| match &settings_path {
            Some(p) => format!("failed to load settings '{}'", p.display()),
            None => "failed to load settings".to_string(),
        })?;

    let source = settings.source.data_source();
    info!(location = %source.location(), remote = source.is_remote(), "loading figure data");

    let fetcher = SourceFetcher::new(settings.source.timeout()).context("building HTTP client")?;
    let mut loader = Loader::new(fetcher, source, settings.series.builder())
        .with_transpose(settings.source.transpose);

    // The loader logs the failure; the figure simply stays unrendered.
    let data = match loader.load() {
        Ok(data) => data.clone(),
        Err(e) => {
            warn!("figure not rendered: {e}");
            println!("No chart rendered (see log).");
            return Ok(());
        }
    };
    println!("Loaded {} series over {} categories", data.series.len(), data.categories.len());

    let out_dir = Path::new(&settings.render.output_dir);
    let bundle = ChartBundle::new(settings.chart.clone(), data);
    let out_json = out_dir.join("figure.json");
    bundle.write_json(&out_json)?;
    println!("Wrote {}", out_json.display());

    let opts = RenderOptions {
        width: settings.render.width,
        height: settings.render.height,
        theme: theme::find(&settings.render.theme),
        draw_labels: settings.render.draw_labels,
        ..RenderOptions::default()
    };
    let fig = LineFigure::from_bundle(bundle);
    let out_png = out_dir.join("figure.png");

    // Headless: the output being requested counts as the figure becoming visible.
    let mut gate = RenderGate::new(settings.render.settle_delay());
    if let Some(rendered) = gate.on_visible(|| fig.render_to_png(&opts, &out_png)) {
        rendered.with_context(|| format!("rendering {}", out_png.display()))?;
        println!("Wrote {}", out_png.display());
    }

    Ok(())
}
