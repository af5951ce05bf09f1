// File: crates/trends-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the fixture figure (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use trends_core::{shape, ChartConfig, LineFigure, RenderOptions, SeriesBuilder};

fn render_bytes() -> Vec<u8> {
    let text = std::fs::read_to_string(
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/figure2.csv"),
    )
    .expect("read fixture");
    let data = shape(&text, true, &SeriesBuilder::default()).expect("shape fixture");

    let mut fig = LineFigure::new(ChartConfig::default()).with_categories(data.categories);
    for s in data.series {
        fig.add_series(s);
    }

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() }; // avoid text nondeterminism across platforms
    fig.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_figure() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("figure2.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn render_is_deterministic() {
    assert_eq!(render_bytes(), render_bytes());
}
