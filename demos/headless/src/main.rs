//! headless — drives the full flowviz pipeline without a browser or a real
//! map engine.
//!
//! A flat equirectangular mock stands in for the slippy map, a counting
//! surface stands in for the canvas, and a fixed-step clock stands in for
//! the frame scheduler.  The story controller auto-plays through all four
//! chapters (wrapping once), then the demo prints per-flow state and draw
//! statistics.

mod dataset;

use std::time::Instant;

use anyhow::{Context, Result};

use fv_core::{CameraRequest, CameraState, Color, GeoPoint, MapControl, PhaseRng, ScreenPoint};
use fv_render::{BlendMode, DrawSurface, FlowViz, LabelOverlay};
use fv_story::{Chapter, ChapterStats, StoryController, StoryObserver, StorySettings};

use dataset::build_dataset;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:     u64 = 42;
const FRAME_MS: u64 = 33; // ~30 fps
const MAX_FRAMES: u64 = 3_000;

/// Dwell time per chapter, shortened from the production 6 s so the demo
/// finishes quickly.
const AUTO_PLAY_DELAY_MS: u64 = 1_500;

// ── Chapter script ────────────────────────────────────────────────────────────

const CHAPTERS_JSON: &str = r#"[
  {
    "id": "intro",
    "title": "La región del Biobío",
    "description": "Seis comunas, tres destinos finales.",
    "camera": { "center": { "lng": -72.8, "lat": -37.1 }, "zoom": 8.0, "bearing": 0.0, "pitch": 0.0 },
    "animation": "fly",
    "duration_ms": 2000,
    "stats": { "total_tons": 241000.0, "municipality_count": 6, "landfill_count": 3 }
  },
  {
    "id": "gran-concepcion",
    "title": "El Gran Concepción",
    "description": "La mayor parte del volumen viaja a Fundo Las Cruces.",
    "camera": { "center": { "lng": -72.95, "lat": -36.88 }, "zoom": 10.5, "bearing": 0.0, "pitch": 30.0 },
    "animation": "ease",
    "duration_ms": 2500,
    "directive": { "landfills": ["Fundo Las Cruces"] },
    "stats": { "total_tons": 165000.0, "landfill_count": 1, "highlight": "El 68% del volumen regional" }
  },
  {
    "id": "retorno",
    "title": "Flujos de retorno",
    "description": "El material reciclado vuelve a dos comunas.",
    "camera": { "center": { "lng": -72.95, "lat": -36.93 }, "zoom": 9.5, "bearing": 15.0, "pitch": 0.0 },
    "animation": "fly",
    "duration_ms": 2000,
    "directive": { "municipalities": ["Concepción", "Coronel"] },
    "stats": { "recycled_tons": 5300.0, "highlight": "Solo dos comunas reciclan" }
  },
  {
    "id": "pausa",
    "title": "Una foto fija",
    "description": "El mapa completo, congelado.",
    "camera": { "center": { "lng": -72.8, "lat": -37.1 }, "zoom": 8.5, "bearing": 0.0, "pitch": 0.0 },
    "animation": "ease",
    "duration_ms": 1500,
    "directive": { "pause": true },
    "stats": { "municipality_count": 6, "landfill_count": 3 }
  }
]"#;

// ── Mock map engine ───────────────────────────────────────────────────────────

/// Equirectangular projection around the camera center, scaled by zoom.
/// Crude, but it moves when the camera moves, which is all the pipeline
/// needs.
struct FlatMap {
    camera: CameraState,
}

impl MapControl for FlatMap {
    fn project(&self, point: GeoPoint) -> ScreenPoint {
        let scale = 256.0 * 2.0_f64.powf(self.camera.zoom) / 360.0;
        ScreenPoint::new(
            (point.lng - self.camera.center.lng) * scale,
            (self.camera.center.lat - point.lat) * scale,
        )
    }

    fn camera(&self) -> CameraState {
        self.camera
    }

    // No animation timeline headlessly: transitions land instantly and the
    // controller's deadline clock provides the pacing.
    fn fly_to(&mut self, request: &CameraRequest) {
        self.camera = request.target();
    }

    fn ease_to(&mut self, request: &CameraRequest) {
        self.camera = request.target();
    }

    fn jump_to(&mut self, request: &CameraRequest) {
        self.camera = request.target();
    }
}

// ── Counting surface and overlay ──────────────────────────────────────────────

#[derive(Default)]
struct CountingSurface {
    strokes: usize,
    discs:   usize,
    frames:  usize,
}

impl DrawSurface for CountingSurface {
    fn sync_size(&mut self) -> (u32, u32) {
        (1280, 720)
    }

    fn clear(&mut self) {
        self.frames += 1;
    }

    fn set_blend(&mut self, _mode: BlendMode) {}
    fn set_alpha(&mut self, _alpha: f64) {}
    fn set_glow(&mut self, _color: Color, _blur: f64) {}
    fn clear_glow(&mut self) {}

    fn stroke_path(&mut self, _points: &[ScreenPoint], _color: Color, _width: f64) {
        self.strokes += 1;
    }

    fn fill_disc(&mut self, _center: ScreenPoint, _radius: f64, _color: Color) {
        self.discs += 1;
    }
}

#[derive(Default)]
struct CountingOverlay {
    placements: usize,
}

impl LabelOverlay for CountingOverlay {
    fn clear(&mut self) {}

    fn place_landfill(&mut self, _name: &str, _position: ScreenPoint) {
        self.placements += 1;
    }

    fn place_municipality(&mut self, _name: &str, _position: ScreenPoint, _selected: bool) {
        self.placements += 1;
    }
}

// ── Panel observer ────────────────────────────────────────────────────────────

#[derive(Default)]
struct ConsolePanel {
    chapters_entered: usize,
}

impl StoryObserver for ConsolePanel {
    fn on_chapter_changed(&mut self, index: usize, chapter: &Chapter) {
        self.chapters_entered += 1;
        println!("▶ [{}] {} — {}", index, chapter.title, chapter.description);
    }

    fn on_stats(&mut self, stats: Option<&ChapterStats>) {
        let Some(stats) = stats else { return };
        if let Some(tons) = stats.total_tons {
            println!("    {tons:.0} t/año transportadas");
        }
        if let Some(tons) = stats.recycled_tons {
            println!("    {tons:.0} t/año recicladas");
        }
        if let Some(text) = &stats.highlight {
            println!("    «{text}»");
        }
    }

    fn on_auto_play(&mut self, enabled: bool) {
        println!("  auto-play {}", if enabled { "on" } else { "off" });
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== headless — flowviz without a browser ===");
    println!();

    // 1. Dataset and visualization context.
    let dataset = build_dataset();
    println!(
        "Dataset: {} rows, {} landfills",
        dataset.rows.len(),
        dataset.landfills().count()
    );

    let map = FlatMap {
        camera: CameraState::new(GeoPoint::new(-72.8, -37.1), 8.0),
    };
    let mut viz = FlowViz::new(
        map,
        CountingSurface::default(),
        CountingOverlay::default(),
        dataset,
        PhaseRng::seeded(SEED),
    );

    // 2. Story script and controller.
    let chapters: Vec<Chapter> =
        serde_json::from_str(CHAPTERS_JSON).context("parsing chapter script")?;
    let chapter_count = chapters.len();
    println!("Story: {chapter_count} chapters");
    println!();

    let settings = StorySettings {
        auto_play_delay_ms: AUTO_PLAY_DELAY_MS,
        ..StorySettings::default()
    };
    let mut ctl = StoryController::new(chapters, settings)?;
    let mut panel = ConsolePanel::default();

    // 3. Enter the first chapter and switch auto-play on.
    ctl.start(0, &mut viz, &mut panel);
    ctl.toggle_auto_play(0, &mut panel);

    // 4. Fixed-step frame loop until the story wraps back past the first
    //    chapter once.
    let t0 = Instant::now();
    let mut now_ms = 0;
    let mut frames = 0;
    while panel.chapters_entered <= chapter_count && frames < MAX_FRAMES {
        now_ms += FRAME_MS;
        frames += 1;
        viz.render_frame();
        ctl.tick(now_ms, &mut viz, &mut panel);
    }
    let elapsed = t0.elapsed();
    println!();

    // 5. Summary.
    let stats = viz.perf_stats();
    println!(
        "Rendered {frames} frames ({:.0} simulated seconds) in {:.3} s",
        now_ms as f64 / 1_000.0,
        elapsed.as_secs_f64()
    );
    println!(
        "  flows: {}  cached projections: {}",
        stats.flow_count, stats.cache_size
    );

    println!();
    println!("{:<24} {:<6} {:<12} {:<8}", "Flow", "Tier", "Tons/yr", "Phase");
    println!("{}", "-".repeat(54));
    for flow in viz.flows() {
        println!(
            "{:<24} {:<6} {:<12.0} {:<8.3}",
            flow.id.to_string(),
            flow.tier.as_u8(),
            flow.volume,
            flow.phase,
        );
    }

    Ok(())
}
