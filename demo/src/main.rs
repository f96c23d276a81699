//! Renders tab switches of a [`CurvedTabBar`] to a PNG sequence.
//!
//! ```sh
//! curvebar-demo --tap notifications --tap search --out frames
//! ```

mod content;
mod logging;

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use color_eyre::{
    config::HookBuilder,
    eyre::{Result, WrapErr, eyre},
};
use curvebar::{ColorScheme, TabButton, prelude::*};
use curvebar_skia::{Renderer, encode_png};

/// Upper bound on frames rendered per tap when waiting for the bar to settle.
const MAX_SETTLE_SECONDS: u32 = 5;

static HOST: HostSetup = HostSetup::new();

#[derive(Parser, Debug)]
#[command(name = "curvebar-demo")]
#[command(about = "Render a curved tab bar switching tabs", long_about = None)]
#[command(version)]
struct Args {
    /// Screen width in points
    #[arg(long, default_value_t = 390)]
    width: u32,

    /// Screen height in points
    #[arg(long, default_value_t = 844)]
    height: u32,

    /// Bottom safe-area inset; omit to render the preview layout
    #[arg(long)]
    safe_bottom: Option<f32>,

    /// TOML file overriding the default style
    #[arg(long)]
    style: Option<PathBuf>,

    /// Tabs to tap, in order (by title or icon name)
    #[arg(long)]
    tap: Vec<Tab>,

    /// Animation frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Frames to render after each tap; defaults to rendering until settled
    #[arg(long)]
    frames_per_tap: Option<u32>,

    /// Output directory for the PNG frames
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Host shell for a windowless run. There is no platform bar to hide, so
/// the switches only show up in the log.
#[derive(Debug)]
struct HeadlessShell;

impl HostShell for HeadlessShell {
    fn set_system_tab_bar_hidden(&mut self, hidden: bool) {
        tracing::info!(hidden, "system tab bar");
    }

    fn set_color_scheme(&mut self, scheme: ColorScheme) {
        tracing::info!(?scheme, "color scheme");
    }
}

/// Numbered PNG writer.
struct Recorder {
    dir: PathBuf,
    renderer: Renderer,
    width: u32,
    height: u32,
    frames: usize,
}

impl Recorder {
    fn new(dir: PathBuf, renderer: Renderer, width: u32, height: u32) -> Result<Self> {
        fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
        Ok(Self {
            dir,
            renderer,
            width,
            height,
            frames: 0,
        })
    }

    fn capture(&mut self, bar: &CurvedTabBar<Tab>) -> Result<()> {
        let scene = bar
            .scene()
            .ok_or_else(|| eyre!("tab bar has not been laid out"))?;
        let background = content::screen(scene.selected, self.width, self.height)?;
        let frame = self.renderer.render(&scene, &background)?;

        let path = self.dir.join(format!("frame_{:04}.png", self.frames));
        fs::write(&path, encode_png(&frame)?)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote frame");
        self.frames += 1;
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (_, eyre_hook) = HookBuilder::default()
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    logging::init(&args.log_level);

    HOST.apply(&HostConfig::default(), &mut HeadlessShell);

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    if args.fps == 0 {
        return Err(eyre!("--fps must be at least 1"));
    }

    let style = load_style(args.style.as_deref())?;
    let insets = args.safe_bottom.map(EdgeInsets::bottom);
    #[allow(clippy::cast_precision_loss)]
    let screen = Size::new(args.width as f32, args.height as f32);
    let mut bar = CurvedTabBar::<Tab>::new(style, &insets);
    bar.layout(screen);

    let mut recorder = Recorder::new(
        args.out.clone(),
        Renderer::new(style.materials),
        args.width,
        args.height,
    )?;
    recorder.capture(&bar)?;

    let dt = Duration::from_secs(1) / args.fps;
    let budget = args
        .frames_per_tap
        .unwrap_or(args.fps * MAX_SETTLE_SECONDS);

    for &tab in &args.tap {
        let Some(point) = tap_point(&bar, tab) else {
            tracing::warn!(?tab, "tab has no button on screen");
            continue;
        };
        let hit = bar.tap(point);
        tracing::info!(?tab, ?hit, x = point.x, y = point.y, "tap");

        for _ in 0..budget {
            let moving = bar.tick(dt);
            recorder.capture(&bar)?;
            if !moving && args.frames_per_tap.is_none() {
                break;
            }
        }
    }

    tracing::info!(
        frames = recorder.frames,
        out = %recorder.dir.display(),
        selected = ?bar.selected(),
        "done"
    );
    Ok(())
}

fn load_style(path: Option<&Path>) -> Result<TabBarStyle> {
    let Some(path) = path else {
        return Ok(TabBarStyle::default());
    };
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    TabBarStyle::from_toml_str(&text).wrap_err_with(|| format!("invalid style in {}", path.display()))
}

/// Screen-space center of `tab`'s button.
fn tap_point(bar: &CurvedTabBar<Tab>, tab: Tab) -> Option<Point> {
    let origin = bar.frame()?.origin();
    let center = bar
        .buttons()
        .iter()
        .find(|button| button.tab() == tab)
        .and_then(TabButton::frame)?
        .center();
    Some(center.offset(origin.x, origin.y))
}
