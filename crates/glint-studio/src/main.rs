mod demo;
mod script;
mod world;

use std::rc::Rc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use glint_engine::gfx::{GpuTargets, GpuTargetsInit, HeadlessTargets, HeadlessWindow, TargetAllocator};
use glint_engine::input::{InputState, MouseButton};
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::scene::DrawList;
use glint_engine::text::{FixedMeasure, FontRegistry, GlyphMeasure};
use glint_engine::time::FrameClock;
use glint_ui::{InterfaceManager, UiContext};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 960;
const FRAME_STEP: Duration = Duration::from_millis(16);

/// Command-line switches.
#[derive(Debug, Default)]
struct Options {
    /// Back composition targets with wgpu textures.
    gpu: bool,
    /// Frames to run; defaults to the length of the scripted session.
    frames: Option<usize>,
    /// Explicit `env_logger` filter, overrides `RUST_LOG`.
    log_filter: Option<String>,
    verbose: bool,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut options = Options::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--gpu" => options.gpu = true,
                "--frames" => {
                    let value = args.next().context("--frames needs a value")?;
                    let frames = value.parse().with_context(|| format!("invalid frame count `{value}`"))?;
                    options.frames = Some(frames);
                }
                "--log" => options.log_filter = Some(args.next().context("--log needs a filter")?),
                "-v" | "--verbose" => options.verbose = true,
                other => bail!("unknown argument `{other}` (expected --gpu, --frames N, --log FILTER, --verbose)"),
            }
        }
        Ok(options)
    }

    fn logging(&self) -> LoggingConfig {
        let level = if self.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
        let config = LoggingConfig::default().with_default_level(level);
        match &self.log_filter {
            Some(filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let options = Options::parse(std::env::args().skip(1))?;
    init_logging(options.logging());

    let targets: Rc<dyn TargetAllocator> = if options.gpu {
        let gpu = pollster::block_on(GpuTargets::request_headless(GpuTargetsInit::default()))
            .context("--gpu requested but no device is available")?;
        Rc::new(gpu)
    } else {
        Rc::new(HeadlessTargets::new())
    };
    let ctx = UiContext::new(Rc::new(HeadlessWindow::new(WINDOW_WIDTH, WINDOW_HEIGHT)), targets, load_glyphs());

    let mut manager = InterfaceManager::new(ctx);
    demo::build_demo(&mut manager);
    demo::build_popup_pair(&mut manager);
    let mut stage = world::Stage::populated();

    let session = script::demo_session();
    let frames = options.frames.unwrap_or(session.len());
    log::info!("running {frames} frame(s) over {} panel(s)", manager.len());

    let mut clock = FrameClock::new();
    let mut state = InputState::default();
    let mut composites = DrawList::new();
    let mut content = DrawList::new();
    let mut previous = None;

    for index in 0..frames {
        // Past the end of the script the pointer rests where it was.
        let Some(sample) = session.get(index).copied().or(previous) else {
            break;
        };
        for event in script::events_between(previous, sample) {
            state.apply_event(event);
        }

        let consumed = manager.propagate_input(&state);
        if !consumed && !manager.is_pointer_captured() && state.button_down(MouseButton::Left) {
            stage.pan(manager.mouse().displacement());
        }

        let time = clock.advance(FRAME_STEP);
        manager.update(time.elapsed);
        stage.update(time.elapsed);

        composites.clear();
        content.clear();
        manager.record(&mut composites);
        for ui in manager.interfaces().filter(|ui| ui.is_visible()) {
            ui.record(&mut content);
        }
        log::debug!(
            "frame {}: consumed={consumed} captured={} composites={} content={}",
            time.frame_index,
            manager.is_pointer_captured(),
            composites.len(),
            content.len(),
        );

        previous = Some(sample);
    }

    log::info!(
        "session done, camera at ({:.0}, {:.0}), {} panel(s) visible",
        stage.camera.x,
        stage.camera.y,
        manager.interfaces().filter(|ui| ui.is_visible()).count(),
    );

    manager.clean_up();
    stage.clean_up();
    Ok(())
}

/// Real font metrics when a system font is found, fixed metrics otherwise.
fn load_glyphs() -> Rc<dyn GlyphMeasure> {
    let Some(bytes) = load_font() else {
        log::warn!("no system font found, using fixed glyph metrics");
        return Rc::new(FixedMeasure::default());
    };

    let mut registry = FontRegistry::new();
    for family in ["default", "Calibri"] {
        if let Err(err) = registry.load(family, &bytes) {
            log::warn!("{err}");
            return Rc::new(FixedMeasure::default());
        }
    }
    Rc::new(registry)
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_flags() {
        let options = Options::parse(args(&["--gpu", "--frames", "42"])).expect("valid flags");
        assert!(options.gpu);
        assert_eq!(options.frames, Some(42));
        assert_eq!(options.logging().default_level, log::LevelFilter::Info);
    }

    #[test]
    fn logging_flags_shape_the_config() {
        let options = Options::parse(args(&["-v", "--log", "glint_ui=trace"])).expect("valid flags");
        let config = options.logging();
        assert_eq!(config.default_level, log::LevelFilter::Debug);
        assert_eq!(config.env_filter.as_deref(), Some("glint_ui=trace"));
    }

    #[test]
    fn rejects_unknown_and_malformed_flags() {
        assert!(Options::parse(args(&["--fast"])).is_err());
        assert!(Options::parse(args(&["--frames"])).is_err());
        assert!(Options::parse(args(&["--frames", "many"])).is_err());
        assert!(Options::parse(args(&["--log"])).is_err());
    }

    #[test]
    fn scripted_session_opens_and_closes_the_popup_and_pans() {
        let mut manager = InterfaceManager::new(UiContext::headless(WINDOW_WIDTH, WINDOW_HEIGHT));
        demo::build_demo(&mut manager);
        let (popup, _) = demo::build_popup_pair(&mut manager);
        let mut stage = world::Stage::default();
        let mut state = InputState::default();
        let mut previous = None;

        for sample in script::demo_session() {
            for event in script::events_between(previous, sample) {
                state.apply_event(event);
            }
            let consumed = manager.propagate_input(&state);
            if !consumed && !manager.is_pointer_captured() && state.button_down(MouseButton::Left) {
                stage.pan(manager.mouse().displacement());
            }
            manager.update(0.016);
            previous = Some(sample);
        }

        assert!(manager.get(popup).is_some_and(|ui| !ui.is_visible()));
        assert_eq!(stage.camera, glint_engine::coords::Vec2::new(-100.0, -40.0));
        assert!(!manager.is_pointer_captured());
    }
}
