use std::{
    future::Future,
    io::Write as _,
    path::{Path, PathBuf},
    pin::Pin,
    task::{Context, Poll},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use garganta::{
    Clock as _, CompletionFuture, CpuCanvas, Direction, FrameRequest, HeadlessStage, ManualClock,
    Phase, PointerTarget, PortalConfig, PortalEngine, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "garganta", version)]
struct Cli {
    /// Log filter level for diagnostics on stderr.
    #[arg(long, global = true, default_value = "warn")]
    log: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive the opening animation and write one frame as a PNG.
    Frame(FrameArgs),
    /// Simulate a full transition and print its phase changes as JSON lines.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct StageArgs {
    /// Transition direction (`toRetro` or `toStandard`).
    #[arg(long, default_value = "toRetro")]
    direction: Direction,

    /// Portal config JSON; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    stage: StageArgs,

    /// Number of animation frames to run before capturing.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Keep the canvas transparent instead of flattening it onto a dark backdrop.
    #[arg(long)]
    transparent: bool,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    stage: StageArgs,

    /// Seconds the open portal waits before the simulated user clicks it.
    #[arg(long, default_value_t = 0.5)]
    dwell: f64,

    /// Frames the simulated host swap stays pending.
    #[arg(long, default_value_t = 0)]
    swap_frames: u32,

    /// Make the simulated host swap fail.
    #[arg(long)]
    fail_swap: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PortalConfig> {
    match path {
        Some(p) => Ok(PortalConfig::from_json_path(p)?),
        None => Ok(PortalConfig::default()),
    }
}

fn frame_dt(fps: f64) -> anyhow::Result<f64> {
    if !fps.is_finite() || fps <= 0.0 {
        anyhow::bail!("fps must be finite and > 0");
    }
    Ok(1.0 / fps)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.stage.config.as_deref())?;
    let dt = frame_dt(args.stage.fps)?;
    let viewport = Viewport::new(args.stage.width, args.stage.height);

    let clock = ManualClock::new();
    let stage = HeadlessStage::new();
    let canvas = CpuCanvas::new(viewport)?;
    let layers = stage.layers_with_canvas(Box::new(canvas.clone()), Box::new(clock.clone()));
    let mut engine = PortalEngine::new(
        config,
        layers,
        viewport,
        Box::new(|_: Direction| garganta::ready(Ok(()))),
    )?;

    engine.start(args.stage.direction);
    for _ in 0..args.frames {
        clock.advance(dt);
        engine.on_frame();
    }

    let frame = canvas.frame();
    let frame = if args.transparent {
        frame
    } else {
        frame.over_background([18, 20, 28])?
    };
    frame.write_png(&args.out)?;

    tracing::info!(
        phase = ?engine.phase(),
        open_ratio = engine.open_ratio(),
        particles = engine.particles().len(),
        "frame captured"
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Host swap that stays pending for a fixed number of polls.
struct SimulatedSwap {
    remaining: u32,
    fail: bool,
}

impl Future for SimulatedSwap {
    type Output = anyhow::Result<()>;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Poll::Pending;
        }
        if self.fail {
            Poll::Ready(Err(anyhow::anyhow!("simulated mode swap failure")))
        } else {
            Poll::Ready(Ok(()))
        }
    }
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let config = load_config(args.stage.config.as_deref())?;
    let dt = frame_dt(args.stage.fps)?;
    let viewport = Viewport::new(args.stage.width, args.stage.height);

    let clock = ManualClock::new();
    let stage = HeadlessStage::new();
    let layers = stage.layers(Box::new(clock.clone()));
    let (swap_frames, fail_swap) = (args.swap_frames, args.fail_swap);
    let mut engine = PortalEngine::new(
        config,
        layers,
        viewport,
        Box::new(move |_: Direction| -> CompletionFuture {
            Box::pin(SimulatedSwap {
                remaining: swap_frames,
                fail: fail_swap,
            })
        }),
    )?;

    let mut out = std::io::stdout().lock();
    let mut emit = |engine: &PortalEngine, now: f64| -> anyhow::Result<()> {
        let s = stage.snapshot();
        let line = serde_json::json!({
            "t": now,
            "phase": engine.phase(),
            "direction": engine.direction(),
            "open_ratio": engine.open_ratio(),
            "overlay_visible": s.overlay_visible,
            "overlay_opacity": s.overlay_opacity,
            "label_interactive": s.label_interactive,
        });
        writeln!(out, "{line}").context("write timeline line")?;
        Ok(())
    };

    engine.start(args.stage.direction);
    emit(&engine, 0.0)?;

    let mut last = engine.phase();
    let mut clicked = false;
    for _ in 0..1_000_000u32 {
        let request = engine.on_frame();
        if engine.phase() != last {
            last = engine.phase();
            emit(&engine, clock.now())?;
        }
        if !engine.is_active() {
            break;
        }
        match request {
            FrameRequest::AnimationFrame => clock.advance(dt),
            FrameRequest::At(t) => clock.set(t.max(clock.now())),
            FrameRequest::Idle if engine.phase() == Phase::Open && !clicked => {
                clock.advance(args.dwell.max(0.0));
                clicked = true;
                engine.on_pointer(PointerTarget::Label);
                if engine.phase() != last {
                    last = engine.phase();
                    emit(&engine, clock.now())?;
                }
            }
            FrameRequest::Idle => break,
        }
    }

    if let Some(err) = engine.take_host_error() {
        tracing::warn!(error = %err, "host swap reported an error");
    }
    let stats = serde_json::to_string(&engine.stats()).context("serialize stats")?;
    eprintln!("stats {stats}");
    Ok(())
}
