//! Garganta is a portal scene-transition engine.
//!
//! A torn, glowing opening grows in the middle of the screen, throws sparks, freezes once
//! fully open and waits for the user to step through. Entering zooms the overlay until it
//! covers the viewport, hands control to the host for the actual mode swap, then fades
//! out and resets.
//!
//! - Build a [`PortalConfig`] (defaults or JSON)
//! - Provide [`HostLayers`] (the crate ships a headless set and a [`CpuCanvas`])
//! - Drive a [`PortalEngine`] from the host's frame loop
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod host;
pub mod portal;
pub mod render;

pub use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2, Viewport};
pub use crate::foundation::error::{GargantaError, GargantaResult};
pub use crate::foundation::math::Rng64;

pub use crate::animation::ease::{CubicBezier, Ease};
pub use crate::animation::tween::Tween;
pub use crate::host::headless::{HeadlessStage, StageState};
pub use crate::host::{
    AudioCue, Clock, CompletionFuture, HostLayers, Label, ManualClock, OnComplete, Overlay,
    PointerTarget, PortalCanvas, SystemClock, VoidStyle, ready,
};
pub use crate::portal::config::{PortalConfig, Timings};
pub use crate::portal::direction::{Direction, Palette, Palettes};
pub use crate::portal::engine::{FrameRequest, PortalEngine};
pub use crate::portal::particles::{Emitter, Particle, ParticlePool};
pub use crate::portal::render_loop::EngineStats;
pub use crate::portal::shape::{ShapeParams, boundary_path, boundary_to_path};
pub use crate::portal::state::Phase;
pub use crate::render::cpu::CpuCanvas;
pub use crate::render::frame::FrameRGBA;
