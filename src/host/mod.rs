//! Collaborators the engine drives but does not own: the raster canvas, the overlay and
//! label layers, the audio cue, the clock and the application-shell callback.
//!
//! The engine receives every collaborator at construction ([`HostLayers`]) and never
//! looks anything up globally.

pub mod clock;
pub mod headless;

use std::{future::Future, pin::Pin};

use crate::{
    animation::tween::Tween,
    foundation::core::{Affine, BezPath, Rect, Rgba8, Viewport},
    foundation::error::GargantaResult,
    portal::direction::Direction,
};

pub use clock::{Clock, ManualClock, SystemClock};

/// Awaitable returned by the host's completion callback.
pub type CompletionFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>>>>;

/// Host completion callback: performs the mode swap for the given direction while the
/// portal covers the screen.
pub type OnComplete = Box<dyn FnMut(Direction) -> CompletionFuture>;

/// Wrap a synchronous swap into a [`CompletionFuture`].
pub fn ready(result: anyhow::Result<()>) -> CompletionFuture {
    Box::pin(std::future::ready(result))
}

/// Fill and halo of the portal void.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoidStyle {
    pub fill: Rgba8,
    pub glow: Rgba8,
    /// Halo radius in pixels; `0` disables the halo.
    pub glow_blur: f64,
}

/// Raster surface the portal is drawn into.
///
/// Draw calls between two [`present`](PortalCanvas::present) calls make up one frame.
pub trait PortalCanvas {
    fn resize(&mut self, viewport: Viewport) -> GargantaResult<()>;

    /// Drop any recorded draws and blank the surface.
    fn clear(&mut self);

    fn fill_void(&mut self, path: &BezPath, transform: Affine, style: &VoidStyle);

    /// Additive square spark with the given opacity.
    fn fill_spark(&mut self, rect: Rect, color: Rgba8, alpha: f32);

    fn present(&mut self) -> GargantaResult<()>;

    /// Whether pointer activation on the canvas reaches the engine.
    fn set_interactive(&mut self, interactive: bool);
}

/// Full-screen layer hosting the canvas and the label.
pub trait Overlay {
    fn show(&mut self);
    fn hide(&mut self);
    fn set_opacity(&mut self, opacity: f64, tween: Option<Tween>);
    fn set_transform(&mut self, transform: Affine, tween: Option<Tween>);
}

/// Clickable text affordance shown once the portal is open.
pub trait Label {
    fn set_text(&mut self, text: &str);
    fn set_color(&mut self, color: Rgba8);
    fn set_opacity(&mut self, opacity: f64);
    fn set_interactive(&mut self, interactive: bool);
}

/// Fire-and-forget transition sound.
pub trait AudioCue {
    fn play(&mut self) -> anyhow::Result<()>;
}

/// Which surface received a pointer activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Canvas,
    Label,
}

/// Everything the engine renders into or talks to.
pub struct HostLayers {
    pub canvas: Box<dyn PortalCanvas>,
    pub overlay: Box<dyn Overlay>,
    pub label: Box<dyn Label>,
    pub audio: Box<dyn AudioCue>,
    pub clock: Box<dyn Clock>,
}
