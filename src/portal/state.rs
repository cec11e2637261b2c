use crate::portal::{direction::Direction, particles::ParticlePool};

/// Lifecycle phase of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Closed,
    Opening,
    /// Fully open, frozen, waiting for `enter_gate`.
    Open,
    /// Zooming through the portal; the host swap runs during this phase.
    Entering,
    /// Fading the overlay out.
    Completing,
}

/// Mutable record of the transition in flight.
#[derive(Clone, Debug)]
pub struct TransitionState {
    pub phase: Phase,
    pub open_ratio: f64,
    pub time: f64,
    pub direction: Direction,
    pub frozen: bool,
    /// Noise-space offset drawn at `start`.
    pub noise_phase: f64,
    pub particles: ParticlePool,
}

impl TransitionState {
    pub fn new(particle_cap: usize, particle_decay: f64) -> Self {
        Self {
            phase: Phase::Closed,
            open_ratio: 0.0,
            time: 0.0,
            direction: Direction::ToRetro,
            frozen: false,
            noise_phase: 0.0,
            particles: ParticlePool::new(particle_cap, particle_decay),
        }
    }

    /// Rewind to the start of a new transition.
    pub fn reset(&mut self, direction: Direction, noise_phase: f64) {
        self.phase = Phase::Closed;
        self.open_ratio = 0.0;
        self.time = 0.0;
        self.direction = direction;
        self.frozen = false;
        self.noise_phase = noise_phase;
        self.particles.clear();
    }
}
