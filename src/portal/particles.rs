use crate::{
    foundation::core::{Point, Rect, Rgba8, Vec2},
    foundation::math::Rng64,
    host::PortalCanvas,
};

/// One emissive spark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Point,
    pub vel: Vec2,
    pub size: f64,
    /// Remaining life in `(0, 1]`; also the draw opacity.
    pub life: f64,
}

/// Region sparks are emitted from: the current opening around `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emitter {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Emitter {
    pub fn spawn(&self, rng: &mut Rng64) -> Particle {
        Particle {
            pos: Point::new(
                self.center.x + (rng.next_f64_01() - 0.5) * self.width * 0.8,
                self.center.y + (rng.next_f64_01() - 0.5) * self.height * 0.2,
            ),
            vel: Vec2::new(rng.range(-1.0, 1.0), rng.range(-3.0, -1.0)),
            size: rng.range(1.0, 4.0),
            life: 1.0,
        }
    }
}

/// Capped pool of live sparks.
#[derive(Clone, Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    cap: usize,
    decay: f64,
}

impl ParticlePool {
    pub fn new(cap: usize, decay: f64) -> Self {
        Self {
            particles: Vec::with_capacity(cap),
            cap,
            decay,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn one particle with probability `probability`, unless the pool is full.
    pub fn maybe_spawn(&mut self, emitter: &Emitter, probability: f64, rng: &mut Rng64) -> bool {
        if self.particles.len() >= self.cap || !rng.chance(probability) {
            return false;
        }
        self.particles.push(emitter.spawn(rng));
        true
    }

    /// Move every particle by `dt` reference frames and drop the dead ones.
    pub fn advance(&mut self, dt: f64) {
        let decay = self.decay * dt;
        for p in &mut self.particles {
            p.pos += p.vel * dt;
            p.life -= decay;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn draw(&self, canvas: &mut dyn PortalCanvas, color: Rgba8) {
        for p in &self.particles {
            let rect = Rect::new(p.pos.x, p.pos.y, p.pos.x + p.size, p.pos.y + p.size);
            canvas.fill_spark(rect, color, p.life as f32);
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/portal/particles.rs"]
mod tests;
