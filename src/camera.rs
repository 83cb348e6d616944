use clap::ValueEnum;
use sylva_geom::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScrollPattern {
    Right,
    Left,
    Pingpong,
}

/// Scripted stand-in for a player: an avatar walking along the surface with
/// the camera centred on it horizontally.
pub struct ScrollCamera {
    pub avatar: Vec2,
    pub speed: f32, // px per second
    pub pattern: ScrollPattern,
    // Pingpong turns around after this many pixels in one direction
    pub leg: f32,
    dir: f32,
    travelled: f32,
}

impl ScrollCamera {
    pub fn new(spawn: Vec2, speed: f32, pattern: ScrollPattern, leg: f32) -> Self {
        let dir = match pattern {
            ScrollPattern::Left => -1.0,
            ScrollPattern::Right | ScrollPattern::Pingpong => 1.0,
        };
        Self {
            avatar: spawn,
            speed,
            pattern,
            leg: leg.max(1.0),
            dir,
            travelled: 0.0,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.avatar.x
    }

    /// Moves the avatar for one step and re-seats it `clearance` above the ground.
    /// Returns the horizontal displacement.
    pub fn update(&mut self, dt: f32, ground_at: impl Fn(f32) -> f32, clearance: f32) -> f32 {
        let mut dx = self.dir * self.speed * dt.max(0.0);
        if self.pattern == ScrollPattern::Pingpong {
            let left = self.leg - self.travelled;
            if dx.abs() >= left {
                dx = self.dir * left;
                self.dir = -self.dir;
                self.travelled = 0.0;
            } else {
                self.travelled += dx.abs();
            }
        }
        self.avatar.x += dx;
        self.avatar.y = ground_at(self.avatar.x) - clearance;
        dx
    }
}
