//! Continuous-space point-mass walker.

use ef_core::{AgentId, Point};

/// Where an agent is in its entry → table → buffet → exit route.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    /// Created at the entry point, not yet moving.
    #[default]
    Entering,
    ToTable,
    ToBuffet,
    ToExit,
    /// Reached the exit.
    Done,
}

/// One sampled guest.
///
/// `path` starts with the spawn point and gains one entry per
/// [`move_to`][Self::move_to] call, including the call that arrives.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:    AgentId,
    pub x:     f64,
    pub y:     f64,
    pub state: AgentState,
    pub path:  Vec<Point>,
}

impl Agent {
    /// Spawn an agent at `start`.
    pub fn new(id: AgentId, start: Point) -> Self {
        Self {
            id,
            x: start.x,
            y: start.y,
            state: AgentState::Entering,
            path: vec![start],
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance at most `speed` units straight toward `(target_x, target_y)`.
    ///
    /// Returns `true` when the remaining distance was below `speed`; the
    /// agent then sits exactly on the target.  An agent already on the target
    /// arrives on the first call.  A remaining distance equal to `speed` is a
    /// regular step that lands on the target and reports `false`.
    pub fn move_to(&mut self, target_x: f64, target_y: f64, speed: f64) -> bool {
        let dx = target_x - self.x;
        let dy = target_y - self.y;
        let distance = dx.hypot(dy);

        let arrived = distance < speed;
        if arrived {
            self.x = target_x;
            self.y = target_y;
        } else {
            self.x += dx / distance * speed;
            self.y += dy / distance * speed;
        }
        self.path.push(self.position());
        arrived
    }

    /// Number of `move_to` calls made.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
