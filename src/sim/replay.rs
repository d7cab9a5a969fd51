//! Scripted replays
//!
//! A script is an ordered list of input events keyed by tick. Replaying the
//! same script on the same config always lands on the same snapshot, which is
//! how two builds of the simulation are checked against each other.

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, Session};
use super::tick::{InputEvent, TickInput, tick};
use crate::config::GameConfig;
use crate::error::{Error, Result};

/// An input event applied before tick `tick + 1` runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub tick: u64,
    pub event: InputEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub events: Vec<ScriptedEvent>,
}

impl Script {
    /// Build a script, rejecting events that go back in time
    pub fn new(events: Vec<ScriptedEvent>) -> Result<Self> {
        let script = Self { events };
        script.validate()?;
        Ok(script)
    }

    pub fn validate(&self) -> Result<()> {
        for (index, pair) in self.events.windows(2).enumerate() {
            if pair[1].tick < pair[0].tick {
                return Err(Error::UnorderedScript {
                    index: index + 1,
                    tick: pair[1].tick,
                    previous: pair[0].tick,
                });
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let script = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded {} scripted events from {}", script.events.len(), path.display());
        Ok(script)
    }

    /// Steps through a script tick by tick
    pub fn cursor(&self) -> ScriptCursor<'_> {
        ScriptCursor {
            events: &self.events,
            next: 0,
        }
    }
}

/// Hands out the events due at each tick, in order
#[derive(Debug, Clone)]
pub struct ScriptCursor<'a> {
    events: &'a [ScriptedEvent],
    next: usize,
}

impl ScriptCursor<'_> {
    /// Input for the tick that runs after `ticks_done` ticks
    pub fn input_at(&mut self, ticks_done: u64) -> TickInput {
        let mut input = TickInput::default();
        while let Some(scripted) = self.events.get(self.next) {
            if scripted.tick > ticks_done {
                break;
            }
            input.push(scripted.event);
            self.next += 1;
        }
        input
    }

    /// Events never reached
    pub fn remaining(&self) -> usize {
        self.events.len() - self.next
    }
}

/// Comparable state of a session at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub ball_pos: IVec2,
    pub ball_dir: IVec2,
    pub paddle_x: i32,
    /// One flag per brick, grid order
    pub destroyed: Vec<bool>,
}

impl Snapshot {
    /// Stable FNV-1a style hash over every field
    pub fn fingerprint(&self) -> u64 {
        fn mix(hash: u64, value: u64) -> u64 {
            (hash ^ value).wrapping_mul(0x0000_0100_0000_01B3)
        }

        let mut hash = 0xCBF2_9CE4_8422_2325u64;
        hash = mix(hash, self.tick);
        hash = mix(hash, (self.phase == GamePhase::GameOver) as u64);
        hash = mix(hash, self.ball_pos.x as i64 as u64);
        hash = mix(hash, self.ball_pos.y as i64 as u64);
        hash = mix(hash, self.ball_dir.x as i64 as u64);
        hash = mix(hash, self.ball_dir.y as i64 as u64);
        hash = mix(hash, self.paddle_x as i64 as u64);
        for &destroyed in &self.destroyed {
            hash = mix(hash, destroyed as u64);
        }
        hash
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed.iter().filter(|&&d| d).count()
    }
}

impl Session {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            phase: self.phase,
            ball_pos: self.ball.pos,
            ball_dir: self.ball.dir,
            paddle_x: self.paddle.pos.x,
            destroyed: self.bricks.iter().map(|b| b.is_destroyed()).collect(),
        }
    }
}

/// Run a fresh session for `ticks` ticks, feeding it the script.
///
/// Stops early if the game ends; the snapshot then records the final tick.
pub fn replay(config: &GameConfig, script: &Script, ticks: u64) -> Result<Snapshot> {
    script.validate()?;
    let mut session = Session::with_config(config.clone())?;
    let mut cursor = script.cursor();

    while session.time_ticks() < ticks && session.is_in_play() {
        let input = cursor.input_at(session.time_ticks());
        tick(&mut session, &input);
    }

    if cursor.remaining() > 0 {
        log::warn!(
            "{} scripted events were never applied (stopped at tick {})",
            cursor.remaining(),
            session.time_ticks()
        );
    }

    let snapshot = session.snapshot();
    log::info!(
        "Replay finished at tick {}: {:?}, {} bricks destroyed",
        snapshot.tick,
        snapshot.phase,
        snapshot.destroyed_count()
    );
    Ok(snapshot)
}
