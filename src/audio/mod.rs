//! Sound cue adapters
//!
//! The game core only names its sound events ([`Cue`]); a [`CueSink`] decides
//! how they are heard. The terminal has no mixer, so [`TerminalCues`] rings the
//! bell and records every cue in the log.

use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::game::Cue;

const BELL: &[u8] = b"\x07";

/// Receiver for cues raised by the game loop
pub trait CueSink {
    fn play(&mut self, cue: Cue) -> Result<()>;

    fn play_all(&mut self, cues: &[Cue]) -> Result<()> {
        for &cue in cues {
            self.play(cue)?;
        }
        Ok(())
    }
}

/// Rings the terminal bell on `out` for every cue unless muted
pub struct TerminalCues<W: Write> {
    out: W,
    muted: bool,
}

impl<W: Write> TerminalCues<W> {
    pub fn new(out: W, muted: bool) -> Self {
        Self { out, muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl<W: Write> CueSink for TerminalCues<W> {
    fn play(&mut self, cue: Cue) -> Result<()> {
        debug!("cue: {}", cue.name());
        if self.muted {
            return Ok(());
        }
        self.out
            .write_all(BELL)
            .and_then(|_| self.out.flush())
            .with_context(|| format!("Failed to play {} cue", cue.name()))
    }
}
