//! Recursive Tower of Hanoi solver.
//!
//! Disks are numbered by size, `1` being the smallest. Each peg is a stack
//! whose last element is the top disk.

use std::fmt;

use crate::error::{DrillError, Result};
use crate::types::Peg;

/// Largest tower the solver accepts (2^16 - 1 moves)
pub const MAX_DISKS: u32 = 16;

/// A single disk move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk {}: {} -> {}", self.disk, self.from, self.to)
    }
}

/// The three pegs and their disks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    pegs: [Vec<u32>; 3],
    disks: u32,
}

impl Towers {
    /// Stack `disks` disks on peg A, largest at the bottom.
    pub fn new(disks: u32) -> Result<Self> {
        if disks == 0 || disks > MAX_DISKS {
            return Err(DrillError::validation(format!(
                "disk count must be between 1 and {}, got {}",
                MAX_DISKS, disks
            )));
        }
        Ok(Self {
            pegs: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
            disks,
        })
    }

    /// Disks on a peg, bottom first
    pub fn peg(&self, peg: Peg) -> &[u32] {
        &self.pegs[peg.index()]
    }

    /// Whether every disk sits on peg C
    pub fn is_solved(&self) -> bool {
        self.pegs[Peg::C.index()].len() == self.disks as usize
    }

    fn move_top(&mut self, from: Peg, to: Peg) -> Result<Move> {
        let disk = self.pegs[from.index()]
            .pop()
            .ok_or_else(|| DrillError::validation(format!("peg {} is empty", from)))?;

        if let Some(&top) = self.pegs[to.index()].last() {
            if top < disk {
                self.pegs[from.index()].push(disk);
                return Err(DrillError::validation(format!(
                    "cannot place disk {} on smaller disk {}",
                    disk, top
                )));
            }
        }

        self.pegs[to.index()].push(disk);
        Ok(Move { disk, from, to })
    }

    /// Move the whole tower from A to C, calling `observer` after every move.
    pub fn solve<F>(&mut self, observer: &mut F) -> Result<()>
    where
        F: FnMut(Move, &Towers),
    {
        self.move_stack(self.disks, Peg::A, Peg::B, Peg::C, observer)
    }

    fn move_stack<F>(&mut self, n: u32, source: Peg, auxiliary: Peg, target: Peg, observer: &mut F) -> Result<()>
    where
        F: FnMut(Move, &Towers),
    {
        if n == 0 {
            return Ok(());
        }
        self.move_stack(n - 1, source, target, auxiliary, observer)?;
        let step = self.move_top(source, target)?;
        observer(step, self);
        self.move_stack(n - 1, auxiliary, source, target, observer)
    }
}

impl fmt::Display for Towers {
    /// `[3, 2] [1] []`, pegs A, B and C
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} {:?}", self.pegs[0], self.pegs[1], self.pegs[2])
    }
}

/// Every move and the peg layout after it
#[derive(Debug, Clone)]
pub struct HanoiRun {
    pub moves: Vec<Move>,
    pub snapshots: Vec<String>,
    pub final_state: Towers,
}

/// Solve a tower of `disks` disks and record every step.
pub fn solve_hanoi(disks: u32) -> Result<HanoiRun> {
    let mut towers = Towers::new(disks)?;
    let mut moves = Vec::new();
    let mut snapshots = Vec::new();

    towers.solve(&mut |step, state| {
        moves.push(step);
        snapshots.push(state.to_string());
    })?;

    tracing::debug!(disks, moves = moves.len(), "hanoi solved");
    Ok(HanoiRun {
        moves,
        snapshots,
        final_state: towers,
    })
}
