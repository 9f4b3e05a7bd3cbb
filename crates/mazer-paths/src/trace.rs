//! Step recording for traversal playback.
//!
//! A [`Trace`] keeps the grid as it was before the search plus, for every
//! expanded cell, the list of cells that changed at that step. Full
//! snapshots are rebuilt on demand by replaying the log, so historical
//! frames never alias the search's working grid.

use mazer_core::{Cell, Grid, Point};

/// Cells changed by one expansion.
pub type Step = Vec<(Point, Cell)>;

/// Diff log of a traversal.
#[derive(Debug, Clone)]
pub struct Trace {
    base: Grid,
    steps: Vec<Step>,
}

impl Trace {
    /// Start a trace from the grid's state before any expansion.
    pub fn new(base: &Grid) -> Self {
        Self {
            base: base.clone(),
            steps: Vec::new(),
        }
    }

    /// Append one step. An empty step still produces a frame.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Replay the log, yielding the full grid after each step.
    pub fn frames(&self) -> Frames<'_> {
        Frames {
            canvas: self.base.clone(),
            steps: self.steps.iter(),
        }
    }

    /// Materialize every frame in its serialized form.
    pub fn into_strings(self) -> Vec<String> {
        self.frames().map(|g| g.to_string()).collect()
    }
}

/// Iterator over the snapshots of a [`Trace`].
pub struct Frames<'a> {
    canvas: Grid,
    steps: std::slice::Iter<'a, Step>,
}

impl Iterator for Frames<'_> {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        let step = self.steps.next()?;
        for &(p, c) in step {
            self.canvas.set(p, c);
        }
        Some(self.canvas.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for Frames<'_> {}
