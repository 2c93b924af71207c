//! Dense pheromone fields.
//!
//! Each cell holds an `f32` in `[0.0, 1.0]` stored as its bit pattern in an
//! `AtomicU32`, so deposits only need `&self` and concurrent deposits on the
//! same cell accumulate through a compare-and-swap clamp.

use formica_data::Position;
use std::sync::atomic::{AtomicU32, Ordering};

/// Upper bound of every pheromone cell.
pub const MAX_STRENGTH: f32 = 1.0;

/// Which of the two fields an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PheromoneKind {
    /// Trail leading towards discovered food.
    Food,
    /// Trail leading back towards the colony.
    Foraging,
}

/// Next-tick values of one cell for both fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PheromonePair {
    pub food: f32,
    pub foraging: f32,
}

impl PheromonePair {
    #[must_use]
    pub const fn new(food: f32, foraging: f32) -> Self {
        Self { food, foraging }
    }
}

#[inline(always)]
fn clamp_strength(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_STRENGTH)
    }
}

/// Row-major grid of pheromone strengths.
#[derive(Debug)]
pub struct PheromoneField {
    cells: Vec<AtomicU32>,
    width: i32,
    height: i32,
}

impl Clone for PheromoneField {
    fn clone(&self) -> Self {
        Self {
            cells: self
                .cells
                .iter()
                .map(|c| AtomicU32::new(c.load(Ordering::Relaxed)))
                .collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl PheromoneField {
    /// Zero-filled field. Negative dimensions are treated as empty.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let size = width as usize * height as usize;
        Self {
            cells: (0..size).map(|_| AtomicU32::new(0.0f32.to_bits())).collect(),
            width,
            height,
        }
    }

    /// Builds a field from row-major values, clamping each into range.
    /// Missing values are zero, surplus values are dropped.
    #[must_use]
    pub fn from_values(width: i32, height: i32, values: Vec<f32>) -> Self {
        let field = Self::new(width, height);
        for (cell, value) in field.cells.iter().zip(values) {
            cell.store(clamp_strength(value).to_bits(), Ordering::Relaxed);
        }
        field
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline(always)]
    fn index(&self, p: Position) -> Option<usize> {
        p.is_in_bounds(self.width, self.height)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// Strength at `p`, or 0.0 outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, p: Position) -> f32 {
        self.index(p)
            .map(|idx| f32::from_bits(self.cells[idx].load(Ordering::Relaxed)))
            .unwrap_or(0.0)
    }

    /// Adds `amount` at `p`, clamped to `[0.0, 1.0]`. No-op outside the grid.
    pub fn deposit(&self, p: Position, amount: f32) {
        let Some(idx) = self.index(p) else {
            return;
        };
        let target = &self.cells[idx];
        let mut current = target.load(Ordering::Relaxed);
        loop {
            let next = clamp_strength(f32::from_bits(current) + amount).to_bits();
            match target.compare_exchange_weak(current, next, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }
    }

    /// Copy of every cell in row-major order.
    #[must_use]
    pub fn values(&self) -> Vec<f32> {
        self.cells
            .iter()
            .map(|c| f32::from_bits(c.load(Ordering::Relaxed)))
            .collect()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.cells
            .iter()
            .map(|c| f64::from(f32::from_bits(c.load(Ordering::Relaxed))))
            .sum()
    }

    #[must_use]
    pub fn peak(&self) -> f32 {
        self.cells
            .iter()
            .map(|c| f32::from_bits(c.load(Ordering::Relaxed)))
            .fold(0.0, f32::max)
    }
}
