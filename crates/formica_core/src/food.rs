//! Food source placement, occupancy tracking and replenishment.
//!
//! The supply keeps a boolean occupancy matrix in step with its sources:
//! a cell is occupied iff it lies within `radius` of an active source.
//! Every placement and removal updates the affected disk eagerly.

use crate::config::{CapacityMode, FoodConfig};
use crate::error::{Result, WorldError};
use formica_data::{FoodSource, Position};
use rand::Rng;
use std::ops::Range;

/// Outcome of an attempt to pick up food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodPickup {
    /// No active source covers the position.
    Missed,
    /// One unit taken, the source is still active.
    Taken { remaining: u32 },
    /// The last unit was taken; the source at `at` was removed and a new
    /// one placed at `replacement`.
    Depleted { at: Position, replacement: Position },
}

#[derive(Debug, Clone)]
pub struct FoodSupply {
    sources: Vec<FoodSource>,
    occupied: Vec<bool>,
    width: i32,
    height: i32,
    radius: i32,
    amount: u32,
    capacity: CapacityMode,
    max_attempts: usize,
}

impl FoodSupply {
    /// An empty supply for a `width × height` grid.
    #[must_use]
    pub fn new(width: i32, height: i32, config: &FoodConfig, max_attempts: usize) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            sources: Vec::new(),
            occupied: vec![false; width as usize * height as usize],
            width,
            height,
            radius: config.radius.max(0),
            amount: config.amount.max(1),
            capacity: config.capacity,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Places `count` randomly positioned sources.
    pub fn populate<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<()> {
        let requested = self.sources.len() + count;
        for _ in 0..count {
            let spot = self
                .find_spot(rng)
                .ok_or_else(|| WorldError::FoodPlacement {
                    requested,
                    placed: self.sources.len(),
                    width: self.width,
                    height: self.height,
                    radius: self.radius,
                })?;
            self.spawn_at(spot, rng);
        }
        Ok(())
    }

    /// Adds an explicitly positioned source. Its disk may be clipped by the
    /// grid edge but must not touch another source's disk.
    pub fn insert(&mut self, source: FoodSource) -> Result<()> {
        let position = source.position();
        if !position.is_in_bounds(self.width, self.height) {
            return Err(WorldError::FoodOutOfBounds { position });
        }
        if !source.contains_food() {
            return Err(WorldError::FoodExhausted { position });
        }
        if self.disk_cells(position).any(|p| self.is_occupied(p)) {
            return Err(WorldError::FoodOverlap { position });
        }
        self.sources.push(source);
        self.mark_disk(position, true);
        Ok(())
    }

    #[must_use]
    pub fn sources(&self) -> &[FoodSource] {
        &self.sources
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    #[must_use]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Food units left across every active source.
    #[must_use]
    pub fn remaining_food(&self) -> u64 {
        self.sources.iter().map(|s| u64::from(s.remaining())).sum()
    }

    #[inline(always)]
    fn index(&self, p: Position) -> Option<usize> {
        p.is_in_bounds(self.width, self.height)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// Occupancy matrix lookup; false outside the grid.
    #[must_use]
    pub fn is_occupied(&self, p: Position) -> bool {
        self.index(p).map(|idx| self.occupied[idx]).unwrap_or(false)
    }

    /// Index of the first source, in insertion order, whose disk covers `p`.
    #[must_use]
    pub fn locate(&self, p: Position) -> Option<usize> {
        self.sources
            .iter()
            .position(|s| p.is_within_radius(&s.position(), self.radius))
    }

    #[must_use]
    pub fn contains_food(&self, p: Position) -> bool {
        let occupied = self.is_occupied(p);
        debug_assert!(
            !p.is_in_bounds(self.width, self.height) || occupied == self.locate(p).is_some(),
            "occupancy out of sync with sources at {p}"
        );
        occupied
    }

    /// Takes one unit from the source covering `p`, replacing the source
    /// as soon as it runs dry.
    pub fn pick_up<R: Rng>(&mut self, p: Position, rng: &mut R) -> FoodPickup {
        if !p.is_in_bounds(self.width, self.height) {
            return FoodPickup::Missed;
        }
        let Some(idx) = self.locate(p) else {
            return FoodPickup::Missed;
        };
        if self.sources[idx].take_food() {
            return FoodPickup::Taken {
                remaining: self.sources[idx].remaining(),
            };
        }

        let exhausted = self.sources.remove(idx);
        let at = exhausted.position();
        self.clear_source(at);
        // The freed disk touches no other disk, so reusing it keeps the count fixed.
        let replacement = self.find_spot(rng).unwrap_or(at);
        self.spawn_at(replacement, rng);
        tracing::debug!(
            at = %at,
            replacement = %replacement,
            capacity = exhausted.capacity(),
            "Food source depleted"
        );
        FoodPickup::Depleted { at, replacement }
    }

    fn spawn_capacity<R: Rng>(&self, rng: &mut R) -> u32 {
        match self.capacity {
            CapacityMode::Fixed => self.amount,
            CapacityMode::Random => rng.gen_range(1..=self.amount),
        }
    }

    fn spawn_at<R: Rng>(&mut self, spot: Position, rng: &mut R) {
        let capacity = self.spawn_capacity(rng);
        self.sources.push(FoodSource::new(spot, capacity));
        self.mark_disk(spot, true);
    }

    /// Valid centers keep the whole disk on the grid.
    fn candidate_ranges(&self) -> Option<(Range<i32>, Range<i32>)> {
        let xs = self.radius..self.width - self.radius;
        let ys = self.radius..self.height - self.radius;
        (!xs.is_empty() && !ys.is_empty()).then_some((xs, ys))
    }

    /// A center whose bounding square holds no occupied cell.
    fn is_free(&self, center: Position) -> bool {
        let r = self.radius;
        (-r..=r).all(|dy| (-r..=r).all(|dx| !self.is_occupied(center.offset(dx, dy))))
    }

    /// Bounded random search, then a full row-major sweep.
    fn find_spot<R: Rng>(&self, rng: &mut R) -> Option<Position> {
        let (xs, ys) = self.candidate_ranges()?;
        for _ in 0..self.max_attempts {
            let candidate = Position::new(rng.gen_range(xs.clone()), rng.gen_range(ys.clone()));
            if self.is_free(candidate) {
                return Some(candidate);
            }
        }
        tracing::debug!(
            attempts = self.max_attempts,
            "Random food placement exhausted, sweeping grid"
        );
        ys.flat_map(|y| xs.clone().map(move |x| Position::new(x, y)))
            .find(|&candidate| self.is_free(candidate))
    }

    /// Cells of the disk around `center`, scanning only the part of its
    /// bounding square that lies on the grid.
    fn disk_cells(&self, center: Position) -> impl Iterator<Item = Position> + '_ {
        let r = self.radius;
        let xs = center.x.saturating_sub(r).max(0)
            ..=center.x.saturating_add(r).min(self.width - 1);
        let ys = center.y.saturating_sub(r).max(0)
            ..=center.y.saturating_add(r).min(self.height - 1);
        ys.flat_map(move |y| xs.clone().map(move |x| Position::new(x, y)))
            .filter(move |p| p.is_within_radius(&center, r))
    }

    fn mark_disk(&mut self, center: Position, value: bool) {
        let cells: Vec<usize> = self
            .disk_cells(center)
            .filter_map(|p| self.index(p))
            .collect();
        for idx in cells {
            self.occupied[idx] = value;
        }
    }

    /// Clears a removed source's disk, then restores cells still covered by
    /// a neighboring source.
    fn clear_source(&mut self, center: Position) {
        self.mark_disk(center, false);
        let reach = 2 * i64::from(self.radius);
        let neighbors: Vec<Position> = self
            .sources
            .iter()
            .map(FoodSource::position)
            .filter(|p| p.distance_squared(&center) <= reach.saturating_mul(reach))
            .collect();
        for p in neighbors {
            self.mark_disk(p, true);
        }
    }
}
