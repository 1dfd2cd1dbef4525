//! Fire simulation
//!
//! A cellular automaton over a `levels × per_level` grid. The bottom row is
//! fed with random flame energy every tick, the second row occasionally
//! ignites a spark that climbs upwards, and everything else glows from the
//! radiation of its neighbours.
//!
//! Energies are double-buffered: a tick reads only the current buffer and
//! writes the next one. Cell modes are a single array updated while the
//! sweep runs bottom to top, so a spark marking the cell above takes effect
//! for that cell in the same tick.

use heapless::Vec;
use rand::Rng;

use crate::math8::{increase, mul_shr, reduce};
use crate::params::{Layout, TorchParams};

/// How a cell's energy is calculated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellMode {
    /// Glows from nearby radiation
    #[default]
    Passive,
    /// Freshly injected flame, left alone for one tick
    Nop,
    /// Loses energy while pushing it upwards
    Spark,
    /// Above a spark, drawing energy from it until the spark is exhausted
    SparkTemp,
}

/// Snapshot of one grid position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnergyCell {
    pub energy: u8,
    pub mode: CellMode,
}

/// Energy grid of the torch, sized for at most `N` cells
#[derive(Debug, Clone)]
pub struct EnergyGrid<const N: usize> {
    per_level: usize,
    levels: usize,
    current: Vec<u8, N>,
    next: Vec<u8, N>,
    modes: Vec<CellMode, N>,
}

impl<const N: usize> EnergyGrid<N> {
    /// Create an all-passive, zero-energy grid
    ///
    /// Rows that do not fit into `N` cells are dropped.
    pub fn new(layout: Layout) -> Self {
        let per_level = usize::from(layout.per_level);
        let levels = if per_level == 0 {
            0
        } else {
            usize::from(layout.levels).min(N / per_level)
        };
        let len = levels * per_level;

        let mut current = Vec::new();
        let mut next = Vec::new();
        let mut modes = Vec::new();
        // len <= N, so none of these can fail
        let _ = current.resize(len, 0);
        let _ = next.resize(len, 0);
        let _ = modes.resize(len, CellMode::Passive);

        Self {
            per_level,
            levels,
            current,
            next,
            modes,
        }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub const fn levels(&self) -> usize {
        self.levels
    }

    pub const fn per_level(&self) -> usize {
        self.per_level
    }

    /// Clear all energy and make every cell passive
    pub fn reset(&mut self) {
        self.current.fill(0);
        self.next.fill(0);
        self.modes.fill(CellMode::Passive);
    }

    pub fn cell(&self, index: usize) -> Option<EnergyCell> {
        Some(EnergyCell {
            energy: *self.current.get(index)?,
            mode: *self.modes.get(index)?,
        })
    }

    /// Overwrite one cell of the current state
    pub fn set_cell(&mut self, index: usize, cell: EnergyCell) {
        if let (Some(energy), Some(mode)) = (self.current.get_mut(index), self.modes.get_mut(index)) {
            *energy = cell.energy;
            *mode = cell.mode;
        }
    }

    /// Current energy at `index`; zero outside the grid
    #[inline]
    pub fn energy(&self, index: usize) -> u8 {
        self.current.get(index).copied().unwrap_or(0)
    }

    /// Current energy at column `x` of row `y`, optionally counting rows
    /// from the top
    pub fn energy_at(&self, x: usize, y: usize, upside_down: bool) -> u8 {
        if x >= self.per_level || y >= self.levels {
            return 0;
        }
        let row = if upside_down { self.levels - 1 - y } else { y };
        self.energy(row * self.per_level + x)
    }

    /// Advance one tick: inject fresh energy, then diffuse
    pub fn tick<R: Rng>(&mut self, params: &TorchParams, rng: &mut R) {
        self.inject(params, rng);
        self.diffuse(params);
    }

    /// Feed the bottom row with flame and randomly ignite sparks in the
    /// second row
    pub fn inject<R: Rng>(&mut self, params: &TorchParams, rng: &mut R) {
        if self.levels == 0 {
            return;
        }
        for i in 0..self.per_level {
            self.current[i] = random_in(rng, params.flame_min, params.flame_max);
            self.modes[i] = CellMode::Nop;
        }
        if self.levels < 2 {
            return;
        }
        for i in self.per_level..2 * self.per_level {
            if self.modes[i] != CellMode::Spark
                && rng.gen_range(0..100u8) < params.spark_probability
            {
                self.current[i] = random_in(rng, params.spark_min, params.spark_max);
                self.modes[i] = CellMode::Spark;
            }
        }
    }

    /// Compute the next energies from the current ones and swap buffers
    pub fn diffuse(&mut self, params: &TorchParams) {
        let per_level = self.per_level;
        let len = self.current.len();

        for i in 0..len {
            let mut e = self.current[i];
            // Neighbours are taken by flat index: the strip is a helix, so
            // the left neighbour of a row's first cell is the last cell of
            // the row below.
            let below = if i >= per_level {
                self.current[i - per_level]
            } else {
                0
            };

            match self.modes[i] {
                CellMode::Spark => {
                    e = reduce(e, params.spark_transfer, 0);
                    if i + per_level < len {
                        self.modes[i + per_level] = CellMode::SparkTemp;
                    }
                }
                CellMode::SparkTemp => {
                    if below < params.spark_transfer {
                        if i >= per_level {
                            self.modes[i - per_level] = CellMode::Passive;
                        }
                        e = increase(e, u32::from(below), u8::MAX);
                        e = mul_shr(u32::from(e), u32::from(params.spark_cap), 8);
                        self.modes[i] = CellMode::Spark;
                    } else {
                        e = increase(e, u32::from(params.spark_transfer), u8::MAX);
                    }
                }
                CellMode::Passive => {
                    let left = if i > 0 { self.current[i - 1] } else { 0 };
                    let right = self.current.get(i + 1).copied().unwrap_or(0);
                    e = mul_shr(u32::from(e), u32::from(params.heat_cap), 8);
                    let side = ((u32::from(left) + u32::from(right))
                        * u32::from(params.side_radiation))
                        >> 9;
                    let up = (u32::from(below) * u32::from(params.up_radiation)) >> 8;
                    e = increase(e, side + up, u8::MAX);
                }
                CellMode::Nop => {
                    self.modes[i] = CellMode::Passive;
                }
            }
            self.next[i] = e;
        }

        core::mem::swap(&mut self.current, &mut self.next);
    }
}

/// Uniform value in `[min, max]`; an inverted range yields `min`
fn random_in<R: Rng>(rng: &mut R, min: u8, max: u8) -> u8 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}
