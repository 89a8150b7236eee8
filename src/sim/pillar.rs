//! Pillar field: per-cell drop animations
//!
//! Every cell runs an independent timer. A fixed-rate trigger clock picks a
//! random cell every `trigger_interval` seconds of accumulated time and, if
//! that cell is idle, starts its drop. Heights and color blends are sampled
//! from a 4-segment piecewise-linear curve:
//!
//! | segment          | height            | blend          |
//! |------------------|-------------------|----------------|
//! | `[0, drop)`      | 0                 | 0 -> 0.75      |
//! | `[drop, settle)` | 0 -> min_z        | 0.75           |
//! | `[settle, rise)` | min_z             | 0.75           |
//! | `[rise, total]`  | min_z -> 0        | 0.75 -> 1.0    |

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{BLEND_END, BLEND_START, BLEND_WARN, START_EPSILON};
use crate::map_range;
use crate::tuning::{Tuning, TuningError};

/// Animation state of one pillar
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PillarAnim {
    /// Resting at full height
    #[default]
    Idle,
    /// Drop in progress; `elapsed` is in `(0, total]`
    Animating { elapsed: f32 },
}

impl PillarAnim {
    /// Seconds into the animation, 0 when idle
    pub fn animation_time(&self) -> f32 {
        match *self {
            PillarAnim::Idle => 0.0,
            PillarAnim::Animating { elapsed } => elapsed,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PillarAnim::Idle)
    }

    fn advance(&mut self, dt: f32, total: f32) {
        if let PillarAnim::Animating { elapsed } = self {
            *elapsed += dt;
            if *elapsed > total {
                *self = PillarAnim::Idle;
            }
        }
    }
}

/// Derived per-cell render inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarSample {
    /// Vertical offset from rest height (<= 0)
    pub height_offset: f32,
    /// Palette blend factor in [0, 1]
    pub color_blend: f32,
}

impl PillarSample {
    /// What an idle pillar reports
    pub const IDLE: PillarSample = PillarSample {
        height_offset: 0.0,
        color_blend: BLEND_WARN,
    };
}

/// Keyframes of the drop animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarCurve {
    pub drop: f32,
    pub settle: f32,
    pub rise: f32,
    pub total: f32,
    pub min_z: f32,
}

impl PillarCurve {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            drop: tuning.drop_time,
            settle: tuning.settle_time,
            rise: tuning.rise_time,
            total: tuning.anim_time,
            min_z: tuning.min_z,
        }
    }

    /// Sample the curve `t` seconds into an animation
    pub fn sample(&self, t: f32) -> PillarSample {
        if t < self.drop {
            PillarSample {
                height_offset: 0.0,
                color_blend: map_range(t, 0.0, self.drop, BLEND_START, BLEND_WARN),
            }
        } else if t < self.settle {
            PillarSample {
                height_offset: map_range(t, self.drop, self.settle, 0.0, self.min_z),
                color_blend: BLEND_WARN,
            }
        } else if t < self.rise {
            PillarSample {
                height_offset: self.min_z,
                color_blend: BLEND_WARN,
            }
        } else {
            PillarSample {
                height_offset: map_range(t, self.rise, self.total, self.min_z, 0.0),
                color_blend: map_range(t, self.rise, self.total, BLEND_WARN, BLEND_END),
            }
        }
    }
}

/// Grid of pillar timers plus the random drop trigger
#[derive(Debug, Clone)]
pub struct PillarField {
    cells: Vec<PillarAnim>,
    curve: PillarCurve,
    trigger_interval: f32,
    /// Accumulated time not yet consumed by the trigger
    trigger_clock: f32,
    rng: Pcg32,
}

impl PillarField {
    /// Field with an injected random source
    pub fn new(tuning: &Tuning, rng: Pcg32) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::from_valid(tuning, rng))
    }

    /// Field with a PCG stream seeded from `seed`
    pub fn seeded(tuning: &Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::new(tuning, Pcg32::seed_from_u64(seed))
    }

    /// Skips validation; `tuning` must already have passed it
    pub(crate) fn from_valid(tuning: &Tuning, rng: Pcg32) -> Self {
        Self {
            cells: vec![PillarAnim::Idle; tuning.cell_count()],
            curve: PillarCurve::from_tuning(tuning),
            trigger_interval: tuning.trigger_interval,
            trigger_clock: 0.0,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn curve(&self) -> &PillarCurve {
        &self.curve
    }

    pub fn state(&self, index: usize) -> PillarAnim {
        self.cells[index]
    }

    pub fn animation_time(&self, index: usize) -> f32 {
        self.cells[index].animation_time()
    }

    /// Start a drop on an idle cell. Returns false if it was already animating.
    ///
    /// The timer starts at a tiny epsilon rather than the unconsumed part of
    /// the frame, so a triggered pillar lags by up to one frame.
    pub fn start(&mut self, index: usize) -> bool {
        let cell = &mut self.cells[index];
        if !cell.is_idle() {
            return false;
        }
        *cell = PillarAnim::Animating {
            elapsed: START_EPSILON,
        };
        log::trace!("pillar {} dropping", index);
        true
    }

    /// Advance the trigger clock and every running animation
    pub fn tick(&mut self, elapsed: f32) {
        self.trigger_clock += elapsed;
        while self.trigger_clock >= self.trigger_interval {
            self.trigger_clock -= self.trigger_interval;
            let index = self.rng.random_range(0..self.cells.len());
            self.start(index);
        }

        let total = self.curve.total;
        for cell in &mut self.cells {
            cell.advance(elapsed, total);
        }
    }

    /// Height offset and color blend of one cell
    pub fn sample(&self, index: usize) -> PillarSample {
        match self.cells[index] {
            PillarAnim::Idle => PillarSample::IDLE,
            PillarAnim::Animating { elapsed } => self.curve.sample(elapsed),
        }
    }

    /// Samples for every cell in index order
    pub fn samples(&self) -> impl Iterator<Item = PillarSample> + '_ {
        (0..self.cells.len()).map(|i| self.sample(i))
    }

    /// Number of cells currently animating
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_idle()).count()
    }

    /// Return every pillar to rest and clear the trigger clock.
    /// The random stream is not reseeded.
    pub fn reset(&mut self) {
        self.cells.fill(PillarAnim::Idle);
        self.trigger_clock = 0.0;
        log::debug!("pillar field reset ({} cells)", self.cells.len());
    }
}
