// driver.rs - Tick loop: age, rasterize, transmit, step, police the population

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

use crate::automaton::Automaton;
use crate::client::Screen;
use crate::color::ColorMode;
use crate::frame::PixelBuffer;
use crate::grid::{update_ages, AgeGrid, ZERO_AGES};
use crate::raster::rasterize;

/// Fewer live cells than this and the board is reseeded.
pub const DIE_OUT_BELOW: usize = 10;
/// More live cells than this (about 85% of 4096) and the board is reseeded.
pub const OVERPOPULATED_ABOVE: usize = 3500;
/// Population is logged every this many generations.
pub const STATS_EVERY: u64 = 50;
/// Shortest tick period; `interval` rejects zero.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reseed {
    DieOut,
    Overpopulation,
}

pub fn population_check(alive: usize) -> Option<Reseed> {
    if alive < DIE_OUT_BELOW {
        Some(Reseed::DieOut)
    } else if alive > OVERPOPULATED_ABOVE {
        Some(Reseed::Overpopulation)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    ShuttingDown,
}

/// Outcome of one tick, mostly for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub generation: u64,
    pub alive: usize,
    pub sent: bool,
    pub reseed: Option<Reseed>,
}

pub struct Driver<S> {
    life: Automaton,
    ages: AgeGrid,
    screen: S,
    pattern: String,
    mode: ColorMode,
    period: Duration,
    state: DriverState,
}

impl<S: Screen> Driver<S> {
    /// Takes ownership of the automaton and loads `pattern` into it.
    pub fn new(mut life: Automaton, screen: S, pattern: &str, mode: ColorMode, period: Duration) -> Self {
        life.load_pattern(pattern);
        Self {
            life,
            ages: ZERO_AGES,
            screen,
            pattern: pattern.to_string(),
            mode,
            period: period.max(MIN_PERIOD),
            state: DriverState::Running,
        }
    }

    pub fn life(&self) -> &Automaton {
        &self.life
    }

    pub fn life_mut(&mut self) -> &mut Automaton {
        &mut self.life
    }

    pub fn ages(&self) -> &AgeGrid {
        &self.ages
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Ages the cells and renders the current board.
    pub fn render(&mut self) -> PixelBuffer {
        update_ages(&mut self.ages, self.life.cells());
        rasterize(&self.life, &self.ages, self.mode)
    }

    /// Reseeds from the starting pattern if the population left the
    /// interesting range.
    pub fn check_population(&mut self) -> Option<Reseed> {
        let reseed = population_check(self.life.count_alive())?;
        match reseed {
            Reseed::DieOut => info!("Population too low, reseeding"),
            Reseed::Overpopulation => info!("Population too high, reseeding"),
        }
        self.life.load_pattern(&self.pattern);
        self.ages = ZERO_AGES;
        Some(reseed)
    }

    /// One full tick. A failed transmission is logged; the simulation
    /// still advances.
    pub async fn tick(&mut self) -> TickReport {
        let frame = self.render();

        let sent = match self.screen.draw_image(&frame).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Error drawing frame");
                false
            }
        };

        let generation = self.life.generation();
        if generation % STATS_EVERY == 0 {
            info!(generation, alive = self.life.count_alive(), "Population");
        }

        self.life.step();
        let reseed = self.check_population();

        TickReport {
            generation: self.life.generation(),
            alive: self.life.count_alive(),
            sent,
            reseed,
        }
    }

    /// Ticks every `period` until `shutdown` resolves. Shutdown is only
    /// observed between ticks; a tick in flight runs to completion.
    pub async fn run<F>(self, shutdown: F) -> Self
    where
        F: Future<Output = ()>,
    {
        self.run_with(shutdown, |_| {}).await
    }

    /// Like [`Driver::run`], handing every tick's report to `on_tick`.
    pub async fn run_with<F, R>(mut self, shutdown: F, mut on_tick: R) -> Self
    where
        F: Future<Output = ()>,
        R: FnMut(&TickReport),
    {
        let mut ticker = time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        while self.state == DriverState::Running {
            tokio::select! {
                _ = ticker.tick() => {
                    let report = self.tick().await;
                    on_tick(&report);
                }
                _ = &mut shutdown => {
                    info!("Shutting down");
                    self.state = DriverState::ShuttingDown;
                }
            }
        }
        self
    }
}
