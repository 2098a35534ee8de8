//! Reel engine — spin lifecycle state machine
//!
//! Owns the symbol cells, drives the per-reel scroll, commits outcomes and
//! evaluates wins. The engine is the single animation scheduler: callers
//! tick it with a timestamp each frame and it advances every active driver.

use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use sr_core::{AliasIndex, GameConfig, SoundCue};

use crate::latch::CountdownLatch;
use crate::result::{ResultGenerator, ResultGrid};
use crate::symbol::SymbolCell;
use crate::winline;

/// Spin lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinState {
    /// Accepting spins
    Idle,
    /// Reels in motion
    Spinning,
    /// All reels stopped, outcome being applied (transited within a tick)
    Evaluating,
}

/// Events reported from the engine to the frontend
#[derive(Debug, Clone, PartialEq)]
pub enum ReelEvent {
    /// A spin was accepted; the bet has already been debited
    SpinStarted { balance: i64 },
    /// One reel finished stopping (left-to-right cascade order)
    ReelStopped { reel: u8 },
    /// The spin settled. Emitted exactly once per spin, `win_amount` 0
    /// meaning no win. This is the display-callback contract.
    SpinSettled {
        win_amount: u32,
        balance: i64,
        winning_positions: Vec<(u8, u8)>,
    },
    /// A sound should play (subject to the caller's mute policy)
    Sound(SoundCue),
}

/// Session statistics (reset on process start, never persisted)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub spins: u64,
    pub wins: u64,
    pub total_bet: u64,
    pub total_win: u64,
}

impl SessionStats {
    /// Return-to-player percentage for the session
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0 {
            self.total_win as f64 / self.total_bet as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Per-reel spin bookkeeping
#[derive(Debug, Clone)]
struct ColumnSpin {
    /// Absolute time this reel stops
    stop_at_ms: f64,
    stopped: bool,
}

/// The reel engine
pub struct ReelEngine {
    config: GameConfig,
    catalog: AliasIndex,
    /// `size` columns × `size²` cells each
    columns: Vec<Vec<SymbolCell>>,
    state: SpinState,
    balance: i64,
    generator: ResultGenerator,
    forced_result: Option<ResultGrid>,
    pending_result: Option<ResultGrid>,
    column_spins: Vec<ColumnSpin>,
    latch: CountdownLatch,
    last_tick_ms: Option<f64>,
    stats: SessionStats,
}

impl ReelEngine {
    /// Build the full grid: every column gets `size²` cells stacked from
    /// the visible window downwards, pre-filled with random symbols.
    pub fn new(config: GameConfig, catalog: AliasIndex) -> Self {
        let mut generator = ResultGenerator::new(&config.grid);
        let size = config.grid.size as usize;
        let cells_per_reel = config.grid.cells_per_reel();

        let columns = (0..size)
            .map(|_| {
                (0..cells_per_reel)
                    .map(|row| {
                        SymbolCell::new(generator.random_symbol(), config.grid.row_center_y(row))
                    })
                    .collect()
            })
            .collect();

        Self {
            balance: config.bet.starting_balance,
            columns,
            state: SpinState::Idle,
            generator,
            forced_result: None,
            pending_result: None,
            column_spins: Vec::new(),
            latch: CountdownLatch::new(0),
            last_tick_ms: None,
            stats: SessionStats::default(),
            catalog,
            config,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // SPIN LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════

    /// Request a spin at `now_ms`. While a spin is already running this is
    /// a silent no-op returning no events: no state change, no debit.
    pub fn start_spin(&mut self, now_ms: f64) -> Vec<ReelEvent> {
        if self.state != SpinState::Idle {
            return Vec::new();
        }

        self.state = SpinState::Spinning;
        self.balance -= self.config.bet.bet as i64;
        self.stats.spins += 1;
        self.stats.total_bet += self.config.bet.bet as u64;

        // The outcome is committed up front; the animation only catches up.
        let result = self
            .forced_result
            .take()
            .unwrap_or_else(|| self.generator.generate());
        self.pending_result = Some(result);

        self.column_spins = (0..self.config.grid.size)
            .map(|i| ColumnSpin {
                stop_at_ms: now_ms + self.config.timing.column_stop_ms(i),
                stopped: false,
            })
            .collect();
        self.latch = CountdownLatch::new(self.config.grid.size as usize);

        debug!("spin started, balance {}", self.balance);
        vec![
            ReelEvent::Sound(SoundCue::SpinStart),
            ReelEvent::SpinStarted {
                balance: self.balance,
            },
        ]
    }

    /// Advance the simulation to `now_ms` and report what happened.
    pub fn tick(&mut self, now_ms: f64) -> Vec<ReelEvent> {
        let dt_ms = self
            .last_tick_ms
            .map(|last| (now_ms - last).max(0.0))
            .unwrap_or(0.0);
        self.last_tick_ms = Some(now_ms);

        let mut events = Vec::new();

        if self.state == SpinState::Spinning {
            for i in 0..self.column_spins.len() {
                if self.column_spins[i].stopped {
                    continue;
                }

                self.scroll_column(i, now_ms);

                if now_ms >= self.column_spins[i].stop_at_ms {
                    self.stop_column(i);
                    events.push(ReelEvent::ReelStopped { reel: i as u8 });
                    if self.latch.count_down() {
                        self.settle(&mut events);
                    }
                }
            }
        }

        for column in &mut self.columns {
            for cell in column {
                cell.tick(dt_ms);
            }
        }

        events
    }

    /// Move every cell of an unstopped column down by the current scroll
    /// speed, wrapping cells past the column height back to the top with a
    /// fresh filler symbol (never part of the committed result).
    fn scroll_column(&mut self, col: usize, now_ms: f64) {
        let timing = &self.config.timing;
        let stop_at = self.column_spins[col].stop_at_ms;
        let ramp_start = stop_at - timing.slowdown_window_ms;

        let speed = if now_ms >= ramp_start {
            let t = ((now_ms - ramp_start) / timing.slowdown_window_ms).min(1.0) as f32;
            timing.fast_speed + (timing.slow_speed - timing.fast_speed) * t
        } else {
            timing.fast_speed
        };

        let reel_height = self.config.grid.reel_height_px();
        let prefix = self.config.grid.symbol_prefix.clone();
        for cell in &mut self.columns[col] {
            cell.set_y(cell.y() + speed);
            if cell.y() >= reel_height {
                cell.set_y(cell.y() - reel_height);
                let filler = self.generator.random_symbol();
                cell.set_index(filler, &prefix, &self.catalog);
            }
        }
    }

    /// Snap a column to its committed outcome: the first `size` cells in
    /// vertical order take the result symbols and bounce onto the visible
    /// rows; the rest are parked below the window as fillers.
    fn stop_column(&mut self, col: usize) {
        let size = self.config.grid.size as usize;
        let targets: Vec<u8> = match &self.pending_result {
            Some(result) => (0..size).map(|row| result.symbol(col, row)).collect(),
            None => return,
        };

        let cells = &mut self.columns[col];
        let mut order: Vec<usize> = (0..cells.len()).collect();
        order.sort_by(|&a, &b| {
            cells[a]
                .y()
                .partial_cmp(&cells[b].y())
                .unwrap_or(Ordering::Equal)
        });

        let prefix = self.config.grid.symbol_prefix.clone();
        for (row, &cell_idx) in order.iter().enumerate() {
            let rest_y = self.config.grid.row_center_y(row);
            let cell = &mut self.columns[col][cell_idx];
            if row < size {
                cell.set_index(targets[row], &prefix, &self.catalog);
                cell.start_bounce(rest_y, &self.config.timing);
            } else {
                cell.set_y(rest_y);
            }
        }

        self.column_spins[col].stopped = true;
        debug!("reel {col} stopped");
    }

    /// All reels stopped: clear stale highlights, evaluate the committed
    /// grid, credit any win, highlight, and return to idle.
    fn settle(&mut self, events: &mut Vec<ReelEvent>) {
        self.state = SpinState::Evaluating;

        for column in &mut self.columns {
            for cell in column {
                if cell.winning() {
                    cell.set_winning(false, &self.config.timing);
                }
            }
        }

        let eval = match self.pending_result.take() {
            Some(result) => winline::evaluate(&result, self.config.grid.symbol_value),
            None => Default::default(),
        };

        if eval.is_win() {
            self.balance += eval.win_amount as i64;
            self.stats.wins += 1;
            self.stats.total_win += eval.win_amount as u64;
            events.push(ReelEvent::Sound(SoundCue::Win));
            self.highlight(&eval.winning_positions);
        }

        debug!(
            "spin settled, win {} balance {}",
            eval.win_amount, self.balance
        );
        events.push(ReelEvent::SpinSettled {
            win_amount: eval.win_amount,
            balance: self.balance,
            winning_positions: eval.winning_positions,
        });
        self.state = SpinState::Idle;
    }

    /// Start the win pulse on the cell occupying each winning row position
    fn highlight(&mut self, positions: &[(u8, u8)]) {
        for &(col, row) in positions {
            let Some(cells) = self.columns.get_mut(col as usize) else {
                continue;
            };
            let mut order: Vec<usize> = (0..cells.len()).collect();
            order.sort_by(|&a, &b| {
                cells[a]
                    .y()
                    .partial_cmp(&cells[b].y())
                    .unwrap_or(Ordering::Equal)
            });
            if let Some(&cell_idx) = order.get(row as usize) {
                cells[cell_idx].set_winning(true, &self.config.timing);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════

    /// Current lifecycle state
    pub fn state(&self) -> SpinState {
        self.state
    }

    /// Is a spin in progress? The spin control stays gated while true.
    pub fn is_spinning(&self) -> bool {
        self.state != SpinState::Idle
    }

    /// Current balance (authoritative; the UI only mirrors it)
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Bet per spin
    pub fn bet(&self) -> u32 {
        self.config.bet.bet
    }

    /// The reel columns for rendering
    pub fn columns(&self) -> &[Vec<SymbolCell>] {
        &self.columns
    }

    /// Has this reel finished stopping? True outside a spin. The frontend
    /// uses this to apply motion blur only to reels still scrolling.
    pub fn reel_stopped(&self, col: usize) -> bool {
        self.column_spins.get(col).map_or(true, |c| c.stopped)
    }

    /// Game configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Session statistics
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Seed the outcome RNG for reproducible sessions
    pub fn seed(&mut self, seed: u64) {
        self.generator.seed(seed);
    }

    /// Force the next spin's outcome (demos and tests)
    pub fn force_next_result(&mut self, result: ResultGrid) {
        self.forced_result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine() -> ReelEngine {
        let mut engine = ReelEngine::new(GameConfig::default(), AliasIndex::universal());
        engine.seed(1234);
        engine
    }

    /// Tick at ~60 fps from `from_ms` until `to_ms`, collecting timestamped events
    fn run(engine: &mut ReelEngine, from_ms: f64, to_ms: f64) -> Vec<(f64, ReelEvent)> {
        let mut events = Vec::new();
        let mut t = from_ms;
        while t <= to_ms {
            for ev in engine.tick(t) {
                events.push((t, ev));
            }
            t += 16.0;
        }
        events
    }

    fn settled(events: &[(f64, ReelEvent)]) -> Vec<&(f64, ReelEvent)> {
        events
            .iter()
            .filter(|(_, e)| matches!(e, ReelEvent::SpinSettled { .. }))
            .collect()
    }

    #[test]
    fn test_spin_debits_bet_before_outcome() {
        let mut engine = engine();
        let events = engine.start_spin(0.0);

        assert_eq!(engine.balance(), 98);
        assert!(engine.is_spinning());
        assert!(events.contains(&ReelEvent::Sound(SoundCue::SpinStart)));
        assert!(events.contains(&ReelEvent::SpinStarted { balance: 98 }));
    }

    #[test]
    fn test_reentrant_spin_is_a_silent_noop() {
        let mut engine = engine();
        engine.start_spin(0.0);
        let balance_after_first = engine.balance();

        let second = engine.start_spin(100.0);
        assert!(second.is_empty());
        assert_eq!(engine.balance(), balance_after_first);
        assert_eq!(engine.stats().spins, 1);

        let events = run(&mut engine, 0.0, 4000.0);
        assert_eq!(settled(&events).len(), 1, "exactly one settle per spin");
    }

    #[test]
    fn test_staggered_stop_order_and_join() {
        let mut engine = engine();
        engine.start_spin(0.0);
        let events = run(&mut engine, 0.0, 4000.0);

        let stops: Vec<(f64, u8)> = events
            .iter()
            .filter_map(|(t, e)| match e {
                ReelEvent::ReelStopped { reel } => Some((*t, *reel)),
                _ => None,
            })
            .collect();
        assert_eq!(
            stops.iter().map(|(_, r)| *r).collect::<Vec<_>>(),
            vec![0, 1, 2],
            "reels stop in left-to-right cascade order"
        );

        let timing = engine.config().timing.clone();
        for (t, reel) in &stops {
            let earliest = timing.column_stop_ms(*reel);
            assert!(
                *t >= earliest,
                "reel {reel} stopped at {t} before its stop time {earliest}"
            );
            assert!(*t < earliest + 32.0, "reel {reel} stop too late: {t}");
        }

        // The join must not fire before the last reel stops.
        let settle_t = settled(&events)[0].0;
        let last_stop_t = stops.last().unwrap().0;
        assert!(settle_t >= last_stop_t);
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_forced_win_credits_balance_and_highlights() {
        let mut engine = engine();
        // Row 0 anchored run of length 2; everything else broken.
        engine.force_next_result(ResultGrid::new(vec![
            vec![1, 1, 2],
            vec![1, 2, 3],
            vec![2, 3, 4],
        ]));
        engine.start_spin(0.0);
        assert_eq!(engine.balance(), 98);

        let events = run(&mut engine, 0.0, 4000.0);
        let (_, settle) = settled(&events)[0];
        assert_eq!(
            *settle,
            ReelEvent::SpinSettled {
                win_amount: 2,
                balance: 100,
                winning_positions: vec![(0, 0), (1, 0)],
            }
        );
        assert_eq!(engine.balance(), 100);
        assert!(events.contains(&(settled(&events)[0].0, ReelEvent::Sound(SoundCue::Win))));

        // The two cells on row 0 of reels 0 and 1 carry the pulse.
        let pulsing: usize = engine
            .columns()
            .iter()
            .map(|col| col.iter().filter(|c| c.winning()).count())
            .sum();
        assert_eq!(pulsing, 2);
    }

    #[test]
    fn test_zero_win_spin_nets_minus_bet() {
        let mut engine = engine();
        engine.force_next_result(ResultGrid::new(vec![
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![3, 4, 1],
        ]));
        engine.start_spin(0.0);
        let events = run(&mut engine, 0.0, 4000.0);

        let (_, settle) = settled(&events)[0];
        assert_eq!(
            *settle,
            ReelEvent::SpinSettled {
                win_amount: 0,
                balance: 98,
                winning_positions: Vec::new(),
            }
        );
        assert!(!events
            .iter()
            .any(|(_, e)| *e == ReelEvent::Sound(SoundCue::Win)));
    }

    #[test]
    fn test_committed_result_lands_on_visible_rows() {
        let mut engine = engine();
        let forced = ResultGrid::new(vec![vec![4, 3, 2], vec![1, 2, 3], vec![2, 1, 4]]);
        engine.force_next_result(forced.clone());
        engine.start_spin(0.0);
        // Long enough for every reel to stop and every bounce to finish.
        run(&mut engine, 0.0, 5000.0);

        let grid = engine.config().grid.clone();
        for (col_idx, column) in engine.columns().iter().enumerate() {
            let mut order: Vec<&SymbolCell> = column.iter().collect();
            order.sort_by(|a, b| a.y().partial_cmp(&b.y()).unwrap());

            for row in 0..grid.size as usize {
                assert_eq!(order[row].index(), forced.symbol(col_idx, row));
                assert_relative_eq!(order[row].y(), grid.row_center_y(row));
            }
            // Fillers are parked below the visible window.
            for cell in order.iter().skip(grid.size as usize) {
                assert!(cell.y() >= grid.reel_height_px());
            }
        }
    }

    #[test]
    fn test_filler_symbols_stay_in_alphabet() {
        let mut engine = engine();
        engine.start_spin(0.0);
        run(&mut engine, 0.0, 2000.0); // mid-spin, wraps have happened

        for column in engine.columns() {
            assert_eq!(column.len(), 9);
            for cell in column {
                assert!((1..=4).contains(&cell.index()));
            }
        }
    }

    #[test]
    fn test_next_spin_clears_previous_highlights() {
        let mut engine = engine();
        engine.force_next_result(ResultGrid::new(vec![
            vec![1, 1, 1],
            vec![1, 1, 1],
            vec![1, 1, 1],
        ]));
        engine.start_spin(0.0);
        let events = run(&mut engine, 0.0, 3700.0);
        assert_eq!(settled(&events).len(), 1);

        engine.force_next_result(ResultGrid::new(vec![
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![3, 4, 1],
        ]));
        engine.start_spin(3700.0);
        run(&mut engine, 3716.0, 7600.0);

        let pulsing: usize = engine
            .columns()
            .iter()
            .map(|col| col.iter().filter(|c| c.winning()).count())
            .sum();
        assert_eq!(pulsing, 0);
    }

    #[test]
    fn test_session_stats_accumulate() {
        let mut engine = engine();
        engine.force_next_result(ResultGrid::new(vec![
            vec![2, 1, 1],
            vec![2, 1, 3],
            vec![2, 3, 4],
        ]));
        engine.start_spin(0.0);
        run(&mut engine, 0.0, 4000.0);

        let stats = engine.stats();
        assert_eq!(stats.spins, 1);
        assert_eq!(stats.total_bet, 2);
        // Row 0 pays 3, row 1 pays 2.
        assert_eq!(stats.total_win, 5);
        assert_eq!(stats.wins, 1);
        assert_relative_eq!(stats.rtp(), 250.0);
    }
}
