//! Best-first rover search over a [`Grid`].
//!
//! The search runs to completion inside [`PathSearch::run`]. Every cost
//! improvement is appended to a relaxation log, and the path is rebuilt from
//! that log afterwards:
//!
//! - the *first* logged event reaching a cell names its predecessor, even if
//!   a later relaxation found a cheaper way in;
//! - the diagonal surcharge alternates on a [`DiagonalParity`] counter, and
//!   [`PathSearch::extract_cost`] walks the final path with a fresh counter.
//!   The reported fuel can therefore differ from the cost the search recorded
//!   for the goal.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::frontier::PriorityFrontier;
use crate::grid::{is_diagonal, manhattan, Grid};
use crate::location::Location;

/// Alternating counter for the diagonal surcharge. Starts at one; a diagonal
/// move costs one extra unit whenever the counter is even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalParity {
    counter: u64,
}

impl Default for DiagonalParity {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagonalParity {
    pub fn new() -> Self {
        Self { counter: 1 }
    }

    /// Extra cost for a diagonal move at the current parity.
    pub fn surcharge(&self) -> u64 {
        if self.counter % 2 == 0 {
            1
        } else {
            0
        }
    }

    pub fn advance(&mut self) {
        self.counter += 1;
    }
}

/// Recorded improvement of the best known cost to `to`, reached from `from`.
///
/// The start cell is logged once with no predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaxationEvent {
    pub from: Option<Location>,
    pub to: Location,
}

/// How the search loop terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was popped from the frontier.
    GoalReached,
    /// The frontier ran dry before the goal was popped.
    FrontierExhausted,
}

#[derive(Debug, Clone, Default)]
struct SearchState {
    costs: HashMap<Location, u64>,
    events: Vec<RelaxationEvent>,
}

impl SearchState {
    fn first_event_into(&self, location: Location) -> Option<&RelaxationEvent> {
        self.events.iter().find(|event| event.to == location)
    }
}

/// Completed search over a grid, holding the cost map and relaxation log.
#[derive(Debug, Clone)]
pub struct PathSearch<'g> {
    grid: &'g Grid,
    state: SearchState,
    outcome: SearchOutcome,
    expansions: usize,
}

impl<'g> PathSearch<'g> {
    /// Run the search from the grid's start to its goal.
    pub fn run(grid: &'g Grid) -> Result<Self> {
        let start = grid.start();
        let goal = grid.goal();

        let mut state = SearchState::default();
        let mut frontier = PriorityFrontier::new();
        let mut parity = DiagonalParity::new();
        let mut outcome = SearchOutcome::FrontierExhausted;
        let mut expansions = 0;

        state.costs.insert(start, 0);
        state.events.push(RelaxationEvent {
            from: None,
            to: start,
        });
        frontier.insert(start, 0);

        debug!(
            width = grid.width(),
            height = grid.height(),
            "starting rover search"
        );

        while !frontier.is_empty() {
            let current = frontier.extract_min()?;
            expansions += 1;

            if current == goal {
                outcome = SearchOutcome::GoalReached;
                break;
            }

            // Every location is costed before it is inserted into the frontier.
            let current_cost = state.costs[&current];

            // Parity moves at most once per expanded cell.
            let mut parity_advanced = false;
            for next in grid.neighbours(current) {
                let step_cost = grid
                    .edge_cost(current, next)
                    .ok_or(Error::InvalidStep {
                        from: current,
                        to: next,
                    })?;
                let mut next_cost = current_cost + step_cost;

                if matches!(state.costs.get(&next), Some(&known) if next_cost >= known) {
                    continue;
                }

                if is_diagonal(current, next) {
                    next_cost += parity.surcharge();
                    if !parity_advanced {
                        parity.advance();
                        parity_advanced = true;
                    }
                }

                state.costs.insert(next, next_cost);
                frontier.insert(next, next_cost + manhattan(next, goal));
                state.events.push(RelaxationEvent {
                    from: Some(current),
                    to: next,
                });
                trace!(from = %current, to = %next, cost = next_cost, "relaxed edge");
            }
        }

        if outcome == SearchOutcome::FrontierExhausted {
            warn!(%goal, expansions, "frontier exhausted before reaching goal");
        }
        debug!(
            ?outcome,
            expansions,
            events = state.events.len(),
            "rover search finished"
        );

        Ok(Self {
            grid,
            state,
            outcome,
            expansions,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    /// Number of locations popped from the frontier.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Relaxation log in the order events were recorded.
    pub fn events(&self) -> &[RelaxationEvent] {
        &self.state.events
    }

    /// Best cost the search recorded for `location`, surcharges included.
    pub fn cost_to(&self, location: Location) -> Option<u64> {
        self.state.costs.get(&location).copied()
    }

    /// Rebuild the start-to-goal path from the relaxation log.
    ///
    /// Each step back follows the first event that reached the current cell.
    /// When nothing beyond the start was ever relaxed the path is the start
    /// cell alone.
    pub fn extract_path(&self) -> Result<Vec<Location>> {
        let start = self.grid.start();
        let goal = self.grid.goal();

        if self.state.events.len() == 1 {
            return Ok(vec![start]);
        }

        let arrival = self
            .state
            .first_event_into(goal)
            .ok_or(Error::GoalUnreachable { start, goal })?;

        let mut path = vec![goal];
        let mut predecessor = arrival.from;
        while let Some(location) = predecessor {
            if location == start {
                break;
            }
            path.push(location);
            predecessor = self
                .state
                .first_event_into(location)
                .and_then(|event| event.from);
        }
        path.push(start);
        path.reverse();
        Ok(path)
    }

    /// Total fuel for `path`: edge costs plus the alternating diagonal
    /// surcharge, counted from a fresh parity on every call.
    pub fn extract_cost(&self, path: &[Location]) -> Result<u64> {
        if path.len() <= 1 {
            return Ok(0);
        }

        let mut parity = DiagonalParity::new();
        let mut total = 0;
        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from.x.abs_diff(to.x) > 1 || from.y.abs_diff(to.y) > 1 || from == to {
                return Err(Error::InvalidStep { from, to });
            }

            if is_diagonal(from, to) {
                total += parity.surcharge();
                parity.advance();
            }

            total += self
                .grid
                .edge_cost(from, to)
                .ok_or(Error::InvalidStep { from, to })?;
        }

        Ok(total)
    }
}
