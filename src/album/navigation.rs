// SPDX-License-Identifier: MPL-2.0
//! Page flip state machine.
//!
//! A flip is a two-step transition: [`Navigator::advance`] or
//! [`Navigator::retreat`] accept the input and enter [`Phase::Flipping`],
//! then [`Navigator::complete`] commits the new page once the flip delay has
//! elapsed. While a flip is outstanding every navigation input is ignored, so
//! at most one flip is ever in flight.
//!
//! The target page is computed when the flip starts and committed unchanged.

use super::{LAST_PAGE, TOTAL_PAGES};
use crate::config::DEFAULT_FLIP_DURATION_MS;
use std::time::Duration;

/// Direction of a page flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    /// Towards the closing page.
    Forward,
    /// Towards the cover.
    Backward,
}

/// Identifies one accepted flip so a late or duplicate commit can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlipTicket(u64);

/// Navigation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Flipping {
        direction: FlipDirection,
        ticket: FlipTicket,
        target: usize,
    },
}

/// An accepted flip. The caller schedules `complete(ticket)` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipRequest {
    pub direction: FlipDirection,
    pub ticket: FlipTicket,
    pub delay: Duration,
}

/// Current page plus flip phase.
#[derive(Debug, Clone)]
pub struct Navigator {
    current_page: usize,
    phase: Phase,
    flip_duration: Duration,
    next_ticket: u64,
    torn_down: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_FLIP_DURATION_MS))
    }
}

impl Navigator {
    /// Starts on the cover, idle.
    #[must_use]
    pub fn new(flip_duration: Duration) -> Self {
        Self {
            current_page: 0,
            phase: Phase::Idle,
            flip_duration,
            next_ticket: 0,
            torn_down: false,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_flipping(&self) -> bool {
        matches!(self.phase, Phase::Flipping { .. })
    }

    #[must_use]
    pub fn flip_direction(&self) -> Option<FlipDirection> {
        match self.phase {
            Phase::Flipping { direction, .. } => Some(direction),
            Phase::Idle => None,
        }
    }

    #[must_use]
    pub fn flip_duration(&self) -> Duration {
        self.flip_duration
    }

    #[must_use]
    pub fn is_single_page_view(&self) -> bool {
        super::page::is_single_page(self.current_page)
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.torn_down && !self.is_flipping() && self.current_page < LAST_PAGE
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        !self.torn_down && !self.is_flipping() && self.current_page != 0
    }

    /// Requests a forward flip. Returns `None` when the input is ignored.
    pub fn advance(&mut self) -> Option<FlipRequest> {
        if !self.can_advance() {
            return None;
        }
        let target = if self.current_page == 0 {
            1
        } else if self.current_page + 2 >= LAST_PAGE {
            LAST_PAGE
        } else {
            self.current_page + 2
        };
        Some(self.begin(FlipDirection::Forward, target))
    }

    /// Requests a backward flip. Returns `None` when the input is ignored.
    pub fn retreat(&mut self) -> Option<FlipRequest> {
        if !self.can_retreat() {
            return None;
        }
        let target = if self.current_page == LAST_PAGE {
            TOTAL_PAGES - 3
        } else if self.current_page <= 2 {
            0
        } else {
            self.current_page - 2
        };
        Some(self.begin(FlipDirection::Backward, target))
    }

    /// Commits the flip identified by `ticket`.
    ///
    /// Returns `false` when the ticket is stale or the navigator was torn down.
    pub fn complete(&mut self, ticket: FlipTicket) -> bool {
        if self.torn_down {
            return false;
        }
        match self.phase {
            Phase::Flipping {
                ticket: outstanding,
                target,
                ..
            } if outstanding == ticket => {
                self.current_page = target;
                self.phase = Phase::Idle;
                tracing::trace!(page = target, "flip committed");
                true
            }
            _ => false,
        }
    }

    /// Stops accepting input and drops any outstanding flip.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.phase = Phase::Idle;
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn begin(&mut self, direction: FlipDirection, target: usize) -> FlipRequest {
        let ticket = FlipTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.phase = Phase::Flipping {
            direction,
            ticket,
            target,
        };
        tracing::trace!(?direction, from = self.current_page, to = target, "flip started");
        FlipRequest {
            direction,
            ticket,
            delay: self.flip_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip_forward(nav: &mut Navigator) -> bool {
        match nav.advance() {
            Some(request) => nav.complete(request.ticket),
            None => false,
        }
    }

    fn flip_backward(nav: &mut Navigator) -> bool {
        match nav.retreat() {
            Some(request) => nav.complete(request.ticket),
            None => false,
        }
    }

    fn at_page(page: usize) -> Navigator {
        let mut nav = Navigator::default();
        while nav.current_page() != page {
            assert!(flip_forward(&mut nav), "cannot reach page {page}");
        }
        nav
    }

    #[test]
    fn starts_idle_on_cover() {
        let nav = Navigator::default();
        assert_eq!(nav.current_page(), 0);
        assert_eq!(nav.phase(), Phase::Idle);
        assert!(nav.is_single_page_view());
        assert!(nav.flip_direction().is_none());
    }

    #[test]
    fn forward_walk_visits_cover_spreads_and_closing_page() {
        let mut nav = Navigator::default();
        let mut visited = vec![nav.current_page()];
        while flip_forward(&mut nav) {
            visited.push(nav.current_page());
        }
        assert_eq!(visited, vec![0, 1, 3, 5, 7, 9, 11]);
    }

    #[test]
    fn backward_walk_mirrors_forward_walk() {
        let mut nav = at_page(LAST_PAGE);
        let mut visited = vec![nav.current_page()];
        while flip_backward(&mut nav) {
            visited.push(nav.current_page());
        }
        assert_eq!(visited, vec![11, 9, 7, 5, 3, 1, 0]);
    }

    #[test]
    fn page_commits_only_on_completion() {
        let mut nav = Navigator::default();
        let request = nav.advance().expect("advance from cover");

        assert_eq!(nav.current_page(), 0);
        assert!(nav.is_flipping());
        assert_eq!(nav.flip_direction(), Some(FlipDirection::Forward));
        assert_eq!(request.delay, Duration::from_millis(850));

        assert!(nav.complete(request.ticket));
        assert_eq!(nav.current_page(), 1);
        assert!(!nav.is_flipping());
        assert!(nav.flip_direction().is_none());
    }

    #[test]
    fn input_during_flip_is_ignored() {
        let mut nav = at_page(3);
        let request = nav.advance().expect("advance");

        assert!(nav.advance().is_none());
        assert!(nav.retreat().is_none());
        assert!(!nav.can_advance());
        assert!(!nav.can_retreat());

        nav.complete(request.ticket);
        assert_eq!(nav.current_page(), 5);
    }

    #[test]
    fn boundaries_are_no_ops() {
        let mut nav = Navigator::default();
        assert!(!nav.can_retreat());
        assert!(nav.retreat().is_none());
        assert_eq!(nav.phase(), Phase::Idle);

        let mut nav = at_page(LAST_PAGE);
        assert!(!nav.can_advance());
        assert!(nav.advance().is_none());
        assert_eq!(nav.phase(), Phase::Idle);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut nav = Navigator::default();
        let first = nav.advance().expect("advance");
        assert!(nav.complete(first.ticket));

        let second = nav.advance().expect("advance");
        assert_ne!(first.ticket, second.ticket);
        assert!(!nav.complete(first.ticket));
        assert!(nav.is_flipping());
        assert_eq!(nav.current_page(), 1);

        assert!(nav.complete(second.ticket));
        assert_eq!(nav.current_page(), 3);
    }

    #[test]
    fn duplicate_completion_commits_once() {
        let mut nav = Navigator::default();
        let request = nav.advance().expect("advance");
        assert!(nav.complete(request.ticket));
        assert!(!nav.complete(request.ticket));
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn commit_after_teardown_is_ignored() {
        let mut nav = Navigator::default();
        let request = nav.advance().expect("advance");
        nav.teardown();

        assert!(!nav.complete(request.ticket));
        assert_eq!(nav.current_page(), 0);
        assert!(nav.advance().is_none());
        assert!(nav.is_torn_down());
    }

    #[test]
    fn target_is_fixed_when_flip_starts() {
        let mut nav = at_page(9);
        let request = nav.advance().expect("advance");
        assert_eq!(
            nav.phase(),
            Phase::Flipping {
                direction: FlipDirection::Forward,
                ticket: request.ticket,
                target: LAST_PAGE,
            }
        );
    }

    #[test]
    fn page_stays_in_range_and_on_a_valid_slot() {
        let mut nav = Navigator::default();
        let script = [true, true, false, true, true, true, true, true, false, false, true, false];
        for forward in script.into_iter().cycle().take(60) {
            if forward {
                flip_forward(&mut nav);
            } else {
                flip_backward(&mut nav);
            }
            let page = nav.current_page();
            assert!(page < TOTAL_PAGES);
            assert!(page == 0 || page == LAST_PAGE || page % 2 == 1);
            assert_eq!(nav.is_flipping(), nav.flip_direction().is_some());
        }
    }

    #[test]
    fn custom_duration_is_reported_in_request() {
        let mut nav = Navigator::new(Duration::from_millis(200));
        let request = nav.advance().expect("advance");
        assert_eq!(request.delay, Duration::from_millis(200));
        assert_eq!(nav.flip_duration(), Duration::from_millis(200));
    }
}
