// SPDX-License-Identifier: MPL-2.0
//! Album viewer component: the book, its navigation buttons and the page counter.
//!
//! The component owns the [`Navigator`] and the decoded page images. A flip
//! is started by [`Message::Next`] / [`Message::Previous`] (buttons or
//! arrow keys), which returns a `Task` that sleeps for the flip duration and
//! then emits [`Message::FlipElapsed`]. Between the two, [`State::subscription`]
//! emits animation ticks so the turning page can fade.

mod page_view;

pub use page_view::flip_opacity;

use crate::album::{
    FlipDirection, FlipRequest, FlipTicket, Navigator, PageCounter, PageLayout, PageSet,
};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::design_tokens::motion;
use crate::ui::theming::ColorScheme;
use iced::{time, Element, Subscription, Task};
use std::time::{Duration, Instant};

/// Contextual data needed to render the book.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    /// The flip delay for `ticket` has elapsed.
    FlipElapsed(FlipTicket),
    ImageLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// Animation frame while a flip is in progress.
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    FlipStarted(FlipDirection),
    PageCommitted(usize),
}

#[derive(Debug)]
pub struct State {
    navigator: Navigator,
    pages: PageSet,
    images: Vec<Option<ImageData>>,
    flip_started: Option<Instant>,
    now: Instant,
}

impl State {
    /// Creates the viewer on the cover and starts loading every page image.
    pub fn new(pages: PageSet, flip_duration: Duration) -> (Self, Task<Message>) {
        let loads = pages
            .iter()
            .map(|page| {
                let index = page.index();
                Task::perform(
                    media::load_image_async(page.image().to_path_buf()),
                    move |result| Message::ImageLoaded { index, result },
                )
            })
            .collect::<Vec<_>>();

        let state = Self {
            navigator: Navigator::new(flip_duration),
            images: vec![None; pages.len()],
            pages,
            flip_started: None,
            now: Instant::now(),
        };
        (state, Task::batch(loads))
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.navigator.current_page()
    }

    #[must_use]
    pub fn is_flipping(&self) -> bool {
        self.navigator.is_flipping()
    }

    /// Decoded image for `index`, or `None` while loading or after a failure.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ImageData> {
        self.images.get(index).and_then(Option::as_ref)
    }

    /// Progress of the running flip in `0.0..=1.0`, `None` when idle.
    #[must_use]
    pub fn flip_progress(&self) -> Option<f32> {
        if !self.navigator.is_flipping() {
            return None;
        }
        let started = self.flip_started?;
        let duration = self.navigator.flip_duration().as_secs_f32();
        if duration <= 0.0 {
            return Some(1.0);
        }
        let elapsed = self.now.saturating_duration_since(started).as_secs_f32();
        Some((elapsed / duration).clamp(0.0, 1.0))
    }

    pub fn handle_message(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Next => {
                let request = self.navigator.advance();
                self.start_flip(request)
            }
            Message::Previous => {
                let request = self.navigator.retreat();
                self.start_flip(request)
            }
            Message::FlipElapsed(ticket) => {
                if self.navigator.complete(ticket) {
                    self.flip_started = None;
                    (
                        Event::PageCommitted(self.navigator.current_page()),
                        Task::none(),
                    )
                } else {
                    tracing::trace!(?ticket, "stale flip ignored");
                    (Event::None, Task::none())
                }
            }
            Message::ImageLoaded { index, result } => {
                match result {
                    Ok(image) => {
                        if let Some(slot) = self.images.get_mut(index) {
                            *slot = Some(image);
                        }
                    }
                    Err(error) => {
                        // Placeholder stays in place
                        tracing::debug!(page = index + 1, %error, "page image unavailable");
                    }
                }
                (Event::None, Task::none())
            }
            Message::Tick(now) => {
                self.now = now;
                (Event::None, Task::none())
            }
        }
    }

    /// Stops navigation. Flips already scheduled will be ignored on arrival.
    pub fn teardown(&mut self) {
        self.navigator.teardown();
        self.flip_started = None;
    }

    /// Animation ticks, active only while a page is turning.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.navigator.is_flipping() {
            time::every(motion::FRAME).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let layout = PageLayout::for_page(self.navigator.current_page());
        let direction = self.navigator.flip_direction();
        let turning_opacity = self.flip_progress().map_or(1.0, flip_opacity);

        page_view::view(page_view::Context {
            i18n: ctx.i18n,
            colors: ctx.colors,
            layout,
            direction,
            turning_opacity,
            pages: &self.pages,
            images: &self.images,
            counter: PageCounter::for_page(self.navigator.current_page()),
            can_retreat: self.navigator.can_retreat(),
            can_advance: self.navigator.can_advance(),
        })
    }

    fn start_flip(&mut self, request: Option<FlipRequest>) -> (Event, Task<Message>) {
        let Some(request) = request else {
            return (Event::None, Task::none());
        };

        let now = Instant::now();
        self.flip_started = Some(now);
        self.now = now;

        let FlipRequest { ticket, delay, .. } = request;
        // The timer is created on first poll, inside the runtime
        let task = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::FlipElapsed(ticket),
        );
        (Event::FlipStarted(request.direction), task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::album::{AlbumAssets, Phase, LAST_PAGE};
    use tempfile::tempdir;

    fn viewer() -> State {
        let dir = tempdir().expect("temp dir");
        let pages = PageSet::new(&AlbumAssets::new(dir.path()));
        let (state, _task) = State::new(pages, Duration::from_millis(850));
        state
    }

    fn outstanding_ticket(state: &State) -> FlipTicket {
        match state.navigator().phase() {
            Phase::Flipping { ticket, .. } => ticket,
            Phase::Idle => panic!("expected a flip in progress"),
        }
    }

    #[test]
    fn next_starts_a_flip_and_commit_moves_to_first_spread() {
        let mut state = viewer();
        let (event, _task) = state.handle_message(Message::Next);
        assert_eq!(event, Event::FlipStarted(FlipDirection::Forward));
        assert!(state.is_flipping());
        assert_eq!(state.current_page(), 0);

        let ticket = outstanding_ticket(&state);
        let (event, _task) = state.handle_message(Message::FlipElapsed(ticket));
        assert_eq!(event, Event::PageCommitted(1));
        assert!(!state.is_flipping());
    }

    #[test]
    fn input_during_flip_is_ignored() {
        let mut state = viewer();
        let _ = state.handle_message(Message::Next);
        let ticket = outstanding_ticket(&state);

        let (event, _task) = state.handle_message(Message::Next);
        assert_eq!(event, Event::None);
        let (event, _task) = state.handle_message(Message::Previous);
        assert_eq!(event, Event::None);

        let _ = state.handle_message(Message::FlipElapsed(ticket));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn previous_on_cover_does_nothing() {
        let mut state = viewer();
        let (event, _task) = state.handle_message(Message::Previous);
        assert_eq!(event, Event::None);
        assert!(!state.is_flipping());
    }

    #[test]
    fn duplicate_commit_is_ignored() {
        let mut state = viewer();
        let _ = state.handle_message(Message::Next);
        let ticket = outstanding_ticket(&state);
        let _ = state.handle_message(Message::FlipElapsed(ticket));

        let (event, _task) = state.handle_message(Message::FlipElapsed(ticket));
        assert_eq!(event, Event::None);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn walking_forward_reaches_the_closing_page() {
        let mut state = viewer();
        while state.navigator().can_advance() {
            let _ = state.handle_message(Message::Next);
            let ticket = outstanding_ticket(&state);
            let _ = state.handle_message(Message::FlipElapsed(ticket));
        }
        assert_eq!(state.current_page(), LAST_PAGE);
    }

    #[test]
    fn teardown_drops_pending_flip() {
        let mut state = viewer();
        let _ = state.handle_message(Message::Next);
        let ticket = outstanding_ticket(&state);

        state.teardown();
        let (event, _task) = state.handle_message(Message::FlipElapsed(ticket));
        assert_eq!(event, Event::None);
        assert_eq!(state.current_page(), 0);
        assert_eq!(state.flip_progress(), None);
    }

    #[test]
    fn failed_image_load_keeps_placeholder() {
        let mut state = viewer();
        let _ = state.handle_message(Message::ImageLoaded {
            index: 0,
            result: Err(Error::Io("missing".into())),
        });
        assert!(state.image(0).is_none());
    }

    #[test]
    fn loaded_image_is_stored_by_index() {
        let mut state = viewer();
        let image = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let _ = state.handle_message(Message::ImageLoaded {
            index: 3,
            result: Ok(image),
        });
        assert!(state.image(3).is_some());
        assert!(state.image(2).is_none());
        assert!(state.image(99).is_none());
    }

    #[test]
    fn progress_follows_ticks() {
        let mut state = viewer();
        assert_eq!(state.flip_progress(), None);

        let _ = state.handle_message(Message::Next);
        let started = state.flip_started.expect("flip started");
        let _ = state.handle_message(Message::Tick(started + Duration::from_millis(425)));
        let progress = state.flip_progress().expect("flipping");
        assert!((progress - 0.5).abs() < 0.01);

        let _ = state.handle_message(Message::Tick(started + Duration::from_secs(5)));
        assert_eq!(state.flip_progress(), Some(1.0));
    }
}
