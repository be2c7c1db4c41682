//! Application Context
//!
//! Navigation state owned by the composition root, shared via Leptos Context API.

use leptos::prelude::*;

use crate::navigation::{NavEvent, NavigationState, Page};

/// Navigation signals provided via context
#[derive(Clone, Copy)]
pub struct NavContext {
    /// Current navigation state - read
    pub state: ReadSignal<NavigationState>,
    /// Current navigation state - write (only through `dispatch`)
    set_state: WriteSignal<NavigationState>,
}

impl NavContext {
    pub fn new(state: (ReadSignal<NavigationState>, WriteSignal<NavigationState>)) -> Self {
        Self {
            state: state.0,
            set_state: state.1,
        }
    }

    /// Feed an event through the state machine.
    ///
    /// Subscribers are only notified when the state actually changes.
    pub fn dispatch(&self, event: NavEvent) {
        let current = self.state.get_untracked();
        match current.next(event) {
            Some(next) if next != current => {
                tracing::debug!(
                    from = current.page().as_str(),
                    to = next.page().as_str(),
                    "navigated"
                );
                self.set_state.set(next);
            }
            Some(_) => {}
            None => {
                tracing::debug!(
                    page = current.page().as_str(),
                    event = ?event,
                    "navigation event ignored"
                );
            }
        }
    }

    pub fn page(&self) -> Page {
        self.state.get().page()
    }

    pub fn shows_menu(&self) -> bool {
        self.state.get().shows_menu()
    }
}
