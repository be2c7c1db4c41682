//! Navigation State Machine
//!
//! Which screen is visible and, on the detail screen, which article.
//! The article id lives inside the `Detail` variant, so it exists exactly
//! while the detail screen is shown.

use crate::models::ArticleId;

/// Screens of the app, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Search,
    Create,
    Detail,
    Feedback,
}

impl Page {
    /// Entries of the persistent navigation bar, in display order
    pub const MENU: [Page; 4] = [Page::Home, Page::Search, Page::Create, Page::Feedback];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Search => "search",
            Page::Create => "create",
            Page::Detail => "detail",
            Page::Feedback => "feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Search => "Search",
            Page::Create => "Create",
            Page::Detail => "Article",
            Page::Feedback => "Feedback",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationState {
    #[default]
    Home,
    Search,
    Create,
    Detail { article_id: ArticleId },
    Feedback,
}

/// User intents and page-confirmed events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Navigation bar or home-page button
    Navigate(Page),
    /// A search result was selected
    OpenArticle(ArticleId),
    /// The create page saved an article
    ArticleCreated,
    /// The detail page's back action
    Back,
}

impl NavigationState {
    pub fn page(&self) -> Page {
        match self {
            NavigationState::Home => Page::Home,
            NavigationState::Search => Page::Search,
            NavigationState::Create => Page::Create,
            NavigationState::Detail { .. } => Page::Detail,
            NavigationState::Feedback => Page::Feedback,
        }
    }

    pub fn article_id(&self) -> Option<ArticleId> {
        match self {
            NavigationState::Detail { article_id } => Some(*article_id),
            _ => None,
        }
    }

    /// The detail screen hides the navigation bar; only its back action leaves it.
    pub fn shows_menu(&self) -> bool {
        !matches!(self, NavigationState::Detail { .. })
    }

    /// Next state for `event`, or `None` if the event is not valid here.
    pub fn next(self, event: NavEvent) -> Option<NavigationState> {
        match (self, event) {
            (NavigationState::Detail { .. } | NavigationState::Search, NavEvent::Back) => {
                Some(NavigationState::Search)
            }
            (NavigationState::Detail { .. }, NavEvent::Navigate(_)) => None,
            (_, NavEvent::Navigate(page)) => Self::menu_target(page),
            (NavigationState::Search, NavEvent::OpenArticle(article_id)) => {
                Some(NavigationState::Detail { article_id })
            }
            (NavigationState::Create, NavEvent::ArticleCreated) => Some(NavigationState::Search),
            _ => None,
        }
    }

    fn menu_target(page: Page) -> Option<NavigationState> {
        match page {
            Page::Home => Some(NavigationState::Home),
            Page::Search => Some(NavigationState::Search),
            Page::Create => Some(NavigationState::Create),
            Page::Feedback => Some(NavigationState::Feedback),
            Page::Detail => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Apply `event`, staying put when it is rejected
    fn apply(state: NavigationState, event: NavEvent) -> NavigationState {
        state.next(event).unwrap_or(state)
    }

    fn all_events() -> Vec<NavEvent> {
        let mut events = vec![
            NavEvent::OpenArticle(5),
            NavEvent::OpenArticle(9),
            NavEvent::ArticleCreated,
            NavEvent::Back,
        ];
        for page in [Page::Home, Page::Search, Page::Create, Page::Detail, Page::Feedback] {
            events.push(NavEvent::Navigate(page));
        }
        events
    }

    fn reachable_states() -> HashSet<NavigationState> {
        let mut seen = HashSet::new();
        let mut frontier = vec![NavigationState::default()];
        while let Some(state) = frontier.pop() {
            if !seen.insert(state) {
                continue;
            }
            for event in all_events() {
                frontier.push(apply(state, event));
            }
        }
        seen
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationState::default();
        assert_eq!(state.page(), Page::Home);
        assert_eq!(state.article_id(), None);
        assert!(state.shows_menu());
    }

    #[test]
    fn test_article_id_set_iff_detail() {
        let states = reachable_states();
        assert_eq!(states.len(), 6); // four menu pages + two detail ids
        for state in states {
            assert_eq!(state.article_id().is_some(), state.page() == Page::Detail, "{:?}", state);
        }
    }

    #[test]
    fn test_search_then_open_then_back() {
        let state = apply(NavigationState::Home, NavEvent::Navigate(Page::Search));
        let state = apply(state, NavEvent::OpenArticle(5));
        assert_eq!(state, NavigationState::Detail { article_id: 5 });
        assert!(!state.shows_menu());

        let state = apply(state, NavEvent::Back);
        assert_eq!(state, NavigationState::Search);
        assert_eq!(state.article_id(), None);
    }

    #[test]
    fn test_back_is_idempotent() {
        let once = apply(NavigationState::Detail { article_id: 5 }, NavEvent::Back);
        let twice = apply(once, NavEvent::Back);
        assert_eq!(once, NavigationState::Search);
        assert_eq!(twice, NavigationState::Search);
    }

    #[test]
    fn test_back_is_rejected_outside_detail_and_search() {
        for from in [NavigationState::Home, NavigationState::Create, NavigationState::Feedback] {
            assert_eq!(from.next(NavEvent::Back), None, "{:?}", from);
        }
    }

    #[test]
    fn test_created_article_lands_on_search() {
        let state = apply(NavigationState::Home, NavEvent::Navigate(Page::Create));
        let state = apply(state, NavEvent::ArticleCreated);
        assert_eq!(state, NavigationState::Search);
    }

    #[test]
    fn test_menu_is_ignored_on_detail() {
        let detail = NavigationState::Detail { article_id: 3 };
        for page in Page::MENU {
            assert_eq!(detail.next(NavEvent::Navigate(page)), None);
        }
    }

    #[test]
    fn test_menu_moves_between_non_detail_pages() {
        let menu_states = [
            NavigationState::Home,
            NavigationState::Search,
            NavigationState::Create,
            NavigationState::Feedback,
        ];
        for from in menu_states {
            for page in Page::MENU {
                assert_eq!(apply(from, NavEvent::Navigate(page)).page(), page);
            }
        }
    }

    #[test]
    fn test_detail_cannot_be_entered_without_an_article() {
        assert_eq!(NavigationState::Search.next(NavEvent::Navigate(Page::Detail)), None);
    }

    #[test]
    fn test_out_of_place_events_are_rejected() {
        assert_eq!(NavigationState::Home.next(NavEvent::OpenArticle(1)), None);
        assert_eq!(NavigationState::Search.next(NavEvent::ArticleCreated), None);
        let state = apply(NavigationState::Feedback, NavEvent::ArticleCreated);
        assert_eq!(state, NavigationState::Feedback);
    }
}
