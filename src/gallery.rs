//! State machine behind the project detail modal.
//!
//! Owns modal visibility, the active content tab, the device-view mode and
//! the carousel position. Components hold it in a signal and call the
//! transition methods; every method is a silent no-op when its preconditions
//! fail, so stray events can never panic or produce an out-of-range index.

use std::sync::Arc;

use crate::content::{Project, ViewMode};

/// How long the closed modal keeps its project so the exit transition has
/// content to fade out.
pub const CLEAR_DELAY_MS: u64 = 200;

/// Content tab inside the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Details,
    Gallery,
}

/// Proof that a deferred clear belongs to a specific close. Opening or
/// closing again invalidates older tokens, so a late timer can never wipe a
/// newly opened project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearToken(u64);

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    project: Option<Arc<Project>>,
    is_open: bool,
    tab: Tab,
    view_mode: ViewMode,
    image_index: usize,
    epoch: u64,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn project(&self) -> Option<&Arc<Project>> {
        self.project.as_ref()
    }

    /// Images of the collection selected by the current view mode, with the
    /// first-collection fallback applied. Empty when no project or gallery
    /// is active.
    pub fn images(&self) -> &[String] {
        self.project
            .as_deref()
            .and_then(|p| p.collection_for(self.view_mode))
            .map(|c| c.images.as_slice())
            .unwrap_or(&[])
    }

    pub fn image_count(&self) -> usize {
        self.images().len()
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images().get(self.image_index).map(String::as_str)
    }

    /// Opens the modal on the details tab with a fresh carousel.
    pub fn open(&mut self, project: Arc<Project>) {
        self.project = Some(project);
        self.is_open = true;
        self.tab = Tab::Details;
        self.view_mode = ViewMode::Desktop;
        self.image_index = 0;
        self.epoch += 1;
    }

    /// Hides the modal immediately. The project stays behind for the exit
    /// transition; pass the returned token to [`ModalState::clear_project`]
    /// once the transition is over.
    pub fn close(&mut self) -> ClearToken {
        self.is_open = false;
        self.epoch += 1;
        ClearToken(self.epoch)
    }

    /// Deferred half of [`ModalState::close`]. Ignored when the modal was
    /// reopened (or closed again) since the token was issued.
    pub fn clear_project(&mut self, token: ClearToken) {
        if token.0 == self.epoch && !self.is_open {
            self.project = None;
        }
    }

    /// Switches content tabs. The gallery tab is only reachable when the
    /// active project actually has images.
    pub fn select_tab(&mut self, tab: Tab) {
        if !self.is_open {
            return;
        }
        if tab == Tab::Gallery && !self.has_gallery() {
            return;
        }
        self.tab = tab;
    }

    /// Switches the device-view collection and restarts the carousel, even
    /// when the new collection resolves to the same images.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if !self.is_open {
            return;
        }
        self.view_mode = mode;
        self.image_index = 0;
    }

    pub fn next_image(&mut self) {
        if !self.is_open {
            return;
        }
        let count = self.image_count();
        if count == 0 {
            return;
        }
        self.image_index = (self.image_index + 1) % count;
    }

    pub fn prev_image(&mut self) {
        if !self.is_open {
            return;
        }
        let count = self.image_count();
        if count == 0 {
            return;
        }
        self.image_index = (self.image_index + count - 1) % count;
    }

    /// Jumps straight to a thumbnail. Out-of-range indices are rejected and
    /// leave the state untouched.
    pub fn select_image(&mut self, index: usize) {
        if !self.is_open {
            return;
        }
        if index < self.image_count() {
            self.image_index = index;
        }
    }

    pub fn has_gallery(&self) -> bool {
        self.project.as_deref().is_some_and(Project::has_gallery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GalleryCollection;

    fn images(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("/images/{prefix}-{i}.png")).collect()
    }

    fn project(gallery: Vec<GalleryCollection>) -> Arc<Project> {
        Arc::new(Project {
            slug: "sample".to_string(),
            title: "Sample".to_string(),
            summary: String::new(),
            description: String::new(),
            image: "/images/sample.png".to_string(),
            category: "Web Development".to_string(),
            year: "2025".to_string(),
            duration: "1 month".to_string(),
            team: "Solo".to_string(),
            order: 1,
            tech: vec!["Rust".to_string()],
            features: Vec::new(),
            gallery,
            live_url: None,
            repo_url: None,
        })
    }

    fn galleried(desktop: usize, mobile: usize) -> Arc<Project> {
        project(vec![
            GalleryCollection {
                mode: ViewMode::Desktop,
                images: images("desktop", desktop),
            },
            GalleryCollection {
                mode: ViewMode::Mobile,
                images: images("mobile", mobile),
            },
        ])
    }

    fn open_on_gallery(project: Arc<Project>) -> ModalState {
        let mut state = ModalState::new();
        state.open(project);
        state.select_tab(Tab::Gallery);
        state
    }

    #[test]
    fn open_starts_on_details_with_fresh_carousel() {
        let mut state = open_on_gallery(galleried(6, 5));
        state.set_view_mode(ViewMode::Mobile);
        state.next_image();

        state.open(galleried(3, 2));
        assert!(state.is_open());
        assert_eq!(state.tab(), Tab::Details);
        assert_eq!(state.view_mode(), ViewMode::Desktop);
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn gallery_tab_unreachable_without_images() {
        let mut state = ModalState::new();
        state.open(project(Vec::new()));

        assert!(!state.has_gallery());
        state.select_tab(Tab::Gallery);
        assert_eq!(state.tab(), Tab::Details);
    }

    #[test]
    fn tabs_switch_both_ways_with_a_gallery() {
        let mut state = ModalState::new();
        state.open(galleried(2, 2));

        state.select_tab(Tab::Gallery);
        assert_eq!(state.tab(), Tab::Gallery);
        state.select_tab(Tab::Details);
        assert_eq!(state.tab(), Tab::Details);
    }

    #[test]
    fn next_wraps_around_full_cycle() {
        let mut state = open_on_gallery(galleried(6, 5));

        for _ in 0..6 {
            state.next_image();
        }
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn prev_wraps_to_last_image() {
        let mut state = open_on_gallery(galleried(6, 5));

        state.prev_image();
        assert_eq!(state.image_index(), 5);
    }

    #[test]
    fn next_then_prev_round_trips_from_every_index() {
        let mut state = open_on_gallery(galleried(6, 5));

        for start in 0..6 {
            state.select_image(start);
            state.next_image();
            state.prev_image();
            assert_eq!(state.image_index(), start);

            state.prev_image();
            state.next_image();
            assert_eq!(state.image_index(), start);
        }
    }

    #[test]
    fn index_stays_in_bounds_under_mixed_navigation() {
        let mut state = open_on_gallery(galleried(4, 3));

        // Uneven walk in both directions, crossing the wrap point often.
        for step in 0..200 {
            if step % 3 == 0 {
                state.prev_image();
            } else {
                state.next_image();
            }
            assert!(state.image_index() < state.image_count());
        }
    }

    #[test]
    fn single_image_carousel_is_stationary() {
        let mut state = open_on_gallery(galleried(1, 1));

        state.next_image();
        assert_eq!(state.image_index(), 0);
        state.prev_image();
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn select_image_rejects_out_of_range() {
        let mut state = open_on_gallery(galleried(4, 3));
        state.select_image(2);

        state.select_image(4);
        assert_eq!(state.image_index(), 2);
        state.select_image(usize::MAX);
        assert_eq!(state.image_index(), 2);
    }

    #[test]
    fn view_mode_switch_always_resets_index() {
        let mut state = open_on_gallery(galleried(6, 5));
        state.select_image(4);

        state.set_view_mode(ViewMode::Mobile);
        assert_eq!(state.image_index(), 0);
        assert_eq!(state.image_count(), 5);

        // Re-selecting the current mode is still a restart.
        state.select_image(3);
        state.set_view_mode(ViewMode::Mobile);
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn desktop_and_mobile_collections_navigate_independently() {
        let mut state = open_on_gallery(galleried(6, 5));

        for _ in 0..6 {
            state.next_image();
        }
        assert_eq!(state.image_index(), 0);

        state.set_view_mode(ViewMode::Mobile);
        assert_eq!(state.image_index(), 0);
        state.prev_image();
        assert_eq!(state.image_index(), 4);
    }

    #[test]
    fn missing_mode_falls_back_without_breaking_navigation() {
        let desktop_only = project(vec![GalleryCollection {
            mode: ViewMode::Desktop,
            images: images("desktop", 3),
        }]);
        let mut state = open_on_gallery(desktop_only);

        state.set_view_mode(ViewMode::Mobile);
        assert_eq!(state.image_count(), 3);
        state.next_image();
        assert_eq!(state.image_index(), 1);
        assert_eq!(state.current_image(), Some("/images/desktop-1.png"));
    }

    #[test]
    fn carousel_ops_without_project_are_noops() {
        let mut state = ModalState::new();

        state.next_image();
        state.prev_image();
        state.select_image(0);
        state.set_view_mode(ViewMode::Mobile);
        state.select_tab(Tab::Gallery);

        assert_eq!(state.image_index(), 0);
        assert!(state.images().is_empty());
        assert!(state.current_image().is_none());
    }

    #[test]
    fn deferred_clear_runs_after_close() {
        let mut state = ModalState::new();
        state.open(galleried(2, 2));

        let token = state.close();
        assert!(!state.is_open());
        // Content survives until the transition timer fires.
        assert!(state.project().is_some());

        state.clear_project(token);
        assert!(state.project().is_none());
    }

    #[test]
    fn reopen_before_clear_keeps_new_project() {
        let mut state = ModalState::new();
        state.open(galleried(2, 2));
        let stale = state.close();

        let replacement = galleried(3, 1);
        state.open(Arc::clone(&replacement));
        state.clear_project(stale);

        assert!(state.is_open());
        assert_eq!(
            state.project().map(|p| p.slug.as_str()),
            Some(replacement.slug.as_str())
        );
    }

    #[test]
    fn double_close_is_harmless() {
        let mut state = ModalState::new();
        state.open(galleried(2, 2));

        let first = state.close();
        let second = state.close();
        assert!(!state.is_open());

        // The superseded token is ignored, the fresh one clears.
        state.clear_project(first);
        assert!(state.project().is_some());
        state.clear_project(second);
        assert!(state.project().is_none());
    }
}
