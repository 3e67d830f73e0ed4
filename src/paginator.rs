//! Pagination state for list views.
//!
//! This component owns the pagination state of a list view and nothing else:
//! it does not render pages of content, it tracks which page is selected and
//! exposes derived navigation flags. Pages are 1-indexed, and the total page
//! count is assigned externally (typically from server-reported metadata via
//! [`Model::set_pagination`]) rather than derived from the item count.
//!
//! All mutation goes through the model's methods; invalid inputs are clamped
//! rather than rejected, so no operation fails.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};

/// The per-page item limit used by [`Model::default`] and after [`Model::reset`].
pub const DEFAULT_LIMIT: usize = 10;

/// The type of pagination to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Display pagination as Arabic numerals (e.g., "1/5").
    #[default]
    Arabic,
    /// Display pagination as dots (e.g., "● ○ ○ ○ ○").
    Dots,
}

/// A snapshot of pagination state, in the shape servers report it.
///
/// Passing one of these to [`Model::set_pagination`] replaces all four fields
/// wholesale. With the `serde` feature enabled it derives `Serialize` and
/// `Deserialize` so it can be taken straight out of an API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    /// The selected page, 1-indexed.
    pub page: usize,
    /// Items per page.
    pub limit: usize,
    /// Total number of items across all pages.
    pub total: usize,
    /// Total number of pages.
    pub pages: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            total: 0,
            pages: 0,
        }
    }
}

/// Key bindings for paginator navigation.
///
/// # Examples
///
/// ```rust
/// use stagehand::key;
/// use stagehand::paginator::PaginatorKeyMap;
///
/// let custom = PaginatorKeyMap {
///     prev_page: key::new_binding(vec![
///         key::with_keys_str(&["a", "left"]),
///         key::with_help("a/←", "previous page"),
///     ]),
///     next_page: key::new_binding(vec![
///         key::with_keys_str(&["d", "right"]),
///         key::with_help("d/→", "next page"),
///     ]),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Key binding for navigating to the previous page.
    /// Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Key binding for navigating to the next page.
    /// Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// A pagination model holding clamped state and derived navigation flags.
///
/// The state fields are private: readers go through the accessor methods and
/// every write goes through an operation that maintains the clamp invariant
/// `1 <= page <= max(pages, 1)`. The one deliberate exception is
/// [`set_pagination`](Model::set_pagination), which trusts its input.
///
/// # Examples
///
/// ```rust
/// use stagehand::paginator::{Model, Pagination};
///
/// let mut p = Model::new();
/// p.set_pagination(Pagination { page: 1, limit: 10, total: 45, pages: 5 });
///
/// p.next_page();
/// assert_eq!(p.page(), 2);
/// assert!(p.has_prev());
///
/// p.set_page(99); // silently clamped
/// assert_eq!(p.page(), 5);
/// assert!(!p.has_next());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The type of pagination to display (Dots or Arabic).
    pub paginator_type: Type,
    /// The character to use for the active page in Dots mode.
    pub active_dot: String,
    /// The character to use for inactive pages in Dots mode.
    pub inactive_dot: String,
    /// The format string for Arabic mode (e.g., "%d/%d").
    pub arabic_format: String,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,

    page: usize,
    limit: usize,
    total: usize,
    pages: usize,
    default_limit: usize,
}

impl Default for Model {
    /// Creates a paginator with the default configuration: page 1, a limit of
    /// [`DEFAULT_LIMIT`], no items, no pages, Arabic display.
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
            total: 0,
            pages: 0,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl Model {
    /// Creates a new paginator model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configured default limit (builder pattern).
    ///
    /// The given limit is used immediately and restored by [`reset`](Model::reset).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stagehand::paginator::Model;
    ///
    /// let p = Model::new().with_limit(25);
    /// assert_eq!(p.limit(), 25);
    /// ```
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self.default_limit = limit;
        self
    }

    /// The currently selected page, 1-indexed.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The number of items per page.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The total number of items across all pages.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The total number of pages.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Returns true when a page after the current one exists.
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// Returns true when a page before the current one exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns a copyable snapshot of the current state.
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            total: self.total,
            pages: self.pages,
        }
    }

    /// Selects a page, clamping the target into `[1, max(pages, 1)]`.
    ///
    /// Out-of-range targets are not an error; they saturate at the nearest
    /// bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stagehand::paginator::{Model, Pagination};
    ///
    /// let mut p = Model::new();
    /// p.set_pagination(Pagination { page: 1, limit: 10, total: 30, pages: 3 });
    ///
    /// p.set_page(0);
    /// assert_eq!(p.page(), 1);
    /// p.set_page(7);
    /// assert_eq!(p.page(), 3);
    /// ```
    pub fn set_page(&mut self, target: usize) {
        self.page = target.clamp(1, self.pages.max(1));
    }

    /// Advances to the next page. No-op on the last page.
    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.pages.max(1));
    }

    /// Moves to the previous page. No-op on the first page.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Sets the per-page limit and unconditionally resets to page 1.
    ///
    /// The limit is stored as given; a limit of 0 is accepted and simply
    /// yields empty slice bounds. Changing the limit invalidates whatever
    /// page the user was on, which is why the page always snaps back to 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stagehand::paginator::{Model, Pagination};
    ///
    /// let mut p = Model::new();
    /// p.set_pagination(Pagination { page: 3, limit: 10, total: 45, pages: 5 });
    ///
    /// p.set_limit(20);
    /// assert_eq!(p.limit(), 20);
    /// assert_eq!(p.page(), 1);
    /// ```
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.page = 1;
    }

    /// Replaces all four state fields with server-reported metadata.
    ///
    /// This bypasses clamping on purpose: the server is trusted to report a
    /// consistent record. If it reports a `page` outside `[1, pages]`, that
    /// value sticks until the next navigation call re-establishes the clamp.
    pub fn set_pagination(&mut self, pagination: Pagination) {
        self.page = pagination.page;
        self.limit = pagination.limit;
        self.total = pagination.total;
        self.pages = pagination.pages;
    }

    /// Restores the initial state: page 1, no items, no pages, and the
    /// configured default limit. Idempotent.
    pub fn reset(&mut self) {
        self.page = 1;
        self.limit = self.default_limit;
        self.total = 0;
        self.pages = 0;
    }

    /// Calculates slice bounds for the current page of a backing slice.
    ///
    /// Given the length of your data, returns `(start, end)` indices usable
    /// directly with slice notation. Bounds never exceed `length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stagehand::paginator::{Model, Pagination};
    ///
    /// let items: Vec<i32> = (1..=45).collect();
    /// let mut p = Model::new();
    /// p.set_pagination(Pagination { page: 5, limit: 10, total: 45, pages: 5 });
    ///
    /// let (start, end) = p.slice_bounds(items.len());
    /// assert_eq!((start, end), (40, 45));
    /// let last_page = &items[start..end];
    /// assert_eq!(last_page.len(), 5);
    /// ```
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = ((self.page - 1).saturating_mul(self.limit)).min(length);
        let end = (start.saturating_add(self.limit)).min(length);
        (start, end)
    }

    /// Returns the number of items on the current page, which may be less
    /// than the limit on the last page.
    pub fn items_on_page(&self, length: usize) -> usize {
        let (start, end) = self.slice_bounds(length);
        end - start
    }

    /// Handles navigation key presses.
    ///
    /// Call this from your application's `update()` to let the paginator
    /// respond to its configured key bindings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_rs::{Model as BubbleTeaModel, Msg};
    /// use stagehand::paginator::Model as Paginator;
    ///
    /// struct App {
    ///     paginator: Paginator,
    /// }
    ///
    /// impl BubbleTeaModel for App {
    ///     fn init() -> (Self, Option<bubbletea_rs::Cmd>) {
    ///         (Self { paginator: Paginator::new() }, None)
    ///     }
    ///
    ///     fn update(&mut self, msg: Msg) -> Option<bubbletea_rs::Cmd> {
    ///         self.paginator.update(&msg);
    ///         None
    ///     }
    ///
    ///     fn view(&self) -> String {
    ///         self.paginator.view()
    ///     }
    /// }
    /// ```
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
    }

    /// Renders the pagination control.
    ///
    /// Arabic mode shows "current/total" (e.g. "3/5"); Dots mode shows one
    /// dot per page with the active page highlighted. A pageless model still
    /// renders a single slot, matching the page clamp floor.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.pages.max(1).to_string(), 1)
    }

    fn dots_view(&self) -> String {
        let pages = self.pages.max(1);
        let mut s = String::new();
        for i in 1..=pages {
            if i == self.page {
                s.push_str(&self.active_dot);
            } else {
                s.push_str(&self.inactive_dot);
            }
            if i < pages {
                s.push(' ');
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn five_pages() -> Model {
        let mut p = Model::new();
        p.set_pagination(Pagination {
            page: 1,
            limit: 10,
            total: 45,
            pages: 5,
        });
        p
    }

    #[test]
    fn test_default_state() {
        let p = Model::new();
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), DEFAULT_LIMIT);
        assert_eq!(p.total(), 0);
        assert_eq!(p.pages(), 0);
        assert!(!p.has_next());
        assert!(!p.has_prev());
    }

    #[test]
    fn test_set_page_clamps_for_all_targets() {
        let mut p = five_pages();
        for target in 0..20 {
            p.set_page(target);
            assert!(p.page() >= 1 && p.page() <= p.pages().max(1));
        }

        // With no pages at all, every target clamps to 1.
        let mut empty = Model::new();
        for target in 0..20 {
            empty.set_page(target);
            assert_eq!(empty.page(), 1);
        }
    }

    #[test]
    fn test_next_page_converges_to_last() {
        let mut p = five_pages();
        for _ in 0..10 {
            p.next_page();
            assert!(p.page() <= p.pages());
        }
        assert_eq!(p.page(), 5);
    }

    #[test]
    fn test_prev_page_converges_to_first() {
        let mut p = five_pages();
        p.set_page(5);
        for _ in 0..10 {
            p.prev_page();
            assert!(p.page() >= 1);
        }
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_next_page_noop_without_pages() {
        let mut p = Model::new();
        p.next_page();
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_set_limit_always_resets_page() {
        let mut p = five_pages();
        p.set_page(3);
        p.set_limit(20);
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), 20);

        // Accepted untouched, including zero.
        p.set_limit(0);
        assert_eq!(p.limit(), 0);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut p = Model::new().with_limit(25);
        p.set_pagination(Pagination {
            page: 4,
            limit: 50,
            total: 200,
            pages: 4,
        });

        p.reset();
        let once = p.pagination();
        p.reset();
        let twice = p.pagination();

        assert_eq!(once, twice);
        assert_eq!(
            once,
            Pagination {
                page: 1,
                limit: 25,
                total: 0,
                pages: 0,
            }
        );
    }

    #[test]
    fn test_server_sync_then_walk_to_last_page() {
        let mut p = Model::new();
        assert_eq!(p.pagination(), Pagination::default());

        p.set_pagination(Pagination {
            page: 1,
            limit: 10,
            total: 45,
            pages: 5,
        });

        for _ in 0..4 {
            p.next_page();
        }
        assert_eq!(p.page(), 5);

        p.next_page();
        assert_eq!(p.page(), 5);
        assert!(!p.has_next());
        assert!(p.has_prev());
    }

    #[test]
    fn test_set_limit_scenario() {
        let mut p = five_pages();
        p.set_page(3);
        assert_eq!(p.page(), 3);

        p.set_limit(20);
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), 20);
    }

    #[test]
    fn test_set_pagination_bypasses_clamping() {
        let mut p = five_pages();
        p.set_pagination(Pagination {
            page: 9,
            limit: 10,
            total: 45,
            pages: 5,
        });
        // The out-of-range page sticks until the next navigation call.
        assert_eq!(p.page(), 9);

        p.next_page();
        assert_eq!(p.page(), 5);
    }

    #[test]
    fn test_slice_bounds() {
        let mut p = five_pages();
        assert_eq!(p.slice_bounds(45), (0, 10));

        p.set_page(3);
        assert_eq!(p.slice_bounds(45), (20, 30));

        p.set_page(5);
        assert_eq!(p.slice_bounds(45), (40, 45));
        assert_eq!(p.items_on_page(45), 5);

        assert_eq!(p.items_on_page(0), 0);
    }

    #[test]
    fn test_slice_bounds_with_zero_limit() {
        let mut p = five_pages();
        p.set_limit(0);
        assert_eq!(p.slice_bounds(45), (0, 0));
        assert_eq!(p.items_on_page(45), 0);
    }

    #[test]
    fn test_update_handles_navigation_keys() {
        let mut p = five_pages();

        let right: Msg = Box::new(KeyMsg {
            key: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
        });
        p.update(&right);
        assert_eq!(p.page(), 2);

        let h: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('h'),
            modifiers: KeyModifiers::NONE,
        });
        p.update(&h);
        assert_eq!(p.page(), 1);

        let unbound: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
        });
        p.update(&unbound);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_arabic_view() {
        let mut p = five_pages();
        assert_eq!(p.view(), "1/5");
        p.set_page(3);
        assert_eq!(p.view(), "3/5");

        let empty = Model::new();
        assert_eq!(empty.view(), "1/1");
    }

    #[test]
    fn test_dots_view() {
        let mut p = five_pages();
        p.paginator_type = Type::Dots;
        assert_eq!(p.view(), "• ○ ○ ○ ○");

        p.set_page(3);
        assert_eq!(p.view(), "○ ○ • ○ ○");
    }
}
