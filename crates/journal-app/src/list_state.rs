//! List controller state - pagination, filter application and stale-response
//! rejection for the product list.
//!
//! `ListState` is a pure state machine. Every operation that needs data from
//! the catalog service returns a [`PageRequest`] which the caller turns into
//! a background fetch; the fetch result is fed back through
//! [`ListState::apply_page`] or [`ListState::fail_page`] together with the
//! [`PageTicket`] it was issued under.
//!
//! Guards:
//! - at most one page request is in flight at any time
//! - a response is applied only if its ticket is the in-flight ticket;
//!   anything else belongs to a superseded request and is dropped
//! - `current_page + 1` is never requested twice in a row

use std::collections::HashSet;

use journal_core::prelude::*;
use journal_core::{FilterState, Page, PageQuery, Product, ProductId, ProductType, SortKey};

// ─────────────────────────────────────────────────────────────────────────────
// Request identity
// ─────────────────────────────────────────────────────────────────────────────

/// Identity of one page request.
///
/// `generation` is bumped every time the list restarts from page 1 (filter
/// change or reload), so responses from an older filter never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageTicket {
    pub generation: u64,
    pub page: u32,
}

/// A page fetch the caller must issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: PageTicket,
    pub query: PageQuery,
}

/// What the list is currently waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    /// First page under the initial filter
    LoadingInitial,
    /// `current_page + 1` under the active filter
    LoadingMore,
    /// Page 1 under a new filter; the previous items are stale
    ApplyingFilter,
}

/// Progress of the one-time brand list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrandsState {
    #[default]
    NotRequested,
    Requested,
    Loaded,
}

// ─────────────────────────────────────────────────────────────────────────────
// ListState
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct ListState {
    /// Items accumulated across pages for the last applied filter
    pub items: Vec<Product>,
    pub current_page: u32,
    pub has_more: bool,
    pub phase: LoadPhase,
    pub active_filter: FilterState,
    /// Search box contents; only committed searches reach the filter
    pub search_input: String,
    /// Total reported for the active filter
    pub total_items: Option<u64>,
    /// Total reported the last time page 1 loaded with no narrowing filter
    pub unfiltered_total: Option<u64>,
    pub brands: Vec<String>,
    pub brands_state: BrandsState,
    /// Blocking error from a page-1 load; hides the list until retried
    pub error: Option<String>,
    /// Non-blocking error from an incremental load
    pub inline_error: Option<String>,
    /// Index of the highlighted row
    pub selected: usize,

    page_size: u32,
    generation: u64,
    in_flight: Option<PageTicket>,
    last_requested_page: u32,
    initialized: bool,
    expand_by_default: bool,
    /// Products whose ingredient expansion differs from the default
    toggled_ingredients: HashSet<ProductId>,
}

impl ListState {
    pub fn new(page_size: u32) -> Self {
        Self::with_initial_filter(page_size, FilterState::default())
    }

    /// Start with a non-default filter (headless mode filter flags).
    pub fn with_initial_filter(page_size: u32, filter: FilterState) -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            has_more: true,
            phase: LoadPhase::Idle,
            search_input: filter.search.clone(),
            active_filter: filter,
            total_items: None,
            unfiltered_total: None,
            brands: Vec::new(),
            brands_state: BrandsState::NotRequested,
            error: None,
            inline_error: None,
            selected: 0,
            page_size,
            generation: 0,
            in_flight: None,
            last_requested_page: 0,
            initialized: false,
            expand_by_default: false,
            toggled_ingredients: HashSet::new(),
        }
    }

    pub fn with_ingredients_expanded(mut self, expanded: bool) -> Self {
        self.expand_by_default = expanded;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Ticket of the page request currently awaiting a response
    pub fn in_flight(&self) -> Option<PageTicket> {
        self.in_flight
    }

    pub fn is_current(&self, ticket: PageTicket) -> bool {
        self.in_flight == Some(ticket)
    }

    pub fn is_loading_initial(&self) -> bool {
        self.phase == LoadPhase::LoadingInitial
    }

    pub fn is_loading_more(&self) -> bool {
        self.phase == LoadPhase::LoadingMore
    }

    /// Items on screen belong to a previous filter
    pub fn is_applying_filters(&self) -> bool {
        self.phase == LoadPhase::ApplyingFilter
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter.has_active_filters()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────────

    /// First page-1 fetch under the initial filter. Calling again is a no-op.
    pub fn initialize(&mut self) -> Option<PageRequest> {
        if self.initialized {
            debug!("List already initialized, ignoring");
            return None;
        }
        Some(self.restart(LoadPhase::LoadingInitial))
    }

    /// Mark the brand list as requested; `false` if it already was.
    pub fn begin_brands_fetch(&mut self) -> bool {
        if self.brands_state != BrandsState::NotRequested {
            return false;
        }
        self.brands_state = BrandsState::Requested;
        true
    }

    pub fn set_brands(&mut self, brands: Vec<String>) {
        self.brands = brands;
        self.brands_state = BrandsState::Loaded;
    }

    /// A failed brand fetch may be retried later.
    pub fn brands_failed(&mut self) {
        self.brands_state = BrandsState::NotRequested;
    }

    /// Fetch `current_page + 1` unless a guard says no.
    pub fn request_next_page(&mut self) -> Option<PageRequest> {
        if !self.initialized || self.error.is_some() {
            return None;
        }
        if let Some(ticket) = self.in_flight {
            debug!("Next page ignored, page {} in flight", ticket.page);
            return None;
        }
        if !self.has_more {
            return None;
        }

        let next = self.current_page + 1;
        if next == self.last_requested_page {
            debug!("Next page ignored, page {} was just requested", next);
            return None;
        }

        self.phase = LoadPhase::LoadingMore;
        self.inline_error = None;
        Some(self.issue(next))
    }

    /// Replace the active filter and restart from page 1.
    ///
    /// Items from the previous filter stay visible until the new page 1
    /// arrives. Any request still in flight is superseded.
    pub fn apply_filter(&mut self, filter: FilterState) -> PageRequest {
        self.search_input = filter.search.clone();
        self.active_filter = filter;
        self.restart(LoadPhase::ApplyingFilter)
    }

    /// Restart from page 1 under the active filter.
    pub fn reload(&mut self) -> PageRequest {
        let phase = if self.items.is_empty() {
            LoadPhase::LoadingInitial
        } else {
            LoadPhase::ApplyingFilter
        };
        self.restart(phase)
    }

    fn restart(&mut self, phase: LoadPhase) -> PageRequest {
        self.initialized = true;
        self.generation += 1;
        self.current_page = 1;
        self.has_more = true;
        self.phase = phase;
        self.error = None;
        self.inline_error = None;
        if let Some(stale) = self.in_flight.take() {
            debug!(
                "Superseding in-flight page {} (generation {})",
                stale.page, stale.generation
            );
        }
        self.issue(1)
    }

    fn issue(&mut self, page: u32) -> PageRequest {
        let ticket = PageTicket {
            generation: self.generation,
            page,
        };
        self.in_flight = Some(ticket);
        self.last_requested_page = page;
        debug!(
            "Requesting page {} (generation {})",
            ticket.page, ticket.generation
        );
        PageRequest {
            ticket,
            query: PageQuery::new(page, self.page_size, self.active_filter.clone()),
        }
    }

    /// Merge a successful response. Returns `false` if the response was
    /// stale and dropped.
    pub fn apply_page(&mut self, ticket: PageTicket, page: Page) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "Dropping stale page {} (generation {})",
                ticket.page, ticket.generation
            );
            return false;
        }
        self.in_flight = None;

        let received = page.items.len();
        let total_items = page.total_items;
        let held = if ticket.page == 1 {
            received
        } else {
            self.items.len() + received
        };
        self.has_more = page.has_more(ticket.page, held);

        if ticket.page == 1 {
            self.items = page.items;
            self.selected = 0;
        } else {
            self.items.extend(page.items);
        }
        self.current_page = ticket.page;

        if let Some(total) = total_items {
            self.total_items = Some(total);
        } else if ticket.page == 1 {
            self.total_items = Some(self.items.len() as u64);
        }
        if ticket.page == 1 && !self.active_filter.has_active_filters() {
            self.unfiltered_total = self.total_items;
        }

        self.phase = LoadPhase::Idle;
        self.error = None;
        self.inline_error = None;

        debug!(
            "Applied page {}: {} items, {} total held, has_more={}",
            ticket.page,
            received,
            self.items.len(),
            self.has_more
        );
        true
    }

    /// Record a failed response. Returns `false` if the response was stale
    /// and dropped.
    ///
    /// A page-1 failure becomes the blocking error. Any later page only sets
    /// the inline error; `current_page` and `has_more` are untouched and the
    /// same page may be requested again.
    pub fn fail_page(&mut self, ticket: PageTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "Dropping stale failure for page {} (generation {})",
                ticket.page, ticket.generation
            );
            return false;
        }
        self.in_flight = None;
        self.phase = LoadPhase::Idle;

        let message = message.into();
        if ticket.page == 1 {
            self.error = Some(message);
            self.last_requested_page = 0;
        } else {
            self.inline_error = Some(message);
            self.last_requested_page = self.current_page;
        }
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filter operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Update the search box only; nothing is fetched.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    pub fn commit_search(&mut self, text: &str) -> PageRequest {
        let filter = self.active_filter.with_search(text.trim());
        self.apply_filter(filter)
    }

    pub fn clear_search(&mut self) -> PageRequest {
        let filter = self.active_filter.with_search("");
        self.apply_filter(filter)
    }

    pub fn clear_all_filters(&mut self) -> PageRequest {
        self.apply_filter(FilterState::default())
    }

    pub fn toggle_tag(&mut self, tag: &str) -> PageRequest {
        let filter = self.active_filter.with_tag_toggled(tag);
        self.apply_filter(filter)
    }

    pub fn set_product_type(&mut self, product_type: Option<ProductType>) -> PageRequest {
        let filter = self.active_filter.with_product_type(product_type);
        self.apply_filter(filter)
    }

    pub fn set_brand(&mut self, brand: Option<String>) -> PageRequest {
        let filter = self.active_filter.with_brand(brand);
        self.apply_filter(filter)
    }

    pub fn set_sort(&mut self, sort: SortKey) -> PageRequest {
        let filter = self.active_filter.with_sort(sort);
        self.apply_filter(filter)
    }

    pub fn cycle_product_type(&mut self) -> PageRequest {
        self.set_product_type(ProductType::cycle(self.active_filter.product_type))
    }

    /// Step the brand filter through `All -> brands... -> All`.
    pub fn cycle_brand(&mut self) -> PageRequest {
        let next = match &self.active_filter.brand {
            None => self.brands.first().cloned(),
            Some(current) => self
                .brands
                .iter()
                .position(|b| b == current)
                .and_then(|idx| self.brands.get(idx + 1))
                .cloned(),
        };
        self.set_brand(next)
    }

    pub fn cycle_sort(&mut self) -> PageRequest {
        self.set_sort(self.active_filter.sort.next())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_product(&self) -> Option<&Product> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn page_down(&mut self, rows: usize) {
        self.selected = (self.selected + rows).min(self.items.len().saturating_sub(1));
    }

    pub fn page_up(&mut self, rows: usize) {
        self.selected = self.selected.saturating_sub(rows);
    }

    /// Selection is within `prefetch_rows` rows of the last item.
    pub fn is_near_end(&self, prefetch_rows: usize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let remaining = self.items.len() - 1 - self.selected.min(self.items.len() - 1);
        remaining <= prefetch_rows
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ingredient expansion
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_ingredients(&mut self, id: ProductId) {
        if !self.toggled_ingredients.remove(&id) {
            self.toggled_ingredients.insert(id);
        }
    }

    pub fn is_expanded(&self, id: ProductId) -> bool {
        self.expand_by_default != self.toggled_ingredients.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::Page;

    fn product(id: ProductId) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            brand: "Brand".into(),
            ingredients_list: String::new(),
            star_ingredients: String::new(),
            product_type: "Serum".into(),
            price: None,
        }
    }

    fn page(page_no: u32, ids: &[ProductId], total: u64, total_pages: u32) -> Page {
        Page {
            page: Some(page_no),
            items: ids.iter().copied().map(product).collect(),
            total_items: Some(total),
            total_pages: Some(total_pages),
        }
    }

    fn ids(state: &ListState) -> Vec<ProductId> {
        state.items.iter().map(|p| p.id).collect()
    }

    /// Initialize and apply a first page
    fn loaded(first: Page) -> ListState {
        let mut state = ListState::new(2);
        let req = state.initialize().unwrap();
        assert!(state.apply_page(req.ticket, first));
        state
    }

    #[test]
    fn test_initialize_requests_page_one_with_default_filter() {
        let mut state = ListState::new(20);
        let req = state.initialize().unwrap();

        assert_eq!(req.query.page, 1);
        assert_eq!(req.query.limit, 20);
        assert_eq!(req.query.filter, FilterState::default());
        assert_eq!(state.phase, LoadPhase::LoadingInitial);
        assert!(state.is_loading_initial());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut state = ListState::new(20);
        assert!(state.initialize().is_some());
        assert!(state.initialize().is_none());

        assert!(state.begin_brands_fetch());
        assert!(!state.begin_brands_fetch());
    }

    #[test]
    fn test_brands_refetchable_after_failure_only() {
        let mut state = ListState::new(20);
        assert!(state.begin_brands_fetch());
        state.brands_failed();
        assert!(state.begin_brands_fetch());
        state.set_brands(vec!["COSRX".into()]);
        assert!(!state.begin_brands_fetch());
        assert_eq!(state.brands_state, BrandsState::Loaded);
    }

    #[test]
    fn test_next_page_before_initialize_is_noop() {
        let mut state = ListState::new(20);
        assert!(state.request_next_page().is_none());
    }

    #[test]
    fn test_repeated_next_page_issues_one_request() {
        let mut state = loaded(page(1, &[1, 2], 10, 5));

        let first = state.request_next_page();
        assert_eq!(first.map(|r| r.query.page), Some(2));
        for _ in 0..10 {
            assert!(state.request_next_page().is_none());
        }
        assert!(state.is_loading_more());
    }

    #[test]
    fn test_next_page_blocked_while_page_one_in_flight() {
        let mut state = ListState::new(20);
        state.initialize();
        assert!(state.request_next_page().is_none());
    }

    #[test]
    fn test_has_more_from_total_pages() {
        let mut state = loaded(page(1, &[1, 2], 10, 5));
        let req = state.request_next_page().unwrap();
        state.apply_page(req.ticket, page(2, &[3, 4], 10, 5));
        assert!(state.has_more);

        let mut state = loaded(page(1, &[1, 2], 4, 2));
        let req = state.request_next_page().unwrap();
        state.apply_page(req.ticket, page(2, &[3, 4], 4, 2));
        assert!(!state.has_more);
    }

    #[test]
    fn test_has_more_follows_requested_page_not_echoed_page() {
        let mut state = loaded(page(1, &[1, 2], 6, 3));
        let req = state.request_next_page().unwrap();
        state.apply_page(req.ticket, page(1, &[3, 4], 6, 3));
        let req = state.request_next_page().unwrap();
        assert_eq!(req.query.page, 3);
        state.apply_page(req.ticket, page(1, &[5, 6], 6, 3));

        assert!(!state.has_more);
        assert!(state.request_next_page().is_none());
    }

    #[test]
    fn test_pages_accumulate_in_order() {
        let mut state = loaded(page(1, &[1, 2], 6, 3));

        let req = state.request_next_page().unwrap();
        assert!(state.apply_page(req.ticket, page(2, &[3, 4], 6, 3)));
        let req = state.request_next_page().unwrap();
        assert_eq!(req.query.page, 3);
        assert!(state.apply_page(req.ticket, page(3, &[5, 6], 6, 3)));

        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(state.current_page, 3);
        assert!(!state.has_more);
        assert!(state.request_next_page().is_none());
    }

    #[test]
    fn test_no_request_when_has_more_false() {
        let mut state = loaded(page(1, &[1, 2], 2, 1));
        assert!(!state.has_more);
        assert!(state.request_next_page().is_none());
    }

    #[test]
    fn test_filter_supersession_with_out_of_order_responses() {
        let mut state = loaded(page(1, &[1, 2], 2, 1));

        let a = state.toggle_tag("oil-free");
        let b = state.set_sort(SortKey::PriceDesc);
        assert_ne!(a.ticket, b.ticket);
        assert_eq!(b.query.filter.tags, vec!["oil-free"]);

        // B answers first, then A's late response arrives
        assert!(state.apply_page(b.ticket, page(1, &[20, 21], 2, 1)));
        assert!(!state.apply_page(a.ticket, page(1, &[10], 1, 1)));

        assert_eq!(ids(&state), vec![20, 21]);
        assert_eq!(state.active_filter.sort, SortKey::PriceDesc);
    }

    #[test]
    fn test_stale_failure_is_dropped() {
        let mut state = loaded(page(1, &[1, 2], 2, 1));
        let a = state.commit_search("snail");
        let b = state.commit_search("cica");

        assert!(!state.fail_page(a.ticket, "Failed to fetch products"));
        assert!(state.error.is_none());
        assert!(state.apply_page(b.ticket, page(1, &[5], 1, 1)));
        assert_eq!(ids(&state), vec![5]);
    }

    #[test]
    fn test_filter_change_resets_and_replaces() {
        let mut state = loaded(page(1, &[1, 2], 6, 3));
        let req = state.request_next_page().unwrap();
        state.apply_page(req.ticket, page(2, &[3, 4], 6, 3));
        assert_eq!(state.current_page, 2);

        let req = state.set_product_type(Some(ProductType::Toner));
        assert_eq!(req.query.page, 1);
        assert_eq!(state.current_page, 1);
        assert!(state.has_more);
        // Old items stay visible, flagged stale
        assert!(state.is_applying_filters());
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);

        state.apply_page(req.ticket, page(1, &[7], 1, 1));
        assert_eq!(ids(&state), vec![7]);
        assert!(!state.is_applying_filters());
    }

    #[test]
    fn test_filter_change_supersedes_loading_more() {
        let mut state = loaded(page(1, &[1, 2], 6, 3));
        let more = state.request_next_page().unwrap();
        let filtered = state.toggle_tag("alcohol-free");

        assert!(!state.apply_page(more.ticket, page(2, &[3, 4], 6, 3)));
        assert!(state.apply_page(filtered.ticket, page(1, &[8], 1, 1)));
        assert_eq!(ids(&state), vec![8]);
    }

    #[test]
    fn test_incremental_failure_keeps_position_and_allows_retry() {
        let mut state = loaded(page(1, &[1, 2], 6, 3));
        let req = state.request_next_page().unwrap();

        assert!(state.fail_page(req.ticket, "Failed to fetch products"));
        assert_eq!(state.current_page, 1);
        assert!(state.has_more);
        assert_eq!(ids(&state), vec![1, 2]);
        assert!(state.error.is_none());
        assert_eq!(
            state.inline_error.as_deref(),
            Some("Failed to fetch products")
        );

        let retry = state.request_next_page().unwrap();
        assert_eq!(retry.query.page, 2);
        assert!(state.inline_error.is_none());
    }

    #[test]
    fn test_page_one_failure_is_blocking() {
        let mut state = ListState::new(20);
        let req = state.initialize().unwrap();
        assert!(state.fail_page(req.ticket, "Failed to fetch products"));

        assert_eq!(state.error.as_deref(), Some("Failed to fetch products"));
        assert_eq!(state.phase, LoadPhase::Idle);
        assert!(state.request_next_page().is_none());

        let retry = state.reload();
        assert_eq!(retry.query.page, 1);
        assert!(state.error.is_none());
        assert!(state.apply_page(retry.ticket, page(1, &[1], 1, 1)));
    }

    #[test]
    fn test_commit_search_trims_and_syncs_input() {
        let mut state = loaded(page(1, &[1], 1, 1));
        state.set_search_text("  vitamin c ");
        assert_eq!(state.active_filter.search, "");
        assert!(state.in_flight().is_none());

        let req = state.commit_search("  vitamin c ");
        assert_eq!(req.query.filter.search, "vitamin c");
        assert_eq!(state.search_input, "vitamin c");
    }

    #[test]
    fn test_clear_search_keeps_other_fields() {
        let mut state = loaded(page(1, &[1], 1, 1));
        state.toggle_tag("oil-free");
        state.commit_search("snail");

        let req = state.clear_search();
        assert_eq!(req.query.filter.search, "");
        assert_eq!(req.query.filter.tags, vec!["oil-free"]);
        assert_eq!(state.search_input, "");
    }

    #[test]
    fn test_clear_all_filters() {
        let mut state = loaded(page(1, &[1], 1, 1));
        state.set_brand(Some("COSRX".into()));
        state.set_sort(SortKey::Date);
        assert!(state.has_active_filters());

        let req = state.clear_all_filters();
        assert_eq!(req.query.filter, FilterState::default());
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_cycle_brand_wraps_through_all() {
        let mut state = loaded(page(1, &[1], 1, 1));
        state.set_brands(vec!["COSRX".into(), "Laneige".into()]);

        assert_eq!(state.cycle_brand().query.filter.brand.as_deref(), Some("COSRX"));
        assert_eq!(
            state.cycle_brand().query.filter.brand.as_deref(),
            Some("Laneige")
        );
        assert_eq!(state.cycle_brand().query.filter.brand, None);
    }

    #[test]
    fn test_cycle_sort_and_type() {
        let mut state = loaded(page(1, &[1], 1, 1));
        assert_eq!(state.cycle_sort().query.filter.sort, SortKey::NameDesc);
        assert_eq!(
            state.cycle_product_type().query.filter.product_type,
            Some(ProductType::Cleanser)
        );
    }

    #[test]
    fn test_unfiltered_total_only_tracked_without_filters() {
        let mut state = loaded(page(1, &[1, 2], 40, 20));
        assert_eq!(state.unfiltered_total, Some(40));

        let req = state.toggle_tag("oil-free");
        state.apply_page(req.ticket, page(1, &[3], 7, 4));
        assert_eq!(state.total_items, Some(7));
        assert_eq!(state.unfiltered_total, Some(40));
    }

    #[test]
    fn test_bare_array_page_is_final() {
        let mut state = ListState::new(20);
        let req = state.initialize().unwrap();
        let bare = Page {
            page: None,
            items: vec![product(1), product(2)],
            total_items: None,
            total_pages: None,
        };
        state.apply_page(req.ticket, bare);

        assert!(!state.has_more);
        assert_eq!(state.total_items, Some(2));
    }

    #[test]
    fn test_count_fallback_when_total_pages_missing() {
        let mut state = ListState::new(2);
        let req = state.initialize().unwrap();
        state.apply_page(
            req.ticket,
            Page {
                page: None,
                items: vec![product(1), product(2)],
                total_items: Some(3),
                total_pages: None,
            },
        );
        assert!(state.has_more);
    }

    #[test]
    fn test_reload_restarts_under_active_filter() {
        let mut state = loaded(page(1, &[1], 1, 1));
        let req = state.toggle_tag("oil-free");
        state.apply_page(req.ticket, page(1, &[3], 1, 1));

        let reload = state.reload();
        assert_eq!(reload.query.page, 1);
        assert_eq!(reload.query.filter.tags, vec!["oil-free"]);
        assert!(reload.ticket.generation > req.ticket.generation);
    }

    #[test]
    fn test_selection_and_near_end() {
        let mut state = loaded(page(1, &[1, 2], 10, 5));
        let req = state.request_next_page().unwrap();
        state.apply_page(req.ticket, page(2, &[3, 4], 10, 5));
        let req = state.request_next_page().unwrap();
        state.apply_page(req.ticket, page(3, &[5, 6], 10, 5));

        assert_eq!(state.selected, 0);
        assert!(!state.is_near_end(2));
        state.select_next();
        state.select_next();
        state.select_next();
        assert!(state.is_near_end(2));
        state.select_last();
        assert_eq!(state.selected_product().map(|p| p.id), Some(6));
        state.select_next();
        assert_eq!(state.selected, 5);
        state.page_up(10);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_page_one_resets_selection() {
        let mut state = loaded(page(1, &[1, 2], 2, 1));
        state.select_last();
        let req = state.reload();
        state.apply_page(req.ticket, page(1, &[1, 2], 2, 1));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_toggle_ingredients() {
        let mut state = ListState::new(20);
        assert!(!state.is_expanded(4));
        state.toggle_ingredients(4);
        assert!(state.is_expanded(4));
        state.toggle_ingredients(4);
        assert!(!state.is_expanded(4));

        let mut state = ListState::new(20).with_ingredients_expanded(true);
        assert!(state.is_expanded(4));
        state.toggle_ingredients(4);
        assert!(!state.is_expanded(4));
    }

    #[test]
    fn test_initial_filter_is_used_for_first_request() {
        let filter = FilterState::default().with_tag_toggled("oil-free");
        let mut state = ListState::with_initial_filter(10, filter.clone());
        let req = state.initialize().unwrap();
        assert_eq!(req.query.filter, filter);
    }
}
