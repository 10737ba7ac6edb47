//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::list_state::ListState;
use crate::product_form::ProductFormState;
use crate::scroll_debounce::ScrollDebouncer;

/// How long a notice stays in the status bar
const NOTICE_TTL_SECS: i64 = 4;

/// Rows moved by PageUp/PageDown before the first render reports the
/// real viewport height
const DEFAULT_PAGE_ROWS: usize = 10;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Product list with filter bar
    #[default]
    Normal,

    /// Search box focused; keys edit the search input
    SearchInput,

    /// Add/Edit product form
    Form,

    /// Confirmation dialog (delete confirmation)
    ConfirmDialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient status-bar message
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Local>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            at: Local::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            at: Local::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now.signed_duration_since(self.at).num_seconds() >= NOTICE_TTL_SECS
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub phase: AppPhase,

    /// Product list and its loading/filter state
    pub list: ListState,

    /// Open add/edit form, if any
    pub form: Option<ProductFormState>,

    /// Open confirmation dialog, if any
    pub confirm_dialog: Option<ConfirmDialogState>,

    /// Status-bar notice (success or failure of a mutation)
    pub notice: Option<Notice>,

    /// Coalesces "near end" signals before loading the next page
    pub scroll_debounce: ScrollDebouncer,

    /// Product rows visible in the list (set during render)
    pub visible_rows: usize,

    /// First product drawn in the list viewport (set during render)
    pub list_offset: usize,

    pub settings: Settings,
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        let list = ListState::new(settings.api.page_size)
            .with_ingredients_expanded(settings.ui.show_ingredients);
        Self::with_list(settings, list)
    }

    /// Use a preconfigured list (e.g. one with an initial filter)
    pub fn with_list(settings: Settings, list: ListState) -> Self {
        Self {
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            list,
            form: None,
            confirm_dialog: None,
            notice: None,
            scroll_debounce: ScrollDebouncer::new(settings.scroll_debounce()),
            visible_rows: DEFAULT_PAGE_ROWS,
            list_offset: 0,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn expire_notice(&mut self, now: DateTime<Local>) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    pub fn open_form(&mut self, form: ProductFormState) {
        self.form = Some(form);
        self.ui_mode = UiMode::Form;
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn show_confirm_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn hide_confirm_dialog(&mut self) {
        self.confirm_dialog = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Rows moved by a page key
    pub fn page_rows(&self) -> usize {
        self.visible_rows.max(1)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(!state.should_quit());
        assert_eq!(state.list.page_size(), 20);
        assert!(!state.list.is_initialized());
    }

    #[test]
    fn test_show_ingredients_setting_flows_to_list() {
        let mut settings = Settings::default();
        settings.ui.show_ingredients = true;
        let state = AppState::with_settings(settings);
        assert!(state.list.is_expanded(1));
    }

    #[test]
    fn test_notice_expiry() {
        let mut state = AppState::default();
        let notice = Notice::success("Product deleted successfully!");
        let at = notice.at;
        state.show_notice(notice);

        state.expire_notice(at + chrono::Duration::seconds(1));
        assert!(state.notice.is_some());

        state.expire_notice(at + chrono::Duration::seconds(NOTICE_TTL_SECS));
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_form_and_dialog_modes() {
        let mut state = AppState::default();
        state.open_form(ProductFormState::new_add());
        assert_eq!(state.ui_mode, UiMode::Form);
        state.close_form();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.form.is_none());
    }
}
