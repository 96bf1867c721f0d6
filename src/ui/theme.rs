//! Class names shared across components. The rules live in `assets/main.css`.

// ============================================
// LAYOUT
// ============================================

pub const PAGE: &str = "page";
pub const HEADER: &str = "app-header";
pub const HEADER_TITLE: &str = "app-title";
pub const HEADER_VERSION: &str = "app-version";
pub const FORM_WRAPPER: &str = "form-wrapper";

// ============================================
// FORM
// ============================================

pub const FIELD: &str = "form-field";
pub const LABEL: &str = "form-label";
pub const INPUT: &str = "form-input";
pub const READ_ONLY_INPUT: &str = "form-input form-input--readonly";
pub const BUTTON_PRIMARY: &str = "btn-primary";

// ============================================
// SUBMITTED ENTRIES
// ============================================

pub const DISPLAY_WRAPPER: &str = "display-wrapper";
pub const DATA_LIST: &str = "data-list";
pub const DATA_ITEM: &str = "data-item";
pub const DATA_ROW: &str = "data-row";
pub const DATA_EMPTY: &str = "data-empty";
pub const EXPORT_PANEL: &str = "export-panel";

// ============================================
// TOASTS
// ============================================

pub const TOAST_STACK: &str = "toast-stack";
pub const TOAST: &str = "toast";
pub const TOAST_DISMISS: &str = "toast-dismiss";
