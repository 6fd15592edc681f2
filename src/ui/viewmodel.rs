//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: formatted numbers, pre-computed
//! highlight ranges, windowed rows and the column layout for the pane width.
//!
//! # Example
//!
//! ```rust
//! use zatlas::ui::viewmodel::{
//!     FooterInfo, HeaderInfo, NotFoundView, PageView, UIViewModel,
//! };
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Not Found ".to_string(), theme_label: "Dark".to_string() },
//!     input_bar: None,
//!     page: PageView::NotFound(NotFoundView {
//!         path: "/nope".to_string(),
//!         message: "Page not found".to_string(),
//!     }),
//!     footer: FooterInfo { keybindings: "g: go home  q: quit".to_string() },
//! };
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Search or address bar, when one is shown.
    pub input_bar: Option<InputBarInfo>,

    /// Body of the current route.
    pub page: PageView,

    pub footer: FooterInfo,
}

/// Page-specific body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    List(ListView),
    Detail(DetailView),
    NotFound(NotFoundView),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, e.g. ` Countries (250) `.
    pub title: String,

    /// Current theme mode, shown at the right edge.
    pub theme_label: String,
}

/// Footer keybinding hints for the current page and input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Single-line text input: the search bar or the address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBarInfo {
    /// Prompt shown before the text (`Search` or `Go to`).
    pub label: String,
    pub text: String,
    /// Whether keystrokes currently edit this bar.
    pub focused: bool,
}

/// List page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub controls: ControlsInfo,
    pub columns: ColumnLayout,

    /// Rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Loading, error or empty-result message shown in place of rows.
    pub status: Option<StatusMessage>,
}

/// Region selector, sort selector and result count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsInfo {
    /// Selected region, or `All regions`.
    pub region: String,
    pub sort: String,
    /// Number of countries after filtering.
    pub count: usize,
    /// Number of countries fetched.
    pub total: usize,
}

/// Which optional columns fit in the current pane width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name_width: usize,
    pub show_region: bool,
    pub show_capital: bool,
}

impl ColumnLayout {
    /// Two cells for the flag emoji, two for spacing.
    pub const FLAG_WIDTH: usize = 4;
    pub const POPULATION_WIDTH: usize = 15;
    pub const REGION_WIDTH: usize = 12;
}

/// One country row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Flag emoji, possibly empty.
    pub flag: String,

    /// Common name, truncated to the name column.
    pub name: String,

    /// Thousands-separated population.
    pub population: String,

    pub region: String,
    pub capital: String,

    pub is_selected: bool,

    /// Character ranges of the search query within `name`.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Flag emoji and common name, empty while loading or on failure.
    pub title: String,

    /// Label/value rows, in display order.
    pub fields: Vec<DetailField>,

    /// Neighbouring countries, selectable for navigation.
    pub borders: Vec<BorderChip>,

    /// Loading or failure message shown in place of fields.
    pub status: Option<StatusMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderChip {
    pub code: String,
    pub is_selected: bool,
}

/// Not-found page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    /// Path that matched no route.
    pub path: String,
    pub message: String,
}

/// Centered status message with an optional hint line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
    pub subtitle: String,
}

/// Selects the message color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Empty,
    Error,
}
