//! Application configuration.
//!
//! Every tunable constant lives here so the rest of the crate stays free of
//! magic values.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, shown in the header and the document title.
pub const APP_TITLE: &str = "Appshell";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Snackbar Configuration
// =============================================================================

/// How long the snackbar stays visible before auto-closing (milliseconds).
pub const SNACKBAR_DURATION_MS: u32 = 3000;

// =============================================================================
// Layout Configuration
// =============================================================================

/// Media query marking the wide (desktop) layout.
///
/// Above this breakpoint the toolbar shows the navigation links and the
/// menu button is hidden; the corresponding rules live in the CSS modules.
pub const WIDE_LAYOUT_QUERY: &str = "(min-width: 460px)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme. `Bootstrap` is the default; `Lucide` trades it for thinner
/// strokes. Switching here restyles every icon in `components::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Icon theme the build uses.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
