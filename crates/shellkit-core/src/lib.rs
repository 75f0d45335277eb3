//! # shellkit-core - Core Domain Types
//!
//! Foundation crate for shellkit. Provides domain types, theme validation,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SiteInfo`] - Branding shown at the top of the sidebar
//! - [`Team`] - A team the user can switch between
//! - [`NavItem`], [`NavGroup`], [`SidebarData`] - Navigation data supplied by the caller
//! - [`ThemeMode`] - Light / dark / system preference
//!
//! ### Theme (`theme`)
//! - [`ThemeConfig`] - Partial sidebar/content colour configuration
//! - [`validate_color()`], [`validate_theme()`] - Colour syntax checks and baseline merge
//! - [`create_high_contrast_theme()`] - Contrast-maximised copy of a theme
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use shellkit_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod theme;
pub mod types;

/// Prelude for common imports used throughout all shellkit crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use theme::{
    create_high_contrast_theme, css_variables, default_dark_theme, default_light_theme,
    theme_color, validate_color, validate_theme, ContentColors, SidebarColors, Surface,
    ThemeConfig,
};
pub use types::{NavGroup, NavItem, SidebarData, SiteInfo, Team, ThemeMode};
