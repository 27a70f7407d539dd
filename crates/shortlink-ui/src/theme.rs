//! Theme configuration for `Shortlink`.
//!
//! Light surface, one accent, system fonts. Values are exposed as CSS
//! custom properties so the stylesheet never hard-codes colors.

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page background.
        pub const PRIMARY: &str = "#f4f5f7";
        /// Card background.
        pub const SURFACE: &str = "#ffffff";
        /// Row background inside cards.
        pub const MUTED: &str = "#f9fafb";
        /// Hover state background.
        pub const HOVER: &str = "#eef0f3";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#1f2933";
        /// Secondary/muted text.
        pub const SECONDARY: &str = "#52606d";
        /// Disabled text.
        pub const DISABLED: &str = "#9aa5b1";
    }

    /// Accent colors.
    pub mod accent {
        /// Primary accent, used for links and the main action.
        pub const PRIMARY: &str = "#2563eb";
        /// Primary accent darker variant for hover states.
        pub const PRIMARY_DIM: &str = "#1d4ed8";
        /// Short URLs.
        pub const SHORT: &str = "#059669";
        /// Success.
        pub const SUCCESS: &str = "#16a34a";
        /// Error.
        pub const ERROR: &str = "#dc2626";
        /// Info.
        pub const INFO: &str = "#0284c7";
    }

    /// Border colors.
    pub mod border {
        /// Default border.
        pub const DEFAULT: &str = "#d9dee4";
        /// Focused border.
        pub const FOCUSED: &str = "#2563eb";
    }

    /// Shadows.
    pub mod shadow {
        /// Card shadow.
        pub const CARD: &str = "0 1px 3px rgba(15, 23, 42, 0.08), 0 4px 12px rgba(15, 23, 42, 0.06)";
        /// Floating message box shadow.
        pub const FLOATING: &str = "0 8px 24px rgba(15, 23, 42, 0.18)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Body font family.
    pub const FONT_FAMILY: &str =
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif";
    /// Monospace font family for URLs.
    pub const FONT_FAMILY_MONO: &str =
        "ui-monospace, SFMono-Regular, Menlo, Consolas, 'Liberation Mono', monospace";

    /// Font sizes.
    pub mod sizes {
        /// Small text.
        pub const SM: &str = "0.8125rem";
        /// Base text.
        pub const BASE: &str = "0.9375rem";
        /// Large text.
        pub const LG: &str = "1.125rem";
        /// Heading text.
        pub const HEADING: &str = "1.5rem";
    }
}

/// Spacing scale.
pub mod spacing {
    /// Extra small spacing.
    pub const XS: &str = "0.25rem";
    /// Small spacing.
    pub const SM: &str = "0.5rem";
    /// Medium spacing.
    pub const MD: &str = "1rem";
    /// Large spacing.
    pub const LG: &str = "1.5rem";
}

/// Border radius scale.
pub mod radius {
    /// Small radius.
    pub const SM: &str = "4px";
    /// Medium radius.
    pub const MD: &str = "8px";
    /// Pill radius.
    pub const FULL: &str = "9999px";
}

/// Transition timings.
pub mod animation {
    /// Fast transition.
    pub const FAST: &str = "120ms ease-out";
    /// Pulse cycle of the in-progress indicator.
    pub const PULSE: &str = "1.4s ease-in-out infinite";
}

/// Generate the `:root` block of CSS custom properties.
#[must_use]
pub fn generate_css_variables() -> String {
    format!(
        ":root {{
  /* Backgrounds */
  --bg-primary: {bg_primary};
  --bg-surface: {bg_surface};
  --bg-muted: {bg_muted};
  --bg-hover: {bg_hover};

  /* Text */
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --text-disabled: {text_disabled};

  /* Accents */
  --accent-primary: {accent_primary};
  --accent-primary-dim: {accent_primary_dim};
  --accent-short: {accent_short};
  --accent-success: {accent_success};
  --accent-error: {accent_error};
  --accent-info: {accent_info};

  /* Borders and shadows */
  --border-default: {border_default};
  --border-focused: {border_focused};
  --shadow-card: {shadow_card};
  --shadow-floating: {shadow_floating};

  /* Typography */
  --font-family: {font_family};
  --font-family-mono: {font_family_mono};
  --font-sm: {font_sm};
  --font-base: {font_base};
  --font-lg: {font_lg};
  --font-heading: {font_heading};

  /* Spacing */
  --spacing-xs: {spacing_xs};
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};

  /* Border radius */
  --radius-sm: {radius_sm};
  --radius-md: {radius_md};
  --radius-full: {radius_full};

  /* Transitions */
  --transition-fast: {transition_fast};
  --animation-pulse: {animation_pulse};
}}",
        bg_primary = colors::background::PRIMARY,
        bg_surface = colors::background::SURFACE,
        bg_muted = colors::background::MUTED,
        bg_hover = colors::background::HOVER,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        text_disabled = colors::text::DISABLED,
        accent_primary = colors::accent::PRIMARY,
        accent_primary_dim = colors::accent::PRIMARY_DIM,
        accent_short = colors::accent::SHORT,
        accent_success = colors::accent::SUCCESS,
        accent_error = colors::accent::ERROR,
        accent_info = colors::accent::INFO,
        border_default = colors::border::DEFAULT,
        border_focused = colors::border::FOCUSED,
        shadow_card = colors::shadow::CARD,
        shadow_floating = colors::shadow::FLOATING,
        font_family = typography::FONT_FAMILY,
        font_family_mono = typography::FONT_FAMILY_MONO,
        font_sm = typography::sizes::SM,
        font_base = typography::sizes::BASE,
        font_lg = typography::sizes::LG,
        font_heading = typography::sizes::HEADING,
        spacing_xs = spacing::XS,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        radius_sm = radius::SM,
        radius_md = radius::MD,
        radius_full = radius::FULL,
        transition_fast = animation::FAST,
        animation_pulse = animation::PULSE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--bg-primary: #f4f5f7;"));
        assert!(css.contains("--accent-short"));
        assert!(css.contains("--font-family-mono"));
        assert_eq!(css.matches('{').count(), 1);
        assert!(css.trim_end().ends_with('}'));
    }

    #[test]
    fn test_color_values() {
        assert!(colors::background::PRIMARY.starts_with('#'));
        assert!(colors::accent::PRIMARY.starts_with('#'));
        assert!(colors::accent::ERROR.starts_with('#'));
    }
}
