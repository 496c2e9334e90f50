//! Glyph icon tile: an emoji or symbol on a colored square.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon tile sizing tokens.
pub enum IconSize {
    /// Taskbar and titlebar size.
    Sm,
    /// Default size.
    #[default]
    Md,
    /// Desktop launcher size.
    Lg,
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn tile_style(color: &str) -> String {
    if color.is_empty() {
        String::new()
    } else {
        format!("background-color:{color};")
    }
}

#[component]
/// Renders a glyph centered on a colored tile.
pub fn GlyphIcon(
    #[prop(into)] glyph: String,
    #[prop(optional, into)] color: String,
    #[prop(optional)] size: IconSize,
) -> impl IntoView {
    view! {
        <span
            class="ui-glyph-icon"
            style=tile_style(&color)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="glyph-icon"
            data-ui-size=size.token()
        >
            {glyph}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tile_style_skips_missing_color() {
        assert_eq!(tile_style(""), "");
        assert_eq!(tile_style("#ffcc00"), "background-color:#ffcc00;");
    }

    #[test]
    fn size_tokens_are_stable() {
        assert_eq!(IconSize::default().token(), "md");
        assert_eq!(IconSize::Lg.token(), "lg");
    }
}
