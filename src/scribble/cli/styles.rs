use colored::{Color, Colorize};
use scribble::theme::Theme;

/// Colors for each element of the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub index: Color,
    pub index_trashed: Color,
    pub title: Color,
    pub preview: Color,
    pub time: Color,
    pub rule: Color,
}

pub const LIGHT: Palette = Palette {
    index: Color::Blue,
    index_trashed: Color::Red,
    title: Color::Black,
    preview: Color::TrueColor {
        r: 96,
        g: 96,
        b: 96,
    },
    time: Color::TrueColor {
        r: 128,
        g: 128,
        b: 128,
    },
    rule: Color::TrueColor {
        r: 180,
        g: 180,
        b: 180,
    },
};

pub const DARK: Palette = Palette {
    index: Color::BrightCyan,
    index_trashed: Color::BrightRed,
    title: Color::BrightWhite,
    preview: Color::TrueColor {
        r: 170,
        g: 170,
        b: 170,
    },
    time: Color::TrueColor {
        r: 154,
        g: 154,
        b: 154,
    },
    rule: Color::TrueColor {
        r: 90,
        g: 90,
        b: 90,
    },
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Applies a palette, or nothing at all when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    pub palette: &'static Palette,
    pub color: bool,
}

impl Painter {
    pub fn new(theme: Theme, color: bool) -> Self {
        Self {
            palette: Palette::for_theme(theme),
            color,
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self::new(Theme::Light, false)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dimmed(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
