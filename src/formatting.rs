use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub primary: (u8, u8, u8),   // notebook names
    pub secondary: (u8, u8, u8), // headers
    pub timestamp: (u8, u8, u8), // entry timestamps
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        primary: (108, 112, 134),   // Gray
        secondary: (148, 226, 213), // Teal
        timestamp: (137, 180, 250), // Blue
    };
}

/// Formatting context passed to everything that prints
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    pub fn from_env() -> Self {
        let use_color = std::env::var("NO_COLOR").is_err();
        Self::new(use_color)
    }

    pub fn format_name(&self, name: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.primary;
            Paint::rgb(name, r, g, b).to_string()
        } else {
            name.to_string()
        }
    }

    pub fn format_header(&self, text: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.secondary;
            Paint::rgb(text, r, g, b).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_timestamp(&self, ts: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.timestamp;
            Paint::rgb(ts, r, g, b).to_string()
        } else {
            ts.to_string()
        }
    }

    /// Color the `[timestamp]` prefix of an entry line; other lines pass through.
    pub fn format_entry(&self, line: &str) -> String {
        match line.split_once("] ") {
            Some((stamp, text)) if stamp.starts_with('[') => {
                format!("{}] {}", self.format_timestamp(stamp), text)
            }
            _ => line.to_string(),
        }
    }

    /// `** Notebook: name **`
    pub fn notebook_banner(&self, name: &str) -> String {
        self.format_header(&format!("** Notebook: {name} **"))
    }
}
