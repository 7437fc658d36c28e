//! File size display units.

/// How file sizes are shown in directory listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeUnits {
    /// Scale to the largest fitting binary unit, e.g. `1.5 MB`.
    #[default]
    Automatic,
    /// Exact byte count, e.g. `1572864 B`.
    Bytes,
}

impl SizeUnits {
    /// Labels in choice-control order.
    pub const LABELS: [&'static str; 2] = ["Automatic", "Bytes"];

    /// Decode a stored value. Only `"2"` means bytes; anything else is automatic.
    pub fn from_config(value: &str) -> Self {
        if value == "2" {
            Self::Bytes
        } else {
            Self::Automatic
        }
    }

    /// Encoded value as stored in the config.
    pub const fn as_config(self) -> &'static str {
        match self {
            Self::Automatic => "1",
            Self::Bytes => "2",
        }
    }

    /// Unit for a choice-control selection. Index 1 is bytes; anything else is automatic.
    pub const fn from_index(index: usize) -> Self {
        if index == 1 {
            Self::Bytes
        } else {
            Self::Automatic
        }
    }

    /// Choice-control selection for this unit.
    pub const fn index(self) -> usize {
        match self {
            Self::Automatic => 0,
            Self::Bytes => 1,
        }
    }

    /// Render `bytes` for display.
    pub fn format_size(self, bytes: u64) -> String {
        const SUFFIXES: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
        if self == Self::Bytes || bytes < 1024 {
            return format!("{bytes} B");
        }
        #[allow(clippy::cast_precision_loss)]
        let mut value = bytes as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < SUFFIXES.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        format!("{value:.1} {}", SUFFIXES[unit])
    }
}

impl std::fmt::Display for SizeUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::LABELS[self.index()])
    }
}
