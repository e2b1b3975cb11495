//! Display lookups: condition glyphs and US-EPA air quality categories.

/// Glyph used for condition codes outside the known set.
pub const DEFAULT_GLYPH: &str = "🌡️";

/// Return the glyph for a WeatherAPI.com condition code.
pub fn emoji_for(condition_code: i64) -> &'static str {
    match condition_code {
        1000 => "☀️",
        1003 => "⛅",
        1006 => "☁️",
        1009 => "🌥️",
        1030 => "🌫️",
        1063 => "🌦️",
        1066 => "🌨️",
        1087 => "⛈️",
        _ => DEFAULT_GLYPH,
    }
}

/// US-EPA air quality category (index 1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirQualityCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Unknown,
}

impl AirQualityCategory {
    /// Any index outside 1..=6 is `Unknown`.
    pub fn from_epa_index(index: i64) -> Self {
        match index {
            1 => Self::Good,
            2 => Self::Moderate,
            3 => Self::UnhealthyForSensitiveGroups,
            4 => Self::Unhealthy,
            5 => Self::VeryUnhealthy,
            6 => Self::Hazardous,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
            Self::Unknown => "Unknown",
        }
    }

    /// Hex colour, `#RRGGBB`.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#00E400",
            Self::Moderate => "#FFFF00",
            Self::UnhealthyForSensitiveGroups => "#FF7E00",
            Self::Unhealthy => "#FF0000",
            Self::VeryUnhealthy => "#8F3F97",
            Self::Hazardous => "#7E0023",
            Self::Unknown => "#FFFFFF",
        }
    }
}

/// Label and colour for a US-EPA index, `("Unknown", "#FFFFFF")` when out of range.
pub fn aqi_label_and_color(index: i64) -> (&'static str, &'static str) {
    let category = AirQualityCategory::from_epa_index(index);
    (category.label(), category.color())
}

/// Parse `#RRGGBB` into its components.
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
