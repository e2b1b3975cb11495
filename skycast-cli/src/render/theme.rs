//! Static look of both dashboards. Read-only; nothing mutates it at runtime.

pub struct Theme {
    pub page_title: &'static str,
    pub page_icon: &'static str,
    /// Header accent, the first stop of the page gradient.
    pub accent: &'static str,
    /// Card titles, the second stop of the page gradient.
    pub card_title: &'static str,
    pub error: &'static str,
    pub chart_line: &'static str,
    pub chart_background: &'static str,
}

pub const PLAIN: Theme = Theme {
    page_title: "Weather App",
    page_icon: "🌤️",
    accent: "#00B4DB",
    card_title: "#0083B0",
    error: "#FF4B4B",
    chart_line: "#00B4DB",
    chart_background: "#FFFFFF",
};

pub const VISTA: Theme = Theme {
    page_title: "Weather Vista",
    page_icon: "🌈",
    accent: "#6A11CB",
    card_title: "#2575FC",
    error: "#FF4B4B",
    chart_line: "#2575FC",
    chart_background: "#FFFFFF",
};
