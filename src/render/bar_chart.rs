use crate::model::SentimentDisplay;
use crate::utils::xml_escape;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 40.0;

pub struct Bar<'a> {
    pub label: &'a str,
    pub value: f64,
    pub color: &'a str,
}

pub fn sentiment_bars(display: &SentimentDisplay) -> [Bar<'static>; 4] {
    [
        Bar { label: "Positivo", value: display.positive, color: "#2ecc71" },
        Bar { label: "Negativo", value: display.negative, color: "#e74c3c" },
        Bar { label: "Neutral", value: display.neutral, color: "#95a5a6" },
        Bar { label: "Subjetividad", value: display.subjectivity, color: "#3498db" },
    ]
}

/// Vertical bar chart on a fixed 0-100 scale. Values outside are clamped.
pub fn render(title: &str, bars: &[Bar<'_>]) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="bar-chart" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" role="img" aria-label="{t}" font-family="Helvetica, Arial, sans-serif">"#,
        t = xml_escape(title)
    );
    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    svg.push_str(&format!(
        r##"<text x="{:.1}" y="22" font-size="16" text-anchor="middle" fill="#333">{}</text>"##,
        WIDTH / 2.0,
        xml_escape(title)
    ));

    for tick in (0..=100).step_by(25) {
        let y = baseline - plot_h * tick as f64 / 100.0;
        svg.push_str(&format!(
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e0e0e0"/><text x="{:.1}" y="{y:.1}" font-size="11" text-anchor="end" dominant-baseline="central" fill="#666">{tick}</text>"##,
            WIDTH - MARGIN_RIGHT,
            MARGIN_LEFT - 6.0
        ));
    }

    if !bars.is_empty() {
        let slot = plot_w / bars.len() as f64;
        let bar_w = slot * 0.6;
        for (i, bar) in bars.iter().enumerate() {
            let value = bar.value.clamp(0.0, 100.0);
            let h = plot_h * value / 100.0;
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
            let cx = x + bar_w / 2.0;
            svg.push_str(&format!(
                r##"<rect class="bar" data-label="{label}" data-value="{value:.1}" x="{x:.1}" y="{:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{color}"/><text x="{cx:.1}" y="{:.1}" font-size="12" text-anchor="middle" fill="#333">{value:.1}%</text><text x="{cx:.1}" y="{:.1}" font-size="12" text-anchor="middle" fill="#333">{label}</text>"##,
                baseline - h,
                baseline - h - 6.0,
                baseline + 18.0,
                label = xml_escape(bar.label),
                color = bar.color,
            ));
        }
    }

    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="#333"/>"##,
        WIDTH - MARGIN_RIGHT
    ));
    svg.push_str("</svg>");
    svg
}

pub fn render_sentiment(display: &SentimentDisplay) -> String {
    render("Análisis de sentimiento", &sentiment_bars(display))
}
