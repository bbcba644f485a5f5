// Utility functions
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` form value. Blank input is `None`.
pub fn parse_session_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Escapes text for embedding in SVG/XML.
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_session_date(" 2024-03-05 "),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(parse_session_date(""), None);
        assert_eq!(parse_session_date("05/03/2024"), None);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(xml_escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(xml_escape("canción"), "canción");
    }
}
