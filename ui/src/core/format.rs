//! Formatting helpers for presenting editorial content.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// Render an ISO `yyyy-mm-dd` comment date as e.g. "May 24, 2025".
/// Malformed dates fall back to the raw string rather than failing a render.
pub fn format_comment_date(raw: &str) -> String {
    Date::parse(raw, ISO_DATE)
        .ok()
        .and_then(|date| date.format(DISPLAY_DATE).ok())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_render_long_form() {
        assert_eq!(format_comment_date("2025-05-24"), "May 24, 2025");
        assert_eq!(format_comment_date("2025-05-03"), "May 3, 2025");
    }

    #[test]
    fn malformed_dates_fall_back_verbatim() {
        assert_eq!(format_comment_date("yesterday"), "yesterday");
        assert_eq!(format_comment_date(""), "");
    }
}
