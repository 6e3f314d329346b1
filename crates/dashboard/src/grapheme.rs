use unicode_display_width::width as display_width_impl;

/// Terminal cell width of `text`, counting wide graphemes as two cells.
pub(crate) fn display_width(text: &str) -> i32 {
    i32::try_from(display_width_impl(text)).unwrap_or(i32::MAX)
}
