use chrono::{Datelike, NaiveDate};

use crate::models::parse_published_date;

const HARI: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];
const BULAN: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

/// `15/1/2025`, the short Indonesian form used on list rows.
pub fn format_short_date(raw: &str) -> String {
    match parse_published_date(raw) {
        Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        None => raw.to_string(),
    }
}

/// `Rabu, 15 Januari 2025`, used on the detail page.
pub fn format_long_date(raw: &str) -> String {
    match parse_published_date(raw) {
        Some(date) => long_date(date),
        None => raw.to_string(),
    }
}

pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        HARI[date.weekday().num_days_from_sunday() as usize],
        date.day(),
        BULAN[date.month0() as usize],
        date.year()
    )
}

/// Shorten to at most `max_len` characters, ending with `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let head: String = s.chars().take(max_len - 3).collect();
    format!("{}...", head.trim_end())
}

/// Greedy word wrap that keeps blank lines from the source text.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() { 0 } else { 1 } + word.chars().count();
            if !current.is_empty() && current.chars().count() + needed > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_in_indonesian() {
        assert_eq!(format_short_date("2025-01-15"), "15/1/2025");
        assert_eq!(format_long_date("2025-01-15"), "Rabu, 15 Januari 2025");
        assert_eq!(format_long_date("2025-01-19T07:00:00+07:00"), "Minggu, 19 Januari 2025");
        assert_eq!(format_long_date("besok"), "besok");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("Rapat", 10), "Rapat");
        assert_eq!(truncate("Pembayaran Iuran Bulan Januari", 12), "Pembayara...");
        assert_eq!(truncate("Baca Selengkapnya →→→", 19), "Baca Selengkapny...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        let lines = wrap_text("Kepada warga,\n\nHarap hadir tepat waktu.", 10);
        assert_eq!(lines, vec!["Kepada", "warga,", "", "Harap", "hadir", "tepat", "waktu."]);
    }
}
