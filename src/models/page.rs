use std::fmt;
use std::str::FromStr;

use crate::error::KalitaError;

/// Top-level pages reachable from the navigation callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Beranda,
    Berita,
    Struktur,
    Kontak,
}

impl Page {
    pub fn key(self) -> &'static str {
        match self {
            Page::Beranda => "beranda",
            Page::Berita => "berita",
            Page::Struktur => "struktur",
            Page::Kontak => "kontak",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Beranda => "Beranda",
            Page::Berita => "Berita & Pengumuman",
            Page::Struktur => "Struktur Pengurus",
            Page::Kontak => "Kontak",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Page {
    type Err = KalitaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beranda" | "home" => Ok(Page::Beranda),
            "berita" | "news" => Ok(Page::Berita),
            "struktur" => Ok(Page::Struktur),
            "kontak" => Ok(Page::Kontak),
            other => Err(KalitaError::InvalidInput(format!("unknown page '{}'", other))),
        }
    }
}
