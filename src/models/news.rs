use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::KalitaError;

/// Category of a published item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    Berita,
    Pengumuman,
}

impl NewsKind {
    /// Display label shown on badges.
    pub fn label(self) -> &'static str {
        match self {
            NewsKind::Berita => "Berita",
            NewsKind::Pengumuman => "Pengumuman",
        }
    }

    /// Value stored in the `type` column.
    pub fn key(self) -> &'static str {
        match self {
            NewsKind::Berita => "berita",
            NewsKind::Pengumuman => "pengumuman",
        }
    }
}

impl fmt::Display for NewsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NewsKind {
    type Err = KalitaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "berita" => Ok(NewsKind::Berita),
            "pengumuman" => Ok(NewsKind::Pengumuman),
            other => Err(KalitaError::InvalidInput(format!(
                "unknown news type '{}', expected berita or pengumuman",
                other
            ))),
        }
    }
}

/// A news item or announcement as delivered by the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type")]
    pub kind: NewsKind,
    #[serde(default)]
    pub author: String,
    pub published_at: String,
}

impl NewsItem {
    /// Calendar date of publication, if `published_at` is a recognizable date.
    pub fn published_date(&self) -> Option<NaiveDate> {
        parse_published_date(&self.published_at)
    }
}

pub fn parse_published_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    // timestamp columns without a zone
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}
