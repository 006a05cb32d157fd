pub const APP_DIR: &str = "kalita-cli";
pub const CONFIG_FILE: &str = ".kalita-cli-config.json";

pub const ENV_SUPABASE_URL: &str = "KALITA_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "KALITA_SUPABASE_ANON_KEY";

pub const DEFAULT_TABLE: &str = "berita";
pub const DEFAULT_REFRESH_SECS: u64 = 30;
pub const MIN_REFRESH_SECS: u64 = 5;

/// Upper bound for one PostgREST request, connect included.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Number of items shown in the home page preview.
pub const RECENT_PREVIEW_COUNT: usize = 3;

pub const ASSOCIATION_NAME: &str = "Paguyuban Cluster Kalita";

pub const EMPTY_STATE_MESSAGE: &str = "Belum ada berita atau pengumuman";
pub const LOADING_MESSAGE: &str = "Memuat berita...";
pub const READ_MORE_HINT: &str = "Baca Selengkapnya →";
pub const BACK_TO_LIST: &str = "Kembali ke Daftar Berita";
pub const WRITTEN_BY: &str = "Ditulis oleh:";

// PostgREST columns requested for news rows
pub const NEWS_FIELDS: &str = "id,title,summary,content,type,author,published_at";
