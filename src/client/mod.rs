pub mod supabase_client;

pub use supabase_client::{news_query, parse_news_rows, SupabaseClient};
