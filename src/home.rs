//! Home page content and its navigation contract.

use crate::constants::RECENT_PREVIEW_COUNT;
use crate::feed::recent_items;
use crate::models::{NewsItem, Page};

pub const HERO_TITLE: &str = "Selamat Datang di Paguyuban Cluster Kalita";
pub const HERO_TAGLINE: &str = "Membangun kebersamaan dan harmoni dalam lingkungan RT/RW untuk \
     menciptakan kehidupan yang lebih baik bagi seluruh warga.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { value: "150+", label: "Kepala Keluarga" },
    Stat { value: "5+", label: "Tahun Berdiri" },
    Stat { value: "25+", label: "Kegiatan per Tahun" },
];

pub const WELCOME_TITLE: &str = "Sambutan Ketua RT";
pub const WELCOME_PARAGRAPHS: [&str; 4] = [
    "Assalamualaikum warahmatullahi wabarakatuh dan salam sejahtera untuk kita semua.",
    "Selamat datang di website resmi Paguyuban RT/RW Cluster Kalita. Melalui platform digital ini, \
     kami berharap dapat memberikan informasi yang akurat dan terkini mengenai berbagai kegiatan, \
     pengumuman, dan perkembangan yang terjadi di lingkungan kita.",
    "Paguyuban ini hadir sebagai wadah untuk memperkuat silaturahmi antar warga, meningkatkan \
     partisipasi dalam kegiatan bersama, dan menciptakan lingkungan yang aman, nyaman, dan harmonis \
     bagi seluruh keluarga di Cluster Kalita.",
    "Mari bersama-sama kita wujudkan Cluster Kalita yang bersih, indah, dan penuh kebersamaan.",
];
pub const WELCOME_CLOSING: &str = "Hormat kami,";
pub const WELCOME_SIGNER: &str = "Budi Santoso";
pub const WELCOME_ROLE: &str = "Ketua RT Cluster Kalita";

pub const RECENT_TITLE: &str = "Berita & Pengumuman Terbaru";

/// Things a visitor can activate on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    /// "Lihat Pengurus"
    SeeBoard,
    /// "Hubungi Kami"
    ContactUs,
    /// "Lihat Semua"
    ViewAll,
    OpenPreview(usize),
}

impl HomeAction {
    pub fn target(self) -> Page {
        match self {
            HomeAction::SeeBoard => Page::Struktur,
            HomeAction::ContactUs => Page::Kontak,
            HomeAction::ViewAll | HomeAction::OpenPreview(_) => Page::Berita,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HomeAction::SeeBoard => "Lihat Pengurus",
            HomeAction::ContactUs => "Hubungi Kami",
            HomeAction::ViewAll => "Lihat Semua →",
            HomeAction::OpenPreview(_) => "Buka",
        }
    }
}

/// Focus state of the home page. The content itself is static apart from the
/// preview, which is read from the shared feed projection.
#[derive(Debug, Clone, Default)]
pub struct HomeView {
    focus: usize,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The preview cards: the most recent items of the feed.
    pub fn preview(data: &[NewsItem]) -> &[NewsItem] {
        recent_items(data, RECENT_PREVIEW_COUNT)
    }

    /// Focusable actions in screen order.
    pub fn actions(preview_len: usize) -> Vec<HomeAction> {
        let mut actions = vec![HomeAction::SeeBoard, HomeAction::ContactUs, HomeAction::ViewAll];
        actions.extend((0..preview_len.min(RECENT_PREVIEW_COUNT)).map(HomeAction::OpenPreview));
        actions
    }

    pub fn focused_action(&self, preview_len: usize) -> HomeAction {
        let actions = Self::actions(preview_len);
        actions[self.focus.min(actions.len() - 1)]
    }

    pub fn focus_next(&mut self, preview_len: usize) {
        let count = Self::actions(preview_len).len();
        self.focus = (self.focus.min(count - 1) + 1) % count;
    }

    pub fn focus_prev(&mut self, preview_len: usize) {
        let count = Self::actions(preview_len).len();
        let current = self.focus.min(count - 1);
        self.focus = if current == 0 { count - 1 } else { current - 1 };
    }

    /// Hand the action's page to the navigation callback. Nothing else happens.
    pub fn activate<F>(&self, action: HomeAction, on_navigate: &mut F)
    where
        F: FnMut(Page),
    {
        on_navigate(action.target());
    }
}
