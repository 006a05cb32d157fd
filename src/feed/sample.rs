use crate::models::{NewsItem, NewsKind};

fn item(
    id: &str,
    kind: NewsKind,
    published_at: &str,
    author: &str,
    title: &str,
    summary: &str,
    content: &str,
) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        content: content.to_string(),
        kind,
        author: author.to_string(),
        published_at: published_at.to_string(),
    }
}

/// Sample announcements, newest first.
pub fn sample_items() -> Vec<NewsItem> {
    vec![
        item(
            "1",
            NewsKind::Pengumuman,
            "2025-01-15",
            "Ahmad Wijaya",
            "Pembayaran Iuran Bulan Januari 2025",
            "Reminder untuk warga yang belum melakukan pembayaran iuran bulanan Januari 2025. \
             Batas waktu pembayaran hingga tanggal 20 Januari.",
            "Kepada seluruh warga Cluster Kalita yang terhormat,\n\n\
             Dengan ini kami mengingatkan bahwa pembayaran iuran bulanan untuk bulan Januari 2025 \
             akan berakhir pada tanggal 20 Januari 2025.\n\n\
             Bagi warga yang belum melakukan pembayaran, mohon segera melakukan pembayaran melalui:\n\
             - Transfer ke rekening BCA: 1234567890 a.n. Ahmad Wijaya\n\
             - Transfer ke rekening Mandiri: 0987654321 a.n. Ahmad Wijaya\n\n\
             Jangan lupa untuk mengirimkan bukti transfer ke WhatsApp bendahara di nomor 0814-3456-7890.\n\n\
             Terima kasih atas perhatian dan kerjasamanya.",
        ),
        item(
            "2",
            NewsKind::Berita,
            "2025-01-10",
            "Dedi Kurniawan",
            "Gotong Royong Bersih-Bersih Lingkungan",
            "Kegiatan gotong royong bersih-bersih lingkungan cluster akan dilaksanakan pada hari \
             Minggu, 19 Januari 2025 pukul 07.00 WIB.",
            "Dalam rangka menjaga kebersihan dan keindahan lingkungan Cluster Kalita, akan diadakan \
             kegiatan gotong royong bersih-bersih lingkungan.\n\n\
             Waktu: Minggu, 19 Januari 2025\n\
             Jam: 07.00 - 10.00 WIB\n\
             Titik kumpul: Taman tengah cluster\n\n\
             Kegiatan yang akan dilakukan:\n\
             - Pembersihan saluran air\n\
             - Penyapuan jalan\n\
             - Pemangkasan tanaman\n\
             - Pengecatan fasilitas umum\n\n\
             Mohon partisipasi seluruh warga dengan membawa peralatan:\n\
             - Sapu\n\
             - Cangkul\n\
             - Gunting tanaman\n\
             - Kantong sampah\n\n\
             Konsumsi akan disediakan panitia. Mari bersama-sama menjaga lingkungan kita!",
        ),
        item(
            "3",
            NewsKind::Pengumuman,
            "2025-01-08",
            "Siti Nurhaliza",
            "Rapat Bulanan Pengurus RT",
            "Rapat koordinasi bulanan pengurus RT akan dilaksanakan pada Sabtu, 25 Januari 2025 \
             di Balai Pertemuan Cluster Kalita.",
            "Kepada seluruh pengurus RT Cluster Kalita,\n\n\
             Dengan hormat,\n\
             Kami mengundang Bapak/Ibu untuk hadir dalam rapat koordinasi bulanan yang akan \
             dilaksanakan pada:\n\n\
             Hari/Tanggal: Sabtu, 25 Januari 2025\n\
             Waktu: 19.30 - 21.00 WIB\n\
             Tempat: Balai Pertemuan Cluster Kalita\n\n\
             Agenda rapat:\n\
             1. Laporan kegiatan bulan lalu\n\
             2. Evaluasi program kerja\n\
             3. Perencanaan kegiatan bulan depan\n\
             4. Laporan keuangan\n\
             5. Lain-lain\n\n\
             Mohon kehadiran tepat waktu. Terima kasih.",
        ),
    ]
}
