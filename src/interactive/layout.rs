use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

/// Calculate the top-level layout
pub fn app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Sections of the home page, top to bottom
pub struct HomeLayout {
    pub hero: Rect,
    pub stats: Rect,
    pub welcome: Rect,
    pub recent: Rect,
}

/// The welcome message gives way first on short terminals.
pub fn home_layout(area: Rect) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(9),
        ])
        .split(area);

    HomeLayout {
        hero: chunks[0],
        stats: chunks[1],
        welcome: chunks[2],
        recent: chunks[3],
    }
}

/// Split an area into `n` equal columns.
pub fn columns(area: Rect, n: usize) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Ratio(1, n as u32)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_small_area() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered_popup(60, 20, area);
        assert_eq!(popup, Rect::new(0, 0, 40, 10));

        let popup = centered_popup(20, 4, area);
        assert_eq!(popup, Rect::new(10, 3, 20, 4));
    }

    #[test]
    fn test_columns_cover_area() {
        let cols = columns(Rect::new(0, 0, 90, 5), 3);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols.iter().map(|c| c.width).sum::<u16>(), 90);
        assert!(columns(Rect::new(0, 0, 90, 5), 0).is_empty());
    }
}
