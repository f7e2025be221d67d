use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the control sidebar.
const SIDEBAR_WIDTH: u16 = 44;

/// Height of the evaluation metrics table, borders included.
const TABLE_HEIGHT: u16 = 9;

/// Splits the screen into (sidebar, content).
pub fn root(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits the content into (header, body, status).
pub fn content(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    (rows[0], rows[1], rows[2])
}

/// Splits the body into `charts` equally wide columns and an optional table row below.
///
/// # Returns
/// (chart_areas, table_opt)
pub fn body(area: Rect, charts: usize, show_table: bool) -> (Vec<Rect>, Option<Rect>) {
    let (charts_area, table) = if show_table {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(TABLE_HEIGHT)])
            .split(area);
        (rows[0], Some(rows[1]))
    } else {
        (area, None)
    };

    if charts == 0 {
        return (Vec::new(), table);
    }

    let constraints = (0..charts)
        .map(|_| Constraint::Ratio(1, charts as u32))
        .collect::<Vec<_>>();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(charts_area);

    (cols.to_vec(), table)
}
