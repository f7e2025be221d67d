use ratatui::{widgets::Block, Frame};
use regression_core::{Panel, PanelData};

use crate::state::session::ExplorerState;

use super::{layout, theme::Theme, widgets};

/// Draws the entire UI.
pub fn draw(f: &mut Frame, state: &ExplorerState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (sidebar_area, content_area) = layout::root(area);
    let (header_area, body_area, status_area) = layout::content(content_area);

    f.render_widget(widgets::sidebar(state), sidebar_area);

    let scene = state.scene();
    f.render_widget(widgets::header(scene), header_area);
    f.render_widget(widgets::status(state), status_area);

    let charts = scene
        .panels
        .iter()
        .filter(|(panel, _)| *panel != Panel::Metrics)
        .count();
    let table = scene.panels.iter().find_map(|(_, data)| match data {
        PanelData::Metrics(table) => Some(table),
        _ => None,
    });

    let (chart_areas, table_area) = layout::body(body_area, charts, table.is_some());
    let mut chart_areas = chart_areas.into_iter();

    for (panel, data) in &scene.panels {
        match data {
            PanelData::MainPlot => {
                if let Some(area) = chart_areas.next() {
                    widgets::render_main_plot(f, area, scene);
                }
            }
            PanelData::Curve(curve) => {
                if let Some(area) = chart_areas.next() {
                    widgets::render_curve(f, area, *panel, curve);
                }
            }
            PanelData::Metrics(_) => {}
        }
    }

    if let (Some(table), Some(area)) = (table, table_area) {
        f.render_widget(widgets::metrics_table(table), area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use regression_core::Flag;

    use super::*;
    use crate::{
        config::{builder, model::ConfigDraft},
        state::model::{Command, Control},
    };

    fn screen(state: &ExplorerState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    fn state() -> ExplorerState {
        let config = builder::build(&ConfigDraft::default()).unwrap();
        ExplorerState::new(config).unwrap()
    }

    #[test]
    fn shows_the_current_equation() {
        let text = screen(&state());
        assert!(text.contains("y = -2.0 + 1.0 x"));
        assert!(text.contains("Control Parameters"));
        assert!(!text.contains("Adjusted R²"));
    }

    #[test]
    fn renders_every_panel_at_once() {
        let mut state = state();
        for control in Control::ALL {
            if let Control::Toggle(_) = control {
                state.apply(Command::Activate);
            }
            state.apply(Command::FocusNext);
        }
        assert!(Flag::ALL.iter().all(|&flag| state.flags().get(flag)));

        let text = screen(&state);
        assert!(text.contains("Evaluation Metrics"));
        assert!(text.contains("Adjusted R²"));
        assert!(text.contains("Sum of Squared Residuals (SSR)"));
    }

    #[test]
    fn tiny_terminals_do_not_panic() {
        let state = state();
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();
    }
}
