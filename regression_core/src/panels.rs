//! Everything one frame of the explorer shows, derived from the current parameters
//! and toggles in a single pure pass.
//!
//! Instead of branching over every combination of toggles, the enabled toggles are
//! turned into an ordered list of [`Panel`]s. Each panel declares the data it needs
//! and [`recompute`] fills it in, so the front-end only iterates the list.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::{
    dataset::{Dataset, Datasets, linspace},
    error::Result,
    metrics::{EvaluationTable, MetricKind, evaluate_model, ssr},
    model::{LinearModel, Param},
    sweep::{self, SweepCurve, SweepRange},
};

/// The fixed viewport of the main plot, for both axes.
pub const PLOT_BOUNDS: (f64, f64) = (-10., 10.);

/// The amount of points the fitted line is drawn with.
pub const LINE_SAMPLES: usize = 100;

/// The display toggles of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayFlags {
    pub data_points: bool,
    pub ssr: bool,
    pub ssr_vs_b: bool,
    pub ssr_vs_a: bool,
    pub test_set: bool,
    pub metrics: bool,
    pub mae_vs_b: bool,
}

/// Identifies one of the toggles in [`DisplayFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    DataPoints,
    Ssr,
    SsrVsB,
    SsrVsA,
    TestSet,
    Metrics,
    MaeVsB,
}

impl Flag {
    /// Every toggle, in the order the controls list them.
    pub const ALL: [Flag; 7] = [
        Flag::DataPoints,
        Flag::Ssr,
        Flag::SsrVsB,
        Flag::SsrVsA,
        Flag::TestSet,
        Flag::Metrics,
        Flag::MaeVsB,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Flag::DataPoints => "Show Data Points",
            Flag::Ssr => "Show Sum of Squared Residuals (SSR)",
            Flag::SsrVsB => "Show SSR vs. b plot",
            Flag::SsrVsA => "Show SSR vs. a plot",
            Flag::TestSet => "Show Test Set",
            Flag::Metrics => "Show Evaluation Metrics",
            Flag::MaeVsB => "Show MAE vs. b plot",
        }
    }
}

impl DisplayFlags {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::DataPoints => self.data_points,
            Flag::Ssr => self.ssr,
            Flag::SsrVsB => self.ssr_vs_b,
            Flag::SsrVsA => self.ssr_vs_a,
            Flag::TestSet => self.test_set,
            Flag::Metrics => self.metrics,
            Flag::MaeVsB => self.mae_vs_b,
        }
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        let field = match flag {
            Flag::DataPoints => &mut self.data_points,
            Flag::Ssr => &mut self.ssr,
            Flag::SsrVsB => &mut self.ssr_vs_b,
            Flag::SsrVsA => &mut self.ssr_vs_a,
            Flag::TestSet => &mut self.test_set,
            Flag::Metrics => &mut self.metrics,
            Flag::MaeVsB => &mut self.mae_vs_b,
        };

        *field = value;
    }

    pub fn toggle(&mut self, flag: Flag) {
        self.set(flag, !self.get(flag));
    }

    /// The enabled panels, in layout order. The main plot is always first.
    pub fn panels(&self) -> Vec<Panel> {
        Panel::ALL
            .into_iter()
            .filter(|panel| panel.enabled_by().is_none_or(|flag| self.get(flag)))
            .collect()
    }
}

/// Which dataset a panel works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DatasetId {
    Train,
    Test,
}

impl DatasetId {
    pub fn select(self, datasets: &Datasets) -> &Dataset {
        match self {
            DatasetId::Train => &datasets.train,
            DatasetId::Test => &datasets.test,
        }
    }
}

/// The sweep a curve panel plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelSweep {
    pub metric: MetricKind,
    pub axis: Param,
    pub dataset: DatasetId,
}

/// One area of the explorer's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Panel {
    MainPlot,
    SsrVsB,
    SsrVsA,
    MaeVsB,
    Metrics,
}

impl Panel {
    /// Every panel, in layout order.
    pub const ALL: [Panel; 5] = [
        Panel::MainPlot,
        Panel::SsrVsB,
        Panel::SsrVsA,
        Panel::MaeVsB,
        Panel::Metrics,
    ];

    /// The toggle that enables this panel, `None` if it is always shown.
    pub fn enabled_by(&self) -> Option<Flag> {
        match self {
            Panel::MainPlot => None,
            Panel::SsrVsB => Some(Flag::SsrVsB),
            Panel::SsrVsA => Some(Flag::SsrVsA),
            Panel::MaeVsB => Some(Flag::MaeVsB),
            Panel::Metrics => Some(Flag::Metrics),
        }
    }

    /// The sweep this panel plots, if it is a curve panel.
    pub fn sweep(&self) -> Option<PanelSweep> {
        let (metric, axis) = match self {
            Panel::SsrVsB => (MetricKind::Ssr, Param::Slope),
            Panel::SsrVsA => (MetricKind::Ssr, Param::Intercept),
            Panel::MaeVsB => (MetricKind::Mae, Param::Slope),
            Panel::MainPlot | Panel::Metrics => return None,
        };

        Some(PanelSweep {
            metric,
            axis,
            dataset: DatasetId::Train,
        })
    }

    pub fn title(&self) -> String {
        match self.sweep() {
            Some(PanelSweep { metric, axis, .. }) => format!(
                "{metric} vs. Parameter {} (with fixed {})",
                axis.symbol(),
                axis.other().symbol()
            ),
            None => match self {
                Panel::Metrics => "Evaluation Metrics".to_string(),
                _ => "Linear Equation".to_string(),
            },
        }
    }
}

/// A vertical segment from an observed value to its prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Residual {
    pub x: f64,
    pub y: f64,
    pub y_pred: f64,
}

/// The model's fit of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fit {
    pub dataset: DatasetId,
    pub points: Vec<(f64, f64)>,
    pub residuals: Vec<Residual>,
    pub ssr: f64,
}

impl Fit {
    fn new(id: DatasetId, dataset: &Dataset, model: LinearModel) -> Result<Self> {
        let y_pred = model.predict(dataset.x());
        let ssr = ssr(dataset.y(), y_pred.view())?;

        let residuals = dataset
            .iter()
            .zip(y_pred.iter())
            .map(|((x, y), &p)| Residual { x, y, y_pred: p })
            .collect();

        Ok(Self {
            dataset: id,
            points: dataset.iter().collect(),
            residuals,
            ssr,
        })
    }
}

/// A sweep curve together with the point of the current parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvePanel {
    pub sweep: PanelSweep,
    pub curve: SweepCurve,
    pub current: (f64, f64),
}

/// The data a single enabled panel renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PanelData {
    MainPlot,
    Curve(CurvePanel),
    Metrics(EvaluationTable),
}

/// Every value one frame of the explorer displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub model: LinearModel,
    pub flags: DisplayFlags,
    pub line: Vec<(f64, f64)>,
    pub train: Fit,
    pub test: Option<Fit>,
    pub panels: Vec<(Panel, PanelData)>,
}

impl Scene {
    /// The equation of the current line with one decimal per parameter.
    pub fn equation(&self) -> String {
        format!("{:.1}", self.model)
    }

    /// The title of the main plot, mentioning the SSR when it is toggled on.
    pub fn plot_title(&self) -> String {
        let LinearModel { a, b } = self.model;
        let mut title = format!("Linear Equation: y = {a:.1} + {b:.1}x");
        if self.flags.ssr {
            title.push_str(&format!(" with SSR = {:.2}", self.train.ssr));
        }

        title
    }
}

/// Derives everything the explorer shows for the given parameters and toggles.
///
/// Nothing is cached between calls, every value is recomputed from the inputs.
///
/// # Arguments
/// * `datasets` - The train and test samples.
/// * `model` - The current line.
/// * `flags` - The current display toggles.
/// * `range` - The grid of candidate values every sweep curve is evaluated at.
pub fn recompute(
    datasets: &Datasets,
    model: LinearModel,
    flags: DisplayFlags,
    range: SweepRange,
) -> Result<Scene> {
    let (lo, hi) = PLOT_BOUNDS;
    let line = linspace(lo, hi, LINE_SAMPLES)
        .iter()
        .map(|&x| (x, model.eval(x)))
        .collect();

    let train = Fit::new(DatasetId::Train, &datasets.train, model)?;
    let test = if flags.test_set {
        Some(Fit::new(DatasetId::Test, &datasets.test, model)?)
    } else {
        None
    };

    let candidates = range.values()?;
    let panels = flags
        .panels()
        .into_iter()
        .map(|panel| {
            panel_data(panel, datasets, model, candidates.view()).map(|data| (panel, data))
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(a = model.a, b = model.b, panels = panels.len(); "recomputed scene");

    Ok(Scene {
        model,
        flags,
        line,
        train,
        test,
        panels,
    })
}

fn panel_data(
    panel: Panel,
    datasets: &Datasets,
    model: LinearModel,
    candidates: ArrayView1<f64>,
) -> Result<PanelData> {
    if let Some(spec) = panel.sweep() {
        let dataset = spec.dataset.select(datasets);
        let curve = sweep::sweep(&spec.metric, dataset, model, spec.axis, candidates)?;
        let current = (
            model.get(spec.axis),
            sweep::point(&spec.metric, dataset, model)?,
        );

        return Ok(PanelData::Curve(CurvePanel {
            sweep: spec,
            curve,
            current,
        }));
    }

    Ok(match panel {
        Panel::Metrics => PanelData::Metrics(evaluate_model(datasets, model)?),
        _ => PanelData::MainPlot,
    })
}
