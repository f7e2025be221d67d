use ndarray::Array1;
use regression_core::{
    DatasetSpec, DisplayFlags, LinearModel, MetricKind, MetricValue, Panel, PanelData, Param,
    RegressionErr, SweepRange, evaluate, generate, generate_datasets,
    metrics::{adjusted_r2, mae, r2, rmse, ssr},
    predict, recompute, sweep_metric,
};

const EPS: f64 = 1e-12;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.)
}

#[test]
fn generation_is_reproducible_for_any_seed() {
    for seed in [0, 1, 24, 42, u64::MAX] {
        let a = generate(seed, -8., 8., 30, 1., 1., 1.).unwrap();
        let b = generate(seed, -8., 8., 30, 1., 1., 1.).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn canonical_datasets() {
    let datasets = generate_datasets().unwrap();

    assert_eq!(datasets.train, DatasetSpec::TRAIN.generate().unwrap());
    assert_eq!(datasets.test, DatasetSpec::TEST.generate().unwrap());
    assert_eq!(datasets.train.len(), 30);
    assert_eq!(datasets.test.len(), 30);
    assert_eq!(datasets.train.x(), datasets.test.x());
    assert_ne!(datasets.train.y(), datasets.test.y());
    assert_eq!(datasets.train.x()[0], -8.);
    assert_eq!(datasets.train.x()[29], 8.);
}

#[test]
fn error_metrics_are_non_negative_and_zero_on_identity() {
    let datasets = generate_datasets().unwrap();
    let y = datasets.train.y();

    for (a, b) in [(-2., 1.), (0., 0.), (10., -10.), (1., 1.)] {
        let y_pred = predict(&datasets.train, a, b);
        assert!(ssr(y, y_pred.view()).unwrap() >= 0.);
        assert!(mae(y, y_pred.view()).unwrap() >= 0.);
        assert!(rmse(y, y_pred.view()).unwrap() >= 0.);
    }

    assert_eq!(ssr(y, y), Ok(0.));
    assert_eq!(mae(y, y), Ok(0.));
    assert_eq!(r2(y, y), Ok(1.));
}

#[test]
fn rmse_is_root_of_mean_ssr() {
    let datasets = generate_datasets().unwrap();
    let y = datasets.test.y();
    let y_pred = predict(&datasets.test, 0.3, 0.7);

    let independent: f64 = y
        .iter()
        .zip(y_pred.iter())
        .map(|(yi, pi)| (yi - pi) * (yi - pi))
        .sum();
    let expected = (independent / y.len() as f64).sqrt();

    assert!(close(rmse(y, y_pred.view()).unwrap(), expected));
}

#[test]
fn train_ssr_at_the_default_parameters() {
    let datasets = generate_datasets().unwrap();
    let train = &datasets.train;

    let expected: f64 = train
        .iter()
        .map(|(x, y)| {
            let r = y - (-2.0 + 1.0 * x);
            r * r
        })
        .sum();

    let y_pred = predict(train, -2.0, 1.0);
    let got = ssr(train.y(), y_pred.view()).unwrap();
    assert!(close(got, expected));
    // the line is shifted 3 units below the truth, far more than the noise
    assert!(got > 30. * 4.);
}

#[test]
fn canonical_datasets_are_pinned() {
    let datasets = generate_datasets().unwrap();
    let (train, test) = (&datasets.train, &datasets.test);

    assert_eq!(train.y()[0].to_bits(), (-6.9305720816380365f64).to_bits());
    assert_eq!(test.y()[0].to_bits(), (-7.3500281744916f64).to_bits());
    assert_eq!(test.y()[29].to_bits(), 7.484939237352597f64.to_bits());

    let train_ssr = ssr(train.y(), predict(train, -2., 1.).view()).unwrap();
    let test_ssr = ssr(test.y(), predict(test, -2., 1.).view()).unwrap();
    assert_eq!(train_ssr.to_bits(), 259.368146419096f64.to_bits());
    assert_eq!(test_ssr.to_bits(), 357.1571114267048f64.to_bits());
}

#[test]
fn adjusted_r2_with_two_samples_is_undefined() {
    assert!(matches!(
        adjusted_r2(0.9, 2, 1),
        Err(RegressionErr::DivisionUndefined { .. })
    ));
}

#[test]
fn true_parameters_beat_mismatched_ones() {
    let datasets = generate_datasets().unwrap();

    for dataset in [&datasets.train, &datasets.test] {
        let good = evaluate(dataset.y(), predict(dataset, 1., 1.).view()).unwrap();
        let bad = evaluate(dataset.y(), predict(dataset, -2., 1.).view()).unwrap();

        assert!(good.ssr < bad.ssr);
        assert!(good.mae < bad.mae);
        assert!(good.rmse < bad.rmse);

        let (MetricValue::Defined(good_r2), MetricValue::Defined(bad_r2)) = (good.r2, bad.r2)
        else {
            panic!("r2 must be defined for a noisy dataset");
        };
        assert!(good_r2 > bad_r2);
    }
}

/// The default grid with `value` added at its ordered position.
fn grid_through(value: f64) -> Array1<f64> {
    let mut candidates = SweepRange::default().values().unwrap().to_vec();
    if let Err(at) = candidates.binary_search_by(|c| c.total_cmp(&value)) {
        candidates.insert(at, value);
    }

    Array1::from(candidates)
}

#[test]
fn sweep_agrees_with_point_evaluation_at_the_current_value() {
    let datasets = generate_datasets().unwrap();
    let train = &datasets.train;
    let a0 = -2.0;

    for b0 in [1.0, -3.7, 0.0, 2.5, 9.9] {
        let candidates = grid_through(b0);
        let curve = sweep_metric(
            MetricKind::Ssr,
            Param::Slope,
            train,
            LinearModel::new(a0, b0),
            candidates.view(),
        )
        .unwrap();
        assert_eq!(curve.len(), candidates.len());

        let y_pred = predict(train, a0, b0);
        let point = ssr(train.y(), y_pred.view()).unwrap();
        assert_eq!(curve.value_at(b0).map(f64::to_bits), Some(point.to_bits()));
    }
}

#[test]
fn sweep_over_a_agrees_with_point_evaluation() {
    let datasets = generate_datasets().unwrap();
    let test = &datasets.test;
    let candidates = SweepRange::new(-20., 20., 41).unwrap().values().unwrap();
    let b0 = 1.0;

    let curve = sweep_metric(
        MetricKind::Mae,
        Param::Intercept,
        test,
        LinearModel::new(0., b0),
        candidates.view(),
    )
    .unwrap();
    assert_eq!(curve.len(), 41);
    assert!(curve.points().windows(2).all(|w| w[0].0 < w[1].0));

    for &(a, m) in curve.points() {
        let y_pred = predict(test, a, b0);
        assert_eq!(m.to_bits(), mae(test.y(), y_pred.view()).unwrap().to_bits());
    }
}

#[test]
fn ssr_sweep_is_minimal_near_the_true_slope() {
    let datasets = generate_datasets().unwrap();
    let candidates = SweepRange::new(-10., 10., 201).unwrap().values().unwrap();
    let curve = sweep_metric(
        MetricKind::Ssr,
        Param::Slope,
        &datasets.train,
        LinearModel::new(1., 0.),
        candidates.view(),
    )
    .unwrap();

    let (b, _) = curve.min_point().unwrap();
    assert!((b - 1.).abs() < 0.2, "minimum at b = {b}");
}

#[test]
fn scene_highlight_sits_on_its_curve() {
    let datasets = generate_datasets().unwrap();
    let range = SweepRange::default();
    let flags = DisplayFlags {
        ssr_vs_b: true,
        ssr_vs_a: true,
        mae_vs_b: true,
        metrics: true,
        test_set: true,
        ..Default::default()
    };

    let values = range.values().unwrap();
    let model = LinearModel::new(values[40], values[60]);
    let scene = recompute(&datasets, model, flags, range).unwrap();

    assert_eq!(scene.panels.len(), Panel::ALL.len());
    assert!(scene.test.is_some());

    for (panel, data) in &scene.panels {
        match data {
            PanelData::Curve(curve) => {
                let (param, value) = curve.current;
                assert_eq!(param, model.get(curve.sweep.axis));
                assert_eq!(curve.curve.value_at(param), Some(value), "{panel:?}");
            }
            PanelData::Metrics(table) => {
                assert_eq!(table.train.ssr, scene.train.ssr);
                assert_eq!(Some(table.test.ssr), scene.test.as_ref().map(|fit| fit.ssr));
            }
            PanelData::MainPlot => assert_eq!(*panel, Panel::MainPlot),
        }
    }
}

#[test]
fn recompute_is_pure() {
    let datasets = generate_datasets().unwrap();
    let flags = DisplayFlags {
        ssr_vs_b: true,
        metrics: true,
        ..Default::default()
    };
    let model = LinearModel::new(3.3, -0.4);

    let first = recompute(&datasets, model, flags, SweepRange::default()).unwrap();
    let second = recompute(&datasets, model, flags, SweepRange::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scene_serializes_undefined_metrics_as_null() {
    let x = ndarray::array![0., 1.];
    let y = ndarray::array![2., 2.];
    let dataset = regression_core::Dataset::new(x, y).unwrap();
    let eval = evaluate(dataset.y(), predict(&dataset, 2., 0.).view()).unwrap();

    let json = serde_json::to_value(eval).unwrap();
    assert_eq!(json["ssr"], 0.0);
    assert!(json["r2"].is_null());
    assert!(json["adjusted_r2"].is_null());
}
