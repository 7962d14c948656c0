//! End-to-end tests of the public builder API

use std::sync::Mutex;

use ggspec::plot::context;
use ggspec::plot::geom::{
    Bar, BarAesthetics, GeomBuilder, Line, LineAesthetics, Point, PointAesthetics,
};
use ggspec::plot::scale::{limits, scale_x_datetime, ScaleOptions};
use ggspec::plot::{
    as_discrete, gggrid, lets_plot, tooltips_none, Figure, GridOptions, Layer, LayerLabels,
    OptionValue, PosOptions, StatOptions,
};
use ggspec::GgspecError;

static THEME_LOCK: Mutex<()> = Mutex::new(());

fn scatter() -> ggspec::plot::Plot {
    lets_plot().with_mapping(|m| {
        m.x("displ").y("hwy");
    }) + Point::default()
        .aes(PointAesthetics::default().alpha(0.6))
        .build(|m| {
            m.color("class");
        })
}

#[test]
fn test_bar_chart_with_annotations() {
    let bar = Bar::default()
        .aes(BarAesthetics::default().width(0.7))
        .build(|m| {
            m.x(as_discrete("manufacturer").order_by("..count..").order(-1))
                .fill("class");
        });
    let layer = Layer::new(bar)
        .stat(StatOptions::count())
        .position(PosOptions::stack(None, Some("all")))
        .labels(LayerLabels::new(["..count.."]).size(9).inherit_color())
        .tooltips(tooltips_none())
        .show_legend(false);

    let spec = layer.to_spec();
    assert_eq!(
        spec.keys().collect::<Vec<_>>(),
        vec![
            "geom",
            "width",
            "mapping",
            "mapping_annotations",
            "stat",
            "position",
            "show_legend",
            "tooltips",
            "labels"
        ]
    );

    let annotation = spec
        .get("mapping_annotations")
        .and_then(OptionValue::as_array)
        .and_then(|a| a.first())
        .and_then(OptionValue::as_map)
        .unwrap();
    assert_eq!(annotation.get("aes"), Some(&OptionValue::from("x")));
}

#[test]
fn test_grid_spec_json() {
    let _guard = THEME_LOCK.lock().unwrap_or_else(|p| p.into_inner());
    context::clear_theme();

    let cells = vec![Some(scatter()), Some(scatter()), Some(scatter())];
    let grid = gggrid(cells, GridOptions::default().ncol(2).sharey("row")).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&grid.to_spec().to_json().unwrap()).unwrap();

    assert_eq!(json["kind"], "subplots");
    assert_eq!(json["layout"]["name"], "grid");
    assert_eq!(json["layout"]["nrow"], 2);
    assert_eq!(json["layout"]["sharey"], "row");
    assert_eq!(json["layout"]["fit"], true);
    assert_eq!(json["figures"].as_array().map(Vec::len), Some(4));
    assert!(json["figures"][3].is_null());
    assert_eq!(json["figures"][0]["kind"], "plot");
    assert!(json.get("theme").is_none());
}

#[test]
fn test_grid_rejects_empty_input() {
    let result = gggrid(Vec::<Option<Figure>>::new(), GridOptions::default());
    assert!(matches!(result, Err(GgspecError::InvalidArgument(_))));
}

#[test]
fn test_theme_is_captured_at_build_time() {
    let _guard = THEME_LOCK.lock().unwrap_or_else(|p| p.into_inner());
    context::set_theme(
        [("name", OptionValue::from("minimal"))]
            .into_iter()
            .collect(),
    );
    let grid = gggrid(vec![Some(scatter())], GridOptions::default()).unwrap();
    context::clear_theme();

    let spec = grid.to_spec();
    let theme = spec.get("theme").and_then(OptionValue::as_map).unwrap();
    assert_eq!(theme.get("name"), Some(&OptionValue::from("minimal")));
}

#[test]
fn test_time_series_plot() {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let plot = lets_plot()
        + Line::default()
            .aes(LineAesthetics::default().linetype("dashed"))
            .build(|m| {
                m.x("date").y("value").group("series");
            })
        + scale_x_datetime(
            ScaleOptions::default()
                .limits(limits(Some(start), None::<i64>))
                .format("%b"),
        )
        .unwrap();

    let spec = plot.to_spec();
    let scales = spec.get("scales").and_then(OptionValue::as_array).unwrap();
    let scale = scales[0].as_map().unwrap();
    assert_eq!(scale.get("aesthetic"), Some(&OptionValue::from("x")));
    assert_eq!(
        scale.get("limits"),
        Some(&OptionValue::Array(vec![
            OptionValue::Integer(1_704_067_200_000),
            OptionValue::Null
        ]))
    );
}

#[test]
fn test_sealing_is_deterministic() {
    let make = || {
        Point::default()
            .aes(PointAesthetics::default().shape(21).fill("#ffcc00"))
            .fill_by("color")
            .build(|m| {
                m.x("a").y("b");
            })
            .to_spec()
            .to_json()
            .unwrap()
    };
    assert_eq!(make(), make());
}
