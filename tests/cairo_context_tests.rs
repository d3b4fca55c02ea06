#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chart_axis::ChartError;
use chart_axis::YAxisRenderer;
use chart_axis::axis::{AxisConfig, LimitLabelPosition, LimitLine, YAxis};
use chart_axis::core::ViewPortHandler;
use chart_axis::render::{CairoContext, Color};

fn axis() -> YAxis {
    let mut axis = YAxis::new(AxisConfig::default()).expect("axis");
    axis.compute_axis(0.0, 100.0).expect("compute");
    axis.config_mut().zero_line.color = Some(Color::BLACK);
    axis.add_limit_line(LimitLine::new(50.0, "Target").with_label_position(LimitLabelPosition::LeftBox))
        .expect("limit line");
    axis
}

#[test]
fn offscreen_context_rejects_invalid_surface_size() {
    let err = CairoContext::offscreen(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn offscreen_context_renders_all_layers() {
    let vp = ViewPortHandler::new(400.0, 300.0)
        .and_then(|h| h.with_offsets(50.0, 10.0, 50.0, 20.0))
        .expect("viewport");
    let axis = axis();
    let tr = axis.transformer(&vp, 0.0, 1.0).expect("transformer");
    let mut ctx = CairoContext::offscreen(400, 300).expect("context");
    ctx.clear(Color::WHITE).expect("clear");

    YAxisRenderer::from_parts(&vp, &axis, &tr).render_all(&mut ctx);

    let stats = ctx.stats();
    // 6 grid lines + zero line + axis line + band + callout
    assert_eq!(stats.paths_drawn, 10);
    assert_eq!(stats.texts_drawn, 7);
    assert!(ctx.take_error().is_none());
}

#[test]
fn context_can_wrap_external_cairo_context() {
    let vp = ViewPortHandler::new(300.0, 200.0)
        .and_then(|h| h.with_offsets(40.0, 10.0, 40.0, 10.0))
        .expect("viewport");
    let axis = axis();
    let tr = axis.transformer(&vp, 0.0, 1.0).expect("transformer");

    let surface = ImageSurface::create(Format::ARgb32, 300, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut ctx = CairoContext::new(context);
    YAxisRenderer::from_parts(&vp, &axis, &tr).render_axis_line(&mut ctx);

    assert_eq!(ctx.stats().paths_drawn, 1);
    assert!(ctx.take_error().is_none());
}
