use super::*;
use crate::layout::position::{DefaultLayout, NamedPosition, OriginX, OriginY};
use crate::test_support::BlockText;

fn canvas() -> Canvas {
    Canvas::new(640, 360).unwrap()
}

fn render(source: &TitleSource, progress: f64) -> Scene {
    let ctx = FrameCtx {
        renderer: &BlockText,
        layout: &DefaultLayout::default(),
    };
    let mut scene = Scene::new(canvas());
    source.on_render(progress, &ctx, &mut scene).unwrap();
    scene
}

#[test]
fn zoom_in_at_midpoint_scales_without_drift() {
    let mut params = TitleParams::new("Hello");
    params.zoom_direction = ZoomDirection::In;
    params.zoom_amount = 0.2;
    let source = TitleSource::new(params, canvas()).unwrap();

    let z = source.zoom_at(0.5);
    assert!((z.scale - 1.1).abs() < 1e-9);
    assert_eq!(z.translate_x, 0.0);

    let scene = render(&source, 0.5);
    let node = &scene.nodes()[0];
    assert!((node.placement.scale_x - 1.1).abs() < 1e-9);
    assert_eq!(node.placement.left, 320.0);
    assert_eq!(node.placement.top, 180.0);
    assert_eq!(node.placement.origin_x, OriginX::Center);
}

#[test]
fn defaults_match_title_conventions() {
    let p: TitleParams = serde_json::from_str(r#"{"text":"Hi"}"#).unwrap();
    assert_eq!(p.zoom_direction, ZoomDirection::In);
    assert_eq!(p.zoom_amount, 0.2);
    assert_eq!(p.font_family, "sans-serif");
    assert_eq!(p.text_color, Color::rgba(1.0, 1.0, 1.0, 1.0));
    assert_eq!(p, TitleParams::new("Hi"));
}

#[test]
fn font_size_follows_shorter_side() {
    let source = TitleSource::new(TitleParams::new("Hi"), canvas()).unwrap();
    assert_eq!(source.font_size, 36.0);
    let scene = render(&source, 0.0);
    assert_eq!(scene.nodes()[0].raster.height(), 36);
}

#[test]
fn right_pan_shifts_anchor_and_uses_fixed_scale() {
    let mut params = TitleParams::new("Pan");
    params.zoom_direction = ZoomDirection::Right;
    params.zoom_amount = 0.1;
    params.position = Position::Named(NamedPosition::Top);
    let source = TitleSource::new(params, canvas()).unwrap();

    let start = render(&source, 0.0);
    let p = start.nodes()[0].placement;
    assert!((p.left - (320.0 - 50.0)).abs() < 1e-9);
    assert!((p.scale_x - 1.4).abs() < 1e-9);
    assert_eq!(p.origin_y, OriginY::Top);

    let end = render(&source, 1.0);
    assert!((end.nodes()[0].placement.left - 370.0).abs() < 1e-9);
}

#[test]
fn out_of_range_progress_is_clamped() {
    let source = TitleSource::new(TitleParams::new("x"), canvas()).unwrap();
    assert_eq!(source.zoom_at(-1.0), source.zoom_at(0.0));
    assert_eq!(source.zoom_at(2.0), source.zoom_at(1.0));
}

#[test]
fn negative_zoom_amount_is_rejected() {
    let mut params = TitleParams::new("x");
    params.zoom_amount = -0.5;
    assert!(matches!(
        TitleSource::new(params, canvas()),
        Err(TextFxError::Validation(_))
    ));
}
