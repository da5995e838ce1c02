use super::*;
use crate::layout::position::DefaultLayout;
use crate::test_support::BlockText;

fn canvas() -> Canvas {
    Canvas::new(1000, 500).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn render(source: &NewsTitleSource, progress: f64) -> Scene {
    let ctx = FrameCtx {
        renderer: &BlockText,
        layout: &DefaultLayout::default(),
    };
    let mut scene = Scene::new(canvas());
    source.on_render(progress, &ctx, &mut scene).unwrap();
    scene
}

#[test]
fn ramps_are_staggered() {
    let r = NewsTitleRamps::at(0.0, 0.0, 1.0);
    assert_eq!((r.background, r.text, r.text_opacity), (0.0, 0.0, 0.0));

    let r = NewsTitleRamps::at(0.05, 0.0, 1.0);
    assert!(r.background > r.text);
    assert!(r.text > r.text_opacity);
    assert_eq!(r.text_opacity, 0.0);

    let r = NewsTitleRamps::at(1.0, 0.0, 1.0);
    assert_eq!((r.background, r.text, r.text_opacity), (1.0, 1.0, 1.0));
}

#[test]
fn delayed_ramp_matches_formula() {
    let v = delayed_ramp(0.3, 0.1, 0.02, 2.0, 4.0);
    let expected = ease_out_expo(((0.3 - 0.1 - 0.02) * 2.0 * 4.0_f64).clamp(0.0, 1.0));
    assert_eq!(v, expected);
    assert_eq!(delayed_ramp(0.05, 0.1, 0.0, 1.0, 3.0), 0.0);
}

#[test]
fn delay_holds_everything_offscreen() {
    let mut params = NewsTitleParams::new("BREAKING");
    params.delay = 0.5;
    let source = NewsTitleSource::new(params, canvas()).unwrap();
    let r = source.ramps_at(0.4);
    assert_eq!((r.background, r.text, r.text_opacity), (0.0, 0.0, 0.0));
}

#[test]
fn bar_and_text_geometry() {
    let source = NewsTitleSource::new(NewsTitleParams::new("NEWS"), canvas()).unwrap();
    let scene = render(&source, 1.0);
    assert_eq!(scene.nodes().len(), 2);

    let bar = &scene.nodes()[0];
    let text = &scene.nodes()[1];

    // min side 500: font 25, paddings 35 / 15, char spacing 100 thousandths em.
    assert_eq!(text.raster.height(), 25);
    let text_w = f64::from(text.raster.width());
    assert_eq!(text_w, 60.0);
    assert_eq!(f64::from(bar.raster.width()), (text_w + 70.0).ceil());
    assert_eq!(bar.raster.height(), 55);

    assert!(close(bar.placement.left, 0.0));
    assert!(close(bar.placement.top, 40.0 - 15.0));
    assert!(close(text.placement.left, 35.0));
    assert!(close(text.placement.top, 40.0));
    assert_eq!(text.placement.opacity, 1.0);
}

#[test]
fn everything_starts_offscreen_left() {
    let source = NewsTitleSource::new(NewsTitleParams::new("NEWS"), canvas()).unwrap();
    let scene = render(&source, 0.0);
    let bar = &scene.nodes()[0];
    let text = &scene.nodes()[1];
    assert!(close(bar.placement.left, -f64::from(bar.raster.width())));
    assert!(close(text.placement.left, 35.0 - 1000.0));
    assert_eq!(text.placement.opacity, 0.0);

    let frame = scene.compose(None).unwrap();
    assert!(frame.data.iter().all(|&v| v == 0));
}

#[test]
fn fractional_bar_width_stays_hidden_at_zero_progress() {
    // min side 180: padding 12.6 px per side, so the bar rect is rounded up to whole pixels.
    let canvas = Canvas::new(320, 180).unwrap();
    let source = NewsTitleSource::new(NewsTitleParams::new("NEWS"), canvas).unwrap();
    let ctx = FrameCtx {
        renderer: &BlockText,
        layout: &DefaultLayout::default(),
    };
    let mut scene = Scene::new(canvas);
    source.on_render(0.0, &ctx, &mut scene).unwrap();

    let bar = &scene.nodes()[0];
    let exact = f64::from(scene.nodes()[1].raster.width()) + 2.0 * 12.6;
    assert!(f64::from(bar.raster.width()) > exact);

    let frame = scene.compose(None).unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 0));
}

#[test]
fn config_defaults_and_validation() {
    let p: NewsTitleParams = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
    assert_eq!(p, NewsTitleParams::new("x"));

    let mut bad = NewsTitleParams::new("x");
    bad.speed = 0.0;
    assert!(NewsTitleSource::new(bad, canvas()).is_err());
}
