use super::*;
use crate::layout::position::{DefaultLayout, OriginX};
use crate::test_support::BlockText;

fn canvas() -> Canvas {
    Canvas::new(800, 400).unwrap()
}

fn render(source: &SlideInTextSource, progress: f64) -> Scene {
    let ctx = FrameCtx {
        renderer: &BlockText,
        layout: &DefaultLayout::default(),
    };
    let mut scene = Scene::new(canvas());
    source.on_render(progress, &ctx, &mut scene).unwrap();
    scene
}

#[test]
fn track_holds_before_onset() {
    let track = slide_in_track().unwrap();
    let f = track.interpolate(0.05);
    assert_eq!(
        f,
        SlideInFrame {
            opacity: 1.0,
            text_slide: 0.0
        }
    );
}

#[test]
fn track_fades_out_at_the_end() {
    let track = slide_in_track().unwrap();
    let f = track.interpolate(0.85);
    assert!((f.opacity - 0.5).abs() < 1e-9);
    assert_eq!(f.text_slide, 1.0);

    let f = track.interpolate(0.95);
    assert_eq!(f.opacity, 0.0);
}

#[test]
fn track_reveals_between_checkpoints() {
    let track = slide_in_track().unwrap();
    let f = track.interpolate(0.2);
    assert!((f.text_slide - 0.5).abs() < 1e-9);
    assert_eq!(f.opacity, 1.0);
    assert_eq!(track.interpolate(0.5).text_slide, 1.0);
}

#[test]
fn text_is_hidden_before_onset_and_visible_when_held() {
    let source = SlideInTextSource::new(SlideInTextParams::new("Hello"), canvas()).unwrap();

    let early = render(&source, 0.05);
    let node = &early.nodes()[0];
    assert!(node.raster.data().iter().all(|&v| v == 0));

    let held = render(&source, 0.5);
    let node = &held.nodes()[0];
    assert!(node.raster.data().chunks_exact(4).all(|px| px[3] == 255));
    assert_eq!(node.placement.opacity, 1.0);
    assert_eq!(node.placement.origin_x, OriginX::Center);
}

#[test]
fn mid_reveal_is_opaque_on_the_left_only() {
    let source = SlideInTextSource::new(SlideInTextParams::new("Hello"), canvas()).unwrap();
    let scene = render(&source, 0.2);
    let r = &scene.nodes()[0].raster;
    assert_eq!(r.pixel(0, 0).map(|px| px[3]), Some(255));
    assert_eq!(r.pixel(r.width() - 1, 0).map(|px| px[3]), Some(0));
}

#[test]
fn font_metrics_scale_with_width() {
    let source = SlideInTextSource::new(SlideInTextParams::new("ab"), canvas()).unwrap();
    // 800 * 0.05 = 40px font; spacing 80 thousandths em = 3.2px.
    let scene = render(&source, 0.5);
    let r = &scene.nodes()[0].raster;
    assert_eq!(r.height(), 40);
    assert_eq!(r.width(), 47);
}

#[test]
fn deprecated_color_alias_is_honoured() {
    let p: SlideInTextParams =
        serde_json::from_str(r##"{"text":"x","color":"#ff0000"}"##).unwrap();
    assert_eq!(p.deprecations(), vec!["color"]);
    assert_eq!(p.resolved_text_color(), Color::rgba(1.0, 0.0, 0.0, 1.0));

    let source = SlideInTextSource::new(p, canvas()).unwrap();
    let scene = render(&source, 0.5);
    assert_eq!(scene.nodes()[0].raster.pixel(0, 0), Some([255, 0, 0, 255]));
}

#[test]
fn text_color_wins_over_deprecated_alias() {
    let p: SlideInTextParams = serde_json::from_str(
        r##"{"text":"x","color":"#ff0000","textColor":"#00ff00"}"##,
    )
    .unwrap();
    assert_eq!(p.resolved_text_color(), Color::rgba(0.0, 1.0, 0.0, 1.0));

    let plain = SlideInTextParams::new("x");
    assert!(plain.deprecations().is_empty());
    assert_eq!(plain.resolved_text_color(), Color::rgba(1.0, 1.0, 1.0, 1.0));
}

#[test]
fn invalid_font_size_is_rejected() {
    let mut p = SlideInTextParams::new("x");
    p.font_size = 0.0;
    assert!(SlideInTextSource::new(p, canvas()).is_err());
}
