use super::*;
use crate::layout::position::DefaultLayout;
use crate::test_support::BlockText;

#[test]
fn configs_deserialize_by_type_tag() {
    let cfg: EffectConfig = serde_json::from_str(
        r#"{"type":"title","text":"Hi","zoomDirection":"left","zoomAmount":0.3}"#,
    )
    .unwrap();
    let EffectConfig::Title(p) = &cfg else {
        panic!("expected title config");
    };
    assert_eq!(p.zoom_amount, 0.3);

    let cfg: EffectConfig =
        serde_json::from_str(r#"{"type":"news-title","text":"Hi","delay":0.1}"#).unwrap();
    assert!(matches!(cfg, EffectConfig::NewsTitle(_)));

    let cfg: EffectConfig =
        serde_json::from_str(r#"{"type":"slide-in-text","text":"Hi"}"#).unwrap();
    assert_eq!(EffectSpec::from(cfg).kind(), "slide-in-text");

    assert!(serde_json::from_str::<EffectConfig>(r#"{"type":"custom"}"#).is_err());
}

#[test]
fn every_variant_builds_a_frame_source() {
    let canvas = Canvas::new(320, 180).unwrap();
    let ctx = FrameCtx {
        renderer: &BlockText,
        layout: &DefaultLayout::default(),
    };
    let specs = [
        EffectSpec::Title(TitleParams::new("a")),
        EffectSpec::NewsTitle(NewsTitleParams::new("b")),
        EffectSpec::SlideInText(SlideInTextParams::new("c")),
        EffectSpec::Custom(CustomEffect::new("noop", |_, _, _| Ok(()))),
    ];
    let expected_nodes = [1, 2, 1, 0];
    for (spec, n) in specs.iter().zip(expected_nodes) {
        let source = spec.frame_source(canvas).unwrap();
        let mut scene = Scene::new(canvas);
        source.on_render(0.5, &ctx, &mut scene).unwrap();
        assert_eq!(scene.nodes().len(), n, "{}", spec.kind());
    }
}
