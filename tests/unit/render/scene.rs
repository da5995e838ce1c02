use super::*;

fn red(w: u32, h: u32) -> Raster {
    Raster::solid(w, h, Rgba8Premul::from_straight_rgba(255, 0, 0, 255)).unwrap()
}

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[idx],
        frame.data[idx + 1],
        frame.data[idx + 2],
        frame.data[idx + 3],
    ]
}

#[test]
fn empty_scene_composes_to_clear_color() {
    let scene = Scene::new(Canvas::new(4, 3).unwrap());
    let f = scene
        .compose(Some(Rgba8Premul::from_straight_rgba(0, 0, 0, 255)))
        .unwrap();
    assert!(f.premultiplied);
    assert_eq!(f.data.len(), 4 * 3 * 4);
    assert_eq!(px(&f, 3, 2), [0, 0, 0, 255]);

    let f = scene.compose(None).unwrap();
    assert_eq!(px(&f, 0, 0), [0, 0, 0, 0]);
}

#[test]
fn top_left_placement_copies_pixels() {
    let mut scene = Scene::new(Canvas::new(10, 10).unwrap());
    scene.add(red(2, 3), Placement::top_left(4.0, 5.0));
    let f = scene.compose(None).unwrap();
    assert_eq!(px(&f, 4, 5), [255, 0, 0, 255]);
    assert_eq!(px(&f, 5, 7), [255, 0, 0, 255]);
    assert_eq!(px(&f, 6, 5), [0, 0, 0, 0]);
    assert_eq!(px(&f, 4, 8), [0, 0, 0, 0]);
}

#[test]
fn center_origin_scales_around_anchor() {
    let mut scene = Scene::new(Canvas::new(20, 20).unwrap());
    let placement = Placement::at(PositionProps {
        left: 10.0,
        top: 10.0,
        origin_x: OriginX::Center,
        origin_y: OriginY::Center,
    })
    .with_scale(2.0);
    scene.add(red(4, 4), placement);
    let f = scene.compose(None).unwrap();
    // 4x4 scaled by 2 around (10,10) covers [6,14).
    assert_eq!(px(&f, 6, 6), [255, 0, 0, 255]);
    assert_eq!(px(&f, 13, 13), [255, 0, 0, 255]);
    assert_eq!(px(&f, 5, 10), [0, 0, 0, 0]);
    assert_eq!(px(&f, 14, 10), [0, 0, 0, 0]);
}

#[test]
fn opacity_and_offscreen_nodes_are_handled() {
    let mut scene = Scene::new(Canvas::new(8, 8).unwrap());
    scene.add(red(2, 2), Placement::top_left(0.0, 0.0).with_opacity(0.0));
    scene.add(red(2, 2), Placement::top_left(-50.0, 3.0));
    scene.add(red(2, 2), Placement::top_left(6.0, 6.0).with_opacity(0.5));
    let f = scene.compose(None).unwrap();
    assert_eq!(px(&f, 0, 0), [0, 0, 0, 0]);
    assert_eq!(px(&f, 0, 3), [0, 0, 0, 0]);
    assert_eq!(px(&f, 7, 7), [128, 0, 0, 128]);
}

#[test]
fn later_nodes_draw_on_top() {
    let mut scene = Scene::new(Canvas::new(4, 4).unwrap());
    scene.add(red(4, 4), Placement::top_left(0.0, 0.0));
    scene.add(
        Raster::solid(2, 2, Rgba8Premul::from_straight_rgba(0, 0, 255, 255)).unwrap(),
        Placement::top_left(0.0, 0.0),
    );
    let f = scene.compose(None).unwrap();
    assert_eq!(px(&f, 0, 0), [0, 0, 255, 255]);
    assert_eq!(px(&f, 3, 3), [255, 0, 0, 255]);
    assert_eq!(scene.nodes().len(), 2);
}

#[test]
fn zero_scale_is_skipped() {
    let mut scene = Scene::new(Canvas::new(4, 4).unwrap());
    scene.add(red(4, 4), Placement::top_left(0.0, 0.0).with_scale(0.0));
    let f = scene.compose(None).unwrap();
    assert!(f.data.iter().all(|&v| v == 0));
}
