use super::*;

#[test]
fn clamp01_bounds_out_of_range_progress() {
    assert_eq!(clamp01(-0.25), 0.0);
    assert_eq!(clamp01(0.4), 0.4);
    assert_eq!(clamp01(1.7), 1.0);
}

#[test]
fn frame_range_iterates_half_open() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert_eq!(
        r.iter().collect::<Vec<_>>(),
        vec![FrameIndex(2), FrameIndex(3), FrameIndex(4)]
    );
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap().is_empty());
}

#[test]
fn frame_range_rejects_reversed_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::new(25, 1).unwrap().secs_to_frames_ceil(2.0), 50);
}

#[test]
fn canvas_rejects_empty_sizes() {
    assert!(Canvas::new(0, 10).is_err());
    assert_eq!(Canvas::new(640, 360).unwrap().min_side(), 360.0);
}

#[test]
fn premul_roundtrips_opaque_and_half_alpha() {
    let c = Rgba8Premul::from_straight_rgba(200, 100, 50, 255);
    assert_eq!(c.to_straight_rgba(), [200, 100, 50, 255]);

    let h = Rgba8Premul::from_straight_rgba(255, 0, 0, 128);
    assert_eq!(h.r, 128);
    assert_eq!(h.to_straight_rgba(), [255, 0, 0, 128]);
    assert_eq!(Rgba8Premul::from_straight_rgba(9, 9, 9, 0).to_straight_rgba(), [0, 0, 0, 0]);
}
