//! Text measurement through the real typesetter.

use super::common::*;

fn open_device() -> TikzDevice {
    let mut dev = TikzDevice::new(DeviceOptions::in_memory()).unwrap();
    dev.open().unwrap();
    dev
}

#[test]
fn test_str_width_is_positive() {
    skip_if_no_latex!();
    let mut dev = open_device();
    let params = GraphicsParams::default();
    let short = dev.str_width("i", &params).unwrap();
    let long = dev.str_width("Hello, world", &params).unwrap();
    assert!(short > 0.0);
    assert!(long > short);
    assert_eq!(dev.stats().string_width_calls, 2);
}

#[test]
fn test_metrics_follow_font_scale() {
    skip_if_no_latex!();
    let mut dev = open_device();
    let normal = GraphicsParams::default();
    let double = GraphicsParams {
        cex: 2.0,
        ..Default::default()
    };
    let a = dev.measure_text("Mg", &normal).unwrap();
    let b = dev.measure_text("Mg", &double).unwrap();
    assert!(a.ascent > 0.0 && a.descent > 0.0);
    assert!((b.width - 2.0 * a.width).abs() < 1e-6);
}

#[test]
fn test_bold_is_wider() {
    skip_if_no_latex!();
    let mut dev = open_device();
    let plain = GraphicsParams::default();
    let bold = GraphicsParams {
        fontface: FontFace::Bold,
        ..Default::default()
    };
    let w_plain = dev.str_width("Wide words", &plain).unwrap();
    let w_bold = dev.str_width("Wide words", &bold).unwrap();
    assert!(w_bold > w_plain);
}
