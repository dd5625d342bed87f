//! Documents built from every kind of drawing call.

use super::common::*;

#[test]
fn test_shapes_compile() {
    skip_if_no_latex!();
    let test = LatexTestCase {
        name: "shapes",
        width: 3.0,
        height: 3.0,
        draw_fn: |dev| {
            let stroke = GraphicsParams {
                col: Color::rgb(200, 30, 30),
                lwd: 2.0,
                ..Default::default()
            };
            let filled = GraphicsParams {
                fill: Color::rgba(30, 30, 200, 128),
                ..Default::default()
            };
            dev.line(
                &LineParams {
                    x1: 10.0,
                    y1: 10.0,
                    x2: 200.0,
                    y2: 200.0,
                },
                &stroke,
            )
            .unwrap();
            dev.circle(
                &CircleParams {
                    x: 100.0,
                    y: 100.0,
                    radius: 40.0,
                },
                &filled,
            )
            .unwrap();
            dev.rect(
                &RectParams {
                    x0: 20.0,
                    y0: 150.0,
                    x1: 80.0,
                    y1: 190.0,
                },
                &filled,
            )
            .unwrap();
        },
    };
    run_compile_test(&test).unwrap();
}

#[test]
fn test_paths_compile() {
    skip_if_no_latex!();
    let test = LatexTestCase {
        name: "paths",
        width: 3.0,
        height: 3.0,
        draw_fn: |dev| {
            let dashed = GraphicsParams {
                lty: LineType::from_code(0x44),
                ..Default::default()
            };
            let zigzag: Vec<Point> = (0..10)
                .map(|i| Point::new(10.0 + 20.0 * i as f64, if i % 2 == 0 { 20.0 } else { 60.0 }))
                .collect();
            dev.polyline(&zigzag, &dashed).unwrap();

            let filled = GraphicsParams {
                fill: Color::rgb(0, 160, 0),
                ..Default::default()
            };
            let outer = vec![
                Point::new(50.0, 100.0),
                Point::new(150.0, 100.0),
                Point::new(150.0, 200.0),
                Point::new(50.0, 200.0),
            ];
            let hole = vec![
                Point::new(80.0, 130.0),
                Point::new(120.0, 130.0),
                Point::new(100.0, 170.0),
            ];
            dev.polygon(&hole, &filled).unwrap();
            dev.path(&[outer, hole], FillRule::EvenOdd, &filled).unwrap();
        },
    };
    run_compile_test(&test).unwrap();
}

#[test]
fn test_clipped_text_compiles() {
    skip_if_no_latex!();
    let test = LatexTestCase {
        name: "clipped_text",
        width: 2.0,
        height: 2.0,
        draw_fn: |dev| {
            dev.clip(&RectParams {
                x0: 10.0,
                y0: 10.0,
                x1: 130.0,
                y1: 130.0,
            })
            .unwrap();
            let params = GraphicsParams {
                cex: 1.5,
                fontface: FontFace::BoldItalic,
                ..Default::default()
            };
            dev.text(
                &TextParams {
                    x: 70.0,
                    y: 70.0,
                    text: "Clipped",
                    rot: 30.0,
                    hadj: 0.5,
                },
                &params,
            )
            .unwrap();
        },
    };
    run_compile_test(&test).unwrap();
}

#[test]
fn test_multiple_pages_compile() {
    skip_if_no_latex!();
    let test = LatexTestCase {
        name: "pages",
        width: 1.0,
        height: 1.0,
        draw_fn: |dev| {
            let params = dev.default_params();
            for i in 0..3 {
                dev.new_page(&params).unwrap();
                dev.circle(
                    &CircleParams {
                        x: 36.0,
                        y: 36.0,
                        radius: 5.0 * (i + 1) as f64,
                    },
                    &params,
                )
                .unwrap();
            }
        },
    };
    run_compile_test(&test).unwrap();
}
