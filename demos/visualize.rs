//! Renders an edge's line-fit frame to SVG.
//!
//! Draws the world axes, the fitted `(rejection, projection)` frame, the edge
//! keypoints and a few probe points labelled with their fitted coordinates.
//!
//! Run with: cargo run --example visualize [output.svg]

use std::error::Error;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use env_logger::Env;
use frame2d::{fit_line, Point2, Rotation, Transform2d};
use log::info;

/// Image size the keypoints were measured in.
const IMAGE_WIDTH: f64 = 2160.0;
const IMAGE_HEIGHT: f64 = 3840.0;
/// Output scale relative to the image.
const ZOOM: f64 = 0.25;

const DEFAULT_OUTPUT: &str = "screenshots/line_fit.svg";

/// Minimal SVG document builder.
struct Svg {
    content: String,
    width: f64,
    height: f64,
}

impl Svg {
    fn new(width: f64, height: f64) -> Self {
        Self {
            content: String::new(),
            width,
            height,
        }
    }

    fn circle(&mut self, c: Point2<f64>, r: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            c.x, c.y, r, fill
        ));
        self.content.push('\n');
    }

    fn line(&mut self, a: Point2<f64>, b: Point2<f64>, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            a.x, a.y, b.x, b.y, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn polygon(&mut self, points: &[Point2<f64>], fill: &str) {
        let pts: String = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="{}"/>"#,
            pts, fill
        ));
        self.content.push('\n');
    }

    fn text(&mut self, at: Point2<f64>, text: &str, font_size: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="monospace" font-size="{}" fill="{}">{}</text>"#,
            at.x, at.y, font_size, fill, text
        ));
        self.content.push('\n');
    }

    fn group_start(&mut self, transform: &str) {
        self.content
            .push_str(&format!(r#"<g transform="{}">"#, transform));
        self.content.push('\n');
    }

    fn group_end(&mut self) {
        self.content.push_str("</g>\n");
    }

    fn save(&self, path: &Path) -> std::io::Result<()> {
        let svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">
<rect width="100%" height="100%" fill="#121212"/>
{}
</svg>"##,
            self.width, self.height, self.width, self.height, self.content
        );
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())
    }
}

/// Draws a frame's x axis (red) and y axis (green) with arrow heads.
///
/// Arrow heads are built in local coordinates; for a mirrored frame the side
/// offsets are flipped so the heads keep the same winding on screen.
fn draw_axes(svg: &mut Svg, frame: &Transform2d<f64>, scale: f64, thickness: f64) {
    let tip = (scale * 0.2 + thickness * 2.0).min(20.0 + thickness * 2.0);
    let side = if frame.z_mag() > 0.0 { -tip * 0.3 } else { tip * 0.3 };

    let origin = frame.origin();
    let x_end = frame.local_to_world(Point2::new(scale, 0.0));
    svg.line(origin, x_end, "#e62937", thickness);
    svg.polygon(
        &frame.local_to_world_all(&[
            Point2::new(scale + tip, 0.0),
            Point2::new(scale, side),
            Point2::new(scale, -side),
        ]),
        "#e62937",
    );

    let y_end = frame.local_to_world(Point2::new(0.0, scale));
    svg.line(origin, y_end, "#00e430", thickness);
    svg.polygon(
        &frame.local_to_world_all(&[
            Point2::new(0.0, scale + tip),
            Point2::new(-side, scale),
            Point2::new(side, scale),
        ]),
        "#00e430",
    );

    svg.circle(origin, thickness * 2.5, "#c8c8c8");
}

fn draw_grid(svg: &mut Svg, spacing: f64) {
    let mut x = 0.0;
    while x < IMAGE_WIDTH {
        svg.line(Point2::new(x, 0.0), Point2::new(x, IMAGE_HEIGHT), "#2a2a2a", 1.0);
        x += spacing;
    }
    let mut y = 0.0;
    while y < IMAGE_HEIGHT {
        svg.line(Point2::new(0.0, y), Point2::new(IMAGE_WIDTH, y), "#2a2a2a", 1.0);
        y += spacing;
    }
}

fn edge_keypoints() -> Vec<Point2<f64>> {
    [
        (1217.944702, 969.188354),
        (1217.968872, 1038.283081),
        (1220.063477, 1110.561890),
        (1221.548340, 1179.118530),
        (1221.904907, 1247.586548),
        (1224.523560, 1319.157227),
        (1225.589844, 1386.809692),
        (1225.723633, 1454.988647),
        (1228.762207, 1525.779541),
        (1229.764893, 1592.691284),
        (1229.559692, 1637.239380),
        (1231.335327, 1707.557983),
        (1234.042847, 1775.953735),
        (1233.513062, 1841.752197),
        (1236.902100, 1911.643311),
        (1237.816406, 1977.321167),
        (1236.614990, 2020.174194),
        (1239.232544, 2088.850830),
        (1241.805298, 2154.531494),
        (1240.922241, 2217.188721),
        (1244.093628, 2284.854004),
        (1246.845093, 2350.178711),
        (1246.509521, 2391.842041),
        (1246.901855, 2457.331299),
        (1250.066284, 2523.489746),
    ]
    .into_iter()
    .map(Point2::from)
    .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let output = Path::new(&output);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let reference = Point2::new(1216.782104, 969.212341);
    let keypoints = edge_keypoints();
    let fit = fit_line(&keypoints)?;
    let [vx, vy, x0, y0] = fit.to_array();
    info!("line fit: ({vx:.6}, {vy:.6}, {x0:.6}, {y0:.6})");

    let frame = Transform2d::from_line_fit(&fit, reference)?;
    log::debug!("line-fit frame:\n{frame}");

    // The same edge seen by a camera mounted a quarter turn clockwise
    let camera = Transform2d::from_rotation_translation(Rotation::Clockwise90, 0.0, IMAGE_HEIGHT);
    let in_camera = camera.world_to_local(reference);
    info!(
        "reference in rotated camera frame: ({:.4}, {:.4})",
        in_camera.x, in_camera.y
    );

    let mut svg = Svg::new(IMAGE_WIDTH * ZOOM, IMAGE_HEIGHT * ZOOM);
    svg.group_start(&format!("scale({ZOOM})"));

    draw_grid(&mut svg, 100.0);
    draw_axes(&mut svg, &Transform2d::identity(), 500.0, 16.0);
    draw_axes(&mut svg, &frame, 200.0, 8.0);

    let first = keypoints[0];
    let last = keypoints[keypoints.len() - 1];
    svg.line(first, last, "#c8c8c8", 4.0);
    for p in &keypoints {
        svg.circle(*p, 20.0, "#c87aff");
    }
    svg.circle(reference, 20.0, "#fdf900");

    for probe in [
        Point2::new(100.0, 100.0),
        Point2::new(1600.0, 1500.0),
        Point2::new(900.0, 2800.0),
    ] {
        let local = frame.world_to_local(probe);
        info!(
            "probe ({:.1}, {:.1}) -> rejection {:.4}, projection {:.4}",
            probe.x, probe.y, local.x, local.y
        );
        svg.circle(probe, 20.0, "#ff6dc2");
        svg.line(probe, frame.local_to_world(Point2::new(0.0, local.y)), "#66bfff", 4.0);
        svg.text(
            Point2::new(probe.x + 80.0, probe.y + 80.0),
            &format!("FIT: ({:.4}, {:.4})", local.x, local.y),
            80.0,
            "#66bfff",
        );
    }

    svg.group_end();
    svg.save(output)?;
    info!("wrote {}", output.display());

    Ok(())
}
