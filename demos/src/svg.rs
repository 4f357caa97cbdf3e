// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG rendering of a planning run.

use std::fmt::{self, Write};
use std::io;
use std::path::Path as FsPath;

use bramble_collide::ObstacleSet;
use bramble_rrt::Path;
use kurbo::{Line, Point, Rect};

/// Colors and stroke widths.
#[derive(Clone, Debug)]
pub struct SvgStyle {
    /// Obstacle color.
    pub obstacle: &'static str,
    /// Start marker color.
    pub start: &'static str,
    /// Goal marker and path color.
    pub goal: &'static str,
    /// Tree edge color.
    pub tree: &'static str,
    /// Background color.
    pub background: &'static str,
    /// Obstacle stroke width.
    pub obstacle_width: f64,
    /// Tree edge stroke width.
    pub tree_width: f64,
    /// Path stroke width.
    pub path_width: f64,
    /// Start and goal marker radius.
    pub marker_radius: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            obstacle: "#CEBC81",
            start: "#DA7B93",
            goal: "#479761",
            tree: "#000000",
            background: "#FFFFFF",
            obstacle_width: 2.0,
            tree_width: 1.0,
            path_width: 3.0,
            marker_radius: 5.0,
        }
    }
}

/// A picture of one run: obstacles, the tree as it grew, and the final path.
#[derive(Clone, Debug)]
pub struct SvgScene {
    bounds: Rect,
    start: Point,
    goal: Point,
    obstacles: Vec<Line>,
    edges: Vec<Line>,
    path: Vec<Point>,
    style: SvgStyle,
    title: Option<String>,
}

impl SvgScene {
    /// An empty scene for a run from `start` to `goal`.
    pub fn new(bounds: Rect, start: Point, goal: Point, obstacles: &ObstacleSet) -> Self {
        Self {
            bounds,
            start,
            goal,
            obstacles: obstacles.iter().map(|o| o.line()).collect(),
            edges: Vec::new(),
            path: Vec::new(),
            style: SvgStyle::default(),
            title: None,
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }

    /// Caption drawn in the top-left corner.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Record a tree edge.
    pub fn push_edge(&mut self, from: Point, to: Point) {
        self.edges.push(Line::new(from, to));
    }

    /// Record the solved path.
    pub fn set_path(&mut self, path: &Path) {
        self.path = path.points().to_vec();
    }

    /// Number of recorded tree edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Write the scene as an SVG document.
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        let b = self.bounds;
        let s = &self.style;
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="{} {} {} {}">"#,
            b.width(),
            b.height(),
            b.x0,
            b.y0,
            b.width(),
            b.height()
        )?;
        writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            b.x0,
            b.y0,
            b.width(),
            b.height(),
            s.background
        )?;

        writeln!(
            out,
            r#"  <g id="tree" stroke="{}" stroke-width="{}">"#,
            s.tree, s.tree_width
        )?;
        for e in &self.edges {
            write_line(out, *e)?;
        }
        writeln!(out, "  </g>")?;

        writeln!(
            out,
            r#"  <g id="obstacles" stroke="{}" stroke-width="{}">"#,
            s.obstacle, s.obstacle_width
        )?;
        for o in &self.obstacles {
            write_line(out, *o)?;
        }
        writeln!(out, "  </g>")?;

        if !self.path.is_empty() {
            write!(
                out,
                r#"  <polyline id="path" fill="none" stroke="{}" stroke-width="{}" points=""#,
                s.goal, s.path_width
            )?;
            for (i, p) in self.path.iter().enumerate() {
                let sep = if i == 0 { "" } else { " " };
                write!(out, "{sep}{:.2},{:.2}", p.x, p.y)?;
            }
            writeln!(out, r#""/>"#)?;
        }

        for (id, p, color) in [("start", self.start, s.start), ("goal", self.goal, s.goal)] {
            writeln!(
                out,
                r#"  <circle id="{id}" cx="{:.2}" cy="{:.2}" r="{}" fill="{color}"/>"#,
                p.x, p.y, s.marker_radius
            )?;
        }

        if let Some(title) = &self.title {
            writeln!(
                out,
                r##"  <text x="{}" y="{}" font-family="sans-serif" font-size="14" fill="#333">{}</text>"##,
                b.x0 + 8.0,
                b.y0 + 20.0,
                escape(title)
            )?;
        }
        writeln!(out, "</svg>")
    }

    /// Render the scene to a string.
    pub fn render(&self) -> String {
        let mut svg = String::new();
        self.write_to(&mut svg)
            .expect("formatting into a String does not fail");
        svg
    }

    /// Render the scene to a file.
    pub fn save(&self, path: impl AsRef<FsPath>) -> io::Result<()> {
        std::fs::write(path, self.render())
    }
}

fn write_line(out: &mut impl Write, l: Line) -> fmt::Result {
    writeln!(
        out,
        r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
        l.p0.x, l.p0.y, l.p1.x, l.p1.y
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bramble_collide::Obstacle;
    use bramble_rrt::{Planner, PlannerConfig, PlannerState};

    #[test]
    fn renders_every_layer() {
        let obstacles: ObstacleSet = [Obstacle::new((5.0, -5.0), (5.0, 5.0))].into_iter().collect();
        let bounds = Rect::new(-20.0, -20.0, 30.0, 20.0);
        let mut planner =
            Planner::new(PlannerConfig::default().with_bounds(bounds).with_seed(4)).unwrap();
        let (start, goal) = (Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        planner.initialize(start, goal, obstacles.clone());

        let mut scene = SvgScene::new(bounds, start, goal, &obstacles).with_title("a < b");
        let summary = crate::drive(&mut planner, &mut scene, 100_000);
        assert_eq!(summary.state, PlannerState::Solved);
        assert_eq!(scene.edge_count() + 1, summary.nodes);

        let svg = scene.render();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<line ").count(), scene.edge_count() + 1);
        assert!(svg.contains(r#"id="path""#));
        assert!(svg.contains("a &lt; b"));
    }
}
