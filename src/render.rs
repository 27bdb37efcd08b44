//! Draws a [`Layout`] as terminal text or as an SVG document.
//!
//! Both renderers implement [`fmt::Display`], so they can be printed directly
//! or turned into a `String` with `to_string`.

use std::fmt;

use crate::layout::{Bounds, Layout, Point};

/// Shown in place of a drawing when the tree has no nodes.
pub const EMPTY_TREE: &str = "(empty tree)";

/// Renders a layout onto a grid of characters `width` columns wide.
///
/// Each depth gets a row of labels, with a row of `/` and `\` connectors
/// between consecutive depths. Horizontal positions are scaled to fit the
/// width, so labels of very deep nodes may overlap.
pub struct TextCanvas<'l, 'a, T> {
    layout: &'l Layout<'a, T>,
    width: usize,
}

impl<'l, 'a, T> TextCanvas<'l, 'a, T> {
    pub fn new(layout: &'l Layout<'a, T>, width: usize) -> Self {
        Self { layout, width }
    }
}

impl<T> fmt::Display for TextCanvas<'_, '_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(bounds), Some(max_depth)) = (self.layout.bounds(), self.layout.max_depth())
        else {
            return writeln!(f, "{}", EMPTY_TREE);
        };

        let labels: Vec<String> = self
            .layout
            .nodes
            .iter()
            .map(|n| n.value.to_string())
            .collect();
        let widest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);
        let width = self.width.max(widest + 1);
        let columns = Columns::new(&bounds, width, widest);

        let mut grid = vec![vec![' '; width]; max_depth * 2 + 1];

        for edge in &self.layout.edges {
            let from = columns.of(edge.from);
            let to = columns.of(edge.to);
            let (column, connector) = if to < from {
                ((from + to + 1) / 2, '/')
            } else {
                ((from + to) / 2, '\\')
            };
            grid[edge.depth * 2 + 1][column.min(width - 1)] = connector;
        }

        for (node, label) in self.layout.nodes.iter().zip(&labels) {
            let len = label.chars().count();
            let start = columns.of(node.at).saturating_sub(len / 2).min(width - len);
            let row = &mut grid[node.depth * 2];
            for (cell, c) in row[start..].iter_mut().zip(label.chars()) {
                *cell = c;
            }
        }

        for row in grid {
            let line: String = row.into_iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

/// Maps layout x coordinates onto character columns, leaving half the widest
/// label free on either side.
struct Columns {
    min_x: f64,
    span: f64,
    offset: usize,
    usable: usize,
}

impl Columns {
    fn new(bounds: &Bounds, width: usize, widest: usize) -> Self {
        Self {
            min_x: bounds.min.x,
            span: bounds.width(),
            offset: widest / 2,
            usable: (width + 1).saturating_sub(widest).max(1),
        }
    }

    fn of(&self, at: Point) -> usize {
        if self.span <= f64::EPSILON {
            return self.offset + (self.usable - 1) / 2;
        }
        let fraction = (at.x - self.min_x) / self.span;
        self.offset + (fraction * (self.usable - 1) as f64).round() as usize
    }
}

/// Renders a layout as a standalone SVG document: nodes are labeled circles
/// and edges are straight lines.
pub struct Svg<'l, 'a, T> {
    layout: &'l Layout<'a, T>,
}

impl<'l, 'a, T> Svg<'l, 'a, T> {
    /// Pixels per layout unit.
    const SCALE: f64 = 40.0;
    /// Blank layout units around the drawing.
    const MARGIN: f64 = 1.0;
    const RADIUS: f64 = 12.0;

    pub fn new(layout: &'l Layout<'a, T>) -> Self {
        Self { layout }
    }
}

impl<T> fmt::Display for Svg<'_, '_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = self.layout.bounds().unwrap_or(Bounds {
            min: Point::ORIGIN,
            max: Point::ORIGIN,
        });
        let width = (bounds.width() + 2.0 * Self::MARGIN) * Self::SCALE;
        let height = (bounds.height() + 2.0 * Self::MARGIN) * Self::SCALE;
        // SVG's y axis points down, the layout's points up.
        let project = |p: Point| {
            (
                (p.x - bounds.min.x + Self::MARGIN) * Self::SCALE,
                (bounds.max.y - p.y + Self::MARGIN) * Self::SCALE,
            )
        };

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.1} {:.1}">"#,
            width, height, width, height
        )?;
        for edge in &self.layout.edges {
            let (x1, y1) = project(edge.from);
            let (x2, y2) = project(edge.to);
            writeln!(
                f,
                r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black" stroke-width="1"/>"#,
                x1, y1, x2, y2
            )?;
        }
        for node in &self.layout.nodes {
            let (cx, cy) = project(node.at);
            writeln!(
                f,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="lightgray" stroke="black"/>"#,
                cx,
                cy,
                Self::RADIUS
            )?;
            writeln!(
                f,
                r#"  <text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="central" font-size="10">{}</text>"#,
                cx,
                cy,
                Escaped(&node.value.to_string())
            )?;
        }
        writeln!(f, "</svg>")
    }
}

/// Escapes the characters XML treats specially.
struct Escaped<'s>(&'s str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                c => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}
