// Chart geometry - maps series and gauge values into a 0..100 SVG viewBox
use super::icon::Tone;
use super::series::ValueDomain;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Plot area inside the 0..100 viewBox. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ChartFrame {
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            left: 5.0,
            width: 85.0,
            top: 10.0,
            bottom: 90.0,
        }
    }
}

impl ChartFrame {
    /// Frame covering the whole viewBox with no margins
    pub fn full() -> Self {
        Self {
            left: 0.0,
            width: 100.0,
            top: 0.0,
            bottom: 100.0,
        }
    }

    pub fn plot_height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn mid_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    fn x_at(&self, index: usize, len: usize) -> f64 {
        if len <= 1 {
            return self.left;
        }
        self.left + (index as f64 / (len - 1) as f64) * self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// SVG path made of absolute move/line commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", fmt_coord(p.x), fmt_coord(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", fmt_coord(p.x), fmt_coord(p.y))?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Two decimals at most, without trailing zeros
fn fmt_coord(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Map a series into plot coordinates.
///
/// The value range comes from `domain` when given, otherwise from the
/// series' own min and max. A flat (or degenerate) range puts every point
/// on the frame's mid line.
pub fn map_points(values: &[f64], domain: Option<ValueDomain>, frame: &ChartFrame) -> Vec<Point> {
    if values.is_empty() {
        return Vec::new();
    }

    let (min, max) = match domain {
        Some(d) => (d.min, d.max),
        None => values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    };
    let range = max - min;
    let flat = !range.is_finite() || range <= 0.0;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let y = if flat || !value.is_finite() {
                frame.mid_y()
            } else {
                let y = frame.bottom - ((value - min) / range) * frame.plot_height();
                y.clamp(frame.top, frame.bottom)
            };
            Point {
                x: frame.x_at(i, values.len()),
                y,
            }
        })
        .collect()
}

/// Open polyline through `points`
pub fn line_path(points: &[Point]) -> Path {
    let commands = points
        .iter()
        .enumerate()
        .map(|(i, &p)| if i == 0 { PathCommand::MoveTo(p) } else { PathCommand::LineTo(p) })
        .collect();
    Path { commands }
}

/// Polyline closed down to the frame's baseline, for the shaded area under a curve
pub fn area_path(points: &[Point], frame: &ChartFrame) -> Path {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Path::default();
    };

    let mut path = line_path(points);
    path.commands.push(PathCommand::LineTo(Point {
        x: last.x,
        y: frame.bottom,
    }));
    path.commands.push(PathCommand::LineTo(Point {
        x: first.x,
        y: frame.bottom,
    }));
    path.commands.push(PathCommand::Close);
    path
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Band {
    /// Plain threshold lookup, recomputed from scratch every time
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Band::Excellent
        } else if percentage >= 70.0 {
            Band::Good
        } else if percentage >= 50.0 {
            Band::Fair
        } else {
            Band::Poor
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Band::Excellent => Tone::Positive,
            Band::Good => Tone::Caution,
            Band::Fair => Tone::Accent,
            Band::Poor => Tone::Critical,
        }
    }
}

/// Circular gauge drawn as a stroke dash over the full circumference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeArc {
    /// Not clamped: values past `max` overdraw, negative values underdraw
    pub percentage: f64,
    pub circumference: f64,
    pub dash: f64,
}

impl GaugeArc {
    pub fn new(value: f64, max: f64, radius: f64) -> Self {
        let percentage = if max == 0.0 || !max.is_finite() {
            0.0
        } else {
            value / max * 100.0
        };
        let circumference = 2.0 * PI * radius;
        Self {
            percentage,
            circumference,
            dash: percentage / 100.0 * circumference,
        }
    }

    /// Value for the SVG `stroke-dasharray` attribute
    pub fn dash_array(&self) -> String {
        format!("{} {}", fmt_coord(self.dash), fmt_coord(self.circumference))
    }

    pub fn band(&self) -> Band {
        Band::for_percentage(self.percentage)
    }
}
