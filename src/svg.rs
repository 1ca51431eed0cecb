//! Print polylines as an SVG file.

use crate::geometry::Point;
use crate::geometry::Polyline;
use std::io::Result;
use std::io::Write;

/// How to draw the polylines.
#[derive(Clone, Debug)]
pub struct Style {
    /// The stroke (or fill) color, in any SVG color syntax.
    pub color: String,

    /// The stroke width (ignored when filling).
    pub line_width: f64,

    /// Whether to fill the polylines (using the even-odd rule) instead of stroking them.
    pub fill: bool,

    /// Whether to close each polyline back to its first point.
    pub closed: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            color: "black".to_string(),
            line_width: 1.0,
            fill: false,
            closed: false,
        }
    }
}

fn print_svg_polyline(polyline: &[Point], style: &Style, output: &mut dyn Write) -> Result<()> {
    if style.fill {
        writeln!(
            output,
            "<path fill='{}' fill-rule='evenodd' stroke='none' d='",
            style.color
        )?;
    } else {
        writeln!(
            output,
            "<path fill='none' stroke='{}' stroke-width='{}' d='",
            style.color, style.line_width
        )?;
    }
    let mut command = "M";
    for point in polyline {
        writeln!(output, "{} {} {}", command, point.x, point.y)?;
        command = "L";
    }
    if style.closed {
        writeln!(output, "Z")?;
    }
    writeln!(output, "'/>")
}

/// Print a vector of paths as an SVG file of the given size (empty paths are skipped).
pub fn print_svg_polylines(
    polylines: &[Polyline],
    width: f64,
    height: f64,
    style: &Style,
    output: &mut dyn Write,
) -> Result<()> {
    writeln!(
        output,
        "<svg width='{}' height='{}' viewBox='0 0 {} {}' xmlns='http://www.w3.org/2000/svg'>",
        width, height, width, height
    )?;

    for polyline in polylines.iter().filter(|polyline| !polyline.is_empty()) {
        print_svg_polyline(polyline, style, output)?;
    }

    writeln!(output, "</svg>")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg2polylines::parse as parse_svg;

    fn print_to_string(polylines: &[Polyline], style: &Style) -> String {
        let mut output: Vec<u8> = vec![];
        print_svg_polylines(polylines, 10.0, 20.0, style, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_print_stroke() {
        let polylines = vec![vec![
            Point { x: 1.0, y: 2.0 },
            Point { x: 3.5, y: 4.0 },
        ]];
        let text = print_to_string(&polylines, &Style::default());
        assert_eq!(
            text,
            "<svg width='10' height='20' viewBox='0 0 10 20' xmlns='http://www.w3.org/2000/svg'>\n\
             <path fill='none' stroke='black' stroke-width='1' d='\n\
             M 1 2\n\
             L 3.5 4\n\
             '/>\n\
             </svg>\n"
        );
    }

    #[test]
    fn test_print_fill() {
        let polylines = vec![
            vec![],
            vec![
                Point { x: 0.0, y: 0.0 },
                Point { x: 1.0, y: 0.0 },
                Point { x: 1.0, y: 1.0 },
            ],
        ];
        let style = Style {
            color: "red".to_string(),
            fill: true,
            closed: true,
            ..Style::default()
        };
        let text = print_to_string(&polylines, &style);
        assert!(text.contains("<path fill='red' fill-rule='evenodd' stroke='none' d='"));
        assert!(text.contains("L 1 1\nZ\n'/>"));
        assert_eq!(text.matches("<path").count(), 1);
    }

    #[test]
    fn test_print_parses_back() {
        let polylines = vec![
            vec![
                Point { x: 0.25, y: 10.0 },
                Point { x: 7.125, y: 3.0 },
                Point { x: 9.0, y: 19.5 },
            ],
            vec![Point { x: 2.0, y: 2.0 }, Point { x: 5.0, y: 1.0 }],
        ];
        let text = print_to_string(&polylines, &Style::default());
        let parsed = parse_svg(&text).unwrap();
        assert!(parsed.len() == polylines.len());
        for (parsed_polyline, polyline) in parsed.iter().zip(polylines.iter()) {
            assert!(parsed_polyline.len() == polyline.len());
            for (parsed_point, point) in parsed_polyline.iter().zip(polyline.iter()) {
                assert_float_absolute_eq!(parsed_point.x, point.x, 1e-9);
                assert_float_absolute_eq!(parsed_point.y, point.y, 1e-9);
            }
        }
    }
}
