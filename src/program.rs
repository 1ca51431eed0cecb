//! Functions for implementing the executable spirograph program.

use crate::error::Error;
use crate::error::Result;
use crate::geometry::bounding_box;
use crate::geometry::Polyline;
use crate::shapes::triangle;
use crate::shapes::Arc;
use crate::shapes::Flower;
use crate::spirograph::generate;
use crate::spirograph::SpirographParameters;
use crate::svg::print_svg_polylines;
use crate::svg::Style;
use clap::crate_version;
use clap::App;
use clap::AppSettings;
use clap::Arg;
use clap::ArgMatches;
use clap::ErrorKind;
use clap::SubCommand;
use log::debug;
use log::info;
use log::warn;
use std::fs::File;
use std::io::stdout;
use std::io::BufWriter;
use std::io::Write;

/// The canvas and style shared by all the shapes.
#[derive(Debug)]
struct Canvas {
    width: f64,
    height: f64,
    output_path: String,
    style: Style,
}

/// A complete main function for the spirograph program.
pub fn main(flags: &[String]) -> Result<()> {
    let arg_matches = app().get_matches_from_safe(flags)?;

    let (name, sub_matches) = arg_matches.subcommand();
    let (polylines, canvas) = shape_command(name, sub_matches)?;

    info!(
        "generated {} path(s) with {} point(s)",
        polylines.len(),
        polylines.iter().map(|polyline| polyline.len()).sum::<usize>()
    );

    if let Some((minimal_point, maximal_point)) = bounding_box(&polylines) {
        if minimal_point.x < 0.0
            || minimal_point.y < 0.0
            || maximal_point.x > canvas.width
            || maximal_point.y > canvas.height
        {
            warn!(
                "the shape extends from ({}, {}) to ({}, {}), outside the {} x {} canvas",
                minimal_point.x,
                minimal_point.y,
                maximal_point.x,
                maximal_point.y,
                canvas.width,
                canvas.height
            );
        }
    }

    write_output(&polylines, &canvas)
}

fn shape_command(
    name: &str,
    sub_matches: Option<&ArgMatches>,
) -> Result<(Vec<Polyline>, Canvas)> {
    match (name, sub_matches) {
        ("spirograph", Some(sub_matches)) => spirograph_command(sub_matches),
        ("triangle", Some(sub_matches)) => triangle_command(sub_matches),
        ("arc", Some(sub_matches)) => arc_command(sub_matches),
        ("flower", Some(sub_matches)) => flower_command(sub_matches),
        _ => Err(Error::Usage(clap::Error::with_description(
            &format!("unknown shape: {}", name),
            ErrorKind::UnrecognizedSubcommand,
        ))),
    }
}

fn write_output(polylines: &[Polyline], canvas: &Canvas) -> Result<()> {
    let output_error = |source| Error::Output {
        path: canvas.output_path.clone(),
        source,
    };
    let mut output: Box<dyn Write> = if canvas.output_path == "-" {
        Box::new(BufWriter::new(stdout()))
    } else {
        Box::new(BufWriter::new(
            File::create(&canvas.output_path).map_err(output_error)?,
        ))
    };
    print_svg_polylines(
        polylines,
        canvas.width,
        canvas.height,
        &canvas.style,
        &mut output,
    )
    .map_err(output_error)
}

fn app() -> App<'static, 'static> {
    App::new("spirograph")
        .about("\nSpirograph curves and simple shape outlines as SVG polylines.")
        .after_help(
            "\
            All shapes are placed in a WIDTH x HEIGHT canvas,\n\
            whose origin is the top-left corner, with Y pointing down.\n\
            \n\
            Set RUST_LOG=info (or debug) for progress messages.\
            ",
        )
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(canvas_args(
            SubCommand::with_name("spirograph")
                .about("Trace a point on a circle rolling along another circle")
                .arg(
                    Arg::with_name("inner-radius")
                        .long("inner-radius")
                        .short("R")
                        .value_name("COUNT")
                        .help("Radius of the inner circle (positive integer)")
                        .default_value("125"),
                )
                .arg(
                    Arg::with_name("outer-radius")
                        .long("outer-radius")
                        .short("r")
                        .value_name("COUNT")
                        .help("Radius of the outer circle (positive integer)")
                        .default_value("75"),
                )
                .arg(
                    Arg::with_name("distance")
                        .long("distance")
                        .short("d")
                        .value_name("INTEGER")
                        .help("Distance of the traced point from the center of the rolling circle")
                        .allow_hyphen_values(true)
                        .default_value("25"),
                )
                .arg(
                    Arg::with_name("amount")
                        .long("amount")
                        .short("a")
                        .value_name("FRACTION")
                        .help(
                            "Fraction of the curve to trace,\n\
                             0 - nothing, 1 - the whole closed curve",
                        )
                        .default_value("1.0"),
                ),
        ))
        .subcommand(canvas_args(
            SubCommand::with_name("triangle").about("A triangle filling the canvas"),
        ))
        .subcommand(tolerance_arg(canvas_args(
            SubCommand::with_name("arc")
                .about("An arc of the circle inscribed in the canvas width")
                .arg(
                    Arg::with_name("start")
                        .long("start")
                        .short("s")
                        .value_name("DEGREES")
                        .help("Start angle, where 0 is at the top")
                        .allow_hyphen_values(true)
                        .default_value("0"),
                )
                .arg(
                    Arg::with_name("end")
                        .long("end")
                        .short("e")
                        .value_name("DEGREES")
                        .help("End angle, where 0 is at the top")
                        .allow_hyphen_values(true)
                        .default_value("110"),
                )
                .arg(
                    Arg::with_name("counter-clockwise")
                        .long("counter-clockwise")
                        .short("C")
                        .help("Go from the start to the end counter-clockwise"),
                )
                .arg(
                    Arg::with_name("inset")
                        .long("inset")
                        .short("i")
                        .value_name("SIZE")
                        .help("Amount to reduce the radius by")
                        .default_value("0"),
                ),
        )))
        .subcommand(tolerance_arg(canvas_args(
            SubCommand::with_name("flower")
                .about("Elliptic petals around the center of the canvas (filled even-odd)")
                .arg(
                    Arg::with_name("petal-offset")
                        .long("petal-offset")
                        .short("p")
                        .value_name("SIZE")
                        .help("Offset of each petal from the center")
                        .allow_hyphen_values(true)
                        .default_value("-20"),
                )
                .arg(
                    Arg::with_name("petal-width")
                        .long("petal-width")
                        .short("w")
                        .value_name("SIZE")
                        .help("Width of each petal")
                        .default_value("100"),
                ),
        )))
}

fn canvas_args(app: App<'static, 'static>) -> App<'static, 'static> {
    app.arg(
        Arg::with_name("width")
            .long("width")
            .short("W")
            .value_name("SIZE")
            .help("Width of the canvas")
            .default_value("300"),
    )
    .arg(
        Arg::with_name("height")
            .long("height")
            .short("H")
            .value_name("SIZE")
            .help("Height of the canvas")
            .default_value("300"),
    )
    .arg(
        Arg::with_name("output")
            .long("output")
            .short("o")
            .value_name("FILE")
            .help("SVG file to write the output into;\nspecify \"-\" for STDOUT")
            .default_value("-"),
    )
    .arg(
        Arg::with_name("color")
            .long("color")
            .short("c")
            .value_name("COLOR")
            .help("SVG color to stroke (or fill) with")
            .default_value("black"),
    )
    .arg(
        Arg::with_name("line-width")
            .long("line-width")
            .short("l")
            .value_name("SIZE")
            .help("Width of the stroke")
            .default_value("1"),
    )
    .arg(
        Arg::with_name("fill")
            .long("fill")
            .short("f")
            .help("Fill the shape (using the even-odd rule) instead of stroking it"),
    )
}

fn tolerance_arg(app: App<'static, 'static>) -> App<'static, 'static> {
    app.arg(
        Arg::with_name("tolerance")
            .long("tolerance")
            .short("T")
            .value_name("SIZE")
            .help("Maximal distance of the linear approximation from the true curve")
            .default_value("0.1"),
    )
}

fn arg_canvas(arg_matches: &ArgMatches, closed: bool) -> Result<Canvas> {
    let canvas = Canvas {
        width: parse_positive(arg_matches, "width")?,
        height: parse_positive(arg_matches, "height")?,
        output_path: parse_string(arg_matches, "output"),
        style: Style {
            color: parse_string(arg_matches, "color"),
            line_width: parse_positive(arg_matches, "line-width")?,
            fill: arg_matches.is_present("fill"),
            closed,
        },
    };
    debug!("canvas: {:?}", canvas);
    Ok(canvas)
}

fn spirograph_command(arg_matches: &ArgMatches) -> Result<(Vec<Polyline>, Canvas)> {
    let canvas = arg_canvas(arg_matches, false)?;
    let params = SpirographParameters {
        inner_radius: parse_value(arg_matches, "inner-radius")?,
        outer_radius: parse_value(arg_matches, "outer-radius")?,
        distance: parse_value(arg_matches, "distance")?,
        amount: parse_value(arg_matches, "amount")?,
    };
    debug!("spirograph: {:?}", params);
    let path = generate(&params, canvas.width, canvas.height)?;
    Ok((vec![path], canvas))
}

fn triangle_command(arg_matches: &ArgMatches) -> Result<(Vec<Polyline>, Canvas)> {
    let canvas = arg_canvas(arg_matches, false)?;
    Ok((vec![triangle(canvas.width, canvas.height)], canvas))
}

fn arc_command(arg_matches: &ArgMatches) -> Result<(Vec<Polyline>, Canvas)> {
    let canvas = arg_canvas(arg_matches, false)?;
    let tolerance = parse_positive(arg_matches, "tolerance")?;
    let arc = Arc {
        start_angle: parse_value(arg_matches, "start")?,
        end_angle: parse_value(arg_matches, "end")?,
        clockwise: !arg_matches.is_present("counter-clockwise"),
        inset: 0.0,
    }
    .inset(parse_value(arg_matches, "inset")?);
    debug!("arc: {:?}", arc);
    let polyline = arc.polyline(canvas.width, canvas.height, tolerance)?;
    Ok((vec![polyline], canvas))
}

fn flower_command(arg_matches: &ArgMatches) -> Result<(Vec<Polyline>, Canvas)> {
    let mut canvas = arg_canvas(arg_matches, true)?;
    canvas.style.fill = true;
    let tolerance = parse_positive(arg_matches, "tolerance")?;
    let flower = Flower {
        petal_offset: parse_value(arg_matches, "petal-offset")?,
        petal_width: parse_value(arg_matches, "petal-width")?,
    };
    debug!("flower: {:?}", flower);
    let polylines = flower.polylines(canvas.width, canvas.height, tolerance)?;
    Ok((polylines, canvas))
}

fn parse_string(arg_matches: &ArgMatches, name: &str) -> String {
    arg_matches.value_of(name).unwrap_or_default().to_string()
}

fn parse_value<T>(arg_matches: &ArgMatches, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: ToString,
{
    let value = arg_matches.value_of(name).unwrap_or_default();
    value.parse::<T>().map_err(|error| Error::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        reason: error.to_string(),
    })
}

fn parse_positive(arg_matches: &ArgMatches, name: &str) -> Result<f64> {
    let value = parse_value::<f64>(arg_matches, name)?;
    if value.is_nan() || value <= 0.0 {
        return Err(Error::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            reason: "not positive".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
#[test]
fn test_unknown_shape_is_a_usage_error() {
    let sub_matches = ArgMatches::default();
    for (name, matches) in vec![("hexagon", Some(&sub_matches)), ("", None)] {
        match shape_command(name, matches) {
            Err(Error::Usage(error)) => assert!(error.kind == ErrorKind::UnrecognizedSubcommand),
            result => panic!("unexpected result for {}: {:?}", name, result.map(|_| ())),
        }
    }
}
