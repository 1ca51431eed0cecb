#[macro_use]
extern crate assert_float_eq;

use spirograph::program::main;
use spirograph::Error;
use std::fs::create_dir_all;
use std::fs::read;
use std::fs::read_to_string;
use std::fs::write;
use svg2polylines::parse as parse_svg;

#[macro_export]
macro_rules! test_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let prefix = &name[..name.len() - 3];
        let offset = prefix.rfind("::").unwrap();
        &prefix[offset + 2..]
    }};
}

fn create_results_directories() {
    for directory in vec!["tests/expected", "tests/actual"].iter() {
        create_dir_all(directory).unwrap_or_else(|_| {
            // BEGIN NOT TESTED
            panic!("failed to create {} results directory", directory)
            // END NOT TESTED
        });
    }
}

fn run(flags: &[&str], output_path: &str) {
    let mut flags: Vec<String> = flags.iter().map(|string| string.to_string()).collect();
    flags.push("--output".to_string());
    flags.push(output_path.to_string());
    main(&flags).unwrap_or_else(|error| panic!("{} running: {:?}", error, flags));
}

#[macro_export]
macro_rules! test_case {
    ($name:ident, $suffix:literal, $flags:expr) => {
        #[test]
        fn $name() {
            create_results_directories();
            let file_name = format!("{}.{}", test_name!(), $suffix);
            run(&$flags, &format!("tests/actual/{}", file_name));
            impl_assert_output(&file_name);
        }
    };
}

fn impl_assert_output(file_name: &str) {
    let actual_path = format!("tests/actual/{}", file_name);
    let actual_bytes = read(actual_path.clone()).unwrap();

    let expected_path = format!("tests/expected/{}", file_name);
    let expected_bytes = read(expected_path.clone()).unwrap_or_else(|_| {
        // BEGIN NOT TESTED
        write(expected_path.clone(), &actual_bytes).unwrap_or_else(|_| {
            panic!("failed to write expected results file {}", expected_path);
        });
        eprintln!(
            "WARNING: created expected results file {}, verify its contents",
            expected_path
        );
        actual_bytes.clone().to_vec()
        // END NOT TESTED
    });

    assert!(
        expected_bytes == actual_bytes,
        "The actual results file {} is different from the expected results file {}",
        expected_path,
        actual_path
    );
}

test_case! {
    spirograph_defaults,
    "svg",
    vec!["test", "spirograph"]
}

test_case! {
    spirograph_half,
    "svg",
    vec!["test", "spirograph", "-R", "100", "-r", "30", "-d", "60", "-a", "0.5", "-c", "blue"]
}

test_case! {
    spirograph_negative_distance,
    "svg",
    vec!["test", "spirograph", "-R", "40", "-r", "90", "-d", "-35", "-W", "400", "-H", "200"]
}

test_case! {
    triangle_filled,
    "svg",
    vec!["test", "triangle", "-f", "-c", "red", "-W", "200", "-H", "150"]
}

test_case! {
    arc_defaults,
    "svg",
    vec!["test", "arc", "-i", "5", "-l", "10"]
}

test_case! {
    arc_counter_clockwise,
    "svg",
    vec!["test", "arc", "-s", "-90", "-e", "90", "-C", "-T", "0.5"]
}

test_case! {
    flower_defaults,
    "svg",
    vec!["test", "flower"]
}

test_case! {
    flower_narrow,
    "svg",
    vec!["test", "flower", "-p", "10", "-w", "30", "-c", "purple"]
}

#[test]
fn spirograph_parses_back() {
    create_results_directories();
    let output_path = "tests/actual/spirograph_parses_back.svg";
    run(
        &["test", "spirograph", "-W", "300", "-H", "300"],
        output_path,
    );

    let text = read_to_string(output_path).unwrap();
    let polylines = parse_svg(&text).unwrap();
    assert!(polylines.len() == 1);
    assert!(polylines[0].len() == 1900);
    assert_float_absolute_eq!(polylines[0][0].x, 225.0, 1e-9);
    assert_float_absolute_eq!(polylines[0][0].y, 150.0, 1e-9);
}

#[test]
fn flower_parses_back() {
    create_results_directories();
    let output_path = "tests/actual/flower_parses_back.svg";
    run(&["test", "flower"], output_path);

    let text = read_to_string(output_path).unwrap();
    assert!(text.contains("fill-rule='evenodd'"));
    assert!(parse_svg(&text).unwrap().len() == 16);
}

#[test]
fn zero_radius_is_invalid() {
    let flags: Vec<String> = vec!["test", "spirograph", "-r", "0", "-o", "-"]
        .iter()
        .map(|string| string.to_string())
        .collect();
    match main(&flags) {
        Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "outer-radius"),
        result => panic!("unexpected result: {:?}", result),
    }
}

#[test]
fn non_finite_amount_is_invalid() {
    for amount in vec!["NaN", "inf", "infinity"] {
        let flags: Vec<String> = vec!["test", "spirograph", "-a", amount, "-o", "-"]
            .iter()
            .map(|string| string.to_string())
            .collect();
        match main(&flags) {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "amount"),
            result => panic!("unexpected result for {}: {:?}", amount, result),
        }
    }
}

#[test]
fn bad_values_are_rejected() {
    for flags in vec![
        vec!["test", "spirograph", "-a", "lots"],
        vec!["test", "triangle", "-W", "0"],
        vec!["test", "flower", "-T", "0"],
    ] {
        let flags: Vec<String> = flags.iter().map(|string| string.to_string()).collect();
        match main(&flags) {
            Err(Error::InvalidValue { .. }) => {}
            result => panic!("unexpected result for {:?}: {:?}", flags, result),
        }
    }
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    match main(&["test".to_string()]) {
        Err(Error::Usage(_)) => {}
        result => panic!("unexpected result: {:?}", result),
    }
}
