mod commands;
mod extract;

use clap::{App, Arg, ArgMatches};
use commands::*;
use extract::CliError;

use std::fs::File;
use std::io::{stdin, stdout, Read, Write};
use std::str::FromStr;

use svg_points::ExtractorOptions;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = App::new("svg-points")
        .version("0.1")
        .about("Extracts evenly spaced points from the shapes of an SVG document")
        .arg(Arg::with_name("INPUT")
            .help("The SVG file to read, or - for the standard input")
            .value_name("FILE")
            .required(true)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
        )
        .arg(Arg::with_name("CONFIG")
            .help("Reads extractor options from a JSON file, flags take precedence")
            .value_name("FILE")
            .long("config")
            .takes_value(true)
        )
        .arg(Arg::with_name("DENSITY")
            .help("Distance between consecutive points (derived from the document size by default)")
            .value_name("DENSITY")
            .short("d")
            .long("density")
            .takes_value(true)
        )
        .arg(Arg::with_name("FACTOR")
            .help("Multiplied with the largest document dimension to derive the density (0.0075 by default)")
            .value_name("FACTOR")
            .long("factor")
            .takes_value(true)
        )
        .arg(Arg::with_name("MAX_POINTS")
            .help("Fails when the document would produce more points (1000000 by default)")
            .value_name("COUNT")
            .long("max-points")
            .takes_value(true)
        )
        .arg(Arg::with_name("INCLUDE")
            .help("Only extracts these elements")
            .value_name("TAG")
            .long("include")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .use_delimiter(true)
        )
        .arg(Arg::with_name("EXCLUDE")
            .help("Never extracts these elements")
            .value_name("TAG")
            .long("exclude")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .use_delimiter(true)
        )
        .arg(Arg::with_name("NORMALIZE")
            .help("Moves and scales the points to fit a WIDTHxHEIGHT box")
            .value_name("SIZE")
            .long("normalize")
            .takes_value(true)
        )
        .arg(Arg::with_name("NO_CLOSE")
            .help("Does not repeat the first point of closed shapes")
            .long("no-close")
        )
        .arg(Arg::with_name("CHAIN")
            .help("Starts each sub-path of a path where the previous one ended")
            .long("chain")
        )
        .arg(Arg::with_name("FORMAT")
            .help("Output format")
            .value_name("FORMAT")
            .short("f")
            .long("format")
            .takes_value(true)
            .possible_values(&["csv", "json"])
            .default_value("csv")
        )
        .arg(Arg::with_name("METADATA")
            .help("Adds the element, id and class of each path to the output")
            .short("m")
            .long("metadata")
        )
        .arg(Arg::with_name("COUNT")
            .short("c")
            .long("count")
            .help("Prints the number of paths and points")
        )
        .arg(Arg::with_name("STATS")
            .short("s")
            .long("stats")
            .help("Prints the length, bounding box and center of the points")
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        let _ = writeln!(&mut std::io::stderr(), "error: {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let input_path = matches.value_of("INPUT").unwrap_or("-");
    let input = read_input(input_path)?;

    let output: Box<dyn Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(stdout()),
    };

    let format = matches.value_of("FORMAT").unwrap_or("csv");
    let format = OutputFormat::from_name(format).ok_or_else(|| CliError::Argument {
        name: "format",
        value: format.to_string(),
    })?;

    let cmd = ExtractCmd {
        input,
        output,
        options: get_options(matches)?,
        density: parse_arg(matches, "DENSITY", "density")?,
        format,
        metadata: matches.is_present("METADATA"),
        count: matches.is_present("COUNT"),
        stats: matches.is_present("STATS"),
    };

    extract::extract(cmd)
}

fn read_input(path: &str) -> Result<String, CliError> {
    let mut input = String::new();
    let result = if path == "-" {
        stdin().read_to_string(&mut input)
    } else {
        File::open(path).and_then(|mut file| file.read_to_string(&mut input))
    };

    result.map_err(|source| CliError::Input {
        path: path.to_string(),
        source,
    })?;

    Ok(input)
}

fn get_options(matches: &ArgMatches) -> Result<ExtractorOptions, CliError> {
    let mut options = match matches.value_of("CONFIG") {
        Some(path) => {
            let src = read_input(path)?;
            serde_json::from_str(&src).map_err(|source| CliError::Config {
                path: path.to_string(),
                source,
            })?
        }
        None => ExtractorOptions::default(),
    };

    if let Some(factor) = parse_arg(matches, "FACTOR", "factor")? {
        options = options.with_density_factor(factor);
    }
    if let Some(max_points) = parse_arg(matches, "MAX_POINTS", "max-points")? {
        options = options.with_max_points(max_points);
    }
    if let Some(tags) = matches.values_of("INCLUDE") {
        options = options.with_include_only(tags);
    }
    if let Some(tags) = matches.values_of("EXCLUDE") {
        options = options.with_exclude(tags);
    }
    if let Some(size) = matches.value_of("NORMALIZE") {
        let size = parse_size(size).ok_or_else(|| CliError::Argument {
            name: "normalize",
            value: size.to_string(),
        })?;
        options = options.with_normalize_to_size(Some(size));
    }
    if matches.is_present("NO_CLOSE") {
        options = options.with_close_paths(false);
    }
    if matches.is_present("CHAIN") {
        options = options.with_chain_subpaths(true);
    }

    Ok(options)
}

fn parse_arg<T: FromStr>(
    matches: &ArgMatches,
    arg: &str,
    name: &'static str,
) -> Result<Option<T>, CliError> {
    match matches.value_of(arg) {
        Some(value) => value.parse().map(Some).map_err(|_| CliError::Argument {
            name,
            value: value.to_string(),
        }),
        None => Ok(None),
    }
}
