use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use svg_points::math::Point;
use svg_points::{ExtractError, Extractor, PathMetadata};
use thiserror::Error;

use crate::commands::{ExtractCmd, OutputFormat};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("Cannot read {path}: {source}")]
    Input { path: String, source: io::Error },
    #[error("Invalid configuration in {path}: {source}")]
    Config {
        path: String,
        source: serde_json::Error,
    },
    #[error("Invalid value {value:?} for --{name}.")]
    Argument { name: &'static str, value: String },
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct JsonPath<'l> {
    element: &'l str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'l str>,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    class_name: Option<&'l str>,
    attributes: &'l BTreeMap<String, String>,
    points: Vec<JsonPoint>,
}

fn json_points(points: &[Point]) -> Vec<JsonPoint> {
    points.iter().map(|p| JsonPoint { x: p.x, y: p.y }).collect()
}

pub fn extract(mut cmd: ExtractCmd) -> Result<(), CliError> {
    let extractor = Extractor::new(cmd.options);
    let extraction = extractor.extract_points_with_metadata(&cmd.input, cmd.density)?;
    if !extraction.warnings.is_empty() {
        log::info!("{} warning(s) in path data.", extraction.warnings.len());
    }

    let paths = &extraction.paths;
    let output = &mut *cmd.output;

    if cmd.count {
        write_count(paths, output)?;
    } else if cmd.stats {
        write_stats(&extractor, paths, output)?;
    } else {
        match cmd.format {
            OutputFormat::Csv => write_csv(paths, cmd.metadata, output)?,
            OutputFormat::Json => write_json(paths, cmd.metadata, output)?,
        }
    }

    output.flush()?;

    Ok(())
}

fn num_points(paths: &[PathMetadata]) -> usize {
    paths.iter().map(|path| path.points.len()).sum()
}

pub fn write_count(paths: &[PathMetadata], output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "paths: {}", paths.len())?;
    writeln!(output, "points: {}", num_points(paths))
}

pub fn write_stats(
    extractor: &Extractor,
    paths: &[PathMetadata],
    output: &mut dyn Write,
) -> io::Result<()> {
    let bounds = extractor.bounding_box(paths);
    let center = extractor.center(paths);

    write_count(paths, output)?;
    writeln!(output, "length: {}", extractor.total_length(paths))?;
    writeln!(
        output,
        "bounds: {} {} {} {}",
        bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
    )?;
    writeln!(output, "center: {} {}", center.x, center.y)
}

pub fn write_csv(
    paths: &[PathMetadata],
    metadata: bool,
    output: &mut dyn Write,
) -> io::Result<()> {
    if metadata {
        writeln!(output, "path,index,x,y,element,id,class")?;
    } else {
        writeln!(output, "path,index,x,y")?;
    }

    for (path_idx, path) in paths.iter().enumerate() {
        for (idx, p) in path.points.iter().enumerate() {
            write!(output, "{},{},{},{}", path_idx, idx, p.x, p.y)?;
            if metadata {
                write!(
                    output,
                    ",{},{},{}",
                    path.element,
                    csv_field(path.id.as_deref().unwrap_or("")),
                    csv_field(path.class_name.as_deref().unwrap_or(""))
                )?;
            }
            writeln!(output)?;
        }
    }

    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains(|c: char| c == ',' || c == '"' || c == '\n' || c == '\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn write_json(
    paths: &[PathMetadata],
    metadata: bool,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    if metadata {
        let paths: Vec<JsonPath> = paths
            .iter()
            .map(|path| JsonPath {
                element: &path.element,
                id: path.id.as_deref(),
                class_name: path.class_name.as_deref(),
                attributes: &path.attributes,
                points: json_points(&path.points),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *output, &paths)?;
    } else {
        let paths: Vec<Vec<JsonPoint>> = paths.iter().map(|path| json_points(&path.points)).collect();
        serde_json::to_writer_pretty(&mut *output, &paths)?;
    }
    writeln!(output)?;

    Ok(())
}

#[cfg(test)]
fn extract_test_paths() -> Vec<PathMetadata> {
    let svg = r#"<svg viewBox="0 0 100 100">
        <line id="a,b" x1="0" y1="0" x2="2" y2="0"/>
        <polyline class="p" points="0,5 0,6"/>
    </svg>"#;
    Extractor::default()
        .extract_points_with_metadata(svg, Some(1.0))
        .unwrap()
        .paths
}

#[cfg(test)]
fn output_string(write: impl FnOnce(&mut dyn Write)) -> String {
    let mut buffer: Vec<u8> = Vec::new();
    write(&mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[test]
fn csv_output() {
    let paths = extract_test_paths();
    let csv = output_string(|out| write_csv(&paths, false, out).unwrap());
    assert_eq!(csv, "path,index,x,y\n0,0,0,0\n0,1,1,0\n0,2,2,0\n1,0,0,5\n1,1,0,6\n");

    let csv = output_string(|out| write_csv(&paths, true, out).unwrap());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "path,index,x,y,element,id,class");
    assert_eq!(lines[1], "0,0,0,0,line,\"a,b\",");
    assert_eq!(lines[4], "1,0,0,5,polyline,,p");
}

#[test]
fn json_output() {
    let paths = extract_test_paths();
    let json = output_string(|out| write_json(&paths, false, out).unwrap());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0][2], serde_json::json!({ "x": 2.0, "y": 0.0 }));

    let json = output_string(|out| write_json(&paths, true, out).unwrap());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["element"], "line");
    assert_eq!(value[0]["id"], "a,b");
    assert!(value[0].get("class").is_none());
    assert_eq!(value[1]["class"], "p");
    assert_eq!(value[1]["attributes"]["points"], "0,5 0,6");
    assert_eq!(value[1]["points"][1]["y"], 6.0);
}

#[test]
fn count_and_stats() {
    let paths = extract_test_paths();
    let count = output_string(|out| write_count(&paths, out).unwrap());
    assert_eq!(count, "paths: 2\npoints: 5\n");

    let stats = output_string(|out| write_stats(&Extractor::default(), &paths, out).unwrap());
    let lines: Vec<&str> = stats.lines().collect();
    assert_eq!(lines[2], "length: 3");
    assert_eq!(lines[3], "bounds: 0 0 2 6");
    assert_eq!(lines[4], "center: 0.6 2.2");
}

#[test]
fn csv_escaping() {
    assert_eq!(csv_field("plain"), "plain");
    assert_eq!(csv_field("a,b"), "\"a,b\"");
    assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
}
