//! Parsing for the AIIDE/movingai grid benchmark formats: `.map` files
//! (`type octile / height / width / map` followed by the tile rows) and
//! `.scen` scenario files (a version line followed by one problem per
//! line).

use std::fs::File;
use std::io::{BufRead, BufReader, Error, Result};
use std::path::{Path, PathBuf};

pub struct Problem {
    pub start: (i32, i32),
    pub target: (i32, i32),
    pub optimal: f64,
}

pub struct Scenario {
    pub map: PathBuf,
    pub problems: Vec<Problem>,
}

pub struct MapFile {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<bool>,
}

pub fn read_scenario(scen_path: &Path) -> Result<Scenario> {
    let mut lines = BufReader::new(File::open(scen_path)?).lines();

    let (key, version) = keyed_field(lines.next().transpose()?.as_deref())?;
    if key != "version" {
        return Err(Error::other(format!("expected version, got {key}")));
    }
    if version != "1" && version != "1.0" {
        return Err(Error::other(format!("unsupported version: {version}")));
    }

    let mut map: Option<String> = None;
    let mut problems = vec![];

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (problem_map, problem) = parse_problem(&line)?;

        match &map {
            Some(map) if problem_map != *map => {
                return Err(Error::other("problem instance names a different map"));
            }
            Some(_) => {}
            None => map = Some(problem_map),
        }
        problems.push(problem);
    }

    let map = map.ok_or_else(|| Error::other("scenario contains no problems"))?;
    Ok(Scenario {
        map: locate_map(&map, scen_path),
        problems,
    })
}

// bucket, map, map width, map height, start x, start y, goal x, goal y,
// optimal length
fn parse_problem(line: &str) -> Result<(String, Problem)> {
    let mut tokens = line.split_whitespace();

    let _bucket = tokens
        .next()
        .ok_or_else(|| Error::other("problem instance missing field bucket"))?;
    let map = tokens
        .next()
        .ok_or_else(|| Error::other("problem instance missing field map"))?
        .to_owned();

    let mut next_number = |field: &str| -> Result<f64> {
        tokens
            .next()
            .ok_or_else(|| Error::other(format!("problem instance missing field {field}")))?
            .parse()
            .map_err(Error::other)
    };

    next_number("map width")?;
    next_number("map height")?;
    let start_x = next_number("start x")? as i32;
    let start_y = next_number("start y")? as i32;
    let target_x = next_number("goal x")? as i32;
    let target_y = next_number("goal y")? as i32;
    let optimal = next_number("optimal length")?;

    Ok((
        map,
        Problem {
            start: (start_x, start_y),
            target: (target_x, target_y),
            optimal,
        },
    ))
}

// Scenario files name maps relative to themselves; fall back to the raw
// path for absolute names.
fn locate_map(map_path: &str, scen_path: &Path) -> PathBuf {
    let sibling = scen_path.parent().unwrap_or(Path::new("")).join(map_path);
    if sibling.exists() {
        sibling
    } else {
        Path::new(map_path).to_path_buf()
    }
}

pub fn read_map(map_path: &Path) -> Result<MapFile> {
    let mut lines = BufReader::new(File::open(map_path)?).lines();

    let (key, kind) = keyed_field(lines.next().transpose()?.as_deref())?;
    if key != "type" || kind != "octile" {
        return Err(Error::other("expected map type octile"));
    }

    let (key, height) = keyed_field(lines.next().transpose()?.as_deref())?;
    if key != "height" {
        return Err(Error::other("expected second line to be height"));
    }
    let height: i32 = height.parse().map_err(Error::other)?;

    let (key, width) = keyed_field(lines.next().transpose()?.as_deref())?;
    if key != "width" {
        return Err(Error::other("expected third line to be width"));
    }
    let width: i32 = width.parse().map_err(Error::other)?;

    if lines.next().transpose()?.as_deref() != Some("map") {
        return Err(Error::other("expected map token"));
    }

    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for row in lines {
        let row = row?;
        if row.is_empty() {
            continue;
        }
        if row.chars().count() != width as usize {
            return Err(Error::other("map row has the wrong width"));
        }
        cells.extend(row.chars().map(|tile| matches!(tile, '.' | 'G' | 'S')));
    }
    if cells.len() != width as usize * height as usize {
        return Err(Error::other("map has the wrong number of rows"));
    }

    Ok(MapFile {
        width,
        height,
        cells,
    })
}

fn keyed_field(line: Option<&str>) -> Result<(String, String)> {
    let Some(line) = line else {
        return Err(Error::other("unexpected end of file"));
    };
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(key), Some(value), None) => Ok((key.to_owned(), value.to_owned())),
        (_, _, Some(_)) => Err(Error::other("unexpected trailing text")),
        _ => Err(Error::other("unexpected end of line")),
    }
}
