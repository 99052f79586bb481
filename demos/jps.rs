use std::path::PathBuf;

use jumppath::grid::{octile_distance, to_coord, to_index};
use jumppath::jps;
use structopt::StructOpt;

mod movingai;

#[derive(StructOpt)]
struct Options {
    scen: PathBuf,
    /// Draw each solved map with the path tiles overlaid.
    #[structopt(long)]
    render: bool,
}

fn main() {
    let opt = Options::from_args();
    let scen = movingai::read_scenario(&opt.scen).unwrap();
    let map = movingai::read_map(&scen.map).unwrap();

    for problem in &scen.problems {
        let start = to_index(map.width, problem.start.0, problem.start.1);
        let goal = to_index(map.width, problem.target.0, problem.target.1);

        match jps::compute(&map.cells, map.width, map.height, start, goal) {
            Ok(path) => {
                let cost = path_cost(map.width, start, &path);
                println!(
                    "{cost:.2} ({} tiles, scenario optimal {:.2})",
                    path.len(),
                    problem.optimal
                );
                if opt.render {
                    render(&map, &path);
                }
            }
            Err(err) => println!("failed to find path: {err}"),
        }
    }
}

fn path_cost(width: i32, start: i32, path: &[i32]) -> f64 {
    let mut cost = 0.0;
    let mut prev = to_coord(width, start);
    for &node in path.iter().rev() {
        let coord = to_coord(width, node);
        cost += octile_distance(prev, coord);
        prev = coord;
    }
    cost
}

fn render(map: &movingai::MapFile, path: &[i32]) {
    for y in 0..map.height {
        let mut line = String::with_capacity(map.width as usize);
        for x in 0..map.width {
            let node = to_index(map.width, x, y);
            if let Some(i) = path.iter().position(|&tile| tile == node) {
                line.push(char::from_digit((i % 10) as u32, 10).unwrap());
            } else if map.cells[node as usize] {
                line.push('.');
            } else {
                line.push('#');
            }
        }
        println!("{line}");
    }
}
