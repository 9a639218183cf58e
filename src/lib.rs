#![deny(clippy::all)]

//! Command line driver for graph traversal and grid pathfinding.

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};

use anyhow::{self, Context};
use itertools::Itertools;
use thiserror::Error;
use tracing::info;

use std::fs::File;
use std::io::{self, Read, Write};

use geometry::{Cell, CellEncoding, Grid, Strategy};
use searcher::{DfsVariant, Graph, NodeId, SearchError, SearchOptions};

mod logging;

type Error = anyhow::Error;
type BoxedRead = Box<dyn ::std::io::Read + 'static>;

/// How often searches report progress, in expanded nodes.
const PROGRESS_INTERVAL: usize = 10_000;

#[derive(Debug, Clone, Copy)]
enum Traversal {
    Breadth,
    Depth(DfsVariant),
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    logging::init(matches.occurrences_of("verbose"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&matches, &mut out)
}

fn app() -> App<'static, 'static> {
    App::new("gridsearch")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Traverse graphs and find paths on grids")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more detail, repeat for even more"),
        )
        .subcommand(
            SubCommand::with_name("bfs")
                .about("Breadth-first traversal of a graph")
                .arg(input())
                .arg(start_node()),
        )
        .subcommand(
            SubCommand::with_name("dfs")
                .about("Depth-first traversal of a graph")
                .arg(input())
                .arg(start_node())
                .arg(
                    Arg::with_name("recursive")
                        .long("recursive")
                        .help("Backtrack with the call stack instead of an explicit stack"),
                ),
        )
        .subcommand(grid_command("astar", "Shortest path on a grid with A*"))
        .subcommand(
            grid_command("maze", "Solve a maze with the chosen strategy").arg(
                Arg::with_name("strategy")
                    .long("strategy")
                    .value_name("STRATEGY")
                    .takes_value(true)
                    .possible_values(&["astar", "bfs", "dfs"])
                    .default_value("dfs"),
            ),
        )
}

fn input() -> Arg<'static, 'static> {
    Arg::with_name("input")
        .value_name("INPUT")
        .required(false)
        .takes_value(true)
        .help("File to read, or - for stdin (the default)")
}

fn start_node() -> Arg<'static, 'static> {
    Arg::with_name("start")
        .short("s")
        .long("start")
        .value_name("NODE")
        .takes_value(true)
        .default_value("0")
}

fn grid_command(name: &'static str, about: &'static str) -> App<'static, 'static> {
    SubCommand::with_name(name)
        .about(about)
        .arg(input())
        .arg(
            Arg::with_name("start")
                .short("s")
                .long("start")
                .value_name("ROW,COL")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .value_name("ROW,COL")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("digits")
                .long("digits")
                .help("Read the grid as rows of 0 and 1 instead of . and #"),
        )
        .arg(
            Arg::with_name("zero-free")
                .long("zero-free")
                .requires("digits")
                .help("With --digits, 0 marks a free cell and 1 a wall"),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("STEPS")
                .takes_value(true)
                .help("Give up after expanding this many cells"),
        )
        .arg(
            Arg::with_name("no-map")
                .long("no-map")
                .help("Only print the path, not the map"),
        )
}

/// Run the subcommand in `matches`, writing results to `out`.
pub fn execute(matches: &ArgMatches, out: &mut dyn Write) -> Result<(), Error> {
    match matches.subcommand() {
        ("bfs", Some(m)) => traverse(m, Traversal::Breadth, out),
        ("dfs", Some(m)) => {
            let variant = if m.is_present("recursive") {
                DfsVariant::Recursive
            } else {
                DfsVariant::Iterative
            };
            traverse(m, Traversal::Depth(variant), out)
        }
        ("astar", Some(m)) => find_path(m, Strategy::AStar, out),
        ("maze", Some(m)) => {
            let strategy = value_t!(m, "strategy", Strategy)?;
            find_path(m, strategy, out)
        }
        _ => Err(CliError::MissingCommand.into()),
    }
}

fn traverse(matches: &ArgMatches, traversal: Traversal, out: &mut dyn Write) -> Result<(), Error> {
    let graph: Graph = read_input(matches.value_of("input"))?.parse()?;
    let start = value_t!(matches, "start", NodeId)?;
    info!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        start,
        ?traversal,
        "loaded graph"
    );

    let order = match traversal {
        Traversal::Breadth => searcher::bfs(&graph, start)?,
        Traversal::Depth(variant) => searcher::dfs(&graph, start, variant)?,
    };

    writeln!(out, "{}", order.iter().join(" "))?;
    Ok(())
}

fn find_path(matches: &ArgMatches, strategy: Strategy, out: &mut dyn Write) -> Result<(), Error> {
    let text = read_input(matches.value_of("input"))?;
    let grid = if matches.is_present("digits") {
        let encoding = if matches.is_present("zero-free") {
            CellEncoding::ZeroIsFree
        } else {
            CellEncoding::OneIsFree
        };
        Grid::from_digits(&text, encoding)?
    } else {
        text.parse::<Grid>()?
    };

    let start = cell_arg(matches, "start")?;
    let goal = cell_arg(matches, "goal")?;
    info!(rows = grid.rows(), cols = grid.cols(), %start, %goal, "loaded grid");

    let mut options = SearchOptions::default().with_verbose(PROGRESS_INTERVAL);
    if matches.is_present("limit") {
        options = options.with_limit(value_t!(matches, "limit", usize)?);
    }

    match grid
        .pathfinder()
        .with_options(options)
        .solve(strategy, start, goal)
    {
        Ok(path) => {
            writeln!(out, "Path found: {} steps", path.distance())?;
            writeln!(out, "{}", path)?;
            if !matches.is_present("no-map") {
                write!(out, "{}", grid.render(&path))?;
            }
        }
        Err(SearchError::Unreachable) => writeln!(out, "No path found.")?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn cell_arg(matches: &ArgMatches, name: &'static str) -> Result<Cell, Error> {
    let value = matches
        .value_of(name)
        .ok_or(CliError::MissingArgument(name))?;
    value
        .parse()
        .with_context(|| format!("Invalid --{} {:?}", name, value))
}

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, CliError> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| CliError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

fn read_input(filename: Option<&str>) -> Result<String, Error> {
    let mut text = String::new();
    get_input_reader(filename)?.read_to_string(&mut text)?;
    Ok(text)
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No command given, see --help")]
    MissingCommand,

    #[error("Missing argument --{0}")]
    MissingArgument(&'static str),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    fn run(args: &[&str]) -> Result<String, Error> {
        let matches = app()
            .get_matches_from_safe(std::iter::once("gridsearch").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        execute(&matches, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn traversals() {
        let graph = fixture("cyclic.txt");
        let graph = graph.as_str();
        assert_eq!(run(&["bfs", graph, "--start", "2"]).unwrap(), "2 0 3 1\n");
        assert_eq!(
            run(&["dfs", graph, "--start", "2", "--recursive"]).unwrap(),
            "2 0 1 3\n"
        );
        assert_eq!(run(&["dfs", graph, "-s", "2"]).unwrap(), "2 3 0 1\n");
        assert_eq!(run(&["bfs", graph]).unwrap(), "0 1 2 3\n");
    }

    #[test]
    fn traversal_out_of_range() {
        let graph = fixture("cyclic.txt");
        let err = run(&["bfs", graph.as_str(), "--start", "7"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SearchError>(),
            Some(&SearchError::OutOfRange { node: 7, len: 4 })
        );
    }

    #[test]
    fn astar() {
        let maze = fixture("maze.txt");
        let output = run(&[
            "astar",
            maze.as_str(),
            "--digits",
            "--zero-free",
            "--start",
            "0,0",
            "--goal",
            "3,3",
        ])
        .unwrap();
        assert_eq!(
            output,
            "Path found: 6 steps\n\
             (0,0) (0,1) (1,1) (1,2) (2,2) (3,2) (3,3)\n\
             **#.\n\
             #**.\n\
             ##*#\n\
             ..**\n"
        );
    }

    #[test]
    fn maze_strategies() {
        let maze = fixture("maze.txt");
        for strategy in &["astar", "bfs", "dfs"] {
            let output = run(&[
                "maze",
                maze.as_str(),
                "--digits",
                "--zero-free",
                "-s",
                "0,0",
                "-g",
                "3,3",
                "--strategy",
                *strategy,
                "--no-map",
            ])
            .unwrap();
            assert!(output.starts_with("Path found: 6 steps\n"), "{}", output);
            assert_eq!(output.lines().count(), 2);
        }
    }

    #[test]
    fn no_path() {
        let vault = fixture("vault.txt");
        assert_eq!(
            run(&["maze", vault.as_str(), "-s", "0,0", "-g", "2,2"]).unwrap(),
            "No path found.\n"
        );
    }

    #[test]
    fn bad_endpoints() {
        let maze = fixture("maze.txt");
        let err = run(&[
            "astar",
            maze.as_str(),
            "--digits",
            "--zero-free",
            "-s",
            "0,2",
            "-g",
            "3,3",
        ])
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<SearchError>(),
            Some(&SearchError::InvalidEndpoint(searcher::Endpoint::Start))
        );

        let err =
            run(&["astar", maze.as_str(), "--digits", "-s", "0;0", "-g", "3,3"]).unwrap_err();
        assert!(err.to_string().contains("--start"), "{}", err);
    }

    #[test]
    fn missing_input() {
        let missing = fixture("nothing-here.txt");
        let err = run(&["bfs", missing.as_str()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InputNotFound(_, _))
        ));
    }
}
