use selkie::graph::{Graph, GraphOptions, LoadError, VertexId, parse_graph};
use selkie::min_cut::{MinCutOptions, compute_minimum_cut};
use selkie::mst::{
    kruskal_mst, kruskal_mst_lazy, kruskal_mst_straightforward, max_spacing_clustering,
    prim_mst, prim_mst_improved,
};
use selkie::shortest_paths::{
    bellman_ford, bellman_ford_optimized, bellman_ford_push, bellman_ford_to,
    bellman_ford_to_optimized, dijkstra, floyd_warshall, floyd_warshall_optimized,
};
use selkie::traversal::{
    bfs, connected_components, dfs, shortest_path_length, strongly_connected_components,
    topological_sort, topological_sort_straightforward,
};
use selkie::tsp::{Point, tsp_optimized_with_budget, tsp_with_budget};
use selkie::{Budget, Error};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Load(LoadError),
    Algorithm(Error),
    Json(serde_json::Error),
    InvalidCities { line: usize, content: String },
    CityCount { expected: usize, found: usize },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Load(err) => write!(f, "invalid graph input: {err}"),
            CliError::Algorithm(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::InvalidCities { line, content } => {
                write!(f, "line {line}: expected `x y`, got {content:?}")
            }
            CliError::CityCount { expected, found } => {
                write!(f, "expected {expected} cities, found {found}")
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<LoadError> for CliError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

impl From<Error> for CliError {
    fn from(value: Error) -> Self {
        Self::Algorithm(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Bfs,
    Dfs,
    Path,
    Components,
    Topo,
    BellmanFord,
    FloydWarshall,
    Dijkstra,
    Mst,
    Cluster,
    MinCut,
    Tsp,
}

impl Command {
    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "bfs" => Self::Bfs,
            "dfs" => Self::Dfs,
            "path" => Self::Path,
            "components" => Self::Components,
            "topo" => Self::Topo,
            "bellman-ford" => Self::BellmanFord,
            "floyd-warshall" => Self::FloydWarshall,
            "dijkstra" => Self::Dijkstra,
            "mst" => Self::Mst,
            "cluster" => Self::Cluster,
            "min-cut" => Self::MinCut,
            "tsp" => Self::Tsp,
            _ => return None,
        })
    }

    /// Graph flavour used when neither `--directed` nor `--undirected` is given.
    fn directed_by_default(self) -> bool {
        !matches!(self, Self::Mst | Self::Cluster | Self::MinCut)
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    directed: Option<bool>,
    source: Option<VertexId>,
    dest: Option<VertexId>,
    algorithm: Option<String>,
    k: Option<usize>,
    trials: Option<usize>,
    seed: Option<u64>,
    max_steps: Option<u64>,
}

fn usage() -> &'static str {
    "selkie-cli\n\
\n\
USAGE:\n\
  selkie-cli bfs|dfs --source <id> [GRAPH] [<path>|-]\n\
  selkie-cli path --source <id> --dest <id> [GRAPH] [<path>|-]\n\
  selkie-cli components [GRAPH] [<path>|-]\n\
  selkie-cli topo [--algorithm dfs|sinks] [<path>|-]\n\
  selkie-cli bellman-ford (--source <id> | --dest <id>) [--algorithm table|early-stop|push] [--max-steps <n>] [GRAPH] [<path>|-]\n\
  selkie-cli floyd-warshall [--algorithm full|layered] [GRAPH] [<path>|-]\n\
  selkie-cli dijkstra --source <id> [GRAPH] [<path>|-]\n\
  selkie-cli mst [--algorithm prim|prim-heap|kruskal|kruskal-lazy|kruskal-dfs] [<path>|-]\n\
  selkie-cli cluster --k <n> [<path>|-]\n\
  selkie-cli min-cut [--trials <n>] [--seed <n>] [<path>|-]\n\
  selkie-cli tsp [--algorithm full|layered] [--max-steps <n>] [<path>|-]\n\
\n\
GRAPH:\n\
  --directed | --undirected   graph flavour (mst, cluster and min-cut default to undirected)\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Graph files start with the vertex count n (vertices 1..n), then one `tail head [weight]` per line.\n\
  - City files for tsp start with the city count, then one `x y` per line.\n\
  - Results are printed as JSON; --pretty indents them.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    fn value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
        it.next().ok_or(CliError::Usage(usage()))
    }
    fn number<'a, T: std::str::FromStr>(
        it: &mut impl Iterator<Item = &'a String>,
    ) -> Result<T, CliError> {
        value(it)?.parse::<T>().map_err(|_| CliError::Usage(usage()))
    }

    let mut args = Args::default();
    let mut it = argv.iter().skip(1);
    let Some(first) = it.next() else {
        return Err(CliError::Usage(usage()));
    };
    args.command = match first.as_str() {
        "--help" | "-h" => return Err(CliError::Usage(usage())),
        cmd => Command::parse(cmd).ok_or(CliError::Usage(usage()))?,
    };

    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--directed" => args.directed = Some(true),
            "--undirected" => args.directed = Some(false),
            "--source" => args.source = Some(number(&mut it)?),
            "--dest" => args.dest = Some(number(&mut it)?),
            "--k" => args.k = Some(number(&mut it)?),
            "--trials" => args.trials = Some(number(&mut it)?),
            "--seed" => args.seed = Some(number(&mut it)?),
            "--max-steps" => args.max_steps = Some(number(&mut it)?),
            "--algorithm" => args.algorithm = Some(value(&mut it)?.clone()),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn parse_cities(text: &str) -> Result<Vec<Point>, CliError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());
    let Some((line, header)) = lines.next() else {
        return Err(CliError::Algorithm(Error::EmptyInput));
    };
    let expected: usize = header.parse().map_err(|_| CliError::InvalidCities {
        line,
        content: header.to_string(),
    })?;

    let mut cities: Vec<Point> = Vec::with_capacity(expected);
    for (line, content) in lines {
        let mut parts = content.split_whitespace().map(str::parse::<f64>);
        let (Some(Ok(x)), Some(Ok(y)), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CliError::InvalidCities {
                line,
                content: content.to_string(),
            });
        };
        cities.push(Point::new(x, y));
    }
    if cities.len() != expected {
        return Err(CliError::CityCount {
            expected,
            found: cities.len(),
        });
    }
    Ok(cities)
}

fn required<T>(value: Option<T>) -> Result<T, CliError> {
    value.ok_or(CliError::Usage(usage()))
}

#[derive(Serialize)]
struct OrderOut {
    order: Vec<VertexId>,
}

#[derive(Serialize)]
struct PathOut {
    source: VertexId,
    dest: VertexId,
    hops: Option<usize>,
}

#[derive(Serialize)]
struct ComponentsOut {
    strongly_connected: bool,
    count: usize,
    components: Vec<Vec<VertexId>>,
}

#[derive(Serialize)]
struct TspOut {
    cities: usize,
    tour_length: f64,
    steps: u64,
}

fn budget(max_steps: Option<u64>) -> Budget {
    max_steps.map_or_else(Budget::unlimited, Budget::steps)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let algorithm = args.algorithm.as_deref();

    if args.command == Command::Tsp {
        let cities = parse_cities(&text)?;
        let mut budget = budget(args.max_steps);
        let tour_length = match algorithm {
            None | Some("full") => tsp_with_budget(&cities, &mut budget)?,
            Some("layered") => tsp_optimized_with_budget(&cities, &mut budget)?,
            Some(_) => return Err(CliError::Usage(usage())),
        };
        let out = TspOut {
            cities: cities.len(),
            tour_length,
            steps: budget.used(),
        };
        return write_json(&out, args.pretty);
    }

    let directed = args
        .directed
        .unwrap_or_else(|| args.command.directed_by_default());
    let g: Graph = parse_graph(GraphOptions { directed }, &text)?;

    match args.command {
        Command::Bfs => {
            let order = bfs(&g, required(args.source)?)?;
            write_json(&OrderOut { order }, args.pretty)
        }
        Command::Dfs => {
            let order = dfs(&g, required(args.source)?)?;
            write_json(&OrderOut { order }, args.pretty)
        }
        Command::Path => {
            let source = required(args.source)?;
            let dest = required(args.dest)?;
            let hops = shortest_path_length(&g, source, dest)?;
            write_json(&PathOut { source, dest, hops }, args.pretty)
        }
        Command::Components => {
            let components = if g.is_directed() {
                strongly_connected_components(&g)?
            } else {
                connected_components(&g)?
            };
            let out = ComponentsOut {
                strongly_connected: g.is_directed(),
                count: components.len(),
                components,
            };
            write_json(&out, args.pretty)
        }
        Command::Topo => {
            let order = match algorithm {
                None | Some("dfs") => topological_sort(&g)?,
                Some("sinks") => topological_sort_straightforward(g)?,
                Some(_) => return Err(CliError::Usage(usage())),
            };
            write_json(&OrderOut { order }, args.pretty)
        }
        Command::BellmanFord => {
            let table = match (args.source, args.dest, algorithm) {
                (Some(s), None, None | Some("table")) => bellman_ford(&g, s)?,
                (Some(s), None, Some("early-stop")) => bellman_ford_optimized(&g, s)?,
                (None, Some(d), None | Some("table")) => bellman_ford_to(&g, d)?,
                (None, Some(d), Some("early-stop")) => bellman_ford_to_optimized(&g, d)?,
                (None, Some(d), Some("push")) => {
                    bellman_ford_push(&g, d, &mut budget(args.max_steps))?
                }
                _ => return Err(CliError::Usage(usage())),
            };
            write_json(&table, args.pretty)
        }
        Command::FloydWarshall => {
            let matrix = match algorithm {
                None | Some("layered") => floyd_warshall_optimized(&g)?,
                Some("full") => floyd_warshall(&g)?,
                Some(_) => return Err(CliError::Usage(usage())),
            };
            write_json(&matrix, args.pretty)
        }
        Command::Dijkstra => {
            let table = dijkstra(&g, required(args.source)?)?;
            write_json(&table, args.pretty)
        }
        Command::Mst => {
            let tree = match algorithm {
                None | Some("prim") => prim_mst(&g)?,
                Some("prim-heap") => prim_mst_improved(&g)?,
                Some("kruskal") => kruskal_mst(&g)?,
                Some("kruskal-lazy") => kruskal_mst_lazy(&g)?,
                Some("kruskal-dfs") => kruskal_mst_straightforward(&g)?,
                Some(_) => return Err(CliError::Usage(usage())),
            };
            write_json(&tree, args.pretty)
        }
        Command::Cluster => {
            let clustering = max_spacing_clustering(&g, required(args.k)?)?;
            write_json(&clustering, args.pretty)
        }
        Command::MinCut => {
            let options = MinCutOptions {
                trials: args.trials,
                seed: args.seed,
            };
            write_json(&compute_minimum_cut(&g, &options)?, args.pretty)
        }
        Command::Tsp => Ok(()),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
