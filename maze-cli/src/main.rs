//! braidmaze: generate, solve and print braided mazes.
//!
//! Run: cargo run --bin braidmaze -- --kind braided --patches-x 2 --seed 7

mod render;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::{debug, info};
use maze_core::{MazeConfig, MazeKind};
use maze_gen::{MazeGen, MazeRun};

/// Generate a grid maze and route from its entrance to a random goal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with a full or partial configuration; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maze kind
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// Width of a simple maze (odd)
    #[arg(long)]
    width: Option<i32>,

    /// Height of a simple maze (odd)
    #[arg(long)]
    height: Option<i32>,

    /// Width of each braided patch (odd)
    #[arg(long)]
    patch_width: Option<i32>,

    /// Height of each braided patch (odd)
    #[arg(long)]
    patch_height: Option<i32>,

    /// Number of patches horizontally
    #[arg(long)]
    patches_x: Option<i32>,

    /// Number of patches vertically
    #[arg(long)]
    patches_y: Option<i32>,

    /// Stitches between each pair of adjacent patches
    #[arg(long)]
    stitches: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the solver
    #[arg(long)]
    no_solve: bool,

    /// Regenerate this many times from the same random source
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Replay the solution path cell by cell
    #[arg(long)]
    animate: bool,

    /// Milliseconds between replay steps
    #[arg(long)]
    animation_speed: Option<u64>,

    /// Colour the console dump
    #[arg(long)]
    color: bool,

    /// Print the distance map of the solved maze instead of the path
    #[arg(long)]
    distances: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Simple,
    Braided,
}

impl From<KindArg> for MazeKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Simple => MazeKind::Simple,
            KindArg::Braided => MazeKind::Braided,
        }
    }
}

impl Args {
    /// Start from the config file (or defaults) and apply every flag given.
    fn to_config(&self) -> Result<MazeConfig, Box<dyn std::error::Error>> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                let cfg: MazeConfig = serde_json::from_str(&text)?;
                debug!("loaded config from {}", path.display());
                cfg
            }
            None => MazeConfig::default(),
        };

        if let Some(k) = self.kind {
            cfg.kind = k.into();
        }
        if let Some(v) = self.width {
            cfg.simple_width = v;
        }
        if let Some(v) = self.height {
            cfg.simple_height = v;
        }
        if let Some(v) = self.patch_width {
            cfg.patch_width = v;
        }
        if let Some(v) = self.patch_height {
            cfg.patch_height = v;
        }
        if let Some(v) = self.patches_x {
            cfg.num_patches_x = v;
        }
        if let Some(v) = self.patches_y {
            cfg.num_patches_y = v;
        }
        if let Some(v) = self.stitches {
            cfg.num_stitches = v;
        }
        if let Some(v) = self.animation_speed {
            cfg.animation_speed_ms = v;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.no_solve {
            cfg.solve = false;
        }
        Ok(cfg)
    }
}

fn print_header(cfg: &MazeConfig) {
    match cfg.kind {
        MazeKind::Simple => {
            println!("Generating simple maze: {}x{}", cfg.simple_width, cfg.simple_height);
        }
        MazeKind::Braided => {
            println!("Generating braided maze:");
            println!("  Patch size: {}x{}", cfg.patch_width, cfg.patch_height);
            println!("  Grid: {}x{} patches", cfg.num_patches_x, cfg.num_patches_y);
            println!("  Stitches per connection: {}", cfg.num_stitches);
        }
    }
}

fn report(run: &MazeRun, args: &Args, cfg: &MazeConfig) -> io::Result<()> {
    let maze = &run.maze;
    println!("Final size: {}x{}", maze.grid.width(), maze.grid.height());
    println!("Entrance: {}", maze.entrance);
    println!("Exit: {}", maze.exit);
    match maze.goal {
        Some(g) => println!("Goal: {g}"),
        None => println!("Goal: none"),
    }

    let path: &[_] = match &run.solution {
        Some(sol) => match &sol.path {
            Some(p) => {
                println!("Solution found! Path length: {} steps", p.len());
                p.as_slice()
            }
            None => {
                println!("No solution found!");
                &[]
            }
        },
        None => &[],
    };

    let mut stdout = io::stdout();
    if args.animate && !path.is_empty() {
        let delay = Duration::from_millis(cfg.animation_speed_ms);
        return render::animate(&mut stdout, maze, path, delay);
    }
    if !render::fits_console(maze) {
        println!("(Maze too large to print to console)");
    } else if args.distances {
        match &run.solution {
            Some(sol) if args.color => render::print_distances(&mut stdout, maze, &sol.distances)?,
            Some(sol) => print!("{}", render::distance_dump(maze, &sol.distances)),
            None => println!("(No distance map: the maze was not solved)"),
        }
    } else if args.color {
        render::print_colored(&mut stdout, maze, path)?;
    } else {
        print!("{}", render::dump(maze, path));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = args.to_config()?;
    cfg.validate()?;
    info!("config: {cfg:?}");

    let mut mg = MazeGen::with_seed(cfg.seed);
    for i in 0..args.runs {
        if args.runs > 1 {
            println!("--- run {} of {} ---", i + 1, args.runs);
        }
        print_header(&cfg);
        let run = mg.run(&cfg)?;
        report(&run, &args, &cfg)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "braidmaze", "--kind", "simple", "--width", "11", "--seed", "3", "--no-solve",
        ]);
        let cfg = args.to_config().unwrap();
        assert_eq!(cfg.kind, MazeKind::Simple);
        assert_eq!(cfg.simple_width, 11);
        assert_eq!(cfg.simple_height, 41);
        assert_eq!(cfg.seed, Some(3));
        assert!(!cfg.solve);
    }

    #[test]
    fn braided_flags() {
        let args = Args::parse_from([
            "braidmaze", "--patch-width", "9", "--patches-x", "2", "--stitches", "0",
        ]);
        let cfg = args.to_config().unwrap();
        assert_eq!(cfg.kind, MazeKind::Braided);
        assert_eq!(cfg.patch_width, 9);
        assert_eq!(cfg.num_patches_x, 2);
        assert_eq!(cfg.num_stitches, 0);
        assert_eq!(args.runs, 1);
        assert!(!args.distances);
    }

    #[test]
    fn distance_map_flag() {
        let args = Args::parse_from(["braidmaze", "--distances", "--color"]);
        assert!(args.distances);
        assert!(args.color);
        assert!(args.to_config().unwrap().solve);
    }

    #[test]
    fn config_file_is_overridden_by_flags() {
        let path = std::env::temp_dir().join(format!("braidmaze-cfg-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"kind":"simple","simple_width":15,"simple_height":9}"#).unwrap();
        let args = Args::parse_from([
            "braidmaze".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "--height".to_string(),
            "13".to_string(),
        ]);
        let cfg = args.to_config().unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.kind, MazeKind::Simple);
        assert_eq!(cfg.simple_width, 15);
        assert_eq!(cfg.simple_height, 13);
    }
}
