//! Gridlife CLI - Run simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use gridlife::{
    engine::Simulation,
    schema::{EngineConfig, Pattern, RuleTable},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [steps]", args[0]);
        eprintln!();
        eprintln!("Run a Gridlife simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to engine configuration file");
        eprintln!("  steps        Number of generations to run (default: 100)");
        eprintln!();
        eprintln!("If <config>.pattern.json exists it is placed centered on the");
        eprintln!("grid; otherwise the field starts from a 30% random fill.");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: EngineConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    let mut sim = Simulation::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });
    if let Err(e) = sim.set_rule_table(RuleTable::conway()) {
        eprintln!("Invalid rule table: {}", e);
        std::process::exit(1);
    }

    // Seed the field: a pattern file if present, a random fill otherwise
    let pattern_path = config_path.with_extension("pattern.json");
    if pattern_path.exists() {
        let pattern_str = fs::read_to_string(&pattern_path).unwrap_or_else(|e| {
            eprintln!("Error reading pattern file: {}", e);
            std::process::exit(1);
        });
        let pattern: Pattern = serde_json::from_str(&pattern_str).unwrap_or_else(|e| {
            eprintln!("Error parsing pattern: {}", e);
            std::process::exit(1);
        });
        sim.place_preset_centered(&pattern);
    } else if let Err(e) = sim.randomize(0.3) {
        eprintln!("Error seeding field: {}", e);
        std::process::exit(1);
    }

    println!("Gridlife Simulation");
    println!("===================");
    println!("Grid: {}x{}", sim.width(), sim.height());
    println!("Rule: {}", sim.rule_table().name);
    println!("Steps: {}", steps);
    println!();

    let initial = sim.stats();
    println!("Initial state:");
    println!("  Alive cells: {}", initial.alive_cells);
    println!("  Density: {:.3}", initial.density);
    println!();

    // Run simulation
    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..steps {
        sim.step();

        // Print progress every 10%
        if (i + 1) % (steps / 10).max(1) == 0 {
            let stats = sim.stats();
            let elapsed = start.elapsed().as_secs_f32();
            let steps_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: alive={}, density={:.3}, {:.1} steps/s",
                stats.generation, steps, stats.alive_cells, stats.density, steps_per_sec
            );
        }
    }

    println!();
    let last = sim.stats();
    println!("Final state:");
    println!("  Alive cells: {}", last.alive_cells);
    println!("  Density: {:.3}", last.density);

    // Small grids get a text rendering of the settled field
    if sim.width() <= 64 {
        println!();
        let snapshot = sim.snapshot();
        for y in 0..snapshot.height {
            let row: String = (0..snapshot.width)
                .map(|x| if snapshot.is_alive(x, y) { '#' } else { '.' })
                .collect();
            println!("  {}", row);
        }
    }
}

fn print_example_config() {
    let config = EngineConfig::default();
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error generating example: {}", e);
            std::process::exit(1);
        }
    }
}
