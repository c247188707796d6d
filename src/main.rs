use serde::Deserialize;
use triangulation::{
    InputParser, JsonFormatter, ObservationPoint, RawInputs, SolverConfig, TriangulationSolver,
};

/// JSON input file: exactly two throws in order
#[derive(Debug, Deserialize)]
struct ThrowsFile {
    throws: Vec<ObservationPoint>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 3 && args[1] == "--json" {
        return run_json(&args[2]);
    }

    if args.len() == 9 && args[1] == "--config" {
        let config = SolverConfig::from_file(&args[2]).map_err(|e| {
            eprintln!("Error: {}", e);
            e
        })?;
        return run_fields(&args[3..9], &config);
    }

    if args.len() == 7 {
        return run_fields(&args[1..7], &SolverConfig::default());
    }

    let program = args.get(0).map_or("triangulation", |s| s.as_str());
    eprintln!("Usage: {} <x1> <z1> <bearing1> <x2> <z2> <bearing2>", program);
    eprintln!("   or: {} --config <config_file> <x1> <z1> <bearing1> <x2> <z2> <bearing2>", program);
    eprintln!("   or: {} --json <throws_file>", program);
    Err("Invalid arguments".into())
}

/// Six positional fields, parsed exactly like the calculator form
fn run_fields(fields: &[String], config: &SolverConfig) -> Result<(), Box<dyn std::error::Error>> {
    let raw = RawInputs::new(
        fields[0].as_str(),
        fields[1].as_str(),
        fields[2].as_str(),
        fields[3].as_str(),
        fields[4].as_str(),
        fields[5].as_str(),
    );

    let (first, second) = InputParser::new().parse(&raw).map_err(|e| {
        eprintln!("Error: {}", e);
        e
    })?;

    match config.solver().solve(&first, &second) {
        Ok(estimate) => {
            println!("{}", config.text_formatter().format_estimate(&estimate));
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(e.into())
        }
    }
}

/// JSON file input, JSON output
fn run_json(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json_data = std::fs::read_to_string(path)?;
    let file: ThrowsFile = serde_json::from_str(&json_data)?;

    if file.throws.len() != 2 {
        eprintln!("Expected exactly 2 throws, found {}", file.throws.len());
        return Err("Invalid throw count".into());
    }

    let solver = TriangulationSolver::new();
    match solver.solve(&file.throws[0], &file.throws[1]) {
        Ok(estimate) => {
            println!("{}", JsonFormatter::pretty().format_estimate(&estimate)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", JsonFormatter::pretty().format_error(&e)?);
            Err(e.into())
        }
    }
}
