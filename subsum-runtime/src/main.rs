use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use serde_json::{Map, Value};
use std::{cell::RefCell, fs, io::Read, path::PathBuf};
use subsum_algorithms::subset_sum::{get_algorithm, get_algorithm_help};
use subsum_challenges::c001;
use subsum_structs::core::{BenchmarkSettings, OutputData};
use subsum_utils::{compress_obj, dejsonify, format_plain_output, jsonify, parse_plain_input};

const DEFAULT_ALGORITHM: &str = "memo_branch_bound";

fn cli() -> Command {
    Command::new("subsum-runtime")
        .about("Computes or verifies subset-sum selections")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Reads capacity, item count and sorted weights; prints the selected item indices")
                .arg(
                    arg!([INPUT] "Path to the input file, or '-' for stdin")
                        .default_value("-")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Algorithm hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("help_algorithm")
                .about("Describes an algorithm and its hyperparameters")
                .arg(
                    arg!([ALGORITHM] "Algorithm name or alias")
                        .default_value(DEFAULT_ALGORITHM)
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate_instance")
                .about("Prints the challenge instance for the given settings")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RAND_HASH> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NONCE> "Nonce value").value_parser(clap::value_parser!(u64))),
        )
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a solution")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RAND_HASH> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NONCE> "Nonce value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Overrides the hyperparameters in the settings")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the output data will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RAND_HASH> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NONCE> "Nonce value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
        ),
        Some(("help_algorithm", sub_m)) => {
            help_algorithm(sub_m.get_one::<String>("ALGORITHM").unwrap().clone())
        }
        Some(("generate_instance", sub_m)) => generate_instance(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("RAND_HASH").unwrap().clone(),
            *sub_m.get_one::<u64>("NONCE").unwrap(),
        ),
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("RAND_HASH").unwrap().clone(),
            *sub_m.get_one::<u64>("NONCE").unwrap(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("RAND_HASH").unwrap().clone(),
            *sub_m.get_one::<u64>("NONCE").unwrap(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn solve(input: String, hyperparameters: Option<String>) -> Result<()> {
    let plain = parse_plain_input(&read_input(&input)?)?;
    let challenge = c001::Challenge::new(plain.capacity, plain.weights)?;
    let hyperparameters = hyperparameters
        .map(|h| load_json_object(&h, "hyperparameters"))
        .transpose()?;

    let solution = run_algorithm(DEFAULT_ALGORITHM, &challenge, &hyperparameters)?;
    print!("{}", format_plain_output(&solution.items));
    Ok(())
}

pub fn help_algorithm(algorithm_id: String) -> Result<()> {
    let help = get_algorithm_help(&algorithm_id)
        .ok_or_else(|| anyhow!("Unknown algorithm '{}'", algorithm_id))?;
    help();
    Ok(())
}

pub fn generate_instance(settings: String, rand_hash: String, nonce: u64) -> Result<()> {
    let settings = load_settings(&settings)?;
    let challenge = load_challenge(&settings, &rand_hash, nonce)?;
    println!("{}", jsonify(&challenge));
    Ok(())
}

pub fn compute_solution(
    settings: String,
    rand_hash: String,
    nonce: u64,
    hyperparameters: Option<String>,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let settings = load_settings(&settings)?;
    let challenge = load_challenge(&settings, &rand_hash, nonce)?;
    let hyperparameters = match hyperparameters {
        Some(h) => Some(load_json_object(&h, "hyperparameters")?),
        None => settings.hyperparameters.clone(),
    };

    let solution = run_algorithm(&settings.algorithm_id, &challenge, &hyperparameters)?;
    let total_weight = challenge.evaluate_total_weight(&solution)?;
    let output_data = OutputData {
        nonce,
        total_weight,
        solution: serde_json::to_value(&solution)?
            .as_object()
            .cloned()
            .ok_or_else(|| anyhow!("Solution did not serialize to a json object"))?,
    };

    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&output_data)?)?;
        } else {
            fs::write(&path, jsonify(&output_data))?;
        }
        println!("output_data written to: {:?}", path);
    } else {
        println!("{}", jsonify(&output_data));
    }
    Ok(())
}

pub fn verify_solution(
    settings: String,
    rand_hash: String,
    nonce: u64,
    solution: String,
) -> Result<()> {
    let settings = load_settings(&settings)?;
    let challenge = load_challenge(&settings, &rand_hash, nonce)?;
    let solution = c001::Solution::try_from(load_json_object(&solution, "solution")?)
        .map_err(|_| anyhow!("Invalid solution. Cannot convert to c001::Solution"))?;

    challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid");
    Ok(())
}

fn run_algorithm(
    algorithm_id: &str,
    challenge: &c001::Challenge,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<c001::Solution> {
    let solve_challenge = get_algorithm(algorithm_id)
        .ok_or_else(|| anyhow!("Unknown algorithm '{}'", algorithm_id))?;

    let solution = RefCell::new(None);
    let save_solution = |s: &c001::Solution| -> Result<()> {
        *solution.borrow_mut() = Some(s.clone());
        Ok(())
    };
    solve_challenge(challenge, &save_solution, hyperparameters)?;
    solution
        .into_inner()
        .ok_or_else(|| anyhow!("No solution found"))
}

fn load_challenge(
    settings: &BenchmarkSettings,
    rand_hash: &String,
    nonce: u64,
) -> Result<c001::Challenge> {
    if settings.challenge_id != "c001" {
        return Err(anyhow!("Unsupported challenge '{}'", settings.challenge_id));
    }
    let difficulty = c001::Difficulty::try_from(settings.difficulty.clone())?;
    let seed = settings.calc_seed(rand_hash, nonce);
    c001::Challenge::generate_instance(&seed, &difficulty)
}

fn load_settings(settings: &str) -> Result<BenchmarkSettings> {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings)
            .map_err(|e| anyhow!("Failed to read settings file {}: {}", settings, e))?
    } else {
        settings.to_string()
    };

    dejsonify::<BenchmarkSettings>(&settings)
        .map_err(|e| anyhow!("Failed to parse settings: {}", e))
}

/// Accepts a literal json object, a path ending in `.json`, or `-` for stdin.
fn load_json_object(source: &str, what: &str) -> Result<Map<String, Value>> {
    let json = if source == "-" || source.ends_with(".json") {
        read_input(source)?
    } else {
        source.to_string()
    };

    dejsonify::<Map<String, Value>>(&json).map_err(|e| anyhow!("Failed to parse {}: {}", what, e))
}

fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else {
        fs::read_to_string(source).map_err(|e| anyhow!("Failed to read file {}: {}", source, e))
    }
}
