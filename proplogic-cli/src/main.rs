use std::env;
use std::fs;
use std::io::{self, Read, Write};

use anyhow::{bail, Error};
use clap::{values_t, App, AppSettings, Arg, ArgMatches};
use env_logger::{fmt, Builder, Target};
use log::{error, info};
use log::{Level, LevelFilter, Record};

use proplogic::config::{WalkSatConfig, WalkSatConfigUpdate};
use proplogic::dimacs::write_dimacs;
use proplogic::{cnf, dpll, entails, find_model_with, Algorithm, Expr, KnowledgeBase, Model};

mod input;

fn main() {
    let exit_code = match main_with_err() {
        Err(err) => {
            error!("{:#}", err);
            1
        }
        Ok(exit_code) => exit_code,
    };
    std::process::exit(exit_code);
}

fn init_logging() {
    let format = |buf: &mut fmt::Formatter, record: &Record| {
        if record.level() == Level::Info {
            writeln!(buf, "c {}", record.args())
        } else {
            writeln!(buf, "c {}: {}", record.level(), record.args())
        }
    };

    let mut builder = Builder::new();
    builder
        .target(Target::Stdout)
        .format(format)
        .filter(None, LevelFilter::Info);

    if let Ok(ref env_var) = env::var("PROPLOGIC_LOG") {
        builder.parse_filters(env_var);
    }

    builder.init();
}

fn banner() {
    info!("This is proplogic {}", env!("PROPLOGIC_VERSION"));
    info!(
        "  {} build - {}",
        env!("PROPLOGIC_PROFILE"),
        env!("PROPLOGIC_RUSTC_VERSION")
    );
}

fn main_with_err() -> Result<i32, Error> {
    let matches = App::new("proplogic")
        .version(env!("PROPLOGIC_VERSION"))
        .setting(AppSettings::DisableHelpSubcommand)
        .arg_from_usage("[INPUT] 'The knowledge base, one sentence per line (stdin if omitted)'")
        .arg_from_usage(
            "[query] --query=[SENTENCE] 'Decide whether the knowledge base entails this sentence'",
        )
        .arg(
            Arg::from_usage(
                "[algorithm] --algorithm=[ALGORITHM] 'Algorithm to use (default: tt with a \
                 query, dpll without)'",
            )
            .possible_values(&["tt", "resolution", "fc", "dpll", "walksat"])
            .case_insensitive(true),
        )
        .arg_from_usage("[config-file] --config=[FILE] 'Read parameters from configuration file'")
        .arg(
            Arg::from_usage("[config-option] -C --config-option")
                .value_name("OPTION>=<VALUE")
                .help(
                    "Specify a single config option, see 'proplogic -C help' for a list of \
                     options.",
                )
                .multiple(true)
                .number_of_values(1),
        )
        .arg_from_usage(
            "[dimacs-file] --dimacs=[FILE] 'Write the knowledge base as DIMACS CNF to the \
             specified file'",
        )
        .get_matches();

    if values_t!(matches, "config-option", String)
        .unwrap_or(vec![])
        .iter()
        .any(|option| option == "help")
    {
        print!("{}", WalkSatConfig::help());
        return Ok(0);
    }

    init_logging();
    banner();

    let config = read_config(&matches)?;

    let mut contents = String::new();
    match matches.value_of("INPUT") {
        Some(path) => {
            info!("Reading file '{}'", path);
            fs::File::open(path)?.read_to_string(&mut contents)?;
        }
        None => {
            info!("Reading from stdin");
            io::stdin().lock().read_to_string(&mut contents)?;
        }
    }

    let kb = input::read_kb(&contents)?;
    info!("Read {} sentences", kb.len());

    if let Some(path) = matches.value_of("dimacs-file") {
        let sentence = kb.as_single_sentence().unwrap_or(Expr::True);
        let clauses = cnf::clauses(&sentence);
        info!("Writing {} clauses to file '{}'", clauses.len(), path);
        let mut target = io::BufWriter::new(fs::File::create(path)?);
        write_dimacs(&mut target, &clauses)?;
        target.flush()?;
    }

    let algorithm = matches
        .value_of("algorithm")
        .map(|name| name.to_ascii_lowercase());

    match matches.value_of("query") {
        Some(query) => decide_entailment(&kb, query, algorithm.as_deref().unwrap_or("tt")),
        None => decide_satisfiability(&kb, algorithm.as_deref().unwrap_or("dpll"), &config),
    }
}

fn read_config(matches: &ArgMatches) -> Result<WalkSatConfig, Error> {
    let mut config_update = WalkSatConfigUpdate::new();

    if let Some(config_path) = matches.value_of("config-file") {
        let mut config_contents = String::new();
        fs::File::open(config_path)?.read_to_string(&mut config_contents)?;

        config_update.merge(toml::from_str(&config_contents)?);
    }

    for config_option in values_t!(matches, "config-option", String).unwrap_or(vec![]) {
        config_update.merge(toml::from_str(&config_option)?);
    }

    let mut config = WalkSatConfig::default();
    config.apply(&config_update)?;
    Ok(config)
}

fn decide_entailment(kb: &KnowledgeBase, query: &str, algorithm: &str) -> Result<i32, Error> {
    if algorithm == "walksat" {
        bail!("WalkSAT cannot decide entailment, use one of tt, resolution, fc or dpll");
    }
    let algorithm: Algorithm = algorithm.parse()?;

    info!("Deciding entailment of '{}' using {}", query, algorithm);

    if entails(kb, query, algorithm)? {
        println!("s ENTAILED");
        Ok(10)
    } else {
        println!("s NOT ENTAILED");
        Ok(20)
    }
}

fn decide_satisfiability(
    kb: &KnowledgeBase,
    algorithm: &str,
    config: &WalkSatConfig,
) -> Result<i32, Error> {
    let sentence = kb.as_single_sentence().unwrap_or(Expr::True);

    let model = match algorithm {
        "dpll" => match dpll::dpll(&sentence) {
            Some(model) => model,
            None => {
                println!("s UNSATISFIABLE");
                return Ok(20);
            }
        },
        "walksat" => {
            info!(
                "Searching a model with at most {} flips",
                config.max_flips
            );
            match find_model_with(&sentence, config)? {
                Some(model) => model,
                None => {
                    println!("s UNKNOWN");
                    return Ok(0);
                }
            }
        }
        _ => bail!(
            "Satisfiability needs dpll or walksat, use --query to decide entailment with {}",
            algorithm
        ),
    };

    println!("s SATISFIABLE");
    println!("v{}", model_line(&model));
    Ok(10)
}

/// Assigned literals in name order, negated variables prefixed with `-`.
fn model_line(model: &Model) -> String {
    let mut line = String::new();
    for lit in model.lits() {
        line.push(' ');
        if lit.is_negative() {
            line.push('-');
        }
        line.push_str(lit.var().name());
    }
    line
}
