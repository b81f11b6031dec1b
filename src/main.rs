use std::fs;

use clap::Parser;
use ryx::{
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::EvalResult,
        value::Value,
    },
    run,
};

/// ryx is an easy to read, expression-oriented scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ryx to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let env = Environment::global();
    if let Err(e) = declare_demo_values(&env) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&script, &env) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Binds a few showcase constants so short scripts have something to play
/// with.
fn declare_demo_values(env: &EnvRef) -> EvalResult<()> {
    let mut scope = env.borrow_mut();

    for (name, value) in [("x", 420.0), ("y", 69.0), ("warhammer", 40000.0)] {
        scope.declare(name, Value::Number(value), true, 0)?;
    }

    Ok(())
}
