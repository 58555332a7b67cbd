extern crate lispy;

use clap::{Arg, Command};
use lispy::{Interpreter, LispError};
use std::process::exit;

fn main() {
    let args = Command::new("lispy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A small lisp interpreter")
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .takes_value(true)
            .value_name("FILE")
            .help("Run each line of FILE instead of starting the prompt"))
        .get_matches();

    let lisp = Interpreter::new();
    let outcome = match args.get_one::<String>("input") {
        Some(path) => run_file(&lisp, path),
        None => repl(&lisp),
    };
    if let Err(e) = outcome {
        eprintln!("{}", e);
        exit(1);
    }
}

fn run_file(lisp: &Interpreter, path: &str) -> Result<(), String> {
    let source = std::fs::read_to_string(path)
        .map_err(|_| format!("No input file found with name '{}'", path))?;
    lisp.run_script(&source).for_each(report);
    Ok(())
}

fn repl(lisp: &Interpreter) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("lispy> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                report(lisp.interpret(&line));
            }
        }
    }
}

fn report(result: Result<Option<String>, LispError>) {
    match result {
        Ok(Some(out)) => println!("{}", out),
        Ok(None) => (),
        Err(e) => eprintln!("Error: {}", e),
    }
}
