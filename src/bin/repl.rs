use log::{error, warn};
use predictext::{EngineConfig, PredictiveText};
use std::{
    env,
    io::{self, Write},
    path::Path,
};

const DEFAULT_MODEL: &str = "learned_model.txt";
const MAX_SUGGESTIONS: usize = 8;

fn print_help() {
    println!("Commands:");
    println!("  <prefix>           autocomplete suggestions");
    println!("  select <word>      learn from a word choice");
    println!("  correct <word>     auto-correct a word");
    println!("  predict <context>  predict the next word");
    println!("  train <text>       learn every word of a text");
    println!("  stats              show vocabulary statistics");
    println!("  save [path] / load [path]");
    println!("  quit");
}

fn run_command(engine: &mut PredictiveText, input: &str) {
    let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
    let rest = rest.trim();

    match command {
        "stats" => {
            let stats = engine.stats();
            println!("Total unique words: {}", stats.words);
            println!("Total usage frequency: {}", stats.total_frequency);
            println!("Average usage per word: {:.2}", stats.average_frequency());
        }
        "save" => {
            let path = if rest.is_empty() { DEFAULT_MODEL } else { rest };
            match engine.save(path) {
                Ok(n) => println!("Model saved to {} ({} words)", path, n),
                Err(e) => error!("{}", e),
            }
        }
        "load" => {
            let path = if rest.is_empty() { DEFAULT_MODEL } else { rest };
            match engine.load(path) {
                Ok(n) => println!("Model loaded from {} ({} words)", path, n),
                Err(e) => error!("{}", e),
            }
        }
        "select" if !rest.is_empty() => {
            engine.select(rest);
            println!("Learning: increased priority for '{}'", rest);
        }
        "correct" if !rest.is_empty() => {
            let corrected = engine.correct(rest);
            println!("Auto-correction: '{}' -> '{}'", rest, corrected);
            if corrected != rest {
                engine.select(&corrected);
            }
        }
        "predict" if !rest.is_empty() => {
            let predictions = engine.predict_next(rest);
            if predictions.is_empty() {
                println!("No predictions available");
            } else {
                println!("Next word for '{}': {}", rest, predictions.join(", "));
            }
        }
        "train" if !rest.is_empty() => {
            let n = engine.train(rest);
            println!("Trained on {} words", n);
        }
        "help" => print_help(),
        _ => {
            let suggestions = engine.suggest(input, MAX_SUGGESTIONS);
            if suggestions.is_empty() {
                println!("No suggestions found for '{}'", input);
                let corrected = engine.correct(input);
                if corrected != input {
                    println!("Did you mean: '{}'?", corrected);
                }
            } else {
                println!("Suggestions for '{}': {}", input, suggestions.join(", "));
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => EngineConfig::from_json_file(Path::new(&path)).unwrap_or_else(|e| {
            warn!("{}; using default settings", e);
            EngineConfig::default()
        }),
        None => EngineConfig::default(),
    };
    let mut engine = PredictiveText::new(config);

    println!("Predictive text REPL - {} words loaded", engine.stats().words);
    print_help();

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == ":q" {
            break;
        }
        run_command(&mut engine, line);
    }
    Ok(())
}
