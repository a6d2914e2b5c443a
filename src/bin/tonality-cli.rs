//! CLI utility to analyze a file or a piece of text without opening the UI.

use std::path::PathBuf;

use tonality::config::{self, ServiceSettings};
use tonality::sentiment::{
    AnalysisOutcome, Language, LineResult, Sentiment, SentimentStats, decode_text,
    format_confidence, split_lines, total_caption,
};
use tonality::sentiment_api::{AnalysisClient, AnalysisRequest};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    if let Err(err) = tonality::logging::init_console() {
        eprintln!("Logging disabled: {err}");
    }
    let service = match &options.endpoint {
        Some(endpoint) => ServiceSettings::with_endpoint(endpoint.clone()),
        None => {
            config::load_or_default()
                .map_err(|err| format!("Failed to load config: {err}"))?
                .service
        }
    };
    let request = match &options.input {
        Input::File(path) => {
            let bytes = std::fs::read(path)
                .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
            let decoded = decode_text(&bytes);
            if decoded.lossy {
                eprintln!(
                    "Warning: {} is not valid UTF-8; invalid bytes were replaced",
                    path.display()
                );
            }
            let lines = split_lines(&decoded.text);
            if lines.is_empty() {
                return Err(format!("{} has no non-empty lines", path.display()));
            }
            AnalysisRequest::Lines(lines)
        }
        Input::Text(text) => AnalysisRequest::Text(text.trim().to_string()),
    };

    let client = AnalysisClient::new(service);
    let outcome = client.analyze(&request).map_err(|err| err.to_string())?;
    match outcome {
        AnalysisOutcome::Lines(results) => print_lines(&results, options.language),
        AnalysisOutcome::Text(result) => println!(
            "{} {}",
            result.sentiment.label(options.language),
            format_confidence(result.confidence)
        ),
    }
    Ok(())
}

fn print_lines(results: &[LineResult], language: Language) {
    let label_width = Sentiment::ALL
        .iter()
        .map(|sentiment| sentiment.label(language).chars().count())
        .max()
        .unwrap_or(0);
    for (index, result) in results.iter().enumerate() {
        let label = result.sentiment.label(language);
        let padding = label_width.saturating_sub(label.chars().count());
        println!(
            "{:>4}  {label}{:padding$}  {:>4}  {}",
            index + 1,
            "",
            format_confidence(result.confidence),
            result.line,
        );
    }
    let stats = SentimentStats::from_results(results);
    println!();
    println!("{}: {}", total_caption(language), stats.total);
    for sentiment in Sentiment::ALL {
        println!(
            "{}: {}",
            sentiment.count_caption(language),
            stats.count(sentiment)
        );
    }
}

#[derive(Debug, PartialEq)]
enum Input {
    File(PathBuf),
    Text(String),
}

#[derive(Debug, PartialEq)]
struct Options {
    input: Input,
    endpoint: Option<String>,
    language: Language,
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut input = None;
    let mut endpoint = None;
    let mut language = Language::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--file" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--file requires a value".to_string())?;
                set_input(&mut input, Input::File(PathBuf::from(value)))?;
            }
            "--text" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--text requires a value".to_string())?;
                if value.trim().is_empty() {
                    return Err("--text must not be empty".to_string());
                }
                set_input(&mut input, Input::Text(value.to_string()))?;
            }
            "--endpoint" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--endpoint requires a value".to_string())?;
                endpoint = Some(value.to_string());
            }
            "--language" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--language requires a value".to_string())?;
                language = value.parse()?;
            }
            unknown => {
                return Err(format!("Unknown argument: {unknown}\n\n{}", help_text()));
            }
        }
        idx += 1;
    }
    let input = input.ok_or_else(|| format!("--file or --text is required\n\n{}", help_text()))?;
    Ok(Some(Options {
        input,
        endpoint,
        language,
    }))
}

fn set_input(slot: &mut Option<Input>, input: Input) -> Result<(), String> {
    if slot.is_some() {
        return Err("Use only one of --file or --text".to_string());
    }
    *slot = Some(input);
    Ok(())
}

fn help_text() -> String {
    [
        "tonality-cli",
        "",
        "Sends a file (line by line) or a text to the sentiment service and prints the result.",
        "",
        "Usage:",
        "  tonality-cli --file <path> [--endpoint <url>] [--language en|ru]",
        "  tonality-cli --text <text> [--endpoint <url>] [--language en|ru]",
        "",
        "Options:",
        "  --file <path>      Analyze each non-empty line of the file.",
        "  --text <text>      Analyze the text as a whole.",
        "  --endpoint <url>   Post to this URL instead of the configured service.",
        "  --language <lang>  Label language: en (default) or ru.",
    ]
    .join("\n")
}
