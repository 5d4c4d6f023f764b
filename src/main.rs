//! aspira - render text onto a square SVG share card

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;

use aspira::{
    CardConfig, CardRenderer, CardRequest, DecorationStyle, Error, ErrorPayload, RenderedCard,
};

#[derive(Parser)]
#[command(name = "aspira")]
#[command(version, about = "Render text onto a square SVG share card", long_about = None)]
#[command(after_help = "EXAMPLES:
    aspira \"Aku ingin jadi dokter\" -o card.svg    Render text to a file
    aspira -f note.txt -s minimal                  Read text from a file
    echo \"Hi\" | aspira - --layout                 Print layout as JSON")]
struct Cli {
    /// Text to render, or `-` to read stdin
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,

    /// Output SVG file (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Decoration set: playful, minimal or plain
    #[arg(short, long, default_value = "playful")]
    style: DecorationStyle,

    /// JSON config file overriding canvas and typography settings
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<String>,

    /// Creation timestamp shown on the card
    #[arg(long, value_name = "TIMESTAMP")]
    created_at: Option<String>,

    /// Print the computed layout as JSON instead of the SVG
    #[arg(long)]
    layout: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let payload = ErrorPayload::from(&e);
            match serde_json::to_string(&payload) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => CardConfig::load(path)?,
        None => CardConfig::default(),
    };
    let renderer = CardRenderer::new().with_config(config).with_style(cli.style);

    let request = CardRequest {
        content: read_content(cli)?,
        created_at: cli.created_at.clone(),
    };
    let card = renderer.render(&request)?;

    if cli.layout {
        println!("{}", serde_json::to_string_pretty(&card)?);
        return Ok(());
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, &card.document)?;
            if !cli.quiet {
                print_summary(path, &card);
            }
        }
        None => print!("{}", card.document),
    }

    Ok(())
}

fn read_content(cli: &Cli) -> Result<Option<String>, Error> {
    if let Some(path) = &cli.file {
        return Ok(Some(fs::read_to_string(path)?));
    }
    match cli.text.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(Some(buf))
        }
        Some(text) => Ok(Some(text.to_string())),
        None => Ok(None),
    }
}

fn print_summary(path: &str, card: &RenderedCard) {
    eprintln!("Wrote: {path}");
    eprintln!("Font size: {}", card.font_size);
    eprintln!(
        "Lines: {}{}",
        card.lines.len(),
        if card.truncated { " (truncated)" } else { "" }
    );
}
