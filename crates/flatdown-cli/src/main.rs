//! Flatdown CLI - Parse flatdown documents into flat element sequences
//!
//! Usage:
//!   fdcli [OPTIONS] <FILE>
//!
//! Commands:
//!   parse     Parse and display the element sequence (default)
//!   stats     Show document statistics

use std::env;
use std::fs;
use std::process;

use flatdown_core::{parse_markdown_elements, Element, Tag, TagStyle};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    let elements = parse_markdown_elements(&input);

    match config.command {
        Command::Parse => cmd_parse(&elements, &config),
        Command::Stats => cmd_stats(&elements, &input),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Parse,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Parse;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("fdcli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "parse" => command = Command::Parse,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        format,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        r#"fdcli - flatdown document parser

USAGE:
    fdcli [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    parse       Parse and display the element sequence (default)
    stats       Show document statistics

OPTIONS:
    -v, --verbose    Show tag-level detail for each element
    -j, --json       Output in JSON format
    -h, --help       Print help information
    -V, --version    Print version information

EXAMPLES:
    fdcli notes.md           Parse a document
    fdcli -v notes.md        Parse with tag-level output
    fdcli -j notes.md        Output the element sequence as JSON
    fdcli stats notes.md     Show document statistics
"#
    );
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(elements: &[Element], config: &Config) -> Result<(), String> {
    match config.format {
        OutputFormat::Json => print_json(elements),
        OutputFormat::Text => {
            println!("Elements: {}", elements.len());
            for (i, element) in elements.iter().enumerate() {
                println!("  [{}] {}", i + 1, describe_element(element));
                if config.verbose {
                    for tag in element.tags() {
                        println!("        {:?} {:?} ({})", tag.style, tag.content, tag.id);
                    }
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(elements: &[Element], input: &str) -> Result<(), String> {
    let stats = DocumentStats::from_elements(elements, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Elements:");
    println!("  Total:        {}", elements.len());
    println!("  Headings:     {}", stats.headings);
    println!("  Paragraphs:   {}", stats.paragraphs);
    println!("  Breaks:       {}", stats.breaks);
    println!();
    println!("Tags:");
    println!("  Total:        {}", stats.tags);
    println!("  Plain:        {}", stats.plain);
    println!("  Bold:         {}", stats.bold);
    println!("  Italic:       {}", stats.italic);
    println!();
    println!("Size:");
    println!("  Characters:   {}", stats.chars);
    println!("  Words (est.): {}", stats.words);
    println!("  Lines:        {}", stats.lines);

    Ok(())
}

struct DocumentStats {
    headings: usize,
    paragraphs: usize,
    breaks: usize,
    tags: usize,
    plain: usize,
    bold: usize,
    italic: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_elements(elements: &[Element], input: &str) -> Self {
        let mut stats = Self {
            headings: 0,
            paragraphs: 0,
            breaks: 0,
            tags: 0,
            plain: 0,
            bold: 0,
            italic: 0,
            chars: input.len(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
        };

        for element in elements {
            match element {
                Element::Heading(_) => stats.headings += 1,
                Element::Paragraph(_) => stats.paragraphs += 1,
                Element::Break(_) => stats.breaks += 1,
            }
            for tag in element.tags() {
                stats.tags += 1;
                match tag.style {
                    TagStyle::Plain => stats.plain += 1,
                    TagStyle::Bold => stats.bold += 1,
                    TagStyle::Italic => stats.italic += 1,
                }
            }
        }

        stats
    }
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonElement<'a> {
    Heading {
        level: usize,
        tags: Vec<JsonTag<'a>>,
        id: String,
    },
    Paragraph {
        tags: Vec<JsonTag<'a>>,
        id: String,
    },
    Break {
        id: String,
    },
}

#[derive(Serialize)]
struct JsonTag<'a> {
    style: &'static str,
    content: &'a str,
    id: String,
}

fn print_json(elements: &[Element]) {
    let json: Vec<JsonElement> = elements.iter().map(convert_element).collect();
    println!("{}", serde_json::to_string_pretty(&json).unwrap());
}

fn convert_element<'a>(element: &'a Element) -> JsonElement<'a> {
    match element {
        Element::Heading(h) => JsonElement::Heading {
            level: h.level,
            tags: h.tags.iter().map(convert_tag).collect(),
            id: h.id.to_string(),
        },
        Element::Paragraph(p) => JsonElement::Paragraph {
            tags: p.tags.iter().map(convert_tag).collect(),
            id: p.id.to_string(),
        },
        Element::Break(b) => JsonElement::Break {
            id: b.id.to_string(),
        },
    }
}

fn convert_tag<'a>(tag: &'a Tag) -> JsonTag<'a> {
    JsonTag {
        style: match tag.style {
            TagStyle::Plain => "plain",
            TagStyle::Bold => "bold",
            TagStyle::Italic => "italic",
        },
        content: &tag.content,
        id: tag.id.to_string(),
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn describe_element(element: &Element) -> String {
    match element {
        Element::Heading(h) => format!("Heading (level {}): {}", h.level, format_tags(&h.tags)),
        Element::Paragraph(p) => format!("Paragraph: {}", format_tags(&p.tags)),
        Element::Break(_) => "Break".to_string(),
    }
}

fn format_tags(tags: &[Tag]) -> String {
    let mut result = String::new();
    for tag in tags {
        match tag.style {
            TagStyle::Plain => result.push_str(&tag.content),
            TagStyle::Bold => {
                result.push_str("**");
                result.push_str(&tag.content);
                result.push_str("**");
            }
            TagStyle::Italic => {
                result.push('_');
                result.push_str(&tag.content);
                result.push('_');
            }
        }
    }
    result
}
