//! litemark CLI - restricted Markdown to HTML renderer

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use litemark::{render_many, render_with_options, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "litemark")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render restricted Markdown to HTML fragments", long_about = None)]
struct Cli {
    /// Input Markdown file ("-" or omitted reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to an HTML fragment
    Render {
        /// Input Markdown file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print render statistics as JSON
    Stats {
        /// Input Markdown file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render a Markdown file or every .md file in a directory to .html files
    Convert {
        /// Input file or directory
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct StyleArgs {
    /// Do not open links in a new tab
    #[arg(long)]
    no_new_tab: bool,

    /// Do not add loading="lazy" to images
    #[arg(long)]
    no_lazy_images: bool,

    /// Language class for fenced blocks without a tag
    #[arg(
        long,
        value_name = "LANG",
        env = "LITEMARK_CODE_LANG",
        default_value = litemark::render::DEFAULT_CODE_LANGUAGE
    )]
    code_lang: String,

    /// Normalize the source to Unicode NFC first
    #[arg(long)]
    nfc: bool,
}

impl StyleArgs {
    fn to_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_new_tab_links(!self.no_new_tab)
            .with_lazy_images(!self.no_lazy_images)
            .with_default_code_language(self.code_lang.as_str())
            .with_unicode_normalization(self.nfc)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            style,
        }) => cmd_render(input.as_deref(), output.as_deref(), &style.to_options()),
        Some(Commands::Stats {
            input,
            compact,
            style,
        }) => cmd_stats(input.as_deref(), compact, &style.to_options()),
        Some(Commands::Convert {
            input,
            output,
            style,
        }) => cmd_convert(&input, output.as_deref(), &style.to_options()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_render(cli.input.as_deref(), None, &RenderOptions::default()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn is_stdin(input: Option<&Path>) -> bool {
    input.map_or(true, |p| p == Path::new("-"))
}

fn read_source(input: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) if !is_stdin(input) => Ok(fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn cmd_render(
    input: Option<&Path>,
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = match input {
        Some(path) if !is_stdin(input) => litemark::render_file(path, options)?,
        _ => render_with_options(Some(&read_source(None)?), options),
    };

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_stats(
    input: Option<&Path>,
    compact: bool,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(input)?;
    let result = litemark::render_with_stats(Some(&source), options);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    println!("{}", litemark::render::to_json(&result, format)?);
    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_html", stem))
    });

    let (root, files) = if input.is_dir() {
        let mut files = Vec::new();
        collect_markdown(input, &mut files)?;
        files.sort();
        (input.to_path_buf(), files)
    } else {
        let root = input.parent().map(Path::to_path_buf).unwrap_or_default();
        (root, vec![input.to_path_buf()])
    };

    if files.is_empty() {
        println!("{}", "No Markdown files found".yellow());
        return Ok(());
    }
    log::debug!(
        "converting {} files into {}",
        files.len(),
        output_dir.display()
    );

    let pb = ProgressBar::new(files.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading Markdown...");
    let mut sources = Vec::with_capacity(files.len());
    for file in &files {
        sources.push(fs::read_to_string(file)?);
        pb.inc(1);
    }

    pb.set_message("Rendering...");
    let rendered = render_many(&sources, options);

    pb.set_message("Writing HTML...");
    let mut written = Vec::with_capacity(files.len());
    for (file, html) in files.iter().zip(&rendered) {
        let relative = file.strip_prefix(&root).unwrap_or(file);
        let target = output_dir.join(relative).with_extension("html");
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, html)?;
        written.push(target);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, path) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    Ok(())
}

fn collect_markdown(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_markdown(&path, files)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        {
            files.push(path);
        }
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "litemark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Restricted Markdown to HTML renderer");
    println!();
    println!("License: MIT");
}
