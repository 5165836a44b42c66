use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use rustypage::BuilderConfig;
use rustypage::editor::{EditorState, entries};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble page blocks and export static HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available block types.
    Blocks {
        /// Only show blocks matching this text.
        #[arg(long)]
        query: Option<String>,
    },
    /// Place blocks in order and print the exported HTML document.
    Export(PageArgs),
    /// Place blocks in order and print the builder view markup.
    Preview {
        #[command(flatten)]
        page: PageArgs,

        /// Print the page as it would be exported instead of the builder view.
        /// Unlike `export`, an empty page is allowed.
        #[arg(long)]
        document: bool,
    },
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Builder configuration (JSON).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Write output here instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Block types, top to bottom.
    #[arg(value_name = "BLOCK_TYPE")]
    blocks: Vec<String>,
}

fn build_page(args: &PageArgs) -> Result<EditorState> {
    let config = match &args.config {
        Some(path) => BuilderConfig::from_file(path).with_context(|| format!("Load config {}", path))?,
        None => BuilderConfig::default(),
    };
    let mut state = EditorState::new(config);
    for block_type in &args.blocks {
        state.drag_start_new(block_type.as_str().into());
        if state.drop([("type", block_type.as_str())], f32::MAX, &[]).is_none() {
            tracing::warn!(%block_type, "skipping unknown block type");
        }
    }
    Ok(state)
}

fn write_output(out: Option<&Utf8PathBuf>, text: &str) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, text).with_context(|| format!("Write {}", path)),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Blocks { query } => {
            let query = query.unwrap_or_default();
            for entry in entries().filter(|e| e.matches_query(&query)) {
                println!("{:<10} {:<10} {}", entry.block_type.as_str(), entry.display_name, entry.description);
            }
        }
        Command::Export(args) => {
            let state = build_page(&args)?;
            if state.canvas.is_empty() {
                bail!("Canvas is empty! Pass at least one known block type.");
            }
            let html = state.export()?;
            write_output(args.out.as_ref(), &html)?;
        }
        Command::Preview { page, document } => {
            let state = build_page(&page)?;
            let text = if document { state.preview() } else { state.render_view() };
            write_output(page.out.as_ref(), &text)?;
        }
    }
    Ok(())
}
