use anyhow::Result;
use clap::{Parser, Subcommand};
use stash_cli::{buffer_config, commands, EncodingArg};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "stash")]
#[command(about = "Stash - bundle files into one self-describing archive", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write and read integers most-significant byte first
    #[arg(long, global = true)]
    big_endian: bool,

    /// Text encoding of archive and entry names
    #[arg(long, global = true, value_enum, default_value_t = EncodingArg::Utf8)]
    encoding: EncodingArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack every file of a directory into an archive
    Pack {
        /// Input directory (not recursed)
        #[arg(short, long)]
        input: String,

        /// Output archive file
        #[arg(short, long)]
        output: String,

        /// Archive name stored in the file
        #[arg(short, long, default_value = "stash")]
        name: String,

        /// Compress the archive with zlib before writing
        #[arg(long)]
        compress: bool,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },

    /// Extract every entry of an archive into a directory
    Extract {
        /// Input archive file
        #[arg(short, long)]
        input: String,

        /// Destination directory
        #[arg(short, long)]
        output: String,

        /// Input was written with --compress
        #[arg(long)]
        compressed: bool,
    },

    /// List the entries of an archive
    List {
        /// Input archive file
        #[arg(short, long)]
        input: String,

        /// Input was written with --compress
        #[arg(long)]
        compressed: bool,

        /// Print a JSON manifest
        #[arg(long)]
        json: bool,

        /// Show the first N content bytes of each entry in hex
        #[arg(long)]
        preview: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG wins over the default level
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = buffer_config(cli.big_endian, cli.encoding);

    // Execute command
    match cli.command {
        Commands::Pack {
            input,
            output,
            name,
            compress,
            progress,
        } => commands::pack::execute(&input, &output, &name, config, compress, progress),

        Commands::Extract {
            input,
            output,
            compressed,
        } => commands::extract::execute(&input, &output, config, compressed),

        Commands::List {
            input,
            compressed,
            json,
            preview,
        } => commands::list::execute(&input, config, compressed, json, preview),
    }
}
