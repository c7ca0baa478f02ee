use clap::{Parser, Subcommand};

pub struct Cli;

impl Cli {
    pub fn run(&self) -> CliProgram {
        CliProgram::parse()
    }
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliProgram {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand)]
pub enum CliCommand {
    #[command(about = "Append videos from all source playlists that the target playlist is missing")]
    Synchronize {
        #[arg(
            long,
            help = "Only print the missing video ids, do not insert anything (default: false)",
            default_value_t = false
        )]
        dry_run: bool,

        #[arg(
            long,
            value_name = "SECONDS",
            help = "Pause after each insert (default: insert_delay_secs from config, or 5)"
        )]
        delay: Option<u64>,

        #[arg(
            long,
            short,
            value_name = "FILE_PATH",
            help = "Custom path to config file"
        )]
        config: Option<String>,
    },
    #[command(about = "Prints videos present in source playlists but missing from the target")]
    Missing {
        #[arg(short, long, help = "List only video ids without decorations")]
        short: bool,

        #[arg(
            long,
            short,
            value_name = "FILE_PATH",
            help = "Custom path to config file"
        )]
        config: Option<String>,
    },
}
