// CLI argument definitions using clap

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "teeprint")]
#[command(author = "hatlonely <hatlonely@foxmail.com>")]
#[command(version = "0.1.0")]
#[command(about = "Print messages to stdout and tee them into a log file", long_about = None)]
pub struct Cli {
    /// Messages to print (reads lines from stdin when omitted)
    pub messages: Vec<String>,

    /// Path to a log sink config file (.json/.json5/.yaml/.yml/.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log file path, overrides the destination from the config file
    #[arg(short, long)]
    pub log_file: Option<String>,

    /// Truncate the log file instead of appending
    #[arg(long)]
    pub truncate: bool,

    /// Do not flush the log file after every message
    #[arg(long)]
    pub no_log_flush: bool,

    /// Flush stdout after every message
    #[arg(long)]
    pub flush: bool,

    /// Terminator written to stdout after each message (default: newline)
    #[arg(long, default_value = "\n")]
    pub end: String,
}
