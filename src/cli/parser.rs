use clap::{Parser, Subcommand};

/// Command-line interface definition for rworklog
/// Terminal work clock: time tasks and write a daily markdown log
#[derive(Parser, Debug)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal work clock: time each task with an ASCII clock and save the day's log as markdown",
    long_about = None
)]
pub struct Cli {
    /// Project name used in the log file name and its front matter
    #[arg(global = true, long = "project", value_name = "NAME")]
    pub project: Option<String>,

    /// Override the directory the daily log is written to
    #[arg(global = true, long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<String>,

    /// Clock refresh interval in milliseconds (useful for tests)
    #[arg(global = true, long = "tick-ms", hide = true)]
    pub tick_ms: Option<u64>,

    /// Without a command, start tracking tasks
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
