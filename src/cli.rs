// CLI definitions using clap

use clap::{Parser, Subcommand};
use keybridge::{Chip, Target};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keybridge")]
#[command(author, version, about = "Drive a vintage computer's keyboard matrix from a modern keyboard")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path (default: ~/.config/keybridge/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forward key events from a local keyboard to the adapter
    #[command(visible_alias = "c")]
    Capture {
        /// Serial port of the adapter
        #[arg(short, long)]
        port: Option<String>,

        /// Keyboard event device (default: first keyboard found)
        #[arg(short, long)]
        device: Option<PathBuf>,

        /// Grab the keyboard exclusively while capturing
        #[arg(long)]
        grab: bool,

        /// Reset the adapter before forwarding
        #[arg(long)]
        reset: bool,
    },

    /// Open all keys on the adapter
    Reset {
        /// Serial port of the adapter
        #[arg(short, long)]
        port: Option<String>,
    },

    /// Feed recorded wire bytes into a simulated adapter and show the result
    Replay {
        /// File with wire bytes (default: stdin)
        file: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        target: Option<Target>,

        #[arg(long, value_enum)]
        chip: Option<Chip>,

        /// Print the matrix after every event
        #[arg(long)]
        steps: bool,
    },

    /// Show a target's key map
    #[command(visible_alias = "map")]
    Layout {
        #[arg(short, long, value_enum)]
        target: Option<Target>,

        /// Also list unassigned input codes
        #[arg(long)]
        all: bool,
    },

    /// List input devices that report key events
    #[command(visible_alias = "list")]
    Devices,
}
