use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a tiny to-do list for your terminal"), version)]
pub struct Cli {
    /// Color theme
    #[arg(long, value_enum, default_value = "dark")]
    pub theme: ThemeChoice,

    /// Tasks to pre-populate the list with
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
}
