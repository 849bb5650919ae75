use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "terminal-rain",
    version,
    about = "Animated terminal rainstorm with branching lightning"
)]
pub struct Cli {
    /// Rain color name (black, red, green, yellow, blue, magenta, cyan, white)
    #[arg(long = "rc", value_name = "COLOR", default_value = "cyan")]
    pub rain_color: String,

    /// Lightning color name (same palette as --rc)
    #[arg(long = "lc", value_name = "COLOR", default_value = "yellow")]
    pub lightning_color: String,

    /// Heavier, faster rain plus lightning bolts
    #[arg(long)]
    pub thunder: bool,
}
