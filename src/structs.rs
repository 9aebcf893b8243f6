use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
}
