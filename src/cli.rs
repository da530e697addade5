// src/cli.rs
use clap::Parser;

/// Command line options for the sensor grid editor.
#[derive(Parser, Debug)]
#[command(name = "sensorgrid")]
#[command(about = "Editor for a 2D grid of sensor values with neighbor-averaging interpolation", long_about = None)]
pub struct Cli {
    /// Number of sensor rows in the grid
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: u16,

    /// Number of sensor columns in the grid
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: u16,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 960.0)]
    pub width: f32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 540.0)]
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_layout() {
        let cli = Cli::parse_from(["sensorgrid"]);
        assert_eq!(cli.rows, 6);
        assert_eq!(cli.columns, 6);
        assert_eq!(cli.width, 960.0);
        assert_eq!(cli.height, 540.0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Cli::try_parse_from(["sensorgrid", "--rows", "0"]).is_err());
        assert!(Cli::try_parse_from(["sensorgrid", "--columns", "0"]).is_err());
        assert!(Cli::try_parse_from(["sensorgrid", "--rows", "4", "--columns", "3"]).is_ok());
    }
}
