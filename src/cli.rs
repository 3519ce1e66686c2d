use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the treasure hunt
#[derive(Parser, Debug)]
#[command(name = "treasure_hunt", about = "🗺️  Treasure hunt simulator")]
pub struct Args {
    /// Path to the scenario file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the final map
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Suppress per-adventurer summary lines
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_paths_are_required() {
        let args = Args::try_parse_from(["treasure_hunt", "in.txt", "out.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert!(!args.suppress_events);

        assert!(Args::try_parse_from(["treasure_hunt", "in.txt"]).is_err());
        assert!(Args::try_parse_from(["treasure_hunt", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_suppress_events_flag() {
        let args =
            Args::try_parse_from(["treasure_hunt", "--suppress-events", "in.txt", "out.txt"])
                .unwrap();
        assert!(args.suppress_events);
    }
}
