//! Command-line flags.
//!
//! Every flag is optional at parse time so values can also come from the
//! config file or the environment. Required values are checked after merging
//! (see [`Config::missing_required`](crate::config::Config::missing_required)).

use std::path::PathBuf;

use clap::Parser;

/// Flash Milight bulbs when a Pushbullet notification arrives.
#[derive(Debug, Parser)]
#[command(name = "pushlightd", version, about)]
pub struct Cli {
    /// Pushbullet API key
    #[arg(short = 'p', long = "pushbullet", value_name = "APIKEY")]
    pub api_key: Option<String>,

    /// Milight bridge IP address
    #[arg(short = 'm', long = "milight", value_name = "IPADDR")]
    pub milight_host: Option<String>,

    /// Milight group (0 for all groups)
    #[arg(short = 'g', long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub group: Option<u8>,

    /// Enabled only after this hour
    #[arg(short = 's', long, value_parser = clap::value_parser!(u8).range(0..=23))]
    pub start_hour: Option<u8>,

    /// Enabled only before this hour
    #[arg(short = 'e', long, value_parser = clap::value_parser!(u8).range(0..=23))]
    pub end_hour: Option<u8>,

    /// State file location (0 - enabled, 1 - disabled)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// How many seconds to wait after one blink
    #[arg(short = 'r', long, value_name = "SECONDS")]
    pub grace_period: Option<u64>,

    /// Color (0-255) 0 is purple, 27 is red, 186 is blue
    #[arg(short = 'c', long)]
    pub color: Option<u8>,

    /// Configuration file
    #[arg(long, value_name = "PATH", default_value = "pushlight.toml")]
    pub config: PathBuf,

    /// Drive a simulated bulb instead of the Milight bridge
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn should_have_consistent_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn should_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "pushlightd", "-p", "o.key", "-m", "192.168.1.40", "-g", "2", "-s", "8", "-e", "22",
            "-f", "/tmp/state", "-r", "30", "-c", "186",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("o.key"));
        assert_eq!(cli.milight_host.as_deref(), Some("192.168.1.40"));
        assert_eq!(cli.group, Some(2));
        assert_eq!(cli.start_hour, Some(8));
        assert_eq!(cli.end_hour, Some(22));
        assert_eq!(cli.state_file, Some(PathBuf::from("/tmp/state")));
        assert_eq!(cli.grace_period, Some(30));
        assert_eq!(cli.color, Some(186));
        assert!(!cli.dry_run);
    }

    #[test]
    fn should_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "pushlightd",
            "--pushbullet",
            "o.key",
            "--milight",
            "bridge.lan",
            "--state-file",
            "/run/state",
            "--grace-period",
            "5",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.milight_host.as_deref(), Some("bridge.lan"));
        assert_eq!(cli.grace_period, Some(5));
        assert!(cli.dry_run);
        assert_eq!(cli.config, PathBuf::from("pushlight.toml"));
    }

    #[test]
    fn should_reject_hour_out_of_range() {
        assert!(Cli::try_parse_from(["pushlightd", "-s", "24"]).is_err());
    }

    #[test]
    fn should_reject_group_out_of_range() {
        assert!(Cli::try_parse_from(["pushlightd", "-g", "5"]).is_err());
    }

    #[test]
    fn should_reject_color_above_255() {
        assert!(Cli::try_parse_from(["pushlightd", "-c", "256"]).is_err());
    }
}
