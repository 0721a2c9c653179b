use std::path::PathBuf;

use clap::{value_parser, Parser};
use pa_types::Cost;
use serde::{Deserialize, Serialize};

use crate::{
    config::{ConfigError, EngineConfig},
    generate::GenerateArgs,
    operation::EditOp,
};

#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// The starting word. Without words, a list of sample pairs is computed.
    #[clap(requires = "target")]
    pub start: Option<String>,

    /// The target word.
    pub target: Option<String>,

    #[clap(flatten)]
    pub engine: EngineArgs,

    #[clap(flatten)]
    pub generate: GenerateArgs,

    /// Print the applied operations.
    #[clap(long)]
    pub ops: bool,

    /// Print the run-length encoded edit script.
    #[clap(long)]
    pub script: bool,

    /// Print the operation matrix.
    #[clap(long)]
    pub op_matrix: bool,

    /// Only print the distance.
    #[clap(short, long)]
    pub silent: bool,

    /// Log more. Pass twice for trace output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Options for the engine. Command line flags override the config file.
#[derive(Parser, Serialize, Deserialize, Debug, Default)]
#[clap(next_help_heading = "Engine")]
pub struct EngineArgs {
    /// JSON file with an `EngineConfig`.
    #[clap(long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub config: Option<PathBuf>,

    /// Disable the twiddle (adjacent swap) operation.
    #[clap(long, display_order = 2)]
    pub no_twiddle: bool,

    /// Disable the kill (truncate) operation.
    #[clap(long, display_order = 3)]
    pub no_kill: bool,

    #[clap(long, value_name = "COST", hide_short_help = true)]
    pub copy_cost: Option<Cost>,
    #[clap(long, value_name = "COST", hide_short_help = true)]
    pub replace_cost: Option<Cost>,
    #[clap(long, value_name = "COST", hide_short_help = true)]
    pub twiddle_cost: Option<Cost>,
    #[clap(long, value_name = "COST", hide_short_help = true)]
    pub delete_cost: Option<Cost>,
    #[clap(long, value_name = "COST", hide_short_help = true)]
    pub insert_cost: Option<Cost>,
    #[clap(long, value_name = "COST", hide_short_help = true)]
    pub kill_cost: Option<Cost>,
}

impl EngineArgs {
    pub fn to_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };
        if self.no_twiddle {
            config.twiddle = false;
        }
        if self.no_kill {
            config.kill = false;
        }
        for (op, cost) in [
            (EditOp::Copy, self.copy_cost),
            (EditOp::Replace, self.replace_cost),
            (EditOp::Twiddle, self.twiddle_cost),
            (EditOp::Delete, self.delete_cost),
            (EditOp::Insert, self.insert_cost),
            (EditOp::Kill, self.kill_cost),
        ] {
            if let Some(cost) = cost {
                config = config.with_cost(op, cost)?;
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_and_flags() {
        let cli = Cli::try_parse_from([
            "edit-distance",
            "HOME",
            "HOUSE",
            "--no-kill",
            "--twiddle-cost",
            "3",
            "--ops",
        ])
        .unwrap();
        assert_eq!(cli.start.as_deref(), Some("HOME"));
        assert_eq!(cli.target.as_deref(), Some("HOUSE"));
        assert!(cli.ops);
        let config = cli.engine.to_config().unwrap();
        assert!(config.twiddle);
        assert!(!config.kill);
        assert_eq!(config.cost(EditOp::Twiddle), 3);
    }

    #[test]
    fn no_words_runs_samples() {
        let cli = Cli::try_parse_from(["edit-distance"]).unwrap();
        assert!(cli.start.is_none());
        assert_eq!(cli.engine.to_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn negative_cost_flag() {
        let cli = Cli::try_parse_from(["edit-distance", "--delete-cost=-1"]).unwrap();
        assert!(matches!(
            cli.engine.to_config(),
            Err(ConfigError::NegativeCost { .. })
        ));
    }

    #[test]
    fn random_pair() {
        let cli = Cli::try_parse_from([
            "edit-distance",
            "--random",
            "40",
            "-e",
            "0.2",
            "--seed",
            "5",
        ])
        .unwrap();
        let opt = cli.generate.to_generate_options().unwrap();
        assert_eq!(opt.length, 40);
        assert_eq!(cli.generate.seed, Some(5));
    }
}
