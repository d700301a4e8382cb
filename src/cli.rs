use std::ffi::OsString;

use clap::Parser;

use crate::io::run_config::RunConfig;
use crate::model::ModelParameters;

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(short, long, help = "customer table (csv) file path")]
    pub instance: String,

    #[arg(
        short,
        long,
        help = "file to store the action model (json)",
        default_value = "action_model.json"
    )]
    pub output: String,

    #[arg(long, help = "run configuration (toml) file path")]
    pub config: Option<String>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "vehicle capacity [config: vehicle_capacity, default: 5]"
    )]
    pub vehicle_capacity: Option<i64>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "time horizon [config: time_horizon, default: 10]"
    )]
    pub time_horizon: Option<i64>,

    #[arg(
        long,
        requires = "depot_y",
        allow_negative_numbers = true,
        help = "x coordinate of the depot [config: depot.x, default: 3.5]"
    )]
    pub depot_x: Option<f64>,

    #[arg(
        long,
        requires = "depot_x",
        allow_negative_numbers = true,
        help = "y coordinate of the depot [config: depot.y, default: 3.5]"
    )]
    pub depot_y: Option<f64>,

    #[arg(
        long,
        default_value_t = false,
        help = "print customers,edges,actions,millis to stdout"
    )]
    pub print_summary_to_stdout: bool,
}

impl ProgramArguments {
    /// Parses the command line after expanding `@file` arguments. Lines of an
    /// argument file are split like a shell would, so quoted values may
    /// contain spaces.
    pub fn parse_expanded<I, T>(args: I) -> std::io::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = argfile::expand_args_from(
            args.into_iter().map(Into::into),
            argfile::parse_response,
            argfile::PREFIX,
        )?;
        Ok(Self::parse_from(args))
    }

    /// Command line values take precedence over the configuration file, which
    /// takes precedence over the defaults.
    pub(crate) fn model_parameters(&self, config: Option<&RunConfig>) -> ModelParameters {
        let defaults = ModelParameters::default();
        let config_depot = config
            .and_then(|it| it.depot.as_ref())
            .map(|depot| (depot.x, depot.y));
        let cli_depot = self.depot_x.zip(self.depot_y);

        ModelParameters {
            vehicle_capacity: self
                .vehicle_capacity
                .or(config.and_then(|it| it.vehicle_capacity))
                .unwrap_or(defaults.vehicle_capacity),
            time_horizon: self
                .time_horizon
                .or(config.and_then(|it| it.time_horizon))
                .unwrap_or(defaults.time_horizon),
            depot: cli_depot.or(config_depot).unwrap_or(defaults.depot),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::io::run_config::Depot;

    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        ProgramArguments::command().debug_assert()
    }

    #[test]
    fn defaults_without_config() {
        let args = ProgramArguments::parse_from(["cvrptw-action-model", "-i", "customers.csv"]);
        assert_eq!(args.output, "action_model.json");
        assert_eq!(args.model_parameters(None), ModelParameters::default());
    }

    #[test]
    fn cli_overrides_config() {
        let args = ProgramArguments::parse_from([
            "cvrptw-action-model",
            "-i",
            "customers.csv",
            "--vehicle-capacity",
            "200",
            "--depot-x",
            "-1",
            "--depot-y",
            "2.5",
        ]);
        let config = RunConfig {
            vehicle_capacity: Some(100),
            time_horizon: Some(1236),
            depot: Some(Depot { x: 40.0, y: 50.0 }),
        };
        assert_eq!(
            args.model_parameters(Some(&config)),
            ModelParameters {
                vehicle_capacity: 200,
                time_horizon: 1236,
                depot: (-1.0, 2.5),
            }
        );
    }

    #[test]
    fn negative_values_reach_validation() {
        let args = ProgramArguments::parse_from([
            "cvrptw-action-model",
            "-i",
            "customers.csv",
            "--time-horizon",
            "-5",
        ]);
        assert_eq!(args.model_parameters(None).time_horizon, -5);
        assert!(args.model_parameters(None).validate().is_err());
    }

    #[test]
    fn paths_keep_their_spaces() -> anyhow::Result<()> {
        let args = ProgramArguments::parse_expanded([
            "cvrptw-action-model",
            "-i",
            "dir with space/s.csv",
            "--output",
            "out dir/model.json",
        ])?;
        assert_eq!(args.instance, "dir with space/s.csv");
        assert_eq!(args.output, "out dir/model.json");
        Ok(())
    }

    #[test]
    fn argument_file_lines_are_split_like_a_shell() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join("cvrptw-action-model-arguments.txt");
        std::fs::write(
            &path,
            "-i \"dir with space/s.csv\"\n--vehicle-capacity 200\n",
        )?;
        let args = ProgramArguments::parse_expanded([
            OsString::from("cvrptw-action-model"),
            OsString::from(format!("@{}", path.display())),
        ])?;
        std::fs::remove_file(&path)?;
        assert_eq!(args.instance, "dir with space/s.csv");
        assert_eq!(args.vehicle_capacity, Some(200));
        Ok(())
    }

    #[test]
    fn depot_coordinates_come_in_pairs() {
        let res = ProgramArguments::try_parse_from([
            "cvrptw-action-model",
            "-i",
            "customers.csv",
            "--depot-x",
            "1",
        ]);
        assert!(res.is_err());
    }
}
