use std::path::Path;

use anyhow::Context;
use log::info;
use took::Timer;

use crate::model::ModelBuilder;
use crate::utils::logging::{format_log_model_timed, format_log_parameters};

mod cli;
mod error;
mod io;
mod model;
mod problem;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::ProgramArguments::parse_expanded(std::env::args_os())?;
    info!("{:?}", &args);

    let config = args
        .config
        .as_ref()
        .map(|path| {
            io::run_config::read_config(path)
                .with_context(|| format!("reading run configuration {}", path))
        })
        .transpose()?;
    let parameters = args.model_parameters(config.as_ref());
    info!("{}", format_log_parameters(&parameters));

    let load_timer = Timer::new();
    let customers = io::load_customers(&args.instance)
        .with_context(|| format!("loading customers from {}", args.instance))?;
    let num_customers = customers.len();
    info!("{} customers loaded after {}", num_customers, load_timer.took());

    let instance_name = Path::new(&args.instance)
        .file_stem()
        .map(|it| it.to_string_lossy().to_string())
        .unwrap_or_else(|| args.instance.clone());

    let build_timer = Timer::new();
    let model = ModelBuilder::new(parameters).build(instance_name, customers)?;
    let build_time = build_timer.took();
    let build_millis = build_time.as_std().as_millis();
    info!("{}", format_log_model_timed(&model, build_time));

    io::write_model(&args.output, &model)
        .with_context(|| format!("writing model to {}", args.output))?;
    info!("model written to {}", args.output);

    if args.print_summary_to_stdout {
        println!(
            "{},{},{},{}",
            num_customers,
            model.num_edges(),
            model.all_actions().len(),
            build_millis
        );
    }

    Ok(())
}
