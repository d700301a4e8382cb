use took::Took;

use crate::model::{Model, ModelParameters};

pub fn format_log_parameters(parameters: &ModelParameters) -> String {
    format!(
        "capacity: {}, time horizon: {}, depot: ({}, {})",
        parameters.vehicle_capacity, parameters.time_horizon, parameters.depot.0, parameters.depot.1,
    )
}

pub fn format_log_model(model: &Model) -> String {
    format!(
        "{}/{}/{} (max cost: {})",
        model.all_delta().len() / 2,
        model.num_edges(),
        model.all_actions().len(),
        model.max_cost(),
    )
}

pub fn format_log_model_timed(model: &Model, took: Took) -> String {
    format!("model {}, took: {took}", format_log_model(model))
}
