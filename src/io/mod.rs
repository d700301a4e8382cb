use std::path::Path;

use crate::error::Result;
use crate::model::Model;
use crate::problem::cvrptw::CustomerRecord;

pub mod customer_csv_reader;
pub mod model_writer;
pub mod run_config;

pub fn load_customers(path: impl AsRef<Path>) -> Result<Vec<CustomerRecord>> {
    customer_csv_reader::load_customers(path)
}

pub fn write_model(path: impl AsRef<Path>, model: &Model) -> Result<()> {
    model_writer::write_model(path, model)
}
