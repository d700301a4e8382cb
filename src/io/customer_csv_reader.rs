use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use crate::error::{ModelError, Result};
use crate::problem::cvrptw::CustomerRecord;

/**
Customer tables follow the Solomon layout, one row per customer:

CUST_NUM,XCOORD.,YCOORD.,DEMAND,READY_TIME,DUE_DATE,SERVICE_TIME
1,1,2,1,0,5,1
2,5,6,2,1,8,1
...

Columns are matched by name. Files exported from spreadsheet tools often start
with a UTF-8 byte order mark in front of `CUST_NUM`; it is ignored.
 */
pub const CUSTOMER_COLUMN: &str = "CUST_NUM";
pub const X_COLUMN: &str = "XCOORD.";
pub const Y_COLUMN: &str = "YCOORD.";
pub const DEMAND_COLUMN: &str = "DEMAND";
pub const READY_TIME_COLUMN: &str = "READY_TIME";
pub const DUE_DATE_COLUMN: &str = "DUE_DATE";
pub const SERVICE_TIME_COLUMN: &str = "SERVICE_TIME";

const BYTE_ORDER_MARK: char = '\u{feff}';

pub(crate) fn load_customers(path: impl AsRef<Path>) -> Result<Vec<CustomerRecord>> {
    let f = File::open(path)?;
    read_customers(BufReader::new(f))
}

pub(crate) fn read_customers<R: Read>(reader: R) -> Result<Vec<CustomerRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(reader.headers()?)?;

    let mut customers = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if row == 0 {
            debug!("first row: {:?}", &record);
        }
        customers.push(columns.parse_record(&record, row + 1)?);
    }

    Ok(customers)
}

struct Columns {
    id: usize,
    x: usize,
    y: usize,
    demand: usize,
    ready_time: usize,
    due_date: usize,
    service_time: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers
            .iter()
            .map(|it| it.trim_start_matches(BYTE_ORDER_MARK).trim())
            .collect();
        info!("CSV columns: {:?}", names);

        let position = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| ModelError::missing_field(column, "column not in header"))
        };

        Ok(Self {
            id: position(CUSTOMER_COLUMN)?,
            x: position(X_COLUMN)?,
            y: position(Y_COLUMN)?,
            demand: position(DEMAND_COLUMN)?,
            ready_time: position(READY_TIME_COLUMN)?,
            due_date: position(DUE_DATE_COLUMN)?,
            service_time: position(SERVICE_TIME_COLUMN)?,
        })
    }

    fn parse_record(&self, record: &StringRecord, row: usize) -> Result<CustomerRecord> {
        let id = match record.get(self.id) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                return Err(ModelError::missing_field(
                    CUSTOMER_COLUMN,
                    format!("row {}", row),
                ))
            }
        };
        let context = || format!("row {}, customer {}", row, id);

        let x: f64 = parse_field(record, self.x, X_COLUMN, context)?;
        let y: f64 = parse_field(record, self.y, Y_COLUMN, context)?;
        if !x.is_finite() {
            return Err(ModelError::missing_field(X_COLUMN, context()));
        }
        if !y.is_finite() {
            return Err(ModelError::missing_field(Y_COLUMN, context()));
        }

        Ok(CustomerRecord {
            x,
            y,
            demand: parse_field(record, self.demand, DEMAND_COLUMN, context)?,
            ready_time: parse_field(record, self.ready_time, READY_TIME_COLUMN, context)?,
            due_date: parse_field(record, self.due_date, DUE_DATE_COLUMN, context)?,
            service_time: parse_field(record, self.service_time, SERVICE_TIME_COLUMN, context)?,
            id,
        })
    }
}

fn parse_field<T: FromStr>(
    record: &StringRecord,
    idx: usize,
    column: &str,
    context: impl Fn() -> String,
) -> Result<T> {
    record
        .get(idx)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<T>().ok())
        .ok_or_else(|| ModelError::missing_field(column, context()))
}
