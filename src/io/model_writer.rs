use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use enum_map::EnumMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::model::{Model, ResourceGraph};

/// String-keyed form of a [`Model`] as the solver reads it.
#[derive(Debug, Serialize)]
pub struct PersistedModel<'a> {
    #[serde(rename = "allDelta")]
    all_delta: &'a [String],
    #[serde(rename = "allGraphNames")]
    all_graph_names: Vec<&'static str>,
    #[serde(rename = "h2SourceId")]
    source_ids: OrderedEntries<'a, &'a str>,
    #[serde(rename = "h2sinkid")]
    sink_ids: OrderedEntries<'a, &'a str>,
    #[serde(rename = "allActions")]
    all_actions: &'a [String],
    #[serde(rename = "nullAction")]
    null_action: &'a str,
    #[serde(rename = "allNonNullAction")]
    all_non_null_actions: &'a [String],
    #[serde(rename = "allPrimitiveVars")]
    all_primitive_vars: &'a [String],
    #[serde(rename = "action2Cost")]
    action_costs: OrderedEntries<'a, f64>,
}

/// Map entries serialized in insertion order.
#[derive(Debug)]
struct OrderedEntries<'a, V>(Vec<(&'a str, V)>);

impl<'a, V: Serialize> Serialize for OrderedEntries<'a, V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Flattens enum-keyed and edge-keyed parts of the model into string keys.
/// Lists and scalars are borrowed unchanged.
pub fn canonicalize(model: &Model) -> PersistedModel<'_> {
    PersistedModel {
        all_delta: model.all_delta(),
        all_graph_names: model.all_graph_names().collect(),
        source_ids: graph_entries(model.source_ids()),
        sink_ids: graph_entries(model.sink_ids()),
        all_actions: model.all_actions(),
        null_action: model.null_action(),
        all_non_null_actions: model.all_non_null_actions(),
        all_primitive_vars: model.all_primitive_vars(),
        action_costs: OrderedEntries(model.iter_action_costs().collect()),
    }
}

fn graph_entries(ids: &EnumMap<ResourceGraph, String>) -> OrderedEntries<'_, &str> {
    OrderedEntries(
        ResourceGraph::ALL
            .into_iter()
            .map(|graph| (graph.name(), ids[graph].as_str()))
            .collect(),
    )
}

pub fn write_model_to<W: Write>(writer: W, model: &Model) -> Result<()> {
    serde_json::to_writer_pretty(writer, &canonicalize(model))?;
    Ok(())
}

pub fn write_model(path: impl AsRef<Path>, model: &Model) -> Result<()> {
    let f = File::create(path)?;
    let mut file = BufWriter::new(f);
    write_model_to(&mut file, model)?;
    writeln!(file)?;
    file.flush()?;
    Ok(())
}
