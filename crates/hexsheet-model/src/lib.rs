use hexsheet_base::Guid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod kernel;
pub mod sheet;

pub use kernel::{GeometryKernel, TruckKernel};
pub use sheet::{
    DEFAULT_MODEL_TITLE, SheetOutputs, SheetParams, build_sheet, export_sheet, sanitize_title,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ParameterValue {
    Integer(i64),
    Number(f64),
    Bool(bool),
    Text(String),
}

pub type ParameterSet = BTreeMap<String, ParameterValue>;

/// The one model produced by a run: a named solid with its generation
/// parameters attached. Owned explicitly by the caller, never ambient.
#[derive(Clone, Debug)]
pub struct SheetElement<S> {
    pub guid: Guid,
    pub title: String,
    pub parameters: ParameterSet,
    pub geometry: S,
}

impl<S> SheetElement<S> {
    pub fn new(guid: Guid, title: impl Into<String>, parameters: ParameterSet, geometry: S) -> Self {
        Self {
            guid,
            title: title.into(),
            parameters,
            geometry,
        }
    }

    pub fn insert_parameter(&mut self, key: impl Into<String>, value: ParameterValue) {
        self.parameters.insert(key.into(), value);
    }

    pub fn geometry(&self) -> &S {
        &self.geometry
    }
}
