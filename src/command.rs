//! The overkill command: select lines, reduce, delete, report.

use crate::diagnostics::ReductionReport;
use crate::drawing::Drawing;
use crate::error::{Error, Result};
use crate::reduce::{ReduceParams, Reducer};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// What a successful command run did to the drawing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverkillSummary {
    pub selected: usize,
    pub deleted: usize,
    pub report: ReductionReport,
}

#[derive(Clone, Debug, Default)]
pub struct OverkillCommand {
    reducer: Reducer,
}

impl OverkillCommand {
    pub fn new(params: ReduceParams) -> Self {
        Self {
            reducer: Reducer::new(params),
        }
    }

    /// Remove redundant lines from `drawing`.
    ///
    /// Returns [`Error::EmptySelection`] without touching the drawing when no
    /// element qualifies for reduction.
    pub fn execute(&self, drawing: &mut Drawing) -> Result<OverkillSummary> {
        self.reducer.params().validate()?;
        if drawing.is_empty() {
            debug!("Drawing has no elements");
            return Err(Error::EmptySelection);
        }

        let selection = drawing.select_lines();
        if selection.is_empty() {
            return Err(Error::EmptySelection);
        }
        debug!(
            "Selected {} of {} drawing elements",
            selection.len(),
            drawing.len()
        );

        let report = self.reducer.run(&selection);
        let deleted = drawing.delete(&report.casualties)?;
        info!("Number of lines deleted: {deleted}");

        Ok(OverkillSummary {
            selected: selection.len(),
            deleted,
            report,
        })
    }
}
