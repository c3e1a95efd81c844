use plotly::Plot;

use crate::core::Figure;
use crate::error::StyleResult;

impl Figure {
    /// Snapshot of a `plotly::Plot` as a selectable figure.
    ///
    /// Goes through the plot's JSON form, so every trace type the plotly crate
    /// supports is covered without per-type conversions.
    pub fn from_plotly(plot: &Plot) -> StyleResult<Self> {
        Self::from_json_str(&plot.to_json())
    }
}
