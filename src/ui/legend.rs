//! Color key rendered beside the map

use serde::{Deserialize, Serialize};

use crate::style::color::Color;
use crate::style::depth::DepthScale;
use crate::{MapError, Result};

/// One legend row: a color swatch and its label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// A titled list of swatch rows explaining a depth scale
///
/// Entries always align band-for-band with the scale the legend was built
/// from; there is no way to construct one that disagrees with its scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    title: String,
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// Builds a legend with labels derived from the band bounds
    pub fn from_scale(title: impl Into<String>, scale: &DepthScale) -> Self {
        let entries = scale
            .labels()
            .into_iter()
            .zip(scale.bands())
            .map(|(label, band)| LegendEntry {
                label,
                color: band.color,
            })
            .collect();
        Self {
            title: title.into(),
            entries,
        }
    }

    /// Builds a legend with caller-provided labels
    ///
    /// Fails unless exactly one label is given per band, so hand-written
    /// labels can never drift out of step with the scale.
    pub fn with_labels(
        title: impl Into<String>,
        scale: &DepthScale,
        labels: &[&str],
    ) -> Result<Self> {
        if labels.len() != scale.len() {
            return Err(MapError::Legend(format!(
                "{} labels for {} depth bands",
                labels.len(),
                scale.len()
            )));
        }
        let entries = labels
            .iter()
            .zip(scale.bands())
            .map(|(label, band)| LegendEntry {
                label: (*label).to_owned(),
                color: band.color,
            })
            .collect();
        Ok(Self {
            title: title.into(),
            entries,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the legend as an HTML fragment, one swatch row per entry
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!("<h2>{}</h2>\n", self.title));
        html.push_str("<ul class=\"legend\">\n");
        for entry in &self.entries {
            html.push_str(&format!(
                "  <li><i style=\"background-color: {}\"></i>{}</li>\n",
                entry.color, entry.label
            ));
        }
        html.push_str("</ul>\n");
        html
    }
}
