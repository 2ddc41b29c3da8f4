use crate::config::LinkMarkers;
use crate::error::{Result, ScrapeError};

/// Selects the announcement links out of a search page's anchor targets
#[derive(Debug, Clone)]
pub struct LinkFilter {
    markers: LinkMarkers,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self::new(LinkMarkers::default())
    }
}

impl LinkFilter {
    /// Create a new link filter from the configured markers
    pub fn new(markers: LinkMarkers) -> Self {
        Self { markers }
    }

    /// Whether an anchor with the given class attribute should be kept
    ///
    /// Only anchors whose class list is exactly the excluded class are dropped;
    /// an anchor carrying that class alongside others is kept.
    pub fn keep_anchor(&self, class_attr: Option<&str>) -> bool {
        match class_attr {
            Some(classes) => {
                let classes: Vec<&str> = classes.split_whitespace().collect();
                classes != [self.markers.excluded_class.as_str()]
            }
            None => true,
        }
    }

    /// Return the targets strictly between the landing-path marker and the
    /// first query-prefixed target, in their original order
    pub fn window(&self, targets: &[String]) -> Result<Vec<String>> {
        let start = targets
            .iter()
            .position(|t| *t == self.markers.landing_path)
            .ok_or_else(|| ScrapeError::MarkerNotFound {
                marker: self.markers.landing_path.clone(),
            })?
            + 1;

        // Scanned from the start of the list, not from the window start
        let end = targets
            .iter()
            .position(|t| t.starts_with(&self.markers.query_prefix))
            .ok_or_else(|| ScrapeError::MarkerNotFound {
                marker: self.markers.query_prefix.clone(),
            })?;

        if end <= start {
            ::log::debug!(
                "Query marker at {} precedes window start {}; no links selected",
                end,
                start
            );
            return Ok(Vec::new());
        }

        Ok(targets[start..end].to_vec())
    }
}
