//! Merge map: classification of coordinates against merged spans

use ahash::AHashMap;

use crate::cell::{CellCoordinate, MergeSpan};
use crate::grid::GridBounds;

/// How a coordinate relates to the merged spans of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDisposition<'a> {
    /// Not part of any span
    NotMerged,
    /// Top-left cell of the span; carries the span's content
    Anchor(&'a MergeSpan),
    /// Inside the span but not its anchor; renders empty
    Covered(&'a MergeSpan),
}

#[derive(Debug, Clone, Copy)]
struct Claim {
    span: usize,
    anchor: bool,
}

/// The merged spans of one worksheet with precomputed classification
///
/// Spans are kept in document order. When spans overlap, every contested
/// coordinate belongs to the first span that claims it.
#[derive(Debug, Clone, Default)]
pub struct MergeMap {
    spans: Vec<MergeSpan>,
    claims: AHashMap<CellCoordinate, Claim>,
}

impl MergeMap {
    /// Build the map from spans in document order
    pub fn from_spans(spans: Vec<MergeSpan>) -> Self {
        let capacity = spans.iter().map(|s| s.cell_count() as usize).sum();
        let mut claims = AHashMap::with_capacity(capacity);

        for (idx, span) in spans.iter().enumerate() {
            let mut contested = false;
            for coord in span.coordinates() {
                match claims.get(&coord) {
                    Some(_) => contested = true,
                    None => {
                        claims.insert(
                            coord,
                            Claim {
                                span: idx,
                                anchor: coord == span.anchor(),
                            },
                        );
                    }
                }
            }
            if contested {
                log::warn!(
                    "Merge range {} overlaps an earlier merge range; earlier range wins",
                    span
                );
            }
        }

        Self { spans, claims }
    }

    /// Classify a coordinate
    pub fn classify(&self, coord: CellCoordinate) -> MergeDisposition<'_> {
        match self.claims.get(&coord) {
            None => MergeDisposition::NotMerged,
            Some(claim) => {
                let span = &self.spans[claim.span];
                if claim.anchor {
                    MergeDisposition::Anchor(span)
                } else {
                    MergeDisposition::Covered(span)
                }
            }
        }
    }

    /// Spans in document order
    pub fn spans(&self) -> &[MergeSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Smallest bounds containing every span
    pub fn bounds(&self) -> GridBounds {
        self.spans
            .iter()
            .fold(GridBounds::default(), |b, s| b.including(s.bottom_right))
    }
}
