//! Result types for batch scanning

/// A position at which the matcher reported the matched state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// Zero-based offset of the stream element after which the matcher
    /// reported a match (the offset of the occurrence's last element)
    pub offset: usize,
}

/// Outcome of scanning a finite stream with [`scan`](crate::scan)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReport {
    /// Every offset at which the matcher reported the matched state.
    /// Back-to-back occurrences produce one entry each.
    pub detections: Vec<Detection>,
    /// Total number of stream elements consumed
    pub items_processed: usize,
}

impl ScanReport {
    /// Offset of the first detection, if any
    pub fn first_offset(&self) -> Option<usize> {
        self.detections.first().map(|d| d.offset)
    }

    /// Whether the scan found nothing
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}
