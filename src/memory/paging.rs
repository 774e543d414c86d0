//! Page replacement simulation
//!
//! A reference string is replayed against a fixed number of frames. Each
//! reference either hits a resident page or faults; a fault with all frames
//! full evicts one page, chosen by the [`ReplacementPolicy`]:
//! - [`ReplacementPolicy::Fifo`]: the page resident the longest
//! - [`ReplacementPolicy::Lru`]: the page referenced least recently
//! - [`ReplacementPolicy::Optimal`]: the page whose next reference is furthest
//!   away, or that is never referenced again
//!
//! Frames are listed oldest first. Under LRU a hit moves the page to the end,
//! so the list is also the recency order.

use rustc_hash::FxHashSet;
use std::fmt;
use std::num::NonZeroUsize;

/// Page number as read from a reference string
pub type Page = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPolicy {
    Fifo,
    Lru,
    Optimal,
}

impl ReplacementPolicy {
    pub const ALL: [ReplacementPolicy; 3] = [
        ReplacementPolicy::Fifo,
        ReplacementPolicy::Lru,
        ReplacementPolicy::Optimal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReplacementPolicy::Fifo => "FIFO",
            ReplacementPolicy::Lru => "LRU",
            ReplacementPolicy::Optimal => "OPT",
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Errors from reading simulation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    /// Frame count is not a number
    InvalidFrames(String),
    /// Frame count is zero
    ZeroFrames,
    /// Reference string has no pages
    EmptySequence,
    /// A reference is not an integer
    InvalidPage(String),
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagingError::InvalidFrames(text) => {
                write!(f, "invalid frame count '{}': expected a positive integer", text)
            }
            PagingError::ZeroFrames => write!(f, "the number of frames must be greater than zero"),
            PagingError::EmptySequence => write!(f, "the reference string is empty"),
            PagingError::InvalidPage(text) => {
                write!(f, "invalid page '{}': use integers only", text)
            }
        }
    }
}

impl std::error::Error for PagingError {}

/// Parse a frame count, rejecting zero
pub fn parse_frames(text: &str) -> Result<NonZeroUsize, PagingError> {
    let n = text
        .trim()
        .parse::<usize>()
        .map_err(|_| PagingError::InvalidFrames(text.to_string()))?;
    NonZeroUsize::new(n).ok_or(PagingError::ZeroFrames)
}

/// Parse whitespace-separated page numbers
pub fn parse_reference_string(text: &str) -> Result<Vec<Page>, PagingError> {
    let pages = text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<Page>()
                .map_err(|_| PagingError::InvalidPage(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if pages.is_empty() {
        return Err(PagingError::EmptySequence);
    }
    Ok(pages)
}

/// What happened on one reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    /// `evicted` is `None` while a free frame was still available
    Fault { evicted: Option<Page> },
}

/// One reference and the frames right after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub page: Page,
    pub frames: Vec<Page>,
    pub outcome: Outcome,
    /// Faults so far, including this reference
    pub faults: usize,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.outcome {
            Outcome::Hit => "Page Hit".to_string(),
            Outcome::Fault { evicted: None } => "Page Fault".to_string(),
            Outcome::Fault {
                evicted: Some(page),
            } => format!("Page Fault (replaced {})", page),
        };
        write!(
            f,
            "Reference: {} | Frames: {:?} | {} | Total Faults: {}",
            self.page, self.frames, outcome, self.faults
        )
    }
}

/// Full trace of one simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingReport {
    pub policy: ReplacementPolicy,
    pub frame_count: NonZeroUsize,
    pub steps: Vec<Step>,
}

impl PagingReport {
    pub fn references(&self) -> usize {
        self.steps.len()
    }

    pub fn faults(&self) -> usize {
        self.steps.last().map_or(0, |s| s.faults)
    }

    pub fn hits(&self) -> usize {
        self.references() - self.faults()
    }

    /// Faults as a percentage of references
    pub fn fault_rate(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.faults() as f64 / self.references() as f64 * 100.0
    }

    pub fn hit_rate(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        100.0 - self.fault_rate()
    }
}

/// Replay `references` against `frame_count` frames
pub fn simulate(
    policy: ReplacementPolicy,
    references: &[Page],
    frame_count: NonZeroUsize,
) -> Result<PagingReport, PagingError> {
    if references.is_empty() {
        return Err(PagingError::EmptySequence);
    }

    let capacity = frame_count.get();
    let mut frames: Vec<Page> = Vec::with_capacity(capacity);
    let mut resident: FxHashSet<Page> = FxHashSet::default();
    let mut faults = 0;
    let mut steps = Vec::with_capacity(references.len());

    for (i, &page) in references.iter().enumerate() {
        let outcome = if resident.contains(&page) {
            if policy == ReplacementPolicy::Lru {
                if let Some(pos) = frames.iter().position(|&p| p == page) {
                    frames.remove(pos);
                    frames.push(page);
                }
            }
            Outcome::Hit
        } else {
            faults += 1;
            let evicted = if frames.len() == capacity {
                let victim = victim_index(policy, &frames, &references[i + 1..]);
                let old = frames.remove(victim);
                resident.remove(&old);
                Some(old)
            } else {
                None
            };
            frames.push(page);
            resident.insert(page);
            Outcome::Fault { evicted }
        };

        steps.push(Step {
            page,
            frames: frames.clone(),
            outcome,
            faults,
        });
    }

    Ok(PagingReport {
        policy,
        frame_count,
        steps,
    })
}

/// Index in `frames` of the page to evict
///
/// `frames` is non-empty and ordered oldest first (least recent first for LRU).
fn victim_index(policy: ReplacementPolicy, frames: &[Page], upcoming: &[Page]) -> usize {
    match policy {
        ReplacementPolicy::Fifo | ReplacementPolicy::Lru => 0,
        ReplacementPolicy::Optimal => {
            let mut victim = 0;
            let mut furthest = 0;
            for (index, page) in frames.iter().enumerate() {
                let next_use = upcoming
                    .iter()
                    .position(|p| p == page)
                    .unwrap_or(usize::MAX);
                if next_use == usize::MAX {
                    // Never referenced again, nothing can beat it
                    return index;
                }
                if next_use > furthest {
                    furthest = next_use;
                    victim = index;
                }
            }
            victim
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: [Page; 20] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];
    const BELADY: [Page; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    fn frames(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn faults(policy: ReplacementPolicy, refs: &[Page], n: usize) -> usize {
        simulate(policy, refs, frames(n)).unwrap().faults()
    }

    #[test]
    fn test_fault_counts_on_classic_string() {
        assert_eq!(faults(ReplacementPolicy::Fifo, &CLASSIC, 3), 15);
        assert_eq!(faults(ReplacementPolicy::Lru, &CLASSIC, 3), 12);
        assert_eq!(faults(ReplacementPolicy::Optimal, &CLASSIC, 3), 9);
    }

    #[test]
    fn test_fifo_belady_anomaly() {
        // More frames, more faults
        assert_eq!(faults(ReplacementPolicy::Fifo, &BELADY, 3), 9);
        assert_eq!(faults(ReplacementPolicy::Fifo, &BELADY, 4), 10);

        // Stack algorithms do not suffer from it
        assert_eq!(faults(ReplacementPolicy::Lru, &BELADY, 3), 10);
        assert_eq!(faults(ReplacementPolicy::Lru, &BELADY, 4), 8);
        assert_eq!(faults(ReplacementPolicy::Optimal, &BELADY, 3), 7);
        assert_eq!(faults(ReplacementPolicy::Optimal, &BELADY, 4), 6);
    }

    #[test]
    fn test_optimal_never_loses() {
        for n in 1..=5 {
            let opt = faults(ReplacementPolicy::Optimal, &CLASSIC, n);
            assert!(opt <= faults(ReplacementPolicy::Fifo, &CLASSIC, n));
            assert!(opt <= faults(ReplacementPolicy::Lru, &CLASSIC, n));
        }
    }

    #[test]
    fn test_fifo_trace_records_evictions() {
        let report = simulate(ReplacementPolicy::Fifo, &CLASSIC, frames(3)).unwrap();

        assert_eq!(report.steps[0].outcome, Outcome::Fault { evicted: None });
        assert_eq!(report.steps[2].frames, vec![7, 0, 1]);
        assert_eq!(
            report.steps[3].outcome,
            Outcome::Fault { evicted: Some(7) }
        );
        assert_eq!(report.steps[3].frames, vec![0, 1, 2]);
        assert_eq!(report.steps[4].outcome, Outcome::Hit);
        assert_eq!(report.steps[4].faults, 4);

        assert_eq!(
            report.steps[3].to_string(),
            "Reference: 2 | Frames: [0, 1, 2] | Page Fault (replaced 7) | Total Faults: 4"
        );
        assert_eq!(
            report.steps[4].to_string(),
            "Reference: 0 | Frames: [0, 1, 2] | Page Hit | Total Faults: 4"
        );
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let report = simulate(ReplacementPolicy::Lru, &[1, 2, 1, 3], frames(2)).unwrap();
        // 2 is the least recently used when 3 arrives
        assert_eq!(
            report.steps[3].outcome,
            Outcome::Fault { evicted: Some(2) }
        );
        assert_eq!(report.steps[3].frames, vec![1, 3]);

        let fifo = simulate(ReplacementPolicy::Fifo, &[1, 2, 1, 3], frames(2)).unwrap();
        assert_eq!(fifo.steps[3].outcome, Outcome::Fault { evicted: Some(1) });
    }

    #[test]
    fn test_rates_and_hits() {
        let report = simulate(ReplacementPolicy::Fifo, &CLASSIC, frames(3)).unwrap();
        assert_eq!(report.references(), 20);
        assert_eq!(report.hits(), 5);
        assert!((report.fault_rate() - 75.0).abs() < 1e-9);
        assert!((report.hit_rate() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_page_faults_once() {
        let report = simulate(ReplacementPolicy::Optimal, &[4, 4, 4], frames(1)).unwrap();
        assert_eq!(report.faults(), 1);
        assert_eq!(report.hits(), 2);
    }

    #[test]
    fn test_input_validation() {
        assert_eq!(
            simulate(ReplacementPolicy::Fifo, &[], frames(3)),
            Err(PagingError::EmptySequence)
        );
        assert_eq!(parse_frames("0"), Err(PagingError::ZeroFrames));
        assert_eq!(
            parse_frames("-1"),
            Err(PagingError::InvalidFrames("-1".to_string()))
        );
        assert_eq!(parse_frames(" 4 "), Ok(frames(4)));

        assert_eq!(parse_reference_string("7 0  1\t2"), Ok(vec![7, 0, 1, 2]));
        assert_eq!(parse_reference_string("   "), Err(PagingError::EmptySequence));
        assert_eq!(
            parse_reference_string("1 x 3"),
            Err(PagingError::InvalidPage("x".to_string()))
        );
    }
}
