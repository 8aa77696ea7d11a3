//! Step results.
//!
//! A step either services one reference ([`Step::Access`]) or finds the
//! cursor already at the end ([`Step::EndOfSequence`]), which is a no-op.

use std::fmt;

use serde::Serialize;

use crate::common::{FrameIndex, PageNumber};

/// What one serviced reference did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// Page accessed.
    pub page: PageNumber,
    /// The page was already resident.
    pub was_hit: bool,
    /// Page evicted to make room, if any.
    pub evicted: Option<PageNumber>,
    /// Frame the page occupies after the access.
    pub frame: FrameIndex,
    /// Modified bit of the page after the access.
    pub modified: bool,
    /// Cursor after the access.
    pub cursor_after: usize,
    /// The reference string is exhausted.
    pub finished: bool,
}

impl StepOutcome {
    /// True when the access faulted.
    pub const fn is_fault(&self) -> bool {
        !self.was_hit
    }
}

impl fmt::Display for StepOutcome {
    /// Formats the outcome as an event log line, e.g.
    /// `step 5: page 1 -> fault, evicted page 2 from frame 0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}: page {} -> ", self.cursor_after, self.page)?;
        match (self.was_hit, self.evicted) {
            (true, _) => write!(f, "hit in frame {}", self.frame),
            (false, None) => write!(f, "fault, loaded into empty frame {}", self.frame),
            (false, Some(victim)) => {
                write!(f, "fault, evicted page {victim} from frame {}", self.frame)
            }
        }
    }
}

/// Result of a call to `Simulator::step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// One reference was serviced.
    Access(StepOutcome),
    /// The cursor was already at the end; nothing changed.
    EndOfSequence {
        /// Cursor position (equal to the reference length).
        cursor: usize,
    },
}

impl Step {
    /// True when no references remain after this step.
    pub const fn is_finished(&self) -> bool {
        match self {
            Self::Access(outcome) => outcome.finished,
            Self::EndOfSequence { .. } => true,
        }
    }

    /// The serviced access, if this step did any work.
    pub const fn outcome(&self) -> Option<&StepOutcome> {
        match self {
            Self::Access(outcome) => Some(outcome),
            Self::EndOfSequence { .. } => None,
        }
    }
}
