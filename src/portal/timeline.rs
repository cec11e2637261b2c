/// Delayed steps of the enter/complete sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Portal fully open long enough; enter without user input.
    AutoEnter,
    /// The zoom covers the screen; run the host callback.
    Covered,
    /// The host swap has had time to settle; start fading out.
    Settled,
    /// Fade-out finished; tear down.
    Faded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Timer {
    due: f64,
    epoch: u64,
    action: TimerAction,
}

/// Deadline queue where every entry remembers the transition epoch that armed it.
///
/// Entries from an older epoch are discarded when they come due, so a late timer from a
/// superseded transition can never act on the current one.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    timers: Vec<Timer>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, due: f64, epoch: u64, action: TimerAction) {
        self.timers.push(Timer { due, epoch, action });
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending deadline.
    pub fn next_due(&self) -> Option<f64> {
        self.timers.iter().map(|t| t.due).reduce(f64::min)
    }

    /// Remove every timer due at `now`, returning the current-epoch actions in deadline
    /// order. Stale entries are dropped.
    pub fn take_due(&mut self, now: f64, epoch: u64) -> Vec<TimerAction> {
        let mut due = Vec::new();
        self.timers.retain(|t| {
            if t.due <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due));

        let mut out = Vec::with_capacity(due.len());
        for t in due {
            if t.epoch == epoch {
                out.push(t.action);
            } else {
                tracing::debug!(
                    action = ?t.action,
                    timer_epoch = t.epoch,
                    epoch,
                    "dropping stale timer"
                );
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/portal/timeline.rs"]
mod tests;
