//! Toast controller state and the single-slot dismissal timer.
//!
//! Every `show` bumps a generation counter. The host arms exactly one timer per generation and
//! the timer dispatches a dismissal tagged with that generation; dismissals for anything but the
//! latest generation are ignored, so rapid triggers collapse into one visible message with one
//! live timer.

use std::time::Duration;

/// Delay between the latest `show` and the automatic dismissal.
pub const TOAST_DISMISS_DELAY: Duration = Duration::from_millis(2200);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    pub generation: u64,
    /// Generation whose dismissal is still outstanding.
    pub pending: Option<u64>,
}

impl ToastState {
    /// Shows `message`, replacing whatever is on screen, and returns the generation the
    /// dismissal timer must carry.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = message.into();
        self.visible = true;
        self.pending = Some(self.generation);
        self.generation
    }

    /// Hides the toast if `generation` is the outstanding one. Returns whether anything changed.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if self.pending != Some(generation) {
            return false;
        }
        self.pending = None;
        self.visible = false;
        true
    }
}

/// A scheduled host timer that can be cancelled before it fires.
pub trait PendingTimer {
    fn cancel(self);
}

#[derive(Debug)]
/// Holds at most one live dismissal timer.
pub struct TimerSlot<H: PendingTimer> {
    current: Option<(u64, H)>,
}

impl<H: PendingTimer> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: PendingTimer> TimerSlot<H> {
    /// Stores `handle` for `generation`, cancelling any timer already in the slot.
    pub fn rearm(&mut self, generation: u64, handle: H) {
        if let Some((_, previous)) = self.current.replace((generation, handle)) {
            previous.cancel();
        }
    }

    /// Forgets the handle once its timer has fired. A stale generation leaves the slot alone.
    pub fn settle(&mut self, generation: u64) {
        if matches!(self.current, Some((armed, _)) if armed == generation) {
            self.current = None;
        }
    }

    pub fn armed_generation(&self) -> Option<u64> {
        self.current.as_ref().map(|(generation, _)| *generation)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct Scheduled {
        due_ms: u64,
        generation: u64,
        cancelled: bool,
    }

    #[derive(Debug, Default, Clone)]
    struct VirtualClock {
        timers: Rc<RefCell<Vec<Scheduled>>>,
    }

    #[derive(Debug)]
    struct VirtualHandle {
        index: usize,
        timers: Rc<RefCell<Vec<Scheduled>>>,
    }

    impl PendingTimer for VirtualHandle {
        fn cancel(self) {
            self.timers.borrow_mut()[self.index].cancelled = true;
        }
    }

    impl VirtualClock {
        fn schedule(&self, now_ms: u64, generation: u64) -> VirtualHandle {
            let mut timers = self.timers.borrow_mut();
            timers.push(Scheduled {
                due_ms: now_ms + TOAST_DISMISS_DELAY.as_millis() as u64,
                generation,
                cancelled: false,
            });
            VirtualHandle {
                index: timers.len() - 1,
                timers: self.timers.clone(),
            }
        }

        /// Fires every live timer due at or before `until_ms`, oldest first.
        fn advance(&self, until_ms: u64) -> Vec<(u64, u64)> {
            let mut timers = self.timers.borrow_mut();
            let mut fired: Vec<(u64, u64)> = timers
                .iter_mut()
                .filter(|timer| !timer.cancelled && timer.due_ms <= until_ms)
                .map(|timer| {
                    timer.cancelled = true;
                    (timer.due_ms, timer.generation)
                })
                .collect();
            fired.sort();
            fired
        }
    }

    fn show(
        toast: &mut ToastState,
        slot: &mut TimerSlot<VirtualHandle>,
        clock: &VirtualClock,
        now_ms: u64,
        message: &str,
    ) {
        let generation = toast.show(message);
        slot.rearm(generation, clock.schedule(now_ms, generation));
    }

    #[test]
    fn rapid_triggers_keep_latest_message_and_fire_one_dismissal() {
        let clock = VirtualClock::default();
        let mut slot = TimerSlot::default();
        let mut toast = ToastState::default();

        show(&mut toast, &mut slot, &clock, 0, "A");
        show(&mut toast, &mut slot, &clock, 100, "B");
        assert_eq!(toast.message, "B");
        assert!(toast.visible);

        assert!(clock.advance(2200).is_empty());
        assert!(toast.visible);

        let fired = clock.advance(10_000);
        assert_eq!(fired, vec![(2300, 2)]);
        for (_, generation) in fired {
            slot.settle(generation);
            assert!(toast.dismiss(generation));
        }
        assert!(!toast.visible);
        assert_eq!(slot.armed_generation(), None);
    }

    #[test]
    fn stale_dismissal_is_ignored() {
        let mut toast = ToastState::default();
        let first = toast.show("first");
        let second = toast.show("second");

        assert!(!toast.dismiss(first));
        assert!(toast.visible);
        assert!(toast.dismiss(second));
        assert!(!toast.dismiss(second));
    }

    #[test]
    fn settle_with_stale_generation_keeps_current_timer() {
        let clock = VirtualClock::default();
        let mut slot = TimerSlot::default();
        slot.rearm(1, clock.schedule(0, 1));
        slot.rearm(2, clock.schedule(50, 2));

        slot.settle(1);
        assert_eq!(slot.armed_generation(), Some(2));
        assert!(clock.timers.borrow()[0].cancelled);
    }
}
