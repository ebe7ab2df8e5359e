//! Debounce filter for rapidly-changing values.
//!
//! # Design
//! - The filter is timer-agnostic: `input` hands out a ticket, the caller
//!   arms a timer, and only the newest ticket may propagate on `fire`.
//! - The wasm timer slot owns the `gloo` timeout so dropping it releases the
//!   pending callback.

/// Timer request produced by [`Debouncer::input`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket {
    /// Generation the timer must report back to [`Debouncer::fire`].
    pub generation: u64,
    /// Quiet period before the value propagates.
    pub delay_ms: u32,
}

/// Delays propagation of a value until input stays quiet for `delay_ms`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay_ms: u32,
    generation: u64,
    pending: Option<T>,
    output: T,
}

impl<T: Clone> Debouncer<T> {
    /// Create a filter whose settled output starts at `initial`.
    #[must_use]
    pub const fn new(initial: T, delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
            output: initial,
        }
    }

    /// Record a new input value, superseding any pending one.
    ///
    /// Returns the ticket to arm, or `None` when the delay is zero and the
    /// value propagated immediately.
    pub fn input(&mut self, value: T) -> Option<DebounceTicket> {
        self.generation = self.generation.wrapping_add(1);
        if self.delay_ms == 0 {
            self.pending = None;
            self.output = value;
            return None;
        }
        self.pending = Some(value);
        Some(DebounceTicket {
            generation: self.generation,
            delay_ms: self.delay_ms,
        })
    }

    /// Timer callback. Propagates the pending value if `generation` is current.
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        let value = self.pending.take()?;
        self.output = value.clone();
        Some(value)
    }

    /// Drop any pending value; outstanding tickets become inert.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    /// Overwrite the settled output without a quiet period.
    pub fn reset(&mut self, value: T) {
        self.cancel();
        self.output = value;
    }

    /// Current settled output.
    #[must_use]
    pub const fn output(&self) -> &T {
        &self.output
    }

    /// Whether a value is waiting for its quiet period.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Holder for the armed debounce timer; dropping it cancels the callback.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub(crate) struct TimerSlot {
    timeout: Option<gloo_timers::callback::Timeout>,
}

#[cfg(target_arch = "wasm32")]
impl TimerSlot {
    /// Replace any armed timer with one that runs `on_fire` after the ticket delay.
    pub(crate) fn arm(&mut self, ticket: DebounceTicket, on_fire: impl FnOnce(u64) + 'static) {
        self.cancel();
        let generation = ticket.generation;
        self.timeout = Some(gloo_timers::callback::Timeout::new(
            ticket.delay_ms,
            move || on_fire(generation),
        ));
    }

    /// Release the armed timer, if any.
    pub(crate) fn cancel(&mut self) {
        if let Some(timeout) = self.timeout.take() {
            timeout.cancel();
        }
    }
}
