//! Elapsed-time counter abstraction
//!
//! Models a hardware timer/counter channel: it counts up from zero after
//! [`Counter::start`] and freezes on [`Counter::stop`]. Callers poll
//! [`Counter::count`]; nothing ever blocks on the counter.

/// Free-running up-counter
pub trait Counter {
    /// Reset the count to zero and start counting
    fn start(&mut self);

    /// Stop counting; [`Counter::count`] keeps returning the final value
    fn stop(&mut self);

    /// Counts elapsed since the last [`Counter::start`]
    ///
    /// Wrap-around is not handled; budgets must fit within `u32`.
    fn count(&mut self) -> u32;

    /// Check if the count has reached `budget`
    fn expired(&mut self, budget: u32) -> bool {
        self.count() >= budget
    }
}
