//! Monotonic time source

/// Monotonic millisecond clock
///
/// Must never go backwards. The epoch is arbitrary (typically boot).
pub trait Clock {
    /// Milliseconds since the clock's epoch
    fn now_ms(&self) -> u64;
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    fn now_ms(&self) -> u64 {
        self()
    }
}
