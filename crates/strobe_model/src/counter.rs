//! The counter state machine with registered outputs.

use crate::control::ControlCode;
use strobe_common::BitWidth;

/// Golden model of a synchronous up/down/load counter.
///
/// The model holds a single state variable, the current count, ranging
/// over the `2^width` values of its bus. Transitions are deterministic
/// given the control code and parallel input; there is no terminal state.
#[derive(Clone, Debug)]
pub struct CounterModel {
    width: BitWidth,
    count: u64,
}

impl CounterModel {
    /// Creates a counter of the given width with the count at zero.
    pub fn new(width: BitWidth) -> Self {
        Self { width, count: 0 }
    }

    /// Returns the counter's bit width.
    pub fn width(&self) -> BitWidth {
        self.width
    }

    /// Returns the current count.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Applies one clock cycle and returns the registered output.
    ///
    /// The returned value is the count *before* the transition commits,
    /// modeling an output register that reflects the state ahead of the
    /// active clock edge. `parallel_in` is truncated to the counter's
    /// width, as a wider bus would be in hardware. All arithmetic wraps
    /// modulo `2^width`.
    pub fn step(&mut self, control: ControlCode, parallel_in: u64) -> u64 {
        let mask = self.width.mask();
        let next = match control {
            ControlCode::Hold => self.count,
            ControlCode::CountUp => self.count.wrapping_add(1) & mask,
            ControlCode::CountDown => self.count.wrapping_sub(1) & mask,
            ControlCode::Load => parallel_in & mask,
        };
        let output = self.count;
        self.count = next;
        output
    }
}
