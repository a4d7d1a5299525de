//! Directed and randomized stimulus selection.

use rand::Rng;
use strobe_common::BitWidth;
use strobe_model::ControlCode;

/// The fixed parallel input driven by the directed load case.
const DIRECTED_LOAD_VALUE: u64 = 42;

/// One cycle of stimulus: a control code and a parallel input value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stimulus {
    /// The control code to drive.
    pub control: ControlCode,
    /// The parallel input to drive.
    pub parallel_in: u64,
}

/// Returns the four directed cases emitted before any randomized stimulus.
///
/// In order: a parallel load of a fixed nonzero value, a hold, a count up,
/// and a count down, so every control branch is covered at least once
/// regardless of the random seed. The load value is 42 truncated to the
/// width; at width 1 that truncates to zero, so 1 is driven instead to
/// keep the load observable.
pub fn directed_prologue(width: BitWidth) -> [Stimulus; 4] {
    let masked = DIRECTED_LOAD_VALUE & width.mask();
    let load_value = if masked == 0 { 1 } else { masked };
    [
        Stimulus {
            control: ControlCode::Load,
            parallel_in: load_value,
        },
        Stimulus {
            control: ControlCode::Hold,
            parallel_in: 0,
        },
        Stimulus {
            control: ControlCode::CountUp,
            parallel_in: 0,
        },
        Stimulus {
            control: ControlCode::CountDown,
            parallel_in: 0,
        },
    ]
}

/// Draws one randomized stimulus.
///
/// The control code is uniform over the four modes and the parallel input
/// is uniform over `[0, 2^width - 1]`.
pub fn random_stimulus(rng: &mut impl Rng, width: BitWidth) -> Stimulus {
    Stimulus {
        control: ControlCode::from_bits(rng.gen_range(0..4u8)),
        parallel_in: rng.gen_range(0..=width.max_value()),
    }
}
