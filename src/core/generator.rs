// Bounded random-walk usage generator

use rand::Rng;

use crate::core::constants::INITIAL_HIGH;
use crate::core::model::{Sample, Series, StepBounds, Window};

/// Generate one series for `window`.
///
/// Each value is drawn uniformly from an inclusive range centred on the
/// previous value and clamped to [0, 100]. With `drift_upward` the rise
/// allowance exceeds the fall allowance, so the walk tends to climb.
pub fn generate<R: Rng>(window: Window, drift_upward: bool, rng: &mut R) -> Series {
    let bounds = StepBounds::for_mode(window, drift_upward);
    let mut series = Series::with_capacity(window.sample_count());

    let (mut low, mut high) = (0u8, INITIAL_HIGH);

    for toffset in (0..window.duration_secs()).step_by(window.interval_secs() as usize) {
        let usage = rng.gen_range(low..=high);
        series.push(Sample { toffset, usage });

        (low, high) = bounds.next_range(usage);
    }

    series
}
