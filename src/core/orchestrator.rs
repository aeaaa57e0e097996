// Query validation and multi-device aggregation

use rand::Rng;
use std::collections::HashSet;

use crate::core::error::{Result, UsageError};
use crate::core::generator::generate;
use crate::core::model::{Device, UsageReport, Window};

/// Build a report for the raw `duration` and `device` query values.
///
/// Devices are comma separated and taken verbatim (no trimming). The first
/// offending token in input order aborts the whole request.
pub fn handle<R: Rng>(
    window_param: &str,
    device_param: &str,
    rng: &mut R,
) -> Result<UsageReport> {
    let window = Window::from_param(window_param).ok_or_else(|| UsageError::InvalidWindow {
        value: window_param.to_string(),
    })?;

    let tokens: Vec<&str> = device_param.split(',').collect();
    let mut seen = HashSet::with_capacity(tokens.len());
    let mut report = UsageReport::with_capacity(tokens.len());

    for token in tokens {
        if !seen.insert(token) {
            return Err(UsageError::DuplicateDevice {
                name: token.to_string(),
            });
        }

        let device = Device::from_param(token).ok_or_else(|| UsageError::UnknownDevice {
            name: token.to_string(),
        })?;

        report.insert(device, generate(window, device.drifts_upward(), rng));
    }

    Ok(report)
}
