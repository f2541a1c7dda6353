//! One-call helpers for setting up a complete compute context.

use crate::command_queue::CommandQueue;
use crate::context::Context;
use crate::device::{Device, DeviceType};
use crate::error::{Error, Result};

/// The preferred device type for compute context creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PreferredType {
    /// Pick the first available device.
    Any,

    /// Pick the first CPU device. Fall back to any device if none is found.
    CpuPreferred,
    /// Pick the first GPU device. Fall back to any device if none is found.
    GpuPreferred,

    /// Pick only the first available CPU device. Fail if none is found.
    CpuOnly,
    /// Pick only the first available GPU device. Fail if none is found.
    GpuOnly,
}

/// Creates a complete compute context.
///
/// This creates a context and command queue for the first device of the
/// first platform. The command queue has out-of-order command execution
/// disabled.
pub fn create_compute_context(profiling: bool) -> Result<(Device, Context, CommandQueue)> {
    let platforms = crate::platforms()?;
    let platform = platforms.first().ok_or(Error::NoPlatform)?;

    let mut devices = platform.get_devices()?;
    if devices.is_empty() {
        return Err(Error::NoDevice);
    }

    let device = devices.remove(0);
    let context = Context::new(&device)?;
    let queue = CommandQueue::new(&context, &device, profiling, false)?;
    Ok((device, context, queue))
}

/// Attempts to create a complete compute context for the specified device
/// type.
///
/// This creates a context and command queue for the first device of the
/// specified type on the first platform that contains one. The `Preferred`
/// variants fall back to any device type when no match exists; the `Only`
/// variants fail instead.
pub fn create_compute_context_prefer(
    cltype: PreferredType,
    profiling: bool,
) -> Result<(Device, Context, CommandQueue)> {
    let platforms = crate::platforms()?;
    for platform in &platforms {
        let types: &[DeviceType] = match cltype {
            PreferredType::Any => &[DeviceType::CPU, DeviceType::GPU],
            PreferredType::CpuPreferred | PreferredType::CpuOnly => &[DeviceType::CPU],
            PreferredType::GpuPreferred | PreferredType::GpuOnly => &[DeviceType::GPU],
        };

        let mut devices = platform.get_devices_by_types(types)?;
        if !devices.is_empty() {
            let device = devices.remove(0);
            let context = Context::new(&device)?;
            let queue = CommandQueue::new(&context, &device, profiling, false)?;
            return Ok((device, context, queue));
        }
    }

    match cltype {
        PreferredType::Any | PreferredType::CpuPreferred | PreferredType::GpuPreferred => {
            create_compute_context(profiling)
        }
        _ => Err(Error::NoDevice),
    }
}
