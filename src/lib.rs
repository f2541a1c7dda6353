#![allow(improper_ctypes)]

//! OpenCL bindings for Rust, with OpenGL interop.
//!
//! The [`cl`] module holds the raw C API surface and normalizes the
//! platform differences in how the OpenCL and OpenGL headers are organized:
//! on Apple targets the OpenCL and OpenGL frameworks are linked and the CGL
//! share-group entry points are available, everywhere else only the OpenCL
//! library is linked. The remaining modules wrap that surface in safe,
//! `Result`-returning types that release their handles on drop.
//!
//! ```no_run
//! use clgl::hl::create_compute_context;
//! use clgl::buffer::MemFlags;
//!
//! # fn main() -> clgl::error::Result<()> {
//! let (device, ctx, queue) = create_compute_context(false)?;
//!
//! let prog = ctx.create_program_from_source(
//!     "__kernel void twice(__global int *v) { v[get_global_id(0)] *= 2; }",
//! )?;
//! prog.build(&device)?;
//! let kernel = prog.create_kernel("twice")?;
//!
//! let buf = ctx.create_buffer_from(&[1i32, 2, 3, 4][..], MemFlags::READ_WRITE)?;
//! kernel.set_arg(0, &buf)?;
//! queue.enqueue_kernel(&kernel, buf.len(), None, ())?;
//!
//! let out: Vec<i32> = queue.get(&buf, ())?;
//! assert_eq!(out, vec![2, 4, 6, 8]);
//! # Ok(())
//! # }
//! ```

#[link(name = "OpenCL", kind = "framework")]
#[cfg(target_os = "macos")]
extern "C" {}

// CGL lives in the OpenGL framework. Apple targets only; no OpenGL
// linkage is emitted anywhere else.
#[link(name = "OpenGL", kind = "framework")]
#[cfg(target_os = "macos")]
extern "C" {}

#[link(name = "OpenCL")]
#[cfg(not(target_os = "macos"))]
extern "C" {}

/// Low-level OpenCL bindings. These should primarily be used by the
/// higher level features in this library.
pub mod cl;

pub mod buffer;
pub mod command_queue;
pub mod context;
pub mod device;
pub mod error;
pub mod event;
pub mod hl;
pub mod image;
pub mod interop;
pub mod platform;
pub mod program;

pub use crate::buffer::{Buffer, BufferData, MapFlags, MappedBuffer, MemFlags};
pub use crate::command_queue::CommandQueue;
pub use crate::context::Context;
pub use crate::device::{Device, DeviceType};
pub use crate::error::{Error, Result, Status};
pub use crate::event::{Event, EventList};
pub use crate::image::{ChannelDataType, ChannelOrder, ImageFormat, MemObjectType};
pub use crate::interop::ContextProperties;
pub use crate::platform::{platforms, Platform};
pub use crate::program::{Kernel, KernelArg, KernelIndex, Program};
