//! Error handling utilities.
//!
//! Every fallible operation in the crate returns [`Result`]. Raw status
//! codes coming back from the OpenCL runtime are mapped to [`Status`] and
//! wrapped in [`Error::Api`] together with a short description of the call
//! that failed.

use std::fmt;

use thiserror::Error;

use crate::cl::*;

/// An OpenCL status code, as returned by the C API.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Status(pub cl_int);

impl Status {
    /// The symbolic name of this status code, if it is one we know about.
    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            CL_SUCCESS => "CL_SUCCESS",
            CL_DEVICE_NOT_FOUND => "CL_DEVICE_NOT_FOUND",
            CL_DEVICE_NOT_AVAILABLE => "CL_DEVICE_NOT_AVAILABLE",
            CL_COMPILER_NOT_AVAILABLE => "CL_COMPILER_NOT_AVAILABLE",
            CL_MEM_OBJECT_ALLOCATION_FAILURE => "CL_MEM_OBJECT_ALLOCATION_FAILURE",
            CL_OUT_OF_RESOURCES => "CL_OUT_OF_RESOURCES",
            CL_OUT_OF_HOST_MEMORY => "CL_OUT_OF_HOST_MEMORY",
            CL_PROFILING_INFO_NOT_AVAILABLE => "CL_PROFILING_INFO_NOT_AVAILABLE",
            CL_MEM_COPY_OVERLAP => "CL_MEM_COPY_OVERLAP",
            CL_IMAGE_FORMAT_MISMATCH => "CL_IMAGE_FORMAT_MISMATCH",
            CL_IMAGE_FORMAT_NOT_SUPPORTED => "CL_IMAGE_FORMAT_NOT_SUPPORTED",
            CL_BUILD_PROGRAM_FAILURE => "CL_BUILD_PROGRAM_FAILURE",
            CL_MAP_FAILURE => "CL_MAP_FAILURE",
            CL_MISALIGNED_SUB_BUFFER_OFFSET => "CL_MISALIGNED_SUB_BUFFER_OFFSET",
            CL_EXEC_STATUS_ERROR_FOR_EVENTS_IN_WAIT_LIST => {
                "CL_EXEC_STATUS_ERROR_FOR_EVENTS_IN_WAIT_LIST"
            }
            CL_COMPILE_PROGRAM_FAILURE => "CL_COMPILE_PROGRAM_FAILURE",
            CL_LINKER_NOT_AVAILABLE => "CL_LINKER_NOT_AVAILABLE",
            CL_LINK_PROGRAM_FAILURE => "CL_LINK_PROGRAM_FAILURE",
            CL_DEVICE_PARTITION_FAILED => "CL_DEVICE_PARTITION_FAILED",
            CL_KERNEL_ARG_INFO_NOT_AVAILABLE => "CL_KERNEL_ARG_INFO_NOT_AVAILABLE",
            CL_INVALID_VALUE => "CL_INVALID_VALUE",
            CL_INVALID_DEVICE_TYPE => "CL_INVALID_DEVICE_TYPE",
            CL_INVALID_PLATFORM => "CL_INVALID_PLATFORM",
            CL_INVALID_DEVICE => "CL_INVALID_DEVICE",
            CL_INVALID_CONTEXT => "CL_INVALID_CONTEXT",
            CL_INVALID_QUEUE_PROPERTIES => "CL_INVALID_QUEUE_PROPERTIES",
            CL_INVALID_COMMAND_QUEUE => "CL_INVALID_COMMAND_QUEUE",
            CL_INVALID_HOST_PTR => "CL_INVALID_HOST_PTR",
            CL_INVALID_MEM_OBJECT => "CL_INVALID_MEM_OBJECT",
            CL_INVALID_IMAGE_FORMAT_DESCRIPTOR => "CL_INVALID_IMAGE_FORMAT_DESCRIPTOR",
            CL_INVALID_IMAGE_SIZE => "CL_INVALID_IMAGE_SIZE",
            CL_INVALID_SAMPLER => "CL_INVALID_SAMPLER",
            CL_INVALID_BINARY => "CL_INVALID_BINARY",
            CL_INVALID_BUILD_OPTIONS => "CL_INVALID_BUILD_OPTIONS",
            CL_INVALID_PROGRAM => "CL_INVALID_PROGRAM",
            CL_INVALID_PROGRAM_EXECUTABLE => "CL_INVALID_PROGRAM_EXECUTABLE",
            CL_INVALID_KERNEL_NAME => "CL_INVALID_KERNEL_NAME",
            CL_INVALID_KERNEL_DEFINITION => "CL_INVALID_KERNEL_DEFINITION",
            CL_INVALID_KERNEL => "CL_INVALID_KERNEL",
            CL_INVALID_ARG_INDEX => "CL_INVALID_ARG_INDEX",
            CL_INVALID_ARG_VALUE => "CL_INVALID_ARG_VALUE",
            CL_INVALID_ARG_SIZE => "CL_INVALID_ARG_SIZE",
            CL_INVALID_KERNEL_ARGS => "CL_INVALID_KERNEL_ARGS",
            CL_INVALID_WORK_DIMENSION => "CL_INVALID_WORK_DIMENSION",
            CL_INVALID_WORK_GROUP_SIZE => "CL_INVALID_WORK_GROUP_SIZE",
            CL_INVALID_WORK_ITEM_SIZE => "CL_INVALID_WORK_ITEM_SIZE",
            CL_INVALID_GLOBAL_OFFSET => "CL_INVALID_GLOBAL_OFFSET",
            CL_INVALID_EVENT_WAIT_LIST => "CL_INVALID_EVENT_WAIT_LIST",
            CL_INVALID_EVENT => "CL_INVALID_EVENT",
            CL_INVALID_OPERATION => "CL_INVALID_OPERATION",
            CL_INVALID_GL_OBJECT => "CL_INVALID_GL_OBJECT",
            CL_INVALID_BUFFER_SIZE => "CL_INVALID_BUFFER_SIZE",
            CL_INVALID_MIP_LEVEL => "CL_INVALID_MIP_LEVEL",
            CL_INVALID_GLOBAL_WORK_SIZE => "CL_INVALID_GLOBAL_WORK_SIZE",
            CL_INVALID_PROPERTY => "CL_INVALID_PROPERTY",
            CL_INVALID_GL_SHAREGROUP_REFERENCE_KHR => "CL_INVALID_GL_SHAREGROUP_REFERENCE_KHR",
            CL_PLATFORM_NOT_FOUND_KHR => "CL_PLATFORM_NOT_FOUND_KHR",
            _ => return None,
        };
        Some(name)
    }

    pub fn is_success(self) -> bool {
        self.0 == CL_SUCCESS
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "unknown OpenCL status ({})", self.0),
        }
    }
}

/// The error type for every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An OpenCL call returned a failure status.
    #[error("{context}: {status}")]
    Api {
        status: Status,
        context: &'static str,
    },

    /// No OpenCL platform is available on this system.
    #[error("no OpenCL platform found")]
    NoPlatform,

    /// No OpenCL device matched the requested type.
    #[error("no OpenCL device found")]
    NoDevice,

    /// `clBuildProgram` failed; the compiler log is attached.
    #[error("program build failed:\n{log}")]
    BuildFailed { log: String },

    /// A kernel name or program source contained an interior NUL byte.
    #[error("string contains an interior NUL byte: {0}")]
    InvalidString(#[from] std::ffi::NulError),

    /// GL sharing was requested but no GL context is current on this thread.
    #[error("no current OpenGL context to share with")]
    NoCurrentGlContext,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Maps a raw status code to `Ok(())` or an [`Error::Api`] naming the
/// operation that produced it.
pub fn check(status: cl_int, context: &'static str) -> Result<()> {
    if status == CL_SUCCESS {
        Ok(())
    } else {
        Err(Error::Api {
            status: Status(status),
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_checks_clean() {
        assert!(check(CL_SUCCESS, "noop").is_ok());
        assert!(Status(CL_SUCCESS).is_success());
    }

    #[test]
    fn known_status_names() {
        assert_eq!(Status(CL_DEVICE_NOT_FOUND).name(), Some("CL_DEVICE_NOT_FOUND"));
        assert_eq!(Status(CL_INVALID_GL_OBJECT).name(), Some("CL_INVALID_GL_OBJECT"));
        assert_eq!(Status(-9999).name(), None);
    }

    #[test]
    fn api_error_display_includes_context() {
        let err = check(CL_INVALID_VALUE, "clSetKernelArg").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("clSetKernelArg"));
        assert!(msg.contains("CL_INVALID_VALUE"));
    }
}
