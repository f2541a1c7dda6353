use std::ffi::CString;
use std::mem;
use std::ptr;

use libc::{c_void, size_t};
use log::{debug, error};

use crate::cl::ll::*;
use crate::cl::*;
use crate::device::Device;
use crate::error::{check, Error, Result};

/// Represents an OpenCL program, which is a collection of kernels.
///
/// Create these using
/// [`Context::create_program_from_source`](crate::context::Context::create_program_from_source)
/// or
/// [`Context::create_program_from_binary`](crate::context::Context::create_program_from_binary).
pub struct Program {
    prg: cl_program,
}

unsafe impl Sync for Program {}
unsafe impl Send for Program {}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            let status = clReleaseProgram(self.prg);
            if status != CL_SUCCESS {
                error!("clReleaseProgram failed in drop: {}", status);
            }
        }
    }
}

impl Program {
    /// Creates a new program from its OpenCL pointer.
    ///
    /// The pointer validity is not checked.
    pub unsafe fn new_unchecked(prg: cl_program) -> Program {
        Program { prg }
    }

    /// Builds the program for a given device.
    ///
    /// Returns the build log on success; failure returns
    /// [`Error::BuildFailed`] carrying the same log.
    pub fn build(&self, device: &Device) -> Result<String> {
        unsafe {
            let ret = clBuildProgram(
                self.prg,
                1,
                &device.cl_id(),
                ptr::null(),
                None,
                ptr::null_mut(),
            );

            // Fetch the build log whether or not the build worked.
            let mut size = 0 as size_t;
            let status = clGetProgramBuildInfo(
                self.prg,
                device.cl_id(),
                CL_PROGRAM_BUILD_LOG,
                0,
                ptr::null_mut(),
                &mut size,
            );
            check(status, "clGetProgramBuildInfo (size)")?;

            let mut buf = vec![0u8; size as usize];
            let status = clGetProgramBuildInfo(
                self.prg,
                device.cl_id(),
                CL_PROGRAM_BUILD_LOG,
                buf.len() as size_t,
                buf.as_mut_ptr() as *mut c_void,
                ptr::null_mut(),
            );
            check(status, "clGetProgramBuildInfo")?;

            while buf.last() == Some(&0) {
                buf.pop();
            }
            let log = String::from_utf8_lossy(&buf).into_owned();

            if ret == CL_SUCCESS {
                debug!("program build succeeded");
                Ok(log)
            } else {
                debug!("program build failed: {}", log);
                Err(Error::BuildFailed { log })
            }
        }
    }

    /// Retrieves a kernel object by name.
    pub fn create_kernel(&self, name: &str) -> Result<Kernel> {
        let name = CString::new(name)?;
        let mut errcode = 0;

        let kernel = unsafe { clCreateKernel(self.prg, name.as_ptr(), &mut errcode) };

        check(errcode, "clCreateKernel")?;

        Ok(Kernel { kernel })
    }
}

/// An OpenCL kernel object, released on drop.
pub struct Kernel {
    kernel: cl_kernel,
}

unsafe impl Sync for Kernel {}
unsafe impl Send for Kernel {}

impl Drop for Kernel {
    fn drop(&mut self) {
        unsafe {
            let status = clReleaseKernel(self.kernel);
            if status != CL_SUCCESS {
                error!("clReleaseKernel failed in drop: {}", status);
            }
        }
    }
}

impl Kernel {
    /// The underlying OpenCL kernel pointer.
    pub fn cl_id(&self) -> cl_kernel {
        self.kernel
    }

    /// Sets the i-th argument of this kernel.
    pub fn set_arg<T: KernelArg>(&self, i: usize, x: &T) -> Result<()> {
        unsafe {
            let (size, p) = x.get_value();
            let ret = clSetKernelArg(self.kernel, i as cl_uint, size, p);
            check(ret, "clSetKernelArg")
        }
    }

    /// Binds the i-th argument to `len` elements of device-local memory.
    pub fn alloc_local<T>(&self, i: usize, len: usize) -> Result<()> {
        unsafe {
            let bytes = (len * mem::size_of::<T>()) as size_t;
            let ret = clSetKernelArg(self.kernel, i as cl_uint, bytes, ptr::null());
            check(ret, "clSetKernelArg (local)")
        }
    }
}

/// Trait implemented by valid kernel arguments.
pub trait KernelArg {
    /// Gets the size (in bytes) of this kernel argument and an
    /// OpenCL-compatible pointer to its value.
    fn get_value(&self) -> (size_t, *const c_void);
}

macro_rules! scalar_kernel_arg {
    ($t:ty) => {
        impl KernelArg for $t {
            fn get_value(&self) -> (size_t, *const c_void) {
                (
                    mem::size_of::<$t>() as size_t,
                    self as *const $t as *const c_void,
                )
            }
        }
    };
}

scalar_kernel_arg!(isize);
scalar_kernel_arg!(usize);
scalar_kernel_arg!(u32);
scalar_kernel_arg!(u64);
scalar_kernel_arg!(i32);
scalar_kernel_arg!(i64);
scalar_kernel_arg!(f32);
scalar_kernel_arg!(f64);
scalar_kernel_arg!([f32; 2]);
scalar_kernel_arg!([f64; 2]);

// float3/double3 take the size of a 4-element vector, per the OpenCL C
// alignment rules.
impl KernelArg for [f32; 3] {
    fn get_value(&self) -> (size_t, *const c_void) {
        (
            (4 * mem::size_of::<f32>()) as size_t,
            self.as_ptr() as *const c_void,
        )
    }
}

impl KernelArg for [f64; 3] {
    fn get_value(&self) -> (size_t, *const c_void) {
        (
            (4 * mem::size_of::<f64>()) as size_t,
            self.as_ptr() as *const c_void,
        )
    }
}

/// Trait implemented by a valid kernel work size (1, 2 or 3 dimensions).
pub trait KernelIndex: Sized {
    /// The number of dimensions (up to 3) of this kernel index.
    fn num_dimensions() -> cl_uint;

    /// Returns an OpenCL-compatible pointer to this index.
    fn get_ptr(&self) -> *const size_t;
}

impl KernelIndex for usize {
    fn num_dimensions() -> cl_uint {
        1
    }

    fn get_ptr(&self) -> *const size_t {
        self as *const usize as *const size_t
    }
}

impl KernelIndex for (usize, usize) {
    fn num_dimensions() -> cl_uint {
        2
    }

    fn get_ptr(&self) -> *const size_t {
        self as *const (usize, usize) as *const size_t
    }
}

impl KernelIndex for (usize, usize, usize) {
    fn num_dimensions() -> cl_uint {
        3
    }

    fn get_ptr(&self) -> *const size_t {
        self as *const (usize, usize, usize) as *const size_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_index_dimensions() {
        assert_eq!(<usize as KernelIndex>::num_dimensions(), 1);
        assert_eq!(<(usize, usize) as KernelIndex>::num_dimensions(), 2);
        assert_eq!(<(usize, usize, usize) as KernelIndex>::num_dimensions(), 3);
    }

    #[test]
    fn scalar_arg_sizes() {
        let x = 42u32;
        let (size, ptr) = x.get_value();
        assert_eq!(size as usize, 4);
        assert!(!ptr.is_null());

        let v3 = [1.0f32, 2.0, 3.0];
        let (size, _) = v3.get_value();
        assert_eq!(size as usize, 16);
    }
}
