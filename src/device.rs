use std::mem;
use std::ptr;

use libc::{c_void, size_t};

use crate::cl::ll::*;
use crate::cl::*;
use crate::error::{check, Result};

/// The type of selectable device.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeviceType {
    /// A CPU device.
    CPU,
    /// A GPU device.
    GPU,
}

impl DeviceType {
    /// Converts this enumeration to the corresponding OpenCL flags.
    pub fn to_cl_device_type(self) -> cl_device_type {
        match self {
            DeviceType::CPU => CL_DEVICE_TYPE_CPU,
            DeviceType::GPU => CL_DEVICE_TYPE_GPU | CL_DEVICE_TYPE_ACCELERATOR,
        }
    }
}

/// An OpenCL device.
#[derive(Copy, Clone)]
pub struct Device {
    id: cl_device_id,
}

unsafe impl Sync for Device {}
unsafe impl Send for Device {}

impl Device {
    /// Creates a new device from its OpenCL identifier.
    ///
    /// The identifier validity is not checked.
    pub unsafe fn new_unchecked(id: cl_device_id) -> Device {
        Device { id }
    }

    fn profile_info(&self, name: cl_device_info) -> Result<String> {
        unsafe {
            let mut size = 0 as size_t;

            let status = clGetDeviceInfo(self.id, name, 0, ptr::null_mut(), &mut size);
            check(status, "clGetDeviceInfo (size)")?;

            let mut buf = vec![0u8; size as usize];
            let status = clGetDeviceInfo(
                self.id,
                name,
                size,
                buf.as_mut_ptr() as *mut c_void,
                ptr::null_mut(),
            );
            check(status, "clGetDeviceInfo")?;

            while buf.last() == Some(&0) {
                buf.pop();
            }
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }

    fn scalar_info<T: Copy + Default>(&self, name: cl_device_info) -> Result<T> {
        unsafe {
            let mut value = T::default();
            let status = clGetDeviceInfo(
                self.id,
                name,
                mem::size_of::<T>() as size_t,
                &mut value as *mut T as *mut c_void,
                ptr::null_mut(),
            );
            check(status, "clGetDeviceInfo")?;
            Ok(value)
        }
    }

    /// The device name.
    pub fn name(&self) -> Result<String> {
        self.profile_info(CL_DEVICE_NAME)
    }

    /// The device vendor.
    pub fn vendor(&self) -> Result<String> {
        self.profile_info(CL_DEVICE_VENDOR)
    }

    /// The device profile.
    pub fn profile(&self) -> Result<String> {
        self.profile_info(CL_DEVICE_PROFILE)
    }

    /// The OpenCL version supported by the device.
    pub fn version(&self) -> Result<String> {
        self.profile_info(CL_DEVICE_VERSION)
    }

    /// The extensions supported by the device, space-separated.
    pub fn extensions(&self) -> Result<String> {
        self.profile_info(CL_DEVICE_EXTENSIONS)
    }

    /// Whether the device advertises the given extension.
    ///
    /// GL interop wants `cl_khr_gl_sharing` (or `cl_APPLE_gl_sharing` on
    /// Apple implementations).
    pub fn has_extension(&self, ext: &str) -> Result<bool> {
        Ok(self.extensions()?.split_whitespace().any(|e| e == ext))
    }

    /// The raw device type bits.
    pub fn device_type(&self) -> Result<cl_device_type> {
        self.scalar_info::<cl_device_type>(CL_DEVICE_TYPE)
    }

    /// The maximum number of compute units of this device.
    pub fn compute_units(&self) -> Result<usize> {
        Ok(self.scalar_info::<cl_uint>(CL_DEVICE_MAX_COMPUTE_UNITS)? as usize)
    }

    /// The maximum work-group size of this device.
    pub fn max_work_group_size(&self) -> Result<usize> {
        Ok(self.scalar_info::<size_t>(CL_DEVICE_MAX_WORK_GROUP_SIZE)? as usize)
    }

    /// The global memory size of this device.
    pub fn global_mem_size(&self) -> Result<usize> {
        Ok(self.scalar_info::<cl_ulong>(CL_DEVICE_GLOBAL_MEM_SIZE)? as usize)
    }

    /// The local memory size of this device.
    pub fn local_mem_size(&self) -> Result<usize> {
        Ok(self.scalar_info::<cl_ulong>(CL_DEVICE_LOCAL_MEM_SIZE)? as usize)
    }

    /// The maximum memory allocation size of this device.
    pub fn max_mem_alloc_size(&self) -> Result<usize> {
        Ok(self.scalar_info::<cl_ulong>(CL_DEVICE_MAX_MEM_ALLOC_SIZE)? as usize)
    }

    /// The device OpenCL id.
    pub fn cl_id(&self) -> cl_device_id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_type_flags() {
        assert_eq!(DeviceType::CPU.to_cl_device_type(), CL_DEVICE_TYPE_CPU);
        let gpu = DeviceType::GPU.to_cl_device_type();
        assert_ne!(gpu & CL_DEVICE_TYPE_GPU, 0);
        assert_ne!(gpu & CL_DEVICE_TYPE_ACCELERATOR, 0);
        assert_eq!(gpu & CL_DEVICE_TYPE_CPU, 0);
    }
}
