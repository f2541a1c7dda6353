use std::ptr;
use std::sync::Mutex;

use libc::{c_void, size_t};
use log::debug;

use crate::cl::ll::*;
use crate::cl::*;
use crate::device::{Device, DeviceType};
use crate::error::{check, Result};

// This mutex is used to work around weak OpenCL implementations.
// On some implementations concurrent calls to clGetPlatformIDs
// will cause the implementation to return invalid status.
static PLATFORMS_MUTEX: Mutex<()> = Mutex::new(());

/// Retrieves all the platforms available on the system.
///
/// Returns an empty list when an ICD loader is installed but no vendor
/// implementation is (`CL_PLATFORM_NOT_FOUND_KHR`).
pub fn platforms() -> Result<Vec<Platform>> {
    let mut num_platforms = 0 as cl_uint;

    unsafe {
        let guard = PLATFORMS_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let status = clGetPlatformIDs(0, ptr::null_mut(), &mut num_platforms);
        if status == CL_PLATFORM_NOT_FOUND_KHR {
            return Ok(Vec::new());
        }
        check(status, "clGetPlatformIDs (count)")?;

        let mut ids: Vec<cl_platform_id> = vec![ptr::null_mut(); num_platforms as usize];
        let status = clGetPlatformIDs(num_platforms, ids.as_mut_ptr(), &mut num_platforms);
        check(status, "clGetPlatformIDs")?;

        drop(guard);

        debug!("found {} OpenCL platform(s)", num_platforms);
        Ok(ids.iter().map(|&id| Platform { id }).collect())
    }
}

/// An OpenCL platform.
#[derive(Copy, Clone)]
pub struct Platform {
    id: cl_platform_id,
}

unsafe impl Sync for Platform {}
unsafe impl Send for Platform {}

impl Platform {
    /// Retrieves all the platforms available on the system.
    pub fn all() -> Result<Vec<Platform>> {
        platforms()
    }

    /// Returns the first platform available on the system.
    pub fn first() -> Result<Platform> {
        let mut all = platforms()?;
        if all.is_empty() {
            return Err(crate::error::Error::NoPlatform);
        }
        Ok(all.swap_remove(0))
    }

    fn get_devices_internal(&self, dtype: cl_device_type) -> Result<Vec<Device>> {
        unsafe {
            let mut num_devices = 0;

            debug!("looking for devices matching {:#x}", dtype);

            let status = clGetDeviceIDs(self.id, dtype, 0, ptr::null_mut(), &mut num_devices);
            if status == CL_DEVICE_NOT_FOUND {
                return Ok(Vec::new());
            }
            check(status, "clGetDeviceIDs (count)")?;

            let mut ids: Vec<cl_device_id> = vec![ptr::null_mut(); num_devices as usize];
            let status = clGetDeviceIDs(
                self.id,
                dtype,
                ids.len() as cl_uint,
                ids.as_mut_ptr(),
                &mut num_devices,
            );
            check(status, "clGetDeviceIDs")?;

            Ok(ids.iter().map(|&id| Device::new_unchecked(id)).collect())
        }
    }

    /// Gets all the devices available with this platform.
    pub fn get_devices(&self) -> Result<Vec<Device>> {
        self.get_devices_internal(CL_DEVICE_TYPE_ALL)
    }

    /// Gets all devices of the specified types available with this platform.
    pub fn get_devices_by_types(&self, types: &[DeviceType]) -> Result<Vec<Device>> {
        let mut dtype = 0;
        for &t in types {
            dtype |= t.to_cl_device_type();
        }

        self.get_devices_internal(dtype)
    }

    fn profile_info(&self, name: cl_platform_info) -> Result<String> {
        unsafe {
            let mut size = 0 as size_t;

            let status = clGetPlatformInfo(self.id, name, 0, ptr::null_mut(), &mut size);
            check(status, "clGetPlatformInfo (size)")?;

            let mut buf = vec![0u8; size as usize];
            let status = clGetPlatformInfo(
                self.id,
                name,
                size,
                buf.as_mut_ptr() as *mut c_void,
                ptr::null_mut(),
            );
            check(status, "clGetPlatformInfo")?;

            // Info strings come back NUL-terminated.
            while buf.last() == Some(&0) {
                buf.pop();
            }
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }

    /// Gets the OpenCL platform identifier.
    pub fn get_id(&self) -> cl_platform_id {
        self.id
    }

    /// Gets the platform name.
    pub fn name(&self) -> Result<String> {
        self.profile_info(CL_PLATFORM_NAME)
    }

    /// Gets the platform version.
    pub fn version(&self) -> Result<String> {
        self.profile_info(CL_PLATFORM_VERSION)
    }

    /// Gets the platform profile.
    pub fn profile(&self) -> Result<String> {
        self.profile_info(CL_PLATFORM_PROFILE)
    }

    /// Gets the platform vendor.
    pub fn vendor(&self) -> Result<String> {
        self.profile_info(CL_PLATFORM_VENDOR)
    }

    /// Gets the supported platform extensions.
    pub fn extensions(&self) -> Result<String> {
        self.profile_info(CL_PLATFORM_EXTENSIONS)
    }

    /// Whether the platform advertises the given extension.
    pub fn has_extension(&self, ext: &str) -> Result<bool> {
        Ok(self.extensions()?.split_whitespace().any(|e| e == ext))
    }

    /// Unsafely creates a platform from its identifier.
    ///
    /// The identifier validity is not checked.
    pub unsafe fn from_platform_id(id: cl_platform_id) -> Platform {
        Platform { id }
    }
}
