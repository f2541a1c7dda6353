use std::ffi::CString;
use std::ptr;

use libc::size_t;
use log::{debug, error};

use crate::buffer::{Buffer, BufferData, MemFlags};
use crate::cl::ll::*;
use crate::cl::*;
use crate::device::Device;
use crate::error::{check, Result};
use crate::event::Event;
use crate::image::{ImageFormat, MemObjectType};
use crate::interop::ContextProperties;
use crate::program::Program;

// clGetSupportedImageFormats is queried with a fixed-size buffer.
const MAX_IMAGE_FORMATS: usize = 256;

/// An OpenCL context, released on drop.
pub struct Context {
    ctx: cl_context,
}

unsafe impl Sync for Context {}
unsafe impl Send for Context {}

impl Context {
    /// Creates a context for a single device.
    pub fn new(dev: &Device) -> Result<Context> {
        let mut errcode = 0;
        let ctx = unsafe {
            clCreateContext(
                ptr::null(),
                1,
                &dev.cl_id(),
                None,
                ptr::null_mut(),
                &mut errcode,
            )
        };

        check(errcode, "clCreateContext")?;

        debug!("created context for one device");
        Ok(Context { ctx })
    }

    /// Creates an OpenCL context for a set of devices with the given
    /// properties (see [`crate::interop`] for GL-sharing properties).
    pub fn with_properties(devs: &[Device], props: &ContextProperties) -> Result<Context> {
        let ids: Vec<cl_device_id> = devs.iter().map(|dev| dev.cl_id()).collect();
        let raw_props = props.to_raw();

        let mut errcode = 0;
        let ctx = unsafe {
            clCreateContext(
                if props.is_empty() {
                    ptr::null()
                } else {
                    raw_props.as_ptr()
                },
                ids.len() as cl_uint,
                ids.as_ptr(),
                None,
                ptr::null_mut(),
                &mut errcode,
            )
        };

        check(errcode, "clCreateContext")?;

        debug!("created context for {} device(s)", devs.len());
        Ok(Context { ctx })
    }

    /// Creates a buffer initialized with the content of `data`.
    pub fn create_buffer_from<T: Copy, D: ?Sized>(
        &self,
        data: &D,
        flags: MemFlags,
    ) -> Result<Buffer<T>>
    where
        D: BufferData<T>,
    {
        Buffer::new(self, data, flags)
    }

    /// Creates an uninitialized buffer of `len` elements of type `T`.
    pub fn create_buffer<T: Copy>(&self, len: usize, flags: MemFlags) -> Result<Buffer<T>> {
        Buffer::new_uninitialized(self, len, flags)
    }

    /// Wraps an OpenGL renderbuffer object as an OpenCL buffer of `len`
    /// elements. The context must have been created with GL-sharing
    /// properties.
    pub fn create_buffer_from_gl_renderbuffer<T: Copy>(
        &self,
        renderbuffer: cl_GLuint,
        len: usize,
        flags: MemFlags,
    ) -> Result<Buffer<T>> {
        let mut errcode = 0;
        let mem = unsafe {
            clCreateFromGLRenderbuffer(self.ctx, flags.bits(), renderbuffer, &mut errcode)
        };

        check(errcode, "clCreateFromGLRenderbuffer")?;

        Ok(unsafe { Buffer::from_raw(mem, len) })
    }

    /// Wraps level 0 of an OpenGL 2D texture as an OpenCL buffer of `len`
    /// elements. The context must have been created with GL-sharing
    /// properties.
    pub fn create_buffer_from_gl_texture_2d<T: Copy>(
        &self,
        texture: cl_GLuint,
        len: usize,
        flags: MemFlags,
    ) -> Result<Buffer<T>> {
        let mut errcode = 0;
        let mem = unsafe {
            clCreateFromGLTexture(
                self.ctx,
                flags.bits(),
                GL_TEXTURE_2D,
                0,
                texture,
                &mut errcode,
            )
        };

        check(errcode, "clCreateFromGLTexture")?;

        Ok(unsafe { Buffer::from_raw(mem, len) })
    }

    /// Creates a program from OpenCL C source.
    pub fn create_program_from_source(&self, src: &str) -> Result<Program> {
        let src = CString::new(src)?;
        let mut errcode = 0;

        let prg = unsafe {
            clCreateProgramWithSource(
                self.ctx,
                1,
                &src.as_ptr(),
                ptr::null(),
                &mut errcode,
            )
        };

        check(errcode, "clCreateProgramWithSource")?;

        Ok(unsafe { Program::new_unchecked(prg) })
    }

    /// Creates a program from a device-specific binary.
    pub fn create_program_from_binary(&self, dev: &Device, binary: &[u8]) -> Result<Program> {
        let mut errcode = 0;
        let mut binary_status = 0;
        let len = binary.len() as size_t;

        let prg = unsafe {
            clCreateProgramWithBinary(
                self.ctx,
                1,
                &dev.cl_id(),
                &len,
                &binary.as_ptr(),
                &mut binary_status,
                &mut errcode,
            )
        };

        check(binary_status, "clCreateProgramWithBinary (binary status)")?;
        check(errcode, "clCreateProgramWithBinary")?;

        Ok(unsafe { Program::new_unchecked(prg) })
    }

    /// Creates a user event, initially in the submitted state.
    pub fn create_user_event(&self) -> Result<Event> {
        let mut errcode = 0;
        let e = unsafe { clCreateUserEvent(self.ctx, &mut errcode) };

        check(errcode, "clCreateUserEvent")?;

        Ok(unsafe { Event::new_unchecked(e) })
    }

    /// The image formats this context supports for the given flags and
    /// memory object type. Formats using vendor-specific channel layouts
    /// are skipped.
    pub fn supported_image_formats(
        &self,
        flags: MemFlags,
        image_type: MemObjectType,
    ) -> Result<Vec<ImageFormat>> {
        let mut formats = [cl_image_format {
            image_channel_order: 0,
            image_channel_data_type: 0,
        }; MAX_IMAGE_FORMATS];
        let mut num_formats = 0 as cl_uint;

        unsafe {
            let status = clGetSupportedImageFormats(
                self.ctx,
                flags.bits(),
                image_type as cl_mem_object_type,
                MAX_IMAGE_FORMATS as cl_uint,
                formats.as_mut_ptr(),
                &mut num_formats,
            );
            check(status, "clGetSupportedImageFormats")?;
        }

        Ok(formats[..num_formats as usize]
            .iter()
            .filter_map(|&f| ImageFormat::from_raw(f))
            .collect())
    }

    /// The underlying OpenCL context identifier.
    pub fn cl_id(&self) -> cl_context {
        self.ctx
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe {
            let status = clReleaseContext(self.ctx);
            if status != CL_SUCCESS {
                error!("clReleaseContext failed in drop: {}", status);
            }
        }
    }
}
