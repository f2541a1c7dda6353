use std::ptr;

use libc::{c_void, size_t};
use log::{debug, error};

use crate::buffer::{BufferData, Buffer, MapFlags, MappedBuffer};
use crate::cl::ll::*;
use crate::cl::*;
use crate::context::Context;
use crate::device::Device;
use crate::error::{check, Result};
use crate::event::{Event, EventList};
use crate::program::{Kernel, KernelIndex};

fn size_t3(v: [usize; 3]) -> [size_t; 3] {
    [v[0] as size_t, v[1] as size_t, v[2] as size_t]
}

/// An OpenCL command queue, released on drop.
pub struct CommandQueue {
    cqueue: cl_command_queue,
}

unsafe impl Sync for CommandQueue {}
unsafe impl Send for CommandQueue {}

impl CommandQueue {
    /// Creates a new command queue for the given device.
    pub fn new(
        context: &Context,
        device: &Device,
        profiling: bool,
        out_of_order: bool,
    ) -> Result<CommandQueue> {
        let mut props = 0;

        if profiling {
            props |= CL_QUEUE_PROFILING_ENABLE;
        }

        if out_of_order {
            props |= CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE;
        }

        let mut errcode = 0;
        let cqueue =
            unsafe { clCreateCommandQueue(context.cl_id(), device.cl_id(), props, &mut errcode) };

        check(errcode, "clCreateCommandQueue")?;

        debug!(
            "created command queue (profiling: {}, out of order: {})",
            profiling, out_of_order
        );
        Ok(CommandQueue { cqueue })
    }

    /// Blocks until all previously queued commands have been issued to the
    /// device and have completed.
    pub fn finish(&self) -> Result<()> {
        unsafe { check(clFinish(self.cqueue), "clFinish") }
    }

    /// Issues all previously queued commands to the device without waiting
    /// for their completion.
    pub fn flush(&self) -> Result<()> {
        unsafe { check(clFlush(self.cqueue), "clFlush") }
    }

    /// Synchronously enqueues a kernel for execution on the device.
    pub fn enqueue_kernel<I: KernelIndex, E: EventList>(
        &self,
        k: &Kernel,
        global: I,
        local: Option<I>,
        wait_list: E,
    ) -> Result<()> {
        self.enqueue_async_kernel(k, global, local, wait_list)?.wait()
    }

    /// Asynchronously enqueues a kernel for execution on the device.
    pub fn enqueue_async_kernel<I: KernelIndex, E: EventList>(
        &self,
        k: &Kernel,
        global: I,
        local: Option<I>,
        wait_list: E,
    ) -> Result<Event> {
        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let mut e: cl_event = ptr::null_mut();
                let status = clEnqueueNDRangeKernel(
                    self.cqueue,
                    k.cl_id(),
                    I::num_dimensions(),
                    ptr::null(),
                    global.get_ptr(),
                    match local {
                        Some(ref l) => l.get_ptr(),
                        None => ptr::null(),
                    },
                    event_list_length,
                    event_list,
                    &mut e,
                );
                check(status, "clEnqueueNDRangeKernel")?;

                Ok(Event::new_unchecked(e))
            })
        }
    }

    /// Enqueues a kernel to be executed by a single work-item.
    pub fn enqueue_task<E: EventList>(&self, k: &Kernel, wait_list: E) -> Result<Event> {
        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let mut e: cl_event = ptr::null_mut();
                let status =
                    clEnqueueTask(self.cqueue, k.cl_id(), event_list_length, event_list, &mut e);
                check(status, "clEnqueueTask")?;

                Ok(Event::new_unchecked(e))
            })
        }
    }

    fn do_write<T: Copy, U: ?Sized, E>(
        &self,
        mem: &Buffer<T>,
        data: &U,
        wait_list: E,
        out_event: *mut cl_event,
    ) -> Result<()>
    where
        U: BufferData<T>,
        E: EventList,
    {
        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                data.as_raw_data(|raw_data, sz| {
                    assert!(
                        sz == mem.bytes_len(),
                        "mismatched size for writing into a device buffer"
                    );

                    let blocking = if out_event.is_null() { CL_TRUE } else { CL_FALSE };

                    let err = clEnqueueWriteBuffer(
                        self.cqueue,
                        mem.cl_id(),
                        blocking,
                        0,
                        sz,
                        raw_data,
                        event_list_length,
                        event_list,
                        out_event,
                    );

                    check(err, "clEnqueueWriteBuffer")
                })
            })
        }
    }

    /// Synchronously writes `data` to the device-side memory object `mem`.
    pub fn write<T: Copy, U: ?Sized, E>(&self, mem: &Buffer<T>, data: &U, wait_list: E) -> Result<()>
    where
        U: BufferData<T>,
        E: EventList,
    {
        self.do_write(mem, data, wait_list, ptr::null_mut())
    }

    /// Asynchronously writes `data` to the device-side memory object `mem`.
    pub fn write_async<T: Copy, U: ?Sized, E>(
        &self,
        mem: &Buffer<T>,
        data: &U,
        wait_list: E,
    ) -> Result<Event>
    where
        U: BufferData<T>,
        E: EventList,
    {
        let mut e: cl_event = ptr::null_mut();
        self.do_write(mem, data, wait_list, &mut e)?;

        Ok(unsafe { Event::new_unchecked(e) })
    }

    fn do_read<T: Copy, E>(
        &self,
        mem: &Buffer<T>,
        raw_data: *mut c_void,
        sz: size_t,
        wait_list: E,
        out_event: *mut cl_event,
    ) -> Result<()>
    where
        E: EventList,
    {
        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                assert!(
                    sz == mem.bytes_len(),
                    "mismatched size for reading from a device buffer"
                );

                let blocking = if out_event.is_null() { CL_TRUE } else { CL_FALSE };

                let err = clEnqueueReadBuffer(
                    self.cqueue,
                    mem.cl_id(),
                    blocking,
                    0,
                    sz,
                    raw_data,
                    event_list_length,
                    event_list,
                    out_event,
                );

                check(err, "clEnqueueReadBuffer")
            })
        }
    }

    /// Synchronously reads `mem` into the host-side object `out`.
    pub fn read<T: Copy, U: ?Sized, E>(&self, mem: &Buffer<T>, out: &mut U, wait_list: E) -> Result<()>
    where
        U: BufferData<T>,
        E: EventList,
    {
        out.as_raw_data_mut(|raw_data, sz| self.do_read(mem, raw_data, sz, wait_list, ptr::null_mut()))
    }

    /// Asynchronously reads `mem` into the host-side object `out`.
    pub fn read_async<T: Copy, U: ?Sized, E>(
        &self,
        mem: &Buffer<T>,
        out: &mut U,
        wait_list: E,
    ) -> Result<Event>
    where
        U: BufferData<T>,
        E: EventList,
    {
        let mut e: cl_event = ptr::null_mut();

        out.as_raw_data_mut(|raw_data, sz| self.do_read(mem, raw_data, sz, wait_list, &mut e))?;

        Ok(unsafe { Event::new_unchecked(e) })
    }

    /// Reads the whole buffer into a freshly allocated `Vec`.
    pub fn get<T: Copy + Default, E: EventList>(&self, mem: &Buffer<T>, wait_list: E) -> Result<Vec<T>> {
        let mut out = vec![T::default(); mem.len()];
        self.read(mem, &mut out, wait_list)?;
        Ok(out)
    }

    /// Copies `byte_count` bytes between two buffers at the given offsets.
    pub fn copy_buffer<T: Copy, E: EventList>(
        &self,
        src: &Buffer<T>,
        dst: &Buffer<T>,
        src_offset: usize,
        dst_offset: usize,
        byte_count: usize,
        wait_list: E,
    ) -> Result<Event> {
        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let mut e: cl_event = ptr::null_mut();
                let status = clEnqueueCopyBuffer(
                    self.cqueue,
                    src.cl_id(),
                    dst.cl_id(),
                    src_offset as size_t,
                    dst_offset as size_t,
                    byte_count as size_t,
                    event_list_length,
                    event_list,
                    &mut e,
                );
                check(status, "clEnqueueCopyBuffer")?;

                Ok(Event::new_unchecked(e))
            })
        }
    }

    /// Maps `size` bytes of the buffer starting at `offset` into host
    /// address space. Returns the mapping and its completion event.
    pub fn map_buffer<T: Copy, E: EventList>(
        &self,
        mem: &Buffer<T>,
        blocking: bool,
        flags: MapFlags,
        offset: usize,
        size: usize,
        wait_list: E,
    ) -> Result<(MappedBuffer, Event)> {
        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let mut e: cl_event = ptr::null_mut();
                let mut errcode = 0;
                let p = clEnqueueMapBuffer(
                    self.cqueue,
                    mem.cl_id(),
                    if blocking { CL_TRUE } else { CL_FALSE },
                    flags.bits(),
                    offset as size_t,
                    size as size_t,
                    event_list_length,
                    event_list,
                    &mut e,
                    &mut errcode,
                );
                check(errcode, "clEnqueueMapBuffer")?;

                Ok((
                    MappedBuffer {
                        ptr: p,
                        bytes: size,
                        row_pitch: 0,
                        slice_pitch: 0,
                    },
                    Event::new_unchecked(e),
                ))
            })
        }
    }

    /// Maps a region of an image object into host address space. Returns
    /// the mapping (carrying the row and slice pitches) and its event.
    pub fn map_image<T: Copy, E: EventList>(
        &self,
        image: &Buffer<T>,
        blocking: bool,
        flags: MapFlags,
        origin: [usize; 3],
        region: [usize; 3],
        wait_list: E,
    ) -> Result<(MappedBuffer, Event)> {
        let c_origin = size_t3(origin);
        let c_region = size_t3(region);

        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let mut e: cl_event = ptr::null_mut();
                let mut errcode = 0;
                let mut row_pitch: size_t = 0;
                let mut slice_pitch: size_t = 0;
                let p = clEnqueueMapImage(
                    self.cqueue,
                    image.cl_id(),
                    if blocking { CL_TRUE } else { CL_FALSE },
                    flags.bits(),
                    c_origin.as_ptr(),
                    c_region.as_ptr(),
                    &mut row_pitch,
                    &mut slice_pitch,
                    event_list_length,
                    event_list,
                    &mut e,
                    &mut errcode,
                );
                check(errcode, "clEnqueueMapImage")?;

                Ok((
                    MappedBuffer {
                        ptr: p,
                        bytes: 0,
                        row_pitch: row_pitch as usize,
                        slice_pitch: slice_pitch as usize,
                    },
                    Event::new_unchecked(e),
                ))
            })
        }
    }

    /// Unmaps a previously mapped region of `mem`.
    pub fn unmap<T: Copy, E: EventList>(
        &self,
        mem: &Buffer<T>,
        mapped: MappedBuffer,
        wait_list: E,
    ) -> Result<Event> {
        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let mut e: cl_event = ptr::null_mut();
                let status = clEnqueueUnmapMemObject(
                    self.cqueue,
                    mem.cl_id(),
                    mapped.ptr,
                    event_list_length,
                    event_list,
                    &mut e,
                );
                check(status, "clEnqueueUnmapMemObject")?;

                Ok(Event::new_unchecked(e))
            })
        }
    }

    /// Synchronously reads a 2D or 3D image region into host memory.
    pub fn read_image<T: Copy, E: EventList>(
        &self,
        image: &Buffer<T>,
        origin: [usize; 3],
        region: [usize; 3],
        row_pitch: usize,
        slice_pitch: usize,
        data: &mut [u8],
        wait_list: E,
    ) -> Result<()> {
        let c_origin = size_t3(origin);
        let c_region = size_t3(region);

        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let status = clEnqueueReadImage(
                    self.cqueue,
                    image.cl_id(),
                    CL_TRUE,
                    c_origin.as_ptr(),
                    c_region.as_ptr(),
                    row_pitch as size_t,
                    slice_pitch as size_t,
                    data.as_mut_ptr() as *mut c_void,
                    event_list_length,
                    event_list,
                    ptr::null_mut(),
                );
                check(status, "clEnqueueReadImage")
            })
        }
    }

    /// Synchronously writes host memory into a 2D or 3D image region.
    pub fn write_image<T: Copy, E: EventList>(
        &self,
        image: &Buffer<T>,
        origin: [usize; 3],
        region: [usize; 3],
        row_pitch: usize,
        slice_pitch: usize,
        data: &[u8],
        wait_list: E,
    ) -> Result<()> {
        let c_origin = size_t3(origin);
        let c_region = size_t3(region);

        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let status = clEnqueueWriteImage(
                    self.cqueue,
                    image.cl_id(),
                    CL_TRUE,
                    c_origin.as_ptr(),
                    c_region.as_ptr(),
                    row_pitch as size_t,
                    slice_pitch as size_t,
                    data.as_ptr() as *const c_void,
                    event_list_length,
                    event_list,
                    ptr::null_mut(),
                );
                check(status, "clEnqueueWriteImage")
            })
        }
    }

    /// Synchronously acquires an OpenCL memory object that was created
    /// from an OpenGL object. The GL side must have finished using it.
    pub fn acquire_gl_buffer<T: Copy, E: EventList>(&self, mem: &Buffer<T>, wait_list: E) -> Result<()> {
        self.acquire_gl_buffer_async(mem, wait_list)?.wait()
    }

    /// Asynchronously acquires an OpenCL memory object that was created
    /// from an OpenGL object.
    pub fn acquire_gl_buffer_async<T: Copy, E: EventList>(
        &self,
        mem: &Buffer<T>,
        wait_list: E,
    ) -> Result<Event> {
        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let mut e: cl_event = ptr::null_mut();
                let status = clEnqueueAcquireGLObjects(
                    self.cqueue,
                    1,
                    &mem.cl_id(),
                    event_list_length,
                    event_list,
                    &mut e,
                );

                check(status, "clEnqueueAcquireGLObjects")?;

                Ok(Event::new_unchecked(e))
            })
        }
    }

    /// Synchronously releases an acquired GL-backed memory object back to
    /// OpenGL.
    pub fn release_gl_buffer<T: Copy, E: EventList>(&self, mem: &Buffer<T>, wait_list: E) -> Result<()> {
        self.release_gl_buffer_async(mem, wait_list)?.wait()
    }

    /// Asynchronously releases an acquired GL-backed memory object back to
    /// OpenGL.
    pub fn release_gl_buffer_async<T: Copy, E: EventList>(
        &self,
        mem: &Buffer<T>,
        wait_list: E,
    ) -> Result<Event> {
        unsafe {
            wait_list.as_event_list(|event_list, event_list_length| {
                let mut e: cl_event = ptr::null_mut();
                let status = clEnqueueReleaseGLObjects(
                    self.cqueue,
                    1,
                    &mem.cl_id(),
                    event_list_length,
                    event_list,
                    &mut e,
                );

                check(status, "clEnqueueReleaseGLObjects")?;

                Ok(Event::new_unchecked(e))
            })
        }
    }
}

impl Drop for CommandQueue {
    fn drop(&mut self) {
        unsafe {
            let status = clReleaseCommandQueue(self.cqueue);
            if status != CL_SUCCESS {
                error!("clReleaseCommandQueue failed in drop: {}", status);
            }
        }
    }
}
