//! Device-side memory objects.

use std::marker::PhantomData;
use std::mem;
use std::ops::{BitOr, BitOrAssign};
use std::ptr;

use libc::{c_void, size_t};
use log::error;

use crate::cl::ll::*;
use crate::cl::*;
use crate::context::Context;
use crate::error::{check, Result};
use crate::program::KernelArg;

/// Memory object creation flags (`CL_MEM_*`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct MemFlags(cl_mem_flags);

impl MemFlags {
    pub const READ_WRITE: MemFlags = MemFlags(CL_MEM_READ_WRITE);
    pub const WRITE_ONLY: MemFlags = MemFlags(CL_MEM_WRITE_ONLY);
    pub const READ_ONLY: MemFlags = MemFlags(CL_MEM_READ_ONLY);
    pub const USE_HOST_PTR: MemFlags = MemFlags(CL_MEM_USE_HOST_PTR);
    pub const ALLOC_HOST_PTR: MemFlags = MemFlags(CL_MEM_ALLOC_HOST_PTR);
    pub const COPY_HOST_PTR: MemFlags = MemFlags(CL_MEM_COPY_HOST_PTR);

    pub fn bits(self) -> cl_mem_flags {
        self.0
    }
}

impl BitOr for MemFlags {
    type Output = MemFlags;

    fn bitor(self, rhs: MemFlags) -> MemFlags {
        MemFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for MemFlags {
    fn bitor_assign(&mut self, rhs: MemFlags) {
        self.0 |= rhs.0;
    }
}

/// Buffer map access flags (`CL_MAP_*`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MapFlags(cl_map_flags);

impl MapFlags {
    pub const READ: MapFlags = MapFlags(CL_MAP_READ);
    pub const WRITE: MapFlags = MapFlags(CL_MAP_WRITE);

    pub fn bits(self) -> cl_map_flags {
        self.0
    }
}

impl BitOr for MapFlags {
    type Output = MapFlags;

    fn bitor(self, rhs: MapFlags) -> MapFlags {
        MapFlags(self.0 | rhs.0)
    }
}

/// Trait implemented by host-side objects that can initialize or receive
/// the content of a device-side buffer.
pub trait BufferData<T: Copy> {
    /// Passes the raw data representation of this object and its size in
    /// bytes to `f`.
    fn as_raw_data<F, O>(&self, f: F) -> O
    where
        F: FnOnce(*const c_void, size_t) -> O;

    /// Passes the mutable raw data representation of this object and its
    /// size in bytes to `f`.
    fn as_raw_data_mut<F, O>(&mut self, f: F) -> O
    where
        F: FnOnce(*mut c_void, size_t) -> O;

    /// The number of elements of type `T` in this object.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of bytes in this object.
    fn bytes_len(&self) -> size_t {
        (self.len() * mem::size_of::<T>()) as size_t
    }
}

impl<T: Copy> BufferData<T> for [T] {
    fn as_raw_data<F, O>(&self, f: F) -> O
    where
        F: FnOnce(*const c_void, size_t) -> O,
    {
        f(self.as_ptr() as *const c_void, self.bytes_len())
    }

    fn as_raw_data_mut<F, O>(&mut self, f: F) -> O
    where
        F: FnOnce(*mut c_void, size_t) -> O,
    {
        f(self.as_mut_ptr() as *mut c_void, self.bytes_len())
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Copy> BufferData<T> for Vec<T> {
    fn as_raw_data<F, O>(&self, f: F) -> O
    where
        F: FnOnce(*const c_void, size_t) -> O,
    {
        f(self.as_ptr() as *const c_void, self.bytes_len())
    }

    fn as_raw_data_mut<F, O>(&mut self, f: F) -> O
    where
        F: FnOnce(*mut c_void, size_t) -> O,
    {
        f(self.as_mut_ptr() as *mut c_void, self.bytes_len())
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

macro_rules! scalar_buffer_data {
    ($t:ty) => {
        impl BufferData<$t> for $t {
            fn as_raw_data<F, O>(&self, f: F) -> O
            where
                F: FnOnce(*const c_void, size_t) -> O,
            {
                f(self as *const $t as *const c_void, mem::size_of::<$t>() as size_t)
            }

            fn as_raw_data_mut<F, O>(&mut self, f: F) -> O
            where
                F: FnOnce(*mut c_void, size_t) -> O,
            {
                f(self as *mut $t as *mut c_void, mem::size_of::<$t>() as size_t)
            }

            fn len(&self) -> usize {
                1
            }
        }
    };
}

scalar_buffer_data!(isize);
scalar_buffer_data!(usize);
scalar_buffer_data!(u32);
scalar_buffer_data!(u64);
scalar_buffer_data!(i32);
scalar_buffer_data!(i64);
scalar_buffer_data!(f32);
scalar_buffer_data!(f64);

/// A device-side OpenCL buffer object, released on drop.
pub struct Buffer<T> {
    len: usize,
    cl_buffer: cl_mem,
    phantom: PhantomData<T>,
}

unsafe impl<T> Sync for Buffer<T> {}
unsafe impl<T> Send for Buffer<T> {}

impl<T: Copy> Buffer<T> {
    /// Creates a buffer initialized with the content of `data`.
    pub fn new<D: ?Sized>(context: &Context, data: &D, flags: MemFlags) -> Result<Buffer<T>>
    where
        D: BufferData<T>,
    {
        data.as_raw_data(|raw_data, sz| {
            let mut status = 0;

            let mem = unsafe {
                clCreateBuffer(
                    context.cl_id(),
                    (flags | MemFlags::COPY_HOST_PTR).bits(),
                    sz,
                    raw_data as *mut c_void,
                    &mut status,
                )
            };

            check(status, "clCreateBuffer")?;

            Ok(Buffer {
                len: data.len(),
                cl_buffer: mem,
                phantom: PhantomData,
            })
        })
    }

    /// Creates a new uninitialized 1-dimensional buffer of `len` elements.
    pub fn new_uninitialized(context: &Context, len: usize, flags: MemFlags) -> Result<Buffer<T>> {
        let mut status = 0;
        let mem = unsafe {
            clCreateBuffer(
                context.cl_id(),
                flags.bits(),
                (len * mem::size_of::<T>()) as size_t,
                ptr::null_mut(),
                &mut status,
            )
        };

        check(status, "clCreateBuffer")?;

        Ok(Buffer {
            len,
            cl_buffer: mem,
            phantom: PhantomData,
        })
    }

    /// Wraps an already-created memory object of `len` elements.
    ///
    /// Takes ownership: the object is released when the buffer drops.
    pub(crate) unsafe fn from_raw(cl_buffer: cl_mem, len: usize) -> Buffer<T> {
        Buffer {
            len,
            cl_buffer,
            phantom: PhantomData,
        }
    }

    /// The underlying OpenCL identifier.
    pub fn cl_id(&self) -> cl_mem {
        self.cl_buffer
    }

    /// The length in bytes of this buffer.
    pub fn bytes_len(&self) -> size_t {
        (self.len * mem::size_of::<T>()) as size_t
    }

    /// The number of elements of type `T` in this buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Queries the runtime for the actual byte size of the memory object.
    pub fn mem_object_size(&self) -> Result<usize> {
        unsafe {
            let mut size: size_t = 0;
            let status = clGetMemObjectInfo(
                self.cl_buffer,
                CL_MEM_SIZE,
                mem::size_of::<size_t>() as size_t,
                &mut size as *mut size_t as *mut c_void,
                ptr::null_mut(),
            );
            check(status, "clGetMemObjectInfo")?;
            Ok(size as usize)
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        unsafe {
            let status = clReleaseMemObject(self.cl_buffer);
            if status != CL_SUCCESS {
                error!("clReleaseMemObject failed in drop: {}", status);
            }
        }
    }
}

impl<T> KernelArg for Buffer<T> {
    fn get_value(&self) -> (size_t, *const c_void) {
        (
            mem::size_of::<cl_mem>() as size_t,
            &self.cl_buffer as *const cl_mem as *const c_void,
        )
    }
}

/// A host-visible mapping of a buffer or image region, produced by
/// [`CommandQueue::map_buffer`](crate::command_queue::CommandQueue::map_buffer).
///
/// Unmap it with
/// [`CommandQueue::unmap`](crate::command_queue::CommandQueue::unmap); the
/// mapping does not unmap itself on drop since that is a queue operation.
pub struct MappedBuffer {
    pub(crate) ptr: *mut c_void,
    pub(crate) bytes: usize,
    pub(crate) row_pitch: usize,
    pub(crate) slice_pitch: usize,
}

impl MappedBuffer {
    /// The host pointer of the mapped region.
    pub fn as_ptr(&self) -> *mut c_void {
        self.ptr
    }

    /// The size in bytes of the mapped region. Zero for image mappings,
    /// where the extent is described by the pitches instead.
    pub fn bytes_len(&self) -> usize {
        self.bytes
    }

    /// Row pitch in bytes (image mappings only).
    pub fn row_pitch(&self) -> usize {
        self.row_pitch
    }

    /// Slice pitch in bytes (3D image mappings only).
    pub fn slice_pitch(&self) -> usize {
        self.slice_pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_flags_combine() {
        let flags = MemFlags::READ_ONLY | MemFlags::COPY_HOST_PTR;
        assert_eq!(flags.bits(), CL_MEM_READ_ONLY | CL_MEM_COPY_HOST_PTR);

        let mut flags = MemFlags::READ_WRITE;
        flags |= MemFlags::ALLOC_HOST_PTR;
        assert_eq!(flags.bits(), CL_MEM_READ_WRITE | CL_MEM_ALLOC_HOST_PTR);
    }

    #[test]
    fn map_flags_combine() {
        assert_eq!((MapFlags::READ | MapFlags::WRITE).bits(), CL_MAP_READ | CL_MAP_WRITE);
    }

    #[test]
    fn buffer_data_sizes() {
        let v = vec![0f32; 8];
        assert_eq!(BufferData::len(&v), 8);
        assert_eq!(v.bytes_len(), 32);

        let s: &[u64] = &[1, 2, 3];
        assert_eq!(BufferData::len(s), 3);
        assert_eq!(s.bytes_len(), 24);

        let x = 3141i32;
        assert_eq!(BufferData::len(&x), 1);
        assert_eq!(BufferData::<i32>::bytes_len(&x), 4);
    }

    #[test]
    fn buffer_data_raw_roundtrip() {
        let src: &[i32] = &[1, 2, 3, 4];
        let mut dst = vec![0i32; 4];

        let n = src.as_raw_data(|ptr, sz| {
            dst.as_raw_data_mut(|out, out_sz| {
                assert_eq!(sz, out_sz);
                unsafe {
                    ptr::copy_nonoverlapping(ptr as *const u8, out as *mut u8, sz as usize);
                }
                sz
            })
        });

        assert_eq!(n, 16);
        assert_eq!(dst, vec![1, 2, 3, 4]);
    }
}
