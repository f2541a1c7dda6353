//! Raw OpenCL bindings.
//!
//! This module is the single platform-normalizing surface of the crate:
//! everything else imports OpenCL types, constants and entry points from
//! here and nowhere else. On Apple targets it additionally exposes the CGL
//! share-group entry points needed for OpenGL interop; on every other
//! target only the Khronos GL-sharing property names are visible and no
//! OpenGL symbol is declared or linked.
//!
//! The OpenCL 1.2 entry points (`clCreateCommandQueue`,
//! `clEnqueueTask`, ...) are declared on all targets even where newer
//! headers mark them deprecated, so callers written against the 1.2 API
//! keep compiling.

#![allow(non_camel_case_types)]

use libc::{c_char, c_void, size_t};

/* Scalar types. */
pub type cl_int = i32;
pub type cl_uint = u32;
pub type cl_long = i64;
pub type cl_ulong = u64;
pub type cl_half = u16;
pub type cl_bitfield = cl_ulong;
pub type cl_bool = cl_uint;

/* Object handles. All are opaque pointers owned by the OpenCL runtime. */
pub type cl_platform_id = *mut c_void;
pub type cl_device_id = *mut c_void;
pub type cl_context = *mut c_void;
pub type cl_command_queue = *mut c_void;
pub type cl_mem = *mut c_void;
pub type cl_program = *mut c_void;
pub type cl_kernel = *mut c_void;
pub type cl_event = *mut c_void;
pub type cl_sampler = *mut c_void;

/* Query and flag types. */
pub type cl_platform_info = cl_uint;
pub type cl_device_info = cl_uint;
pub type cl_device_type = cl_bitfield;
pub type cl_context_properties = isize;
pub type cl_context_info = cl_uint;
pub type cl_command_queue_properties = cl_bitfield;
pub type cl_command_queue_info = cl_uint;
pub type cl_mem_flags = cl_bitfield;
pub type cl_mem_object_type = cl_uint;
pub type cl_mem_info = cl_uint;
pub type cl_map_flags = cl_bitfield;
pub type cl_channel_order = cl_uint;
pub type cl_channel_type = cl_uint;
pub type cl_program_info = cl_uint;
pub type cl_program_build_info = cl_uint;
pub type cl_build_status = cl_int;
pub type cl_kernel_info = cl_uint;
pub type cl_event_info = cl_uint;
pub type cl_profiling_info = cl_uint;

/* GL scalar aliases from cl_gl.h. */
pub type cl_GLuint = u32;
pub type cl_GLint = i32;
pub type cl_GLenum = u32;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct cl_image_format {
    pub image_channel_order: cl_channel_order,
    pub image_channel_data_type: cl_channel_type,
}

pub const CL_FALSE: cl_bool = 0;
pub const CL_TRUE: cl_bool = 1;

/* Status codes. */
pub const CL_SUCCESS: cl_int = 0;
pub const CL_DEVICE_NOT_FOUND: cl_int = -1;
pub const CL_DEVICE_NOT_AVAILABLE: cl_int = -2;
pub const CL_COMPILER_NOT_AVAILABLE: cl_int = -3;
pub const CL_MEM_OBJECT_ALLOCATION_FAILURE: cl_int = -4;
pub const CL_OUT_OF_RESOURCES: cl_int = -5;
pub const CL_OUT_OF_HOST_MEMORY: cl_int = -6;
pub const CL_PROFILING_INFO_NOT_AVAILABLE: cl_int = -7;
pub const CL_MEM_COPY_OVERLAP: cl_int = -8;
pub const CL_IMAGE_FORMAT_MISMATCH: cl_int = -9;
pub const CL_IMAGE_FORMAT_NOT_SUPPORTED: cl_int = -10;
pub const CL_BUILD_PROGRAM_FAILURE: cl_int = -11;
pub const CL_MAP_FAILURE: cl_int = -12;
pub const CL_MISALIGNED_SUB_BUFFER_OFFSET: cl_int = -13;
pub const CL_EXEC_STATUS_ERROR_FOR_EVENTS_IN_WAIT_LIST: cl_int = -14;
pub const CL_COMPILE_PROGRAM_FAILURE: cl_int = -15;
pub const CL_LINKER_NOT_AVAILABLE: cl_int = -16;
pub const CL_LINK_PROGRAM_FAILURE: cl_int = -17;
pub const CL_DEVICE_PARTITION_FAILED: cl_int = -18;
pub const CL_KERNEL_ARG_INFO_NOT_AVAILABLE: cl_int = -19;
pub const CL_INVALID_VALUE: cl_int = -30;
pub const CL_INVALID_DEVICE_TYPE: cl_int = -31;
pub const CL_INVALID_PLATFORM: cl_int = -32;
pub const CL_INVALID_DEVICE: cl_int = -33;
pub const CL_INVALID_CONTEXT: cl_int = -34;
pub const CL_INVALID_QUEUE_PROPERTIES: cl_int = -35;
pub const CL_INVALID_COMMAND_QUEUE: cl_int = -36;
pub const CL_INVALID_HOST_PTR: cl_int = -37;
pub const CL_INVALID_MEM_OBJECT: cl_int = -38;
pub const CL_INVALID_IMAGE_FORMAT_DESCRIPTOR: cl_int = -39;
pub const CL_INVALID_IMAGE_SIZE: cl_int = -40;
pub const CL_INVALID_SAMPLER: cl_int = -41;
pub const CL_INVALID_BINARY: cl_int = -42;
pub const CL_INVALID_BUILD_OPTIONS: cl_int = -43;
pub const CL_INVALID_PROGRAM: cl_int = -44;
pub const CL_INVALID_PROGRAM_EXECUTABLE: cl_int = -45;
pub const CL_INVALID_KERNEL_NAME: cl_int = -46;
pub const CL_INVALID_KERNEL_DEFINITION: cl_int = -47;
pub const CL_INVALID_KERNEL: cl_int = -48;
pub const CL_INVALID_ARG_INDEX: cl_int = -49;
pub const CL_INVALID_ARG_VALUE: cl_int = -50;
pub const CL_INVALID_ARG_SIZE: cl_int = -51;
pub const CL_INVALID_KERNEL_ARGS: cl_int = -52;
pub const CL_INVALID_WORK_DIMENSION: cl_int = -53;
pub const CL_INVALID_WORK_GROUP_SIZE: cl_int = -54;
pub const CL_INVALID_WORK_ITEM_SIZE: cl_int = -55;
pub const CL_INVALID_GLOBAL_OFFSET: cl_int = -56;
pub const CL_INVALID_EVENT_WAIT_LIST: cl_int = -57;
pub const CL_INVALID_EVENT: cl_int = -58;
pub const CL_INVALID_OPERATION: cl_int = -59;
pub const CL_INVALID_GL_OBJECT: cl_int = -60;
pub const CL_INVALID_BUFFER_SIZE: cl_int = -61;
pub const CL_INVALID_MIP_LEVEL: cl_int = -62;
pub const CL_INVALID_GLOBAL_WORK_SIZE: cl_int = -63;
pub const CL_INVALID_PROPERTY: cl_int = -64;

/* From cl_gl.h. */
pub const CL_INVALID_GL_SHAREGROUP_REFERENCE_KHR: cl_int = -1000;
/* From cl_ext.h (cl_khr_icd). Returned by ICD loaders with no platform. */
pub const CL_PLATFORM_NOT_FOUND_KHR: cl_int = -1001;

/* cl_platform_info. */
pub const CL_PLATFORM_PROFILE: cl_platform_info = 0x0900;
pub const CL_PLATFORM_VERSION: cl_platform_info = 0x0901;
pub const CL_PLATFORM_NAME: cl_platform_info = 0x0902;
pub const CL_PLATFORM_VENDOR: cl_platform_info = 0x0903;
pub const CL_PLATFORM_EXTENSIONS: cl_platform_info = 0x0904;

/* cl_device_type bits. */
pub const CL_DEVICE_TYPE_DEFAULT: cl_device_type = 1 << 0;
pub const CL_DEVICE_TYPE_CPU: cl_device_type = 1 << 1;
pub const CL_DEVICE_TYPE_GPU: cl_device_type = 1 << 2;
pub const CL_DEVICE_TYPE_ACCELERATOR: cl_device_type = 1 << 3;
pub const CL_DEVICE_TYPE_CUSTOM: cl_device_type = 1 << 4;
pub const CL_DEVICE_TYPE_ALL: cl_device_type = 0xFFFF_FFFF;

/* cl_device_info. */
pub const CL_DEVICE_TYPE: cl_device_info = 0x1000;
pub const CL_DEVICE_VENDOR_ID: cl_device_info = 0x1001;
pub const CL_DEVICE_MAX_COMPUTE_UNITS: cl_device_info = 0x1002;
pub const CL_DEVICE_MAX_WORK_ITEM_DIMENSIONS: cl_device_info = 0x1003;
pub const CL_DEVICE_MAX_WORK_GROUP_SIZE: cl_device_info = 0x1004;
pub const CL_DEVICE_MAX_MEM_ALLOC_SIZE: cl_device_info = 0x1010;
pub const CL_DEVICE_GLOBAL_MEM_SIZE: cl_device_info = 0x101F;
pub const CL_DEVICE_LOCAL_MEM_SIZE: cl_device_info = 0x1023;
pub const CL_DEVICE_NAME: cl_device_info = 0x102B;
pub const CL_DEVICE_VENDOR: cl_device_info = 0x102C;
pub const CL_DRIVER_VERSION: cl_device_info = 0x102D;
pub const CL_DEVICE_PROFILE: cl_device_info = 0x102E;
pub const CL_DEVICE_VERSION: cl_device_info = 0x102F;
pub const CL_DEVICE_EXTENSIONS: cl_device_info = 0x1030;

/* cl_context_properties. */
pub const CL_CONTEXT_PLATFORM: cl_context_properties = 0x1084;

/* GL-sharing context properties (cl_gl.h / cl_gl_ext.h).
 *
 * On Apple the share group is passed with a single vendor property; on
 * every other platform the Khronos cl_khr_gl_sharing triplet is used.
 * Mirroring the C headers, each name is only visible on the platform
 * whose interop path uses it. */
#[cfg(target_os = "macos")]
pub const CL_CONTEXT_PROPERTY_USE_CGL_SHAREGROUP_APPLE: cl_context_properties = 0x10000000;
#[cfg(not(target_os = "macos"))]
pub const CL_GL_CONTEXT_KHR: cl_context_properties = 0x2008;
#[cfg(not(target_os = "macos"))]
pub const CL_EGL_DISPLAY_KHR: cl_context_properties = 0x2009;
#[cfg(not(target_os = "macos"))]
pub const CL_GLX_DISPLAY_KHR: cl_context_properties = 0x200A;
#[cfg(not(target_os = "macos"))]
pub const CL_WGL_HDC_KHR: cl_context_properties = 0x200B;

/* cl_command_queue_properties bits. */
pub const CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE: cl_command_queue_properties = 1 << 0;
pub const CL_QUEUE_PROFILING_ENABLE: cl_command_queue_properties = 1 << 1;

/* cl_mem_flags bits. */
pub const CL_MEM_READ_WRITE: cl_mem_flags = 1 << 0;
pub const CL_MEM_WRITE_ONLY: cl_mem_flags = 1 << 1;
pub const CL_MEM_READ_ONLY: cl_mem_flags = 1 << 2;
pub const CL_MEM_USE_HOST_PTR: cl_mem_flags = 1 << 3;
pub const CL_MEM_ALLOC_HOST_PTR: cl_mem_flags = 1 << 4;
pub const CL_MEM_COPY_HOST_PTR: cl_mem_flags = 1 << 5;

/* cl_map_flags bits. */
pub const CL_MAP_READ: cl_map_flags = 1 << 0;
pub const CL_MAP_WRITE: cl_map_flags = 1 << 1;

/* cl_mem_object_type. */
pub const CL_MEM_OBJECT_BUFFER: cl_mem_object_type = 0x10F0;
pub const CL_MEM_OBJECT_IMAGE2D: cl_mem_object_type = 0x10F1;
pub const CL_MEM_OBJECT_IMAGE3D: cl_mem_object_type = 0x10F2;

/* cl_mem_info. */
pub const CL_MEM_SIZE: cl_mem_info = 0x1102;

/* cl_channel_order. */
pub const CL_R: cl_channel_order = 0x10B0;
pub const CL_A: cl_channel_order = 0x10B1;
pub const CL_RG: cl_channel_order = 0x10B2;
pub const CL_RA: cl_channel_order = 0x10B3;
pub const CL_RGB: cl_channel_order = 0x10B4;
pub const CL_RGBA: cl_channel_order = 0x10B5;
pub const CL_BGRA: cl_channel_order = 0x10B6;
pub const CL_ARGB: cl_channel_order = 0x10B7;
pub const CL_INTENSITY: cl_channel_order = 0x10B8;
pub const CL_LUMINANCE: cl_channel_order = 0x10B9;
pub const CL_Rx: cl_channel_order = 0x10BA;
pub const CL_RGx: cl_channel_order = 0x10BB;
pub const CL_RGBx: cl_channel_order = 0x10BC;

/* cl_channel_type. */
pub const CL_SNORM_INT8: cl_channel_type = 0x10D0;
pub const CL_SNORM_INT16: cl_channel_type = 0x10D1;
pub const CL_UNORM_INT8: cl_channel_type = 0x10D2;
pub const CL_UNORM_INT16: cl_channel_type = 0x10D3;
pub const CL_UNORM_SHORT_565: cl_channel_type = 0x10D4;
pub const CL_UNORM_SHORT_555: cl_channel_type = 0x10D5;
pub const CL_UNORM_INT_101010: cl_channel_type = 0x10D6;
pub const CL_SIGNED_INT8: cl_channel_type = 0x10D7;
pub const CL_SIGNED_INT16: cl_channel_type = 0x10D8;
pub const CL_SIGNED_INT32: cl_channel_type = 0x10D9;
pub const CL_UNSIGNED_INT8: cl_channel_type = 0x10DA;
pub const CL_UNSIGNED_INT16: cl_channel_type = 0x10DB;
pub const CL_UNSIGNED_INT32: cl_channel_type = 0x10DC;
pub const CL_HALF_FLOAT: cl_channel_type = 0x10DD;
pub const CL_FLOAT: cl_channel_type = 0x10DE;

/* cl_program_build_info. */
pub const CL_PROGRAM_BUILD_STATUS: cl_program_build_info = 0x1181;
pub const CL_PROGRAM_BUILD_OPTIONS: cl_program_build_info = 0x1182;
pub const CL_PROGRAM_BUILD_LOG: cl_program_build_info = 0x1183;

/* cl_event_info. */
pub const CL_EVENT_COMMAND_EXECUTION_STATUS: cl_event_info = 0x11D3;

/* Command execution status. */
pub const CL_COMPLETE: cl_int = 0x0;
pub const CL_RUNNING: cl_int = 0x1;
pub const CL_SUBMITTED: cl_int = 0x2;
pub const CL_QUEUED: cl_int = 0x3;

/* cl_profiling_info. */
pub const CL_PROFILING_COMMAND_QUEUED: cl_profiling_info = 0x1280;
pub const CL_PROFILING_COMMAND_SUBMIT: cl_profiling_info = 0x1281;
pub const CL_PROFILING_COMMAND_START: cl_profiling_info = 0x1282;
pub const CL_PROFILING_COMMAND_END: cl_profiling_info = 0x1283;

/* GL texture targets accepted by clCreateFromGLTexture. */
pub const GL_TEXTURE_2D: cl_GLenum = 0x0DE1;
pub const GL_TEXTURE_3D: cl_GLenum = 0x806F;

/* Apple CGL handles, opaque to us. */
#[cfg(target_os = "macos")]
pub type CGLContextObj = *mut c_void;
#[cfg(target_os = "macos")]
pub type CGLShareGroupObj = *mut c_void;

pub type create_context_callback =
    extern "C" fn(errinfo: *const c_char, private_info: *const c_void, cb: size_t, user_data: *mut c_void);

/// Low-level entry points. These should primarily be used by the
/// higher level wrappers in this crate.
pub mod ll {
    use libc::{c_char, c_void, size_t};

    use super::*;

    extern "C" {
        pub fn clGetPlatformIDs(
            num_entries: cl_uint,
            platforms: *mut cl_platform_id,
            num_platforms: *mut cl_uint,
        ) -> cl_int;
        pub fn clGetPlatformInfo(
            platform: cl_platform_id,
            param_name: cl_platform_info,
            param_value_size: size_t,
            param_value: *mut c_void,
            param_value_size_ret: *mut size_t,
        ) -> cl_int;

        pub fn clGetDeviceIDs(
            platform: cl_platform_id,
            device_type: cl_device_type,
            num_entries: cl_uint,
            devices: *mut cl_device_id,
            num_devices: *mut cl_uint,
        ) -> cl_int;
        pub fn clGetDeviceInfo(
            device: cl_device_id,
            param_name: cl_device_info,
            param_value_size: size_t,
            param_value: *mut c_void,
            param_value_size_ret: *mut size_t,
        ) -> cl_int;

        pub fn clCreateContext(
            properties: *const cl_context_properties,
            num_devices: cl_uint,
            devices: *const cl_device_id,
            pfn_notify: Option<create_context_callback>,
            user_data: *mut c_void,
            errcode_ret: *mut cl_int,
        ) -> cl_context;
        pub fn clReleaseContext(context: cl_context) -> cl_int;

        pub fn clCreateCommandQueue(
            context: cl_context,
            device: cl_device_id,
            properties: cl_command_queue_properties,
            errcode_ret: *mut cl_int,
        ) -> cl_command_queue;
        pub fn clReleaseCommandQueue(command_queue: cl_command_queue) -> cl_int;
        pub fn clFlush(command_queue: cl_command_queue) -> cl_int;
        pub fn clFinish(command_queue: cl_command_queue) -> cl_int;

        pub fn clCreateBuffer(
            context: cl_context,
            flags: cl_mem_flags,
            size: size_t,
            host_ptr: *mut c_void,
            errcode_ret: *mut cl_int,
        ) -> cl_mem;
        pub fn clReleaseMemObject(memobj: cl_mem) -> cl_int;
        pub fn clGetMemObjectInfo(
            memobj: cl_mem,
            param_name: cl_mem_info,
            param_value_size: size_t,
            param_value: *mut c_void,
            param_value_size_ret: *mut size_t,
        ) -> cl_int;
        pub fn clGetSupportedImageFormats(
            context: cl_context,
            flags: cl_mem_flags,
            image_type: cl_mem_object_type,
            num_entries: cl_uint,
            image_formats: *mut cl_image_format,
            num_image_formats: *mut cl_uint,
        ) -> cl_int;

        pub fn clEnqueueReadBuffer(
            command_queue: cl_command_queue,
            buffer: cl_mem,
            blocking_read: cl_bool,
            offset: size_t,
            cb: size_t,
            ptr: *mut c_void,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;
        pub fn clEnqueueWriteBuffer(
            command_queue: cl_command_queue,
            buffer: cl_mem,
            blocking_write: cl_bool,
            offset: size_t,
            cb: size_t,
            ptr: *const c_void,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;
        pub fn clEnqueueCopyBuffer(
            command_queue: cl_command_queue,
            src_buffer: cl_mem,
            dst_buffer: cl_mem,
            src_offset: size_t,
            dst_offset: size_t,
            cb: size_t,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;
        pub fn clEnqueueMapBuffer(
            command_queue: cl_command_queue,
            buffer: cl_mem,
            blocking_map: cl_bool,
            map_flags: cl_map_flags,
            offset: size_t,
            cb: size_t,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
            errcode_ret: *mut cl_int,
        ) -> *mut c_void;
        pub fn clEnqueueMapImage(
            command_queue: cl_command_queue,
            image: cl_mem,
            blocking_map: cl_bool,
            map_flags: cl_map_flags,
            origin: *const size_t,
            region: *const size_t,
            image_row_pitch: *mut size_t,
            image_slice_pitch: *mut size_t,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
            errcode_ret: *mut cl_int,
        ) -> *mut c_void;
        pub fn clEnqueueUnmapMemObject(
            command_queue: cl_command_queue,
            memobj: cl_mem,
            mapped_ptr: *mut c_void,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;
        pub fn clEnqueueReadImage(
            command_queue: cl_command_queue,
            image: cl_mem,
            blocking_read: cl_bool,
            origin: *const size_t,
            region: *const size_t,
            row_pitch: size_t,
            slice_pitch: size_t,
            ptr: *mut c_void,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;
        pub fn clEnqueueWriteImage(
            command_queue: cl_command_queue,
            image: cl_mem,
            blocking_write: cl_bool,
            origin: *const size_t,
            region: *const size_t,
            input_row_pitch: size_t,
            input_slice_pitch: size_t,
            ptr: *const c_void,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;
        pub fn clEnqueueNDRangeKernel(
            command_queue: cl_command_queue,
            kernel: cl_kernel,
            work_dim: cl_uint,
            global_work_offset: *const size_t,
            global_work_size: *const size_t,
            local_work_size: *const size_t,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;
        pub fn clEnqueueTask(
            command_queue: cl_command_queue,
            kernel: cl_kernel,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;

        pub fn clCreateProgramWithSource(
            context: cl_context,
            count: cl_uint,
            strings: *const *const c_char,
            lengths: *const size_t,
            errcode_ret: *mut cl_int,
        ) -> cl_program;
        pub fn clCreateProgramWithBinary(
            context: cl_context,
            num_devices: cl_uint,
            device_list: *const cl_device_id,
            lengths: *const size_t,
            binaries: *const *const u8,
            binary_status: *mut cl_int,
            errcode_ret: *mut cl_int,
        ) -> cl_program;
        pub fn clBuildProgram(
            program: cl_program,
            num_devices: cl_uint,
            device_list: *const cl_device_id,
            options: *const c_char,
            pfn_notify: Option<extern "C" fn(program: cl_program, user_data: *mut c_void)>,
            user_data: *mut c_void,
        ) -> cl_int;
        pub fn clGetProgramBuildInfo(
            program: cl_program,
            device: cl_device_id,
            param_name: cl_program_build_info,
            param_value_size: size_t,
            param_value: *mut c_void,
            param_value_size_ret: *mut size_t,
        ) -> cl_int;
        pub fn clReleaseProgram(program: cl_program) -> cl_int;

        pub fn clCreateKernel(
            program: cl_program,
            kernel_name: *const c_char,
            errcode_ret: *mut cl_int,
        ) -> cl_kernel;
        pub fn clSetKernelArg(
            kernel: cl_kernel,
            arg_index: cl_uint,
            arg_size: size_t,
            arg_value: *const c_void,
        ) -> cl_int;
        pub fn clReleaseKernel(kernel: cl_kernel) -> cl_int;

        pub fn clWaitForEvents(num_events: cl_uint, event_list: *const cl_event) -> cl_int;
        pub fn clGetEventInfo(
            event: cl_event,
            param_name: cl_event_info,
            param_value_size: size_t,
            param_value: *mut c_void,
            param_value_size_ret: *mut size_t,
        ) -> cl_int;
        pub fn clGetEventProfilingInfo(
            event: cl_event,
            param_name: cl_profiling_info,
            param_value_size: size_t,
            param_value: *mut c_void,
            param_value_size_ret: *mut size_t,
        ) -> cl_int;
        pub fn clReleaseEvent(event: cl_event) -> cl_int;
        pub fn clCreateUserEvent(context: cl_context, errcode_ret: *mut cl_int) -> cl_event;
        pub fn clSetUserEventStatus(event: cl_event, execution_status: cl_int) -> cl_int;

        /* cl_gl.h interop entry points. These live in the OpenCL library
         * on every platform, so no OpenGL linkage is needed to call them. */
        pub fn clCreateFromGLBuffer(
            context: cl_context,
            flags: cl_mem_flags,
            bufobj: cl_GLuint,
            errcode_ret: *mut cl_int,
        ) -> cl_mem;
        pub fn clCreateFromGLRenderbuffer(
            context: cl_context,
            flags: cl_mem_flags,
            renderbuffer: cl_GLuint,
            errcode_ret: *mut cl_int,
        ) -> cl_mem;
        pub fn clCreateFromGLTexture(
            context: cl_context,
            flags: cl_mem_flags,
            texture_target: cl_GLenum,
            miplevel: cl_GLint,
            texture: cl_GLuint,
            errcode_ret: *mut cl_int,
        ) -> cl_mem;
        pub fn clEnqueueAcquireGLObjects(
            command_queue: cl_command_queue,
            num_objects: cl_uint,
            mem_objects: *const cl_mem,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;
        pub fn clEnqueueReleaseGLObjects(
            command_queue: cl_command_queue,
            num_objects: cl_uint,
            mem_objects: *const cl_mem,
            num_events_in_wait_list: cl_uint,
            event_wait_list: *const cl_event,
            event: *mut cl_event,
        ) -> cl_int;
    }

    /* CGL share-group lookup, Apple only. Declared here rather than in a
     * separate OpenGL binding so the crate keeps a single include surface. */
    #[cfg(target_os = "macos")]
    extern "C" {
        pub fn CGLGetCurrentContext() -> CGLContextObj;
        pub fn CGLGetShareGroup(ctx: CGLContextObj) -> CGLShareGroupObj;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_format_has_c_layout() {
        assert_eq!(std::mem::size_of::<cl_image_format>(), 8);
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn apple_sharegroup_property_value() {
        assert_eq!(CL_CONTEXT_PROPERTY_USE_CGL_SHAREGROUP_APPLE, 0x10000000);
    }

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn khr_sharing_property_values() {
        assert_eq!(CL_GL_CONTEXT_KHR, 0x2008);
        assert_eq!(CL_GLX_DISPLAY_KHR, 0x200A);
        assert_eq!(CL_WGL_HDC_KHR, 0x200B);
    }
}
