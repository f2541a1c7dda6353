use std::mem;
use std::ptr;

use libc::{c_void, size_t};
use log::error;

use crate::cl::ll::*;
use crate::cl::*;
use crate::error::{check, Result};

/// An OpenCL event, released on drop.
pub struct Event {
    event: cl_event,
}

unsafe impl Sync for Event {}
unsafe impl Send for Event {}

impl Event {
    /// Creates a new event from its OpenCL pointer.
    ///
    /// The pointer validity is not checked.
    pub unsafe fn new_unchecked(event: cl_event) -> Event {
        Event { event }
    }

    /// Blocks until the command identified by this event completes.
    pub fn wait(&self) -> Result<()> {
        unsafe {
            let status = clWaitForEvents(1, &self.event);
            check(status, "clWaitForEvents")
        }
    }

    /// The execution status of the associated command (`CL_QUEUED`,
    /// `CL_SUBMITTED`, `CL_RUNNING`, `CL_COMPLETE`, or a negative error).
    pub fn status(&self) -> Result<cl_int> {
        unsafe {
            let mut status: cl_int = 0;
            let ret = clGetEventInfo(
                self.event,
                CL_EVENT_COMMAND_EXECUTION_STATUS,
                mem::size_of::<cl_int>() as size_t,
                &mut status as *mut cl_int as *mut c_void,
                ptr::null_mut(),
            );
            check(ret, "clGetEventInfo")?;
            Ok(status)
        }
    }

    /// Marks a user event as complete, releasing commands waiting on it.
    pub fn set_complete(&self) -> Result<()> {
        self.set_status(CL_COMPLETE)
    }

    /// Sets the execution status of a user event. `status` is either
    /// `CL_COMPLETE` or a negative error code; it can be set only once.
    pub fn set_status(&self, status: cl_int) -> Result<()> {
        unsafe {
            let ret = clSetUserEventStatus(self.event, status);
            check(ret, "clSetUserEventStatus")
        }
    }

    fn get_time(&self, param: cl_profiling_info) -> Result<u64> {
        unsafe {
            let mut time: cl_ulong = 0;
            let ret = clGetEventProfilingInfo(
                self.event,
                param,
                mem::size_of::<cl_ulong>() as size_t,
                &mut time as *mut cl_ulong as *mut c_void,
                ptr::null_mut(),
            );

            check(ret, "clGetEventProfilingInfo")?;
            Ok(time)
        }
    }

    /// Gets the time when the command was queued, in device nanoseconds.
    ///
    /// Requires the queue to have been created with profiling enabled.
    pub fn queue_time(&self) -> Result<u64> {
        self.get_time(CL_PROFILING_COMMAND_QUEUED)
    }

    /// Gets the time when the command was submitted to the device.
    pub fn submit_time(&self) -> Result<u64> {
        self.get_time(CL_PROFILING_COMMAND_SUBMIT)
    }

    /// Gets the time when the command started executing.
    pub fn start_time(&self) -> Result<u64> {
        self.get_time(CL_PROFILING_COMMAND_START)
    }

    /// Gets the time when the command finished executing.
    pub fn end_time(&self) -> Result<u64> {
        self.get_time(CL_PROFILING_COMMAND_END)
    }
}

impl Drop for Event {
    fn drop(&mut self) {
        unsafe {
            let status = clReleaseEvent(self.event);
            if status != CL_SUCCESS {
                error!("clReleaseEvent failed in drop: {}", status);
            }
        }
    }
}

/// Trait implemented by event wait lists.
pub trait EventList {
    /// Applies a user-defined function to this list of events.
    fn as_event_list<T, F: FnOnce(*const cl_event, cl_uint) -> T>(&self, f: F) -> T;

    /// Waits for all the events on this event list.
    fn wait(&self) -> Result<()> {
        self.as_event_list(|p, len| {
            if len == 0 {
                return Ok(());
            }
            unsafe {
                let status = clWaitForEvents(len, p);
                check(status, "clWaitForEvents")
            }
        })
    }
}

impl EventList for Event {
    fn as_event_list<T, F>(&self, f: F) -> T
    where
        F: FnOnce(*const cl_event, cl_uint) -> T,
    {
        f(&self.event, 1)
    }
}

impl<'r> EventList for &'r Event {
    fn as_event_list<T, F>(&self, f: F) -> T
    where
        F: FnOnce(*const cl_event, cl_uint) -> T,
    {
        f(&self.event, 1)
    }
}

impl<E: EventList> EventList for Option<E> {
    fn as_event_list<T, F>(&self, f: F) -> T
    where
        F: FnOnce(*const cl_event, cl_uint) -> T,
    {
        match *self {
            None => f(ptr::null(), 0),
            Some(ref e) => e.as_event_list(f),
        }
    }
}

impl<'r> EventList for &'r [Event] {
    fn as_event_list<T, F>(&self, f: F) -> T
    where
        F: FnOnce(*const cl_event, cl_uint) -> T,
    {
        if self.is_empty() {
            return f(ptr::null(), 0);
        }
        let events: Vec<cl_event> = self.iter().map(|e| e.event).collect();
        f(events.as_ptr(), events.len() as cl_uint)
    }
}

/// The empty wait list.
impl EventList for () {
    fn as_event_list<T, F>(&self, f: F) -> T
    where
        F: FnOnce(*const cl_event, cl_uint) -> T,
    {
        f(ptr::null(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wait_list_is_null() {
        ().as_event_list(|p, len| {
            assert!(p.is_null());
            assert_eq!(len, 0);
        });

        let none: Option<Event> = None;
        none.as_event_list(|p, len| {
            assert!(p.is_null());
            assert_eq!(len, 0);
        });
    }

    #[test]
    fn empty_wait_list_wait_is_noop() {
        assert!(().wait().is_ok());
    }
}
