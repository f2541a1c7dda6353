//! OpenGL share-group context properties.
//!
//! A context created with these properties can wrap OpenGL buffer, texture
//! and renderbuffer objects without copying (see
//! [`Context::create_buffer_from_gl_renderbuffer`](crate::context::Context)
//! and the acquire/release operations on
//! [`CommandQueue`](crate::command_queue::CommandQueue)).
//!
//! The property set differs by platform. On Apple targets the share group
//! of the current CGL context is passed with a single vendor property; on
//! everything else the `cl_khr_gl_sharing` triplet (GL context handle,
//! display or HDC, platform) is used, and the caller supplies the raw GL
//! handles since this crate does not own any windowing state.

#[cfg(not(target_os = "macos"))]
use libc::c_void;

use crate::cl::*;
#[cfg(not(target_os = "macos"))]
use crate::platform::Platform;

/// A zero-terminated `cl_context_properties` list under construction.
#[derive(Clone, Debug, Default)]
pub struct ContextProperties {
    props: Vec<cl_context_properties>,
}

impl ContextProperties {
    pub fn new() -> ContextProperties {
        ContextProperties { props: Vec::new() }
    }

    /// Appends a property name/value pair.
    pub fn push(&mut self, name: cl_context_properties, value: cl_context_properties) -> &mut Self {
        self.props.push(name);
        self.props.push(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// The raw list as passed to `clCreateContext`, with the trailing zero
    /// terminator the C API requires.
    pub fn to_raw(&self) -> Vec<cl_context_properties> {
        let mut raw = self.props.clone();
        raw.push(0);
        raw
    }
}

/// Builds the context properties that share this thread's current CGL
/// context with OpenCL.
///
/// Fails with [`Error::NoCurrentGlContext`](crate::error::Error) when no GL
/// context is current.
#[cfg(target_os = "macos")]
pub fn gl_sharing_properties() -> crate::error::Result<ContextProperties> {
    use crate::cl::ll::{CGLGetCurrentContext, CGLGetShareGroup};

    let share_group = unsafe {
        let ctx = CGLGetCurrentContext();
        if ctx.is_null() {
            return Err(crate::error::Error::NoCurrentGlContext);
        }
        CGLGetShareGroup(ctx)
    };

    let mut props = ContextProperties::new();
    props.push(
        CL_CONTEXT_PROPERTY_USE_CGL_SHAREGROUP_APPLE,
        share_group as cl_context_properties,
    );
    Ok(props)
}

/// Builds the `cl_khr_gl_sharing` context properties for the given GL
/// context and display (GLX) or device context handle (WGL).
///
/// The handles are whatever the caller's GL binding exposes:
/// `glXGetCurrentContext()` / `glXGetCurrentDisplay()` on GLX,
/// `wglGetCurrentContext()` / `wglGetCurrentDC()` on Windows.
#[cfg(not(target_os = "macos"))]
pub fn gl_sharing_properties(
    gl_context: *mut c_void,
    display: *mut c_void,
    platform: &Platform,
) -> ContextProperties {
    let mut props = ContextProperties::new();
    props.push(CL_GL_CONTEXT_KHR, gl_context as cl_context_properties);
    #[cfg(windows)]
    props.push(CL_WGL_HDC_KHR, display as cl_context_properties);
    #[cfg(not(windows))]
    props.push(CL_GLX_DISPLAY_KHR, display as cl_context_properties);
    props.push(
        CL_CONTEXT_PLATFORM,
        platform.get_id() as cl_context_properties,
    );
    props
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_list_is_zero_terminated() {
        let mut props = ContextProperties::new();
        props.push(CL_CONTEXT_PLATFORM, 0x1234);

        let raw = props.to_raw();
        assert_eq!(raw, vec![CL_CONTEXT_PLATFORM, 0x1234, 0]);
    }

    #[test]
    fn empty_list_is_just_the_terminator() {
        let props = ContextProperties::new();
        assert!(props.is_empty());
        assert_eq!(props.to_raw(), vec![0]);
    }

    #[test]
    fn pairs_preserve_order() {
        let mut props = ContextProperties::new();
        props.push(1, 10).push(2, 20);
        assert_eq!(props.to_raw(), vec![1, 10, 2, 20, 0]);
    }
}
