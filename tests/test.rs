//! Integration tests. These run against whatever OpenCL implementation is
//! installed; each test is a no-op on machines without one.

use clgl::buffer::MemFlags;
use clgl::command_queue::CommandQueue;
use clgl::context::Context;
use clgl::device::Device;
use clgl::error::Error;
use clgl::event::{Event, EventList};
use clgl::image::MemObjectType;
use clgl::platforms;

fn test_all_platforms_devices(test: &mut dyn FnMut(&Device, &Context, &CommandQueue)) {
    let platforms = platforms().expect("platform enumeration failed");
    for p in &platforms {
        let devices = p.get_devices().expect("device enumeration failed");
        for d in &devices {
            let context = Context::new(d).expect("context creation failed");
            let queue =
                CommandQueue::new(&context, d, false, false).expect("queue creation failed");
            test(d, &context, &queue);
        }
    }
}

#[test]
fn platform_info_strings() {
    for p in platforms().unwrap() {
        assert!(!p.name().unwrap().is_empty());
        assert!(!p.vendor().unwrap().is_empty());
        assert!(!p.version().unwrap().is_empty());
    }
}

#[test]
fn device_info() {
    for p in platforms().unwrap() {
        for d in p.get_devices().unwrap() {
            assert!(!d.name().unwrap().is_empty());
            assert!(d.compute_units().unwrap() > 0);
            assert!(d.global_mem_size().unwrap() > 0);
            assert!(d.max_work_group_size().unwrap() > 0);
        }
    }
}

#[test]
fn buffer_read_write() {
    test_all_platforms_devices(&mut |_, ctx, queue| {
        let input: &[i32] = &[0, 1, 2, 3, 4, 5, 6, 7];
        let buf = ctx
            .create_buffer_from(input, MemFlags::READ_WRITE)
            .unwrap();

        let mut output = vec![0i32; input.len()];
        queue.read(&buf, &mut output, ()).unwrap();

        assert_eq!(input, &output[..]);
    })
}

#[test]
fn buffer_write_then_get() {
    test_all_platforms_devices(&mut |_, ctx, queue| {
        let buf = ctx
            .create_buffer::<f32>(4, MemFlags::READ_WRITE)
            .unwrap();
        queue.write(&buf, &[1.0f32, 2.0, 3.0, 4.0][..], ()).unwrap();

        let out: Vec<f32> = queue.get(&buf, ()).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0]);
    })
}

#[test]
fn buffer_copy() {
    test_all_platforms_devices(&mut |_, ctx, queue| {
        let src = ctx
            .create_buffer_from(&[7i32, 8, 9][..], MemFlags::READ_ONLY)
            .unwrap();
        let dst = ctx.create_buffer::<i32>(3, MemFlags::WRITE_ONLY).unwrap();

        let e = queue.copy_buffer(&src, &dst, 0, 0, 12, ()).unwrap();
        e.wait().unwrap();

        let out: Vec<i32> = queue.get(&dst, ()).unwrap();
        assert_eq!(out, vec![7, 8, 9]);
    })
}

#[test]
fn program_build() {
    let src = "__kernel void test(__global int *i) { *i += 1; }";
    test_all_platforms_devices(&mut |device, ctx, _| {
        let prog = ctx.create_program_from_source(src).unwrap();
        prog.build(device).unwrap();
    })
}

#[test]
fn program_build_failure_carries_log() {
    let src = "__kernel void test(__global int *i) { this is not opencl c }";
    test_all_platforms_devices(&mut |device, ctx, _| {
        let prog = ctx.create_program_from_source(src).unwrap();
        match prog.build(device) {
            Err(Error::BuildFailed { .. }) => {}
            other => panic!("expected build failure, got {:?}", other.map(|_| ())),
        }
    })
}

#[test]
fn simple_kernel() {
    let src = "__kernel void test(__global int *i) { *i += 1; }";
    test_all_platforms_devices(&mut |device, ctx, queue| {
        let prog = ctx.create_program_from_source(src).unwrap();
        prog.build(device).unwrap();

        let k = prog.create_kernel("test").unwrap();
        let v = ctx
            .create_buffer_from(&[1i32][..], MemFlags::READ_WRITE)
            .unwrap();

        k.set_arg(0, &v).unwrap();

        queue
            .enqueue_async_kernel(&k, 1usize, None, ())
            .unwrap()
            .wait()
            .unwrap();

        let v: Vec<i32> = queue.get(&v, ()).unwrap();
        assert_eq!(v[0], 2);
    })
}

#[test]
fn kernel_with_scalar_arg() {
    let src = "__kernel void test(__global int *i, long k) { *i += k; }";
    test_all_platforms_devices(&mut |device, ctx, queue| {
        let prog = ctx.create_program_from_source(src).unwrap();
        prog.build(device).unwrap();

        let k = prog.create_kernel("test").unwrap();
        let v = ctx
            .create_buffer_from(&[1i32][..], MemFlags::READ_WRITE)
            .unwrap();

        k.set_arg(0, &v).unwrap();
        k.set_arg(1, &42i64).unwrap();

        queue.enqueue_kernel(&k, 1usize, None, ()).unwrap();

        let v: Vec<i32> = queue.get(&v, ()).unwrap();
        assert_eq!(v[0], 43);
    })
}

#[test]
fn chained_kernel_events() {
    let src = "__kernel void test(__global int *i) { *i += 1; }";
    test_all_platforms_devices(&mut |device, ctx, queue| {
        let prog = ctx.create_program_from_source(src).unwrap();
        prog.build(device).unwrap();

        let k = prog.create_kernel("test").unwrap();
        let v = ctx
            .create_buffer_from(&[1i32][..], MemFlags::READ_WRITE)
            .unwrap();

        k.set_arg(0, &v).unwrap();

        let mut e: Option<Event> = None;
        for _ in 0..8 {
            e = Some(queue.enqueue_async_kernel(&k, 1usize, None, e).unwrap());
        }
        e.wait().unwrap();

        let v: Vec<i32> = queue.get(&v, ()).unwrap();
        assert_eq!(v[0], 9);
    })
}

#[test]
fn ndrange_2d() {
    let src = "__kernel void test(__global int *out, uint w) { \
               size_t x = get_global_id(0); size_t y = get_global_id(1); \
               out[y * w + x] = (int)(y * w + x); }";
    test_all_platforms_devices(&mut |device, ctx, queue| {
        let prog = ctx.create_program_from_source(src).unwrap();
        prog.build(device).unwrap();

        let k = prog.create_kernel("test").unwrap();
        let v = ctx.create_buffer::<i32>(16, MemFlags::WRITE_ONLY).unwrap();

        k.set_arg(0, &v).unwrap();
        k.set_arg(1, &4u32).unwrap();

        queue.enqueue_kernel(&k, (4usize, 4usize), None, ()).unwrap();

        let out: Vec<i32> = queue.get(&v, ()).unwrap();
        let expected: Vec<i32> = (0..16).collect();
        assert_eq!(out, expected);
    })
}

#[test]
fn profiling_events() {
    let src = "__kernel void test(__global int *i) { *i += 1; }";
    let platforms = platforms().unwrap();
    for p in &platforms {
        for d in &p.get_devices().unwrap() {
            let ctx = Context::new(d).unwrap();
            let queue = CommandQueue::new(&ctx, d, true, false).unwrap();

            let prog = ctx.create_program_from_source(src).unwrap();
            prog.build(d).unwrap();
            let k = prog.create_kernel("test").unwrap();
            let v = ctx
                .create_buffer_from(&[1i32][..], MemFlags::READ_WRITE)
                .unwrap();
            k.set_arg(0, &v).unwrap();

            let e = queue.enqueue_async_kernel(&k, 1usize, None, ()).unwrap();
            e.wait().unwrap();

            let queued = e.queue_time().unwrap();
            let end = e.end_time().unwrap();
            assert!(end >= queued);
        }
    }
}

#[test]
fn user_events() {
    test_all_platforms_devices(&mut |_, ctx, _| {
        let e = match ctx.create_user_event() {
            Ok(e) => e,
            // User events need OpenCL >= 1.1.
            Err(_) => return,
        };
        e.set_complete().unwrap();
        e.wait().unwrap();
    })
}

#[test]
fn supported_image_formats() {
    test_all_platforms_devices(&mut |_, ctx, _| {
        let formats = ctx
            .supported_image_formats(MemFlags::READ_WRITE, MemObjectType::Image2D)
            .unwrap();
        // Every implementation supports at least RGBA/UNORM_INT8.
        assert!(!formats.is_empty());
    })
}

#[test]
fn map_and_unmap_buffer() {
    test_all_platforms_devices(&mut |_, ctx, queue| {
        let buf = ctx
            .create_buffer_from(&[10i32, 20, 30, 40][..], MemFlags::READ_WRITE)
            .unwrap();

        let (mapped, _ev) = queue
            .map_buffer(&buf, true, clgl::MapFlags::READ, 0, 16, ())
            .unwrap();

        let host = unsafe { std::slice::from_raw_parts(mapped.as_ptr() as *const i32, 4) };
        assert_eq!(host, &[10, 20, 30, 40]);

        queue.unmap(&buf, mapped, ()).unwrap().wait().unwrap();
    })
}
