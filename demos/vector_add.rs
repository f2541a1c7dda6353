use clgl::buffer::MemFlags;
use clgl::hl::create_compute_context;

const KERNEL: &str = r#"
__kernel void vector_add(__global const long *a,
                         __global const long *b,
                         __global long *c)
{
    size_t i = get_global_id(0);
    c[i] = a[i] + b[i];
}
"#;

fn main() -> clgl::Result<()> {
    env_logger::init();

    let vec_a = vec![0i64, 1, 2, -3, 4, 5, 6, 7];
    let vec_b = vec![-7i64, -6, 5, -4, 0, -1, 2, 3];

    let (device, ctx, queue) = create_compute_context(false)?;
    println!("device: {}", device.name()?);

    let a = ctx.create_buffer_from(&vec_a, MemFlags::READ_ONLY)?;
    let b = ctx.create_buffer_from(&vec_b, MemFlags::READ_ONLY)?;
    let c = ctx.create_buffer::<i64>(vec_a.len(), MemFlags::WRITE_ONLY)?;

    let program = ctx.create_program_from_source(KERNEL)?;
    program.build(&device)?;

    let kernel = program.create_kernel("vector_add")?;
    kernel.set_arg(0, &a)?;
    kernel.set_arg(1, &b)?;
    kernel.set_arg(2, &c)?;

    let event = queue.enqueue_async_kernel(&kernel, vec_a.len(), None, ())?;
    event.wait()?;

    let vec_c: Vec<i64> = queue.get(&c, ())?;

    println!("  {:?}", vec_a);
    println!("+ {:?}", vec_b);
    println!("= {:?}", vec_c);
    Ok(())
}
