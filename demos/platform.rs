use clgl::Platform;

fn main() -> clgl::Result<()> {
    env_logger::init();

    for platform in Platform::all()? {
        println!("Platform: {}", platform.name()?);
        println!("Platform Version: {}", platform.version()?);
        println!("Vendor:   {}", platform.vendor()?);
        println!("Profile:  {}", platform.profile()?);
        println!("Available extensions: {}", platform.extensions()?);
        println!("Available devices:");
        for device in platform.get_devices()? {
            println!("   Name: {}", device.name()?);
            println!("   Version: {}", device.version()?);
            println!("   Profile: {}", device.profile()?);
            println!("   Compute Units: {}", device.compute_units()?);
            println!(
                "   Global Memory Size: {} MB",
                device.global_mem_size()? / (1024 * 1024)
            );
            println!(
                "   Local Memory Size: {} KB",
                device.local_mem_size()? / 1024
            );
            println!(
                "   Max Alloc Size: {} MB",
                device.max_mem_alloc_size()? / (1024 * 1024)
            );
            println!(
                "   GL sharing: {}",
                device.has_extension("cl_khr_gl_sharing")?
                    || device.has_extension("cl_APPLE_gl_sharing")?
            );
        }
    }
    Ok(())
}
