// memregions: stack and heap arrays side by side

use std::alloc::System;
use std::process::ExitCode;

use memregions::demo::engine::MemoryRegionDemo;

fn main() -> ExitCode {
    let mut demo = MemoryRegionDemo::new(&System);
    let status = demo.run();

    // Includes the error line when the heap request was refused
    print!("{}", demo.terminal().as_str());

    status.into()
}
