// memregions-paging: replay a reference string under FIFO, LRU and OPT

use memregions::memory::paging::{
    parse_frames, parse_reference_string, simulate, PagingError, ReplacementPolicy,
};

fn run(args: &[String]) -> Result<(), PagingError> {
    let frames = parse_frames(&args[0])?;
    let references = parse_reference_string(&args[1..].join(" "))?;

    let fifo = simulate(ReplacementPolicy::Fifo, &references, frames)?;
    println!("--- FIFO Simulation ---");
    for step in &fifo.steps {
        println!("{}", step);
    }

    println!("\n--- Final Results ---");
    println!("Total references: {}", fifo.references());
    println!("Total page faults: {}", fifo.faults());
    println!("Total page hits: {}", fifo.hits());
    println!("Page fault rate: {:.2}%", fifo.fault_rate());
    println!("Page hit rate: {:.2}%", fifo.hit_rate());

    println!("\n--- Policy Comparison ({} frames) ---", frames);
    let mut best: Option<(ReplacementPolicy, usize)> = None;
    for policy in ReplacementPolicy::ALL {
        let report = simulate(policy, &references, frames)?;
        println!(
            "{:<4} faults: {:>3} ({:.2}%)",
            policy,
            report.faults(),
            report.fault_rate()
        );
        if best.map_or(true, |(_, faults)| report.faults() < faults) {
            best = Some((policy, report.faults()));
        }
    }
    if let Some((policy, faults)) = best {
        println!("Fewest faults: {} ({})", policy, faults);
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("memregions-paging");

    if args.len() < 3 {
        eprintln!("Usage: {} <frames> <page> [page ...]", program_name);
        eprintln!("Example: {} 3 7 0 1 2 0 3 0 4", program_name);
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1..]) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
