// memregions-timing: compare creating values on the stack and on the heap

use memregions::timing::{run_timing, TimingConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("memregions-timing");

    let config = match TimingConfig::from_args(args.iter().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Usage: {} [runs] [count]", program_name);
            std::process::exit(1);
        }
    };

    println!(
        "Running {} tests with {} values each...\n",
        config.runs, config.count
    );

    let report = run_timing(config, |run, stack, heap| {
        println!("Test {}:", run);
        println!("  Time (stack): {:.4} s", stack.as_secs_f64());
        println!("  Time (heap):  {:.4} s\n", heap.as_secs_f64());
    });

    println!("=== FINAL RESULTS ===");
    println!("Mean time (stack): {:.4} s", report.mean_stack().as_secs_f64());
    println!("Mean time (heap):  {:.4} s", report.mean_heap().as_secs_f64());
    match report.percent_difference() {
        Some(pct) => println!("Percent difference: {:.2}% (heap vs stack)", pct),
        None => println!("Percent difference: n/a (stack time too small to measure)"),
    }
}
