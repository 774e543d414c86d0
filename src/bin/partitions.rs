// memregions-partitions: first-fit placement in fixed partitions

use memregions::memory::partition::PartitionTable;

enum Request {
    Allocate(&'static str, usize),
    Release(&'static str),
}

const SCENARIO: [Request; 6] = [
    Request::Allocate("P1", 90),
    Request::Allocate("P2", 140),
    Request::Allocate("P3", 180),
    Request::Release("P2"),
    Request::Allocate("P4", 100),
    Request::Allocate("P5", 350),
];

fn main() {
    let mut table = PartitionTable::default();

    for request in &SCENARIO {
        match *request {
            Request::Allocate(name, size) => match table.allocate(name, size) {
                Ok(placement) => println!(
                    "Process {} placed in the {}-unit partition. Internal fragmentation: {}",
                    name, placement.partition_size, placement.fragmentation
                ),
                Err(e) => println!("Error: {}", e),
            },
            Request::Release(name) => match table.release(name) {
                Ok(_) => println!("Process {} released.", name),
                Err(e) => println!("Error: {}", e),
            },
        }
    }

    println!();
    print!("{}", table);
    println!("Total internal fragmentation: {}", table.total_fragmentation());
}
