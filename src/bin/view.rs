// memregions-view: browse the stack and heap regions in a terminal UI

use std::alloc::System;
use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use memregions::demo::engine::MemoryRegionDemo;
use memregions::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Running memory region demo...");
    let mut demo = MemoryRegionDemo::new(&System);
    let status = demo.run();

    let Some(snapshot) = demo.snapshot().cloned() else {
        if let Some(err) = demo.error() {
            eprintln!("Error: {}", err);
        }
        std::process::exit(i32::from(status.code()));
    };
    eprintln!(
        "Captured {} stack and {} heap elements.",
        snapshot.fixed.elements.len(),
        snapshot.dynamic.elements.len()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(snapshot, demo.terminal().clone());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
