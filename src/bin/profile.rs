use std::time::{Duration, Instant};

use mazewalk::{Generator, generate_maze, logging, maze::Maze};

fn main() -> mazewalk::Result<()> {
    let _guard = logging::init("profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let generator = match args.next() {
        Some(name) => name.parse()?,
        None => Generator::default(),
    };

    let mut maze = Maze::new(u8::MAX, u8::MAX)?;
    let mut total = Duration::ZERO;
    for i in 0..num_iters {
        let started = Instant::now();
        generate_maze(&mut maze, generator, Some(i as u64));
        let elapsed = started.elapsed();
        tracing::info!("[profile] iteration {} took {:?}", i, elapsed);
        total += elapsed;
    }

    println!(
        "{}: {} iterations on a {}x{} maze, {:?} on average",
        generator,
        num_iters,
        maze.width(),
        maze.height(),
        total / num_iters.max(1) as u32
    );
    Ok(())
}
