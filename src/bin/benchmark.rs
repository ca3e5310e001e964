//! Step throughput, serial vs parallel

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::{LifeEngine, StepStrategy};

fn benchmark_step(size: usize, iterations: u32, strategy: StepStrategy) -> f64 {
    let mut engine = LifeEngine::new(size).with_strategy(strategy);
    engine.randomize_fill(&mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life Engine Step Benchmark ===\n");

    let sizes = [50, 100, 256, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_step(size, iterations, StepStrategy::Serial);
        let parallel_ms = benchmark_step(size, iterations, StepStrategy::Parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let auto_ms = benchmark_step(2000, iterations, StepStrategy::Auto);
    println!(
        "Auto:    {:.2} ms/gen, {:.1}M cells/sec",
        auto_ms,
        (cells as f64) / (auto_ms / 1000.0) / 1_000_000.0
    );
}
