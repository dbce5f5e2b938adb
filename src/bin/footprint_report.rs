use anyhow::Result;
use clap::Parser;
use log::info;

use timeline_layout::{
    cache_footprint, timeline_for_seed, to_columnar, to_flattened_fields, LoadingCache, Timeline,
};

#[derive(Parser)]
#[command(name = "timeline-footprint")]
#[command(about = "Populate one cache per timeline representation and report memory footprint")]
struct Cli {
    /// Number of distinct keys loaded into each cache
    #[arg(long, default_value_t = 100_000)]
    keys: u32,

    /// Cache capacity in entries (defaults to the key count)
    #[arg(long)]
    capacity: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let capacity = cli.capacity.unwrap_or(cli.keys as usize);

    let object_graph = LoadingCache::new(capacity, |key: &u32| {
        Ok(Timeline::ObjectGraph(timeline_for_seed(*key)?))
    })?;
    let flattened = LoadingCache::new(capacity, |key: &u32| {
        let canonical = Timeline::ObjectGraph(timeline_for_seed(*key)?);
        to_flattened_fields(&canonical)
    })?;
    let columnar = LoadingCache::new(capacity, |key: &u32| {
        let canonical = Timeline::ObjectGraph(timeline_for_seed(*key)?);
        to_columnar(&canonical)
    })?;

    info!(
        "populating 3 caches over keys [0, {}) with capacity {}",
        cli.keys, capacity
    );
    for key in 0..cli.keys {
        object_graph.get(&key)?;
        flattened.get(&key)?;
        columnar.get(&key)?;
    }

    println!("{}", cache_footprint("Object graph:", &object_graph));
    println!("{}", cache_footprint("Flattened fields:", &flattened));
    println!("{}", cache_footprint("Columnar:", &columnar));

    Ok(())
}
