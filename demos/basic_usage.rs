//! Basic usage example of poolkeep

use poolkeep::{
    host::{pool_key, InMemoryHost, Prototype},
    loader::TemplateCatalog,
    registry::{PoolRegistry, RegistryConfig},
    Result,
};
use std::rc::Rc;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    println!("Poolkeep Object Pool Example");
    println!("============================");

    let host = Rc::new(InMemoryHost::new());
    let catalog = TemplateCatalog::new()
        .with("prefabs/pooled", Prototype::new("bullet"))
        .with("prefabs/pooled", Prototype::new("Muzzle Flash (FX)").with_id("flash"));

    let config = RegistryConfig::new("prefabs/pooled").with_lazy_initial_count(2);
    let mut registry = PoolRegistry::with_config(Rc::clone(&host), catalog, config)?;

    println!("\nPreloading pools...");
    let created = registry.preload(4, true)?;
    println!("  Pools created: {}", created);
    println!("  Keys: {:?}", registry.keys());

    println!("\nFiring a burst of 6 bullets from a pool of 4...");
    let mut bullets = Vec::new();
    for _ in 0..6 {
        bullets.push(registry.obtain("bullet")?);
    }
    let flash = registry.obtain("flash")?;
    println!("  Flash instance keyed as '{}'", pool_key(&flash));

    println!("\nReturning everything...");
    for bullet in bullets {
        registry.free_instance(bullet)?;
    }
    registry.free_instance(flash)?;

    for stats in registry.all_pool_stats() {
        println!("  {}", stats.summary());
    }

    println!("\nReleasing all pools...");
    registry.release_all(false);
    println!("  Entities constructed: {}", host.constructed());
    println!("  Entities destroyed:   {}", host.destroyed());
    println!("  Entities live:        {}", host.live());

    Ok(())
}
