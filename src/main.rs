use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::info;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use edgecache::common::common::setup_logging;
use edgecache::config::structs::configuration::Configuration;
use edgecache::engine::structs::geo_cache_engine::GeoCacheEngine;
use edgecache::health::structs::health_monitor::HealthMonitor;
use edgecache::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let engine = Arc::new(GeoCacheEngine::new(config.clone()));
            info!("[BOOT] Topology: {} regions, {} edge nodes",
                engine.registry.get_regions().len(),
                engine.registry.get_edge_nodes().len()
            );

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let monitor = Arc::new(HealthMonitor::new(engine.registry.clone(), config.health.clone()));
            info!("[BOOT] Starting thread for health monitoring with {} seconds delay...", config.health.check_interval);
            let monitor_handle = monitor.start();

            let stats_handler = tokio_shutdown.clone();
            let engine_spawn_stats = engine.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = engine_spawn_stats.get_geographic_stats();
                            info!(
                                "[STATS] Regions: {}/{} active - Avg Latency: {:.1}ms - Hit Rate: {:.2}",
                                stats.active_regions, stats.total_regions,
                                stats.average_latency_ms, stats.cache_hit_rate
                            );
                            for region in &stats.regional_distribution {
                                info!(
                                    "[STATS] Region '{}': Items:{} Usage:{}/{} Nodes:{}/{}",
                                    region.region_id, region.items, region.current_usage,
                                    region.cache_capacity, region.active_nodes, region.total_nodes
                                );
                            }
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            if config.cache.sweep_interval != 0 {
                let sweep_handler = tokio_shutdown.clone();
                let engine_spawn_sweep = engine.clone();
                let sweep_interval = config.cache.sweep_interval;
                info!("[BOOT] Starting thread for cache sweeps with {sweep_interval} seconds delay...");

                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(sweep_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let removed = engine_spawn_sweep.sweep_expired();
                                if removed > 0 {
                                    info!("[SWEEP] Reclaimed {removed} expired entries");
                                }
                            }
                            _ = sweep_handler.handle() => {
                                info!("[BOOT] Shutting down thread for cache sweeps...");
                                return;
                            }
                        }
                    }
                });
            }

            tokio_shutdown.handle().await;

            info!("[SHUTDOWN] Stopping health monitor...");
            monitor.stop();
            let _ = monitor_handle.await;
            info!("[SHUTDOWN] Done, exiting");
        });

    Ok(())
}
