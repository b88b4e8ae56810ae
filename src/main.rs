mod components;
mod config;
mod event;
mod headless;
mod input;
mod route;
mod scene;
mod systems;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use shoreline_geom::Vec2;
use shoreline_mesh_cpu::ChunkMesh;
use shoreline_runtime::TerrainStreamer;
use shoreline_world::ChunkCoord;

use crate::components::World;
use crate::config::{AppConfig, load_app_config};
use crate::event::EventQueue;
use crate::headless::HeadlessTarget;
use crate::input::InputDirector;
use crate::route::{Route, ScriptedWalk};
use crate::scene::Scene;
use crate::systems::{AnimationSystem, MovementSystem, TerrainSystem};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless terrain streaming driver", long_about = None)]
struct Cli {
    /// TOML config with [terrain], [sim] and [log] sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulation ticks to run
    #[arg(long)]
    ticks: Option<u64>,

    /// Noise seed
    #[arg(long)]
    seed: Option<i32>,

    /// Scripted walk for the player
    #[arg(long, value_enum)]
    route: Option<Route>,

    /// Player speed in world units per second
    #[arg(long)]
    speed: Option<f32>,

    /// Log filter; overrides RUST_LOG and the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Build one chunk and print its blend-mask histogram instead of simulating
    #[arg(long, value_name = "CX,CY", value_parser = parse_coord)]
    dump_mesh: Option<ChunkCoord>,
}

fn parse_coord(s: &str) -> Result<ChunkCoord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected CX,CY, got {s:?}"))?;
    let cx = x.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let cy = y.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(ChunkCoord::new(cx, cy))
}

impl Cli {
    fn apply(&self, cfg: &mut AppConfig) {
        if let Some(t) = self.ticks {
            cfg.sim.ticks = t;
        }
        if let Some(s) = self.seed {
            cfg.terrain.noise.seed = s;
        }
        if let Some(r) = self.route {
            cfg.sim.route = r;
        }
        if let Some(s) = self.speed {
            cfg.sim.speed = s;
        }
    }
}

fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let mut builder = match cli_level {
        Some(level) => {
            let mut b = env_logger::Builder::new();
            b.parse_filters(level);
            b
        }
        None => env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(config_level),
        ),
    };
    builder.format_timestamp_millis().init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => load_app_config(path),
        None => Ok(AppConfig::default()),
    };
    let mut cfg = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging(cli.log_level.as_deref(), "info");
            log::error!(target: "app", "{}", e);
            return Err(e.into());
        }
    };
    init_logging(cli.log_level.as_deref(), &cfg.log.level);
    cli.apply(&mut cfg);
    if let Err(e) = cfg.validate() {
        log::error!(target: "app", "{}", e);
        return Err(e.into());
    }
    log::info!(
        target: "app",
        "config: {} ticks at dt {:.4}s, route {:?}, speed {}, noise seed {}",
        cfg.sim.ticks,
        cfg.sim.dt,
        cfg.sim.route,
        cfg.sim.speed,
        cfg.terrain.noise.seed
    );

    if let Some(coord) = cli.dump_mesh {
        let mut streamer = TerrainStreamer::new(cfg.terrain.clone());
        let mesh = streamer.build_detached(coord);
        print_mesh_report(&mesh);
        return Ok(());
    }

    run(&cfg);
    Ok(())
}

fn run(cfg: &AppConfig) {
    let mut world = World::new();
    world.spawn_player(0, Vec2::ZERO);

    let mut scene = Scene::new(world);
    scene.add_system(Box::new(InputDirector::new(cfg.sim.speed)));
    scene.add_system(Box::new(MovementSystem));
    scene.add_system(Box::new(AnimationSystem));
    scene.add_system(Box::new(TerrainSystem::new(TerrainStreamer::new(
        cfg.terrain.clone(),
    ))));

    log::debug!(target: "app", "systems: {:?}", scene.system_names());

    let walk = ScriptedWalk::new(cfg.sim.route, cfg.sim.radius, cfg.sim.speed, cfg.sim.dt);
    let mut queue = EventQueue::new();
    let mut target = HeadlessTarget::default();
    let mut peak_chunks = 0usize;
    let mut peak_quads = 0usize;

    for _ in 0..cfg.sim.ticks {
        walk.schedule(&mut queue);
        while let Some(env) = queue.pop_ready() {
            log::trace!(target: "app", "event #{} at tick {}: {:?}", env.id, env.tick, env.kind);
            scene.handle_event(&env.kind);
        }
        scene.update(cfg.sim.dt);
        target.begin_frame();
        scene.render(&mut target);
        peak_chunks = peak_chunks.max(target.chunks_this_frame);
        peak_quads = peak_quads.max(target.quads_this_frame);
        queue.advance_tick();
    }

    let end = scene.world.focus_position().unwrap_or(Vec2::ZERO);
    let t = &scene.world.terrain;
    log::info!(
        target: "app",
        "done: {} ticks, player at ({:.1}, {:.1}) in chunk {}, {} events still queued",
        cfg.sim.ticks,
        end.x,
        end.y,
        t.current.map_or_else(|| "-".to_string(), |c| c.to_string()),
        queue.pending()
    );
    log::info!(
        target: "app",
        "chunks: {} live (peak {}), {} spawned, {} evicted, {} transitions",
        t.live_chunks,
        peak_chunks,
        t.stats.spawned,
        t.stats.evicted,
        t.stats.transitions
    );
    log::info!(
        target: "app",
        "mesh: {} quads built, {} unmapped sea cells, {} quads drawn over {} frames (peak {}) from atlas {}",
        t.stats.quads_built,
        t.stats.unmapped_cells,
        target.total_quads,
        target.frames,
        peak_quads,
        target.atlas.map_or("-", |a| a.name)
    );
}

fn print_mesh_report(mesh: &ChunkMesh) {
    let s = &mesh.stats;
    println!("chunk {}", mesh.coord);
    println!(
        "  bounds: ({}, {}) size {}x{}",
        mesh.bounds.min.x, mesh.bounds.min.y, mesh.bounds.size.x, mesh.bounds.size.y
    );
    println!(
        "  cells: {} land, {} sea ({} unmapped); quads: {} ({} patches)",
        s.land_cells,
        s.sea_cells,
        s.unmapped_cells,
        mesh.quad_count(),
        s.patch_quads
    );
    println!("  sea masks (TL T TR R BR B BL L = bits 0..7):");
    for (mask, count) in s.top_masks(16) {
        println!("    {mask:08b}  {count}");
    }
}
