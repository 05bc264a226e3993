//! Cockpit Runtime
//!
//! Boots the GPU memory ledger and runs the plugin's start/stop cycle
//! against the CPU side of the graphics helpers.

mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use cockpit_core::{icao, math};
use cockpit_ledger::{call_site, declare_token, ComponentType, InstanceId, PixelFormat};
use cockpit_render::geometry;
use settings::Settings;
use std::path::PathBuf;

declare_token!(STARTUP_TEXTURES, "startup_textures");
declare_token!(STAGED_GEOMETRY, "staged_geometry");

#[derive(Debug, Parser)]
#[command(name = "cockpit", version, about = "Cockpit graphics runtime")]
struct Args {
    /// JSON settings file; defaults apply when omitted
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Airport whose country and language are reported at startup
    #[arg(long, default_value = "KSEA")]
    airport: String,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    tracing::info!("Cockpit runtime v{}", cockpit_core::VERSION);
    if settings.ledger.enabled {
        cockpit_ledger::init();
    }

    report_airport(&args.airport);
    let instances = load_textures();
    stage_instruments(&settings)?;

    tracing::info!(bytes = cockpit_ledger::total_bytes(), "GPU memory in use");
    cockpit_ledger::enumerate(|token, bytes| {
        tracing::info!(token, bytes, "token usage");
    });
    if settings.ledger.dump_snapshot {
        let snapshot = serde_json::to_string_pretty(&cockpit_ledger::snapshot())
            .context("failed to serialize ledger snapshot")?;
        tracing::info!("ledger snapshot:\n{snapshot}");
    }

    unload_textures(instances);
    if settings.ledger.enabled {
        cockpit_ledger::fini();
    }

    tracing::info!("Runtime shut down cleanly");
    Ok(())
}

fn report_airport(airport: &str) {
    let country = icao::icao_to_country(airport).unwrap_or("unknown");
    let language = icao::icao_to_language(airport);
    tracing::info!(airport, country, language, "airport region");
}

const TEXTURES: [(PixelFormat, ComponentType, u32, u32); 3] = [
    (PixelFormat::Rgba, ComponentType::UnsignedByte, 1024, 1024),
    (PixelFormat::Bgra, ComponentType::UnsignedInt8888, 512, 512),
    (
        PixelFormat::DepthStencil,
        ComponentType::UnsignedInt248,
        1024,
        1024,
    ),
];

fn load_textures() -> Vec<InstanceId> {
    TEXTURES
        .iter()
        .map(|&(format, component, width, height)| {
            let instance = InstanceId::next();
            cockpit_ledger::alloc(
                &STARTUP_TEXTURES,
                Some(instance),
                call_site!(),
                format,
                component,
                width,
                height,
            );
            instance
        })
        .collect()
}

fn unload_textures(instances: Vec<InstanceId>) {
    for (instance, &(format, component, width, height)) in instances.into_iter().zip(&TEXTURES) {
        cockpit_ledger::free(
            &STARTUP_TEXTURES,
            Some(instance),
            format,
            component,
            width,
            height,
        );
    }
}

/// Build a full-viewport backdrop quad and a needle line, account the bytes
/// they would occupy on the GPU, then release them.
fn stage_instruments(settings: &Settings) -> Result<()> {
    let w = settings.graphics.viewport_width as f32;
    let h = settings.graphics.viewport_height as f32;
    let pvm = geometry::viewport_pvm(w, h);

    let corners = [
        math::Vec2::new(0.0, 0.0),
        math::Vec2::new(0.0, h),
        math::Vec2::new(w, h),
        math::Vec2::new(w, 0.0),
    ];
    let uv = [
        math::Vec2::new(0.0, 0.0),
        math::Vec2::new(0.0, 1.0),
        math::Vec2::new(1.0, 1.0),
        math::Vec2::new(1.0, 0.0),
    ];
    let quad = geometry::build_2d_quads(&corners, Some(&uv[..]))?;
    let indices = geometry::quad_indices(quad.len())?;
    geometry::validate_indices(&indices, quad.len())?;

    // needle sweeps 30% of the way across the dial
    let sweep = math::wavg(-120.0, 120.0, 0.3).to_radians() as f32;
    let center = math::Vec3::new(w / 2.0, h / 2.0, 0.0);
    let tip = center + math::Vec3::new(sweep.sin(), sweep.cos(), 0.0) * (h / 3.0);
    let needle = geometry::build_3d_lines(&[center, tip])?;

    let clip = pvm.project_point3(tip);
    tracing::debug!(x = clip.x, y = clip.y, "needle tip in clip space");

    let bytes = (std::mem::size_of_val(quad.as_slice())
        + std::mem::size_of_val(indices.as_slice())
        + std::mem::size_of_val(needle.as_slice())) as u64;
    let instance = InstanceId::next();
    cockpit_ledger::alloc_bytes(&STAGED_GEOMETRY, Some(instance), call_site!(), bytes);
    tracing::info!(
        quads = quad.len() / 4,
        indices = indices.len(),
        bytes,
        "instrument geometry staged"
    );
    cockpit_ledger::free_bytes(&STAGED_GEOMETRY, Some(instance), bytes);
    Ok(())
}
