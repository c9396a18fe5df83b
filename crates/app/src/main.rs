//! Entry point for meshinfo.
//! Loads OBJ meshes and logs what a renderer would receive.

use std::{
    path::{Path, PathBuf},
    thread,
};

use anyhow::{Context, Result};
use asset::{LoadOptions, Mesh, MissingDelimiter};

struct Args {
    options: LoadOptions,
    dump: bool,
    paths: Vec<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut options = LoadOptions::default();
    let mut dump = false;
    let mut paths = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--legacy-tokenizer" => options.missing_delimiter = MissingDelimiter::KeepRemainder,
            "--dump" => dump = true,
            other if other.starts_with("--") => {
                eprintln!("[warn] Unknown flag '{}', ignoring.", other);
            }
            _ => paths.push(PathBuf::from(&arg)),
        }
    }

    if paths.is_empty() {
        anyhow::bail!("Usage: meshinfo [--legacy-tokenizer] [--dump] <file.obj>...");
    }

    Ok(Args {
        options,
        dump,
        paths,
    })
}

fn report(path: &Path, mesh: &Mesh, dump: bool) {
    log::info!(
        "{}: {} triangles, {} corners, {} bytes of vertex data",
        path.display(),
        mesh.triangle_count(),
        mesh.len(),
        mesh.position_bytes().len() + mesh.texcoord_bytes().len() + mesh.normal_bytes().len()
    );
    if !dump {
        return;
    }
    for (t, tri) in mesh.triangles().enumerate() {
        for (k, c) in tri.iter().enumerate() {
            log::debug!(
                "tri {} corner {}: p={:?} uv={:?} n={:?}",
                t,
                k,
                c.position.to_array(),
                c.texcoord.to_array(),
                c.normal.to_array()
            );
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    log::info!(
        "Loading {} mesh(es), missing_delimiter={:?}",
        args.paths.len(),
        args.options.missing_delimiter
    );

    // Loads share no state, so each file gets its own thread.
    let options = &args.options;
    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = args
            .paths
            .iter()
            .map(|path| s.spawn(move || asset::load_mesh_with(path, options)))
            .collect();
        handles.into_iter().map(|h| h.join()).collect()
    });

    let mut failed = 0usize;
    for (path, result) in args.paths.iter().zip(results) {
        let loaded = match result {
            Ok(loaded) => loaded,
            Err(_) => {
                log::error!("{}: loader thread panicked", path.display());
                failed += 1;
                continue;
            }
        };
        match loaded.with_context(|| format!("Failed to load {}", path.display())) {
            Ok(mesh) => report(path, &mesh, args.dump),
            Err(err) => {
                log::error!("{:#}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} mesh(es) failed to load", failed, args.paths.len());
    }
    log::info!("Done.");
    Ok(())
}
