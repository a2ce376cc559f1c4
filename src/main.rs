mod logger;

use clap::Parser;
use log::{debug, error, info};
use std::io::{self, BufRead, Write};
use volmarch::{
    cli::Args,
    integrator::Strategy,
    output::save_image,
    renderer::render,
    scene::{self, Scene},
};

use logger::init_logger;

fn main() {
    let args = Args::parse();
    init_logger(args.debug_level.into());

    let strategy = match args.strategy {
        Some(s) => Some(s.into()),
        None => prompt_strategy(),
    };
    let Some(strategy) = strategy else {
        info!("No raymarching strategy selected, nothing to render");
        return;
    };

    if let Err(e) = run(&args, strategy) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args, strategy: Strategy) -> volmarch::Result<()> {
    let scene = match &args.scene {
        Some(path) => {
            info!("Loading scene from {path}");
            scene::load(path)?
        }
        None => Scene::reference(),
    };
    debug!("medium: {:?}", scene.medium);
    debug!("hit policy: {:?}, {} surface(s)", scene.hit_policy, scene.objects.len());

    let out = render(&scene, strategy, !args.quiet);
    save_image(&out.image, &args.output)?;
    info!("Saved → {}", args.output);
    Ok(())
}

fn prompt_strategy() -> Option<Strategy> {
    println!("1. backward or 2. forward");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    Strategy::from_choice(&line)
}
