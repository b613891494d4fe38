use clap::Parser;

use gl_wrapper::renderer::PolygonMode;

use quads::scene::Scene;
use quads::scene_loader::SceneLoader;

mod app;
mod args;
mod renderer;

use app::App;
use args::Args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    let mut scene = match &args.scene {
        Some(path) => match SceneLoader::load_from_path(path) {
            Ok(s) => {
                log::info!("Read scene file from {:?}", path);
                s
            }
            Err(e) => {
                log::error!("Could not read scene description: {e}");
                std::process::exit(-1);
            }
        },
        None => Scene::default(),
    };

    apply_overrides(&mut scene, &args);

    let app = match App::new(&args, scene) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(-1);
        }
    };

    app.run();
}

/// Command line flags win over whatever the scene file asked for.
fn apply_overrides(scene: &mut Scene, args: &Args) {
    if args.fill {
        scene.polygon_mode = PolygonMode::Fill;
    }
}
