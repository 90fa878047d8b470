use clap::Parser;
use log::{error, info};
use nalgebra::Vector3;
use std::process::ExitCode;
use std::time::Instant;
use vertex_stage::core::pipeline::VertexOutput;
use vertex_stage::io::cli::Cli;
use vertex_stage::io::config::Config;
use vertex_stage::io::image::save_canvas_to_image;
use vertex_stage::io::obj_loader::load_obj;
use vertex_stage::pipeline::draw::DrawCall;
use vertex_stage::pipeline::preview::PointCanvas;
use vertex_stage::pipeline::shaders::viewer::ViewerShader;
use vertex_stage::scene::mesh::Mesh;
use vertex_stage::scene::utils::normalize_and_center_mesh;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> vertex_stage::Result<()> {
    let start = Instant::now();
    let config = cli.resolve_config()?;

    let mut mesh = load_mesh(&config)?;
    config.object.apply_element_colors(&mut mesh)?;
    if config.object.normalize {
        let (center, scale) = normalize_and_center_mesh(&mut mesh);
        info!("Mesh normalized. Center: {:?}, Scale: {:.4}", center, scale);
    }

    let draw = config.draw_config();
    info!(
        "Draw call: mode {:?}, highlight {}, lighting {}, builtin source {}",
        draw.color_mode, draw.highlight, draw.lighting, draw.use_builtin_source
    );

    let shader = ViewerShader::new(draw);
    let shaded = DrawCall::execute_indexed(&shader, &mesh);
    info!(
        "Shaded {} vertices ({} triangles)",
        shaded.vertices.len(),
        shaded.indices.len() / 3
    );

    if config.output.dump {
        dump_vertices(&shaded.vertices);
    }

    if let Some(path) = &config.output.image {
        let mut canvas = PointCanvas::new(
            config.output.width,
            config.output.height,
            Vector3::from(config.output.background),
        );
        canvas.splat_all(&shaded.vertices);
        save_canvas_to_image(&canvas, path)?;
    }

    info!("Total time: {:?}", start.elapsed());
    Ok(())
}

fn load_mesh(config: &Config) -> vertex_stage::Result<Mesh> {
    match &config.object.path {
        Some(path) => load_obj(path),
        None => {
            info!("No mesh given, using the test triangle");
            Ok(Mesh::create_test_triangle())
        }
    }
}

fn dump_vertices(vertices: &[VertexOutput]) {
    println!("# index clip.x clip.y clip.z clip.w r g b a point_size");
    for (i, v) in vertices.iter().enumerate() {
        let p = v.clip_position;
        let c = v.color;
        println!(
            "{i} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6} {}",
            p.x, p.y, p.z, p.w, c.x, c.y, c.z, c.w, v.point_size
        );
    }
}
