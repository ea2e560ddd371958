use std::{path::PathBuf, sync::Arc, time::Instant};

use glam::{Mat4, Vec3};
use ogf_client::{abs::*, logging};
use ogf_core::{config::Config, image::Image, math::Color, mesh::Mesh};
use sdl2::keyboard::Keycode;

const CUBE_OBJ: &str = include_str!("assets/cube.obj");

macro_rules! shader {
    ($gl:expr, $name:literal) => {{
        let shader = Shader::new(&$gl);
        shader
            .load_from_memory(
                include_str!(concat!("render/shaders/", $name, "/vert.glsl")),
                include_str!(concat!("render/shaders/", $name, "/frag.glsl")),
            )
            .map(|()| shader)
    }};
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ogf").join("config.json"))
}

fn load_config() -> ogf_core::Result<Config> {
    match config_path() {
        Some(path) => Config::load_or_default(path),
        None => Ok(Config::default()),
    }
}

/// 8x8-cell checkerboard used when no texture is configured.
fn checkerboard(size: u32) -> ogf_core::Result<Image> {
    let mut image = Image::new(size, size, Color::WHITE);
    let grey = Color::rgb(0.5, 0.5, 0.5);
    for y in 0..size {
        for x in 0..size {
            if (x / 8 + y / 8) % 2 == 1 {
                image.set_pixel(x, y, grey)?;
            }
        }
    }
    Ok(image)
}

/// Whether `event` should end the demo loop.
fn quits(event: &Event) -> bool {
    match event {
        Event::Closed => true,
        Event::KeyPressed { keycode, .. } => *keycode == Keycode::Escape,
        _ => false,
    }
}

fn run() -> ogf_client::Result<()> {
    let mut config = load_config()?;
    logging::init(&config.log)?;

    // A model path on the command line wins over the config file.
    if let Some(model) = std::env::args_os().nth(1) {
        config.demo.model = Some(model.into());
    }

    let mut window = Window::create(&config.window)?;
    let gl = Arc::clone(window.gl());

    let mesh = match &config.demo.model {
        Some(path) => Mesh::load_from_file(path)?,
        None => Mesh::load_obj_from_str(CUBE_OBJ)?,
    };
    let mesh = MeshBuffer::from_mesh(&gl, &mesh)?;
    log::info!("Drawing {} indices per frame", mesh.index_count());

    let image = match &config.demo.texture {
        Some(path) => Image::load_from_file(path)?,
        None => checkerboard(64)?,
    };
    let texture = Texture::load_from_image(&gl, &image)?;
    let shader = shader!(gl, "mesh")?;

    let (mut width, mut height) = window
        .size()
        .unwrap_or((config.window.width, config.window.height));
    let start = Instant::now();

    let mut running = true;
    while running {
        while let Some(event) = window.poll_event() {
            if quits(&event) {
                running = false;
                break;
            }
            if let Event::Resized {
                width: new_width,
                height: new_height,
            } = event
            {
                width = new_width;
                height = new_height;
                window.set_viewport(width, height);
            }
        }
        if !running {
            break;
        }

        let aspect = width as f32 / height.max(1) as f32;
        let projection = Mat4::perspective_rh_gl(60.0f32.to_radians(), aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 1.5, 3.0), Vec3::ZERO, Vec3::Y);
        let model = Mat4::from_rotation_y(start.elapsed().as_secs_f32() * 0.8);

        window.clear();
        texture.bind(0);
        shader.use_program();
        shader.set_uniform("u_projection", projection);
        shader.set_uniform("u_view", view);
        shader.set_uniform("u_model", model);
        shader.set_uniform("u_texture", 0i32);
        shader.set_uniform("u_light_dir", Vec3::new(-0.4, -1.0, -0.6));
        shader.set_uniform("u_tint", Color::WHITE);
        window.draw(&mesh, &shader);
        window.swap_buffers();
    }

    // GPU objects go while the context is still current.
    drop(shader);
    drop(texture);
    drop(mesh);
    window.close();

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        log::error!("{}", err);
        eprintln!("ogf-client: {}", err);
        std::process::exit(1);
    }
}
