use clap::{Parser, ValueEnum};
use std::time::Instant;
use winit::{dpi::LogicalSize, event::*, event_loop::EventLoop, window::WindowBuilder};

use komloy_core::{
    Scene, SceneConfig, TickClock, ViewMode, AVATAR_MOVE_SPEED, FREE_CAMERA_SPEED, LANTERN_COUNT,
    MOUSE_SENSITIVITY,
};

mod gpu;
mod input;

use gpu::GpuState;
use input::{Action, WindowInput};

const TITLE: &str = "Kom Loy Festival Simulation";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewArg {
    Free,
    ThirdPerson,
    FirstPerson,
}

impl From<ViewArg> for ViewMode {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Free => ViewMode::Free,
            ViewArg::ThirdPerson => ViewMode::ThirdPerson,
            ViewArg::FirstPerson => ViewMode::FirstPerson,
        }
    }
}

/// Floating lanterns over a night sky. Drag with the left mouse button to
/// look around, arrows/WASD to move, V to switch view, Esc to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of lanterns in the field
    #[arg(short, long, default_value_t = LANTERN_COUNT)]
    lanterns: usize,
    /// Seed for a repeatable run
    #[arg(short, long)]
    seed: Option<u64>,
    /// Starting view
    #[arg(long, value_enum, default_value_t = ViewArg::ThirdPerson)]
    view: ViewArg,
    /// Walking speed of the figure, units per tick
    #[arg(long, default_value_t = AVATAR_MOVE_SPEED)]
    speed: f32,
    /// Free-camera speed, units per tick
    #[arg(long, default_value_t = FREE_CAMERA_SPEED)]
    camera_speed: f32,
    /// Mouse sensitivity, degrees per pixel
    #[arg(long, default_value_t = MOUSE_SENSITIVITY)]
    sensitivity: f32,
}

impl Args {
    fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            lantern_count: self.lanterns,
            seed: self.seed,
            view_mode: self.view.into(),
            avatar_speed: self.speed,
            camera_speed: self.camera_speed,
            sensitivity: self.sensitivity,
            ..SceneConfig::default()
        }
    }
}

fn window_title(mode: ViewMode) -> String {
    format!("{TITLE} [{}]", mode.name())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let mut scene = Scene::new(&args.scene_config())?;
    log::info!(
        "[scene] lanterns={} view={} seed={:?}",
        scene.field.len(),
        scene.view_mode().name(),
        args.seed
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(window_title(scene.view_mode()))
        .with_inner_size(LogicalSize::new(800.0, 600.0))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window, scene.field.len() + 8))?;
    let mut input = WindowInput::default();
    let mut clock = TickClock::default();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            other => match input.handle_window_event(&other) {
                Some(Action::CycleView) => {
                    scene.set_view_mode(scene.view_mode().next());
                    gpu.window.set_title(&window_title(scene.view_mode()));
                }
                Some(Action::Quit) => elwt.exit(),
                None => {}
            },
        },
        Event::AboutToWait => {
            for _ in 0..clock.poll(Instant::now()) {
                scene.tick(&mut input.state);
            }
            match gpu.render(&scene) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu.resize(gpu.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit()
                }
                Err(e) => log::warn!("[gpu] frame skipped: {e}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
