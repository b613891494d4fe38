//! Window, GL context and event loop.
//!
//! Every setup failure comes back as an [`AppError`] so `main` can log it and exit, except
//! an empty config list in the display picker, which glutin already turns into an error
//! before the picker is called and which panics here.

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use gl_wrapper::renderer::GlRenderer;

use quads::scene::Scene;

use crate::args::Args;
use crate::renderer::SceneRenderer;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    scene: Scene,
}

impl App {
    pub fn new(args: &Args, scene: Scene) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(args.width, args.height)))
            .with_title(&args.title);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                // glutin reports an empty config list as an error before the picker runs
                configs
                    .reduce(|acc, config| {
                        if config.num_samples() > acc.num_samples() {
                            config
                        } else {
                            acc
                        }
                    })
                    .expect("glutin handed the picker an empty config list")
            })
            .map_err(|e| AppError::Window(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(window.raw_window_handle()));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(s) => gl_display.get_proc_address(s.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        if !gl_wrapper::is_loaded() {
            return Err(AppError::Loader);
        }

        log::info!(
            "created {}x{} window with an OpenGL 3.3 core context",
            args.width,
            args.height
        );

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            scene,
        })
    }

    pub fn run(self) -> ! {
        let Self {
            event_loop,
            gl_context,
            gl_window,
            scene,
        } = self;

        let mut gl_renderer = GlRenderer::new();

        let size = gl_window.window.inner_size();
        gl_renderer.resize(size.width, size.height);

        let mut scene_renderer = match SceneRenderer::new(&scene, &gl_renderer) {
            Ok(r) => Some(r),
            Err(e) => {
                log::error!("Could not upload scene geometry: {e}");
                None
            }
        };

        log::info!("drawing {} quads", scene.quads.len());

        event_loop.run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::RedrawEventsCleared => {
                    gl_window.window.request_redraw();
                    if let Err(e) = gl_window.surface.swap_buffers(&gl_context) {
                        log::error!("Could not swap buffers: {e}");
                    }
                }
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        if let (Some(w), Some(h)) =
                            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                        {
                            gl_window.surface.resize(&gl_context, w, h);
                            gl_renderer.resize(size.width, size.height);
                        }
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                            && input.state == ElementState::Pressed
                        {
                            control_flow.set_exit();
                        }
                    }
                    WindowEvent::CloseRequested => control_flow.set_exit(),
                    _ => (),
                },
                Event::RedrawRequested(_) => match &scene_renderer {
                    Some(r) => r.draw(&mut gl_renderer),
                    None => {
                        let c = scene.clear_color;
                        gl_renderer.clear_color(c.r, c.g, c.b, c.a);
                    }
                },
                Event::LoopDestroyed => {
                    // context is still current here
                    if scene_renderer.take().is_some() {
                        log::debug!("released GL resources");
                    }
                }
                _ => (),
            }
        })
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::ZeroSize)?,
            NonZeroU32::new(height).ok_or(AppError::ZeroSize)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to create window: {0}")]
    Window(String),
    #[error("Failed to create window: display builder returned no window")]
    NoWindow,
    #[error("Failed to create window surface: window has zero size")]
    ZeroSize,
    #[error("Failed to create OpenGL context: {0}")]
    Context(#[from] glutin::error::Error),
    #[error("Failed to load OpenGL function pointers")]
    Loader,
}
