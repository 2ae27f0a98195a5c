// polling loop: winit drives the loop, glutin provides the GL context. Escape closes the window.

use std::error::Error;
use std::num::NonZeroU32;

use clap::Parser;
use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::raw_window_handle::HasWindowHandle;
use winit::window::{Window, WindowId};

use glow_triangle::config::{DemoConfig, CLEAR_COLOR};
use glow_triangle::drawer_triangle::{Drawer, TRIANGLE_VTX2XYZRGB};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let config = DemoConfig::parse();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App {
        config,
        state: None,
        error: None,
    };
    event_loop.run_app(&mut app)?;
    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Everything the event callbacks need, handed to the event loop by `&mut`.
struct App {
    config: DemoConfig,
    state: Option<GlState>,
    error: Option<Box<dyn Error>>,
}

// fields drop in declaration order: GL objects go before the window
struct GlState {
    drawer: Drawer,
    gl: glow::Context,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    window: Window,
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|accum, config| {
            if config.num_samples() > accum.num_samples() {
                config
            } else {
                accum
            }
        })
        .expect("no OpenGL config available")
}

impl GlState {
    fn new(event_loop: &ActiveEventLoop, config: &DemoConfig) -> Result<Self, Box<dyn Error>> {
        let window_attributes = Window::default_attributes()
            .with_title(config.title_or("Hello from winit and glutin"))
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, ConfigTemplateBuilder::new(), pick_config)?;
        let window = window.ok_or("display builder did not create a window")?;

        let gl_display = gl_config.display();
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(window.window_handle()?.as_raw()));
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };
        let surface_attributes = window.build_surface_attributes(Default::default())?;
        let gl_surface =
            unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };
        let gl_context = not_current.make_current(&gl_surface)?;
        let interval = if config.vsync() {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(err) = gl_surface.set_swap_interval(&gl_context, interval) {
            log::warn!("cannot set swap interval: {err}");
        }
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s))
        };

        let mut drawer = Drawer::new();
        drawer.load_program(&gl, &config.shader)?;
        drawer.set_vtx2xyzrgb(&gl, &TRIANGLE_VTX2XYZRGB)?;
        Ok(Self {
            drawer,
            gl,
            gl_context,
            gl_surface,
            window,
        })
    }

    fn resize(&self, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.gl_surface.resize(&self.gl_context, w, h);
        }
    }

    fn render(&self) -> Result<(), glutin::error::Error> {
        let size = self.window.inner_size();
        unsafe {
            self.gl.viewport(0, 0, size.width as i32, size.height as i32);
            let [r, g, b, a] = CLEAR_COLOR;
            self.gl.clear_color(r, g, b, a);
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
        self.drawer.paint(&self.gl);
        self.gl_surface.swap_buffers(&self.gl_context)
    }
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Box<dyn Error>) {
        log::error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match GlState::new(event_loop, &self.config) {
            Ok(state) => self.state = Some(state),
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        if let Err(err) = state.render() {
            self.fail(event_loop, err.into());
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(mut state) = self.state.take() {
            state.drawer.destroy(&state.gl);
        }
    }
}
