#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)] // it's an example

use clap::Parser;
use eframe::{egui, egui_glow, glow};

use egui::mutex::Mutex;
use glow_triangle::config::{DemoConfig, CLEAR_COLOR};
use glow_triangle::drawer_triangle::{Drawer, TRIANGLE_VTX2XYZRGB};
use std::sync::Arc;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let config = DemoConfig::parse();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32]),
        vsync: config.vsync(),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };
    let title = config.title_or("Hello from eframe and glow").to_owned();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| create_app(cc, &config)),
    )
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
    config: &DemoConfig,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Box::new(MyApp::new(cc, config)?))
}

struct MyApp {
    /// Behind an `Arc<Mutex<…>>` so we can pass it to [`egui::PaintCallback`] and paint later.
    drawer: Arc<Mutex<Drawer>>,
}

impl MyApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        config: &DemoConfig,
    ) -> Result<Self, glow_triangle::drawer_triangle::DrawerError> {
        let gl = cc
            .gl
            .as_ref()
            .expect("You need to run eframe with the glow backend");
        let mut drawer = Drawer::new();
        drawer.load_program(gl, &config.shader)?;
        drawer.set_vtx2xyzrgb(gl, &TRIANGLE_VTX2XYZRGB)?;
        Ok(Self {
            drawer: Arc::new(Mutex::new(drawer)),
        })
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                self.custom_painting(ui);
            });
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        CLEAR_COLOR
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.drawer.lock().destroy(gl);
        }
    }
}

impl MyApp {
    fn custom_painting(&mut self, ui: &mut egui::Ui) {
        let (rect, _response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        // Clone locals so we can move them into the paint callback:
        let drawer = self.drawer.clone();
        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |_info, painter| {
                drawer.lock().paint(painter.gl());
            })),
        };
        ui.painter().add(callback);
    }
}
