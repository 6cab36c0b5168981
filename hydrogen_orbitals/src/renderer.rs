//! Figure window
//!
//! Shows a composed [`Figure`] with egui on a wgpu surface and blocks until
//! the window is closed. The event loop is borrowed from the caller and
//! re-run for every figure.

use crate::equations_ui::{draw_equations_sidebar, ORBITAL_EQUATIONS, ORBITAL_VARIABLES};
use crate::figure::{Figure, FigureStyle};
use crate::palette::{Palette, PaletteError};
use crate::quantum::OrbitalRequest;
use crate::sampler::Sampler;
use common::{GraphicsContext, GraphicsError};
use egui::{
    Align2, Color32, ColorImage, FontId, Pos2, Rect, Stroke, TextureHandle, TextureOptions, Vec2,
};
use thiserror::Error;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    platform::run_on_demand::EventLoopExtRunOnDemand,
};

/// Failures of a single visualization
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Graphics(#[from] GraphicsError),

    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("surface failed: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

/// Sample, compose and display one orbital.
///
/// The palette is resolved first, so an unknown name fails before any
/// computation or window.
pub fn visualize(
    event_loop: &mut EventLoop<()>,
    sampler: &Sampler,
    request: OrbitalRequest,
    style: &FigureStyle,
) -> Result<(), RenderError> {
    let palette = Palette::by_name(&style.palette)?;
    let density = sampler.density(request.state, request.scale);
    let figure = Figure::new(&density, request.state, &palette);

    log::info!(
        "Displaying {} {} (a0 x {}) with palette {}",
        figure.orbital_name,
        figure.annotation,
        request.scale,
        palette.name()
    );

    show(event_loop, &figure, style)
}

/// Display `figure` until its window is closed
pub fn show(
    event_loop: &mut EventLoop<()>,
    figure: &Figure,
    style: &FigureStyle,
) -> Result<(), RenderError> {
    let mut window = FigureWindow::new(event_loop, figure, style)?;
    let mut failure: Option<RenderError> = None;

    window.ctx.window.request_redraw();

    event_loop.run_on_demand(|event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        let Event::WindowEvent { event, window_id } = event else {
            return;
        };
        if window_id != window.ctx.window.id() {
            return;
        }

        let response = window.egui.state.on_window_event(&window.ctx.window, &event);
        if response.repaint {
            window.ctx.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } if !response.consumed => elwt.exit(),
            WindowEvent::Resized(size) => {
                window.ctx.resize(size);
                window.ctx.window.request_redraw();
            }
            WindowEvent::RedrawRequested => match window.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    window.ctx.resize(window.ctx.size)
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    failure = Some(wgpu::SurfaceError::OutOfMemory.into());
                    elwt.exit();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            },
            _ => {}
        }
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct FigureWindow<'a> {
    ctx: GraphicsContext,
    egui: EguiState,
    image: TextureHandle,
    colorbar: TextureHandle,
    figure: &'a Figure,
    style: &'a FigureStyle,
}

impl<'a> FigureWindow<'a> {
    fn new(
        target: &EventLoopWindowTarget<()>,
        figure: &'a Figure,
        style: &'a FigureStyle,
    ) -> Result<Self, RenderError> {
        let title = format!("{} - {}", style.title, figure.orbital_name);
        let ctx = GraphicsContext::new_blocking(
            target,
            &title,
            style.window_width,
            style.window_height,
        )?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        let image = ColorImage::from_rgba_unmultiplied(
            [figure.image.width, figure.image.height],
            &figure.image.as_bytes(),
        );
        let image = egui_ctx.load_texture("orbital-density", image, TextureOptions::LINEAR);

        // top row is the high end
        let bar: Vec<u8> = figure
            .colorbar
            .iter()
            .rev()
            .flat_map(|&[r, g, b]| [r, g, b, 255])
            .collect();
        let colorbar = ColorImage::from_rgba_unmultiplied([1, figure.colorbar.len()], &bar);
        let colorbar = egui_ctx.load_texture("colorbar", colorbar, TextureOptions::LINEAR);

        Ok(Self {
            ctx,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
            image,
            colorbar,
            figure,
            style,
        })
    }

    fn build_ui(&self, ctx: &egui::Context) {
        if self.style.show_equations {
            draw_equations_sidebar(ctx, "Hydrogen Orbitals", ORBITAL_EQUATIONS, ORBITAL_VARIABLES);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(rgb(self.figure.background)))
            .show(ctx, |ui| self.draw_figure(ui));
    }

    fn draw_figure(&self, ui: &mut egui::Ui) {
        let style = self.style;
        let text = rgb(style.text_color);
        let tick = rgb(style.tick_color);
        let area = ui.max_rect();
        let painter = ui.painter();

        let margin = 24.0;
        let title_height = style.title_size * 2.0;
        let bar_width = 24.0;
        let label_room = style.label_size * 7.0;

        let side = (area.width() - 3.0 * margin - bar_width - label_room)
            .min(area.height() - 2.0 * margin - title_height)
            .max(16.0);
        let image_rect = Rect::from_min_size(
            Pos2::new(area.left() + margin, area.top() + margin + title_height),
            Vec2::splat(side),
        );
        let bar_rect = Rect::from_min_size(
            Pos2::new(image_rect.right() + margin, image_rect.top()),
            Vec2::new(bar_width, side),
        );
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));

        painter.text(
            Pos2::new(image_rect.left(), area.top() + margin),
            Align2::LEFT_TOP,
            &style.title,
            FontId::proportional(style.title_size),
            text,
        );

        painter.image(self.image.id(), image_rect, uv, Color32::WHITE);
        painter.rect_stroke(image_rect, 0.0, Stroke::new(style.frame_width, tick));
        painter.text(
            image_rect.left_bottom() + Vec2::new(side * 0.045, -side * 0.05),
            Align2::LEFT_BOTTOM,
            &self.figure.annotation,
            FontId::proportional(style.annotation_size),
            text,
        );

        painter.image(self.colorbar.id(), bar_rect, uv, Color32::WHITE);
        painter.text(
            bar_rect.right_top() + Vec2::new(8.0, 0.0),
            Align2::LEFT_TOP,
            &style.higher_label,
            FontId::proportional(style.label_size),
            text,
        );
        painter.text(
            bar_rect.right_bottom() + Vec2::new(8.0, 0.0),
            Align2::LEFT_BOTTOM,
            &style.lower_label,
            FontId::proportional(style.label_size),
            text,
        );
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| self.build_ui(ctx));

        let repaint_now = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Figure Encoder"),
            });

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        let [r, g, b] = self.figure.background;
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Figure Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: f64::from(r) / 255.0,
                            g: f64::from(g) / 255.0,
                            b: f64::from(b) / 255.0,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if repaint_now {
            self.ctx.window.request_redraw();
        }

        Ok(())
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}
