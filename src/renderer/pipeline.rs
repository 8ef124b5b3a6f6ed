//! WebGPU render pipeline setup

use thiserror::Error;
use wgpu::util::DeviceExt;

use super::vertex::{Vertex, colors};
use crate::platform::Viewport;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    /// Surface size in pixels
    pub size: (u32, u32),
    /// Where the logical screen sits inside the surface
    pub viewport: Viewport,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("hive-flight-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        // Palette is authored in sRGB, so write it to a non-sRGB target as-is
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .ok_or(RenderError::NoSurfaceFormat)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::info!("Render pipeline ready ({surface_format:?}, {width}x{height})");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            size: (width, height),
            viewport: Viewport::fit(width as f32, height as f32),
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.viewport = Viewport::fit(new_width as f32, new_height as f32);
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload a frame of logical-space vertices and draw it letterboxed
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), RenderError> {
        let (w, h) = self.size;
        let ndc: Vec<Vertex> = vertices
            .iter()
            .map(|v| {
                let [x, y] = logical_to_ndc(&self.viewport, w as f32, h as f32, v.position);
                Vertex::new(x, y, v.color)
            })
            .collect();

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        let vertex_buffer = (!ndc.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("vertex_buffer"),
                    contents: bytemuck::cast_slice(&ndc),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        {
            let [r, g, b, a] = colors::LETTERBOX.map(f64::from);
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(buffer) = &vertex_buffer {
                let (x, y, sw, sh) = scissor(&self.viewport, w, h);
                render_pass.set_scissor_rect(x, y, sw, sh);
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..ndc.len() as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Logical (y down) to normalized device coordinates (y up)
pub fn logical_to_ndc(viewport: &Viewport, width: f32, height: f32, p: [f32; 2]) -> [f32; 2] {
    let px = viewport.offset.x + p[0] * viewport.scale;
    let py = viewport.offset.y + p[1] * viewport.scale;
    [px / width * 2.0 - 1.0, 1.0 - py / height * 2.0]
}

/// Letterboxed area in whole pixels, clamped to the surface
fn scissor(viewport: &Viewport, width: u32, height: u32) -> (u32, u32, u32, u32) {
    let size = viewport.size();
    let x = (viewport.offset.x.max(0.0) as u32).min(width);
    let y = (viewport.offset.y.max(0.0) as u32).min(height);
    let w = (size.x.round() as u32).min(width - x);
    let h = (size.y.round() as u32).min(height - y);
    (x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners() {
        let vp = Viewport::fit(800.0, 600.0);
        assert_eq!(logical_to_ndc(&vp, 800.0, 600.0, [0.0, 0.0]), [-1.0, 1.0]);
        assert_eq!(logical_to_ndc(&vp, 800.0, 600.0, [800.0, 600.0]), [1.0, -1.0]);
    }

    #[test]
    fn test_ndc_pillarbox() {
        // 1600x600 window: logical screen occupies the middle half
        let vp = Viewport::fit(1600.0, 600.0);
        assert_eq!(logical_to_ndc(&vp, 1600.0, 600.0, [0.0, 300.0]), [-0.5, 0.0]);
        assert_eq!(logical_to_ndc(&vp, 1600.0, 600.0, [800.0, 300.0]), [0.5, 0.0]);
    }

    #[test]
    fn test_scissor_matches_letterbox() {
        let vp = Viewport::fit(400.0, 900.0);
        assert_eq!(scissor(&vp, 400, 900), (0, 300, 400, 300));
    }
}
