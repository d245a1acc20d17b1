use crate::core::{self, cube, ResourceLedger};
use wgpu::util::DeviceExt;
use web_sys as web;

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LineUniforms {
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
}

/// One cube layer: geometry (vertex buffer) plus material (uniform buffer
/// carrying the layer color, alpha-blended).
struct LineLayer {
    vertex_buf: wgpu::Buffer,
    vertex_count: u32,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl LineLayer {
    fn new(
        device: &wgpu::Device,
        bgl: &wgpu::BindGroupLayout,
        label: &str,
        vertices: &[[f32; 3]],
        ledger: &mut ResourceLedger,
    ) -> LineLayer {
        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        ledger.acquire_geometry();
        let uniform_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<LineUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        ledger.acquire_material();
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });
        LineLayer {
            vertex_buf,
            vertex_count: vertices.len() as u32,
            uniform_buf,
            bind_group,
        }
    }

    fn dispose(&self, ledger: &mut ResourceLedger) {
        self.vertex_buf.destroy();
        ledger.release_geometry();
        self.uniform_buf.destroy();
        ledger.release_material();
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    outer: LineLayer,
    inner: LineLayer,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        ledger: &mut ResourceLedger,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lines_shader"),
            source: wgpu::ShaderSource::Wgsl(core::LINES_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("lines_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lines_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lines_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_lines"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: 12,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    }],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_lines"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let outer = LineLayer::new(
            &device,
            &bgl,
            "outer_cube",
            &cube::wireframe_vertices(cube::OUTER_EDGE),
            ledger,
        );
        let inner = LineLayer::new(
            &device,
            &bgl,
            "inner_edges",
            &cube::edge_vertices(cube::INNER_EDGE),
            ledger,
        );

        Ok(GpuState {
            surface,
            device,
            queue,
            config,
            pipeline,
            outer,
            inner,
            width,
            height,
        })
    }

    /// Reconfigure the surface for new pixel dimensions. A no-op for zero or
    /// unchanged dimensions, so repeated identical resizes cost nothing.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Redraw both layers for elapsed time `t`. The inner overlay shares the
    /// outer cube's model matrix and is drawn second, in fixed order.
    pub fn render(&mut self, t: f32) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.config.width as f32 / self.config.height.max(1) as f32;
        let uniforms = cube::layer_uniforms(t, aspect);
        for (layer, u) in [&self.outer, &self.inner].into_iter().zip(uniforms) {
            self.queue.write_buffer(
                &layer.uniform_buf,
                0,
                bytemuck::bytes_of(&LineUniforms {
                    mvp: u.mvp.to_cols_array_2d(),
                    color: u.color,
                }),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cube_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // transparent clear so the page background shows through
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.outer.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.outer.vertex_buf.slice(..));
            rpass.draw(0..self.outer.vertex_count, 0..1);
            rpass.set_bind_group(0, &self.inner.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.inner.vertex_buf.slice(..));
            rpass.draw(0..self.inner.vertex_count, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Release both geometry/material pairs. The surface itself goes away
    /// with the canvas when the controller detaches it.
    pub fn dispose(self, ledger: &mut ResourceLedger) {
        self.outer.dispose(ledger);
        self.inner.dispose(ledger);
    }
}
