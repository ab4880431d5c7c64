use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use web_sys as web;

use crate::core::constants::{CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR, WORLD_OFFSET};
use crate::core::tree::TreeClouds;

// WebGPU renderer: one pass, two instanced quad pipelines. Particle
// sprites billboard toward the camera and blend additively; photo panels
// carry a full world transform per instance and alpha-blend in list
// order after the sprites.

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.008,
    g: 0.024,
    b: 0.09,
    a: 1.0,
};

// Additive glow for the particle clouds
const ADDITIVE_BLENDING: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

// Shared by both pipelines; the panel entry points only read view_proj.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    // x = group yaw, y = group scale, z = alpha multiplier, w unused
    group: [f32; 4],
    offset: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SpriteInstance {
    pos: [f32; 3],
    size: f32,
    color: [f32; 4],
}

/// One photo panel, fully in world space.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelInstance {
    pub pos: [f32; 3],
    pub _pad: f32,
    pub rot: [f32; 4],
    pub scale: [f32; 2],
    // x = frame opacity boost (hover/focus), y = gold emphasis (focus)
    pub params: [f32; 2],
    pub tint: [f32; 4],
}

/// Tree group pose for this frame: composed yaw for the steady clouds,
/// extra spin and strobe for the ribbon.
#[derive(Clone, Copy, Debug)]
pub struct TreePose {
    pub yaw: f32,
    pub scale: f32,
    pub ribbon_yaw: f32,
    pub ribbon_glow: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    sprite_pipeline: wgpu::RenderPipeline,
    panel_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,

    steady_vb: wgpu::Buffer,
    steady_count: u32,
    ribbon_vb: wgpu::Buffer,
    ribbon_count: u32,
    panel_vb: wgpu::Buffer,
    panel_capacity: usize,

    steady_uniforms: wgpu::Buffer,
    ribbon_uniforms: wgpu::Buffer,
    panel_uniforms: wgpu::Buffer,
    bg_steady: wgpu::BindGroup,
    bg_ribbon: wgpu::BindGroup,
    bg_panels: wgpu::BindGroup,

    cam_eye: Vec3,
    cam_look: Vec3,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        clouds: &TreeClouds,
        panel_capacity: usize,
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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        // Shared unit quad (two triangles)
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let pack_sprites = |list: &[crate::core::tree::TreeParticle]| -> Vec<SpriteInstance> {
            list.iter()
                .map(|p| SpriteInstance {
                    pos: p.position.to_array(),
                    size: p.size,
                    color: p.color,
                })
                .collect()
        };
        let steady_data = pack_sprites(&clouds.steady);
        let steady_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("steady_vb"),
            contents: bytemuck::cast_slice(&steady_data),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ribbon_data = pack_sprites(&clouds.ribbon);
        let ribbon_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ribbon_vb"),
            contents: bytemuck::cast_slice(&ribbon_data),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let panel_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("panel_vb"),
            size: (std::mem::size_of::<PanelInstance>() * panel_capacity.max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let make_uniforms = |label: &str, size: u64| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let uniform_size = std::mem::size_of::<Uniforms>() as u64;
        let steady_uniforms = make_uniforms("steady_uniforms", uniform_size);
        let ribbon_uniforms = make_uniforms("ribbon_uniforms", uniform_size);
        let panel_uniforms = make_uniforms("panel_uniforms", uniform_size);

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let make_bg = |label: &str, buffer: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let bg_steady = make_bg("bg_steady", &steady_uniforms);
        let bg_ribbon = make_bg("bg_ribbon", &ribbon_uniforms);
        let bg_panels = make_bg("bg_panels", &panel_uniforms);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let quad_layout = wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        };
        let sprite_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
            ],
        };
        let panel_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PanelInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 32,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 40,
                    shader_location: 4,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 48,
                    shader_location: 5,
                },
            ],
        };

        let make_pipeline = |label: &str,
                             vs: &str,
                             fs: &str,
                             instance_layout: wgpu::VertexBufferLayout,
                             blend: wgpu::BlendState| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(vs),
                    buffers: &[quad_layout.clone(), instance_layout],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(fs),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(blend),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };
        let sprite_pipeline = make_pipeline(
            "sprite_pipeline",
            "vs_sprite",
            "fs_sprite",
            sprite_layout,
            ADDITIVE_BLENDING,
        );
        let panel_pipeline = make_pipeline(
            "panel_pipeline",
            "vs_panel",
            "fs_panel",
            panel_layout,
            wgpu::BlendState::ALPHA_BLENDING,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sprite_pipeline,
            panel_pipeline,
            quad_vb,
            steady_vb,
            steady_count: steady_data.len() as u32,
            ribbon_vb,
            ribbon_count: ribbon_data.len() as u32,
            panel_vb,
            panel_capacity: panel_capacity.max(1),
            steady_uniforms,
            ribbon_uniforms,
            panel_uniforms,
            bg_steady,
            bg_ribbon,
            bg_panels,
            cam_eye: Vec3::ZERO,
            cam_look: Vec3::ZERO,
            width,
            height,
        })
    }

    pub fn set_camera(&mut self, eye: Vec3, look: Vec3) {
        self.cam_eye = eye;
        self.cam_look = look;
    }

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

    pub fn view_proj(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOVY_RADIANS, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
        let view = Mat4::look_at_rh(self.cam_eye, self.cam_look, Vec3::Y);
        proj * view
    }

    pub fn render(
        &mut self,
        tree: TreePose,
        panels: &[PanelInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = self.view_proj().to_cols_array_2d();
        let forward = (self.cam_look - self.cam_eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        let uniforms_for = |yaw: f32, alpha_mul: f32| Uniforms {
            view_proj,
            cam_right: [right.x, right.y, right.z, 0.0],
            cam_up: [up.x, up.y, up.z, 0.0],
            group: [yaw, tree.scale, alpha_mul, 0.0],
            offset: [WORLD_OFFSET.x, WORLD_OFFSET.y, WORLD_OFFSET.z, 0.0],
        };
        self.queue.write_buffer(
            &self.steady_uniforms,
            0,
            bytemuck::bytes_of(&uniforms_for(tree.yaw, 1.0)),
        );
        // The ribbon spins inside the tree group; yaws about a shared axis
        // compose by addition.
        self.queue.write_buffer(
            &self.ribbon_uniforms,
            0,
            bytemuck::bytes_of(&uniforms_for(tree.yaw + tree.ribbon_yaw, tree.ribbon_glow)),
        );
        self.queue.write_buffer(
            &self.panel_uniforms,
            0,
            bytemuck::bytes_of(&uniforms_for(0.0, 1.0)),
        );
        let panel_count = panels.len().min(self.panel_capacity);
        if panel_count > 0 {
            self.queue.write_buffer(
                &self.panel_vb,
                0,
                bytemuck::cast_slice(&panels[..panel_count]),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.sprite_pipeline);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_bind_group(0, &self.bg_steady, &[]);
            rpass.set_vertex_buffer(1, self.steady_vb.slice(..));
            rpass.draw(0..6, 0..self.steady_count);
            rpass.set_bind_group(0, &self.bg_ribbon, &[]);
            rpass.set_vertex_buffer(1, self.ribbon_vb.slice(..));
            rpass.draw(0..6, 0..self.ribbon_count);

            if panel_count > 0 {
                rpass.set_pipeline(&self.panel_pipeline);
                rpass.set_bind_group(0, &self.bg_panels, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.panel_vb.slice(..));
                rpass.draw(0..6, 0..panel_count as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
