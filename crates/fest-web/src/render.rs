mod helpers;
pub mod surface;
pub mod uniforms;

use crate::render::helpers::{
    create_depth_texture, instance_layout, make_pipeline, point_layout, uniform_bind_group,
    vertex_layout, GpuMesh,
};
use crate::render::surface::{recovery_for, SurfaceRecovery};
use crate::render::uniforms::{
    pack_instance, pack_points, pack_scene, plan_instances, Batch, InstanceRaw, PointsUniforms,
    SceneUniforms,
};
use fest_core::geometry::{unit_cube, unit_open_cone, unit_plane, unit_sphere};
use fest_core::scene::{Atmosphere, Material, MeshKind, SceneLayout};
use fest_core::{FrameView, SceneRenderer};
use glam::Vec3;
use std::collections::HashMap;
use web_sys as web;
use wgpu::util::DeviceExt;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

const SPHERE_SEGMENTS: (u32, u32) = (24, 16);
const CONE_SEGMENTS: u32 = 32;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    width: u32,
    height: u32,
    #[allow(dead_code)]
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,
    atmosphere: Atmosphere,

    meshes: HashMap<MeshKind, GpuMesh>,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    batches: Vec<Batch>,
    avatar_slot: usize,
    avatar_material: Material,

    points_pipeline: wgpu::RenderPipeline,
    points_uniform_buffer: wgpu::Buffer,
    points_bind_group: wgpu::BindGroup,
    points_buffer: wgpu::Buffer,
    point_count: u32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        layout: &SceneLayout,
        particle_positions: &[Vec3],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = create_depth_texture(&device, width, height);

        let mut meshes = HashMap::new();
        meshes.insert(
            MeshKind::Cube,
            GpuMesh::upload(&device, "cube", &unit_cube()),
        );
        meshes.insert(
            MeshKind::Plane,
            GpuMesh::upload(&device, "plane", &unit_plane()),
        );
        meshes.insert(
            MeshKind::Sphere,
            GpuMesh::upload(
                &device,
                "sphere",
                &unit_sphere(SPHERE_SEGMENTS.0, SPHERE_SEGMENTS.1),
            ),
        );
        meshes.insert(
            MeshKind::Cone,
            GpuMesh::upload(&device, "cone", &unit_open_cone(CONE_SEGMENTS)),
        );

        // Lit meshes
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let (scene_bgl, scene_bind_group) = uniform_bind_group(
            &device,
            "scene_bg",
            &scene_uniform_buffer,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_layout"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let mesh_buffers = [vertex_layout(), instance_layout()];
        let opaque_pipeline = make_pipeline(
            &device,
            "opaque_pipeline",
            &scene_layout,
            &scene_shader,
            &mesh_buffers,
            format,
            false,
            true,
        );
        let translucent_pipeline = make_pipeline(
            &device,
            "translucent_pipeline",
            &scene_layout,
            &scene_shader,
            &mesh_buffers,
            format,
            true,
            false,
        );

        let plan = plan_instances(layout);
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("instances"),
            contents: bytemuck::cast_slice(&plan.instances),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        // Particles
        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });
        let points_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("points_uniforms"),
            size: std::mem::size_of::<PointsUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let (points_bgl, points_bind_group) = uniform_bind_group(
            &device,
            "points_bg",
            &points_uniform_buffer,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let points_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_layout"),
            bind_group_layouts: &[&points_bgl],
            push_constant_ranges: &[],
        });
        let points_pipeline = make_pipeline(
            &device,
            "points_pipeline",
            &points_layout,
            &points_shader,
            &[point_layout()],
            format,
            false,
            false,
        );
        let centers: Vec<[f32; 3]> = particle_positions.iter().map(|p| p.to_array()).collect();
        let points_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("points"),
            contents: bytemuck::cast_slice(&centers),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let fog = layout.atmosphere.fog_color;
        log::info!(
            "[render] ready: {}x{} {:?}, {} batches, {} particles",
            width,
            height,
            format,
            plan.batches.len(),
            centers.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            width,
            height,
            depth_tex,
            depth_view,
            clear_color: wgpu::Color {
                r: fog.x as f64,
                g: fog.y as f64,
                b: fog.z as f64,
                a: 1.0,
            },
            atmosphere: layout.atmosphere,
            meshes,
            scene_uniform_buffer,
            scene_bind_group,
            opaque_pipeline,
            translucent_pipeline,
            instance_buffer,
            batches: plan.batches,
            avatar_slot: plan.avatar_slot,
            avatar_material: layout.avatar_material,
            points_pipeline,
            points_uniform_buffer,
            points_bind_group,
            points_buffer,
            point_count: centers.len() as u32,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        let (tex, view) = create_depth_texture(&self.device, self.width, self.height);
        self.depth_tex = tex;
        self.depth_view = view;
    }

    fn draw_batches(&self, rpass: &mut wgpu::RenderPass<'_>, translucent: bool) {
        for batch in self.batches.iter().filter(|b| b.translucent == translucent) {
            let Some(mesh) = self.meshes.get(&batch.kind) else {
                continue;
            };
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(
                0..mesh.index_count,
                0,
                batch.first..batch.first + batch.count,
            );
        }
    }

    fn encode_and_present(&mut self, view: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        let scene = pack_scene(view.camera, &self.atmosphere, view.lights);
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&scene));
        let points = pack_points(view.camera, &self.atmosphere, view.particles);
        self.queue
            .write_buffer(&self.points_uniform_buffer, 0, bytemuck::bytes_of(&points));
        let avatar = pack_instance(
            SceneLayout::avatar_transform(view.avatar),
            &self.avatar_material,
        );
        self.queue.write_buffer(
            &self.instance_buffer,
            (self.avatar_slot * std::mem::size_of::<InstanceRaw>()) as u64,
            bytemuck::bytes_of(&avatar),
        );

        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            rpass.set_pipeline(&self.opaque_pipeline);
            self.draw_batches(&mut rpass, false);

            rpass.set_pipeline(&self.points_pipeline);
            rpass.set_bind_group(0, &self.points_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.points_buffer.slice(..));
            rpass.draw(0..6, 0..self.point_count);

            // Translucent last, over the depth of everything opaque.
            rpass.set_pipeline(&self.translucent_pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            self.draw_batches(&mut rpass, true);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl SceneRenderer for GpuState {
    type Error = wgpu::SurfaceError;

    fn render(&mut self, view: &FrameView<'_>) -> Result<(), Self::Error> {
        let Err(e) = self.encode_and_present(view) else {
            return Ok(());
        };
        match recovery_for(&e) {
            SurfaceRecovery::Reconfigure => {
                log::warn!("[render] surface {:?}, reconfiguring", e);
                self.reconfigure();
                Ok(())
            }
            SurfaceRecovery::Skip => {
                log::debug!("[render] surface {:?}, frame skipped", e);
                Ok(())
            }
            SurfaceRecovery::Fail => Err(e),
        }
    }
}
