//! Forward renderer for the viewport's box scene.
//!
//! Draws every visible [`SceneObject`](crate::scene::SceneObject) as an
//! instanced, flat-shaded box using whichever camera the frame's
//! [`RenderView`] describes.

/// Per-box GPU instance data.
pub mod instance;
pub(crate) mod pipeline_util;

use wgpu::util::DeviceExt;

pub use self::instance::{box_instances, BoxInstance, ShadingUniform};
use crate::camera::CameraUniform;
use crate::engine::RenderView;
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::render_context::RenderContext;
use crate::options::DisplayOptions;
use crate::scene::Scene;

/// Vertices generated per box by the vertex shader.
const BOX_VERTICES: u32 = 36;

/// Draws the scene's boxes into the surface.
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    shading_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    instance_layout: wgpu::BindGroupLayout,
    instances: TypedBuffer<BoxInstance>,
    instance_bind_group: wgpu::BindGroup,
    uploaded_generation: Option<u64>,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    /// Build the pipeline and buffers for `context`'s surface format.
    #[must_use]
    pub fn new(context: &RenderContext, display: &DisplayOptions) -> Self {
        let device = &context.device;

        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[CameraUniform::new()]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let shading_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Shading Buffer"),
                contents: bytemuck::cast_slice(&[ShadingUniform::new(
                    display.ambient,
                )]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let frame_layout = Self::create_frame_layout(device);
        let frame_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Frame Bind Group"),
                layout: &frame_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: camera_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: shading_buffer.as_entire_binding(),
                    },
                ],
            });

        let instance_layout = Self::create_instance_layout(device);
        let instances = TypedBuffer::with_capacity(
            device,
            "Box Instance Buffer",
            16,
            wgpu::BufferUsages::STORAGE,
        );
        let instance_bind_group =
            Self::create_instance_bind_group(device, &instance_layout, &instances);

        let pipeline = Self::create_pipeline(
            context,
            &frame_layout,
            &instance_layout,
        );

        Self {
            pipeline,
            camera_buffer,
            shading_buffer,
            frame_bind_group,
            instance_layout,
            instances,
            instance_bind_group,
            uploaded_generation: None,
            clear_color: pipeline_util::clear_color(display.background_color),
        }
    }

    fn create_frame_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        let uniform = |binding, visibility| wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Layout"),
            entries: &[
                uniform(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ),
                uniform(1, wgpu::ShaderStages::FRAGMENT),
            ],
        })
    }

    fn create_instance_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Box Instance Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }

    fn create_instance_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &TypedBuffer<BoxInstance>,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Box Instance Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.buffer().as_entire_binding(),
            }],
        })
    }

    fn create_pipeline(
        context: &RenderContext,
        frame_layout: &wgpu::BindGroupLayout,
        instance_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let device = &context.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/scene.wgsl"
        ));

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[frame_layout, instance_layout],
                push_constant_ranges: &[],
            });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &pipeline_util::surface_fragment_targets(
                    context.format(),
                ),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(pipeline_util::depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    /// Upload the camera for this frame and, if the scene changed since the
    /// last upload, its instances.
    pub fn prepare(
        &mut self,
        context: &RenderContext,
        view: &RenderView,
        scene: &Scene,
    ) {
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[view.uniform]),
        );

        if self.uploaded_generation == Some(scene.generation()) {
            return;
        }
        let data = box_instances(scene);
        if self.instances.write(&context.device, &context.queue, &data) {
            self.instance_bind_group = Self::create_instance_bind_group(
                &context.device,
                &self.instance_layout,
                &self.instances,
            );
        }
        self.uploaded_generation = Some(scene.generation());
        log::debug!("uploaded {} box instances", data.len());
    }

    /// Change the lighting and background.
    pub fn set_display(&mut self, queue: &wgpu::Queue, display: &DisplayOptions) {
        queue.write_buffer(
            &self.shading_buffer,
            0,
            bytemuck::cast_slice(&[ShadingUniform::new(display.ambient)]),
        );
        self.clear_color = pipeline_util::clear_color(display.background_color);
    }

    /// Record the scene pass into `encoder`, targeting `color_view`.
    pub fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        });

        if self.instances.is_empty() {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.frame_bind_group, &[]);
        pass.set_bind_group(1, &self.instance_bind_group, &[]);
        pass.draw(0..BOX_VERTICES, 0..self.instances.count() as u32);
    }

    /// Prepare, draw and present one frame to the context's surface.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the next swapchain texture cannot
    /// be acquired.
    pub fn render(
        &mut self,
        context: &RenderContext,
        view: &RenderView,
        scene: &Scene,
    ) -> Result<(), wgpu::SurfaceError> {
        self.prepare(context, view, scene);

        let frame = context.get_next_frame()?;
        let color_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = context.create_encoder();
        self.encode(&mut encoder, &color_view, context.depth_view());
        context.submit(encoder);
        frame.present();
        Ok(())
    }
}
