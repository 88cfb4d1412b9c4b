use crate::app_state::State;
use crate::math::Vec3;

use winit::event::*;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Eye-space distance moved per key press.
const NUDGE_STEP: f64 = 0.1;

impl State {
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.config.width = new_size.width;
            self.gpu.config.height = new_size.height;
            self.gpu
                .surface
                .configure(&self.gpu.device, &self.gpu.config);

            self.camera.resize(new_size.width, new_size.height);
            self.uniforms_dirty = true;

            log::debug!(
                "Resized to {}x{}, aspect {}",
                new_size.width,
                new_size.height,
                self.camera.projection.aspect
            );
        }
    }

    /// Returns `true` when the event was consumed.
    pub fn input(&mut self, event: &WindowEvent) -> bool {
        let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    state: ElementState::Pressed,
                    physical_key: PhysicalKey::Code(code),
                    ..
                },
            ..
        } = event
        else {
            return false;
        };

        if *code == KeyCode::Home {
            self.camera.reset();
            self.uniforms_dirty = true;
            return true;
        }

        match nudge_for_key(*code, NUDGE_STEP) {
            Some(offset) => {
                self.camera.nudge(offset);
                self.uniforms_dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn update(&mut self) {
        if !self.uniforms_dirty {
            return;
        }
        let uniforms = self.camera.uniforms();
        self.gpu.queue.write_buffer(
            &self.scene.uniform_buffer,
            0,
            bytemuck::cast_slice(&[uniforms]),
        );
        self.uniforms_dirty = false;
    }
}

fn nudge_for_key(code: KeyCode, step: f64) -> Option<Vec3> {
    let offset = match code {
        KeyCode::ArrowLeft => Vec3::new(-step, 0.0, 0.0),
        KeyCode::ArrowRight => Vec3::new(step, 0.0, 0.0),
        KeyCode::ArrowUp => Vec3::new(0.0, step, 0.0),
        KeyCode::ArrowDown => Vec3::new(0.0, -step, 0.0),
        KeyCode::PageUp => Vec3::new(0.0, 0.0, -step),
        KeyCode::PageDown => Vec3::new(0.0, 0.0, step),
        _ => return None,
    };
    Some(offset)
}
