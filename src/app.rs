use crate::app_state::State;
use crate::config::AppConfig;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

#[cfg(target_arch = "wasm32")]
use winit::event_loop::EventLoopProxy;

struct App {
    config: AppConfig,
    state: Option<State>,
    // Browsers cannot block on adapter requests, so the state arrives as a user event.
    #[cfg(target_arch = "wasm32")]
    proxy: Option<EventLoopProxy<State>>,
}

impl ApplicationHandler<State> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes().with_title(&self.config.title);
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                attach_canvas(&window);

                if let Some(proxy) = self.proxy.take() {
                    let config = self.config.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match State::new(window, config).await {
                            Ok(state) => {
                                if proxy.send_event(state).is_err() {
                                    log::error!("Event loop closed before the renderer was ready");
                                }
                            }
                            Err(e) => log::error!("Failed to initialise renderer: {:#}", e),
                        }
                    });
                }
            } else {
                match pollster::block_on(State::new(window, self.config.clone())) {
                    Ok(state) => self.state = Some(state),
                    Err(e) => {
                        log::error!("Failed to initialise renderer: {:#}", e);
                        event_loop.exit();
                    }
                }
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, mut state: State) {
        let size = state.window().inner_size();
        state.resize(size);
        state.window().request_redraw();
        self.state = Some(state);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };
        if window_id != state.window().id() || state.input(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                log::info!("WindowEvent::Resized: {}x{}", physical_size.width, physical_size.height);
                state.resize(physical_size);
            }
            WindowEvent::RedrawRequested => {
                state.update();
                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.resize(state.size)
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Surface error: {:?}", e),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window().request_redraw();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn attach_canvas(window: &Window) {
    use winit::platform::web::WindowExtWebSys;

    let Some(canvas) = window.canvas() else {
        log::error!("Window has no canvas");
        return;
    };

    let attached = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| {
            let dst = doc.get_element_by_id("glproj")?;
            dst.append_child(&canvas).ok()?;
            Some(())
        });
    if attached.is_none() {
        log::error!("There is no element with id: glproj on this page.");
    }

    let style = canvas.style();
    for (property, value) in [("width", "100vw"), ("height", "100vh"), ("display", "block")] {
        if style.set_property(property, value).is_err() {
            log::warn!("Couldn't set canvas {} to {}", property, value);
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Info)?;
        } else {
            env_logger::init();
        }
    }

    let config = AppConfig::load()?;
    let event_loop = EventLoop::<State>::with_user_event().build()?;

    let mut app = App {
        config,
        state: None,
        #[cfg(target_arch = "wasm32")]
        proxy: Some(event_loop.create_proxy()),
    };

    event_loop.run_app(&mut app)?;
    Ok(())
}
