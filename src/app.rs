use crate::{
    event::UserEvent, main_window::MainWindow, preferences::Preferences, window::WindowExt,
};
use anyhow::Result;
use std::time::{Duration, Instant};
use winit::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopBuilder},
};

pub struct App {
    event_loop: EventLoop<UserEvent>,
    main_window: MainWindow,
    tick_interval: Duration,
}

impl App {
    pub fn new(preferences: &Preferences) -> Result<Self> {
        let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

        let main_window = MainWindow::new(&event_loop, preferences)?;

        Ok(Self {
            event_loop,
            main_window,
            tick_interval: preferences.tick_interval,
        })
    }

    pub fn run(self) {
        let Self {
            event_loop,
            mut main_window,
            tick_interval,
        } = self;

        event_loop.run(move |event, _, control_flow| {
            match event {
                Event::NewEvents(StartCause::Init)
                | Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                    main_window.request_redraw();
                    control_flow.set_wait_until(Instant::now() + tick_interval);
                }
                Event::RedrawRequested(window_id) if window_id == main_window.window_id() => {
                    main_window.render();
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == main_window.window_id() => {
                    if main_window.handle_window_event(event) {
                        main_window.request_redraw();
                    }

                    match event {
                        WindowEvent::CloseRequested => {
                            if main_window.confirm_close() {
                                log::info!("Closing");
                                *control_flow = ControlFlow::Exit;
                            }
                        }
                        WindowEvent::Resized(physical_size) => {
                            main_window.on_resized(physical_size.width, physical_size.height);
                            main_window.request_redraw();
                        }
                        WindowEvent::ScaleFactorChanged {
                            scale_factor,
                            new_inner_size,
                        } => {
                            main_window.on_scaled(*scale_factor as f32);
                            main_window.on_resized(new_inner_size.width, new_inner_size.height);
                        }
                        _ => {}
                    }
                }
                Event::UserEvent(event) => {
                    log::debug!("User event: {:?}", event);

                    let response = main_window.handle_user_event(event);

                    if response.exit {
                        log::info!("Closing");
                        *control_flow = ControlFlow::Exit;
                    } else if response.request_redraw {
                        main_window.request_redraw();
                    }
                }
                _ => {}
            }
        });
    }
}
