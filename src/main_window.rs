use crate::{
    controller::Controller,
    dialog::DialogPrompt,
    egui_winit_wgpu_context::EguiWinitWgpuContext,
    event::{AppResponse, EventProxyWinit, UserEvent},
    fonts::font_definitions,
    i18n::LANGUAGE_LOADER,
    icons::{resource_dir, IconSet},
    preferences::{Preferences, Theme},
    ui::Ui,
    window::WindowExt,
    window_icon::window_icon,
};
use anyhow::Result;
use egui::Visuals;
use i18n_embed_fl::fl;
use winit::{
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::EventLoop,
    window::{Fullscreen, Window, WindowBuilder, WindowId},
};

const MIN_HEIGHT: f64 = 270.0;
const MIN_WIDTH: f64 = 480.0;

pub struct MainWindow {
    context: EguiWinitWgpuContext,
    controller: Controller,
    event_proxy: EventProxyWinit<UserEvent>,
    ui: Ui,
    window: Window,
}

impl MainWindow {
    pub fn new(event_loop: &EventLoop<UserEvent>, preferences: &Preferences) -> Result<Self> {
        let resource_dir = resource_dir(preferences.resource_dir.as_deref());
        log::debug!("Resource directory: {}", resource_dir.display());

        let window = WindowBuilder::new()
            .with_title(fl!(LANGUAGE_LOADER, "window-title"))
            .with_min_inner_size(LogicalSize::new(MIN_WIDTH, MIN_HEIGHT))
            .with_maximized(preferences.maximized)
            .with_window_icon(window_icon(&resource_dir))
            .build(event_loop)?;

        let palette = preferences.theme.palette();

        let context = EguiWinitWgpuContext::new(&window, event_loop, palette.background)?;
        context.set_fonts(font_definitions());
        context.set_visuals(match preferences.theme {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        });

        let icons = IconSet::load(context.context(), &resource_dir);

        let event_proxy = EventProxyWinit::from_proxy(event_loop.create_proxy());

        Ok(Self {
            context,
            controller: Controller::new(),
            event_proxy,
            ui: Ui::new(icons, palette),
            window,
        })
    }

    /// Asks for confirmation if the stopwatch is running.
    pub fn confirm_close(&self) -> bool {
        self.controller.confirm_close(&DialogPrompt)
    }

    pub fn handle_user_event(&mut self, event: UserEvent) -> AppResponse {
        let mut response = AppResponse::default();

        match event {
            UserEvent::RequestClose => {
                response.exit = self.confirm_close();
            }
            UserEvent::Reset => {
                response.request_redraw = self.controller.reset();
            }
            UserEvent::Save => {
                self.controller.save(&DialogPrompt);
            }
            UserEvent::ToggleFullscreen => {
                let fullscreen = match self.window.fullscreen() {
                    Some(_) => None,
                    None => Some(Fullscreen::Borderless(None)),
                };
                self.window.set_fullscreen(fullscreen);
            }
            UserEvent::TogglePlay => {
                self.controller.toggle_play();
                response.request_redraw = true;
            }
        }

        response
    }
}

impl WindowExt for MainWindow {
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.context.handle_window_event(event)
    }

    fn on_resized(&mut self, width: u32, height: u32) {
        self.context.on_resized(width, height);
    }

    fn on_scaled(&mut self, scale_factor: f32) {
        self.context.on_scaled(scale_factor);
    }

    fn render(&mut self) {
        let state = self.controller.state();

        let ui = &self.ui;
        let event_proxy = &self.event_proxy;

        self.context.render(&self.window, |ctx| {
            ui.show(ctx, &state, event_proxy);
        });
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    fn window_id(&self) -> WindowId {
        self.window.id()
    }
}
