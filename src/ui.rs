use crate::{
    controller::ControlState,
    event::{EventProxy, UserEvent},
    i18n::LANGUAGE_LOADER,
    icons::{IconKind, IconSet},
    preferences::Palette,
    shortcut::Shortcut,
};
use egui::{
    load::SizedTexture, Button, CentralPanel, Context, Frame, Image, Response, RichText, Rounding,
    Stroke, Vec2, Visuals,
};
use i18n_embed_fl::fl;

const BUTTON_GAP: f32 = 24.0;
const BUTTON_SIZE: f32 = 68.0;
const CLOCK_FONT_SIZE: f32 = 120.0;
const MIN_CLOCK_FONT_SIZE: f32 = 32.0;
const ROW_SPACING: f32 = 36.0;

pub struct Ui {
    icons: IconSet,
    palette: Palette,
    shortcut: Shortcut,
}

impl Ui {
    pub fn new(icons: IconSet, palette: Palette) -> Self {
        Self {
            icons,
            palette,
            shortcut: Shortcut::new(),
        }
    }

    pub fn show(
        &self,
        ctx: &Context,
        state: &ControlState,
        event_proxy: &impl EventProxy<UserEvent>,
    ) {
        for event in ctx.input_mut(|input| self.shortcut.consume(input)) {
            event_proxy.send_event(event);
        }

        CentralPanel::default()
            .frame(Frame::none().fill(self.palette.background))
            .show(ctx, |ui| {
                // "00:00:00.00" is eleven monospace glyphs, roughly 0.6em wide each.
                let clock_size =
                    (ui.available_width() / 7.0).clamp(MIN_CLOCK_FONT_SIZE, CLOCK_FONT_SIZE);
                let content_height = clock_size * 1.3 + ROW_SPACING + BUTTON_SIZE;

                ui.vertical_centered(|ui| {
                    ui.add_space(((ui.available_height() - content_height) / 2.0).max(0.0));

                    ui.label(
                        RichText::new(&state.elapsed_text)
                            .monospace()
                            .strong()
                            .size(clock_size)
                            .color(self.palette.foreground),
                    );

                    ui.add_space(ROW_SPACING);

                    self.buttons(ui, state, event_proxy);
                });
            });
    }

    fn buttons(
        &self,
        ui: &mut egui::Ui,
        state: &ControlState,
        event_proxy: &impl EventProxy<UserEvent>,
    ) {
        let row_width = BUTTON_SIZE * 3.0 + BUTTON_GAP * 2.0;

        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            ui.spacing_mut().item_spacing.x = BUTTON_GAP;
            self.style_buttons(ui.visuals_mut());

            let (play_icon, play_hint) = if state.running {
                (IconKind::Pause, fl!(LANGUAGE_LOADER, "hover-pause"))
            } else {
                (IconKind::Play, fl!(LANGUAGE_LOADER, "hover-start"))
            };

            if self
                .round_button(ui, play_icon, true)
                .on_hover_text(play_hint)
                .clicked()
            {
                event_proxy.send_event(UserEvent::TogglePlay);
            }

            if self
                .round_button(ui, IconKind::Reset, state.reset_enabled)
                .on_hover_text(fl!(LANGUAGE_LOADER, "hover-reset"))
                .clicked()
            {
                event_proxy.send_event(UserEvent::Reset);
            }

            if self
                .round_button(ui, IconKind::Save, state.save_enabled)
                .on_hover_text(fl!(LANGUAGE_LOADER, "hover-save"))
                .clicked()
            {
                event_proxy.send_event(UserEvent::Save);
            }
        });
    }

    fn round_button(&self, ui: &mut egui::Ui, kind: IconKind, enabled: bool) -> Response {
        let button = match self.icons.get(kind) {
            Some(texture) => Button::image(Image::from_texture(SizedTexture::new(
                texture.id(),
                Vec2::splat(kind.size()),
            ))),
            None => Button::new(
                RichText::new(kind.glyph())
                    .size(kind.size() * 0.8)
                    .color(self.palette.on_accent),
            ),
        };

        ui.add_enabled(
            enabled,
            button
                .min_size(Vec2::splat(BUTTON_SIZE))
                .rounding(Rounding::same(BUTTON_SIZE / 2.0)),
        )
    }

    fn style_buttons(&self, visuals: &mut Visuals) {
        let widgets = &mut visuals.widgets;

        widgets.inactive.weak_bg_fill = self.palette.accent;
        widgets.hovered.weak_bg_fill = self.palette.accent_hover;
        widgets.active.weak_bg_fill = self.palette.accent_hover;

        for widget in [
            &mut widgets.inactive,
            &mut widgets.hovered,
            &mut widgets.active,
        ] {
            widget.bg_stroke = Stroke::NONE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event::tests::RecordingProxy, preferences::Theme};
    use egui::{Event, Key, Modifiers, RawInput};

    fn key_press(key: Key) -> Event {
        Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn idle_state() -> ControlState {
        ControlState {
            elapsed_text: "00:00:00.00".to_owned(),
            running: false,
            reset_enabled: false,
            save_enabled: false,
        }
    }

    fn run_frame(events: Vec<Event>) -> Vec<UserEvent> {
        let ctx = Context::default();
        let ui = Ui::new(IconSet::default(), Theme::Dark.palette());
        let proxy = RecordingProxy::default();

        let raw_input = RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(raw_input, |ctx| ui.show(ctx, &idle_state(), &proxy));

        proxy.events.into_inner()
    }

    #[test]
    fn keys_map_to_events() {
        let events = run_frame(vec![
            key_press(Key::Space),
            key_press(Key::R),
            key_press(Key::Escape),
            key_press(Key::F11),
        ]);

        assert_eq!(
            events,
            vec![
                UserEvent::TogglePlay,
                UserEvent::Reset,
                UserEvent::RequestClose,
                UserEvent::ToggleFullscreen,
            ]
        );
    }

    #[test]
    fn every_press_in_a_frame_counts() {
        let events = run_frame(vec![key_press(Key::Space), key_press(Key::Space)]);

        assert_eq!(events, vec![UserEvent::TogglePlay, UserEvent::TogglePlay]);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert!(run_frame(vec![key_press(Key::A)]).is_empty());
    }

    #[test]
    fn no_input_no_events() {
        assert!(run_frame(vec![]).is_empty());
    }
}
