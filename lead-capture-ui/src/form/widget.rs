use egui::{Color32, RichText, Ui};
use lead_capture_core::{Field, FormStep};

use super::actions::FormAction;
use super::manager::FormManager;

/// Built-in look of the form. Every knob has a fixed default and can be
/// overridden by the host; none of the values are validated.
#[derive(Debug, Clone, PartialEq)]
pub struct FormStyle {
    pub container_fill: Color32,
    pub container_padding: f32,
    pub input_width: f32,
    pub label_color: Color32,
    pub button_fill: Color32,
    pub error_color: Color32,
}

impl Default for FormStyle {
    fn default() -> Self {
        Self {
            container_fill: Color32::from_white_alpha(8),
            container_padding: 24.0,
            input_width: 280.0,
            label_color: Color32::WHITE,
            button_fill: Color32::from_rgb(59, 130, 246),
            error_color: Color32::RED,
        }
    }
}

/// The embeddable three-step form. Renders exactly one field per step and
/// drives the manager through dispatched actions; it emits nothing to the
/// host beyond the manager's completion callback.
pub struct LeadCaptureForm<'a> {
    manager: &'a mut FormManager,
    style: &'a FormStyle,
}

impl<'a> LeadCaptureForm<'a> {
    pub fn new(manager: &'a mut FormManager, style: &'a FormStyle) -> Self {
        Self { manager, style }
    }

    pub fn show(mut self, ui: &mut Ui) {
        egui::Frame::none()
            .fill(self.style.container_fill)
            .rounding(8.0)
            .inner_margin(self.style.container_padding)
            .show(ui, |ui| {
                self.render_active_field(ui);
                ui.add_space(16.0);
                self.render_action_button(ui);
            });
    }

    fn render_active_field(&mut self, ui: &mut Ui) {
        match self.manager.state().step {
            FormStep::Email => {
                self.render_text_field(ui, Field::Email, "Email:", "Enter your email");
            }
            FormStep::Phone => {
                self.render_text_field(ui, Field::Phone, "Phone:", "Enter your phone number");
            }
            FormStep::LookingFor => {
                self.render_option_field(ui, "What are you looking for?");
            }
        }
    }

    fn render_text_field(&mut self, ui: &mut Ui, field: Field, label: &str, hint: &str) {
        ui.label(RichText::new(label).color(self.style.label_color).strong());
        ui.add_space(6.0);

        let mut value = self.manager.state().lead.get(field).to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut value)
                .hint_text(hint)
                .desired_width(self.style.input_width),
        );
        if response.changed() {
            self.manager.dispatch(FormAction::Edit { field, value });
        }

        self.render_field_error(ui, field);
    }

    fn render_option_field(&mut self, ui: &mut Ui, label: &str) {
        ui.label(RichText::new(label).color(self.style.label_color).strong());
        ui.add_space(6.0);

        let selected = self.manager.state().lead.get(Field::LookingFor).to_string();
        let mut choice = selected.clone();
        let display = if selected.is_empty() {
            "Select an option"
        } else {
            selected.as_str()
        };

        egui::ComboBox::new("looking_for_selector", "")
            .selected_text(display)
            .width(self.style.input_width)
            .show_ui(ui, |ui| {
                // Options render in the order the host gave them.
                for option in self.manager.looking_for_options() {
                    ui.selectable_value(&mut choice, option.clone(), option);
                }
            });

        if choice != selected {
            self.manager.dispatch(FormAction::Edit {
                field: Field::LookingFor,
                value: choice,
            });
        }

        self.render_field_error(ui, Field::LookingFor);
    }

    fn render_field_error(&mut self, ui: &mut Ui, field: Field) {
        if let Some(message) = self.manager.state().errors.get(field) {
            ui.add_space(4.0);
            ui.colored_label(self.style.error_color, message);
        }
    }

    fn render_action_button(&mut self, ui: &mut Ui) {
        let label = self.manager.state().step.action_label();
        let button = egui::Button::new(RichText::new(label).color(Color32::WHITE).strong())
            .fill(self.style.button_fill)
            .min_size(egui::vec2(self.style.input_width, 32.0));

        if ui.add(button).clicked() {
            self.manager.dispatch(FormAction::SubmitStep);
        }
    }
}
