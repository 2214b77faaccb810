use egui::{Align2, Color32, Key};

/// Outcome of a dialog: either the user confirmed a value or backed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T> DialogResult<T> {
    pub fn confirmed(self) -> Option<T> {
        match self {
            Self::Confirmed(value) => Some(value),
            Self::Cancelled => None,
        }
    }
}

impl<T> From<Option<T>> for DialogResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Confirmed(value),
            None => Self::Cancelled,
        }
    }
}

/// Which color a color picker was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRequest {
    BrushColor,
    BlendTarget,
}

impl ColorRequest {
    pub fn title(self) -> &'static str {
        match self {
            Self::BrushColor => "Brush Color",
            Self::BlendTarget => "Select Blend Color",
        }
    }
}

/// Which setting a size dialog edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRequest {
    BrushSize,
    SmudgeRadius,
}

impl SizeRequest {
    pub fn title(self) -> &'static str {
        match self {
            Self::BrushSize => "Brush Size",
            Self::SmudgeRadius => "Smudge Radius",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::BrushSize => "Enter brush size:",
            Self::SmudgeRadius => "Enter smudge radius:",
        }
    }
}

/// Color picker window. Shown until the user confirms or cancels.
pub struct ColorDialog {
    request: ColorRequest,
    color: Color32,
}

impl ColorDialog {
    pub fn new(request: ColorRequest, initial: Color32) -> Self {
        Self {
            request,
            color: initial,
        }
    }

    pub fn request(&self) -> ColorRequest {
        self.request
    }

    /// Returns `None` while the dialog stays open.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogResult<Color32>> {
        let mut result = None;
        let color = &mut self.color;

        egui::Window::new(self.request.title())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        result = Some(DialogResult::Confirmed(*color));
                    }
                    if ui.button("Cancel").clicked() {
                        result = Some(DialogResult::Cancelled);
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            result = Some(DialogResult::Cancelled);
        }
        result
    }
}

/// Integer input window. Returns the raw text; parsing happens in the caller.
pub struct SizeDialog {
    request: SizeRequest,
    text: String,
}

impl SizeDialog {
    pub fn new(request: SizeRequest, initial: u32) -> Self {
        Self {
            request,
            text: initial.to_string(),
        }
    }

    pub fn request(&self) -> SizeRequest {
        self.request
    }

    /// Returns `None` while the dialog stays open.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogResult<String>> {
        let mut result = None;
        let request = self.request;
        let text = &mut self.text;

        egui::Window::new(request.title())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(request.prompt());
                let edit = ui.text_edit_singleline(text);
                let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || submitted {
                        result = Some(DialogResult::Confirmed(text.clone()));
                    }
                    if ui.button("Cancel").clicked() {
                        result = Some(DialogResult::Cancelled);
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            result = Some(DialogResult::Cancelled);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        assert_eq!(
            DialogResult::from(Some(Color32::RED)),
            DialogResult::Confirmed(Color32::RED)
        );
        assert_eq!(DialogResult::<u32>::from(None), DialogResult::Cancelled);
    }

    #[test]
    fn test_confirmed() {
        assert_eq!(DialogResult::Confirmed(3).confirmed(), Some(3));
        assert_eq!(DialogResult::<i32>::Cancelled.confirmed(), None);
    }
}
