use crate::prelude::{DisplayModule, ModuleKind, ModuleView, UploadPanel};

/// Satellite image classification page: an upload surface whose submissions
/// are analyzed by the remote model. The view itself carries no charts.
pub struct ClassificationModule;

impl ClassificationModule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassificationModule {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayModule for ClassificationModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::ImageClassification
    }

    fn render(&self) -> ModuleView {
        ModuleView {
            kind: ModuleKind::ImageClassification,
            title: "Satellite Image Classification".to_string(),
            charts: Vec::new(),
            notes: Vec::new(),
            upload: Some(UploadPanel {
                accepted_formats: vec!["png".into(), "jpg".into(), "jpeg".into()],
                help: "Upload a satellite or aerial image for AI analysis".to_string(),
            }),
            simulator: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_exposes_upload_surface_only() {
        let view = ClassificationModule::new().render();
        assert_eq!(view.kind, ModuleKind::ImageClassification);
        assert!(view.charts.is_empty());
        let upload = view.upload.unwrap();
        assert_eq!(upload.accepted_formats, ["png", "jpg", "jpeg"]);
        assert!(view.simulator.is_none());
    }
}
