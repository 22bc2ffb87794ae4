use geocore::modules::{ClassificationModule, ClimateModule, EnvironmentModule};
use geocore::prelude::{DisplayModule, ModuleKind, ModuleView};

/// Dispatches a navigation selection to exactly one display module. There
/// are no transitions beyond re-selection and nothing persists between
/// selections: every dispatch renders a fresh view.
pub struct PageOrchestrator {
    modules: Vec<Box<dyn DisplayModule + Send + Sync>>,
}

impl PageOrchestrator {
    pub fn new() -> Self {
        Self::with_modules(vec![
            Box::new(ClassificationModule::new()),
            Box::new(ClimateModule::new()),
            Box::new(EnvironmentModule::new()),
        ])
    }

    pub fn with_modules(modules: Vec<Box<dyn DisplayModule + Send + Sync>>) -> Self {
        Self { modules }
    }

    pub fn dispatch(&self, kind: ModuleKind) -> Option<ModuleView> {
        self.modules
            .iter()
            .find(|module| module.kind() == kind)
            .map(|module| module.render())
    }

    pub fn kinds(&self) -> Vec<ModuleKind> {
        self.modules.iter().map(|module| module.kind()).collect()
    }
}

impl Default for PageOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingModule {
        kind: ModuleKind,
        renders: Arc<AtomicUsize>,
    }

    impl DisplayModule for CountingModule {
        fn kind(&self) -> ModuleKind {
            self.kind
        }

        fn render(&self) -> ModuleView {
            self.renders.fetch_add(1, Ordering::SeqCst);
            ModuleView {
                kind: self.kind,
                title: String::new(),
                charts: Vec::new(),
                notes: Vec::new(),
                upload: None,
                simulator: None,
            }
        }
    }

    #[test]
    fn dispatch_invokes_exactly_one_module() {
        let counters: Vec<Arc<AtomicUsize>> = (0..3).map(|_| Arc::new(AtomicUsize::new(0))).collect();
        let modules: Vec<Box<dyn DisplayModule + Send + Sync>> = ModuleKind::ALL
            .iter()
            .zip(&counters)
            .map(|(&kind, renders)| {
                Box::new(CountingModule {
                    kind,
                    renders: renders.clone(),
                }) as Box<dyn DisplayModule + Send + Sync>
            })
            .collect();
        let orchestrator = PageOrchestrator::with_modules(modules);

        orchestrator.dispatch(ModuleKind::ClimateChange).unwrap();

        assert_eq!(counters[0].load(Ordering::SeqCst), 0);
        assert_eq!(counters[1].load(Ordering::SeqCst), 1);
        assert_eq!(counters[2].load(Ordering::SeqCst), 0);
    }

    #[test]
    fn standard_orchestrator_serves_all_three_modules() {
        let orchestrator = PageOrchestrator::new();
        assert_eq!(orchestrator.kinds(), ModuleKind::ALL.to_vec());
        for kind in ModuleKind::ALL {
            let view = orchestrator.dispatch(kind).unwrap();
            assert_eq!(view.kind, kind);
        }
    }
}
