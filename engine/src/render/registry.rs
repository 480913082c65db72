use std::collections::HashMap;
use std::sync::Arc;

use crate::layout::{Axis, Measure, Viewport};
use crate::model::Element;
use crate::render::ElementRenderer;

/// Write-once lookup from element kind to renderer.
///
/// Built through `RegistryBuilder`, immutable afterwards; callers hold it
/// by reference for the lifetime of a render pass. A kind with no entry is
/// a dispatch miss the walker reports, never a panic.
pub struct RendererRegistry {
    renderers: HashMap<String, Arc<dyn ElementRenderer>>,
}

impl RendererRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            renderers: HashMap::new(),
        }
    }

    /// Registry preloaded with the built-in renderers.
    pub fn with_builtins() -> Self {
        let mut builder = Self::builder();
        crate::builtin::register_builtins(&mut builder);
        builder.build()
    }

    pub fn get(&self, kind: &str) -> Option<&Arc<dyn ElementRenderer>> {
        self.renderers.get(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }
}

pub struct RegistryBuilder {
    renderers: HashMap<String, Arc<dyn ElementRenderer>>,
}

impl RegistryBuilder {
    pub fn register(&mut self, renderer: Arc<dyn ElementRenderer>) -> &mut Self {
        self.renderers.insert(renderer.kind().to_string(), renderer);
        self
    }

    pub fn build(self) -> RendererRegistry {
        RendererRegistry {
            renderers: self.renderers,
        }
    }
}

impl Measure for RendererRegistry {
    fn measure(&self, element: &Element, axis: Axis, viewport: Viewport) -> Option<f64> {
        self.get(&element.kind)
            .and_then(|renderer| renderer.measure(element, axis, viewport))
    }
}
