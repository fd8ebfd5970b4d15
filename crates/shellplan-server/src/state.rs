use std::sync::Arc;

use shellplan_core::SchemaVariant;

use crate::generate::StructuredGenerator;

/// Shared application state passed to all route handlers. Immutable after
/// construction: there is no cache and no session, so nothing is shared
/// mutably across requests.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn StructuredGenerator>,
    pub variant: SchemaVariant,
    pub model: String,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn StructuredGenerator>,
        variant: SchemaVariant,
        model: String,
    ) -> Self {
        Self {
            generator,
            variant,
            model,
        }
    }
}
