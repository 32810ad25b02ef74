//! Extension registry
//!
//! Extensions are optional capabilities registered at startup. Looking one up
//! returns `Option`; a missing extension is a normal state, not an error.

use async_trait::async_trait;
use modelhub_common::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::Assistant;

/// Kinds of extension the host can register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    Assistant,
}

/// Supplies the assistant list
#[async_trait]
pub trait AssistantProvider: Send + Sync {
    async fn get_assistants(&self) -> Result<Vec<Assistant>>;
}

/// A registered extension implementation
#[derive(Clone)]
pub enum Extension {
    Assistant(Arc<dyn AssistantProvider>),
}

impl Extension {
    pub fn kind(&self) -> ExtensionKind {
        match self {
            Extension::Assistant(_) => ExtensionKind::Assistant,
        }
    }
}

/// Registry of extension implementations by kind
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: RwLock<HashMap<ExtensionKind, Extension>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extension, replacing any previous one of the same kind
    pub fn register(&self, extension: Extension) {
        let kind = extension.kind();
        let mut extensions = self.extensions.write().unwrap_or_else(|e| e.into_inner());
        if extensions.insert(kind, extension).is_some() {
            tracing::warn!(?kind, "Replacing previously registered extension");
        } else {
            tracing::info!(?kind, "Extension registered");
        }
    }

    /// Look up the extension registered for `kind`
    pub fn get(&self, kind: ExtensionKind) -> Option<Extension> {
        let extensions = self.extensions.read().unwrap_or_else(|e| e.into_inner());
        extensions.get(&kind).cloned()
    }

    /// Registered assistant provider, if any
    pub fn assistant_provider(&self) -> Option<Arc<dyn AssistantProvider>> {
        match self.get(ExtensionKind::Assistant)? {
            Extension::Assistant(provider) => Some(provider),
        }
    }
}

/// Assistants from the registered provider
///
/// Returns an empty list when no provider is registered. A provider failure
/// is logged and also yields an empty list.
pub async fn get_assistants(registry: &ExtensionRegistry) -> Vec<Assistant> {
    let Some(provider) = registry.assistant_provider() else {
        tracing::debug!("No assistant extension registered");
        return Vec::new();
    };

    match provider.get_assistants().await {
        Ok(assistants) => assistants,
        Err(e) => {
            tracing::error!(error = %e, "Assistant extension failed to list assistants");
            Vec::new()
        }
    }
}
