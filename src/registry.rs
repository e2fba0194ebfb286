//! Declaration registry: operation id -> target declaration.
//!
//! The registry is the single touch-point for operation authors. It is
//! built once at process start, then shared read-only (wrap it in an
//! `Arc` and hand it to the hook), so lookups need no synchronization.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::DispatchConfig;
use crate::error::{DispatchError, DispatchResult};
use crate::models::TargetDeclaration;
use crate::services::resolver::normalize_path;

/// Write-once mapping from operation identity to its declaration
#[derive(Debug)]
pub struct DeclarationRegistry {
    envelope_key: String,
    declarations: HashMap<String, Arc<TargetDeclaration>>,
}

impl DeclarationRegistry {
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            envelope_key: config.envelope_key.clone(),
            declarations: HashMap::new(),
        }
    }

    /// Registers the declaration for an operation.
    ///
    /// Path expressions are normalized here, once, so repeated dispatches
    /// of the same declaration are deterministic and cheap. Registering
    /// an operation twice is rejected; the first declaration stays.
    pub fn register(
        &mut self,
        operation: impl Into<String>,
        declaration: TargetDeclaration,
    ) -> DispatchResult<()> {
        let operation = operation.into();
        if self.declarations.contains_key(&operation) {
            return Err(DispatchError::DuplicateDeclaration(operation));
        }

        let declaration = self.normalize(declaration);
        self.declarations.insert(operation, Arc::new(declaration));
        Ok(())
    }

    /// Looks up the declaration attached to an operation
    pub fn get(&self, operation: &str) -> Option<Arc<TargetDeclaration>> {
        self.declarations.get(operation).cloned()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn normalize(&self, mut declaration: TargetDeclaration) -> TargetDeclaration {
        if let Some(path) = declaration.target_path.take() {
            declaration.target_path = Some(normalize_path(&path, &self.envelope_key));
        }
        for target in &mut declaration.additional {
            target.target_path = normalize_path(&target.target_path, &self.envelope_key);
        }
        declaration
    }
}
