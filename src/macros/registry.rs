//! Writes to the binding store: message templates and custom macros.

use std::sync::Arc;

use crate::store::BindingStore;

use super::bindings::is_reserved;
use super::tokenizer::is_identifier;
use super::types::{CustomMacro, InputField, MacroError, MacroResult, TemplateKind};

/// Check a custom macro before it is written.
///
/// Rejects, in order: an empty name, a reserved default name, a template key,
/// a name the tokenizer could never match, and an empty value.
pub fn validate_custom_macro(name: &str, value: &str) -> MacroResult<()> {
    if name.is_empty() {
        return Err(MacroError::EmptyInput(InputField::MacroName));
    }

    if is_reserved(name) {
        return Err(MacroError::ReservedName(name.to_string()));
    }

    if TemplateKind::is_template_key(name) {
        return Err(MacroError::TemplateKeyConflict(name.to_string()));
    }

    if !is_identifier(name) {
        return Err(MacroError::InvalidName(name.to_string()));
    }

    if value.is_empty() {
        return Err(MacroError::EmptyInput(InputField::MacroContent));
    }

    Ok(())
}

/// Store-backed registry of message templates and custom macros
#[derive(Clone)]
pub struct MacroRegistry {
    store: Arc<dyn BindingStore>,
}

impl MacroRegistry {
    pub fn new(store: Arc<dyn BindingStore>) -> Self {
        Self { store }
    }

    /// Read a stored template body. Empty bodies are reported as missing.
    pub async fn template(&self, kind: TemplateKind) -> MacroResult<Option<String>> {
        let body = self.store.get(kind.store_key()).await?;
        Ok(body.filter(|b| !b.is_empty()))
    }

    /// Replace a stored template body
    pub async fn set_template(&self, kind: TemplateKind, body: &str) -> MacroResult<()> {
        if body.is_empty() {
            return Err(MacroError::EmptyInput(InputField::Message));
        }

        self.store.put(kind.store_key(), body).await?;

        tracing::info!(template = %kind, length = body.len(), "Message template updated");

        Ok(())
    }

    /// Register or overwrite a custom macro
    pub async fn set_custom_macro(&self, name: &str, value: &str) -> MacroResult<CustomMacro> {
        if let Err(e) = validate_custom_macro(name, value) {
            tracing::info!(macro_name = %name, reason = %e, "Custom macro rejected");
            return Err(e);
        }

        self.store.put(name, value).await?;

        tracing::info!(macro_name = %name, "Custom macro set");

        Ok(CustomMacro {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Read a custom macro value
    pub async fn custom_macro(&self, name: &str) -> MacroResult<Option<String>> {
        if is_reserved(name) || TemplateKind::is_template_key(name) {
            return Ok(None);
        }
        Ok(self.store.get(name).await?)
    }
}
