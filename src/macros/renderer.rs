//! Macro resolution and substitution

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::metrics::RenderMetrics;
use crate::store::BindingStore;

use super::bindings::MacroBindings;
use super::tokenizer::{extract_tokens, scan, Segment};
use super::types::{MacroError, MacroResult, TemplateKind};

/// Output of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    /// Template with every resolvable placeholder replaced
    pub text: String,
    /// Distinct macros that were substituted, in first-occurrence order
    pub substituted: Vec<String>,
    /// Distinct macros left verbatim because they had no value
    pub unresolved: Vec<String>,
}

/// Renders templates against default bindings and the binding store.
///
/// Rendering only reads from the store.
#[derive(Clone)]
pub struct MacroRenderer {
    store: Arc<dyn BindingStore>,
}

impl MacroRenderer {
    pub fn new(store: Arc<dyn BindingStore>) -> Self {
        Self { store }
    }

    /// Load a stored template and render it.
    ///
    /// Returns `TemplateNotConfigured` when the template is missing or empty.
    pub async fn render_stored(
        &self,
        kind: TemplateKind,
        defaults: &MacroBindings,
    ) -> MacroResult<RenderedMessage> {
        let template = self
            .store
            .get(kind.store_key())
            .await?
            .filter(|body| !body.is_empty())
            .ok_or(MacroError::TemplateNotConfigured(kind))?;

        self.render(&template, defaults).await
    }

    /// Render a template string.
    ///
    /// Unknown macros are logged and left in place; only store failures are errors.
    pub async fn render(
        &self,
        template: &str,
        defaults: &MacroBindings,
    ) -> MacroResult<RenderedMessage> {
        let mut resolved: HashMap<&str, String> = HashMap::new();
        let mut substituted = Vec::new();
        let mut unresolved = Vec::new();

        for name in extract_tokens(template) {
            match self.resolve(name, defaults).await? {
                Some(value) => {
                    resolved.insert(name, value);
                    substituted.push(name.to_string());
                }
                None => {
                    tracing::warn!(
                        macro_name = %name,
                        "Tried to replace macro in reply body but it is not a valid macro"
                    );
                    unresolved.push(name.to_string());
                }
            }
        }

        RenderMetrics::record_render(substituted.len(), unresolved.len());

        tracing::debug!(
            substituted = substituted.len(),
            unresolved = unresolved.len(),
            "Template rendered"
        );

        Ok(RenderedMessage {
            text: substitute(template, &resolved),
            substituted,
            unresolved,
        })
    }

    /// Defaults first, then the store. Empty values count as missing.
    async fn resolve(&self, name: &str, defaults: &MacroBindings) -> MacroResult<Option<String>> {
        if let Some(value) = defaults.get(name) {
            return Ok(Some(value.to_string()).filter(|v| !v.is_empty()));
        }

        let value = self.store.get(name).await?;
        Ok(value.filter(|v| !v.is_empty()))
    }
}

/// Replace every placeholder whose name is in `values` in one left-to-right pass.
///
/// Substituted values are never rescanned, and placeholders without a value are
/// copied through unchanged.
pub fn substitute(template: &str, values: &HashMap<&str, String>) -> String {
    let mut output = String::with_capacity(template.len());

    for segment in scan(template) {
        match segment {
            Segment::Text(text) => output.push_str(text),
            Segment::Token { name, raw } => match values.get(name) {
                Some(value) => output.push_str(value),
                None => output.push_str(raw),
            },
        }
    }

    output
}
