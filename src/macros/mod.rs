//! Removal message macro engine.
//!
//! This module provides:
//! - A tokenizer for flat `{name}` placeholders
//! - Default and custom macro resolution against the binding store
//! - Single-pass substitution that replaces every occurrence of a token
//! - The guard that keeps custom macros from shadowing reserved names
//!
//! # Example
//!
//! ```ignore
//! let store: Arc<dyn BindingStore> = Arc::new(MemoryBindingStore::new());
//! let registry = MacroRegistry::new(store.clone());
//! let renderer = MacroRenderer::new(store);
//!
//! registry.set_template(TemplateKind::Removal, "Removed by {mod}. See {custom_rule}.").await?;
//! registry.set_custom_macro("custom_rule", "Rule 3").await?;
//!
//! let defaults: MacroBindings = [("mod", "AutoModBot")].into_iter().collect();
//! let rendered = renderer.render_stored(TemplateKind::Removal, &defaults).await?;
//! assert_eq!(rendered.text, "Removed by AutoModBot. See Rule 3.");
//! ```

mod bindings;
mod registry;
mod renderer;
mod tokenizer;
mod types;

pub use bindings::{is_reserved, MacroBindings, RESERVED_MACRO_NAMES};
pub use registry::{validate_custom_macro, MacroRegistry};
pub use renderer::{substitute, MacroRenderer, RenderedMessage};
pub use tokenizer::{extract_tokens, is_identifier, scan, Segment, Tokens};
pub use types::{CustomMacro, InputField, MacroError, MacroResult, TemplateKind};
