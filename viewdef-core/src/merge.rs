//! Folding caller options over resolver defaults.

use tracing::{debug, warn};
use viewdef_model::SchemaDescriptor;

use crate::resolve::{default_fields, default_module, default_name, default_source, default_title};
use crate::{ActionBinding, ConfigKey, Diagnostic, FieldDescriptor, ViewConfig, ViewOptions};

type Step = fn(ViewConfig, &dyn SchemaDescriptor, &ViewOptions) -> ViewConfig;

/// One step per key, applied in [`ConfigKey::ORDER`].
const STEPS: [(ConfigKey, Step); 5] = [
    (ConfigKey::Module, resolve_module),
    (ConfigKey::Name, resolve_name),
    (ConfigKey::Source, resolve_source),
    (ConfigKey::Title, resolve_title),
    (ConfigKey::Fields, resolve_fields),
];

/// Resolves a view configuration.
///
/// Each resolvable key takes the explicit option when present and the
/// schema default otherwise. Field and action list operations are applied
/// afterwards. Diagnostics are logged at warn level and dropped.
pub fn parse(
    config: ViewConfig,
    schema: &dyn SchemaDescriptor,
    options: &ViewOptions,
) -> ViewConfig {
    parse_with_diagnostics(config, schema, options).0
}

/// Same as [`parse`], also returning the diagnostics it logged.
pub fn parse_with_diagnostics(
    config: ViewConfig,
    schema: &dyn SchemaDescriptor,
    options: &ViewOptions,
) -> (ViewConfig, Vec<Diagnostic>) {
    let config = STEPS.iter().fold(config, |config, (key, step)| {
        debug!(key = %key, "Resolving view key");
        step(config, schema, options)
    });

    let mut diagnostics = Vec::new();
    let fields = add_fields(config.fields, schema, options, &mut diagnostics);
    let fields = remove_fields(fields, &options.remove, &mut diagnostics);

    let config = ViewConfig {
        fields,
        actions: merge_actions(config.actions, options),
        sub_title: options.sub_title.clone().unwrap_or(config.sub_title),
        template: options.template.clone().or(config.template),
        ..config
    };

    for diagnostic in &diagnostics {
        warn!(
            type_name = schema.type_name(),
            field = diagnostic.field(),
            "{}",
            diagnostic
        );
    }

    (config, diagnostics)
}

fn resolve_module(
    config: ViewConfig,
    schema: &dyn SchemaDescriptor,
    _options: &ViewOptions,
) -> ViewConfig {
    ViewConfig {
        module: default_module(schema),
        ..config
    }
}

fn resolve_name(
    config: ViewConfig,
    schema: &dyn SchemaDescriptor,
    options: &ViewOptions,
) -> ViewConfig {
    ViewConfig {
        name: options.name.clone().unwrap_or_else(|| default_name(schema)),
        ..config
    }
}

fn resolve_source(
    config: ViewConfig,
    schema: &dyn SchemaDescriptor,
    options: &ViewOptions,
) -> ViewConfig {
    ViewConfig {
        source: options
            .source
            .clone()
            .unwrap_or_else(|| default_source(schema)),
        ..config
    }
}

fn resolve_title(
    config: ViewConfig,
    schema: &dyn SchemaDescriptor,
    options: &ViewOptions,
) -> ViewConfig {
    ViewConfig {
        title: options
            .title
            .clone()
            .unwrap_or_else(|| default_title(schema)),
        ..config
    }
}

fn resolve_fields(
    config: ViewConfig,
    schema: &dyn SchemaDescriptor,
    options: &ViewOptions,
) -> ViewConfig {
    let fields = match &options.fields {
        Some(fields) => fields.iter().map(|f| f.to_descriptor(schema)).collect(),
        None => default_fields(schema),
    };
    ViewConfig { fields, ..config }
}

fn add_fields(
    mut fields: Vec<FieldDescriptor>,
    schema: &dyn SchemaDescriptor,
    options: &ViewOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<FieldDescriptor> {
    for option in &options.add_opt {
        if fields.iter().any(|f| f.field == option.field()) {
            diagnostics.push(Diagnostic::DuplicateField(option.field().to_string()));
            continue;
        }
        fields.push(option.to_descriptor(schema));
    }
    fields
}

fn remove_fields(
    mut fields: Vec<FieldDescriptor>,
    remove: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<FieldDescriptor> {
    for name in remove {
        let before = fields.len();
        fields.retain(|f| &f.field != name);
        if fields.len() == before {
            diagnostics.push(Diagnostic::MissingField(name.clone()));
        }
    }
    fields
}

// Actions get no duplicate or missing-entry diagnostics.
fn merge_actions(actions: Vec<ActionBinding>, options: &ViewOptions) -> Vec<ActionBinding> {
    let mut actions = options.actions.clone().unwrap_or(actions);
    actions.extend(options.add_actions.iter().cloned());
    actions.retain(|a| !options.remove_actions.contains(&a.action));
    actions
}
