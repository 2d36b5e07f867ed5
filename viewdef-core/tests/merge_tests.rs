mod common;

use common::{accounts_schema, receivables_schema};
use pretty_assertions::assert_eq;
use viewdef_core::resolve::default_fields;
use viewdef_core::{
    ActionBinding, Diagnostic, FieldDescriptor, FieldOption, FieldSpec, Placement, PrimitiveType,
    SubTitle, ViewConfig, ViewOptions, WidgetKind, parse, parse_with_diagnostics,
};

fn resolve(options: &ViewOptions) -> ViewConfig {
    parse(ViewConfig::default(), &accounts_schema(), options)
}

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn no_options_resolves_every_key_from_schema() {
    let config = resolve(&ViewOptions::default());
    assert_eq!(config.module, "account");
    assert_eq!(config.name, "Account");
    assert_eq!(config.source, "accounts");
    assert_eq!(config.title, "Accounts");
    assert_eq!(config.field_names(), vec!["description", "number"]);
    assert!(config.actions.is_empty());
    assert_eq!(config.sub_title, SubTitle::Generated);
    assert_eq!(config.template, None);
}

#[test]
fn receivables_end_to_end() {
    let config = parse(
        ViewConfig::default(),
        &receivables_schema(),
        &ViewOptions::default(),
    );
    assert_eq!(config.title, "Account Receivables");
    assert_eq!(config.field_names(), vec!["description", "amount"]);

    let description = config.field("description").unwrap();
    assert_eq!(description.widget_kind, WidgetKind::Text);
    assert_eq!(description.length, 255);

    let amount = config.field("amount").unwrap();
    assert_eq!(amount.widget_kind, WidgetKind::Number);
    assert_eq!((amount.length, amount.precision, amount.scale), (12, 10, 2));
    assert_eq!(amount.placeholder, "0");
}

// ── Scalar overrides ─────────────────────────────────────────────

#[test]
fn explicit_name_source_and_title_win() {
    let options = ViewOptions {
        name: Some("Ledger account".into()),
        source: Some("legacy_accounts".into()),
        title: Some("All accounts".into()),
        ..Default::default()
    };
    let config = resolve(&options);
    assert_eq!(config.name, "Ledger account");
    assert_eq!(config.source, "legacy_accounts");
    assert_eq!(config.title, "All accounts");
}

#[test]
fn empty_string_override_is_still_an_override() {
    let options = ViewOptions {
        title: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(resolve(&options).title, "");
}

#[test]
fn overriding_name_or_source_leaves_fields_untouched() {
    let options = ViewOptions {
        name: Some("Other".into()),
        source: Some("others".into()),
        ..Default::default()
    };
    assert_eq!(resolve(&options).fields, default_fields(&accounts_schema()));
}

#[test]
fn title_default_reads_schema_not_source_override() {
    let options = ViewOptions {
        source: Some("ledger_entries".into()),
        ..Default::default()
    };
    assert_eq!(resolve(&options).title, "Accounts");
}

// ── Field list ───────────────────────────────────────────────────

#[test]
fn fields_option_replaces_default_list() {
    let custom = FieldDescriptor {
        field: "memo".into(),
        label: "Memo".into(),
        placeholder: "Notes".into(),
        widget_kind: WidgetKind::Other("textarea".into()),
        length: 1000,
        precision: 0,
        scale: 0,
    };
    let options = ViewOptions {
        fields: Some(vec![FieldOption::from("number"), custom.clone().into()]),
        ..Default::default()
    };
    let config = resolve(&options);
    assert_eq!(config.field_names(), vec!["number", "memo"]);
    assert_eq!(config.fields[1], custom);
}

#[test]
fn partial_field_spec_fills_missing_members_from_schema() {
    let options = ViewOptions::from_json(
        r#"{ "fields": [{ "field": "number", "label": "Account no." }, { "field": "memo", "length": 80 }] }"#,
    )
    .unwrap();
    let config = resolve(&options);

    let number = config.field("number").unwrap();
    assert_eq!(number.label, "Account no.");
    assert_eq!(number.placeholder, "Number");
    assert_eq!(number.widget_kind, WidgetKind::Text);
    assert_eq!(number.length, 255);

    let memo = config.field("memo").unwrap();
    assert_eq!(memo.label, "Memo");
    assert_eq!(memo.length, 80);
}

#[test]
fn field_spec_without_identifier_names_the_missing_member() {
    let err = ViewOptions::from_json(r#"{ "add_opt": [{ "label": "Memo" }] }"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("invalid field entry"), "{message}");
    assert!(message.contains("missing field `field`"), "{message}");
}

#[test]
fn field_entry_of_wrong_shape_is_rejected() {
    let err = ViewOptions::from_json(r#"{ "fields": [42] }"#).unwrap_err();
    assert!(err.to_string().contains("expected a field name or an object"));
}

#[test]
fn field_options_serialize_back_to_their_json_forms() {
    let options = ViewOptions {
        add_opt: vec![
            "notes".into(),
            FieldOption::Spec(FieldSpec {
                field: "memo".into(),
                label: Some("Memo".into()),
                placeholder: None,
                widget_kind: None,
                length: None,
                precision: None,
                scale: None,
            }),
        ],
        ..Default::default()
    };
    let value = serde_json::to_value(&options).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "add_opt": ["notes", { "field": "memo", "label": "Memo" }] })
    );
}

#[test]
fn fields_option_may_list_system_fields() {
    let options = ViewOptions {
        fields: Some(vec!["id".into(), "description".into()]),
        ..Default::default()
    };
    let config = resolve(&options);
    assert_eq!(config.field_names(), vec!["id", "description"]);
    assert_eq!(config.fields[0].widget_kind, WidgetKind::Number);
}

#[test]
fn add_opt_appends_new_fields() {
    let options = ViewOptions {
        add_opt: vec!["inserted_at".into()],
        ..Default::default()
    };
    let (config, diagnostics) =
        parse_with_diagnostics(ViewConfig::default(), &accounts_schema(), &options);
    assert_eq!(
        config.field_names(),
        vec!["description", "number", "inserted_at"]
    );
    assert_eq!(
        config.fields[2],
        FieldDescriptor::for_field("inserted_at", &PrimitiveType::NaiveDatetime)
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn add_opt_skips_existing_field_with_diagnostic() {
    let options = ViewOptions {
        add_opt: vec!["number".into()],
        ..Default::default()
    };
    let (config, diagnostics) =
        parse_with_diagnostics(ViewConfig::default(), &accounts_schema(), &options);
    assert_eq!(config.fields, default_fields(&accounts_schema()));
    assert_eq!(diagnostics, vec![Diagnostic::DuplicateField("number".into())]);
}

#[test]
fn add_opt_detects_duplicates_within_itself() {
    let options = ViewOptions {
        add_opt: vec!["notes".into(), "notes".into()],
        ..Default::default()
    };
    let (config, diagnostics) =
        parse_with_diagnostics(ViewConfig::default(), &accounts_schema(), &options);
    assert_eq!(config.field_names(), vec!["description", "number", "notes"]);
    assert_eq!(diagnostics, vec![Diagnostic::DuplicateField("notes".into())]);
}

#[test]
fn undeclared_added_field_is_classified_as_text() {
    let options = ViewOptions {
        add_opt: vec!["notes".into()],
        ..Default::default()
    };
    let config = resolve(&options);
    let notes = config.field("notes").unwrap();
    assert_eq!(notes.widget_kind, WidgetKind::Text);
    assert_eq!(notes.length, 255);
}

#[test]
fn remove_drops_named_fields() {
    let options = ViewOptions {
        remove: vec!["description".into()],
        ..Default::default()
    };
    assert_eq!(resolve(&options).field_names(), vec!["number"]);
}

#[test]
fn remove_of_missing_field_is_a_diagnostic_not_an_error() {
    let options = ViewOptions {
        remove: vec!["balance".into()],
        ..Default::default()
    };
    let (config, diagnostics) =
        parse_with_diagnostics(ViewConfig::default(), &accounts_schema(), &options);
    assert_eq!(config.field_names(), vec!["description", "number"]);
    assert_eq!(diagnostics, vec![Diagnostic::MissingField("balance".into())]);
}

#[test]
fn remove_applies_after_add() {
    let options = ViewOptions {
        add_opt: vec!["notes".into()],
        remove: vec!["notes".into(), "number".into()],
        ..Default::default()
    };
    assert_eq!(resolve(&options).field_names(), vec!["description"]);
}

// ── Actions ──────────────────────────────────────────────────────

fn config_with_actions() -> ViewConfig {
    ViewConfig {
        actions: vec![ActionBinding::top("new"), ActionBinding::bottom("export")],
        ..Default::default()
    }
}

#[test]
fn actions_carry_over_from_accumulator() {
    let config = parse(
        config_with_actions(),
        &accounts_schema(),
        &ViewOptions::default(),
    );
    assert_eq!(
        config.actions,
        vec![ActionBinding::top("new"), ActionBinding::bottom("export")]
    );
}

#[test]
fn actions_option_replaces_list() {
    let options = ViewOptions {
        actions: Some(vec![ActionBinding::bottom("print")]),
        ..Default::default()
    };
    let config = parse(config_with_actions(), &accounts_schema(), &options);
    assert_eq!(config.actions, vec![ActionBinding::bottom("print")]);
}

#[test]
fn add_actions_appends_without_duplicate_check() {
    let options = ViewOptions {
        add_actions: vec![ActionBinding::top("new")],
        ..Default::default()
    };
    let (config, diagnostics) =
        parse_with_diagnostics(config_with_actions(), &accounts_schema(), &options);
    assert_eq!(config.actions.len(), 3);
    assert_eq!(config.actions[2], ActionBinding::top("new"));
    assert!(diagnostics.is_empty());
}

#[test]
fn remove_actions_drops_every_placement_silently() {
    let options = ViewOptions {
        add_actions: vec![ActionBinding::bottom("new")],
        remove_actions: vec!["new".into(), "archive".into()],
        ..Default::default()
    };
    let (config, diagnostics) =
        parse_with_diagnostics(config_with_actions(), &accounts_schema(), &options);
    assert_eq!(config.actions, vec![ActionBinding::bottom("export")]);
    assert!(diagnostics.is_empty());
    assert_eq!(config.actions[0].placement, Placement::Bottom);
}

// ── Passthrough ──────────────────────────────────────────────────

#[test]
fn sub_title_and_template_pass_through() {
    let options = ViewOptions {
        sub_title: Some(SubTitle::Suppressed),
        template: Some("admin/index".into()),
        ..Default::default()
    };
    let config = resolve(&options);
    assert_eq!(config.sub_title, SubTitle::Suppressed);
    assert_eq!(config.template.as_deref(), Some("admin/index"));
}

#[test]
fn accumulator_sub_title_and_template_survive_without_options() {
    let start = ViewConfig {
        sub_title: SubTitle::Text("Open items".into()),
        template: Some("list".into()),
        ..Default::default()
    };
    let config = parse(start, &accounts_schema(), &ViewOptions::default());
    assert_eq!(config.sub_title, SubTitle::Text("Open items".into()));
    assert_eq!(config.template.as_deref(), Some("list"));
}

#[test]
fn accumulator_scalar_keys_are_recomputed() {
    let start = ViewConfig {
        name: "Stale".into(),
        title: "Stale".into(),
        ..Default::default()
    };
    let config = parse(start, &accounts_schema(), &ViewOptions::default());
    assert_eq!(config.name, "Account");
    assert_eq!(config.title, "Accounts");
}

// ── JSON surface ─────────────────────────────────────────────────

#[test]
fn options_parse_from_json() {
    let options = ViewOptions::from_json(
        r#"{
            "title": "Receivables",
            "add_opt": ["inserted_at"],
            "remove": ["description"],
            "actions": [{ "placement": "top", "action": "new" }],
            "sub_title": false,
            "template": "index",
            "unrelated": 42
        }"#,
    )
    .unwrap();
    assert_eq!(options.title.as_deref(), Some("Receivables"));
    assert_eq!(options.add_opt, vec![FieldOption::Name("inserted_at".into())]);
    assert_eq!(options.remove, vec!["description".to_string()]);
    assert_eq!(options.actions, Some(vec![ActionBinding::top("new")]));
    assert_eq!(options.sub_title, Some(SubTitle::Suppressed));
    assert_eq!(options.template.as_deref(), Some("index"));
}

#[test]
fn sub_title_json_forms() {
    let text: SubTitle = serde_json::from_str("\"Due this week\"").unwrap();
    assert_eq!(text, SubTitle::Text("Due this week".into()));
    let generated: SubTitle = serde_json::from_str("true").unwrap();
    assert_eq!(generated, SubTitle::Generated);
    assert_eq!(serde_json::to_string(&SubTitle::Suppressed).unwrap(), "false");
}

#[test]
fn malformed_options_are_a_serialization_error() {
    let err = ViewOptions::from_json(r#"{ "remove": "description" }"#).unwrap_err();
    assert!(err.to_string().starts_with("serialization error"));
}

#[test]
fn resolved_config_uses_renderer_key_names() {
    let options = ViewOptions {
        template: Some("index".into()),
        ..Default::default()
    };
    let value = serde_json::to_value(resolve(&options)).unwrap();
    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "actions", "fields", "module", "name", "source", "sub_title", "template", "title"
        ]
    );
}

#[test]
fn missing_template_serializes_as_null() {
    let value = serde_json::to_value(resolve(&ViewOptions::default())).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 8);
    assert_eq!(object["template"], serde_json::Value::Null);
}

#[test]
fn saved_config_round_trips_as_accumulator() {
    let options = ViewOptions {
        actions: Some(vec![ActionBinding::top("new")]),
        sub_title: Some(SubTitle::Text("Open items".into())),
        ..Default::default()
    };
    let resolved = resolve(&options);
    let saved = serde_json::to_string(&resolved).unwrap();

    let start = ViewConfig::from_json(&saved).unwrap();
    assert_eq!(start, resolved);
    let again = parse(start, &accounts_schema(), &ViewOptions::default());
    assert_eq!(again, resolved);
}

#[test]
fn partial_saved_config_defaults_missing_keys() {
    let start = ViewConfig::from_json(r#"{ "template": "list" }"#).unwrap();
    assert_eq!(start.template.as_deref(), Some("list"));
    assert!(start.fields.is_empty());
    assert_eq!(start.sub_title, SubTitle::Generated);
}
