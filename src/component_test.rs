use super::*;

#[test]
fn test_component_deserialize_full() {
    let json = r#"{
        "name": "dialog",
        "type": "ui",
        "dependencies": ["@angular/cdk"],
        "registryDependencies": ["button"],
        "files": [
            { "path": "dialog/dialog.ts", "content": "import { cn } from '@/lib/utils';", "type": "ui" }
        ]
    }"#;

    let component: Component = serde_json::from_str(json).unwrap();

    assert_eq!(component.name, "dialog");
    assert_eq!(component.component_type, "ui");
    assert_eq!(component.dependencies, vec!["@angular/cdk"]);
    assert_eq!(component.registry_dependencies, vec!["button"]);
    assert_eq!(component.files.len(), 1);
    assert_eq!(component.files[0].path, "dialog/dialog.ts");
}

#[test]
fn test_component_optional_lists_default_to_empty() {
    let json = r#"{ "name": "badge", "type": "ui", "files": [] }"#;

    let component: Component = serde_json::from_str(json).unwrap();

    assert!(component.dependencies.is_empty());
    assert!(component.registry_dependencies.is_empty());
}

#[test]
fn test_component_missing_name_is_error() {
    let json = r#"{ "type": "ui", "files": [] }"#;
    assert!(serde_json::from_str::<Component>(json).is_err());
}

#[test]
fn test_registry_index_parse() {
    let json = r#"{ "components": [
        { "name": "button", "type": "ui" },
        { "name": "utils", "type": "lib" }
    ] }"#;

    let index: RegistryIndex = serde_json::from_str(json).unwrap();

    assert_eq!(index.components.len(), 2);
    assert_eq!(index.components[1].name, "utils");
    assert_eq!(index.components[1].component_type, "lib");
}

#[test]
fn test_validate_name_accepts_registry_names() {
    assert!(validate_name("button").is_ok());
    assert!(validate_name("alert-dialog").is_ok());
    assert!(validate_name("input_otp.v2").is_ok());
}

#[test]
fn test_validate_name_rejects_path_like_names() {
    assert!(validate_name("").is_err());
    assert!(validate_name("../secrets").is_err());
    assert!(validate_name("a/b").is_err());
    assert!(validate_name("Button").is_err());
    assert!(validate_name(".hidden").is_err());
    assert!(validate_name(&"a".repeat(65)).is_err());
}
