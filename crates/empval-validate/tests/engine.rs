//! Engine and batch evaluation tests: ordering, isolation, structural errors.

use empval_model::{Record, RecordStatus};
use empval_validate::ValidationEngine;
use serde_json::{Value, json};

fn record(value: Value) -> Record {
    serde_json::from_value(value).expect("record")
}

fn valid_default_record() -> Record {
    record(json!({
        "cidade": "Fortaleza",
        "construtora": "Beta",
        "area-do-terreno": 1000,
        "numero-de-torres": 2,
        "altura-da-torre": 20,
        "area-da-torre": 200,
        "area-de-lazer": 150,
    }))
}

#[test]
fn record_satisfying_every_rule_is_valid() {
    let engine = ValidationEngine::new();
    let erros = engine.validate(&valid_default_record()).unwrap();
    assert!(erros.is_empty());
}

#[test]
fn violations_come_back_in_resolution_order() {
    // São Paulo resolves [r2, r3]; Alpha appends its rule. All three fail
    // here, so the messages must come back in exactly that order.
    let engine = ValidationEngine::new();
    let rec = record(json!({
        "cidade": "São Paulo",
        "construtora": "Alpha",
        "area-do-terreno": 1000,
        "numero-de-torres": 2,
        "area-da-torre": 500,
        "altura-da-torre": 10,
    }));
    let erros = engine.validate(&rec).unwrap();
    assert_eq!(
        erros,
        vec![
            "Área total das torres deve ser inferior a 80% da área do terreno".to_string(),
            "Precisa de área de lazer".to_string(),
            "Alpha: precisa de área de lazer (sempre)".to_string(),
        ]
    );
}

#[test]
fn missing_field_surfaces_as_structural_error() {
    let engine = ValidationEngine::new();
    let rec = record(json!({
        "cidade": "Fortaleza",
        "numero-de-torres": 1,
        "altura-da-torre": 10,
        "area-da-torre": 100,
    }));
    let error = engine.validate(&rec).unwrap_err();
    assert_eq!(error.field(), "area-do-terreno");
}

// --- batch evaluation ---

#[test]
fn empty_batch_yields_empty_output() {
    let engine = ValidationEngine::new();
    assert!(engine.evaluate_batch(&[]).is_empty());
}

#[test]
fn batch_preserves_input_order_and_length() {
    let engine = ValidationEngine::new();
    let records = vec![
        valid_default_record(),
        record(json!({
            "cidade": "Boituva",
            "construtora": "Gamma",
            "area-do-terreno": 1000,
            "numero-de-torres": 6,
            "altura-da-torre": 10,
            "area-da-torre": 100,
            "area-de-lazer": 150,
        })),
        valid_default_record(),
    ];
    let results = engine.evaluate_batch(&records);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].status, RecordStatus::Valido);
    assert_eq!(results[1].status, RecordStatus::Invalido);
    assert_eq!(results[1].cidade.as_deref(), Some("Boituva"));
    assert_eq!(results[1].construtora.as_deref(), Some("Gamma"));
    assert_eq!(
        results[1].erros,
        vec!["Boituva: não pode haver mais de 5 torres no terreno".to_string()]
    );
    assert_eq!(results[2].status, RecordStatus::Valido);
}

#[test]
fn structural_error_is_confined_to_its_record() {
    let engine = ValidationEngine::new();
    let records = vec![
        valid_default_record(),
        // No land area, and the default set's r2 needs it.
        record(json!({
            "cidade": "Fortaleza",
            "numero-de-torres": 1,
            "altura-da-torre": 10,
            "area-da-torre": 100,
        })),
        valid_default_record(),
    ];
    let results = engine.evaluate_batch(&records);
    assert_eq!(results.len(), 3);

    assert_eq!(results[1].status, RecordStatus::Invalido);
    assert!(results[1].erros.is_empty());
    let estrutural = results[1].erro_estrutural.as_deref().expect("structural");
    assert!(estrutural.contains("area-do-terreno"));

    // Neighbours are untouched.
    assert!(results[0].is_valid());
    assert!(results[2].is_valid());
    assert!(results[0].erro_estrutural.is_none());
}

#[test]
fn non_numeric_field_is_structural_not_a_violation() {
    let engine = ValidationEngine::new();
    let rec = record(json!({
        "cidade": "Rio de Janeiro",
        "altura-da-torre": "vinte",
    }));
    let results = engine.evaluate_batch(std::slice::from_ref(&rec));
    assert_eq!(results[0].status, RecordStatus::Invalido);
    assert!(results[0].erros.is_empty());
    assert!(
        results[0]
            .erro_estrutural
            .as_deref()
            .unwrap()
            .contains("altura-da-torre")
    );
}

#[test]
fn guaratingueta_record_uses_the_height_by_towers_rule() {
    let engine = ValidationEngine::new();
    let rec = record(json!({
        // 29m would violate the flat r1 cap, but Guaratinguetá's set does
        // not include r1; with 2 towers the limit is 25m.
        "cidade": "Guaratinguetá",
        "area-do-terreno": 10_000,
        "numero-de-torres": 2,
        "altura-da-torre": 29,
        "area-da-torre": 100,
        "area-de-lazer": 1500,
    }));
    let erros = engine.validate(&rec).unwrap();
    assert_eq!(erros.len(), 1);
    assert!(erros[0].contains("2 torres"));
    assert!(erros[0].contains("25m"));
}

#[test]
fn batch_report_counts_and_timestamps() {
    let engine = ValidationEngine::new();
    let report = engine.evaluate_batch_report(&[valid_default_record()]);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.valid_count(), 1);
    assert!(!report.has_invalid());
}
