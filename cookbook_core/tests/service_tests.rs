use cookbook_core::service::{self, Request, Response};
use cookbook_core::{Cookbook, ErrorKind, ExpandLimits, IngredientQuantity};
use serde_json::{Value, json};

fn create(cookbook: &Cookbook, payload: Value) {
    service::create_entry(cookbook, &payload).unwrap();
}

fn skibidi_cookbook() -> Cookbook {
    let cookbook = Cookbook::new();
    create(
        &cookbook,
        json!({
            "type": "recipe",
            "name": "Skibidi",
            "requiredItems": [{"name": "Bruh", "quantity": 1}]
        }),
    );
    create(
        &cookbook,
        json!({
            "type": "recipe",
            "name": "Bruh",
            "requiredItems": [
                {"name": "Nothing", "quantity": 2},
                {"name": "Egg", "quantity": 3}
            ]
        }),
    );
    create(
        &cookbook,
        json!({"type": "ingredient", "name": "Egg", "cookTime": 5}),
    );
    cookbook
}

#[test]
fn test_entries_may_reference_missing_items_until_summary() {
    let cookbook = skibidi_cookbook();

    let err = service::summary(&cookbook, "Skibidi").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    create(
        &cookbook,
        json!({"type": "ingredient", "name": "Nothing", "cookTime": 1}),
    );
    let summary = service::summary(&cookbook, "Skibidi").unwrap();
    assert_eq!(summary.cook_time, 17);
    assert_eq!(
        summary.ingredients,
        vec![
            IngredientQuantity {
                name: "Nothing".to_string(),
                quantity: 2
            },
            IngredientQuantity {
                name: "Egg".to_string(),
                quantity: 3
            },
        ]
    );
}

#[test]
fn test_summary_of_ingredient_rejected() {
    let cookbook = skibidi_cookbook();
    let err = service::summary(&cookbook, "Egg").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WrongType);
}

#[test]
fn test_duplicate_entry_rejected_and_first_kept() {
    let cookbook = skibidi_cookbook();

    let err = service::create_entry(
        &cookbook,
        &json!({"type": "ingredient", "name": "Bruh", "cookTime": 1}),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    assert_eq!(cookbook.len().unwrap(), 3);
    assert_eq!(
        cookbook.lookup("Bruh").unwrap().entry_type(),
        cookbook_core::EntryType::Recipe
    );
}

#[test]
fn test_cyclic_cookbook_fails_cleanly() {
    let cookbook = Cookbook::with_limits(ExpandLimits {
        max_depth: 8,
        max_visits: 1_000,
    });
    create(
        &cookbook,
        json!({"type": "recipe", "name": "Chicken", "requiredItems": [{"name": "Egg", "quantity": 1}]}),
    );
    create(
        &cookbook,
        json!({"type": "recipe", "name": "Egg", "requiredItems": [{"name": "Chicken", "quantity": 1}]}),
    );

    let err = service::summary(&cookbook, "Chicken").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CycleOrDepthExceeded);
}

#[test]
fn test_session_requests() {
    let cookbook = Cookbook::new();
    let lines = [
        r#"{"op": "parse", "input": "alpHa-alFRedo"}"#,
        r#"{"op": "entry", "entry": {"type": "ingredient", "name": "Cream", "cookTime": 2}}"#,
        r#"{"op": "entry", "entry": {"type": "recipe", "name": "Sauce", "requiredItems": [{"name": "Cream", "quantity": 4}]}}"#,
        r#"{"op": "entry", "entry": {"type": "ingredient", "name": "Cream", "cookTime": 9}}"#,
        r#"{"op": "summary", "name": "Sauce"}"#,
    ];

    let responses: Vec<Value> = lines
        .iter()
        .map(|line| {
            let request: Request = serde_json::from_str(line).unwrap();
            serde_json::to_value(service::handle(&cookbook, &request)).unwrap()
        })
        .collect();

    assert_eq!(responses[0], json!({"msg": "Alpha Alfredo"}));
    assert_eq!(responses[1], json!({}));
    assert_eq!(responses[2], json!({}));
    assert_eq!(responses[3]["kind"], json!("duplicate_name"));
    assert_eq!(
        responses[4],
        json!({
            "name": "Sauce",
            "cookTime": 8,
            "ingredients": [{"name": "Cream", "quantity": 4}]
        })
    );
}

#[test]
fn test_handle_parse_rejects_symbols() {
    let cookbook = Cookbook::new();
    let response = service::handle(
        &cookbook,
        &Request::Parse {
            input: Some("123 !!".to_string()),
        },
    );
    assert!(matches!(
        response,
        Response::Error {
            kind: ErrorKind::InvalidInput,
            ..
        }
    ));
}

#[test]
fn test_cook_time_outside_i64_rejected_at_creation() {
    let cookbook = Cookbook::new();
    let err = service::create_entry(
        &cookbook,
        &json!({"type": "ingredient", "name": "Big", "cookTime": u64::MAX}),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    create(
        &cookbook,
        json!({"type": "ingredient", "name": "Big", "cookTime": i64::MAX}),
    );
    create(
        &cookbook,
        json!({"type": "recipe", "name": "R", "requiredItems": [{"name": "Big", "quantity": 0}]}),
    );
    let summary = service::summary(&cookbook, "R").unwrap();
    assert_eq!(summary.cook_time, 0);
}

#[test]
fn test_deep_chain_with_large_depth_limit() {
    let cookbook = Cookbook::with_limits(ExpandLimits {
        max_depth: 1_000_000,
        max_visits: 100_000,
    });
    let length = 50_000;
    for i in 0..length {
        let next = if i + 1 == length {
            "Salt".to_string()
        } else {
            format!("L{}", i + 1)
        };
        create(
            &cookbook,
            json!({"type": "recipe", "name": format!("L{}", i), "requiredItems": [{"name": next, "quantity": 1}]}),
        );
    }
    create(
        &cookbook,
        json!({"type": "ingredient", "name": "Salt", "cookTime": 1}),
    );

    let summary = service::summary(&cookbook, "L0").unwrap();
    assert_eq!(summary.cook_time, 1);
    assert_eq!(summary.ingredients.len(), 1);
}
