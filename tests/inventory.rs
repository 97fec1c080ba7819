mod support;

use std::collections::HashSet;

use padoca_inventory::{
    FileStorage, InventoryError, InventoryStore, KeyValueStore, NewProduct, Notification,
    ProductId, ProductPatch, RecordingSink, DEFAULT_INVENTORY_KEY,
};
use support::{bakery_shelf, inventory, pao_frances};

#[test]
fn pao_frances_lifecycle() {
    let (mut store, _storage, _sink) = inventory();
    assert!(store.is_empty());

    let pao = store.add_product(pao_frances()).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.list_low_stock().is_empty());

    store
        .update_product(&pao.id, ProductPatch::new().quantity(3))
        .unwrap();
    let low = store.list_low_stock();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].id, pao.id);
    assert_eq!(low[0].quantity, 3);

    store.remove_product(&pao.id).unwrap();
    assert!(store.is_empty());
    assert!(store.list_low_stock().is_empty());
}

#[test]
fn adds_keep_call_order_with_unique_ids() {
    let (mut store, _, _) = inventory();
    let mut added = Vec::new();
    for _ in 0..50 {
        for fields in bakery_shelf() {
            added.push(store.add_product(fields).unwrap());
        }
    }

    assert_eq!(store.products(), added.as_slice());
    let ids: HashSet<&ProductId> = store.products().iter().map(|p| &p.id).collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn update_changes_only_the_given_field_of_one_record() {
    let (mut store, _, _) = inventory();
    for fields in bakery_shelf() {
        store.add_product(fields).unwrap();
    }
    let before = store.products().to_vec();
    let target = before[2].id.clone();

    let updated = store
        .update_product(&target, ProductPatch::new().quantity(1))
        .unwrap()
        .unwrap();

    assert_eq!(updated.quantity, 1);
    for (old, new) in before.iter().zip(store.products()) {
        if old.id == target {
            assert_eq!(new.name, old.name);
            assert_eq!(new.min_quantity, old.min_quantity);
            assert_eq!(new.unit, old.unit);
            assert_eq!(new.category, old.category);
            assert_eq!(new.quantity, 1);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn update_with_unknown_id_changes_nothing() {
    let (mut store, _, _) = inventory();
    for fields in bakery_shelf() {
        store.add_product(fields).unwrap();
    }
    let before = store.products().to_vec();

    let result = store
        .update_product(&ProductId::from("does-not-exist"), ProductPatch::new().quantity(0))
        .unwrap();

    assert!(result.is_none());
    assert_eq!(store.products(), before.as_slice());
}

#[test]
fn remove_keeps_relative_order_of_others() {
    let (mut store, _, _) = inventory();
    for fields in bakery_shelf() {
        store.add_product(fields).unwrap();
    }
    let before = store.products().to_vec();

    let removed = store.remove_product(&before[1].id).unwrap().unwrap();

    assert_eq!(removed, before[1]);
    let expected: Vec<_> = before
        .iter()
        .filter(|p| p.id != removed.id)
        .cloned()
        .collect();
    assert_eq!(store.products(), expected.as_slice());
}

#[test]
fn low_stock_tracks_quantity_changes() {
    let (mut store, _, _) = inventory();
    let products: Vec<_> = bakery_shelf()
        .into_iter()
        .map(|fields| store.add_product(fields).unwrap())
        .collect();

    // Farinha (3 <= 10) and Leite (6 <= 6) start low
    let low: Vec<&str> = store.list_low_stock().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(low, vec!["Farinha de Trigo", "Leite"]);

    store
        .update_product(&products[1].id, ProductPatch::new().quantity(11))
        .unwrap();
    store
        .update_product(&products[0].id, ProductPatch::new().quantity(4))
        .unwrap();

    let low: Vec<&str> = store.list_low_stock().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(low, vec!["Pão Francês", "Leite"]);

    for product in store.products() {
        let listed = store.list_low_stock().iter().any(|p| p.id == product.id);
        assert_eq!(listed, product.quantity <= product.min_quantity);
    }
}

#[test]
fn reload_matches_last_mutation() {
    let (mut store, storage, _) = inventory();
    let products: Vec<_> = bakery_shelf()
        .into_iter()
        .map(|fields| store.add_product(fields).unwrap())
        .collect();
    store
        .update_product(
            &products[0].id,
            ProductPatch::new().name("Pão Francês Integral").unit("pacotes"),
        )
        .unwrap();
    store.remove_product(&products[3].id).unwrap();

    let mut reloaded = InventoryStore::new(storage);
    reloaded.initialize().unwrap();

    assert_eq!(reloaded.products(), store.products());
}

#[test]
fn file_storage_survives_restart() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let added = {
        let mut store = InventoryStore::new(FileStorage::new(dir.path()));
        store.initialize().unwrap();
        store.add_product(pao_frances()).unwrap()
    };

    let mut store = InventoryStore::new(FileStorage::new(dir.path()));
    store.initialize().unwrap();
    assert_eq!(store.products(), &[added]);
}

#[test]
fn persisted_layout_is_a_camel_case_array() {
    let (mut store, storage, _) = inventory();
    let pao = store.add_product(pao_frances()).unwrap();

    let payload = storage.get(DEFAULT_INVENTORY_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": pao.id.as_str(),
            "name": "Pão Francês",
            "quantity": 10,
            "minQuantity": 5,
            "unit": "unidades",
            "category": "pães",
        }])
    );
}

#[test]
fn loads_records_written_by_the_browser_app() {
    let (_, storage, _) = inventory();
    storage
        .set(
            DEFAULT_INVENTORY_KEY,
            r#"[{"id":"1712345678901","name":"Bolo de Cenoura","quantity":2,"minQuantity":3,"unit":"unidades","category":"bolos"}]"#,
        )
        .unwrap();

    let sink = RecordingSink::new();
    let mut store = InventoryStore::new(storage).with_sink(sink.clone());
    store.initialize().unwrap();

    let bolo = store.get(&ProductId::from("1712345678901")).unwrap();
    assert_eq!(bolo.name, "Bolo de Cenoura");
    assert!(bolo.is_low_stock());
    assert_eq!(sink.recorded().len(), 1);
}

#[test]
fn malformed_payloads_start_empty() {
    for payload in ["", "null", "{}", "[1,2]", r#"[{"id":"1"}]"#, "not json"] {
        let (_, storage, _) = inventory();
        storage.set(DEFAULT_INVENTORY_KEY, payload).unwrap();

        let mut store = InventoryStore::new(storage);
        store.initialize().unwrap();
        assert!(store.is_empty(), "payload {payload:?} should load as empty");
    }
}

#[test]
fn blank_name_is_rejected_before_persisting() {
    let (mut store, storage, sink) = inventory();

    let err = store.add_product(NewProduct::new("")).unwrap_err();

    assert!(matches!(err, InventoryError::Validation(_)));
    assert!(storage.get(DEFAULT_INVENTORY_KEY).unwrap().is_none());
    assert!(sink.recorded().is_empty());
}

#[test]
fn notifications_carry_toast_texts() {
    let (mut store, _, sink) = inventory();
    let pao = store.add_product(pao_frances()).unwrap();
    store
        .update_product(&pao.id, ProductPatch::new().quantity(5))
        .unwrap();
    store.remove_product(&pao.id).unwrap();

    let recorded = sink.recorded();
    let descriptions: Vec<String> = recorded.iter().map(Notification::description).collect();
    assert_eq!(
        descriptions,
        vec![
            "Pão Francês foi adicionado ao estoque.",
            "Pão Francês está com estoque baixo (5 unidades).",
            "Pão Francês foi removido do estoque.",
        ]
    );
}

#[test]
fn stock_report_summarizes_low_products() {
    let (mut store, _, _) = inventory();
    assert_eq!(store.stock_report().title(), "Estoque em dia");

    for fields in bakery_shelf() {
        store.add_product(fields).unwrap();
    }

    let report = store.stock_report();
    assert_eq!(report.title(), "2 produtos com estoque baixo");
    assert_eq!(report.description(), "Farinha de Trigo: 3 kg, Leite: 6 l");
}

#[cfg(feature = "emitter")]
#[test]
fn emitter_sink_receives_store_notifications() {
    use std::sync::{Arc, Mutex};

    use padoca_inventory::{EmitterSink, EventEmitter, InMemoryStorage};

    let added = Arc::new(Mutex::new(Vec::new()));
    let mut sink = EmitterSink::new(EventEmitter::new());
    let added_clone = added.clone();
    sink.on("added", move |payload: String| {
        added_clone.lock().unwrap().push(payload);
    });

    let mut store = InventoryStore::new(InMemoryStorage::new()).with_sink(sink);
    store.initialize().unwrap();
    store.add_product(pao_frances()).unwrap();

    let added = added.lock().unwrap();
    assert_eq!(added.len(), 1);
    let notification: Notification = serde_json::from_str(&added[0]).unwrap();
    assert_eq!(
        notification,
        Notification::Added {
            name: "Pão Francês".into()
        }
    );
}
