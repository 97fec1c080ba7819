#![allow(dead_code)]

use padoca_inventory::{InMemoryStorage, InventoryStore, NewProduct, RecordingSink};

pub fn inventory() -> (InventoryStore<InMemoryStorage>, InMemoryStorage, RecordingSink) {
    let storage = InMemoryStorage::new();
    let sink = RecordingSink::new();
    let mut store = InventoryStore::new(storage.clone()).with_sink(sink.clone());
    store.initialize().unwrap();
    (store, storage, sink)
}

pub fn pao_frances() -> NewProduct {
    NewProduct::new("Pão Francês")
        .quantity(10)
        .min_quantity(5)
        .unit("unidades")
        .category("pães")
}

pub fn bakery_shelf() -> Vec<NewProduct> {
    vec![
        pao_frances(),
        NewProduct::new("Farinha de Trigo")
            .quantity(3)
            .min_quantity(10)
            .unit("kg")
            .category("matéria-prima"),
        NewProduct::new("Sonho")
            .quantity(12)
            .min_quantity(4)
            .category("doces"),
        NewProduct::new("Leite")
            .quantity(6)
            .min_quantity(6)
            .unit("l")
            .category("bebidas"),
    ]
}
