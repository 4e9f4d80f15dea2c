//! Repository Integration Tests
//!
//! ProductStorage against the in-memory store.

#[cfg(test)]
mod tests {
    use crate::config::CatalogConfig;
    use crate::domain::{Price, Product, ProductId};
    use crate::error::CatalogError;
    use crate::repository::{KeyValueStore, MemoryStore, ProductStorage};

    fn product(id: u64, name: &str, cents: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "Stationery".to_string(),
            price: Price::from_cents(cents),
            description: format!("{name} description"),
        }
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let storage = ProductStorage::new(MemoryStore::new());
        assert!(storage.load().expect("load failed").is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = ProductStorage::new(MemoryStore::new());
        let products = vec![product(1, "Pen", 150), product(2, "Ruler", 99)];

        storage.save(&products).expect("save failed");
        assert_eq!(storage.load().expect("load failed"), products);
    }

    #[test]
    fn test_resave_leaves_blob_unchanged() {
        let mut store = MemoryStore::new();
        let blob = r#"[{"id":1700000000000,"name":"Pen","category":"Stationery","price":"1.50","description":"Blue ink"}]"#;
        store.set("products", blob).unwrap();

        let mut storage = ProductStorage::new(store);
        let loaded = storage.load().unwrap();
        storage.save(&loaded).unwrap();

        assert_eq!(storage.store().get("products").unwrap().as_deref(), Some(blob));
    }

    #[test]
    fn test_save_empty_writes_empty_array() {
        let mut storage = ProductStorage::new(MemoryStore::new());
        storage.save(&[]).unwrap();
        assert_eq!(storage.store().get("products").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_malformed_blob_is_an_error() {
        let mut store = MemoryStore::new();
        store.set("products", "{not json").unwrap();

        let storage = ProductStorage::new(store);
        assert!(matches!(storage.load(), Err(CatalogError::Serialization(_))));
    }

    #[test]
    fn test_unreadable_price_loads_and_resaves_verbatim() {
        let mut store = MemoryStore::new();
        let blob = r#"[{"id":1,"name":"Pen","category":"S","price":"1,50","description":""},{"id":2,"name":"Ink","category":"S","price":"2.00","description":""}]"#;
        store.set("products", blob).unwrap();

        let mut storage = ProductStorage::new(store);
        let loaded = storage.load().expect("load failed");
        assert_eq!(loaded.len(), 2);
        assert!(loaded[0].price.is_stored());
        assert_eq!(loaded[0].price.cents(), None);
        assert_eq!(loaded[1].price, Price::from_cents(200));

        storage.save(&loaded).unwrap();
        assert_eq!(storage.store().get("products").unwrap().as_deref(), Some(blob));
    }

    #[test]
    fn test_short_price_is_not_rewritten_on_save() {
        let mut store = MemoryStore::new();
        let blob = r#"[{"id":1,"name":"Pen","category":"S","price":"5","description":""}]"#;
        store.set("products", blob).unwrap();

        let mut storage = ProductStorage::new(store);
        let loaded = storage.load().unwrap();
        assert_eq!(loaded[0].price.cents(), Some(500));
        assert_eq!(loaded[0].price.to_string(), "5");

        storage.save(&loaded).unwrap();
        assert_eq!(storage.store().get("products").unwrap().as_deref(), Some(blob));
    }

    #[test]
    fn test_clear_recovers_from_malformed_blob() {
        let mut store = MemoryStore::new();
        store.set("products", "{not json").unwrap();

        let mut storage = ProductStorage::new(store);
        assert!(storage.load().is_err());

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_configured_key() {
        let config = CatalogConfig {
            storage_key: "catalog:v2".to_string(),
            ..CatalogConfig::default()
        };
        let mut storage = ProductStorage::from_config(MemoryStore::new(), &config);
        storage.save(&[product(1, "Pen", 150)]).unwrap();

        assert_eq!(storage.key(), "catalog:v2");
        assert!(storage.store().get("catalog:v2").unwrap().is_some());
        assert!(storage.store().get("products").unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_blob() {
        let mut storage = ProductStorage::new(MemoryStore::new());
        storage.save(&[product(1, "Pen", 150)]).unwrap();
        storage.clear().unwrap();

        assert!(storage.store().is_empty());
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_quota_failure_surfaces_as_storage_error() {
        let mut storage = ProductStorage::new(MemoryStore::with_quota(16));
        let err = storage.save(&[product(1, "Pen", 150)]).unwrap_err();
        assert!(matches!(err, CatalogError::Storage(_)));
    }
}
