// ==========================================
// 商品 API 集成测试
// ==========================================
// 测试目标: 检索（过滤/排序/分页）与单条维护
// ==========================================


use product_catalog::api::{ApiError, ProductApi};
use product_catalog::domain::{ProductSearchRequest, ProductStatus};
use product_catalog::logging;
use rust_decimal_macros::dec;
use test_helpers::{create_test_context, sample_product, seed_categories};

fn setup() -> (test_helpers::TestContext, ProductApi) {
    logging::init_test();
    let ctx = create_test_context();
    seed_categories(&ctx);
    let api = ProductApi::new(ctx.product_repo.clone());
    (ctx, api)
}

#[test]
fn test_search_without_filters_matches_all() {
    let (_ctx, api) = setup();
    for i in 1..=3 {
        api.create(sample_product(
            &format!("P-{:03}", i),
            &format!("商品{}", i),
            "家電",
            dec!(1000),
        ))
        .unwrap();
    }

    let page = api.search(&ProductSearchRequest::default()).unwrap();
    assert!(page.success);
    assert_eq!(page.total, 3);
    assert_eq!(page.data.len(), 3);
    assert_eq!(page.current, 1);
    assert_eq!(page.page_size, 20);
}

#[test]
fn test_search_filters_combine_conjunctively() {
    let (_ctx, api) = setup();
    let mut cheap = sample_product("P-001", "ワイヤレスマウス", "家電", dec!(980));
    cheap.status = ProductStatus::Active;
    api.create(cheap).unwrap();

    let mut pricey = sample_product("P-002", "ワイヤレスキーボード", "家電", dec!(8900));
    pricey.status = ProductStatus::Inactive;
    api.create(pricey).unwrap();

    api.create(sample_product("B-001", "ワイヤレス入門", "書籍", dec!(2500)))
        .unwrap();

    let req = ProductSearchRequest {
        keyword: Some("ワイヤレス".to_string()),
        category: Some("家電".to_string()),
        status: Some("ACTIVE".to_string()),
        price_max: Some(dec!(5000)),
        ..Default::default()
    };
    let page = api.search(&req).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].product_code, "P-001");
}

#[test]
fn test_search_sorter_desc_and_fallbacks() {
    let (_ctx, api) = setup();
    api.create(sample_product("P-001", "安", "家電", dec!(100)))
        .unwrap();
    api.create(sample_product("P-002", "高", "家電", dec!(9000)))
        .unwrap();
    api.create(sample_product("P-003", "中", "家電", dec!(500)))
        .unwrap();

    // price,desc → 降序
    let req = ProductSearchRequest {
        sorter: Some("price,desc".to_string()),
        ..Default::default()
    };
    let page = api.search(&req).unwrap();
    assert_eq!(page.data[0].product_code, "P-002");

    // 方向大小写不敏感
    let req = ProductSearchRequest {
        sorter: Some("price,DESC".to_string()),
        ..Default::default()
    };
    let page = api.search(&req).unwrap();
    assert_eq!(page.data[0].product_code, "P-002");

    // 分段数不为 2 → 回落到 id 升序
    for bad in ["price", "price,desc,extra", ""] {
        let req = ProductSearchRequest {
            sorter: Some(bad.to_string()),
            ..Default::default()
        };
        let page = api.search(&req).unwrap();
        assert_eq!(page.data[0].product_code, "P-001", "sorter={:?}", bad);
    }
}

#[test]
fn test_search_invalid_sort_field_surfaces_as_database_error() {
    let (_ctx, api) = setup();
    api.create(sample_product("P-001", "商品", "家電", dec!(100)))
        .unwrap();

    let req = ProductSearchRequest {
        sorter: Some("nonexistentField,desc".to_string()),
        ..Default::default()
    };
    let result = api.search(&req);
    assert!(matches!(result, Err(ApiError::DatabaseError(_))));
}

#[test]
fn test_search_pagination_window() {
    let (_ctx, api) = setup();
    for i in 1..=25 {
        api.create(sample_product(
            &format!("P-{:03}", i),
            &format!("商品{}", i),
            "家電",
            dec!(100),
        ))
        .unwrap();
    }

    let req = ProductSearchRequest {
        current: 3,
        page_size: 10,
        ..Default::default()
    };
    let page = api.search(&req).unwrap();
    assert_eq!(page.total, 25);
    assert_eq!(page.data.len(), 5);
    assert_eq!(page.current, 3);
}

#[test]
fn test_find_by_id_not_found_is_business_error() {
    let (_ctx, api) = setup();
    product_catalog::i18n::set_locale("ja");

    let result = api.find_by_id(9999);
    match result {
        Err(ApiError::NotFound(msg)) => {
            assert!(msg.contains("ID=9999"), "message={}", msg);
        }
        other => panic!("Expected NotFound, got {:?}", other.map(|p| p.product_code)),
    }
}

#[test]
fn test_create_then_update_overwrites_all_fields() {
    let (_ctx, api) = setup();
    let created = api
        .create(sample_product("P-001", "旧名", "家電", dec!(100)))
        .unwrap();
    let id = created.id.unwrap();

    let mut replacement = sample_product("P-001R", "新名", "書籍", dec!(250));
    replacement.stock_quantity = 99;
    replacement.status = ProductStatus::Discontinued;
    replacement.description = Some("改訂版".to_string());

    let updated = api.update(id, replacement).unwrap();
    assert_eq!(updated.id, Some(id));
    // 単条维护允许变更商品编码（与导入的 Upsert 口径不同）
    assert_eq!(updated.product_code, "P-001R");
    assert_eq!(updated.product_name, "新名");
    assert_eq!(updated.category, "書籍");
    assert_eq!(updated.price, dec!(250));
    assert_eq!(updated.stock_quantity, 99);
    assert_eq!(updated.status, ProductStatus::Discontinued);
    assert_eq!(updated.description.as_deref(), Some("改訂版"));
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn test_update_missing_id_is_not_found() {
    let (_ctx, api) = setup();
    let result = api.update(777, sample_product("P-001", "商品", "家電", dec!(100)));
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[test]
fn test_delete_then_find_fails() {
    let (_ctx, api) = setup();
    let created = api
        .create(sample_product("P-001", "商品", "家電", dec!(100)))
        .unwrap();
    let id = created.id.unwrap();

    api.delete(id).unwrap();
    assert!(matches!(api.find_by_id(id), Err(ApiError::NotFound(_))));
    assert!(matches!(api.delete(id), Err(ApiError::NotFound(_))));
}

#[test]
fn test_create_duplicate_code_is_business_rule_violation() {
    let (_ctx, api) = setup();
    api.create(sample_product("P-001", "商品", "家電", dec!(100)))
        .unwrap();
    let result = api.create(sample_product("P-001", "別商品", "家電", dec!(200)));
    assert!(matches!(result, Err(ApiError::BusinessRuleViolation(_))));
}
