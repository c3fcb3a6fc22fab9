use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use anyhow::Result;

use super::setup_test_db;
use crate::{hive, hive_section, product, product_category};

fn unique_code() -> String {
    // codes are at most five characters wide
    format!("{:05}", Utc::now().timestamp_subsec_nanos() % 100_000)
}

#[tokio::test]
async fn test_hive_and_section_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let now = Utc::now().into();

    let row = hive::Model {
        id: 0,
        name: "Central".into(),
        address: "Kuprevicha 1-1".into(),
        code: unique_code(),
        is_deleted: false,
        created_by: 1,
        last_updated_by: 1,
        created: now,
        last_updated: now,
    };
    let created = hive::insert(&db, &row).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Central");

    let section = hive_section::Model {
        id: 0,
        name: "North".into(),
        code: unique_code(),
        hive_id: created.id,
        is_deleted: false,
        created_by: 1,
        last_updated_by: 1,
        created: now,
        last_updated: now,
    };
    let section = hive_section::insert(&db, &section).await?;
    let by_hive = hive_section::Entity::find()
        .filter(hive_section::Column::HiveId.eq(created.id))
        .all(&db)
        .await?;
    assert_eq!(by_hive.len(), 1);
    assert_eq!(by_hive[0].id, section.id);

    let mut changed = created.clone();
    changed.is_deleted = true;
    let saved = hive::save(&db, &changed).await?;
    assert!(saved.is_deleted);

    // the section goes with its hive
    hive::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(hive_section::Entity::find_by_id(section.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_category_description_and_product_price() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let now = Utc::now().into();

    let category = product_category::insert(&db, &product_category::Model {
        id: 0,
        name: "Bikes".into(),
        code: unique_code(),
        description: Some("Mountain and road bikes".into()),
        is_deleted: false,
        created_by: 1,
        last_updated_by: 1,
        created: now,
        last_updated: now,
    })
    .await?;
    let found = product_category::Entity::find_by_id(category.id).one(&db).await?.unwrap();
    assert_eq!(found.description.as_deref(), Some("Mountain and road bikes"));

    let product = product::insert(&db, &product::Model {
        id: 0,
        name: "Trail 29".into(),
        code: unique_code(),
        category_id: category.id,
        description: None,
        manufacturer_code: Some("TR-29".into()),
        price: Decimal::new(129_999, 2),
        is_deleted: false,
        created_by: 1,
        last_updated_by: 1,
        created: now,
        last_updated: now,
    })
    .await?;
    let found = product::Entity::find_by_id(product.id).one(&db).await?.unwrap();
    assert_eq!(found.price, Decimal::new(129_999, 2));

    product_category::Entity::delete_by_id(category.id).exec(&db).await?;
    Ok(())
}
