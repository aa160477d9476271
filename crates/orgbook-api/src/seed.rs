//! Demo dataset loaded at startup when the store is empty.
//!
//! Two buildings, two activity trees, two organizations. The bootstrap is
//! invoked by the server binary; nothing in the core assumes it has run.

use orgbook_core::{
  activity::NewActivity,
  building::NewBuilding,
  organization::{NewOrganization, Phone},
  store::DirectoryStore,
};

/// Populate the demo dataset unless the store already holds buildings.
///
/// Returns `true` when the seed ran.
pub async fn seed_if_empty<S: DirectoryStore>(
  store: &S,
) -> Result<bool, S::Error> {
  if store.count_buildings().await? > 0 {
    return Ok(false);
  }

  let building1 = store
    .add_building(NewBuilding {
      address:   "г. Москва, ул. Ленина 1, офис 3".to_string(),
      latitude:  55.755826,
      longitude: 37.617300,
    })
    .await?;
  let building2 = store
    .add_building(NewBuilding {
      address:   "г. Москва, ул. Гагарина 15".to_string(),
      latitude:  55.752565,
      longitude: 37.621258,
    })
    .await?;

  let food = store.add_activity(root("Еда")).await?;
  let meat = store.add_activity(child("Мясная продукция", food.id)).await?;
  let dairy =
    store.add_activity(child("Молочная продукция", food.id)).await?;
  let cars = store.add_activity(root("Автомобили")).await?;
  let trucks = store.add_activity(child("Грузовые", cars.id)).await?;
  let passenger = store.add_activity(child("Легковые", cars.id)).await?;
  let parts = store.add_activity(child("Запчасти", passenger.id)).await?;
  store.add_activity(child("Аксессуары", passenger.id)).await?;

  store
    .create_organization(NewOrganization {
      name:         "ООО Рога и Копыта".to_string(),
      building_id:  building1.id,
      phones:       vec![phone("2-222-222"), phone("3-333-333")],
      activity_ids: vec![meat.id, dairy.id],
    })
    .await?;
  store
    .create_organization(NewOrganization {
      name:         "АвтоМир".to_string(),
      building_id:  building2.id,
      phones:       vec![phone("8-923-666-13-13")],
      activity_ids: vec![trucks.id, parts.id],
    })
    .await?;

  Ok(true)
}

fn root(name: &str) -> NewActivity {
  NewActivity { name: name.to_string(), parent_id: None }
}

fn child(name: &str, parent_id: i64) -> NewActivity {
  NewActivity { name: name.to_string(), parent_id: Some(parent_id) }
}

fn phone(number: &str) -> Phone {
  Phone { number: number.to_string() }
}
