//! Integration tests for `SqliteStore` — and the `Directory` query engine
//! on top of it — against an in-memory database.

use orgbook_core::{
  activity::{Activity, ActivityId, NewActivity},
  building::{Building, NewBuilding},
  directory::Directory,
  error::Error as CoreError,
  geo::GeoPoint,
  organization::{NewOrganization, Organization, Phone},
  store::DirectoryStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn building(s: &SqliteStore, address: &str, lat: f64, lon: f64) -> Building {
  s.add_building(NewBuilding {
    address:   address.to_string(),
    latitude:  lat,
    longitude: lon,
  })
  .await
  .unwrap()
}

async fn activity(
  s: &SqliteStore,
  name: &str,
  parent_id: Option<ActivityId>,
) -> Activity {
  s.add_activity(NewActivity { name: name.to_string(), parent_id })
    .await
    .unwrap()
}

async fn organization(
  s: &SqliteStore,
  name: &str,
  building_id: i64,
  phones: &[&str],
  activity_ids: &[ActivityId],
) -> Organization {
  s.create_organization(NewOrganization {
    name: name.to_string(),
    building_id,
    phones: phones
      .iter()
      .map(|n| Phone { number: n.to_string() })
      .collect(),
    activity_ids: activity_ids.to_vec(),
  })
  .await
  .unwrap()
}

// ─── Buildings & activities ──────────────────────────────────────────────────

#[tokio::test]
async fn add_building_assigns_sequential_ids() {
  let s = store().await;
  assert_eq!(s.count_buildings().await.unwrap(), 0);

  let a = building(&s, "1 First St", 10.0, 20.0).await;
  let b = building(&s, "2 Second St", 11.0, 21.0).await;

  assert_eq!(a.id, 1);
  assert_eq!(b.id, 2);
  assert_eq!(s.count_buildings().await.unwrap(), 2);
}

#[tokio::test]
async fn add_activity_keeps_parent_link() {
  let s = store().await;
  let root = activity(&s, "Food", None).await;
  let child = activity(&s, "Meat", Some(root.id)).await;

  assert_eq!(root.parent_id, None);
  assert_eq!(child.parent_id, Some(root.id));

  let all = s.list_activities().await.unwrap();
  assert_eq!(all, vec![root, child]);
}

#[tokio::test]
async fn list_activities_in_id_order() {
  let s = store().await;
  let cars = activity(&s, "Cars", None).await;
  let food = activity(&s, "Food", None).await;
  let meat = activity(&s, "Meat", Some(food.id)).await;

  let ids: Vec<_> =
    s.list_activities().await.unwrap().iter().map(|a| a.id).collect();
  assert_eq!(ids, vec![cars.id, food.id, meat.id]);
}

// ─── Organization create / get ───────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_round_trip() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;
  let food = activity(&s, "Food", None).await;
  let meat = activity(&s, "Meat", Some(food.id)).await;

  let created = organization(
    &s,
    "Acme Foods",
    b.id,
    &["555-0101", "555-0102"],
    &[meat.id],
  )
  .await;

  assert_eq!(created.name, "Acme Foods");
  assert_eq!(created.building_id, b.id);
  assert_eq!(created.building.as_ref(), Some(&b));
  assert_eq!(created.phones.len(), 2);
  assert_eq!(created.activities.len(), 1);
  assert_eq!(created.activities[0].name, "Meat");

  // Field-for-field equal to a fresh fetch.
  let fetched = s.get_organization(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_organization_missing_returns_none() {
  let s = store().await;
  assert!(s.get_organization(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn create_skips_unknown_activity_ids() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;
  let food = activity(&s, "Food", None).await;

  let created =
    organization(&s, "Acme", b.id, &["555-0101"], &[food.id, 4242]).await;

  // Only the resolvable id is attached; the unknown one vanishes quietly.
  let ids: Vec<_> = created.activities.iter().map(|a| a.id).collect();
  assert_eq!(ids, vec![food.id]);

  let fetched = s.get_organization(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.activities, created.activities);
  assert_eq!(fetched.phones, created.phones);
}

#[tokio::test]
async fn create_accepts_dangling_building_reference() {
  let s = store().await;
  let created = organization(&s, "Ghost Tenant", 777, &[], &[]).await;

  assert_eq!(created.building_id, 777);
  assert!(created.building.is_none());

  let fetched = s.get_organization(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_with_duplicate_activity_ids_links_once() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;
  let food = activity(&s, "Food", None).await;

  let created =
    organization(&s, "Acme", b.id, &[], &[food.id, food.id]).await;
  assert_eq!(created.activities.len(), 1);
}

// ─── Query surface ───────────────────────────────────────────────────────────

#[tokio::test]
async fn organizations_in_building_filters_by_building() {
  let s = store().await;
  let b1 = building(&s, "1 First St", 10.0, 20.0).await;
  let b2 = building(&s, "2 Second St", 11.0, 21.0).await;

  let acme = organization(&s, "Acme", b1.id, &[], &[]).await;
  organization(&s, "Zenith", b2.id, &[], &[]).await;

  let in_b1 = s.organizations_in_building(b1.id).await.unwrap();
  assert_eq!(in_b1, vec![acme]);

  // Unknown building: empty list, not an error.
  assert!(s.organizations_in_building(555).await.unwrap().is_empty());
}

#[tokio::test]
async fn organizations_with_activity_matches_direct_tags_only() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;
  let food = activity(&s, "Food", None).await;
  let meat = activity(&s, "Meat", Some(food.id)).await;

  let acme = organization(&s, "Acme", b.id, &[], &[meat.id]).await;

  let tagged = s.organizations_with_activity(meat.id).await.unwrap();
  assert_eq!(tagged, vec![acme]);

  // Tagged with the child, not the root.
  assert!(s.organizations_with_activity(food.id).await.unwrap().is_empty());
  // Unknown activity: empty list, not an error.
  assert!(s.organizations_with_activity(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn organizations_with_any_activity_unions_distinct() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;
  let meat = activity(&s, "Meat", None).await;
  let dairy = activity(&s, "Dairy", None).await;
  let cars = activity(&s, "Cars", None).await;

  let both = organization(&s, "Acme", b.id, &[], &[meat.id, dairy.id]).await;
  let wheels = organization(&s, "Zenith", b.id, &[], &[cars.id]).await;

  // An organization tagged with two matching ids appears once.
  let hits = s
    .organizations_with_any_activity(&[meat.id, dairy.id])
    .await
    .unwrap();
  assert_eq!(hits, vec![both.clone()]);

  let hits = s
    .organizations_with_any_activity(&[meat.id, cars.id])
    .await
    .unwrap();
  assert_eq!(hits, vec![both, wheels]);

  let none = s.organizations_with_any_activity(&[]).await.unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn list_organizations_returns_all_in_id_order() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;
  let acme = organization(&s, "Acme", b.id, &[], &[]).await;
  let zenith = organization(&s, "Zenith", b.id, &[], &[]).await;

  assert_eq!(s.list_organizations().await.unwrap(), vec![acme, zenith]);
}

// ─── Query engine ────────────────────────────────────────────────────────────

#[tokio::test]
async fn engine_by_id_not_found_is_an_error() {
  let s = store().await;
  let directory = Directory::new(s);

  let err = directory.organization_by_id(9999).await.unwrap_err();
  assert!(matches!(err, CoreError::OrganizationNotFound(9999)));
}

#[tokio::test]
async fn engine_radius_filters_and_grows_monotonically() {
  let s = store().await;
  // ~440 m apart in central Moscow; the third is ~635 km away.
  let near = building(&s, "Near", 55.755826, 37.617300).await;
  let close = building(&s, "Close", 55.752565, 37.621258).await;
  let far = building(&s, "Far", 59.938784, 30.314997).await;

  let org_near = organization(&s, "Near Org", near.id, &[], &[]).await;
  let org_close = organization(&s, "Close Org", close.id, &[], &[]).await;
  let org_far = organization(&s, "Far Org", far.id, &[], &[]).await;

  let directory = Directory::new(s);
  let center = GeoPoint { latitude: 55.755826, longitude: 37.617300 };

  let within_100 = directory
    .organizations_within_radius(center, 100.0)
    .await
    .unwrap();
  assert_eq!(within_100, vec![org_near.clone()]);

  let within_1000 = directory
    .organizations_within_radius(center, 1000.0)
    .await
    .unwrap();
  assert_eq!(within_1000, vec![org_near.clone(), org_close.clone()]);

  let within_1_000_000 = directory
    .organizations_within_radius(center, 1_000_000.0)
    .await
    .unwrap();
  assert_eq!(within_1_000_000, vec![org_near, org_close, org_far]);
}

#[tokio::test]
async fn engine_radius_skips_dangling_buildings() {
  let s = store().await;
  organization(&s, "Ghost Tenant", 777, &[], &[]).await;

  let directory = Directory::new(s);
  let center = GeoPoint { latitude: 0.0, longitude: 0.0 };
  let hits = directory
    .organizations_within_radius(center, f64::MAX)
    .await
    .unwrap();
  assert!(hits.is_empty());
}

#[tokio::test]
async fn engine_tree_search_walks_closure_and_dedupes() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;

  let food = activity(&s, "Food", None).await;
  let meat = activity(&s, "Meat", Some(food.id)).await;
  let dairy = activity(&s, "Dairy", Some(food.id)).await;
  let cheese = activity(&s, "Cheese", Some(dairy.id)).await;
  // Level 4 — beyond the closure bound.
  let blue = activity(&s, "Blue cheese", Some(cheese.id)).await;

  // Tagged twice inside the closure: must appear once.
  let acme =
    organization(&s, "Acme", b.id, &[], &[meat.id, dairy.id]).await;
  let artisan = organization(&s, "Artisan", b.id, &[], &[cheese.id]).await;
  // Only tagged at level 4: not reachable through the tree search.
  let too_deep = organization(&s, "Too Deep", b.id, &[], &[blue.id]).await;

  let directory = Directory::new(s);

  let hits = directory.search_by_activity_tree("food").await.unwrap();
  assert_eq!(hits, vec![acme, artisan]);

  let ids: Vec<_> = hits.iter().map(|o| o.id).collect();
  assert!(!ids.contains(&too_deep.id));
}

#[tokio::test]
async fn engine_tree_search_without_matching_root_is_empty() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;
  let food = activity(&s, "Food", None).await;
  let meat = activity(&s, "Meat", Some(food.id)).await;
  organization(&s, "Acme", b.id, &[], &[meat.id]).await;

  let directory = Directory::new(s);

  // No root at all by that name.
  let hits = directory.search_by_activity_tree("Plumbing").await.unwrap();
  assert!(hits.is_empty());

  // "Meat" names an activity, but not a root one — still a miss.
  let hits = directory.search_by_activity_tree("Meat").await.unwrap();
  assert!(hits.is_empty());
}

#[tokio::test]
async fn engine_name_search_is_case_insensitive_substring() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;
  let acme = organization(&s, "Acme Foods", b.id, &[], &[]).await;
  organization(&s, "Zenith", b.id, &[], &[]).await;

  let directory = Directory::new(s);

  let hits = directory.search_by_name("acme").await.unwrap();
  assert_eq!(hits, vec![acme.clone()]);

  let hits = directory.search_by_name("FOOD").await.unwrap();
  assert_eq!(hits, vec![acme]);

  let hits = directory.search_by_name("nothing here").await.unwrap();
  assert!(hits.is_empty());
}

#[tokio::test]
async fn engine_create_returns_assembled_organization() {
  let s = store().await;
  let b = building(&s, "1 First St", 10.0, 20.0).await;
  let food = activity(&s, "Food", None).await;

  let directory = Directory::new(s);
  let created = directory
    .create(NewOrganization {
      name:         "Acme".to_string(),
      building_id:  b.id,
      phones:       vec![Phone { number: "555-0101".to_string() }],
      activity_ids: vec![food.id, 4242],
    })
    .await
    .unwrap();

  let fetched = directory.organization_by_id(created.id).await.unwrap();
  assert_eq!(fetched, created);
  assert_eq!(fetched.phones, vec![Phone { number: "555-0101".to_string() }]);
  let ids: Vec<_> = fetched.activities.iter().map(|a| a.id).collect();
  assert_eq!(ids, vec![food.id]);
}
