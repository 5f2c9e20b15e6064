//! Integration tests for specifications evaluated by in-memory repositories.


use std::sync::Arc;
use std::thread;

use products::{names, named_like, one_two_three, CatalogEntry, Product};
use specified_rust::{
    Count, Exists, GetById, InMemoryRepository, ListAll, Repository, Specification,
    SpecificationEvaluator,
};

#[test]
fn get_by_id_returns_matching_product() {
    let repo = one_two_three();

    let product = repo.get_by_id(&Specification::by_id(2));
    assert_eq!(product, Some(&Product::new(2, "two")));
}

#[test]
fn get_by_id_unknown_id_is_not_found() {
    let repo = one_two_three();

    assert_eq!(repo.get_by_id(&Specification::by_id(99)), None);
}

#[test]
fn list_all_without_criteria_keeps_order() {
    let repo = one_two_three();

    let all = repo.list_all(&Specification::all());
    assert_eq!(names(&all), vec!["1.one", "2.two", "3.three"]);
}

#[test]
fn empty_collection_lists_nothing_and_finds_nothing() {
    let repo = InMemoryRepository::<Product>::new(Vec::new());

    assert!(repo.list_all(&Specification::all()).is_empty());
    assert_eq!(repo.get_by_id(&Specification::all()), None);
}

#[test]
fn duplicate_ids_are_all_listed_and_first_is_returned() {
    let repo = InMemoryRepository::new(vec![Product::new(1, "a"), Product::new(1, "b")]);
    let spec = Specification::by_id(1);

    assert_eq!(names(&repo.list_all(&spec)), vec!["1.a", "1.b"]);
    assert_eq!(repo.get_by_id(&spec).map(|p| p.name.as_str()), Some("a"));
}

#[test]
fn get_by_id_takes_first_of_several_matches() {
    let repo = one_two_three();

    let first = repo.get_by_id(&named_like("t"));
    assert_eq!(first.map(|p| p.id), Some(2));
}

#[test]
fn list_all_with_no_matches_is_empty_not_absent() {
    let repo = one_two_three();

    let none = repo.list_all(&named_like("z"));
    assert!(none.is_empty());
    assert_eq!(repo.count(&named_like("z")), 0);
    assert!(!repo.exists(&named_like("z")));
}

#[test]
fn repository_agrees_with_evaluator() {
    let repo = one_two_three();
    let spec = named_like("t").or(Specification::by_id(1));

    let evaluated = SpecificationEvaluator::evaluate(repo.as_slice(), &spec);
    assert_eq!(repo.list_all(&spec), evaluated);
    assert_eq!(repo.count(&spec), evaluated.len());
}

#[test]
fn includes_are_carried_but_inert() {
    let repo = one_two_three();
    let spec = Specification::by_id(3).include("supplier").include("category");

    let includes: Vec<&str> = spec.includes().iter().map(|i| i.path()).collect();
    assert_eq!(includes, vec!["supplier", "category"]);
    assert_eq!(names(&repo.list_all(&spec)), vec!["3.three"]);
}

#[test]
fn composed_specifications_filter_together() {
    let repo = one_two_three();

    let t_but_not_two = named_like("t").and(Specification::by_id(2).not());
    assert_eq!(names(&repo.list_all(&t_but_not_two)), vec!["3.three"]);

    let nothing = Specification::<Product>::all().not();
    assert!(repo.list_all(&nothing).is_empty());
}

#[test]
fn marked_id_field_drives_by_id() {
    let repo = InMemoryRepository::new(vec![
        CatalogEntry::new("SKU-1", 450),
        CatalogEntry::new("SKU-2", 1200),
    ]);

    let entry = repo.get_by_id(&Specification::by_id("SKU-2".to_string()));
    assert_eq!(entry.map(|e| e.price_cents), Some(1200));

    let cheap = Specification::new(|e: &CatalogEntry| e.price_cents < 1000);
    assert_eq!(repo.count(&cheap), 1);
}

#[cfg(feature = "json")]
#[test]
fn repository_loads_from_json() {
    let json = serde_json::to_string(&vec![Product::new(7, "seven"), Product::new(8, "eight")])
        .unwrap();
    let repo = InMemoryRepository::<Product>::from_json_str(&json).unwrap();

    assert_eq!(names(&repo.list_all(&Specification::all())), vec!["7.seven", "8.eight"]);
}

#[test]
fn generic_callers_only_need_the_repository_trait() {
    fn describe<R: Repository<Product>>(repo: &R, id: i32) -> String {
        match repo.get_by_id(&Specification::by_id(id)) {
            Some(product) => format!("Single element:{}", product.name),
            None => "Single element not found".to_string(),
        }
    }

    let repo = one_two_three();
    assert_eq!(describe(&repo, 2), "Single element:two");
    assert_eq!(describe(&repo, 99), "Single element not found");
}

#[test]
fn concurrent_readers_share_repository_and_specification() {
    let _ = tracing_subscriber::fmt::try_init();

    let repo = Arc::new(one_two_three());
    let spec = Arc::new(named_like("t"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let repo = Arc::clone(&repo);
            let spec = Arc::clone(&spec);
            thread::spawn(move || names(&repo.list_all(&spec)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["2.two", "3.three"]);
    }
}
