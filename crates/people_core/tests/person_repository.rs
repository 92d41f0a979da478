use people_core::{Flux, InMemoryPersonRepository, Person, PersonRepository, PersonTable};
use std::sync::{Arc, Mutex};

fn seeded_repo() -> InMemoryPersonRepository {
    InMemoryPersonRepository::new(PersonTable::seed())
}

#[test]
fn get_by_id_block_returns_matching_person() {
    let repo = seeded_repo();

    let person = repo.get_by_id(4).block().unwrap().unwrap();
    assert_eq!(person.id(), 4);
    assert_eq!(person.first_name(), "Jesse");
    assert_eq!(person.last_name(), "Porter");
}

#[test]
fn get_by_id_returns_requested_record_for_every_seed_id() {
    let repo = seeded_repo();

    for id in 1..=4 {
        let person = repo.get_by_id(id).block().unwrap().unwrap();
        assert_eq!(person.id(), id);
    }
}

#[test]
fn get_by_id_unknown_is_empty_not_error() {
    let repo = seeded_repo();

    let result = repo.get_by_id(5).block();
    assert_eq!(result, Ok(None));
}

#[tokio::test]
async fn get_by_id_subscribe_delivers_one_person() {
    let repo = seeded_repo();
    let mut seen = Vec::new();

    repo.get_by_id(4)
        .subscribe(|person| seen.push(person))
        .await
        .unwrap();

    assert_eq!(seen, vec![Person::new(4, "Jesse", "Porter")]);
}

#[tokio::test]
async fn get_by_id_subscribe_on_miss_never_calls_consumer() {
    let repo = seeded_repo();
    let mut calls = 0;

    repo.get_by_id(5).subscribe(|_| calls += 1).await.unwrap();

    assert_eq!(calls, 0);
}

#[test]
fn get_by_id_map_extracts_first_name() {
    let repo = seeded_repo();

    let first_name = repo
        .get_by_id(4)
        .map(|person| person.first_name().to_string())
        .block()
        .unwrap();
    assert_eq!(first_name.as_deref(), Some("Jesse"));
}

#[test]
fn find_all_block_first_returns_first_seed_record() {
    let repo = seeded_repo();

    let first = repo.find_all().block_first().unwrap().unwrap();
    assert_eq!(first, Person::new(1, "Michael", "Weston"));
}

#[tokio::test]
async fn find_all_subscribe_emits_four_people_in_order() {
    let repo = seeded_repo();
    let flux = repo.find_all();
    let mut ids = Vec::new();

    let delivered = flux.subscribe(|person| ids.push(person.id())).await.unwrap();

    assert_eq!(delivered, 4);
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn find_all_replays_for_independent_subscribers() {
    let repo = seeded_repo();
    let flux = repo.find_all();

    let first_pass = flux.collect_blocking().unwrap();
    let second_pass = flux.collect_blocking().unwrap();
    let via_mono = flux.collect_list().block().unwrap().unwrap();

    assert_eq!(first_pass.len(), 4);
    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass, via_mono);
}

#[tokio::test]
async fn dropping_a_stream_does_not_affect_later_subscribers() {
    use futures::StreamExt;

    let flux = seeded_repo().find_all();
    let mut partial = flux.to_stream();
    let first = partial.next().await.unwrap().unwrap();
    assert_eq!(first.id(), 1);
    drop(partial);

    assert_eq!(flux.count().to_future().await, Ok(Some(4)));
}

#[test]
fn filter_then_next_finds_sam() {
    let repo = seeded_repo();

    let sam = repo
        .find_all()
        .filter(|person| person.id() == 3)
        .next()
        .block()
        .unwrap()
        .unwrap();
    assert_eq!(sam.first_name(), "Sam");
    assert_eq!(sam.last_name(), "Axe");
}

#[test]
fn filter_then_next_on_miss_is_silently_empty() {
    let repo = seeded_repo();
    let logged = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&logged);

    let result = repo
        .find_all()
        .filter(|person| person.id() == 8)
        .next()
        .do_on_next(move |person| sink.lock().unwrap().push(person.to_string()))
        .block();

    assert_eq!(result, Ok(None));
    assert!(logged.lock().unwrap().is_empty());
}

#[test]
fn filter_then_single_on_miss_recovers_with_default() {
    let repo = seeded_repo();
    let failures = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&failures);
    let single = repo.find_all().filter(|person| person.id() == 8).single();

    let err = single.block().unwrap_err();
    assert!(err.is_cardinality_violation());

    let recovered = single
        .do_on_error(move |_| *counter.lock().unwrap() += 1)
        .on_error_return(Person::with_id(8))
        .block();
    assert_eq!(recovered, Ok(Some(Person::with_id(8))));
    assert_eq!(*failures.lock().unwrap(), 1);
}

#[test]
fn queries_are_idempotent() {
    let repo = seeded_repo();
    let by_id: Vec<_> = (0..3).map(|_| repo.get_by_id(2).block()).collect();
    let all: Vec<_> = (0..3).map(|_| repo.find_all().collect_blocking()).collect();

    assert!(by_id.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(all.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(PersonTable::seed().len(), 4);
}

#[test]
fn flux_type_is_shareable_across_threads() {
    let flux: Flux<Person> = seeded_repo().find_all();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let flux = flux.clone();
            std::thread::spawn(move || flux.count().block())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(Some(4)));
    }
}
