use brightboard_core::model::account::ROLE_USER;
use brightboard_core::{Account, AccountService, ConnectionProvider};
use std::collections::HashSet;
use std::sync::mpsc;
use std::thread;

const WRITERS: usize = 4;
const INSERTS_PER_WRITER: usize = 8;

/// Parallel inserts against one database file must yield distinct generated
/// ids; the busy timeout absorbs writer lock contention.
#[test]
fn parallel_inserts_produce_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concurrent.db");

    // Bootstrap once up front so worker threads reopen an already-migrated
    // database.
    drop(ConnectionProvider::open(&path).unwrap());

    let (sender, receiver) = mpsc::channel::<i64>();
    let mut handles = Vec::new();

    for writer in 0..WRITERS {
        let path = path.clone();
        let sender = sender.clone();
        handles.push(thread::spawn(move || {
            let provider = ConnectionProvider::open(&path).unwrap();
            let service = AccountService::new(&provider);
            for n in 0..INSERTS_PER_WRITER {
                let created = service
                    .create_account(Account::new(
                        format!("writer-{writer}-{n}"),
                        format!("writer-{writer}-{n}@example.com"),
                        "pw",
                        ROLE_USER,
                    ))
                    .expect("insert should succeed under contention");
                sender.send(created.id).unwrap();
            }
        }));
    }
    drop(sender);

    for handle in handles {
        handle.join().unwrap();
    }

    let ids: Vec<i64> = receiver.iter().collect();
    assert_eq!(ids.len(), WRITERS * INSERTS_PER_WRITER);

    let distinct: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(distinct.len(), ids.len(), "generated ids must not collide");

    let provider = ConnectionProvider::open(&path).unwrap();
    let service = AccountService::new(&provider);
    assert_eq!(service.list_accounts().len(), WRITERS * INSERTS_PER_WRITER);
}
