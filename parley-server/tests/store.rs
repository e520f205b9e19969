use anyhow::Result;
use parley_core::{Message, User};
use parley_server::MessageStore;
use std::sync::Arc;

fn message(name: &str, text: &str, seq: i64) -> Message {
    Message::new(User::new(name, true), text, 1, seq)
}

// Dopo l'avvio i messaggi utente sono esattamente quello di Aurelie
#[tokio::test]
async fn seeded_user_messages_contain_single_entry() -> Result<()> {
    let store = MessageStore::seeded();
    let messages = store.user_messages().await;

    assert_eq!(messages.len(), 1);
    let m = &messages[0];
    assert_eq!(m.sender.first_name, "Aurelie");
    assert_eq!(m.text, "Message from Lilly");
    assert_eq!(m.conversation_id, 1);
    assert_eq!(m.sequence_number, 2);
    Ok(())
}

#[tokio::test]
async fn seeded_sender_messages_are_in_insertion_order() -> Result<()> {
    let store = MessageStore::seeded();
    let messages = store.sender_messages();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, User::new("Ludovic", true));
    assert_eq!(messages[1].sender, User::new("Jessica", false));
    Ok(())
}

#[tokio::test]
async fn append_returns_list_ending_with_new_message() -> Result<()> {
    let store = MessageStore::seeded();
    let before = store.user_messages().await.len();

    let new = message("Lilly", "hello", 3);
    let after = store.append_user_message(new.clone()).await;

    assert_eq!(after.len(), before + 1);
    assert_eq!(after.last(), Some(&new));
    assert_eq!(store.user_messages().await, after);
    Ok(())
}

// Due append consecutivi: entrambi in coda, nell'ordine delle chiamate, senza toccare i precedenti
#[tokio::test]
async fn appends_keep_call_order_and_prior_entries() -> Result<()> {
    let store = MessageStore::seeded();
    let seed = store.user_messages().await;

    let first = message("Lilly", "first", 3);
    let second = message("Lilly", "second", 4);
    store.append_user_message(first.clone()).await;
    let all = store.append_user_message(second.clone()).await;

    assert_eq!(all.len(), seed.len() + 2);
    assert_eq!(&all[..seed.len()], &seed[..]);
    assert_eq!(all[seed.len()], first);
    assert_eq!(all[seed.len() + 1], second);
    Ok(())
}

#[tokio::test]
async fn sender_messages_unaffected_by_appends() -> Result<()> {
    let store = MessageStore::seeded();
    let before = store.sender_messages();

    store.append_user_message(message("Lilly", "one", 3)).await;
    store.append_user_message(message("Lilly", "two", 4)).await;

    assert_eq!(store.sender_messages(), before);
    Ok(())
}

// sequenceNumber duplicati non vengono rifiutati
#[tokio::test]
async fn duplicate_sequence_numbers_are_accepted() -> Result<()> {
    let store = MessageStore::new(Vec::new(), Vec::new());
    store.append_user_message(message("A", "x", 1)).await;
    let all = store.append_user_message(message("B", "y", 1)).await;

    assert_eq!(all.len(), 2);
    Ok(())
}

// N task concorrenti -> N nuovi messaggi, nessuno perso
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_are_all_retained() -> Result<()> {
    let store = Arc::new(MessageStore::seeded());
    let n = 64;

    let mut handles = Vec::with_capacity(n);
    for i in 0..n {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.append_user_message(message("Worker", &format!("msg {}", i), i as i64)).await
        }));
    }
    for h in handles {
        let returned = h.await?;
        // ogni risposta contiene almeno il seed e il proprio messaggio
        assert!(returned.len() >= 2);
    }

    let all = store.user_messages().await;
    assert_eq!(all.len(), n + 1);
    assert_eq!(all[0].sender.first_name, "Aurelie");
    for i in 0..n {
        let text = format!("msg {}", i);
        assert!(all.iter().any(|m| m.text == text), "missing {}", text);
    }
    Ok(())
}
