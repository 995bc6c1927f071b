// tests/common/mod.rs

#![allow(dead_code)]

use trivia_api::{config::Config, db, db::TriviaStore, models::question::NewQuestion, routes, state::AppState};

/// (question, answer, category, difficulty)
pub const SEED: &[(&str, &str, i64, i64)] = &[
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("Which boxer was known as 'The Greatest' and 'The People's Champion'?", "Muhammad Ali", 4, 1),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the TITLE of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
];

/// Opens a fresh in-memory database, migrated and seeded with [`SEED`].
pub async fn seeded_store() -> TriviaStore {
    let store = db::connect(&Config::in_memory())
        .await
        .expect("Failed to open in-memory database");

    for (question, answer, category, difficulty) in SEED {
        store
            .insert_question(NewQuestion {
                question: Some(question.to_string()),
                answer: Some(answer.to_string()),
                category: Some(*category),
                difficulty: Some(*difficulty),
            })
            .await
            .expect("Failed to seed question");
    }

    store
}

/// Spawns the app on a random port.
/// Returns the base URL (e.g., "http://127.0.0.1:12345") and the store behind it.
pub async fn spawn_app() -> (String, TriviaStore) {
    let store = seeded_store().await;

    let state = AppState {
        store: store.clone(),
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, store)
}
