// tests/common/mod.rs

#![allow(dead_code)]

use trivia_api::{
    models::question::NewQuestion,
    store::{SqlStore, TriviaStore},
};

/// `(question, answer, difficulty, category)`; inserted in order, so the
/// n-th entry gets id n.
pub const QUESTIONS: [(&str, &str, i64, i64); 20] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, 5),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, 5),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, 2),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
    ("Which American artist was a pioneer of Abstract Expressionism?", "Jackson Pollock", 2, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("What was the Title of the first Harry Potter book?", "Philosopher's Stone", 2, 5),
];

/// Opens a private in-memory SQLite database with the schema applied.
///
/// Every Any connection to `sqlite::memory:` gets its own database, so the
/// pool is capped at a single connection.
pub async fn empty_store() -> SqlStore {
    let store = SqlStore::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open test database");
    store
        .ensure_schema()
        .await
        .expect("Failed to create schema");
    store
}

/// A store holding the six default categories and no questions.
pub async fn store_with_categories() -> SqlStore {
    let store = empty_store().await;
    store
        .seed_categories()
        .await
        .expect("Failed to seed categories");
    store
}

/// A store holding the default categories and every entry of [`QUESTIONS`].
pub async fn seeded_store() -> SqlStore {
    let store = store_with_categories().await;
    for (question, answer, difficulty, category) in QUESTIONS {
        store
            .insert_question(&NewQuestion {
                question: Some(question.to_string()),
                answer: Some(answer.to_string()),
                difficulty: Some(difficulty),
                category: Some(category),
            })
            .await
            .expect("Failed to seed question");
    }
    store
}
