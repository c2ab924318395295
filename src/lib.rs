pub mod config;
pub mod db;
pub mod element;
pub mod embedding;
pub mod rest_db;
pub mod seeding;
