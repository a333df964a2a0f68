pub mod health;
pub mod images;
pub mod photos;
pub mod vocabulary;
