//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lookups return `Option`
//! or an empty `Vec` for absent rows; deletes return whether a row went away.

pub mod artist_repo;
pub mod category_repo;
pub mod drink_repo;
pub mod ingredient_repo;
pub mod question_repo;
pub mod recipe_repo;
pub mod show_repo;
pub mod todo_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use category_repo::CategoryRepo;
pub use drink_repo::DrinkRepo;
pub use ingredient_repo::IngredientRepo;
pub use question_repo::QuestionRepo;
pub use recipe_repo::RecipeRepo;
pub use show_repo::ShowRepo;
pub use todo_repo::TodoRepo;
pub use venue_repo::VenueRepo;
