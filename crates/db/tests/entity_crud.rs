//! Integration tests for the repository layer of every resource family.
//!
//! Exercises create/read/update/delete against a real database, plus the
//! cascade and constraint behaviour the API relies on.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use quintet_core::drink::RecipePart;
use quintet_db::models::artist::CreateArtist;
use quintet_db::models::drink::{CreateDrink, UpdateDrink};
use quintet_db::models::recipe::{
    CreateIngredient, CreateRecipe, NewIngredient, UpdateIngredient, UpdateRecipe,
};
use quintet_db::models::show::CreateShow;
use quintet_db::models::todo::{CreateTodo, UpdateTodo};
use quintet_db::models::venue::{CreateVenue, UpdateVenue};
use quintet_db::repositories::{
    ArtistRepo, DrinkRepo, IngredientRepo, RecipeRepo, ShowRepo, TodoRepo, VenueRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_venue(name: &str, city: &str, state: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: None,
        phone: None,
        genres: None,
        image_link: None,
        facebook_link: None,
        website: None,
        seeking_talent: None,
        seeking_description: None,
    }
}

fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: None,
        genres: Some(vec!["Jazz".to_string()]),
        image_link: None,
        facebook_link: None,
        website: None,
        seeking_venue: None,
        seeking_description: None,
    }
}

fn new_ingredient(name: &str) -> NewIngredient {
    NewIngredient {
        name: name.to_string(),
        optional: None,
        measurement: Some(2),
        measurement_unit: Some("cups".to_string()),
    }
}

fn part(name: &str, color: &str, parts: i32) -> RecipePart {
    RecipePart {
        name: name.to_string(),
        color: color.to_string(),
        parts,
    }
}

fn is_db_code(err: &sqlx::Error, code: &str) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(code),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Test: todos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_todo_lifecycle(pool: PgPool) {
    let todo = TodoRepo::create(
        &pool,
        &CreateTodo {
            description: "Buy milk".to_string(),
            completed: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(todo.description, "Buy milk");
    assert!(!todo.completed);

    let updated = TodoRepo::update(
        &pool,
        todo.id,
        &UpdateTodo {
            completed: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.description, "Buy milk");

    assert!(TodoRepo::delete(&pool, todo.id).await.unwrap());
    assert!(!TodoRepo::delete(&pool, todo.id).await.unwrap());
    assert!(TodoRepo::find_by_id(&pool, todo.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_todo_returns_none(pool: PgPool) {
    let result = TodoRepo::update(&pool, 9999, &UpdateTodo::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: venues, artists and shows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_venue_partial_update_keeps_other_fields(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    assert!(venue.genres.is_empty());
    assert!(!venue.seeking_talent);

    let updated = VenueRepo::update(
        &pool,
        venue.id,
        &UpdateVenue {
            phone: Some("123-123-1234".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("123-123-1234"));
    assert_eq!(updated.name, "The Musical Hop");
    assert_eq!(updated.city, "San Francisco");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_venue_summaries_count_upcoming_shows_only(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Park Square", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Guns N Petals"))
        .await
        .unwrap();

    for offset in [-2, 3, 5] {
        ShowRepo::create(
            &pool,
            &CreateShow {
                venue_id: venue.id,
                artist_id: artist.id,
                start_time: Utc::now() + Duration::days(offset),
            },
        )
        .await
        .unwrap();
    }

    let summaries = VenueRepo::list_summaries(&pool).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].num_upcoming_shows, 2);

    let venue_shows = ShowRepo::list_for_venue(&pool, venue.id).await.unwrap();
    assert_eq!(venue_shows.len(), 3);
    assert_eq!(venue_shows[0].artist_name, "Guns N Petals");

    let artist_hits = ArtistRepo::search(&pool, Some("%petal%")).await.unwrap();
    assert_eq!(artist_hits.len(), 1);
    assert_eq!(artist_hits[0].num_upcoming_shows, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_venue_search_is_case_insensitive(pool: PgPool) {
    VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &new_venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &new_venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();

    let hits = VenueRepo::search(&pool, Some("%hop%")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "The Musical Hop");

    let all = VenueRepo::search(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_show_with_unknown_artist_is_fk_violation(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Hall", "Austin", "TX"))
        .await
        .unwrap();

    let err = ShowRepo::create(
        &pool,
        &CreateShow {
            venue_id: venue.id,
            artist_id: 424242,
            start_time: Utc::now(),
        },
    )
    .await
    .unwrap_err();
    assert!(is_db_code(&err, "23503"), "expected FK violation, got {err:?}");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_venue_cascades_to_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Gone Soon", "Austin", "TX"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Matt Quevedo"))
        .await
        .unwrap();
    ShowRepo::create(
        &pool,
        &CreateShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: Utc::now() + Duration::days(1),
        },
    )
    .await
    .unwrap();

    assert!(VenueRepo::delete(&pool, venue.id).await.unwrap());

    assert!(ShowRepo::list_detailed(&pool).await.unwrap().is_empty());
    assert!(ShowRepo::list_for_artist(&pool, artist.id)
        .await
        .unwrap()
        .is_empty());
    assert!(ArtistRepo::find_by_id(&pool, artist.id)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Test: drinks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_drink_recipe_round_trips_through_jsonb(pool: PgPool) {
    let drink = DrinkRepo::create(
        &pool,
        &CreateDrink {
            title: "Flat White".to_string(),
            recipe: vec![part("espresso", "brown", 1), part("milk", "white", 3)],
        },
    )
    .await
    .unwrap();

    let fetched = DrinkRepo::find_by_id(&pool, drink.id).await.unwrap().unwrap();
    assert_eq!(fetched.recipe.0.len(), 2);
    assert_eq!(fetched.recipe.0[1].name, "milk");
    assert_eq!(fetched.recipe.0[1].parts, 3);

    let renamed = DrinkRepo::update(
        &pool,
        drink.id,
        &UpdateDrink {
            title: Some("Cortado".to_string()),
            recipe: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.title, "Cortado");
    assert_eq!(renamed.recipe.0.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_drink_title_is_unique_violation(pool: PgPool) {
    let input = CreateDrink {
        title: "Water".to_string(),
        recipe: vec![part("water", "blue", 1)],
    };
    DrinkRepo::create(&pool, &input).await.unwrap();

    let err = DrinkRepo::create(&pool, &input).await.unwrap_err();
    assert!(is_db_code(&err, "23505"), "expected unique violation, got {err:?}");
}

// ---------------------------------------------------------------------------
// Test: recipes and ingredients
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_recipe_created_with_nested_ingredients(pool: PgPool) {
    let created = RecipeRepo::create(
        &pool,
        &CreateRecipe {
            name: "Pancakes".to_string(),
            procedure: Some("Mix and fry".to_string()),
            time: Some(20),
            ingredients: Some(vec![new_ingredient("flour"), new_ingredient("milk")]),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.ingredients.len(), 2);
    assert!(created
        .ingredients
        .iter()
        .all(|i| i.recipe_id == created.recipe.id && !i.optional));

    let listed = RecipeRepo::list_with_ingredients(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].ingredients[0].name, "flour");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_recipe_update_replaces_ingredient_set(pool: PgPool) {
    let created = RecipeRepo::create(
        &pool,
        &CreateRecipe {
            name: "Soup".to_string(),
            procedure: None,
            time: None,
            ingredients: Some(vec![new_ingredient("water"), new_ingredient("salt")]),
        },
    )
    .await
    .unwrap();

    let updated = RecipeRepo::update(
        &pool,
        created.recipe.id,
        &UpdateRecipe {
            time: Some(45),
            ingredients: Some(vec![new_ingredient("stock")]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.recipe.name, "Soup");
    assert_eq!(updated.recipe.time, Some(45));
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(updated.ingredients[0].name, "stock");

    let untouched = RecipeRepo::update(&pool, created.recipe.id, &UpdateRecipe::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.ingredients.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_recipe_cascades_to_ingredients(pool: PgPool) {
    let created = RecipeRepo::create(
        &pool,
        &CreateRecipe {
            name: "Toast".to_string(),
            procedure: None,
            time: Some(3),
            ingredients: Some(vec![new_ingredient("bread")]),
        },
    )
    .await
    .unwrap();
    let ingredient_id = created.ingredients[0].id;

    assert!(RecipeRepo::delete(&pool, created.recipe.id).await.unwrap());
    assert!(IngredientRepo::find_by_id(&pool, ingredient_id)
        .await
        .unwrap()
        .is_none());
    assert!(!RecipeRepo::delete(&pool, created.recipe.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ingredient_crud_and_fk(pool: PgPool) {
    let recipe = RecipeRepo::create(
        &pool,
        &CreateRecipe {
            name: "Salad".to_string(),
            procedure: None,
            time: None,
            ingredients: None,
        },
    )
    .await
    .unwrap();

    let ingredient = IngredientRepo::create(
        &pool,
        &CreateIngredient {
            recipe_id: recipe.recipe.id,
            name: "lettuce".to_string(),
            optional: Some(false),
            measurement: Some(1),
            measurement_unit: Some("head".to_string()),
        },
    )
    .await
    .unwrap();

    let updated = IngredientRepo::update(
        &pool,
        ingredient.id,
        &UpdateIngredient {
            optional: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.optional);
    assert_eq!(updated.name, "lettuce");

    let err = IngredientRepo::update(
        &pool,
        ingredient.id,
        &UpdateIngredient {
            recipe_id: Some(777_777),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));

    assert_eq!(IngredientRepo::list(&pool).await.unwrap().len(), 1);
    assert!(IngredientRepo::delete(&pool, ingredient.id).await.unwrap());
    assert!(IngredientRepo::list(&pool).await.unwrap().is_empty());
}
